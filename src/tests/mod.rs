mod app;
mod form;
mod schema;
mod wrangler;
