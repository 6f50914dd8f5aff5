mod array_tests;
mod enum_tests;
mod host_tests;
mod union_tests;

use std::sync::Arc;

use crate::schema::TypeGrammar;

fn grammar() -> Arc<TypeGrammar> {
    TypeGrammar::shared()
}
