mod fragment;
mod parser;
mod types;

pub use fragment::{Field, SchemaFragment};
pub use parser::{ParsedType, RowSeed, parse_fields, parse_type};
pub use types::{
    COMPLEX_TYPES, ComplexKind, DEFAULT_TYPE, NULL_TYPE, PICKER_TYPES, PRIMITIVE_TYPES,
    is_complex, is_primitive,
};
