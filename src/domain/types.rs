use std::fmt;

/// Primitive type names accepted by the grammar.
pub const PRIMITIVE_TYPES: [&str; 8] = [
    "null", "boolean", "int", "long", "float", "double", "bytes", "string",
];

/// Type names that need a nested row editor.
pub const COMPLEX_TYPES: [&str; 5] = ["array", "enum", "map", "record", "union"];

/// The null primitive, used for the nullable-union encoding `[T, "null"]`.
pub const NULL_TYPE: &str = "null";

/// Type used for freshly inserted rows and default slots.
pub const DEFAULT_TYPE: &str = "string";

/// Options offered by type pickers, in display order.
pub const PICKER_TYPES: [&str; 13] = [
    "array", "boolean", "bytes", "double", "enum", "float", "int", "long", "map", "null",
    "record", "string", "union",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexKind {
    Record,
    Array,
    Map,
    Enum,
    Union,
}

impl ComplexKind {
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "record" => Some(ComplexKind::Record),
            "array" => Some(ComplexKind::Array),
            "map" => Some(ComplexKind::Map),
            "enum" => Some(ComplexKind::Enum),
            "union" => Some(ComplexKind::Union),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComplexKind::Record => "record",
            ComplexKind::Array => "array",
            ComplexKind::Map => "map",
            ComplexKind::Enum => "enum",
            ComplexKind::Union => "union",
        }
    }
}

impl fmt::Display for ComplexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `name` denotes a type that is edited through a nested row editor.
pub fn is_complex(name: &str) -> bool {
    ComplexKind::from_type_name(name).is_some()
}

pub fn is_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&name)
}
