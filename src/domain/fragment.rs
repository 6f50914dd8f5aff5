use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::schema::GrammarError;

use super::types::{ComplexKind, DEFAULT_TYPE, NULL_TYPE};

/// Canonical, serializable description of a type or sub-type.
///
/// The JSON form follows the usual record/array/map/enum object layout with
/// `"type"` as the first key; primitives are bare strings and unions are bare
/// arrays of members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub enum SchemaFragment {
    /// A primitive type name. Unknown names are kept verbatim so that the
    /// validator, not the decoder, decides whether they are acceptable.
    Primitive(String),
    Array {
        items: Box<SchemaFragment>,
    },
    Map {
        keys: Box<SchemaFragment>,
        values: Box<SchemaFragment>,
    },
    Enum {
        symbols: Vec<String>,
    },
    Record {
        name: String,
        fields: Vec<Field>,
    },
    Union(Vec<SchemaFragment>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: SchemaFragment,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: SchemaFragment) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl SchemaFragment {
    pub fn primitive(name: impl Into<String>) -> Self {
        SchemaFragment::Primitive(name.into())
    }

    pub fn null() -> Self {
        SchemaFragment::Primitive(NULL_TYPE.to_string())
    }

    pub fn array(items: SchemaFragment) -> Self {
        SchemaFragment::Array {
            items: Box::new(items),
        }
    }

    pub fn map(keys: SchemaFragment, values: SchemaFragment) -> Self {
        SchemaFragment::Map {
            keys: Box::new(keys),
            values: Box::new(values),
        }
    }

    pub fn enumeration<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SchemaFragment::Enum {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn record(name: impl Into<String>, fields: Vec<Field>) -> Self {
        SchemaFragment::Record {
            name: name.into(),
            fields,
        }
    }

    /// Wrap into the two-member nullable union `[self, "null"]`.
    pub fn nullable(self) -> Self {
        SchemaFragment::Union(vec![self, SchemaFragment::null()])
    }

    /// Wrap only when `nullable` is set.
    pub fn wrap_nullable(self, nullable: bool) -> Self {
        self.wrap_nullable_at(nullable, false)
    }

    /// Like [`wrap_nullable`](Self::wrap_nullable), with `"null"` as the first
    /// member when `null_first` is set.
    pub fn wrap_nullable_at(self, nullable: bool, null_first: bool) -> Self {
        match (nullable, null_first) {
            (false, _) => self,
            (true, false) => self.nullable(),
            (true, true) => SchemaFragment::Union(vec![SchemaFragment::null(), self]),
        }
    }

    /// Split a nullable union back into its inner type.
    ///
    /// A two-member union with exactly one `"null"` member is treated as the
    /// nullable form of the other member, whichever position `"null"` takes.
    pub fn split_nullable(&self) -> (&SchemaFragment, bool) {
        if let SchemaFragment::Union(members) = self
            && let [first, second] = members.as_slice()
        {
            match (first.is_null(), second.is_null()) {
                (false, true) => return (first, true),
                (true, false) => return (second, true),
                _ => {}
            }
        }
        (self, false)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SchemaFragment::Primitive(name) if name == NULL_TYPE)
    }

    pub fn kind(&self) -> Option<ComplexKind> {
        match self {
            SchemaFragment::Primitive(_) => None,
            SchemaFragment::Array { .. } => Some(ComplexKind::Array),
            SchemaFragment::Map { .. } => Some(ComplexKind::Map),
            SchemaFragment::Enum { .. } => Some(ComplexKind::Enum),
            SchemaFragment::Record { .. } => Some(ComplexKind::Record),
            SchemaFragment::Union(_) => Some(ComplexKind::Union),
        }
    }

    /// The name a type picker shows for this fragment.
    pub fn type_name(&self) -> &str {
        match self {
            SchemaFragment::Primitive(name) => name,
            other => other.kind().map(ComplexKind::as_str).unwrap_or(DEFAULT_TYPE),
        }
    }

    pub fn items_type(&self) -> Option<&SchemaFragment> {
        match self {
            SchemaFragment::Array { items } => Some(items),
            _ => None,
        }
    }

    pub fn keys_type(&self) -> Option<&SchemaFragment> {
        match self {
            SchemaFragment::Map { keys, .. } => Some(keys),
            _ => None,
        }
    }

    pub fn values_type(&self) -> Option<&SchemaFragment> {
        match self {
            SchemaFragment::Map { values, .. } => Some(values),
            _ => None,
        }
    }

    pub fn symbols(&self) -> Option<&[String]> {
        match self {
            SchemaFragment::Enum { symbols } => Some(symbols),
            _ => None,
        }
    }

    pub fn variants(&self) -> Option<&[SchemaFragment]> {
        match self {
            SchemaFragment::Union(members) => Some(members),
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            SchemaFragment::Record { fields, .. } => Some(fields),
            _ => None,
        }
    }

    pub fn record_name(&self) -> Option<&str> {
        match self {
            SchemaFragment::Record { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            SchemaFragment::Primitive(name) => Value::String(name.clone()),
            SchemaFragment::Array { items } => json!({
                "type": "array",
                "items": items.to_value(),
            }),
            SchemaFragment::Map { keys, values } => json!({
                "type": "map",
                "keys": keys.to_value(),
                "values": values.to_value(),
            }),
            SchemaFragment::Enum { symbols } => json!({
                "type": "enum",
                "symbols": symbols,
            }),
            SchemaFragment::Record { name, fields } => {
                let fields = fields
                    .iter()
                    .map(|field| {
                        json!({
                            "name": field.name,
                            "type": field.ty.to_value(),
                        })
                    })
                    .collect::<Vec<_>>();
                json!({
                    "type": "record",
                    "name": name,
                    "fields": fields,
                })
            }
            SchemaFragment::Union(members) => {
                Value::Array(members.iter().map(SchemaFragment::to_value).collect())
            }
        }
    }
}

impl fmt::Display for SchemaFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

impl From<SchemaFragment> for Value {
    fn from(fragment: SchemaFragment) -> Self {
        fragment.to_value()
    }
}

impl From<&SchemaFragment> for Value {
    fn from(fragment: &SchemaFragment) -> Self {
        fragment.to_value()
    }
}

impl TryFrom<&Value> for SchemaFragment {
    type Error = GrammarError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        decode(value)
    }
}

impl TryFrom<Value> for SchemaFragment {
    type Error = GrammarError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        decode(&value)
    }
}

fn decode(value: &Value) -> Result<SchemaFragment, GrammarError> {
    match value {
        Value::String(name) => Ok(SchemaFragment::Primitive(name.clone())),
        Value::Array(members) => members
            .iter()
            .map(decode)
            .collect::<Result<Vec<_>, _>>()
            .map(SchemaFragment::Union),
        Value::Object(map) => decode_object(map),
        other => Err(GrammarError::Malformed(format!(
            "expected a type name, a union array or a type object, found {}",
            describe(other)
        ))),
    }
}

fn decode_object(map: &Map<String, Value>) -> Result<SchemaFragment, GrammarError> {
    let type_name = match map.get("type") {
        Some(Value::String(name)) => name.as_str(),
        // `{"type": ["int", "null"]}` and `{"type": {...}}` wrap another type.
        Some(nested @ (Value::Array(_) | Value::Object(_))) => return decode(nested),
        Some(other) => {
            return Err(GrammarError::Malformed(format!(
                "\"type\" must be a string, found {}",
                describe(other)
            )));
        }
        None => {
            return Err(GrammarError::Malformed(
                "type object is missing \"type\"".to_string(),
            ));
        }
    };

    match ComplexKind::from_type_name(type_name) {
        Some(ComplexKind::Array) => {
            let items = required(map, "items", type_name)?;
            Ok(SchemaFragment::array(decode(items)?))
        }
        Some(ComplexKind::Map) => {
            let keys = match map.get("keys") {
                Some(keys) => decode(keys)?,
                None => SchemaFragment::primitive(DEFAULT_TYPE),
            };
            let values = required(map, "values", type_name)?;
            Ok(SchemaFragment::map(keys, decode(values)?))
        }
        Some(ComplexKind::Enum) => {
            let symbols = required(map, "symbols", type_name)?
                .as_array()
                .ok_or_else(|| {
                    GrammarError::Malformed("enum \"symbols\" must be an array".to_string())
                })?
                .iter()
                .map(|symbol| {
                    symbol.as_str().map(str::to_string).ok_or_else(|| {
                        GrammarError::Malformed(format!(
                            "enum symbol must be a string, found {}",
                            describe(symbol)
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SchemaFragment::Enum { symbols })
        }
        Some(ComplexKind::Record) => {
            let name = required(map, "name", type_name)?
                .as_str()
                .ok_or_else(|| GrammarError::Malformed("record \"name\" must be a string".into()))?
                .to_string();
            let fields = required(map, "fields", type_name)?
                .as_array()
                .ok_or_else(|| {
                    GrammarError::Malformed("record \"fields\" must be an array".to_string())
                })?
                .iter()
                .map(decode_field)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SchemaFragment::Record { name, fields })
        }
        Some(ComplexKind::Union) => Err(GrammarError::Malformed(
            "unions are written as a JSON array of member types".to_string(),
        )),
        None => Ok(SchemaFragment::Primitive(type_name.to_string())),
    }
}

fn decode_field(value: &Value) -> Result<Field, GrammarError> {
    let object = value.as_object().ok_or_else(|| {
        GrammarError::Malformed(format!(
            "record field must be an object, found {}",
            describe(value)
        ))
    })?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| GrammarError::Malformed("record field is missing \"name\"".to_string()))?;
    let ty = object
        .get("type")
        .ok_or_else(|| GrammarError::Malformed(format!("field '{name}' is missing \"type\"")))?;
    Ok(Field::new(name, decode(ty)?))
}

fn required<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    type_name: &str,
) -> Result<&'a Value, GrammarError> {
    map.get(key).ok_or_else(|| {
        GrammarError::Malformed(format!("{type_name} type is missing \"{key}\""))
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
