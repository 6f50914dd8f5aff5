use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use anyhow::{Context, Result};
use jsonschema::{Validator, validator_for};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::domain::SchemaFragment;

use super::GrammarError;

macro_rules! grammar_source {
    () => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/grammar/avro.grammar.json"
        ))
    };
}

static SHARED: LazyLock<Arc<TypeGrammar>> = LazyLock::new(|| {
    Arc::new(TypeGrammar::embedded().expect("invalid grammar/avro.grammar.json"))
});

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("name pattern"));

static FULL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").expect("full name pattern")
});

/// Pure accept/reject check applied to every candidate before it is committed.
pub trait CandidateValidator {
    /// `Err` carries the human-readable diagnostic.
    fn validate(&self, candidate: &SchemaFragment) -> Result<(), String>;
}

impl<F> CandidateValidator for F
where
    F: Fn(&SchemaFragment) -> Result<(), String>,
{
    fn validate(&self, candidate: &SchemaFragment) -> Result<(), String> {
        self(candidate)
    }
}

/// Two-stage type grammar: a compiled JSON-Schema shape check followed by the
/// naming and uniqueness rules that a shape grammar cannot express.
pub struct TypeGrammar {
    shape: Validator,
}

impl std::fmt::Debug for TypeGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeGrammar").finish_non_exhaustive()
    }
}

impl TypeGrammar {
    /// Compile the grammar shipped with the crate.
    pub fn embedded() -> Result<Self> {
        let grammar: Value =
            serde_json::from_str(grammar_source!()).context("type grammar is not valid JSON")?;
        Self::from_grammar(&grammar)
    }

    /// Compile a replacement shape grammar. The semantic rules still apply.
    pub fn from_grammar(grammar: &Value) -> Result<Self> {
        let shape = validator_for(grammar).context("failed to compile type grammar")?;
        Ok(Self { shape })
    }

    /// Process-wide instance of the embedded grammar.
    pub fn shared() -> Arc<TypeGrammar> {
        Arc::clone(&SHARED)
    }

    pub fn check(&self, candidate: &SchemaFragment) -> Result<(), GrammarError> {
        self.check_shape(&candidate.to_value())?;
        check_semantics(candidate)
    }

    /// Validate an arbitrary JSON document and decode it on success.
    pub fn check_document(&self, document: &Value) -> Result<SchemaFragment, GrammarError> {
        self.check_shape(document)?;
        let fragment = SchemaFragment::try_from(document)?;
        check_semantics(&fragment)?;
        Ok(fragment)
    }

    fn check_shape(&self, value: &Value) -> Result<(), GrammarError> {
        match self.shape.iter_errors(value).next() {
            Some(error) => Err(GrammarError::Shape(error.to_string())),
            None => Ok(()),
        }
    }
}

impl CandidateValidator for TypeGrammar {
    fn validate(&self, candidate: &SchemaFragment) -> Result<(), String> {
        self.check(candidate).map_err(|err| {
            debug!(candidate = %candidate, error = %err, "schema candidate rejected");
            err.to_string()
        })
    }
}

/// Empty string when `document` is an acceptable type, otherwise the diagnostic.
pub fn is_invalid(document: &Value) -> String {
    match TypeGrammar::shared().check_document(document) {
        Ok(_) => String::new(),
        Err(err) => err.to_string(),
    }
}

fn check_semantics(fragment: &SchemaFragment) -> Result<(), GrammarError> {
    let mut records = HashSet::new();
    walk(fragment, &mut records)
}

fn walk<'a>(
    fragment: &'a SchemaFragment,
    records: &mut HashSet<&'a str>,
) -> Result<(), GrammarError> {
    match fragment {
        SchemaFragment::Primitive(_) => Ok(()),
        SchemaFragment::Array { items } => walk(items, records),
        SchemaFragment::Map { keys, values } => {
            walk(keys, records)?;
            walk(values, records)
        }
        SchemaFragment::Enum { symbols } => match symbols.iter().find(|s| !NAME.is_match(s)) {
            Some(symbol) => Err(GrammarError::InvalidName(symbol.clone())),
            None => Ok(()),
        },
        SchemaFragment::Record { name, fields } => {
            if !FULL_NAME.is_match(name) {
                return Err(GrammarError::InvalidName(name.clone()));
            }
            if !records.insert(name.as_str()) {
                return Err(GrammarError::DuplicateRecord(name.clone()));
            }
            let mut seen = HashSet::new();
            for field in fields {
                if !NAME.is_match(&field.name) {
                    return Err(GrammarError::InvalidName(field.name.clone()));
                }
                if !seen.insert(field.name.as_str()) {
                    return Err(GrammarError::DuplicateField {
                        record: name.clone(),
                        field: field.name.clone(),
                    });
                }
                walk(&field.ty, records)?;
            }
            Ok(())
        }
        SchemaFragment::Union(members) => {
            let mut kinds = HashSet::new();
            for member in members {
                let key = member_key(member)?;
                if !kinds.insert(key.clone()) {
                    return Err(GrammarError::DuplicateUnionMember(key));
                }
                walk(member, records)?;
            }
            Ok(())
        }
    }
}

/// Identity of a union member for the one-member-per-kind rule.
fn member_key(member: &SchemaFragment) -> Result<String, GrammarError> {
    match member {
        SchemaFragment::Primitive(name) => Ok(name.clone()),
        SchemaFragment::Record { name, .. } => Ok(format!("record {name}")),
        SchemaFragment::Union(_) => match member.split_nullable() {
            (inner, true) if !matches!(inner, SchemaFragment::Union(_)) => {
                Ok(format!("[{}, null]", member_key(inner)?))
            }
            _ => Err(GrammarError::NestedUnion),
        },
        other => Ok(other.type_name().to_string()),
    }
}
