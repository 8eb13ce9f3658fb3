// Reflected parameter facts: the reflection-side interface and its JSON form.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CodegenError, CodegenResult};
use crate::value::PhpValue;

/// Outcome of asking reflection for a parameter's default value.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultLookup {
    Resolved(PhpValue),
    /// The default is computed at call time and cannot be captured statically.
    Unresolvable,
}

/// Facts a reflection layer reports about one parameter.
pub trait ReflectedParameter {
    fn name(&self) -> &str;
    fn position(&self) -> u32;
    fn is_optional(&self) -> bool;
    fn is_variadic(&self) -> bool;
    fn is_passed_by_reference(&self) -> bool;
    fn is_array_type(&self) -> bool;
    fn is_callable_type(&self) -> bool;
    fn resolved_class_name(&self) -> Option<&str>;
    fn default_value(&self) -> DefaultLookup;
}

// ---------------------------------------------------------------------------
// JSON input
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct ParametersFile {
    pub parameters: Vec<RawParameter>,
}

impl ParametersFile {
    pub fn load(path: &Path) -> CodegenResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| CodegenError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// One parameter as exported by a reflection dump.
#[derive(Debug, Clone, Deserialize)]
pub struct RawParameter {
    pub name: String,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub variadic: bool,
    #[serde(default)]
    pub by_reference: bool,
    #[serde(default)]
    pub array_type: bool,
    #[serde(default)]
    pub callable_type: bool,
    pub class_name: Option<String>,
    pub default: Option<DefaultFact>,
}

/// Serialized form of a default value lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultFact {
    Resolved(PhpValue),
    /// A constant expression such as `self::LIMIT`, kept verbatim.
    Constant(String),
    Unresolvable,
}

impl ReflectedParameter for RawParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn is_variadic(&self) -> bool {
        self.variadic
    }

    fn is_passed_by_reference(&self) -> bool {
        self.by_reference
    }

    fn is_array_type(&self) -> bool {
        self.array_type
    }

    fn is_callable_type(&self) -> bool {
        self.callable_type
    }

    fn resolved_class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    fn default_value(&self) -> DefaultLookup {
        // Reflection has nothing to report for a missing entry, same as an unresolvable one.
        match &self.default {
            Some(DefaultFact::Resolved(value)) => DefaultLookup::Resolved(value.clone()),
            Some(DefaultFact::Constant(expr)) => {
                DefaultLookup::Resolved(PhpValue::Constant(expr.clone()))
            }
            Some(DefaultFact::Unresolvable) | None => DefaultLookup::Unresolvable,
        }
    }
}
