// Reflected type facts → PHP type hint.

use std::collections::HashSet;

use crate::config::DEFAULT_SIMPLE_TYPES;
use crate::schema::ReflectedParameter;

const NAMESPACE_SEPARATOR: char = '\\';

/// Keywords rendered as bare type hints (compared case-insensitively).
const INTERNAL_TYPES: &[&str] = &["array", "callable"];

/// Derive the declared type of a reflected parameter.
///
/// First match wins: array, callable, resolved class name.
pub fn extract_type(param: &impl ReflectedParameter) -> Option<String> {
    if param.is_array_type() {
        return Some("array".into());
    }
    if param.is_callable_type() {
        return Some("callable".into());
    }
    param.resolved_class_name().map(str::to_string)
}

/// How a declared type is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint<'a> {
    /// No hint at all.
    Simple,
    /// Bare keyword, original casing kept.
    Internal(&'a str),
    /// Class name with the namespace separators trimmed from both ends.
    Qualified(&'a str),
}

impl TypeHint<'_> {
    /// Prefix placed before the parameter markers, including the trailing space.
    pub fn prefix(&self) -> String {
        match self {
            TypeHint::Simple => String::new(),
            TypeHint::Internal(keyword) => format!("{keyword} "),
            TypeHint::Qualified(name) => format!("{NAMESPACE_SEPARATOR}{name} "),
        }
    }
}

/// Decides which types need a hint, using a configurable set of "simple" types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeClassifier {
    simple: HashSet<String>,
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SIMPLE_TYPES.iter().copied())
    }
}

impl TypeClassifier {
    pub fn new<I, S>(simple: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            simple: simple.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn is_simple(&self, ty: &str) -> bool {
        self.simple.contains(ty)
    }

    pub fn classify<'a>(&self, ty: Option<&'a str>) -> TypeHint<'a> {
        let Some(ty) = ty.filter(|t| !t.is_empty()) else {
            return TypeHint::Simple;
        };
        if self.is_simple(ty) {
            TypeHint::Simple
        } else if is_internal_type(ty) {
            TypeHint::Internal(ty)
        } else {
            TypeHint::Qualified(ty.trim_matches(NAMESPACE_SEPARATOR))
        }
    }

    pub fn type_prefix(&self, ty: Option<&str>) -> String {
        self.classify(ty).prefix()
    }
}

pub fn is_internal_type(ty: &str) -> bool {
    INTERNAL_TYPES.iter().any(|k| k.eq_ignore_ascii_case(ty))
}
