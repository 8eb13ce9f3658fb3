// Configuration types for phpgen-codegen, deserialized from phpgen.config.toml.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CodegenError, CodegenResult};
use crate::value::ArraySyntax;

/// First PHP release with `...$args` syntax.
const VARIADIC_MIN_VERSION: [u32; 3] = [5, 6, 0];

/// Types that never receive a hint in generated declarations.
pub const DEFAULT_SIMPLE_TYPES: &[&str] =
    &["int", "bool", "string", "float", "resource", "mixed", "object"];

/// Top-level config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PhpgenConfig {
    pub target: TargetConfig,
    pub types: TypesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// When set, overrides `supports_variadic` with a version comparison.
    pub php_version: Option<String>,
    pub supports_variadic: bool,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            php_version: None,
            supports_variadic: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TypesConfig {
    pub simple: Vec<String>,
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            simple: DEFAULT_SIMPLE_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub array_syntax: ArraySyntax,
}

impl PhpgenConfig {
    /// Load and parse a TOML config file.
    pub fn load(path: &Path) -> CodegenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| CodegenError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the target capabilities, honouring `php_version` when present.
    pub fn capabilities(&self) -> CodegenResult<TargetCapabilities> {
        match &self.target.php_version {
            Some(version) => TargetCapabilities::for_php_version(version),
            None => Ok(TargetCapabilities {
                supports_variadic: self.target.supports_variadic,
            }),
        }
    }
}

/// Syntax features available in the target PHP runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetCapabilities {
    pub supports_variadic: bool,
}

impl Default for TargetCapabilities {
    fn default() -> Self {
        Self {
            supports_variadic: true,
        }
    }
}

impl TargetCapabilities {
    /// Derive capabilities from a dotted version string such as "5.5.38" or "8.2".
    pub fn for_php_version(version: &str) -> CodegenResult<Self> {
        let parsed = parse_version(version)?;
        Ok(Self {
            supports_variadic: parsed >= VARIADIC_MIN_VERSION,
        })
    }
}

/// Parse up to three numeric components; missing components are 0.
fn parse_version(version: &str) -> CodegenResult<[u32; 3]> {
    let invalid = || CodegenError::InvalidVersion(version.to_string());

    let parts: Vec<&str> = version.trim().split('.').collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(invalid());
    }

    let mut out = [0u32; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| invalid())?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config: PhpgenConfig = toml::from_str("").unwrap();
        assert!(config.target.supports_variadic);
        assert_eq!(config.types.simple, DEFAULT_SIMPLE_TYPES);
        assert_eq!(config.output.array_syntax, ArraySyntax::Long);
    }

    #[test]
    fn test_parse_full_config() {
        let config: PhpgenConfig = toml::from_str(
            r#"
            [target]
            supports_variadic = false

            [types]
            simple = ["int", "string"]

            [output]
            array_syntax = "short"
            "#,
        )
        .unwrap();
        assert!(!config.capabilities().unwrap().supports_variadic);
        assert_eq!(config.types.simple, vec!["int", "string"]);
        assert_eq!(config.output.array_syntax, ArraySyntax::Short);
    }

    #[test]
    fn test_php_version_gate() {
        assert!(!TargetCapabilities::for_php_version("5.5.38").unwrap().supports_variadic);
        assert!(TargetCapabilities::for_php_version("5.6.0").unwrap().supports_variadic);
        assert!(TargetCapabilities::for_php_version("5.6").unwrap().supports_variadic);
        assert!(TargetCapabilities::for_php_version("8").unwrap().supports_variadic);
    }

    #[test]
    fn test_php_version_overrides_flag() {
        let config: PhpgenConfig = toml::from_str(
            r#"
            [target]
            php_version = "5.4"
            supports_variadic = true
            "#,
        )
        .unwrap();
        assert!(!config.capabilities().unwrap().supports_variadic);
    }

    #[test]
    fn test_invalid_version() {
        assert!(matches!(
            TargetCapabilities::for_php_version("seven"),
            Err(CodegenError::InvalidVersion(_))
        ));
        assert!(TargetCapabilities::for_php_version("1.2.3.4").is_err());
        assert!(TargetCapabilities::for_php_version("").is_err());
    }
}
