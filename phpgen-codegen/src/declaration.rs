// Parameter declaration assembly: type hint, markers, name and default clause.

use std::fmt;

use crate::config::PhpgenConfig;
use crate::defaults::DefaultValueRenderer;
use crate::param::ParameterDescriptor;
use crate::type_map::TypeClassifier;

/// Anything that renders to one entry of a PHP parameter list.
pub trait DeclarationFragment {
    fn declaration(&self, assembler: &DeclarationAssembler) -> String;
}

/// Composes declarations in the fixed order `<type >&...$name = <default>`.
#[derive(Debug, Clone, Default)]
pub struct DeclarationAssembler {
    classifier: TypeClassifier,
    renderer: DefaultValueRenderer,
}

impl DeclarationAssembler {
    pub fn new(classifier: TypeClassifier, renderer: DefaultValueRenderer) -> Self {
        Self {
            classifier,
            renderer,
        }
    }

    pub fn from_config(config: &PhpgenConfig) -> Self {
        Self::new(
            TypeClassifier::new(config.types.simple.iter().cloned()),
            DefaultValueRenderer::new(config.output.array_syntax),
        )
    }

    /// Render a descriptor; `...` and the default clause follow its variadic flag.
    pub fn generate(&self, descriptor: &ParameterDescriptor) -> String {
        let variadic = descriptor.is_variadic();
        let mut out = self.classifier.type_prefix(descriptor.type_name());
        if descriptor.is_passed_by_reference() {
            out.push('&');
        }
        if variadic {
            out.push_str("...");
        }
        out.push('$');
        out.push_str(descriptor.name());
        // Variadic parameters cannot carry a default.
        if !variadic {
            out.push_str(&self.renderer.render(descriptor.default_value()));
        }

        tracing::debug!(
            parameter = descriptor.name(),
            declaration = %out,
            "generated parameter declaration"
        );
        out
    }

    /// Comma-join fragments into a parameter list.
    pub fn parameter_list<F: DeclarationFragment>(&self, params: &[F]) -> String {
        params
            .iter()
            .map(|p| p.declaration(self))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl DeclarationFragment for ParameterDescriptor {
    fn declaration(&self, assembler: &DeclarationAssembler) -> String {
        assembler.generate(self)
    }
}

/// Visibility of a promoted constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kinds of parameter a generated signature can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Ordinary parameter.
    Positional,
    /// Collects trailing arguments; never rendered with a default.
    Variadic,
    /// Constructor parameter promoted to a property.
    Promoted { visibility: Visibility, readonly: bool },
}

/// A descriptor tagged with its kind.
///
/// Positional and variadic are derived from the descriptor's own flag, so the
/// kind can never disagree with what gets rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    kind: ParameterKind,
    descriptor: ParameterDescriptor,
}

impl Parameter {
    /// A promoted constructor parameter. A variadic descriptor still renders with `...`.
    pub fn promoted(visibility: Visibility, readonly: bool, descriptor: ParameterDescriptor) -> Self {
        Self {
            kind: ParameterKind::Promoted {
                visibility,
                readonly,
            },
            descriptor,
        }
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub fn descriptor(&self) -> &ParameterDescriptor {
        &self.descriptor
    }
}

impl From<ParameterDescriptor> for Parameter {
    fn from(descriptor: ParameterDescriptor) -> Self {
        let kind = if descriptor.is_variadic() {
            ParameterKind::Variadic
        } else {
            ParameterKind::Positional
        };
        Self { kind, descriptor }
    }
}

impl DeclarationFragment for Parameter {
    fn declaration(&self, assembler: &DeclarationAssembler) -> String {
        let body = assembler.generate(&self.descriptor);
        match self.kind {
            ParameterKind::Positional | ParameterKind::Variadic => body,
            ParameterKind::Promoted {
                visibility,
                readonly,
            } => {
                let readonly = if readonly { "readonly " } else { "" };
                format!("{visibility} {readonly}{body}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ArraySyntax, PhpValue};

    fn assembler() -> DeclarationAssembler {
        DeclarationAssembler::default()
    }

    #[test]
    fn test_marker_order() {
        let d = ParameterDescriptor::builder("items")
            .type_name("array")
            .passed_by_reference(true)
            .variadic(true)
            .build();
        assert_eq!(assembler().generate(&d), "array &...$items");
    }

    #[test]
    fn test_variadic_suppresses_default() {
        let d = ParameterDescriptor::builder("args")
            .variadic(true)
            .default_value(PhpValue::Int(5))
            .build();
        assert_eq!(assembler().generate(&d), "...$args");
        // still inspectable
        assert!(d.default_value().is_some());
    }

    #[test]
    fn test_default_clause() {
        let d = ParameterDescriptor::builder("name")
            .type_name("string")
            .default_value(PhpValue::from("abc"))
            .build();
        assert_eq!(assembler().generate(&d), "$name = 'abc'");
    }

    #[test]
    fn test_parameter_kinds() {
        let base = ParameterDescriptor::builder("id")
            .type_name(r"App\Id")
            .default_value(PhpValue::Null)
            .build();
        let a = assembler();

        assert_eq!(
            Parameter::from(base.clone()).declaration(&a),
            r"\App\Id $id = NULL"
        );
        assert_eq!(
            Parameter::promoted(Visibility::Private, true, base.clone()).declaration(&a),
            r"private readonly \App\Id $id = NULL"
        );
        assert_eq!(
            Parameter::promoted(Visibility::Public, false, base).declaration(&a),
            r"public \App\Id $id = NULL"
        );
    }

    #[test]
    fn test_from_descriptor_picks_kind() {
        let v = ParameterDescriptor::builder("rest").variadic(true).build();
        assert_eq!(Parameter::from(v).kind(), ParameterKind::Variadic);
        let p = ParameterDescriptor::builder("one").build();
        assert_eq!(Parameter::from(p).kind(), ParameterKind::Positional);
    }

    #[test]
    fn test_kind_follows_variadic_flag() {
        let variadic = ParameterDescriptor::builder("args")
            .variadic(true)
            .default_value(PhpValue::Int(5))
            .build();
        let a = assembler();

        let positional = Parameter::from(variadic.clone());
        assert_eq!(positional.declaration(&a), "...$args");
        assert_eq!(positional.descriptor(), &variadic);
        assert_eq!(
            Parameter::promoted(Visibility::Public, false, variadic).declaration(&a),
            "public ...$args"
        );

        let plain = ParameterDescriptor::builder("x").build();
        assert_eq!(Parameter::from(plain).declaration(&a), "$x");
    }

    #[test]
    fn test_parameter_list() {
        let params = vec![
            ParameterDescriptor::builder("a").type_name("int").build(),
            ParameterDescriptor::builder("b")
                .type_name("array")
                .default_value(PhpValue::list([PhpValue::Int(1)]))
                .build(),
            ParameterDescriptor::builder("c").variadic(true).build(),
        ];
        assert_eq!(
            assembler().parameter_list(&params),
            "$a, array $b = array(1), ...$c"
        );
        assert_eq!(assembler().parameter_list::<ParameterDescriptor>(&[]), "");
    }

    #[test]
    fn test_from_config() {
        let config: PhpgenConfig = toml::from_str(
            r#"
            [types]
            simple = []

            [output]
            array_syntax = "short"
            "#,
        )
        .unwrap();
        let a = DeclarationAssembler::from_config(&config);
        let d = ParameterDescriptor::builder("n")
            .type_name("int")
            .default_value(PhpValue::Array(Vec::new()))
            .build();
        assert_eq!(a.generate(&d), r"\int $n = []");
        assert_eq!(ArraySyntax::Short, config.output.array_syntax);
    }
}
