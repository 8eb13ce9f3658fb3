// Default parameter values → ` = <expr>` clauses.

use crate::value::{ArraySyntax, OutputMode, PhpValue, ValueGenerator};

/// A default value attached to a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// An expression node built by the caller.
    Expression(ValueGenerator),
    /// A raw value, wrapped in a [`ValueGenerator`] when rendered.
    Literal(PhpValue),
}

impl DefaultValue {
    pub fn null() -> Self {
        DefaultValue::Literal(PhpValue::Null)
    }
}

impl From<PhpValue> for DefaultValue {
    fn from(value: PhpValue) -> Self {
        DefaultValue::Literal(value)
    }
}

impl From<ValueGenerator> for DefaultValue {
    fn from(generator: ValueGenerator) -> Self {
        DefaultValue::Expression(generator)
    }
}

/// Renders default clauses on a single line so parameter lists stay on one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultValueRenderer {
    /// Array syntax for raw literals; expression nodes keep their own.
    array_syntax: ArraySyntax,
}

impl DefaultValueRenderer {
    pub fn new(array_syntax: ArraySyntax) -> Self {
        Self { array_syntax }
    }

    /// Empty for no default, otherwise ` = ` followed by the expression.
    pub fn render(&self, default: Option<&DefaultValue>) -> String {
        let Some(default) = default else {
            return String::new();
        };

        let mut generator = match default {
            DefaultValue::Expression(generator) => generator.clone(),
            DefaultValue::Literal(value) => {
                ValueGenerator::new(value.clone()).with_array_syntax(self.array_syntax)
            }
        };
        generator.set_output_mode(OutputMode::SingleLine);

        format!(" = {generator}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ArrayKey;

    #[test]
    fn test_absent_default() {
        assert_eq!(DefaultValueRenderer::default().render(None), "");
    }

    #[test]
    fn test_literals() {
        let r = DefaultValueRenderer::default();
        assert_eq!(r.render(Some(&PhpValue::Int(5).into())), " = 5");
        assert_eq!(r.render(Some(&PhpValue::from("abc").into())), " = 'abc'");
        assert_eq!(r.render(Some(&DefaultValue::null())), " = NULL");
        assert_eq!(r.render(Some(&PhpValue::Bool(false).into())), " = false");
    }

    #[test]
    fn test_expression_forced_single_line() {
        let node = ValueGenerator::new(PhpValue::Array(vec![
            (ArrayKey::Str("a".into()), PhpValue::Int(1)),
            (ArrayKey::Str("b".into()), PhpValue::Int(2)),
        ]))
        .with_output_mode(OutputMode::MultipleLine);
        let out = DefaultValueRenderer::default().render(Some(&node.into()));
        assert_eq!(out, " = array('a' => 1, 'b' => 2)");
    }

    #[test]
    fn test_string_with_line_break_stays_on_one_line() {
        let out = DefaultValueRenderer::default().render(Some(&PhpValue::from("a\nb").into()));
        assert_eq!(out, r#" = "a\nb""#);
    }

    #[test]
    fn test_expression_keeps_its_array_syntax() {
        let node = ValueGenerator::new(PhpValue::list([PhpValue::Int(1)]))
            .with_array_syntax(ArraySyntax::Short);
        let r = DefaultValueRenderer::new(ArraySyntax::Long);
        assert_eq!(r.render(Some(&node.into())), " = [1]");
    }

    #[test]
    fn test_literal_uses_configured_syntax() {
        let r = DefaultValueRenderer::new(ArraySyntax::Short);
        let value: DefaultValue = PhpValue::Array(Vec::new()).into();
        assert_eq!(r.render(Some(&value)), " = []");
    }
}
