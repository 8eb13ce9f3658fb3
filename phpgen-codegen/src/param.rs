// Parameter descriptors and the factory that builds them from reflected facts.

use crate::config::TargetCapabilities;
use crate::defaults::DefaultValue;
use crate::schema::{DefaultLookup, ReflectedParameter};
use crate::type_map::extract_type;

/// Where a stored default value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultOrigin {
    /// Declared by the caller or resolved from reflection.
    #[default]
    Declared,
    /// Reflection could not resolve the default; a literal `null` stands in for it.
    Unresolved,
}

/// Everything needed to generate one parameter declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    name: String,
    /// Ordinal slot in the signature. Not used for generation.
    position: u32,
    type_name: Option<String>,
    passed_by_reference: bool,
    variadic: bool,
    /// Kept even for variadic parameters, where it is never rendered.
    default_value: Option<DefaultValue>,
    default_origin: DefaultOrigin,
}

impl ParameterDescriptor {
    pub fn builder(name: impl Into<String>) -> ParameterBuilder {
        ParameterBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn is_passed_by_reference(&self) -> bool {
        self.passed_by_reference
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default_value.as_ref()
    }

    pub fn default_origin(&self) -> DefaultOrigin {
        self.default_origin
    }
}

/// Builder for [`ParameterDescriptor`] from explicit fields.
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    descriptor: ParameterDescriptor,
}

impl ParameterBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            descriptor: ParameterDescriptor {
                name: name.into(),
                position: 0,
                type_name: None,
                passed_by_reference: false,
                variadic: false,
                default_value: None,
                default_origin: DefaultOrigin::Declared,
            },
        }
    }

    pub fn position(mut self, position: u32) -> Self {
        self.descriptor.position = position;
        self
    }

    pub fn type_name(mut self, ty: impl Into<String>) -> Self {
        self.descriptor.type_name = Some(ty.into());
        self
    }

    pub fn passed_by_reference(mut self, by_ref: bool) -> Self {
        self.descriptor.passed_by_reference = by_ref;
        self
    }

    pub fn variadic(mut self, variadic: bool) -> Self {
        self.descriptor.variadic = variadic;
        self
    }

    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.descriptor.default_value = Some(value.into());
        self.descriptor.default_origin = DefaultOrigin::Declared;
        self
    }

    /// Store a literal `null` default, marked as standing in for an unknown value.
    pub fn unresolved_default(mut self) -> Self {
        self.descriptor.default_value = Some(DefaultValue::null());
        self.descriptor.default_origin = DefaultOrigin::Unresolved;
        self
    }

    pub fn build(self) -> ParameterDescriptor {
        self.descriptor
    }
}

/// Builds descriptors from reflected parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorFactory {
    capabilities: TargetCapabilities,
}

impl DescriptorFactory {
    pub fn new(capabilities: TargetCapabilities) -> Self {
        Self { capabilities }
    }

    /// Facts are copied as-is; an empty name, for example, passes through unchanged.
    pub fn from_reflection(&self, param: &impl ReflectedParameter) -> ParameterDescriptor {
        let mut builder = ParameterDescriptor::builder(param.name())
            .position(param.position())
            .variadic(self.capabilities.supports_variadic && param.is_variadic())
            .passed_by_reference(param.is_passed_by_reference());

        if let Some(ty) = extract_type(param) {
            builder = builder.type_name(ty);
        }

        if param.is_optional() {
            builder = match param.default_value() {
                DefaultLookup::Resolved(value) => builder.default_value(value),
                DefaultLookup::Unresolvable => {
                    tracing::debug!(
                        parameter = param.name(),
                        position = param.position(),
                        "default value is not statically resolvable, using null"
                    );
                    builder.unresolved_default()
                }
            };
        }

        builder.build()
    }
}
