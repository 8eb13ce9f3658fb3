// phpgen-codegen: turns reflected parameter facts into PHP parameter declarations.

pub mod error;
pub mod config;
pub mod schema;
pub mod value;
pub mod type_map;
pub mod defaults;
pub mod param;
pub mod declaration;

use std::path::Path;

use crate::config::PhpgenConfig;
use crate::declaration::{DeclarationAssembler, Parameter};
use crate::error::CodegenResult;
use crate::param::DescriptorFactory;
use crate::schema::{ParametersFile, ReflectedParameter};

pub use crate::declaration::DeclarationFragment;
pub use crate::error::CodegenError;
pub use crate::param::ParameterDescriptor;

/// Run the generate command: one declaration per input parameter, in input order.
pub fn run_generate(config_path: Option<&Path>, input_path: &Path) -> CodegenResult<Vec<String>> {
    let config = match config_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            PhpgenConfig::load(path)?
        }
        None => PhpgenConfig::default(),
    };

    tracing::info!(path = %input_path.display(), "loading parameters");
    let input = ParametersFile::load(input_path)?;
    tracing::info!(count = input.parameters.len(), "loaded parameters");

    generate_declarations(&config, &input.parameters)
}

/// Build descriptors for every reflected parameter and render them.
pub fn generate_declarations<P: ReflectedParameter>(
    config: &PhpgenConfig,
    params: &[P],
) -> CodegenResult<Vec<String>> {
    let factory = DescriptorFactory::new(config.capabilities()?);
    let assembler = DeclarationAssembler::from_config(config);

    let declarations = params
        .iter()
        .map(|p| Parameter::from(factory.from_reflection(p)).declaration(&assembler))
        .collect();
    Ok(declarations)
}
