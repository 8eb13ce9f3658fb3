// phpgen-cli: CLI entry point for phpgen tools (generate, check-config).

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use phpgen_codegen::config::PhpgenConfig;
use phpgen_codegen::error::CodegenResult;

#[derive(Parser)]
#[command(name = "phpgen", about = "phpgen — PHP parameter declaration generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the parameter list described by a reflection dump.
    Generate {
        /// Path to phpgen.config.toml. Built-in defaults are used when omitted.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Path to the JSON reflection dump.
        #[arg(long)]
        input: PathBuf,
        /// Print one declaration per line instead of a comma-joined list.
        #[arg(long)]
        one_per_line: bool,
    },
    /// Load a config file and print the resolved settings.
    CheckConfig {
        /// Path to phpgen.config.toml.
        #[arg(long, default_value = "phpgen.config.toml")]
        config: PathBuf,
    },
}

fn main() {
    // PHPGEN_LOG controls verbosity, default "info". Logs go to stderr.
    let filter = EnvFilter::try_from_env("PHPGEN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { config, input, one_per_line } => {
            run_generate(config.as_deref(), &input, one_per_line)
        }
        Commands::CheckConfig { config } => run_check_config(&config),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_generate(config: Option<&Path>, input: &Path, one_per_line: bool) -> CodegenResult<()> {
    let declarations = phpgen_codegen::run_generate(config, input)?;
    if one_per_line {
        for declaration in &declarations {
            println!("{declaration}");
        }
    } else {
        println!("{}", declarations.join(", "));
    }
    tracing::info!(count = declarations.len(), "wrote parameter declarations");
    Ok(())
}

fn run_check_config(path: &Path) -> CodegenResult<()> {
    let config = PhpgenConfig::load(path)?;
    let capabilities = config.capabilities()?;

    println!("config: {}", path.display());
    println!("  supports_variadic: {}", capabilities.supports_variadic);
    println!("  simple types: {}", config.types.simple.join(", "));
    println!("  array syntax: {:?}", config.output.array_syntax);
    Ok(())
}
