use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use latent_code_extract::{ExtractOptions, Extractor, Validity};
use latent_model_config::ModelConfig;
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "latent-tools")]
#[command(about = "Text utilities for the latent search pipeline", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract clean function-level code from a model completion
    Extract(ExtractArgs),

    /// Check whether the input parses as valid Python
    Check(CheckArgs),

    /// Print the resolved model configuration as JSON
    Models(ModelsArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Drop imports and globals preceding the first function
    #[arg(long)]
    no_preface: bool,
}

#[derive(Args)]
struct CheckArgs {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,
}

#[derive(Args)]
struct ModelsArgs {
    /// Override the encoder model identifier
    #[arg(long)]
    encoder: Option<String>,

    /// Override the decoder model identifier
    #[arg(long)]
    decoder: Option<String>,

    /// Override the Matryoshka embedding dimension (0 = native dimension)
    #[arg(long)]
    matryoshka_dim: Option<usize>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract(args) => run_extract(&args),
        Commands::Check(args) => run_check(&args),
        Commands::Models(args) => run_models(&args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_extract(args: &ExtractArgs) -> Result<ExitCode> {
    let text = read_input(args.input.as_deref())?;
    let mut extractor = Extractor::python()?;

    let cleaned = extractor.extract_with(
        &text,
        ExtractOptions {
            include_preface: !args.no_preface,
        },
    );
    println!("{cleaned}");
    Ok(ExitCode::SUCCESS)
}

fn run_check(args: &CheckArgs) -> Result<ExitCode> {
    let text = read_input(args.input.as_deref())?;
    let mut extractor = Extractor::python()?;

    match extractor.check_syntax(&text) {
        Validity::Valid => {
            println!("ok");
            Ok(ExitCode::SUCCESS)
        }
        Validity::Invalid { line, reason } => {
            println!("invalid: line {line}: {reason}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_models(args: &ModelsArgs) -> Result<ExitCode> {
    let mut config = ModelConfig::default();
    if let Some(encoder) = &args.encoder {
        config = config.encoder(encoder);
    }
    if let Some(decoder) = &args.decoder {
        config = config.decoder(decoder);
    }
    if let Some(dim) = args.matryoshka_dim {
        // 0 selects the encoder's native dimension.
        config = config.matryoshka_dim(if dim == 0 { None } else { Some(dim) });
    }
    config.validate().map_err(anyhow::Error::msg)?;

    debug!("resolved model config: {config:?}");
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
