use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use vouch_schemagen::{Generator, WriteOutcome};

mod config;

#[derive(Debug, Parser)]
#[command(
    name = "schemagen",
    about = "Generates TypeValidate impls and shape locks for structs declared in a Rust file",
    version,
    long_about = None
)]
struct Cli {
    /// Structs to generate for (comma-separated, repeatable)
    #[arg(
        short = 't',
        long = "type",
        value_name = "NAMES",
        value_delimiter = ',',
        action = ArgAction::Append,
        required = true
    )]
    types: Vec<String>,

    /// Rust source file declaring the types
    #[arg(value_name = "SOURCE", env = "VOUCH_FILE")]
    source: PathBuf,

    /// Directory for `<stem>.schema.rs` instead of the source's directory
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Path of the runtime crate in generated code
    #[arg(long, value_name = "PATH")]
    crate_path: Option<String>,

    /// Extra container type names (comma-separated, repeatable)
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    container: Vec<String>,

    /// Extra type names known to implement TypeValidate (comma-separated, repeatable)
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    bearing: Vec<String>,

    /// Do not emit `impl Reflect` for generated types
    #[arg(long)]
    no_reflect: bool,

    /// Fail if the artifact on disk is missing or out of date; write nothing
    #[arg(long)]
    check: bool,

    /// Configuration file [default: ./schemagen.toml if present]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let overrides = config::Overrides {
        crate_path: cli.crate_path.clone(),
        emit_reflect: cli.no_reflect.then_some(false),
    };
    let mut settings = config::load(cli.config.as_deref(), &overrides)?;
    settings.containers.extend(cli.container.iter().cloned());
    settings.bearing.extend(cli.bearing.iter().cloned());

    let generator = Generator::new(settings);
    let artifact = generator
        .render(&cli.source, &cli.types, cli.out_dir.as_deref())
        .with_context(|| format!("generating from {}", cli.source.display()))?;

    if cli.check {
        artifact.check()?;
        println!("{} is up to date", artifact.path.display());
        return Ok(());
    }

    match artifact.write()? {
        WriteOutcome::Written => println!("wrote {}", artifact.path.display()),
        WriteOutcome::Unchanged => {
            info!(path = %artifact.path.display(), "artifact already current");
            println!("{} is up to date", artifact.path.display());
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("vouch_schemagen=info,schemagen=info"),
        _ => EnvFilter::new("vouch_schemagen=debug,schemagen=debug"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
