use clap::Parser;
use resgen::{ResourceConfig, SkinFormat};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "resgen")]
#[command(about = "Generate a Rust module of named resource constants from an asset tree", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resource directory to scan
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Output directory for the generated module
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Namespace wrapping the generated container (e.g. game.assets)
    #[arg(short, long)]
    namespace: Option<String>,

    /// File name of the generated module
    #[arg(long)]
    file_name: Option<String>,

    /// How skin files are parsed
    #[arg(long, value_enum)]
    skin_format: Option<SkinFormat>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<ResourceConfig, resgen::ResourceError> {
        let mut config = match &self.config {
            Some(path) => ResourceConfig::load(path)?,
            None => ResourceConfig::default(),
        };

        if let Some(source) = &self.source {
            config.source_dir = source.clone();
        }
        if let Some(output) = &self.output {
            config.out_dir = output.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = Some(namespace.clone());
        }
        if let Some(file_name) = &self.file_name {
            config.file_name = file_name.clone();
        }
        if let Some(skin_format) = self.skin_format {
            config.skin_format = skin_format;
        }

        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), resgen::ResourceError> {
    let config = cli.resolve_config()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let report = resgen::generate(&config)?;

    if !report.diagnostics.is_empty() {
        eprintln!("Skipped {} item(s):", report.diagnostics.len());
        for diagnostic in &report.diagnostics {
            eprintln!("  {}", diagnostic);
        }
    }

    if !cli.quiet {
        eprintln!(
            "Success: {} — {} constant(s) in {} categor{}",
            report.output.display(),
            report.constant_count(),
            report.categories.len(),
            if report.categories.len() == 1 { "y" } else { "ies" }
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
