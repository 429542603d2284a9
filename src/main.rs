mod cli;

use jfifscope::{config, inspect_file, report};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "jfifscope=trace,jfifscope_core=trace".to_string()
        } else {
            config
                .log
                .filter
                .clone()
                .unwrap_or_else(|| "jfifscope=warn,jfifscope_core=warn".to_string())
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect { file, json } => inspect(&file, &config, json),
        Commands::Validate { file } => validate(&file, &config),
        Commands::Markers => {
            print!("{}", report::marker_table());
            Ok(())
        }
        Commands::InitConfig { path, force } => init_config(&path, force),
        Commands::Version => {
            println!("jfifscope {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn inspect(file: &Path, config: &config::Config, json: bool) -> Result<()> {
    let (report, _) = inspect_file(file, config)?;

    if json || config.output.format == config::OutputFormat::Json {
        println!("{}", report.to_json(config.output.pretty)?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}

fn validate(file: &Path, config: &config::Config) -> Result<()> {
    match inspect_file(file, config) {
        Ok((report, _)) => {
            println!("✓ {} is valid ({} segments)", report.name, report.segments.len());
            if !report.is_conforming {
                println!("  No JFIF APP0 header");
            }
            Ok(())
        }
        Err(e) => {
            println!("✗ {}: {:#}", file.display(), e);
            std::process::exit(1);
        }
    }
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Config file already exists: {:?} (use --force to overwrite)", path);
    }

    config::save_config(path, &config::Config::default())?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
