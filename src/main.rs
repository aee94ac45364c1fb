use clap::Parser;
use log::error;
use odczyt::cli::{Cli, Commands};
use odczyt::{MapperConfig, MapperError, MappingRequest, MappingService, Result, Target};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            if e.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => MapperConfig::load(path)?,
        None => MapperConfig::default(),
    };
    if cli.schema_dir.is_some() {
        config.schema_dir = cli.schema_dir;
    }

    match cli.command {
        Commands::Map {
            target,
            input,
            min_confidence,
            pretty,
        } => {
            if let Some(min_confidence) = min_confidence {
                config.min_confidence = min_confidence;
            }
            let request = MappingRequest {
                text: read_text(input.as_deref())?,
                target,
            };

            let service = MappingService::with_config(config);
            let response = service.map_request(&request)?;
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", json);
        }

        Commands::Fields { target } => {
            let target: Target = target.parse()?;
            let schema = MappingService::with_config(config).schema(target)?;
            for field in &schema.fields {
                println!(
                    "{:<24} {:<9} {} / {}{}",
                    field.code,
                    field.field_type,
                    field.pl_label,
                    field.en_label,
                    if field.required { " *" } else { "" }
                );
            }
        }
    }

    Ok(())
}

fn read_text(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| MapperError::InvalidInput(format!("Could not read {}: {}", path.display(), e))),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
