use clap::Parser;
use log::{warn, LevelFilter};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use ttxml::application::{init::init, ConfigService, TagBatchService};
use ttxml::cli::{format_collisions, format_config_list, format_file_report, Cli, Commands};
use ttxml::domain::{Language, OutputMode, TaggingProvider, UnavailableTagger};
use ttxml::error::TtxmlError;
use ttxml::infrastructure::{build_provider, collect_inputs, Config};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_level.as_deref());

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// `RUST_LOG` applies unless `--log-level` is given; the default is `warn`.
fn init_logging(level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(LevelFilter::from_str(level).unwrap_or(LevelFilter::Warn));
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), TtxmlError> {
    match cli.command {
        Commands::Tag {
            inputs,
            lang,
            mode,
            output,
            recursive,
        } => {
            let mut config = Config::discover(cli.config.as_deref())?;
            if let Some(lang) = lang {
                config.language = Language::from_str(&lang)?;
            }
            if let Some(mode) = mode {
                config.mode = OutputMode::from_str(&mode)?;
            }

            let provider = load_provider(&config)?;
            let files = collect_inputs(&inputs, recursive);
            println!(
                "Tagging {} file(s) as {} with {}",
                files.len(),
                config.language.display_name(),
                provider.name()
            );

            let service = TagBatchService::new(provider.as_ref(), config.language, config.mode);
            let report = service.execute_with_progress(&files, |idx, total, file| {
                println!("{}", format_file_report(idx, total, file));
            })?;

            let output = output.unwrap_or_else(|| PathBuf::from(config.language.archive_file_name()));
            fs::write(&output, &report.archive.bytes)?;

            eprint!("{}", format_collisions(&report.archive.collisions));
            println!(
                "Wrote {} of {} file(s) to {}",
                report.processed_count(),
                report.files.len(),
                output.display()
            );
            Ok(())
        }
        Commands::Init { path, lang } => {
            let language = Language::from_str(&lang)?;
            let config_path = init(&path, language)?;
            println!("Created {}", config_path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Config::locate(cli.config.as_deref())?);

            if list {
                print!("{}", format_config_list(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: ttxml config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: {}",
                    ttxml::application::manage_config::CONFIG_KEYS.join(", ")
                );
                Ok(())
            }
        }
    }
}

/// Build the provider once. Unsupported languages abort the run; a provider
/// that fails to load degrades to one that yields no tokens.
fn load_provider(config: &Config) -> Result<Box<dyn TaggingProvider>, TtxmlError> {
    match build_provider(config.language, config) {
        Ok(provider) => Ok(provider),
        Err(e @ TtxmlError::UnsupportedLanguage(_)) => Err(e),
        Err(e) => {
            warn!("{} tagger could not be loaded: {}", config.language, e);
            eprintln!("Warning: {}", e.display_with_suggestions());
            Ok(Box::new(UnavailableTagger::new(e.to_string())))
        }
    }
}
