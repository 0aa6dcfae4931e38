use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{Level, debug, warn};
use vcucfg::config::Settings;
use vcucfg::encode::{EncodeOverrides, EncodePlan, PLAN_KEYS};
use vcucfg::params::{
    EncoderParams, create_parameters, schema, supported_formats, supported_sections,
    unmapped_entries,
};
use vcucfg::parser::Document;
use vcucfg::report::{self, OutputFormat, SchemaReport};

pub fn run(cli: Cli) -> Result<()> {
    // Settings must load before logging starts, so a bad file is reported afterwards
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    init_logging(cli.verbose, &settings);
    if let Some(e) = settings_error {
        warn!("Using default settings: {:#}", e);
    }

    match cli.command {
        Commands::Parse { config, format } => {
            handle_parse(&config, format.unwrap_or(settings.output.format))
        }
        Commands::Params { config, format } => {
            handle_params(&config, format.unwrap_or(settings.output.format))
        }
        Commands::Sections { format } => handle_sections(format.unwrap_or(settings.output.format)),
        Commands::Formats => {
            print!("{}", report::render_formats(supported_formats()));
            Ok(())
        }
        Commands::Encode {
            cfg,
            input,
            output,
            first_picture,
            max_picture,
        } => handle_encode(
            &cfg,
            EncodeOverrides {
                input,
                output,
                first_picture,
                max_picture,
            },
        ),
        Commands::InitConfig => handle_init_config(),
    }
}

fn init_logging(verbose: u8, settings: &Settings) {
    let level = match verbose {
        0 => settings.log_level(),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_params(document: &Document, path: &Path) -> Result<EncoderParams> {
    for (section, key) in unmapped_entries(document) {
        if PLAN_KEYS.contains(&(section.as_str(), key.as_str())) {
            continue;
        }
        warn!("{}: [{}] {} is not used by any parameter", path.display(), section, key);
    }

    create_parameters(document)
        .with_context(|| format!("Failed to map parameters from {}", path.display()))
}

fn handle_parse(path: &Path, format: OutputFormat) -> Result<()> {
    let document = Document::from_file(path)?;
    debug!(sections = document.len(), "parsed {}", path.display());

    let out = match format {
        OutputFormat::Text => report::render_document(&document),
        structured => report::render_structured(&document, structured)?,
    };
    println!("{}", out.trim_end());
    Ok(())
}

fn handle_params(path: &Path, format: OutputFormat) -> Result<()> {
    let document = Document::from_file(path)?;
    let params = load_params(&document, path)?;

    let out = match format {
        OutputFormat::Text => report::render_params(&params),
        structured => report::render_structured(&params, structured)?,
    };
    println!("{}", out.trim_end());
    Ok(())
}

fn handle_sections(format: OutputFormat) -> Result<()> {
    let out = match format {
        OutputFormat::Text => report::render_sections(supported_sections()),
        structured => {
            let listing = SchemaReport {
                sections: supported_sections(),
                rules: schema(),
            };
            report::render_structured(&listing, structured)?
        }
    };
    println!("{}", out.trim_end());
    Ok(())
}

fn handle_encode(path: &Path, overrides: EncodeOverrides) -> Result<()> {
    let document = Document::from_file(path)?;
    let params = load_params(&document, path)?;
    let plan = EncodePlan::resolve(&document, overrides)
        .with_context(|| format!("Cannot encode with {}", path.display()))?;

    print!("{}", report::render_plan(&plan, &params));
    println!("Dry run: no encoder binding is attached, nothing was written");
    Ok(())
}

fn handle_init_config() -> Result<()> {
    if Settings::exists() {
        let path = Settings::config_path()?;
        let settings = Settings::load()?;
        println!("Settings loaded successfully from {}", path.display());
        println!("{:#?}", settings);
        return Ok(());
    }

    println!("Settings file missing, creating defaults...");
    let path = Settings::default()
        .save()
        .context("Failed to save default settings")?;
    println!("Default settings saved to {}", path.display());
    Ok(())
}
