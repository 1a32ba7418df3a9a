use clap::Parser;
use vk_schema::config::cli::{read_input, validate_input};
use vk_schema::utils::{logger, validation::Validate};
use vk_schema::{CliConfig, ModelError};

fn run(config: &CliConfig) -> Result<usize, ModelError> {
    config.validate()?;

    let text = read_input(config)?;
    let records = validate_input(config, &text)?;

    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(records.len())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(count) => {
            tracing::info!("Validated {} {:?} record(s)", count, config.model);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Validation run failed: {}", e);
            match &e {
                ModelError::Validation(report) => eprintln!("{}", report),
                other => eprintln!("{}", other.user_friendly_message()),
            }
            std::process::exit(e.exit_code());
        }
    }
}
