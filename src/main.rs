use clap::Parser;
use example_api::utils::{logger, validation::Validate};
use example_api::{random_number, CliConfig, ExampleHolder, FileConfig};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting example-api driver");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        match FileConfig::from_path(&path) {
            Ok(file) => {
                tracing::debug!("Applying overrides from {}", path);
                file.apply(&mut config);
            }
            Err(e) => {
                tracing::error!("❌ Failed to load config file {}: {}", path, e);
                eprintln!("❌ Failed to load config file {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut holder = ExampleHolder::new(1.0);
    holder.set_factor(config.factor)?;
    tracing::info!("Example factor set to {}", config.factor);

    tracing::info!(
        "Drawing {} samples from [{}, {}]",
        config.count,
        config.min,
        config.max
    );
    let mut samples = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        samples.push(random_number(config.min, config.max)?);
    }

    let lowest = samples.iter().min().copied().unwrap_or(config.min);
    let highest = samples.iter().max().copied().unwrap_or(config.min);

    println!(
        "✅ Drew {} samples from [{}, {}]",
        samples.len(),
        config.min,
        config.max
    );
    println!("📊 Observed spread: {} to {}", lowest, highest);
    if config.verbose {
        println!("{:?}", samples);
    }

    Ok(())
}
