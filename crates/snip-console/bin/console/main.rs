mod cli;

use crate::cli::{GeneratorArg, CLI};
use anyhow::anyhow;
use clap::Parser;
use snip_console::{telemetry, Console};
use snip_generator::{Generator, RandomGenerator, SeqGenerator};
use snip_registry::{CodePolicy, Registry, RegistryConfig};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    telemetry::init(config.log_format).map_err(|e| anyhow!(e))?;

    info!(
        base_url = %config.base_url,
        code_length = config.code_length,
        max_attempts = config.max_attempts,
        generator = %config.generator,
        "starting console shortener"
    );

    let registry_config = RegistryConfig::builder()
        .base_url(config.base_url)
        .policy(
            CodePolicy::builder()
                .length(usize::try_from(config.code_length)?)
                .max_attempts(usize::try_from(config.max_attempts).unwrap_or(usize::MAX))
                .build(),
        )
        .build();

    match config.generator {
        GeneratorArg::Random => {
            let generator = match config.seed {
                Some(seed) => RandomGenerator::seeded(seed),
                None => RandomGenerator::new(),
            };
            run_console(registry_config, generator)
        }
        GeneratorArg::Sequential => {
            if let Some(seed) = config.seed {
                warn!(seed, "seed is ignored by the sequential generator");
            }
            run_console(registry_config, SeqGenerator::new())
        }
    }
}

fn run_console<G: Generator>(config: RegistryConfig, generator: G) -> anyhow::Result<()> {
    let mut registry = Registry::with_config(config, generator);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    Console::new(stdin.lock(), stdout.lock()).run(&mut registry)?;
    Ok(())
}
