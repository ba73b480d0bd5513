use clap::{Parser, ValueEnum};
use snip_console::LogFormat;
use snip_core::{DEFAULT_BASE_URL, DEFAULT_CODE_LENGTH};
use std::fmt::{Display, Formatter};

pub const BASE_URL_ENV: &str = "SNIP_BASE_URL";
pub const CODE_LENGTH_ENV: &str = "SNIP_CODE_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "SNIP_MAX_ATTEMPTS";
pub const GENERATOR_ENV: &str = "SNIP_GENERATOR";
pub const SEED_ENV: &str = "SNIP_SEED";
pub const LOG_FORMAT_ENV: &str = "SNIP_LOG_FORMAT";

pub const DEFAULT_MAX_ATTEMPTS: u64 = snip_registry::DEFAULT_MAX_ATTEMPTS as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "random")]
    Random,
    #[value(name = "sequential")]
    Sequential,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snip", about = "Interactive console URL shortener")]
pub struct CLI {
    /// Prefix of every issued short URL.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Length of newly issued codes.
    #[arg(
        long,
        env = CODE_LENGTH_ENV,
        default_value_t = DEFAULT_CODE_LENGTH as u64,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub code_length: u64,

    /// Colliding draws tolerated before codes grow by one character.
    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub max_attempts: u64,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    /// Seed for the random generator; drawn from the OS when absent.
    #[arg(long, env = SEED_ENV)]
    pub seed: Option<u64>,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}
