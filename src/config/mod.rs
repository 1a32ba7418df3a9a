pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    AccessToken,
    User,
}

#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "vk-schema")]
#[command(about = "Validate access-token requests and user records from JSON")]
pub struct CliConfig {
    #[arg(long, short, default_value = "-", help = "JSON input file, '-' reads stdin")]
    pub input: String,

    #[arg(long, short, value_enum, default_value = "user")]
    pub model: ModelKind,

    #[arg(long, help = "Input is a list of records")]
    pub many: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)
    }
}
