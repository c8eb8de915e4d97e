// src/options.rs
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary line
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}
