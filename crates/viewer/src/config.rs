#![forbid(unsafe_code)]

use clap::{Parser, ValueEnum};
use sb_core::board::{DEFAULT_BREAKPOINT, DEFAULT_DRAG_THRESHOLD, SessionConfig};
use sb_core::model::ProgressPolicy;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "sb_viewer=info,sb_storage=info,sb_core=info";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Progress and completion date follow the status.
    Derive,
    /// Status moves leave progress alone.
    Independent,
}

impl From<PolicyArg> for ProgressPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Derive => ProgressPolicy::Derive,
            PolicyArg::Independent => ProgressPolicy::Independent,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sb_viewer", version)]
#[command(about = "Local HTTP/JSON viewer for the solution board")]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "SOLUTION_BOARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on (0 picks a free port)
    #[arg(long, env = "SOLUTION_BOARD_PORT", default_value_t = 7878)]
    pub port: u16,

    /// Seed file (.json, .yaml or .yml); the embedded seed is used when absent
    #[arg(long, env = "SOLUTION_BOARD_SEED")]
    pub seed: Option<PathBuf>,

    /// Viewport widths below this render the narrow layout
    #[arg(long, env = "SOLUTION_BOARD_BREAKPOINT", default_value_t = DEFAULT_BREAKPOINT)]
    pub breakpoint: u32,

    /// Pointer travel in pixels before a press becomes a drag
    #[arg(long, env = "SOLUTION_BOARD_DRAG_THRESHOLD", default_value_t = DEFAULT_DRAG_THRESHOLD)]
    pub drag_threshold: f64,

    #[arg(
        long,
        env = "SOLUTION_BOARD_PROGRESS_POLICY",
        value_enum,
        default_value_t = PolicyArg::Derive
    )]
    pub progress_policy: PolicyArg,

    #[arg(
        long,
        env = "SOLUTION_BOARD_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("--host must not be empty".to_string());
        }
        if self.breakpoint == 0 {
            return Err("--breakpoint must be greater than zero".to_string());
        }
        if !(self.drag_threshold.is_finite() && self.drag_threshold > 0.0) {
            return Err("--drag-threshold must be a positive number".to_string());
        }
        Ok(())
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            breakpoint: self.breakpoint,
            drag_threshold: self.drag_threshold,
            ..SessionConfig::default()
        }
    }

    pub fn policy(&self) -> ProgressPolicy {
        self.progress_policy.into()
    }
}
