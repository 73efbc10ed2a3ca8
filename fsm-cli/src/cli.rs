use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fsm")]
#[command(about = "Field-service-management dashboard CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (overrides config.toml and FSM_API_BASE_URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
