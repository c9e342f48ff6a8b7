use clap::{ArgAction, Parser};

use crate::command::DEFAULT_PROGRAM;

#[derive(Debug, Parser)]
#[command(
    name = "confess-build",
    version,
    about = "Build the confess container images"
)]
pub struct Cli {
    #[arg(help = "Build profile: bot or web (case-insensitive)")]
    pub profile: Option<String>,
    #[arg(
        long,
        env = "CONFESS_DOCKER",
        default_value = DEFAULT_PROGRAM,
        help = "Container build binary to invoke"
    )]
    pub docker: String,
    #[arg(long, help = "Print the build command without running it")]
    pub dry_run: bool,
    #[arg(long, conflicts_with = "profile", help = "List available profiles")]
    pub list: bool,
    #[arg(long, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
}
