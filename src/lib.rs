pub mod app;
pub mod cli;
pub mod command;
pub mod commands;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod output;
pub mod profile;

use cli::Cli;
use error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    app::run(cli).await
}
