use crate::cli::Cli;
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub async fn run(cli: Cli) -> AppResult<()> {
    let ctx = AppContext::bootstrap(&cli);
    logging::init(ctx.verbose);

    if cli.list {
        return commands::list::run(&ctx);
    }

    commands::build::run(&ctx, cli.profile.as_deref()).await
}
