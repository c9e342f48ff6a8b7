use crate::cli::Cli;
use crate::dispatch::Dispatcher;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub program: String,
    pub dry_run: bool,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(cli: &Cli) -> Self {
        let program = match cli.docker.trim() {
            "" => crate::command::DEFAULT_PROGRAM.to_string(),
            trimmed => trimmed.to_string(),
        };

        Self {
            verbose: cli.verbose,
            program,
            dry_run: cli.dry_run,
            output: Output::new(cli.json),
        }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.program.clone())
    }
}
