//! Turns a requested profile name into a runnable build.
//!
//! A [`Dispatcher`] is the `AwaitingInput` state. [`Dispatcher::dispatch`]
//! consumes it and yields one of the two terminal states, so a dispatcher
//! can't be reused once it has decided.

use tracing::debug;

use crate::command::BuildCommand;
use crate::error::{AppError, AppResult};
use crate::profile::{self, Profile};

#[derive(Debug, Clone)]
pub struct Dispatcher {
    program: String,
}

#[derive(Debug)]
pub enum Dispatch {
    Dispatched(BuildPlan),
    Failed(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub profile: &'static Profile,
    pub command: BuildCommand,
}

impl Dispatcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn dispatch(self, requested: Option<&str>) -> Dispatch {
        match profile::lookup(requested) {
            Ok(profile) => Dispatch::Dispatched(BuildPlan {
                profile,
                command: BuildCommand::for_profile(self.program, profile),
            }),
            Err(err) => {
                debug!(requested, "{err}");
                Dispatch::Failed(err)
            }
        }
    }
}

impl Dispatch {
    pub fn into_result(self) -> AppResult<BuildPlan> {
        match self {
            Self::Dispatched(plan) => Ok(plan),
            Self::Failed(err) => Err(err),
        }
    }
}
