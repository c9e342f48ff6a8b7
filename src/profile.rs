use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult};

const DOCKERFILE_PREFIX: &str = "Dockerfile.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub target: &'static str,
    pub dockerfile_suffix: &'static str,
}

impl Profile {
    /// Dockerfile path relative to the build context, e.g. `./Dockerfile.worker`.
    pub fn dockerfile(&self) -> String {
        format!("./{DOCKERFILE_PREFIX}{}", self.dockerfile_suffix)
    }
}

/// Lookup order is also the order valid names are listed in errors.
pub static PROFILES: &[Profile] = &[
    Profile {
        name: "bot",
        target: "confess",
        dockerfile_suffix: "worker",
    },
    Profile {
        name: "web",
        target: "confess-web",
        dockerfile_suffix: "web",
    },
];

pub fn names() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|profile| profile.name)
}

pub fn lookup(requested: Option<&str>) -> AppResult<&'static Profile> {
    let Some(requested) = requested else {
        debug!("no profile supplied");
        return Err(invalid_profile());
    };

    let normalized = requested.to_lowercase();
    let profile = PROFILES
        .iter()
        .find(|profile| profile.name == normalized)
        .ok_or_else(invalid_profile)?;

    debug!(requested, profile = profile.name, "resolved profile");
    Ok(profile)
}

/// Resolves the profile from a raw argument vector whose first entry is
/// the program name.
pub fn from_args<I, S>(args: I) -> AppResult<&'static Profile>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let requested = args.into_iter().nth(1);
    lookup(requested.as_ref().map(|arg| arg.as_ref()))
}

fn invalid_profile() -> AppError {
    AppError::InvalidProfile {
        choices: names().collect::<Vec<_>>().join(", "),
    }
}
