use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;
use crate::profile::PROFILES;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    if ctx.output.mode() == OutputMode::Text {
        for profile in PROFILES {
            println!(
                "{}\t{}\t{}",
                profile.name,
                profile.target,
                profile.dockerfile()
            );
        }
        return Ok(());
    }

    let text = format!("{} profiles", PROFILES.len());
    ctx.output.emit(&text, &PROFILES)
}
