use serde::Serialize;

use crate::context::AppContext;
use crate::dispatch::BuildPlan;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub profile: &'static str,
    pub target: &'static str,
    pub dockerfile: String,
    pub command: String,
    pub dry_run: bool,
    pub exit_code: Option<i32>,
}

impl BuildReport {
    fn new(plan: &BuildPlan, dry_run: bool, exit_code: Option<i32>) -> Self {
        Self {
            profile: plan.profile.name,
            target: plan.profile.target,
            dockerfile: plan.profile.dockerfile(),
            command: plan.command.to_string(),
            dry_run,
            exit_code,
        }
    }
}

pub fn echo_line(plan: &BuildPlan) -> String {
    format!("Running: {}", plan.command)
}

pub async fn run(ctx: &AppContext, requested: Option<&str>) -> AppResult<()> {
    let plan = ctx.dispatcher().dispatch(requested).into_result()?;

    if ctx.dry_run {
        let report = BuildReport::new(&plan, true, None);
        return ctx.output.emit(&plan.command.to_string(), &report);
    }

    ctx.output.line(&echo_line(&plan));
    plan.command.run(ctx.output.mode()).await?;

    let report = BuildReport::new(&plan, false, Some(0));
    let text = format!("built {}", plan.profile.target);
    ctx.output.emit(&text, &report)
}
