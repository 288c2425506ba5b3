use anyhow::Context;
use persist_core::responses::DayWorkout;

use crate::context::AppContext;

/// Load a day's tree by program name and weekday, failing when absent.
pub async fn require_day(ctx: &AppContext, program: &str, day: &str) -> anyhow::Result<DayWorkout> {
    ctx.service
        .get_day_workout(program, day)
        .await?
        .with_context(|| format!("day not found: {program} / {day}"))
}

/// Fail early with a readable message for unknown exercise ids.
pub async fn require_exercise(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
    ctx.service
        .get_exercise(id)
        .await
        .with_context(|| format!("exercise not found: {id}"))?;
    Ok(())
}
