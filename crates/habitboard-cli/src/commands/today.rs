//! Daily summary across all habits.

use std::path::PathBuf;

use clap::Args;
use habitboard_core::aggregate_day;

use super::context::{date_or_today, Context};

#[derive(Args)]
pub struct TodayArgs {
    /// Day to summarize (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<String>,
    /// Treat this day as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,
}

pub fn run(snapshot: Option<PathBuf>, args: TodayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load(snapshot, args.today.as_deref())?;
    let date = match args.date.as_deref() {
        Some(value) => date_or_today(Some(value))?,
        None => ctx.window.today,
    };

    let index = ctx.snapshot.index();
    let summary = aggregate_day(&ctx.window, date, &ctx.snapshot.habits, &index.day(date));
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
