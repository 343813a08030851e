//! Current streak of fully completed days.

use std::path::PathBuf;

use clap::Args;
use habitboard_core::StreakCalculator;

use super::context::{date_or_today, Context};

#[derive(Args)]
pub struct StreakArgs {
    /// Last day of the streak (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<String>,
    /// Treat this day as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,
    /// Days to examine (default: streak.max_lookback_days)
    #[arg(long)]
    max_lookback: Option<u32>,
}

pub fn run(snapshot: Option<PathBuf>, args: StreakArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load(snapshot, args.today.as_deref())?;
    let reference = match args.date.as_deref() {
        Some(value) => date_or_today(Some(value))?,
        None => ctx.window.today,
    };
    let lookback = args
        .max_lookback
        .unwrap_or(ctx.config.streak.max_lookback_days);

    let index = ctx.snapshot.index();
    let result = StreakCalculator::with_lookback(lookback).current_streak(
        &ctx.window,
        reference,
        &ctx.snapshot.habits,
        &index,
    );
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
