//! Year-long calendar grid for one habit.

use std::path::PathBuf;

use chrono::Datelike;
use clap::Args;
use habitboard_core::YearGridBuilder;

use super::context::Context;

#[derive(Args)]
pub struct GridArgs {
    /// Habit id
    #[arg(long)]
    habit: String,
    /// Calendar year (default: the current year)
    #[arg(long)]
    year: Option<i32>,
    /// Treat this day as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,
    /// Print JSON instead of the ASCII heat map
    #[arg(long)]
    json: bool,
}

pub fn run(snapshot: Option<PathBuf>, args: GridArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load(snapshot, args.today.as_deref())?;
    let habit = ctx.snapshot.require_habit(&args.habit)?;
    let year = args.year.unwrap_or_else(|| ctx.window.today.year());

    let grid = YearGridBuilder::with_target(habit.target_count).build(
        year,
        &habit.id,
        &ctx.snapshot.instances_for(&habit.id),
        ctx.window.start_for(habit),
        ctx.window.today,
    )?;

    if args.json || ctx.config.display.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        println!("{}", grid.render_ascii());
    }
    Ok(())
}
