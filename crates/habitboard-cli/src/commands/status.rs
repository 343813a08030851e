//! Status of one habit on one day.

use std::path::PathBuf;

use clap::Args;
use habitboard_core::progress::target_progress;

use super::context::{date_or_today, Context};

#[derive(Args)]
pub struct StatusArgs {
    /// Habit id
    #[arg(long)]
    habit: String,
    /// Day to classify (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<String>,
    /// Treat this day as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,
    /// Print JSON instead of the bare status tag
    #[arg(long)]
    json: bool,
}

pub fn run(snapshot: Option<PathBuf>, args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load(snapshot, args.today.as_deref())?;
    let date = match args.date.as_deref() {
        Some(value) => date_or_today(Some(value))?,
        None => ctx.window.today,
    };

    let habit = ctx.snapshot.require_habit(&args.habit)?;
    let tally = ctx.snapshot.index().tally(&habit.id, date);
    let status = ctx.window.status(habit, date, tally);

    if args.json {
        let out = serde_json::json!({
            "habit_id": habit.id,
            "date": date,
            "status": status,
            "progress": target_progress(tally, habit.target_count),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{status}");
    }
    Ok(())
}
