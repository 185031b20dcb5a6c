//! Accrue interest for one note from CSV inputs
//!
//! Prints the note terms and change series, then the interest accrued from
//! disbursement to the evaluation date (today unless `--as-of` is given).
//! With `--output`, the daily accrual trace is written as CSV.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use note_accrual::note::load_note_terms;
use note_accrual::series::load_series;
use note_accrual::{AccrualConfig, AccrualEngine, NoteId, SeriesKind, Termination};

#[derive(Parser, Debug)]
#[command(name = "accrue_note", version, about = "Accrue simple act/360 interest for a note")]
struct Args {
    /// Note to evaluate
    #[arg(long)]
    note_id: u32,

    /// Note terms CSV (note_id,start_balance,start_date,start_rate)
    #[arg(long, default_value = "data/sample/notes.csv")]
    notes: PathBuf,

    /// Balance change CSV (id,note_id,value,effective_date)
    #[arg(long, default_value = "data/sample/balance_series.csv")]
    balance_series: PathBuf,

    /// Rate change CSV (id,note_id,value,effective_date)
    #[arg(long, default_value = "data/sample/rate_series.csv")]
    rate_series: PathBuf,

    /// Evaluation date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// JSON engine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every accrued day
    #[arg(long)]
    detailed: bool,

    /// Write the daily accrual trace to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let mut config = match &args.config {
        Some(path) => AccrualConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AccrualConfig::default(),
    };
    if args.detailed || args.output.is_some() {
        config.detailed_output = true;
    }

    let note_id = NoteId(args.note_id);
    let terms = load_note_terms(&args.notes, note_id)
        .with_context(|| format!("Failed to load note {} from {}", note_id, args.notes.display()))?;
    println!("Note {}: {}", note_id, terms);

    let balance_series = load_series(&args.balance_series, SeriesKind::Balance, note_id)
        .with_context(|| format!("Failed to load {}", args.balance_series.display()))?;
    let rate_series = load_series(&args.rate_series, SeriesKind::Rate, note_id)
        .with_context(|| format!("Failed to load {}", args.rate_series.display()))?;
    println!("{}", balance_series);
    println!("{}", rate_series);

    let evaluation_date = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    println!("Accruing interest to {}", evaluation_date);

    let engine = AccrualEngine::new(config);
    let result = engine
        .evaluate(&terms, &balance_series, &rate_series, evaluation_date)
        .context("Accrual rejected")?;

    if args.detailed {
        println!("{:<12} {:>16} {:>10} {:>12} {:>16}", "Date", "Balance", "Rate", "Interest", "Cumulative");
        for day in &result.daily {
            println!(
                "{:<12} {:>16.2} {:>9.4}% {:>12.4} {:>16.2}",
                day.date.to_string(),
                day.balance,
                day.rate * 100.0,
                day.interest,
                day.cumulative_interest
            );
        }
    }

    if let Some(path) = &args.output {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        for day in &result.daily {
            wtr.serialize(day)?;
        }
        wtr.flush()?;
        println!("Daily accrual written to {}", path.display());
    }

    let state = &result.final_state;
    println!("\nAccrual Summary:");
    println!("  Final balance:   {:.2}", state.balance);
    println!("  Final rate:      {:.4}%", state.rate * 100.0);
    println!("  Final date:      {}", state.date);
    println!("  Days accrued:    {}", result.days_accrued);
    println!("  Total interest:  {:.2}", result.cumulative_interest);
    if result.termination == Termination::BalanceExhausted {
        println!("  Balance reached zero before {}", evaluation_date);
    }

    log::debug!("Total time: {:?}", start.elapsed());
    Ok(())
}
