use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use chronos_inn::inn::DEFAULT_NAME;
use chronos_inn::{EveningConfig, Inn, load_evening};
use chronos_sched::clock::format_time_of_day;
use chronos_sched::{Firing, RunSummary, SchedConfig, Scheduler, StopReason};

/// Upper bound on firings in one evening.
const STEP_LIMIT: u64 = 100_000;

pub struct EveningArgs {
    pub seed: u64,
    pub patrons: Option<PathBuf>,
    pub capacity: usize,
    pub starters: usize,
    pub hours: u64,
}

#[derive(Serialize)]
struct Report<'a> {
    inn: &'a str,
    seed: u64,
    started: String,
    finished: String,
    steps: u64,
    stopped: String,
    occupancy: usize,
    firings: Vec<FiringRow<'a>>,
    still_pending: usize,
}

#[derive(Serialize)]
struct FiringRow<'a> {
    time: String,
    command: &'a str,
    summary: &'a str,
    succeeded: bool,
}

impl<'a> From<&'a Firing> for FiringRow<'a> {
    fn from(firing: &'a Firing) -> Self {
        Self {
            time: firing.time_of_day(),
            command: &firing.name,
            summary: &firing.summary,
            succeeded: firing.succeeded,
        }
    }
}

pub fn run(args: EveningArgs, verbose: bool, json: bool) -> Result<(), String> {
    let roster = super::load_roster(args.patrons.as_deref())?;
    let config = EveningConfig::default()
        .with_seed(args.seed)
        .with_starters(args.starters)
        .with_open_hours(args.hours);

    let mut inn = Inn::new(DEFAULT_NAME, args.capacity);
    let mut sched = Scheduler::new(SchedConfig::default().with_step_limit(STEP_LIMIT));
    let arrivals = load_evening(&roster, &mut sched, &config).map_err(|e| e.to_string())?;

    let summary = sched.run(&mut inn);

    if json {
        let report = Report {
            inn: inn.name(),
            seed: args.seed,
            started: format_time_of_day(summary.started_at),
            finished: format_time_of_day(summary.finished_at),
            steps: summary.steps,
            stopped: describe_stop(&summary.stopped),
            occupancy: inn.occupancy(),
            firings: sched.log().iter().map(FiringRow::from).collect(),
            still_pending: sched.len(),
        };
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    print_header(&inn, &summary, arrivals, args.seed);

    if verbose {
        println!("  {}", "Fired Commands".bold().underline());
        println!();
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Time", "Command", "What happened", "Ok"]);
        for firing in sched.log().iter() {
            table.add_row(vec![
                firing.time_of_day(),
                firing.name.clone(),
                firing.summary.clone(),
                if firing.succeeded { "yes" } else { "no" }.to_string(),
            ]);
        }
        println!("{table}");
        println!();
    }

    let log = sched.log();
    let entered = log.named("PatronEnter").iter().filter(|f| f.succeeded).count();
    let turned_away = log.named("PatronEnter").len() - entered;
    let left = log.named("PatronLeave").iter().filter(|f| f.succeeded).count();

    println!("  {}", "Tally".bold().underline());
    println!("  {entered} came in, {left} left on their own, {turned_away} turned away");
    println!("  {} still inside at the end", inn.occupancy());

    let notices = inn.drain_notices();
    if let Some(shown_out) = notices.iter().find(|n| n.starts_with("Shown the door")) {
        println!("  {}", shown_out.yellow());
    }
    println!();
    Ok(())
}

fn print_header(inn: &Inn, summary: &RunSummary, arrivals: usize, seed: u64) {
    println!(
        "  {} at {} {}",
        "Evening".bold(),
        inn.name(),
        format!("(seed={seed}, capacity={})", inn.capacity()).dimmed()
    );
    println!(
        "  {} - {}, {} patrons expected, {} commands fired",
        format_time_of_day(summary.started_at),
        format_time_of_day(summary.finished_at),
        arrivals,
        summary.steps
    );
    println!("  Stopped: {}", describe_stop(&summary.stopped));
    println!();
}

fn describe_stop(reason: &StopReason) -> String {
    match reason {
        StopReason::Drained => "nothing left to do".to_string(),
        StopReason::Terminal { name } => name.clone(),
        StopReason::StepLimit => "step limit reached".to_string(),
    }
}
