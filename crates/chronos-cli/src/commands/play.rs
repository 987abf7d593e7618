use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tracing::debug;

use chronos_inn::inn::DEFAULT_NAME;
use chronos_inn::{EveningConfig, Inn, load_evening, parse_input};
use chronos_sched::{SchedConfig, Scheduler, SchedulerState, StopReason};

pub fn run(seed: u64, patrons: Option<&Path>, capacity: usize, hours: u64) -> Result<(), String> {
    let roster = super::load_roster(patrons)?;
    let config = EveningConfig::default()
        .with_seed(seed)
        .with_open_hours(hours);

    let mut inn = Inn::new(DEFAULT_NAME, capacity);
    let mut sched = Scheduler::new(SchedConfig::default());
    load_evening(&roster, &mut sched, &config).map_err(|e| e.to_string())?;

    println!("  {} {}", "Entering".bold(), inn.name());
    println!("  Clock: {} | Seed: {seed}", sched.clock().time_of_day());
    println!("  Type LOOK, WAIT or QUIT.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        debug!(input, "player command");

        let command = match parse_input(input) {
            Ok(command) => command,
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
                continue;
            }
        };
        sched.schedule(command);
        sched
            .step_to_user_command(&mut inn)
            .map_err(|e| format!("scheduler error: {e}"))?;

        println!("  {}", format!("[{}]", sched.clock().time_of_day()).dimmed());
        for notice in inn.drain_notices() {
            println!("  {notice}");
        }
        println!();

        if let SchedulerState::Stopped(StopReason::Terminal { name }) = sched.state() {
            debug!(%name, "session over");
            break;
        }
    }

    println!(
        "  {} commands fired; the clock reads {}.",
        sched.log().len(),
        sched.clock().time_of_day()
    );
    Ok(())
}
