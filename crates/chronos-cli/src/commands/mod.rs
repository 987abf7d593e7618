pub mod evening;
pub mod play;

use std::path::Path;

use chronos_inn::PatronRoster;
use chronos_inn::commands::help_lines;
use colored::Colorize;

/// Load the roster at `path`, or the town regulars when none is given.
fn load_roster(path: Option<&Path>) -> Result<PatronRoster, String> {
    let Some(path) = path else {
        return Ok(PatronRoster::regulars());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    PatronRoster::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}

/// Print one line per player command.
pub fn print_verbs() {
    println!("  {}", "Commands".bold().underline());
    for line in help_lines() {
        println!("  {line}");
    }
}
