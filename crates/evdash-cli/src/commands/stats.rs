//! Stats command - print the statistics block for one state.

use std::path::PathBuf;

use colored::Colorize;
use evdash::{ErrorKind, Loader, StateStats};

pub fn run(file: PathBuf, state: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = Loader::new().load(&file)?;

    let stats = match StateStats::for_state(&loaded.table, &state) {
        Ok(stats) => stats,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let known = loaded.table.states().join(", ");
            return Err(format!("{}\nKnown states: {}", e, known).into());
        }
        Err(e) => return Err(e.into()),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let mut lines = stats.lines.iter();
    if let Some(first) = lines.next() {
        println!("{}", format!("{}: {}", first.label, first.value).cyan().bold());
    }
    for line in lines {
        println!("{}: {}", line.label.yellow(), line.value.white());
    }

    Ok(())
}
