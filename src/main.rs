use anyhow::Result;
use clap::Parser;
use padviz::{report, subjects};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Dump the aggregate layouts as JSON instead of the text report.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let Args { output, json } = Args::try_parse()?;

    let text = if json {
        let mut dump = serde_json::to_string_pretty(&subjects::subjects())?;
        dump.push('\n');
        dump
    } else {
        report::report()
    };

    match output {
        Some(path) => fs::write(path, text)?,
        None => print!("{}", text),
    }

    Ok(())
}
