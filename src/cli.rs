// src/cli.rs
use std::env;
use std::error::Error;

use crate::config::options::{AppOptions, Pick, ScrapeOptions};
use crate::progress::ConsoleProgress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn Error>> {
    let options = parse_cli()?;
    logf!("start: {:?}", options.scrape);

    let mut progress = ConsoleProgress;
    let summary = match runner::run(&options, &mut progress) {
        Ok(summary) => summary,
        Err(e) => {
            loge!("run aborted: {e}");
            return Err(e.into());
        }
    };
    logf!("done, {} file(s) written", summary.files_written.len());
    Ok(())
}

fn parse_cli() -> Result<AppOptions, Box<dyn Error>> {
    let mut options = AppOptions::default();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--language" => {
                let v = args.next().ok_or("Missing value for --language")?;
                options.scrape.language = Pick::Named(v);
            }
            "--book" => {
                let v = args.next().ok_or("Missing value for --book")?;
                options.scrape.book = Pick::Named(v);
            }
            // Discovery mode: every language, every book.
            "--all" | "-a" => options.scrape = ScrapeOptions::everything(),
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(options)
}
