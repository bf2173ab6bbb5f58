use std::error;
use std::fs;
use std::path;

use clap;
use clap::Parser as CLIParser;

use bib2csv::read_entries;
use bib2csv::write_table;
use bib2csv::JournalTable;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Settings {
    /// Filepaths of '.bib' files to convert. Without --output, each input
    /// is converted into a '.csv' file of the same name next to it.
    #[clap(default_value = "sample.bib")]
    bib_file: Vec<String>,

    /// Write all rows into this one file. Multiple input files are merged
    /// into it, with the header row (if any) written only once.
    #[clap(short, long)]
    output: Option<String>,

    /// Do not generate the first row with the headers
    #[clap(short = 'H', long)]
    headless: bool,
}

fn run(settings: &Settings) -> Result<(), Box<dyn error::Error>> {
    let journals = JournalTable::new();

    match &settings.output {
        Some(target) => {
            // one merged output: truncate once, then keep the handle open
            // and append every further input to it
            let mut out: Option<fs::File> = None;
            let mut with_header = !settings.headless;
            for input in &settings.bib_file {
                let entries = read_entries(input)?;
                let sink = match out.as_mut() {
                    Some(file) => file,
                    None => out.insert(fs::File::create(target)?),
                };
                write_table(&entries, &journals, with_header, sink)?;
                with_header = false;
            }
        }
        None => {
            // one table per input, replacing any pre-existing file of the
            // derived name
            for input in &settings.bib_file {
                let entries = read_entries(input)?;
                let target = path::Path::new(input).with_extension("csv");
                let mut sink = fs::File::create(&target)?;
                write_table(&entries, &journals, !settings.headless, &mut sink)?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let settings = Settings::parse();
    run(&settings)
}
