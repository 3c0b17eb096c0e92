#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line harness for the crime view core.
//!
//! Stands in for the GUI form: filter values come from flags, the working
//! set is printed to stdout, and `--markers N` emits the map scripts a web
//! view would execute. Filter validation failures and an out-of-range
//! marker count are user messages, not process errors; only an unreadable
//! data or config file fails the run.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use crime_view_map::ProjectorConfig;
use crime_view_map::bridge::{ScriptSink, WebViewBridge};
use crime_view_records::RecordStore;
use crime_view_records_models::TriState;
use crime_view_session::MapSession;

/// Filter and map crime records from the command line.
#[derive(Debug, Parser)]
#[command(name = "crime-view")]
struct Args {
    /// CSV file of crime records; defaults to the embedded sample set.
    #[arg(long)]
    data: Option<PathBuf>,

    /// TOML projector config (e.g. `max_markers = 500`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Primary description substring, case-insensitive.
    #[arg(long, default_value = "")]
    description: String,

    /// Location description substring, case-insensitive.
    #[arg(long, default_value = "")]
    location: String,

    /// Inclusive start date (`YYYY-MM-DD` or `MM/DD/YYYY`).
    #[arg(long, default_value = "")]
    start_date: String,

    /// Inclusive end date.
    #[arg(long, default_value = "")]
    end_date: String,

    /// Inclusive start beat code.
    #[arg(long, default_value = "")]
    start_beat: String,

    /// Inclusive end beat code.
    #[arg(long, default_value = "")]
    end_beat: String,

    /// Inclusive start ward code.
    #[arg(long, default_value = "")]
    start_ward: String,

    /// Inclusive end ward code.
    #[arg(long, default_value = "")]
    end_ward: String,

    /// Arrest filter: "Don't filter", "Yes", or "No".
    #[arg(long, default_value_t = TriState::DontFilter)]
    arrest: TriState,

    /// Domestic violence filter: "Don't filter", "Yes", or "No".
    #[arg(long, default_value_t = TriState::DontFilter)]
    domestic: TriState,

    /// Emit map marker scripts for the first N matching records.
    #[arg(long)]
    markers: Option<String>,
}

/// Prints each script the way the embedded web view would receive it.
struct StdoutSink;

impl ScriptSink for StdoutSink {
    fn execute_script(&mut self, script: &str) {
        println!("{script}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let args = Args::parse();

    let store = match &args.data {
        Some(path) => {
            let store = RecordStore::from_csv(File::open(path)?)?;
            log::info!("Loaded {} records from {}", store.len(), path.display());
            store
        }
        None => RecordStore::new(crime_view_records::sample_records()),
    };

    let config = match &args.config {
        Some(path) => ProjectorConfig::from_toml(&std::fs::read_to_string(path)?)?,
        None => ProjectorConfig::default(),
    };

    let mut session = MapSession::with_config(&store, config);
    let form = session.form_mut();
    form.description = args.description;
    form.location = args.location;
    form.start_date = args.start_date;
    form.end_date = args.end_date;
    form.start_beat = args.start_beat;
    form.end_beat = args.end_beat;
    form.start_ward = args.start_ward;
    form.end_ward = args.end_ward;
    form.arrest = args.arrest;
    form.domestic = args.domestic;

    for error in session.refilter() {
        eprintln!("{error}");
    }

    println!(
        "{} of {} records match",
        session.working_set().len(),
        store.len()
    );
    for record in session.working_set() {
        println!(
            "{} {} {} ({}) beat {} ward {}{}{}",
            record.case_number,
            record.occurred_on,
            record.primary_description,
            record.location_description,
            record.beat,
            record.ward,
            if record.arrest { " [arrest]" } else { "" },
            if record.domestic { " [domestic]" } else { "" },
        );
    }

    if let Some(raw_count) = &args.markers {
        let mut surface = WebViewBridge::new(StdoutSink);
        match session.map_records(&mut surface, raw_count) {
            Ok(placed) => log::info!("Placed {placed} markers"),
            Err(error) => eprintln!("{error}"),
        }
    }

    Ok(())
}
