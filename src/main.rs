use clap::Parser;
use lib::{SimpleLogger, ViewerError, load_reports, menu};
use log::debug;
use std::io;
use std::path::PathBuf;

static LOGGER: SimpleLogger = SimpleLogger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input report file, one `date,location,temperature,condition` line per record
    #[arg(short, long, default_value = "weather_reports.txt")]
    input_file: PathBuf,

    /// Log level for output
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), ViewerError> {
    log::set_logger(&LOGGER).unwrap();

    // Acquire CLI args
    let args = Args::parse();
    if args.debug {
        log::set_max_level(log::LevelFilter::Debug);
    } else {
        log::set_max_level(log::LevelFilter::Info);
    }

    // UI
    println!("Weather Report Viewer");
    debug!("Input file: {}", args.input_file.display());

    let (reports, skipped) = load_reports(&args.input_file)?;
    if skipped > 0 {
        println!("Loaded {} reports ({} malformed lines skipped)", reports.len(), skipped);
    } else {
        println!("Loaded {} reports", reports.len());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    let final_reports = menu::run(reports, &mut input, &mut out)?;

    debug!("Session ended with {} reports in memory", final_reports.len());
    println!("Goodbye.");
    Ok(())
}
