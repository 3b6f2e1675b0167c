use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: clockface <start_hour> <total_frames>";

#[derive(Parser, Debug)]
#[command(
    name = "clockface",
    version,
    about = "Render one hour of an analog clock face into a looping GIF",
    allow_negative_numbers = true
)]
struct Cli {
    /// Hour shown on every frame (>= 0, taken modulo 12 for the hour pointer).
    #[arg(default_value_t = clockface::DEFAULT_START_HOUR)]
    start_hour: i64,

    /// Number of frames spread across the hour (> 0).
    #[arg(default_value_t = clockface::DEFAULT_TOTAL_FRAMES)]
    total_frames: i64,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = clockface::RunOpts::new(cli.start_hour, cli.total_frames);
    let mut progress = clockface::StderrProgress::new();

    match clockface::run(&opts, &mut progress) {
        Ok(report) => {
            // A cleanup warning was already logged by the driver.
            println!("wrote {}", report.output.display());
            ExitCode::SUCCESS
        }
        Err(e) if e.is_validation() => {
            eprintln!("error: {e}");
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {:?}", anyhow::Error::from(e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "clockface=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
