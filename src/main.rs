use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use frame_tracker::cli::Args;
use frame_tracker::driver::FrameDriver;
use frame_tracker::io::json::FrameRecord;
use frame_tracker::tracker::Tracker;

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> frame_tracker::Result<()> {
    let config = args.resolve()?;

    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        "starting frame-tracker run"
    );

    let raw = std::fs::read_to_string(&config.input)?;
    let frames: Vec<FrameRecord> = serde_json::from_str(&raw)?;

    let tracker = Tracker::new(config.max_dist, config.max_age, config.alpha);
    let mut driver = FrameDriver::new(tracker);
    let outputs = driver.run_with_vis(&frames, Some(&config.vis_dir))?;

    let serialized = serde_json::to_string_pretty(&outputs)?;
    std::fs::write(&config.output, serialized)?;

    info!(frames = outputs.len(), "run complete");
    Ok(())
}
