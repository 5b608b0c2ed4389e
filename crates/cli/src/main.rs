use std::process::ExitCode;

use clap::Parser;

use ordertrail_cli::{Args, build_from_file};
use ordertrail_timeline::{BuildStatus, TimelineConfig};

fn main() -> ExitCode {
    let args = Args::parse();
    ordertrail_observability::init();
    let config = TimelineConfig::from_env();

    match build_from_file(args.kind, &args.snapshot, &config) {
        Ok(BuildStatus::Ready(timeline)) => match serde_json::to_string_pretty(&timeline) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to encode timeline");
                ExitCode::FAILURE
            }
        },
        Ok(BuildStatus::Deferred { pending }) => {
            eprintln!("timeline not ready (waiting on: {})", pending.join(", "));
            ExitCode::from(3)
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "timeline build failed");
            eprintln!("no events: {err:#}");
            ExitCode::FAILURE
        }
    }
}
