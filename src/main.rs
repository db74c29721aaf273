// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 0.3.0
//
// Entry point for the hashmark benchmark binary. Parses the command line,
// detects physical cores, then runs the single-threaded and multi-threaded
// phases in order.

use clap::Parser;
use hashmark::{core::types::Args, physical_core_count, BenchmarkRunner, Result};
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    tracing_subscriber::fmt::init();

    info!("🚀 hashmark starting...");

    let threads = if args.threads == 0 {
        let detected = physical_core_count();
        info!("🖥️  Auto-detected {} physical cores", detected);
        detected
    } else {
        args.threads
    };

    let runner = BenchmarkRunner::new(args.duration);

    runner.run_single_threaded();
    runner.run_multi_threaded(threads)?;

    info!("🏁 Benchmark complete");
    Ok(())
}
