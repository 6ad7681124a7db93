//! Command-line memory pressure generator
//!
//! Allocates 29 gigabytes of zero-filled memory (or as much of it as the
//! allocator will give), holds it for the requested number of seconds, then
//! releases it. Meant to run next to a workload whose paging behavior under
//! memory scarcity is being studied.

use balloon::{config, config::BalloonConfig, driver};
use std::time::Duration;

fn main() {
    env_logger::init();

    // One positional argument: the number of seconds to hold the memory.
    // Anything else gets the usage text on stdout and a clean exit, which is
    // what scripted callers of this tool have always seen.
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let [run_time] = args.as_slice() else {
        println!("Unexpected number of arguments!");
        println!("USAGE: balloon <run time (in seconds)>");
        return;
    };

    let hold_time = Duration::from_secs(config::parse_run_time(run_time));
    let report = driver::run(&BalloonConfig::with_hold_time(hold_time));
    log::info!(
        "Held {}/{} block(s) for {hold_time:?}",
        report.allocated_blocks,
        report.requested_blocks
    );
}
