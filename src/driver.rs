//! Inflate / hold / deflate driver
//!
//! One run allocates blocks until the configured count is reached or the
//! allocator gives up, sleeps while the blocks stay resident, then releases
//! everything in allocation order. The sleep is the point of the exercise:
//! while it lasts, the held memory is unavailable to every other process on
//! the host.

use crate::{
    block::{AllocError, Block},
    config::BalloonConfig,
};

/// Outcome of one pressure run
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunReport {
    /// Number of blocks the configuration asked for
    pub requested_blocks: usize,

    /// Number of blocks that were actually allocated and held
    pub allocated_blocks: usize,
}

/// Perform one full pressure run: inflate, hold, deflate
///
/// Allocation exhaustion is not a failure: the run holds whatever was
/// successfully allocated and the report tells the caller how far it got.
///
pub fn run(config: &BalloonConfig) -> RunReport {
    let registry = inflate(config);
    let report = RunReport {
        requested_blocks: config.block_count,
        allocated_blocks: registry.len(),
    };

    log::info!(
        "Holding {} block(s) for {:?}",
        report.allocated_blocks,
        config.hold_time
    );
    std::thread::sleep(config.hold_time);

    deflate(registry);
    report
}

/// Allocate zero-filled blocks until the configured count is reached or the
/// allocator refuses a request
///
/// Returns the blocks in allocation order. On the first failure the loop
/// stops immediately: no retry, no backoff, no smaller request. Every block
/// is fully zero-filled before the next allocation is attempted.
///
pub fn inflate(config: &BalloonConfig) -> Vec<Block> {
    inflate_with(config, Block::try_zeroed)
}

/// Allocation loop, with the allocator abstracted out so tests can inject
/// failures at a chosen attempt
fn inflate_with(
    config: &BalloonConfig,
    mut try_alloc: impl FnMut(usize) -> Result<Block, AllocError>,
) -> Vec<Block> {
    let mut registry = Vec::new();
    for index in 0..config.block_count {
        log::debug!("Allocating block {index}");
        match try_alloc(config.block_bytes) {
            Ok(block) => registry.push(block),
            Err(e) => {
                // Part of the tool's piped output, hence stdout
                println!("WARNING: out of memory");
                log::warn!(
                    "Allocation of block {index} failed ({e}), holding {} block(s)",
                    registry.len()
                );
                break;
            }
        }
    }
    registry
}

/// Release every block in allocation order, each exactly once
pub fn deflate(registry: Vec<Block>) {
    for (index, block) in registry.into_iter().enumerate() {
        log::debug!("Freeing block {index}");
        std::mem::drop(block);
    }
}
