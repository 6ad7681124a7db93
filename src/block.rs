//! Owned zero-filled memory blocks

use std::collections::TryReserveError;
use thiserror::Error;

/// One contiguous zero-filled heap allocation
///
/// The block owns its buffer, so the memory is returned to the system
/// allocator exactly once, when the block is dropped. Double frees and leaks
/// are impossible by construction, which is what the historical tool's manual
/// allocate/free pairing was replaced with.
///
#[derive(Debug)]
pub struct Block {
    /// Backing storage, fully written and thus physically materialized
    mem: Vec<u8>,
}
//
impl Block {
    /// Allocate a block and write zeroes across its full extent
    ///
    /// Zero-filling forces the operating system to back the whole region with
    /// real physical memory instead of leaving it as an unbacked virtual
    /// mapping. Allocator exhaustion is reported as an error rather than
    /// aborting the process, so a caller can keep whatever it already holds.
    ///
    pub fn try_zeroed(bytes: usize) -> Result<Self, AllocError> {
        let mut mem = Vec::new();
        mem.try_reserve_exact(bytes)
            .map_err(|source| AllocError { bytes, source })?;
        mem.resize(bytes, 0u8);
        Ok(Self { mem })
    }

    /// Size of the block in bytes
    pub fn len(&self) -> usize {
        self.mem.len()
    }

    /// Truth that the block is zero-sized
    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }
}

/// Failure to allocate a block
#[derive(Debug, Error)]
#[error("failed to allocate a {bytes}-byte block ({source})")]
pub struct AllocError {
    /// Requested block size
    bytes: usize,

    /// Underlying allocator error
    source: TryReserveError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn zero_filled() {
        let block = Block::try_zeroed(4096).unwrap();
        assert_eq!(block.len(), 4096);
        assert!(!block.is_empty());
        assert!(block.mem.iter().all(|&byte| byte == 0));
    }

    #[test]
    fn zero_sized() {
        let block = Block::try_zeroed(0).unwrap();
        assert_eq!(block.len(), 0);
        assert!(block.is_empty());
    }

    #[test]
    fn exhaustion() {
        // No allocator can satisfy this, so the error path is portable
        assert_matches!(
            Block::try_zeroed(usize::MAX),
            Err(AllocError { bytes, .. }) => assert_eq!(bytes, usize::MAX)
        );
    }
}
