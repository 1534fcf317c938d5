pub mod mock;
pub mod random;

use anyhow::Result;

/// Chooses which response to return. Could be a thread RNG, a seeded RNG,
/// or a test script.
pub trait Picker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> Result<usize>;
}
