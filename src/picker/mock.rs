use anyhow::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Picker;

/// A scripted picker for tests. Returns pre-defined indices in order and
/// fails once the script runs out.
pub struct ScriptedPicker {
    indices: Vec<usize>,
    index: AtomicUsize,
}

impl ScriptedPicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            index: AtomicUsize::new(0),
        }
    }
}

impl Picker for ScriptedPicker {
    fn pick(&self, _len: usize) -> Result<usize> {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.indices
            .get(i)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("ScriptedPicker: no more picks (called {} times)", i + 1))
    }
}
