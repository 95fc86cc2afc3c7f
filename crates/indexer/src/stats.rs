use crate::index::EquateIndex;
use serde::{Deserialize, Serialize};

/// How a table load went.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStats {
    /// Lines seen, blank ones included.
    pub lines: usize,

    /// Lines that parsed into a label record.
    pub records: usize,

    /// Non-blank lines that did not parse (known format leniency).
    pub skipped: usize,

    /// Distinct names in the finished index.
    pub names: usize,

    /// Distinct addresses in the finished index.
    pub addresses: usize,

    /// Addresses carrying more than one name.
    pub aliases: usize,

    /// Load time in milliseconds.
    pub time_ms: u64,
}

impl TableStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: 0,
            records: 0,
            skipped: 0,
            names: 0,
            addresses: 0,
            aliases: 0,
            time_ms: 0,
        }
    }

    /// Fill the derived counters from the finished index.
    pub(crate) fn absorb_index(&mut self, index: &EquateIndex) {
        self.names = index.len();
        self.addresses = index.address_count();
        self.aliases = index.alias_count();
    }
}

impl Default for TableStats {
    fn default() -> Self {
        Self::new()
    }
}
