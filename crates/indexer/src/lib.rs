//! # Equate Indexer
//!
//! Label-table loading for the reverse-lookup engine.
//!
//! ## Pipeline
//!
//! ```text
//! Label file (name = $hexvalue per line)
//!     │
//!     ├──> Line parser (lenient: non-records skipped, counted)
//!     │      └─> Records
//!     │
//!     └──> EquateIndex
//!            ├─> by address (ordered, nearest-neighbor queries)
//!            └─> by name (table order, case-insensitive scan)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use equate_indexer::TableLoader;
//!
//! fn main() -> equate_indexer::Result<()> {
//!     let loaded = TableLoader::new("ti84pce.lab").load()?;
//!     println!("{} symbols, {} addresses", loaded.stats.names, loaded.stats.addresses);
//!     Ok(())
//! }
//! ```

mod error;
mod index;
mod parser;
mod stats;

pub use error::{IndexerError, Result};
pub use index::EquateIndex;
pub use parser::{parse_table, LoadedTable, TableLoader};
pub use stats::TableStats;
