use crate::error::{IndexerError, Result};
use crate::index::EquateIndex;
use crate::stats::TableStats;
use equate_protocol::MAX_ADDRESS;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// `name = $hexvalue`, surrounding whitespace already trimmed away.
static LABEL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)\s*=\s*\$([0-9A-Fa-f]+)$").expect("label line pattern"));

/// A parsed label table: the index plus how the load went.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub index: EquateIndex,
    pub stats: TableStats,
}

/// Loads a label table from disk and builds the symbol index.
pub struct TableLoader {
    path: PathBuf,
}

impl TableLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// One-shot load. A read failure is `DataUnavailable` and fatal to the
    /// caller; after a successful load the index never changes.
    pub fn load(&self) -> Result<LoadedTable> {
        let started = Instant::now();
        let text =
            fs::read_to_string(&self.path).map_err(|source| IndexerError::DataUnavailable {
                path: self.path.clone(),
                source,
            })?;

        let mut loaded = parse_table(&text);
        loaded.stats.time_ms = started.elapsed().as_millis() as u64;

        log::info!(
            "Loaded {} symbols at {} addresses from {} in {}ms ({} lines skipped)",
            loaded.stats.names,
            loaded.stats.addresses,
            self.path.display(),
            loaded.stats.time_ms,
            loaded.stats.skipped
        );
        Ok(loaded)
    }
}

/// Parse newline-delimited `name = $hexvalue` records into an index.
///
/// Non-record lines are skipped, counted, and debug-logged; the skip is a
/// long-standing leniency of the format. Values outside the 24-bit address
/// space are skipped the same way, so every index key stays inside
/// `[0, MAX_ADDRESS]`.
#[must_use]
pub fn parse_table(input: &str) -> LoadedTable {
    let mut index = EquateIndex::new();
    let mut stats = TableStats::new();

    for (number, raw) in input.lines().enumerate() {
        stats.lines += 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(caps) = LABEL_LINE.captures(line) else {
            stats.skipped += 1;
            log::debug!("line {}: not a label record, skipping", number + 1);
            continue;
        };

        let address = match u32::from_str_radix(&caps[2], 16) {
            Ok(value) if value <= MAX_ADDRESS => value,
            _ => {
                stats.skipped += 1;
                log::debug!(
                    "line {}: value outside the 24-bit address space, skipping",
                    number + 1
                );
                continue;
            }
        };

        index.insert(&caps[1], address);
        stats.records += 1;
    }

    stats.absorb_index(&index);
    LoadedTable { index, stats }
}

#[cfg(test)]
mod tests {
    use super::parse_table;
    use pretty_assertions::assert_eq;

    #[test]
    fn shared_address_collects_both_names() {
        let loaded = parse_table("FOO = $100\nBAR = $100\n");
        assert_eq!(
            loaded.index.names_at(0x100),
            Some(["FOO".to_string(), "BAR".to_string()].as_slice())
        );
        assert_eq!(loaded.index.address_of("FOO"), Some(0x100));
        assert_eq!(loaded.index.address_of("BAR"), Some(0x100));
        assert_eq!(loaded.stats.aliases, 1);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let loaded = parse_table("   Reset = $1A0   \nDrawScreen=$2A0\n");
        assert_eq!(loaded.index.address_of("Reset"), Some(0x1A0));
        assert_eq!(loaded.index.address_of("DrawScreen"), Some(0x2A0));
        assert_eq!(loaded.stats.skipped, 0);
    }

    #[test]
    fn non_record_lines_are_skipped_and_counted() {
        let table = "\
; equates for the boot rom
FOO = $100

BAR EQU $200
BAZ = 300
QUux = $3F0
";
        let loaded = parse_table(table);
        assert_eq!(loaded.stats.records, 2);
        // Comment, missing `=`, missing `$`; the blank line is not counted.
        assert_eq!(loaded.stats.skipped, 3);
        assert_eq!(loaded.index.address_of("QUux"), Some(0x3F0));
        assert_eq!(loaded.index.address_of("BAR"), None);
    }

    #[test]
    fn values_beyond_24_bits_are_skipped() {
        let loaded = parse_table("OK = $FFFFFF\nTOOBIG = $1000000\nWAYBIG = $FFFFFFFFFF\n");
        assert_eq!(loaded.index.address_of("OK"), Some(0xFFFFFF));
        assert_eq!(loaded.index.address_of("TOOBIG"), None);
        assert_eq!(loaded.index.address_of("WAYBIG"), None);
        assert_eq!(loaded.stats.skipped, 2);
    }

    #[test]
    fn later_definition_overwrites_a_name() {
        let loaded = parse_table("Port = $10\nPort = $20\n");
        assert_eq!(loaded.index.address_of("Port"), Some(0x20));
        assert_eq!(loaded.stats.records, 2);
        assert_eq!(loaded.stats.names, 1);
        assert_eq!(loaded.stats.addresses, 2);
    }

    #[test]
    fn names_are_case_sensitive_records() {
        let loaded = parse_table("flags = $10\nFlags = $20\n");
        assert_eq!(loaded.index.address_of("flags"), Some(0x10));
        assert_eq!(loaded.index.address_of("Flags"), Some(0x20));
        assert_eq!(loaded.stats.names, 2);
    }

    #[test]
    fn empty_input_builds_an_empty_index() {
        let loaded = parse_table("");
        assert!(loaded.index.is_empty());
        assert_eq!(loaded.stats.lines, 0);
    }
}
