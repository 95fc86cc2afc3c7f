//! Turns outcome values into display lines.
//!
//! Styling degrades to plain text automatically when stdout is not a
//! terminal, so piped output stays clean.

use std::path::Path;

use console::{style, truncate_str};
use equate_indexer::TableStats;
use equate_protocol::{canonical_hex, AsciiOutcome, LookupOutcome, Neighbor, MAX_ADDRESS};

const ORANGE: u8 = 208;

/// Widest alias list one answer line will carry.
const ALIAS_DISPLAY_WIDTH: usize = 250;

/// The queried token, plus a canonical-hex echo for decimal queries once the
/// hex form has at least two digits.
fn token_echo(token: &str, address: u32, decimal_input: bool) -> String {
    let styled = style(token).color256(ORANGE);
    if decimal_input && address > 0xF {
        format!("{styled} (== {})", canonical_hex(u64::from(address)))
    } else {
        styled.to_string()
    }
}

fn offset_text(offset: u32) -> String {
    if offset > 0xF {
        format!("0x{offset:x}")
    } else {
        format!("{offset:x}")
    }
}

/// `NAME+off` below the query, `NAME-off` above it.
fn neighbor_side(neighbor: &Neighbor, sign: char) -> String {
    let name = neighbor.names.first().map(String::as_str).unwrap_or("?");
    style(format!("{name}{sign}{}", offset_text(neighbor.offset)))
        .bold()
        .to_string()
}

#[must_use]
pub fn lookup_line(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::EmptyInput => "Wut? Empty query.".to_string(),
        LookupOutcome::ParseFailure { .. } => "Wut?".to_string(),
        LookupOutcome::TooLarge { token, .. } => format!(
            "Wut? {} is past {}.",
            style(token).color256(ORANGE),
            canonical_hex(u64::from(MAX_ADDRESS))
        ),
        LookupOutcome::ExactAddress {
            token,
            address,
            decimal_input,
            names,
        } => {
            let echoed = token_echo(token, *address, *decimal_input);
            if names.len() > 1 {
                let listed = serde_json::to_string(names).unwrap_or_default();
                format!(
                    "{echoed} is one of {}",
                    style(truncate_str(&listed, ALIAS_DISPLAY_WIDTH, "...")).bold()
                )
            } else {
                let name = names.first().map(String::as_str).unwrap_or("?");
                format!("{echoed} is {}", style(name).bold())
            }
        }
        LookupOutcome::Straddle {
            token,
            address,
            decimal_input,
            before,
            after,
        } => {
            let echoed = token_echo(token, *address, *decimal_input);
            let sides: Vec<String> = [
                before.as_ref().map(|n| neighbor_side(n, '+')),
                after.as_ref().map(|n| neighbor_side(n, '-')),
            ]
            .into_iter()
            .flatten()
            .collect();
            format!("{echoed} could be {}", sides.join(" or "))
        }
        LookupOutcome::NoNeighbors { .. } => {
            "Wut? Couldn't find stuff with offsets. That's not normal...".to_string()
        }
        LookupOutcome::ExactName { name, address } => format!(
            "{} is {}",
            style(name).color256(ORANGE),
            style(canonical_hex(u64::from(*address))).bold()
        ),
        LookupOutcome::CaseFold {
            token,
            name,
            address,
        } => format!(
            "{} is {} (spelled {})",
            style(token).color256(ORANGE),
            style(canonical_hex(u64::from(*address))).bold(),
            style(name).bold()
        ),
        LookupOutcome::Suggestions { token, candidates } => {
            if candidates.is_empty() {
                return "Wut? idk.".to_string();
            }
            let listed = candidates
                .iter()
                .map(|c| {
                    format!(
                        "{} ({})",
                        style(&c.name).bold(),
                        canonical_hex(u64::from(c.address))
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Wut? idk. Closest to {}: {listed}",
                style(token).color256(ORANGE)
            )
        }
        LookupOutcome::NoData { .. } => "Wut? The label table is empty.".to_string(),
        LookupOutcome::InternalError { .. } => "Oops, something went wrong :(".to_string(),
    }
}

#[must_use]
pub fn ascii_line(outcome: &AsciiOutcome) -> String {
    match outcome {
        AsciiOutcome::EmptyInput => "Wut? Empty query.".to_string(),
        AsciiOutcome::Char { codepoint, text } => {
            format!("{codepoint} is {}", style(text).bold())
        }
        AsciiOutcome::Codepoints { text, codepoints } => {
            let listed = codepoints
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} is [{listed}]", style(text).color256(ORANGE))
        }
        AsciiOutcome::InvalidCodepoint { codepoint } => {
            format!("Wut? {codepoint} is not a code point.")
        }
    }
}

#[must_use]
pub fn stats_block(stats: &TableStats, path: &Path) -> String {
    format!(
        "Table: {}\n\
         Lines: {} ({} records, {} skipped)\n\
         Names: {} ({} addresses, {} aliased)\n\
         Load: {}ms\n",
        path.display(),
        stats.lines,
        stats.records,
        stats.skipped,
        stats.names,
        stats.addresses,
        stats.aliases,
        stats.time_ms
    )
}
