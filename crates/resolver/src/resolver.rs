use equate_indexer::EquateIndex;
use equate_protocol::{LookupOutcome, Neighbor, MAX_ADDRESS};

use crate::classifier::{Classification, TokenClassifier};
use crate::error::{ResolverError, Result};
use crate::fuzzy::{closest_names, DEFAULT_SUGGESTIONS};

/// Drives one query through classification and the index to a terminal
/// outcome.
///
/// Borrows the index read-only and keeps no state of its own, so queries are
/// independent and repeatable.
pub struct Resolver<'a> {
    index: &'a EquateIndex,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(index: &'a EquateIndex) -> Self {
        Self { index }
    }

    /// Resolve the first token of `raw_query` to exactly one outcome.
    ///
    /// Total over any input: per-query failures come back as outcome
    /// variants, and an internal fault maps to `InternalError` at this
    /// boundary instead of propagating.
    #[must_use]
    pub fn resolve(&self, raw_query: &str) -> LookupOutcome {
        match self.try_resolve(raw_query) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("lookup fault: {err}");
                LookupOutcome::InternalError {
                    detail: err.to_string(),
                }
            }
        }
    }

    fn try_resolve(&self, raw_query: &str) -> Result<LookupOutcome> {
        let Some(token) = raw_query.split_whitespace().next() else {
            return Ok(LookupOutcome::EmptyInput);
        };

        match TokenClassifier::classify(token) {
            Classification::Address { value, notation } => {
                self.resolve_address(token, value, notation.is_decimal())
            }
            Classification::Name => Ok(self.resolve_name(token)),
            Classification::Unrecognized => Ok(LookupOutcome::ParseFailure {
                token: token.to_string(),
            }),
        }
    }

    fn resolve_address(
        &self,
        token: &str,
        value: u64,
        decimal_input: bool,
    ) -> Result<LookupOutcome> {
        if value > u64::from(MAX_ADDRESS) {
            return Ok(LookupOutcome::TooLarge {
                token: token.to_string(),
                value,
            });
        }
        let address = u32::try_from(value).map_err(|_| ResolverError::AddressRange(value))?;

        if let Some(names) = self.index.names_at(address) {
            return Ok(LookupOutcome::ExactAddress {
                token: token.to_string(),
                address,
                decimal_input,
                names: names.to_vec(),
            });
        }

        let before = self
            .index
            .nearest_below(address)
            .map(|(at, names)| Neighbor {
                address: at,
                names: names.to_vec(),
                offset: address - at,
            });
        let after = self
            .index
            .nearest_above(address)
            .map(|(at, names)| Neighbor {
                address: at,
                names: names.to_vec(),
                offset: at - address,
            });

        if before.is_none() && after.is_none() {
            log::warn!("address {address:#08x} has no defined neighbor on either side");
            return Ok(LookupOutcome::NoNeighbors {
                token: token.to_string(),
                address,
            });
        }

        Ok(LookupOutcome::Straddle {
            token: token.to_string(),
            address,
            decimal_input,
            before,
            after,
        })
    }

    fn resolve_name(&self, token: &str) -> LookupOutcome {
        if let Some(address) = self.index.address_of(token) {
            return LookupOutcome::ExactName {
                name: token.to_string(),
                address,
            };
        }
        if let Some((name, address)) = self.index.address_of_fold(token) {
            return LookupOutcome::CaseFold {
                token: token.to_string(),
                name: name.to_string(),
                address,
            };
        }
        if self.index.is_empty() {
            return LookupOutcome::NoData {
                token: token.to_string(),
            };
        }
        LookupOutcome::Suggestions {
            token: token.to_string(),
            candidates: closest_names(self.index, token, DEFAULT_SUGGESTIONS),
        }
    }
}
