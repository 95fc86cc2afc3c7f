use equate_protocol::MAX_ADDRESS;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Bidirectional symbol table built once by the parser and read-only after.
///
/// Two views over the same entries: addresses to the names defined at them
/// (file order, duplicates kept), and names to their address. A name
/// redefined later in the file keeps its original table position but takes
/// the later address, so `by_name` iteration order is stable "table order"
/// for the case-insensitive scan and for fuzzy tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct EquateIndex {
    by_address: BTreeMap<u32, Vec<String>>,
    by_name: IndexMap<String, u32>,
}

impl EquateIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert one parsed record into both views.
    pub(crate) fn insert(&mut self, name: &str, address: u32) {
        self.by_address
            .entry(address)
            .or_default()
            .push(name.to_string());
        self.by_name.insert(name.to_string(), address);
    }

    /// Every name defined at `address`, in table order.
    #[must_use]
    pub fn names_at(&self, address: u32) -> Option<&[String]> {
        self.by_address.get(&address).map(Vec::as_slice)
    }

    /// Case-sensitive name lookup.
    #[must_use]
    pub fn address_of(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    /// First table-order entry whose lowercase form equals the lowercase
    /// query. Returns the canonically-spelled name alongside its address.
    #[must_use]
    pub fn address_of_fold(&self, name: &str) -> Option<(&str, u32)> {
        let folded = name.to_lowercase();
        self.by_name
            .iter()
            .find(|(candidate, _)| candidate.to_lowercase() == folded)
            .map(|(candidate, address)| (candidate.as_str(), *address))
    }

    /// Greatest defined address strictly below `address`.
    ///
    /// Address 0 is never an anchor: the scan floor is 1, so a label at 0 is
    /// reachable by exact lookup only.
    #[must_use]
    pub fn nearest_below(&self, address: u32) -> Option<(u32, &[String])> {
        if address == 0 {
            return None;
        }
        self.by_address
            .range(1..address)
            .next_back()
            .map(|(found, names)| (*found, names.as_slice()))
    }

    /// Least defined address strictly above `address`, capped at the top of
    /// the 24-bit space.
    #[must_use]
    pub fn nearest_above(&self, address: u32) -> Option<(u32, &[String])> {
        if address >= MAX_ADDRESS {
            return None;
        }
        self.by_address
            .range(address + 1..=MAX_ADDRESS)
            .next()
            .map(|(found, names)| (*found, names.as_slice()))
    }

    /// Table-order iteration over `(name, address)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.by_name
            .iter()
            .map(|(name, address)| (name.as_str(), *address))
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Number of distinct defined addresses.
    #[must_use]
    pub fn address_count(&self) -> usize {
        self.by_address.len()
    }

    /// Number of addresses with more than one name.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.by_address
            .values()
            .filter(|names| names.len() > 1)
            .count()
    }
}
