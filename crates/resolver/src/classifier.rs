use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that reads as a number once at most one marker is removed:
/// `$FA0`, `0xFA0`, `FA0h`, `cafe`, `4000`.
static ADDRESS_GRAMMAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:0x|\$)?[0-9a-f]+h?$").expect("address grammar pattern"));

/// How an address token spelled its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressNotation {
    /// `$` prefix
    DollarHex,
    /// `0x` prefix
    PrefixHex,
    /// `h` suffix
    SuffixHex,
    /// No marker, but at least one `a-f` digit forces hex
    BareHex,
    /// Plain digits
    Decimal,
}

impl AddressNotation {
    #[must_use]
    pub fn is_decimal(self) -> bool {
        matches!(self, Self::Decimal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The token denotes a numeric address.
    Address { value: u64, notation: AddressNotation },
    /// The token is a symbolic name.
    Name,
    /// The token entered the address grammar but its digits do not decode.
    Unrecognized,
}

pub struct TokenClassifier;

impl TokenClassifier {
    /// Decide whether a raw token denotes an address or a name.
    ///
    /// The whole token is tested against the address grammar first; only a
    /// grammar match commits to the address path, so `hello` stays a name
    /// while `cafe` becomes `$CAFE`. A committed token then drops exactly one
    /// marker (`$` before `0x` before trailing `h`), which rejects doubled
    /// markers such as `$FA0h` instead of guessing.
    #[must_use]
    pub fn classify(token: &str) -> Classification {
        let token = token.trim();
        if token.is_empty() {
            return Classification::Unrecognized;
        }
        if !ADDRESS_GRAMMAR.is_match(token) {
            return Classification::Name;
        }

        let (digits, notation) = Self::split_notation(token);
        let radix = if notation.is_decimal() { 10 } else { 16 };
        match u64::from_str_radix(digits, radix) {
            Ok(value) => Classification::Address { value, notation },
            // Everything past u64 is still an address, just an oversized one;
            // saturate and let the range guard report it.
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => Classification::Address {
                value: u64::MAX,
                notation,
            },
            Err(_) => Classification::Unrecognized,
        }
    }

    fn split_notation(token: &str) -> (&str, AddressNotation) {
        if let Some(rest) = token.strip_prefix('$') {
            return (rest, AddressNotation::DollarHex);
        }
        if let Some(rest) = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
        {
            return (rest, AddressNotation::PrefixHex);
        }
        if let Some(rest) = token
            .strip_suffix('h')
            .or_else(|| token.strip_suffix('H'))
        {
            return (rest, AddressNotation::SuffixHex);
        }
        if token.bytes().any(|b| b.is_ascii_alphabetic()) {
            return (token, AddressNotation::BareHex);
        }
        (token, AddressNotation::Decimal)
    }
}
