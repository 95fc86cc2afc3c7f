use equate_protocol::AsciiOutcome;

/// Convert between a character and its code point, dispatching on shape.
///
/// A first token that parses as a non-negative integer is treated as a code
/// point and encoded; any other token is expanded scalar by scalar.
#[must_use]
pub fn resolve_ascii(raw_query: &str) -> AsciiOutcome {
    let Some(token) = raw_query.split_whitespace().next() else {
        return AsciiOutcome::EmptyInput;
    };
    match token.parse::<u64>() {
        Ok(codepoint) => to_char(codepoint),
        Err(_) => to_codepoints(token),
    }
}

/// Encode one code point as text.
///
/// Surrogates and values past U+10FFFF come back as `InvalidCodepoint`,
/// never as malformed bytes.
#[must_use]
pub fn to_char(codepoint: u64) -> AsciiOutcome {
    match u32::try_from(codepoint).ok().and_then(char::from_u32) {
        Some(ch) => AsciiOutcome::Char {
            codepoint: u32::from(ch),
            text: ch.to_string(),
        },
        None => AsciiOutcome::InvalidCodepoint { codepoint },
    }
}

/// Expand text to its scalar values, order preserved.
#[must_use]
pub fn to_codepoints(text: &str) -> AsciiOutcome {
    AsciiOutcome::Codepoints {
        text: text.to_string(),
        codepoints: text.chars().map(u32::from).collect(),
    }
}
