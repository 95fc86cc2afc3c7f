mod ascii;
mod classifier;
mod error;
mod fuzzy;
mod resolver;

pub use ascii::{resolve_ascii, to_char, to_codepoints};
pub use classifier::{AddressNotation, Classification, TokenClassifier};
pub use error::{ResolverError, Result};
pub use fuzzy::{closest_names, DEFAULT_SUGGESTIONS};
pub use resolver::Resolver;
