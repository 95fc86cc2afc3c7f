use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolverError>;

/// Internal faults. These never escape [`crate::Resolver::resolve`]; the
/// boundary maps them to the `InternalError` outcome.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("address {0:#x} does not fit the 24-bit space")]
    AddressRange(u64),
}
