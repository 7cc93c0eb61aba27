use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlagpoleError {
    #[error("Not a valid ISO-3166-1 alpha-2 or alpha-3 country code: {0}")]
    InvalidCountryCode(String),
}
