use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The locale id has no entry in the rule table
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}
