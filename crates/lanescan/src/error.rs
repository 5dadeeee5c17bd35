use thiserror::Error;

/// Rejected split input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// A separator sequence must contain at least one element.
    #[error("separator must contain at least one element")]
    EmptySeparator,
}
