use strum_macros::{AsRefStr, Display, EnumIter};
use thiserror::Error;

/// A parameter of one of the sequence predicates.
///
/// Used to report which argument was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[strum(serialize_all = "lowercase")]
pub enum Argument {
    /// The sequence to traverse.
    Sequence,
    /// The test applied to each element.
    Predicate,
}

/// Errors raised by the sequence predicates.
///
/// These are always raised before the sequence is traversed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// A required argument was absent.
    #[error("invalid argument: {0} is absent")]
    InvalidArgument(Argument),
}

impl Error {
    /// The argument this error is about.
    pub fn argument(&self) -> Argument {
        match self {
            Error::InvalidArgument(argument) => *argument,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
