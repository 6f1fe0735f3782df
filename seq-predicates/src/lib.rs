//! Emptiness and none-match predicates over sequences.
//!
//! Two entry points take their arguments as `Option`, so an absent argument
//! is reported as an [`Error::InvalidArgument`] instead of a panic:
//!
//! ```
//! use seq_predicates::{is_empty, none, Argument, Error};
//!
//! assert_eq!(is_empty(Some(Vec::<u8>::new())), Ok(true));
//! assert_eq!(none(Some([1, 2, 3]), Some(|x: i32| x > 5)), Ok(true));
//! assert_eq!(
//!     none(Some([1, 2, 3]), None::<fn(i32) -> bool>),
//!     Err(Error::InvalidArgument(Argument::Predicate))
//! );
//! ```
//!
//! When there is nothing to validate, [`SequencePredicates`] offers the same
//! checks as methods on any iterator:
//!
//! ```
//! use seq_predicates::SequencePredicates;
//!
//! let mut iter = (1..).map(|x| x * 2);
//! assert!(!iter.is_empty_sequence());
//! assert!(!iter.none(|x| x > 10));
//! ```
//!
//! Traversal goes through [`Iterator::any`], so it is lazy and stops as soon
//! as the answer is known.

mod error;
mod predicates;
mod traits;

pub use crate::error::{Argument, Error, Result};
pub use crate::predicates::{is_empty, none};
pub use crate::traits::SequencePredicates;
