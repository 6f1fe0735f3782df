use crate::error::{Argument, Error, Result};
use crate::traits::SequencePredicates;

/// Check whether a sequence is empty.
///
/// An absent sequence is an [`Error::InvalidArgument`]. Otherwise at most
/// one item is pulled from it, so infinite sequences are fine.
///
/// To keep using an iterator afterwards, pass it by mutable reference.
pub fn is_empty<S>(sequence: Option<S>) -> Result<bool>
where
    S: IntoIterator,
{
    let sequence = present(sequence, Argument::Sequence)?;
    Ok(sequence.into_iter().is_empty_sequence())
}

/// Check that no item of a sequence satisfies a predicate.
///
/// The sequence is checked for presence before the predicate, and both
/// before anything is traversed. The predicate runs once per item, in order,
/// until it returns `true`.
pub fn none<S, P>(sequence: Option<S>, predicate: Option<P>) -> Result<bool>
where
    S: IntoIterator,
    P: FnMut(S::Item) -> bool,
{
    let sequence = present(sequence, Argument::Sequence)?;
    let predicate = present(predicate, Argument::Predicate)?;
    Ok(sequence.into_iter().none(predicate))
}

fn present<T>(value: Option<T>, argument: Argument) -> Result<T> {
    value.ok_or_else(|| {
        tracing::debug!(argument = argument.as_ref(), "absent argument");
        Error::InvalidArgument(argument)
    })
}
