/// Emptiness and none-match checks on any iterator.
///
/// This is implemented for every iterator, so bringing it into scope is
/// enough. Both methods borrow the iterator, so whatever they did not consume
/// is still available to the caller afterwards.
pub trait SequencePredicates: Iterator {
    /// Check whether the sequence is empty
    ///
    /// This pulls at most one item. Calling it again on the same iterator
    /// checks the remainder, which may give a different answer.
    fn is_empty_sequence(&mut self) -> bool
    where
        Self: Sized,
    {
        !self.any(|_| true)
    }

    /// Check that no item in the sequence satisfies `predicate`.
    ///
    /// The predicate is called in sequence order and traversal stops at the
    /// first item it accepts. An empty sequence has no matching item.
    fn none<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        !self.any(predicate)
    }
}

impl<I> SequencePredicates for I where I: Iterator {}
