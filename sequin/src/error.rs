use thiserror::Error;

/// Failure conditions of the sequence operators.
///
/// Numeric precondition errors (`NegativeCount`, `RangeOverflow`) are raised
/// when an operator is constructed, before any cursor exists. The remaining
/// conditions are detected during traversal, at the exact item where they
/// occur, and propagate to the caller unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A count argument was negative.
    #[error("count must not be negative")]
    NegativeCount,
    /// The last value of a range does not fit in a 32-bit integer.
    #[error("range end exceeds the representable integer range")]
    RangeOverflow,
    /// A terminal operator required at least one element.
    #[error("sequence contains no elements")]
    EmptySequence,
    /// No element satisfied the predicate.
    #[error("no element satisfies the predicate")]
    NoMatch,
    /// More than one element qualified where exactly one was required.
    #[error("sequence contains more than one matching element")]
    MultipleElements,
    /// A counter exceeded its representable range.
    #[error("count overflowed its integer range")]
    CountOverflow,
}

pub type Result<T> = std::result::Result<T, Error>;
