//! Contains error types used throughout the library.



//		Modules

#[cfg(test)]
#[path = "tests/errors.rs"]
mod tests;



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		IntError
/// Represents all possible errors that fixed-width integer operations can
/// raise.
///
/// Each variant belongs to one of two broad [`ErrorKind`]s, available through
/// [`IntError::kind()`]. Invalid input is always detected while parsing, before
/// anything is written to the destination. Overflow aborts the operation that
/// triggered it, and is never downgraded to a wrapped result.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum IntError {
	/// A division or remainder operation was given a zero divisor.
	#[error("Division by zero")]
	DivisionByZero,

	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,

	/// The incoming value contains a character that is not a digit in any
	/// supported base.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The incoming value contains a digit that is out of range for the base.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),

	/// The signed minimum value has no positive counterpart.
	#[error("Negation overflow: minimum value cannot be negated")]
	NegationOverflow,

	/// A negative sign was given for a base other than decimal.
	#[error("Negative sign not allowed for base {0}")]
	NegativeRadix(u8),

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be represented by the destination
	/// type.
	#[error("Value too large")]
	ValueTooLarge,
}

//󰭅		IntError
impl IntError {
	//		kind
	/// The broad category of the error.
	#[must_use]
	pub const fn kind(&self) -> ErrorKind {
		match *self {
			Self::EmptyValue         |
			Self::InvalidDigit(_)    |
			Self::InvalidRadix(_, _) |
			Self::NegativeRadix(_)   |
			Self::ValueIsNegative    => ErrorKind::InvalidInput,
			Self::DivisionByZero     |
			Self::NegationOverflow   |
			Self::ValueTooLarge      => ErrorKind::Overflow,
		}
	}
}

//		ErrorKind
/// The two categories of [`IntError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Malformed text, or a sign the destination cannot hold.
	InvalidInput,

	/// A result that cannot be represented, or a division by zero.
	Overflow,
}
