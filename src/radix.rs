//! Number bases for parsing and rendering.



//		Modules

#[cfg(test)]
#[path = "tests/radix.rs"]
mod tests;



//		Packages

use crate::errors::IntError;



//		Constants

/// Lowercase digit characters, indexed by value.
const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Uppercase digit characters, indexed by value.
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";



//		Enums

//		Radix
/// The number bases an [`Int`](crate::Int) can be parsed from and rendered in.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Radix {
	/// Base 2.
	Binary,

	/// Base 8.
	Octal,

	/// Base 10.
	#[default]
	Decimal,

	/// Base 16.
	Hexadecimal,
}

//󰭅		Radix
impl Radix {
	//		base
	/// The numeric base, e.g. `16` for [`Radix::Hexadecimal`].
	#[must_use]
	pub const fn base(self) -> u8 {
		match self {
			Self::Binary      => 2,
			Self::Octal       => 8,
			Self::Decimal     => 10,
			Self::Hexadecimal => 16,
		}
	}

	//		prefix
	/// The prefix written before the digits in alternate (`#`) formatting.
	#[must_use]
	pub const fn prefix(self) -> &'static str {
		match self {
			Self::Binary      => "0b",
			Self::Octal       => "0o",
			Self::Decimal     => "",
			Self::Hexadecimal => "0x",
		}
	}

	//		bits_per_digit
	/// How many bits each digit covers, for the bases that map bytes straight
	/// to digits without division.
	pub(crate) const fn bits_per_digit(self) -> Option<usize> {
		match self {
			Self::Binary                => Some(1),
			Self::Hexadecimal           => Some(4),
			Self::Octal | Self::Decimal => None,
		}
	}

	//		digit_char
	/// The ASCII character for a digit value. Only the low four bits are used.
	pub(crate) fn digit_char(value: u8, uppercase: bool) -> u8 {
		let digits = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
		digits.get(usize::from(value & 0x0F)).copied().unwrap_or(b'0')
	}

	//		digit_value
	/// Validates a single digit against this base.
	///
	/// # Errors
	///
	///   - [`IntError::InvalidDigit`] if the character is not a digit in any
	///     supported base.
	///   - [`IntError::InvalidRadix`] if the digit is too large for this base.
	///
	pub(crate) fn digit_value(self, c: char) -> Result<u8, IntError> {
		let value = c.to_digit(16).ok_or(IntError::InvalidDigit(c))?;
		let value = u8::try_from(value).map_err(|_| IntError::InvalidDigit(c))?;
		if value >= self.base() {
			return Err(IntError::InvalidRadix(c, self.base()));
		}
		Ok(value)
	}

	//		split_prefix
	/// Detects a base prefix on text longer than two characters.
	///
	/// A leading `0` followed by `x` selects hexadecimal and by `b` selects
	/// binary, with the digits following the two-character prefix. Any other
	/// leading `0` selects octal, with the digits following the `0`. Returns
	/// [`None`] when the text has no prefix, meaning it is decimal.
	pub(crate) fn split_prefix(text: &str) -> Option<(Self, &str)> {
		if text.len() <= 2 {
			return None;
		}
		let rest = text.strip_prefix('0')?;
		if let Some(digits) = rest.strip_prefix('x') {
			Some((Self::Hexadecimal, digits))
		} else if let Some(digits) = rest.strip_prefix('b') {
			Some((Self::Binary, digits))
		} else {
			Some((Self::Octal, rest))
		}
	}
}



//		Functions

//		is_separator
/// Whether a character is a digit-grouping separator, which parsing skips.
pub(crate) const fn is_separator(c: char) -> bool {
	matches!(c, '\'' | ' ')
}
