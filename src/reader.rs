//! Whitespace-separated token reading.



//		Modules

#[cfg(test)]
#[path = "tests/reader.rs"]
mod tests;



//		Packages

use crate::{
	int::Int,
	radix::Radix,
	storage::Width,
};
use std::io::{BufRead, Error as IoError, ErrorKind as IoErrorKind};



//		Structs

//		TokenReader
/// Reads [`Int`]s from a stream of whitespace-separated tokens.
///
/// Each token is parsed with [`Int::from_str_radix()`] in the reader's
/// current [`Radix`]. A token that fails to parse, or an I/O error, puts the
/// reader into a failed state: the read yields [`None`], and so does every
/// read after it until [`TokenReader::clear()`] is called. Reaching the end of
/// the input also yields [`None`], but is not a failure.
///
/// # Examples
///
/// ```
/// use fixint::{Radix, SInt, TokenReader};
/// use typenum::U32;
///
/// let mut reader = TokenReader::new("-42 ff".as_bytes());
/// assert_eq!(reader.read::<U32, true>(), Some(SInt::<U32>::from(-42_i32)));
/// reader.set_radix(Radix::Hexadecimal);
/// assert_eq!(reader.read::<U32, true>(), Some(SInt::<U32>::from(255_i32)));
/// assert_eq!(reader.read::<U32, true>(), None);
/// assert!(!reader.is_failed());
/// ```
///
#[derive(Debug)]
pub struct TokenReader<R> {
	/// The underlying input.
	reader: R,

	/// The base tokens are parsed in.
	radix:  Radix,

	/// Whether a read has failed since the last clear.
	failed: bool,
}

//󰭅		TokenReader
impl<R: BufRead> TokenReader<R> {
	//		Constructors

	//		new
	/// Creates a reader that parses decimal tokens.
	///
	/// # Parameters
	///
	/// * `reader` - The input to read from.
	///
	pub const fn new(reader: R) -> Self {
		Self::with_radix(reader, Radix::Decimal)
	}

	//		with_radix
	/// Creates a reader that parses tokens in the given base.
	///
	/// # Parameters
	///
	/// * `reader` - The input to read from.
	/// * `radix`  - The base to parse tokens in.
	///
	pub const fn with_radix(reader: R, radix: Radix) -> Self {
		Self { reader, radix, failed: false }
	}

	//		Public methods

	//		clear
	/// Clears the failed state, so that reading can continue.
	pub const fn clear(&mut self) {
		self.failed = false;
	}

	//		into_inner
	/// Returns the underlying input.
	pub fn into_inner(self) -> R {
		self.reader
	}

	//		is_failed
	/// Whether a read has failed since the last clear.
	#[must_use]
	pub const fn is_failed(&self) -> bool {
		self.failed
	}

	//		radix
	/// The base tokens are parsed in.
	#[must_use]
	pub const fn radix(&self) -> Radix {
		self.radix
	}

	//		read
	/// Reads the next token as an [`Int`].
	///
	/// Returns [`None`] at the end of the input, or if the reader is in the
	/// failed state, which this call enters if the token cannot be read or
	/// parsed.
	///
	pub fn read<W: Width, const SIGNED: bool>(&mut self) -> Option<Int<W, SIGNED>> {
		if self.failed {
			return None;
		}
		let parsed = match self.next_token() {
			Ok(Some(token)) => Int::from_str_radix(&token, self.radix).ok(),
			Ok(None)        => return None,
			Err(_)          => None,
		};
		self.failed = parsed.is_none();
		parsed
	}

	//		set_radix
	/// Changes the base subsequent tokens are parsed in.
	///
	/// # Parameters
	///
	/// * `radix` - The base to parse tokens in.
	///
	pub const fn set_radix(&mut self, radix: Radix) {
		self.radix = radix;
	}

	//		Private methods

	//		next_token
	/// Skips leading whitespace and collects bytes up to the next whitespace or
	/// the end of the input. The trailing whitespace is left unread.
	fn next_token(&mut self) -> Result<Option<String>, IoError> {
		let mut token = Vec::new();
		loop {
			let available = match self.reader.fill_buf() {
				Ok(available)                                      => available,
				Err(err) if err.kind() == IoErrorKind::Interrupted => continue,
				Err(err)                                           => return Err(err),
			};
			if available.is_empty() {
				break;
			}
			let skipped  = if token.is_empty() {
				available.iter().take_while(|byte| byte.is_ascii_whitespace()).count()
			} else {
				0
			};
			let taken    = available.iter().skip(skipped).take_while(|byte| !byte.is_ascii_whitespace()).count();
			let complete = skipped + taken < available.len();
			token.extend(available.iter().skip(skipped).take(taken));
			self.reader.consume(skipped + taken);
			if complete && !token.is_empty() {
				break;
			}
		}
		if token.is_empty() {
			return Ok(None);
		}
		String::from_utf8(token)
			.map(Some)
			.map_err(|err| IoError::new(IoErrorKind::InvalidData, err))
	}
}
