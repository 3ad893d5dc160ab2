//! Fixed-width integer type.

//	These lint checks are unnecessary in this module because:
//	  1. We're working with GenericArray where we know the size at compile time.
//	  2. All our indexing is based on the BYTES constant which is tied to the
//	     type's size.
//	  3. Using .get() would add unnecessary runtime checks and make the code
//	     more verbose with .unwrap()s.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]

//	This lint check is unnecessary in this module because these arithmetic
//	operations are the byte-level logic itself, and wrapping is the documented
//	behaviour of addition, subtraction, and multiplication.
#![allow(clippy::arithmetic_side_effects, reason = "Byte arithmetic is bounded by construction")]



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use crate::{
	errors::IntError,
	radix::{Radix, is_separator},
	storage::{Extended, Primitive, Signedness, Width},
};
use core::{
	cmp::Ordering,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	hash::{Hash, Hasher},
	iter::{Product, Sum},
	marker::PhantomData,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::{FromStr, from_utf8},
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use typenum::{IsGreaterOrEqual, IsLessOrEqual, True, U8, U16, U32, U64, U128};



//		Constants

/// The value one, as a single little-endian byte.
const ONE: [u8; 1] = [1];



//		Type aliases

/// Type alias for signed integers, for convenience.
pub type SInt<W> = Int<W, true>;

/// Type alias for unsigned integers, for convenience.
pub type UInt<W> = Int<W, false>;

/// The width of [`isize`] and [`usize`] on the target.
#[cfg(target_pointer_width = "16")]
type PointerBits = U16;

/// The width of [`isize`] and [`usize`] on the target.
#[cfg(target_pointer_width = "32")]
type PointerBits = U32;

/// The width of [`isize`] and [`usize`] on the target.
#[cfg(target_pointer_width = "64")]
type PointerBits = U64;



//		Structs

//		Int
/// A fixed-width integer.
///
/// This type provides an integer of any byte-aligned width, which can be
/// signed or unsigned, and behaves as closely to the native Rust integers as
/// the differences allow.
///
/// # Type parameters
///
/// * `W`      - The number of bits used to represent the integer, as a
///              [`typenum`] number that is a non-zero multiple of eight, e.g.
///              [`U24`](typenum::U24) or [`U256`](typenum::U256).
/// * `SIGNED` - Whether the integer is signed (`true`) or unsigned (`false`).
///
/// # Width
///
/// The width is fixed at compile time and never changes. Widening an [`Int`] to
/// a larger [`Int`] is done with [`Int::from_int()`] or [`Int::widen()`], and
/// creating one from a native integer with [`From`]. Both are only available
/// when the destination is at least as wide as the source, so narrowing fails
/// to compile rather than silently losing information. A negative source is
/// sign-extended according to its own signedness, so `-1_i8` becomes all ones
/// in a 128-bit unsigned destination.
///
/// # Arithmetic
///
/// The right-hand operand of every arithmetic operator can be an [`Int`] of any
/// signedness whose width is no larger than the left-hand side, or a native
/// integer that fits. The result always has the left-hand side's type.
///
///   1. Addition and subtraction wrap silently.
///   2. Multiplication works on magnitudes and truncates silently, but fails if
///      an operand is the signed minimum, which cannot be negated.
///   3. Division and remainder fail on a zero divisor.
///
/// The operators panic with the error message on failure, like the native
/// integers do on division by zero. The `try_` methods return the [`IntError`]
/// instead.
///
/// # Comparison
///
/// Any two [`Int`]s can be compared, regardless of width and signedness, as
/// can an [`Int`] and a native integer that fits. An unsigned value is never
/// equal to a negative one.
///
/// # Text
///
/// Text is parsed with [`FromStr`]. A `0x` prefix selects hexadecimal, `0b`
/// binary, and any other leading `0` octal; otherwise the text is decimal, and
/// may start with `-` if the type is signed. The characters `'` and space are
/// accepted as digit separators, e.g. `"100'000"`. A value that does not fit
/// the width is an error. Every character is checked before any digit is
/// accumulated, so text that is both malformed and too large reports
/// [`IntError::InvalidDigit`] or [`IntError::InvalidRadix`], never
/// [`IntError::ValueTooLarge`].
///
/// Rendering uses the standard formatting traits, with [`Display`] giving
/// decimal. Hexadecimal and binary show the raw two's-complement pattern. Octal
/// is computed by repeated division of the raw value.
///
/// # Internal representation
///
/// The value is stored as a sequence of bytes in little-endian order (least
/// significant byte first), regardless of the host's byte order. Within each
/// byte, bits are ordered from least significant (bit 0) to most significant
/// (bit 7). Host byte order only comes into play with [`Int::to_ne_bytes()`]
/// and [`Int::from_ne_bytes()`].
///
#[repr(transparent)]
pub struct Int<W: Width, const SIGNED: bool>(W::Buffer);

//󰭅		Int
impl<W: Width, const SIGNED: bool> Int<W, SIGNED> {
	//		Constants

	/// The size of this integer type in bits.
	pub const BITS: u32 = W::U32;

	/// The size of this integer type in bytes.
	#[expect(clippy::integer_division, reason = "Width is a multiple of eight")]
	pub const BYTES: usize = W::USIZE / 8;

	/// How the most significant byte is interpreted.
	const SIGNEDNESS: Signedness = Signedness::from_flag(SIGNED);

	//		Constructors

	//		from_be_bytes
	/// Creates an [`Int`] from big-endian bytes.
	///
	/// Every bit pattern is a valid value, so this cannot fail.
	///
	/// # Parameters
	///
	/// * `bytes` - The bytes, most significant first.
	///
	#[must_use]
	pub fn from_be_bytes(mut bytes: W::Buffer) -> Self {
		bytes.reverse();
		Self(bytes)
	}

	//		from_int
	/// Creates an [`Int`] from another [`Int`] that is no wider.
	///
	/// The source is sign-extended if it is signed and negative, and
	/// zero-extended otherwise. The signedness of the destination plays no
	/// part, so the bit pattern of the source is always preserved.
	///
	/// # Parameters
	///
	/// * `other` - The value to widen.
	///
	/// # See also
	///
	/// * [`Int::widen()`]
	///
	#[must_use]
	pub fn from_int<OW, const OS: bool>(other: Int<OW, OS>) -> Self
	where
		OW: Width + IsLessOrEqual<W, Output = True>,
	{
		let mut buffer = W::Buffer::default();
		other.extended().extend_into(&mut buffer);
		Self(buffer)
	}

	//		from_json
	/// Deserialises an [`Int`] from JSON.
	///
	/// Accepts either a JSON string, parsed as text, or a JSON number.
	///
	/// # Parameters
	///
	/// * `json` - The JSON to deserialise.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is malformed, or holds a value that does
	/// not fit.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		from_le_bytes
	/// Creates an [`Int`] from little-endian bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The bytes, least significant first.
	///
	#[must_use]
	pub const fn from_le_bytes(bytes: W::Buffer) -> Self {
		Self(bytes)
	}

	//		from_ne_bytes
	/// Creates an [`Int`] from bytes in the host's native order.
	///
	/// # Parameters
	///
	/// * `bytes` - The bytes, in native order.
	///
	#[must_use]
	pub fn from_ne_bytes(bytes: W::Buffer) -> Self {
		if cfg!(target_endian = "big") {
			Self::from_be_bytes(bytes)
		} else {
			Self::from_le_bytes(bytes)
		}
	}

	//		from_str_radix
	/// Parses text in a given base.
	///
	/// Decimal text is parsed exactly as by [`FromStr`], including prefix
	/// detection. For the other bases the text is taken as plain digits, with
	/// no prefix and no sign, so that the output of [`Int::to_string_radix()`]
	/// for a binary, octal, or hexadecimal value can be read back.
	///
	/// # Parameters
	///
	/// * `text`  - The text to parse.
	/// * `radix` - The base to parse in.
	///
	/// # Errors
	///
	///   - [`IntError::NegativeRadix`] if the text starts with `-` and the base
	///     is not decimal.
	///   - Any of the errors that parsing with [`FromStr`] can return.
	///
	pub fn from_str_radix(text: &str, radix: Radix) -> Result<Self, IntError> {
		if radix == Radix::Decimal {
			return text.parse();
		}
		if text.starts_with('-') {
			return Err(IntError::NegativeRadix(radix.base()));
		}
		Self::parse_digits(text, radix)
	}

	//		max_value
	/// The largest value this type can represent.
	#[must_use]
	pub fn max_value() -> Self {
		let mut buffer = W::Buffer::default();
		buffer.fill(0xFF);
		if SIGNED {
			buffer[Self::BYTES - 1] = 0x7F;
		}
		Self(buffer)
	}

	//		min_value
	/// The smallest value this type can represent.
	#[must_use]
	pub fn min_value() -> Self {
		if SIGNED {
			Self::sign_pattern()
		} else {
			Self::zero()
		}
	}

	//		one
	/// The value one.
	#[must_use]
	pub fn one() -> Self {
		Self::from_byte(1)
	}

	//		zero
	/// The value zero.
	#[must_use]
	pub fn zero() -> Self {
		Self(W::Buffer::default())
	}

	//		Public methods

	//		abs
	/// The absolute value.
	///
	/// # Panics
	///
	/// Panics if the value is the signed minimum, which has no positive
	/// counterpart.
	///
	/// # See also
	///
	/// * [`Int::try_abs()`]
	///
	#[must_use]
	#[track_caller]
	pub fn abs(self) -> Self {
		expect_op(self.try_abs())
	}

	//		as_slice
	/// The little-endian bytes of the value.
	///
	/// The length is always [`Self::BYTES`].
	///
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	//		bit
	/// Gets the value of a specific bit.
	///
	/// Returns `false` if the position is out of range.
	///
	/// # Parameters
	///
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	///
	#[must_use]
	pub fn bit(&self, pos: u32) -> bool {
		if pos >= Self::BITS {
			return false;
		}
		let (index, offset) = split_position(pos);
		self.0[index] & (1 << offset) != 0
	}

	//		byteswap
	/// Reverses the byte order of the value.
	#[must_use]
	pub fn byteswap(self) -> Self {
		let mut bytes = self.0;
		bytes.reverse();
		Self(bytes)
	}

	//		compare
	/// Compares against an [`Int`] of any width and signedness.
	///
	/// Both values are considered at the larger of the two widths, each
	/// extended according to its own signedness.
	///
	/// # Parameters
	///
	/// * `other` - The value to compare against.
	///
	#[must_use]
	pub fn compare<OW: Width, const OS: bool>(&self, other: &Int<OW, OS>) -> Ordering {
		if Self::BYTES < Int::<OW, OS>::BYTES {
			return other.compare(self).reverse();
		}
		self.extended().compare(&other.extended())
	}

	//		decrement
	/// Subtracts one in place, wrapping, and returns the new value.
	pub fn decrement(&mut self) -> Self {
		self.sub_extended(Extended::new(&ONE, Signedness::Unsigned));
		*self
	}

	//		increment
	/// Adds one in place, wrapping, and returns the new value.
	pub fn increment(&mut self) -> Self {
		self.add_extended(Extended::new(&ONE, Signedness::Unsigned));
		*self
	}

	//		is_negative
	/// Whether the value is less than zero. Always `false` for unsigned types.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.extended().is_negative()
	}

	//		is_zero
	/// Whether the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|&byte| byte == 0)
	}

	//		radix
	/// Renders the value in a chosen base.
	///
	/// Returns a [`Display`]able adaptor, which can also be switched to
	/// uppercase digits.
	///
	/// # Parameters
	///
	/// * `radix` - The base to render in.
	///
	/// # Examples
	///
	/// ```
	/// use fixint::{Radix, UInt};
	/// use typenum::U32;
	///
	/// let value = UInt::<U32>::from(0xBEEF_u16);
	/// assert_eq!(value.radix(Radix::Hexadecimal).uppercase().to_string(), "BEEF");
	/// ```
	///
	#[must_use]
	pub const fn radix(&self, radix: Radix) -> Formatted<'_, W, SIGNED> {
		Formatted { value: self, radix, uppercase: false }
	}

	//		set_bit
	/// Sets the value of a specific bit.
	///
	/// Returns `false` if the position is out of range, in which case nothing
	/// changes.
	///
	/// # Parameters
	///
	/// * `pos`   - The position of the bit to set, where `0` is the
	///             least-significant bit.
	/// * `value` - The value to set the bit to.
	///
	pub fn set_bit(&mut self, pos: u32, value: bool) -> bool {
		if pos >= Self::BITS {
			return false;
		}
		let (index, offset) = split_position(pos);
		if value {
			self.0[index] |=   1 << offset;
		} else {
			self.0[index] &= !(1 << offset);
		}
		true
	}

	//		set_str
	/// Replaces the value by parsing text.
	///
	/// # Parameters
	///
	/// * `text` - The text to parse, as accepted by [`FromStr`].
	///
	/// # Errors
	///
	/// Returns the parse error, in which case the value is left unchanged.
	///
	pub fn set_str(&mut self, text: &str) -> Result<(), IntError> {
		*self = text.parse()?;
		Ok(())
	}

	//		to_be_bytes
	/// The bytes of the value, most significant first.
	#[must_use]
	pub fn to_be_bytes(&self) -> W::Buffer {
		let mut bytes = self.0;
		bytes.reverse();
		bytes
	}

	//		to_json
	/// Serialises the value to JSON, as a hexadecimal string.
	///
	/// # Errors
	///
	/// Returns an error if serialisation fails.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_le_bytes
	/// The bytes of the value, least significant first.
	#[must_use]
	pub fn to_le_bytes(&self) -> W::Buffer {
		self.0
	}

	//		to_ne_bytes
	/// The bytes of the value, in the host's native order.
	#[must_use]
	pub fn to_ne_bytes(&self) -> W::Buffer {
		if cfg!(target_endian = "big") {
			self.to_be_bytes()
		} else {
			self.to_le_bytes()
		}
	}

	//		to_string_radix
	/// Renders the value in a chosen base, with lowercase digits.
	///
	/// Decimal has a leading `-` for negative values. The other bases render
	/// the two's-complement pattern and never have a sign or prefix.
	/// Hexadecimal and binary write every significant byte in full, i.e. two
	/// hex digits or eight binary digits per byte, so `10` is `"0a"` and zero
	/// is `"00"`.
	///
	/// # Parameters
	///
	/// * `radix` - The base to render in.
	///
	/// # Errors
	///
	/// Returns [`IntError::NegationOverflow`] when rendering the signed minimum
	/// in decimal.
	///
	pub fn to_string_radix(&self, radix: Radix) -> Result<String, IntError> {
		let mut digits        = W::Digits::default();
		let (start, negative) = self.render(radix, false, true, &mut digits)?;
		let mut text          = String::with_capacity(digits.len() - start + 1);
		if negative {
			text.push('-');
		}
		text.push_str(ascii(&digits[start..]));
		Ok(text)
	}

	//		try_abs
	/// The absolute value.
	///
	/// Unsigned values are returned unchanged.
	///
	/// # Errors
	///
	/// Returns [`IntError::NegationOverflow`] for the signed minimum.
	///
	pub fn try_abs(self) -> Result<Self, IntError> {
		if self.is_negative() {
			self.try_neg()
		} else {
			Ok(self)
		}
	}

	//		try_div
	/// Divides by an [`Int`] that is no wider.
	///
	/// The division runs over the raw bits of `self`, so a negative signed
	/// dividend is treated as its two's-complement pattern.
	///
	/// # Parameters
	///
	/// * `rhs` - The divisor.
	///
	/// # Errors
	///
	/// Returns [`IntError::DivisionByZero`] if `rhs` is zero.
	///
	pub fn try_div<OW, const OS: bool>(self, rhs: Int<OW, OS>) -> Result<Self, IntError>
	where
		OW: Width + IsLessOrEqual<W, Output = True>,
	{
		self.divide(rhs).map(|(quotient, _)| quotient)
	}

	//		try_mul
	/// Multiplies by an [`Int`] that is no wider.
	///
	/// The magnitudes are multiplied and the product truncated to the width,
	/// then negated for a signed result if exactly one operand was negative.
	///
	/// # Parameters
	///
	/// * `rhs` - The multiplier.
	///
	/// # Errors
	///
	/// Returns [`IntError::NegationOverflow`] if either operand is the signed
	/// minimum, or the product needs negating and is the minimum pattern.
	///
	pub fn try_mul<OW, const OS: bool>(self, rhs: Int<OW, OS>) -> Result<Self, IntError>
	where
		OW: Width + IsLessOrEqual<W, Output = True>,
	{
		self.multiply(rhs)
	}

	//		try_neg
	/// Negates the value, as complement plus one.
	///
	/// # Errors
	///
	/// Returns [`IntError::NegationOverflow`] if the bit pattern is that of the
	/// signed minimum, i.e. only the top bit set. This applies to unsigned
	/// types too.
	///
	pub fn try_neg(self) -> Result<Self, IntError> {
		if self.0 == Self::sign_pattern().0 {
			return Err(IntError::NegationOverflow);
		}
		let mut result = !self;
		result.add_extended(Extended::new(&ONE, Signedness::Unsigned));
		Ok(result)
	}

	//		try_rem
	/// The remainder of dividing by an [`Int`] that is no wider.
	///
	/// # Parameters
	///
	/// * `rhs` - The divisor.
	///
	/// # Errors
	///
	/// Returns [`IntError::DivisionByZero`] if `rhs` is zero.
	///
	/// # See also
	///
	/// * [`Int::try_div()`]
	///
	pub fn try_rem<OW, const OS: bool>(self, rhs: Int<OW, OS>) -> Result<Self, IntError>
	where
		OW: Width + IsLessOrEqual<W, Output = True>,
	{
		self.divide(rhs).map(|(_, remainder)| remainder)
	}

	//		widen
	/// Converts to an [`Int`] that is at least as wide.
	///
	/// # See also
	///
	/// * [`Int::from_int()`]
	///
	#[must_use]
	pub fn widen<OW, const OS: bool>(self) -> Int<OW, OS>
	where
		OW: Width,
		W:  IsLessOrEqual<OW, Output = True>,
	{
		Int::from_int(self)
	}

	//		Private methods

	//		add_extended
	/// Adds with ripple carry, discarding the final carry.
	fn add_extended(&mut self, rhs: Extended<'_>) {
		let mut carry = 0_u8;
		for (index, byte) in self.0.iter_mut().enumerate() {
			let (sum1, c1) = byte.overflowing_add(rhs.byte(index));
			let (sum2, c2) = sum1.overflowing_add(carry);
			*byte          = sum2;
			carry          = u8::from(c1 || c2);
		}
	}

	//		add_small
	/// Adds a single digit, failing if the carry escapes the width.
	fn add_small(&mut self, value: u8) -> Result<(), IntError> {
		let mut carry = value;
		for byte in self.0.iter_mut() {
			if carry == 0 {
				break;
			}
			let (sum, overflowed) = byte.overflowing_add(carry);
			*byte                 = sum;
			carry                 = u8::from(overflowed);
		}
		if carry == 0 { Ok(()) } else { Err(IntError::ValueTooLarge) }
	}

	//		compare_primitive
	/// Compares against a native integer.
	fn compare_primitive<T: Primitive>(&self, other: T) -> Ordering {
		let native = other.to_le();
		self.extended().compare(&Extended::new(native.as_slice(), T::SIGNEDNESS))
	}

	//		divide
	/// Restoring division, one bit of `self` at a time, most significant first.
	fn divide<OW: Width, const OS: bool>(self, divisor: Int<OW, OS>) -> Result<(Self, Self), IntError> {
		if divisor.is_zero() {
			return Err(IntError::DivisionByZero);
		}
		let mut quotient  = Self::zero();
		let mut remainder = Self::zero();
		for pos in (0..Self::BITS).rev() {
			remainder = remainder.shift_left(1);
			if self.bit(pos) {
				remainder.0[0] |= 1;
			}
			if remainder.compare(&divisor).is_ge() {
				remainder.sub_extended(divisor.extended());
				_ = quotient.set_bit(pos, true);
			}
		}
		Ok((quotient, remainder))
	}

	//		eq_primitive
	/// Tests equality with a native integer.
	fn eq_primitive<T: Primitive>(&self, other: T) -> bool {
		let native = other.to_le();
		let view   = Extended::new(native.as_slice(), T::SIGNEDNESS);
		if !SIGNED && view.is_negative() {
			return false;
		}
		self.extended().compare(&view).is_eq()
	}

	//		extended
	/// A view of the value for mixing with other widths.
	fn extended(&self) -> Extended<'_> {
		Extended::new(&self.0, Self::SIGNEDNESS)
	}

	//		from_byte
	/// Creates a value from a single non-negative byte.
	fn from_byte(value: u8) -> Self {
		let mut buffer = W::Buffer::default();
		buffer[0]      = value;
		Self(buffer)
	}

	//		from_primitive
	/// Creates a value from a native integer, extending by its signedness.
	fn from_primitive<T: Primitive>(value: T) -> Self {
		let native     = value.to_le();
		let mut buffer = W::Buffer::default();
		Extended::new(native.as_slice(), T::SIGNEDNESS).extend_into(&mut buffer);
		Self(buffer)
	}

	//		multiply
	/// Schoolbook multiplication of the magnitudes, truncated to the width.
	fn multiply<OW: Width, const OS: bool>(self, rhs: Int<OW, OS>) -> Result<Self, IntError> {
		let mut negative = false;
		let lhs          = if self.is_negative() {
			negative = !negative;
			self.try_neg()?
		} else {
			self
		};
		let rhs          = if rhs.is_negative() {
			negative = !negative;
			rhs.try_neg()?
		} else {
			rhs
		};
		let mut product  = W::Buffer::default();
		for (i, &left) in lhs.0.iter().enumerate() {
			let mut carry = 0_u16;
			for (j, &right) in rhs.0.iter().enumerate() {
				let Some(target) = product.get_mut(i + j) else {
					break;
				};
				let partial     = u16::from(left) * u16::from(right) + u16::from(*target) + carry;
				let [low, high] = partial.to_le_bytes();
				*target         = low;
				carry           = u16::from(high);
			}
			if let Some(target) = product.get_mut(i + rhs.0.len()) {
				let [low, _] = (u16::from(*target) + carry).to_le_bytes();
				*target      = low;
			}
		}
		if SIGNED && negative {
			Self(product).try_neg()
		} else {
			Ok(Self(product))
		}
	}

	//		multiply_small
	/// Multiplies by a base, failing if the carry escapes the width.
	fn multiply_small(&mut self, base: u8) -> Result<(), IntError> {
		let mut carry = 0_u16;
		for byte in self.0.iter_mut() {
			let [low, high] = (u16::from(*byte) * u16::from(base) + carry).to_le_bytes();
			*byte           = low;
			carry           = u16::from(high);
		}
		if carry == 0 { Ok(()) } else { Err(IntError::ValueTooLarge) }
	}

	//		parse_digits
	/// Parses plain digits in a base, skipping separators.
	///
	/// Every character is validated before any digit is accumulated.
	///
	fn parse_digits(text: &str, radix: Radix) -> Result<Self, IntError> {
		let digits = text.chars().filter(|&c| !is_separator(c));
		if let Some(err) = digits.clone().find_map(|c| radix.digit_value(c).err()) {
			return Err(err);
		}
		if digits.clone().next().is_none() {
			return Err(IntError::EmptyValue);
		}
		let mut value = Self::zero();
		for c in digits {
			value.multiply_small(radix.base())?;
			value.add_small(radix.digit_value(c)?)?;
		}
		Ok(value)
	}

	//		render
	/// Writes the digits of the value into the end of `digits`.
	///
	/// Returns the index of the first digit, and whether the value is negative.
	/// Only decimal ever reports a negative value; the other bases render the
	/// raw bit pattern. With `whole_bytes`, binary and hexadecimal keep the
	/// leading zero digits of the most significant non-zero byte.
	///
	fn render(
		&self,
		radix:       Radix,
		uppercase:   bool,
		whole_bytes: bool,
		digits:      &mut W::Digits,
	) -> Result<(usize, bool), IntError> {
		let buffer: &mut [u8] = digits;
		let mut pos           = buffer.len();

		//	Binary and hexadecimal map bytes straight to digits
		if let Some(bits) = radix.bits_per_digit() {
			let top  = self.0.iter().rposition(|&byte| byte != 0).unwrap_or(0);
			let mask = (1_u8 << bits) - 1;
			for &byte in &self.0[..=top] {
				for shift in (0_u32..8).step_by(bits) {
					pos         -= 1;
					buffer[pos]  = Radix::digit_char((byte >> shift) & mask, uppercase);
				}
			}
			while !whole_bytes && pos + 1 < buffer.len() && buffer[pos] == b'0' {
				pos += 1;
			}
			return Ok((pos, false));
		}

		//	Octal and decimal divide repeatedly, and only decimal takes the sign
		let negative  = radix == Radix::Decimal && self.is_negative();
		let mut value = if negative { self.try_neg()? } else { *self };
		let base      = Self::from_byte(radix.base());
		loop {
			let (quotient, remainder) = value.divide(base)?;
			pos                      -= 1;
			buffer[pos]               = Radix::digit_char(remainder.0[0], uppercase);
			value                     = quotient;
			if value.is_zero() {
				break;
			}
		}
		Ok((pos, negative))
	}

	//		shift_left
	/// Shifts towards the most significant end, filling with zero.
	fn shift_left(self, shift: u32) -> Self {
		if shift == 0 {
			return self;
		}
		if shift >= Self::BITS {
			return Self::zero();
		}
		let (bytes, bits) = split_position(shift);
		let mut result    = W::Buffer::default();
		for (target, &byte) in result.iter_mut().skip(bytes).zip(self.0.iter()) {
			*target = byte;
		}
		if bits > 0 {
			let mut carry = 0_u8;
			for byte in result.iter_mut() {
				let [low, high] = (u16::from(*byte) << bits).to_le_bytes();
				*byte           = low | carry;
				carry           = high;
			}
		}
		Self(result)
	}

	//		shift_right
	/// Shifts towards the least significant end, filling with the sign for
	/// signed types and zero otherwise.
	fn shift_right(self, shift: u32) -> Self {
		if shift == 0 {
			return self;
		}
		let source     = self.extended();
		let mut result = W::Buffer::default();
		if shift >= Self::BITS {
			result.fill(source.fill());
			return Self(result);
		}
		let (bytes, bits) = split_position(shift);
		for (index, target) in result.iter_mut().enumerate() {
			let low  = source.byte(index + bytes);
			let high = source.byte(index + bytes + 1);
			*target  = if bits == 0 { low } else { (low >> bits) | (high << (8 - bits)) };
		}
		Self(result)
	}

	//		sign_pattern
	/// The bit pattern with only the top bit set.
	fn sign_pattern() -> Self {
		let mut buffer          = W::Buffer::default();
		buffer[Self::BYTES - 1] = 0x80;
		Self(buffer)
	}

	//		sub_extended
	/// Subtracts with ripple borrow, discarding the final borrow.
	fn sub_extended(&mut self, rhs: Extended<'_>) {
		let mut borrow = false;
		for (index, byte) in self.0.iter_mut().enumerate() {
			let (diff1, b1) = byte.overflowing_sub(rhs.byte(index));
			let (diff2, b2) = diff1.overflowing_sub(u8::from(borrow));
			*byte           = diff2;
			borrow          = b1 || b2;
		}
	}

	//		write_radix
	/// Renders through a [`Formatter`], honouring padding and the alternate
	/// prefix.
	fn write_radix(&self, f: &mut Formatter<'_>, radix: Radix, uppercase: bool, whole_bytes: bool) -> fmt::Result {
		let mut digits        = W::Digits::default();
		let (start, negative) = self.render(radix, uppercase, whole_bytes, &mut digits).map_err(|_| fmt::Error)?;
		f.pad_integral(!negative, radix.prefix(), ascii(&digits[start..]))
	}
}

//󰭅		Add
impl<W: Width, const SIGNED: bool, OW, const OS: bool> Add<Int<OW, OS>> for Int<W, SIGNED>
where
	OW: Width + IsLessOrEqual<W, Output = True>,
{
	type Output = Self;

	//		add
	fn add(mut self, rhs: Int<OW, OS>) -> Self::Output {
		self.add_extended(rhs.extended());
		self
	}
}

//󰭅		AddAssign
impl<W: Width, const SIGNED: bool, OW, const OS: bool> AddAssign<Int<OW, OS>> for Int<W, SIGNED>
where
	OW: Width + IsLessOrEqual<W, Output = True>,
{
	//		add_assign
	fn add_assign(&mut self, rhs: Int<OW, OS>) {
		self.add_extended(rhs.extended());
	}
}

//󰭅		Binary
impl<W: Width, const SIGNED: bool> Binary for Int<W, SIGNED> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.write_radix(f, Radix::Binary, false, false)
	}
}

//󰭅		BitAnd
impl<W: Width, const SIGNED: bool> BitAnd for Int<W, SIGNED> {
	type Output = Self;

	//		bitand
	fn bitand(mut self, rhs: Self) -> Self::Output {
		self &= rhs;
		self
	}
}

//󰭅		BitAndAssign
impl<W: Width, const SIGNED: bool> BitAndAssign for Int<W, SIGNED> {
	//		bitand_assign
	fn bitand_assign(&mut self, rhs: Self) {
		for (byte, other) in self.0.iter_mut().zip(rhs.0.iter()) {
			*byte &= other;
		}
	}
}

//󰭅		BitOr
impl<W: Width, const SIGNED: bool> BitOr for Int<W, SIGNED> {
	type Output = Self;

	//		bitor
	fn bitor(mut self, rhs: Self) -> Self::Output {
		self |= rhs;
		self
	}
}

//󰭅		BitOrAssign
impl<W: Width, const SIGNED: bool> BitOrAssign for Int<W, SIGNED> {
	//		bitor_assign
	fn bitor_assign(&mut self, rhs: Self) {
		for (byte, other) in self.0.iter_mut().zip(rhs.0.iter()) {
			*byte |= other;
		}
	}
}

//󰭅		BitXor
impl<W: Width, const SIGNED: bool> BitXor for Int<W, SIGNED> {
	type Output = Self;

	//		bitxor
	fn bitxor(mut self, rhs: Self) -> Self::Output {
		self ^= rhs;
		self
	}
}

//󰭅		BitXorAssign
impl<W: Width, const SIGNED: bool> BitXorAssign for Int<W, SIGNED> {
	//		bitxor_assign
	fn bitxor_assign(&mut self, rhs: Self) {
		for (byte, other) in self.0.iter_mut().zip(rhs.0.iter()) {
			*byte ^= other;
		}
	}
}

//󰭅		Clone
impl<W: Width, const SIGNED: bool> Clone for Int<W, SIGNED> {
	//		clone
	fn clone(&self) -> Self {
		*self
	}
}

//󰭅		Copy
impl<W: Width, const SIGNED: bool> Copy for Int<W, SIGNED> {}

//󰭅		Debug
impl<W: Width, const SIGNED: bool> Debug for Int<W, SIGNED> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - Int::<bits, signed>(value)
		write!(f, "Int::<{}, {}>(", Self::BITS, SIGNED)?;
		match self.to_string_radix(Radix::Decimal) {
			Ok(text) => f.write_str(&text)?,
			//	The signed minimum has no decimal magnitude of its own width
			Err(_)   => write!(f, "{self:#x}")?,
		}
		f.write_str(")")
	}
}

//󰭅		Default
impl<W: Width, const SIGNED: bool> Default for Int<W, SIGNED> {
	//		default
	fn default() -> Self {
		Self::zero()
	}
}

//󰭅		Deserialize
impl<'de, W: Width, const SIGNED: bool> Deserialize<'de> for Int<W, SIGNED> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(IntVisitor::<W, SIGNED>(PhantomData))
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(BytesVisitor::<W, SIGNED>(PhantomData))
		}
	}
}

//󰭅		Display
impl<W: Width, const SIGNED: bool> Display for Int<W, SIGNED> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.write_radix(f, Radix::Decimal, false, false)
	}
}

//󰭅		Div
impl<W: Width, const SIGNED: bool, OW, const OS: bool> Div<Int<OW, OS>> for Int<W, SIGNED>
where
	OW: Width + IsLessOrEqual<W, Output = True>,
{
	type Output = Self;

	//		div
	#[track_caller]
	fn div(self, rhs: Int<OW, OS>) -> Self::Output {
		expect_op(self.try_div(rhs))
	}
}

//󰭅		DivAssign
impl<W: Width, const SIGNED: bool, OW, const OS: bool> DivAssign<Int<OW, OS>> for Int<W, SIGNED>
where
	OW: Width + IsLessOrEqual<W, Output = True>,
{
	//		div_assign
	#[track_caller]
	fn div_assign(&mut self, rhs: Int<OW, OS>) {
		*self = *self / rhs;
	}
}

//󰭅		Eq
impl<W: Width, const SIGNED: bool> Eq for Int<W, SIGNED> {}

//󰭅		FromStr
impl<W: Width, const SIGNED: bool> FromStr for Int<W, SIGNED> {
	type Err = IntError;

	//		from_str
	/// Parses text, detecting the base from its prefix.
	///
	/// All characters are validated first, and only then are the digits
	/// accumulated. A digit error is therefore reported in preference to an
	/// overflow, wherever in the text each occurs.
	///
	fn from_str(text: &str) -> Result<Self, Self::Err> {
		if text.is_empty() {
			return Err(IntError::EmptyValue);
		}
		if let Some((radix, digits)) = Radix::split_prefix(text) {
			return Self::parse_digits(digits, radix);
		}
		match text.strip_prefix('-') {
			Some(_) if !SIGNED => Err(IntError::ValueIsNegative),
			Some(digits)       => Self::parse_digits(digits, Radix::Decimal)?.try_neg(),
			None               => Self::parse_digits(text, Radix::Decimal),
		}
	}
}

//󰭅		Hash
impl<W: Width, const SIGNED: bool> Hash for Int<W, SIGNED> {
	//		hash
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

//󰭅		LowerHex
impl<W: Width, const SIGNED: bool> LowerHex for Int<W, SIGNED> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.write_radix(f, Radix::Hexadecimal, false, false)
	}
}

//󰭅		Mul
impl<W: Width, const SIGNED: bool, OW, const OS: bool> Mul<Int<OW, OS>> for Int<W, SIGNED>
where
	OW: Width + IsLessOrEqual<W, Output = True>,
{
	type Output = Self;

	//		mul
	#[track_caller]
	fn mul(self, rhs: Int<OW, OS>) -> Self::Output {
		expect_op(self.try_mul(rhs))
	}
}

//󰭅		MulAssign
impl<W: Width, const SIGNED: bool, OW, const OS: bool> MulAssign<Int<OW, OS>> for Int<W, SIGNED>
where
	OW: Width + IsLessOrEqual<W, Output = True>,
{
	//		mul_assign
	#[track_caller]
	fn mul_assign(&mut self, rhs: Int<OW, OS>) {
		*self = *self * rhs;
	}
}

//󰭅		Neg
impl<W: Width, const SIGNED: bool> Neg for Int<W, SIGNED> {
	type Output = Self;

	//		neg
	#[track_caller]
	fn neg(self) -> Self::Output {
		expect_op(self.try_neg())
	}
}

//󰭅		Not
impl<W: Width, const SIGNED: bool> Not for Int<W, SIGNED> {
	type Output = Self;

	//		not
	fn not(mut self) -> Self::Output {
		for byte in self.0.iter_mut() {
			*byte = !*byte;
		}
		self
	}
}

//󰭅		Octal
impl<W: Width, const SIGNED: bool> Octal for Int<W, SIGNED> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.write_radix(f, Radix::Octal, false, false)
	}
}

//󰭅		Ord
impl<W: Width, const SIGNED: bool> Ord for Int<W, SIGNED> {
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		self.compare(other)
	}
}

//󰭅		PartialEq
impl<W: Width, const SIGNED: bool, OW: Width, const OS: bool> PartialEq<Int<OW, OS>> for Int<W, SIGNED> {
	//		eq
	fn eq(&self, other: &Int<OW, OS>) -> bool {
		if (!SIGNED && other.is_negative()) || (!OS && self.is_negative()) {
			return false;
		}
		self.compare(other).is_eq()
	}
}

//󰭅		PartialOrd
impl<W: Width, const SIGNED: bool, OW: Width, const OS: bool> PartialOrd<Int<OW, OS>> for Int<W, SIGNED> {
	//		partial_cmp
	fn partial_cmp(&self, other: &Int<OW, OS>) -> Option<Ordering> {
		Some(self.compare(other))
	}
}

//󰭅		Product
impl<W: Width, const SIGNED: bool> Product for Int<W, SIGNED> {
	//		product
	#[track_caller]
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::one(), |acc, value| expect_op(acc.multiply(value)))
	}
}

//󰭅		Product
impl<'a, W: Width, const SIGNED: bool> Product<&'a Self> for Int<W, SIGNED> {
	//		product
	#[track_caller]
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.copied().product()
	}
}

//󰭅		Rem
impl<W: Width, const SIGNED: bool, OW, const OS: bool> Rem<Int<OW, OS>> for Int<W, SIGNED>
where
	OW: Width + IsLessOrEqual<W, Output = True>,
{
	type Output = Self;

	//		rem
	#[track_caller]
	fn rem(self, rhs: Int<OW, OS>) -> Self::Output {
		expect_op(self.try_rem(rhs))
	}
}

//󰭅		RemAssign
impl<W: Width, const SIGNED: bool, OW, const OS: bool> RemAssign<Int<OW, OS>> for Int<W, SIGNED>
where
	OW: Width + IsLessOrEqual<W, Output = True>,
{
	//		rem_assign
	#[track_caller]
	fn rem_assign(&mut self, rhs: Int<OW, OS>) {
		*self = *self % rhs;
	}
}

//󰭅		Serialize
impl<W: Width, const SIGNED: bool> Serialize for Int<W, SIGNED> {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	Hex is total, whereas decimal cannot render the signed minimum
			serializer.serialize_str(&format!("{self:#x}"))
		} else {
			serializer.serialize_bytes(&self.0)
		}
	}
}

//󰭅		Shl
impl<W: Width, const SIGNED: bool> Shl<u32> for Int<W, SIGNED> {
	type Output = Self;

	//		shl
	fn shl(self, rhs: u32) -> Self::Output {
		self.shift_left(rhs)
	}
}

//󰭅		ShlAssign
impl<W: Width, const SIGNED: bool> ShlAssign<u32> for Int<W, SIGNED> {
	//		shl_assign
	fn shl_assign(&mut self, rhs: u32) {
		*self = self.shift_left(rhs);
	}
}

//󰭅		Shr
impl<W: Width, const SIGNED: bool> Shr<u32> for Int<W, SIGNED> {
	type Output = Self;

	//		shr
	fn shr(self, rhs: u32) -> Self::Output {
		self.shift_right(rhs)
	}
}

//󰭅		ShrAssign
impl<W: Width, const SIGNED: bool> ShrAssign<u32> for Int<W, SIGNED> {
	//		shr_assign
	fn shr_assign(&mut self, rhs: u32) {
		*self = self.shift_right(rhs);
	}
}

//󰭅		Sub
impl<W: Width, const SIGNED: bool, OW, const OS: bool> Sub<Int<OW, OS>> for Int<W, SIGNED>
where
	OW: Width + IsLessOrEqual<W, Output = True>,
{
	type Output = Self;

	//		sub
	fn sub(mut self, rhs: Int<OW, OS>) -> Self::Output {
		self.sub_extended(rhs.extended());
		self
	}
}

//󰭅		SubAssign
impl<W: Width, const SIGNED: bool, OW, const OS: bool> SubAssign<Int<OW, OS>> for Int<W, SIGNED>
where
	OW: Width + IsLessOrEqual<W, Output = True>,
{
	//		sub_assign
	fn sub_assign(&mut self, rhs: Int<OW, OS>) {
		self.sub_extended(rhs.extended());
	}
}

//󰭅		Sum
impl<W: Width, const SIGNED: bool> Sum for Int<W, SIGNED> {
	//		sum
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::zero(), |mut acc, value| {
			acc.add_extended(value.extended());
			acc
		})
	}
}

//󰭅		Sum
impl<'a, W: Width, const SIGNED: bool> Sum<&'a Self> for Int<W, SIGNED> {
	//		sum
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.copied().sum()
	}
}

//󰭅		TryFrom<&str>
impl<W: Width, const SIGNED: bool> TryFrom<&str> for Int<W, SIGNED> {
	type Error = IntError;

	//		try_from
	fn try_from(value: &str) -> Result<Self, Self::Error> {
		value.parse()
	}
}

//󰭅		TryFrom<String>
impl<W: Width, const SIGNED: bool> TryFrom<String> for Int<W, SIGNED> {
	type Error = IntError;

	//		try_from
	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

//󰭅		TryFrom<&String>
impl<W: Width, const SIGNED: bool> TryFrom<&String> for Int<W, SIGNED> {
	type Error = IntError;

	//		try_from
	fn try_from(value: &String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

//󰭅		UpperHex
impl<W: Width, const SIGNED: bool> UpperHex for Int<W, SIGNED> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.write_radix(f, Radix::Hexadecimal, true, false)
	}
}

//		Formatted
/// An [`Int`] rendered in a chosen base.
///
/// Created by [`Int::radix()`]. Digits are lowercase unless
/// [`Formatted::uppercase()`] is called. Width, fill, and the alternate prefix
/// are honoured as for the standard formatting traits.
///
/// Unlike [`LowerHex`] and [`Binary`], hexadecimal and binary output keeps
/// every significant byte whole, matching [`Int::to_string_radix()`].
///
#[derive(Clone, Copy, Debug)]
pub struct Formatted<'a, W: Width, const SIGNED: bool> {
	/// The value to render.
	value:     &'a Int<W, SIGNED>,

	/// The base to render in.
	radix:     Radix,

	/// Whether to use uppercase digits.
	uppercase: bool,
}

//󰭅		Formatted
impl<W: Width, const SIGNED: bool> Formatted<'_, W, SIGNED> {
	//		uppercase
	/// Switches to uppercase digits.
	#[must_use]
	pub const fn uppercase(mut self) -> Self {
		self.uppercase = true;
		self
	}
}

//󰭅		Display
impl<W: Width, const SIGNED: bool> Display for Formatted<'_, W, SIGNED> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.value.write_radix(f, self.radix, self.uppercase, true)
	}
}

//		BytesVisitor
/// A visitor for parsing integers from bytes.
struct BytesVisitor<W, const SIGNED: bool>(PhantomData<W>);

//󰭅		Visitor
impl<W: Width, const SIGNED: bool> Visitor<'_> for BytesVisitor<W, SIGNED> {
	type Value = Int<W, SIGNED>;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "{} little-endian bytes", Int::<W, SIGNED>::BYTES)
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		if v.len() != Int::<W, SIGNED>::BYTES {
			return Err(E::invalid_length(v.len(), &self));
		}
		let mut bytes = W::Buffer::default();
		bytes.copy_from_slice(v);
		Ok(Int::from_le_bytes(bytes))
	}
}

//		IntVisitor
/// A visitor for parsing integers from strings and numbers.
struct IntVisitor<W, const SIGNED: bool>(PhantomData<W>);

//󰭅		Visitor
impl<W: Width, const SIGNED: bool> Visitor<'_> for IntVisitor<W, SIGNED> {
	type Value = Int<W, SIGNED>;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer or a string containing one")
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		//	Going through text catches values too wide for the destination
		v.to_string().parse().map_err(E::custom)
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.to_string().parse().map_err(E::custom)
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}



//		Native integers

/// Implements conversion, comparison, and arithmetic with native integers.
macro_rules! impl_native {
	($($t:ty => $bits:ty),* $(,)?) => {
		$(
			impl<W, const SIGNED: bool> From<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				fn from(value: $t) -> Self {
					Self::from_primitive(value)
				}
			}

			impl<W, const SIGNED: bool> PartialEq<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				fn eq(&self, other: &$t) -> bool {
					self.eq_primitive(*other)
				}
			}

			impl<W, const SIGNED: bool> PartialEq<Int<W, SIGNED>> for $t
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				fn eq(&self, other: &Int<W, SIGNED>) -> bool {
					other.eq_primitive(*self)
				}
			}

			impl<W, const SIGNED: bool> PartialOrd<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
					Some(self.compare_primitive(*other))
				}
			}

			impl<W, const SIGNED: bool> PartialOrd<Int<W, SIGNED>> for $t
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				fn partial_cmp(&self, other: &Int<W, SIGNED>) -> Option<Ordering> {
					Some(other.compare_primitive(*self).reverse())
				}
			}

			impl<W, const SIGNED: bool> Add<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				type Output = Self;

				fn add(mut self, rhs: $t) -> Self::Output {
					self += rhs;
					self
				}
			}

			impl<W, const SIGNED: bool> AddAssign<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				fn add_assign(&mut self, rhs: $t) {
					let native = Primitive::to_le(rhs);
					self.add_extended(Extended::new(native.as_slice(), <$t as Primitive>::SIGNEDNESS));
				}
			}

			impl<W, const SIGNED: bool> Sub<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				type Output = Self;

				fn sub(mut self, rhs: $t) -> Self::Output {
					self -= rhs;
					self
				}
			}

			impl<W, const SIGNED: bool> SubAssign<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				fn sub_assign(&mut self, rhs: $t) {
					let native = Primitive::to_le(rhs);
					self.sub_extended(Extended::new(native.as_slice(), <$t as Primitive>::SIGNEDNESS));
				}
			}

			impl<W, const SIGNED: bool> Mul<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				type Output = Self;

				#[track_caller]
				fn mul(self, rhs: $t) -> Self::Output {
					expect_op(self.multiply(Self::from_primitive(rhs)))
				}
			}

			impl<W, const SIGNED: bool> MulAssign<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				#[track_caller]
				fn mul_assign(&mut self, rhs: $t) {
					*self = *self * rhs;
				}
			}

			impl<W, const SIGNED: bool> Div<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				type Output = Self;

				#[track_caller]
				fn div(self, rhs: $t) -> Self::Output {
					expect_op(self.divide(Self::from_primitive(rhs)).map(|(quotient, _)| quotient))
				}
			}

			impl<W, const SIGNED: bool> DivAssign<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				#[track_caller]
				fn div_assign(&mut self, rhs: $t) {
					*self = *self / rhs;
				}
			}

			impl<W, const SIGNED: bool> Rem<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				type Output = Self;

				#[track_caller]
				fn rem(self, rhs: $t) -> Self::Output {
					expect_op(self.divide(Self::from_primitive(rhs)).map(|(_, remainder)| remainder))
				}
			}

			impl<W, const SIGNED: bool> RemAssign<$t> for Int<W, SIGNED>
			where
				W: Width + IsGreaterOrEqual<$bits, Output = True>,
			{
				#[track_caller]
				fn rem_assign(&mut self, rhs: $t) {
					*self = *self % rhs;
				}
			}
		)*
	};
}

impl_native! {
	i8    => U8,
	i16   => U16,
	i32   => U32,
	i64   => U64,
	i128  => U128,
	isize => PointerBits,
	u8    => U8,
	u16   => U16,
	u32   => U32,
	u64   => U64,
	u128  => U128,
	usize => PointerBits,
}



//		Functions

//		ascii
/// Views rendered digits as text. The digits are always ASCII.
fn ascii(digits: &[u8]) -> &str {
	from_utf8(digits).unwrap_or_default()
}

//		expect_op
/// Unwraps the result of an operator, panicking with the error message as the
/// native integers do.
#[track_caller]
#[expect(clippy::panic, reason = "Needs to emulate Rust standard library behaviour")]
fn expect_op<T>(result: Result<T, IntError>) -> T {
	match result {
		Ok(value) => value,
		Err(err)  => panic!("{err}"),
	}
}

//		split_position
/// Splits a bit position into a byte index and a bit offset within the byte.
#[expect(clippy::integer_division, reason = "The remainder is kept separately")]
fn split_position(pos: u32) -> (usize, u32) {
	(usize::try_from(pos / 8).unwrap_or(usize::MAX), pos % 8)
}
