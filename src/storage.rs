//! Byte storage and sign/zero-extension primitives.
//!
//! Every operation that mixes operands of different widths goes through an
//! [`Extended`] view: a little-endian byte slice that reports a constant fill
//! byte for every position past its end. This is how construction, comparison,
//! addition, and subtraction all agree on what a narrower operand "looks like"
//! at a wider width.



//		Modules

#[cfg(test)]
#[path = "tests/storage.rs"]
mod tests;



//		Packages

use core::{
	cmp::Ordering,
	fmt::Debug,
	hash::Hash,
	ops::{Deref, DerefMut},
};
use generic_array::{ArrayLength, GenericArray};
use typenum::{NonZero, PartialDiv, PartialQuot, U8, Unsigned};



//		Constants

/// The fill byte used to extend a negative signed value.
const NEGATIVE_FILL: u8 = 0xFF;

/// The fill byte used to extend an unsigned or non-negative value.
const POSITIVE_FILL: u8 = 0x00;



//		Enums

//		Signedness
/// How the most significant bit of a byte buffer is interpreted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Signedness {
	/// Two's complement: a set top bit means the value is negative.
	Signed,

	/// Plain magnitude.
	Unsigned,
}

//󰭅		Signedness
impl Signedness {
	//		from_flag
	/// Converts a `SIGNED` type flag into a [`Signedness`].
	#[must_use]
	pub const fn from_flag(signed: bool) -> Self {
		if signed { Self::Signed } else { Self::Unsigned }
	}

	//		is_signed
	/// Whether this is [`Signedness::Signed`].
	#[must_use]
	pub const fn is_signed(self) -> bool {
		matches!(self, Self::Signed)
	}
}



//		Structs

//		Extended
/// A read-only view of a little-endian byte buffer, extended indefinitely with
/// its fill byte.
///
/// The fill is `0xFF` when the buffer is signed and its most significant byte
/// has the top bit set, and `0x00` otherwise. No extended copy is ever
/// materialised; [`Extended::byte()`] synthesises the fill on demand.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Extended<'a> {
	/// The source bytes, least significant first.
	bytes:      &'a [u8],

	/// The byte reported past the end of `bytes`.
	fill:       u8,

	/// How the most significant byte of the source is interpreted.
	signedness: Signedness,
}

//󰭅		Extended
impl<'a> Extended<'a> {
	//		new
	/// Creates a view of `bytes`, working out the fill from the sign bit.
	pub(crate) fn new(bytes: &'a [u8], signedness: Signedness) -> Self {
		Self { bytes, fill: fill_byte(bytes, signedness), signedness }
	}

	//		byte
	/// The byte at `index`, or the fill byte once past the source length.
	pub(crate) fn byte(&self, index: usize) -> u8 {
		self.bytes.get(index).copied().unwrap_or(self.fill)
	}

	//		compare
	/// Compares two views as numbers.
	///
	/// Both sides are considered at the larger of the two lengths. The most
	/// significant byte carries the sign, so it is read as signed or unsigned
	/// according to each side's own [`Signedness`]. All lower bytes are plain
	/// magnitudes and compare unsigned. In two's complement only the top bit
	/// has a negative weight; every lower bit adds a positive amount whether
	/// the value is signed or not, so reading a lower byte as signed would
	/// misorder values such as `-256` and `-1`.
	pub(crate) fn compare(&self, other: &Self) -> Ordering {
		let Some(top) = self.len().max(other.len()).checked_sub(1) else {
			return Ordering::Equal;
		};
		let (lhs, rhs) = (self.byte(top), other.byte(top));
		let ordering   = match (self.signedness, other.signedness) {
			(Signedness::Unsigned, Signedness::Unsigned) => lhs.cmp(&rhs),
			(Signedness::Unsigned, Signedness::Signed)   => i16::from(lhs).cmp(&i16::from(as_signed(rhs))),
			(Signedness::Signed,   Signedness::Unsigned) => i16::from(as_signed(lhs)).cmp(&i16::from(rhs)),
			(Signedness::Signed,   Signedness::Signed)   => as_signed(lhs).cmp(&as_signed(rhs)),
		};
		if ordering.is_ne() {
			return ordering;
		}
		(0..top)
			.rev()
			.map(|index| self.byte(index).cmp(&other.byte(index)))
			.find(|ordering| ordering.is_ne())
			.unwrap_or(Ordering::Equal)
	}

	//		extend_into
	/// Writes the view into `target`, truncating or filling to its length.
	pub(crate) fn extend_into(&self, target: &mut [u8]) {
		for (index, byte) in target.iter_mut().enumerate() {
			*byte = self.byte(index);
		}
	}

	//		fill
	/// The byte reported past the end of the source.
	pub(crate) const fn fill(&self) -> u8 {
		self.fill
	}

	//		is_negative
	/// Whether the source is a negative signed value.
	pub(crate) const fn is_negative(&self) -> bool {
		self.fill == NEGATIVE_FILL
	}

	//		len
	/// The length of the source, without extension.
	pub(crate) const fn len(&self) -> usize {
		self.bytes.len()
	}
}

//		NativeBytes
/// The little-endian bytes of a native integer, in a buffer large enough for
/// the widest one.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NativeBytes {
	/// Storage, of which only the first `len` bytes are meaningful.
	bytes: [u8; 16],

	/// Number of meaningful bytes.
	len:   usize,
}

//󰭅		NativeBytes
impl NativeBytes {
	//		new
	/// Copies up to 16 little-endian bytes.
	fn new(source: &[u8]) -> Self {
		let mut bytes = [0; 16];
		for (target, byte) in bytes.iter_mut().zip(source) {
			*target = *byte;
		}
		Self { bytes, len: source.len().min(16) }
	}

	//		as_slice
	/// The meaningful bytes.
	pub(crate) fn as_slice(&self) -> &[u8] {
		self.bytes.get(..self.len).unwrap_or(&self.bytes)
	}
}



//		Traits

//		Width
/// A bit width that an [`Int`](crate::Int) can have.
///
/// This is implemented for every [`typenum`] unsigned number that is a
/// non-zero multiple of eight, e.g. [`U8`], [`U24`](typenum::U24),
/// [`U256`](typenum::U256). Widths that are not byte-aligned simply have no
/// implementation, so `Int<U12, true>` fails to compile.
pub trait Width: Unsigned + NonZero + 'static {
	/// Byte storage for a value of this width.
	type Buffer: Copy + Debug + Default + Deref<Target = [u8]> + DerefMut + Eq + Hash;

	/// Scratch space for rendering the digits of a value of this width. Binary
	/// is the longest rendering, at one digit per bit.
	type Digits: Default + Deref<Target = [u8]> + DerefMut;
}

//󰭅		Width
impl<N> Width for N
where
	N:                                    Unsigned + NonZero + ArrayLength + PartialDiv<U8>,
	PartialQuot<N, U8>:                   ArrayLength,
	GenericArray<u8, PartialQuot<N, U8>>: Copy,
{
	type Buffer = GenericArray<u8, PartialQuot<N, U8>>;
	type Digits = GenericArray<u8, N>;
}

//		Primitive
/// A native Rust integer type.
pub(crate) trait Primitive: Copy {
	/// Whether the native type is signed.
	const SIGNEDNESS: Signedness;

	//		to_le
	/// The little-endian bytes of the value.
	fn to_le(self) -> NativeBytes;
}

/// Implements [`Primitive`] for native integer types.
macro_rules! impl_primitive {
	($($t:ty => $signedness:ident),* $(,)?) => {
		$(
			impl Primitive for $t {
				const SIGNEDNESS: Signedness = Signedness::$signedness;

				fn to_le(self) -> NativeBytes {
					NativeBytes::new(&self.to_le_bytes())
				}
			}
		)*
	};
}

impl_primitive! {
	i8    => Signed,
	i16   => Signed,
	i32   => Signed,
	i64   => Signed,
	i128  => Signed,
	isize => Signed,
	u8    => Unsigned,
	u16   => Unsigned,
	u32   => Unsigned,
	u64   => Unsigned,
	u128  => Unsigned,
	usize => Unsigned,
}



//		Functions

//		as_signed
/// Reinterprets a byte as a two's-complement `i8`.
const fn as_signed(byte: u8) -> i8 {
	i8::from_ne_bytes([byte])
}

//		fill_byte
/// The byte that extends `bytes` past its most significant byte.
///
/// Only a signed buffer whose most significant byte has its top bit set is
/// extended with `0xFF`. An empty buffer extends with zero.
pub(crate) fn fill_byte(bytes: &[u8], signedness: Signedness) -> u8 {
	match (signedness, bytes.last()) {
		(Signedness::Signed, Some(&msb)) if msb & 0x80 != 0 => NEGATIVE_FILL,
		_                                                   => POSITIVE_FILL,
	}
}
