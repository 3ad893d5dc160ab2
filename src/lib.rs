//! The Fixint crate provides fixed-width integers of any byte-aligned bit
//! length, signed or unsigned, in two's complement.
//!
//! The width is a [`typenum`] number chosen at compile time, so a 24-bit
//! unsigned integer is `UInt<U24>` and a 256-bit signed integer is
//! `SInt<U256>`. Values mix freely with each other and with the native
//! integers, as long as no operation would need to narrow a value to fit.
//!
//! ```
//! use fixint::{SInt, UInt};
//! use typenum::{U16, U32};
//!
//! let a = SInt::<U32>::from(-42_i32);
//! let b = UInt::<U16>::from(1_u16);
//! assert_eq!(a + b, -41_i32);
//! assert_eq!(format!("{:#x}", a), "0xffffffd6");
//! assert_eq!("0x2a".parse::<SInt<U32>>().unwrap(), 42_i32);
//! ```



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cast_lossless,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod int;
mod radix;
mod reader;
mod storage;



//		Packages

pub use errors::{ErrorKind, IntError};
pub use int::{Formatted, Int, SInt, UInt};
pub use radix::Radix;
pub use reader::TokenReader;
pub use storage::{Signedness, Width};
pub use generic_array;
pub use typenum;
