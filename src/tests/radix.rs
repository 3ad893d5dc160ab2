//		Packages

use super::*;



//		Tests

mod public_methods {
	use super::*;

	//		base
	#[test]
	fn base__normal() {
		assert_eq!(Radix::Binary.base(),      2);
		assert_eq!(Radix::Octal.base(),       8);
		assert_eq!(Radix::Decimal.base(),     10);
		assert_eq!(Radix::Hexadecimal.base(), 16);
		assert_eq!(Radix::default(),          Radix::Decimal);
	}

	//		prefix
	#[test]
	fn prefix__normal() {
		assert_eq!(Radix::Binary.prefix(),      "0b");
		assert_eq!(Radix::Octal.prefix(),       "0o");
		assert_eq!(Radix::Decimal.prefix(),     "");
		assert_eq!(Radix::Hexadecimal.prefix(), "0x");
	}
}

mod private_methods {
	use super::*;

	//		bits_per_digit
	#[test]
	fn bits_per_digit__normal() {
		assert_eq!(Radix::Binary.bits_per_digit(),      Some(1));
		assert_eq!(Radix::Hexadecimal.bits_per_digit(), Some(4));
		assert_eq!(Radix::Octal.bits_per_digit(),       None);
		assert_eq!(Radix::Decimal.bits_per_digit(),     None);
	}

	//		digit_char
	#[test]
	fn digit_char__normal() {
		assert_eq!(Radix::digit_char(0,  false), b'0');
		assert_eq!(Radix::digit_char(9,  false), b'9');
		assert_eq!(Radix::digit_char(10, false), b'a');
		assert_eq!(Radix::digit_char(15, true),  b'F');
	}

	//		digit_value
	#[test]
	fn digit_value__valid() {
		assert_eq!(Radix::Hexadecimal.digit_value('f'), Ok(15));
		assert_eq!(Radix::Hexadecimal.digit_value('F'), Ok(15));
		assert_eq!(Radix::Octal.digit_value('7'),       Ok(7));
		assert_eq!(Radix::Binary.digit_value('1'),      Ok(1));
	}
	#[test]
	fn digit_value__invalid() {
		assert_eq!(Radix::Hexadecimal.digit_value('g'), Err(IntError::InvalidDigit('g')));
		assert_eq!(Radix::Decimal.digit_value('-'),     Err(IntError::InvalidDigit('-')));
		assert_eq!(Radix::Decimal.digit_value('a'),     Err(IntError::InvalidRadix('a', 10)));
		assert_eq!(Radix::Octal.digit_value('8'),       Err(IntError::InvalidRadix('8', 8)));
		assert_eq!(Radix::Binary.digit_value('2'),      Err(IntError::InvalidRadix('2', 2)));
	}

	//		split_prefix
	#[test]
	fn split_prefix__prefixed() {
		assert_eq!(Radix::split_prefix("0x1f"), Some((Radix::Hexadecimal, "1f")));
		assert_eq!(Radix::split_prefix("0b10"), Some((Radix::Binary,      "10")));
		assert_eq!(Radix::split_prefix("017"),  Some((Radix::Octal,       "17")));
		assert_eq!(Radix::split_prefix("0X1f"), Some((Radix::Octal,       "X1f")));
	}
	#[test]
	fn split_prefix__too_short() {
		assert_eq!(Radix::split_prefix("0x"), None);
		assert_eq!(Radix::split_prefix("07"), None);
		assert_eq!(Radix::split_prefix("0"),  None);
		assert_eq!(Radix::split_prefix(""),   None);
	}
	#[test]
	fn split_prefix__decimal() {
		assert_eq!(Radix::split_prefix("123"), None);
		assert_eq!(Radix::split_prefix("-01"), None);
	}
}

mod functions {
	use super::*;

	//		is_separator
	#[test]
	fn is_separator__normal() {
		assert!( is_separator('\''));
		assert!( is_separator(' '));
		assert!(!is_separator('_'));
		assert!(!is_separator('0'));
	}
}
