//		Packages

use super::*;
use rubedo::sugar::s;



//		Tests

mod int_error {
	use super::*;

	//		kind
	#[test]
	fn kind__invalid_input() {
		assert_eq!(IntError::EmptyValue.kind(),            ErrorKind::InvalidInput);
		assert_eq!(IntError::InvalidDigit('z').kind(),     ErrorKind::InvalidInput);
		assert_eq!(IntError::InvalidRadix('9', 8).kind(),  ErrorKind::InvalidInput);
		assert_eq!(IntError::NegativeRadix(16).kind(),     ErrorKind::InvalidInput);
		assert_eq!(IntError::ValueIsNegative.kind(),       ErrorKind::InvalidInput);
	}
	#[test]
	fn kind__overflow() {
		assert_eq!(IntError::DivisionByZero.kind(),   ErrorKind::Overflow);
		assert_eq!(IntError::NegationOverflow.kind(), ErrorKind::Overflow);
		assert_eq!(IntError::ValueTooLarge.kind(),    ErrorKind::Overflow);
	}

	//		to_string
	#[test]
	fn to_string__messages() {
		assert_eq!(IntError::DivisionByZero.to_string(),      s!("Division by zero"));
		assert_eq!(IntError::InvalidRadix('9', 8).to_string(), s!("Invalid digit for base 8: 9"));
		assert_eq!(IntError::NegativeRadix(2).to_string(),    s!("Negative sign not allowed for base 2"));
		assert_eq!(IntError::ValueTooLarge.to_string(),       s!("Value too large"));
	}
}
