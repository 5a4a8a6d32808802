//! Decimal digits and two-character digit results
//!
//! An [`OpResult`] is the outcome of one digit operation: the digit kept in the
//! current position plus the carry (or borrow) moved to the next one. It is
//! encoded as exactly two ASCII digits, result first.

use crate::constants::{DIGIT_BASE, DIGIT_MAX};
use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// A single decimal digit in [0, 9]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const MAX: Digit = Digit(DIGIT_MAX);

    /// Create a digit, or `None` if `value` is not in [0, 9]
    pub const fn new(value: u8) -> Option<Self> {
        if value < DIGIT_BASE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index into a 10-element array
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// ASCII representation
    pub const fn to_ascii(self) -> u8 {
        b'0' + self.0
    }

    /// All digits in increasing order
    pub fn all() -> impl Iterator<Item = Digit> + Clone {
        Self::range_from(Self::ZERO)
    }

    /// Digits from `start` up to 9, in increasing order
    pub fn range_from(start: Digit) -> impl Iterator<Item = Digit> + Clone {
        (start.0..DIGIT_BASE).map(Digit)
    }

    /// Parse a single ASCII digit
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_digit() {
            Some(Self(byte - b'0'))
        } else {
            None
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result digit plus carry (or borrow) for the next position
///
/// The carry is always a single digit so the encoding stays two characters.
/// For subtraction it holds the borrow as a positive count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpResult {
    digit: Digit,
    carry: Digit,
}

impl OpResult {
    /// Create a result, or `None` if `carry` does not fit in one digit
    pub const fn new(digit: Digit, carry: u8) -> Option<Self> {
        match Digit::new(carry) {
            Some(carry) => Some(Self { digit, carry }),
            None => None,
        }
    }

    /// Split a non-negative value into its low digit and carry
    ///
    /// `value` must be below 100.
    pub(crate) fn from_sum(value: u32) -> Self {
        debug_assert!(value < 100, "sum {} overflows a two-digit result", value);
        let base = u32::from(DIGIT_BASE);
        Self {
            digit: Digit((value % base) as u8),
            carry: Digit((value / base) as u8),
        }
    }

    /// Split a signed difference into its low digit and borrow
    ///
    /// The digit is the floored remainder; the borrow is the negated floored
    /// quotient. `value` must be in [-90, 9].
    pub(crate) fn from_difference(value: i32) -> Self {
        debug_assert!(
            (-90..=9).contains(&value),
            "difference {} overflows a two-digit result",
            value
        );
        let base = i32::from(DIGIT_BASE);
        Self {
            digit: Digit(value.rem_euclid(base) as u8),
            carry: Digit((-value.div_euclid(base)) as u8),
        }
    }

    /// Digit kept in the current position
    pub const fn digit(self) -> Digit {
        self.digit
    }

    /// Carry (or borrow) moved to the next position
    pub const fn carry(self) -> u8 {
        self.carry.0
    }

    /// Value represented as a carry: `digit + 10 * carry`
    pub fn carry_value(self) -> u32 {
        u32::from(self.digit.0) + u32::from(DIGIT_BASE) * u32::from(self.carry.0)
    }

    /// Value represented as a borrow: `digit - 10 * borrow`
    pub fn borrow_value(self) -> i32 {
        i32::from(self.digit.0) - i32::from(DIGIT_BASE) * i32::from(self.carry.0)
    }

    /// Two-character encoding, result digit first
    pub const fn encode(self) -> [u8; 2] {
        [self.digit.to_ascii(), self.carry.to_ascii()]
    }
}

impl fmt::Display for OpResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.digit, self.carry)
    }
}

impl FromStr for OpResult {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidEncoding(s.to_string());
        match s.as_bytes() {
            &[digit, carry] => Ok(Self {
                digit: Digit::from_ascii(digit).ok_or_else(invalid)?,
                carry: Digit::from_ascii(carry).ok_or_else(invalid)?,
            }),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_new_bounds() {
        assert_eq!(Digit::new(0), Some(Digit::ZERO));
        assert_eq!(Digit::new(9), Some(Digit::MAX));
        assert_eq!(Digit::new(10), None);
    }

    #[test]
    fn test_digit_all_in_order() {
        let values: Vec<u8> = Digit::all().map(Digit::get).collect();
        assert_eq!(values, (0..10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_digit_range_from() {
        let seven = Digit::new(7).unwrap();
        let values: Vec<u8> = Digit::range_from(seven).map(Digit::get).collect();
        assert_eq!(values, vec![7, 8, 9]);
        assert_eq!(Digit::range_from(Digit::MAX).count(), 1);
    }

    #[test]
    fn test_op_result_rejects_wide_carry() {
        assert!(OpResult::new(Digit::ZERO, 9).is_some());
        assert!(OpResult::new(Digit::ZERO, 10).is_none());
    }

    #[test]
    fn test_from_sum() {
        let r = OpResult::from_sum(81);
        assert_eq!(r.digit().get(), 1);
        assert_eq!(r.carry(), 8);
        assert_eq!(r.to_string(), "18");
    }

    #[test]
    fn test_from_difference_floors() {
        // 3 - 8 = -5 -> digit 5, borrow 1
        assert_eq!(OpResult::from_difference(-5).to_string(), "51");
        // 0 - 9 - 9 = -18 -> digit 2, borrow 2
        assert_eq!(OpResult::from_difference(-18).to_string(), "22");
        // exact multiple of ten: -10 -> digit 0, borrow 1
        assert_eq!(OpResult::from_difference(-10).to_string(), "01");
        assert_eq!(OpResult::from_difference(9).to_string(), "90");
        assert_eq!(OpResult::from_difference(0).to_string(), "00");
    }

    #[test]
    fn test_value_identities() {
        assert_eq!(OpResult::from_sum(27).carry_value(), 27);
        for value in -18..=9 {
            assert_eq!(OpResult::from_difference(value).borrow_value(), value);
        }
    }

    #[test]
    fn test_encode_matches_display() {
        let r = OpResult::from_sum(12);
        assert_eq!(&r.encode(), b"21");
        assert_eq!(r.to_string().as_bytes(), &r.encode());
    }

    #[test]
    fn test_parse() {
        let r: OpResult = "51".parse().unwrap();
        assert_eq!(r.digit().get(), 5);
        assert_eq!(r.carry(), 1);

        for bad in ["", "5", "512", "5a", "-1"] {
            assert_eq!(
                bad.parse::<OpResult>(),
                Err(ParseError::InvalidEncoding(bad.to_string()))
            );
        }
    }
}
