//! Test vector enumeration
//!
//! All enumerations are produced in strictly increasing lexicographic order of
//! their inputs. The generated text is reviewed as a diff, so the order is part
//! of the output contract.

use crate::constants::TWO_DIGIT_MAX;
use crate::domain::digit::{Digit, OpResult};

/// Full-adder case: `a + b + carry_in`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FullAdderVector {
    pub a: Digit,
    pub b: Digit,
    pub carry_in: Digit,
    /// Sum digit and carry out (0..=2)
    pub expected: OpResult,
}

impl FullAdderVector {
    pub fn new(a: Digit, b: Digit, carry_in: Digit) -> Self {
        let total = u32::from(a.get()) + u32::from(b.get()) + u32::from(carry_in.get());
        Self {
            a,
            b,
            carry_in,
            expected: OpResult::from_sum(total),
        }
    }
}

/// Full-subtracter case: `a - b - borrow_in`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FullSubtracterVector {
    pub a: Digit,
    pub b: Digit,
    pub borrow_in: Digit,
    /// Difference digit and borrow out
    ///
    /// The borrow out is `-floor((a - b - borrow_in) / 10)` without clamping;
    /// with `borrow_in` up to 9 it reaches 2.
    pub expected: OpResult,
}

impl FullSubtracterVector {
    pub fn new(a: Digit, b: Digit, borrow_in: Digit) -> Self {
        let diff = i32::from(a.get()) - i32::from(b.get()) - i32::from(borrow_in.get());
        Self {
            a,
            b,
            borrow_in,
            expected: OpResult::from_difference(diff),
        }
    }
}

/// Multiplication stress case over two-digit operands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MulStressVector {
    pub a: u8,
    pub b: u8,
    pub product: u32,
}

impl MulStressVector {
    pub fn new(a: u8, b: u8) -> Self {
        Self {
            a,
            b,
            product: u32::from(a) * u32::from(b),
        }
    }
}

/// Every digit triple in [0,9]^3, lexicographically ordered
fn digit_triples() -> impl Iterator<Item = (Digit, Digit, Digit)> + Clone {
    Digit::all().flat_map(|a| {
        Digit::all().flat_map(move |b| Digit::all().map(move |c| (a, b, c)))
    })
}

/// Enumerate all 1000 full-adder vectors
pub fn full_adder_vectors() -> impl Iterator<Item = FullAdderVector> + Clone {
    digit_triples().map(|(a, b, c)| FullAdderVector::new(a, b, c))
}

/// Enumerate all 1000 full-subtracter vectors
pub fn full_subtracter_vectors() -> impl Iterator<Item = FullSubtracterVector> + Clone {
    digit_triples().map(|(a, b, c)| FullSubtracterVector::new(a, b, c))
}

/// Enumerate all 5050 multiplication stress vectors (`b >= a`)
pub fn mul_stress_vectors() -> impl Iterator<Item = MulStressVector> + Clone {
    (0..=TWO_DIGIT_MAX).flat_map(|a| (a..=TWO_DIGIT_MAX).map(move |b| MulStressVector::new(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        FULL_ADDER_VECTOR_COUNT, FULL_SUBTRACTER_VECTOR_COUNT, MUL_STRESS_VECTOR_COUNT,
    };

    fn d(v: u8) -> Digit {
        Digit::new(v).unwrap()
    }

    #[test]
    fn test_counts() {
        assert_eq!(full_adder_vectors().count(), FULL_ADDER_VECTOR_COUNT);
        assert_eq!(full_subtracter_vectors().count(), FULL_SUBTRACTER_VECTOR_COUNT);
        assert_eq!(mul_stress_vectors().count(), MUL_STRESS_VECTOR_COUNT);
    }

    #[test]
    fn test_first_and_last() {
        let first = full_adder_vectors().next().unwrap();
        assert_eq!((first.a, first.b, first.carry_in), (d(0), d(0), d(0)));

        let last = full_adder_vectors().last().unwrap();
        assert_eq!(last.expected.to_string(), "72"); // 9 + 9 + 9 = 27

        let last = mul_stress_vectors().last().unwrap();
        assert_eq!((last.a, last.b, last.product), (99, 99, 9801));
    }

    #[test]
    fn test_full_subtracter_wide_borrow() {
        let v = FullSubtracterVector::new(d(0), d(9), d(9));
        assert_eq!(v.expected.digit().get(), 2);
        assert_eq!(v.expected.carry(), 2);
        assert_eq!(v.expected.borrow_value(), -18);
    }

    #[test]
    fn test_mul_stress_example() {
        assert_eq!(MulStressVector::new(12, 34).product, 408);
    }

    #[test]
    fn test_full_adder_strictly_increasing() {
        let keys: Vec<_> = full_adder_vectors().map(|v| (v.a, v.b, v.carry_in)).collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}
