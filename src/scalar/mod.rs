//! Scalar operator algebra: binary operators, unary operators and monoids.
//!
//! Operators wrap plain function pointers, so they are `Copy` and free to
//! pass around by value. The standard library of instances lives here as
//! constructor functions (`plus`, `min`, `logical_or`, ...); reductions use
//! [`Monoid`], a zero paired with an associative [`BinaryOp`].

mod monoid;

pub use monoid::{max_monoid, min_monoid, plus_monoid, times_monoid, Monoid};

use crate::matrix::{Element, NumericOps};

/// A pure binary operator `(T, T) -> O`.
///
/// `O` defaults to `T`; comparison operators instantiate `BinaryOp<T, bool>`.
#[derive(Copy, Clone)]
pub struct BinaryOp<T, O = T> {
    f: fn(T, T) -> O,
}

impl<T, O> BinaryOp<T, O> {
    pub fn new(f: fn(T, T) -> O) -> Self {
        Self { f }
    }

    #[inline]
    pub fn apply(&self, a: T, b: T) -> O {
        (self.f)(a, b)
    }
}

/// A pure unary operator `T -> T`.
#[derive(Copy, Clone)]
pub struct UnaryOp<T> {
    f: fn(T) -> T,
}

impl<T> UnaryOp<T> {
    pub fn new(f: fn(T) -> T) -> Self {
        Self { f }
    }

    #[inline]
    pub fn apply(&self, a: T) -> T {
        (self.f)(a)
    }
}

/// Returns its first argument.
pub fn first<T: Element>() -> BinaryOp<T> {
    BinaryOp::new(|a, _| a)
}

/// Returns its second argument.
pub fn second<T: Element>() -> BinaryOp<T> {
    BinaryOp::new(|_, b| b)
}

pub fn min<T: NumericOps>() -> BinaryOp<T> {
    BinaryOp::new(|a, b| if b < a { b } else { a })
}

pub fn max<T: NumericOps>() -> BinaryOp<T> {
    BinaryOp::new(|a, b| if b > a { b } else { a })
}

pub fn plus<T: NumericOps>() -> BinaryOp<T> {
    BinaryOp::new(|a, b| a + b)
}

pub fn minus<T: NumericOps>() -> BinaryOp<T> {
    BinaryOp::new(|a, b| a - b)
}

pub fn times<T: NumericOps>() -> BinaryOp<T> {
    BinaryOp::new(|a, b| a * b)
}

/// Division; IEEE-754 semantics at zero for float types, not guarded.
pub fn divide<T: NumericOps>() -> BinaryOp<T> {
    BinaryOp::new(|a, b| a / b)
}

pub fn logical_or() -> BinaryOp<bool> {
    BinaryOp::new(|a, b| a || b)
}

pub fn logical_and() -> BinaryOp<bool> {
    BinaryOp::new(|a, b| a && b)
}

pub fn logical_xor() -> BinaryOp<bool> {
    BinaryOp::new(|a, b| a ^ b)
}

pub fn equal<T: Element>() -> BinaryOp<T, bool> {
    BinaryOp::new(|a, b| a == b)
}

pub fn not_equal<T: Element>() -> BinaryOp<T, bool> {
    BinaryOp::new(|a, b| a != b)
}

pub fn greater_than<T: NumericOps>() -> BinaryOp<T, bool> {
    BinaryOp::new(|a, b| a > b)
}

pub fn less_than<T: NumericOps>() -> BinaryOp<T, bool> {
    BinaryOp::new(|a, b| a < b)
}

pub fn greater_or_equal<T: NumericOps>() -> BinaryOp<T, bool> {
    BinaryOp::new(|a, b| a >= b)
}

pub fn less_or_equal<T: NumericOps>() -> BinaryOp<T, bool> {
    BinaryOp::new(|a, b| a <= b)
}

pub fn identity<T: Element>() -> UnaryOp<T> {
    UnaryOp::new(|a| a)
}

/// Additive inverse.
pub fn negate<T: NumericOps>() -> UnaryOp<T> {
    UnaryOp::new(|a| T::zero() - a)
}

/// Multiplicative inverse; `1/0` follows IEEE-754 (infinity) for floats.
pub fn reciprocal<T: NumericOps>() -> UnaryOp<T> {
    UnaryOp::new(|a| T::one() / a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_selectors() {
        assert_eq!(first::<i32>().apply(3, 9), 3);
        assert_eq!(second::<i32>().apply(3, 9), 9);
    }

    #[test]
    fn test_arithmetic_ops() {
        assert_eq!(plus::<i64>().apply(2, 5), 7);
        assert_eq!(minus::<i64>().apply(2, 5), -3);
        assert_eq!(times::<i64>().apply(2, 5), 10);
        assert_eq!(divide::<f64>().apply(1.0, 4.0), 0.25);
        assert_eq!(min::<i64>().apply(2, 5), 2);
        assert_eq!(max::<i64>().apply(2, 5), 5);
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        assert_eq!(divide::<f64>().apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(reciprocal::<f64>().apply(0.0), f64::INFINITY);
    }

    #[test]
    fn test_boolean_ops() {
        assert!(logical_or().apply(true, false));
        assert!(!logical_and().apply(true, false));
        assert!(logical_xor().apply(true, false));
        assert!(!logical_xor().apply(true, true));
    }

    #[test]
    fn test_comparisons_produce_bool() {
        assert!(greater_than::<f64>().apply(2.0, 1.0));
        assert!(less_or_equal::<f64>().apply(1.0, 1.0));
        assert!(equal::<char>().apply('x', 'x'));
        assert!(not_equal::<char>().apply('x', 'y'));
    }

    #[test]
    fn test_unary_ops() {
        assert_eq!(identity::<i32>().apply(12), 12);
        assert_eq!(negate::<i32>().apply(12), -12);
        assert_eq!(reciprocal::<f64>().apply(4.0), 0.25);
    }
}
