//! Monoids: an identity element paired with an associative binary operator.

use std::sync::mpsc::Receiver;

use num_traits::Bounded;

use crate::context::Context;
use crate::matrix::{Element, NumericOps};
use crate::scalar::{self, BinaryOp};

/// Algebraic monoid over `T`.
///
/// Correct parallel and streamed reduction requires `op` to be genuinely
/// associative with `zero` as a two-sided identity; the constructors below
/// all satisfy that. Reduction is a left fold starting from `zero`, so an
/// empty input reduces to `zero` and a singleton `[x]` to `op(zero, x)`.
#[derive(Copy, Clone)]
pub struct Monoid<T> {
    zero: T,
    op: BinaryOp<T>,
}

impl<T: Element> Monoid<T> {
    pub fn new(zero: T, op: BinaryOp<T>) -> Self {
        Self { zero, op }
    }

    pub fn zero(&self) -> T {
        self.zero
    }

    pub fn op(&self) -> BinaryOp<T> {
        self.op
    }

    /// Left fold of `values` starting from the identity.
    pub fn reduce(&self, values: impl IntoIterator<Item = T>) -> T {
        values
            .into_iter()
            .fold(self.zero, |acc, v| self.op.apply(acc, v))
    }

    /// Consume values from a channel until it closes or `ctx` cancels.
    ///
    /// The sender side blocks on a rendezvous channel until this consumer is
    /// ready for each element, giving natural backpressure. On cancellation
    /// the partial accumulator is returned and must be discarded.
    pub fn reduce_stream(&self, values: Receiver<T>, ctx: &Context) -> T {
        let mut acc = self.zero;
        while let Ok(v) = values.recv() {
            if ctx.is_cancelled() {
                log::debug!("reduce_stream cancelled mid-flight");
                break;
            }
            acc = self.op.apply(acc, v);
        }
        acc
    }
}

/// Addition with identity 0; the default reduction monoid.
pub fn plus_monoid<T: NumericOps>() -> Monoid<T> {
    Monoid::new(T::zero(), scalar::plus())
}

/// Multiplication with identity 1.
pub fn times_monoid<T: NumericOps>() -> Monoid<T> {
    Monoid::new(T::one(), scalar::times())
}

/// Maximum with the type's minimum value as identity; the default monoid of
/// matrix-to-vector reduction.
pub fn max_monoid<T: NumericOps + Bounded>() -> Monoid<T> {
    Monoid::new(T::min_value(), scalar::max())
}

/// Minimum with the type's maximum value as identity.
pub fn min_monoid<T: NumericOps + Bounded>() -> Monoid<T> {
    Monoid::new(T::max_value(), scalar::min())
}
