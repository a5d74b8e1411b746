//! GraphBLAS-style sparse and dense linear algebra.
//!
//! Containers (dense matrix/vector, CSR, CSC, sparse vector) share one
//! algebraic access surface and feed a library of masked, cancellable
//! operators: products, element-wise combination, transpose, apply,
//! equality, reductions through pluggable monoids, and a parallel Strassen
//! multiplication. Shape and index misuse surfaces as typed errors; numeric
//! edge cases follow IEEE-754.

pub mod algorithms;
pub mod context;
pub mod dense;
pub mod error;
pub mod mask;
pub mod matrix;
pub mod operators;
pub mod scalar;
pub mod shared;
pub mod sparse;

pub use context::Context;
pub use error::{Error, Result};
pub use mask::{EmptyMask, Mask, VectorMask};
pub use matrix::{ContainerKind, Element, Matrix, MatrixBase, NumericOps, Vector};
pub use shared::MutexMatrix;
