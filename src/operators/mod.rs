//! Generic algebraic operators over containers.
//!
//! Every operator takes a [`Context`](crate::context::Context) and polls it
//! at each element boundary; a cancelled operator returns `Ok` early with an
//! undefined, partially written output that the caller must discard. Every
//! operator validates operand shapes and mask shape up front and reports
//! misuse through typed errors.
//!
//! Operations whose original formulation wrote into one of their own
//! operands are exposed as separate `_assign` variants here, since a single
//! container cannot be borrowed as both operand and output.

mod apply;
mod elementwise;
mod equality;
mod multiply;
mod reduce;
pub mod strassen;
mod transpose;

pub use apply::{apply, apply_assign, negative, scalar_multiply};
pub use elementwise::{
    add, element_wise_add, element_wise_add_assign, element_wise_multiply,
    element_wise_multiply_assign, element_wise_vector_add, element_wise_vector_add_assign,
    element_wise_vector_multiply, element_wise_vector_multiply_assign, subtract,
};
pub use equality::{equal, not_equal};
pub use multiply::{matrix_matrix_multiply, matrix_vector_multiply, vector_matrix_multiply};
pub use reduce::{reduce_matrix_to_scalar, reduce_matrix_to_vector, reduce_vector_to_scalar};
pub use transpose::{transpose, transpose_to_csc, transpose_to_csr};
