//! Primitive kernel functions for differentiable Cartesian genetic programming.
//!
//! A CGP expression graph encodes a program as a grid of nodes, where each node applies one
//! function from a fixed catalog to the outputs of two upstream nodes. This crate provides that
//! catalog. Every kernel does two jobs:
//!
//! - **numeric evaluation**, generic over any type implementing [`Differentiable`] — plain
//!   `f64`, arbitrary-precision [`rug::Float`], or an automatic-differentiation type supplied by
//!   the caller; and
//! - **symbolic printing**, combining two already-simplified operand expressions into a
//!   simplified expression for the node, folding trivial identities (`x+0`, `1*x`, `x-x`, ...)
//!   by shallow string matching.
//!
//! All kernels are binary-arity, even the semantically unary ones (`sin`, `log`), so a graph
//! evaluator can always supply exactly two operand slots per node. Every function is pure and
//! stateless; kernels are safe to evaluate from any number of threads.
//!
//! # Example
//!
//! ```
//! use cgp_kernels::kernels::all;
//!
//! let kernels = all::<f64>();
//!
//! let sum = &kernels["sum"];
//! assert_eq!(sum.eval(2.0, 3.0), 5.0);
//! assert_eq!(sum.print("x", "0"), "x");
//!
//! let mul = &kernels["mul"];
//! assert_eq!(mul.print("x", "x"), "x^2");
//! ```

pub mod consts;
pub mod kernels;
pub mod primitive;
pub mod value;

pub use kernels::Kernel;
pub use value::Differentiable;
