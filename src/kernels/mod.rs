//! The kernel catalog: every primitive function a graph node can apply.
//!
//! Each kernel is implemented as a unit `struct` with two associated functions: `eval_static`,
//! the numeric semantics, generic over any [`Differentiable`] type, and `print_static`, the
//! symbolic semantics, combining two already-simplified operand strings into a simplified
//! expression for the node.
//!
//! The [`Kernel`] trait is the object-safe surface a graph evaluator holds; [`all`] returns the
//! full catalog keyed by name, [`get`] looks up a single kernel, and [`KernelSet`] is an ordered
//! selection a chromosome can index into by gene value.
//!
//! Every kernel takes exactly two operands. The semantically unary ones (`sin`, `log`) ignore
//! the second, so the evaluator never needs per-kernel arity handling.

pub mod arithmetic;
pub mod error;
pub mod miscellaneous;
pub mod power;
pub mod trigonometry;

pub use error::UnknownKernel;

use crate::value::Differentiable;
use levenshtein::levenshtein;
use std::collections::HashMap;
use std::fmt::Debug;

/// The names of every kernel in the catalog, in catalog order.
pub const NAMES: [&str; 9] = [
    "sum", "diff", "mul", "div", "pow", "sqrt", "log", "sin", "sig",
];

/// A trait implemented by all kernels.
pub trait Kernel<T>: Debug + Send + Sync {
    /// Returns the name of the kernel.
    // NOTE: this is a `&self` method and not an associated constant to make the trait object-safe
    fn name(&self) -> &'static str;

    /// Evaluates the kernel on two operand values.
    fn eval(&self, x: T, y: T) -> T;

    /// Combines two simplified operand expressions into a simplified expression for this node.
    fn print(&self, s1: &str, s2: &str) -> String;
}

/// Implements [`Kernel`] for unit structs by delegating to their `eval_static` and
/// `print_static` associated functions.
macro_rules! impl_kernel {
    ($($name:literal $upname:ident),* $(,)?) => {
        $(
            impl<T: $crate::value::Differentiable> $crate::kernels::Kernel<T> for $upname {
                fn name(&self) -> &'static str {
                    $name
                }

                fn eval(&self, x: T, y: T) -> T {
                    Self::eval_static(x, y)
                }

                fn print(&self, s1: &str, s2: &str) -> String {
                    Self::print_static(s1, s2)
                }
            }
        )*
    };
}

pub(crate) use impl_kernel;

/// Returns the full kernel catalog, keyed by name.
pub fn all<T: Differentiable + 'static>() -> HashMap<&'static str, Box<dyn Kernel<T>>> {
    use arithmetic::*;
    use miscellaneous::*;
    use power::*;
    use trigonometry::*;

    macro_rules! build {
        ($($name:literal $upname:ident),* $(,)?) => {
            [
                $(
                    ($name, Box::new($upname) as Box<dyn Kernel<T>>),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "sum" Sum,
        "diff" Diff,
        "mul" Mul,
        "div" Div,
        "pow" Pow,
        "sqrt" Sqrt,
        "log" Log,
        "sin" Sin,
        "sig" Sig,
    }
}

/// Looks up a single kernel by name.
///
/// On a miss, the returned [`UnknownKernel`] carries catalog names similar to the requested one,
/// for "did you mean" diagnostics.
pub fn get<T: Differentiable + 'static>(name: &str) -> Result<Box<dyn Kernel<T>>, UnknownKernel> {
    all::<T>()
        .remove(name)
        .ok_or_else(|| UnknownKernel::new(name, similar_names(name)))
}

/// Returns all catalog names with a name similar to the given name.
fn similar_names(name: &str) -> Vec<&'static str> {
    NAMES
        .iter()
        .filter(|n| levenshtein(n, name) < 2)
        .copied()
        .collect()
}

/// An ordered selection of kernels, chosen by name.
///
/// A CGP chromosome stores, per node, an index into a kernel set; the set maps that gene back to
/// a kernel. The order is the order the names were requested in, and the same kernel may appear
/// more than once.
#[derive(Debug)]
pub struct KernelSet<T> {
    kernels: Vec<Box<dyn Kernel<T>>>,
}

impl<T: Differentiable + 'static> KernelSet<T> {
    /// Creates a kernel set from the given names, failing on the first unrecognized one.
    pub fn new(names: &[&str]) -> Result<Self, UnknownKernel> {
        let kernels = names
            .iter()
            .map(|name| get::<T>(name))
            .collect::<Result<_, _>>()?;
        Ok(Self { kernels })
    }

    /// Returns the kernel at the given position, if any.
    pub fn get(&self, index: usize) -> Option<&dyn Kernel<T>> {
        self.kernels.get(index).map(|kernel| &**kernel)
    }

    /// Returns the number of kernels in the set.
    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    /// Returns `true` if the set contains no kernels.
    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    /// Iterates over the kernels in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Kernel<T>> {
        self.kernels.iter().map(|kernel| &**kernel)
    }
}

impl<T> std::ops::Index<usize> for KernelSet<T> {
    type Output = dyn Kernel<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &*self.kernels[index]
    }
}
