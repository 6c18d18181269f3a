//! Errors produced when looking up kernels by name.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The requested kernel name is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKernel {
    /// The name that was requested.
    pub name: String,

    /// Catalog names within edit distance 1 of the requested name.
    pub suggestions: Vec<&'static str>,
}

impl UnknownKernel {
    pub(crate) fn new(name: &str, suggestions: Vec<&'static str>) -> Self {
        Self {
            name: name.to_owned(),
            suggestions,
        }
    }
}

impl Display for UnknownKernel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown kernel `{}`", self.name)?;
        if let Some(suggestion) = self.suggestions.first() {
            write!(f, "; did you mean `{}`?", suggestion)?;
        }
        Ok(())
    }
}

impl Error for UnknownKernel {}
