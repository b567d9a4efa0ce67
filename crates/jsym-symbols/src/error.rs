//! Symbol construction errors.
//!
//! These indicate a caller-side logic error; none of them is transient.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Anonymous classes have no denotable type and cannot be array elements.
    #[error("anonymous classes cannot be array components: {component}")]
    AnonymousComponent { component: String },

    #[error("array type would have {requested} dimensions, the limit is {max}")]
    TooManyDimensions { requested: usize, max: usize },
}
