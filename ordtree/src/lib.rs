mod node;
mod traverse;
#[cfg(feature = "serde")]
mod serde_impl;

pub use node::OrderedTree;
pub use traverse::{Traverse, Visit};
