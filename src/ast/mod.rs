//! The AST: an append-only arena ([`arena`]) of closed node variants
//! ([`node`]).

pub mod arena;
pub mod node;

pub use arena::{NodeId, Tree};
pub use node::Node;
