//! Expression trees built from drawn tiles, and the search nodes wrapping them

mod ast;
mod display;
mod errors;
mod eval;
mod generator;
mod node;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use generator::combine;
pub use node::Node;
