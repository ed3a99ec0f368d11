use std::sync::Arc;

/// Arithmetic expression over drawn tiles.
///
/// Children are shared so that nodes built deeper in the search reuse the
/// subtrees of the nodes they were combined from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(u32),
    Add(Arc<Expression>, Arc<Expression>),
    Sub(Arc<Expression>, Arc<Expression>),
    Mul(Arc<Expression>, Arc<Expression>),
    Div(Arc<Expression>, Arc<Expression>),
}
