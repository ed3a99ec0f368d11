use std::fmt;
use std::sync::Arc;

use crate::expression::ast::Expression;

/// A value reached during the search together with the expression producing it.
///
/// Nodes are immutable. Combining two nodes builds a new one that shares both
/// expression trees, so a candidate set can be copied cheaply at every level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: u32,
    expr: Arc<Expression>,
}

impl Node {
    /// Wrap a single drawn tile.
    pub fn leaf(value: u32) -> Self {
        Self {
            value,
            expr: Arc::new(Expression::Number(value)),
        }
    }

    /// Callers must pass the value `expr` evaluates to.
    pub(crate) fn from_parts(value: u32, expr: Expression) -> Self {
        Self {
            value,
            expr: Arc::new(expr),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn expression(&self) -> &Expression {
        &self.expr
    }

    pub(crate) fn shared_expression(&self) -> Arc<Expression> {
        Arc::clone(&self.expr)
    }

    /// Infix rendering of the expression, e.g. `(100 + 6) x 3`.
    pub fn text(&self) -> String {
        self.expr.to_string()
    }

    /// Tile values consumed to build this node.
    pub fn operands(&self) -> Vec<u32> {
        self.expr.leaves()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(*self.expr, Expression::Number(_))
    }

    pub fn distance(&self, target: u32) -> u32 {
        self.value.abs_diff(target)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.expr, self.value)
    }
}
