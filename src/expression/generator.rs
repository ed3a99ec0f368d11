use crate::expression::ast::Expression;
use crate::expression::eval::{checked_difference, checked_quotient};
use crate::expression::node::Node;

/// Every useful node obtained by combining `a` and `b`, in the fixed order
/// `+`, `x`, `-`, `/`.
///
/// Subtraction and division take the larger operand first. The reverse
/// orientation is never a positive integer, except `a / a` which is the same.
///
/// Combinations whose value equals one of the operands are dropped: the
/// operand alone reaches the same value with fewer tiles. This covers `x 1`,
/// `/ 1`, `a - b = b` and `a / b = b`.
pub fn combine(a: &Node, b: &Node) -> [Option<Node>; 4] {
    let (large, small) = if a.value() >= b.value() { (a, b) } else { (b, a) };
    let (l, s) = (large.value(), small.value());

    let add = l.checked_add(s).map(|value| {
        Node::from_parts(
            value,
            Expression::Add(large.shared_expression(), small.shared_expression()),
        )
    });

    let mul = if s == 1 {
        None
    } else {
        l.checked_mul(s).map(|value| {
            Node::from_parts(
                value,
                Expression::Mul(large.shared_expression(), small.shared_expression()),
            )
        })
    };

    let sub = checked_difference(l, s)
        .ok()
        .filter(|&value| value != s)
        .map(|value| {
            Node::from_parts(
                value,
                Expression::Sub(large.shared_expression(), small.shared_expression()),
            )
        });

    let div = if s == 1 {
        None
    } else {
        checked_quotient(l, s)
            .ok()
            .filter(|&value| value != s)
            .map(|value| {
                Node::from_parts(
                    value,
                    Expression::Div(large.shared_expression(), small.shared_expression()),
                )
            })
    };

    [add, mul, sub, div]
}
