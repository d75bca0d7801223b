//! The operator and assignment tables of the type system.
//!
//! These are pure functions of the operand types. A `None` result means the
//! combination is not in the table and therefore a type error.

use crate::compiler::frontend::parser::ast::{BinaryOp, UnaryOp};
use crate::compiler::frontend::types::Type;

/// Result type of a binary expression plus the coercions its operands need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryRule {
    pub result: Type,
    pub coerce_left: Option<Type>,
    pub coerce_right: Option<Type>,
}

impl BinaryRule {
    fn plain(result: Type) -> Self {
        BinaryRule {
            result,
            coerce_left: None,
            coerce_right: None,
        }
    }

    fn left(result: Type, left: Type) -> Self {
        BinaryRule {
            coerce_left: Some(left),
            ..Self::plain(result)
        }
    }

    fn right(result: Type, right: Type) -> Self {
        BinaryRule {
            coerce_right: Some(right),
            ..Self::plain(result)
        }
    }

    fn both(result: Type, to: Type) -> Self {
        BinaryRule {
            result,
            coerce_left: Some(to),
            coerce_right: Some(to),
        }
    }
}

pub fn binary(op: BinaryOp, left: Type, right: Type) -> Option<BinaryRule> {
    if op.is_logical() {
        return (left == Type::Boolean && right == Type::Boolean)
            .then(|| BinaryRule::plain(Type::Boolean));
    }

    if op.is_equality() {
        return (left == right).then(|| BinaryRule::plain(Type::Boolean));
    }

    if op.is_relational() {
        return numeric(left, right).map(|rule| BinaryRule {
            result: Type::Boolean,
            ..rule
        });
    }

    if let Some(rule) = arithmetic(left, right) {
        return Some(rule);
    }

    if op.is_additive() {
        None
    } else {
        scaling(left, right)
    }
}

fn numeric(left: Type, right: Type) -> Option<BinaryRule> {
    match (left, right) {
        (Type::Int, Type::Int) => Some(BinaryRule::plain(Type::Int)),
        (Type::Float, Type::Float) => Some(BinaryRule::plain(Type::Float)),
        (Type::Int, Type::Float) => Some(BinaryRule::left(Type::Float, Type::Float)),
        (Type::Float, Type::Int) => Some(BinaryRule::right(Type::Float, Type::Float)),
        _ => None,
    }
}

// shared by + - * / %
fn arithmetic(left: Type, right: Type) -> Option<BinaryRule> {
    if let Some(rule) = numeric(left, right) {
        return Some(rule);
    }

    match (left, right) {
        (Type::Color, Type::Color) => Some(BinaryRule::plain(Type::Color)),
        (Type::ColorFloat, Type::ColorFloat) => Some(BinaryRule::plain(Type::ColorFloat)),
        (Type::ColorFloat, Type::Color) => Some(BinaryRule::right(Type::ColorFloat, Type::ColorFloat)),
        (Type::Color, Type::ColorFloat) => Some(BinaryRule::left(Type::ColorFloat, Type::ColorFloat)),
        (Type::Image, Type::Image) => Some(BinaryRule::plain(Type::Image)),
        _ => None,
    }
}

// only * / %
fn scaling(left: Type, right: Type) -> Option<BinaryRule> {
    match (left, right) {
        (Type::Image, Type::Int) | (Type::Image, Type::Float) => Some(BinaryRule::plain(Type::Image)),
        (Type::Int, Type::Color) => Some(BinaryRule::left(Type::Color, Type::Color)),
        (Type::Color, Type::Int) => Some(BinaryRule::right(Type::Color, Type::Color)),
        (Type::Float, Type::Color) | (Type::Color, Type::Float) => {
            Some(BinaryRule::both(Type::ColorFloat, Type::ColorFloat))
        }
        _ => None,
    }
}

pub fn unary(op: UnaryOp, operand: Type) -> Option<Type> {
    match (op, operand) {
        (UnaryOp::Not, Type::Boolean) => Some(Type::Boolean),
        (UnaryOp::Negate, Type::Int) => Some(Type::Int),
        (UnaryOp::Negate, Type::Float) => Some(Type::Float),
        (UnaryOp::Component(_), Type::Int) | (UnaryOp::Component(_), Type::Color) => Some(Type::Int),
        (UnaryOp::Component(_), Type::Image) => Some(Type::Image),
        (UnaryOp::Property(_), Type::Image) => Some(Type::Int),
        _ => None,
    }
}

/// Can a value of type `source` be stored in a variable of type `target`
/// (other than an image)?
pub fn assignment_compatible(target: Type, source: Type) -> bool {
    target == source
        || matches!(
            (target, source),
            (Type::Int, Type::Float)
                | (Type::Float, Type::Int)
                | (Type::Int, Type::Color)
                | (Type::Color, Type::Int)
        )
}

/// The coercion needed to store a value of type `source` into an image,
/// `Some(None)` if it is stored as is and `None` if it cannot be stored.
pub fn image_value(source: Type) -> Option<Option<Type>> {
    match source {
        Type::Image | Type::Color | Type::ColorFloat => Some(None),
        Type::Int => Some(Some(Type::Color)),
        Type::Float => Some(Some(Type::ColorFloat)),
        _ => None,
    }
}

/// Types that may be stored into a single pixel; they are all coerced to `COLOR`.
pub fn is_pixel_value(source: Type) -> bool {
    matches!(
        source,
        Type::Int | Type::Float | Type::Color | Type::ColorFloat
    )
}
