use log::{debug, trace};
use std::fmt::Display;

use crate::{
    config::{DENSE_STRIPPED_CHAR, SPARSE_SEPARATOR},
    error::SquishError,
    record::SquishableRecord,
    value::Value,
};

/// Adds two values without converting them to text first.
///
/// Numbers add and text concatenates. `Bool` counts as the integer 0 or 1, so
/// `Int` and `Bool` operands add as `Int`, while a `Float` operand promotes the
/// result. Any other pairing is rejected, so mixing a number with text fails
/// rather than producing a string.
pub fn imperfect_squish(
    thing1: impl Into<Value>,
    thing2: impl Into<Value>,
) -> Result<Value, SquishError> {
    let (thing1, thing2) = (thing1.into(), thing2.into());
    trace!("imperfect_squish({thing1:?}, {thing2:?})");

    let (left, right) = (thing1.kind(), thing2.kind());
    match (thing1, thing2) {
        (Value::Text(mut thing1), Value::Text(thing2)) => {
            thing1.push_str(&thing2);
            Ok(Value::Text(thing1))
        }
        (thing1, thing2) if left.is_numeric() && right.is_numeric() => {
            add_numbers(&thing1, &thing2)
        }
        _ => {
            debug!("Rejecting imperfect_squish of {left} and {right}");
            Err(SquishError::UnsupportedOperands { left, right })
        }
    }
}

fn add_numbers(thing1: &Value, thing2: &Value) -> Result<Value, SquishError> {
    if let (Some(left), Some(right)) = (thing1.as_i64(), thing2.as_i64()) {
        return left
            .checked_add(right)
            .map(Value::Int)
            .ok_or(SquishError::Overflow { left, right });
    }
    match (thing1.as_f64(), thing2.as_f64()) {
        (Some(left), Some(right)) => Ok(Value::Float(left + right)),
        _ => Err(SquishError::UnsupportedOperands {
            left: thing1.kind(),
            right: thing2.kind(),
        }),
    }
}

/// Renders both values and concatenates them.
pub fn squish(thing1: impl Display, thing2: impl Display) -> String {
    format!("{thing1}{thing2}")
}

/// Renders both values, strips every space from each, and concatenates them.
pub fn dense_squish(thing1: impl Display, thing2: impl Display) -> String {
    let mut squished = strip_spaces(&thing1.to_string());
    squished.push_str(&strip_spaces(&thing2.to_string()));
    squished
}

/// Renders both values and joins them with a single space.
pub fn sparse_squish(thing1: impl Display, thing2: impl Display) -> String {
    format!("{thing1}{SPARSE_SEPARATOR}{thing2}")
}

/// Renders every item in order and concatenates the results.
pub fn squish_list<I>(things: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    things.into_iter().fold(String::new(), |mut squished, thing| {
        squished.push_str(&thing.to_string());
        squished
    })
}

/// Concatenates the rendered fields of a record in declaration order.
pub fn squish_object(squishable: &SquishableRecord) -> String {
    trace!("squish_object({squishable:?})");
    squish_list(squishable.get_attribute_val_list())
}

fn strip_spaces(rendered: &str) -> String {
    rendered.replace(DENSE_STRIPPED_CHAR, "")
}

