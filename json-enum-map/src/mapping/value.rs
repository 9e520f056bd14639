use serde_json::{Map, Number, Value};

/// The structured value an enum member encodes to.
pub type Representation = Value;

/// Compares two representations the way decode matches them.
///
/// Kinds must agree: a string only equals a string with the same content and
/// `null` only equals `null`. Numbers compare by numeric value, so `1`, `1u64`
/// and `1.0` are all the same representation. Arrays and objects compare
/// element-wise with the same rules.
pub fn representations_equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(lhs), Value::Bool(rhs)) => lhs == rhs,
        (Value::String(lhs), Value::String(rhs)) => lhs == rhs,
        (Value::Number(lhs), Value::Number(rhs)) => numbers_equal(lhs, rhs),
        (Value::Array(lhs), Value::Array(rhs)) => arrays_equal(lhs, rhs),
        (Value::Object(lhs), Value::Object(rhs)) => objects_equal(lhs, rhs),
        _ => false,
    }
}

fn arrays_equal(lhs: &[Value], rhs: &[Value]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }
    let mut pairs = lhs.iter().zip(rhs);
    pairs.all(|(lhs, rhs)| representations_equal(lhs, rhs))
}

fn objects_equal(lhs: &Map<String, Value>, rhs: &Map<String, Value>) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }
    for (key, value) in lhs {
        match rhs.get(key) {
            Some(other) if representations_equal(value, other) => {}
            _ => return false,
        }
    }
    true
}

#[allow(
    clippy::float_cmp,
    reason = "numeric equality is exact by definition here"
)]
fn numbers_equal(lhs: &Number, rhs: &Number) -> bool {
    match (integer_value(lhs), integer_value(rhs)) {
        (Some(lhs), Some(rhs)) => lhs == rhs,
        (Some(int), None) => float_equals_integer(rhs.as_f64(), int),
        (None, Some(int)) => float_equals_integer(lhs.as_f64(), int),
        (None, None) => lhs.as_f64() == rhs.as_f64(),
    }
}

fn integer_value(number: &Number) -> Option<i128> {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}

// Integers beyond 2^53 are not exactly representable as f64, so the float is
// widened to the integer instead of the other way around.
#[allow(
    clippy::cast_possible_truncation,
    reason = "only integral floats reach the cast and i128 covers every JSON integer"
)]
fn float_equals_integer(float: Option<f64>, int: i128) -> bool {
    let Some(float) = float else {
        return false;
    };
    float.is_finite() && float.fract() == 0.0 && float as i128 == int
}
