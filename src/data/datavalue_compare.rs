use crate::data::datatable::{DataType, DataValue};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Compare two DataValues with no column type information.
/// Order across types: Null < Boolean < numeric < String
pub fn compare_datavalues(a: &DataValue, b: &DataValue) -> Ordering {
    match (a, b) {
        (DataValue::Integer(a), DataValue::Integer(b)) => a.cmp(b),
        (DataValue::Float(a), DataValue::Float(b)) => a.total_cmp(b),
        (DataValue::String(a), DataValue::String(b)) => a.cmp(b),
        (DataValue::Boolean(a), DataValue::Boolean(b)) => a.cmp(b),

        // Compare actual numeric values, not types
        (DataValue::Integer(i), DataValue::Float(f)) => (*i as f64).total_cmp(f),
        (DataValue::Float(f), DataValue::Integer(i)) => f.total_cmp(&(*i as f64)),

        (DataValue::Null, DataValue::Null) => Ordering::Equal,
        (DataValue::Null, _) => Ordering::Less,
        (_, DataValue::Null) => Ordering::Greater,

        (DataValue::Boolean(_), _) => Ordering::Less,
        (_, DataValue::Boolean(_)) => Ordering::Greater,

        (DataValue::String(_), _) => Ordering::Greater,
        (_, DataValue::String(_)) => Ordering::Less,
    }
}

/// Compare two cells of a column whose declared type is `data_type`.
///
/// Numeric columns compare by value and string columns lexicographically.
/// Absent values, and values that do not fit the column type, take the
/// type's natural minimum: `0` for numbers (NaN included), `""` for
/// strings, `false` for booleans.
pub fn compare_for_type(a: &DataValue, b: &DataValue, data_type: &DataType) -> Ordering {
    match data_type {
        DataType::Integer => match (a, b) {
            (DataValue::Integer(a), DataValue::Integer(b)) => a.cmp(b),
            _ => numeric_key(a).total_cmp(&numeric_key(b)),
        },
        DataType::Float => numeric_key(a).total_cmp(&numeric_key(b)),
        DataType::String => string_key(a).cmp(&string_key(b)),
        DataType::Boolean => bool_key(a).cmp(&bool_key(b)),
        DataType::Null | DataType::Mixed => compare_datavalues(a, b),
    }
}

fn numeric_key(value: &DataValue) -> f64 {
    match value.as_f64() {
        Some(f) if !f.is_nan() => f,
        _ => 0.0,
    }
}

fn string_key(value: &DataValue) -> Cow<'_, str> {
    match value {
        DataValue::String(s) => Cow::Borrowed(s.as_str()),
        DataValue::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

fn bool_key(value: &DataValue) -> bool {
    matches!(value, DataValue::Boolean(true))
}
