use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Deserializes an `i64` from any JSON number with no fractional part.
///
/// `101` and `101.0` both yield `101`; `101.5` and out-of-range values are
/// rejected.
pub(crate) fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    match number.as_f64() {
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        Some(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(D::Error::custom(format!(
            "expected an integral number, found {number}"
        ))),
    }
}
