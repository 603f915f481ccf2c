/*
[INPUT]:  Caller-supplied arguments to resource wrapper methods
[OUTPUT]: Validated values or usage errors, raised before any network call
[POS]:    Validation layer - local argument checks shared by resource wrappers
[UPDATE]: When a wrapper gains a new locally checked constraint
*/

use crate::http::{PaystackError, Result};
use crate::types::Interval;

/// Amounts are in the currency subunit and must be positive
pub fn amount(amount: i64) -> Result<i64> {
    if amount <= 0 {
        return Err(PaystackError::InvalidAmount(amount));
    }
    Ok(amount)
}

pub fn optional_amount(amount: Option<i64>) -> Result<Option<i64>> {
    amount.map(self::amount).transpose()
}

/// Parse an interval name
pub fn interval(name: &str) -> Result<Interval> {
    name.parse()
}

/// Reject a call that sets both of two mutually exclusive arguments
pub fn exclusive(first: (&str, bool), second: (&str, bool)) -> Result<()> {
    if first.1 && second.1 {
        return Err(PaystackError::invalid_argument(format!(
            "{} and {} are mutually exclusive",
            first.0, second.0
        )));
    }
    Ok(())
}
