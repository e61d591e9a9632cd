//! Substitutable value predicates.
//!
//! Any `Fn(i64) -> bool` can stand in for [`is_even`] or [`is_odd`];
//! the filtering functions never inspect which predicate they were given.

use crate::result::AppResult;
use crate::traits::MessageSink;

/// Named parity predicates selectable from configuration or the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    /// Keep even values.
    Even,
    /// Keep odd values.
    Odd,
}

impl Parity {
    /// Returns the predicate for this parity.
    pub fn predicate(self) -> fn(i64) -> bool {
        match self {
            Self::Even => is_even,
            Self::Odd => is_odd,
        }
    }
}

/// Returns whether `x` is even.
pub fn is_even(x: i64) -> bool {
    x % 2 == 0
}

/// Returns whether `x` is odd, including negative odd values.
pub fn is_odd(x: i64) -> bool {
    x % 2 != 0
}

/// Keeps the values accepted by `predicate`, preserving order.
pub fn filter_values<P>(values: &[i64], predicate: P) -> Vec<i64>
where
    P: Fn(i64) -> bool,
{
    values.iter().copied().filter(|v| predicate(*v)).collect()
}

/// Writes each value accepted by `predicate` to `sink`, one per message.
///
/// Returns the number of values written. Stops at the first sink failure.
pub fn print_filtered<P>(values: &[i64], predicate: P, sink: &dyn MessageSink) -> AppResult<usize>
where
    P: Fn(i64) -> bool,
{
    let mut written = 0;
    for value in values.iter().copied().filter(|v| predicate(*v)) {
        sink.write(&value.to_string())?;
        written += 1;
    }
    Ok(written)
}
