//! Expansion of free-form date expressions into year tokens.
//!
//! Three shapes are understood, checked in this order:
//! - a range, `2019-2022`, expanding to every year inclusive;
//! - a list, `2019,2021`, split verbatim on commas;
//! - anything else, taken whole as a single token.
//!
//! A hyphen always selects the range shape, so `2019-2020,2021` fails to
//! parse rather than falling back to a list.

use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};

/// A single year, as text, produced by [`parse_date_expression`].
///
/// Tokens from the list and single shapes are not validated, so a token is
/// not guaranteed to be numeric; see [`YearToken::as_year`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearToken(pub SmolStr);
impl YearToken {
    /// The token as a year, if the whole token is a base-10 integer.
    pub fn as_year(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl std::fmt::Display for YearToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<&str> for YearToken {
    fn from(value: &str) -> Self {
        YearToken(SmolStr::new(value))
    }
}

/// Expands a date expression into its year tokens.
///
/// Never fails: a malformed range is logged and yields no tokens.
pub fn parse_date_expression(expression: &str) -> Vec<YearToken> {
    let expression = expression.trim();

    if let Some((begin, end)) = expression.split_once('-') {
        let (Ok(begin), Ok(end)) = (begin.parse::<i64>(), end.parse::<i64>()) else {
            tracing::warn!("Failed to parse date range {expression:?}");
            return vec![];
        };
        return (begin..=end)
            .map(|year| YearToken(format_smolstr!("{year}")))
            .collect();
    }

    if expression.contains(',') {
        return expression.split(',').map(YearToken::from).collect();
    }

    vec![YearToken::from(expression)]
}
