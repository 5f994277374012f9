use crate::clients::sparql_client::read_id_from_url;
use serde::Serialize;
use std::collections::HashMap;

/// One "position held" statement, flattened from a sparql binding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Membership {
    /// Person holding the office
    pub id: String,
    pub name: String,
    /// The P39 statement itself, unique per membership
    pub position_id: String,
    /// The ministerial role
    pub position: String,
    pub label: String,
    /// `YYYY-MM-DD`, empty when the qualifier is absent
    pub start_date: String,
    pub end_date: String,
    pub ordinal: i64,
}

impl Membership {
    pub fn from_binding(binding: &HashMap<String, String>) -> Self {
        Self {
            id: trailing_id(binding.get("item")),
            name: binding.get("itemLabel").cloned().unwrap_or_default(),
            position_id: trailing_id(binding.get("ps")),
            position: trailing_id(binding.get("minister")),
            label: binding.get("ministerLabel").cloned().unwrap_or_default(),
            start_date: date_prefix(binding.get("start")),
            end_date: date_prefix(binding.get("end")),
            ordinal: binding.get("ordinal").map_or(0, |v| to_ordinal(v)),
        }
    }
}

fn trailing_id(value: Option<&String>) -> String {
    value.and_then(|v| read_id_from_url(v)).unwrap_or_default()
}

/// `2020-01-01T00:00:00Z` gives `2020-01-01`; shorter values pass through
fn date_prefix(value: Option<&String>) -> String {
    value.map(|v| v.chars().take(10).collect()).unwrap_or_default()
}

/// Permissive coercion: read the leading (optionally signed) digits,
/// anything else is 0. `"3rd"` gives 3, `"abc"` gives 0.
fn to_ordinal(raw: &str) -> i64 {
    let raw = raw.trim();
    let unsigned = raw
        .strip_prefix('-')
        .or_else(|| raw.strip_prefix('+'))
        .unwrap_or(raw);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value = digits.parse().unwrap_or(0);
    if raw.starts_with('-') {
        -value
    } else {
        value
    }
}
