/// Normalization of the loosely-shaped fields the frontend submits
use chrono::{DateTime, NaiveDate, Utc};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use std::fmt;

/// Recipe instructions as submitted: a list of steps or one block of text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum InstructionsInput {
    /// Already-split steps, stored as given
    Steps(Vec<String>),
    /// Newline-delimited text; blank lines are dropped
    Text(String),
}

impl InstructionsInput {
    /// Normalize into an ordered list of steps
    pub fn into_steps(self) -> Vec<String> {
        match self {
            InstructionsInput::Steps(steps) => steps,
            InstructionsInput::Text(text) => text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Recipe ingredients as submitted: a list, or a keyed mapping whose keys
/// are discarded
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IngredientsInput {
    /// Ordered entries
    List(Vec<String>),
    /// Form-array style object such as `{"0": "flour", "1": "salt"}`
    Keyed(KeyedEntries),
}

/// Object entries in the order they appeared on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedEntries(pub Vec<(String, String)>);

impl<'de> Deserialize<'de> for KeyedEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = KeyedEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object of ingredient strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(KeyedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Canonical array-index keys (`"0"`, `"12"`, but not `"01"`)
fn index_key(key: &str) -> Option<u32> {
    key.parse::<u32>()
        .ok()
        .filter(|index| *index != u32::MAX && index.to_string() == key)
}

impl IngredientsInput {
    /// Normalize into an ordered list
    ///
    /// Index-like keys come first in numeric order, remaining keys keep the
    /// order they were submitted in.
    pub fn into_list(self) -> Vec<String> {
        match self {
            IngredientsInput::List(items) => items,
            IngredientsInput::Keyed(KeyedEntries(mut entries)) => {
                // stable: named keys keep insertion order
                entries.sort_by_key(|(key, _)| match index_key(key) {
                    Some(index) => (0, index),
                    None => (1, 0),
                });
                entries.into_iter().map(|(_, value)| value).collect()
            }
        }
    }
}

/// Parse a calendar date or full timestamp
///
/// Accepts RFC 3339 (`2025-03-01T10:00:00Z`) or a bare `YYYY-MM-DD`, which is
/// read as midnight UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde helper for optional date fields that use [`parse_date`]
///
/// Missing, `null` and empty-string values all deserialize to `None`.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{value}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn text_instructions_drop_blank_lines() {
        let input = InstructionsInput::Text("Step1\nStep2\n\n".to_string());
        assert_eq!(input.into_steps(), vec!["Step1", "Step2"]);
    }

    #[test]
    fn text_instructions_handle_crlf_and_whitespace_lines() {
        let input = InstructionsInput::Text("Boil water\r\n   \r\nAdd pasta".to_string());
        assert_eq!(input.into_steps(), vec!["Boil water", "Add pasta"]);
    }

    #[test]
    fn list_instructions_are_kept_verbatim() {
        let input: InstructionsInput = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(input.into_steps(), vec!["a", "b"]);
    }

    #[test]
    fn keyed_ingredients_follow_numeric_key_order() {
        let input: IngredientsInput =
            serde_json::from_str(r#"{"10": "pepper", "2": "salt", "0": "flour"}"#).unwrap();
        assert_eq!(input.into_list(), vec!["flour", "salt", "pepper"]);
    }

    #[test]
    fn keyed_ingredients_keep_submission_order_for_named_keys() {
        let input: IngredientsInput = serde_json::from_str(
            r#"{"zest": "lemon", "1": "salt", "base": "flour", "0": "water", "01": "yeast"}"#,
        )
        .unwrap();
        assert_eq!(
            input.into_list(),
            vec!["water", "salt", "lemon", "flour", "yeast"]
        );
    }

    #[test]
    fn list_ingredients_pass_through() {
        let input: IngredientsInput = serde_json::from_str(r#"["egg", "milk"]"#).unwrap();
        assert_eq!(input.into_list(), vec!["egg", "milk"]);
    }

    #[test]
    fn parse_date_accepts_plain_dates_and_timestamps() {
        let date = parse_date("2025-03-01").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 3, 1));
        assert_eq!(date.hour(), 0);

        let ts = parse_date("2025-03-01T10:30:00+02:00").unwrap();
        assert_eq!(ts.hour(), 8);

        assert!(parse_date("next tuesday").is_none());
    }
}
