use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw value attached to a suggestion. The lookup service sends either a
/// JSON number or a string, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionValue {
    Number(f64),
    Text(String),
}

impl SuggestionValue {
    /// Numeric reading of the value.
    ///
    /// Text is trimmed; blank text reads as 0 and anything that is not a
    /// plain decimal number reads as NaN.
    pub fn as_f64(&self) -> f64 {
        match self {
            SuggestionValue::Number(n) => *n,
            SuggestionValue::Text(text) => parse_numeric_text(text),
        }
    }
}

impl fmt::Display for SuggestionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionValue::Number(n) => write!(f, "{}", n),
            SuggestionValue::Text(text) => write!(f, "{}", text),
        }
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    // f64::from_str also accepts "inf" and "NaN", which are not numbers here
    let plain = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !plain {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// An entity returned by the autocomplete lookup. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub category: String,
    pub value: SuggestionValue,
}

impl Suggestion {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        value: SuggestionValue,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            value,
        }
    }

    /// `name (category)`, the label shown in suggestion lists.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_and_text_values() {
        let json = r#"[
            {"id": "1", "name": "revenue", "category": "finance", "value": 120},
            {"id": "2", "name": "cost", "category": "finance", "value": "45.5"}
        ]"#;
        let parsed: Vec<Suggestion> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].value, SuggestionValue::Number(120.0));
        assert_eq!(parsed[1].value, SuggestionValue::Text("45.5".to_string()));
    }

    #[test]
    fn test_text_value_parsing() {
        assert_eq!(SuggestionValue::Text(" 12 ".to_string()).as_f64(), 12.0);
        assert_eq!(SuggestionValue::Text(String::new()).as_f64(), 0.0);
        assert!(SuggestionValue::Text("abc".to_string()).as_f64().is_nan());
        assert!(SuggestionValue::Text("inf".to_string()).as_f64().is_nan());
    }

    #[test]
    fn test_label() {
        let s = Suggestion::new("7", "margin", "ratio", SuggestionValue::Number(0.3));
        assert_eq!(s.label(), "margin (ratio)");
    }
}
