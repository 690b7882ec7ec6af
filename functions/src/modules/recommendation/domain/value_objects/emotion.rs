use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::text_form::text_form;

/// Emotion category
///
/// Closed set of labels that have their own recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionCategory {
    Joy,
    Sadness,
    Anger,
    Fear,
    Disgust,
    Surprise,
}

impl EmotionCategory {
    /// Category used for any label outside the known set
    pub const FALLBACK: EmotionCategory = EmotionCategory::Joy;

    pub fn all() -> &'static [EmotionCategory] {
        &[
            EmotionCategory::Joy,
            EmotionCategory::Sadness,
            EmotionCategory::Anger,
            EmotionCategory::Fear,
            EmotionCategory::Disgust,
            EmotionCategory::Surprise,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Joy => "joy",
            EmotionCategory::Sadness => "sadness",
            EmotionCategory::Anger => "anger",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Disgust => "disgust",
            EmotionCategory::Surprise => "surprise",
        }
    }

    /// Look up a label, falling back to joy when it is not a known category
    pub fn resolve(label: &str) -> Self {
        label.parse().unwrap_or(Self::FALLBACK)
    }
}

impl Default for EmotionCategory {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmotionCategory {
    type Err = String;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "joy" => Ok(EmotionCategory::Joy),
            "sadness" => Ok(EmotionCategory::Sadness),
            "anger" => Ok(EmotionCategory::Anger),
            "fear" => Ok(EmotionCategory::Fear),
            "disgust" => Ok(EmotionCategory::Disgust),
            "surprise" => Ok(EmotionCategory::Surprise),
            _ => Err(format!("Unknown emotion: {}", s)),
        }
    }
}

/// Emotion label as the caller sent it
///
/// Keeps the raw text for the reply message alongside the category that
/// drives the lookup. The raw text is never translated or normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionLabel {
    raw: String,
    category: EmotionCategory,
}

impl EmotionLabel {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let category = EmotionCategory::resolve(&raw);
        Self { raw, category }
    }

    /// Build from the untyped `emotion` request field
    ///
    /// The label is the value's text form, so `["fear"]` reads as `fear`.
    /// Absent renders as `undefined`.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(value) => Self::new(text_form(value)),
            None => Self::new("undefined"),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn category(&self) -> EmotionCategory {
        self.category
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_categories_parse() {
        for category in EmotionCategory::all() {
            assert_eq!(EmotionCategory::resolve(category.as_str()), *category);
        }
    }

    #[test]
    fn test_unknown_falls_back_to_joy() {
        assert_eq!(EmotionCategory::resolve("unknown_emotion"), EmotionCategory::Joy);
        assert_eq!(EmotionCategory::resolve(""), EmotionCategory::Joy);
        // lookup is case-sensitive
        assert_eq!(EmotionCategory::resolve("Anger"), EmotionCategory::Joy);
        assert!("Fear".parse::<EmotionCategory>().is_err());
    }

    #[test]
    fn test_label_keeps_raw_text() {
        let label = EmotionLabel::new("unknown_emotion");
        assert_eq!(label.raw(), "unknown_emotion");
        assert_eq!(label.category(), EmotionCategory::Joy);

        let label = EmotionLabel::new("sadness");
        assert_eq!(label.to_string(), "sadness");
        assert_eq!(label.category(), EmotionCategory::Sadness);
    }

    #[test]
    fn test_label_from_non_string_values() {
        let absent = EmotionLabel::from_value(None);
        assert_eq!(absent.raw(), "undefined");
        assert_eq!(absent.category(), EmotionCategory::Joy);

        let null = EmotionLabel::from_value(Some(&Value::Null));
        assert_eq!(null.raw(), "null");

        let number = EmotionLabel::from_value(Some(&json!(42)));
        assert_eq!(number.raw(), "42");
        assert_eq!(number.category(), EmotionCategory::Joy);

        let float = EmotionLabel::from_value(Some(&json!(2.0)));
        assert_eq!(float.raw(), "2");

        let fear = EmotionLabel::from_value(Some(&json!("fear")));
        assert_eq!(fear.category(), EmotionCategory::Fear);
    }

    #[test]
    fn test_label_from_composite_values() {
        let object = EmotionLabel::from_value(Some(&json!({"a": 1})));
        assert_eq!(object.raw(), "[object Object]");
        assert_eq!(object.category(), EmotionCategory::Joy);

        let pair = EmotionLabel::from_value(Some(&json!(["a", "b"])));
        assert_eq!(pair.raw(), "a,b");
        assert_eq!(pair.category(), EmotionCategory::Joy);

        let wrapped = EmotionLabel::from_value(Some(&json!(["fear"])));
        assert_eq!(wrapped.raw(), "fear");
        assert_eq!(wrapped.category(), EmotionCategory::Fear);
    }
}
