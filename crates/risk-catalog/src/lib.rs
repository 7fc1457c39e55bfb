use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod collect;
pub mod dataset;

pub use collect::{collect, filter, select};
pub use dataset::{Dataset, Node};

pub const SOURCE_TAG: &str = "Risk source";
pub const MEASURE_TAG: &str = "Risk management measure";

/// Classification of a mapping key, decided once while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Source,
    Measure,
    Untagged,
}

impl Tag {
    pub fn kind(self) -> Option<Kind> {
        match self {
            Tag::Source => Some(Kind::Source),
            Tag::Measure => Some(Kind::Measure),
            Tag::Untagged => None,
        }
    }
}

/// A key naming both tags is classified as a source.
pub fn classify(key: &str) -> Tag {
    if key.contains(SOURCE_TAG) {
        Tag::Source
    } else if key.contains(MEASURE_TAG) {
        Tag::Measure
    } else {
        Tag::Untagged
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Source,
    Measure,
}

impl Kind {
    pub fn tag(self) -> Tag {
        match self {
            Kind::Source => Tag::Source,
            Kind::Measure => Tag::Measure,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Kind::Source => "Risk Sources",
            Kind::Measure => "Risk Management Measures",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Kind::Source => "⚠️",
            Kind::Measure => "🛡️",
        }
    }

    pub fn empty_notice(self) -> &'static str {
        match self {
            Kind::Source => "No risk sources found.",
            Kind::Measure => "No risk management measures found.",
        }
    }
}

/// Leaf payload. Fields stay optional so a malformed item survives loading
/// and is only rejected when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let text = |field: &str| object.get(field).and_then(Value::as_str).map(str::to_string);
        Self {
            title: text("title"),
            description: text("description"),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.description.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub tag: Tag,
    pub item: Item,
}

impl Entry {
    pub fn new(key: impl Into<String>, item: Item) -> Self {
        let key = key.into();
        Self {
            tag: classify(&key),
            key,
            item,
        }
    }

    /// Whole entry as `{'key': {'title': .., 'description': ..}}` with the
    /// field text left unescaped; the search filter matches against this.
    pub fn search_text(&self) -> String {
        let mut fields = Vec::with_capacity(2);
        if let Some(title) = &self.item.title {
            fields.push(format!("'title': '{title}'"));
        }
        if let Some(description) = &self.item.description {
            fields.push(format!("'description': '{description}'"));
        }
        format!("{{'{}': {{{}}}}}", self.key, fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_key_substring() {
        assert_eq!(classify("Risk source 1"), Tag::Source);
        assert_eq!(classify("Risk management measure 12"), Tag::Measure);
        assert_eq!(classify("Overview"), Tag::Untagged);
        assert_eq!(classify("risk source 1"), Tag::Untagged);
    }

    #[test]
    fn classify_prefers_source_when_both_tags_present() {
        assert_eq!(
            classify("Risk source / Risk management measure"),
            Tag::Source
        );
    }

    #[test]
    fn search_text_covers_key_and_fields() {
        let entry = Entry::new(
            "Risk source 1",
            Item {
                title: Some("Bias".to_string()),
                description: Some("Model bias.".to_string()),
            },
        );
        let text = entry.search_text();
        assert!(text.contains("Risk source 1"));
        assert!(text.contains("Bias"));
        assert!(text.contains("Model bias."));
        assert_eq!(
            text,
            "{'Risk source 1': {'title': 'Bias', 'description': 'Model bias.'}}"
        );
        assert_eq!(entry.tag, Tag::Source);
    }

    #[test]
    fn item_from_object_ignores_non_string_fields() {
        let value = serde_json::json!({"title": "Audit", "description": 3});
        let item = Item::from_object(value.as_object().expect("object"));
        assert_eq!(item.title.as_deref(), Some("Audit"));
        assert_eq!(item.description, None);
        assert!(!item.is_complete());
    }
}
