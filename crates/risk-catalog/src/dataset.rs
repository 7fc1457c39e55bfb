use crate::{classify, Entry, Item, Tag};
use anyhow::Context;
use serde_json::Value;
use std::path::Path;

/// Category tree with tags resolved at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    List(Vec<Node>),
    Map(Vec<(String, Node)>),
    Item(Entry),
}

impl Node {
    /// Scalars outside a tagged entry carry nothing the viewer shows and are
    /// dropped, so a parse never fails below the top level.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(values) => Some(Node::List(
                values.iter().filter_map(Node::from_value).collect(),
            )),
            Value::Object(object) => {
                let mut members = Vec::with_capacity(object.len());
                for (key, value) in object {
                    let tag = classify(key);
                    let node = match value {
                        Value::Object(fields) if tag != Tag::Untagged => {
                            Node::Item(Entry::new(key.clone(), Item::from_object(fields)))
                        }
                        Value::Array(_) | Value::Object(_) => match Node::from_value(value) {
                            Some(node) => node,
                            None => continue,
                        },
                        _ => {
                            tracing::debug!(key = %key, "dropping scalar member");
                            continue;
                        }
                    };
                    members.push((key.clone(), node));
                }
                Some(Node::Map(members))
            }
            _ => None,
        }
    }

    pub fn entry_count(&self) -> usize {
        match self {
            Node::List(nodes) => nodes.iter().map(Node::entry_count).sum(),
            Node::Map(members) => members.iter().map(|(_, node)| node.entry_count()).sum(),
            Node::Item(_) => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    categories: Vec<(String, Node)>,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        let dataset = Self::from_json_str(&content)
            .with_context(|| format!("failed to parse dataset {}", path.display()))?;
        tracing::info!(
            event = "dataset.loaded",
            path = %path.display(),
            categories = dataset.len(),
        );
        Ok(dataset)
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> anyhow::Result<Self> {
        let Value::Object(object) = value else {
            anyhow::bail!("dataset must be a JSON object keyed by category");
        };
        let mut categories = Vec::with_capacity(object.len());
        for (name, value) in object {
            // A scalar category still appears in the selector, with nothing in it.
            let tree = Node::from_value(value).unwrap_or(Node::List(Vec::new()));
            categories.push((name.clone(), tree));
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|(candidate, _)| candidate == name)
    }

    pub fn tree(&self, name: &str) -> anyhow::Result<&Node> {
        self.categories
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, tree)| tree)
            .ok_or_else(|| anyhow::anyhow!("unknown category: {name}"))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
