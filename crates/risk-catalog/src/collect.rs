use crate::{Entry, Kind, Node};

/// Tagged entries of `kind` in depth-first document order.
pub fn collect(node: &Node, kind: Kind) -> Vec<&Entry> {
    let mut entries = Vec::new();
    collect_into(node, kind, &mut entries);
    entries
}

fn collect_into<'a>(node: &'a Node, kind: Kind, entries: &mut Vec<&'a Entry>) {
    match node {
        Node::List(nodes) => {
            for node in nodes {
                collect_into(node, kind, entries);
            }
        }
        Node::Map(members) => {
            for (_, node) in members {
                collect_into(node, kind, entries);
            }
        }
        Node::Item(entry) => {
            if entry.tag == kind.tag() {
                entries.push(entry);
            }
        }
    }
}

/// Case-insensitive substring match over the whole serialized entry. An
/// empty term keeps everything.
pub fn filter<'a>(entries: Vec<&'a Entry>, term: &str) -> Vec<&'a Entry> {
    if term.is_empty() {
        return entries;
    }
    let needle = term.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| entry.search_text().to_lowercase().contains(&needle))
        .collect()
}

pub fn select<'a>(node: &'a Node, kind: Kind, term: &str) -> Vec<&'a Entry> {
    filter(collect(node, kind), term)
}
