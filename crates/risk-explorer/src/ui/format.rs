use ratatui::text::{Line, Span};
use risk_catalog::{Entry, Kind};

use super::text::{sanitize_text, wrap_words};
use super::theme::Theme;

pub(crate) const TITLE: &str = "AI Risk Sources & Measures";
pub(crate) const SUBTITLE: &str = "Explore various AI risk sources and management strategies.";

/// Title and description of an entry that can be shown. Entries missing
/// either field are logged and skipped so the rest of the list still renders.
pub(crate) fn renderable(entry: &Entry) -> Option<(&str, &str)> {
    match (&entry.item.title, &entry.item.description) {
        (Some(title), Some(description)) => Some((title.as_str(), description.as_str())),
        _ => {
            tracing::warn!(
                event = "entry.malformed",
                key = %entry.key,
                has_title = entry.item.title.is_some(),
                has_description = entry.item.description.is_some(),
            );
            None
        }
    }
}

pub(crate) fn heading_text(kind: Kind, title: &str) -> String {
    format!("{} {}", kind.marker(), title)
}

pub(crate) fn search_header(term: &str) -> String {
    format!("Search Results for: '{term}'")
}

pub(crate) fn column_title(kind: Kind) -> String {
    format!("{} {}", kind.marker(), kind.label())
}

pub(super) fn entry_lines(
    theme: &Theme,
    entries: &[&Entry],
    kind: Kind,
    width: u16,
) -> Vec<Line<'static>> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    for entry in entries {
        let Some((title, description)) = renderable(entry) else {
            continue;
        };
        let heading = heading_text(kind, &sanitize_text(title));
        for segment in wrap_words(&heading, width) {
            lines.push(Line::from(Span::styled(segment, theme.heading_style(kind))));
        }
        for segment in wrap_words(&sanitize_text(description), width) {
            lines.push(Line::from(Span::styled(segment, theme.text_style())));
        }
        lines.push(Line::default());
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            kind.empty_notice(),
            theme.notice_style(),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_catalog::Item;

    fn entry(key: &str, title: Option<&str>, description: Option<&str>) -> Entry {
        Entry::new(
            key,
            Item {
                title: title.map(str::to_string),
                description: description.map(str::to_string),
            },
        )
    }

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn renders_heading_description_and_spacer() {
        let bias = entry("Risk source 1", Some("Bias"), Some("Model bias."));
        let lines = entry_lines(&Theme::dark(), &[&bias], Kind::Source, 40);
        assert_eq!(plain(&lines), vec!["⚠️ Bias", "Model bias.", ""]);
    }

    #[test]
    fn skips_malformed_entries() {
        let broken = entry("Risk management measure 1", Some("Audit"), None);
        let good = entry("Risk management measure 2", Some("Red team"), Some("Adversarial tests."));
        let lines = entry_lines(&Theme::dark(), &[&broken, &good], Kind::Measure, 40);
        assert_eq!(plain(&lines), vec!["🛡️ Red team", "Adversarial tests.", ""]);
    }

    #[test]
    fn empty_list_shows_notice() {
        let lines = entry_lines(&Theme::dark(), &[], Kind::Measure, 40);
        assert_eq!(plain(&lines), vec!["No risk management measures found."]);
    }

    #[test]
    fn search_header_quotes_term() {
        assert_eq!(search_header("bias"), "Search Results for: 'bias'");
    }
}
