use crate::ui::format::{column_title, heading_text, renderable, search_header, TITLE};
use crate::ui::ViewState;
use risk_catalog::{select, Dataset, Kind};
use std::io::Write;

/// Plain-text rendition of the two result lists for the current view.
pub(crate) fn write_report(
    out: &mut impl Write,
    dataset: &Dataset,
    state: &ViewState,
) -> anyhow::Result<()> {
    let tree = state.category_tree(dataset)?;
    writeln!(out, "{TITLE}")?;
    writeln!(out, "Category: {}", state.category_name())?;
    if !state.search.is_empty() {
        writeln!(out, "{}", search_header(&state.search))?;
    }

    for kind in [Kind::Source, Kind::Measure] {
        let entries = select(tree, kind, &state.search);
        writeln!(out)?;
        writeln!(out, "{}", column_title(kind))?;
        let mut written = 0usize;
        for entry in entries {
            let Some((title, description)) = renderable(entry) else {
                continue;
            };
            writeln!(out, "{}", heading_text(kind, title))?;
            writeln!(out, "{description}")?;
            writeln!(out)?;
            written += 1;
        }
        if written == 0 {
            writeln!(out, "{}", kind.empty_notice())?;
        }
    }
    out.flush()?;
    Ok(())
}
