use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Clear, Paragraph, Tabs};
use risk_catalog::{select, Dataset, Entry, Node};

use super::app::{Column, InputMode, ViewState};
use super::format::{column_title, entry_lines, search_header, SUBTITLE, TITLE};
use super::text::{display_width, truncate_with_ellipsis};
use super::theme::Theme;

pub(crate) fn draw_ui(frame: &mut ratatui::Frame, dataset: &Dataset, state: &mut ViewState) {
    let theme = Theme::dark();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(TITLE, theme.accent_style())),
        Line::from(Span::styled(SUBTITLE, theme.help_style())),
    ]))
    .block(theme.block("Risk Explorer"));
    frame.render_widget(header, chunks[0]);

    let tabs = Tabs::new(state.categories.iter().map(|name| Line::from(name.clone())))
        .select(state.selected)
        .style(theme.text_style())
        .highlight_style(theme.tab_highlight_style())
        .divider(" | ")
        .block(theme.block("Select Category"));
    frame.render_widget(tabs, chunks[1]);

    draw_search_box(frame, &theme, state, chunks[2]);

    // Selector is built from dataset keys, so a miss means the state is stale.
    let tree = match state.category_tree(dataset) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::error!(error = %err, "selected category missing from dataset");
            let notice = Paragraph::new(Line::styled(err.to_string(), theme.warn_style()))
                .block(theme.block("Results"));
            frame.render_widget(notice, chunks[3]);
            draw_footer(frame, &theme, state, chunks[4]);
            return;
        }
    };
    draw_results(frame, &theme, tree, state, chunks[3]);
    draw_footer(frame, &theme, state, chunks[4]);
}

fn draw_search_box(frame: &mut ratatui::Frame, theme: &Theme, state: &ViewState, area: Rect) {
    let editing = state.input_mode == InputMode::Search;
    let block = theme.focus_block("🔍 Search for specific terms", editing);
    let inner = block.inner(area);
    let content = if state.search.is_empty() && !editing {
        Line::styled("press / to search", theme.notice_style())
    } else {
        Line::styled(state.search.clone(), theme.text_style())
    };
    frame.render_widget(Paragraph::new(content).block(block), area);
    if editing {
        let offset = display_width(&state.search).min(inner.width.saturating_sub(1) as usize);
        frame.set_cursor_position(Position::new(inner.x + offset as u16, inner.y));
    }
}

fn draw_results(
    frame: &mut ratatui::Frame,
    theme: &Theme,
    tree: &Node,
    state: &mut ViewState,
    area: Rect,
) {
    let area = if state.search.is_empty() {
        area
    } else {
        let block = theme.block(search_header(&state.search));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (column, rect) in [(Column::Sources, columns[0]), (Column::Measures, columns[1])] {
        let entries = select(tree, column.kind(), &state.search);
        draw_column(frame, theme, &entries, column, state, rect);
    }
}

fn draw_column(
    frame: &mut ratatui::Frame,
    theme: &Theme,
    entries: &[&Entry],
    column: Column,
    state: &mut ViewState,
    area: Rect,
) {
    let kind = column.kind();
    let focused = state.focus == column;
    let mut title = column_title(kind);
    let shown = entries.iter().filter(|entry| entry.item.is_complete()).count();
    if shown > 0 {
        title.push_str(&format!(" ({shown})"));
    }
    if focused {
        title.push_str(" *");
    }
    let block = theme.focus_block(title, focused);
    let inner = block.inner(area);
    let lines = entry_lines(theme, entries, kind, inner.width);
    state.set_column_metrics(column, lines.len(), inner.height);
    let scroll = state.column(column).offset;

    let panel = Paragraph::new(Text::from(lines))
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(Clear, area);
    frame.render_widget(panel, area);
}

fn draw_footer(frame: &mut ratatui::Frame, theme: &Theme, state: &ViewState, area: Rect) {
    let help = match state.input_mode {
        InputMode::Browse => "←/→=category  /=search  c=clear  Tab=column  j/k=scroll  gg/G=top/bottom  Q=quit  ",
        InputMode::Search => "type to filter  Backspace=delete  Ctrl+u=clear  Enter/Esc=done  ",
    };
    let mut spans = vec![Span::styled(help, theme.help_style())];
    if state.confirm_quit {
        spans.push(Span::styled(
            "press Q again to quit / Esc to cancel  ",
            theme.warn_style(),
        ));
    }
    let scroll = state.column(state.focus);
    let position = format!(
        "line {}/{}",
        scroll.offset.saturating_add(1),
        scroll.total_lines
    );
    spans.push(Span::styled(position, theme.accent_style()));
    let category = truncate_with_ellipsis(state.category_name(), 32);
    spans.push(Span::styled(format!("  [{category}]"), theme.help_style()));
    let footer = Paragraph::new(Line::from(spans)).block(theme.block("Controls"));
    frame.render_widget(footer, area);
}
