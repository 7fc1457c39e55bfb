use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use risk_catalog::Kind;
use std::borrow::Cow;

pub(crate) struct Theme {
    border: Color,
    border_focus: Color,
    title: Color,
    text: Color,
    dim: Color,
    accent: Color,
    warn: Color,
    ok: Color,
}

impl Theme {
    pub(crate) fn dark() -> Self {
        Self {
            border: Color::DarkGray,
            border_focus: Color::Cyan,
            title: Color::Blue,
            text: Color::White,
            dim: Color::Gray,
            accent: Color::Cyan,
            warn: Color::Yellow,
            ok: Color::Green,
        }
    }

    pub(crate) fn block<'a>(&self, title: impl Into<Cow<'a, str>>) -> Block<'a> {
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(self.title).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border))
    }

    pub(crate) fn focus_block<'a>(&self, title: impl Into<Cow<'a, str>>, focused: bool) -> Block<'a> {
        let block = self.block(title);
        if focused {
            block.border_style(Style::default().fg(self.border_focus))
        } else {
            block
        }
    }

    pub(crate) fn heading_style(&self, kind: Kind) -> Style {
        let color = match kind {
            Kind::Source => self.warn,
            Kind::Measure => self.ok,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub(crate) fn notice_style(&self) -> Style {
        Style::default().fg(self.dim).add_modifier(Modifier::ITALIC)
    }

    pub(crate) fn tab_highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub(crate) fn help_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub(crate) fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn warn_style(&self) -> Style {
        Style::default().fg(self.warn).add_modifier(Modifier::BOLD)
    }
}
