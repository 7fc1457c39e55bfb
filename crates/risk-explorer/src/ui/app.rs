use risk_catalog::{Dataset, Kind, Node};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum InputMode {
    #[default]
    Browse,
    Search,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Column {
    #[default]
    Sources,
    Measures,
}

impl Column {
    pub(crate) fn kind(self) -> Kind {
        match self {
            Column::Sources => Kind::Source,
            Column::Measures => Kind::Measure,
        }
    }

    fn other(self) -> Self {
        match self {
            Column::Sources => Column::Measures,
            Column::Measures => Column::Sources,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ColumnScroll {
    pub(crate) offset: usize,
    pub(crate) max: usize,
    pub(crate) total_lines: usize,
    pub(crate) view_height: u16,
}

impl ColumnScroll {
    fn set_metrics(&mut self, total_lines: usize, view_height: u16) {
        let total_lines = total_lines.max(1);
        self.total_lines = total_lines;
        self.view_height = view_height;
        self.max = total_lines.saturating_sub(view_height as usize);
        if self.offset > self.max {
            self.offset = self.max;
        }
    }

    fn page_size(&self) -> usize {
        let height = self.view_height.max(1) as usize;
        height.saturating_sub(1).max(1)
    }
}

/// Everything the user can change. Owned by the event loop and handed to
/// the renderer; the dataset itself stays outside.
#[derive(Debug)]
pub(crate) struct ViewState {
    pub(crate) categories: Vec<String>,
    pub(crate) selected: usize,
    pub(crate) search: String,
    pub(crate) input_mode: InputMode,
    pub(crate) focus: Column,
    pub(crate) sources: ColumnScroll,
    pub(crate) measures: ColumnScroll,
    pub(crate) scroll_step: usize,
    pub(crate) pending_g: bool,
    pub(crate) confirm_quit: bool,
}

impl ViewState {
    pub(crate) fn new(
        dataset: &Dataset,
        category: Option<&str>,
        search: impl Into<String>,
        scroll_step: usize,
    ) -> anyhow::Result<Self> {
        if dataset.is_empty() {
            anyhow::bail!("dataset has no categories");
        }
        let selected = match category {
            Some(name) => dataset
                .position(name)
                .ok_or_else(|| anyhow::anyhow!("unknown category: {name}"))?,
            None => 0,
        };
        Ok(Self {
            categories: dataset.categories().map(str::to_string).collect(),
            selected,
            search: search.into(),
            input_mode: InputMode::Browse,
            focus: Column::Sources,
            sources: ColumnScroll::default(),
            measures: ColumnScroll::default(),
            scroll_step: scroll_step.max(1),
            pending_g: false,
            confirm_quit: false,
        })
    }

    pub(crate) fn category_name(&self) -> &str {
        self.categories
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub(crate) fn category_tree<'a>(&self, dataset: &'a Dataset) -> anyhow::Result<&'a Node> {
        dataset.tree(self.category_name())
    }

    pub(crate) fn next_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.categories.len();
        self.reset_scroll();
    }

    pub(crate) fn prev_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.categories.len() - 1;
        } else {
            self.selected -= 1;
        }
        self.reset_scroll();
    }

    pub(crate) fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.pending_g = false;
        self.confirm_quit = false;
    }

    pub(crate) fn finish_search(&mut self) {
        self.input_mode = InputMode::Browse;
    }

    pub(crate) fn push_search_char(&mut self, ch: char) {
        self.search.push(ch);
        self.reset_scroll();
    }

    pub(crate) fn pop_search_char(&mut self) {
        if self.search.pop().is_some() {
            self.reset_scroll();
        }
    }

    pub(crate) fn clear_search(&mut self) {
        if !self.search.is_empty() {
            self.search.clear();
            self.reset_scroll();
        }
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
        self.pending_g = false;
    }

    pub(crate) fn column(&self, column: Column) -> &ColumnScroll {
        match column {
            Column::Sources => &self.sources,
            Column::Measures => &self.measures,
        }
    }

    fn column_mut(&mut self, column: Column) -> &mut ColumnScroll {
        match column {
            Column::Sources => &mut self.sources,
            Column::Measures => &mut self.measures,
        }
    }

    pub(crate) fn set_column_metrics(&mut self, column: Column, total_lines: usize, view_height: u16) {
        self.column_mut(column).set_metrics(total_lines, view_height);
    }

    pub(crate) fn scroll_down(&mut self, lines: usize) {
        let scroll = self.column_mut(self.focus);
        scroll.offset = (scroll.offset + lines).min(scroll.max);
        self.pending_g = false;
    }

    pub(crate) fn scroll_up(&mut self, lines: usize) {
        let scroll = self.column_mut(self.focus);
        scroll.offset = scroll.offset.saturating_sub(lines);
        self.pending_g = false;
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.column_mut(self.focus).offset = 0;
        self.pending_g = false;
    }

    pub(crate) fn scroll_to_bottom(&mut self) {
        let scroll = self.column_mut(self.focus);
        scroll.offset = scroll.max;
        self.pending_g = false;
    }

    pub(crate) fn page_size(&self) -> usize {
        self.column(self.focus).page_size()
    }

    fn reset_scroll(&mut self) {
        self.sources.offset = 0;
        self.measures.offset = 0;
        self.pending_g = false;
    }
}
