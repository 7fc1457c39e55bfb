use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{InputMode, ViewState};

/// Returns true when the user confirmed quitting.
pub(crate) fn handle_key_event(key: KeyEvent, state: &mut ViewState) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if state.input_mode == InputMode::Search {
        handle_search_key(key, state);
        return false;
    }

    if state.confirm_quit {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Esc => {
                state.confirm_quit = false;
                return false;
            }
            _ => {
                state.confirm_quit = false;
            }
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => state.confirm_quit = true,
        KeyCode::Right | KeyCode::Char('l') => state.next_category(),
        KeyCode::Left | KeyCode::Char('h') => state.prev_category(),
        KeyCode::Tab | KeyCode::BackTab => state.toggle_focus(),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_down(state.scroll_step),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_up(state.scroll_step),
        KeyCode::PageDown => state.scroll_down(state.page_size()),
        KeyCode::PageUp => state.scroll_up(state.page_size()),
        KeyCode::Char('/') | KeyCode::Char('s') => state.start_search(),
        KeyCode::Char('c') => state.clear_search(),
        KeyCode::Char('g') => {
            if state.pending_g {
                state.scroll_to_top();
            } else {
                state.pending_g = true;
            }
        }
        KeyCode::Char('G') => state.scroll_to_bottom(),
        _ => state.pending_g = false,
    }
    false
}

fn handle_search_key(key: KeyEvent, state: &mut ViewState) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => state.finish_search(),
        KeyCode::Backspace => state.pop_search_char(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.clear_search();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.push_search_char(ch);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app::Column;
    use risk_catalog::Dataset;

    fn state() -> ViewState {
        let dataset =
            Dataset::from_json_str(r#"{"Cat A": [], "Cat B": []}"#).expect("dataset");
        ViewState::new(&dataset, None, "", 1).expect("state")
    }

    fn press(state: &mut ViewState, code: KeyCode) -> bool {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut state = state();
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert!(state.confirm_quit);
        assert!(!press(&mut state, KeyCode::Esc));
        assert!(!state.confirm_quit);
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert!(press(&mut state, KeyCode::Char('q')));
    }

    #[test]
    fn typing_edits_search_term() {
        let mut state = state();
        press(&mut state, KeyCode::Char('/'));
        assert_eq!(state.input_mode, InputMode::Search);
        for ch in "Bias".chars() {
            press(&mut state, KeyCode::Char(ch));
        }
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.search, "Bia");
        // 'q' is text while editing, not quit.
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert_eq!(state.search, "Biaq");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.input_mode, InputMode::Browse);
        press(&mut state, KeyCode::Char('c'));
        assert!(state.search.is_empty());
    }

    #[test]
    fn esc_keeps_term_and_ctrl_u_clears_it() {
        let mut state = state();
        press(&mut state, KeyCode::Char('/'));
        for ch in "audit".chars() {
            press(&mut state, KeyCode::Char(ch));
        }
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.search, "audit");

        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.input_mode, InputMode::Search);
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(!handle_key_event(key, &mut state));
        assert!(state.search.is_empty());
        assert_eq!(state.input_mode, InputMode::Search);
    }

    #[test]
    fn browse_keys_move_category_and_focus() {
        let mut state = state();
        press(&mut state, KeyCode::Right);
        assert_eq!(state.category_name(), "Cat B");
        press(&mut state, KeyCode::Char('h'));
        assert_eq!(state.category_name(), "Cat A");
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, Column::Measures);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut state = state();
        press(&mut state, KeyCode::Char('s'));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key_event(key, &mut state));
    }
}
