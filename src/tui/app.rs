use crate::list::models::Snapshot;
use crate::tui::handlers::{HelpModeAction, KeyHandler, NormalModeAction};
use anyhow::Result;
use crossterm::event::KeyEvent;

/// What the header should show for the current snapshot. Never stored;
/// recomputed from selection data on every read so mode and data cannot
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    Browsing,
    Selecting { count: usize },
}

impl Header {
    pub fn title(&self) -> String {
        match self {
            Header::Browsing => "Multi Selection List".to_string(),
            Header::Selecting { count } => format!("{} Selected", count),
        }
    }
}

/// Hooks for the contextual header's trailing actions. The defaults do
/// nothing; a host can install real handlers through the `App` builders.
pub struct ActionHandlers {
    pub delete: Box<dyn FnMut(&Snapshot)>,
    pub info: Box<dyn FnMut(&Snapshot)>,
    pub more: Box<dyn FnMut(&Snapshot)>,
}

impl Default for ActionHandlers {
    fn default() -> Self {
        Self {
            delete: Box::new(|_| {}),
            info: Box::new(|_| {}),
            more: Box::new(|_| {}),
        }
    }
}

pub struct App {
    snapshot: Snapshot,
    pub cursor: usize,
    pub should_quit: bool,
    pub help_mode: bool,
    actions: ActionHandlers,
}

impl App {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            cursor: 0,
            should_quit: false,
            help_mode: false,
            actions: ActionHandlers::default(),
        }
    }

    pub fn with_delete_handler(mut self, handler: Box<dyn FnMut(&Snapshot)>) -> Self {
        self.actions.delete = handler;
        self
    }

    pub fn with_info_handler(mut self, handler: Box<dyn FnMut(&Snapshot)>) -> Self {
        self.actions.info = handler;
        self
    }

    pub fn with_more_handler(mut self, handler: Box<dyn FnMut(&Snapshot)>) -> Self {
        self.actions.more = handler;
        self
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn header(&self) -> Header {
        if self.snapshot.any_selected() {
            Header::Selecting {
                count: self.snapshot.selected_count(),
            }
        } else {
            Header::Browsing
        }
    }

    pub fn selected_count(&self) -> usize {
        self.snapshot.selected_count()
    }

    pub fn any_selected(&self) -> bool {
        self.snapshot.any_selected()
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event)
        } else {
            self.handle_normal_mode_key(key_event)
        }
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => {
                self.should_quit = true;
            }
            NormalModeAction::Back => {
                // An unhandled back dismisses the screen.
                if !self.on_back_requested() {
                    self.should_quit = true;
                }
            }
            NormalModeAction::MoveCursorUp => {
                self.move_cursor_up();
            }
            NormalModeAction::MoveCursorDown => {
                self.move_cursor_down();
            }
            NormalModeAction::LongPress => {
                if self.cursor < self.snapshot.len() {
                    self.on_long_press(self.cursor);
                }
            }
            NormalModeAction::Tap => {
                if self.cursor < self.snapshot.len() {
                    self.on_tap(self.cursor);
                }
            }
            NormalModeAction::RequestDelete => {
                self.request_delete();
            }
            NormalModeAction::RequestInfo => {
                self.request_info();
            }
            NormalModeAction::RequestMore => {
                self.request_more();
            }
            NormalModeAction::ToggleHelpMode => {
                self.help_mode = true;
            }
            NormalModeAction::None => {}
        }
        Ok(())
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => {
                self.help_mode = false;
            }
            HelpModeAction::None => {}
        }
        Ok(())
    }

    /// Long-press always toggles; this is the sole way into selecting mode.
    pub fn on_long_press(&mut self, index: usize) {
        self.snapshot = self.snapshot.toggled(index);
    }

    /// A tap toggles only while a selection is already active. With nothing
    /// selected it is reserved for a primary action and leaves selection
    /// state untouched.
    pub fn on_tap(&mut self, index: usize) {
        if self.snapshot.any_selected() {
            self.snapshot = self.snapshot.toggled(index);
        }
    }

    /// Back is intercepted only while a selection is active, in which case it
    /// clears the selection. Returns whether the gesture was consumed.
    pub fn on_back_requested(&mut self) -> bool {
        if self.snapshot.any_selected() {
            self.snapshot = self.snapshot.cleared();
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.snapshot = self.snapshot.cleared();
    }

    fn request_delete(&mut self) {
        (self.actions.delete)(&self.snapshot);
    }

    fn request_info(&mut self) {
        (self.actions.info)(&self.snapshot);
    }

    fn request_more(&mut self) {
        (self.actions.more)(&self.snapshot);
    }

    fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_cursor_down(&mut self) {
        if self.cursor < self.snapshot.len().saturating_sub(1) {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use std::cell::Cell;
    use std::rc::Rc;

    fn new_app() -> App {
        App::new(Snapshot::generate(20))
    }

    #[test]
    fn test_long_press_enters_selecting_mode() {
        let mut app = new_app();
        assert_eq!(app.header(), Header::Browsing);

        app.on_long_press(3);

        assert_eq!(app.selected_count(), 1);
        assert_eq!(app.header(), Header::Selecting { count: 1 });
        assert_eq!(app.header().title(), "1 Selected");
    }

    #[test]
    fn test_tap_extends_selection_while_selecting() {
        let mut app = new_app();
        app.on_long_press(3);
        app.on_tap(7);

        assert_eq!(app.selected_count(), 2);
        assert!(app.snapshot().items()[3].is_selected);
        assert!(app.snapshot().items()[7].is_selected);
    }

    #[test]
    fn test_tap_deselects_selected_item() {
        let mut app = new_app();
        app.on_long_press(3);
        app.on_tap(7);
        app.on_tap(3);

        assert!(!app.snapshot().items()[3].is_selected);
        assert!(app.snapshot().items()[7].is_selected);
        assert_eq!(app.selected_count(), 1);
    }

    #[test]
    fn test_back_clears_active_selection() {
        let mut app = new_app();
        app.on_long_press(3);
        app.on_tap(7);
        app.on_tap(3);

        assert!(app.on_back_requested());
        assert_eq!(app.selected_count(), 0);
        assert_eq!(app.header(), Header::Browsing);
        assert_eq!(app.header().title(), "Multi Selection List");
    }

    #[test]
    fn test_tap_is_inert_while_browsing() {
        let mut app = new_app();
        assert_eq!(app.selected_count(), 0);

        app.on_tap(5);

        assert_eq!(app.selected_count(), 0);
        assert!(!app.snapshot().items()[5].is_selected);
    }

    #[test]
    fn test_back_not_intercepted_while_browsing() {
        let mut app = new_app();
        assert!(!app.on_back_requested());
    }

    #[test]
    fn test_long_press_deselects_too() {
        let mut app = new_app();
        app.on_long_press(4);
        app.on_long_press(4);
        assert_eq!(app.selected_count(), 0);
    }

    #[test]
    fn test_escape_key_clears_selection_before_quitting() {
        let mut app = new_app();
        app.on_long_press(2);

        app.handle_key_event(KeyEvent::from(KeyCode::Esc)).unwrap();
        assert_eq!(app.selected_count(), 0);
        assert!(!app.should_quit);

        // A second escape with nothing selected dismisses the screen.
        app.handle_key_event(KeyEvent::from(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_space_and_enter_gestures_via_keys() {
        let mut app = new_app();

        // Enter while browsing does nothing.
        app.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap();
        assert_eq!(app.selected_count(), 0);

        // Space long-presses the cursor row.
        app.handle_key_event(KeyEvent::from(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.selected_count(), 1);
        assert!(app.snapshot().items()[0].is_selected);

        // Now Enter taps, toggling the cursor row off again.
        app.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap();
        assert_eq!(app.selected_count(), 0);
    }

    #[test]
    fn test_cursor_movement_stays_in_bounds() {
        let mut app = new_app();
        app.move_cursor_up();
        assert_eq!(app.cursor, 0);

        for _ in 0..25 {
            app.move_cursor_down();
        }
        assert_eq!(app.cursor, 19);
    }

    #[test]
    fn test_cursor_movement_leaves_selection_untouched() {
        let mut app = new_app();
        app.on_long_press(3);

        app.handle_key_event(KeyEvent::from(KeyCode::Down)).unwrap();
        app.handle_key_event(KeyEvent::from(KeyCode::Char('k'))).unwrap();

        assert_eq!(app.selected_count(), 1);
        assert!(app.snapshot().items()[3].is_selected);
    }

    #[test]
    fn test_action_keys_are_noops_by_default() {
        let mut app = new_app();
        app.on_long_press(1);
        let before = app.snapshot().clone();

        app.handle_key_event(KeyEvent::from(KeyCode::Char('d'))).unwrap();
        app.handle_key_event(KeyEvent::from(KeyCode::Char('i'))).unwrap();
        app.handle_key_event(KeyEvent::from(KeyCode::Char('m'))).unwrap();

        assert_eq!(*app.snapshot(), before);
    }

    #[test]
    fn test_installed_delete_handler_fires() {
        let fired = Rc::new(Cell::new(0usize));
        let seen_count = Rc::new(Cell::new(0usize));
        let fired_handle = Rc::clone(&fired);
        let seen_handle = Rc::clone(&seen_count);

        let mut app = App::new(Snapshot::generate(20)).with_delete_handler(Box::new(
            move |snapshot| {
                fired_handle.set(fired_handle.get() + 1);
                seen_handle.set(snapshot.selected_count());
            },
        ));

        app.on_long_press(3);
        app.on_tap(7);
        app.handle_key_event(KeyEvent::from(KeyCode::Char('d'))).unwrap();

        assert_eq!(fired.get(), 1);
        assert_eq!(seen_count.get(), 2);
    }

    #[test]
    fn test_help_mode_swallows_gesture_keys() {
        let mut app = new_app();
        app.handle_key_event(KeyEvent::from(KeyCode::Char('?'))).unwrap();
        assert!(app.help_mode);

        app.handle_key_event(KeyEvent::from(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.selected_count(), 0);

        app.handle_key_event(KeyEvent::from(KeyCode::Esc)).unwrap();
        assert!(!app.help_mode);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_q_quits() {
        let mut app = new_app();
        app.handle_key_event(KeyEvent::from(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_header_counts_track_selection() {
        let mut app = new_app();
        for i in 0..5 {
            app.on_long_press(i);
            assert_eq!(app.header(), Header::Selecting { count: i + 1 });
        }
        assert_eq!(app.header().title(), "5 Selected");

        app.clear_selection();
        assert_eq!(app.header(), Header::Browsing);
    }
}
