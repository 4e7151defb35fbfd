use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Esc => NormalModeAction::Back,
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveCursorUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveCursorDown,
            KeyCode::Char(' ') => NormalModeAction::LongPress,
            KeyCode::Enter => NormalModeAction::Tap,
            KeyCode::Char('d') => NormalModeAction::RequestDelete,
            KeyCode::Char('i') => NormalModeAction::RequestInfo,
            KeyCode::Char('m') => NormalModeAction::RequestMore,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    Back,
    MoveCursorUp,
    MoveCursorDown,
    /// The sustained-contact gesture on the cursor row; always toggles.
    LongPress,
    /// The short-press gesture on the cursor row; toggles only while a
    /// selection is active.
    Tap,
    RequestDelete,
    RequestInfo,
    RequestMore,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}
