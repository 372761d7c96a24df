//! Key bindings for the viewer.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NavigateUp,
    NavigateDown,
    NextPanel,
    PrevPanel,
    CycleTheme,
    TogglePause,
    /// Apply one event while paused.
    Step,
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    pub fn resolve(&self, key: KeyEvent) -> Option<Action> {
        self.global.get(&key).copied()
    }

    /// Bind `key`, replacing any earlier binding.
    pub fn bind(&mut self, key: KeyEvent, action: Action) {
        self.global.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut global = HashMap::new();

        // vim style
        global.insert(key('j'), Action::NavigateDown);
        global.insert(key('k'), Action::NavigateUp);
        global.insert(key_code(KeyCode::Down), Action::NavigateDown);
        global.insert(key_code(KeyCode::Up), Action::NavigateUp);

        global.insert(key_code(KeyCode::Tab), Action::NextPanel);
        global.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::PrevPanel,
        );

        global.insert(key('t'), Action::CycleTheme);
        global.insert(key(' '), Action::TogglePause);
        global.insert(key('n'), Action::Step);
        global.insert(key('q'), Action::Quit);
        global.insert(key_code(KeyCode::Esc), Action::Quit);

        Self { global }
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
