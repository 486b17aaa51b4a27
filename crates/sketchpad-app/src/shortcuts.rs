//! Keyboard shortcut registry.

use crate::ui::UiAction;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub action: UiAction,
    pub description: &'static str,
}

impl Shortcut {
    pub fn new(key: &'static str, ctrl: bool, shift: bool, action: UiAction, description: &'static str) -> Self {
        Self {
            key,
            ctrl,
            shift,
            action,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    fn matches(&self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.key.eq_ignore_ascii_case(key) && self.ctrl == ctrl && self.shift == shift
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, false, UiAction::Undo, "Undo"),
            Shortcut::new("Z", true, true, UiAction::Redo, "Redo"),
            Shortcut::new("Y", true, false, UiAction::Redo, "Redo"),
            Shortcut::new("E", true, false, UiAction::Export, "Export to PNG"),
        ]
    }

    /// Find the action bound to a key press. `ctrl` should also be set for
    /// the Command key on macOS.
    pub fn resolve(key: &str, ctrl: bool, shift: bool) -> Option<UiAction> {
        Self::all()
            .into_iter()
            .find(|s| s.matches(key, ctrl, shift))
            .map(|s| s.action)
    }

    /// Log all shortcuts.
    pub fn log_all() {
        for shortcut in Self::all() {
            log::info!("{:12} {}", shortcut.format(), shortcut.description);
        }
    }
}
