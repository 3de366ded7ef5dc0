//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change with the kind of screen
//! the wizard is showing.

use crate::app::ScreenKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    /// Pick the option with this 1-based number
    Choose(usize),
    Select,
    Toggle,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Back,
    Restart,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, event: &KeyEvent) -> bool {
        // Shift is implied by the character itself ('?' on most layouts)
        let mut modifiers = event.modifiers;
        modifiers.remove(KeyModifiers::SHIFT);
        self.key == event.code && self.modifiers == modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Screen-specific keybindings
    screen_bindings: HashMap<ScreenKind, Vec<Keybinding>>,
    /// Global keybindings (available on every screen)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            screen_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all screens
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let mut choice = vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
            Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Navigate up"),
            Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Navigate down"),
            Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Answer"),
            Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
        ];
        for n in 1..=4 {
            let digit = char::from_digit(n as u32, 10).unwrap_or('1');
            choice.push(Keybinding::new(
                KeyCode::Char(digit),
                KeyAction::Choose(n),
                &digit.to_string(),
                "Pick option directly",
            ));
        }
        self.screen_bindings.insert(ScreenKind::Choice, choice);

        self.screen_bindings.insert(
            ScreenKind::Checklist,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Navigate up"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Navigate down"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Toggle"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Confirm"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
            ],
        );

        self.screen_bindings.insert(
            ScreenKind::Result,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::ScrollUp, "K", "Scroll up"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::ScrollDown, "J", "Scroll down"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::Restart, "R", "Start over"),
            ],
        );
    }

    /// Get keybindings for a screen (includes global bindings)
    pub fn get_bindings(&self, screen: ScreenKind) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(screen_bindings) = self.screen_bindings.get(&screen) {
            bindings.extend(screen_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action on the given screen
    pub fn resolve(&self, screen: ScreenKind, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(screen)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, screen: ScreenKind) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(screen);

        let priority_actions = match screen {
            ScreenKind::Choice => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            ScreenKind::Checklist => vec![
                KeyAction::NavigateUp,
                KeyAction::Toggle,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            ScreenKind::Result => vec![
                KeyAction::ScrollUp,
                KeyAction::Restart,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            // Up/Down pairs are shown as one combined item
            match action {
                KeyAction::NavigateUp => items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Navigate".to_string(),
                }),
                KeyAction::ScrollUp => items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Scroll".to_string(),
                }),
                _ => {
                    if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                        items.push(NavBarItem {
                            key_display: binding.display.clone(),
                            action_label: binding.description.clone(),
                        });
                    }
                }
            }
        }

        items
    }

    /// Get full help content for a screen (for help overlay)
    pub fn get_help_content(&self, screen: ScreenKind) -> Vec<HelpSection> {
        let groups: [(&str, fn(&KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::ScrollUp
                        | KeyAction::ScrollDown
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                )
            }),
            ("Answers", |a| {
                matches!(
                    a,
                    KeyAction::Select
                        | KeyAction::Toggle
                        | KeyAction::Choose(_)
                        | KeyAction::Restart
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::Back | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(screen);
        let mut sections = Vec::new();
        for (title, belongs) in groups {
            let mut items: Vec<(String, String)> = Vec::new();
            for binding in bindings.iter().filter(|b| belongs(&b.action)) {
                // Digit keys collapse into a single "1-4" row
                if let KeyAction::Choose(n) = binding.action {
                    if n == 1 {
                        items.push(("1-4".to_string(), binding.description.clone()));
                    }
                    continue;
                }
                items.push((binding.display.clone(), binding.description.clone()));
            }
            if !items.is_empty() {
                sections.push(HelpSection {
                    title: title.to_string(),
                    items,
                });
            }
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_resolve_screen_specific_keys() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(ScreenKind::Checklist, &key(KeyCode::Char(' '))),
            Some(KeyAction::Toggle)
        );
        assert_eq!(ctx.resolve(ScreenKind::Choice, &key(KeyCode::Char(' '))), None);
        assert_eq!(
            ctx.resolve(ScreenKind::Result, &key(KeyCode::Char('r'))),
            Some(KeyAction::Restart)
        );
        assert_eq!(
            ctx.resolve(ScreenKind::Choice, &key(KeyCode::Char('3'))),
            Some(KeyAction::Choose(3))
        );
    }

    #[test]
    fn test_back_not_bound_on_result() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(ScreenKind::Result, &key(KeyCode::Char('b'))), None);
    }

    #[test]
    fn test_global_bindings_everywhere() {
        let ctx = KeybindingContext::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        for screen in [ScreenKind::Choice, ScreenKind::Checklist, ScreenKind::Result] {
            assert_eq!(ctx.resolve(screen, &ctrl_c), Some(KeyAction::Quit));
            assert_eq!(ctx.resolve(screen, &question), Some(KeyAction::Help));
        }
    }

    #[test]
    fn test_nav_items_combine_up_down() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(ScreenKind::Choice);
        assert_eq!(items[0].key_display, "Up/Dn");
        assert!(items.iter().any(|i| i.action_label == "Answer"));
    }

    #[test]
    fn test_help_collapses_digit_keys() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(ScreenKind::Choice);
        let answers = sections.iter().find(|s| s.title == "Answers").unwrap();
        assert_eq!(answers.items.iter().filter(|(k, _)| k == "1-4").count(), 1);
        assert!(!answers.items.iter().any(|(k, _)| k == "2"));
    }
}
