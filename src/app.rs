use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

use crate::config::AppConfig;
use crate::money::format_currency;
use crate::notification::{send_desktop, Notification, NotificationStack, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
    ConfirmQuit,
}

pub struct App {
    pub popup: Popup,

    // Sale entry (main section)
    pub amount_input: String,

    // Live notifications (top-right stack, auto-expire)
    pub notifications: NotificationStack,

    // Config
    pub config: AppConfig,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            popup: Popup::None,
            amount_input: String::new(),
            notifications: NotificationStack::default(),
            config,
            should_quit: false,
        }
    }

    /// Push a notification, mirroring it to the desktop when configured
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let notification = Notification::new(message, severity);
        if self.config.desktop_notifications {
            if let Err(e) = send_desktop(&notification.message, severity) {
                tracing::warn!("Desktop notification failed: {}", e);
            }
        }
        self.notifications.push(notification);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle popups first
        if self.popup != Popup::None {
            return self.handle_popup_key(key);
        }

        self.handle_normal_key(key)
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.request_quit(),

            // Help
            KeyCode::Char('?') => self.popup = Popup::Help,

            // Sale entry
            KeyCode::Enter => self.submit_amount(),
            KeyCode::Backspace => {
                self.amount_input.pop();
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.amount_input.push(c);
            }

            _ => {}
        }
        Ok(())
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.popup {
            Popup::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q')
                ) {
                    self.popup = Popup::None;
                }
            }
            Popup::ConfirmQuit => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.popup = Popup::None;
                    self.should_quit = true;
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.popup = Popup::None;
                }
                _ => {}
            },
            Popup::None => {}
        }
        Ok(())
    }

    /// Format the entered amount and announce the total.
    ///
    /// Formatting fails open: non-numeric input still produces a rendered
    /// `$NaN` total, flagged as a warning instead of an error.
    fn submit_amount(&mut self) {
        if self.amount_input.is_empty() {
            // A hint, not an event; stays on screen only
            self.notifications.push(Notification::info("Enter an amount first"));
            return;
        }

        let formatted = format_currency(self.amount_input.as_str());
        let severity = if formatted.contains("NaN") {
            Severity::Warning
        } else {
            Severity::Success
        };
        self.notify(format!("Sale total: {}", formatted), severity);
        self.amount_input.clear();
    }

    fn request_quit(&mut self) {
        if self.config.confirm_on_quit {
            self.popup = Popup::ConfirmQuit;
        } else {
            self.should_quit = true;
        }
    }

    /// Periodic housekeeping, run every event-loop iteration
    pub fn tick(&mut self) {
        self.notifications.sweep(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn app() -> App {
        App::new(AppConfig::default())
    }

    #[test]
    fn test_typing_builds_amount_input() {
        let mut app = app();
        for c in "19.999".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.amount_input, "19.999");

        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.amount_input, "19.99");
    }

    #[test]
    fn test_submit_formats_and_notifies() {
        let mut app = app();
        app.amount_input = "19.999".to_string();
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(app.notifications.len(), 1);
        let n = app.notifications.iter().next().unwrap();
        assert_eq!(n.message, "Sale total: $20.00");
        assert_eq!(n.severity, Severity::Success);
        assert!(app.amount_input.is_empty());
    }

    #[test]
    fn test_submit_fails_open_on_bad_input() {
        let mut app = app();
        app.amount_input = "abc".to_string();
        app.handle_key(key(KeyCode::Enter)).unwrap();

        let n = app.notifications.iter().next().unwrap();
        assert_eq!(n.message, "Sale total: $NaN");
        assert_eq!(n.severity, Severity::Warning);
    }

    #[test]
    fn test_quit_asks_for_confirmation() {
        let mut app = app();
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.popup, Popup::ConfirmQuit);
        assert!(!app.should_quit);

        // 'n' keeps the app running
        app.handle_key(key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.popup, Popup::None);
        assert!(!app.should_quit);

        // 'y' quits
        app.handle_key(key(KeyCode::Esc)).unwrap();
        app.handle_key(key(KeyCode::Char('y'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_without_confirmation_when_disabled() {
        let mut app = App::new(AppConfig {
            confirm_on_quit: false,
            ..AppConfig::default()
        });
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.popup, Popup::None);
        assert!(app.should_quit);
    }

    #[test]
    fn test_popup_swallows_other_keys() {
        let mut app = app();
        app.popup = Popup::ConfirmQuit;
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.popup, Popup::ConfirmQuit);
        assert!(app.amount_input.is_empty());
    }
}
