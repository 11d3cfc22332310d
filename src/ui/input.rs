//! Keyboard input handling
//!
//! Translates key events into state changes on [`App`]. Overlay states
//! (modal, help, quit confirmation) capture input before the current
//! screen sees it. Returns `Ok(true)` when the app should exit.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{can_add_password_char, can_add_username_char, App, AppState, LoginFocus, Screen};

/// Handle a key event, returning whether the app should quit
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle the invite modal
    if matches!(app.state, AppState::ShowingModal) {
        handle_modal_input(app, key);
        return Ok(false);
    }

    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    match app.current_screen {
        // The loading screen ignores everything; the run loop finishes
        // initialization before the next event is read anyway.
        Screen::Loading => Ok(false),
        Screen::Login => handle_login_input(app, key),
        Screen::Dashboard => handle_dashboard_input(app, key),
    }
}

fn handle_login_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            // Nothing to go back to from the gate
            app.state = AppState::Quitting;
            return Ok(true);
        }
        KeyCode::Down | KeyCode::Tab => {
            // Move to next field
            app.login_focus = match app.login_focus {
                LoginFocus::Username => LoginFocus::Password,
                LoginFocus::Password => LoginFocus::Button,
                LoginFocus::Button => LoginFocus::Username,
            };
        }
        KeyCode::Up | KeyCode::BackTab => {
            // Move to previous field
            app.login_focus = match app.login_focus {
                LoginFocus::Username => LoginFocus::Button,
                LoginFocus::Password => LoginFocus::Username,
                LoginFocus::Button => LoginFocus::Password,
            };
        }
        KeyCode::F(2) => {
            app.show_password = !app.show_password;
        }
        KeyCode::Enter => match app.login_focus {
            LoginFocus::Username => app.login_focus = LoginFocus::Password,
            LoginFocus::Password => app.login_focus = LoginFocus::Button,
            LoginFocus::Button => app.submit_login(),
        },
        KeyCode::Backspace => match app.login_focus {
            LoginFocus::Username => {
                app.login_username.pop();
                app.username_error = None;
            }
            LoginFocus::Password => {
                app.login_password.pop();
                app.password_error = None;
            }
            LoginFocus::Button => {}
        },
        KeyCode::Char(c) => match app.login_focus {
            LoginFocus::Username => {
                if can_add_username_char(app.login_username.chars().count(), c) {
                    app.login_username.push(c);
                    app.username_error = None;
                }
            }
            LoginFocus::Password => {
                if can_add_password_char(app.login_password.chars().count(), c) {
                    app.login_password.push(c);
                    app.password_error = None;
                }
            }
            LoginFocus::Button => {}
        },
        _ => {}
    }

    Ok(false)
}

fn handle_dashboard_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char('m') => {
            app.open_modal();
        }
        KeyCode::Char('l') => {
            app.logout();
        }
        _ => {}
    }

    Ok(false)
}

fn handle_modal_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_modal(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            app.modal_focus = app.modal_focus.toggled();
        }
        // Neither button leads anywhere yet, so choosing simply dismisses
        KeyCode::Enter => app.close_modal(),
        _ => {}
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ModalButton, ToastKind, MAX_USERNAME_LENGTH};
    use crate::auth::{Session, StaticCredentials};
    use crate::config::Config;
    use crate::store::KvStore;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// App past initialization, sitting on the login screen
    fn ready_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let store = KvStore::new(dir.path().to_path_buf());
        let session = Session::new(store, Box::new(StaticCredentials::new("tester", "hunter2")));
        let config = Config {
            last_username: Some("tester".to_string()),
        };
        let mut app = App::from_parts(config, session);
        app.finish_initialization();
        (dir, app)
    }

    /// App signed in and sitting on the dashboard
    fn signed_in_app() -> (TempDir, App) {
        let (dir, mut app) = ready_app();
        app.login_password = "hunter2".to_string();
        app.login_focus = LoginFocus::Button;
        handle_input(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.current_screen, Screen::Dashboard);
        (dir, app)
    }

    // --- Login screen ---

    #[test]
    fn test_loading_screen_swallows_input() {
        let dir = TempDir::new().unwrap();
        let store = KvStore::new(dir.path().to_path_buf());
        let session = Session::new(store, Box::new(StaticCredentials::new("tester", "hunter2")));
        let mut app = App::from_parts(Config::default(), session);
        assert_eq!(app.current_screen, Screen::Loading);

        let quit = handle_input(&mut app, key(KeyCode::Char('x'))).unwrap();

        assert!(!quit);
        assert!(app.login_username.is_empty());
        assert_eq!(app.state, AppState::Normal);
    }

    #[test]
    fn test_esc_quits_from_login() {
        let (_dir, mut app) = ready_app();

        let quit = handle_input(&mut app, key(KeyCode::Esc)).unwrap();

        assert!(quit);
        assert_eq!(app.state, AppState::Quitting);
    }

    #[test]
    fn test_tab_cycles_login_focus() {
        let (_dir, mut app) = ready_app();
        app.login_focus = LoginFocus::Username;

        handle_input(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.login_focus, LoginFocus::Password);
        handle_input(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.login_focus, LoginFocus::Button);
        handle_input(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.login_focus, LoginFocus::Username);

        handle_input(&mut app, key(KeyCode::BackTab)).unwrap();
        assert_eq!(app.login_focus, LoginFocus::Button);
    }

    #[test]
    fn test_typing_appends_and_clears_error() {
        let (_dir, mut app) = ready_app();
        app.login_username.clear();
        app.login_focus = LoginFocus::Username;
        app.username_error = Some("Username is required".to_string());

        handle_input(&mut app, key(KeyCode::Char('a'))).unwrap();

        assert_eq!(app.login_username, "a");
        assert!(app.username_error.is_none());
    }

    #[test]
    fn test_typing_respects_username_limit() {
        let (_dir, mut app) = ready_app();
        app.login_username = "x".repeat(MAX_USERNAME_LENGTH);
        app.login_focus = LoginFocus::Username;

        handle_input(&mut app, key(KeyCode::Char('y'))).unwrap();

        assert_eq!(app.login_username.chars().count(), MAX_USERNAME_LENGTH);
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let (_dir, mut app) = ready_app();
        app.login_focus = LoginFocus::Password;
        app.login_password = "abc".to_string();
        app.password_error = Some("Password is required".to_string());

        handle_input(&mut app, key(KeyCode::Backspace)).unwrap();

        assert_eq!(app.login_password, "ab");
        assert!(app.password_error.is_none());
    }

    #[test]
    fn test_f2_toggles_password_visibility() {
        let (_dir, mut app) = ready_app();
        assert!(!app.show_password);

        handle_input(&mut app, key(KeyCode::F(2))).unwrap();
        assert!(app.show_password);
        handle_input(&mut app, key(KeyCode::F(2))).unwrap();
        assert!(!app.show_password);
    }

    #[test]
    fn test_enter_advances_then_submits() {
        let (_dir, mut app) = ready_app();
        app.login_focus = LoginFocus::Username;
        app.login_password = "hunter2".to_string();

        handle_input(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.login_focus, LoginFocus::Password);
        handle_input(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.login_focus, LoginFocus::Button);
        handle_input(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(app.session.is_authenticated());
        assert_eq!(app.current_screen, Screen::Dashboard);
    }

    // --- Dashboard ---

    #[test]
    fn test_logout_key_returns_to_login() {
        let (_dir, mut app) = signed_in_app();

        handle_input(&mut app, key(KeyCode::Char('l'))).unwrap();

        assert!(!app.session.is_authenticated());
        assert_eq!(app.current_screen, Screen::Login);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Info);
    }

    #[test]
    fn test_dashboard_opens_modal_and_help() {
        let (_dir, mut app) = signed_in_app();

        handle_input(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert_eq!(app.state, AppState::ShowingModal);
        app.close_modal();

        handle_input(&mut app, key(KeyCode::Char('?'))).unwrap();
        assert_eq!(app.state, AppState::ShowingHelp);
        handle_input(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.state, AppState::Normal);

        // '?' toggles the overlay closed again
        handle_input(&mut app, key(KeyCode::Char('?'))).unwrap();
        handle_input(&mut app, key(KeyCode::Char('?'))).unwrap();
        assert_eq!(app.state, AppState::Normal);

        // 'q' inside the overlay closes it instead of asking to quit
        handle_input(&mut app, key(KeyCode::Char('?'))).unwrap();
        let quit = handle_input(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!quit);
        assert_eq!(app.state, AppState::Normal);
    }

    #[test]
    fn test_quit_confirmation_flow() {
        let (_dir, mut app) = signed_in_app();

        handle_input(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert_eq!(app.state, AppState::ConfirmingQuit);

        let quit = handle_input(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert!(!quit);
        assert_eq!(app.state, AppState::Normal);

        handle_input(&mut app, key(KeyCode::Char('q'))).unwrap();
        let quit = handle_input(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert!(quit);
        assert_eq!(app.state, AppState::Quitting);
    }

    // --- Modal ---

    #[test]
    fn test_modal_tab_toggles_buttons() {
        let (_dir, mut app) = signed_in_app();
        app.open_modal();
        assert_eq!(app.modal_focus, ModalButton::Explore);

        handle_input(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.modal_focus, ModalButton::Cancel);
        handle_input(&mut app, key(KeyCode::Left)).unwrap();
        assert_eq!(app.modal_focus, ModalButton::Explore);
    }

    #[test]
    fn test_modal_esc_and_enter_both_dismiss() {
        let (_dir, mut app) = signed_in_app();

        app.open_modal();
        handle_input(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.state, AppState::Normal);

        app.open_modal();
        handle_input(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state, AppState::Normal);
    }

    #[test]
    fn test_modal_blocks_dashboard_keys() {
        let (_dir, mut app) = signed_in_app();
        app.open_modal();

        // 'l' would log out on the dashboard; the modal swallows it
        handle_input(&mut app, key(KeyCode::Char('l'))).unwrap();

        assert!(app.session.is_authenticated());
        assert_eq!(app.state, AppState::ShowingModal);
    }
}
