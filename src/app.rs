//! Application state management for Anteroom.
//!
//! This module contains the core `App` struct that owns the session, the
//! current screen, the login form, and transient UI state such as toasts
//! and overlays. The screen is always derived from session state, so the
//! UI cannot drift away from the authentication flag.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::auth::{Session, StaticCredentials};
use crate::config::Config;
use crate::store::KvStore;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for username input.
/// Usernames are short handles; 50 chars covers them with room to spare.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// How long a toast stays on screen.
/// 4 seconds is enough to read a two-line notification without lingering.
const TOAST_DURATION: Duration = Duration::from_secs(4);

// ============================================================================
// UI State Types
// ============================================================================

/// Top-level screens. Which one is shown is decided by `Screen::for_session`,
/// never set directly by input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Shown until the persisted session has been loaded
    Loading,
    /// Credential entry; the only screen reachable while signed out
    Login,
    /// The protected area; the only screen reachable while signed in
    Dashboard,
}

impl Screen {
    /// Route guard: the screen the user must be on for this session state.
    pub fn for_session(session: &Session) -> Self {
        if session.is_initializing() {
            Screen::Loading
        } else if session.is_authenticated() {
            Screen::Dashboard
        } else {
            Screen::Login
        }
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingModal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginFocus {
    Username,
    Password,
    Button,
}

/// Buttons on the invite modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalButton {
    Cancel,
    Explore,
}

impl ModalButton {
    pub fn toggled(self) -> Self {
        match self {
            ModalButton::Cancel => ModalButton::Explore,
            ModalButton::Explore => ModalButton::Cancel,
        }
    }
}

// ============================================================================
// Toasts
// ============================================================================

/// Toast severity; controls the border color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A transient notification shown top-center until it expires
#[derive(Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    fn new(kind: ToastKind, title: &str, message: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.to_string(),
            shown_at: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    // Composition root: config and session are built once and owned here
    pub config: Config,
    pub session: Session,

    // UI state
    pub state: AppState,
    pub current_screen: Screen,
    pub toast: Option<Toast>,

    // Login form state
    pub login_username: String,
    pub login_password: String,
    pub login_focus: LoginFocus,
    pub show_password: bool,
    pub username_error: Option<String>,
    pub password_error: Option<String>,

    // Modal state
    pub modal_focus: ModalButton,
}

impl App {
    /// Build the app with the on-disk store, the compiled-in credentials,
    /// and the saved configuration.
    pub fn new() -> Self {
        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let data_dir = Config::data_dir().unwrap_or_else(|_| PathBuf::from("./data"));
        let store = KvStore::new(data_dir);
        let session = Session::new(store, Box::new(StaticCredentials::default()));

        Self::from_parts(config, session)
    }

    /// Assemble the app around an existing session. The session decides the
    /// first real screen; until it has initialized that is the loading screen.
    pub fn from_parts(config: Config, session: Session) -> Self {
        let login_username = config.last_username.clone().unwrap_or_default();

        Self {
            config,
            session,
            state: AppState::Normal,
            current_screen: Screen::Loading,
            toast: None,
            login_username,
            login_password: String::new(),
            login_focus: LoginFocus::Username,
            show_password: false,
            username_error: None,
            password_error: None,
            modal_focus: ModalButton::Explore,
        }
    }

    // =========================================================================
    // Session Lifecycle
    // =========================================================================

    pub fn is_initializing(&self) -> bool {
        self.session.is_initializing()
    }

    /// Load the persisted session and route to the first real screen.
    /// The run loop calls this once, after the loading frame has been drawn.
    pub fn finish_initialization(&mut self) {
        self.session.initialize();
        self.sync_route();
    }

    /// Route guard: force the screen to match the session. Any open overlay
    /// is closed on a redirect so a stale modal cannot outlive its screen.
    pub fn sync_route(&mut self) {
        let target = Screen::for_session(&self.session);
        if target == self.current_screen {
            return;
        }

        debug!(from = ?self.current_screen, to = ?target, "Route change");
        self.current_screen = target;
        if self.state != AppState::Quitting {
            self.state = AppState::Normal;
        }

        if target == Screen::Login {
            // Fresh form on arrival, with the remembered username prefilled
            self.login_password.clear();
            self.show_password = false;
            self.username_error = None;
            self.password_error = None;
            self.login_focus = if self.login_username.is_empty() {
                LoginFocus::Username
            } else {
                LoginFocus::Password
            };
        }
    }

    // =========================================================================
    // Login / Logout
    // =========================================================================

    /// Validate the form and attempt to sign in.
    pub fn submit_login(&mut self) {
        self.username_error = validate_required(&self.login_username, "Username");
        self.password_error = validate_required(&self.login_password, "Password");
        if self.username_error.is_some() || self.password_error.is_some() {
            return;
        }

        if self.session.login(&self.login_username, &self.login_password) {
            info!("Login successful");
            self.remember_username();
            self.login_password.clear();
            self.show_toast(
                ToastKind::Success,
                "Success!",
                "Welcome back! Redirecting to dashboard...",
            );
            self.sync_route();
        } else {
            info!("Login rejected");
            self.show_toast(ToastKind::Error, "Login Failed", "Invalid username or password");
        }
    }

    /// Sign out and return to the login screen.
    pub fn logout(&mut self) {
        self.session.logout();
        info!("Logged out");
        self.show_toast(
            ToastKind::Info,
            "Logged Out",
            "You have been successfully logged out",
        );
        self.sync_route();
    }

    fn remember_username(&mut self) {
        if self.config.last_username.as_deref() == Some(self.login_username.as_str()) {
            return;
        }
        self.config.last_username = Some(self.login_username.clone());
        if let Err(e) = self.config.save() {
            warn!(error = %e, "Failed to save config");
        }
    }

    // =========================================================================
    // Transient UI
    // =========================================================================

    pub fn show_toast(&mut self, kind: ToastKind, title: &str, message: &str) {
        self.toast = Some(Toast::new(kind, title, message));
    }

    /// Advance time-based UI state; called on every loop pass.
    pub fn tick(&mut self) {
        if self.toast.as_ref().map(|t| t.is_expired()).unwrap_or(false) {
            self.toast = None;
        }
    }

    pub fn open_modal(&mut self) {
        self.state = AppState::ShowingModal;
        self.modal_focus = ModalButton::Explore;
    }

    pub fn close_modal(&mut self) {
        if self.state == AppState::ShowingModal {
            self.state = AppState::Normal;
        }
    }
}

// ============================================================================
// Input Validation
// ============================================================================

fn is_valid_input_char(c: char) -> bool {
    // Allow printable chars, reject control chars
    !c.is_control()
}

/// Check if a username character should be accepted
pub fn can_add_username_char(current_len: usize, c: char) -> bool {
    current_len < MAX_USERNAME_LENGTH && is_valid_input_char(c)
}

/// Check if a password character should be accepted
pub fn can_add_password_char(current_len: usize, c: char) -> bool {
    current_len < MAX_PASSWORD_LENGTH && is_valid_input_char(c)
}

/// Required-field check for the login form.
/// Returns the message to show under the field, or None when it passes.
pub fn validate_required(value: &str, field: &str) -> Option<String> {
    if value.is_empty() {
        Some(format!("{} is required", field))
    } else {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================
