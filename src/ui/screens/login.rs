//! Login screen: credential entry with inline validation.
//!
//! The form mirrors the session contract: both fields are required, the
//! password is masked until toggled with F2, and the demo account is shown
//! at the bottom so the gate is usable without reading any docs.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoginFocus};
use crate::auth::{DEMO_PASSWORD, DEMO_USERNAME};
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

/// Visible width of the text fields; longer input scrolls within the window
const FIELD_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![];

    // ASCII Art Logo (centered for 46-width box, 44 interior)
    lines.push(Line::from(Span::styled(
        "          ╔═╗╔╗╔╔╦╗╔═╗╦═╗╔═╗╔═╗╔╦╗",
        styles::title_style(),
    )));
    lines.push(Line::from(Span::styled(
        "          ╠═╣║║║ ║ ║╣ ╠╦╝║ ║║ ║║║║",
        styles::title_style(),
    )));
    lines.push(Line::from(Span::styled(
        "          ╩ ╩╝╚╝ ╩ ╚═╝╩╚═╚═╝╚═╝╩ ╩",
        styles::title_style(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "                Welcome Back",
        styles::highlight_style(),
    )));
    lines.push(Line::from(Span::styled(
        "          Sign in to your account",
        styles::muted_style(),
    )));
    lines.push(Line::from(""));

    // Username field
    let username_focused = app.login_focus == LoginFocus::Username;
    let username_style = if username_focused {
        styles::selected_style()
    } else {
        styles::text_style()
    };
    let username_display = format!(
        "{:<width$}",
        field_window(&app.login_username, FIELD_WIDTH),
        width = FIELD_WIDTH
    );
    let cursor = if username_focused { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::raw("      "),
        Span::styled("Username: [", styles::muted_style()),
        Span::styled(format!("{}{}", username_display, cursor), username_style),
        Span::styled("]", styles::muted_style()),
    ]));
    if let Some(ref error) = app.username_error {
        lines.push(Line::from(Span::styled(
            format!("                 {}", error),
            styles::error_style(),
        )));
    }

    // Password field, masked unless visibility is toggled on
    let password_focused = app.login_focus == LoginFocus::Password;
    let password_style = if password_focused {
        styles::selected_style()
    } else {
        styles::text_style()
    };
    let password_shown = if app.show_password {
        field_window(&app.login_password, FIELD_WIDTH)
    } else {
        "*".repeat(app.login_password.chars().count().min(FIELD_WIDTH))
    };
    let password_display = format!("{:<width$}", password_shown, width = FIELD_WIDTH);
    let cursor = if password_focused { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::raw("      "),
        Span::styled("Password: [", styles::muted_style()),
        Span::styled(format!("{}{}", password_display, cursor), password_style),
        Span::styled("]", styles::muted_style()),
    ]));
    if let Some(ref error) = app.password_error {
        lines.push(Line::from(Span::styled(
            format!("                 {}", error),
            styles::error_style(),
        )));
    }

    // Sign In button
    let button_focused = app.login_focus == LoginFocus::Button;
    let button_style = if button_focused {
        styles::selected_style()
    } else {
        styles::text_style()
    };
    lines.push(Line::from(""));
    if button_focused {
        lines.push(Line::from(vec![
            Span::raw("              ["),
            Span::styled(" ▶ Sign In ◀ ", button_style),
            Span::raw("]"),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("              ["),
            Span::styled("   Sign In   ", button_style),
            Span::raw("]"),
        ]));
    }

    // Demo account hint
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("   Demo credentials: ", styles::muted_style()),
        Span::styled(
            format!("{} / {}", DEMO_USERNAME, DEMO_PASSWORD),
            styles::highlight_style(),
        ),
    ]));

    let height = lines.len() as u16 + 2;
    let box_area = centered_rect_fixed(46, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), box_area);
}

/// Tail of `value` that fits the field, so the end being edited stays visible
fn field_window(value: &str, width: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let start = chars.len().saturating_sub(width);
    chars[start..].iter().collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_window_short_value_unchanged() {
        assert_eq!(field_window("abc", 16), "abc");
        assert_eq!(field_window("", 16), "");
    }

    #[test]
    fn test_field_window_long_value_shows_tail() {
        assert_eq!(field_window("abcdefghij", 4), "ghij");
    }

    #[test]
    fn test_field_window_counts_chars_not_bytes() {
        assert_eq!(field_window("päässä", 3), "ssä");
    }
}
