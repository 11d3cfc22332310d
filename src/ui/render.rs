use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState, ModalButton, Screen, Toast, ToastKind};

use super::screens::{dashboard, loading, login};
use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_main_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    // Render overlays
    if matches!(app.state, AppState::ShowingModal) {
        render_modal_overlay(frame, app);
    }

    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }

    // Toasts sit above everything, overlays included
    if let Some(ref toast) = app.toast {
        render_toast(frame, toast);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  Anteroom";
    let hint = match app.current_screen {
        Screen::Loading => "",
        Screen::Login => "[Esc] Quit",
        Screen::Dashboard => "[?] Help",
    };

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title.len() as u16 + hint.len() as u16 + 4)
                as usize,
        )),
        Span::styled(hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.current_screen {
        Screen::Loading => loading::render(frame, app, area),
        Screen::Login => login::render(frame, app, area),
        Screen::Dashboard => dashboard::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.session.is_initializing() {
        " Loading... "
    } else if app.session.is_authenticated() {
        " Signed in "
    } else {
        " Signed out "
    };

    let shortcuts = match app.current_screen {
        Screen::Loading => "",
        Screen::Login => "[Tab] Next field | [Enter] Submit | [F2] Show/hide password",
        Screen::Dashboard => "[m] Invite modal | [l] Logout | [?] Help | [q] Quit",
    };
    let right_text = format!(" {} ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.len())
        .saturating_sub(right_text.len());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn render_modal_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 11, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let cancel_focused = app.modal_focus == ModalButton::Cancel;
    let cancel_style = if cancel_focused {
        styles::selected_style()
    } else {
        styles::text_style()
    };
    let explore_style = if cancel_focused {
        styles::text_style()
    } else {
        styles::selected_style()
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Elevate user interactions with our versatile",
            styles::help_desc_style(),
        )),
        Line::from(Span::styled(
            "  modals. Seamlessly integrate notifications,",
            styles::help_desc_style(),
        )),
        Line::from(Span::styled(
            "  forms, and media displays. Make an impact",
            styles::help_desc_style(),
        )),
        Line::from(Span::styled("  effortlessly.", styles::help_desc_style())),
        Line::from(""),
        Line::from(vec![
            Span::raw("         ["),
            Span::styled(
                if cancel_focused { " ▶ Cancel ◀ " } else { "   Cancel   " },
                cancel_style,
            ),
            Span::raw("]  ["),
            Span::styled(
                if cancel_focused { "   Explore   " } else { " ▶ Explore ◀ " },
                explore_style,
            ),
            Span::raw("]"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("   "),
            Span::styled("Tab", styles::help_key_style()),
            Span::styled(" to switch, ", styles::muted_style()),
            Span::styled("Enter", styles::help_key_style()),
            Span::styled(" to choose, ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .title(" Invite your team ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame, _app: &App) {
    // Fixed size dialog matching the quit overlay
    let area = centered_rect_fixed(52, 23, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        // ASCII Art Logo (centered for 52-width box, 50 interior)
        Line::from(Span::styled(
            "             ╔═╗╔╗╔╔╦╗╔═╗╦═╗╔═╗╔═╗╔╦╗",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "             ╠═╣║║║ ║ ║╣ ╠╦╝║ ║║ ║║║║",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "             ╩ ╩╝╚╝ ╩ ╚═╝╩╚═╚═╝╚═╝╩ ╩",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            format!("                  version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Login Screen", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  Tab, ↓    ", styles::help_key_style()),
            Span::styled("Next field", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  S-Tab, ↑  ", styles::help_key_style()),
            Span::styled("Previous field", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", styles::help_key_style()),
            Span::styled("Next field / sign in", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  F2        ", styles::help_key_style()),
            Span::styled("Show or hide the password", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", styles::help_key_style()),
            Span::styled("Quit from the login screen", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Dashboard", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  m         ", styles::help_key_style()),
            Span::styled("Open the invite modal", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  l         ", styles::help_key_style()),
            Span::styled("Log out", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  q         ", styles::help_key_style()),
            Span::styled("Quit (asks first)", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Anywhere", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  Ctrl+C    ", styles::help_key_style()),
            Span::styled("Quit immediately", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(help_text).block(block);

    frame.render_widget(paragraph, area);
}

fn render_quit_overlay(frame: &mut Frame) {
    // Fixed size dialog matching the login card
    let area = centered_rect_fixed(46, 10, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "          ╔═╗╔╗╔╔╦╗╔═╗╦═╗╔═╗╔═╗╔╦╗",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "          ╠═╣║║║ ║ ║╣ ╠╦╝║ ║║ ║║║║",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "          ╩ ╩╝╚╝ ╩ ╚═╝╩╚═╚═╝╚═╝╩ ╩",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "       Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("      Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

fn render_toast(frame: &mut Frame, toast: &Toast) {
    let frame_area = frame.area();

    // Wide enough for both lines, clamped to the terminal
    let width = (toast.title.len().max(toast.message.len()) as u16 + 4)
        .clamp(24, frame_area.width.max(24));
    let mut area = centered_rect_fixed(width, 4, frame_area);
    area.y = frame_area.y + 1;
    area.height = area.height.min(frame_area.height.saturating_sub(1));

    frame.render_widget(Clear, area);

    let accent = match toast.kind {
        ToastKind::Success => styles::success_style(),
        ToastKind::Error => styles::error_style(),
        ToastKind::Info => styles::info_style(),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", toast.title),
            accent.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", toast.message),
            styles::help_desc_style(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(accent)
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Create a centered rectangle with fixed dimensions
pub(crate) fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
