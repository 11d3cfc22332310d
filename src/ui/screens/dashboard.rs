//! Dashboard screen: the protected area behind the login gate.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::auth::{DEMO_PASSWORD, DEMO_USERNAME};
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Welcome Back!", styles::highlight_style())),
        Line::from(""),
        Line::from(Span::styled(
            "  You have successfully logged in with the",
            styles::text_style(),
        )),
        Line::from(Span::styled("  credentials:", styles::text_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Username: ", styles::muted_style()),
            Span::styled(DEMO_USERNAME, styles::text_style()),
        ]),
        Line::from(vec![
            Span::styled("  Password: ", styles::muted_style()),
            Span::styled(DEMO_PASSWORD, styles::text_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  This is your protected dashboard area. You",
            styles::muted_style(),
        )),
        Line::from(Span::styled(
            "  can only see this page after successful",
            styles::muted_style(),
        )),
        Line::from(Span::styled("  authentication.", styles::muted_style())),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("[l]", styles::help_key_style()),
            Span::styled(" Logout", styles::help_desc_style()),
            Span::raw("    "),
            Span::styled("[m]", styles::help_key_style()),
            Span::styled(" Invite your team", styles::help_desc_style()),
        ]),
    ];

    let height = lines.len() as u16 + 2;
    let box_area = centered_rect_fixed(50, height, area);

    let block = Block::default()
        .title(" Dashboard ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), box_area);
}
