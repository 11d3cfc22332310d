//! Loading screen shown while the persisted session is read.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let box_area = centered_rect_fixed(30, 5, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("         Loading...", styles::muted_style())),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), box_area);
}
