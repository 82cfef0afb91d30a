mod help;
mod paper_detail;
mod paper_dialog;
mod paper_list;
mod question_dialog;
mod status_line;
pub mod text;

use crate::app::{AppMode, AppState, ConfirmAction};
use crate::store::PaperStore;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub use help::HelpRenderer;
pub use status_line::StatusLineRenderer;

pub fn render(frame: &mut Frame, app: &AppState) {
    let chunks =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
    let body = chunks[0];

    // Base screen: the detail view whenever a session is open, else the list.
    if app.session.is_some() {
        paper_detail::render(frame, app, body);
    } else {
        paper_list::render(frame, app, body);
    }

    // Overlays drawn on top of the base screen.
    match &app.mode {
        AppMode::PaperDialog(dialog) => paper_dialog::render(frame, app, dialog, body),
        AppMode::QuestionDialog(dialog) => question_dialog::render(frame, app, dialog, body),
        AppMode::Confirm(pending) => render_confirm(frame, app, *pending, body),
        AppMode::Help => HelpRenderer::render(frame, body),
        AppMode::PaperList | AppMode::PaperDetail => {}
    }

    StatusLineRenderer::render(frame, app, chunks[1]);
}

/// Color used for selection and focus highlights, from config.
pub fn accent(app: &AppState) -> Color {
    match app.config.accent_color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        _ => Color::Cyan,
    }
}

/// Centers a `percent_x` by `percent_y` box inside `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}

fn render_confirm(frame: &mut Frame, app: &AppState, pending: ConfirmAction, area: Rect) {
    let prompt = match pending {
        ConfirmAction::DeletePaper { index } => {
            let name = app
                .store
                .papers()
                .get(index)
                .map(|p| p.name.as_str())
                .unwrap_or("?");
            format!("Delete paper {:?}?", name)
        }
        ConfirmAction::DeleteQuestion { category_index, .. } => {
            let name = app
                .session
                .as_ref()
                .and_then(|s| s.categories.get(category_index))
                .map(|c| c.name.as_str())
                .unwrap_or("?");
            format!("Delete this question from {}?", name)
        }
    };

    let rect = centered_rect(50, 20, area);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(" Confirm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent(app)));
    let body = Paragraph::new(vec![
        Line::from(prompt),
        Line::from(""),
        Line::from("y: delete    n: keep").style(Style::default().add_modifier(Modifier::DIM)),
    ])
    .block(block);
    frame.render_widget(body, rect);
}
