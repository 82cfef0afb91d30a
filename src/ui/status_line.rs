use crate::app::{AppMode, AppState, DetailTab};
use crate::store::PaperStore;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let (content, style) = Self::content_and_style(app);
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    fn content_and_style(app: &AppState) -> (String, Style) {
        if let Some(ref msg) = app.message {
            let style = Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD);
            return (msg.clone(), style);
        }

        let content = match &app.mode {
            AppMode::PaperList => format!(
                "paperdesk | {} papers | n: new  ⏎: open  d: delete  t: status  ?: help",
                app.store.papers().len()
            ),
            AppMode::PaperDetail => match app.session.as_ref().map(|s| s.tab) {
                Some(DetailTab::Questions) => {
                    "⇥: tab  j/k: move  a: add  ⏎: edit  d: delete  ␣: fold  s: save paper"
                        .to_string()
                }
                _ => "⇥: tab  esc: back  s: save paper  ?: help".to_string(),
            },
            AppMode::PaperDialog(_) => {
                "⇥: field  ←/→: type  ⏎: create  esc: cancel".to_string()
            }
            AppMode::QuestionDialog(_) => {
                "⇥: field  ←/→: cycle  ^T: correct  ^A/^D: choice  ^U: image  ⏎: save  esc: cancel"
                    .to_string()
            }
            AppMode::Confirm(_) => "y: confirm  n: cancel".to_string(),
            AppMode::Help => "Press ESC or q to close help".to_string(),
        };

        (content, Style::default().fg(Color::Gray).bg(Color::Black))
    }
}
