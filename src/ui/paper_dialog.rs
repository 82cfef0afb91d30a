use crate::app::{AppState, PaperDialog, PaperField};
use crate::store::MAX_PAPER_DESCRIPTION_LEN;
use crate::ui::{accent, centered_rect, text};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CURSOR_INDICATOR: char = '▏';

pub fn render(frame: &mut Frame, app: &AppState, dialog: &PaperDialog, area: Rect) {
    let rect = centered_rect(50, 40, area);
    frame.render_widget(Clear, rect);

    let focus_style = Style::default()
        .fg(accent(app))
        .add_modifier(Modifier::BOLD);
    let width = rect.width.saturating_sub(18) as usize;

    let text_value = |value: &str, focused: bool| {
        let mut shown = text::truncate(value, width);
        if focused {
            shown.push(CURSOR_INDICATOR);
        }
        shown
    };

    let form = &dialog.form;
    let mut lines: Vec<Line> = Vec::new();

    let focused = dialog.field == PaperField::Name;
    lines.push(styled(
        format!("Name         {}", text_value(&form.name, focused)),
        focused,
        focus_style,
    ));

    let focused = dialog.field == PaperField::Kind;
    lines.push(styled(
        format!("Type         ‹ {} ›", form.paper_type.label()),
        focused,
        focus_style,
    ));

    let focused = dialog.field == PaperField::Description;
    lines.push(styled(
        format!("Description  {}", text_value(&form.description, focused)),
        focused,
        focus_style,
    ));
    lines.push(
        Line::from(format!(
            "             {}/{} characters",
            form.description.chars().count(),
            MAX_PAPER_DESCRIPTION_LEN
        ))
        .style(Style::default().add_modifier(Modifier::DIM)),
    );

    let block = Block::default()
        .title(" New paper ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent(app)));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn styled(content: String, focused: bool, focus_style: Style) -> Line<'static> {
    if focused {
        Line::from(content).style(focus_style)
    } else {
        Line::from(content)
    }
}
