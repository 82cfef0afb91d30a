use crate::app::{AppState, DialogField, QuestionDialog};
use crate::model::{choice_label, QuestionType};
use crate::ui::{accent, centered_rect, text};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CURSOR_INDICATOR: char = '▏';

pub fn render(frame: &mut Frame, app: &AppState, dialog: &QuestionDialog, area: Rect) {
    let rect = centered_rect(72, 84, area);
    frame.render_widget(Clear, rect);

    let category_name = app
        .session
        .as_ref()
        .and_then(|s| s.categories.get(dialog.category_index))
        .map(|c| c.name.as_str())
        .unwrap_or("?");
    let title = if dialog.editing_index.is_some() {
        format!(" Edit question · {} ", category_name)
    } else {
        format!(" Add question · {} ", category_name)
    };

    let focus_style = Style::default()
        .fg(accent(app))
        .add_modifier(Modifier::BOLD);
    let width = rect.width.saturating_sub(16) as usize;
    let draft = &dialog.draft;

    let text_value = |value: &str, focused: bool| {
        let mut shown = text::truncate(value, width);
        if focused {
            shown.push(CURSOR_INDICATOR);
        }
        shown
    };

    let mut lines: Vec<Line> = Vec::new();

    let focused = dialog.field == DialogField::Kind;
    let kind_line = format!("Type       ‹ {} ›", draft.kind.label());
    lines.push(styled(kind_line, focused, focus_style));

    let focused = dialog.field == DialogField::Content;
    let content_line = format!(
        "Content    {}{}",
        text_value(&draft.content, focused),
        image_marker(&draft.image)
    );
    lines.push(styled(content_line, focused, focus_style));

    let focused = dialog.field == DialogField::Score;
    lines.push(styled(
        format!("Score      {}", draft.score),
        focused,
        focus_style,
    ));

    if let Some(choices) = draft.choices.as_ref() {
        lines.push(Line::from(""));
        lines.push(Line::from("Choices").style(Style::default().add_modifier(Modifier::BOLD)));
        for (i, choice) in choices.iter().enumerate() {
            let correct = match draft.kind {
                QuestionType::SingleChoice => draft.correct_choice == Some(i),
                QuestionType::MultipleChoice => choice.correct,
                QuestionType::ShortAnswer => false,
            };
            let mark = if correct { "●" } else { "○" };
            let focused = dialog.field == DialogField::Choice(i);
            let line = format!(
                "  {} {}  {}{}",
                mark,
                choice_label(i),
                text_value(&choice.content, focused),
                image_marker(&choice.image)
            );
            lines.push(styled(line, focused, focus_style));
        }
        lines.push(Line::from(""));
    } else {
        lines.push(Line::from(""));
        lines.push(
            Line::from("Free-text answer, no choices")
                .style(Style::default().add_modifier(Modifier::DIM)),
        );
        lines.push(Line::from(""));
    }

    let focused = dialog.field == DialogField::Analysis;
    let analysis_line = format!(
        "Analysis   {}{}",
        text_value(&draft.analysis, focused),
        image_marker(&draft.analysis_image)
    );
    lines.push(styled(analysis_line, focused, focus_style));

    let block = Block::default()
        .title(title)
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

fn image_marker(image: &Option<String>) -> &'static str {
    if image.is_some() {
        "  [img]"
    } else {
        ""
    }
}
