use crate::app::{AppState, DetailTab, EditSession};
use crate::model::{choice_label, Paper, QuestionType};
use crate::store::{session_score, PaperStore};
use crate::ui::{accent, text};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let Some(paper) = app.store.paper(session.paper_id) else {
        return;
    };

    let chunks =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);

    let tabs = Tabs::new(vec![Line::from("Base"), Line::from("Questions")])
        .select(match session.tab {
            DetailTab::Base => 0,
            DetailTab::Questions => 1,
        })
        .highlight_style(
            Style::default()
                .fg(accent(app))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    match session.tab {
        DetailTab::Base => render_base_tab(frame, paper, chunks[1]),
        DetailTab::Questions => render_questions_tab(frame, app, session, chunks[1]),
    }
}

fn render_base_tab(frame: &mut Frame, paper: &Paper, area: Rect) {
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{:<14}", label),
                Style::default().add_modifier(Modifier::DIM),
            ),
            Span::raw(value),
        ])
    };

    let lines = vec![
        field("Paper ID", paper.id.to_string()),
        field("Name", paper.name.clone()),
        field("Type", paper.paper_type.label().to_string()),
        field("Status", paper.status.label().to_string()),
        field("Questions", format!("{}", paper.question_count)),
        field("Time limit", format!("{} min", paper.time_limit)),
        field("Created", paper.created_at.to_string()),
        field("Updated", paper.updated_at.to_string()),
        Line::from(""),
        field("Description", String::new()),
        Line::from(format!("  {}", text::or_placeholder(&paper.description, "(none)"))),
    ];

    let block = Block::default()
        .title(format!(" {} ", text::truncate(&paper.name, 40)))
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_questions_tab(frame: &mut Frame, app: &AppState, session: &EditSession, area: Rect) {
    let cursor_style = Style::default()
        .fg(accent(app))
        .add_modifier(Modifier::REVERSED);
    let width = area.width.saturating_sub(8) as usize;

    // Same row order the cursor walks: header, then questions when expanded.
    let mut lines: Vec<Line> = Vec::new();
    for (ci, category) in session.categories.iter().enumerate() {
        let marker = if session.collapsed[ci] { "▸" } else { "▾" };
        let header = format!(
            "{} {} ({} questions, {} pts)",
            marker,
            category.name,
            category.questions.len(),
            category.total_score()
        );
        let on_header = session.cursor.category == ci && session.cursor.question.is_none();
        lines.push(if on_header {
            Line::from(header).style(cursor_style)
        } else {
            Line::from(header).style(Style::default().add_modifier(Modifier::BOLD))
        });

        if session.collapsed[ci] {
            continue;
        }
        for (qi, question) in category.questions.iter().enumerate() {
            let summary = question_summary(question, qi, width);
            let on_question =
                session.cursor.category == ci && session.cursor.question == Some(qi);
            lines.push(if on_question {
                Line::from(summary).style(cursor_style)
            } else {
                Line::from(summary)
            });
        }
    }

    let block = Block::default()
        .title(format!(
            " Questions ({} total, {} pts) ",
            session
                .categories
                .iter()
                .map(|c| c.questions.len())
                .sum::<usize>(),
            session_score(&session.categories)
        ))
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn question_summary(question: &crate::model::Question, index: usize, width: usize) -> String {
    let kind = match question.kind {
        QuestionType::SingleChoice => "single",
        QuestionType::MultipleChoice => "multi",
        QuestionType::ShortAnswer => "short",
    };
    let answer = match question.kind {
        QuestionType::SingleChoice => question
            .correct_choice
            .map(|i| format!(" → {}", choice_label(i)))
            .unwrap_or_default(),
        QuestionType::MultipleChoice => {
            let marked: Vec<String> = question
                .choices
                .iter()
                .flatten()
                .enumerate()
                .filter(|(_, c)| c.correct)
                .map(|(i, _)| choice_label(i).to_string())
                .collect();
            if marked.is_empty() {
                String::new()
            } else {
                format!(" → {}", marked.join(""))
            }
        }
        QuestionType::ShortAnswer => String::new(),
    };
    format!(
        "  {}. [{}] {}{} ({} pts)",
        index + 1,
        kind,
        text::truncate(&text::or_placeholder(&question.content, "(no content)"), width),
        answer,
        question.score
    )
}
