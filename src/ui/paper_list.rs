use crate::app::AppState;
use crate::store::PaperStore;
use crate::ui::{accent, text};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default().title(" Papers ").borders(Borders::ALL);
    let papers = app.store.papers();

    if papers.is_empty() {
        let empty = Paragraph::new("No papers yet. Press n to create one.").block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Name", "Type", "Status", "Questions", "Time", "Updated"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = papers
        .iter()
        .map(|paper| {
            Row::new([
                text::truncate(&paper.name, 28),
                paper.paper_type.label().to_string(),
                paper.status.label().to_string(),
                paper.question_count.to_string(),
                format!("{} min", paper.time_limit),
                paper.updated_at.to_string(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(30),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .fg(accent(app))
                .add_modifier(Modifier::REVERSED),
        );

    let mut state = TableState::default();
    state.select(Some(app.list_index));
    frame.render_stateful_widget(table, area, &mut state);
}
