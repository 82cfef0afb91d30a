use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

// Help section structure
pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Paper list:",
        items: &[
            ("j/k", "Move selection"),
            ("⏎/l", "Open paper"),
            ("n  ", "New paper"),
            ("d  ", "Delete paper"),
            ("t  ", "Toggle enabled/disabled"),
        ],
    },
    HelpSection {
        title: "Paper detail:",
        items: &[
            ("⇥/t", "Switch tab"),
            ("j/k", "Move over categories and questions"),
            ("␣  ", "Collapse/expand category"),
            ("a  ", "Add question to category"),
            ("e/⏎", "Edit question"),
            ("d  ", "Delete question"),
            ("s  ", "Save paper questions"),
            ("esc", "Back to list (discards session)"),
        ],
    },
    HelpSection {
        title: "Dialogs:",
        items: &[
            ("⇥/⇧⇥", "Next / previous field"),
            ("←/→ ", "Cycle type, adjust score"),
            ("^T  ", "Mark/toggle correct choice"),
            ("^A  ", "Add choice"),
            ("^D  ", "Remove focused choice"),
            ("^U  ", "Attach placeholder image"),
            ("⏎   ", "Save"),
            ("esc ", "Cancel, discard draft"),
        ],
    },
    HelpSection {
        title: "General:",
        items: &[("q  ", "Quit"), ("?  ", "This help")],
    },
];

// Help renderer
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn render(frame: &mut Frame, area: Rect) {
        let rect = super::centered_rect(60, 80, area);
        frame.render_widget(Clear, rect);

        let text = Self::build_help_text();
        let paragraph = Paragraph::new(text)
            .block(Block::default().title(" Help ").borders(Borders::ALL));
        frame.render_widget(paragraph, rect);
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for section in SECTIONS {
            lines.push(Line::from(Span::styled(
                section.title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (keys, description) in section.items {
                lines.push(Line::from(format!("  {}  {}", keys, description)));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}
