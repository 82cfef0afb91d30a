use crate::config::AppConfig;
use crate::model::{Category, Id, IdSource, Paper, Question, RandomIds};
use crate::store::{ImageUploader, MemoryStore, PaperForm, PaperStore, PlaceholderUploader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Base,
    Questions,
}

impl DetailTab {
    pub fn other(self) -> Self {
        match self {
            DetailTab::Base => DetailTab::Questions,
            DetailTab::Questions => DetailTab::Base,
        }
    }
}

/// Focusable fields of the paper creation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperField {
    Name,
    Kind,
    Description,
}

impl PaperField {
    pub fn next(self) -> Self {
        match self {
            PaperField::Name => PaperField::Kind,
            PaperField::Kind => PaperField::Description,
            PaperField::Description => PaperField::Name,
        }
    }

    pub fn prev(self) -> Self {
        self.next().next()
    }
}

#[derive(Debug, Clone)]
pub struct PaperDialog {
    pub form: PaperForm,
    pub field: PaperField,
}

impl PaperDialog {
    pub fn new() -> Self {
        Self {
            form: PaperForm::new(),
            field: PaperField::Name,
        }
    }
}

impl Default for PaperDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// Focusable fields of the question dialog. `Choice(i)` addresses the i-th
/// choice row, so the set of fields depends on the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Kind,
    Content,
    Score,
    Choice(usize),
    Analysis,
}

/// Local draft of a question being created or edited. Everything here is
/// dialog-private; the owning category sees the draft only on save.
#[derive(Debug, Clone)]
pub struct QuestionDialog {
    pub category_index: usize,
    /// `Some` when editing an existing question, `None` when adding.
    pub editing_index: Option<usize>,
    pub draft: Question,
    pub field: DialogField,
}

impl QuestionDialog {
    /// Focus order as rendered: type, content, score, each choice, analysis.
    fn fields(&self) -> Vec<DialogField> {
        let mut fields = vec![DialogField::Kind, DialogField::Content, DialogField::Score];
        for i in 0..self.draft.choice_count() {
            fields.push(DialogField::Choice(i));
        }
        fields.push(DialogField::Analysis);
        fields
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|&f| f == self.field).unwrap_or(0);
        self.field = fields[(pos + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|&f| f == self.field).unwrap_or(0);
        self.field = fields[(pos + fields.len() - 1) % fields.len()];
    }

    /// Keeps focus valid after the draft's choice list changed shape.
    pub fn clamp_focus(&mut self) {
        if let DialogField::Choice(i) = self.field {
            let count = self.draft.choice_count();
            if count == 0 {
                self.field = DialogField::Content;
            } else if i >= count {
                self.field = DialogField::Choice(count - 1);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeletePaper { index: usize },
    DeleteQuestion { category_index: usize, question_index: usize },
}

#[derive(Debug, Clone)]
pub enum AppMode {
    PaperList,
    PaperDialog(PaperDialog),
    PaperDetail,
    QuestionDialog(QuestionDialog),
    Confirm(ConfirmAction),
    Help,
}

/// Cursor into the questions tab: a category header, or a question row
/// inside an expanded category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCursor {
    pub category: usize,
    pub question: Option<usize>,
}

/// One open paper's editing session. Categories are seeded once when the
/// session opens and live only as long as it does.
#[derive(Debug)]
pub struct EditSession {
    pub paper_id: Id,
    pub tab: DetailTab,
    pub categories: Vec<Category>,
    pub cursor: SessionCursor,
    pub collapsed: Vec<bool>,
}

impl EditSession {
    pub fn open(paper_id: Id, ids: &mut dyn IdSource) -> Self {
        let categories = Category::seed(ids);
        let collapsed = vec![false; categories.len()];
        Self {
            paper_id,
            tab: DetailTab::Base,
            categories,
            cursor: SessionCursor {
                category: 0,
                question: None,
            },
            collapsed,
        }
    }
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub config: AppConfig,
    pub store: Box<dyn PaperStore>,
    pub uploader: Box<dyn ImageUploader>,
    pub ids: Box<dyn IdSource>,
    /// Selection in the paper list table.
    pub list_index: usize,
    pub session: Option<EditSession>,
    /// Message for the status line.
    pub message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_parts(
            config,
            Box::new(MemoryStore::new()),
            Box::new(PlaceholderUploader),
            Box::new(RandomIds),
        )
    }

    pub fn with_parts(
        config: AppConfig,
        store: Box<dyn PaperStore>,
        uploader: Box<dyn ImageUploader>,
        ids: Box<dyn IdSource>,
    ) -> Self {
        Self {
            running: true,
            mode: AppMode::PaperList,
            config,
            store,
            uploader,
            ids,
            list_index: 0,
            session: None,
            message: None,
        }
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn selected_paper(&self) -> Option<&Paper> {
        self.store.papers().get(self.list_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionType, SequentialIds};

    fn dialog() -> QuestionDialog {
        let mut ids = SequentialIds::default();
        QuestionDialog {
            category_index: 0,
            editing_index: None,
            draft: Question::draft(&mut ids),
            field: DialogField::Kind,
        }
    }

    #[test]
    fn test_focus_cycles_through_choices() {
        let mut d = dialog();
        let mut seen = vec![d.field];
        for _ in 0..5 {
            d.focus_next();
            seen.push(d.field);
        }

        assert_eq!(
            seen,
            vec![
                DialogField::Kind,
                DialogField::Content,
                DialogField::Score,
                DialogField::Choice(0),
                DialogField::Choice(1),
                DialogField::Analysis,
            ]
        );

        d.focus_next();
        assert_eq!(d.field, DialogField::Kind);

        d.focus_prev();
        assert_eq!(d.field, DialogField::Analysis);
    }

    #[test]
    fn test_focus_skips_choices_for_short_answer() {
        let mut ids = SequentialIds::default();
        let mut d = dialog();
        d.draft.set_kind(QuestionType::ShortAnswer, &mut ids);
        d.field = DialogField::Score;

        d.focus_next();
        assert_eq!(d.field, DialogField::Analysis);
    }

    #[test]
    fn test_clamp_focus_after_choice_removal() {
        let mut d = dialog();
        d.field = DialogField::Choice(1);
        d.draft.remove_choice(1).unwrap();

        d.clamp_focus();
        assert_eq!(d.field, DialogField::Choice(0));
    }

    #[test]
    fn test_session_opens_on_base_tab_with_seeded_categories() {
        let mut ids = SequentialIds::default();
        let paper_id = ids.next_id();
        let session = EditSession::open(paper_id, &mut ids);

        assert_eq!(session.tab, DetailTab::Base);
        assert_eq!(session.categories.len(), 4);
        assert_eq!(session.collapsed, vec![false; 4]);
        assert_eq!(session.cursor.category, 0);
        assert_eq!(session.cursor.question, None);
    }
}
