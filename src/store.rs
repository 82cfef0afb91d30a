use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::model::{Category, Id, IdSource, Paper, PaperStatus, PaperType, QuestionType};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("paper {0} not found")]
    PaperNotFound(Id),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Validated input of the paper creation dialog.
#[derive(Debug, Clone)]
pub struct PaperForm {
    pub name: String,
    pub paper_type: PaperType,
    pub description: String,
}

pub const MIN_PAPER_NAME_LEN: usize = 2;
pub const MAX_PAPER_DESCRIPTION_LEN: usize = 500;

impl PaperForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            paper_type: PaperType::Exam,
            description: String::new(),
        }
    }

    /// Form-level checks mirrored from the creation dialog; these are
    /// presentation constraints, not model invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().chars().count() < MIN_PAPER_NAME_LEN {
            return Err(format!(
                "Paper name needs at least {} characters",
                MIN_PAPER_NAME_LEN
            ));
        }
        if self.description.chars().count() > MAX_PAPER_DESCRIPTION_LEN {
            return Err(format!(
                "Paper description is limited to {} characters",
                MAX_PAPER_DESCRIPTION_LEN
            ));
        }
        Ok(())
    }
}

impl Default for PaperForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote persistence boundary. The console only ever talks to this trait;
/// the bundled implementation keeps everything in memory and logs what a real
/// backend would receive.
pub trait PaperStore {
    fn papers(&self) -> &[Paper];
    fn paper(&self, id: Id) -> Option<&Paper>;
    fn create_paper(&mut self, form: &PaperForm, ids: &mut dyn IdSource) -> Id;
    fn delete_paper(&mut self, id: Id) -> StoreResult<()>;
    fn set_status(&mut self, id: Id, status: PaperStatus) -> StoreResult<()>;
    /// Persists an editing session's categories for a paper. The in-memory
    /// store updates the paper's question count and logs the payload.
    fn submit_questions(&mut self, id: Id, categories: &[Category]) -> StoreResult<()>;
}

const DEFAULT_TIME_LIMIT: u32 = 120;

/// In-memory store seeded with sample rows, standing in for the remote API.
pub struct MemoryStore {
    papers: Vec<Paper>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { papers: Vec::new() }
    }

    /// A store pre-populated the way the list page's placeholder rows were.
    pub fn with_samples(ids: &mut dyn IdSource) -> Self {
        let today = today();
        let samples = [
            (
                "Civil Service Mock A",
                PaperType::Exam,
                "Full-length mock paper covering all four categories",
                50,
                120,
            ),
            (
                "Verbal Warm-up",
                PaperType::Practice,
                "Short practice set for verbal ability",
                20,
                30,
            ),
            (
                "Logic Quick Quiz",
                PaperType::Quiz,
                "Ten-minute logical reasoning quiz",
                10,
                10,
            ),
        ];

        let papers = samples
            .into_iter()
            .map(|(name, paper_type, description, count, limit)| Paper {
                id: ids.next_id(),
                name: name.to_string(),
                paper_type,
                description: description.to_string(),
                status: PaperStatus::Enabled,
                question_count: count,
                time_limit: limit,
                created_at: today,
                updated_at: today,
            })
            .collect();

        Self { papers }
    }

    fn paper_mut(&mut self, id: Id) -> StoreResult<&mut Paper> {
        self.papers
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::PaperNotFound(id))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PaperStore for MemoryStore {
    fn papers(&self) -> &[Paper] {
        &self.papers
    }

    fn paper(&self, id: Id) -> Option<&Paper> {
        self.papers.iter().find(|p| p.id == id)
    }

    fn create_paper(&mut self, form: &PaperForm, ids: &mut dyn IdSource) -> Id {
        let today = today();
        let paper = Paper {
            id: ids.next_id(),
            name: form.name.trim().to_string(),
            paper_type: form.paper_type,
            description: form.description.clone(),
            status: PaperStatus::Enabled,
            question_count: 0,
            time_limit: DEFAULT_TIME_LIMIT,
            created_at: today,
            updated_at: today,
        };
        let id = paper.id;
        log::info!("create paper {:?} ({})", paper.name, id);
        self.papers.push(paper);
        id
    }

    fn delete_paper(&mut self, id: Id) -> StoreResult<()> {
        let index = self
            .papers
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::PaperNotFound(id))?;
        let removed = self.papers.remove(index);
        log::info!("delete paper {:?} ({})", removed.name, id);
        Ok(())
    }

    fn set_status(&mut self, id: Id, status: PaperStatus) -> StoreResult<()> {
        let paper = self.paper_mut(id)?;
        paper.status = status;
        paper.updated_at = today();
        Ok(())
    }

    fn submit_questions(&mut self, id: Id, categories: &[Category]) -> StoreResult<()> {
        let count: usize = categories.iter().map(|c| c.questions.len()).sum();
        let paper = self.paper_mut(id)?;
        paper.question_count = count;
        paper.updated_at = today();

        // A real backend call goes here; log what it would receive.
        match serde_json::to_string(categories) {
            Ok(payload) => log::info!("submit {} questions for paper {}: {}", count, id, payload),
            Err(err) => log::warn!("submit payload for paper {} not serializable: {}", id, err),
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Image upload boundary. No file picker exists; the bundled implementation
/// fabricates a stable-looking reference the way the original console did.
pub trait ImageUploader {
    fn upload(&mut self) -> String;
}

#[derive(Debug, Default)]
pub struct PlaceholderUploader;

impl ImageUploader for PlaceholderUploader {
    fn upload(&mut self) -> String {
        format!("https://example.com/image-{}.jpg", uuid::Uuid::new_v4())
    }
}

/// Summary line shown after a submit, useful for the status line.
pub fn submission_summary(categories: &[Category]) -> String {
    let total: usize = categories.iter().map(|c| c.questions.len()).sum();
    let choice: usize = categories
        .iter()
        .flat_map(|c| &c.questions)
        .filter(|q| q.kind != QuestionType::ShortAnswer)
        .count();
    format!("Saved {} questions ({} choice-based)", total, choice)
}

/// Total score across an editing session, shown in the questions tab header.
pub fn session_score(categories: &[Category]) -> u32 {
    categories.iter().map(Category::total_score).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, SequentialIds};

    #[test]
    fn test_sample_store_rows() {
        let mut ids = SequentialIds::default();
        let store = MemoryStore::with_samples(&mut ids);

        assert_eq!(store.papers().len(), 3);
        assert!(store
            .papers()
            .iter()
            .all(|p| p.status == PaperStatus::Enabled));
    }

    #[test]
    fn test_create_and_delete_paper() {
        let mut ids = SequentialIds::default();
        let mut store = MemoryStore::new();
        let form = PaperForm {
            name: "  Midterm  ".to_string(),
            paper_type: PaperType::Quiz,
            description: "desc".to_string(),
        };

        let id = store.create_paper(&form, &mut ids);
        assert_eq!(store.papers().len(), 1);
        let paper = store.paper(id).unwrap();
        assert_eq!(paper.name, "Midterm");
        assert_eq!(paper.question_count, 0);

        store.delete_paper(id).unwrap();
        assert!(store.papers().is_empty());
        assert_eq!(store.delete_paper(id), Err(StoreError::PaperNotFound(id)));
    }

    #[test]
    fn test_submit_updates_question_count() {
        let mut ids = SequentialIds::default();
        let mut store = MemoryStore::with_samples(&mut ids);
        let id = store.papers()[0].id;

        let mut categories = Category::seed(&mut ids);
        categories[0]
            .save_question(Question::draft(&mut ids), None)
            .unwrap();
        categories[2]
            .save_question(Question::draft(&mut ids), None)
            .unwrap();

        store.submit_questions(id, &categories).unwrap();
        assert_eq!(store.paper(id).unwrap().question_count, 2);
    }

    #[test]
    fn test_form_validation() {
        let mut form = PaperForm::new();
        assert!(form.validate().is_err());

        form.name = "A".to_string();
        assert!(form.validate().is_err());

        form.name = "AB".to_string();
        assert!(form.validate().is_ok());

        form.description = "x".repeat(MAX_PAPER_DESCRIPTION_LEN + 1);
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_placeholder_uploader_shape() {
        let mut uploader = PlaceholderUploader;
        let a = uploader.upload();
        let b = uploader.upload();

        assert!(a.starts_with("https://example.com/image-"));
        assert!(a.ends_with(".jpg"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_submission_summary() {
        let mut ids = SequentialIds::default();
        let mut categories = Category::seed(&mut ids);
        let mut short = Question::draft(&mut ids);
        short.set_kind(QuestionType::ShortAnswer, &mut ids);
        categories[0].save_question(short, None).unwrap();
        categories[0]
            .save_question(Question::draft(&mut ids), None)
            .unwrap();

        assert_eq!(
            submission_summary(&categories),
            "Saved 2 questions (1 choice-based)"
        );
    }
}
