use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub type Id = Uuid;

/// Identifier generation seam so tests can supply deterministic ids.
pub trait IdSource {
    fn next_id(&mut self) -> Id;
}

/// Production source: random v4 UUIDs.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Id {
        Uuid::new_v4()
    }
}

/// Deterministic source used by tests.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: u128,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Id {
        self.counter += 1;
        Uuid::from_u128(self.counter)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("choice index {0} is out of range")]
    ChoiceOutOfRange(usize),

    #[error("question index {0} is out of range")]
    QuestionOutOfRange(usize),

    #[error("a choice question must keep at least one choice")]
    LastChoice,

    #[error("question is not single-choice")]
    NotSingleChoice,

    #[error("question is not multiple-choice")]
    NotMultipleChoice,
}

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperType {
    Exam,
    Practice,
    Quiz,
}

impl PaperType {
    pub const ALL: [PaperType; 3] = [PaperType::Exam, PaperType::Practice, PaperType::Quiz];

    pub fn label(self) -> &'static str {
        match self {
            PaperType::Exam => "Exam",
            PaperType::Practice => "Practice",
            PaperType::Quiz => "Quiz",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperStatus {
    Enabled,
    Disabled,
}

impl PaperStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaperStatus::Enabled => "Enabled",
            PaperStatus::Disabled => "Disabled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: Id,
    pub name: String,
    pub paper_type: PaperType,
    pub description: String,
    pub status: PaperStatus,
    pub question_count: usize,
    /// Time limit in minutes.
    pub time_limit: u32,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    GeneralKnowledge,
    QuantitativeReasoning,
    VerbalAbility,
    LogicalReasoning,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 4] = [
        CategoryKind::GeneralKnowledge,
        CategoryKind::QuantitativeReasoning,
        CategoryKind::VerbalAbility,
        CategoryKind::LogicalReasoning,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            CategoryKind::GeneralKnowledge => "General Knowledge",
            CategoryKind::QuantitativeReasoning => "Quantitative Reasoning",
            CategoryKind::VerbalAbility => "Verbal Ability",
            CategoryKind::LogicalReasoning => "Logical Reasoning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
    ShortAnswer,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::SingleChoice,
        QuestionType::MultipleChoice,
        QuestionType::ShortAnswer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "Single choice",
            QuestionType::MultipleChoice => "Multiple choice",
            QuestionType::ShortAnswer => "Short answer",
        }
    }

    pub fn has_choices(self) -> bool {
        !matches!(self, QuestionType::ShortAnswer)
    }
}

/// One selectable answer belonging to a choice question. The `correct` flag is
/// meaningful only for multiple-choice; single-choice correctness lives in
/// `Question::correct_choice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: Id,
    pub content: String,
    pub image: Option<String>,
    pub correct: bool,
}

impl Choice {
    fn blank(ids: &mut dyn IdSource) -> Self {
        Self {
            id: ids.next_id(),
            content: String::new(),
            image: None,
            correct: false,
        }
    }
}

/// Position-derived label for a choice: 0 -> "A", 1 -> "B", ...
/// Labels shift when an earlier choice is removed; they are never stored.
pub fn choice_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

pub const DEFAULT_SCORE: u32 = 5;
const DEFAULT_CHOICE_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Id,
    pub kind: QuestionType,
    pub content: String,
    pub image: Option<String>,
    /// Present only for choice types; `None` for short-answer.
    pub choices: Option<Vec<Choice>>,
    pub score: u32,
    /// Index of the correct choice; single-choice only.
    pub correct_choice: Option<usize>,
    pub analysis: String,
    pub analysis_image: Option<String>,
}

impl Question {
    /// A fresh draft in the state an "add question" dialog opens with:
    /// single-choice, two blank choices, default score.
    pub fn draft(ids: &mut dyn IdSource) -> Self {
        Self {
            id: ids.next_id(),
            kind: QuestionType::SingleChoice,
            content: String::new(),
            image: None,
            choices: Some(Self::default_choices(ids)),
            score: DEFAULT_SCORE,
            correct_choice: None,
            analysis: String::new(),
            analysis_image: None,
        }
    }

    fn default_choices(ids: &mut dyn IdSource) -> Vec<Choice> {
        (0..DEFAULT_CHOICE_COUNT)
            .map(|_| Choice::blank(ids))
            .collect()
    }

    /// Changes the question type. Choice types keep existing choices, or get
    /// two blank ones when none exist; short-answer clears choices entirely.
    /// A round trip through short-answer loses prior choice content.
    pub fn set_kind(&mut self, kind: QuestionType, ids: &mut dyn IdSource) {
        self.kind = kind;
        if kind.has_choices() {
            if self.choices.is_none() {
                self.choices = Some(Self::default_choices(ids));
            }
        } else {
            self.choices = None;
            self.correct_choice = None;
        }
    }

    pub fn choice_count(&self) -> usize {
        self.choices.as_ref().map_or(0, Vec::len)
    }

    fn choice_mut(&mut self, index: usize) -> ModelResult<&mut Choice> {
        self.choices
            .as_mut()
            .and_then(|choices| choices.get_mut(index))
            .ok_or(ModelError::ChoiceOutOfRange(index))
    }

    pub fn set_choice_content(
        &mut self,
        index: usize,
        content: impl Into<String>,
    ) -> ModelResult<()> {
        self.choice_mut(index)?.content = content.into();
        Ok(())
    }

    pub fn set_choice_image(&mut self, index: usize, image: impl Into<String>) -> ModelResult<()> {
        self.choice_mut(index)?.image = Some(image.into());
        Ok(())
    }

    /// Marks the exclusive correct choice of a single-choice question.
    /// Storing a single index means any previous selection is replaced.
    pub fn mark_correct(&mut self, index: usize) -> ModelResult<()> {
        if self.kind != QuestionType::SingleChoice {
            return Err(ModelError::NotSingleChoice);
        }
        if index >= self.choice_count() {
            return Err(ModelError::ChoiceOutOfRange(index));
        }
        self.correct_choice = Some(index);
        Ok(())
    }

    /// Sets the per-choice correctness flag of a multiple-choice question.
    pub fn set_choice_correct(&mut self, index: usize, correct: bool) -> ModelResult<()> {
        if self.kind != QuestionType::MultipleChoice {
            return Err(ModelError::NotMultipleChoice);
        }
        self.choice_mut(index)?.correct = correct;
        Ok(())
    }

    pub fn add_choice(&mut self, ids: &mut dyn IdSource) {
        let choice = Choice::blank(ids);
        self.choices.get_or_insert_with(Vec::new).push(choice);
    }

    /// Removes the choice at `index`; later choices shift down one position,
    /// so their position-derived labels change. Refuses to remove the last
    /// remaining choice, and keeps `correct_choice` pointing at the same
    /// choice when one before it is removed.
    pub fn remove_choice(&mut self, index: usize) -> ModelResult<()> {
        let choices = self
            .choices
            .as_mut()
            .ok_or(ModelError::ChoiceOutOfRange(index))?;
        if index >= choices.len() {
            return Err(ModelError::ChoiceOutOfRange(index));
        }
        if choices.len() == 1 {
            return Err(ModelError::LastChoice);
        }
        choices.remove(index);
        if let Some(correct) = self.correct_choice {
            if correct == index {
                self.correct_choice = None;
            } else if correct > index {
                self.correct_choice = Some(correct - 1);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub kind: CategoryKind,
    pub name: String,
    pub questions: Vec<Question>,
}

impl Category {
    /// Seeds the fixed set of four categories an editing session starts with.
    pub fn seed(ids: &mut dyn IdSource) -> Vec<Category> {
        CategoryKind::ALL
            .iter()
            .map(|&kind| Category {
                id: ids.next_id(),
                kind,
                name: kind.display_name().to_string(),
                questions: Vec::new(),
            })
            .collect()
    }

    /// Merges a dialog draft: replaces the question at `editing_index` when
    /// present, otherwise appends.
    pub fn save_question(
        &mut self,
        question: Question,
        editing_index: Option<usize>,
    ) -> ModelResult<()> {
        match editing_index {
            Some(index) => {
                let slot = self
                    .questions
                    .get_mut(index)
                    .ok_or(ModelError::QuestionOutOfRange(index))?;
                *slot = question;
            }
            None => self.questions.push(question),
        }
        Ok(())
    }

    /// Removes the question at `index`; later questions shift down.
    pub fn remove_question(&mut self, index: usize) -> ModelResult<()> {
        if index >= self.questions.len() {
            return Err(ModelError::QuestionOutOfRange(index));
        }
        self.questions.remove(index);
        Ok(())
    }

    pub fn total_score(&self) -> u32 {
        self.questions.iter().map(|q| q.score).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> SequentialIds {
        SequentialIds::default()
    }

    #[test]
    fn test_draft_defaults() {
        let mut ids = ids();
        let q = Question::draft(&mut ids);

        assert_eq!(q.kind, QuestionType::SingleChoice);
        assert_eq!(q.content, "");
        assert_eq!(q.score, DEFAULT_SCORE);
        assert_eq!(q.choice_count(), 2);
        assert_eq!(q.correct_choice, None);
        assert_eq!(q.analysis, "");

        let choices = q.choices.as_ref().unwrap();
        assert!(choices.iter().all(|c| c.content.is_empty() && !c.correct));
        assert_ne!(choices[0].id, choices[1].id);
        assert_ne!(q.id, choices[0].id);
    }

    #[test]
    fn test_short_answer_clears_choices() {
        let mut ids = ids();
        let mut q = Question::draft(&mut ids);
        q.set_choice_content(0, "kept nowhere").unwrap();
        q.mark_correct(0).unwrap();

        q.set_kind(QuestionType::ShortAnswer, &mut ids);

        assert!(q.choices.is_none());
        assert_eq!(q.correct_choice, None);
    }

    #[test]
    fn test_choice_type_reinitializes_two_blank_choices() {
        let mut ids = ids();
        let mut q = Question::draft(&mut ids);
        q.set_choice_content(0, "lost").unwrap();
        q.set_kind(QuestionType::ShortAnswer, &mut ids);
        q.set_kind(QuestionType::MultipleChoice, &mut ids);

        // Round trip through short-answer loses prior content.
        assert_eq!(q.choice_count(), 2);
        let choices = q.choices.as_ref().unwrap();
        assert!(choices.iter().all(|c| c.content.is_empty() && !c.correct));
    }

    #[test]
    fn test_switching_between_choice_types_keeps_choices() {
        let mut ids = ids();
        let mut q = Question::draft(&mut ids);
        q.set_choice_content(0, "survives").unwrap();

        q.set_kind(QuestionType::MultipleChoice, &mut ids);

        assert_eq!(q.choices.as_ref().unwrap()[0].content, "survives");
    }

    #[test]
    fn test_add_remove_choice_lengths_and_order() {
        let mut ids = ids();
        let mut q = Question::draft(&mut ids);
        q.set_choice_content(0, "a").unwrap();
        q.set_choice_content(1, "b").unwrap();

        q.add_choice(&mut ids);
        q.add_choice(&mut ids);
        assert_eq!(q.choice_count(), 4);
        q.set_choice_content(2, "c").unwrap();

        q.remove_choice(1).unwrap();
        assert_eq!(q.choice_count(), 3);

        // Untouched choices keep their order; labels derive from position.
        let contents: Vec<&str> = q
            .choices
            .as_ref()
            .unwrap()
            .iter()
            .map(|c| c.content.as_str())
            .collect();
        assert_eq!(contents, vec!["a", "c", ""]);
        assert_eq!(choice_label(1), 'B');
    }

    #[test]
    fn test_remove_last_choice_rejected() {
        let mut ids = ids();
        let mut q = Question::draft(&mut ids);
        q.remove_choice(0).unwrap();

        assert_eq!(q.remove_choice(0), Err(ModelError::LastChoice));
        assert_eq!(q.choice_count(), 1);
    }

    #[test]
    fn test_remove_choice_adjusts_correct_index() {
        let mut ids = ids();
        let mut q = Question::draft(&mut ids);
        q.add_choice(&mut ids);
        q.mark_correct(2).unwrap();

        q.remove_choice(0).unwrap();
        assert_eq!(q.correct_choice, Some(1));

        q.remove_choice(1).unwrap();
        assert_eq!(q.correct_choice, None);
    }

    #[test]
    fn test_out_of_range_operations_fail_without_mutating() {
        let mut ids = ids();
        let mut q = Question::draft(&mut ids);
        let before = q.clone();

        assert_eq!(
            q.set_choice_content(5, "x"),
            Err(ModelError::ChoiceOutOfRange(5))
        );
        assert_eq!(q.mark_correct(2), Err(ModelError::ChoiceOutOfRange(2)));
        assert_eq!(q.remove_choice(9), Err(ModelError::ChoiceOutOfRange(9)));
        assert_eq!(q, before);

        q.set_kind(QuestionType::ShortAnswer, &mut ids);
        assert_eq!(
            q.set_choice_content(0, "x"),
            Err(ModelError::ChoiceOutOfRange(0))
        );
    }

    #[test]
    fn test_correctness_operations_check_kind() {
        let mut ids = ids();
        let mut q = Question::draft(&mut ids);

        assert_eq!(
            q.set_choice_correct(0, true),
            Err(ModelError::NotMultipleChoice)
        );

        q.set_kind(QuestionType::MultipleChoice, &mut ids);
        assert_eq!(q.mark_correct(0), Err(ModelError::NotSingleChoice));
    }

    #[test]
    fn test_multiple_choice_flags_are_independent() {
        let mut ids = ids();
        let mut q = Question::draft(&mut ids);
        q.set_kind(QuestionType::MultipleChoice, &mut ids);

        q.set_choice_correct(1, true).unwrap();

        let choices = q.choices.as_ref().unwrap();
        assert!(!choices[0].correct);
        assert!(choices[1].correct);
    }

    #[test]
    fn test_single_choice_selection_is_exclusive() {
        let mut ids = ids();
        let mut q = Question::draft(&mut ids);

        q.mark_correct(0).unwrap();
        q.mark_correct(1).unwrap();

        assert_eq!(q.correct_choice, Some(1));
    }

    #[test]
    fn test_seeded_categories() {
        let mut ids = ids();
        let categories = Category::seed(&mut ids);

        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].kind, CategoryKind::GeneralKnowledge);
        assert_eq!(categories[0].name, "General Knowledge");
        assert!(categories.iter().all(|c| c.questions.is_empty()));

        let mut seen: Vec<Id> = categories.iter().map(|c| c.id).collect();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_save_question_replaces_at_index() {
        let mut ids = ids();
        let mut category = Category::seed(&mut ids).remove(0);
        for _ in 0..5 {
            category
                .save_question(Question::draft(&mut ids), None)
                .unwrap();
        }

        let mut replacement = Question::draft(&mut ids);
        replacement.content = "replaced".to_string();
        category.save_question(replacement, Some(2)).unwrap();

        assert_eq!(category.questions.len(), 5);
        assert_eq!(category.questions[2].content, "replaced");

        category
            .save_question(Question::draft(&mut ids), None)
            .unwrap();
        assert_eq!(category.questions.len(), 6);
    }

    #[test]
    fn test_save_question_rejects_stale_index() {
        let mut ids = ids();
        let mut category = Category::seed(&mut ids).remove(0);

        let err = category.save_question(Question::draft(&mut ids), Some(0));
        assert_eq!(err, Err(ModelError::QuestionOutOfRange(0)));
        assert!(category.questions.is_empty());
    }

    #[test]
    fn test_remove_question_preserves_remaining_ids() {
        let mut ids = ids();
        let mut category = Category::seed(&mut ids).remove(0);
        for _ in 0..3 {
            category
                .save_question(Question::draft(&mut ids), None)
                .unwrap();
        }
        let id_b = category.questions[1].id;
        let id_c = category.questions[2].id;

        category.remove_question(0).unwrap();

        assert_eq!(category.questions.len(), 2);
        assert_eq!(category.questions[0].id, id_b);
        assert_eq!(category.questions[1].id, id_c);

        assert_eq!(
            category.remove_question(7),
            Err(ModelError::QuestionOutOfRange(7))
        );
    }

    #[test]
    fn test_capital_cities_scenario() {
        let mut ids = ids();
        let mut category = Category::seed(&mut ids).remove(0);

        let mut q = Question::draft(&mut ids);
        q.content = "Which city is the capital of France?".to_string();
        q.set_choice_content(0, "Paris").unwrap();
        q.set_choice_content(1, "London").unwrap();
        q.mark_correct(0).unwrap();

        category.save_question(q, None).unwrap();

        assert_eq!(category.questions.len(), 1);
        let saved = &category.questions[0];
        assert_eq!(saved.choices.as_ref().unwrap()[0].content, "Paris");
        assert_eq!(saved.choices.as_ref().unwrap()[1].content, "London");
        assert_eq!(saved.correct_choice, Some(0));
        assert_eq!(category.total_score(), DEFAULT_SCORE);
    }
}
