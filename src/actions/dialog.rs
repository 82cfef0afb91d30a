use crate::app::{AppMode, AppState, DialogField, PaperField, SessionCursor};
use crate::model::{PaperType, QuestionType};
use crate::store::{ImageUploader, PaperStore};

const MAX_SCORE: u32 = 999;

pub fn focus_next(app: &mut AppState) {
    match &mut app.mode {
        AppMode::QuestionDialog(d) => d.focus_next(),
        AppMode::PaperDialog(d) => d.field = d.field.next(),
        _ => {}
    }
}

pub fn focus_prev(app: &mut AppState) {
    match &mut app.mode {
        AppMode::QuestionDialog(d) => d.focus_prev(),
        AppMode::PaperDialog(d) => d.field = d.field.prev(),
        _ => {}
    }
}

pub fn type_char(app: &mut AppState, c: char) {
    match &mut app.mode {
        AppMode::QuestionDialog(d) => match d.field {
            DialogField::Content => d.draft.content.push(c),
            DialogField::Analysis => d.draft.analysis.push(c),
            DialogField::Score => {
                if let Some(digit) = c.to_digit(10) {
                    d.draft.score = (d.draft.score * 10 + digit).min(MAX_SCORE);
                }
            }
            DialogField::Choice(i) => {
                if let Some(choice) = d.draft.choices.as_mut().and_then(|cs| cs.get_mut(i)) {
                    choice.content.push(c);
                }
            }
            DialogField::Kind => {}
        },
        AppMode::PaperDialog(d) => match d.field {
            PaperField::Name => d.form.name.push(c),
            PaperField::Description => d.form.description.push(c),
            PaperField::Kind => {}
        },
        _ => {}
    }
}

pub fn backspace(app: &mut AppState) {
    match &mut app.mode {
        AppMode::QuestionDialog(d) => match d.field {
            DialogField::Content => {
                d.draft.content.pop();
            }
            DialogField::Analysis => {
                d.draft.analysis.pop();
            }
            DialogField::Score => d.draft.score /= 10,
            DialogField::Choice(i) => {
                if let Some(choice) = d.draft.choices.as_mut().and_then(|cs| cs.get_mut(i)) {
                    choice.content.pop();
                }
            }
            DialogField::Kind => {}
        },
        AppMode::PaperDialog(d) => match d.field {
            PaperField::Name => {
                d.form.name.pop();
            }
            PaperField::Description => {
                d.form.description.pop();
            }
            PaperField::Kind => {}
        },
        _ => {}
    }
}

/// Left/right on an enumerated field cycles its value; on the score field it
/// nudges the number.
pub fn cycle_value(app: &mut AppState, delta: isize) {
    match &mut app.mode {
        AppMode::QuestionDialog(d) => match d.field {
            DialogField::Kind => {
                let kind = cycled(&QuestionType::ALL, d.draft.kind, delta);
                d.draft.set_kind(kind, app.ids.as_mut());
                d.clamp_focus();
            }
            DialogField::Score => {
                d.draft.score = if delta > 0 {
                    (d.draft.score + 1).min(MAX_SCORE)
                } else {
                    d.draft.score.saturating_sub(1)
                };
            }
            _ => {}
        },
        AppMode::PaperDialog(d) => {
            if d.field == PaperField::Kind {
                d.form.paper_type = cycled(&PaperType::ALL, d.form.paper_type, delta);
            }
        }
        _ => {}
    }
}

fn cycled<T: Copy + PartialEq>(all: &[T], current: T, delta: isize) -> T {
    let len = all.len() as isize;
    let pos = all.iter().position(|&v| v == current).unwrap_or(0) as isize;
    all[((pos + delta + len) % len) as usize]
}

/// Space on a choice row: radio-style selection for single-choice, a
/// per-choice flag toggle for multiple-choice.
pub fn toggle_correct(app: &mut AppState) {
    let AppMode::QuestionDialog(d) = &mut app.mode else {
        return;
    };
    let DialogField::Choice(i) = d.field else {
        return;
    };
    let result = match d.draft.kind {
        QuestionType::SingleChoice => d.draft.mark_correct(i),
        QuestionType::MultipleChoice => {
            let current = d
                .draft
                .choices
                .as_ref()
                .and_then(|cs| cs.get(i))
                .map(|c| c.correct)
                .unwrap_or(false);
            d.draft.set_choice_correct(i, !current)
        }
        QuestionType::ShortAnswer => return,
    };
    if let Err(err) = result {
        app.set_message(err.to_string());
    }
}

pub fn add_choice(app: &mut AppState) {
    let AppMode::QuestionDialog(d) = &mut app.mode else {
        return;
    };
    if !d.draft.kind.has_choices() {
        app.set_message("Short-answer questions have no choices");
        return;
    }
    d.draft.add_choice(app.ids.as_mut());
    d.field = DialogField::Choice(d.draft.choice_count() - 1);
}

pub fn remove_choice(app: &mut AppState) {
    let AppMode::QuestionDialog(d) = &mut app.mode else {
        return;
    };
    let DialogField::Choice(i) = d.field else {
        app.set_message("Focus a choice to remove it");
        return;
    };
    match d.draft.remove_choice(i) {
        Ok(()) => d.clamp_focus(),
        Err(err) => app.set_message(err.to_string()),
    }
}

/// Attaches a placeholder image reference to whatever the focused field
/// belongs to: the question, a choice, or the analysis.
pub fn upload_image(app: &mut AppState) {
    let AppMode::QuestionDialog(d) = &mut app.mode else {
        return;
    };
    let url = app.uploader.upload();
    let result = match d.field {
        DialogField::Content => {
            d.draft.image = Some(url);
            Ok(())
        }
        DialogField::Analysis => {
            d.draft.analysis_image = Some(url);
            Ok(())
        }
        DialogField::Choice(i) => d.draft.set_choice_image(i, url),
        DialogField::Kind | DialogField::Score => {
            app.set_message("This field has no image slot");
            return;
        }
    };
    if let Err(err) = result {
        app.set_message(err.to_string());
    }
}

pub fn save_dialog(app: &mut AppState) {
    match &app.mode {
        AppMode::QuestionDialog(_) => save_question_dialog(app),
        AppMode::PaperDialog(_) => save_paper_dialog(app),
        _ => {}
    }
}

fn save_question_dialog(app: &mut AppState) {
    let AppMode::QuestionDialog(dialog) = std::mem::replace(&mut app.mode, AppMode::PaperDetail)
    else {
        return;
    };
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let Some(category) = session.categories.get_mut(dialog.category_index) else {
        return;
    };
    let editing = dialog.editing_index;
    match category.save_question(dialog.draft, editing) {
        Ok(()) => {
            let saved_at = editing.unwrap_or(category.questions.len() - 1);
            let name = category.name.clone();
            session.cursor = SessionCursor {
                category: dialog.category_index,
                question: Some(saved_at),
            };
            session.collapsed[dialog.category_index] = false;
            app.set_message(if editing.is_some() {
                format!("Question updated in {}", name)
            } else {
                format!("Question added to {}", name)
            });
        }
        Err(err) => app.set_message(err.to_string()),
    }
}

fn save_paper_dialog(app: &mut AppState) {
    let AppMode::PaperDialog(dialog) = &app.mode else {
        return;
    };
    if let Err(message) = dialog.form.validate() {
        // Invalid input keeps the dialog open.
        app.set_message(message);
        return;
    }
    let AppMode::PaperDialog(dialog) = std::mem::replace(&mut app.mode, AppMode::PaperList) else {
        return;
    };
    let id = app.store.create_paper(&dialog.form, app.ids.as_mut());
    if let Some(index) = app.store.papers().iter().position(|p| p.id == id) {
        app.list_index = index;
    }
    app.set_message(format!("Created paper {:?}", dialog.form.name.trim()));
}

/// Discards the dialog draft without touching the underlying data.
pub fn cancel_dialog(app: &mut AppState) {
    match app.mode {
        AppMode::QuestionDialog(_) => app.mode = AppMode::PaperDetail,
        AppMode::PaperDialog(_) => app.mode = AppMode::PaperList,
        _ => {}
    }
}
