use crate::app::{
    AppMode, AppState, ConfirmAction, DetailTab, DialogField, QuestionDialog, SessionCursor,
};
use crate::model::Question;
use crate::store::{self, PaperStore};

pub fn switch_tab(app: &mut AppState) {
    if let Some(session) = app.session.as_mut() {
        session.tab = session.tab.other();
    }
}

/// Leaves the detail view. The editing session and anything unsaved in it
/// are discarded.
pub fn close_detail(app: &mut AppState) {
    app.session = None;
    app.mode = AppMode::PaperList;
}

/// Visible rows of the questions tab in render order: each category header
/// followed by its questions unless collapsed.
fn visible_rows(session: &crate::app::EditSession) -> Vec<SessionCursor> {
    let mut rows = Vec::new();
    for (ci, category) in session.categories.iter().enumerate() {
        rows.push(SessionCursor {
            category: ci,
            question: None,
        });
        if !session.collapsed[ci] {
            for qi in 0..category.questions.len() {
                rows.push(SessionCursor {
                    category: ci,
                    question: Some(qi),
                });
            }
        }
    }
    rows
}

fn move_cursor(app: &mut AppState, delta: isize) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    if session.tab != DetailTab::Questions {
        return;
    }
    let rows = visible_rows(session);
    if rows.is_empty() {
        return;
    }
    let pos = rows
        .iter()
        .position(|&row| row == session.cursor)
        .unwrap_or(0) as isize;
    let next = (pos + delta).clamp(0, rows.len() as isize - 1) as usize;
    session.cursor = rows[next];
}

pub fn cursor_up(app: &mut AppState) {
    move_cursor(app, -1);
}

pub fn cursor_down(app: &mut AppState) {
    move_cursor(app, 1);
}

pub fn toggle_category(app: &mut AppState) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    if session.tab != DetailTab::Questions {
        return;
    }
    let ci = session.cursor.category;
    session.collapsed[ci] = !session.collapsed[ci];
    if session.collapsed[ci] {
        session.cursor.question = None;
    }
}

/// Opens the question dialog with a fresh draft for the cursor's category.
pub fn open_add_dialog(app: &mut AppState) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    if session.tab != DetailTab::Questions {
        return;
    }
    let category_index = session.cursor.category;
    let mut draft = Question::draft(app.ids.as_mut());
    draft.score = app.config.default_score;
    app.mode = AppMode::QuestionDialog(QuestionDialog {
        category_index,
        editing_index: None,
        draft,
        field: DialogField::Kind,
    });
}

/// Opens the question dialog seeded with a copy of the question under the
/// cursor. The category's own entry stays untouched until save.
pub fn open_edit_dialog(app: &mut AppState) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    if session.tab != DetailTab::Questions {
        return;
    }
    let ci = session.cursor.category;
    let Some(qi) = session.cursor.question else {
        app.set_message("Select a question to edit");
        return;
    };
    let draft = session.categories[ci].questions[qi].clone();
    app.mode = AppMode::QuestionDialog(QuestionDialog {
        category_index: ci,
        editing_index: Some(qi),
        draft,
        field: DialogField::Kind,
    });
}

pub fn request_delete_question(app: &mut AppState) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    if session.tab != DetailTab::Questions {
        return;
    }
    let ci = session.cursor.category;
    let Some(qi) = session.cursor.question else {
        app.set_message("Select a question to delete");
        return;
    };
    if app.config.confirm_delete {
        app.mode = AppMode::Confirm(ConfirmAction::DeleteQuestion {
            category_index: ci,
            question_index: qi,
        });
    } else {
        delete_question_at(app, ci, qi);
    }
}

pub fn delete_question_at(app: &mut AppState, category_index: usize, question_index: usize) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let Some(category) = session.categories.get_mut(category_index) else {
        return;
    };
    match category.remove_question(question_index) {
        Ok(()) => {
            let remaining = category.questions.len();
            session.cursor = SessionCursor {
                category: category_index,
                question: if remaining == 0 {
                    None
                } else {
                    Some(question_index.min(remaining - 1))
                },
            };
            app.set_message("Question removed");
        }
        Err(err) => app.set_message(err.to_string()),
    }
}

/// Hands the session's categories to the persistence boundary.
pub fn submit_paper(app: &mut AppState) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let summary = store::submission_summary(&session.categories);
    match app
        .store
        .submit_questions(session.paper_id, &session.categories)
    {
        Ok(()) => app.set_message(summary),
        Err(err) => app.set_message(err.to_string()),
    }
}
