mod dialog;
mod paper;
mod question;

use crate::app::{AppMode, AppState, ConfirmAction};
use anyhow::Result;

pub use dialog::*;
pub use paper::*;
pub use question::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Application control
    Quit,
    ShowHelp,
    CloseHelp,

    // Paper list
    ListUp,
    ListDown,
    OpenPaper,
    NewPaper,
    DeletePaper,
    ToggleStatus,

    // Paper detail
    SwitchTab,
    Back,
    DetailUp,
    DetailDown,
    ToggleCategory,
    AddQuestion,
    EditQuestion,
    DeleteQuestion,
    SubmitPaper,

    // Dialogs
    NextField,
    PrevField,
    TypeChar(char),
    Backspace,
    CycleNext,
    CyclePrev,
    ToggleCorrect,
    AddChoice,
    RemoveChoice,
    UploadImage,
    SaveDialog,
    CancelDialog,

    // Confirmation prompt
    ConfirmYes,
    ConfirmNo,
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    // Any keypress clears a stale status message.
    app.clear_message();

    match action {
        Action::Quit => app.running = false,
        Action::ShowHelp => app.mode = AppMode::Help,
        Action::CloseHelp => {
            app.mode = if app.session.is_some() {
                AppMode::PaperDetail
            } else {
                AppMode::PaperList
            };
        }

        Action::ListUp => paper::list_up(app),
        Action::ListDown => paper::list_down(app),
        Action::OpenPaper => paper::open_paper(app),
        Action::NewPaper => paper::new_paper(app),
        Action::DeletePaper => paper::request_delete_paper(app),
        Action::ToggleStatus => paper::toggle_status(app),

        Action::SwitchTab => question::switch_tab(app),
        Action::Back => question::close_detail(app),
        Action::DetailUp => question::cursor_up(app),
        Action::DetailDown => question::cursor_down(app),
        Action::ToggleCategory => question::toggle_category(app),
        Action::AddQuestion => question::open_add_dialog(app),
        Action::EditQuestion => question::open_edit_dialog(app),
        Action::DeleteQuestion => question::request_delete_question(app),
        Action::SubmitPaper => question::submit_paper(app),

        Action::NextField => dialog::focus_next(app),
        Action::PrevField => dialog::focus_prev(app),
        Action::TypeChar(c) => dialog::type_char(app, c),
        Action::Backspace => dialog::backspace(app),
        Action::CycleNext => dialog::cycle_value(app, 1),
        Action::CyclePrev => dialog::cycle_value(app, -1),
        Action::ToggleCorrect => dialog::toggle_correct(app),
        Action::AddChoice => dialog::add_choice(app),
        Action::RemoveChoice => dialog::remove_choice(app),
        Action::UploadImage => dialog::upload_image(app),
        Action::SaveDialog => dialog::save_dialog(app),
        Action::CancelDialog => dialog::cancel_dialog(app),

        Action::ConfirmYes => confirm_yes(app),
        Action::ConfirmNo => confirm_no(app),
    }
    Ok(())
}

fn confirm_yes(app: &mut AppState) {
    if let AppMode::Confirm(pending) = app.mode {
        match pending {
            ConfirmAction::DeletePaper { index } => {
                app.mode = AppMode::PaperList;
                paper::delete_paper_at(app, index);
            }
            ConfirmAction::DeleteQuestion {
                category_index,
                question_index,
            } => {
                app.mode = AppMode::PaperDetail;
                question::delete_question_at(app, category_index, question_index);
            }
        }
    }
}

fn confirm_no(app: &mut AppState) {
    if let AppMode::Confirm(pending) = app.mode {
        app.mode = match pending {
            ConfirmAction::DeletePaper { .. } => AppMode::PaperList,
            ConfirmAction::DeleteQuestion { .. } => AppMode::PaperDetail,
        };
    }
}
