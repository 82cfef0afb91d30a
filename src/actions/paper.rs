use crate::app::{AppMode, AppState, ConfirmAction, PaperDialog};
use crate::model::PaperStatus;
use crate::store::PaperStore;

pub fn list_up(app: &mut AppState) {
    if app.list_index > 0 {
        app.list_index -= 1;
    }
}

pub fn list_down(app: &mut AppState) {
    let count = app.store.papers().len();
    if count > 0 && app.list_index < count - 1 {
        app.list_index += 1;
    }
}

/// Opens the selected paper's detail view and seeds a fresh editing session.
pub fn open_paper(app: &mut AppState) {
    let Some(paper_id) = app.selected_paper().map(|p| p.id) else {
        app.set_message("No paper selected");
        return;
    };
    app.session = Some(crate::app::EditSession::open(paper_id, app.ids.as_mut()));
    app.mode = AppMode::PaperDetail;
}

pub fn new_paper(app: &mut AppState) {
    app.mode = AppMode::PaperDialog(PaperDialog::new());
}

pub fn request_delete_paper(app: &mut AppState) {
    if app.selected_paper().is_none() {
        app.set_message("No paper selected");
        return;
    }
    if app.config.confirm_delete {
        app.mode = AppMode::Confirm(ConfirmAction::DeletePaper {
            index: app.list_index,
        });
    } else {
        delete_paper_at(app, app.list_index);
    }
}

pub fn delete_paper_at(app: &mut AppState, index: usize) {
    let Some(paper) = app.store.papers().get(index) else {
        return;
    };
    let (id, name) = (paper.id, paper.name.clone());
    match app.store.delete_paper(id) {
        Ok(()) => {
            let count = app.store.papers().len();
            if count > 0 && app.list_index >= count {
                app.list_index = count - 1;
            }
            app.set_message(format!("Deleted paper {:?}", name));
        }
        Err(err) => app.set_message(err.to_string()),
    }
}

pub fn toggle_status(app: &mut AppState) {
    let Some(paper) = app.selected_paper() else {
        return;
    };
    let (id, status) = (paper.id, paper.status);
    let flipped = match status {
        PaperStatus::Enabled => PaperStatus::Disabled,
        PaperStatus::Disabled => PaperStatus::Enabled,
    };
    if let Err(err) = app.store.set_status(id, flipped) {
        app.set_message(err.to_string());
    }
}
