use paperdesk::actions::{execute_action, Action};
use paperdesk::app::AppState;
use paperdesk::config::AppConfig;
use paperdesk::model::{RandomIds, SequentialIds};
use paperdesk::store::{MemoryStore, PlaceholderUploader};

/// An app over the sample store with deterministic model identifiers.
pub fn test_app() -> AppState {
    let mut seed_ids = SequentialIds::default();
    let store = MemoryStore::with_samples(&mut seed_ids);
    AppState::with_parts(
        AppConfig::default(),
        Box::new(store),
        Box::new(PlaceholderUploader),
        Box::new(RandomIds),
    )
}

pub fn run(app: &mut AppState, actions: &[Action]) {
    for &action in actions {
        execute_action(action, app).expect("action failed");
    }
}

#[allow(dead_code)]
pub fn type_str(app: &mut AppState, text: &str) {
    for c in text.chars() {
        execute_action(Action::TypeChar(c), app).expect("type failed");
    }
}

/// Opens the first paper and lands on the questions tab.
#[allow(dead_code)]
pub fn open_questions_tab(app: &mut AppState) {
    run(app, &[Action::OpenPaper, Action::SwitchTab]);
}
