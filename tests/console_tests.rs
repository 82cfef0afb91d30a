mod common;

use common::{run, test_app, type_str};
use paperdesk::actions::Action;
use paperdesk::app::AppMode;
use paperdesk::model::PaperStatus;
use paperdesk::store::PaperStore;

#[test]
fn test_paper_creation_flow() {
    let mut app = test_app();

    run(&mut app, &[Action::NewPaper]);
    type_str(&mut app, "Autumn Mock Exam");
    run(&mut app, &[Action::NextField, Action::CycleNext]);
    run(&mut app, &[Action::NextField]);
    type_str(&mut app, "Covers all categories");
    run(&mut app, &[Action::SaveDialog]);

    assert!(matches!(app.mode, AppMode::PaperList));
    let papers = app.store.papers();
    assert_eq!(papers.len(), 4);
    let created = &papers[app.list_index];
    assert_eq!(created.name, "Autumn Mock Exam");
    assert_eq!(created.paper_type.label(), "Practice");
    assert_eq!(created.question_count, 0);
}

#[test]
fn test_too_short_name_is_rejected_inline() {
    let mut app = test_app();

    run(&mut app, &[Action::NewPaper]);
    type_str(&mut app, "A");
    run(&mut app, &[Action::SaveDialog]);

    assert!(matches!(app.mode, AppMode::PaperDialog(_)));
    assert!(app.message.as_deref().unwrap().contains("at least"));
    assert_eq!(app.store.papers().len(), 3);

    run(&mut app, &[Action::CancelDialog]);
    assert!(matches!(app.mode, AppMode::PaperList));
    assert_eq!(app.store.papers().len(), 3);
}

#[test]
fn test_paper_delete_with_confirmation() {
    let mut app = test_app();
    let first = app.store.papers()[0].id;

    run(&mut app, &[Action::DeletePaper]);
    assert!(matches!(app.mode, AppMode::Confirm(_)));

    run(&mut app, &[Action::ConfirmNo]);
    assert_eq!(app.store.papers().len(), 3);

    run(&mut app, &[Action::DeletePaper, Action::ConfirmYes]);
    assert_eq!(app.store.papers().len(), 2);
    assert!(app.store.paper(first).is_none());
}

#[test]
fn test_status_toggle_from_list() {
    let mut app = test_app();

    run(&mut app, &[Action::ListDown, Action::ToggleStatus]);

    let papers = app.store.papers();
    assert_eq!(papers[1].status, PaperStatus::Disabled);
    assert_eq!(papers[0].status, PaperStatus::Enabled);
}

#[test]
fn test_detail_session_is_per_visit() {
    let mut app = test_app();

    run(&mut app, &[Action::OpenPaper, Action::SwitchTab]);
    run(&mut app, &[Action::AddQuestion, Action::SaveDialog]);
    assert_eq!(
        app.session.as_ref().unwrap().categories[0].questions.len(),
        1
    );

    run(&mut app, &[Action::Back]);
    assert!(app.session.is_none());

    run(&mut app, &[Action::OpenPaper]);
    let session = app.session.as_ref().unwrap();
    assert!(session.categories.iter().all(|c| c.questions.is_empty()));
}

#[test]
fn test_help_overlay_round_trip() {
    let mut app = test_app();

    run(&mut app, &[Action::ShowHelp]);
    assert!(matches!(app.mode, AppMode::Help));
    run(&mut app, &[Action::CloseHelp]);
    assert!(matches!(app.mode, AppMode::PaperList));

    run(&mut app, &[Action::OpenPaper, Action::ShowHelp, Action::CloseHelp]);
    assert!(matches!(app.mode, AppMode::PaperDetail));
}

#[test]
fn test_quit_stops_the_loop() {
    let mut app = test_app();
    assert!(app.running);
    run(&mut app, &[Action::Quit]);
    assert!(!app.running);
}
