use crate::actions::Action;
use crate::app::{AppMode, AppState};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

pub fn handle_events(app: &mut AppState) -> Result<Option<Action>> {
    if event::poll(Duration::from_millis(app.config.poll_interval_ms))? {
        if let Event::Key(key) = event::read()? {
            return Ok(handle_key_event(app, key));
        }
    }
    Ok(None)
}

fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    match &app.mode {
        AppMode::PaperList => handle_list_mode(key),
        AppMode::PaperDetail => handle_detail_mode(key),
        AppMode::QuestionDialog(_) | AppMode::PaperDialog(_) => handle_dialog_mode(key),
        AppMode::Confirm(_) => handle_confirm_mode(key),
        AppMode::Help => handle_help_mode(key),
    }
}

fn handle_list_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('q'), KeyModifiers::NONE) | (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (Char('?'), _) => Some(Action::ShowHelp),

        (Char('k'), KeyModifiers::NONE) | (Up, _) => Some(Action::ListUp),
        (Char('j'), KeyModifiers::NONE) | (Down, _) => Some(Action::ListDown),

        (Enter, KeyModifiers::NONE) | (Char('l'), KeyModifiers::NONE) => Some(Action::OpenPaper),
        (Char('n'), KeyModifiers::NONE) => Some(Action::NewPaper),
        (Char('d'), KeyModifiers::NONE) => Some(Action::DeletePaper),
        (Char('t'), KeyModifiers::NONE) => Some(Action::ToggleStatus),

        _ => None,
    }
}

fn handle_detail_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('q'), KeyModifiers::NONE) | (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (Char('?'), _) => Some(Action::ShowHelp),
        (Esc, _) | (Char('h'), KeyModifiers::NONE) => Some(Action::Back),

        (Tab, KeyModifiers::NONE) | (Char('t'), KeyModifiers::NONE) => Some(Action::SwitchTab),

        (Char('k'), KeyModifiers::NONE) | (Up, _) => Some(Action::DetailUp),
        (Char('j'), KeyModifiers::NONE) | (Down, _) => Some(Action::DetailDown),
        (Char(' '), KeyModifiers::NONE) => Some(Action::ToggleCategory),

        (Char('a'), KeyModifiers::NONE) => Some(Action::AddQuestion),
        (Char('e'), KeyModifiers::NONE) | (Enter, KeyModifiers::NONE) => Some(Action::EditQuestion),
        (Char('d'), KeyModifiers::NONE) => Some(Action::DeleteQuestion),
        (Char('s'), KeyModifiers::NONE) => Some(Action::SubmitPaper),

        _ => None,
    }
}

fn handle_dialog_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Esc, _) => Some(Action::CancelDialog),
        (Enter, KeyModifiers::NONE) => Some(Action::SaveDialog),

        (Tab, KeyModifiers::NONE) | (Down, _) => Some(Action::NextField),
        (BackTab, _) | (Up, _) => Some(Action::PrevField),
        (Left, _) => Some(Action::CyclePrev),
        (Right, _) => Some(Action::CycleNext),

        (Char('t'), KeyModifiers::CONTROL) => Some(Action::ToggleCorrect),
        (Char('a'), KeyModifiers::CONTROL) => Some(Action::AddChoice),
        (Char('d'), KeyModifiers::CONTROL) => Some(Action::RemoveChoice),
        (Char('u'), KeyModifiers::CONTROL) => Some(Action::UploadImage),
        (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),

        (Char(c), KeyModifiers::NONE) | (Char(c), KeyModifiers::SHIFT) => {
            Some(Action::TypeChar(c))
        }
        (Backspace, _) => Some(Action::Backspace),

        _ => None,
    }
}

fn handle_confirm_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match key.code {
        Char('y') | Char('Y') | Enter => Some(Action::ConfirmYes),
        Char('n') | Char('N') | Esc => Some(Action::ConfirmNo),
        _ => None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match key.code {
        Esc | Char('q') | Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}
