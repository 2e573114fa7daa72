use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::quiz::session::Phase;
use crate::quiz::CHOICES;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    // Redraw on the tick that uncovers a flag.
    let was_revealing = state.reveal_in_progress();
    state.tick_count = state.tick_count.wrapping_add(1);
    if was_revealing {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global: Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.dialog() {
        Some(Dialog::RoundResult { .. }) => handle_result_key(key),
        Some(Dialog::FinalScore { .. }) => handle_final_key(key),
        None => handle_board_key(state, key),
    }
}

fn handle_board_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let choice = c as usize - '1' as usize;
            if choice < CHOICES {
                vec![Action::Answer { choice }]
            } else {
                vec![]
            }
        }
        KeyCode::Left | KeyCode::Up => {
            state.move_highlight_left();
            vec![]
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
            state.move_highlight_right();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => vec![Action::Answer {
            choice: state.highlighted,
        }],
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_result_key(key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => vec![Action::NextRound],
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_final_key(key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => vec![Action::Restart],
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

/// Apply an action to the session and screen state.
pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::Answer { choice } => match state.session.answer(choice) {
            Ok(outcome) => {
                state.highlighted = choice;
                debug!(choice, %outcome, "flag picked");
            }
            Err(e) => {
                warn!(error = %e, choice, "answer ignored");
                state.status_message = Some(e.to_string());
            }
        },
        Action::NextRound => match state.session.next_round() {
            Ok(Phase::Active) => state.begin_round(),
            Ok(Phase::Finished { .. }) => {}
            Err(e) => {
                warn!(error = %e, "next round ignored");
                state.status_message = Some(e.to_string());
            }
        },
        Action::Restart => {
            state.session.restart();
            state.begin_round();
        }
        Action::Quit => {
            state.should_quit = true;
        }
    }
    state.dirty = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::quiz::ROUNDS_PER_GAME;

    fn seeded_state() -> AppState {
        let mut config = AppConfig::default();
        config.game.seed = Some(2024);
        AppState::new(config)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn press(state: &mut AppState, code: KeyCode) {
        for action in handle_event(state, key(code)) {
            apply_action(state, action);
        }
    }

    #[test]
    fn test_digit_keys_pick_flags() {
        let mut state = seeded_state();
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Char('1'))),
            vec![Action::Answer { choice: 0 }]
        );
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Char('3'))),
            vec![Action::Answer { choice: 2 }]
        );
        assert!(handle_event(&mut state, key(KeyCode::Char('4'))).is_empty());
        assert!(handle_event(&mut state, key(KeyCode::Char('0'))).is_empty());
    }

    #[test]
    fn test_enter_picks_highlighted() {
        let mut state = seeded_state();
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Enter)),
            vec![Action::Answer { choice: 2 }]
        );
    }

    #[test]
    fn test_answer_then_continue() {
        let mut state = seeded_state();
        let correct = state.session.round().correct_index();
        press(&mut state, KeyCode::Char(char::from(b'1' + correct as u8)));

        assert!(matches!(state.dialog(), Some(Dialog::RoundResult { .. })));
        assert_eq!(state.session.score(), 10);

        // Digits are ignored while the result dialog is up.
        assert!(handle_event(&mut state, key(KeyCode::Char('1'))).is_empty());

        state.tick_count = 30;
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.dialog(), None);
        assert_eq!(state.session.round_number(), 2);
        assert_eq!(state.round_started_at, 30);
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_full_game_and_restart() {
        let mut state = seeded_state();
        for _ in 0..ROUNDS_PER_GAME {
            let wrong = (state.session.round().correct_index() + 1) % CHOICES;
            press(&mut state, KeyCode::Char(char::from(b'1' + wrong as u8)));
            press(&mut state, KeyCode::Enter);
        }
        assert_eq!(
            state.dialog(),
            Some(Dialog::FinalScore {
                score: 0,
                max_streak: 0
            })
        );

        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.dialog(), None);
        assert_eq!(state.session.round_number(), 1);
        assert_eq!(state.session.score(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = seeded_state();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Action::Quit]);

        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);

        apply_action(&mut state, Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_dialog_keys() {
        let mut state = seeded_state();
        apply_action(&mut state, Action::Answer { choice: 0 });
        assert!(handle_event(&mut state, key(KeyCode::Esc)).is_empty());
        assert!(handle_event(&mut state, key(KeyCode::Char('c'))).is_empty());
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Char(' '))),
            vec![Action::NextRound]
        );
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);

        while !state.session.is_finished() {
            apply_action(&mut state, Action::NextRound);
        }
        assert!(handle_event(&mut state, key(KeyCode::Esc)).is_empty());
        assert_eq!(handle_event(&mut state, key(KeyCode::Enter)), vec![Action::Restart]);
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
    }

    #[test]
    fn test_repeated_answer_is_ignored() {
        let mut state = seeded_state();
        apply_action(&mut state, Action::Answer { choice: 0 });
        let score = state.session.score();
        apply_action(&mut state, Action::Answer { choice: 1 });
        assert_eq!(state.session.score(), score);
        assert_eq!(state.session.round().selected_index(), Some(0));
        assert_eq!(
            state.status_message.as_deref(),
            Some("round 1 has already been answered")
        );
    }

    #[test]
    fn test_tick_marks_dirty_while_revealing() {
        let mut state = seeded_state();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
        assert_eq!(state.tick_count, 1);

        state.tick_count = 100;
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);
    }
}
