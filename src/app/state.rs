use crate::config::AppConfig;
use crate::quiz::session::{AnswerOutcome, Phase, QuizSession};
use crate::quiz::CHOICES;

/// Ticks (50ms each) before the first flag appears.
const REVEAL_DELAY_TICKS: u64 = 2;
/// Ticks between consecutive flags appearing.
const REVEAL_STAGGER_TICKS: u64 = 4;

/// Modal shown over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// The round has been answered; Enter continues.
    RoundResult { outcome: AnswerOutcome, score: u32 },
    /// All rounds played; Enter restarts.
    FinalScore { score: u32, max_streak: u32 },
}

pub struct AppState {
    pub config: AppConfig,
    pub session: QuizSession,
    /// Flag card under the keyboard cursor.
    pub highlighted: usize,
    pub tick_count: u64,
    /// Tick at which the current round was put on screen.
    pub round_started_at: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let session = match config.game.seed {
            Some(seed) => QuizSession::with_seed(seed),
            None => QuizSession::new(),
        };
        Self {
            config,
            session,
            highlighted: 0,
            tick_count: 0,
            round_started_at: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    /// Reset per-round screen state after the session drew a new round.
    pub fn begin_round(&mut self) {
        self.highlighted = 0;
        self.round_started_at = self.tick_count;
        self.status_message = None;
        self.dirty = true;
    }

    /// The dialog the session state calls for, if any.
    pub fn dialog(&self) -> Option<Dialog> {
        if let Phase::Finished {
            final_score,
            max_streak,
        } = self.session.phase()
        {
            return Some(Dialog::FinalScore {
                score: final_score,
                max_streak,
            });
        }
        self.session
            .round()
            .outcome()
            .map(|outcome| Dialog::RoundResult {
                outcome,
                score: self.session.score(),
            })
    }

    pub fn move_highlight_left(&mut self) {
        self.highlighted = (self.highlighted + CHOICES - 1) % CHOICES;
        self.dirty = true;
    }

    pub fn move_highlight_right(&mut self) {
        self.highlighted = (self.highlighted + 1) % CHOICES;
        self.dirty = true;
    }

    /// Whether flag `index` has appeared yet this round.
    pub fn flag_visible(&self, index: usize) -> bool {
        if !self.config.ui.animate_flags || self.session.round().is_answered() {
            return true;
        }
        let elapsed = self.tick_count.saturating_sub(self.round_started_at);
        elapsed >= REVEAL_DELAY_TICKS + index as u64 * REVEAL_STAGGER_TICKS
    }

    /// True while some flag of the current round is still hidden.
    pub fn reveal_in_progress(&self) -> bool {
        !self.flag_visible(CHOICES - 1)
    }

    /// Country names under the cards are hidden until the round is decided.
    pub fn show_flag_names(&self) -> bool {
        self.config.ui.show_flag_names || self.session.round().is_answered()
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.dialog() {
            Some(Dialog::RoundResult { .. }) => "Enter: continue | q: quit".to_string(),
            Some(Dialog::FinalScore { .. }) => "Enter/r: restart | q: quit".to_string(),
            None => "1-3: pick | ←/→: move | Enter: pick highlighted | q: quit".to_string(),
        }
    }
}
