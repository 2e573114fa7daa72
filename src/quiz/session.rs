use crate::quiz::{Country, CHOICES, COUNTRIES, POINTS_PER_CORRECT, ROUNDS_PER_GAME};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngExt, SeedableRng};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("the game is finished, restart to play again")]
    Finished,
    #[error("round {round} has already been answered")]
    AlreadyAnswered { round: u32 },
}

/// Result of picking a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct { country: Country },
    Incorrect { picked: Country, correct: Country },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct { .. })
    }

    /// Headline for the result dialog.
    pub fn title(&self) -> String {
        match self {
            AnswerOutcome::Correct { .. } => "Correct".to_string(),
            AnswerOutcome::Incorrect { picked, .. } => format!("Wrong, that's the {} flag", picked),
        }
    }
}

impl fmt::Display for AnswerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerOutcome::Correct { .. } => write!(f, "correct"),
            AnswerOutcome::Incorrect { correct, .. } => {
                write!(f, "incorrect, correct country was {}", correct)
            }
        }
    }
}

/// The three flags on offer this round and which one is right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    choices: [Country; CHOICES],
    correct: usize,
    selected: Option<usize>,
}

impl Round {
    /// Choices in presentation order.
    pub fn choices(&self) -> &[Country; CHOICES] {
        &self.choices
    }

    pub fn correct_index(&self) -> usize {
        self.correct
    }

    /// The country whose name is shown as the question.
    pub fn correct_country(&self) -> Country {
        self.choices[self.correct]
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn outcome(&self) -> Option<AnswerOutcome> {
        self.selected.map(|picked| {
            if picked == self.correct {
                AnswerOutcome::Correct {
                    country: self.correct_country(),
                }
            } else {
                AnswerOutcome::Incorrect {
                    picked: self.choices[picked],
                    correct: self.correct_country(),
                }
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Finished { final_score: u32, max_streak: u32 },
}

/// One game of eight rounds plus the bookkeeping that carries between games.
///
/// The session is the only owner of scoring state; the UI reads it through
/// the accessors and mutates it only through the operations below.
pub struct QuizSession {
    pool: &'static [Country],
    used: HashSet<Country>,
    round: Round,
    round_number: u32,
    score: u32,
    streak: u32,
    max_streak: u32,
    phase: Phase,
    rng: StdRng,
}

impl QuizSession {
    /// New session seeded from the thread RNG, with the first round drawn.
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// New session whose draws are fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let pool: &'static [Country] = &COUNTRIES;
        let mut used = HashSet::new();
        let round = draw_round(pool, &mut used, &mut rng);
        Self {
            pool,
            used,
            round,
            round_number: 1,
            score: 0,
            streak: 0,
            max_streak: 0,
            phase: Phase::Active,
            rng,
        }
    }

    /// Forget which countries were shown and draw round 1.
    pub fn start_game(&mut self) {
        self.round_number = 1;
        self.phase = Phase::Active;
        self.used.clear();
        self.ask_question();
        info!(round = self.round_number, "game started");
    }

    /// Draw the next three flags and the correct slot.
    pub fn ask_question(&mut self) {
        self.round = draw_round(self.pool, &mut self.used, &mut self.rng);
        debug!(
            round = self.round_number,
            choices = ?self.round.choices,
            correct = self.round.correct,
            unused = self.unused_count(),
            "round drawn"
        );
    }

    /// Record the player's pick for the current round.
    ///
    /// # Panics
    ///
    /// Panics if `selected` is not one of the offered slots (`0..CHOICES`).
    /// Callers only ever pass indices of flags they displayed.
    pub fn answer(&mut self, selected: usize) -> Result<AnswerOutcome, QuizError> {
        assert!(
            selected < CHOICES,
            "answer index {} out of range 0..{}",
            selected,
            CHOICES
        );
        if self.is_finished() {
            return Err(QuizError::Finished);
        }
        if self.round.is_answered() {
            return Err(QuizError::AlreadyAnswered {
                round: self.round_number,
            });
        }

        self.round.selected = Some(selected);
        let outcome = if selected == self.round.correct {
            self.score += POINTS_PER_CORRECT;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
            AnswerOutcome::Correct {
                country: self.round.correct_country(),
            }
        } else {
            self.streak = 0;
            AnswerOutcome::Incorrect {
                picked: self.round.choices[selected],
                correct: self.round.correct_country(),
            }
        };
        info!(
            round = self.round_number,
            score = self.score,
            streak = self.streak,
            "answer {}",
            outcome
        );
        Ok(outcome)
    }

    /// Advance to the next round, or finish the game after the last one.
    pub fn next_round(&mut self) -> Result<Phase, QuizError> {
        if self.is_finished() {
            return Err(QuizError::Finished);
        }

        self.round_number += 1;
        if self.round_number > ROUNDS_PER_GAME {
            self.phase = Phase::Finished {
                final_score: self.score,
                max_streak: self.max_streak,
            };
            info!(
                final_score = self.score,
                max_streak = self.max_streak,
                "game finished"
            );
        } else {
            self.ask_question();
        }
        Ok(self.phase)
    }

    /// Reset every counter and start a new game.
    pub fn restart(&mut self) {
        self.round_number = 1;
        self.score = 0;
        self.streak = 0;
        self.max_streak = 0;
        self.used.clear();
        self.phase = Phase::Active;
        self.ask_question();
        info!("game restarted");
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// 1-based round counter. Reads `ROUNDS_PER_GAME + 1` once finished.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    /// Countries that can still appear before the pool is recycled.
    pub fn unused_count(&self) -> usize {
        self.pool.len() - self.used.len()
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_round(pool: &[Country], used: &mut HashSet<Country>, rng: &mut StdRng) -> Round {
    let mut available: Vec<Country> = pool
        .iter()
        .copied()
        .filter(|c| !used.contains(c))
        .collect();

    if available.len() < CHOICES {
        debug!(remaining = available.len(), "pool exhausted, recycling countries");
        used.clear();
        available = pool.to_vec();
    }

    available.shuffle(rng);
    let choices = [available[0], available[1], available[2]];
    let correct = rng.random_range(0..CHOICES);
    used.extend(choices);

    Round {
        choices,
        correct,
        selected: None,
    }
}
