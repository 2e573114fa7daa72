#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Answer { choice: usize },
    NextRound,
    Restart,
    Quit,
}
