//! Scoring around one generated challenge set.
//!
//! The player edits the guess of the current challenge and presses Check. A correct answer on the
//! first try earns 2 points, on the second try 1 point. A second wrong answer leaves only Show Answer,
//! which reveals the ground truth for 0 points. Next moves to the following challenge.
use crate::Game::challenge::{Challenge, MAX_POINTS};
use log::{info, warn};

/// what the player can do with the current challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// the guess is being edited
    Check,
    /// first answer was wrong
    TryAgain,
    /// second answer was wrong
    ShowAnswer,
    /// answered or revealed
    Next,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    level: usize,
    challenges: Vec<Challenge>,
    index: usize,
    attempts: u32,
    state: PlayState,
}

impl GameSession {
    pub fn new(level: usize, challenges: Vec<Challenge>) -> Self {
        info!("level {} started with {} challenges", level + 1, challenges.len());
        Self {
            level,
            challenges,
            index: 0,
            attempts: 0,
            state: PlayState::Check,
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }
    pub fn state(&self) -> PlayState {
        self.state
    }
    /// 0-based position of the current challenge
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn current(&self) -> Option<&Challenge> {
        self.challenges.get(self.index)
    }

    pub fn current_mut(&mut self) -> Option<&mut Challenge> {
        self.challenges.get_mut(self.index)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.challenges.len()
    }

    /// Grades the current guess. Only valid in `PlayState::Check`, otherwise the state is returned unchanged.
    pub fn check(&mut self) -> PlayState {
        if self.state != PlayState::Check {
            warn!("check ignored in state {:?}", self.state);
            return self.state;
        }
        let attempts = self.attempts + 1;
        let Some(challenge) = self.challenges.get_mut(self.index) else {
            warn!("check ignored, level {} is finished", self.level + 1);
            return self.state;
        };
        self.attempts = attempts;
        if challenge.is_correct() {
            let points = MAX_POINTS + 1 - attempts;
            challenge.set_points(points);
            info!("challenge {} correct on try {}, {} points", self.index + 1, attempts, points);
            self.state = PlayState::Next;
        } else if attempts == 1 {
            self.state = PlayState::TryAgain;
        } else {
            self.state = PlayState::ShowAnswer;
        }
        self.state
    }

    /// back to editing after a first wrong answer; the guess is kept
    pub fn try_again(&mut self) -> PlayState {
        if self.state == PlayState::TryAgain {
            self.state = PlayState::Check;
        } else {
            warn!("try again ignored in state {:?}", self.state);
        }
        self.state
    }

    /// reveals the answer after a second wrong answer, for 0 points
    pub fn show_answer(&mut self) -> PlayState {
        if self.state != PlayState::ShowAnswer {
            warn!("show answer ignored in state {:?}", self.state);
            return self.state;
        }
        if let Some(challenge) = self.challenges.get_mut(self.index) {
            challenge.show_answer();
            challenge.set_points(0);
            self.state = PlayState::Next;
        }
        self.state
    }

    /// moves to the following challenge once the current one is answered or revealed
    pub fn next(&mut self) -> PlayState {
        if self.state != PlayState::Next {
            warn!("next ignored in state {:?}", self.state);
            return self.state;
        }
        self.index += 1;
        self.attempts = 0;
        self.state = PlayState::Check;
        if self.is_finished() {
            info!(
                "level {} finished: {} of {} points",
                self.level + 1,
                self.score(),
                self.perfect_score()
            );
        }
        self.state
    }

    pub fn score(&self) -> u32 {
        self.challenges.iter().map(|c| c.points()).sum()
    }

    pub fn perfect_score(&self) -> u32 {
        MAX_POINTS * self.challenges.len() as u32
    }

    pub fn is_perfect(&self) -> bool {
        self.is_finished() && self.score() == self.perfect_score()
    }

    /// same challenges, guesses and points cleared, back to the first one
    pub fn restart(&mut self) {
        for challenge in self.challenges.iter_mut() {
            challenge.reset();
        }
        self.index = 0;
        self.attempts = 0;
        self.state = PlayState::Check;
    }
}
