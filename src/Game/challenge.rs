use crate::Game::guess::{Guess, GuessSide};
use crate::Stoichiometry::reaction::Reaction;
use crate::Stoichiometry::stoich_errors::StoichiometryError;
use crate::Stoichiometry::substance::Substance;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// Flags for the front end, stored on the challenge and never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOptions {
    pub molecules_visible: bool,
    pub numbers_visible: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            molecules_visible: true,
            numbers_visible: true,
        }
    }
}

/// highest number of points a challenge can earn
pub const MAX_POINTS: u32 = 2;

/// One quiz item: a reaction with ground-truth quantities, the player's guess and the hidden side.
#[derive(Debug, Clone)]
pub struct Challenge {
    reaction: Reaction,
    guess: Guess,
    hidden: GuessSide,
    options: PlayOptions,
    points: u32,
}

impl Challenge {
    pub fn new(reaction: Reaction, hidden: GuessSide, options: PlayOptions) -> Result<Self, StoichiometryError> {
        let guess = Guess::new(&reaction, hidden);
        guess.check_shape(&reaction)?;
        Ok(Self {
            reaction,
            guess,
            hidden,
            options,
            points: 0,
        })
    }

    pub fn reaction(&self) -> &Reaction {
        &self.reaction
    }
    pub fn guess(&self) -> &Guess {
        &self.guess
    }
    pub fn guess_mut(&mut self) -> &mut Guess {
        &mut self.guess
    }
    pub fn hidden(&self) -> GuessSide {
        self.hidden
    }
    pub fn options(&self) -> PlayOptions {
        self.options
    }
    pub fn points(&self) -> u32 {
        self.points
    }
    /// points are capped at `MAX_POINTS`
    pub fn set_points(&mut self, points: u32) {
        self.points = points.min(MAX_POINTS);
    }

    /// guess equals the ground truth on reactants, products and leftovers
    pub fn is_correct(&self) -> bool {
        self.guess.matches(&self.reaction)
    }

    /// Reveals the answer by copying the ground truth into the guess. There is no way back.
    pub fn show_answer(&mut self) {
        self.guess.copy_quantities_from(&self.reaction);
    }

    pub fn reset(&mut self) {
        self.guess.reset();
        self.points = 0;
    }

    /// side by side view of guess and answer, the hidden answer shows '?' unless revealed
    pub fn to_table(&self, reveal: bool) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("side"),
            Cell::new("substance"),
            Cell::new("guess"),
            Cell::new("answer"),
        ]));
        let show = |side: GuessSide| reveal || side != self.hidden;
        let mut add = |side: GuessSide, label: &str, guess: &[Substance], truth: &[Substance]| {
            for (g, t) in guess.iter().zip(truth) {
                let answer = if show(side) { t.quantity().to_string() } else { "?".to_string() };
                table.add_row(Row::new(vec![
                    Cell::new(label),
                    Cell::new(g.symbol()),
                    Cell::new(&g.quantity().to_string()),
                    Cell::new(&answer),
                ]));
            }
        };
        add(GuessSide::Before, "before", self.guess.reactants(), self.reaction.reactants());
        add(GuessSide::After, "after", self.guess.products(), self.reaction.products());
        add(GuessSide::After, "leftover", self.guess.leftovers(), self.reaction.leftovers());
        table
    }
}
