//! Self-test of the challenge generator for developers.
//!
//! Regenerates many challenge sets per level and counts every broken rule instead of stopping at
//! the first one: reactants at 0, sets without exactly one zero-products challenge, quantities above
//! the ceiling, reactions repeated inside a set and sets that could not be generated at all.
use crate::Game::challenge::Challenge;
use crate::Game::challenge_factory::{ChallengeFactory, has_quantity_range_violation};
use crate::settings::GenerationMode;
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use rand::Rng;
use std::collections::HashSet;

/// rule violations found in one generated set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetCheck {
    pub zero_reactant_challenges: usize,
    pub zero_products_challenges: usize,
    pub range_violations: usize,
    pub duplicate_reactions: usize,
}

impl SetCheck {
    pub fn inspect(challenges: &[Challenge], max_quantity: u32) -> Self {
        let mut check = SetCheck::default();
        let mut seen = HashSet::new();
        for challenge in challenges {
            let reaction = challenge.reaction();
            if reaction.reactants().iter().any(|r| r.quantity() == 0) {
                check.zero_reactant_challenges += 1;
            }
            if reaction.has_no_products() {
                check.zero_products_challenges += 1;
            }
            if has_quantity_range_violation(reaction, max_quantity) {
                check.range_violations += 1;
            }
            if !seen.insert(reaction.equation()) {
                check.duplicate_reactions += 1;
            }
        }
        check
    }

    /// every rule holds; outside exhaustive mode that includes exactly one zero-products challenge
    pub fn is_clean(&self, mode: GenerationMode) -> bool {
        let zero_products_ok = match mode {
            GenerationMode::Random => self.zero_products_challenges == 1,
            GenerationMode::Exhaustive => true,
        };
        zero_products_ok
            && self.zero_reactant_challenges == 0
            && self.range_violations == 0
            && self.duplicate_reactions == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelDiagnostics {
    pub level: usize,
    pub sets: usize,
    pub challenges: usize,
    pub generation_errors: usize,
    pub zero_reactant_challenges: usize,
    pub wrong_zero_products_sets: usize,
    pub range_violations: usize,
    pub duplicate_sets: usize,
}

impl LevelDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.generation_errors == 0
            && self.zero_reactant_challenges == 0
            && self.wrong_zero_products_sets == 0
            && self.range_violations == 0
            && self.duplicate_sets == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsReport {
    pub max_quantity: u32,
    pub mode: GenerationMode,
    pub levels: Vec<LevelDiagnostics>,
}

impl DiagnosticsReport {
    pub fn is_clean(&self) -> bool {
        self.levels.iter().all(|level| level.is_clean())
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(
            [
                "level",
                "sets",
                "challenges",
                "errors",
                "reactant at 0",
                "zero products != 1",
                "above max",
                "repeated reaction",
            ]
            .iter()
            .map(|header| Cell::new(header))
            .collect(),
        ));
        for level in &self.levels {
            let values = [
                level.level + 1,
                level.sets,
                level.challenges,
                level.generation_errors,
                level.zero_reactant_challenges,
                level.wrong_zero_products_sets,
                level.range_violations,
                level.duplicate_sets,
            ];
            table.add_row(Row::new(
                values.iter().map(|v| Cell::new(&v.to_string())).collect(),
            ));
        }
        table
    }

    pub fn pretty_print(&self) {
        println!(
            "challenge generator diagnostics, max quantity {}, mode {:?}",
            self.max_quantity, self.mode
        );
        self.to_table().printstd();
        if self.is_clean() {
            println!("all rules hold");
        } else {
            println!("RULES BROKEN, see table");
        }
    }
}

/// Generates `sets_per_level` challenge sets on every level and counts what went wrong.
pub fn run_diagnostics<R: Rng + ?Sized>(
    factory: &ChallengeFactory,
    rng: &mut R,
    sets_per_level: usize,
    max_quantity: u32,
) -> DiagnosticsReport {
    let mode = factory.settings().generation_mode();
    let mut levels = Vec::new();
    for level in 0..factory.number_of_levels() {
        let mut stats = LevelDiagnostics {
            level,
            ..Default::default()
        };
        for _ in 0..sets_per_level {
            stats.sets += 1;
            let options = factory
                .settings()
                .level(level)
                .map(|config| config.options)
                .unwrap_or_default();
            match factory.create_challenges(rng, level, max_quantity, options) {
                Ok(challenges) => {
                    stats.challenges += challenges.len();
                    let check = SetCheck::inspect(&challenges, max_quantity);
                    stats.zero_reactant_challenges += check.zero_reactant_challenges;
                    stats.range_violations += check.range_violations;
                    if check.duplicate_reactions > 0 {
                        stats.duplicate_sets += 1;
                    }
                    if mode == GenerationMode::Random && check.zero_products_challenges != 1 {
                        stats.wrong_zero_products_sets += 1;
                    }
                }
                Err(e) => {
                    warn!("level {}: generation failed: {}", level + 1, e);
                    stats.generation_errors += 1;
                }
            }
        }
        info!("diagnostics level {}: {:?}", level + 1, stats);
        levels.push(stats);
    }
    DiagnosticsReport {
        max_quantity,
        mode,
        levels,
    }
}
