//! # Challenge Factory
//!
//! ## Aim
//! Generates the set of challenges played on one level. A set obeys four rules:
//! - exactly one challenge has zero quantity for every product (the "nothing happens" case),
//!   except in `GenerationMode::Exhaustive`, which plays every recipe of the pool once
//! - no recipe is used twice in a set
//! - no quantity anywhere in a reaction exceeds the max quantity
//! - every reactant quantity is at least 1
//!
//! ## Main Logic
//! 1. the level's recipe pool comes from `GameSettings`, reactions are built through the `RecipeRegistry`;
//!    before anything is drawn every reactant and product coefficient of the pool must be at most `max_quantity`
//! 2. a random slot is chosen for the zero-products challenge; its recipe is drawn first so that the
//!    other slots cannot use up the recipes able to give zero products
//! 3. zero-products recipes must have a reactant coefficient above 1; each reactant gets a quantity in
//!    `[1, max(1, coefficient - 1)]`, so no reaction cycle can complete
//! 4. the other slots get reactant quantities in `[coefficient, max_quantity]`, at least one cycle completes
//! 5. derived products and leftovers can still exceed the ceiling, `fix_quantity_range_violation` then
//!    lowers reactants round-robin until everything fits; a regular slot left without products is an error
//!
//! The factory keeps no state between calls; randomness comes from the `Rng` passed in.
use crate::Game::challenge::{Challenge, PlayOptions};
use crate::Game::guess::GuessSide;
use crate::Stoichiometry::reaction::Reaction;
use crate::Stoichiometry::recipes::RecipeRegistry;
use crate::Stoichiometry::stoich_errors::StoichiometryError;
use crate::settings::{GameSettings, GenerationMode, LevelConfig};
use log::{debug, error, info, warn};
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    #[error("no level {level}, {available} levels are configured")]
    UnknownLevel { level: usize, available: usize },
    #[error("max quantity must be positive")]
    InvalidMaxQuantity,
    #[error("level {level} needs {required} recipes but its pool has {available}")]
    NotEnoughRecipes {
        level: usize,
        required: usize,
        available: usize,
    },
    #[error("level {level} has no recipe able to give zero products")]
    NoZeroProductsCandidate { level: usize },
    /// one full reaction cycle of the recipe would not fit under the ceiling
    #[error("{symbol} of '{reaction}' has coefficient {coefficient} above max quantity {max_quantity}")]
    CoefficientAboveMaxQuantity {
        reaction: String,
        symbol: String,
        coefficient: u32,
        max_quantity: u32,
    },
    /// the recipe cannot fit under the ceiling even with every reactant at 1
    #[error("cannot bring '{reaction}' within max quantity {max_quantity}: {quantities}")]
    QuantityRangeViolation {
        reaction: String,
        max_quantity: u32,
        quantities: String,
    },
    #[error(transparent)]
    Stoichiometry(#[from] StoichiometryError),
}

/// true if any reactant, product or leftover quantity is above `max_quantity`
pub fn has_quantity_range_violation(reaction: &Reaction, max_quantity: u32) -> bool {
    reaction.max_quantity() > max_quantity
}

/// Brings every quantity of the reaction down to `max_quantity` or below.
/// Reactants above the ceiling are clamped first, then reactants are decremented by 1 in turn
/// (a reactant at 1 is skipped) until no quantity is out of range. A full pass without a change
/// while the violation persists means the recipe cannot fit and generation must stop.
pub fn fix_quantity_range_violation(reaction: &mut Reaction, max_quantity: u32) -> Result<(), ChallengeError> {
    if !has_quantity_range_violation(reaction, max_quantity) {
        return Ok(());
    }
    debug!("quantity range violation in {}: {}", reaction.label(), reaction.quantities_string());

    let len = reaction.reactants().len();
    for index in 0..len {
        if reaction.reactants()[index].quantity() > max_quantity {
            reaction.set_reactant_quantity(index, max_quantity)?;
        }
    }

    let mut index = 0;
    let mut skipped = 0;
    while has_quantity_range_violation(reaction, max_quantity) {
        if skipped == len {
            let err = ChallengeError::QuantityRangeViolation {
                reaction: reaction.label(),
                max_quantity,
                quantities: reaction.quantities_string(),
            };
            error!("{}", err);
            return Err(err);
        }
        let quantity = reaction.reactants()[index].quantity();
        if quantity > 1 {
            reaction.set_reactant_quantity(index, quantity - 1)?;
            skipped = 0;
        } else {
            skipped += 1;
        }
        index = (index + 1) % len;
    }
    debug!("fixed {}: {}", reaction.label(), reaction.quantities_string());
    Ok(())
}

/// removes a random recipe id from the pool; the pool must not be empty
fn draw<R: Rng + ?Sized>(rng: &mut R, pool: &mut Vec<String>) -> String {
    let index = rng.gen_range(0..pool.len());
    pool.remove(index)
}

/// reactant quantities that let at least one reaction cycle complete
fn seed_with_products<R: Rng + ?Sized>(
    rng: &mut R,
    reaction: &mut Reaction,
    max_quantity: u32,
) -> Result<(), ChallengeError> {
    for index in 0..reaction.reactants().len() {
        let reactant = &reaction.reactants()[index];
        let low = reactant.coefficient().max(1);
        if low > max_quantity {
            return Err(ChallengeError::CoefficientAboveMaxQuantity {
                reaction: reaction.label(),
                symbol: reactant.symbol().to_string(),
                coefficient: reactant.coefficient(),
                max_quantity,
            });
        }
        let quantity = rng.gen_range(low..=max_quantity);
        reaction.set_reactant_quantity(index, quantity)?;
    }
    Ok(())
}

/// reactant quantities below every coefficient above 1, so no reaction cycle completes
fn seed_without_products<R: Rng + ?Sized>(rng: &mut R, reaction: &mut Reaction) -> Result<(), ChallengeError> {
    for index in 0..reaction.reactants().len() {
        let high = reaction.reactants()[index].coefficient().saturating_sub(1).max(1);
        let quantity = rng.gen_range(1..=high);
        reaction.set_reactant_quantity(index, quantity)?;
    }
    Ok(())
}

/// every reactant coefficient is exactly 1: any quantities >= 1 make at least one cycle
fn all_coefficients_one(reaction: &Reaction) -> bool {
    reaction.reactants().iter().all(|reactant| reactant.coefficient() == 1)
}

pub struct ChallengeFactory<'a> {
    registry: &'a RecipeRegistry,
    settings: &'a GameSettings,
}

impl<'a> ChallengeFactory<'a> {
    pub fn new(registry: &'a RecipeRegistry, settings: &'a GameSettings) -> Self {
        Self { registry, settings }
    }

    pub fn settings(&self) -> &GameSettings {
        self.settings
    }

    pub fn number_of_levels(&self) -> usize {
        self.settings.number_of_levels()
    }

    fn level_config(&self, level: usize) -> Result<&'a LevelConfig, ChallengeError> {
        let settings: &'a GameSettings = self.settings;
        settings.level(level).ok_or(ChallengeError::UnknownLevel {
            level,
            available: settings.number_of_levels(),
        })
    }

    /// set size of `level` in the configured generation mode
    pub fn number_of_challenges(&self, level: usize) -> Result<usize, ChallengeError> {
        let level_config = self.level_config(level)?;
        Ok(match self.settings.generation_mode() {
            GenerationMode::Random => level_config.number_of_challenges,
            GenerationMode::Exhaustive => unique_pool(level_config).len(),
        })
    }

    /// challenges of `level` with the configured max quantity and the level's play options
    pub fn create_level_challenges<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        level: usize,
    ) -> Result<Vec<Challenge>, ChallengeError> {
        let level_config = self.level_config(level)?;
        self.create_challenges(rng, level, self.settings.max_quantity(), level_config.options)
    }

    /// Generates the challenges of `level` (0-based) with every quantity at most `max_quantity`.
    pub fn create_challenges<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        level: usize,
        max_quantity: u32,
        options: PlayOptions,
    ) -> Result<Vec<Challenge>, ChallengeError> {
        let level_config = self.level_config(level)?;
        if max_quantity == 0 {
            return Err(ChallengeError::InvalidMaxQuantity);
        }
        let pool = unique_pool(level_config);
        self.check_pool(&pool, max_quantity)?;

        let reactions = match self.settings.generation_mode() {
            GenerationMode::Random => {
                self.random_reactions(rng, level, level_config.number_of_challenges, pool, max_quantity)?
            }
            GenerationMode::Exhaustive => self.every_reaction(rng, pool, max_quantity)?,
        };

        let challenges = reactions
            .into_iter()
            .map(|reaction| Challenge::new(reaction, level_config.hidden, options))
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            "level {}: {} challenges generated, {} hidden, max quantity {}",
            level + 1,
            challenges.len(),
            match level_config.hidden {
                GuessSide::Before => "before",
                GuessSide::After => "after",
            },
            max_quantity
        );
        Ok(challenges)
    }

    /// Fails unless `max_quantity` is positive and every level can be generated under it.
    pub fn check_max_quantity(&self, max_quantity: u32) -> Result<(), ChallengeError> {
        if max_quantity == 0 {
            return Err(ChallengeError::InvalidMaxQuantity);
        }
        for level in 0..self.number_of_levels() {
            let pool = unique_pool(self.level_config(level)?);
            self.check_pool(&pool, max_quantity)?;
        }
        Ok(())
    }

    /// every id is registered and no reactant or product coefficient is above `max_quantity`
    fn check_pool(&self, pool: &[String], max_quantity: u32) -> Result<(), ChallengeError> {
        for id in pool {
            let reaction = self.registry.build(id)?;
            let too_big = reaction
                .reactants()
                .iter()
                .chain(reaction.products())
                .find(|substance| substance.coefficient() > max_quantity);
            if let Some(substance) = too_big {
                let err = ChallengeError::CoefficientAboveMaxQuantity {
                    reaction: reaction.label(),
                    symbol: substance.symbol().to_string(),
                    coefficient: substance.coefficient(),
                    max_quantity,
                };
                warn!("{}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    fn random_reactions<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        level: usize,
        count: usize,
        mut pool: Vec<String>,
        max_quantity: u32,
    ) -> Result<Vec<Reaction>, ChallengeError> {
        if pool.len() < count {
            return Err(ChallengeError::NotEnoughRecipes {
                level,
                required: count,
                available: pool.len(),
            });
        }
        let zero_products_index = rng.gen_range(0..count);
        let zero_products = self.zero_products_reaction(rng, level, &mut pool, max_quantity)?;

        let mut reactions = Vec::with_capacity(count);
        for _ in 1..count {
            let id = draw(rng, &mut pool);
            let reaction = self.reaction_with_products(rng, &id, max_quantity)?;
            debug!("{}: {}", id, reaction.quantities_string());
            reactions.push(reaction);
        }
        reactions.insert(zero_products_index, zero_products);
        Ok(reactions)
    }

    /// Draws recipes until one can give zero products with every reactant present.
    /// Recipes set aside go back into the pool for the other slots.
    fn zero_products_reaction<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        level: usize,
        pool: &mut Vec<String>,
        max_quantity: u32,
    ) -> Result<Reaction, ChallengeError> {
        let mut set_aside = Vec::new();
        let mut found = None;
        while !pool.is_empty() {
            let id = draw(rng, pool);
            let reaction = self.registry.build(&id)?;
            if all_coefficients_one(&reaction) {
                set_aside.push(id);
            } else {
                found = Some((id, reaction));
                break;
            }
        }
        pool.extend(set_aside);

        let Some((id, mut reaction)) = found else {
            warn!("level {}: no recipe can give zero products", level + 1);
            return Err(ChallengeError::NoZeroProductsCandidate { level });
        };
        seed_without_products(rng, &mut reaction)?;
        // coefficient - 1 may still be above a small ceiling
        fix_quantity_range_violation(&mut reaction, max_quantity)?;
        debug!("{} (zero products): {}", id, reaction.quantities_string());
        Ok(reaction)
    }

    /// every recipe of the pool once, in pool order, each with at least one reaction cycle
    fn every_reaction<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pool: Vec<String>,
        max_quantity: u32,
    ) -> Result<Vec<Reaction>, ChallengeError> {
        let mut reactions = Vec::with_capacity(pool.len());
        for id in pool {
            reactions.push(self.reaction_with_products(rng, &id, max_quantity)?);
        }
        Ok(reactions)
    }

    /// Seeds and repairs a regular slot. Repair must leave at least one reaction cycle,
    /// otherwise the set would get a second zero-products challenge.
    fn reaction_with_products<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: &str,
        max_quantity: u32,
    ) -> Result<Reaction, ChallengeError> {
        let mut reaction = self.registry.build(id)?;
        seed_with_products(rng, &mut reaction, max_quantity)?;
        fix_quantity_range_violation(&mut reaction, max_quantity)?;
        if reaction.has_no_products() {
            let err = ChallengeError::QuantityRangeViolation {
                reaction: reaction.label(),
                max_quantity,
                quantities: reaction.quantities_string(),
            };
            error!("repair left no reaction cycle: {}", err);
            return Err(err);
        }
        Ok(reaction)
    }
}

/// pool ids in configured order with repeats removed
fn unique_pool(level_config: &LevelConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    level_config
        .recipes
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
