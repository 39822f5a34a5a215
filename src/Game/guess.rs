use crate::Stoichiometry::reaction::Reaction;
use crate::Stoichiometry::stoich_errors::{StoichiometryError, check_index};
use crate::Stoichiometry::substance::Substance;
use serde::{Deserialize, Serialize};

/// Which side of the reaction the player has to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessSide {
    /// reactants are hidden
    Before,
    /// products and leftovers are hidden
    After,
}

/// The player's working answer: clones of the reaction's terms, edited freely.
/// Nothing in a guess is derived, every slot is set by the player.
#[derive(Debug, Clone)]
pub struct Guess {
    reactants: Vec<Substance>,
    products: Vec<Substance>,
    leftovers: Vec<Substance>,
}

impl Guess {
    /// clones the terms of `reaction`; quantities on the hidden side start at 0
    pub fn new(reaction: &Reaction, hidden: GuessSide) -> Self {
        let (before, after) = match hidden {
            GuessSide::Before => (Some(0), None),
            GuessSide::After => (None, Some(0)),
        };
        Self {
            reactants: clone_all(reaction.reactants(), before),
            products: clone_all(reaction.products(), after),
            leftovers: clone_all(reaction.leftovers(), after),
        }
    }

    pub fn reactants(&self) -> &[Substance] {
        &self.reactants
    }
    pub fn products(&self) -> &[Substance] {
        &self.products
    }
    pub fn leftovers(&self) -> &[Substance] {
        &self.leftovers
    }

    pub fn set_reactant_quantity(&mut self, index: usize, quantity: u32) -> Result<(), StoichiometryError> {
        check_index("reactants", index, self.reactants.len())?;
        self.reactants[index].set_quantity(quantity);
        Ok(())
    }
    pub fn set_product_quantity(&mut self, index: usize, quantity: u32) -> Result<(), StoichiometryError> {
        check_index("products", index, self.products.len())?;
        self.products[index].set_quantity(quantity);
        Ok(())
    }
    pub fn set_leftover_quantity(&mut self, index: usize, quantity: u32) -> Result<(), StoichiometryError> {
        check_index("leftovers", index, self.leftovers.len())?;
        self.leftovers[index].set_quantity(quantity);
        Ok(())
    }

    /// the guess must mirror the reaction's lists one to one
    pub fn check_shape(&self, reaction: &Reaction) -> Result<(), StoichiometryError> {
        let pairs = [
            ("reactants", self.reactants.len(), reaction.reactants().len()),
            ("products", self.products.len(), reaction.products().len()),
            ("leftovers", self.leftovers.len(), reaction.leftovers().len()),
        ];
        for (list, guess, reaction) in pairs {
            if guess != reaction {
                return Err(StoichiometryError::LengthMismatch {
                    list,
                    guess,
                    reaction,
                });
            }
        }
        Ok(())
    }

    /// element-wise, order sensitive; stops at the first mismatch
    pub fn matches(&self, reaction: &Reaction) -> bool {
        same_terms(&self.reactants, reaction.reactants())
            && same_terms(&self.products, reaction.products())
            && same_terms(&self.leftovers, reaction.leftovers())
    }

    /// copies every quantity of `reaction` into the guess
    pub fn copy_quantities_from(&mut self, reaction: &Reaction) {
        copy_quantities(&mut self.reactants, reaction.reactants());
        copy_quantities(&mut self.products, reaction.products());
        copy_quantities(&mut self.leftovers, reaction.leftovers());
    }

    /// back to the quantities the guess was created with
    pub fn reset(&mut self) {
        for substance in self
            .reactants
            .iter_mut()
            .chain(self.products.iter_mut())
            .chain(self.leftovers.iter_mut())
        {
            substance.reset();
        }
    }
}

fn clone_all(substances: &[Substance], quantity: Option<u32>) -> Vec<Substance> {
    substances.iter().map(|s| s.clone_with(quantity)).collect()
}

fn same_terms(guess: &[Substance], truth: &[Substance]) -> bool {
    guess.len() == truth.len() && guess.iter().zip(truth).all(|(g, t)| g.equals(t))
}

fn copy_quantities(guess: &mut [Substance], truth: &[Substance]) {
    for (g, t) in guess.iter_mut().zip(truth) {
        g.set_quantity(t.quantity());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methane() -> Reaction {
        let mut reaction = Reaction::from_equation("CH4 + 2O2 -> CO2 + 2H2O", None).unwrap();
        reaction.set_reactant_quantity(0, 2).unwrap();
        reaction.set_reactant_quantity(1, 3).unwrap();
        reaction
    }

    #[test]
    fn test_hidden_after_zeroes_products_and_leftovers() {
        let reaction = methane();
        let guess = Guess::new(&reaction, GuessSide::After);
        assert_eq!(guess.reactants()[0].quantity(), 2);
        assert_eq!(guess.reactants()[1].quantity(), 3);
        assert!(guess.products().iter().all(|p| p.quantity() == 0));
        assert!(guess.leftovers().iter().all(|l| l.quantity() == 0));
        assert!(guess.check_shape(&reaction).is_ok());
    }

    #[test]
    fn test_hidden_before_zeroes_reactants() {
        let reaction = methane();
        let guess = Guess::new(&reaction, GuessSide::Before);
        assert!(guess.reactants().iter().all(|r| r.quantity() == 0));
        assert_eq!(guess.products()[1].quantity(), 2);
        assert_eq!(guess.leftovers()[0].quantity(), 1);
    }

    #[test]
    fn test_guess_edits_do_not_touch_reaction() {
        let reaction = methane();
        let mut guess = Guess::new(&reaction, GuessSide::After);
        guess.set_product_quantity(0, 1).unwrap();
        guess.set_product_quantity(1, 2).unwrap();
        guess.set_leftover_quantity(0, 1).unwrap();
        assert!(!guess.matches(&reaction));
        guess.set_leftover_quantity(1, 1).unwrap();
        assert!(guess.matches(&reaction));
        assert_eq!(reaction.products()[0].quantity(), 1);
        guess.set_leftover_quantity(1, 4).unwrap();
        assert!(!guess.matches(&reaction));
        assert!(guess.set_leftover_quantity(2, 0).is_err());
    }

    #[test]
    fn test_reset_restores_hidden_zeroes() {
        let reaction = methane();
        let mut guess = Guess::new(&reaction, GuessSide::Before);
        guess.copy_quantities_from(&reaction);
        assert!(guess.matches(&reaction));
        guess.reset();
        assert_eq!(guess.reactants()[0].quantity(), 0);
        assert_eq!(guess.products()[0].quantity(), 1);
    }

    #[test]
    fn test_shape_mismatch() {
        let guess = Guess::new(&methane(), GuessSide::After);
        let other = Reaction::from_equation("2H2 + O2 -> 2H2O", None).unwrap();
        assert_eq!(
            guess.check_shape(&other),
            Err(StoichiometryError::LengthMismatch {
                list: "products",
                guess: 2,
                reaction: 1
            })
        );
    }
}
