//! # Reaction Module
//!
//! ## Aim
//! Quantity model of one balanced reaction: reactants before, products and leftovers after.
//! Products and leftovers are never set directly; they are derived from the reactant
//! quantities by the limiting-reagent rule every time a reactant changes.
//!
//! ## Main Data Structures and Logic
//! - `Reaction`: owns its reactants, products and leftovers (one leftover per reactant, same order)
//! - `number_of_reactions()`: how many complete reaction "cycles" the reactants permit,
//!   i.e. `min(quantity / coefficient)` over reactants with a non-zero coefficient
//! - `update_quantities()`: recomputes products and leftovers, called from every reactant setter
//!
//! ## Invariants after every edit
//! - `quantity(reactant_i) == n * coefficient(reactant_i) + quantity(leftover_i)`
//! - `quantity(product_j) == n * coefficient(product_j)`
//!
//! ## Usage
//! ```
//! use RPAL::Stoichiometry::reaction::Reaction;
//! let mut water = Reaction::from_equation("2H2 + O2 -> 2H2O", Some("Make Water")).unwrap();
//! water.set_reactant_quantity(0, 5).unwrap();
//! water.set_reactant_quantity(1, 2).unwrap();
//! assert_eq!(water.number_of_reactions(), 2);
//! assert_eq!(water.products()[0].quantity(), 4);
//! assert_eq!(water.leftovers()[0].quantity(), 1);
//! ```
use crate::Stoichiometry::stoich_errors::{StoichiometryError, check_index};
use crate::Stoichiometry::substance::Substance;
use prettytable::{Cell, Row, Table};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Reaction {
    name: Option<String>,
    reactants: Vec<Substance>,
    products: Vec<Substance>,
    leftovers: Vec<Substance>,
    /// only the custom sandwich lets the user edit reactant coefficients
    coefficients_editable: bool,
}

impl Reaction {
    /// Builds a reaction and derives its products and leftovers from the given reactant quantities.
    /// Product quantities passed in are ignored, they are always derived.
    pub fn new(
        reactants: Vec<Substance>,
        products: Vec<Substance>,
        name: Option<&str>,
    ) -> Result<Self, StoichiometryError> {
        let label = name.unwrap_or("unnamed").to_string();
        if reactants.len() < 2 {
            return Err(StoichiometryError::TooFewReactants {
                reaction: label,
                found: reactants.len(),
            });
        }
        if products.is_empty() {
            return Err(StoichiometryError::NoProducts { reaction: label });
        }
        check_unique_symbols(&reactants, "reactants")?;
        check_unique_symbols(&products, "products")?;

        let leftovers = reactants
            .iter()
            .map(|reactant| Substance::new(1, reactant.symbol(), reactant.icon().clone(), 0))
            .collect();
        let mut reaction = Self {
            name: name.map(|s| s.to_string()),
            reactants,
            products,
            leftovers,
            coefficients_editable: false,
        };
        reaction.update_quantities();
        Ok(reaction)
    }

    /// marks the reaction as one whose reactant coefficients the user may edit
    pub fn with_editable_coefficients(mut self) -> Self {
        self.coefficients_editable = true;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    /// name for messages, falls back to the equation
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.equation(),
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
    pub fn coefficients_editable(&self) -> bool {
        self.coefficients_editable
    }

    /// every substance of the reaction: reactants, then products, then leftovers
    pub fn substances(&self) -> impl Iterator<Item = &Substance> {
        self.reactants
            .iter()
            .chain(self.products.iter())
            .chain(self.leftovers.iter())
    }

    /// the only externally driven mutation; products and leftovers follow immediately
    pub fn set_reactant_quantity(&mut self, index: usize, quantity: u32) -> Result<(), StoichiometryError> {
        check_index("reactants", index, self.reactants.len())?;
        self.reactants[index].set_quantity(quantity);
        self.update_quantities();
        Ok(())
    }

    pub fn set_reactant_coefficient(
        &mut self,
        index: usize,
        coefficient: u32,
    ) -> Result<(), StoichiometryError> {
        if !self.coefficients_editable {
            return Err(StoichiometryError::CoefficientLocked(self.label()));
        }
        check_index("reactants", index, self.reactants.len())?;
        self.reactants[index].set_coefficient(coefficient);
        self.update_quantities();
        Ok(())
    }

    /// A single reactant with coefficient 1 (or nothing at all) is not a reaction:
    /// that is the empty custom sandwich.
    pub fn is_reaction(&self) -> bool {
        let positive = self
            .reactants
            .iter()
            .filter(|reactant| reactant.coefficient() > 0)
            .count();
        positive > 1 || self.reactants.iter().any(|reactant| reactant.coefficient() > 1)
    }

    /// limiting-reagent rule; reactants with coefficient 0 are not consumed and do not limit
    pub fn number_of_reactions(&self) -> u32 {
        if !self.is_reaction() {
            return 0;
        }
        self.reactants
            .iter()
            .filter(|reactant| reactant.coefficient() != 0)
            .map(|reactant| reactant.quantity() / reactant.coefficient())
            .min()
            .unwrap_or(0)
    }

    fn update_quantities(&mut self) {
        let n = self.number_of_reactions();
        for product in self.products.iter_mut() {
            product.set_quantity(n.saturating_mul(product.coefficient()));
        }
        for (reactant, leftover) in self.reactants.iter().zip(self.leftovers.iter_mut()) {
            leftover.set_quantity(reactant.quantity() - n * reactant.coefficient());
        }
    }

    /// restores construction-time coefficients and quantities on the same substance instances
    pub fn reset(&mut self) {
        for substance in self.reactants.iter_mut().chain(self.products.iter_mut()) {
            substance.reset();
        }
        self.update_quantities();
    }

    /// true if every product quantity is 0
    pub fn has_no_products(&self) -> bool {
        self.products.iter().all(|product| product.quantity() == 0)
    }

    /// largest quantity found anywhere in the reaction
    pub fn max_quantity(&self) -> u32 {
        self.substances().map(|s| s.quantity()).max().unwrap_or(0)
    }

    /// developer notation, e.g. "2 H2 + 1 O2 -> 2 H2O"
    pub fn equation(&self) -> String {
        format!("{} -> {}", join_terms(&self.reactants), join_terms(&self.products))
    }

    /// current quantities for log lines
    pub fn quantities_string(&self) -> String {
        let list = |substances: &[Substance]| {
            substances
                .iter()
                .map(|s| format!("{}={}", s.symbol(), s.quantity()))
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!(
            "{} -> {} | leftovers {}",
            list(&self.reactants),
            list(&self.products),
            list(&self.leftovers)
        )
    }

    /// table of the Before/After state of the reaction
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("substance"),
            Cell::new("coefficient"),
            Cell::new("before"),
            Cell::new("after"),
        ]));
        for (reactant, leftover) in self.reactants.iter().zip(self.leftovers.iter()) {
            table.add_row(Row::new(vec![
                Cell::new(reactant.symbol()),
                Cell::new(&reactant.coefficient().to_string()),
                Cell::new(&reactant.quantity().to_string()),
                Cell::new(&leftover.quantity().to_string()),
            ]));
        }
        for product in self.products.iter() {
            table.add_row(Row::new(vec![
                Cell::new(product.symbol()),
                Cell::new(&product.coefficient().to_string()),
                Cell::new("-"),
                Cell::new(&product.quantity().to_string()),
            ]));
        }
        table
    }

    pub fn pretty_print(&self) {
        println!("{}", self.label());
        self.to_table().printstd();
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.equation())
    }
}

fn join_terms(substances: &[Substance]) -> String {
    substances
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

fn check_unique_symbols(substances: &[Substance], list: &'static str) -> Result<(), StoichiometryError> {
    let mut seen = HashSet::new();
    for substance in substances {
        if !seen.insert(substance.symbol()) {
            return Err(StoichiometryError::DuplicateSymbol {
                symbol: substance.symbol().to_string(),
                list,
            });
        }
    }
    Ok(())
}
