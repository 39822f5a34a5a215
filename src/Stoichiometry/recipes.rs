//! # Recipes
//!
//! A recipe is a named, parameterless builder of a `Reaction`. The `RecipeRegistry` maps recipe ids to
//! builders and is handed to whoever needs fresh reactions (the challenge factory, the CLI explorers),
//! so nothing depends on a global table of reactions.
//!
//! Catalogs:
//! - `RecipeRegistry::molecules()`: the three reactions of the Molecules screen plus the game pools
//!   (`ONE_PRODUCT_RECIPES`, `TWO_PRODUCT_RECIPES`)
//! - `RecipeRegistry::sandwiches()`: the sandwich analogy, including the custom sandwich whose
//!   coefficients the user edits
use crate::Stoichiometry::reaction::Reaction;
use crate::Stoichiometry::stoich_errors::StoichiometryError;
use std::collections::BTreeMap;

pub type RecipeBuilder = Box<dyn Fn() -> Result<Reaction, StoichiometryError> + Send + Sync>;

/// (id, display name, equation)
pub const MOLECULE_SCREEN_RECIPES: &[(&str, &str, &str)] = &[
    ("make_water", "Make Water", "2H2 + O2 -> 2H2O"),
    ("make_ammonia", "Make Ammonia", "N2 + 3H2 -> 2NH3"),
    ("combust_methane", "Combust Methane", "CH4 + 2O2 -> CO2 + 2H2O"),
];

pub const ONE_PRODUCT_RECIPES: &[(&str, &str, &str)] = &[
    ("water", "Make Water", "2H2 + O2 -> 2H2O"),
    ("hydrogen_fluoride", "Make Hydrogen Fluoride", "H2 + F2 -> 2HF"),
    ("hydrogen_chloride", "Make Hydrogen Chloride", "H2 + Cl2 -> 2HCl"),
    ("methanol_from_co", "Make Methanol", "CO + 2H2 -> CH3OH"),
    ("methanol_from_ch2o", "Make Methanol", "CH2O + H2 -> CH3OH"),
    ("ethane_from_ethylene", "Make Ethane", "C2H4 + H2 -> C2H6"),
    ("ethane_from_acetylene", "Make Ethane", "C2H2 + 2H2 -> C2H6"),
    ("carbon_dioxide", "Make Carbon Dioxide", "C + O2 -> CO2"),
    ("carbon_monoxide", "Make Carbon Monoxide", "2C + O2 -> 2CO"),
    ("carbon_monoxide_from_co2", "Make Carbon Monoxide", "C + CO2 -> 2CO"),
    ("carbon_disulfide", "Make Carbon Disulfide", "C + 2S -> CS2"),
    ("ammonia", "Make Ammonia", "N2 + 3H2 -> 2NH3"),
    ("nitric_oxide", "Make Nitric Oxide", "N2 + O2 -> 2NO"),
    ("nitrous_oxide", "Make Nitrous Oxide", "2N2 + O2 -> 2N2O"),
    ("phosphine", "Make Phosphine", "P4 + 6H2 -> 4PH3"),
    ("phosphorus_trifluoride", "Make Phosphorus Trifluoride", "P4 + 6F2 -> 4PF3"),
    ("phosphorus_trichloride", "Make Phosphorus Trichloride", "P4 + 6Cl2 -> 4PCl3"),
    ("phosphorus_pentachloride", "Make Phosphorus Pentachloride", "PCl3 + Cl2 -> PCl5"),
    ("sulfur_trioxide", "Make Sulfur Trioxide", "2SO2 + O2 -> 2SO3"),
];

pub const TWO_PRODUCT_RECIPES: &[(&str, &str, &str)] = &[
    ("carbon_and_water", "Carbon and Water", "2C + 2H2O -> CH4 + CO2"),
    ("steam_reforming", "Steam Reforming of Methane", "CH4 + H2O -> 3H2 + CO"),
    ("combust_methane", "Combust Methane", "CH4 + 2O2 -> CO2 + 2H2O"),
    ("combust_ethane", "Combust Ethane", "2C2H6 + 7O2 -> 4CO2 + 6H2O"),
    ("combust_ethylene", "Combust Ethylene", "C2H4 + 3O2 -> 2CO2 + 2H2O"),
    ("combust_acetylene", "Combust Acetylene", "2C2H2 + 5O2 -> 4CO2 + 2H2O"),
    ("combust_ethanol", "Combust Ethanol", "C2H5OH + 3O2 -> 2CO2 + 3H2O"),
    ("chlorinate_ethane", "Chlorinate Ethane", "C2H6 + Cl2 -> C2H5Cl + HCl"),
    ("ammonia_to_nitrogen", "Oxidize Ammonia to Nitrogen", "4NH3 + 3O2 -> 2N2 + 6H2O"),
    ("ammonia_to_nitric_oxide", "Oxidize Ammonia to Nitric Oxide", "4NH3 + 5O2 -> 4NO + 6H2O"),
    ("ammonia_to_nitrogen_dioxide", "Oxidize Ammonia to Nitrogen Dioxide", "4NH3 + 7O2 -> 4NO2 + 6H2O"),
    ("ammonia_and_nitric_oxide", "Reduce Nitric Oxide", "4NH3 + 6NO -> 5N2 + 6H2O"),
    ("combust_carbon_disulfide", "Combust Carbon Disulfide", "CS2 + 3O2 -> CO2 + 2SO2"),
    ("oxygen_difluoride", "Make Oxygen Difluoride", "2F2 + H2O -> OF2 + 2HF"),
    ("oxygen_difluoride_hydrolysis", "Hydrolyze Oxygen Difluoride", "OF2 + H2O -> O2 + 2HF"),
];

pub const SANDWICH_RECIPES: &[(&str, &str, &str)] = &[
    ("cheese", "Cheese", "2Bread + 1Cheese -> 1Sandwich"),
    ("meat_and_cheese", "Meat & Cheese", "2Bread + 1Meat + 1Cheese -> 1Sandwich"),
];

pub const CUSTOM_SANDWICH: (&str, &str, &str) = ("custom", "Custom", "0Bread + 0Meat + 0Cheese -> 1Sandwich");

#[derive(Default)]
pub struct RecipeRegistry {
    builders: BTreeMap<String, RecipeBuilder>,
}

impl RecipeRegistry {
    pub fn new() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    /// registers (or replaces) the builder for `id`
    pub fn register<F>(&mut self, id: &str, builder: F)
    where
        F: Fn() -> Result<Reaction, StoichiometryError> + Send + Sync + 'static,
    {
        self.builders.insert(id.to_string(), Box::new(builder));
    }

    /// registers a builder that parses `equation` on every call
    pub fn register_equation(&mut self, id: &str, name: &'static str, equation: &'static str) {
        self.register(id, move || Reaction::from_equation(equation, Some(name)));
    }

    fn register_all(&mut self, recipes: &[(&'static str, &'static str, &'static str)]) {
        for &(id, name, equation) in recipes {
            self.register_equation(id, name, equation);
        }
    }

    /// Molecules screen reactions and both game pools. Ids of the two game pools are disjoint,
    /// "combust_methane" is shared by the screen and the two-product pool with the same equation.
    pub fn molecules() -> Self {
        let mut registry = Self::new();
        registry.register_all(MOLECULE_SCREEN_RECIPES);
        registry.register_all(ONE_PRODUCT_RECIPES);
        registry.register_all(TWO_PRODUCT_RECIPES);
        registry
    }

    pub fn sandwiches() -> Self {
        let mut registry = Self::new();
        registry.register_all(SANDWICH_RECIPES);
        let (id, name, equation) = CUSTOM_SANDWICH;
        registry.register(id, move || {
            Ok(Reaction::from_equation(equation, Some(name))?.with_editable_coefficients())
        });
        registry
    }

    /// fresh reaction for `id`
    pub fn build(&self, id: &str) -> Result<Reaction, StoichiometryError> {
        match self.builders.get(id) {
            Some(builder) => builder(),
            None => Err(StoichiometryError::UnknownRecipe(id.to_string())),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.builders.contains_key(id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.builders.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

/// ids of a recipe table, in table order
pub fn recipe_ids(recipes: &[(&str, &str, &str)]) -> Vec<String> {
    recipes.iter().map(|(id, _, _)| id.to_string()).collect()
}
