/// eng
/// The quantity holder of the model: symbol, stoichiometric coefficient, quantity and an opaque icon handle.
pub mod substance;
/// eng
/// A balanced reaction with reactants, products and leftovers. Every change of a reactant quantity
/// recomputes products and leftovers by the limiting-reagent rule:
/// number of reactions = min(quantity / coefficient) over the reactants that are consumed.
///
///  # Examples
/// ```
/// use RPAL::Stoichiometry::reaction::Reaction;
/// use RPAL::Stoichiometry::substance::{Icon, Substance};
/// let reactants = vec![
///     Substance::new(2, "A", Icon::new("A"), 4),
///     Substance::new(1, "B", Icon::new("B"), 1),
/// ];
/// let products = vec![Substance::new(1, "C", Icon::new("C"), 0)];
/// let reaction = Reaction::new(reactants, products, None).unwrap();
/// assert_eq!(reaction.number_of_reactions(), 1);
/// assert_eq!(reaction.leftovers()[0].quantity(), 2);
/// ```
pub mod reaction;
/// eng
/// Text equations such as "CH4 + 2O2 -> CO2 + 2H2O" turned into reactions
pub mod equation_parser;
/// Registry of recipes (id -> parameterless reaction builder) with the molecules and sandwiches catalogs
pub mod recipes;
pub mod stoich_errors;
