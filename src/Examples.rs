/// Walkthroughs of the library: reactions, recipes, the custom sandwich, challenge generation,
/// a scripted game session and the generator diagnostics
pub mod stoichiometry_examples;
