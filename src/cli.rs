/// Main menu and shared input helpers
pub mod cli_main;
/// Molecules and Sandwiches screens: pick a recipe, edit quantities, watch products and leftovers
pub mod cli_explorer;
/// Game levels and game settings
pub mod cli_game;
/// Examples and generator diagnostics
pub mod cli_examples;
