use super::cli_main::{get_user_input, prompt};
use crate::Examples::stoichiometry_examples::stoich_examples;
use crate::Game::challenge_factory::ChallengeFactory;
use crate::Game::diagnostics::run_diagnostics;
use crate::Stoichiometry::recipes::RecipeRegistry;
use crate::settings::GameSettings;

const DEFAULT_DIAGNOSTIC_SETS: usize = 100;

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Limiting reagent");
        println!("2. Molecules recipes");
        println!("3. Custom sandwich");
        println!("4. Challenge generation");
        println!("5. Scripted game session");
        println!("6. Generator diagnostics");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");

        let choice = get_user_input();
        match choice.trim() {
            "0" => break,
            other => match other.parse::<usize>() {
                Ok(n @ 1..=6) => stoich_examples(n - 1),
                _ => println!("Invalid choice. Please try again."),
            },
        }
    }
}

/// runs the generator self-test on the saved game settings
pub fn diagnostics_menu() {
    let settings = GameSettings::new();
    let registry = RecipeRegistry::molecules();
    let factory = ChallengeFactory::new(&registry, &settings);
    prompt(&format!("sets per level [{}]: ", DEFAULT_DIAGNOSTIC_SETS));
    let input = get_user_input();
    let sets = input.trim().parse::<usize>().unwrap_or(DEFAULT_DIAGNOSTIC_SETS);
    let report = run_diagnostics(&factory, &mut rand::thread_rng(), sets, settings.max_quantity());
    report.pretty_print();
}
