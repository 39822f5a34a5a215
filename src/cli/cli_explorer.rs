use super::cli_main::{get_user_input, parse_command, prompt};
use crate::Stoichiometry::reaction::Reaction;
use crate::Stoichiometry::recipes::{CUSTOM_SANDWICH, MOLECULE_SCREEN_RECIPES, RecipeRegistry, SANDWICH_RECIPES};

pub fn molecules_menu() {
    let registry = RecipeRegistry::molecules();
    let recipes: Vec<(&str, &str)> = MOLECULE_SCREEN_RECIPES
        .iter()
        .map(|&(id, name, _)| (id, name))
        .collect();
    recipe_menu("Molecules", &registry, &recipes);
}

pub fn sandwiches_menu() {
    let registry = RecipeRegistry::sandwiches();
    let mut recipes: Vec<(&str, &str)> = SANDWICH_RECIPES.iter().map(|&(id, name, _)| (id, name)).collect();
    recipes.push((CUSTOM_SANDWICH.0, CUSTOM_SANDWICH.1));
    recipe_menu("Sandwiches", &registry, &recipes);
}

fn recipe_menu(title: &str, registry: &RecipeRegistry, recipes: &[(&str, &str)]) {
    loop {
        println!("\n=== {} ===", title);
        for (i, (_, name)) in recipes.iter().enumerate() {
            println!("{}. {}", i + 1, name);
        }
        println!("0. Back to main menu");
        prompt("Enter your choice: ");

        let choice = get_user_input();
        let choice = choice.trim();
        if choice == "0" {
            break;
        }
        let picked = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| recipes.get(i));
        match picked {
            Some((id, _)) => match registry.build(id) {
                Ok(reaction) => explore(reaction),
                Err(e) => println!("{}", e),
            },
            None => println!("Invalid choice. Please try again."),
        }
    }
}

/// edit loop of one reaction; indices typed by the user are 1-based
fn explore(mut reaction: Reaction) {
    loop {
        println!();
        reaction.pretty_print();
        if !reaction.is_reaction() {
            println!("not a reaction yet: no reactant is consumed");
        }
        println!("q <reactant> <quantity>  set a quantity");
        if reaction.coefficients_editable() {
            println!("c <reactant> <coefficient>  set a coefficient");
        }
        println!("r  reset");
        println!("0  back");
        prompt("> ");

        let line = get_user_input();
        let Some((command, numbers)) = parse_command(&line) else {
            println!("Invalid command.");
            continue;
        };
        let result = match (command.as_str(), numbers.as_slice()) {
            ("0", []) => break,
            ("r", []) => {
                reaction.reset();
                Ok(())
            }
            ("q", [index, value]) => reaction.set_reactant_quantity(to_index(*index), *value),
            ("c", [index, value]) => reaction.set_reactant_coefficient(to_index(*index), *value),
            _ => {
                println!("Invalid command.");
                Ok(())
            }
        };
        if let Err(e) = result {
            println!("{}", e);
        }
    }
}

/// 1-based menu number to 0-based index; 0 becomes an out-of-range index
pub(crate) fn to_index(number: u32) -> usize {
    (number as usize).checked_sub(1).unwrap_or(usize::MAX)
}
