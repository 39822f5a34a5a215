use super::cli_examples::{diagnostics_menu, examples_menu};
use super::cli_explorer::{molecules_menu, sandwiches_menu};
use super::cli_game::game_menu;
use log::warn;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => molecules_menu(),
            "2" => sandwiches_menu(),
            "3" => game_menu(),
            "4" => diagnostics_menu(),
            "5" => examples_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to RPAL: reactants, products and leftovers\n
    make molecules and sandwiches, then play the game \n \x1b[0m"
    );
    println!("\x1b[33m1. Molecules\x1b[0m");
    println!("\x1b[33m2. Sandwiches\x1b[0m");
    println!("\x1b[33m3. Game\x1b[0m");
    println!("\x1b[33m4. Diagnostics\x1b[0m");
    println!("\x1b[33m5. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

/// prints `text` in cyan without a newline
pub(crate) fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    if let Err(e) = io::stdout().flush() {
        warn!("could not flush stdout: {}", e);
    }
}

/// One line from stdin. End of input reads as "0" so that every menu can be left.
pub(crate) fn get_user_input() -> String {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "0".to_string(),
        Ok(_) => input,
    }
}

/// "q 1 4" -> ("q", [1, 4]); None when a number does not parse
pub(crate) fn parse_command(line: &str) -> Option<(String, Vec<u32>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let numbers = parts
        .map(|part| part.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;
    Some((command, numbers))
}
