use super::cli_explorer::to_index;
use super::cli_main::{get_user_input, parse_command, prompt};
use crate::Game::challenge::Challenge;
use crate::Game::challenge_factory::ChallengeFactory;
use crate::Game::game_session::{GameSession, PlayState};
use crate::Game::guess::GuessSide;
use crate::Stoichiometry::recipes::RecipeRegistry;
use crate::settings::{GameSettings, GenerationMode};
use log::error;
use std::error::Error;

pub fn game_menu() {
    let registry = RecipeRegistry::molecules();
    let mut settings = GameSettings::new();
    loop {
        println!("\n=== Game ===");
        for level in 0..settings.number_of_levels() {
            println!("{}. Level {}", level + 1, level + 1);
        }
        println!("s. Settings");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");

        let choice = get_user_input();
        match choice.trim() {
            "0" => break,
            "s" | "S" => settings_menu(&registry, &mut settings),
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 && n <= settings.number_of_levels() => {
                    let factory = ChallengeFactory::new(&registry, &settings);
                    match factory.create_level_challenges(&mut rand::thread_rng(), n - 1) {
                        Ok(challenges) => play(GameSession::new(n - 1, challenges)),
                        Err(e) => {
                            error!("level {} could not be generated: {}", n, e);
                            println!("{}", e);
                        }
                    }
                }
                _ => println!("Invalid choice. Please try again."),
            },
        }
    }
}

fn show_challenge(session: &GameSession, challenge: &Challenge) {
    let options = challenge.options();
    println!(
        "\nLevel {}, challenge {} of {}: {}",
        session.level() + 1,
        session.index() + 1,
        session.challenges().len(),
        challenge.reaction()
    );
    if !options.molecules_visible {
        println!("(molecules hidden)");
    }
    if !options.numbers_visible {
        println!("(numbers hidden)");
    }
    let reveal = session.state() == PlayState::Next;
    challenge.to_table(reveal).printstd();
}

fn play(mut session: GameSession) {
    while !session.is_finished() {
        let Some(challenge) = session.current() else {
            break;
        };
        show_challenge(&session, challenge);
        let hidden = challenge.hidden();
        match session.state() {
            PlayState::Check => match hidden {
                GuessSide::Before => println!("r <reactant> <quantity>  guess a reactant"),
                GuessSide::After => {
                    println!("p <product> <quantity>  guess a product");
                    println!("l <leftover> <quantity>  guess a leftover");
                }
            },
            PlayState::TryAgain => println!("Not quite. t  try again"),
            PlayState::ShowAnswer => println!("Still not right. s  show answer"),
            PlayState::Next => println!("n  next"),
        }
        println!("c  check, 0  quit level");
        println!("score {}", session.score());
        prompt("> ");

        let line = get_user_input();
        let Some((command, numbers)) = parse_command(&line) else {
            println!("Invalid command.");
            continue;
        };
        match (command.as_str(), numbers.as_slice()) {
            ("0", []) => return,
            ("c", []) => {
                session.check();
            }
            ("t", []) => {
                session.try_again();
            }
            ("s", []) => {
                session.show_answer();
            }
            ("n", []) => {
                session.next();
            }
            (side @ ("r" | "p" | "l"), [index, value]) => {
                if session.state() != PlayState::Check {
                    println!("the guess can only be edited before Check");
                    continue;
                }
                let Some(challenge) = session.current_mut() else {
                    continue;
                };
                let guess = challenge.guess_mut();
                let index = to_index(*index);
                let result = match side {
                    "r" => guess.set_reactant_quantity(index, *value),
                    "p" => guess.set_product_quantity(index, *value),
                    _ => guess.set_leftover_quantity(index, *value),
                };
                if let Err(e) = result {
                    println!("{}", e);
                }
            }
            _ => println!("Invalid command."),
        }
    }
    println!(
        "\nLevel {} done: {} of {} points{}",
        session.level() + 1,
        session.score(),
        session.perfect_score(),
        if session.is_perfect() { ", perfect!" } else { "" }
    );
}

fn settings_menu(registry: &RecipeRegistry, settings: &mut GameSettings) {
    loop {
        println!("\n=== Game Settings ({}) ===", settings.config_file());
        println!("max quantity: {}", settings.max_quantity());
        println!("generation mode: {:?}", settings.generation_mode());
        for level in 0..settings.number_of_levels() {
            if let Some(config) = settings.level(level) {
                println!(
                    "level {}: {} recipes, {} challenges, hidden {:?}",
                    level + 1,
                    config.recipes.len(),
                    config.number_of_challenges,
                    config.hidden
                );
            }
        }
        println!("1. Set max quantity");
        println!("2. Switch generation mode");
        println!("3. Save");
        println!("4. Reset to defaults");
        println!("0. Back");
        prompt("Enter your choice: ");

        let choice = get_user_input();
        match choice.trim() {
            "0" => break,
            "1" => {
                prompt("max quantity: ");
                let input = get_user_input();
                match input.trim().parse::<u32>() {
                    Ok(value) => {
                        if let Err(e) = update_max_quantity(registry, settings, value) {
                            println!("max quantity not changed: {}", e);
                        }
                    }
                    Err(_) => println!("not a number"),
                }
            }
            "2" => {
                let mode = match settings.generation_mode() {
                    GenerationMode::Random => GenerationMode::Exhaustive,
                    GenerationMode::Exhaustive => GenerationMode::Random,
                };
                settings.set_generation_mode(mode);
            }
            "3" => match save_checked(registry, settings) {
                Ok(()) => println!("saved to {}", settings.config_file()),
                Err(e) => println!("not saved: {}", e),
            },
            "4" => settings.reset_to_defaults(),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// changes the ceiling only if every level can still be generated under it
fn update_max_quantity(
    registry: &RecipeRegistry,
    settings: &mut GameSettings,
    max_quantity: u32,
) -> Result<(), Box<dyn Error>> {
    ChallengeFactory::new(registry, settings).check_max_quantity(max_quantity)?;
    settings.set_max_quantity(max_quantity)?;
    Ok(())
}

/// saves the settings unless some level could not be generated with them
fn save_checked(registry: &RecipeRegistry, settings: &GameSettings) -> Result<(), Box<dyn Error>> {
    ChallengeFactory::new(registry, settings).check_max_quantity(settings.max_quantity())?;
    settings.save_config()?;
    Ok(())
}
