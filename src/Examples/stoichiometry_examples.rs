use crate::Game::challenge_factory::ChallengeFactory;
use crate::Game::diagnostics::run_diagnostics;
use crate::Game::game_session::{GameSession, PlayState};
use crate::Stoichiometry::reaction::Reaction;
use crate::Stoichiometry::recipes::{MOLECULE_SCREEN_RECIPES, RecipeRegistry};
use crate::Stoichiometry::substance::{Icon, Substance};
use crate::settings::GameSettings;
use log::error;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;

type ExampleResult = Result<(), Box<dyn Error>>;

pub fn stoich_examples(task: usize) {
    let result = match task {
        0 => limiting_reagent(),
        1 => molecules_screen(),
        2 => custom_sandwich(),
        3 => challenge_generation(),
        4 => scripted_session(),
        5 => {
            // DIAGNOSTICS of the default game content
            let registry = RecipeRegistry::molecules();
            let settings = GameSettings::default();
            let factory = ChallengeFactory::new(&registry, &settings);
            let mut rng = StdRng::seed_from_u64(1);
            run_diagnostics(&factory, &mut rng, 200, settings.max_quantity()).pretty_print();
            Ok(())
        }
        _ => {
            println!("no example with number {}", task);
            Ok(())
        }
    };
    if let Err(e) = result {
        error!("example {} failed: {}", task, e);
    }
}

/// 2A + B -> C with 4 A and 1 B: B runs out after one reaction, 2 A are left
fn limiting_reagent() -> ExampleResult {
    let reactants = vec![
        Substance::new(2, "A", Icon::new("A"), 4),
        Substance::new(1, "B", Icon::new("B"), 1),
    ];
    let products = vec![Substance::new(1, "C", Icon::new("C"), 0)];
    let mut reaction = Reaction::new(reactants, products, Some("2A + B"))?;
    reaction.pretty_print();
    println!("number of reactions: {}", reaction.number_of_reactions());
    // one more B lets a second reaction happen
    reaction.set_reactant_quantity(1, 2)?;
    reaction.pretty_print();
    println!("number of reactions: {}", reaction.number_of_reactions());
    Ok(())
}

fn molecules_screen() -> ExampleResult {
    let registry = RecipeRegistry::molecules();
    for &(id, _, _) in MOLECULE_SCREEN_RECIPES {
        let mut reaction = registry.build(id)?;
        for index in 0..reaction.reactants().len() {
            reaction.set_reactant_quantity(index, 3 + index as u32)?;
        }
        println!("{}", reaction);
        reaction.pretty_print();
    }
    Ok(())
}

fn custom_sandwich() -> ExampleResult {
    let registry = RecipeRegistry::sandwiches();
    let mut custom = registry.build("custom")?;
    println!("is a reaction with all coefficients 0: {}", custom.is_reaction());
    custom.set_reactant_coefficient(0, 2)?;
    custom.set_reactant_coefficient(2, 1)?;
    custom.set_reactant_quantity(0, 5)?;
    custom.set_reactant_quantity(1, 3)?;
    custom.set_reactant_quantity(2, 2)?;
    println!("{} is a reaction: {}", custom, custom.is_reaction());
    custom.pretty_print();
    // fixed recipes refuse coefficient edits
    let mut cheese = registry.build("cheese")?;
    if let Err(e) = cheese.set_reactant_coefficient(0, 3) {
        println!("expected error: {}", e);
    }
    Ok(())
}

fn challenge_generation() -> ExampleResult {
    let registry = RecipeRegistry::molecules();
    let settings = GameSettings::default();
    let factory = ChallengeFactory::new(&registry, &settings);
    let mut rng = StdRng::seed_from_u64(2024);
    for level in 0..factory.number_of_levels() {
        println!("\n=== Level {} ===", level + 1);
        for challenge in factory.create_level_challenges(&mut rng, level)? {
            println!("{}", challenge.reaction().label());
            challenge.to_table(true).printstd();
        }
    }
    Ok(())
}

/// wrong twice on the first challenge, right on the first try for the others
fn scripted_session() -> ExampleResult {
    let registry = RecipeRegistry::molecules();
    let settings = GameSettings::default();
    let factory = ChallengeFactory::new(&registry, &settings);
    let mut rng = StdRng::seed_from_u64(7);
    let challenges = factory.create_level_challenges(&mut rng, 1)?;
    let mut session = GameSession::new(1, challenges);
    while !session.is_finished() {
        if session.index() == 0 {
            session.check();
            session.try_again();
            session.check();
            session.show_answer();
        } else if let Some(challenge) = session.current_mut() {
            let answer = challenge.reaction().clone();
            challenge.guess_mut().copy_quantities_from(&answer);
            if session.check() != PlayState::Next {
                println!("challenge {} not accepted", session.index() + 1);
            }
        }
        session.next();
    }
    println!("score {} of {}", session.score(), session.perfect_score());
    Ok(())
}
