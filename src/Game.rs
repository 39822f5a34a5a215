/// eng
/// The player's working answer: quantities for reactants, products and leftovers, with the hidden side zeroed.
pub mod guess;
/// eng
/// One quiz item: a reaction with ground-truth quantities, the guess, the hidden side and the points earned.
pub mod challenge;
/// eng
/// Generation of the challenge set of a level. Every set has exactly one challenge in which nothing reacts,
/// no recipe used twice, every reactant present and no quantity above the configured ceiling.
/// Quantities that overflow the ceiling are repaired by lowering reactants round-robin.
///
///  # Examples
/// ```
/// use RPAL::Game::challenge_factory::ChallengeFactory;
/// use RPAL::Stoichiometry::recipes::RecipeRegistry;
/// use RPAL::settings::GameSettings;
/// use rand::SeedableRng;
/// let registry = RecipeRegistry::molecules();
/// let settings = GameSettings::default();
/// let factory = ChallengeFactory::new(&registry, &settings);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let challenges = factory.create_level_challenges(&mut rng, 1).unwrap();
/// assert_eq!(challenges.len(), 5);
/// ```
pub mod challenge_factory;
mod challenge_factory_tests;
/// Self-test of the generator: regenerates many sets per level and counts broken rules
pub mod diagnostics;
/// Check / Try Again / Show Answer / Next scoring of one challenge set
pub mod game_session;
