/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Game::challenge::{Challenge, PlayOptions};
    use crate::Game::challenge_factory::{
        ChallengeError, ChallengeFactory, fix_quantity_range_violation, has_quantity_range_violation,
    };
    use crate::Game::guess::GuessSide;
    use crate::Stoichiometry::reaction::Reaction;
    use crate::Stoichiometry::recipes::RecipeRegistry;
    use crate::Stoichiometry::stoich_errors::StoichiometryError;
    use crate::settings::{GameConfig, GameSettings, GenerationMode, LevelConfig};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const MAX: u32 = 8;

    fn assert_set_rules(challenges: &[Challenge], max_quantity: u32, mode: GenerationMode) {
        let mut equations = HashSet::new();
        let mut zero_products = 0;
        for challenge in challenges {
            let reaction = challenge.reaction();
            assert!(
                reaction.reactants().iter().all(|r| r.quantity() >= 1),
                "reactant at 0 in {}",
                reaction.quantities_string()
            );
            assert!(
                reaction.substances().all(|s| s.quantity() <= max_quantity),
                "quantity above {} in {}",
                max_quantity,
                reaction.quantities_string()
            );
            assert!(equations.insert(reaction.equation()), "{} used twice", reaction.equation());
            if reaction.has_no_products() {
                zero_products += 1;
            }
        }
        if mode == GenerationMode::Random {
            assert_eq!(zero_products, 1);
        }
    }

    fn settings_with_level(recipes: &[&str], count: usize) -> GameSettings {
        let config = GameConfig {
            max_quantity: MAX,
            generation_mode: GenerationMode::Random,
            levels: vec![LevelConfig {
                recipes: recipes.iter().map(|s| s.to_string()).collect(),
                hidden: GuessSide::After,
                number_of_challenges: count,
                options: PlayOptions::default(),
            }],
        };
        GameSettings::from_config(config, "unused.json").unwrap()
    }

    #[test]
    fn test_generator_rules_over_many_sets() {
        let registry = RecipeRegistry::molecules();
        let settings = GameSettings::default();
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(2024);
        for level in 0..factory.number_of_levels() {
            for _ in 0..150 {
                let challenges = factory
                    .create_challenges(&mut rng, level, MAX, PlayOptions::default())
                    .unwrap();
                assert_eq!(challenges.len(), factory.number_of_challenges(level).unwrap());
                assert_set_rules(&challenges, MAX, GenerationMode::Random);
            }
        }
    }

    #[test]
    fn test_hidden_side_per_level() {
        let registry = RecipeRegistry::molecules();
        let settings = GameSettings::default();
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(1);
        let expected = [GuessSide::Before, GuessSide::After, GuessSide::After];
        for (level, hidden) in expected.iter().enumerate() {
            let challenges = factory.create_level_challenges(&mut rng, level).unwrap();
            assert!(challenges.iter().all(|c| c.hidden() == *hidden));
            let options = settings.level(level).unwrap().options;
            assert!(challenges.iter().all(|c| c.options() == options));
        }
    }

    #[test]
    fn test_guess_starts_unsolved_except_when_answer_is_all_zero() {
        let registry = RecipeRegistry::molecules();
        let settings = GameSettings::default();
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(99);
        let mut challenges = factory.create_level_challenges(&mut rng, 1).unwrap();
        for challenge in challenges.iter_mut() {
            // leftovers are hidden too and reactants are >= 1, so a fresh guess is never right
            assert!(!challenge.is_correct());
            challenge.show_answer();
            assert!(challenge.is_correct());
        }
    }

    #[test]
    fn test_same_seed_same_challenges() {
        let registry = RecipeRegistry::molecules();
        let settings = GameSettings::default();
        let factory = ChallengeFactory::new(&registry, &settings);
        let first = factory
            .create_level_challenges(&mut StdRng::seed_from_u64(42), 2)
            .unwrap();
        let second = factory
            .create_level_challenges(&mut StdRng::seed_from_u64(42), 2)
            .unwrap();
        let describe = |set: &[Challenge]| {
            set.iter()
                .map(|c| c.reaction().quantities_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(describe(&first), describe(&second));
    }

    #[test]
    fn test_exhaustive_mode_plays_every_recipe_once() {
        let registry = RecipeRegistry::molecules();
        let mut settings = GameSettings::default();
        settings.set_generation_mode(GenerationMode::Exhaustive);
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(5);
        for level in 0..factory.number_of_levels() {
            let pool = &settings.level(level).unwrap().recipes;
            let challenges = factory.create_level_challenges(&mut rng, level).unwrap();
            assert_eq!(challenges.len(), pool.len());
            assert_eq!(factory.number_of_challenges(level).unwrap(), pool.len());
            assert_set_rules(&challenges, MAX, GenerationMode::Exhaustive);
            assert!(challenges.iter().all(|c| !c.reaction().has_no_products()));
            // pool order is kept
            let first = registry.build(&pool[0]).unwrap();
            assert_eq!(challenges[0].reaction().equation(), first.equation());
        }
    }

    #[test]
    fn test_repair_coefficients_1_3_at_ceiling() {
        let mut reaction = Reaction::from_equation("A + 3B -> 5C", None).unwrap();
        reaction.set_reactant_quantity(0, 8).unwrap();
        reaction.set_reactant_quantity(1, 8).unwrap();
        // 2 cycles make 10 C
        assert!(has_quantity_range_violation(&reaction, 8));
        fix_quantity_range_violation(&mut reaction, 8).unwrap();
        assert!(reaction.substances().all(|s| s.quantity() <= 8));
        assert!(reaction.reactants().iter().all(|r| r.quantity() >= 1));
        assert_eq!(reaction.number_of_reactions(), 1);
    }

    #[test]
    fn test_repair_clamps_reactants_first() {
        let mut reaction = Reaction::from_equation("2A + B -> C", None).unwrap();
        reaction.set_reactant_quantity(0, 12).unwrap();
        reaction.set_reactant_quantity(1, 1).unwrap();
        fix_quantity_range_violation(&mut reaction, 8).unwrap();
        assert_eq!(reaction.reactants()[0].quantity(), 8);
        assert_eq!(reaction.reactants()[1].quantity(), 1);
        assert_eq!(reaction.leftovers()[0].quantity(), 6);
    }

    #[test]
    fn test_repair_leaves_valid_reaction_alone() {
        let mut reaction = Reaction::from_equation("2A + B -> C", None).unwrap();
        reaction.set_reactant_quantity(0, 5).unwrap();
        reaction.set_reactant_quantity(1, 3).unwrap();
        let before = reaction.quantities_string();
        fix_quantity_range_violation(&mut reaction, 8).unwrap();
        assert_eq!(reaction.quantities_string(), before);
    }

    #[test]
    fn test_repair_gives_up_when_recipe_cannot_fit() {
        let mut reaction = Reaction::from_equation("A + B -> 9C", Some("Huge")).unwrap();
        reaction.set_reactant_quantity(0, 3).unwrap();
        reaction.set_reactant_quantity(1, 2).unwrap();
        let result = fix_quantity_range_violation(&mut reaction, 8);
        assert!(matches!(
            result,
            Err(ChallengeError::QuantityRangeViolation { max_quantity: 8, .. })
        ));
        assert!(reaction.reactants().iter().all(|r| r.quantity() == 1));
    }

    #[test]
    fn test_zero_products_slot_skips_all_ones_recipes() {
        let registry = RecipeRegistry::molecules();
        // only "water" can give zero products; the two all-ones recipes must still be played
        let settings = settings_with_level(&["carbon_dioxide", "water", "phosphorus_pentachloride"], 3);
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            let challenges = factory.create_level_challenges(&mut rng, 0).unwrap();
            assert_set_rules(&challenges, MAX, GenerationMode::Random);
            let zero = challenges
                .iter()
                .find(|c| c.reaction().has_no_products())
                .unwrap();
            assert_eq!(zero.reaction().equation(), "2 H2 + 1 O2 -> 2 H2O");
        }
    }

    #[test]
    fn test_no_zero_products_candidate() {
        let registry = RecipeRegistry::molecules();
        let settings = settings_with_level(&["carbon_dioxide", "phosphorus_pentachloride"], 2);
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(
            factory.create_level_challenges(&mut rng, 0).unwrap_err(),
            ChallengeError::NoZeroProductsCandidate { level: 0 }
        );
    }

    #[test]
    fn test_configuration_errors() {
        let registry = RecipeRegistry::molecules();
        let settings = GameSettings::default();
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            factory.number_of_challenges(3).unwrap_err(),
            ChallengeError::UnknownLevel {
                level: 3,
                available: 3
            }
        );
        assert_eq!(
            factory
                .create_challenges(&mut rng, 0, 0, PlayOptions::default())
                .unwrap_err(),
            ChallengeError::InvalidMaxQuantity
        );

        let small = settings_with_level(&["water", "ammonia"], 3);
        let factory = ChallengeFactory::new(&registry, &small);
        assert_eq!(
            factory.create_level_challenges(&mut rng, 0).unwrap_err(),
            ChallengeError::NotEnoughRecipes {
                level: 0,
                required: 3,
                available: 2
            }
        );

        let unknown = settings_with_level(&["water", "unobtainium"], 2);
        let factory = ChallengeFactory::new(&registry, &unknown);
        assert_eq!(
            factory.create_level_challenges(&mut rng, 0).unwrap_err(),
            ChallengeError::Stoichiometry(StoichiometryError::UnknownRecipe("unobtainium".to_string()))
        );
    }

    #[test]
    fn test_coefficient_above_ceiling() {
        let registry = RecipeRegistry::molecules();
        let settings = settings_with_level(&["water", "combust_ethane"], 2);
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(4);
        // 7 O2 cannot complete a cycle under a ceiling of 6, the pool is rejected before drawing
        for _ in 0..20 {
            let err = factory
                .create_challenges(&mut rng, 0, 6, PlayOptions::default())
                .unwrap_err();
            assert!(matches!(
                err,
                ChallengeError::CoefficientAboveMaxQuantity { coefficient: 7, max_quantity: 6, .. }
            ));
        }
        assert!(factory.create_challenges(&mut rng, 0, 7, PlayOptions::default()).is_ok());
    }

    #[test]
    fn test_product_coefficient_above_ceiling() {
        let mut registry = RecipeRegistry::new();
        registry.register_equation("huge", "Huge", "2A + B -> 9C");
        registry.register_equation("small", "Small", "2X + Y -> Z");
        let settings = settings_with_level(&["huge", "small"], 2);
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(19);
        // repair of "huge" as a regular slot could only end with no reaction at all
        for _ in 0..50 {
            assert_eq!(
                factory.create_level_challenges(&mut rng, 0).unwrap_err(),
                ChallengeError::CoefficientAboveMaxQuantity {
                    reaction: "Huge".to_string(),
                    symbol: "C".to_string(),
                    coefficient: 9,
                    max_quantity: 8
                }
            );
        }
        let mut exhaustive = settings.clone();
        exhaustive.set_generation_mode(GenerationMode::Exhaustive);
        let factory = ChallengeFactory::new(&registry, &exhaustive);
        assert!(factory.create_level_challenges(&mut rng, 0).is_err());
    }

    #[test]
    fn test_low_ceiling_never_gives_two_zero_products_challenges() {
        let registry = RecipeRegistry::molecules();
        let settings = GameSettings::default();
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(5);
        for max_quantity in 1..=8 {
            for level in 0..factory.number_of_levels() {
                for _ in 0..40 {
                    match factory.create_challenges(&mut rng, level, max_quantity, PlayOptions::default()) {
                        Ok(challenges) => assert_set_rules(&challenges, max_quantity, GenerationMode::Random),
                        Err(e) => assert!(
                            matches!(e, ChallengeError::CoefficientAboveMaxQuantity { .. }),
                            "{}",
                            e
                        ),
                    }
                }
            }
        }
        // level 3 has recipes with 7 O2
        assert!(factory.create_challenges(&mut rng, 2, 5, PlayOptions::default()).is_err());
    }

    #[test]
    fn test_check_max_quantity() {
        let registry = RecipeRegistry::molecules();
        let settings = GameSettings::default();
        let factory = ChallengeFactory::new(&registry, &settings);
        assert!(factory.check_max_quantity(8).is_ok());
        assert!(factory.check_max_quantity(7).is_ok());
        assert!(matches!(
            factory.check_max_quantity(6),
            Err(ChallengeError::CoefficientAboveMaxQuantity { coefficient: 7, .. })
        ));
        assert_eq!(factory.check_max_quantity(0), Err(ChallengeError::InvalidMaxQuantity));
    }

    #[test]
    fn test_repeated_pool_entries_are_not_reused() {
        let registry = RecipeRegistry::molecules();
        let settings = settings_with_level(&["water", "water", "ammonia"], 2);
        let factory = ChallengeFactory::new(&registry, &settings);
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..30 {
            let challenges = factory.create_level_challenges(&mut rng, 0).unwrap();
            assert_set_rules(&challenges, MAX, GenerationMode::Random);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn generated_sets_follow_rules(seed in any::<u64>(), level in 0usize..3, max_quantity in 1u32..20) {
            let registry = RecipeRegistry::molecules();
            let settings = GameSettings::default();
            let factory = ChallengeFactory::new(&registry, &settings);
            let mut rng = StdRng::seed_from_u64(seed);
            let largest = settings
                .level(level)
                .unwrap()
                .recipes
                .iter()
                .map(|id| {
                    let reaction = registry.build(id).unwrap();
                    reaction.substances().map(|s| s.coefficient()).max().unwrap_or(0)
                })
                .max()
                .unwrap();
            let result = factory.create_challenges(&mut rng, level, max_quantity, PlayOptions::default());
            if max_quantity < largest {
                let rejected = matches!(result, Err(ChallengeError::CoefficientAboveMaxQuantity { .. }));
                prop_assert!(rejected);
            } else {
                let challenges = result.unwrap();
                prop_assert_eq!(challenges.len(), 5);
                let zero_products = challenges.iter().filter(|c| c.reaction().has_no_products()).count();
                prop_assert_eq!(zero_products, 1);
                for challenge in &challenges {
                    prop_assert!(challenge.reaction().reactants().iter().all(|r| r.quantity() >= 1));
                    prop_assert!(challenge.reaction().max_quantity() <= max_quantity);
                }
            }
        }
    }
}
