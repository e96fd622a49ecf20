use rand::Rng;

use crate::{Bot, Strategy};

use super::EvolutionConfig;

/// Largest forgiveness step applied to a clone.
pub const MUTATION_STEP: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CloningPool {
    pub survivors: usize,
    pub clones_per_survivor: usize,
    pub mutate: bool,
}

impl CloningPool {
    pub fn from_config(config: &EvolutionConfig, candidates: usize, population_size: usize) -> Self {
        let survivors = survivor_count(candidates, config.survival_rate);
        CloningPool {
            survivors,
            clones_per_survivor: if survivors > 0 {
                population_size / survivors
            } else {
                0
            },
            mutate: config.mutate,
        }
    }
}

/// `max(1, floor(candidates * rate))`, never above `candidates`.
pub fn survivor_count(candidates: usize, survival_rate: f64) -> usize {
    ((candidates as f64 * survival_rate) as usize)
        .max(1)
        .min(candidates)
}

/// Builds the next population from templates given in rank order.
///
/// Each template yields `clones_per_survivor` fresh clones; the result is
/// truncated, or padded by cycling the templates, to `population_size`.
pub fn reproduce(
    templates: &[&Bot],
    pool: &CloningPool,
    population_size: usize,
    rng: &mut impl Rng,
) -> Vec<Bot> {
    if templates.is_empty() {
        return vec![];
    }

    let ranked = templates
        .iter()
        .flat_map(|template| std::iter::repeat(*template).take(pool.clones_per_survivor));
    let padding = templates.iter().copied().cycle();

    ranked
        .chain(padding)
        .take(population_size)
        .map(|template| {
            let mut clone = template.spawn();
            if pool.mutate {
                mutate(clone.strategy_mut(), rng);
            }
            clone
        })
        .collect()
}

pub fn mutate(strategy: &mut dyn Strategy, rng: &mut impl Rng) {
    if let Some(forgiveness) = strategy.forgiveness_mut() {
        let delta = rng.gen_range(-MUTATION_STEP..=MUTATION_STEP);
        *forgiveness = (*forgiveness + delta).clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use common_test::get_seeded_rng;

    use super::{mutate, reproduce, survivor_count, CloningPool, MUTATION_STEP};
    use crate::{
        evolution::EvolutionConfig,
        test_utils::{Constant, Forgiving, Mirror, DEFAULT_FORGIVENESS},
        Bot, Strategy,
    };

    #[test]
    fn test_survivor_count() {
        assert_eq!(1, survivor_count(7, 0.0));
        assert_eq!(3, survivor_count(7, 0.5));
        assert_eq!(4, survivor_count(7, 0.7));
        assert_eq!(7, survivor_count(7, 1.0));
        assert_eq!(0, survivor_count(0, 0.5));
    }

    #[test]
    fn test_cloning_pool_from_config() {
        // Given
        let config = EvolutionConfig {
            survival_rate: 0.5,
            mutate: false,
            ..Default::default()
        };

        // When
        let result = CloningPool::from_config(&config, 6, 7);

        // Then
        assert_eq!(
            CloningPool {
                survivors: 3,
                clones_per_survivor: 2,
                mutate: false
            },
            result
        );
    }

    #[test]
    fn test_reproduce_should_pad_with_top_ranked() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let first = Bot::new(Box::new(Mirror));
        let second = Bot::new(Box::new(Constant::cooperator()));
        let third = Bot::new(Box::new(Constant::defector()));
        let pool = CloningPool {
            survivors: 3,
            clones_per_survivor: 2,
            mutate: false,
        };

        // When
        let result = reproduce(&[&first, &second, &third], &pool, 7, &mut rng);

        // Then
        let names = result.iter().map(Bot::name).collect::<Vec<_>>();
        assert_eq!(
            vec!["Mirror", "Mirror", "Cooperator", "Cooperator", "Defector", "Defector", "Mirror"],
            names
        );
    }

    #[test]
    fn test_reproduce_should_truncate_to_population_size() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let first = Bot::new(Box::new(Mirror));
        let pool = CloningPool {
            survivors: 1,
            clones_per_survivor: 5,
            mutate: false,
        };

        // When
        let result = reproduce(&[&first], &pool, 3, &mut rng);

        // Then
        assert_eq!(3, result.len());
    }

    #[test]
    fn test_reproduce_should_return_fresh_clones() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let mut template = Bot::new(Box::new(Forgiving { forgiveness: 0.9 }));
        template.record_result(crate::Move::Cooperate, crate::Move::Defect);
        let pool = CloningPool {
            survivors: 1,
            clones_per_survivor: 2,
            mutate: false,
        };

        // When
        let mut result = reproduce(&[&template], &pool, 2, &mut rng);

        // Then
        for clone in result.iter_mut() {
            assert!(clone.history().is_empty());
            assert_eq!(
                Some(DEFAULT_FORGIVENESS),
                clone.strategy_mut().forgiveness_mut().copied(),
                "Should be default-constructed"
            );
        }
    }

    #[test]
    fn test_mutate_should_stay_within_step_and_bounds() {
        let mut rng = get_seeded_rng().unwrap();
        for _ in 0..200 {
            let mut strategy = Forgiving::default();
            mutate(&mut strategy, &mut rng);
            assert!((strategy.forgiveness - DEFAULT_FORGIVENESS).abs() <= MUTATION_STEP + 1e-12);

            let mut strategy = Forgiving { forgiveness: 1.0 };
            mutate(&mut strategy, &mut rng);
            assert!(strategy.forgiveness <= 1.0);

            let mut strategy = Forgiving { forgiveness: 0.0 };
            mutate(&mut strategy, &mut rng);
            assert!(strategy.forgiveness >= 0.0);
        }
    }

    #[test]
    fn test_mutate_should_ignore_kinds_without_forgiveness() {
        let mut rng = get_seeded_rng().unwrap();
        let mut strategy = Mirror;

        mutate(&mut strategy, &mut rng);

        assert!(strategy.forgiveness_mut().is_none());
    }
}
