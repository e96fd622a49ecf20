use std::str::FromStr;

use config::{Config, Environment, File, FileFormat};
use dilemma::{
    evolution::EvolutionConfig,
    game::{GameError, MatchEngine},
    PayoffMatrix, Strategy,
};
use serde::Deserialize;
use strategies::{configured_roster, StrategyKind};

use crate::error::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";
const LOCAL_CONFIG_FILE: &str = "dilemma";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Drawn at random, then logged, when absent.
    pub seed: Option<u64>,
    pub noise_rate: f64,
    pub temptation: f64,
    pub reward: f64,
    pub punishment: f64,
    pub sucker: f64,
    pub generations: u32,
    pub survival_rate: f64,
    pub rounds_per_match: usize,
    pub mutate: bool,
    pub ban_threshold: f64,
    pub roster: Vec<String>,
    /// Starting forgiveness of generous tit-for-tat, its own default when absent.
    pub forgiveness: Option<f64>,
    /// Statsd metrics are only sent when a host is set.
    pub statsd_host: Option<String>,
    pub statsd_port: u16,
    pub statsd_factor: f64,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name(LOCAL_CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(DEFAULT_CONFIG_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("roster"),
            )
            .build()?;

        config.try_deserialize().map_err(|e| e.into())
    }

    pub fn payoff_matrix(&self) -> PayoffMatrix {
        PayoffMatrix {
            temptation: self.temptation,
            reward: self.reward,
            punishment: self.punishment,
            sucker: self.sucker,
        }
    }

    pub fn match_engine(&self) -> Result<MatchEngine, GameError> {
        MatchEngine::new(self.noise_rate, self.payoff_matrix())
    }

    pub fn evolution_config(&self) -> EvolutionConfig {
        EvolutionConfig {
            generations: self.generations,
            survival_rate: self.survival_rate,
            rounds_per_match: self.rounds_per_match,
            mutate: self.mutate,
            ban_threshold: self.ban_threshold,
        }
    }

    pub fn strategies(&self) -> Result<Vec<Box<dyn Strategy>>, AppError> {
        Ok(configured_roster(&self.roster()?, self.forgiveness)?)
    }

    pub fn roster(&self) -> Result<Vec<StrategyKind>, AppError> {
        self.roster
            .iter()
            .map(|name| {
                StrategyKind::from_str(name.trim())
                    .map_err(|_| AppError::UnknownStrategy(name.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use strategies::StrategyKind;

    use super::AppConfig;
    use crate::error::AppError;

    #[test]
    fn test_new() {
        temp_env::with_vars_unset(["APP_GENERATIONS", "APP_ROSTER", "APP_SEED", "APP_FORGIVENESS"], || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(_)),
                "By default, it should return a valid config"
            );
            let config = result.unwrap();
            assert_eq!(None, config.seed);
            assert_eq!(None, config.forgiveness);
            assert_eq!(7, config.roster().unwrap().len());
            assert_eq!(None, config.statsd_host);
        });

        let generations = 3u32;
        temp_env::with_var("APP_GENERATIONS", Some(generations.to_string()), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.generations == generations),
                "Should take into account env vars"
            )
        });

        temp_env::with_var("APP_GENERATIONS", Some("invalid"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "Should return error when config is not valid"
            )
        });
    }

    #[test]
    fn test_roster_from_env() {
        temp_env::with_var("APP_ROSTER", Some("TitForTat,AlwaysDefect"), || {
            let config = AppConfig::new().unwrap();
            assert_eq!(
                vec![StrategyKind::TitForTat, StrategyKind::AlwaysDefect],
                config.roster().unwrap()
            );
        });

        temp_env::with_var("APP_ROSTER", Some("TitForTat,Grudger"), || {
            let config = AppConfig::new().unwrap();
            assert!(matches!(
                config.roster(),
                Err(AppError::UnknownStrategy(name)) if name == "Grudger"
            ));
        });
    }

    #[test]
    fn test_strategies_should_apply_forgiveness() {
        temp_env::with_vars(
            [("APP_ROSTER", Some("GenerousTitForTat")), ("APP_FORGIVENESS", Some("0.25"))],
            || {
                let config = AppConfig::new().unwrap();
                let mut strategies = config.strategies().unwrap();
                assert_eq!(Some(0.25), strategies[0].forgiveness_mut().copied());
            },
        );

        temp_env::with_vars(
            [("APP_ROSTER", Some("GenerousTitForTat")), ("APP_FORGIVENESS", Some("2"))],
            || {
                let config = AppConfig::new().unwrap();
                assert!(matches!(config.strategies(), Err(AppError::Strategy(_))));
            },
        );
    }

    #[test]
    fn test_derived_settings() {
        temp_env::with_vars([("APP_NOISE_RATE", Some("0.5")), ("APP_REWARD", Some("5"))], || {
            let config = AppConfig::new().unwrap();
            let engine = config.match_engine().unwrap();
            assert_eq!(0.5, engine.noise_rate());
            assert_eq!(5.0, engine.payoffs().reward);
            assert_eq!(config.survival_rate, config.evolution_config().survival_rate);
        });

        temp_env::with_var("APP_NOISE_RATE", Some("1.5"), || {
            let config = AppConfig::new().unwrap();
            assert!(config.match_engine().is_err());
        });
    }
}
