mod config;
mod error;

use std::rc::Rc;

use common::subject_observer::Subject;
use dilemma::evolution::EvolutionLoop;
use dilemma_ext::{
    gateways::{LogGateway, StatsdGateway},
    ranking::{final_ranking, FinalStanding},
};
use log::{debug, info};
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

use crate::{config::app::AppConfig, error::AppError};

fn run(app_config: &AppConfig) -> Result<Vec<FinalStanding>, AppError> {
    let seed = app_config.seed.unwrap_or_else(|| thread_rng().gen());
    info!("Using seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut evolution =
        EvolutionLoop::new(app_config.strategies()?, app_config.match_engine()?)?;
    evolution.register_observer(Rc::new(LogGateway::new(log::Level::Debug)));
    if let Some(host) = &app_config.statsd_host {
        let gateway = StatsdGateway::new(
            (host.as_str(), app_config.statsd_port),
            app_config.statsd_factor,
        )?;
        evolution.register_observer(Rc::new(gateway));
    }

    let settings = app_config.evolution_config();
    debug!("Running evolution with configuration: {settings:?}");
    let history = evolution.run(&settings, &mut rng)?;
    info!(
        "Evolution {:?} after {} generation(s)",
        evolution.status(),
        evolution.generation()
    );
    if !evolution.banned().is_empty() {
        info!("Banned: {}", evolution.banned().join(", "));
    }

    Ok(final_ranking(&history))
}

fn main() -> Result<(), AppError> {
    config::log::init();
    let app_config = AppConfig::new()?;
    debug!("Loaded configuration: {app_config:?}");

    let standings = run(&app_config)?;

    info!("Final ranking (weighted by generation, cooperation as tiebreak)");
    info!("{:<5} {:<22} {:>15} {:>10}", "Rank", "Bot", "Weighted score", "Coop %");
    for standing in &standings {
        info!(
            "{:<5} {:<22} {:>15.2} {:>10.2}",
            standing.rank, standing.bot, standing.weighted_score, standing.avg_coop_pct
        );
    }
    Ok(())
}
