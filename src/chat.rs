use log::info;
use responder::{ConfigError, RandomSource, Responder, ResponderConfig, SeededRandom, ThreadRandom};

mod config;
pub(crate) mod session;
pub(crate) mod store;

pub use config::{Config, QuickAction};

pub type ChatResponder = Responder<Box<dyn RandomSource>>;

pub fn build_responder(
    config: &Config,
    tables: ResponderConfig,
) -> Result<ChatResponder, ConfigError> {
    let random: Box<dyn RandomSource> = match config.response_seed {
        Some(seed) => {
            info!("Using seeded response selection ({seed})");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom),
    };
    Responder::with_random(tables, random)
}
