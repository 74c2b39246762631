use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which takes a string message.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific settings shared by an experiment: the
/// random source and a logger.
pub struct Environment {
    /// A random generator used by all stochastic operations.
    pub random: Arc<dyn Random + Send + Sync>,
    /// A logger which writes evolution progress.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Arc::new(|msg: &str| println!("{msg}")))
    }
}
