//! This module reimports a common used types.

pub use crate::evolution::Evolver;
pub use crate::evolution::EvolverBuilder;
pub use crate::evolution::{Telemetry, TelemetryMetrics, TelemetryMode};

pub use crate::genome::Chromosome;
pub use crate::genome::Species;
pub use crate::genome::{Fitness, Gene};

pub use crate::operators::{Crossover, Mutator, NaturalSelection};
pub use crate::operators::{DavisOrderCrossover, MultiPointCrossover, WholeArithmeticRecombination};
pub use crate::operators::{InversionMutation, RandomResettingMutation, ScrambleMutation, SwapMutation};
pub use crate::operators::{RankedSelection, StochasticUniversalSampling, TournamentSelection};

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::{Random, RandomGen};
