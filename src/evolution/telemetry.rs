//! A module which provides the logic to collect metrics about evolution
//! progress and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::genome::Fitness;
use crate::utils::InfoLogger;

/// Keeps essential information about one tracked generation.
pub struct TelemetryGeneration {
    /// Generation sequence number.
    pub number: usize,
    /// The best fitness present in the population.
    pub best: Fitness,
    /// The worst fitness present in the population.
    pub worst: Fitness,
    /// An average fitness of the population.
    pub mean: f64,
}

/// Encapsulates different measurements regarding algorithm execution.
#[derive(Default)]
pub struct TelemetryMetrics {
    /// Total amount of observed generations.
    pub generations: usize,
    /// Evolution progress.
    pub evolution: Vec<TelemetryGeneration>,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often the population state is logged.
        log_interval: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often the population state is tracked.
        track_interval: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often the population state is logged.
        log_interval: usize,
        /// Specifies how often the population state is tracked.
        track_interval: usize,
    },
}

/// Provides a way to collect metrics and write information into the log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { metrics: TelemetryMetrics::default(), mode }
    }

    /// Reports a scored generation.
    pub fn on_generation(&mut self, fitness: &[Fitness]) {
        let number = self.metrics.generations;
        self.metrics.generations += 1;

        if fitness.is_empty() {
            return;
        }

        let (best, worst) = fitness
            .iter()
            .fold((Fitness::MIN, Fitness::MAX), |(best, worst), &value| (best.max(value), worst.min(value)));
        let mean = fitness.iter().sum::<Fitness>() as f64 / fitness.len() as f64;

        let (logger, log_interval) = match &self.mode {
            TelemetryMode::OnlyLogging { logger, log_interval } => (Some(logger), *log_interval),
            TelemetryMode::All { logger, log_interval, .. } => (Some(logger), *log_interval),
            _ => (None, 0),
        };
        if let Some(logger) = logger {
            if number % log_interval.max(1) == 0 {
                (logger)(&format!("[{number}] best: {best}, worst: {worst}, mean: {mean:.2}"));
            }
        }

        let track_interval = match &self.mode {
            TelemetryMode::OnlyMetrics { track_interval } => Some(*track_interval),
            TelemetryMode::All { track_interval, .. } => Some(*track_interval),
            _ => None,
        };
        if let Some(track_interval) = track_interval {
            if number % track_interval.max(1) == 0 {
                self.metrics.evolution.push(TelemetryGeneration { number, best, worst, mean });
            }
        }
    }

    /// Returns all collected metrics.
    pub fn take_metrics(self) -> TelemetryMetrics {
        self.metrics
    }
}
