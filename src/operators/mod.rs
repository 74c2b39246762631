//! Contains pluggable evolutionary operators: parent selection, crossover and
//! mutation strategies. The orchestrator holds them as trait objects, so any
//! strategy can be substituted without touching the generational logic.

mod crossover;
pub use self::crossover::*;

mod mutation;
pub use self::mutation::*;

mod selection;
pub use self::selection::*;
