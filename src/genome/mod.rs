//! Contains the genome data model: species, chromosomes and the packed gene codec.

mod chromosome;
pub use self::chromosome::*;

mod species;
pub use self::species::*;
