//! A thin configuration adapter which instantiates named strategies from string
//! values such as `TournamentSelection(4)` or `DavisOrderCrossover`, e.g. taken
//! from command line arguments.

#[cfg(test)]
#[path = "../../tests/unit/config/config_test.rs"]
mod config_test;

use crate::operators::*;
use crate::utils::{GenericError, GenericResult};

/// Creates a [`NaturalSelection`] strategy from its string form. Valid values:
///
/// * `StochasticUniversalSampling`
/// * `RankedSelection`
/// * `TournamentSelection(size)` with `size >= 2`
pub fn create_natural_selection(value: &str) -> GenericResult<Box<dyn NaturalSelection + Send + Sync>> {
    let (name, arg) = split_value(value)?;
    match name {
        "StochasticUniversalSampling" => {
            reject_arg("NaturalSelection", name, arg)?;
            Ok(Box::new(StochasticUniversalSampling))
        }
        "RankedSelection" => {
            reject_arg("NaturalSelection", name, arg)?;
            Ok(Box::new(RankedSelection))
        }
        "TournamentSelection" => Ok(Box::new(TournamentSelection { size: parse_size("NaturalSelection", name, arg)? })),
        _ => Err(format!("NaturalSelection: unknown strategy name {name}").into()),
    }
}

/// Creates a [`Crossover`] strategy from its string form. Valid values:
///
/// * `MultiPointCrossover(points)` with `points >= 2`
/// * `WholeArithmeticRecombination`
/// * `DavisOrderCrossover`
pub fn create_crossover(value: &str) -> GenericResult<Box<dyn Crossover + Send + Sync>> {
    let (name, arg) = split_value(value)?;
    match name {
        "WholeArithmeticRecombination" => {
            reject_arg("Crossover", name, arg)?;
            Ok(Box::new(WholeArithmeticRecombination))
        }
        "DavisOrderCrossover" => {
            reject_arg("Crossover", name, arg)?;
            Ok(Box::new(DavisOrderCrossover))
        }
        "MultiPointCrossover" => Ok(Box::new(MultiPointCrossover { points: parse_size("Crossover", name, arg)? })),
        _ => Err(format!("Crossover: unknown strategy name {name}").into()),
    }
}

/// Creates a [`Mutator`] strategy from its string form. Valid values:
///
/// * `RandomResettingMutation`
/// * `SwapMutation`
/// * `ScrambleMutation`
/// * `InversionMutation`
pub fn create_mutator(value: &str) -> GenericResult<Box<dyn Mutator + Send + Sync>> {
    let (name, arg) = split_value(value)?;
    reject_arg("Mutation", name, arg)?;
    match name {
        "RandomResettingMutation" => Ok(Box::new(RandomResettingMutation)),
        "SwapMutation" => Ok(Box::new(SwapMutation)),
        "ScrambleMutation" => Ok(Box::new(ScrambleMutation)),
        "InversionMutation" => Ok(Box::new(InversionMutation)),
        _ => Err(format!("Mutation: unknown strategy name {name}").into()),
    }
}

/// Splits a strategy value into its name and an optional parameter. Accepted
/// forms are `Name` and `Name(param)`.
fn split_value(value: &str) -> GenericResult<(&str, Option<&str>)> {
    let (name, arg) = match value.find('(') {
        Some(start) => {
            let arg = value[start + 1..]
                .strip_suffix(')')
                .ok_or_else(|| GenericError::from(format!("malformed strategy value: {value}")))?;
            (&value[..start], Some(arg).filter(|arg| !arg.is_empty()))
        }
        None => (value, None),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("malformed strategy value: {value}").into());
    }

    Ok((name, arg))
}

fn parse_size(kind: &str, name: &str, arg: Option<&str>) -> GenericResult<usize> {
    arg.and_then(|arg| arg.parse::<usize>().ok())
        .filter(|&size| size >= 2)
        .ok_or_else(|| format!("{kind}: {name} expects a whole number >= 2 as parameter").into())
}

fn reject_arg(kind: &str, name: &str, arg: Option<&str>) -> GenericResult<()> {
    match arg {
        Some(_) => Err(format!("{kind}: {name} does not accept parameters").into()),
        None => Ok(()),
    }
}
