//! Random balanced transportation problems.
//!
//! Used by the benchmarks, the property tests and the `generate` CLI
//! command to produce instances of arbitrary size.

use crate::core::problem::{ProblemError, ProblemInstance};
use rand::Rng;
use thiserror::Error;

/// Configuration for generating a random problem instance.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of sources (rows).
    pub sources: usize,
    /// Number of destinations (columns).
    pub destinations: usize,
    /// Smallest supply at a single source.
    pub min_quantity: u64,
    /// Largest supply at a single source.
    pub max_quantity: u64,
    /// Largest unit cost on a route. Costs start at zero.
    pub max_cost: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sources: 4,
            destinations: 5,
            min_quantity: 10,
            max_quantity: 100,
            max_cost: 20,
        }
    }
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("min quantity {min} exceeds max quantity {max}")]
    InvalidQuantityRange { min: u64, max: u64 },
    #[error("{sources} sources of up to {max_quantity} units can exceed the u64 quantity range")]
    QuantityOverflow { sources: usize, max_quantity: u64 },
    #[error(transparent)]
    Shape(#[from] ProblemError),
}

/// Generate a random balanced instance using the thread-local RNG.
pub fn generate_instance(config: &GeneratorConfig) -> Result<ProblemInstance, GeneratorError> {
    generate_instance_with(&mut rand::thread_rng(), config)
}

/// Generate a random balanced instance from the given RNG.
///
/// Supplies are drawn uniformly from `[min_quantity, max_quantity]`; their
/// total is then cut at random points into one demand per destination, so
/// the result is always balanced.
pub fn generate_instance_with<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<ProblemInstance, GeneratorError> {
    if config.min_quantity > config.max_quantity {
        return Err(GeneratorError::InvalidQuantityRange {
            min: config.min_quantity,
            max: config.max_quantity,
        });
    }
    // A single destination may receive the whole supply total.
    if config.sources as u128 * u128::from(config.max_quantity) > u128::from(u64::MAX) {
        return Err(GeneratorError::QuantityOverflow {
            sources: config.sources,
            max_quantity: config.max_quantity,
        });
    }

    let supplies: Vec<u64> = (0..config.sources)
        .map(|_| rng.gen_range(config.min_quantity..=config.max_quantity))
        .collect();
    let total: u64 = supplies.iter().sum();

    let demands = split_total(rng, total, config.destinations);

    let costs: Vec<Vec<u64>> = (0..config.sources)
        .map(|_| {
            (0..config.destinations)
                .map(|_| rng.gen_range(0..=config.max_cost))
                .collect()
        })
        .collect();

    log::debug!(
        "generated {}x{} instance with total quantity {}",
        config.sources,
        config.destinations,
        total
    );

    Ok(ProblemInstance::new(supplies, demands, costs)?)
}

/// Split `total` into `parts` non-negative amounts summing to `total`.
fn split_total<R: Rng + ?Sized>(rng: &mut R, total: u64, parts: usize) -> Vec<u64> {
    if parts == 0 {
        return Vec::new();
    }
    let mut cuts: Vec<u64> = (1..parts).map(|_| rng.gen_range(0..=total)).collect();
    cuts.sort_unstable();

    let mut amounts = Vec::with_capacity(parts);
    let mut previous = 0;
    for cut in cuts {
        amounts.push(cut - previous);
        previous = cut;
    }
    amounts.push(total - previous);
    amounts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::engine::TransportEngine;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_instance_is_balanced() {
        let config = GeneratorConfig {
            sources: 6,
            destinations: 3,
            ..Default::default()
        };
        let instance = generate_instance(&config).unwrap();

        assert_eq!(instance.sources(), 6);
        assert_eq!(instance.destinations(), 3);
        assert!(instance.is_balanced());
        assert!(instance
            .supplies()
            .iter()
            .all(|&s| (config.min_quantity..=config.max_quantity).contains(&s)));
        assert!(instance
            .costs()
            .iter()
            .flatten()
            .all(|&c| c <= config.max_cost));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GeneratorConfig::default();
        let a = generate_instance_with(&mut StdRng::seed_from_u64(7), &config).unwrap();
        let b = generate_instance_with(&mut StdRng::seed_from_u64(7), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_instance_solves() {
        let instance = generate_instance(&GeneratorConfig::default()).unwrap();
        assert!(TransportEngine::solve_northwest_corner(&instance).is_ok());
        assert!(TransportEngine::solve_least_cost(&instance).is_ok());
    }

    #[test]
    fn test_invalid_range() {
        let config = GeneratorConfig {
            min_quantity: 50,
            max_quantity: 10,
            ..Default::default()
        };
        assert!(matches!(
            generate_instance(&config),
            Err(GeneratorError::InvalidQuantityRange { min: 50, max: 10 })
        ));
    }

    #[test]
    fn test_quantity_overflow_rejected() {
        let config = GeneratorConfig {
            sources: 3,
            min_quantity: 0,
            max_quantity: u64::MAX / 2,
            ..Default::default()
        };
        assert!(matches!(
            generate_instance(&config),
            Err(GeneratorError::QuantityOverflow { sources: 3, .. })
        ));

        // Exactly at the limit is still allowed.
        let config = GeneratorConfig {
            sources: 1,
            min_quantity: u64::MAX,
            max_quantity: u64::MAX,
            destinations: 2,
            ..Default::default()
        };
        let instance = generate_instance(&config).unwrap();
        assert_eq!(instance.total_demand(), u128::from(u64::MAX));
    }

    #[test]
    fn test_zero_destinations_rejected() {
        let config = GeneratorConfig {
            destinations: 0,
            ..Default::default()
        };
        assert!(matches!(
            generate_instance(&config),
            Err(GeneratorError::Shape(ProblemError::EmptyDestinations))
        ));
    }

    #[test]
    fn test_split_total_sums() {
        let mut rng = StdRng::seed_from_u64(42);
        let parts = split_total(&mut rng, 1_000, 7);
        assert_eq!(parts.len(), 7);
        assert_eq!(parts.iter().sum::<u64>(), 1_000);
    }
}
