//! Row generation, including the restlessness/mobility correlation nudge.

use super::countries::CountryPool;
use super::entropy::Entropy;
use super::token::generate_token;
use crate::models::params::{NUDGE_CHANCES, NUDGE_CONTINUE_THRESHOLD, VISIT_DRAWS};
use crate::models::{Row, Token, in_correlation_band};
use std::collections::BTreeSet;
use tracing::trace;

/// Generate one row against `pool`.
///
/// Entropy is consumed in a fixed order (name, home country, visit draws,
/// restlessness, mobility, nudges) so a fixed source yields a fixed row.
pub fn generate_row<E: Entropy + ?Sized>(pool: &CountryPool, entropy: &mut E) -> Row {
    let name = generate_token(entropy);
    let country = pool.pick(entropy).clone();

    let draws = entropy.between(VISIT_DRAWS.0, VISIT_DRAWS.1);
    let mut visited: BTreeSet<Token> = (0..draws).map(|_| pool.pick(entropy).clone()).collect();
    visited.insert(country.clone());

    let restlessness = 1.0 + entropy.unit() * 99.0;
    let mobility = 1.0 + entropy.unit() * 99.0;
    let mobility = nudge_mobility(restlessness, mobility, entropy);

    Row {
        name,
        country,
        visited,
        restlessness,
        mobility,
    }
}

/// Resample mobility toward restlessness.
///
/// Keeps going while the pair is outside the band, a coin flip succeeds,
/// and chances remain. Not a convergence guarantee: the result may still
/// be far from `restlessness`.
pub fn nudge_mobility<E: Entropy + ?Sized>(
    restlessness: f64,
    mut mobility: f64,
    entropy: &mut E,
) -> f64 {
    let mut chances = NUDGE_CHANCES;

    while !in_correlation_band(restlessness, mobility)
        && entropy.unit() > NUDGE_CONTINUE_THRESHOLD
        && chances > 0
    {
        chances -= 1;
        mobility = if restlessness > mobility {
            20.0 + entropy.unit() * 80.0
        } else {
            1.0 + entropy.unit() * 79.0
        };
        trace!(restlessness, mobility, chances, "Nudged mobility");
    }

    mobility
}
