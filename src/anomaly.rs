//! Unusual-amount detection with a seeded isolation forest over the
//! single amount dimension.
//!
//! Amounts that random splits separate from the rest of the population in
//! few steps score high; the top `contamination` fraction is flagged.
//! Scoring is global across categories, so a routine-but-large amount (an
//! annual premium, say) can be flagged on scale alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{OutlayError, Result};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_CONTAMINATION: f64 = 0.1;

const TREE_COUNT: usize = 100;
const SUBSAMPLE_SIZE: usize = 256;

// Euler-Mascheroni constant, used in the average-path normalizer.
const EULER: f64 = 0.577_215_664_901_532_9;

enum Node {
    Leaf { size: usize },
    Split { at: f64, below: Box<Node>, above: Box<Node> },
}

/// Average unsuccessful-search path length in a binary tree of n values;
/// the standard normalizer for isolation scores.
fn average_path(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let n = n as f64;
    2.0 * ((n - 1.0).ln() + EULER) - 2.0 * (n - 1.0) / n
}

fn grow(values: Vec<f64>, depth: usize, limit: usize, rng: &mut StdRng) -> Node {
    if values.len() <= 1 || depth >= limit {
        return Node::Leaf { size: values.len() };
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max - min <= f64::EPSILON {
        return Node::Leaf { size: values.len() };
    }
    let at = rng.gen_range(min..max);
    let (below, above): (Vec<f64>, Vec<f64>) = values.into_iter().partition(|v| *v < at);
    Node::Split {
        at,
        below: Box::new(grow(below, depth + 1, limit, rng)),
        above: Box::new(grow(above, depth + 1, limit, rng)),
    }
}

fn path_length(node: &Node, value: f64, depth: f64) -> f64 {
    match node {
        Node::Leaf { size } => depth + average_path(*size),
        Node::Split { at, below, above } => {
            if value < *at {
                path_length(below, value, depth + 1.0)
            } else {
                path_length(above, value, depth + 1.0)
            }
        }
    }
}

/// Sample up to `size` values without replacement (partial Fisher-Yates
/// over indices). Returns the whole population when it fits.
fn subsample(values: &[f64], size: usize, rng: &mut StdRng) -> Vec<f64> {
    if values.len() <= size {
        return values.to_vec();
    }
    let mut indices: Vec<usize> = (0..values.len()).collect();
    for i in 0..size {
        let j = rng.gen_range(i..indices.len());
        indices.swap(i, j);
    }
    indices[..size].iter().map(|&i| values[i]).collect()
}

/// Isolation score in (0, 1] per amount; higher means more anomalous.
/// Fully determined by the seed and the input order.
pub fn scores(amounts: &[f64], seed: u64) -> Result<Vec<f64>> {
    if amounts.is_empty() {
        return Err(OutlayError::Precondition(
            "anomaly detection requires at least one expense",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let sample_size = amounts.len().min(SUBSAMPLE_SIZE);
    let height_limit = (sample_size as f64).log2().ceil().max(1.0) as usize;
    let normalizer = match average_path(sample_size) {
        c if c > 0.0 => c,
        _ => 1.0,
    };

    let mut totals = vec![0.0; amounts.len()];
    for _ in 0..TREE_COUNT {
        let sample = subsample(amounts, sample_size, &mut rng);
        let tree = grow(sample, 0, height_limit, &mut rng);
        for (i, &value) in amounts.iter().enumerate() {
            totals[i] += path_length(&tree, value, 0.0);
        }
    }

    Ok(totals
        .iter()
        .map(|total| {
            let mean_path = total / TREE_COUNT as f64;
            2f64.powf(-mean_path / normalizer)
        })
        .collect())
}

/// Flag the floor(contamination * n) highest-scoring amounts. Ties break
/// toward the earlier input position, so the flagged set is identical
/// across runs for a given seed, input order, and contamination.
pub fn detect(amounts: &[f64], seed: u64, contamination: f64) -> Result<Vec<bool>> {
    let scores = scores(amounts, seed)?;
    let mut flags = vec![false; amounts.len()];
    let quota = (contamination * amounts.len() as f64).floor() as usize;
    if quota == 0 {
        return Ok(flags);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    for &i in &order[..quota.min(order.len())] {
        flags[i] = true;
    }
    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 19 everyday amounts plus one annual-scale payment.
    fn population_with_outlier() -> Vec<f64> {
        let mut amounts: Vec<f64> = (0..19).map(|i| 40.0 + (i % 7) as f64 * 3.5).collect();
        amounts.push(5000.0);
        amounts
    }

    #[test]
    fn test_outlier_is_flagged() {
        let amounts = population_with_outlier();
        let flags = detect(&amounts, DEFAULT_SEED, DEFAULT_CONTAMINATION).unwrap();
        assert!(flags[19], "the 5000.0 payment should be flagged");
        assert_eq!(flags.iter().filter(|f| **f).count(), 2); // floor(0.1 * 20)
    }

    #[test]
    fn test_same_seed_same_flags() {
        let amounts = population_with_outlier();
        let first = detect(&amounts, 7, DEFAULT_CONTAMINATION).unwrap();
        let second = detect(&amounts, 7, DEFAULT_CONTAMINATION).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scale_alone_flags_a_routine_amount() {
        // A category-typical monthly amount that towers over the rest of
        // the population is still flagged; detection is not per-category.
        let mut amounts: Vec<f64> = (0..30).map(|i| 10.0 + (i % 5) as f64).collect();
        amounts.push(2000.0);
        let flags = detect(&amounts, DEFAULT_SEED, DEFAULT_CONTAMINATION).unwrap();
        assert!(flags[30]);
    }

    #[test]
    fn test_small_population_flags_nothing() {
        // floor(0.1 * 5) = 0: no quota, no flags.
        let flags = detect(&[10.0, 12.0, 11.0, 9.0, 400.0], DEFAULT_SEED, DEFAULT_CONTAMINATION)
            .unwrap();
        assert!(flags.iter().all(|f| !f));
    }

    #[test]
    fn test_identical_amounts_score_equally() {
        let scores = scores(&[25.0; 12], DEFAULT_SEED).unwrap();
        assert!(scores.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-12));
    }

    #[test]
    fn test_empty_input_is_a_precondition_failure() {
        assert!(matches!(
            detect(&[], DEFAULT_SEED, DEFAULT_CONTAMINATION),
            Err(OutlayError::Precondition(_))
        ));
    }
}
