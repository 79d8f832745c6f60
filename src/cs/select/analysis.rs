//! Empirical timing of the two selectors on random, sorted and reverse-sorted inputs.
//!
//! ```rust
//! use kselect::cs::select::analysis::{format_table, run_analysis, AnalysisConfig};
//!
//! let config = AnalysisConfig::default().sizes(vec![10, 100]).seed(1);
//! let rows = run_analysis(&config).unwrap();
//! assert_eq!(rows.len(), 6);
//! println!("{}", format_table(&rows));
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::cs::select::selector::{DeterministicSelector, RandomizedSelector, Selector};
use crate::error::{Result, SelectError};

/// Values drawn by [`Distribution::Random`] lie in `1..=RANDOM_MAX`.
pub const RANDOM_MAX: i64 = 1000;

/// Shape of the generated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    Random,
    Sorted,
    ReverseSorted,
}

impl Distribution {
    pub const ALL: [Distribution; 3] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::ReverseSorted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::ReverseSorted => "reverse_sorted",
        }
    }

    /// Generates `n` values of this shape.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<i64> {
        let n = n as i64;
        match self {
            Distribution::Random => (0..n).map(|_| rng.gen_range(1..=RANDOM_MAX)).collect(),
            Distribution::Sorted => (1..=n).collect(),
            Distribution::ReverseSorted => (1..=n).rev().collect(),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "random" => Ok(Distribution::Random),
            "sorted" => Ok(Distribution::Sorted),
            "reverse_sorted" | "reverse" => Ok(Distribution::ReverseSorted),
            other => Err(SelectError::invalid_input(format!(
                "unknown distribution '{}', expected random, sorted or reverse_sorted",
                other
            ))),
        }
    }
}

/// Parameters of an analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub sizes: Vec<usize>,
    pub distributions: Vec<Distribution>,
    /// Seed for input generation and pivot draws. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 100, 1000, 10000],
            distributions: Distribution::ALL.to_vec(),
            seed: None,
        }
    }
}

impl AnalysisConfig {
    pub fn sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn distributions(mut self, distributions: Vec<Distribution>) -> Self {
        self.distributions = distributions;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(SelectError::invalid_input("at least one input size is required"));
        }
        if self.sizes.contains(&0) {
            return Err(SelectError::invalid_input("input sizes must be positive"));
        }
        if self.distributions.is_empty() {
            return Err(SelectError::invalid_input(
                "at least one distribution is required",
            ));
        }
        Ok(())
    }
}

/// One row of the report: both selectors timed on the same input at rank `size / 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub distribution: Distribution,
    pub size: usize,
    pub rank: usize,
    pub value: i64,
    pub deterministic: Duration,
    pub randomized: Duration,
}

/// Times both selectors for every (distribution, size) pair in `config`.
///
/// # Errors
/// * `InvalidInput` if the configuration is rejected by [`AnalysisConfig::validate`]
/// * `Disagreement` if the selectors return different values
pub fn run_analysis(config: &AnalysisConfig) -> Result<Vec<Timing>> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut deterministic = DeterministicSelector::new();
    let mut randomized = RandomizedSelector::with_seed(rng.gen());

    let mut rows = Vec::with_capacity(config.sizes.len() * config.distributions.len());
    for &distribution in &config.distributions {
        for &size in &config.sizes {
            let data = distribution.generate(size, &mut rng);
            let rank = size / 2;

            let (det_value, det_time) = timed(&mut deterministic, &data, rank)?;
            let (rnd_value, rnd_time) = timed(&mut randomized, &data, rank)?;
            if det_value != rnd_value {
                return Err(SelectError::Disagreement {
                    deterministic: det_value.to_string(),
                    randomized: rnd_value.to_string(),
                });
            }

            debug!(
                "{} n={} k={}: deterministic {:?}, randomized {:?}",
                distribution, size, rank, det_time, rnd_time
            );
            rows.push(Timing {
                distribution,
                size,
                rank,
                value: det_value,
                deterministic: det_time,
                randomized: rnd_time,
            });
        }
    }
    Ok(rows)
}

fn timed<S: Selector>(selector: &mut S, data: &[i64], k: usize) -> Result<(i64, Duration)> {
    let start = Instant::now();
    let value = selector.select(data, k)?;
    Ok((value, start.elapsed()))
}

/// Renders rows as a fixed-width table with times in seconds.
pub fn format_table(rows: &[Timing]) -> String {
    let mut out = format!(
        "{:<15} {:<10} {:<18} {:<15}\n",
        "Input Type", "Size", "Deterministic (s)", "Randomized (s)"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<15} {:<10} {:<18.6} {:<15.6}\n",
            row.distribution.name(),
            row.size,
            row.deterministic.as_secs_f64(),
            row.randomized.as_secs_f64()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shapes() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Distribution::Sorted.generate(4, &mut rng), vec![1, 2, 3, 4]);
        assert_eq!(
            Distribution::ReverseSorted.generate(4, &mut rng),
            vec![4, 3, 2, 1]
        );
        let random = Distribution::Random.generate(500, &mut rng);
        assert_eq!(random.len(), 500);
        assert!(random.iter().all(|&x| (1..=RANDOM_MAX).contains(&x)));
    }

    #[test]
    fn test_distribution_parsing() {
        assert_eq!("random".parse::<Distribution>(), Ok(Distribution::Random));
        assert_eq!("Sorted".parse::<Distribution>(), Ok(Distribution::Sorted));
        assert_eq!("reverse-sorted".parse::<Distribution>(), Ok(Distribution::ReverseSorted));
        assert!(matches!(
            "zigzag".parse::<Distribution>(),
            Err(SelectError::InvalidInput(_))
        ));
        for d in Distribution::ALL {
            assert_eq!(d.to_string().parse::<Distribution>(), Ok(d));
        }
    }

    #[test]
    fn test_validate() {
        assert!(AnalysisConfig::default().validate().is_ok());
        assert!(matches!(
            AnalysisConfig::default().sizes(vec![]).validate(),
            Err(SelectError::InvalidInput(_))
        ));
        assert!(matches!(
            AnalysisConfig::default().sizes(vec![10, 0]).validate(),
            Err(SelectError::InvalidInput(_))
        ));
        assert!(matches!(
            AnalysisConfig::default().distributions(vec![]).validate(),
            Err(SelectError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_run_analysis() {
        let config = AnalysisConfig::default().sizes(vec![1, 10, 101]).seed(3);
        let rows = run_analysis(&config).unwrap();
        assert_eq!(rows.len(), 9);

        for row in &rows {
            assert_eq!(row.rank, row.size / 2);
            match row.distribution {
                // values are 1..=n, so rank k holds k + 1
                Distribution::Sorted | Distribution::ReverseSorted => {
                    assert_eq!(row.value, row.rank as i64 + 1)
                }
                Distribution::Random => assert!((1..=RANDOM_MAX).contains(&row.value)),
            }
        }
    }

    #[test]
    fn test_run_analysis_is_reproducible() {
        let config = AnalysisConfig::default()
            .sizes(vec![50])
            .distributions(vec![Distribution::Random])
            .seed(21);
        let a = run_analysis(&config).unwrap();
        let b = run_analysis(&config).unwrap();
        assert_eq!(a[0].value, b[0].value);
    }

    #[test]
    fn test_run_analysis_rejects_bad_config() {
        let config = AnalysisConfig::default().sizes(vec![0]);
        assert!(matches!(
            run_analysis(&config),
            Err(SelectError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_format_table() {
        let rows = vec![Timing {
            distribution: Distribution::ReverseSorted,
            size: 100,
            rank: 50,
            value: 51,
            deterministic: Duration::from_micros(1500),
            randomized: Duration::from_micros(250),
        }];
        let table = format_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Input Type"));
        assert!(lines[1].starts_with("reverse_sorted  100"));
        assert!(lines[1].contains("0.001500"));
        assert!(lines[1].contains("0.000250"));
    }
}
