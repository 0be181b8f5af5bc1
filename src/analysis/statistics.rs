//! The four statistical gates (NIST SP 800-22 subset).
//!
//! These tests detect a broken or backdoored RNG; passing them is
//! necessary but not sufficient for good entropy. All thresholds are at
//! α = 0.01, Bonferroni-corrected where a test aggregates several
//! statistics.

/// Two-sided z bound at α = 0.01 for the monobit and runs tests.
pub const MONOBIT_Z: f64 = 2.576;

/// Chi-squared bound for 255 degrees of freedom at α = 0.01.
pub const CHI_SQUARED_LIMIT: f64 = 310.5;

/// Per-lag z bound for the autocorrelation test: 15 lags at a
/// family-wise α = 0.01.
pub const AUTOCORR_Z: f64 = 3.40;

/// Highest autocorrelation lag tested.
pub const AUTOCORR_MAX_LAG: usize = 15;

/// Outcome of a single statistical test on one sample.
#[derive(Debug, Clone)]
pub struct TestOutcome {
    /// Stable test name: `monobit`, `chi_squared`, `runs`,
    /// `autocorrelation`.
    pub name: &'static str,
    /// Whether the sample passed this test.
    pub passed: bool,
    /// The observed statistic (z-score or chi-squared value).
    pub statistic: f64,
    /// The pass threshold the statistic was compared against.
    pub threshold: f64,
    /// Human-readable one-liner.
    pub detail: String,
}

/// Stable ordering of the test names.
pub const TEST_NAMES: [&str; 4] = ["monobit", "chi_squared", "runs", "autocorrelation"];

/// Runs all four tests on a raw byte sample.
pub fn run_tests(data: &[u8]) -> [TestOutcome; 4] {
    [
        monobit(data),
        chi_squared(data),
        runs(data),
        autocorrelation(data),
    ]
}

#[inline]
fn bit(data: &[u8], i: usize) -> u8 {
    (data[i / 8] >> (7 - (i % 8))) & 1
}

fn count_ones(data: &[u8]) -> usize {
    data.iter().map(|b| b.count_ones() as usize).sum()
}

/// Monobit frequency test: the proportion of 1-bits should be ~50%.
fn monobit(data: &[u8]) -> TestOutcome {
    let n_bits = data.len() * 8;
    let ones = count_ones(data);
    let z = ((2 * ones) as f64 - n_bits as f64).abs() / (n_bits as f64).sqrt();
    TestOutcome {
        name: "monobit",
        passed: z < MONOBIT_Z,
        statistic: z,
        threshold: MONOBIT_Z,
        detail: format!(
            "{ones}/{n_bits} ones ({:.4}), z={z:.4}",
            ones as f64 / n_bits as f64
        ),
    }
}

/// Chi-squared byte-frequency test over all 256 values.
fn chi_squared(data: &[u8]) -> TestOutcome {
    let mut observed = [0u32; 256];
    for &b in data {
        observed[b as usize] += 1;
    }
    let expected = data.len() as f64 / 256.0;
    let chi2: f64 = observed
        .iter()
        .map(|&o| {
            let d = o as f64 - expected;
            d * d / expected
        })
        .sum();
    TestOutcome {
        name: "chi_squared",
        passed: chi2 < CHI_SQUARED_LIMIT,
        statistic: chi2,
        threshold: CHI_SQUARED_LIMIT,
        detail: format!("chi2={chi2:.2}, expected/bin={expected:.2}"),
    }
}

/// Runs test: the number of 0/1 transitions should match the normal
/// approximation. A heavily biased sample fails outright (the
/// approximation is invalid there, and monobit will flag it anyway).
fn runs(data: &[u8]) -> TestOutcome {
    let n_bits = data.len() * 8;
    let ones = count_ones(data);
    let pi = ones as f64 / n_bits as f64;

    if (pi - 0.5).abs() >= 2.0 / (n_bits as f64).sqrt() {
        return TestOutcome {
            name: "runs",
            passed: false,
            statistic: f64::INFINITY,
            threshold: MONOBIT_Z,
            detail: "degenerate (bias precondition failed)".to_string(),
        };
    }

    let mut run_count = 1usize;
    for i in 1..n_bits {
        if bit(data, i) != bit(data, i - 1) {
            run_count += 1;
        }
    }
    let expected = 2.0 * n_bits as f64 * pi * (1.0 - pi) + 1.0;
    let std_dev = 2.0 * (2.0 * n_bits as f64).sqrt() * pi * (1.0 - pi);
    let z = if std_dev == 0.0 {
        f64::INFINITY
    } else {
        (run_count as f64 - expected).abs() / std_dev
    };
    TestOutcome {
        name: "runs",
        passed: z < MONOBIT_Z,
        statistic: z,
        threshold: MONOBIT_Z,
        detail: format!("{run_count} runs, z={z:.4}"),
    }
}

/// Autocorrelation test at lags 1..=15.
///
/// At each lag, bits `i` and `i+lag` should agree about half the time.
/// Fails if any lag exceeds the Bonferroni-corrected bound; reports the
/// worst lag.
fn autocorrelation(data: &[u8]) -> TestOutcome {
    let n_bits = data.len() * 8;
    let mut worst_z = 0.0f64;
    let mut worst_lag = 0usize;
    let mut passed = true;

    for lag in 1..=AUTOCORR_MAX_LAG {
        let total = n_bits - lag;
        let matches = (0..total)
            .filter(|&i| bit(data, i) == bit(data, i + lag))
            .count();
        let z = ((2 * matches) as f64 - total as f64).abs() / (total as f64).sqrt();
        if z > worst_z {
            worst_z = z;
            worst_lag = lag;
        }
        if z >= AUTOCORR_Z {
            passed = false;
        }
    }

    TestOutcome {
        name: "autocorrelation",
        passed,
        statistic: worst_z,
        threshold: AUTOCORR_Z,
        detail: format!("worst z={worst_z:.4} at lag {worst_lag}"),
    }
}
