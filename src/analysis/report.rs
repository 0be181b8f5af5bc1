//! Randomness verification report.

use super::statistics::{run_tests, TestOutcome, TEST_NAMES};
use crate::entropy::EntropyPool;

/// Sampling configuration for [`verify_randomness`].
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Bytes per generated sample.
    pub sample_size: usize,
    /// Number of independent samples to draw and test.
    pub num_samples: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            sample_size: 2048,
            num_samples: 5,
        }
    }
}

/// Aggregated status of one test across all samples.
#[derive(Debug, Clone)]
pub struct TestSummary {
    /// Stable test name.
    pub name: &'static str,
    /// True if every sample passed this test.
    pub passed: bool,
    /// `PASS` or `FAIL (k/n samples)`.
    pub status: String,
}

/// Result of a full randomness verification run.
#[derive(Debug, Clone)]
pub struct RandomnessReport {
    /// True only if every test passed on every sample.
    pub passed: bool,
    /// Per-test aggregated status.
    pub tests: Vec<TestSummary>,
    /// Raw per-sample outcomes, for diagnostics.
    pub samples: Vec<[TestOutcome; 4]>,
    /// Human-readable summary.
    pub summary: String,
}

/// Tests the entropy source (or a caller-supplied buffer) for weakness.
///
/// When `sample_bytes` is given, only that buffer is tested; otherwise
/// `config.num_samples` buffers of `config.sample_size` bytes are drawn
/// from the pool. The overall verdict requires every test to pass on
/// every sample: a single failed gate anywhere fails the run.
pub fn verify_randomness(
    pool: &mut EntropyPool,
    sample_bytes: Option<&[u8]>,
    config: &CheckConfig,
) -> RandomnessReport {
    let samples: Vec<Vec<u8>> = match sample_bytes {
        Some(bytes) => vec![bytes.to_vec()],
        None => (0..config.num_samples)
            .map(|_| pool.extract_bytes(config.sample_size, None))
            .collect(),
    };

    let outcomes: Vec<[TestOutcome; 4]> = samples.iter().map(|s| run_tests(s)).collect();

    let mut overall = true;
    let mut tests = Vec::with_capacity(TEST_NAMES.len());
    for (i, name) in TEST_NAMES.iter().enumerate() {
        let failed = outcomes.iter().filter(|o| !o[i].passed).count();
        let passed = failed == 0;
        overall &= passed;
        let status = if passed {
            "PASS".to_string()
        } else {
            format!("FAIL ({failed}/{} samples)", outcomes.len())
        };
        tests.push(TestSummary {
            name,
            passed,
            status,
        });
    }

    let mut lines = Vec::new();
    lines.push(format!(
        "Randomness verification: {}",
        if overall { "PASS" } else { "FAIL" }
    ));
    lines.push(format!(
        "Samples: {}, size: {} bytes each",
        samples.len(),
        samples.first().map_or(0, Vec::len)
    ));
    lines.push(String::new());
    for t in &tests {
        let mark = if t.passed { '+' } else { '!' };
        lines.push(format!("  [{mark}] {:<16} {}", t.name, t.status));
    }
    if !overall {
        lines.push(String::new());
        lines.push("WARNING: weak randomness detected. Do NOT generate seeds.".to_string());
        tracing::warn!("Randomness verification failed");
    }

    RandomnessReport {
        passed: overall,
        tests,
        samples: outcomes,
        summary: lines.join("\n"),
    }
}
