//! Statistical validation of entropy.
//!
//! A NIST SP 800-22 subset (monobit, chi-squared, runs, autocorrelation)
//! gates every seed generation and backs the diagnostic
//! [`verify_randomness`] report. These are sanity checks against a
//! broken or compromised RNG, not cryptographic proofs of entropy.

mod report;
mod statistics;

pub use report::{verify_randomness, CheckConfig, RandomnessReport, TestSummary};
pub use statistics::{
    run_tests, TestOutcome, AUTOCORR_MAX_LAG, AUTOCORR_Z, CHI_SQUARED_LIMIT, MONOBIT_Z,
    TEST_NAMES,
};
