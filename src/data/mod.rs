//! Input tables for the adjustment engine
//!
//! Holds the per-test statistic views handed over by an association run,
//! the validity filter that turns them into testable records, and the
//! variant metadata store consulted while the report is written.

use crate::error::{AdjustError, Result};
use crate::stats;

/// One valid association test: a consistent (chi-square, p-value) pair tied
/// to a variant in the caller's universe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestRecord {
    pub variant_idx: u32,
    pub chi_sq: f64,
    pub p: f64,
}

/// Per-test statistics for the included variants.
///
/// `included` lists the universe indices of the tested variants, in the
/// same order as the statistic arrays. At least one statistic array must be
/// present; a negative entry on the supplied array marks a test with no
/// usable statistic.
#[derive(Debug, Clone, Copy)]
pub struct AssocStats<'a> {
    pub included: &'a [u32],
    pub chi_sqs: Option<&'a [f64]>,
    pub p_values: Option<&'a [f64]>,
}

/// Select the tests with a usable statistic and derive the missing half of
/// each (chi-square, p-value) pair.
///
/// Sentinel rows are dropped entirely; the returned length is the
/// correction denominator `n` for every downstream family.
pub fn collect_valid(input: &AssocStats<'_>) -> Result<Vec<TestRecord>> {
    let n_input = input.included.len();
    let mut records: Vec<TestRecord> = Vec::new();
    records
        .try_reserve_exact(n_input)
        .map_err(|_| AdjustError::OutOfMemory { records: n_input })?;

    match (input.chi_sqs, input.p_values) {
        (Some(chi_sqs), Some(p_values)) => {
            debug_assert_eq!(chi_sqs.len(), n_input);
            debug_assert_eq!(p_values.len(), n_input);
            for (i, (&chi_sq, &p)) in chi_sqs.iter().zip(p_values.iter()).enumerate() {
                if chi_sq >= 0.0 {
                    records.push(TestRecord {
                        variant_idx: input.included[i],
                        chi_sq,
                        p,
                    });
                }
            }
        }
        (Some(chi_sqs), None) => {
            debug_assert_eq!(chi_sqs.len(), n_input);
            for (i, &chi_sq) in chi_sqs.iter().enumerate() {
                if chi_sq >= 0.0 {
                    records.push(TestRecord {
                        variant_idx: input.included[i],
                        chi_sq,
                        p: stats::chi_sq_p(chi_sq),
                    });
                }
            }
        }
        (None, Some(p_values)) => {
            debug_assert_eq!(p_values.len(), n_input);
            for (i, &p) in p_values.iter().enumerate() {
                if p >= 0.0 {
                    records.push(TestRecord {
                        variant_idx: input.included[i],
                        chi_sq: stats::inverse_chi_sq_p(p),
                        p,
                    });
                }
            }
        }
        (None, None) => {
            return Err(AdjustError::InconsistentInput {
                reason: "neither chi-square nor p-value statistics supplied".to_string(),
            });
        }
    }
    Ok(records)
}

/// Variant annotation store: identifier strings plus optional
/// chromosome/position columns and flattened allele storage.
///
/// Indexing is by universe position. Out-of-range lookups are a caller
/// contract violation and panic like any slice access.
#[derive(Debug, Clone, Default)]
pub struct VariantMetadata {
    /// Variant identifiers.
    pub ids: Vec<String>,
    /// Chromosome name per variant, if known.
    pub chroms: Option<Vec<String>>,
    /// Base-pair position per variant, if known.
    pub positions: Option<Vec<u32>>,
    /// Flattened allele storage; the reference allele leads each variant's
    /// run.
    pub alleles: Vec<String>,
    /// Start offset of each variant's allele run within `alleles`, with one
    /// trailing end offset. `None` means every variant is biallelic with
    /// exactly two entries.
    pub allele_offsets: Option<Vec<usize>>,
}

impl VariantMetadata {
    pub fn id_of(&self, variant_idx: u32) -> &str {
        &self.ids[variant_idx as usize]
    }

    /// Alleles of a variant, reference first.
    pub fn alleles_of(&self, variant_idx: u32) -> &[String] {
        let idx = variant_idx as usize;
        match &self.allele_offsets {
            Some(offsets) => &self.alleles[offsets[idx]..offsets[idx + 1]],
            None => &self.alleles[idx * 2..idx * 2 + 2],
        }
    }
}
