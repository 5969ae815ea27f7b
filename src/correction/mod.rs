//! Ranking and multiple-testing correction
//!
//! The order builder turns the valid record set into the canonical rank
//! axis (rank 1 = most significant); the method functions then compute the
//! selected adjustment families over it in independent single passes.

pub mod genomic_control;
mod methods;

pub use methods::{
    benjamini_hochberg, benjamini_yekutieli, bonferroni, holm, qq_expected, sidak_single_step,
    sidak_step_down,
};

use crate::config::AdjustConfig;
use crate::data::TestRecord;

/// Sort records by descending chi-square, which is ascending p-value
/// without comparing p-values directly (near-underflow p-values compare
/// poorly). Ties order by ascending p, then ascending variant index, so
/// repeated runs produce identical tables.
pub fn sort_by_significance(records: &mut [TestRecord]) {
    records.sort_by(|a, b| {
        b.chi_sq
            .total_cmp(&a.chi_sq)
            .then(a.p.total_cmp(&b.p))
            .then(a.variant_idx.cmp(&b.variant_idx))
    });
}

/// Adjusted p-value vectors, indexed like the sorted record slice.
/// Families not selected in the configuration stay `None`.
#[derive(Debug, Default)]
pub struct CorrectionVectors {
    pub qq: Option<Vec<f64>>,
    pub bonferroni: Option<Vec<f64>>,
    pub holm: Option<Vec<f64>>,
    pub sidak_single_step: Option<Vec<f64>>,
    pub sidak_step_down: Option<Vec<f64>>,
    pub fdr_bh: Option<Vec<f64>>,
    pub fdr_by: Option<Vec<f64>>,
}

/// Compute the selected correction families over the primary ascending-p
/// sequence. Unselected families are skipped entirely.
pub fn compute_selected(primary_p: &[f64], config: &AdjustConfig) -> CorrectionVectors {
    let cols = &config.columns;
    CorrectionVectors {
        qq: cols.qq.then(|| methods::qq_expected(primary_p.len())),
        bonferroni: cols.bonferroni.then(|| methods::bonferroni(primary_p)),
        holm: cols.holm.then(|| methods::holm(primary_p)),
        sidak_single_step: cols
            .sidak_single_step
            .then(|| methods::sidak_single_step(primary_p)),
        sidak_step_down: cols
            .sidak_step_down
            .then(|| methods::sidak_step_down(primary_p)),
        fdr_bh: cols.fdr_bh.then(|| methods::benjamini_hochberg(primary_p)),
        fdr_by: cols.fdr_by.then(|| methods::benjamini_yekutieli(primary_p)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnSet;

    fn record(variant_idx: u32, chi_sq: f64, p: f64) -> TestRecord {
        TestRecord {
            variant_idx,
            chi_sq,
            p,
        }
    }

    #[test]
    fn test_sort_descending_chi_sq() {
        let mut records = vec![
            record(0, 1.0, 0.3173),
            record(1, 9.0, 0.0027),
            record(2, 4.0, 0.0455),
        ];
        sort_by_significance(&mut records);
        let order: Vec<u32> = records.iter().map(|r| r.variant_idx).collect();
        assert_eq!(order, vec![1, 2, 0]);
        // ascending p along the sorted axis
        assert!(records[0].p <= records[1].p && records[1].p <= records[2].p);
    }

    #[test]
    fn test_sort_tie_break_deterministic() {
        // equal statistics: ascending p, then ascending variant index
        let mut records = vec![
            record(5, 4.0, 0.046),
            record(2, 4.0, 0.045),
            record(9, 4.0, 0.045),
        ];
        sort_by_significance(&mut records);
        let order: Vec<u32> = records.iter().map(|r| r.variant_idx).collect();
        assert_eq!(order, vec![2, 9, 5]);

        // shuffled input reaches the same order
        let mut shuffled = vec![
            record(9, 4.0, 0.045),
            record(5, 4.0, 0.046),
            record(2, 4.0, 0.045),
        ];
        sort_by_significance(&mut shuffled);
        let order2: Vec<u32> = shuffled.iter().map(|r| r.variant_idx).collect();
        assert_eq!(order, order2);
    }

    #[test]
    fn test_compute_selected_skips_unselected() {
        let mut columns = ColumnSet::default();
        columns.fdr_by = false;
        columns.holm = false;
        let config = AdjustConfig {
            columns,
            ..Default::default()
        };

        let vectors = compute_selected(&[0.01, 0.5], &config);
        assert!(vectors.bonferroni.is_some());
        assert!(vectors.holm.is_none());
        assert!(vectors.fdr_by.is_none());
        assert!(vectors.qq.is_none());
        assert_eq!(vectors.bonferroni.unwrap().len(), 2);
    }
}
