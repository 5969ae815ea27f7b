//! Invocation configuration for the adjustment engine
//!
//! Every recognized option is a named field; defaults mirror the standard
//! association-report column set.

use serde::{Deserialize, Serialize};

/// Output column selection.
///
/// The variant identifier column is always written. Column selection doubles
/// as correction-family selection: a family whose column is not requested is
/// never computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSet {
    /// Chromosome name.
    pub chrom: bool,
    /// Base-pair position.
    pub pos: bool,
    /// Reference allele.
    pub ref_allele: bool,
    /// First alternate allele.
    pub alt1: bool,
    /// All alternate alleles, comma-joined.
    pub alt: bool,
    /// Raw (unadjusted) p-value.
    pub unadj: bool,
    /// Genomic-control adjusted p-value.
    pub gc: bool,
    /// Expected null p-value at this rank, for QQ plotting.
    pub qq: bool,
    pub bonferroni: bool,
    pub holm: bool,
    pub sidak_single_step: bool,
    pub sidak_step_down: bool,
    pub fdr_bh: bool,
    pub fdr_by: bool,
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self {
            chrom: true,
            pos: false,
            ref_allele: false,
            alt1: false,
            alt: false,
            unadj: true,
            gc: true,
            qq: false,
            bonferroni: true,
            holm: true,
            sidak_single_step: true,
            sidak_step_down: true,
            fdr_bh: true,
            fdr_by: false,
        }
    }
}

/// Configuration for one adjustment invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustConfig {
    pub columns: ColumnSet,
    /// Genomic-control inflation factor. 0.0 means estimate from the data
    /// (median chi-square / 0.456, floored at 1.0).
    pub lambda: f64,
    /// When set, the GC-adjusted p-values replace the raw p-values as the
    /// input to every other correction family. Otherwise GC p is reported
    /// only as its own column.
    pub gc_corrected_input: bool,
    /// Report -log10(p) instead of p.
    pub log10: bool,
    /// Values at or below this floor print as a fixed clipped token instead
    /// of denormalized precision.
    pub output_min_p: f64,
    /// Rows whose primary p-value exceeds this threshold are omitted from
    /// the table. They still count toward the correction denominator.
    pub p_filter: f64,
    /// Bypass genomic control entirely; the GC column is omitted even when
    /// requested and `gc_corrected_input` is inert.
    pub skip_gc: bool,
    /// Gzip the output table (`.adjusted.gz` instead of `.adjusted`).
    pub compress: bool,
    /// Compression worker budget supplied by the caller. The gzip backend
    /// runs single-threaded; the budget is retained for interface
    /// compatibility with multi-worker writers.
    pub compress_workers: u32,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            columns: ColumnSet::default(),
            lambda: 0.0,
            gc_corrected_input: false,
            log10: false,
            output_min_p: 0.0,
            p_filter: 1.0,
            skip_gc: false,
            compress: false,
            compress_workers: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        let cols = ColumnSet::default();
        assert!(cols.chrom);
        assert!(cols.unadj);
        assert!(cols.gc);
        assert!(cols.bonferroni);
        assert!(cols.holm);
        assert!(cols.sidak_single_step);
        assert!(cols.sidak_step_down);
        assert!(cols.fdr_bh);
        assert!(!cols.fdr_by);
        assert!(!cols.pos);
        assert!(!cols.qq);
    }

    #[test]
    fn test_default_config_is_passthrough() {
        let config = AdjustConfig::default();
        assert_eq!(config.lambda, 0.0);
        assert_eq!(config.p_filter, 1.0);
        assert_eq!(config.output_min_p, 0.0);
        assert!(!config.skip_gc);
        assert!(!config.gc_corrected_input);
        assert!(!config.log10);
    }
}
