//! The adjusted-p calculators
//!
//! Every function takes the primary p-value sequence sorted ascending
//! (index 0 = most significant rank) and returns a vector aligned to it
//! with entries clamped to [0, 1]. The step-down families keep a running
//! maximum so the adjusted sequence never decreases toward the less
//! significant ranks; the FDR families keep a running minimum in the
//! opposite direction.

/// Below this point the direct power form of the Šidák adjustment loses
/// digits to cancellation and the log1p expansion is used instead.
const SIDAK_DIRECT_MIN_P: f64 = 0.0078125; // 2^-7

/// Bonferroni: min(p * n, 1).
pub fn bonferroni(sorted_p: &[f64]) -> Vec<f64> {
    let n = sorted_p.len() as f64;
    sorted_p.iter().map(|&p| (p * n).min(1.0)).collect()
}

/// Holm step-down: running maximum of (n - i) * p_i over the forward
/// traversal, frozen once it reaches 1.
pub fn holm(sorted_p: &[f64]) -> Vec<f64> {
    let n = sorted_p.len() as f64;
    let mut running = 0.0_f64;
    sorted_p
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            if running < 1.0 {
                running = running.max((n - i as f64) * p).min(1.0);
            }
            running
        })
        .collect()
}

/// 1 - (1 - p)^exponent, stable for small p.
fn sidak_term(p: f64, exponent: f64) -> f64 {
    if p >= SIDAK_DIRECT_MIN_P {
        1.0 - (1.0 - p).powf(exponent)
    } else {
        // 1 - (1-p)^c = 1 - e^{c ln(1-p)}
        1.0 - (exponent * (-p).ln_1p()).exp()
    }
}

/// Šidák single-step: 1 - (1 - p)^n.
pub fn sidak_single_step(sorted_p: &[f64]) -> Vec<f64> {
    let n = sorted_p.len() as f64;
    sorted_p
        .iter()
        .map(|&p| sidak_term(p, n).min(1.0))
        .collect()
}

/// Šidák step-down: running maximum of 1 - (1 - p_i)^(n - i) over the
/// forward traversal.
pub fn sidak_step_down(sorted_p: &[f64]) -> Vec<f64> {
    let n = sorted_p.len() as f64;
    let mut running = 0.0_f64;
    sorted_p
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            running = running.max(sidak_term(p, n - i as f64)).min(1.0);
            running
        })
        .collect()
}

/// Benjamini-Hochberg step-up FDR: running minimum of (n / rank) * p over
/// the reverse traversal, from the least significant rank inward.
pub fn benjamini_hochberg(sorted_p: &[f64]) -> Vec<f64> {
    let n = sorted_p.len();
    let n_f = n as f64;
    let mut adjusted = vec![0.0; n];
    let mut running = f64::INFINITY;
    for i in (0..n).rev() {
        let rank = (i + 1) as f64;
        running = running.min((sorted_p[i] * n_f / rank).min(1.0));
        adjusted[i] = running;
    }
    adjusted
}

/// Expected null p-value at each rank, for QQ plotting: (i + 0.5) / n at
/// 0-based rank i.
pub fn qq_expected(n: usize) -> Vec<f64> {
    let n_recip = 1.0 / n as f64;
    (0..n).map(|i| (i as f64 + 0.5) * n_recip).collect()
}

/// Benjamini-Yekutieli FDR, valid under arbitrary dependence: the BH pass
/// with the multiplier scaled by the harmonic number H(n).
pub fn benjamini_yekutieli(sorted_p: &[f64]) -> Vec<f64> {
    let n = sorted_p.len();
    let n_f = n as f64;
    let mut harmonic = 0.0;
    for k in 1..=n {
        harmonic += 1.0 / k as f64;
    }
    let mut adjusted = vec![0.0; n];
    let mut running = f64::INFINITY;
    for i in (0..n).rev() {
        let rank = (i + 1) as f64;
        running = running.min((harmonic * sorted_p[i] * n_f / rank).min(1.0));
        adjusted[i] = running;
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    // worked example used throughout: n = 4, ascending p
    const P4: [f64; 4] = [0.01, 0.02, 0.03, 0.20];

    #[test]
    fn test_bonferroni_worked_example() {
        let adj = bonferroni(&P4);
        let expected = [0.04, 0.08, 0.12, 0.80];
        for (a, e) in adj.iter().zip(expected.iter()) {
            assert!((a - e).abs() < TOL, "got {}, want {}", a, e);
        }
    }

    #[test]
    fn test_bonferroni_clamps_at_one() {
        let adj = bonferroni(&[0.4, 0.9]);
        assert!((adj[0] - 0.8).abs() < TOL);
        assert!((adj[1] - 1.0).abs() < TOL);
    }

    #[test]
    fn test_holm_worked_example() {
        let adj = holm(&P4);
        let expected = [0.04, 0.06, 0.06, 0.20];
        for (a, e) in adj.iter().zip(expected.iter()) {
            assert!((a - e).abs() < TOL, "got {}, want {}", a, e);
        }
        // least significant rank keeps its own raw p here (multiplier 1)
        assert!((adj[3] - P4[3]).abs() < TOL);
    }

    #[test]
    fn test_holm_freezes_at_one() {
        let adj = holm(&[0.3, 0.5, 0.9]);
        // 3 * 0.3 = 0.9, then 2 * 0.5 = 1.0 caps the rest
        assert!((adj[0] - 0.9).abs() < TOL);
        assert!((adj[1] - 1.0).abs() < TOL);
        assert!((adj[2] - 1.0).abs() < TOL);
    }

    #[test]
    fn test_bh_worked_example() {
        let adj = benjamini_hochberg(&P4);
        let expected = [0.04, 0.04, 0.04, 0.20];
        for (a, e) in adj.iter().zip(expected.iter()) {
            assert!((a - e).abs() < TOL, "got {}, want {}", a, e);
        }
    }

    #[test]
    fn test_bh_at_most_bonferroni_at_top_rank() {
        let p = [0.001, 0.012, 0.013, 0.4, 0.9];
        let bh = benjamini_hochberg(&p);
        let bonf = bonferroni(&p);
        assert!(bh[0] <= bonf[0] + TOL);
    }

    #[test]
    fn test_by_scales_bh_by_harmonic_number() {
        let p = [0.001, 0.01, 0.05];
        let bh = benjamini_hochberg(&p);
        let by = benjamini_yekutieli(&p);
        let h3 = 1.0 + 0.5 + 1.0 / 3.0;
        for (b, y) in bh.iter().zip(by.iter()) {
            assert!(*y <= 1.0 + TOL);
            assert!((y - (b * h3).min(1.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_step_down_families_monotone_toward_less_significant() {
        let p = [1e-30, 1e-9, 0.0004, 0.0004, 0.01, 0.2, 0.2, 0.95];
        for adj in [
            holm(&p),
            sidak_step_down(&p),
            benjamini_hochberg(&p),
            benjamini_yekutieli(&p),
        ] {
            for pair in adj.windows(2) {
                assert!(pair[1] >= pair[0], "sequence decreased: {:?}", adj);
            }
        }
    }

    #[test]
    fn test_sidak_single_step_matches_direct_form() {
        let p = [0.01, 0.1, 0.5];
        let adj = sidak_single_step(&p);
        for (a, &raw) in adj.iter().zip(p.iter()) {
            let direct = 1.0 - (1.0 - raw).powi(3);
            assert!((a - direct).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sidak_guard_continuous_at_threshold() {
        // the two branches must agree to high precision near the switch
        let below = 0.0078125 - 1e-9;
        let above = 0.0078125 + 1e-9;
        let lo = sidak_single_step(&[below, 0.5])[0];
        let hi = sidak_single_step(&[above, 0.5])[0];
        assert!((hi - lo).abs() < 1e-7);
    }

    #[test]
    fn test_sidak_small_p_keeps_magnitude() {
        // 1 - (1 - p)^n ~= n * p for tiny p
        let p = 1e-12;
        let adj = sidak_single_step(&[p, 0.5, 0.6, 0.7]);
        assert!(adj[0] > 0.0);
        assert!((adj[0] - 4.0 * p).abs() / (4.0 * p) < 1e-3);
    }

    #[test]
    fn test_all_families_in_unit_interval() {
        let p = [0.0, 1e-12, 0.04, 0.5, 1.0];
        for adj in [
            bonferroni(&p),
            holm(&p),
            sidak_single_step(&p),
            sidak_step_down(&p),
            benjamini_hochberg(&p),
            benjamini_yekutieli(&p),
        ] {
            for v in adj {
                assert!((0.0..=1.0).contains(&v), "out of range: {}", v);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(bonferroni(&[]).is_empty());
        assert!(holm(&[]).is_empty());
        assert!(sidak_single_step(&[]).is_empty());
        assert!(sidak_step_down(&[]).is_empty());
        assert!(benjamini_hochberg(&[]).is_empty());
        assert!(benjamini_yekutieli(&[]).is_empty());
    }

    #[test]
    fn test_qq_expected_rank_midpoints() {
        let qq = qq_expected(4);
        let expected = [0.125, 0.375, 0.625, 0.875];
        for (got, want) in qq.iter().zip(expected.iter()) {
            assert!((got - want).abs() < TOL);
        }
    }

    #[test]
    fn test_single_test_is_identity_for_fwer() {
        let p = [0.037];
        assert!((bonferroni(&p)[0] - 0.037).abs() < TOL);
        assert!((holm(&p)[0] - 0.037).abs() < TOL);
        assert!((benjamini_hochberg(&p)[0] - 0.037).abs() < TOL);
    }
}
