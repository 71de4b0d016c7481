//! ASCII histogram of a cohort's default-probability distribution.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - peer distribution: `#` bars (one bin per column)
//! - the subject's probability: a `*` capped `|` marker column

use crate::domain::CohortSummary;

/// Render the cohort distribution with the subject's probability marked.
///
/// Returns an empty string for an empty cohort; callers render the
/// no-comparison message instead.
pub fn render_distribution(summary: &CohortSummary, subject: f64, width: usize, height: usize) -> String {
    if summary.probabilities.is_empty() {
        return String::new();
    }
    let width = width.max(20);
    let height = height.max(5);

    let (p_min, p_max) = value_range(&summary.probabilities, subject);
    let (p_min, p_max) = pad_range(p_min, p_max, 0.05);

    let counts = bin_counts(&summary.probabilities, p_min, p_max, width);
    let peak = counts.iter().copied().max().unwrap_or(1).max(1);

    let mut grid = vec![vec![' '; width]; height];

    // Bars grow upward from the bottom row.
    for (x, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let bar = ((count as f64 / peak as f64) * height as f64).ceil() as usize;
        let bar = bar.clamp(1, height);
        for y in 0..bar {
            grid[height - 1 - y][x] = '#';
        }
    }

    // Subject marker overlays the bars.
    let x = map_x(subject, p_min, p_max, width);
    grid[0][x] = '*';
    for row in grid.iter_mut().skip(1) {
        row[x] = '|';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Default probability distribution: p=[{p_min:.3}, {p_max:.3}] | n={} | peak bin={peak} | * you\n",
        summary.sample_size
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out.push_str(&x_axis(width));
    out
}

fn value_range(probabilities: &[f64], subject: f64) -> (f64, f64) {
    let mut min_p = subject;
    let mut max_p = subject;
    for &p in probabilities {
        min_p = min_p.min(p);
        max_p = max_p.max(p);
    }
    if !(min_p.is_finite() && max_p.is_finite() && max_p > min_p) {
        return (0.0, 1.0);
    }
    (min_p, max_p)
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn bin_counts(probabilities: &[f64], p_min: f64, p_max: f64, width: usize) -> Vec<usize> {
    let mut counts = vec![0usize; width];
    for &p in probabilities {
        counts[map_x(p, p_min, p_max, width)] += 1;
    }
    counts
}

fn map_x(p: f64, p_min: f64, p_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((p - p_min) / (p_max - p_min)).clamp(0.0, 1.0);
    ((u * (width - 1) as f64).round() as usize).min(width - 1)
}

fn x_axis(width: usize) -> String {
    let mut out = String::new();
    out.push_str(&"-".repeat(width));
    out.push('\n');
    out
}
