// File: crates/benchplot-core/src/grid.rs
// Summary: Tick layout helpers: nice step selection, tick sequences, even spacing.

/// Candidate step sizes, ascending. Ranges coarser than the last entry still use it.
pub const STEP_CANDIDATES: [f64; 5] = [1.0, 2.0, 5.0, 10.0, 20.0];

/// Smallest candidate step `s` with `range / target_steps <= s`, saturating at 20.
///
/// Inputs must be finite; `target_steps == 0` yields the coarsest step.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    let rough = range / target_steps as f64;
    STEP_CANDIDATES
        .iter()
        .copied()
        .find(|&c| rough <= c)
        .unwrap_or(STEP_CANDIDATES[STEP_CANDIDATES.len() - 1])
}

/// Ascending ticks over `[min, max]` on a nice step.
///
/// Always starts at `min` and ends at `max` even when they are not step-aligned,
/// so an axis labels its true extremes. Non-finite bounds come back as-is.
pub fn make_ticks(min: f64, max: f64, target_steps: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return vec![min, max];
    }
    let step = nice_step(max - min, target_steps);
    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut i = 0usize;
    // multiply instead of accumulating so aligned ticks stay exact
    while first + step * i as f64 <= max {
        ticks.push(first + step * i as f64);
        i += 1;
    }
    if !ticks.contains(&min) {
        ticks.insert(0, min);
    }
    if !ticks.contains(&max) {
        ticks.push(max);
    }
    ticks
}

/// Exactly `steps` evenly spaced values from `start` to `end` inclusive.
///
/// A single step sits at the midpoint; zero steps yield nothing.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => return Vec::new(),
        1 => return vec![start + (end - start) / 2.0],
        _ => {}
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
