//! Useful functions.

/// Format `a` out of `b` as `a of b (xx.x %)`.
pub fn percentage(a: usize, b: usize) -> String {
    let pct = match b {
        0 => 0f64,
        _ => a as f64 * 100. / b as f64,
    };
    format!("{} of {} ({:.1} %)", a, b, pct)
}
