/// Rounds to `decimals` places the way Python's `round` does: the exact
/// binary value is rounded, and exact ties go to the even digit.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
