/// Round a currency value to exactly 4 decimal places.
///
/// Every monetary value that leaves this subsystem goes through this helper;
/// intermediate sums stay unrounded so drift is introduced only once per
/// aggregation level.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
