use costscope_types::{CacheTier, TokenUsage, round4};

// Currency units per million tokens.
const INPUT_PER_MTOK: f64 = 3.00;
const CACHE_WRITE_PER_MTOK: f64 = 3.75;
const CACHE_READ_5M_PER_MTOK: f64 = 0.30;
const CACHE_READ_1H_PER_MTOK: f64 = 0.15;
const OUTPUT_PER_MTOK: f64 = 15.00;

fn cache_read_rate(tier: CacheTier) -> f64 {
    match tier {
        CacheTier::FiveMinute => CACHE_READ_5M_PER_MTOK,
        CacheTier::OneHour => CACHE_READ_1H_PER_MTOK,
    }
}

/// Cost of one message's token usage, rounded to 4 decimal places.
///
/// Pure and total: absent usage costs nothing, and token counts are already
/// non-negative by construction. This function never fails.
pub fn cost_of(usage: Option<&TokenUsage>) -> f64 {
    let Some(usage) = usage else {
        return 0.0;
    };

    let raw = usage.input as f64 * INPUT_PER_MTOK
        + usage.cache_write as f64 * CACHE_WRITE_PER_MTOK
        + usage.cache_read as f64 * cache_read_rate(usage.tier)
        + usage.output as f64 * OUTPUT_PER_MTOK;

    round4(raw / 1_000_000.0)
}
