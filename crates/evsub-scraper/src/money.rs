//! Won amount parsing from short windows of Korean subsidy text.
//!
//! Rules are tried in order and the first one that yields a value wins. The
//! list is data, so a new idiom is one more entry in [`RULES`].

use std::sync::LazyLock;

use regex::Regex;

/// Multiplier for the "만원" (ten-thousand won) unit.
const MAN_WON: u64 = 10_000;

/// Bare "원" amounts at or below this are treated as noise (counts,
/// percentages, fees) rather than a subsidy total.
const MIN_BARE_WON: u64 = 100_000;

struct MoneyRule {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    multiplier: u64,
    /// Value must be strictly greater than this to count.
    floor: Option<u64>,
}

static TOTAL_MAN_WON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"총\s*보조금\s*([0-9,]+)\s*만원").expect("valid total subsidy regex")
});

static BARE_WON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9,]+)\s*원").expect("valid won regex"));

static BARE_MAN_WON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9,]+)\s*만원").expect("valid man-won regex"));

static RULES: [MoneyRule; 3] = [
    MoneyRule {
        name: "total_man_won",
        pattern: &TOTAL_MAN_WON,
        multiplier: MAN_WON,
        floor: None,
    },
    MoneyRule {
        name: "bare_won",
        pattern: &BARE_WON,
        multiplier: 1,
        floor: Some(MIN_BARE_WON),
    },
    MoneyRule {
        name: "bare_man_won",
        pattern: &BARE_MAN_WON,
        multiplier: MAN_WON,
        floor: None,
    },
];

impl MoneyRule {
    /// Only the first occurrence of the pattern is considered.
    fn apply(&self, window: &str) -> Option<u64> {
        let caps = self.pattern.captures(window)?;
        let value = parse_grouped_digits(caps.get(1)?.as_str())?.checked_mul(self.multiplier)?;
        match self.floor {
            Some(floor) if value <= floor => None,
            _ => Some(value),
        }
    }
}

/// Extracts a won amount from `window`, or `None` when no rule matches.
///
/// 1. `총 보조금 <N>만원` → N × 10,000
/// 2. first `<N>원`, only if N > 100,000 → N
/// 3. first `<N>만원` → N × 10,000
#[must_use]
pub fn parse_won(window: &str) -> Option<u64> {
    RULES.iter().find_map(|rule| {
        let value = rule.apply(window)?;
        tracing::trace!(rule = rule.name, value, "money rule matched");
        Some(value)
    })
}

/// Parses a comma-grouped integer such as `"3,360,000"`.
fn parse_grouped_digits(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    digits.parse::<u64>().ok()
}

#[cfg(test)]
#[path = "money_test.rs"]
mod tests;
