//! Region + trim → won amount, with layered label fallback.

use serde::Serialize;

use crate::aliases::{aliases_for, fallback_aliases_for};
use crate::locator::{locate_label, locate_window};
use crate::money::parse_won;
use crate::normalize::normalize;

/// Why an extraction produced no amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotFoundReason {
    RegionNotFound,
    TrimOrMoneyNotFound,
    /// The trim code has neither exact labels nor a model-family prefix.
    UnknownTrim,
}

impl NotFoundReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotFoundReason::RegionNotFound => "REGION_NOT_FOUND",
            NotFoundReason::TrimOrMoneyNotFound => "TRIM_OR_MONEY_NOT_FOUND",
            NotFoundReason::UnknownTrim => "UNKNOWN_TRIM",
        }
    }
}

impl std::fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which label set produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// An exact-trim label.
    Alias,
    /// A model-family label; less precise than [`MatchTier::Alias`].
    Fallback,
}

impl MatchTier {
    fn prefix(self) -> &'static str {
        match self {
            MatchTier::Alias => "alias",
            MatchTier::Fallback => "fallback",
        }
    }
}

/// Record of the label that located the amount, rendered as
/// `alias:<label>` or `fallback:<label>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub tier: MatchTier,
    pub label: String,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.tier.prefix(), self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Found {
        amount_won: u64,
        provenance: Provenance,
    },
    NotFound {
        reason: NotFoundReason,
    },
}

struct MatchStage {
    tier: MatchTier,
    labels: &'static [&'static str],
}

/// Ordered matcher stages for `trim`: exact-trim labels, then model labels.
fn stages_for(trim: &str) -> [MatchStage; 2] {
    [
        MatchStage {
            tier: MatchTier::Alias,
            labels: aliases_for(trim),
        },
        MatchStage {
            tier: MatchTier::Fallback,
            labels: fallback_aliases_for(trim),
        },
    ]
}

/// Extracts the subsidy for `region` and `trim` from page text.
///
/// The region window is located first; inside it each stage's labels are
/// tried in order, and the first label whose window parses to an amount
/// wins. An exact-trim match is never displaced by a model-level one.
///
/// Pure: the same inputs always give the same result.
#[must_use]
pub fn extract(page: &str, region: &str, trim: &str) -> ExtractionResult {
    let region = normalize(region);
    let region_window = match locate_window(page, &region) {
        Ok(window) => window,
        Err(reason) => return ExtractionResult::NotFound { reason },
    };

    let stages = stages_for(trim);
    if stages.iter().all(|stage| stage.labels.is_empty()) {
        return ExtractionResult::NotFound {
            reason: NotFoundReason::UnknownTrim,
        };
    }

    let found = stages.iter().find_map(|stage| {
        stage.labels.iter().find_map(|label| {
            let window = locate_label(region_window, label)?;
            let amount_won = parse_won(window)?;
            Some(ExtractionResult::Found {
                amount_won,
                provenance: Provenance {
                    tier: stage.tier,
                    label: (*label).to_string(),
                },
            })
        })
    });

    found.unwrap_or_else(|| {
        tracing::debug!(%region, trim, "no label window in region produced an amount");
        ExtractionResult::NotFound {
            reason: NotFoundReason::TrimOrMoneyNotFound,
        }
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
