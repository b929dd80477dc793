//! Display labels that source pages use for each trim.
//!
//! Source sites label the same configuration differently (English marketing
//! names, Korean names, bare drivetrain tags), so each trim maps to an
//! ordered list, most specific first.

use evsub_core::{ModelFamily, TrimCode};

const M3_STD: &[&str] = &[
    "Model 3 Standard RWD",
    "Model 3 Standard",
    "모델 3",
    "스탠다드",
    "RWD",
];
const M3_LR: &[&str] = &[
    "Model 3 Premium Long Range RWD",
    "Model 3 Long Range",
    "롱레인지",
    "Long Range",
];
const M3_PERF: &[&str] = &["Model 3 Performance", "퍼포먼스", "Performance"];
const MY_RWD: &[&str] = &[
    "Model Y Premium RWD",
    "Model Y RWD",
    "모델 Y",
    "Premium RWD",
    "RWD",
];
const MY_LR: &[&str] = &[
    "Model Y Premium Long Range",
    "Model Y Long Range",
    "Long Range",
    "롱레인지",
    "AWD",
];

const MODEL_3: &[&str] = &["Model 3", "모델 3"];
const MODEL_Y: &[&str] = &["Model Y", "모델 Y"];

/// Exact-trim labels for a raw trim code, in match priority order.
///
/// Unknown codes yield an empty slice.
#[must_use]
pub fn aliases_for(trim: &str) -> &'static [&'static str] {
    match trim.parse::<TrimCode>() {
        Ok(TrimCode::M3Std) => M3_STD,
        Ok(TrimCode::M3Lr) => M3_LR,
        Ok(TrimCode::M3Perf) => M3_PERF,
        Ok(TrimCode::MyRwd) => MY_RWD,
        Ok(TrimCode::MyLr) => MY_LR,
        Err(_) => &[],
    }
}

/// Model-family labels used when no exact-trim label yields an amount.
///
/// Derived from the code prefix, so unrecognized `M3_*` / `MY_*` codes still
/// get a fallback. Codes with no known prefix yield an empty slice, which
/// `extract` reports as `UNKNOWN_TRIM`. They are not sent to the Model Y
/// labels: an amount for the wrong model line is worse than a manual entry.
/// Earlier deployments of this lookup did default every non-`M3` code to
/// Model Y, so clients that relied on that now see manual mode instead.
#[must_use]
pub fn fallback_aliases_for(trim: &str) -> &'static [&'static str] {
    match ModelFamily::from_code_prefix(trim) {
        Some(ModelFamily::Model3) => MODEL_3,
        Some(ModelFamily::ModelY) => MODEL_Y,
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_trim_has_aliases() {
        for trim in TrimCode::ALL {
            assert!(
                !aliases_for(trim.as_code()).is_empty(),
                "no aliases for {trim}"
            );
        }
    }

    #[test]
    fn aliases_are_most_specific_first() {
        assert_eq!(
            aliases_for("M3_LR").first(),
            Some(&"Model 3 Premium Long Range RWD")
        );
        assert_eq!(aliases_for("MY_RWD").last(), Some(&"RWD"));
    }

    #[test]
    fn unknown_trim_has_no_aliases() {
        assert!(aliases_for("M3_HIGHLAND").is_empty());
        assert!(aliases_for("").is_empty());
    }

    #[test]
    fn fallback_follows_model_family() {
        assert_eq!(fallback_aliases_for("M3_PERF"), &["Model 3", "모델 3"]);
        assert_eq!(fallback_aliases_for("MY_LR"), &["Model Y", "모델 Y"]);
    }

    #[test]
    fn fallback_for_unknown_code_uses_prefix() {
        assert_eq!(fallback_aliases_for("M3_HIGHLAND"), &["Model 3", "모델 3"]);
        assert!(fallback_aliases_for("EV6_GT").is_empty());
    }
}
