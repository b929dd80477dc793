use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Vehicle configurations the lookup knows display labels for.
///
/// The wire form is the short code clients send as `trim`, e.g. `"M3_LR"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrimCode {
    M3Std,
    M3Lr,
    M3Perf,
    MyRwd,
    MyLr,
}

impl TrimCode {
    pub const ALL: [TrimCode; 5] = [
        TrimCode::M3Std,
        TrimCode::M3Lr,
        TrimCode::M3Perf,
        TrimCode::MyRwd,
        TrimCode::MyLr,
    ];

    #[must_use]
    pub fn as_code(self) -> &'static str {
        match self {
            TrimCode::M3Std => "M3_STD",
            TrimCode::M3Lr => "M3_LR",
            TrimCode::M3Perf => "M3_PERF",
            TrimCode::MyRwd => "MY_RWD",
            TrimCode::MyLr => "MY_LR",
        }
    }

    #[must_use]
    pub fn family(self) -> ModelFamily {
        match self {
            TrimCode::M3Std | TrimCode::M3Lr | TrimCode::M3Perf => ModelFamily::Model3,
            TrimCode::MyRwd | TrimCode::MyLr => ModelFamily::ModelY,
        }
    }
}

impl std::fmt::Display for TrimCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for TrimCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrimCode::ALL
            .into_iter()
            .find(|t| t.as_code() == s)
            .ok_or_else(|| format!("unknown trim code '{s}'"))
    }
}

/// Model line a trim belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFamily {
    Model3,
    ModelY,
}

impl ModelFamily {
    /// Derives the family from a raw trim code by prefix.
    ///
    /// Works for codes that are not (yet) a [`TrimCode`], so a new
    /// `"M3_..."` variant still resolves to [`ModelFamily::Model3`].
    #[must_use]
    pub fn from_code_prefix(code: &str) -> Option<Self> {
        if code.starts_with("M3") {
            Some(ModelFamily::Model3)
        } else if code.starts_with("MY") {
            Some(ModelFamily::ModelY)
        } else {
            None
        }
    }
}
