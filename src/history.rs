//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) || |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-07
// Version : 0.1.0
// License : Mulan PSL v2
//
// History entries

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::passgen::GeneratedPassword;
use crate::strength::{score, StrengthLevel, StrengthScore};

// 密码历史记录，由调用方保存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub score: f32,
    pub strength: StrengthLevel,
}

impl HistoryEntry {
    pub fn record(password: &GeneratedPassword) -> Self {
        Self::with_timestamp(password.as_str(), score(password.as_str()), Utc::now())
    }

    pub fn with_timestamp(password: &str, strength: StrengthScore, created_at: DateTime<Utc>) -> Self {
        Self {
            password: password.to_string(),
            created_at,
            score: strength.value(),
            strength: strength.level(),
        }
    }
}
