//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) || |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-06
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength evaluation

use std::fmt;
use serde::{Serialize, Deserialize};
use unicode_segmentation::UnicodeSegmentation;
use zxcvbn::zxcvbn;
use zxcvbn::Score;

use crate::charpool::{CharacterCategory, AMBIGUOUS_CHARS};

// 引入编译生成的弱密码列表
include!(concat!(env!("OUT_DIR"), "/weak_passwords.rs"));

pub const LENGTH_THRESHOLD: usize = 12;
const CRITERIA_COUNT: u8 = 4;

// 三位连续数字（含 890 / 098）
const DIGIT_RUNS: [&str; 18] = [
    "012", "123", "234", "345", "456", "567", "678", "789", "890",
    "098", "987", "876", "765", "654", "543", "432", "321", "210",
];

// 强度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// 0..=4 的档位，超出按最高档处理
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => StrengthLevel::VeryWeak,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Fair,
            3 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 满足的条件数 / 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrengthScore {
    criteria_met: u8,
}

impl StrengthScore {
    pub const MAX: StrengthScore = StrengthScore { criteria_met: CRITERIA_COUNT };

    pub fn criteria_met(&self) -> u8 {
        self.criteria_met
    }

    /// 取值为 0、0.25、0.5、0.75、1.0 之一
    pub fn value(&self) -> f32 {
        f32::from(self.criteria_met) / f32::from(CRITERIA_COUNT)
    }

    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_index(self.criteria_met)
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.level(), self.value())
    }
}

/// 各项判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub length_ok: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub variety: bool,
    pub no_weak_pattern: bool,
    pub not_breached: bool,
    pub score: StrengthScore,
}

impl StrengthReport {
    pub fn suggestions(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if !self.not_breached {
            out.push("This password appears in lists of breached passwords, never use it.");
        }
        if !self.length_ok {
            out.push("Use at least 12 characters.");
        }
        if !self.variety {
            out.push("Mix at least three of: uppercase, lowercase, digits, symbols.");
        }
        if !self.no_weak_pattern {
            out.push("Avoid repeated characters and digit sequences such as 123 or 987.");
        }
        out
    }
}

/// 密码长度，按字素簇计数
pub fn password_length(password: &str) -> usize {
    password.graphemes(true).count()
}

pub fn is_known_weak(password: &str) -> bool {
    WEAK_PASSWORDS.iter().any(|weak| *weak == password)
}

/// 三个及以上相同字符连续出现，或包含三位连续数字
pub fn has_weak_pattern(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    let repeated = chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]);
    repeated || DIGIT_RUNS.iter().any(|run| password.contains(run))
}

pub fn assess(password: &str) -> StrengthReport {
    let has = |category: CharacterCategory| password.chars().any(|c| category.matches(c));

    let length_ok = password_length(password) >= LENGTH_THRESHOLD;
    let has_digit = has(CharacterCategory::Digit);
    let has_special = has(CharacterCategory::Special);
    let has_uppercase = has(CharacterCategory::Uppercase);
    let has_lowercase = has(CharacterCategory::Lowercase);
    let classes = [has_digit, has_special, has_uppercase, has_lowercase]
        .iter()
        .filter(|present| **present)
        .count();
    let variety = classes >= 3;
    let no_weak_pattern = !has_weak_pattern(password);
    let not_breached = !is_known_weak(password);

    let met = [length_ok, variety, no_weak_pattern, not_breached]
        .iter()
        .filter(|ok| **ok)
        .count() as u8;
    // 空密码和已泄露密码直接判为最低档
    let criteria_met = if password.is_empty() || !not_breached { 0 } else { met };

    StrengthReport {
        length_ok,
        has_digit,
        has_special,
        has_uppercase,
        has_lowercase,
        variety,
        no_weak_pattern,
        not_breached,
        score: StrengthScore { criteria_met },
    }
}

pub fn score(password: &str) -> StrengthScore {
    assess(password).score
}

pub fn check_url_safe(password: &str) -> bool {
    password.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

pub fn check_confusing_chars(password: &str) -> Vec<char> {
    password.chars().filter(|c| AMBIGUOUS_CHARS.contains(c)).collect()
}

/// zxcvbn 估算结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntropyEstimate {
    pub score: u8,
    pub level: StrengthLevel,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    pub crack_time: String,
}

pub fn estimate(password: &str) -> EntropyEstimate {
    if password.is_empty() {
        return EntropyEstimate {
            score: 0,
            level: StrengthLevel::VeryWeak,
            warning: None,
            suggestions: Vec::new(),
            crack_time: "instant".to_string(),
        };
    }

    let result = zxcvbn(password, &[]);
    #[allow(unreachable_patterns)]
    let score = match result.score() {
        Score::Zero => 0,
        Score::One => 1,
        Score::Two => 2,
        Score::Three => 3,
        Score::Four => 4,
        _ => 0,
    };
    let (warning, suggestions) = match result.feedback() {
        Some(f) => (
            f.warning().map(|w| w.to_string()),
            f.suggestions().iter().map(|s| s.to_string()).collect(),
        ),
        None => (None, Vec::new()),
    };
    let crack_time = result.crack_times().offline_fast_hashing_1e10_per_second().to_string();

    EntropyEstimate {
        score,
        level: StrengthLevel::from_index(score),
        warning,
        suggestions,
        crack_time,
    }
}
