//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) || |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Character pools

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::error::{GenError, Result};
use crate::passgen::GenerationConfig;

/// 容易混淆的字符
pub const AMBIGUOUS_CHARS: [char; 5] = ['I', 'l', '1', 'O', '0'];

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
const URL_SAFE_SPECIAL: &str = "-._~";

// 字符类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterCategory {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterCategory {
    /// 固定的遍历顺序，决定保底字符的抽取顺序和字符池的拼接顺序
    pub const ALL: [CharacterCategory; 4] = [
        CharacterCategory::Uppercase,
        CharacterCategory::Lowercase,
        CharacterCategory::Digit,
        CharacterCategory::Special,
    ];

    pub fn base_set(self, url_safe: bool) -> &'static str {
        match self {
            CharacterCategory::Uppercase => UPPERCASE,
            CharacterCategory::Lowercase => LOWERCASE,
            CharacterCategory::Digit => DIGITS,
            CharacterCategory::Special if url_safe => URL_SAFE_SPECIAL,
            CharacterCategory::Special => SPECIAL,
        }
    }

    /// 判断任意字符是否属于该类别（不受配置影响）
    pub fn matches(self, c: char) -> bool {
        match self {
            CharacterCategory::Uppercase => c.is_ascii_uppercase(),
            CharacterCategory::Lowercase => c.is_ascii_lowercase(),
            CharacterCategory::Digit => c.is_ascii_digit(),
            CharacterCategory::Special => c.is_ascii_punctuation(),
        }
    }

    pub fn is_enabled(self, config: &GenerationConfig) -> bool {
        match self {
            CharacterCategory::Uppercase => config.uppercase,
            CharacterCategory::Lowercase => config.lowercase,
            CharacterCategory::Digit => config.digits,
            CharacterCategory::Special => config.specials,
        }
    }
}

impl fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterCategory::Uppercase => "Uppercase",
            CharacterCategory::Lowercase => "Lowercase",
            CharacterCategory::Digit => "Digit",
            CharacterCategory::Special => "Special",
        };
        f.write_str(name)
    }
}

/// 单个类别经过过滤后的字符集
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    category: CharacterCategory,
    chars: Vec<char>,
}

impl CategorySet {
    pub fn new(category: CharacterCategory, url_safe: bool, avoid_ambiguous: bool) -> Self {
        let mut chars: Vec<char> = category.base_set(url_safe).chars().collect();
        if avoid_ambiguous {
            chars.retain(|c| !AMBIGUOUS_CHARS.contains(c));
        }
        Self { category, chars }
    }

    pub fn category(&self) -> CharacterCategory {
        self.category
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// 启用类别的字符集，以及按固定顺序拼接得到的总字符池
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    sets: Vec<CategorySet>,
    combined: Vec<char>,
}

impl CharacterPool {
    pub fn sets(&self) -> &[CategorySet] {
        &self.sets
    }

    pub fn combined(&self) -> &[char] {
        &self.combined
    }

    pub fn len(&self) -> usize {
        self.combined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.combined.contains(&c)
    }

    pub fn category_set(&self, category: CharacterCategory) -> Option<&CategorySet> {
        self.sets.iter().find(|set| set.category == category)
    }
}

pub fn build_pool(config: &GenerationConfig) -> Result<CharacterPool> {
    let mut sets = Vec::new();
    for category in CharacterCategory::ALL {
        if !category.is_enabled(config) {
            continue;
        }
        let set = CategorySet::new(category, config.url_safe, config.avoid_ambiguous);
        if set.chars.is_empty() {
            return Err(GenError::InvalidConfig(format!(
                "{} character set is empty after removing ambiguous characters",
                category
            )));
        }
        sets.push(set);
    }

    if sets.is_empty() {
        return Err(GenError::InvalidConfig("At least one character set must be included".to_string()));
    }

    let combined = sets.iter().flat_map(|set| set.chars.iter().copied()).collect();
    Ok(CharacterPool { sets, combined })
}
