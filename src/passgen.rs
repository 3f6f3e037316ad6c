//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) || |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-05
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use std::fmt;
use serde::{Serialize, Deserialize};
use zeroize::{Zeroize, Zeroizing};

use crate::charpool::{build_pool, CharacterCategory, CharacterPool};
use crate::error::{GenError, Result};
use crate::randsource::{RandomSource, SystemRandom};

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 128;

// 随机密码生成选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub specials: bool,
    pub avoid_ambiguous: bool,
    pub url_safe: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            specials: true,
            avoid_ambiguous: false,
            url_safe: false,
        }
    }
}

impl GenerationConfig {
    pub fn enabled_categories(&self) -> Vec<CharacterCategory> {
        CharacterCategory::ALL
            .into_iter()
            .filter(|category| category.is_enabled(self))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(GenError::InvalidConfig(format!(
                "Password length must be between {} and {}, got {}",
                MIN_LENGTH, MAX_LENGTH, self.length
            )));
        }
        if self.enabled_categories().is_empty() {
            return Err(GenError::InvalidConfig("At least one character set must be included".to_string()));
        }
        Ok(())
    }
}

/// 生成的密码，释放时清零
pub struct GeneratedPassword {
    value: String,
}

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// 字符数
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn into_string(mut self) -> String {
        std::mem::take(&mut self.value)
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// 非致命的生成警告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationWarning {
    /// 使用了伪随机源，安全性低于预期
    DegradedRandomness,
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationWarning::DegradedRandomness => {
                f.write_str("no cryptographic random source available, password was generated with a pseudo-random fallback")
            }
        }
    }
}

#[derive(Debug)]
pub struct Generation {
    pub password: GeneratedPassword,
    pub warnings: Vec<GenerationWarning>,
}

impl Generation {
    pub fn is_degraded(&self) -> bool {
        self.warnings.contains(&GenerationWarning::DegradedRandomness)
    }
}

fn pick<R: RandomSource + ?Sized>(chars: &[char], rng: &mut R) -> Result<char> {
    if chars.is_empty() {
        return Err(GenError::InvalidConfig("Cannot draw from an empty character set".to_string()));
    }
    Ok(chars[rng.next_below(chars.len())?])
}

/// 按字符池组装密码
///
/// 每个类别先各取一个字符，再从总字符池补足长度，最后做 Fisher-Yates 洗牌。
/// `length` 小于类别数时按类别数生成。
pub fn compose<R: RandomSource + ?Sized>(
    pool: &CharacterPool,
    length: usize,
    rng: &mut R,
) -> Result<GeneratedPassword> {
    let target = length.max(pool.sets().len());
    let mut buf: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(target));

    // 每个启用的类别至少一个字符
    for set in pool.sets() {
        buf.push(pick(set.chars(), rng)?);
    }

    while buf.len() < target {
        buf.push(pick(pool.combined(), rng)?);
    }

    for i in (1..buf.len()).rev() {
        let j = rng.next_below(i + 1)?;
        buf.swap(i, j);
    }

    Ok(GeneratedPassword { value: buf.iter().collect() })
}

pub fn generate<R: RandomSource + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<Generation> {
    config.validate()?;
    let pool = build_pool(config)?;
    let password = compose(&pool, config.length, rng)?;

    let mut warnings = Vec::new();
    if rng.is_degraded() {
        warnings.push(GenerationWarning::DegradedRandomness);
    }
    Ok(Generation { password, warnings })
}

/// 使用运行时探测到的随机源生成密码
pub fn generate_password(config: &GenerationConfig) -> Result<Generation> {
    let mut rng = SystemRandom::detect()?;
    generate(config, &mut rng)
}
