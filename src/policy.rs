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
// Password policy interface

use serde::{Serialize, Deserialize};

use crate::charpool::CharacterCategory;
use crate::error::{GenError, Result};
use crate::passgen::{generate, Generation, GenerationConfig};
use crate::randsource::RandomSource;

/// 策略配置，由外部校验方解释，本库只负责传递
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub name: String,
    pub min_length: Option<usize>,
    pub min_score: Option<f32>,
    pub required_categories: Vec<CharacterCategory>,
    pub forbidden_chars: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn accept() -> Self {
        Self { valid: true, reason: None }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self { valid: false, reason: Some(reason.into()) }
    }
}

/// 外部策略校验接口
pub trait PolicyValidator {
    fn validate(&self, password: &str, policy: &PolicyConfig) -> ValidationResult;
}

impl<F> PolicyValidator for F
where
    F: Fn(&str, &PolicyConfig) -> ValidationResult,
{
    fn validate(&self, password: &str, policy: &PolicyConfig) -> ValidationResult {
        self(password, policy)
    }
}

pub fn validate_against_policy<V: PolicyValidator + ?Sized>(
    password: &str,
    policy: &PolicyConfig,
    validator: &V,
) -> ValidationResult {
    validator.validate(password, policy)
}

/// 生成后交给校验方，被拒绝时返回 `PolicyViolation`，不会自动重试
pub fn generate_with_policy<R, V>(
    config: &GenerationConfig,
    rng: &mut R,
    validator: &V,
    policy: &PolicyConfig,
) -> Result<Generation>
where
    R: RandomSource + ?Sized,
    V: PolicyValidator + ?Sized,
{
    let generation = generate(config, rng)?;
    let verdict = validate_against_policy(generation.password.as_str(), policy, validator);
    if verdict.valid {
        Ok(generation)
    } else {
        let reason = verdict
            .reason
            .unwrap_or_else(|| format!("rejected by policy '{}'", policy.name));
        Err(GenError::PolicyViolation(reason))
    }
}
