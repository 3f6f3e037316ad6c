//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) || |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-09
// Version : 0.1.0
// License : Mulan PSL v2
//
// Local policy enforcement

use rpawogen::policy::{PolicyConfig, PolicyValidator, ValidationResult};
use rpawogen::strength::{password_length, score};

/// 本地策略校验，代替远程策略服务
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPolicy;

impl PolicyValidator for LocalPolicy {
    fn validate(&self, password: &str, policy: &PolicyConfig) -> ValidationResult {
        if let Some(min_length) = policy.min_length {
            let length = password_length(password);
            if length < min_length {
                return ValidationResult::reject(format!(
                    "password has {} characters, policy requires at least {}",
                    length, min_length
                ));
            }
        }

        for category in &policy.required_categories {
            if !password.chars().any(|c| category.matches(c)) {
                return ValidationResult::reject(format!("policy requires a {} character", category));
            }
        }

        let forbidden: Vec<char> = password
            .chars()
            .filter(|c| policy.forbidden_chars.contains(*c))
            .collect();
        if !forbidden.is_empty() {
            return ValidationResult::reject(format!("password contains forbidden characters {:?}", forbidden));
        }

        if let Some(min_score) = policy.min_score {
            let strength = score(password);
            if strength.value() < min_score {
                return ValidationResult::reject(format!(
                    "strength {} is below the required {:.2}",
                    strength, min_score
                ));
            }
        }

        ValidationResult::accept()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpawogen::CharacterCategory;

    #[test]
    fn test_empty_policy_accepts() {
        let result = LocalPolicy.validate("abc", &PolicyConfig::default());
        assert_eq!(result, ValidationResult::accept());
    }

    #[test]
    fn test_min_length() {
        let policy = PolicyConfig { min_length: Some(10), ..Default::default() };
        assert!(!LocalPolicy.validate("short", &policy).valid);
        assert!(LocalPolicy.validate("long enough", &policy).valid);
    }

    #[test]
    fn test_min_length_counts_like_strength_evaluation() {
        // 6 个字素簇，12 个 char
        let combined = "e\u{301}".repeat(6);
        let policy = PolicyConfig { min_length: Some(12), ..Default::default() };
        assert!(!LocalPolicy.validate(&combined, &policy).valid);
        assert!(LocalPolicy.validate(&"e\u{301}".repeat(12), &policy).valid);
    }

    #[test]
    fn test_required_category_and_forbidden_chars() {
        let policy = PolicyConfig {
            required_categories: vec![CharacterCategory::Special],
            forbidden_chars: "$'".to_string(),
            ..Default::default()
        };
        let missing = LocalPolicy.validate("NoSymbols123", &policy);
        assert!(!missing.valid);
        assert!(missing.reason.unwrap().contains("Special"));

        let forbidden = LocalPolicy.validate("Has$ymbol", &policy);
        assert!(!forbidden.valid);
        assert!(forbidden.reason.unwrap().contains('$'));

        assert!(LocalPolicy.validate("Has#ymbol", &policy).valid);
    }

    #[test]
    fn test_min_score() {
        let policy = PolicyConfig { min_score: Some(1.0), ..Default::default() };
        assert!(!LocalPolicy.validate("password", &policy).valid);
        assert!(LocalPolicy.validate("Tr0ub4dor&9Zk!", &policy).valid);
    }
}
