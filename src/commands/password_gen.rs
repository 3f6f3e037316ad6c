use rpawogen::history::HistoryEntry;
use rpawogen::passgen::{generate, Generation, GenerationConfig};
use rpawogen::policy::{generate_with_policy, PolicyConfig};
use rpawogen::randsource::SystemRandom;
use rpawogen::strength::score;

use crate::configtool::ConfigFile;
use crate::enforcer::LocalPolicy;
use crate::GenArgs;

// 显式开启优先，其次显式关闭，否则沿用配置
fn toggle(default: bool, on: bool, off: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

/// 命令行参数覆盖配置文件中的默认值
pub fn resolve_options(defaults: &GenerationConfig, args: &GenArgs) -> GenerationConfig {
    GenerationConfig {
        length: args.length.unwrap_or(defaults.length),
        uppercase: toggle(defaults.uppercase, args.uppercase, args.no_uppercase),
        lowercase: toggle(defaults.lowercase, args.lowercase, args.no_lowercase),
        digits: toggle(defaults.digits, args.numbers, args.no_numbers),
        specials: toggle(defaults.specials, args.special, args.no_special),
        avoid_ambiguous: defaults.avoid_ambiguous || args.avoid_confusion,
        url_safe: defaults.url_safe || args.url_safe,
    }
}

/// 需要校验策略时返回策略，要求校验但未配置策略时报错
pub fn resolve_policy(config: &ConfigFile, enforce_flag: bool) -> Result<Option<PolicyConfig>, String> {
    if !(enforce_flag || config.enforce_policy) {
        return Ok(None);
    }
    match &config.policy {
        Some(policy) => Ok(Some(policy.clone())),
        None => Err("Policy enforcement requested but no policy is configured, add a \"policy\" section to the config file".to_string()),
    }
}

pub fn generate_random(args: &GenArgs) -> Result<(), String> {
    let config = ConfigFile::load().map_err(|e| format!("Failed to load config: {:#}", e))?;
    let options = resolve_options(&config.defaults, args);
    log::debug!("Effective generation options: {:?}", options);

    let mut rng = SystemRandom::detect()
        .map_err(|e| format!("Failed to initialize random source: {}", e))?;
    log::debug!("Random source: {}", rng.source_name());

    let policy = resolve_policy(&config, args.enforce_policy)?;
    if let Some(policy) = &policy {
        log::debug!("Enforcing policy '{}'", policy.name);
    }

    let mut entries = Vec::with_capacity(args.count);
    let mut warned = false;
    for _ in 0..args.count {
        let result: Result<Generation, _> = match &policy {
            Some(policy) => generate_with_policy(&options, &mut rng, &LocalPolicy, policy),
            None => generate(&options, &mut rng),
        };
        let generation = result.map_err(|e| {
            log::warn!("Generation failed: {}", e);
            format!("Failed to generate password: {}", e)
        })?;

        if !warned {
            for warning in &generation.warnings {
                log::warn!("{}", warning);
                eprintln!("Warning: {}", warning);
            }
            warned = true;
        }

        if args.json {
            entries.push(HistoryEntry::record(&generation.password));
        } else {
            let password = generation.password.as_str();
            println!("Generated password: {}", password);
            println!("Password strength: {}", score(password));
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| format!("Failed to serialize history entries: {}", e))?;
        println!("{}", json);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_resolve_options_flags_override_defaults() {
        let args = GenArgs::parse_from(["gen", "-l", "20", "--no-special", "-c"]);
        let defaults = GenerationConfig::default();
        let options = resolve_options(&defaults, &args);
        assert_eq!(options.length, 20);
        assert!(!options.specials);
        assert!(options.avoid_ambiguous);
        assert!(options.uppercase && options.lowercase && options.digits);
    }

    #[test]
    fn test_resolve_options_keeps_config_defaults() {
        let args = GenArgs::parse_from(["gen"]);
        let defaults = GenerationConfig { length: 40, digits: false, url_safe: true, ..Default::default() };
        let options = resolve_options(&defaults, &args);
        assert_eq!(options.length, 40);
        assert!(!options.digits);
        assert!(options.url_safe);
    }

    #[test]
    fn test_resolve_options_flags_reenable_categories() {
        let args = GenArgs::parse_from(["gen", "--uppercase", "--special"]);
        let defaults = GenerationConfig { uppercase: false, specials: false, ..Default::default() };
        let options = resolve_options(&defaults, &args);
        assert!(options.uppercase);
        assert!(options.specials);
    }

    #[test]
    fn test_paired_category_flags_conflict() {
        assert!(GenArgs::try_parse_from(["gen", "--uppercase", "--no-uppercase"]).is_err());
    }

    #[test]
    fn test_resolve_policy_requires_configured_policy() {
        let config = ConfigFile::default();
        assert_eq!(resolve_policy(&config, false), Ok(None));
        let err = resolve_policy(&config, true).unwrap_err();
        assert!(err.contains("no policy is configured"));

        let config = ConfigFile { enforce_policy: true, ..Default::default() };
        assert!(resolve_policy(&config, false).is_err());
    }

    #[test]
    fn test_resolve_policy_returns_configured_policy() {
        let policy = PolicyConfig { name: "corp".to_string(), min_length: Some(20), ..Default::default() };
        let config = ConfigFile { policy: Some(policy.clone()), ..Default::default() };
        assert_eq!(resolve_policy(&config, false), Ok(None));
        assert_eq!(resolve_policy(&config, true), Ok(Some(policy)));
    }
}
