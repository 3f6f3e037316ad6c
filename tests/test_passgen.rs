use rpawogen::charpool::{build_pool, CharacterCategory, AMBIGUOUS_CHARS};
use rpawogen::error::GenError;
use rpawogen::passgen::*;
use rpawogen::randsource::{OsRandom, RandomSource, SeededRandom};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // 按顺序返回固定数值的随机源
    struct FixedSequence {
        values: Vec<u32>,
        pos: usize,
    }

    impl FixedSequence {
        fn new(values: &[u32]) -> Self {
            Self { values: values.to_vec(), pos: 0 }
        }
    }

    impl RandomSource for FixedSequence {
        fn next_u32(&mut self) -> Result<u32, GenError> {
            let value = self.values.get(self.pos).copied()
                .ok_or_else(|| GenError::RandomUnavailable("sequence exhausted".to_string()))?;
            self.pos += 1;
            Ok(value)
        }
    }

    fn config(length: usize, uppercase: bool, lowercase: bool, digits: bool, specials: bool) -> GenerationConfig {
        GenerationConfig {
            length,
            uppercase,
            lowercase,
            digits,
            specials,
            avoid_ambiguous: false,
            url_safe: false,
        }
    }

    fn assert_composition(password: &str, options: &GenerationConfig) {
        for category in CharacterCategory::ALL {
            let present = password.chars().any(|c| category.matches(c));
            assert_eq!(present, category.is_enabled(options), "{} in {:?}", category, password);
        }
    }

    #[test]
    fn test_generate_default_options() {
        let options = GenerationConfig::default();
        let generation = generate(&options, &mut OsRandom).unwrap();
        let password = generation.password.as_str();
        assert_eq!(password.chars().count(), 16);
        assert_composition(password, &options);
        assert!(generation.warnings.is_empty());
    }

    #[test]
    fn test_generate_golden_output() {
        // 大写 26 + 数字 10：抽取 C、7，补 Z 0 9 D，再洗牌
        let options = config(6, true, false, true, false);
        let mut rng = FixedSequence::new(&[2, 7, 25, 26, 35, 3, 0, 1, 2, 0, 1]);
        let generation = generate(&options, &mut rng).unwrap();
        assert_eq!(generation.password.as_str(), "09DZ7C");
        assert_eq!(rng.pos, 11);
    }

    #[test]
    fn test_generate_golden_output_avoid_ambiguous() {
        // 过滤后小写第 11 位是 m（l 已被移除），数字从 2 开始
        let options = GenerationConfig { avoid_ambiguous: true, ..config(6, false, true, true, false) };
        let mut rng = FixedSequence::new(&[11, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let generation = generate(&options, &mut rng).unwrap();
        assert_eq!(generation.password.as_str(), "2aaaam");
    }

    #[test]
    fn test_generate_is_reproducible_with_same_stream() {
        let options = GenerationConfig::default();
        let a = generate(&options, &mut SeededRandom::from_seed(7)).unwrap();
        let b = generate(&options, &mut SeededRandom::from_seed(7)).unwrap();
        assert_eq!(a.password.as_str(), b.password.as_str());
    }

    #[test]
    fn test_generate_reports_degraded_randomness() {
        let generation = generate(&GenerationConfig::default(), &mut SeededRandom::from_seed(1)).unwrap();
        assert!(generation.is_degraded());
        assert_eq!(generation.warnings, vec![GenerationWarning::DegradedRandomness]);
    }

    #[test]
    fn test_generate_exhausted_source_fails() {
        let mut rng = FixedSequence::new(&[]);
        let result = generate(&GenerationConfig::default(), &mut rng);
        assert!(matches!(result, Err(GenError::RandomUnavailable(_))));
    }

    #[test]
    fn test_generate_no_categories_is_invalid() {
        let options = config(16, false, false, false, false);
        let result = generate(&options, &mut OsRandom);
        assert!(matches!(result, Err(GenError::InvalidConfig(_))));
    }

    #[test]
    fn test_generate_length_bounds() {
        for length in [0, MIN_LENGTH - 1, MAX_LENGTH + 1] {
            let options = GenerationConfig { length, ..Default::default() };
            assert!(matches!(generate(&options, &mut OsRandom), Err(GenError::InvalidConfig(_))));
        }
        for length in [MIN_LENGTH, MAX_LENGTH] {
            let options = GenerationConfig { length, ..Default::default() };
            let generation = generate(&options, &mut OsRandom).unwrap();
            assert_eq!(generation.password.len(), length);
        }
    }

    #[test]
    fn test_compose_clamps_short_length_to_category_count() {
        let pool = build_pool(&GenerationConfig::default()).unwrap();
        for length in [0, 1, 3] {
            let password = compose(&pool, length, &mut OsRandom).unwrap();
            assert_eq!(password.len(), 4);
            assert_composition(password.as_str(), &GenerationConfig::default());
        }
    }

    #[test]
    fn test_generate_url_safe_specials() {
        let options = GenerationConfig { url_safe: true, ..config(32, false, false, false, true) };
        let generation = generate(&options, &mut OsRandom).unwrap();
        assert!(generation.password.as_str().chars().all(|c| "-._~".contains(c)));
    }

    #[test]
    fn test_generated_password_debug_is_redacted() {
        let generation = generate(&GenerationConfig::default(), &mut OsRandom).unwrap();
        let debug = format!("{:?}", generation.password);
        assert!(!debug.contains(generation.password.as_str()));
        assert!(debug.contains("len: 16"));
    }

    #[test]
    fn test_guaranteed_characters_have_no_positional_bias() {
        // 数字类别的保底字符先于补位字符放入，洗牌后各位置出现数字的频率应一致
        let options = config(8, false, true, true, false);
        let trials = 20_000;
        let mut counts = [0usize; 8];
        let mut rng = OsRandom;
        for _ in 0..trials {
            let generation = generate(&options, &mut rng).unwrap();
            for (pos, c) in generation.password.as_str().chars().enumerate() {
                if c.is_ascii_digit() {
                    counts[pos] += 1;
                }
            }
        }
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        for (pos, count) in counts.iter().enumerate() {
            let deviation = (*count as f64 - mean).abs() / mean;
            assert!(deviation < 0.1, "position {} count {} mean {:.1}", pos, count, mean);
        }
    }

    #[test]
    fn test_generate_in_parallel_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    let options = GenerationConfig::default();
                    (0..50)
                        .map(|_| generate(&options, &mut OsRandom).unwrap().password.into_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            for password in handle.join().unwrap() {
                assert_eq!(password.chars().count(), 16);
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_generated_password_honours_config(
            length in MIN_LENGTH..=MAX_LENGTH,
            uppercase in any::<bool>(),
            lowercase in any::<bool>(),
            digits in any::<bool>(),
            specials in any::<bool>(),
            avoid_ambiguous in any::<bool>(),
        ) {
            prop_assume!(uppercase || lowercase || digits || specials);
            let options = GenerationConfig { avoid_ambiguous, ..config(length, uppercase, lowercase, digits, specials) };
            let pool = build_pool(&options).unwrap();

            let generation = generate(&options, &mut OsRandom).unwrap();
            let password = generation.password.as_str();

            prop_assert_eq!(password.chars().count(), length);
            prop_assert!(password.chars().all(|c| pool.contains(c)));
            if avoid_ambiguous {
                prop_assert!(!password.chars().any(|c| AMBIGUOUS_CHARS.contains(&c)));
            }
            for set in pool.sets() {
                prop_assert!(password.chars().any(|c| set.chars().contains(&c)));
            }
        }
    }
}
