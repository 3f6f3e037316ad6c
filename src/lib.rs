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
// Password generation and strength evaluation library

pub mod charpool;
pub mod error;
pub mod history;
pub mod passgen;
pub mod policy;
pub mod randsource;
pub mod strength;

pub use charpool::{build_pool, CharacterCategory, CharacterPool};
pub use error::GenError;
pub use passgen::{generate, generate_password, Generation, GenerationConfig, GeneratedPassword};
pub use policy::{generate_with_policy, validate_against_policy, PolicyConfig, PolicyValidator, ValidationResult};
pub use randsource::{OsRandom, RandomSource, SeededRandom, SystemRandom};
pub use strength::{score, StrengthLevel, StrengthScore};
