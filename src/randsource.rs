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
// Random sources

use std::time::{SystemTime, UNIX_EPOCH};
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{GenError, Result};

// u32 取值空间大小
const U32_RANGE: u64 = 1 << 32;

/// 随机数来源
///
/// 实现者只需提供 `next_u32`，`next_below` 在其上做拒绝采样，
/// 因此任意上界都不会产生取模偏差。
pub trait RandomSource {
    fn next_u32(&mut self) -> Result<u32>;

    /// 返回 `[0, bound)` 内均匀分布的整数
    fn next_below(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(GenError::InvalidConfig("Random bound must be positive".to_string()));
        }
        let span = u64::try_from(bound)
            .ok()
            .filter(|b| *b <= U32_RANGE)
            .ok_or_else(|| GenError::InvalidConfig(format!("Random bound {} exceeds 2^32", bound)))?;

        // 落在 zone 之外的值会重新抽取
        let zone = U32_RANGE - U32_RANGE % span;
        loop {
            let value = u64::from(self.next_u32()?);
            if value < zone {
                return Ok((value % span) as usize);
            }
        }
    }

    /// 伪随机来源返回 true，调用方需要向用户提示
    fn is_degraded(&self) -> bool {
        false
    }
}

/// 操作系统提供的密码学安全随机源
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_u32(&mut self) -> Result<u32> {
        let mut rng = OsRng;
        let mut buf = [0u8; 4];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| GenError::RandomUnavailable(format!("OS entropy source failed: {}", e)))?;
        Ok(u32::from_le_bytes(buf))
    }
}

/// 以时钟和进程号为种子的 ChaCha20 伪随机源，仅在系统随机源不可用时使用
pub struct SeededRandom {
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha20Rng::seed_from_u64(seed) }
    }

    pub fn from_clock() -> Result<Self> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| GenError::RandomUnavailable(format!("System clock unusable for seeding: {}", e)))?;
        let seed = (elapsed.as_nanos() as u64) ^ (u64::from(std::process::id()) << 32);
        Ok(Self::from_seed(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_u32(&mut self) -> Result<u32> {
        Ok(self.rng.next_u32())
    }

    fn is_degraded(&self) -> bool {
        true
    }
}

/// 运行时探测得到的随机源
pub enum SystemRandom {
    Os(OsRandom),
    Fallback(SeededRandom),
}

impl SystemRandom {
    /// 优先使用系统随机源，探测失败时退回到伪随机源
    pub fn detect() -> Result<Self> {
        let mut rng = OsRng;
        let mut probe = [0u8; 8];
        match rng.try_fill_bytes(&mut probe) {
            Ok(()) => Ok(SystemRandom::Os(OsRandom)),
            Err(_) => SeededRandom::from_clock().map(SystemRandom::Fallback),
        }
    }

    pub fn source_name(&self) -> &'static str {
        match self {
            SystemRandom::Os(_) => "os",
            SystemRandom::Fallback(_) => "chacha20 (clock seeded)",
        }
    }
}

impl RandomSource for SystemRandom {
    fn next_u32(&mut self) -> Result<u32> {
        match self {
            SystemRandom::Os(rng) => rng.next_u32(),
            SystemRandom::Fallback(rng) => rng.next_u32(),
        }
    }

    fn is_degraded(&self) -> bool {
        match self {
            SystemRandom::Os(rng) => rng.is_degraded(),
            SystemRandom::Fallback(rng) => rng.is_degraded(),
        }
    }
}
