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
// Error types

use thiserror::Error;

/// 生成与校验过程中的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// 配置无效：没有启用任何字符类别、过滤后为空或长度越界
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// 没有可用的随机源
    #[error("Random source unavailable: {0}")]
    RandomUnavailable(String),

    /// 生成的密码被外部策略拒绝
    #[error("Password rejected by policy: {0}")]
    PolicyViolation(String),
}

pub type Result<T> = std::result::Result<T, GenError>;
