//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) || |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-08
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use anyhow::{Context, Result};
use serde::{Serialize, Deserialize};
use serde_json;
use std::{fs, path::{Path, PathBuf}};
use dirs::config_dir;

use rpawogen::{GenerationConfig, PolicyConfig};

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub defaults: GenerationConfig,
    pub enforce_policy: bool,
    pub policy: Option<PolicyConfig>,
}

impl ConfigFile {
    /// 读取默认位置的配置，文件不存在时使用内置默认值
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }
        let config_file = fs::File::create(path)
            .with_context(|| format!("Failed to create config file {}", path.display()))?;
        serde_json::to_writer_pretty(config_file, self)
            .context("Failed to write config file")?;
        Ok(())
    }
}

pub fn get_config_dir() -> Result<PathBuf> {
    config_dir()
        .map(|path| path.join("rpawogen"))
        .context("Could not determine configuration directory")
}

pub fn config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}
