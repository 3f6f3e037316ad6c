use crate::configtool::{config_path, ConfigFile};

pub fn init_config(force: bool) -> Result<(), String> {
    let path = config_path().map_err(|e| e.to_string())?;
    if path.exists() && !force {
        return Err(format!("Config file {} already exists, use --force to overwrite", path.display()));
    }
    ConfigFile::default()
        .save_to(&path)
        .map_err(|e| format!("{:#}", e))?;
    log::info!("Wrote default config to {}", path.display());
    println!("Config written to {}", path.display());
    Ok(())
}

pub fn show_config() -> Result<(), String> {
    let path = config_path().map_err(|e| e.to_string())?;
    let config = ConfigFile::load().map_err(|e| format!("{:#}", e))?;
    let source = if path.exists() { path.display().to_string() } else { "built-in defaults".to_string() };
    println!("# {}", source);
    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    println!("{}", json);
    Ok(())
}
