use std::fs;
use std::path::{Path, PathBuf};

use crate::cli_args::{ConfigArgs, ConfigCommand};
use crate::modules::system::types::CliConfig;
use crate::DEFAULT_ADDR;

pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::SetAddr(set_args) => {
            config.addr = Some(set_args.addr);
            println!("Address saved");
        }
        ConfigCommand::SetPageSize(set_args) => {
            if set_args.page_size == 0 {
                anyhow::bail!("page size must be at least 1");
            }
            config.default_page_size = Some(set_args.page_size);
            println!("Default page size saved");
        }
        ConfigCommand::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }
    Ok(())
}

fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".lr").join("config.json"))
}

pub(crate) fn load_config() -> anyhow::Result<CliConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

pub(crate) fn save_config(config: &CliConfig) -> anyhow::Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

pub(crate) fn resolve_addr(arg: Option<String>, config: &CliConfig) -> String {
    arg.or_else(|| config.addr.clone())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string())
}

pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    if addr.starts_with("http://") && !allow_insecure {
        anyhow::bail!("refusing to use http:// without --insecure");
    }
    Ok(())
}
