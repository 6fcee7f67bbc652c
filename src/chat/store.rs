use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use responder::ResponderConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::Config;

const CONFIG_FILE: &str = "config.yaml";
const RESPONSES_FILE: &str = "responses.yaml";

pub fn data_dir() -> PathBuf {
    let project_dirs = directories::ProjectDirs::from("com", "portfolio_chat", "portfolio_chat")
        .expect("Cannot retrieve project dirs");
    project_dirs.data_dir().to_owned()
}

pub fn load_config() -> Result<Config> {
    load_config_from(&data_dir())
}

pub fn load_responses() -> Result<ResponderConfig> {
    load_responses_from(&data_dir())
}

fn load_config_from(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    info!("Config file: {}", path.to_string_lossy());
    load_or_create(&path, Config::default)
}

/// Response tables are only parsed here. Invariants are checked when the responder is built.
fn load_responses_from(dir: &Path) -> Result<ResponderConfig> {
    let path = dir.join(RESPONSES_FILE);
    info!("Responses file: {}", path.to_string_lossy());
    load_or_create(&path, ResponderConfig::default)
}

fn load_or_create<T>(path: &Path, default: impl FnOnce() -> T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    if !path.exists() {
        info!("{} does not exist, creating.", path.to_string_lossy());
        store_yaml(path, &default())?;
    }
    let file = File::open(path)?;
    serde_yaml::from_reader(file)
        .with_context(|| format!("Cannot parse {}", path.to_string_lossy()))
}

fn store_yaml<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    ensure_dir_created(path)?;
    let out_file = File::create(path)?;
    Ok(serde_yaml::to_writer(out_file, data)?)
}

fn ensure_dir_created(path: &Path) -> Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create {}", dir.to_string_lossy()))?;
    }
    Ok(())
}
