use log::debug;
use std::path::{Path, PathBuf};

use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::libs::report::code_table::{MAX_TABLE_BITS, MIN_TABLE_BITS};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct Config {
    display: DisplaySettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct DisplaySettings {
    show_misinterpretation: bool,
    pause_after_result: bool,
    table_bits: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: DisplaySettings {
                show_misinterpretation: true,
                pause_after_result: true,
                table_bits: 4,
            }
        }
    }
}

const CONFIG_FILE_NAME: &str = "graycode.toml";

pub struct ConfigurationStore {
    config_file_path: Box<Path>,
    config: Config,
}

impl ConfigurationStore {
    pub fn new(config_path: Box<Path>) -> Result<ConfigurationStore, String> {
        let mut config_file_path = PathBuf::new();
        config_file_path.push(config_path);
        config_file_path.push(CONFIG_FILE_NAME);
        debug!("Config file is {:?}", config_file_path);
        let config = if config_file_path.exists() {
            read_configuration(&config_file_path)?
        } else {
            debug!("Creating config file {:?}", config_file_path);
            let config = Config::default();
            save_configuration(&config_file_path, &config)?;
            config
        };
        Ok(ConfigurationStore {
            config_file_path: config_file_path.into_boxed_path(),
            config,
        })
    }

    pub fn get_config_file_path(&self) -> &Path {
        &self.config_file_path
    }

    fn save(&self) -> Result<(), String> {
        save_configuration(&self.config_file_path, &self.config)
    }

    pub fn set_show_misinterpretation(&mut self, show: bool) -> Result<(), String> {
        self.config.display.show_misinterpretation = show;
        self.save()
    }

    pub fn get_show_misinterpretation(&self) -> bool {
        self.config.display.show_misinterpretation
    }

    pub fn set_pause_after_result(&mut self, pause: bool) -> Result<(), String> {
        self.config.display.pause_after_result = pause;
        self.save()
    }

    pub fn get_pause_after_result(&self) -> bool {
        self.config.display.pause_after_result
    }

    pub fn set_table_bits(&mut self, bits: u8) -> Result<(), String> {
        if bits < MIN_TABLE_BITS || bits > MAX_TABLE_BITS {
            return Err(format!("Table width of {} bits is out of the range [{}..{}]", bits, MIN_TABLE_BITS, MAX_TABLE_BITS));
        }
        self.config.display.table_bits = bits;
        self.save()
    }

    pub fn get_table_bits(&self) -> u8 {
        self.config.display.table_bits
    }
}

fn save_configuration(config_file_path: &Path, config: &Config) -> Result<(), String> {
    let toml = toml::to_string(config)
        .map_err(|err| format!("Could not serialise configuration: {}", err))?;
    std::fs::write(config_file_path, toml)
        .map_err(|err| format!("Could not write config file {:?}: {}", config_file_path, err))
}

fn read_configuration(config_file_path: &Path) -> Result<Config, String> {
    let toml = std::fs::read_to_string(config_file_path)
        .map_err(|err| format!("Could not read config file {:?}: {}", config_file_path, err))?;
    toml::from_str(&toml)
        .map_err(|err| format!("Could not parse config file {:?}: {}", config_file_path, err))
}

#[cfg(test)]
#[path = "./config_file_spec.rs"]
mod config_file_spec;
