use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;

pub const DEFAULT_START_ID: u32 = 1;
pub const DEFAULT_END_ID: u32 = 151;
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_OUTPUT_FILE: &str = "pokemon_gen1.json";
pub const API_BASE: &str = "https://pokeapi.co/api/v2";
pub const IMAGE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const PAUSE_EVERY: u32 = 10;
pub const PAUSE_MS: u64 = 500;
// PokeAPI rejects requests without a user agent.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Export Pokémon from PokeAPI into a single JSON file.
#[derive(Debug, Clone, Parser)]
#[command(name = "pokemon-export", version)]
pub struct Config {
    /// First Pokédex number to fetch.
    #[arg(long, env = "POKEMON_START", default_value_t = DEFAULT_START_ID)]
    pub start: u32,

    /// Last Pokédex number to fetch (inclusive).
    #[arg(long, env = "POKEMON_LIMIT", default_value_t = DEFAULT_END_ID)]
    pub end: u32,

    #[arg(long, env = "POKEMON_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    #[arg(long, env = "POKEMON_OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, env = "POKEAPI_BASE", default_value = API_BASE)]
    pub api_base: String,

    #[arg(long, env = "POKEMON_IMAGE_BASE", default_value = IMAGE_BASE)]
    pub image_base: String,

    #[arg(long, env = "POKEMON_TIMEOUT_SECS", default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Pause after every id divisible by this number.
    #[arg(long, default_value_t = PAUSE_EVERY)]
    pub pause_every: u32,

    #[arg(long, default_value_t = PAUSE_MS)]
    pub pause_ms: u64,

    #[arg(long, env = "POKEMON_USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,

    /// Re-read the written file and check its record count.
    #[arg(long)]
    pub verify: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start == 0 {
            return Err(ConfigError::ZeroStart);
        }
        if self.start > self.end {
            return Err(ConfigError::EmptyRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.pause_every == 0 {
            return Err(ConfigError::ZeroPauseInterval);
        }
        Ok(())
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}
