use std::collections::HashMap;
use std::time::Duration;

use crate::config::Config;
use crate::error::FetchError;
use crate::models::{ApiPokemon, PokemonRecord};
use crate::utils::{capitalize, display_name};

/// Something that can produce the record for one Pokédex number.
pub trait RecordSource {
    #[allow(async_fn_in_trait)]
    async fn fetch(&self, id: u32) -> Result<PokemonRecord, FetchError>;
}

/// PokeAPI-backed [`RecordSource`].
pub struct PokeApiClient {
    client: reqwest::Client,
    api_base: String,
    image_base: String,
}

impl PokeApiClient {
    pub fn new(
        api_base: &str,
        image_base: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            image_base: image_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, reqwest::Error> {
        Self::new(&cfg.api_base, &cfg.image_base, cfg.timeout(), &cfg.user_agent)
    }

    pub fn pokemon_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.api_base, id)
    }
}

impl RecordSource for PokeApiClient {
    async fn fetch(&self, id: u32) -> Result<PokemonRecord, FetchError> {
        let url = self.pokemon_url(id);
        tracing::debug!("GET {}", url);
        let res = self.client.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }
        let body = res.text().await?;
        let api: ApiPokemon = serde_json::from_str(&body)?;
        normalize(id, api, &self.image_base)
    }
}

pub fn image_url(image_base: &str, id: u32) -> String {
    format!("{}/{}.png", image_base.trim_end_matches('/'), id)
}

/// Map an API payload onto the exported record for `id`.
pub fn normalize(id: u32, api: ApiPokemon, image_base: &str) -> Result<PokemonRecord, FetchError> {
    let stats: HashMap<&str, u32> = api
        .stats
        .iter()
        .map(|s| (s.stat.name.as_str(), s.base_stat))
        .collect();
    let stat = |name: &'static str| stats.get(name).copied().ok_or(FetchError::MissingStat(name));

    Ok(PokemonRecord {
        pokemon_id: id,
        name: display_name(&api.name),
        image_url: image_url(image_base, id),
        types: api.types.iter().map(|t| capitalize(&t.kind.name)).collect(),
        hp: stat("hp")?,
        attack: stat("attack")?,
        defense: stat("defense")?,
        sp_atk: stat("special-attack")?,
        sp_def: stat("special-defense")?,
        speed: stat("speed")?,
    })
}
