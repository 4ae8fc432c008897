use serde::{Deserialize, Serialize};

/// One entry of the exported JSON array.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    pub pokemon_id: u32,
    pub name: String,
    pub image_url: String,
    pub types: Vec<String>,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_atk: u32,
    pub sp_def: u32,
    pub speed: u32,
}

// Subset of the `/pokemon/{id}` response that the export reads.

#[derive(Debug, Deserialize)]
pub struct ApiPokemon {
    pub name: String,
    pub types: Vec<ApiTypeSlot>,
    pub stats: Vec<ApiStat>,
}

#[derive(Debug, Deserialize)]
pub struct ApiTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_camel_case_keys_in_order() {
        let record = PokemonRecord {
            pokemon_id: 1,
            name: "Bulbasaur".to_string(),
            image_url: "https://img.test/1.png".to_string(),
            types: vec!["Grass".to_string(), "Poison".to_string()],
            hp: 45,
            attack: 49,
            defense: 49,
            sp_atk: 65,
            sp_def: 65,
            speed: 45,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"pokemonId":1,"name":"Bulbasaur","imageUrl":"https://img.test/1.png","types":["Grass","Poison"],"hp":45,"attack":49,"defense":49,"spAtk":65,"spDef":65,"speed":45}"#
        );
    }

    #[test]
    fn api_payload_ignores_unread_fields() {
        let body = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "types": [{"slot": 1, "type": {"name": "electric", "url": "x"}}],
            "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "y"}}]
        }"#;
        let api: ApiPokemon = serde_json::from_str(body).unwrap();
        assert_eq!(api.name, "pikachu");
        assert_eq!(api.types[0].kind.name, "electric");
        assert_eq!(api.stats[0].stat.name, "hp");
        assert_eq!(api.stats[0].base_stat, 35);
    }
}
