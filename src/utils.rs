//! Helpers for display names and reading/writing the exported file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::models::PokemonRecord;

/// Names that simple capitalization gets wrong, keyed by their capitalized
/// form. Only covers the first generation.
const NAME_OVERRIDES: &[(&str, &str)] = &[
    ("Nidoran-f", "Nidoran F"),
    ("Nidoran-m", "Nidoran M"),
    ("Mr-mime", "Mr. Mime"),
    ("Farfetchd", "Farfetch'd"),
];

/// Upper-case the first character and lower-case the rest.
///
/// Hyphens are left alone: `nidoran-f` -> `Nidoran-f`.
pub fn capitalize(s: &str) -> String {
    let mut chs = s.chars();
    match chs.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chs.as_str().to_lowercase(),
    }
}

/// Format an API `name` into the name shown to players.
///
/// Examples: `bulbasaur` -> `Bulbasaur`, `mr-mime` -> `Mr. Mime`.
pub fn display_name(raw: &str) -> String {
    let name = capitalize(raw);
    NAME_OVERRIDES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| to.to_string())
        .unwrap_or(name)
}

pub fn load_records(path: &Path) -> Result<Vec<PokemonRecord>, ExportError> {
    let data = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    let v: Vec<PokemonRecord> = serde_json::from_str(&data)?;
    Ok(v)
}

/// Write `records` as an indented JSON array, replacing whatever is at `path`.
///
/// The parent directory is created if needed. Data goes to a sibling `.tmp`
/// file first and is renamed into place, so `path` is never left half-written.
pub fn write_records(path: &Path, records: &[PokemonRecord]) -> Result<(), ExportError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;
    }
    let json = serde_json::to_string_pretty(records)?;
    let tmp = tmp_path(path);
    let result = fs::write(&tmp, json)
        .map_err(|e| ExportError::io(&tmp, e))
        .and_then(|()| fs::rename(&tmp, path).map_err(|e| ExportError::io(path, e)));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str) -> PokemonRecord {
        PokemonRecord {
            pokemon_id: id,
            name: name.to_string(),
            image_url: format!("https://img.test/{}.png", id),
            types: vec!["Normal".to_string()],
            hp: 1,
            attack: 2,
            defense: 3,
            sp_atk: 4,
            sp_def: 5,
            speed: 6,
        }
    }

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize("POISON"), "Poison");
        assert_eq!(capitalize("ho-oh"), "Ho-oh");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn display_name_applies_overrides() {
        assert_eq!(display_name("bulbasaur"), "Bulbasaur");
        assert_eq!(display_name("nidoran-f"), "Nidoran F");
        assert_eq!(display_name("nidoran-m"), "Nidoran M");
        assert_eq!(display_name("mr-mime"), "Mr. Mime");
        assert_eq!(display_name("farfetchd"), "Farfetch'd");
    }

    #[test]
    fn display_name_leaves_unlisted_hyphens() {
        assert_eq!(display_name("porygon-z"), "Porygon-z");
    }

    #[test]
    fn write_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/assets/pokemon.json");
        let records = vec![record(1, "Bulbasaur"), record(3, "Venusaur")];

        write_records(&path, &records).unwrap();

        assert_eq!(load_records(&path).unwrap(), records);
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn write_is_indented_and_keeps_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_records(&path, &[record(122, "Mr. Mimé")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"pokemonId\": 122,"));
        assert!(text.contains("\"name\": \"Mr. Mimé\""));
    }

    #[test]
    fn write_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "not json at all, and long enough to notice").unwrap();

        write_records(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn write_fails_when_directory_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = write_records(&blocker.join("out.json"), &[]).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn failed_write_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        // a non-empty directory at the target makes the rename fail
        let path = dir.path().join("out.json");
        fs::create_dir_all(path.join("occupied")).unwrap();

        let err = write_records(&path, &[record(1, "Bulbasaur")]).unwrap_err();

        assert!(matches!(err, ExportError::Io { .. }));
        assert!(!tmp_path(&path).exists());
        assert!(path.join("occupied").is_dir());
    }
}
