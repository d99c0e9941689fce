// Data Dragon payload decoding (versions.json, champion.json).
//
// Only decoding lives here; fetching the bytes is the caller's job.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use thiserror::Error;

use crate::champion::Champion;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to decode Data Dragon payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("champion data for locale {locale} contains no champions")]
    Empty { locale: String },

    #[error("Data Dragon versions list is empty")]
    NoVersions,
}

#[derive(Debug, Deserialize)]
struct ChampionFile {
    data: BTreeMap<String, RawChampion>,
}

#[derive(Debug, Deserialize)]
struct RawChampion {
    id: String,
    key: String,
    name: String,
    image: RawImage,
}

#[derive(Debug, Deserialize)]
struct RawImage {
    full: String,
}

/// URL of `champion.json` for one game version and locale.
pub fn champion_data_url(cdn_base: &str, version: &str, locale: &str) -> String {
    format!(
        "{}/{}/data/{}/champion.json",
        cdn_base.trim_end_matches('/'),
        version,
        locale
    )
}

/// Prefix prepended to `image.full` to build a portrait URL.
pub fn image_base(cdn_base: &str, version: &str) -> String {
    format!("{}/{}/img/champion/", cdn_base.trim_end_matches('/'), version)
}

/// The newest version from `versions.json` (the list is newest first).
pub fn latest_version(versions_json: &str) -> Result<String, RosterError> {
    let versions: Vec<String> = serde_json::from_str(versions_json)?;
    versions.into_iter().next().ok_or(RosterError::NoVersions)
}

/// Decode a localized `champion.json` into champions.
///
/// `canonical_json`, when given, is the same file in the romanized locale and
/// supplies `name`. Champions missing from it (or every champion, when it is
/// absent) use the localized name for both fields. Without an `image_base`
/// the portrait URL is left empty.
pub fn decode_champions(
    localized_json: &str,
    canonical_json: Option<&str>,
    image_base: Option<&str>,
    locale: &str,
) -> Result<Vec<Champion>, RosterError> {
    let localized: ChampionFile = serde_json::from_str(localized_json)?;
    if localized.data.is_empty() {
        return Err(RosterError::Empty {
            locale: locale.to_string(),
        });
    }

    let canonical_names: HashMap<String, String> = match canonical_json {
        Some(text) => {
            let file: ChampionFile = serde_json::from_str(text)?;
            file.data
                .into_values()
                .map(|raw| (raw.id, raw.name))
                .collect()
        }
        None => HashMap::new(),
    };

    let champions = localized
        .data
        .into_values()
        .map(|raw| {
            let name = canonical_names
                .get(&raw.id)
                .cloned()
                .unwrap_or_else(|| raw.name.clone());
            Champion {
                image: image_base
                    .map(|base| format!("{}{}", base, raw.image.full))
                    .unwrap_or_default(),
                id: raw.id,
                key: raw.key,
                name,
                name_ko: raw.name,
            }
        })
        .collect();

    Ok(champions)
}
