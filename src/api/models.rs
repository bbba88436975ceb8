use serde::Deserialize;
use std::collections::HashMap;

/// Generic wrapper returned by every dataset endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub version: String,
    pub data: T,
}

// Realm metadata response
#[derive(Debug, Deserialize)]
pub struct RealmDto {
    #[serde(rename = "v")]
    pub version: String,
    #[serde(rename = "l")]
    pub language: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ImageRef {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ChampionInfo {
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub difficulty: i32,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Skin {
    pub id: String,
    pub num: i32,
    pub name: String,
    pub chromas: bool,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ChampionSpell {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub maxrank: i32,
    pub cooldown: Vec<f64>,
    pub image: ImageRef,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Passive {
    pub name: String,
    pub description: String,
    pub image: ImageRef,
}

/// A champion record. The listing endpoint fills the base fields; the
/// per-champion endpoint additionally fills lore, tips, skins, spells and
/// passive.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Champion {
    pub version: String,
    pub id: String,
    pub key: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub info: ChampionInfo,
    pub image: ImageRef,
    pub tags: Vec<String>,
    pub partype: String,
    pub stats: HashMap<String, f64>,

    pub lore: String,
    pub allytips: Vec<String>,
    pub enemytips: Vec<String>,
    pub skins: Vec<Skin>,
    pub spells: Vec<ChampionSpell>,
    pub passive: Option<Passive>,
}

impl Champion {
    pub fn is_detailed(&self) -> bool {
        !self.lore.is_empty()
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Gold {
    pub base: i32,
    pub total: i32,
    pub sell: i32,
    pub purchasable: bool,
}

/// Item record; also the shape of the legacy rune dataset. The id is the key
/// the record was published under.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub plaintext: String,
    pub into: Vec<String>,
    pub from: Vec<String>,
    pub image: ImageRef,
    pub gold: Gold,
    pub tags: Vec<String>,
    pub stats: HashMap<String, f64>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProfileIcon {
    pub id: i64,
    pub image: ImageRef,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Mastery {
    pub id: i64,
    pub name: String,
    pub description: Vec<String>,
    pub image: ImageRef,
    pub ranks: i32,
    pub prereq: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SummonerSpell {
    pub id: String,
    pub key: String,
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub maxrank: i32,
    pub cooldown: Vec<f64>,
    pub summoner_level: i32,
    pub modes: Vec<String>,
    pub image: ImageRef,
}
