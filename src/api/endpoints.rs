// Address templates and request construction for the Data Dragon service.

use super::transport::Request;
use super::version::{self, VersionState};
use crate::error::{DragonError, Result};

pub const DATA_DRAGON_HOST: &str = "ddragon.leagueoflegends.com";

pub const CHAMPIONS_PATH: &str = "/champion.json";
pub const ITEMS_PATH: &str = "/item.json";
pub const PROFILE_ICONS_PATH: &str = "/profileicon.json";
pub const MASTERIES_PATH: &str = "/mastery.json";
pub const RUNES_PATH: &str = "/rune.json";
pub const SUMMONER_SPELLS_PATH: &str = "/summoner.json";

pub fn champion_detail_path(name: &str) -> String {
    format!("/champion/{}.json", name)
}

pub fn realm_path(realm: &str) -> String {
    format!("/realms/{}.json", realm)
}

/// Base-address family a request is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFamily {
    /// Version and locale agnostic metadata, e.g. realms.
    Root,
    /// `cdn/{version}/data/{locale}`
    Data,
    /// `cdn/{version}/img`
    Image,
}

impl ResourceFamily {
    pub fn base_url(&self, version: &str, language: &str) -> String {
        match self {
            ResourceFamily::Root => format!("https://{}", DATA_DRAGON_HOST),
            ResourceFamily::Data => {
                format!("https://{}/cdn/{}/data/{}", DATA_DRAGON_HOST, version, language)
            }
            ResourceFamily::Image => format!("https://{}/cdn/{}/img", DATA_DRAGON_HOST, version),
        }
    }
}

/// Builds a GET request for `path` under `family`, addressing the version the
/// resolver picks for that path.
pub fn build_request(family: ResourceFamily, state: &VersionState, path: &str) -> Result<Request> {
    let version = version::resolve(&state.version, path);
    let url = format!("{}{}", family.base_url(version, &state.language), path);

    let parsed = ureq::get(&url)
        .request_url()
        .map_err(|e| DragonError::MalformedRequest(format!("{}: {}", url, e)))?;

    Ok(Request {
        method: "GET",
        url: parsed.as_url().to_string(),
    })
}
