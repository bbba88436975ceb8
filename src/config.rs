use crate::error::DragonError;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Platform region of the game servers. Only used to pick the realm for the
/// one-time version/locale bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Brasil,
    EuropeNorthEast,
    EuropeWest,
    Japan,
    Korea,
    LatinAmericaNorth,
    LatinAmericaSouth,
    NorthAmerica,
    Oceania,
    Turkey,
    Russia,
    Pbe,
}

impl Region {
    pub fn id(&self) -> &'static str {
        match self {
            Region::Brasil => "br1",
            Region::EuropeNorthEast => "eun1",
            Region::EuropeWest => "euw1",
            Region::Japan => "jp1",
            Region::Korea => "kr",
            Region::LatinAmericaNorth => "la1",
            Region::LatinAmericaSouth => "la2",
            Region::NorthAmerica => "na1",
            Region::Oceania => "oc1",
            Region::Turkey => "tr1",
            Region::Russia => "ru",
            Region::Pbe => "pbe1",
        }
    }

    /// Realm code used by the `/realms/<code>.json` metadata endpoint.
    pub fn realm(&self) -> &'static str {
        match self {
            Region::Brasil => "br",
            Region::EuropeNorthEast => "eun",
            Region::EuropeWest => "euw",
            Region::Japan => "jp",
            Region::Korea => "kr",
            Region::LatinAmericaNorth => "lan",
            Region::LatinAmericaSouth => "las",
            Region::NorthAmerica => "na",
            Region::Oceania => "oce",
            Region::Turkey => "tr",
            Region::Russia => "ru",
            Region::Pbe => "pbe",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Region {
    type Err = DragonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "br1" => Ok(Region::Brasil),
            "eun1" => Ok(Region::EuropeNorthEast),
            "euw1" => Ok(Region::EuropeWest),
            "jp1" => Ok(Region::Japan),
            "kr" => Ok(Region::Korea),
            "la1" => Ok(Region::LatinAmericaNorth),
            "la2" => Ok(Region::LatinAmericaSouth),
            "na1" => Ok(Region::NorthAmerica),
            "oc1" => Ok(Region::Oceania),
            "tr1" => Ok(Region::Turkey),
            "ru" => Ok(Region::Russia),
            "pbe1" => Ok(Region::Pbe),
            other => Err(DragonError::Config(format!("unknown region '{}'", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub region: Region,
    pub requests_per_second: u32,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            region: Region::NorthAmerica,
            requests_per_second: 20,
            timeout: Duration::from_secs(10),
            user_agent: format!("league_dragon/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DragonError> {
        dotenvy::dotenv().ok();

        let mut config = Config::default();

        if let Ok(region) = env::var("DDRAGON_REGION") {
            config.region = region.parse()?;
        }

        if let Ok(rate) = env::var("DDRAGON_REQUESTS_PER_SECOND") {
            config.requests_per_second = rate
                .parse::<u32>()
                .ok()
                .filter(|r| *r > 0)
                .ok_or_else(|| {
                    DragonError::Config(format!(
                        "DDRAGON_REQUESTS_PER_SECOND must be a positive integer, got '{}'",
                        rate
                    ))
                })?;
        }

        if let Ok(secs) = env::var("DDRAGON_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|_| {
                DragonError::Config(format!(
                    "DDRAGON_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    secs
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(agent) = env::var("DDRAGON_USER_AGENT") {
            config.user_agent = agent;
        }

        Ok(config)
    }
}
