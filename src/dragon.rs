use crate::api::client::DataDragonApi;
use crate::api::endpoints;
use crate::api::models::{Champion, ImageRef, Item, Mastery, ProfileIcon, SummonerSpell};
use crate::api::transport::{Doer, UreqDoer};
use crate::api::version::VersionState;
use crate::cache::LazyCache;
use crate::config::{Config, Region};
use crate::error::{DragonError, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// The kinds of reference data the service publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Champions,
    Items,
    ProfileIcons,
    Masteries,
    Runes,
    SummonerSpells,
}

impl Dataset {
    pub const ALL: [Dataset; 6] = [
        Dataset::Champions,
        Dataset::Items,
        Dataset::ProfileIcons,
        Dataset::Masteries,
        Dataset::Runes,
        Dataset::SummonerSpells,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Dataset::Champions => endpoints::CHAMPIONS_PATH,
            Dataset::Items => endpoints::ITEMS_PATH,
            Dataset::ProfileIcons => endpoints::PROFILE_ICONS_PATH,
            Dataset::Masteries => endpoints::MASTERIES_PATH,
            Dataset::Runes => endpoints::RUNES_PATH,
            Dataset::SummonerSpells => endpoints::SUMMONER_SPELLS_PATH,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Champions => "champions",
            Dataset::Items => "items",
            Dataset::ProfileIcons => "profile icons",
            Dataset::Masteries => "masteries",
            Dataset::Runes => "runes",
            Dataset::SummonerSpells => "summoner spells",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-through cache over the Data Dragon datasets.
///
/// Each dataset is fetched at most once per reset epoch, on first demand, no
/// matter how many threads ask for it concurrently. Every accessor returns a
/// fresh copy. The version and locale are fixed at construction.
pub struct DataDragon<D = UreqDoer> {
    api: DataDragonApi<D>,
    champions: LazyCache<HashMap<String, Champion>>,
    items: LazyCache<Vec<Item>>,
    profile_icons: LazyCache<Vec<ProfileIcon>>,
    masteries: LazyCache<Vec<Mastery>>,
    runes: LazyCache<Vec<Item>>,
    summoner_spells: LazyCache<Vec<SummonerSpell>>,
}

impl DataDragon<UreqDoer> {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(DataDragon::new(UreqDoer::new(config)?, config.region))
    }
}

impl<D: Doer> DataDragon<D> {
    /// Bootstraps the version/locale pair from the realm of `region`.
    pub fn new(doer: D, region: Region) -> Self {
        Self::from_api(DataDragonApi::new(doer, region))
    }

    pub fn with_version(doer: D, state: VersionState) -> Self {
        Self::from_api(DataDragonApi::with_version(doer, state))
    }

    fn from_api(api: DataDragonApi<D>) -> Self {
        info!(
            client = "data dragon",
            version = %api.state().version,
            language = %api.state().language,
            "client ready"
        );
        DataDragon {
            api,
            champions: LazyCache::new(Dataset::Champions.name()),
            items: LazyCache::new(Dataset::Items.name()),
            profile_icons: LazyCache::new(Dataset::ProfileIcons.name()),
            masteries: LazyCache::new(Dataset::Masteries.name()),
            runes: LazyCache::new(Dataset::Runes.name()),
            summoner_spells: LazyCache::new(Dataset::SummonerSpells.name()),
        }
    }

    pub fn version(&self) -> &str {
        &self.api.state().version
    }

    pub fn language(&self) -> &str {
        &self.api.state().language
    }

    /// Returns all champions, sorted by name. Entries already enriched by
    /// [`DataDragon::get_champion`] keep their detail.
    pub fn get_champions(&self) -> Result<Vec<Champion>> {
        self.champions.get_or_fill(
            |cached| {
                let listed: HashMap<String, Champion> =
                    self.api.get_into(Dataset::Champions.path())?;
                info!(client = "data dragon", dataset = "champions", count = listed.len(), "cached");
                for (id, champion) in listed {
                    // detail is a superset of the listing entry
                    if !cached.get(&id).map_or(false, Champion::is_detailed) {
                        cached.insert(id, champion);
                    }
                }
                Ok(())
            },
            |cached| {
                let mut champions: Vec<Champion> = cached.values().cloned().collect();
                champions.sort_by(|a, b| a.name.cmp(&b.name));
                champions
            },
        )
    }

    /// Returns the detailed record of the champion published under `name`
    /// (its id, e.g. `MonkeyKing`), fetching it on first request.
    pub fn get_champion(&self, name: &str) -> Result<Champion> {
        self.champions.get_or_fill_entry(
            |cached| cached.get(name).filter(|c| c.is_detailed()).cloned(),
            |cached| {
                let mut data: HashMap<String, Champion> =
                    self.api.get_into(&endpoints::champion_detail_path(name))?;
                let champion = data
                    .remove(name)
                    .ok_or_else(|| DragonError::NotFound(format!("no data for champion {}", name)))?;
                info!(client = "data dragon", champion = name, "cached champion detail");
                cached.insert(name.to_string(), champion.clone());
                Ok(champion)
            },
        )
    }

    pub fn get_items(&self) -> Result<Vec<Item>> {
        self.items.get_or_load(|| self.load_keyed_items(Dataset::Items))
    }

    /// Runes were removed upstream in 7.23.1; newer clients read that snapshot.
    pub fn get_runes(&self) -> Result<Vec<Item>> {
        self.runes.get_or_load(|| self.load_keyed_items(Dataset::Runes))
    }

    /// Masteries were removed upstream in 7.23.1; newer clients read that snapshot.
    pub fn get_masteries(&self) -> Result<Vec<Mastery>> {
        self.masteries.get_or_load(|| {
            let mut masteries = self.load_values::<Mastery>(Dataset::Masteries)?;
            masteries.sort_by_key(|m| m.id);
            Ok(masteries)
        })
    }

    pub fn get_profile_icons(&self) -> Result<Vec<ProfileIcon>> {
        self.profile_icons.get_or_load(|| {
            let mut icons = self.load_values::<ProfileIcon>(Dataset::ProfileIcons)?;
            icons.sort_by_key(|i| i.id);
            Ok(icons)
        })
    }

    pub fn get_summoner_spells(&self) -> Result<Vec<SummonerSpell>> {
        self.summoner_spells.get_or_load(|| {
            let mut spells = self.load_values::<SummonerSpell>(Dataset::SummonerSpells)?;
            spells.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(spells)
        })
    }

    /// Address of the image asset a record refers to.
    pub fn image_url(&self, image: &ImageRef) -> Result<String> {
        self.api.image_url(&format!("/{}/{}", image.group, image.full))
    }

    pub fn is_cached(&self, dataset: Dataset) -> bool {
        match dataset {
            Dataset::Champions => self.champions.is_populated(),
            Dataset::Items => self.items.is_populated(),
            Dataset::ProfileIcons => self.profile_icons.is_populated(),
            Dataset::Masteries => self.masteries.is_populated(),
            Dataset::Runes => self.runes.is_populated(),
            Dataset::SummonerSpells => self.summoner_spells.is_populated(),
        }
    }

    /// Clears every dataset. Nothing is refetched until the next demand.
    pub fn clear_caches(&self) {
        self.champions.reset();
        self.masteries.reset();
        self.profile_icons.reset();
        self.items.reset();
        self.summoner_spells.reset();
        self.runes.reset();
        info!(client = "data dragon", "caches cleared");
    }

    fn load_values<T: serde::de::DeserializeOwned>(&self, dataset: Dataset) -> Result<Vec<T>> {
        let data: HashMap<String, T> = self.api.get_into(dataset.path())?;
        info!(client = "data dragon", dataset = dataset.name(), count = data.len(), "cached");
        Ok(data.into_values().collect())
    }

    fn load_keyed_items(&self, dataset: Dataset) -> Result<Vec<Item>> {
        let data: HashMap<String, Item> = self.api.get_into(dataset.path())?;
        info!(client = "data dragon", dataset = dataset.name(), count = data.len(), "cached");
        let mut items: Vec<Item> = data
            .into_iter()
            .map(|(id, mut item)| {
                item.id = id;
                item
            })
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }
}
