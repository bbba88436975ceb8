//! Read-through client-side cache for the League of Legends Data Dragon
//! reference datasets.
//!
//! ```no_run
//! use league_dragon::{Config, DataDragon};
//!
//! let config = Config::from_env()?;
//! let dragon = DataDragon::from_config(&config)?;
//! for champion in dragon.get_champions()? {
//!     println!("{} - {}", champion.name, champion.title);
//! }
//! # Ok::<(), league_dragon::DragonError>(())
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod dragon;
pub mod error;

pub use api::models::{Champion, ImageRef, Item, Mastery, ProfileIcon, SummonerSpell};
pub use api::transport::{Doer, Request, Response, UreqDoer};
pub use api::version::VersionState;
pub use config::{Config, Region};
pub use dragon::{DataDragon, Dataset};
pub use error::{DragonError, Result, UpstreamError};
