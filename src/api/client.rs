use crate::config::Region;
use crate::error::{DragonError, Result, UpstreamError};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::endpoints::{self, ResourceFamily};
use super::models::{Envelope, RealmDto};
use super::transport::{Doer, Response};
use super::version::VersionState;

/// Issues requests against the data service and unwraps its envelope. Never
/// touches any cache.
pub struct DataDragonApi<D> {
    doer: D,
    state: VersionState,
}

impl<D: Doer> DataDragonApi<D> {
    /// Learns the version/locale pair from the realm metadata of `region`,
    /// falling back to a fixed pair when that fails.
    pub fn new(doer: D, region: Region) -> Self {
        let mut api = DataDragonApi {
            doer,
            state: VersionState::fallback(),
        };
        match api.fetch_realm(region.realm()) {
            Ok(state) => api.state = state,
            Err(e) => warn!(
                client = "data dragon",
                region = %region,
                error = %e,
                version = %api.state.version,
                language = %api.state.language,
                "realm bootstrap failed, using fallback version"
            ),
        }
        api
    }

    /// Uses a known version/locale pair, skipping the bootstrap request.
    pub fn with_version(doer: D, state: VersionState) -> Self {
        DataDragonApi { doer, state }
    }

    pub fn state(&self) -> &VersionState {
        &self.state
    }

    fn fetch_realm(&self, realm: &str) -> Result<VersionState> {
        let response = self.execute(ResourceFamily::Root, &endpoints::realm_path(realm))?;
        let realm: RealmDto = serde_json::from_slice(&response.body)?;
        if realm.version.is_empty() || realm.language.is_empty() {
            return Err(DragonError::Decode(
                "realm metadata without version or locale".to_string(),
            ));
        }
        Ok(VersionState::new(realm.version, realm.language))
    }

    /// Fetches a dataset endpoint and decodes the envelope payload into `T`.
    pub fn get_into<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(ResourceFamily::Data, path)?;
        let envelope: Envelope<T> = serde_json::from_slice(&response.body)?;
        debug!(
            client = "data dragon",
            kind = %envelope.kind,
            format = %envelope.format,
            version = %envelope.version,
            "decoded envelope"
        );
        Ok(envelope.data)
    }

    /// Builds the address of an image asset without fetching it.
    pub fn image_url(&self, path: &str) -> Result<String> {
        endpoints::build_request(ResourceFamily::Image, &self.state, path).map(|req| req.url)
    }

    fn execute(&self, family: ResourceFamily, path: &str) -> Result<Response> {
        let request = endpoints::build_request(family, &self.state, path)?;
        debug!(client = "data dragon", family = ?family, url = %request.url, "sending request");

        let response = self.doer.execute(&request)?;
        if !response.is_success() {
            return Err(UpstreamError::from_status(response.status).into());
        }
        Ok(response)
    }
}
