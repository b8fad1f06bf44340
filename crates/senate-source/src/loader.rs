//! Concurrent loading of the member and image documents.
//!
//! Both reads are issued together and joined before any record is built.
//! Either failure aborts the load.

use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use senate_core::Roster;

use crate::config::{SourceConfig, SourceLocation};
use crate::error::{SourceError, SourceKind};
use crate::raw::{self, ImageTable, RawMemberFile};

/// Reads sources described by a [`SourceConfig`].
#[derive(Debug, Clone)]
pub struct SourceLoader {
    config: SourceConfig,
    http: reqwest::Client,
}

impl SourceLoader {
    pub fn new(config: SourceConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SourceError::Http {
                kind: SourceKind::Members,
                location: "client_init".into(),
                source: e,
            })?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Fetch and parse both documents concurrently.
    pub async fn fetch(&self) -> Result<(RawMemberFile, ImageTable), SourceError> {
        tokio::try_join!(
            self.read_json::<RawMemberFile>(SourceKind::Members, &self.config.members),
            self.read_json::<ImageTable>(SourceKind::Images, &self.config.images),
        )
    }

    /// Fetch both documents and build a roster with age and tenure derived
    /// against `today`.
    pub async fn load(&self, today: NaiveDate) -> Result<Roster, SourceError> {
        let result = self.load_inner(today).await;
        match &result {
            Ok(roster) => tracing::info!(
                members = roster.len(),
                as_of = %today,
                "roster loaded"
            ),
            Err(e) => tracing::error!(error = %e, "roster load failed"),
        }
        result
    }

    async fn load_inner(&self, today: NaiveDate) -> Result<Roster, SourceError> {
        let (members, images) = self.fetch().await?;
        tracing::debug!(
            records = members.objects.len(),
            images = images.len(),
            "sources fetched"
        );
        let profiles = raw::normalize(members, &images)?;
        Ok(Roster::from_profiles(profiles, today)?)
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        kind: SourceKind,
        location: &SourceLocation,
    ) -> Result<T, SourceError> {
        tracing::info!(source = %kind, location = %location, "reading source");
        let bytes = match location {
            SourceLocation::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|e| SourceError::Io {
                        kind,
                        location: location.to_string(),
                        source: e,
                    })?
            }
            SourceLocation::Url(url) => self.fetch_url(kind, url).await?,
        };
        serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse { kind, source: e })
    }

    async fn fetch_url(&self, kind: SourceKind, url: &url::Url) -> Result<Vec<u8>, SourceError> {
        let location = url.to_string();
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SourceError::Http {
                kind,
                location: location.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(SourceError::Status {
                kind,
                location,
                status: resp.status().as_u16(),
            });
        }

        resp.bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| SourceError::Http {
                kind,
                location,
                source: e,
            })
    }
}

/// Build a loader for `config` and load once.
pub async fn load_roster(config: SourceConfig, today: NaiveDate) -> Result<Roster, SourceError> {
    SourceLoader::new(config)?.load(today).await
}
