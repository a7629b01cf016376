//! Canonical URIs for catalog entities.
//!
//! Datasets, distributions and organizations get URIs minted beneath the
//! catalog base URI unless the record carries an explicit one. Catalog
//! records and organization addresses are derived from those.

use std::fmt;

use tracing::warn;
use uuid::Uuid;

use crate::config::ProfileConfig;
use crate::record::{DatasetRecord, OrganizationRecord, ResourceRecord};

const DATASET_SEGMENT: &str = "/dataset/";
const CATALOG_RECORD_SEGMENT: &str = "/catalog-record/";

fn explicit(uri: Option<&str>) -> Option<&str> {
    uri.map(str::trim).filter(|uri| !uri.is_empty())
}

/// URI of a dataset: its explicit `uri`, or `<catalog>/dataset/<id>`.
#[must_use]
pub fn dataset_uri(config: &ProfileConfig, dataset: &DatasetRecord) -> String {
    explicit(dataset.uri.as_deref()).map_or_else(
        || format!("{}/dataset/{}", config.catalog_uri(), dataset.id),
        String::from,
    )
}

/// URI of a distribution: its explicit `uri`, or
/// `<catalog>/dataset/<package>/resource/<id>`.
#[must_use]
pub fn resource_uri(
    config: &ProfileConfig,
    dataset: &DatasetRecord,
    resource: &ResourceRecord,
) -> String {
    if let Some(uri) = explicit(resource.uri.as_deref()) {
        return uri.to_string();
    }
    let package = resource
        .package_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or(&dataset.id);
    format!(
        "{}/dataset/{package}/resource/{}",
        config.catalog_uri(),
        resource.id
    )
}

/// URI minted for an organization identifier.
#[must_use]
pub fn organization_uri(config: &ProfileConfig, organization_id: &str) -> String {
    format!("{}/organization/{organization_id}", config.catalog_uri())
}

/// URI of an organization record: its explicit `uri`, or the minted one.
#[must_use]
pub fn organization_record_uri(
    config: &ProfileConfig,
    organization: &OrganizationRecord,
) -> String {
    explicit(organization.uri.as_deref()).map_or_else(
        || organization_uri(config, &organization.id),
        String::from,
    )
}

/// URI of the organization a dataset belongs to, if it is linked to one.
#[must_use]
pub fn publisher_uri_organization_fallback(
    config: &ProfileConfig,
    dataset: &DatasetRecord,
) -> Option<String> {
    dataset
        .organization_id()
        .map(|id| organization_uri(config, id))
}

/// URI of the postal address of a dataset's organization:
/// `<organization-uri>/address`.
#[must_use]
pub fn organization_address_uri(config: &ProfileConfig, dataset: &DatasetRecord) -> Option<String> {
    publisher_uri_organization_fallback(config, dataset).map(|uri| format!("{uri}/address"))
}

/// A catalog-record URI and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRecordUri {
    /// Derived from the dataset URI by swapping the `/dataset/` segment.
    Derived(String),
    /// Minted from a random UUID because the dataset URI had no
    /// `/dataset/` segment.
    Synthesized(String),
}

impl CatalogRecordUri {
    /// The URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Derived(uri) | Self::Synthesized(uri) => uri,
        }
    }

    /// Returns true if the URI was minted from a random UUID.
    #[must_use]
    pub const fn is_synthesized(&self) -> bool {
        matches!(self, Self::Synthesized(_))
    }

    /// Consumes the value, returning the URI.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Derived(uri) | Self::Synthesized(uri) => uri,
        }
    }
}

impl fmt::Display for CatalogRecordUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URI of the catalog record describing a dataset.
///
/// `.../dataset/<id>` becomes `.../catalog-record/<id>`. A dataset URI
/// without that segment gets `<catalog>/catalog-record/<uuid>` and a
/// warning.
#[must_use]
pub fn catalog_record_uri(config: &ProfileConfig, dataset: &DatasetRecord) -> CatalogRecordUri {
    let dataset_uri = dataset_uri(config, dataset);
    if let Some(pos) = dataset_uri.rfind(DATASET_SEGMENT) {
        let mut uri = String::with_capacity(dataset_uri.len() + 7);
        uri.push_str(&dataset_uri[..pos]);
        uri.push_str(CATALOG_RECORD_SEGMENT);
        uri.push_str(&dataset_uri[pos + DATASET_SEGMENT.len()..]);
        return CatalogRecordUri::Derived(uri);
    }

    let uri = format!(
        "{}{CATALOG_RECORD_SEGMENT}{}",
        config.catalog_uri(),
        Uuid::new_v4()
    );
    warn!(
        dataset_id = %dataset.id,
        dataset_uri = %dataset_uri,
        catalog_record_uri = %uri,
        "dataset URI has no /dataset/ segment, minted a random catalog record URI"
    );
    CatalogRecordUri::Synthesized(uri)
}
