//! Configuration for the export profiles.
//!
//! [`ProfileConfig`] carries the catalog identity, the hardcoded catalog
//! publisher and the policy knobs the profiles leave open. [`RdfFormat`]
//! selects the document syntax for the convenience serializer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output format for RDF serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RdfFormat {
    /// RDF/XML format (application/rdf+xml)
    RdfXml,
    /// JSON-LD format (application/ld+json)
    JsonLd,
    /// Turtle format (text/turtle)
    #[default]
    Turtle,
    /// N-Triples format (application/n-triples)
    NTriples,
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RdfXml => write!(f, "RDF/XML"),
            Self::JsonLd => write!(f, "JSON-LD"),
            Self::Turtle => write!(f, "Turtle"),
            Self::NTriples => write!(f, "N-Triples"),
        }
    }
}

impl RdfFormat {
    /// Returns the MIME type for this RDF format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::RdfXml => "application/rdf+xml",
            Self::JsonLd => "application/ld+json",
            Self::Turtle => "text/turtle",
            Self::NTriples => "application/n-triples",
        }
    }

    /// Returns the typical file extension for this RDF format.
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::RdfXml => "rdf",
            Self::JsonLd => "jsonld",
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
        }
    }
}

/// How the mobility profile asserts country-level spatial coverage.
///
/// Region-level statements are governed separately: they are left out when
/// the regions covered are exactly the three Belgian regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountryCoveragePolicy {
    /// Assert every country except Belgium when any region is covered.
    #[default]
    SuppressBelgiumWhenRegional,
    /// Assert Belgium only in place of the three Belgian regions, i.e. when
    /// region statements were suppressed. Other countries are always asserted.
    BelgiumReplacesAllRegions,
    /// Assert no country-level statements at all.
    Omit,
}

/// Configuration for the DCAT-AP 2 and mobilityDCAT-AP profiles.
///
/// # Examples
///
/// ```ignore
/// use napits_dcat::config::{CountryCoveragePolicy, ProfileConfig};
///
/// let config = ProfileConfig::new()
///     .with_catalog_base_uri("https://example.org")
///     .with_country_coverage(CountryCoveragePolicy::Omit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    // === Catalog identity ===
    /// Base URI of the catalog; dataset, organization and catalog-record URIs
    /// are minted beneath it.
    pub catalog_base_uri: String,

    /// Catalog description, in English.
    pub catalog_description: String,

    /// Catalog issue date (`YYYY-MM-DD`).
    pub catalog_issued: String,

    /// License applied to the catalog metadata.
    pub catalog_license: String,

    /// Theme taxonomy the catalog declares.
    pub theme_taxonomy: String,

    // === Catalog publisher ===
    /// Identifier of the catalog publisher entity. It has no organization
    /// record behind it; the URI is minted under `/organization/`.
    pub catalog_publisher_id: String,

    /// English name of the catalog publisher.
    pub catalog_publisher_name: String,

    /// Contact email of the catalog publisher, without `mailto:`.
    pub catalog_publisher_email: String,

    /// Organization whose address the catalog publisher reuses. Resolved
    /// through the organization lookup.
    pub catalog_address_organization_id: String,

    // === Policies ===
    /// Country-level spatial coverage policy for the mobility profile.
    pub country_coverage: CountryCoveragePolicy,

    /// Output format for [`crate::RdfGraph::serialize`] callers that follow
    /// the configuration.
    pub output_format: RdfFormat,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            catalog_base_uri: "https://transportdata.be".into(),
            catalog_description:
                "Transportdata.be is the national access point for all mobility related data in Belgium."
                    .into(),
            catalog_issued: "2020-02-14".into(),
            catalog_license: "http://publications.europa.eu/resource/authority/licence/CC0".into(),
            theme_taxonomy: crate::namespaces::authority::DATA_THEME.into(),
            catalog_publisher_id: "6df0157c-6022-408f-8c7d-991b9c79466f".into(),
            catalog_publisher_name:
                "The Belgian National Geographic Institute on behalf of the Belgian ITS steering committee"
                    .into(),
            catalog_publisher_email: "contact@transportdata.be".into(),
            catalog_address_organization_id: "82e1025c-4db4-4a9c-95f6-e474db508f3f".into(),
            country_coverage: CountryCoveragePolicy::default(),
            output_format: RdfFormat::default(),
        }
    }
}

impl ProfileConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog base URI. A trailing slash is dropped.
    #[must_use]
    pub fn with_catalog_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.catalog_base_uri = uri.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the catalog publisher contact email.
    #[must_use]
    pub fn with_catalog_publisher_email(mut self, email: impl Into<String>) -> Self {
        self.catalog_publisher_email = email.into();
        self
    }

    /// Sets the organization whose address the catalog publisher reuses.
    #[must_use]
    pub fn with_catalog_address_organization(mut self, id: impl Into<String>) -> Self {
        self.catalog_address_organization_id = id.into();
        self
    }

    /// Sets the country-level coverage policy.
    #[must_use]
    pub fn with_country_coverage(mut self, policy: CountryCoveragePolicy) -> Self {
        self.country_coverage = policy;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_output_format(mut self, format: RdfFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Loads a configuration from JSON; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON for this structure.
    pub fn from_json(input: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// The catalog URI: the base URI without trailing slash.
    #[must_use]
    pub fn catalog_uri(&self) -> &str {
        self.catalog_base_uri.trim_end_matches('/')
    }
}
