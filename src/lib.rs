#![warn(missing_docs)]

//! # napits-dcat: DCAT-AP profiles for transportdata.be
//!
//! Maps the catalog's dataset, resource and organization records into RDF
//! following DCAT-AP 2 and mobilityDCAT-AP, and extracts dataset records back
//! out of RDF.
//!
//! A [`Profile`] is an ordered list of [`ProfileStage`]s run over one
//! caller-owned [`RdfGraph`]: a baseline mapping, DCAT-AP 2 corrections, and
//! for the mobility profile the mobilityDCAT-AP corrections on top.
//!
//! ## Quick Start
//!
//! ```ignore
//! use napits_dcat::{OrganizationCache, Profile, ProfileConfig, RdfFormat};
//! use napits_dcat::record::{DatasetRecord, OrganizationRecord};
//!
//! # fn main() -> napits_dcat::Result<()> {
//! let organizations: OrganizationCache =
//!     [OrganizationRecord::from_json(org_json)?].into_iter().collect();
//! let dataset = DatasetRecord::from_json(dataset_json)?;
//!
//! let profile = Profile::mobility_dcat_ap(ProfileConfig::default());
//! let graph = profile.export_dataset(&organizations, &dataset)?;
//! println!("{}", graph.serialize(RdfFormat::Turtle)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`profiles`]: Profile pipelines and their stages
//! - [`rdf`]: The statement set and RDF document IO
//! - [`record`]: Typed catalog records
//! - [`uris`]: Canonical URIs for catalog entities
//! - [`multilingual`]: Locale handling and empty-literal cleanup
//! - [`organizations`]: Organization lookup collaborator
//! - [`namespaces`]: Vocabulary IRIs
//! - [`config`]: Profile configuration
//! - [`error`]: Error types
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`]. The crate never installs a
//! subscriber; the embedding application decides where events go.

pub mod config;
pub mod error;
pub mod multilingual;
pub mod namespaces;
pub mod organizations;
pub mod profiles;
pub mod rdf;
pub mod record;
pub mod uris;

pub use config::{CountryCoveragePolicy, ProfileConfig, RdfFormat};
pub use error::{DcatError, Result};
pub use multilingual::{Language, SUPPORTED_LANGUAGES};
pub use organizations::{OrganizationCache, OrganizationLookup};
pub use profiles::{MappingContext, Profile, ProfileStage};
pub use rdf::{RdfGraph, RdfNode, RdfTriple};
pub use record::{CatalogDetails, DatasetRecord, OrganizationRecord, ResourceRecord};
