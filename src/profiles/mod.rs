//! Export profiles as ordered pipelines of mapping stages.
//!
//! A [`Profile`] runs its [`ProfileStage`]s in order over one caller-owned
//! [`RdfGraph`]. Each stage corrects and extends what the stages before it
//! produced, so the final graph is the layered composition
//! baseline → DCAT-AP 2 fixes → mobilityDCAT-AP fixes.
//!
//! # Quick Start
//!
//! ```ignore
//! use napits_dcat::{OrganizationCache, Profile, ProfileConfig, RdfFormat, RdfGraph};
//! use napits_dcat::record::DatasetRecord;
//!
//! let profile = Profile::mobility_dcat_ap(ProfileConfig::default());
//! let dataset = DatasetRecord::from_json(&json)?;
//! let mut graph = RdfGraph::new();
//! let dataset_ref = profile.dataset_ref(&dataset);
//! profile.graph_from_dataset(&mut graph, &organizations, &dataset, &dataset_ref)?;
//! println!("{}", graph.serialize(RdfFormat::Turtle)?);
//! ```

mod baseline;
mod catalog_record;
mod dcat_ap_2;
mod mobility;

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

pub use baseline::BaselineStage;
pub use catalog_record::map_catalog_record;
pub use dcat_ap_2::{
    clean_license_type_uri, with_mailto_prefix, with_tel_prefix, without_tel_prefix, DcatAp2Stage,
};
pub use mobility::{is_all_belgian_regions, MobilityStage};

use crate::config::ProfileConfig;
use crate::error::Result;
use crate::multilingual::{strip_empty_language_literals, SUPPORTED_LANGUAGES};
use crate::namespaces::{xsd, PREFIXES};
use crate::organizations::OrganizationLookup;
use crate::rdf::{RdfGraph, RdfNode};
use crate::record::{CatalogDetails, DatasetRecord};
use crate::uris;

/// Everything a stage needs while mapping one record.
pub struct MappingContext<'a> {
    /// The working graph.
    pub graph: &'a mut RdfGraph,
    /// Profile configuration.
    pub config: &'a ProfileConfig,
    /// Organization lookup collaborator.
    pub organizations: &'a dyn OrganizationLookup,
}

impl fmt::Debug for MappingContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingContext")
            .field("graph_len", &self.graph.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MappingContext<'_> {
    /// Adds `subject predicate object` when `value` is present and non-empty,
    /// building the object with `make`.
    pub fn add_optional(
        &mut self,
        subject: &RdfNode,
        predicate: &str,
        value: Option<&str>,
        make: impl FnOnce(&str) -> RdfNode,
    ) {
        if let Some(value) = non_empty(value) {
            self.graph.add(subject.clone(), predicate, make(value));
        }
    }

    /// Adds a URI object when `value` is present and a valid IRI. Anything
    /// else is dropped.
    pub fn add_uri(&mut self, subject: &RdfNode, predicate: &str, value: Option<&str>) {
        let Some(value) = non_empty(value) else {
            return;
        };
        match RdfNode::checked_uri(value) {
            Some(uri) => self.graph.add(subject.clone(), predicate, uri),
            None => debug!(predicate, value, "not a valid IRI, dropped"),
        }
    }

    /// Adds a plain literal when `value` is present and non-empty.
    pub fn add_literal(&mut self, subject: &RdfNode, predicate: &str, value: Option<&str>) {
        if let Some(value) = non_empty(value) {
            self.graph
                .add(subject.clone(), predicate, RdfNode::literal(value));
        }
    }

    /// Removes empty language-tagged literals for every supported locale.
    pub fn strip_empty_literals(&mut self) {
        let removed = strip_empty_language_literals(self.graph, &SUPPORTED_LANGUAGES);
        if removed > 0 {
            debug!(removed, "stripped empty language literals");
        }
    }
}

/// Predicates a stage reads from and writes to the working graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    /// Predicates whose existing statements the stage inspects.
    pub reads: &'static [&'static str],
    /// Predicates the stage adds, rewrites or removes.
    pub writes: &'static [&'static str],
}

/// One layer of an export profile.
///
/// Every method has a pass-through default, so a stage only overrides the
/// directions it corrects.
pub trait ProfileStage: fmt::Debug + Send + Sync {
    /// Short stage name used in logs.
    fn name(&self) -> &'static str;

    /// Predicates this stage reads and writes.
    fn footprint(&self) -> Footprint;

    /// Maps a dataset into the graph.
    ///
    /// # Errors
    ///
    /// Returns an error only if a collaborator lookup fails.
    fn graph_from_dataset(
        &self,
        _cx: &mut MappingContext<'_>,
        _dataset: &DatasetRecord,
        _dataset_ref: &RdfNode,
    ) -> Result<()> {
        Ok(())
    }

    /// Maps the catalog into the graph.
    ///
    /// # Errors
    ///
    /// Returns an error only if a collaborator lookup fails.
    fn graph_from_catalog(
        &self,
        _cx: &mut MappingContext<'_>,
        _catalog: &CatalogDetails,
        _catalog_ref: &RdfNode,
    ) -> Result<()> {
        Ok(())
    }

    /// Maps the catalog record of a dataset into the graph. A stage may fill
    /// in `catalog_record_ref` for the stages after it.
    ///
    /// # Errors
    ///
    /// Returns an error only if a collaborator lookup fails.
    fn graph_from_catalog_record(
        &self,
        _cx: &mut MappingContext<'_>,
        _dataset: &DatasetRecord,
        _dataset_ref: &RdfNode,
        _catalog_record_ref: &mut Option<RdfNode>,
    ) -> Result<()> {
        Ok(())
    }

    /// Extracts dataset fields from the graph into `dataset`.
    ///
    /// # Errors
    ///
    /// Reserved for stages that reject a graph; none currently do.
    fn parse_dataset(
        &self,
        _graph: &RdfGraph,
        _dataset_ref: &RdfNode,
        dataset: DatasetRecord,
    ) -> Result<DatasetRecord> {
        Ok(dataset)
    }
}

/// An export profile: a named, ordered list of stages plus configuration.
#[derive(Debug)]
pub struct Profile {
    name: &'static str,
    config: ProfileConfig,
    stages: Vec<Box<dyn ProfileStage>>,
}

impl Profile {
    /// Creates a profile from explicit stages.
    #[must_use]
    pub fn new(
        name: &'static str,
        config: ProfileConfig,
        stages: Vec<Box<dyn ProfileStage>>,
    ) -> Self {
        Self {
            name,
            config,
            stages,
        }
    }

    /// The general catalog profile: baseline plus DCAT-AP 2 corrections.
    #[must_use]
    pub fn dcat_ap_2(config: ProfileConfig) -> Self {
        Self::new(
            "euro_dcat_ap_2",
            config,
            vec![Box::new(BaselineStage), Box::new(DcatAp2Stage)],
        )
    }

    /// The mobility profile: the DCAT-AP 2 profile plus mobilityDCAT-AP
    /// corrections.
    #[must_use]
    pub fn mobility_dcat_ap(config: ProfileConfig) -> Self {
        Self::new(
            "euro_mobility_dcat_ap",
            config,
            vec![
                Box::new(BaselineStage),
                Box::new(DcatAp2Stage),
                Box::new(MobilityStage),
            ],
        )
    }

    /// Profile name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Profile configuration.
    #[must_use]
    pub const fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// The stages, in execution order.
    #[must_use]
    pub fn stages(&self) -> &[Box<dyn ProfileStage>] {
        &self.stages
    }

    /// The reference a dataset is mapped under.
    #[must_use]
    pub fn dataset_ref(&self, dataset: &DatasetRecord) -> RdfNode {
        RdfNode::uri(uris::dataset_uri(&self.config, dataset))
    }

    /// The reference the catalog is mapped under.
    #[must_use]
    pub fn catalog_ref(&self) -> RdfNode {
        RdfNode::uri(self.config.catalog_uri())
    }

    fn context<'a>(
        &'a self,
        graph: &'a mut RdfGraph,
        organizations: &'a dyn OrganizationLookup,
    ) -> MappingContext<'a> {
        for (prefix, namespace) in PREFIXES {
            graph.bind(*prefix, *namespace);
        }
        MappingContext {
            graph,
            config: &self.config,
            organizations,
        }
    }

    /// Maps a dataset and its distributions into `graph`.
    ///
    /// # Errors
    ///
    /// Returns an error if the organization lookup fails.
    pub fn graph_from_dataset(
        &self,
        graph: &mut RdfGraph,
        organizations: &dyn OrganizationLookup,
        dataset: &DatasetRecord,
        dataset_ref: &RdfNode,
    ) -> Result<()> {
        let mut cx = self.context(graph, organizations);
        for stage in &self.stages {
            debug!(
                profile = self.name,
                stage = stage.name(),
                dataset_id = %dataset.id,
                "graph_from_dataset"
            );
            stage.graph_from_dataset(&mut cx, dataset, dataset_ref)?;
        }
        Ok(())
    }

    /// Maps the catalog into `graph`.
    ///
    /// # Errors
    ///
    /// Returns an error if the organization lookup fails.
    pub fn graph_from_catalog(
        &self,
        graph: &mut RdfGraph,
        organizations: &dyn OrganizationLookup,
        catalog: &CatalogDetails,
        catalog_ref: &RdfNode,
    ) -> Result<()> {
        let mut cx = self.context(graph, organizations);
        for stage in &self.stages {
            debug!(profile = self.name, stage = stage.name(), "graph_from_catalog");
            stage.graph_from_catalog(&mut cx, catalog, catalog_ref)?;
        }
        Ok(())
    }

    /// Maps the catalog record of a dataset into `graph` and returns the
    /// reference it was mapped under.
    ///
    /// # Errors
    ///
    /// Returns an error if the organization lookup fails.
    pub fn graph_from_catalog_record(
        &self,
        graph: &mut RdfGraph,
        organizations: &dyn OrganizationLookup,
        dataset: &DatasetRecord,
        dataset_ref: &RdfNode,
        catalog_record_ref: Option<&RdfNode>,
    ) -> Result<Option<RdfNode>> {
        let mut cx = self.context(graph, organizations);
        let mut record_ref = catalog_record_ref.cloned();
        for stage in &self.stages {
            debug!(
                profile = self.name,
                stage = stage.name(),
                dataset_id = %dataset.id,
                "graph_from_catalog_record"
            );
            stage.graph_from_catalog_record(&mut cx, dataset, dataset_ref, &mut record_ref)?;
        }
        Ok(record_ref)
    }

    /// Extracts a dataset record from `graph`.
    ///
    /// # Errors
    ///
    /// Returns an error if a stage rejects the graph.
    pub fn parse_dataset(&self, graph: &RdfGraph, dataset_ref: &RdfNode) -> Result<DatasetRecord> {
        let mut dataset = DatasetRecord::default();
        for stage in &self.stages {
            dataset = stage.parse_dataset(graph, dataset_ref, dataset)?;
        }
        Ok(dataset)
    }

    /// Maps a dataset and its catalog record into a fresh graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the organization lookup fails.
    pub fn export_dataset(
        &self,
        organizations: &dyn OrganizationLookup,
        dataset: &DatasetRecord,
    ) -> Result<RdfGraph> {
        let mut graph = RdfGraph::new();
        let dataset_ref = self.dataset_ref(dataset);
        self.graph_from_dataset(&mut graph, organizations, dataset, &dataset_ref)?;
        self.graph_from_catalog_record(&mut graph, organizations, dataset, &dataset_ref, None)?;
        Ok(graph)
    }

    /// Serializes `graph` in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns an error if a term is not valid RDF or writing fails.
    pub fn serialize(&self, graph: &RdfGraph) -> Result<String> {
        graph.serialize(self.config.output_format)
    }
}

/// Trims `value`, treating empty strings as absent.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Builds a typed date or date-time literal from a catalog timestamp.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` and `YYYY-MM-DD`;
/// anything else yields `None`.
#[must_use]
pub fn date_literal(value: &str) -> Option<RdfNode> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(RdfNode::typed_literal(dt.to_rfc3339(), xsd::DATE_TIME));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(RdfNode::typed_literal(
            dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            xsd::DATE_TIME,
        ));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(RdfNode::typed_literal(date.format("%Y-%m-%d").to_string(), xsd::DATE));
    }
    debug!(value, "unparseable timestamp skipped");
    None
}
