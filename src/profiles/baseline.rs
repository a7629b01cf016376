//! Baseline DCAT-AP 2 mapping.
//!
//! This stage stands in for the lower-tier DCAT-AP 2 mapper the catalog
//! ships with. It reproduces that mapper's output faithfully, defects
//! included: empty language literals for unfilled locale slots, the dataset
//! bounding box under `locn:geometry`, generic keywords, byte sizes and media
//! types, a single default-locale catalog language. The stages after it
//! correct those. It also owns the parse direction.

use tracing::debug;

use crate::error::Result;
use crate::multilingual::add_translated;
use crate::namespaces::{dcat, dct, foaf, locn, rdf, xsd};
use crate::rdf::{RdfGraph, RdfNode};
use crate::record::{CatalogDetails, DatasetRecord, ResourceRecord, Tag};
use crate::uris;

use super::{date_literal, Footprint, MappingContext, ProfileStage};

/// The lower-tier DCAT-AP 2 mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineStage;

impl ProfileStage for BaselineStage {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn footprint(&self) -> Footprint {
        Footprint {
            reads: &[],
            writes: &[
                rdf::TYPE,
                dct::TITLE,
                dct::DESCRIPTION,
                dct::IDENTIFIER,
                dct::PUBLISHER,
                dct::ISSUED,
                dct::MODIFIED,
                dct::SPATIAL,
                dct::CONFORMS_TO,
                dct::LANGUAGE,
                dct::FORMAT,
                dcat::LANDING_PAGE,
                dcat::KEYWORD,
                dcat::DISTRIBUTION,
                dcat::ACCESS_URL,
                dcat::MEDIA_TYPE,
                dcat::BYTE_SIZE,
                locn::GEOMETRY,
                foaf::NAME,
                foaf::HOMEPAGE,
            ],
        }
    }

    fn graph_from_dataset(
        &self,
        cx: &mut MappingContext<'_>,
        dataset: &DatasetRecord,
        dataset_ref: &RdfNode,
    ) -> Result<()> {
        cx.graph
            .add(dataset_ref.clone(), rdf::TYPE, RdfNode::uri(dcat::DATASET_CLASS));

        add_text(cx, dataset_ref, dct::TITLE, dataset.title.as_deref(), &dataset.title_translated);
        add_text(
            cx,
            dataset_ref,
            dct::DESCRIPTION,
            dataset.notes.as_deref(),
            &dataset.notes_translated,
        );
        cx.add_literal(dataset_ref, dct::IDENTIFIER, Some(dataset.id.as_str()));
        cx.add_uri(dataset_ref, dcat::LANDING_PAGE, dataset.url.as_deref());

        for tag in &dataset.tags {
            cx.add_literal(dataset_ref, dcat::KEYWORD, Some(tag.name.as_str()));
        }

        if let Some(date) = dataset.metadata_created.as_deref().and_then(date_literal) {
            cx.graph.add(dataset_ref.clone(), dct::ISSUED, date);
        }
        if let Some(date) = dataset.metadata_modified.as_deref().and_then(date_literal) {
            cx.graph.add(dataset_ref.clone(), dct::MODIFIED, date);
        }

        self.add_publisher(cx, dataset, dataset_ref);

        if let Some(spatial) = dataset.spatial.as_deref().filter(|s| !s.trim().is_empty()) {
            let location = cx.graph.new_blank_node();
            cx.graph
                .add(dataset_ref.clone(), dct::SPATIAL, location.clone());
            cx.graph
                .add(location.clone(), rdf::TYPE, RdfNode::uri(dct::LOCATION));
            cx.graph
                .add(location, locn::GEOMETRY, RdfNode::literal(spatial.trim()));
        }

        cx.add_uri(dataset_ref, dct::CONFORMS_TO, dataset.reference_system.as_deref());

        for resource in &dataset.resources {
            self.add_distribution(cx, dataset, dataset_ref, resource);
        }

        Ok(())
    }

    fn graph_from_catalog(
        &self,
        cx: &mut MappingContext<'_>,
        catalog: &CatalogDetails,
        catalog_ref: &RdfNode,
    ) -> Result<()> {
        cx.graph
            .add(catalog_ref.clone(), rdf::TYPE, RdfNode::uri(dcat::CATALOG));
        cx.add_literal(catalog_ref, dct::TITLE, catalog.title.as_deref());
        cx.add_uri(catalog_ref, foaf::HOMEPAGE, catalog.homepage.as_deref());
        let locale = catalog.locale_default.as_deref().unwrap_or("en");
        cx.add_literal(catalog_ref, dct::LANGUAGE, Some(locale));
        if let Some(date) = catalog.modified.as_deref().and_then(date_literal) {
            cx.graph.add(catalog_ref.clone(), dct::MODIFIED, date);
        }
        Ok(())
    }

    fn parse_dataset(
        &self,
        graph: &RdfGraph,
        dataset_ref: &RdfNode,
        mut dataset: DatasetRecord,
    ) -> Result<DatasetRecord> {
        for title in graph.objects(dataset_ref, dct::TITLE) {
            read_text(title, &mut dataset.title, &mut dataset.title_translated);
        }
        for notes in graph.objects(dataset_ref, dct::DESCRIPTION) {
            read_text(notes, &mut dataset.notes, &mut dataset.notes_translated);
        }
        if let Some(id) = first_literal(graph, dataset_ref, dct::IDENTIFIER) {
            dataset.id = id;
        }
        dataset.url = first_uri(graph, dataset_ref, dcat::LANDING_PAGE);
        dataset.uri = dataset_ref.as_uri().map(String::from);
        dataset.tags = graph
            .objects(dataset_ref, dcat::KEYWORD)
            .filter_map(RdfNode::literal_value)
            .map(|name| Tag { name: name.into() })
            .collect();
        dataset.reference_system = first_uri(graph, dataset_ref, dct::CONFORMS_TO);
        dataset.spatial = graph.objects(dataset_ref, dct::SPATIAL).find_map(|location| {
            first_literal(graph, location, dcat::BBOX)
                .or_else(|| first_literal(graph, location, locn::GEOMETRY))
        });

        dataset.resources = graph
            .objects(dataset_ref, dcat::DISTRIBUTION)
            .map(|distribution| parse_distribution(graph, distribution))
            .collect();

        Ok(dataset)
    }
}

impl BaselineStage {
    fn add_publisher(
        &self,
        cx: &mut MappingContext<'_>,
        dataset: &DatasetRecord,
        dataset_ref: &RdfNode,
    ) {
        let explicit = dataset
            .publisher_uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
            .map(String::from);
        let Some(publisher_uri) =
            explicit.or_else(|| uris::publisher_uri_organization_fallback(cx.config, dataset))
        else {
            return;
        };

        let Some(publisher) = RdfNode::checked_uri(&publisher_uri) else {
            debug!(
                dataset_id = %dataset.id,
                %publisher_uri,
                "publisher is not a valid IRI, dropped"
            );
            return;
        };
        cx.graph
            .add(dataset_ref.clone(), dct::PUBLISHER, publisher.clone());
        cx.graph
            .add(publisher.clone(), rdf::TYPE, RdfNode::uri(foaf::ORGANIZATION));
        let org_title = dataset
            .organization
            .as_ref()
            .and_then(|org| org.title.as_deref());
        cx.add_literal(&publisher, foaf::NAME, org_title);
    }

    fn add_distribution(
        &self,
        cx: &mut MappingContext<'_>,
        dataset: &DatasetRecord,
        dataset_ref: &RdfNode,
        resource: &ResourceRecord,
    ) {
        let distribution = RdfNode::uri(uris::resource_uri(cx.config, dataset, resource));
        cx.graph
            .add(dataset_ref.clone(), dcat::DISTRIBUTION, distribution.clone());
        cx.graph.add(
            distribution.clone(),
            rdf::TYPE,
            RdfNode::uri(dcat::DISTRIBUTION_CLASS),
        );
        cx.add_literal(&distribution, dct::TITLE, resource.name.as_deref());
        cx.add_uri(&distribution, dcat::ACCESS_URL, resource.url.as_deref());
        cx.add_literal(&distribution, dct::FORMAT, resource.format.as_deref());
        cx.add_literal(&distribution, dcat::MEDIA_TYPE, resource.mimetype.as_deref());
        if let Some(size) = resource.size {
            cx.graph.add(
                distribution,
                dcat::BYTE_SIZE,
                RdfNode::typed_literal(size.to_string(), xsd::DECIMAL),
            );
        }
    }
}

/// Adds the translated form of a text field when present, the plain form
/// otherwise.
fn add_text(
    cx: &mut MappingContext<'_>,
    subject: &RdfNode,
    predicate: &str,
    plain: Option<&str>,
    translated: &crate::record::Translated,
) {
    if translated.is_empty() {
        cx.add_literal(subject, predicate, plain);
    } else {
        add_translated(cx.graph, subject, predicate, translated);
    }
}

fn read_text(
    node: &RdfNode,
    plain: &mut Option<String>,
    translated: &mut crate::record::Translated,
) {
    match node {
        RdfNode::Literal {
            value,
            language: Some(lang),
            ..
        } => {
            translated.insert(lang.clone(), value.clone());
        },
        RdfNode::Literal { value, .. } => *plain = Some(value.clone()),
        _ => {},
    }
}

fn first_literal(graph: &RdfGraph, subject: &RdfNode, predicate: &str) -> Option<String> {
    graph
        .objects(subject, predicate)
        .find_map(RdfNode::literal_value)
        .map(String::from)
}

fn first_uri(graph: &RdfGraph, subject: &RdfNode, predicate: &str) -> Option<String> {
    graph
        .objects(subject, predicate)
        .find_map(RdfNode::as_uri)
        .map(String::from)
}

fn parse_distribution(graph: &RdfGraph, distribution: &RdfNode) -> ResourceRecord {
    ResourceRecord {
        uri: distribution.as_uri().map(String::from),
        name: first_literal(graph, distribution, dct::TITLE),
        url: first_uri(graph, distribution, dcat::ACCESS_URL),
        format: first_literal(graph, distribution, dct::FORMAT),
        mimetype: first_literal(graph, distribution, dcat::MEDIA_TYPE),
        size: first_literal(graph, distribution, dcat::BYTE_SIZE).and_then(|s| s.parse().ok()),
        ..Default::default()
    }
}
