//! The `dcat:CatalogRecord` describing each dataset's metadata entry.

use crate::multilingual::populated_languages;
use crate::namespaces::{dcat, dct, foaf, rdf};
use crate::rdf::RdfNode;
use crate::record::DatasetRecord;
use crate::uris;

use super::{date_literal, MappingContext};

/// Maps the catalog record of `dataset` and returns its reference.
///
/// When `catalog_record_ref` is `None` the reference is derived from the
/// dataset URI, or minted from a random UUID with a warning.
pub fn map_catalog_record(
    cx: &mut MappingContext<'_>,
    dataset: &DatasetRecord,
    dataset_ref: &RdfNode,
    catalog_record_ref: Option<&RdfNode>,
) -> RdfNode {
    let record = catalog_record_ref.cloned().unwrap_or_else(|| {
        RdfNode::uri(uris::catalog_record_uri(cx.config, dataset).into_string())
    });

    cx.graph
        .add(record.clone(), rdf::TYPE, RdfNode::uri(dcat::CATALOG_RECORD));
    cx.graph
        .add(record.clone(), foaf::PRIMARY_TOPIC, dataset_ref.clone());

    for (predicate, value) in [
        (dct::ISSUED, dataset.metadata_created.as_deref()),
        (dct::MODIFIED, dataset.metadata_modified.as_deref()),
    ] {
        if let Some(literal) = value.and_then(date_literal) {
            cx.graph.add(record.clone(), predicate, literal);
        }
    }

    // A language counts as present when the description is filled in for it.
    for lang in populated_languages(&dataset.notes_translated) {
        let lang = RdfNode::uri(lang.authority_uri());
        cx.graph.add(record.clone(), dct::LANGUAGE, lang.clone());
        cx.graph
            .add(lang, rdf::TYPE, RdfNode::uri(dct::LINGUISTIC_SYSTEM));
    }

    record
}
