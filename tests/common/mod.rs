//! Common test fixtures shared across the integration tests.

#![allow(dead_code)]

use napits_dcat::namespaces::{dct, rdf};
use napits_dcat::{
    DatasetRecord, OrganizationCache, OrganizationRecord, RdfGraph, RdfNode, ResourceRecord,
};

/// Identifier of the data owner organization used by [`sample_dataset`].
pub const ORG_ID: &str = "b7f6a4c2-1d3e-4f5a-9b8c-0d1e2f3a4b5c";

/// URI minted for [`ORG_ID`] under the default catalog.
pub const ORG_URI: &str =
    "https://transportdata.be/organization/b7f6a4c2-1d3e-4f5a-9b8c-0d1e2f3a4b5c";

/// URI of [`sample_dataset`] under the default catalog.
pub const DATASET_URI: &str = "https://transportdata.be/dataset/bus-stops";

/// The organization whose address the catalog publisher reuses.
pub fn ngi_organization() -> OrganizationRecord {
    OrganizationRecord::from_json(
        r#"{
            "id": "82e1025c-4db4-4a9c-95f6-e474db508f3f",
            "name": "ngi",
            "title": "National Geographic Institute",
            "country": "Belgium",
            "postal_code": "1000",
            "city": "Brussels",
            "street_address": "Kortenberglaan 115"
        }"#,
    )
    .expect("valid organization")
}

/// The organization owning [`sample_dataset`].
pub fn data_owner() -> OrganizationRecord {
    OrganizationRecord::from_json(&format!(
        r#"{{
            "id": "{ORG_ID}",
            "name": "de-lijn",
            "title": "De Lijn",
            "do_tel": "+32 70 22 02 00",
            "do_website": "https://www.delijn.be",
            "do_email": "data@delijn.be",
            "country": "Belgium",
            "administrative_area": "Flanders",
            "postal_code": "2800",
            "city": "Mechelen",
            "street_address": "Motstraat 20",
            "display_title_en": "De Lijn",
            "display_title_nl": "Vlaamse Vervoermaatschappij De Lijn",
            "display_title_fr": "",
            "display_title_de": null
        }}"#
    ))
    .expect("valid organization")
}

/// A lookup holding both fixture organizations.
pub fn organizations() -> OrganizationCache {
    [ngi_organization(), data_owner()].into_iter().collect()
}

/// A dataset with every field the profiles map, as the catalog stores it:
/// empty strings in unfilled locale slots and packed legacy list fields.
pub fn sample_dataset() -> DatasetRecord {
    DatasetRecord::from_json(&format!(
        r#"{{
            "id": "bus-stops",
            "name": "bus-stops",
            "title_translated": {{"en": "Bus stops", "nl": "Bushaltes", "fr": "", "de": ""}},
            "notes_translated": {{"en": "All bus stops", "nl": "Alle bushaltes", "fr": "", "de": ""}},
            "url": "https://www.delijn.be/open-data",
            "tags": [{{"name": "bus"}}, {{"name": "stops"}}],
            "organization": {{"id": "{ORG_ID}", "name": "de-lijn", "title": "De Lijn"}},
            "publisher_firstname": "Jan",
            "publisher_surname": "Peeters",
            "contact_point_name": "Open data team",
            "contact_point_email": "opendata@delijn.be",
            "contact_point_tel": "+32 70 22 02 00",
            "metadata_created": "2021-03-04T10:11:12.123456",
            "metadata_modified": "2023-06-01T08:00:00.000000",
            "spatial": "POLYGON((2.5 50.7,5.9 50.7,5.9 51.5,2.5 51.5,2.5 50.7))",
            "reference_system": "https://www.opengis.net/def/crs/EPSG/0/4326",
            "mobility_theme": "{{\"https://w3id.org/mobilitydcat-ap/mobility-theme/public-transport\": [\"https://w3id.org/mobilitydcat-ap/mobility-theme/stops\"]}}",
            "fluent_tags": ["https://w3id.org/mobilitydcat-ap/transport-mode/bus"],
            "network_coverage": ["{{https://w3id.org/mobilitydcat-ap/network-coverage/regional-network}}"],
            "georeferencing_method": "https://w3id.org/mobilitydcat-ap/georeferencing-method/geocoordinates",
            "regions_covered": ["http://data.europa.eu/nuts/code/BE2"],
            "countries_covered": ["http://publications.europa.eu/resource/authority/country/BEL"],
            "quality_description_translated": {{"en": "", "nl": "Dagelijks gecontroleerd", "fr": "", "de": ""}},
            "resources": [
                {{
                    "id": "gtfs",
                    "package_id": "bus-stops",
                    "name": "GTFS feed",
                    "description_translated": {{"en": "Static timetable", "nl": "", "fr": "", "de": ""}},
                    "url": "https://transportdata.be/dataset/bus-stops/resource/gtfs/download/gtfs.zip",
                    "url_type": "upload",
                    "format": "GTFS",
                    "mimetype": "application/zip",
                    "size": 1048576,
                    "license_type": "https://creativecommons.org/licenses/by/4.0/",
                    "license_text_translated": {{"en": "", "nl": "", "fr": "", "de": ""}},
                    "conditions_access": "https://w3id.org/mobilitydcat-ap/conditions-for-access-and-usage/free-of-charge",
                    "conditions_usage": "attribution required",
                    "additional_info_access_usage_translated": {{"en": "Register first", "nl": "", "fr": "", "de": ""}},
                    "access_protocol": "https://w3id.org/mobilitydcat-ap/application-layer-protocol/http-https",
                    "communication_method": "https://w3id.org/mobilitydcat-ap/communication-method/pull",
                    "grammar": "https://w3id.org/mobilitydcat-ap/grammar/csv",
                    "data_standard": "https://w3id.org/mobilitydcat-ap/mobility-data-standard/gtfs",
                    "format_notes": "Zipped CSV files",
                    "character_encoding": "UTF-8"
                }}
            ]
        }}"#
    ))
    .expect("valid dataset")
}

/// A resource carrying nothing but its identifier.
pub fn bare_resource(id: &str) -> ResourceRecord {
    ResourceRecord {
        id: id.into(),
        ..Default::default()
    }
}

/// The dataset reference of [`sample_dataset`].
pub fn dataset_ref() -> RdfNode {
    RdfNode::uri(DATASET_URI)
}

/// Objects of `subject predicate ?o`, cloned.
pub fn objects(graph: &RdfGraph, subject: &RdfNode, predicate: &str) -> Vec<RdfNode> {
    graph.objects(subject, predicate).cloned().collect()
}

/// Returns true if `node` has `rdf:type` `class`.
pub fn has_type(graph: &RdfGraph, node: &RdfNode, class: &str) -> bool {
    graph.contains(node, rdf::TYPE, &RdfNode::uri(class))
}

/// Identifiers of the `dct:spatial` locations of `dataset` in `scheme`.
pub fn spatial_identifiers(graph: &RdfGraph, dataset: &RdfNode, scheme: &str) -> Vec<String> {
    graph
        .objects(dataset, dct::SPATIAL)
        .filter(|location| {
            graph.contains(
                location,
                napits_dcat::namespaces::skos::IN_SCHEME,
                &RdfNode::uri(scheme),
            )
        })
        .filter_map(|location| graph.first_object(location, dct::IDENTIFIER))
        .filter_map(|id| id.as_uri().map(String::from))
        .collect()
}

/// Returns true if any statement has an empty literal tagged with a
/// supported locale.
pub fn has_empty_language_literal(graph: &RdfGraph) -> bool {
    graph.triples().any(|t| {
        t.object.literal_value() == Some("")
            && t.object
                .language()
                .is_some_and(|lang| ["en", "nl", "fr", "de"].contains(&lang))
    })
}
