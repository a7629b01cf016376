//! DCAT-AP 2 profile tests: dataset corrections and the parse direction.

mod common;

use common::*;
use napits_dcat::namespaces::{dcat, dct, locn, rdfs, vcard};
use napits_dcat::record::Tag;
use napits_dcat::{
    DatasetRecord, Profile, ProfileConfig, RdfFormat, RdfGraph, RdfNode, ResourceRecord,
};

fn export(dataset: &DatasetRecord) -> RdfGraph {
    let profile = Profile::dcat_ap_2(ProfileConfig::default());
    let mut graph = RdfGraph::new();
    profile
        .graph_from_dataset(&mut graph, &organizations(), dataset, &profile.dataset_ref(dataset))
        .expect("export succeeds");
    graph
}

fn distribution(id: &str) -> RdfNode {
    RdfNode::uri(format!("https://transportdata.be/dataset/bus-stops/resource/{id}"))
}

// ============================================================================
// Contact point
// ============================================================================

#[test]
fn test_contact_point() {
    let graph = export(&sample_dataset());
    let contact_points = objects(&graph, &dataset_ref(), dcat::CONTACT_POINT);
    assert_eq!(contact_points.len(), 1);

    let contact = &contact_points[0];
    assert!(contact.is_blank());
    assert!(has_type(&graph, contact, vcard::KIND));
    assert!(graph.contains(contact, vcard::FN, &RdfNode::literal("Open data team")));
    assert!(graph.contains(
        contact,
        vcard::HAS_EMAIL,
        &RdfNode::uri("mailto:opendata@delijn.be")
    ));
    assert!(graph.contains(
        contact,
        vcard::HAS_TELEPHONE,
        &RdfNode::uri("tel:+3270220200")
    ));
}

#[test]
fn test_contact_point_telephone_already_prefixed() {
    let mut dataset = sample_dataset();
    dataset.contact_point_tel = Some("tel:+32 2 505 46 11".into());
    let graph = export(&dataset);

    let contact = graph
        .first_object(&dataset_ref(), dcat::CONTACT_POINT)
        .expect("contact point");
    assert_eq!(
        objects(&graph, &contact, vcard::HAS_TELEPHONE),
        vec![RdfNode::uri("tel:+3225054611")]
    );
}

#[test]
fn test_contact_point_without_details() {
    let mut dataset = sample_dataset();
    dataset.contact_point_name = None;
    dataset.contact_point_email = Some("  ".into());
    dataset.contact_point_tel = None;
    let graph = export(&dataset);

    let contact = graph
        .first_object(&dataset_ref(), dcat::CONTACT_POINT)
        .expect("contact point");
    assert!(has_type(&graph, &contact, vcard::KIND));
    assert_eq!(graph.matching(Some(&contact), Some(vcard::HAS_EMAIL), None).count(), 0);
    assert_eq!(graph.matching(Some(&contact), Some(vcard::FN), None).count(), 0);
}

// ============================================================================
// Licenses and rights
// ============================================================================

#[test]
fn test_license_document_from_type() {
    let graph = export(&sample_dataset());
    let licenses = objects(&graph, &distribution("gtfs"), dct::LICENSE);
    assert_eq!(licenses.len(), 1);

    let license = &licenses[0];
    assert!(has_type(&graph, license, dct::LICENSE_DOCUMENT));
    assert_eq!(
        objects(&graph, license, dct::TYPE),
        vec![RdfNode::uri("https://creativecommons.org/licenses/by/4.0/")]
    );
    // Every translated license text was empty.
    assert_eq!(graph.objects(license, rdfs::LABEL).count(), 0);
}

#[test]
fn test_license_document_from_text_only() {
    let mut dataset = sample_dataset();
    let mut resource = bare_resource("text-only");
    resource.package_id = Some("bus-stops".into());
    resource
        .license_text_translated
        .insert("nl".into(), "Vrij te gebruiken".into());
    resource
        .license_text_translated
        .insert("en".into(), String::new());
    dataset.resources = vec![resource];

    let graph = export(&dataset);
    let license = graph
        .first_object(&distribution("text-only"), dct::LICENSE)
        .expect("license document");
    assert_eq!(
        objects(&graph, &license, rdfs::LABEL),
        vec![RdfNode::literal_with_lang("Vrij te gebruiken", "nl")]
    );
    assert_eq!(graph.objects(&license, dct::TYPE).count(), 0);
}

#[test]
fn test_invalid_license_type_dropped() {
    let mut dataset = sample_dataset();
    let mut resource = bare_resource("bad-license");
    resource.package_id = Some("bus-stops".into());
    resource.license_type = Some("cc-by".into());
    dataset.resources = vec![resource];

    let graph = export(&dataset);
    let license = graph
        .first_object(&distribution("bad-license"), dct::LICENSE)
        .expect("license document is still created");
    assert!(has_type(&graph, &license, dct::LICENSE_DOCUMENT));
    assert_eq!(graph.objects(&license, dct::TYPE).count(), 0);
}

#[test]
fn test_no_license_without_type_or_text() {
    let mut dataset = sample_dataset();
    let mut resource = bare_resource("unlicensed");
    resource.package_id = Some("bus-stops".into());
    resource
        .license_text_translated
        .insert("en".into(), String::new());
    dataset.resources = vec![resource];

    let graph = export(&dataset);
    assert_eq!(graph.objects(&distribution("unlicensed"), dct::LICENSE).count(), 0);
    assert_eq!(graph.matching(None, Some(dct::LICENSE), None).count(), 0);
}

#[test]
fn test_rights_statement_always_created() {
    let mut dataset = sample_dataset();
    let mut bare = bare_resource("bare");
    bare.package_id = Some("bus-stops".into());
    dataset.resources.push(bare);

    let graph = export(&dataset);

    let rights = graph
        .first_object(&distribution("gtfs"), dct::RIGHTS)
        .expect("rights statement");
    assert!(has_type(&graph, &rights, dct::RIGHTS_STATEMENT));
    assert!(graph.contains(
        &rights,
        dct::TYPE,
        &RdfNode::uri(
            "https://w3id.org/mobilitydcat-ap/conditions-for-access-and-usage/free-of-charge"
        )
    ));
    assert!(graph.contains(&rights, dct::TYPE, &RdfNode::literal("attribution required")));
    assert_eq!(
        objects(&graph, &rights, rdfs::LABEL),
        vec![RdfNode::literal_with_lang("Register first", "en")]
    );

    let bare_rights = graph
        .first_object(&distribution("bare"), dct::RIGHTS)
        .expect("rights statement for a bare resource");
    assert!(has_type(&graph, &bare_rights, dct::RIGHTS_STATEMENT));
    assert_eq!(graph.objects(&bare_rights, dct::TYPE).count(), 0);
}

// ============================================================================
// Corrections
// ============================================================================

#[test]
fn test_geometry_becomes_bounding_box() {
    let dataset = sample_dataset();
    let graph = export(&dataset);

    assert_eq!(graph.matching(None, Some(locn::GEOMETRY), None).count(), 0);
    let location = graph
        .first_object(&dataset_ref(), dct::SPATIAL)
        .expect("spatial location");
    assert_eq!(
        objects(&graph, &location, dcat::BBOX),
        vec![RdfNode::literal(dataset.spatial.clone().expect("fixture has spatial"))]
    );
}

#[test]
fn test_empty_language_literals_stripped() {
    let graph = export(&sample_dataset());
    assert!(!has_empty_language_literal(&graph));
    assert_eq!(
        objects(&graph, &dataset_ref(), dct::TITLE),
        vec![
            RdfNode::literal_with_lang("Bus stops", "en"),
            RdfNode::literal_with_lang("Bushaltes", "nl"),
        ]
    );
}

#[test]
fn test_keywords_kept_under_dcat_ap_2() {
    let graph = export(&sample_dataset());
    assert_eq!(graph.objects(&dataset_ref(), dcat::KEYWORD).count(), 2);
}

#[test]
fn test_dataset_without_organization_needs_no_lookup() {
    let profile = Profile::dcat_ap_2(ProfileConfig::default());
    let dataset = DatasetRecord {
        id: "orphan".into(),
        ..Default::default()
    };
    let graph = profile
        .export_dataset(&napits_dcat::OrganizationCache::new(), &dataset)
        .expect("no lookup needed");
    assert!(!graph.is_empty());
}

// ============================================================================
// Parse direction
// ============================================================================

#[test]
fn test_parse_recovers_mapped_fields() {
    let profile = Profile::dcat_ap_2(ProfileConfig::default());
    let dataset = sample_dataset();
    let graph = profile
        .export_dataset(&organizations(), &dataset)
        .expect("export succeeds");

    let parsed = profile
        .parse_dataset(&graph, &dataset_ref())
        .expect("parse succeeds");

    assert_eq!(parsed.id, "bus-stops");
    assert_eq!(parsed.uri.as_deref(), Some(DATASET_URI));
    assert_eq!(parsed.url, dataset.url);
    assert_eq!(parsed.title_translated.get("en").map(String::as_str), Some("Bus stops"));
    assert_eq!(parsed.title_translated.get("nl").map(String::as_str), Some("Bushaltes"));
    assert_eq!(parsed.notes_translated.get("nl").map(String::as_str), Some("Alle bushaltes"));
    assert_eq!(
        parsed.tags,
        vec![Tag { name: "bus".into() }, Tag { name: "stops".into() }]
    );
    assert_eq!(parsed.reference_system, dataset.reference_system);
    assert_eq!(parsed.spatial, dataset.spatial);

    assert_eq!(parsed.resources.len(), 1);
    let resource: &ResourceRecord = &parsed.resources[0];
    assert_eq!(
        resource.uri.as_deref(),
        Some("https://transportdata.be/dataset/bus-stops/resource/gtfs")
    );
    assert_eq!(resource.name.as_deref(), Some("GTFS feed"));
    assert_eq!(resource.url, dataset.resources[0].url);
    assert_eq!(resource.format.as_deref(), Some("GTFS"));
    assert_eq!(resource.mimetype.as_deref(), Some("application/zip"));
    assert_eq!(resource.size, Some(1_048_576));
}

#[test]
fn test_parse_from_serialized_document() {
    let profile = Profile::dcat_ap_2(ProfileConfig::default());
    let dataset = sample_dataset();
    let graph = profile
        .export_dataset(&organizations(), &dataset)
        .expect("export succeeds");

    let document = graph.serialize(RdfFormat::NTriples).expect("n-triples output");
    let reparsed = RdfGraph::parse(&document, RdfFormat::NTriples).expect("valid n-triples");
    assert_eq!(reparsed.len(), graph.len());

    let parsed = profile
        .parse_dataset(&reparsed, &dataset_ref())
        .expect("parse succeeds");
    assert_eq!(parsed.title_translated.get("nl").map(String::as_str), Some("Bushaltes"));
    assert_eq!(parsed.resources.len(), 1);
}

#[test]
fn test_parse_plain_title() {
    let profile = Profile::dcat_ap_2(ProfileConfig::default());
    let mut graph = RdfGraph::new();
    let ds = RdfNode::uri("http://example.org/dataset/plain");
    graph.add(ds.clone(), dct::TITLE, RdfNode::literal("Plain title"));
    graph.add(ds.clone(), dct::IDENTIFIER, RdfNode::literal("plain"));

    let parsed = profile.parse_dataset(&graph, &ds).expect("parse succeeds");
    assert_eq!(parsed.title.as_deref(), Some("Plain title"));
    assert!(parsed.title_translated.is_empty());
    assert_eq!(parsed.id, "plain");
}
