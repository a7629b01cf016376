//! DCAT-AP 2 corrections.
//!
//! Some elements don't come out of the baseline mapping correctly because of
//! the catalog's custom modelling. This stage corrects them and adds what the
//! baseline leaves out: contact points, license and rights statements per
//! distribution, the catalog publisher and the catalog languages.

use tracing::debug;

use crate::error::Result;
use crate::multilingual::{add_translated, SUPPORTED_LANGUAGES};
use crate::namespaces::{dcat, dct, foaf, locn, rdf, rdfs, vcard, xsd};
use crate::rdf::RdfNode;
use crate::record::{CatalogDetails, DatasetRecord, ResourceRecord};
use crate::uris;

use super::{map_catalog_record, Footprint, MappingContext, ProfileStage};

const PREFIX_TEL: &str = "tel:";
const PREFIX_MAILTO: &str = "mailto:";

/// Strips every `tel:` prefix and all whitespace from a phone number.
#[must_use]
pub fn without_tel_prefix(tel: &str) -> String {
    let mut number: String = tel.chars().filter(|c| !c.is_whitespace()).collect();
    while number.contains(PREFIX_TEL) {
        number = number.replace(PREFIX_TEL, "");
    }
    number
}

/// Turns a phone number into a `tel:` URI. Applying it to its own output
/// gives the same output.
#[must_use]
pub fn with_tel_prefix(tel: &str) -> Option<String> {
    let number = without_tel_prefix(tel);
    (!number.is_empty()).then(|| format!("{PREFIX_TEL}{number}"))
}

/// Turns an email address into a `mailto:` URI.
#[must_use]
pub fn with_mailto_prefix(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        None
    } else if email.starts_with(PREFIX_MAILTO) {
        Some(email.to_string())
    } else {
        Some(format!("{PREFIX_MAILTO}{email}"))
    }
}

/// Keeps license type values that are http(s) URIs and drops the rest.
#[must_use]
pub fn clean_license_type_uri(uri: &str) -> Option<&str> {
    let uri = uri.trim();
    (uri.starts_with("http://") || uri.starts_with("https://")).then_some(uri)
}

/// DCAT-AP 2 corrections on top of the baseline mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct DcatAp2Stage;

impl ProfileStage for DcatAp2Stage {
    fn name(&self) -> &'static str {
        "dcat_ap_2"
    }

    fn footprint(&self) -> Footprint {
        Footprint {
            reads: &[locn::GEOMETRY, dct::LANGUAGE, dct::PUBLISHER],
            writes: &[
                rdf::TYPE,
                dcat::CONTACT_POINT,
                vcard::FN,
                vcard::HAS_EMAIL,
                vcard::HAS_TELEPHONE,
                dct::LICENSE,
                dct::RIGHTS,
                dct::TYPE,
                rdfs::LABEL,
                locn::GEOMETRY,
                dcat::BBOX,
                dct::DESCRIPTION,
                dct::LANGUAGE,
                dct::PUBLISHER,
                dct::ISSUED,
                dcat::THEME_TAXONOMY,
                foaf::NAME,
                foaf::MBOX,
                locn::ADDRESS,
            ],
        }
    }

    fn graph_from_dataset(
        &self,
        cx: &mut MappingContext<'_>,
        dataset: &DatasetRecord,
        dataset_ref: &RdfNode,
    ) -> Result<()> {
        add_contact_point(cx, dataset, dataset_ref);

        for resource in &dataset.resources {
            let distribution = RdfNode::uri(uris::resource_uri(cx.config, dataset, resource));
            add_license(cx, &distribution, resource);
            add_rights_statement(cx, &distribution, resource);
        }

        // The baseline's geometry is always the bounding box.
        cx.graph.rename_predicate(locn::GEOMETRY, dcat::BBOX);

        cx.strip_empty_literals();
        Ok(())
    }

    fn graph_from_catalog(
        &self,
        cx: &mut MappingContext<'_>,
        _catalog: &CatalogDetails,
        catalog_ref: &RdfNode,
    ) -> Result<()> {
        let config = cx.config;
        cx.graph.add(
            catalog_ref.clone(),
            dct::DESCRIPTION,
            RdfNode::literal_with_lang(config.catalog_description.as_str(), "en"),
        );

        // The catalog languages are those of the portal UI, not the default locale.
        cx.graph
            .remove_matching(Some(catalog_ref), Some(dct::LANGUAGE), None);
        for lang in SUPPORTED_LANGUAGES {
            let lang = RdfNode::uri(lang.authority_uri());
            cx.graph
                .add(catalog_ref.clone(), dct::LANGUAGE, lang.clone());
            cx.graph
                .add(lang, rdf::TYPE, RdfNode::uri(dct::LINGUISTIC_SYSTEM));
        }

        let publisher = add_catalog_publisher(cx)?;
        cx.graph
            .remove_matching(Some(catalog_ref), Some(dct::PUBLISHER), None);
        cx.graph.add(catalog_ref.clone(), dct::PUBLISHER, publisher);

        let license_document = cx.graph.new_blank_node();
        cx.graph.add(
            license_document.clone(),
            rdf::TYPE,
            RdfNode::uri(dct::LICENSE_DOCUMENT),
        );
        cx.graph.add(
            license_document.clone(),
            dct::TYPE,
            RdfNode::uri(config.catalog_license.as_str()),
        );
        cx.graph
            .add(catalog_ref.clone(), dct::LICENSE, license_document);

        cx.graph.add(
            catalog_ref.clone(),
            dct::ISSUED,
            RdfNode::typed_literal(config.catalog_issued.as_str(), xsd::DATE),
        );
        cx.graph.add(
            catalog_ref.clone(),
            dcat::THEME_TAXONOMY,
            RdfNode::uri(config.theme_taxonomy.as_str()),
        );
        Ok(())
    }

    fn graph_from_catalog_record(
        &self,
        cx: &mut MappingContext<'_>,
        dataset: &DatasetRecord,
        dataset_ref: &RdfNode,
        catalog_record_ref: &mut Option<RdfNode>,
    ) -> Result<()> {
        let record = map_catalog_record(cx, dataset, dataset_ref, catalog_record_ref.as_ref());
        *catalog_record_ref = Some(record);
        Ok(())
    }
}

/// The contact point describes the organization, or person, responsible for
/// the metadata.
fn add_contact_point(cx: &mut MappingContext<'_>, dataset: &DatasetRecord, dataset_ref: &RdfNode) {
    let contact_point = cx.graph.new_blank_node();
    cx.graph
        .add(contact_point.clone(), rdf::TYPE, RdfNode::uri(vcard::KIND));
    cx.graph
        .add(dataset_ref.clone(), dcat::CONTACT_POINT, contact_point.clone());

    cx.add_literal(&contact_point, vcard::FN, dataset.contact_point_name.as_deref());
    let mailto = dataset
        .contact_point_email
        .as_deref()
        .and_then(with_mailto_prefix);
    cx.add_uri(&contact_point, vcard::HAS_EMAIL, mailto.as_deref());
    let tel = dataset
        .contact_point_tel
        .as_deref()
        .and_then(with_tel_prefix);
    cx.add_uri(&contact_point, vcard::HAS_TELEPHONE, tel.as_deref());
}

fn add_license(cx: &mut MappingContext<'_>, distribution: &RdfNode, resource: &ResourceRecord) {
    let has_license_type = resource
        .license_type
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    let has_license_text = resource
        .license_text_translated
        .values()
        .any(|t| !t.is_empty());
    if !has_license_type && !has_license_text {
        return;
    }

    let license_document = cx.graph.new_blank_node();
    cx.graph.add(
        license_document.clone(),
        rdf::TYPE,
        RdfNode::uri(dct::LICENSE_DOCUMENT),
    );
    cx.graph
        .add(distribution.clone(), dct::LICENSE, license_document.clone());
    add_translated(
        cx.graph,
        &license_document,
        rdfs::LABEL,
        &resource.license_text_translated,
    );

    if let Some(license_type) = resource.license_type.as_deref() {
        match clean_license_type_uri(license_type).and_then(RdfNode::checked_uri) {
            Some(uri) => cx.graph.add(license_document, dct::TYPE, uri),
            None => debug!(
                license_type,
                resource_id = %resource.id,
                "license type is not a valid http(s) IRI, dropped"
            ),
        }
    }
}

fn add_rights_statement(
    cx: &mut MappingContext<'_>,
    distribution: &RdfNode,
    resource: &ResourceRecord,
) {
    let rights_statement = cx.graph.new_blank_node();
    cx.graph.add(
        rights_statement.clone(),
        rdf::TYPE,
        RdfNode::uri(dct::RIGHTS_STATEMENT),
    );
    cx.graph
        .add(distribution.clone(), dct::RIGHTS, rights_statement.clone());

    cx.add_optional(
        &rights_statement,
        dct::TYPE,
        resource.conditions_access.as_deref(),
        RdfNode::uri_or_literal,
    );
    cx.add_optional(
        &rights_statement,
        dct::TYPE,
        resource.conditions_usage.as_deref(),
        RdfNode::uri_or_literal,
    );
    add_translated(
        cx.graph,
        &rights_statement,
        rdfs::LABEL,
        &resource.additional_info_access_usage_translated,
    );
}

/// The catalog publisher is the national geographic institute acting on
/// behalf of the ITS steering committee. It has no organization record of
/// its own but reuses the institute's address.
fn add_catalog_publisher(cx: &mut MappingContext<'_>) -> Result<RdfNode> {
    let config = cx.config;
    let address_organization = cx
        .organizations
        .get_organization(&config.catalog_address_organization_id)?;
    let address = format!(
        "{}/address",
        uris::organization_record_uri(config, &address_organization)
    );

    let publisher = RdfNode::uri(uris::organization_uri(config, &config.catalog_publisher_id));
    cx.graph
        .add(publisher.clone(), rdf::TYPE, RdfNode::uri(foaf::ORGANIZATION));
    cx.graph.add(
        publisher.clone(),
        foaf::NAME,
        RdfNode::literal_with_lang(config.catalog_publisher_name.as_str(), "en"),
    );
    cx.graph
        .add(publisher.clone(), locn::ADDRESS, RdfNode::uri(address));
    let mailto = with_mailto_prefix(&config.catalog_publisher_email);
    cx.add_uri(&publisher, foaf::MBOX, mailto.as_deref());
    Ok(publisher)
}
