//! mobilityDCAT-AP corrections.
//!
//! See <https://mobilitydcat-ap.github.io/mobilityDCAT-AP/releases/index.html>.
//!
//! Runs after the DCAT-AP 2 stage on the same graph. The most delicate rule
//! is publisher cardinality: a dataset has exactly one `dct:publisher`, so the
//! named contact person takes that slot and the organization becomes the
//! person's `org:memberOf` affiliation.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::CountryCoveragePolicy;
use crate::error::Result;
use crate::multilingual::{add_translated, collect_suffixed_locales, SUPPORTED_LANGUAGES};
use crate::namespaces::{
    authority, cnt, dcat, dct, dqv, foaf, locn, mobilitydcatap, oa, org, rdf, skos,
};
use crate::rdf::{RdfNode, RdfTriple};
use crate::record::{split_list_value, DatasetRecord, ListValue, OrganizationRecord, ResourceRecord};
use crate::uris;

use super::{non_empty, with_mailto_prefix, Footprint, MappingContext, ProfileStage};

/// Returns true if `regions` are exactly the three Belgian NUTS regions,
/// in any order. Such coverage says no more than "Belgium".
#[must_use]
pub fn is_all_belgian_regions<S: AsRef<str>>(regions: &[S]) -> bool {
    let mut regions: Vec<&str> = regions.iter().map(|r| r.as_ref().trim()).collect();
    regions.sort_unstable();
    regions.dedup();
    regions == authority::BELGIAN_REGIONS
}

/// mobilityDCAT-AP corrections on top of the DCAT-AP 2 stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityStage;

impl ProfileStage for MobilityStage {
    fn name(&self) -> &'static str {
        "mobility_dcat_ap"
    }

    fn footprint(&self) -> Footprint {
        Footprint {
            reads: &[dct::PUBLISHER, dct::CONFORMS_TO],
            writes: &[
                rdf::TYPE,
                dct::PUBLISHER,
                foaf::NAME,
                foaf::FIRST_NAME,
                foaf::SURNAME,
                foaf::PHONE,
                foaf::WORKPLACE_HOMEPAGE,
                foaf::MBOX,
                org::MEMBER_OF,
                locn::ADDRESS,
                mobilitydcatap::MOBILITY_THEME,
                mobilitydcatap::TRANSPORT_MODE,
                mobilitydcatap::NETWORK_COVERAGE,
                mobilitydcatap::GEOREFERENCING_METHOD,
                dct::SPATIAL,
                mobilitydcatap::APPLICATION_LAYER_PROTOCOL,
                mobilitydcatap::COMMUNICATION_METHOD,
                mobilitydcatap::GRAMMAR,
                mobilitydcatap::MOBILITY_DATA_STANDARD,
                mobilitydcatap::DATA_FORMAT_NOTES,
                cnt::CHARACTER_ENCODING,
                dcat::DOWNLOAD_URL,
                dcat::BYTE_SIZE,
                dcat::MEDIA_TYPE,
                dct::CONFORMS_TO,
                dqv::HAS_QUALITY_ANNOTATION,
                dcat::KEYWORD,
            ],
        }
    }

    fn graph_from_dataset(
        &self,
        cx: &mut MappingContext<'_>,
        dataset: &DatasetRecord,
        dataset_ref: &RdfNode,
    ) -> Result<()> {
        let organization = dataset
            .organization_id()
            .map(|id| cx.organizations.get_organization(id))
            .transpose()?;

        add_publisher(cx, dataset, dataset_ref, organization.as_ref());
        add_mobility_themes(cx, dataset, dataset_ref);
        add_list(
            cx,
            dataset_ref,
            mobilitydcatap::TRANSPORT_MODE,
            dataset.fluent_tags.as_ref(),
        );
        add_network_coverage(cx, dataset, dataset_ref);
        add_list(
            cx,
            dataset_ref,
            mobilitydcatap::GEOREFERENCING_METHOD,
            dataset.georeferencing_method.as_ref(),
        );
        add_spatial_coverage(cx, dataset, dataset_ref);

        for resource in &dataset.resources {
            let distribution = RdfNode::uri(uris::resource_uri(cx.config, dataset, resource));
            enrich_distribution(cx, &distribution, resource);
        }

        fix_epsg_scheme(cx);
        add_quality_annotations(cx, dataset, dataset_ref);

        // Free keywords are not part of mobilityDCAT-AP.
        cx.graph
            .remove_matching(Some(dataset_ref), Some(dcat::KEYWORD), None);

        cx.strip_empty_literals();
        Ok(())
    }
}

fn add_publisher(
    cx: &mut MappingContext<'_>,
    dataset: &DatasetRecord,
    dataset_ref: &RdfNode,
    organization: Option<&OrganizationRecord>,
) {
    // Reuse the publisher the earlier stages asserted as the organization.
    let org_node = match cx.graph.first_object(dataset_ref, dct::PUBLISHER) {
        Some(existing) => existing,
        None => match dataset.publisher_uri.as_deref().and_then(RdfNode::checked_uri) {
            Some(uri) => uri,
            None => cx.graph.new_blank_node(),
        },
    };
    cx.graph
        .add(org_node.clone(), rdf::TYPE, RdfNode::uri(foaf::AGENT));
    cx.graph
        .add(org_node.clone(), rdf::TYPE, RdfNode::uri(foaf::ORGANIZATION));

    if let Some(organization) = organization {
        add_organization_details(cx, dataset, &org_node, organization);
    }

    cx.graph
        .remove_matching(Some(dataset_ref), Some(dct::PUBLISHER), None);

    let first_name = non_empty(dataset.publisher_firstname.as_deref());
    let surname = non_empty(dataset.publisher_surname.as_deref());
    if first_name.is_none() && surname.is_none() {
        cx.graph.add(dataset_ref.clone(), dct::PUBLISHER, org_node);
        return;
    }

    let person = cx.graph.new_blank_node();
    cx.graph
        .add(person.clone(), rdf::TYPE, RdfNode::uri(foaf::AGENT));
    cx.graph
        .add(person.clone(), rdf::TYPE, RdfNode::uri(foaf::PERSON));
    let full_name = format!("{} {}", first_name.unwrap_or_default(), surname.unwrap_or_default());
    cx.graph
        .add(person.clone(), foaf::NAME, RdfNode::literal(full_name.trim()));
    cx.add_literal(&person, foaf::FIRST_NAME, first_name);
    cx.add_literal(&person, foaf::SURNAME, surname);
    cx.graph.add(person.clone(), org::MEMBER_OF, org_node);
    cx.graph.add(dataset_ref.clone(), dct::PUBLISHER, person);
}

fn add_organization_details(
    cx: &mut MappingContext<'_>,
    dataset: &DatasetRecord,
    org_node: &RdfNode,
    organization: &OrganizationRecord,
) {
    cx.add_literal(org_node, foaf::NAME, organization.title.as_deref());
    cx.add_literal(org_node, foaf::PHONE, organization.do_tel.as_deref());
    cx.add_uri(org_node, foaf::WORKPLACE_HOMEPAGE, organization.do_website.as_deref());
    let mailto = organization
        .do_email
        .as_deref()
        .and_then(with_mailto_prefix);
    cx.add_uri(org_node, foaf::MBOX, mailto.as_deref());
    for (lang, title) in
        collect_suffixed_locales(organization, "display_title", &SUPPORTED_LANGUAGES)
    {
        cx.graph.add(
            org_node.clone(),
            foaf::NAME,
            RdfNode::literal_with_lang(title, lang.code()),
        );
    }

    let address = match uris::organization_address_uri(cx.config, dataset)
        .as_deref()
        .and_then(RdfNode::checked_uri)
    {
        Some(uri) => uri,
        None => cx.graph.new_blank_node(),
    };
    cx.graph
        .add(address.clone(), rdf::TYPE, RdfNode::uri(locn::ADDRESS_CLASS));
    cx.graph
        .add(org_node.clone(), locn::ADDRESS, address.clone());
    for (predicate, value) in [
        (locn::ADMIN_UNIT_L1, &organization.country),
        (locn::ADMIN_UNIT_L2, &organization.administrative_area),
        (locn::POST_CODE, &organization.postal_code),
        (locn::POST_NAME, &organization.city),
        (locn::THOROUGHFARE, &organization.street_address),
    ] {
        cx.add_literal(&address, predicate, value.as_deref());
    }
}

/// Themes arrive as a JSON object from broader theme to its narrower themes.
/// A broader theme with narrower themes is implied by them, so only the
/// narrower ones are asserted; a broader theme without any is asserted
/// itself. All of them share the `mobilityTheme` predicate.
fn add_mobility_themes(
    cx: &mut MappingContext<'_>,
    dataset: &DatasetRecord,
    dataset_ref: &RdfNode,
) {
    let Some(raw) = non_empty(dataset.mobility_theme.as_deref()) else {
        return;
    };
    let themes: IndexMap<String, Option<Vec<String>>> = match serde_json::from_str(raw) {
        Ok(themes) => themes,
        Err(err) => {
            debug!(
                dataset_id = %dataset.id,
                error = %err,
                "mobility theme is not a JSON object, skipped"
            );
            return;
        },
    };

    for (broader, narrower) in &themes {
        let narrower = narrower.as_deref().unwrap_or_default();
        if narrower.is_empty() {
            cx.add_optional(
                dataset_ref,
                mobilitydcatap::MOBILITY_THEME,
                Some(broader.as_str()),
                RdfNode::uri_or_literal,
            );
        }
        for theme in narrower {
            cx.add_optional(
                dataset_ref,
                mobilitydcatap::MOBILITY_THEME,
                Some(theme.as_str()),
                RdfNode::uri_or_literal,
            );
        }
    }
}

fn add_list(
    cx: &mut MappingContext<'_>,
    subject: &RdfNode,
    predicate: &str,
    value: Option<&ListValue>,
) {
    for item in value.map(ListValue::items).unwrap_or_default() {
        cx.graph
            .add(subject.clone(), predicate, RdfNode::uri_or_literal(&item));
    }
}

/// Network coverage is a list whose elements may each pack a brace-wrapped
/// list, e.g. `["{motorway,urban}"]`.
fn add_network_coverage(
    cx: &mut MappingContext<'_>,
    dataset: &DatasetRecord,
    dataset_ref: &RdfNode,
) {
    for packed in dataset.network_coverage.iter().flatten() {
        let inner = packed.trim().trim_matches(|c| c == '{' || c == '}');
        for item in split_list_value(inner) {
            cx.add_optional(
                dataset_ref,
                mobilitydcatap::NETWORK_COVERAGE,
                Some(item.trim_matches('"')),
                RdfNode::uri_or_literal,
            );
        }
    }
}

fn add_spatial_coverage(
    cx: &mut MappingContext<'_>,
    dataset: &DatasetRecord,
    dataset_ref: &RdfNode,
) {
    let regions: Vec<&str> = dataset
        .regions_covered
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();
    let all_regions = is_all_belgian_regions(regions.as_slice());

    // All three regions add nothing over the country.
    if !all_regions {
        for region in &regions {
            add_location(cx, dataset_ref, authority::NUTS, region);
        }
    }

    let keep_belgium = match cx.config.country_coverage {
        CountryCoveragePolicy::Omit => return,
        CountryCoveragePolicy::SuppressBelgiumWhenRegional => regions.is_empty(),
        CountryCoveragePolicy::BelgiumReplacesAllRegions => all_regions,
    };
    for country in dataset.countries_covered.iter().map(|c| c.trim()) {
        if country.is_empty() || (country == authority::BELGIUM && !keep_belgium) {
            continue;
        }
        add_location(cx, dataset_ref, authority::COUNTRY_SCHEME, country);
    }
}

fn add_location(
    cx: &mut MappingContext<'_>,
    dataset_ref: &RdfNode,
    scheme: &str,
    identifier: &str,
) {
    let Some(identifier) = RdfNode::checked_uri(identifier) else {
        debug!(scheme, identifier, "coverage identifier is not a valid IRI, dropped");
        return;
    };
    let location = cx.graph.new_blank_node();
    cx.graph
        .add(dataset_ref.clone(), dct::SPATIAL, location.clone());
    cx.graph
        .add(location.clone(), rdf::TYPE, RdfNode::uri(dct::LOCATION));
    cx.graph
        .add(location.clone(), skos::IN_SCHEME, RdfNode::uri(scheme));
    cx.graph.add(location, dct::IDENTIFIER, identifier);
}

fn enrich_distribution(
    cx: &mut MappingContext<'_>,
    distribution: &RdfNode,
    resource: &ResourceRecord,
) {
    for (predicate, value) in [
        (mobilitydcatap::APPLICATION_LAYER_PROTOCOL, &resource.access_protocol),
        (mobilitydcatap::COMMUNICATION_METHOD, &resource.communication_method),
        (mobilitydcatap::GRAMMAR, &resource.grammar),
        (mobilitydcatap::MOBILITY_DATA_STANDARD, &resource.data_standard),
    ] {
        cx.add_optional(distribution, predicate, value.as_deref(), RdfNode::uri_or_literal);
    }
    cx.add_literal(
        distribution,
        mobilitydcatap::DATA_FORMAT_NOTES,
        resource.format_notes.as_deref(),
    );
    cx.add_literal(
        distribution,
        cnt::CHARACTER_ENCODING,
        resource.character_encoding.as_deref(),
    );
    add_translated(
        cx.graph,
        distribution,
        dct::DESCRIPTION,
        &resource.description_translated,
    );
    if resource.is_upload() {
        cx.add_uri(distribution, dcat::DOWNLOAD_URL, resource.url.as_deref());
    }

    // Not allowed on mobilityDCAT-AP distributions.
    cx.graph
        .remove_matching(Some(distribution), Some(dcat::BYTE_SIZE), None);
    cx.graph
        .remove_matching(Some(distribution), Some(dcat::MEDIA_TYPE), None);
}

/// EPSG reference systems are registered under `http`, not `https`.
fn fix_epsg_scheme(cx: &mut MappingContext<'_>) {
    let wrong: Vec<RdfTriple> = cx
        .graph
        .matching(None, Some(dct::CONFORMS_TO), None)
        .filter(|t| {
            t.object
                .as_uri()
                .is_some_and(|uri| uri.starts_with(authority::EPSG_HTTPS))
        })
        .cloned()
        .collect();
    for triple in wrong {
        cx.graph
            .remove(&triple.subject, &triple.predicate, &triple.object);
        if let Some(code) = triple
            .object
            .as_uri()
            .and_then(|uri| uri.strip_prefix(authority::EPSG_HTTPS))
        {
            cx.graph.add(
                triple.subject,
                dct::CONFORMS_TO,
                RdfNode::uri(format!("{}{code}", authority::EPSG_HTTP)),
            );
        }
    }
}

fn add_quality_annotations(
    cx: &mut MappingContext<'_>,
    dataset: &DatasetRecord,
    dataset_ref: &RdfNode,
) {
    for (lang, text) in &dataset.quality_description_translated {
        if text.trim().is_empty() {
            continue;
        }
        let annotation = cx.graph.new_blank_node();
        cx.graph.add(
            annotation.clone(),
            rdf::TYPE,
            RdfNode::uri(dqv::QUALITY_ANNOTATION),
        );
        cx.graph.add(
            dataset_ref.clone(),
            dqv::HAS_QUALITY_ANNOTATION,
            annotation.clone(),
        );

        let body = cx.graph.new_blank_node();
        cx.graph.add(annotation, oa::HAS_BODY, body.clone());
        cx.graph
            .add(body.clone(), rdf::TYPE, RdfNode::uri(oa::TEXTUAL_BODY));
        cx.graph.add(
            body.clone(),
            rdf::VALUE,
            RdfNode::literal_with_lang(text.as_str(), lang.as_str()),
        );
        cx.graph
            .add(body, dct::FORMAT, RdfNode::uri(authority::PLAIN_TEXT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_belgian_regions_is_order_insensitive() {
        let mut regions: Vec<&str> = authority::BELGIAN_REGIONS.to_vec();
        assert!(is_all_belgian_regions(regions.as_slice()));
        regions.reverse();
        assert!(is_all_belgian_regions(regions.as_slice()));
        regions.push(authority::BELGIAN_REGIONS[0]);
        assert!(is_all_belgian_regions(regions.as_slice()));
        regions.truncate(2);
        assert!(!is_all_belgian_regions(regions.as_slice()));
        assert!(!is_all_belgian_regions::<&str>(&[]));
    }

    #[test]
    fn test_three_regions_not_all_belgian() {
        let regions = [
            "http://data.europa.eu/nuts/code/BE1",
            "http://data.europa.eu/nuts/code/BE2",
            "http://data.europa.eu/nuts/code/NL3",
        ];
        assert!(!is_all_belgian_regions(&regions[..]));
    }
}
