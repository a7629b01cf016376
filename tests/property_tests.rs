//! Property tests for the value normalizers and the empty-literal cleanup.

mod common;

use common::has_empty_language_literal;
use napits_dcat::multilingual::strip_empty_language_literals;
use napits_dcat::namespaces::dct;
use napits_dcat::profiles::{with_mailto_prefix, with_tel_prefix, without_tel_prefix};
use napits_dcat::record::Translated;
use napits_dcat::{DatasetRecord, Profile, ProfileConfig, RdfGraph, RdfNode, SUPPORTED_LANGUAGES};
use proptest::prelude::*;

fn translated() -> impl Strategy<Value = Translated> {
    proptest::collection::vec(prop_oneof![Just(String::new()), "[a-zA-Z ]{1,12}"], 4).prop_map(
        |values| {
            SUPPORTED_LANGUAGES
                .iter()
                .zip(values)
                .map(|(lang, value)| (lang.code().to_string(), value))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_tel_prefix_idempotent(number in "(tel:)?[+0-9 ]{0,16}") {
        let once = with_tel_prefix(&number);
        if let Some(prefixed) = &once {
            prop_assert!(prefixed.starts_with("tel:"));
            prop_assert!(!prefixed[4..].contains("tel:"));
            prop_assert_eq!(with_tel_prefix(prefixed), once.clone());
        }
    }

    #[test]
    fn prop_tel_prefix_survives_any_input(number in ".{0,24}") {
        if let Some(prefixed) = with_tel_prefix(&number) {
            prop_assert_eq!(with_tel_prefix(&prefixed), Some(prefixed.clone()));
            prop_assert_eq!(without_tel_prefix(&prefixed), without_tel_prefix(&number));
        }
    }

    #[test]
    fn prop_mailto_idempotent(email in "[a-z]{1,8}@[a-z]{1,8}\\.be") {
        let once = with_mailto_prefix(&email).expect("non-empty");
        prop_assert_eq!(with_mailto_prefix(&once), Some(once.clone()));
    }

    #[test]
    fn prop_strip_removes_only_empty_tagged_literals(values in translated()) {
        let mut graph = RdfGraph::new();
        let subject = RdfNode::uri("http://example.org/ds");
        graph.add(subject.clone(), dct::IDENTIFIER, RdfNode::literal(""));
        for (lang, value) in &values {
            graph.add(
                subject.clone(),
                dct::TITLE,
                RdfNode::literal_with_lang(value.as_str(), lang.as_str()),
            );
        }

        let empty = values.values().filter(|v| v.is_empty()).count();
        prop_assert_eq!(strip_empty_language_literals(&mut graph, &SUPPORTED_LANGUAGES), empty);
        prop_assert!(!has_empty_language_literal(&graph));
        // Untagged empty literals are left alone.
        prop_assert!(graph.contains(&subject, dct::IDENTIFIER, &RdfNode::literal("")));
    }

    #[test]
    fn prop_profiles_leave_no_empty_language_literals(
        title in translated(),
        notes in translated(),
        quality in translated(),
    ) {
        let dataset = DatasetRecord {
            id: "generated".into(),
            title_translated: title,
            notes_translated: notes,
            quality_description_translated: quality,
            ..Default::default()
        };
        for profile in [
            Profile::dcat_ap_2(ProfileConfig::default()),
            Profile::mobility_dcat_ap(ProfileConfig::default()),
        ] {
            let mut graph = RdfGraph::new();
            profile
                .graph_from_dataset(
                    &mut graph,
                    &napits_dcat::OrganizationCache::new(),
                    &dataset,
                    &profile.dataset_ref(&dataset),
                )
                .expect("no lookup needed");
            prop_assert!(!has_empty_language_literal(&graph));
        }
    }
}
