//! Multilingual field handling.
//!
//! The catalog supports a closed set of four locales. Text fields arrive
//! either as per-locale maps (`notes_translated`) or as locale-suffixed flat
//! keys (`display_title_nl`), and storage pre-fills every locale slot with an
//! empty string. This module extracts the populated values and cleans up the
//! empty-string literals that leak into graphs.

use std::fmt;

use indexmap::IndexMap;

use crate::record::{FieldSource, Translated};
use crate::rdf::{RdfGraph, RdfNode};

/// A locale supported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// English.
    En,
    /// Dutch.
    Nl,
    /// French.
    Fr,
    /// German.
    De,
}

/// Every supported locale, in catalog order.
pub const SUPPORTED_LANGUAGES: [Language; 4] =
    [Language::En, Language::Nl, Language::Fr, Language::De];

impl Language {
    /// The locale code used in records and language tags.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }

    /// The EU language authority URI, a `dct:LinguisticSystem`.
    #[must_use]
    pub const fn authority_uri(self) -> &'static str {
        match self {
            Self::En => "http://publications.europa.eu/resource/authority/language/ENG",
            Self::Nl => "http://publications.europa.eu/resource/authority/language/NLD",
            Self::Fr => "http://publications.europa.eu/resource/authority/language/FRA",
            Self::De => "http://publications.europa.eu/resource/authority/language/DEU",
        }
    }

    /// Looks up a supported locale by code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Collects `{base_key}_{locale}` values into a per-locale map.
///
/// Only locales with a non-empty value are included, in the order of
/// `locales`.
#[must_use]
pub fn collect_suffixed_locales(
    record: &impl FieldSource,
    base_key: &str,
    locales: &[Language],
) -> IndexMap<Language, String> {
    locales
        .iter()
        .filter_map(|&lang| {
            record
                .text_field(&format!("{base_key}_{}", lang.code()))
                .filter(|value| !value.is_empty())
                .map(|value| (lang, value.to_string()))
        })
        .collect()
}

/// Removes every statement whose object is an empty literal tagged with one
/// of `locales`. Returns the number of statements removed.
pub fn strip_empty_language_literals(graph: &mut RdfGraph, locales: &[Language]) -> usize {
    let before = graph.len();
    graph.retain(|triple| match &triple.object {
        RdfNode::Literal {
            value,
            language: Some(tag),
            ..
        } if value.is_empty() => !locales.iter().any(|lang| lang.code() == tag),
        _ => true,
    });
    before - graph.len()
}

/// Supported locales whose slot in `translated` holds non-empty text.
#[must_use]
pub fn populated_languages(translated: &Translated) -> Vec<Language> {
    translated
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(code, _)| Language::from_code(code))
        .collect()
}

/// Adds one language-tagged literal per entry of `translated`, empty values
/// included. Cleanup removes the empty ones at the end of a profile run.
pub fn add_translated(
    graph: &mut RdfGraph,
    subject: &RdfNode,
    predicate: &str,
    translated: &Translated,
) {
    for (lang, value) in translated {
        graph.add(
            subject.clone(),
            predicate,
            RdfNode::literal_with_lang(value.as_str(), lang.as_str()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::dct;
    use crate::record::OrganizationRecord;

    #[test]
    fn test_language_codes_roundtrip() {
        for lang in SUPPORTED_LANGUAGES {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("es"), None);
        assert!(Language::Nl.authority_uri().ends_with("/NLD"));
    }

    #[test]
    fn test_collect_suffixed_locales_skips_empty() {
        let org = OrganizationRecord::from_json(
            r#"{"id": "o", "display_title_de": "Nationales Institut",
                "display_title_en": "National Institute ", "display_title_fr": ""}"#,
        )
        .unwrap();

        let names = collect_suffixed_locales(&org, "display_title", &SUPPORTED_LANGUAGES);
        let langs: Vec<Language> = names.keys().copied().collect();
        assert_eq!(langs, vec![Language::En, Language::De]);
        assert_eq!(names[&Language::En], "National Institute ");
    }

    #[test]
    fn test_strip_empty_language_literals() {
        let mut graph = RdfGraph::new();
        let s = RdfNode::uri("http://example.org/ds");
        graph.add(s.clone(), dct::TITLE, RdfNode::literal_with_lang("", "nl"));
        graph.add(s.clone(), dct::TITLE, RdfNode::literal_with_lang("", "fr"));
        graph.add(s.clone(), dct::TITLE, RdfNode::literal_with_lang("Title", "en"));
        graph.add(s.clone(), dct::TITLE, RdfNode::literal_with_lang("", "es"));
        graph.add(s.clone(), dct::DESCRIPTION, RdfNode::literal(""));

        assert_eq!(strip_empty_language_literals(&mut graph, &SUPPORTED_LANGUAGES), 2);
        assert_eq!(graph.len(), 3);
        assert!(graph.contains(&s, dct::TITLE, &RdfNode::literal_with_lang("Title", "en")));
    }

    #[test]
    fn test_populated_languages_follow_description_slots() {
        let mut notes = Translated::new();
        notes.insert("en".into(), "Bus stops".into());
        notes.insert("nl".into(), String::new());
        notes.insert("fr".into(), "Arrêts".into());
        notes.insert("xx".into(), "ignored".into());

        assert_eq!(populated_languages(&notes), vec![Language::En, Language::Fr]);
    }
}
