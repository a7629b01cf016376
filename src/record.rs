//! Typed catalog records.
//!
//! Records arrive from the catalog as JSON dictionaries with many optional
//! keys. Each known key becomes an explicit field defaulting to "not present";
//! keys the mappers address by computed name (locale-suffixed fields) stay
//! reachable through [`FieldSource`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DcatError, Result};

/// A multilingual text field keyed by locale code.
pub type Translated = IndexMap<String, String>;

/// A list-valued field that older records store as a single string.
///
/// The string form is either a JSON array or a comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListValue {
    /// A proper list.
    List(Vec<String>),
    /// A list packed into one string.
    Text(String),
}

impl ListValue {
    /// Returns the trimmed, non-empty items of the list.
    #[must_use]
    pub fn items(&self) -> Vec<String> {
        match self {
            Self::List(items) => clean_items(items.iter().map(String::as_str)),
            Self::Text(text) => split_list_value(text),
        }
    }
}

impl Default for ListValue {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// Splits a packed list value into its items.
///
/// A JSON array of strings is decoded as such; anything else is split on
/// commas. Items are trimmed and empty items dropped.
#[must_use]
pub fn split_list_value(value: &str) -> Vec<String> {
    if let Ok(items) = serde_json::from_str::<Vec<String>>(value) {
        return clean_items(items.iter().map(String::as_str));
    }
    clean_items(value.split(','))
}

fn clean_items<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Dynamic access to text fields by key.
pub trait FieldSource {
    /// Returns the text value stored under `key`, if any.
    fn text_field(&self, key: &str) -> Option<&str>;
}

/// A tag attached to a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    /// Tag text.
    pub name: String,
}

/// The organization linkage embedded in a dataset record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationRef {
    /// Organization identifier.
    pub id: String,
    /// Organization slug.
    pub name: Option<String>,
    /// Organization title.
    pub title: Option<String>,
}

/// A dataset record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetRecord {
    /// Dataset identifier.
    pub id: String,
    /// Dataset slug.
    pub name: Option<String>,
    /// Explicit dataset URI, overriding the minted one.
    pub uri: Option<String>,
    /// Untranslated title.
    pub title: Option<String>,
    /// Title per locale.
    pub title_translated: Translated,
    /// Untranslated description.
    pub notes: Option<String>,
    /// Description per locale.
    pub notes_translated: Translated,
    /// Landing page.
    pub url: Option<String>,
    /// Free keywords.
    pub tags: Vec<Tag>,
    /// Owning organization.
    pub organization: Option<OrganizationRef>,
    /// Explicit publisher URI.
    pub publisher_uri: Option<String>,
    /// Given name of the responsible person.
    pub publisher_firstname: Option<String>,
    /// Family name of the responsible person.
    pub publisher_surname: Option<String>,
    /// Contact point name.
    pub contact_point_name: Option<String>,
    /// Contact point email.
    pub contact_point_email: Option<String>,
    /// Contact point telephone.
    pub contact_point_tel: Option<String>,
    /// Creation timestamp.
    pub metadata_created: Option<String>,
    /// Modification timestamp.
    pub metadata_modified: Option<String>,
    /// Bounding box of the dataset (WKT or GeoJSON).
    pub spatial: Option<String>,
    /// Coordinate reference system URI.
    pub reference_system: Option<String>,
    /// JSON object mapping broader mobility themes to narrower ones.
    pub mobility_theme: Option<String>,
    /// Transport modes.
    pub fluent_tags: Option<ListValue>,
    /// Network coverage, stored as a one-element list wrapping a
    /// brace-delimited list.
    pub network_coverage: Option<Vec<String>>,
    /// Georeferencing methods.
    pub georeferencing_method: Option<ListValue>,
    /// NUTS regions covered.
    pub regions_covered: Vec<String>,
    /// Countries covered.
    pub countries_covered: Vec<String>,
    /// Quality assessment per locale.
    pub quality_description_translated: Translated,
    /// Distributions.
    pub resources: Vec<ResourceRecord>,
}

impl DatasetRecord {
    /// Decodes a dataset record from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DcatError::InvalidRecord`] if the JSON does not describe a dataset.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| DcatError::InvalidRecord(e.to_string()))
    }

    /// Identifier of the owning organization, if linked.
    #[must_use]
    pub fn organization_id(&self) -> Option<&str> {
        self.organization
            .as_ref()
            .map(|org| org.id.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// A resource (distribution) record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRecord {
    /// Resource identifier.
    pub id: String,
    /// Identifier of the owning dataset.
    pub package_id: Option<String>,
    /// Explicit resource URI.
    pub uri: Option<String>,
    /// Resource name.
    pub name: Option<String>,
    /// Description per locale.
    pub description_translated: Translated,
    /// Access or download location.
    pub url: Option<String>,
    /// `upload` for files hosted by the catalog itself.
    pub url_type: Option<String>,
    /// Declared format.
    pub format: Option<String>,
    /// Media type.
    pub mimetype: Option<String>,
    /// Size in bytes.
    pub size: Option<u64>,
    /// License type URI.
    pub license_type: Option<String>,
    /// License text per locale.
    pub license_text_translated: Translated,
    /// Access condition code.
    pub conditions_access: Option<String>,
    /// Usage condition code.
    pub conditions_usage: Option<String>,
    /// Notes on access and usage per locale.
    pub additional_info_access_usage_translated: Translated,
    /// Application layer protocol.
    pub access_protocol: Option<String>,
    /// Communication method (push, pull, ...).
    pub communication_method: Option<String>,
    /// Grammar (schema language).
    pub grammar: Option<String>,
    /// Mobility data standard.
    pub data_standard: Option<String>,
    /// Free notes on the data format.
    pub format_notes: Option<String>,
    /// Character encoding.
    pub character_encoding: Option<String>,
}

impl ResourceRecord {
    /// Returns true for files uploaded to the catalog rather than linked.
    #[must_use]
    pub fn is_upload(&self) -> bool {
        self.url_type.as_deref() == Some("upload")
    }
}

/// An organization record as returned by the organization lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationRecord {
    /// Organization identifier.
    pub id: String,
    /// Organization slug.
    pub name: Option<String>,
    /// Explicit organization URI.
    pub uri: Option<String>,
    /// Organization title.
    pub title: Option<String>,
    /// Telephone of the data owner.
    pub do_tel: Option<String>,
    /// Website of the data owner.
    pub do_website: Option<String>,
    /// Email of the data owner.
    pub do_email: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Administrative area.
    pub administrative_area: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Street and number.
    pub street_address: Option<String>,
    /// Remaining keys, including locale-suffixed ones such as `display_title_nl`.
    #[serde(flatten)]
    pub extras: IndexMap<String, Value>,
}

impl OrganizationRecord {
    /// Decodes an organization record from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DcatError::InvalidRecord`] if the JSON does not describe an organization.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| DcatError::InvalidRecord(e.to_string()))
    }
}

impl FieldSource for OrganizationRecord {
    fn text_field(&self, key: &str) -> Option<&str> {
        let known = match key {
            "id" => Some(self.id.as_str()),
            "name" => self.name.as_deref(),
            "uri" => self.uri.as_deref(),
            "title" => self.title.as_deref(),
            "do_tel" => self.do_tel.as_deref(),
            "do_website" => self.do_website.as_deref(),
            "do_email" => self.do_email.as_deref(),
            "country" => self.country.as_deref(),
            "administrative_area" => self.administrative_area.as_deref(),
            "postal_code" => self.postal_code.as_deref(),
            "city" => self.city.as_deref(),
            "street_address" => self.street_address.as_deref(),
            _ => None,
        };
        known.or_else(|| self.extras.get(key).and_then(Value::as_str))
    }
}

/// Site-level details the catalog is described from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDetails {
    /// Site title.
    pub title: Option<String>,
    /// Site homepage.
    pub homepage: Option<String>,
    /// Default UI locale.
    pub locale_default: Option<String>,
    /// Last modification of any dataset.
    pub modified: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_value_comma_separated() {
        assert_eq!(split_list_value("a, b ,,c"), vec!["a", "b", "c"]);
        assert!(split_list_value("").is_empty());
    }

    #[test]
    fn test_split_list_value_json_array() {
        assert_eq!(
            split_list_value(r#"["http://x/1", "http://x/2"]"#),
            vec!["http://x/1", "http://x/2"]
        );
    }

    #[test]
    fn test_list_value_from_either_shape() {
        let list: ListValue = serde_json::from_str(r#"["bus", " tram "]"#).unwrap();
        assert_eq!(list.items(), vec!["bus", "tram"]);
        let text: ListValue = serde_json::from_str(r#""bus,tram""#).unwrap();
        assert_eq!(text.items(), vec!["bus", "tram"]);
    }

    #[test]
    fn test_dataset_defaults_for_missing_keys() {
        let dataset = DatasetRecord::from_json(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(dataset.id, "abc");
        assert!(dataset.resources.is_empty());
        assert!(dataset.network_coverage.is_none());
        assert!(dataset.organization_id().is_none());
    }

    #[test]
    fn test_dataset_rejects_wrong_shape() {
        assert!(matches!(
            DatasetRecord::from_json(r#"{"regions_covered": 3}"#),
            Err(DcatError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_organization_suffixed_fields_via_extras() {
        let org = OrganizationRecord::from_json(
            r#"{"id": "o1", "title": "NGI", "display_title_nl": "NGI-nl", "count": 3}"#,
        )
        .unwrap();
        assert_eq!(org.text_field("title"), Some("NGI"));
        assert_eq!(org.text_field("display_title_nl"), Some("NGI-nl"));
        assert_eq!(org.text_field("count"), None);
        assert_eq!(org.text_field("display_title_fr"), None);
    }

    #[test]
    fn test_resource_upload_detection() {
        let mut resource = ResourceRecord::default();
        assert!(!resource.is_upload());
        resource.url_type = Some("upload".into());
        assert!(resource.is_upload());
    }
}
