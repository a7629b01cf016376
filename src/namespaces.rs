//! Vocabulary namespaces and term IRIs.
//!
//! Terms are spelled out as full IRIs, grouped per vocabulary. The DCAT-AP and
//! mobilityDCAT-AP term lists are published by their standards bodies, so the
//! strings here must stay bit-exact.

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// XML Schema namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// DCAT namespace.
pub const DCAT: &str = "http://www.w3.org/ns/dcat#";

/// Dublin Core terms namespace.
pub const DCT: &str = "http://purl.org/dc/terms/";

/// FOAF namespace.
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";

/// vCard namespace.
pub const VCARD: &str = "http://www.w3.org/2006/vcard/ns#";

/// ISA Core Location namespace.
pub const LOCN: &str = "http://www.w3.org/ns/locn#";

/// SKOS namespace.
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

/// W3C Organization ontology namespace.
pub const ORG: &str = "http://www.w3.org/ns/org#";

/// mobilityDCAT-AP namespace.
pub const MOBILITYDCATAP: &str = "https://w3id.org/mobilitydcat-ap#";

/// Data Quality Vocabulary namespace.
pub const DQV: &str = "http://www.w3.org/ns/dqv#";

/// Web Annotation namespace.
pub const OA: &str = "http://www.w3.org/ns/oa#";

/// Representing Content in RDF namespace.
pub const CNT: &str = "http://www.w3.org/2011/content#";

/// Prefixes bound on every graph produced by a profile.
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("xsd", XSD),
    ("dcat", DCAT),
    ("dct", DCT),
    ("foaf", FOAF),
    ("vcard", VCARD),
    ("locn", LOCN),
    ("skos", SKOS),
    ("org", ORG),
    ("mobilitydcatap", MOBILITYDCATAP),
    ("dqv", DQV),
    ("oa", OA),
    ("cnt", CNT),
];

/// rdf: terms.
pub mod rdf {
    /// rdf:type
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// rdf:value
    pub const VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";
}

/// rdfs: terms.
pub mod rdfs {
    /// rdfs:label
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// xsd: datatypes.
pub mod xsd {
    /// xsd:string
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// xsd:date
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// xsd:dateTime
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// xsd:decimal
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
}

/// dcat: terms.
pub mod dcat {
    /// dcat:Catalog
    pub const CATALOG: &str = "http://www.w3.org/ns/dcat#Catalog";
    /// dcat:CatalogRecord
    pub const CATALOG_RECORD: &str = "http://www.w3.org/ns/dcat#CatalogRecord";
    /// dcat:Dataset
    pub const DATASET_CLASS: &str = "http://www.w3.org/ns/dcat#Dataset";
    /// dcat:Distribution
    pub const DISTRIBUTION_CLASS: &str = "http://www.w3.org/ns/dcat#Distribution";
    /// dcat:dataset
    pub const DATASET: &str = "http://www.w3.org/ns/dcat#dataset";
    /// dcat:distribution
    pub const DISTRIBUTION: &str = "http://www.w3.org/ns/dcat#distribution";
    /// dcat:contactPoint
    pub const CONTACT_POINT: &str = "http://www.w3.org/ns/dcat#contactPoint";
    /// dcat:keyword
    pub const KEYWORD: &str = "http://www.w3.org/ns/dcat#keyword";
    /// dcat:landingPage
    pub const LANDING_PAGE: &str = "http://www.w3.org/ns/dcat#landingPage";
    /// dcat:accessURL
    pub const ACCESS_URL: &str = "http://www.w3.org/ns/dcat#accessURL";
    /// dcat:downloadURL
    pub const DOWNLOAD_URL: &str = "http://www.w3.org/ns/dcat#downloadURL";
    /// dcat:byteSize
    pub const BYTE_SIZE: &str = "http://www.w3.org/ns/dcat#byteSize";
    /// dcat:mediaType
    pub const MEDIA_TYPE: &str = "http://www.w3.org/ns/dcat#mediaType";
    /// dcat:bbox
    pub const BBOX: &str = "http://www.w3.org/ns/dcat#bbox";
    /// dcat:themeTaxonomy
    pub const THEME_TAXONOMY: &str = "http://www.w3.org/ns/dcat#themeTaxonomy";
}

/// dct: terms.
pub mod dct {
    /// dct:title
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    /// dct:description
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    /// dct:identifier
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
    /// dct:publisher
    pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
    /// dct:language
    pub const LANGUAGE: &str = "http://purl.org/dc/terms/language";
    /// dct:license
    pub const LICENSE: &str = "http://purl.org/dc/terms/license";
    /// dct:rights
    pub const RIGHTS: &str = "http://purl.org/dc/terms/rights";
    /// dct:type
    pub const TYPE: &str = "http://purl.org/dc/terms/type";
    /// dct:issued
    pub const ISSUED: &str = "http://purl.org/dc/terms/issued";
    /// dct:modified
    pub const MODIFIED: &str = "http://purl.org/dc/terms/modified";
    /// dct:spatial
    pub const SPATIAL: &str = "http://purl.org/dc/terms/spatial";
    /// dct:format
    pub const FORMAT: &str = "http://purl.org/dc/terms/format";
    /// dct:conformsTo
    pub const CONFORMS_TO: &str = "http://purl.org/dc/terms/conformsTo";
    /// dct:LicenseDocument
    pub const LICENSE_DOCUMENT: &str = "http://purl.org/dc/terms/LicenseDocument";
    /// dct:RightsStatement
    pub const RIGHTS_STATEMENT: &str = "http://purl.org/dc/terms/RightsStatement";
    /// dct:LinguisticSystem
    pub const LINGUISTIC_SYSTEM: &str = "http://purl.org/dc/terms/LinguisticSystem";
    /// dct:Location
    pub const LOCATION: &str = "http://purl.org/dc/terms/Location";
}

/// foaf: terms.
pub mod foaf {
    /// foaf:Agent
    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
    /// foaf:Organization
    pub const ORGANIZATION: &str = "http://xmlns.com/foaf/0.1/Organization";
    /// foaf:Person
    pub const PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
    /// foaf:name
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
    /// foaf:firstName
    pub const FIRST_NAME: &str = "http://xmlns.com/foaf/0.1/firstName";
    /// foaf:surname
    pub const SURNAME: &str = "http://xmlns.com/foaf/0.1/surname";
    /// foaf:phone
    pub const PHONE: &str = "http://xmlns.com/foaf/0.1/phone";
    /// foaf:mbox
    pub const MBOX: &str = "http://xmlns.com/foaf/0.1/mbox";
    /// foaf:homepage
    pub const HOMEPAGE: &str = "http://xmlns.com/foaf/0.1/homepage";
    /// foaf:workplaceHomepage
    pub const WORKPLACE_HOMEPAGE: &str = "http://xmlns.com/foaf/0.1/workplaceHomepage";
    /// foaf:primaryTopic
    pub const PRIMARY_TOPIC: &str = "http://xmlns.com/foaf/0.1/primaryTopic";
}

/// vcard: terms.
pub mod vcard {
    /// vcard:Kind
    pub const KIND: &str = "http://www.w3.org/2006/vcard/ns#Kind";
    /// vcard:fn
    pub const FN: &str = "http://www.w3.org/2006/vcard/ns#fn";
    /// vcard:hasEmail
    pub const HAS_EMAIL: &str = "http://www.w3.org/2006/vcard/ns#hasEmail";
    /// vcard:hasTelephone
    pub const HAS_TELEPHONE: &str = "http://www.w3.org/2006/vcard/ns#hasTelephone";
}

/// locn: terms.
pub mod locn {
    /// locn:Address
    pub const ADDRESS_CLASS: &str = "http://www.w3.org/ns/locn#Address";
    /// locn:address
    pub const ADDRESS: &str = "http://www.w3.org/ns/locn#address";
    /// locn:geometry
    pub const GEOMETRY: &str = "http://www.w3.org/ns/locn#geometry";
    /// locn:adminUnitL1
    pub const ADMIN_UNIT_L1: &str = "http://www.w3.org/ns/locn#adminUnitL1";
    /// locn:adminUnitL2
    pub const ADMIN_UNIT_L2: &str = "http://www.w3.org/ns/locn#adminUnitL2";
    /// locn:postCode
    pub const POST_CODE: &str = "http://www.w3.org/ns/locn#postCode";
    /// locn:postName
    pub const POST_NAME: &str = "http://www.w3.org/ns/locn#postName";
    /// locn:thoroughfare
    pub const THOROUGHFARE: &str = "http://www.w3.org/ns/locn#thoroughfare";
}

/// skos: terms.
pub mod skos {
    /// skos:inScheme
    pub const IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";
}

/// org: terms.
pub mod org {
    /// org:memberOf
    pub const MEMBER_OF: &str = "http://www.w3.org/ns/org#memberOf";
}

/// mobilitydcatap: terms.
pub mod mobilitydcatap {
    /// mobilitydcatap:mobilityTheme
    pub const MOBILITY_THEME: &str = "https://w3id.org/mobilitydcat-ap#mobilityTheme";
    /// mobilitydcatap:transportMode
    pub const TRANSPORT_MODE: &str = "https://w3id.org/mobilitydcat-ap#transportMode";
    /// mobilitydcatap:networkCoverage
    pub const NETWORK_COVERAGE: &str = "https://w3id.org/mobilitydcat-ap#networkCoverage";
    /// mobilitydcatap:georeferencingMethod
    pub const GEOREFERENCING_METHOD: &str =
        "https://w3id.org/mobilitydcat-ap#georeferencingMethod";
    /// mobilitydcatap:applicationLayerProtocol
    pub const APPLICATION_LAYER_PROTOCOL: &str =
        "https://w3id.org/mobilitydcat-ap#applicationLayerProtocol";
    /// mobilitydcatap:communicationMethod
    pub const COMMUNICATION_METHOD: &str = "https://w3id.org/mobilitydcat-ap#communicationMethod";
    /// mobilitydcatap:grammar
    pub const GRAMMAR: &str = "https://w3id.org/mobilitydcat-ap#grammar";
    /// mobilitydcatap:mobilityDataStandard
    pub const MOBILITY_DATA_STANDARD: &str =
        "https://w3id.org/mobilitydcat-ap#mobilityDataStandard";
    /// mobilitydcatap:dataFormatNotes
    pub const DATA_FORMAT_NOTES: &str = "https://w3id.org/mobilitydcat-ap#dataFormatNotes";
}

/// dqv: terms.
pub mod dqv {
    /// dqv:QualityAnnotation
    pub const QUALITY_ANNOTATION: &str = "http://www.w3.org/ns/dqv#QualityAnnotation";
    /// dqv:hasQualityAnnotation
    pub const HAS_QUALITY_ANNOTATION: &str = "http://www.w3.org/ns/dqv#hasQualityAnnotation";
}

/// oa: terms.
pub mod oa {
    /// oa:TextualBody
    pub const TEXTUAL_BODY: &str = "http://www.w3.org/ns/oa#TextualBody";
    /// oa:hasBody
    pub const HAS_BODY: &str = "http://www.w3.org/ns/oa#hasBody";
}

/// cnt: terms.
pub mod cnt {
    /// cnt:characterEncoding
    pub const CHARACTER_ENCODING: &str = "http://www.w3.org/2011/content#characterEncoding";
}

/// Controlled vocabularies referenced by value.
pub mod authority {
    /// EU data-theme taxonomy.
    pub const DATA_THEME: &str = "http://publications.europa.eu/resource/authority/data-theme";
    /// NUTS region scheme.
    pub const NUTS: &str = "http://data.europa.eu/nuts";
    /// EU country authority scheme, as published in the mobility export.
    pub const COUNTRY_SCHEME: &str = "https://publications.europa.eu/resource/authority/country";
    /// Belgium in the EU country authority list.
    pub const BELGIUM: &str = "http://publications.europa.eu/resource/authority/country/BEL";
    /// The three Belgian NUTS level-1 regions.
    pub const BELGIAN_REGIONS: [&str; 3] = [
        "http://data.europa.eu/nuts/code/BE1",
        "http://data.europa.eu/nuts/code/BE2",
        "http://data.europa.eu/nuts/code/BE3",
    ];
    /// Plain-text file type.
    pub const PLAIN_TEXT: &str = "http://publications.europa.eu/resource/authority/file-type/TXT";
    /// EPSG CRS prefix as it wrongly arrives, with an `https` scheme.
    pub const EPSG_HTTPS: &str = "https://www.opengis.net/def/crs/EPSG/";
    /// EPSG CRS prefix as registered.
    pub const EPSG_HTTP: &str = "http://www.opengis.net/def/crs/EPSG/";
}
