//! Statement sets and their serialization.
//!
//! [`RdfGraph`] is the working graph threaded through every mapping stage. It
//! keeps statements in insertion order, drops duplicates on insert and supports
//! in-place removal, which is all the layered profiles need. Serialization and
//! parsing go through the oxrdfio library.

use std::io::{Read, Write};

use indexmap::{IndexMap, IndexSet};
use oxrdf::{BlankNode, Literal, NamedNode, NamedOrBlankNode, Quad, Term, Triple};
use oxrdfio::{JsonLdProfileSet, RdfFormat as OxRdfFormat, RdfParser, RdfSerializer};
use url::Url;

use crate::config::RdfFormat;
use crate::error::{DcatError, Result};
use crate::namespaces::xsd;

/// A single RDF triple (subject, predicate, object).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RdfTriple {
    /// The subject of the triple.
    pub subject: RdfNode,
    /// The predicate (property) of the triple.
    pub predicate: String,
    /// The object of the triple.
    pub object: RdfNode,
}

impl RdfTriple {
    /// Creates a new RDF triple.
    #[must_use]
    pub fn new(subject: RdfNode, predicate: impl Into<String>, object: RdfNode) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }

    fn matches(
        &self,
        subject: Option<&RdfNode>,
        predicate: Option<&str>,
        object: Option<&RdfNode>,
    ) -> bool {
        subject.map_or(true, |s| &self.subject == s)
            && predicate.map_or(true, |p| self.predicate == p)
            && object.map_or(true, |o| &self.object == o)
    }
}

/// An RDF node (subject or object in a triple).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfNode {
    /// A named node (IRI/URI).
    Uri(String),
    /// A blank node with a local identifier.
    BlankNode(String),
    /// A literal value with optional language tag or datatype.
    Literal {
        /// The literal value.
        value: String,
        /// Optional language tag (e.g., "en", "nl").
        language: Option<String>,
        /// Optional datatype URI.
        datatype: Option<String>,
    },
}

impl RdfNode {
    /// Creates a new URI node.
    #[must_use]
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(uri.into())
    }

    /// Creates a URI node from `value` with surrounding whitespace removed,
    /// or `None` if it is not a valid absolute IRI.
    #[must_use]
    pub fn checked_uri(value: &str) -> Option<Self> {
        let value = value.trim();
        NamedNode::new(value)
            .is_ok()
            .then(|| Self::Uri(value.to_string()))
    }

    /// Creates a URI node when `value` is a valid IRI with a host, a plain
    /// literal otherwise.
    #[must_use]
    pub fn uri_or_literal(value: &str) -> Self {
        let value = value.trim();
        match Url::parse(value) {
            Ok(url) if url.has_host() && NamedNode::new(value).is_ok() => {
                Self::Uri(value.to_string())
            },
            _ => Self::literal(value),
        }
    }

    /// Creates a new blank node.
    #[must_use]
    pub fn blank(id: impl Into<String>) -> Self {
        Self::BlankNode(id.into())
    }

    /// Creates a new plain literal.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Creates a new literal with a language tag.
    #[must_use]
    pub fn literal_with_lang(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            language: Some(lang.into()),
            datatype: None,
        }
    }

    /// Creates a new typed literal.
    #[must_use]
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }

    /// Returns true if this is a URI node.
    #[must_use]
    pub const fn is_uri(&self) -> bool {
        matches!(self, Self::Uri(_))
    }

    /// Returns true if this is a blank node.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    /// Returns true if this is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    /// Returns the URI string of a named node.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    /// Returns the lexical value of a literal.
    #[must_use]
    pub fn literal_value(&self) -> Option<&str> {
        match self {
            Self::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the language tag of a literal.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Literal { language, .. } => language.as_deref(),
            _ => None,
        }
    }
}

/// An insertion-ordered, duplicate-free set of triples.
#[derive(Debug, Clone, Default)]
pub struct RdfGraph {
    /// The triples in this graph.
    triples: IndexSet<RdfTriple>,
    /// Prefixes bound for serialization.
    prefixes: IndexMap<String, String>,
    /// Counter for generating unique blank node IDs.
    blank_node_counter: usize,
}

impl RdfGraph {
    /// Creates a new empty RDF graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple to the graph. Returns false if it was already present.
    pub fn add_triple(&mut self, triple: RdfTriple) -> bool {
        self.triples.insert(triple)
    }

    /// Adds a triple from components.
    pub fn add(&mut self, subject: RdfNode, predicate: impl Into<String>, object: RdfNode) {
        self.add_triple(RdfTriple::new(subject, predicate, object));
    }

    /// Removes one triple. Returns true if it was present.
    pub fn remove(&mut self, subject: &RdfNode, predicate: &str, object: &RdfNode) -> bool {
        self.triples
            .shift_remove(&RdfTriple::new(subject.clone(), predicate, object.clone()))
    }

    /// Removes every triple matching the pattern; `None` is a wildcard.
    ///
    /// Returns the number of triples removed.
    pub fn remove_matching(
        &mut self,
        subject: Option<&RdfNode>,
        predicate: Option<&str>,
        object: Option<&RdfNode>,
    ) -> usize {
        let before = self.triples.len();
        self.triples
            .retain(|t| !t.matches(subject, predicate, object));
        before - self.triples.len()
    }

    /// Keeps only the triples for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&RdfTriple) -> bool) {
        self.triples.retain(keep);
    }

    /// Rewrites the predicate of every triple using `from` to `to`, keeping
    /// subject and object. Returns the number of triples rewritten.
    pub fn rename_predicate(&mut self, from: &str, to: &str) -> usize {
        let matched: Vec<RdfTriple> = self.matching(None, Some(from), None).cloned().collect();
        for triple in &matched {
            self.triples.shift_remove(triple);
            self.add(triple.subject.clone(), to, triple.object.clone());
        }
        matched.len()
    }

    /// Returns true if the graph contains the triple.
    #[must_use]
    pub fn contains(&self, subject: &RdfNode, predicate: &str, object: &RdfNode) -> bool {
        self.triples
            .contains(&RdfTriple::new(subject.clone(), predicate, object.clone()))
    }

    /// Iterates over triples matching the pattern; `None` is a wildcard.
    pub fn matching<'a>(
        &'a self,
        subject: Option<&'a RdfNode>,
        predicate: Option<&'a str>,
        object: Option<&'a RdfNode>,
    ) -> impl Iterator<Item = &'a RdfTriple> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.matches(subject, predicate, object))
    }

    /// Iterates over the objects of `subject predicate ?o`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a RdfNode,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a RdfNode> + 'a {
        self.matching(Some(subject), Some(predicate), None)
            .map(|t| &t.object)
    }

    /// Returns the first object of `subject predicate ?o`, in insertion order.
    #[must_use]
    pub fn first_object(&self, subject: &RdfNode, predicate: &str) -> Option<RdfNode> {
        self.objects(subject, predicate).next().cloned()
    }

    /// Generates a new unique blank node ID.
    pub fn new_blank_node(&mut self) -> RdfNode {
        self.blank_node_counter += 1;
        RdfNode::blank(format!("b{}", self.blank_node_counter))
    }

    /// Binds a prefix used when serializing to prefix-aware formats.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Returns the bound prefixes.
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Returns the number of triples in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns an iterator over the triples.
    pub fn triples(&self) -> impl Iterator<Item = &RdfTriple> {
        self.triples.iter()
    }

    /// Serializes the graph to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if a term is not a valid IRI or serialization fails.
    pub fn serialize(&self, format: RdfFormat) -> Result<String> {
        let mut output = Vec::new();
        self.serialize_to_writer(&mut output, format)?;
        String::from_utf8(output).map_err(|e| DcatError::ParseError(e.to_string()))
    }

    /// Serializes the graph to a writer in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if a term is not a valid IRI or serialization fails.
    pub fn serialize_to_writer<W: Write>(&self, writer: W, format: RdfFormat) -> Result<()> {
        let mut serializer = RdfSerializer::from_format(to_oxrdf_format(format));
        for (prefix, namespace) in &self.prefixes {
            serializer = serializer
                .with_prefix(prefix.as_str(), namespace.as_str())
                .map_err(|e| DcatError::ParseError(format!("Invalid prefix IRI: {e}")))?;
        }
        let mut serializer = serializer.for_writer(writer);

        for triple in &self.triples {
            let ox_triple = to_oxrdf_triple(triple)?;
            serializer
                .serialize_triple(&ox_triple)
                .map_err(|e| io_error(&e))?;
        }

        serializer
            .finish()
            .map_err(|e| io_error(&e))?;
        Ok(())
    }

    /// Parses an RDF graph from a reader in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn parse_from_reader<R: Read>(reader: R, format: RdfFormat) -> Result<Self> {
        let parser = RdfParser::from_format(to_oxrdf_format(format)).for_reader(reader);

        let mut graph = Self::new();
        for result in parser {
            let quad = result.map_err(|e| DcatError::ParseError(e.to_string()))?;
            graph.add_triple(from_oxrdf_quad(&quad)?);
        }

        Ok(graph)
    }

    /// Parses an RDF graph from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn parse(input: &str, format: RdfFormat) -> Result<Self> {
        Self::parse_from_reader(input.as_bytes(), format)
    }
}

/// Converts our [`RdfFormat`] to oxrdfio's format.
fn to_oxrdf_format(format: RdfFormat) -> OxRdfFormat {
    match format {
        RdfFormat::RdfXml => OxRdfFormat::RdfXml,
        RdfFormat::JsonLd => OxRdfFormat::JsonLd {
            profile: JsonLdProfileSet::default(),
        },
        RdfFormat::Turtle => OxRdfFormat::Turtle,
        RdfFormat::NTriples => OxRdfFormat::NTriples,
    }
}

fn io_error(e: &impl std::fmt::Display) -> DcatError {
    DcatError::IoError(std::io::Error::new(
        std::io::ErrorKind::Other,
        e.to_string(),
    ))
}

fn named_node(iri: &str) -> Result<NamedNode> {
    NamedNode::new(iri).map_err(|e| DcatError::ParseError(format!("Invalid URI {iri}: {e}")))
}

fn blank_node(id: &str) -> Result<BlankNode> {
    BlankNode::new(id).map_err(|e| DcatError::ParseError(format!("Invalid blank node ID: {e}")))
}

/// Converts an [`RdfTriple`] to an oxrdf Triple.
fn to_oxrdf_triple(triple: &RdfTriple) -> Result<Triple> {
    let subject = match &triple.subject {
        RdfNode::Uri(uri) => NamedOrBlankNode::NamedNode(named_node(uri)?),
        RdfNode::BlankNode(id) => NamedOrBlankNode::BlankNode(blank_node(id)?),
        RdfNode::Literal { .. } => {
            return Err(DcatError::ParseError(
                "Literals cannot be triple subjects".into(),
            ));
        },
    };

    let predicate = named_node(&triple.predicate)?;

    let object = match &triple.object {
        RdfNode::Uri(uri) => Term::NamedNode(named_node(uri)?),
        RdfNode::BlankNode(id) => Term::BlankNode(blank_node(id)?),
        RdfNode::Literal {
            value,
            language,
            datatype,
        } => {
            let lit = if let Some(lang) = language {
                Literal::new_language_tagged_literal(value, lang)
                    .map_err(|e| DcatError::ParseError(format!("Invalid language tag: {e}")))?
            } else if let Some(dt) = datatype {
                Literal::new_typed_literal(value, named_node(dt)?)
            } else {
                Literal::new_simple_literal(value)
            };
            Term::Literal(lit)
        },
    };

    Ok(Triple::new(subject, predicate, object))
}

/// Converts an oxrdf Quad back to our [`RdfTriple`].
fn from_oxrdf_quad(quad: &Quad) -> Result<RdfTriple> {
    let subject = match &quad.subject {
        NamedOrBlankNode::NamedNode(n) => RdfNode::Uri(n.as_str().to_string()),
        NamedOrBlankNode::BlankNode(b) => RdfNode::BlankNode(b.as_str().to_string()),
        #[allow(unreachable_patterns)]
        _ => {
            return Err(DcatError::ParseError("Unsupported subject type".into()));
        },
    };

    let predicate = quad.predicate.as_str().to_string();

    let object = match &quad.object {
        Term::NamedNode(n) => RdfNode::Uri(n.as_str().to_string()),
        Term::BlankNode(b) => RdfNode::BlankNode(b.as_str().to_string()),
        Term::Literal(lit) => {
            let language = lit.language().map(String::from);
            let datatype = if language.is_none() && lit.datatype().as_str() != xsd::STRING {
                Some(lit.datatype().as_str().to_string())
            } else {
                None
            };
            RdfNode::Literal {
                value: lit.value().to_string(),
                language,
                datatype,
            }
        },
        #[allow(unreachable_patterns)]
        _ => {
            return Err(DcatError::ParseError("Unsupported object type".into()));
        },
    };

    Ok(RdfTriple::new(subject, predicate, object))
}
