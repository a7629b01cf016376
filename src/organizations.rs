//! Organization lookup.
//!
//! The profiles resolve organizations through [`OrganizationLookup`], which
//! the export pipeline implements against the catalog. [`OrganizationCache`]
//! is an in-memory implementation filled once per export run.

use std::collections::HashMap;

use crate::error::{DcatError, Result};
use crate::record::OrganizationRecord;

/// Resolves organization records by identifier.
pub trait OrganizationLookup {
    /// Returns the organization with this identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DcatError::OrganizationNotFound`] if there is none; other
    /// errors are the implementor's.
    fn get_organization(&self, id: &str) -> Result<OrganizationRecord>;
}

/// Organizations resolved ahead of an export run, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct OrganizationCache {
    organizations: HashMap<String, OrganizationRecord>,
}

impl OrganizationCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an organization under its identifier, replacing any previous one.
    pub fn insert(&mut self, organization: OrganizationRecord) {
        self.organizations
            .insert(organization.id.clone(), organization);
    }

    /// Returns the number of cached organizations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }
}

impl FromIterator<OrganizationRecord> for OrganizationCache {
    fn from_iter<I: IntoIterator<Item = OrganizationRecord>>(iter: I) -> Self {
        let mut cache = Self::new();
        for organization in iter {
            cache.insert(organization);
        }
        cache
    }
}

impl OrganizationLookup for OrganizationCache {
    fn get_organization(&self, id: &str) -> Result<OrganizationRecord> {
        self.organizations
            .get(id)
            .cloned()
            .ok_or_else(|| DcatError::OrganizationNotFound(id.to_string()))
    }
}
