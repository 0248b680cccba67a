//! Contact model
//!
//! A contact is a person eligible for notification. Identity is the handle
//! (`gitee_id` in the registry document); every other field is informational.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A person who can be notified about an issue or pull request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Handle on the code hosting platform (required, non-empty)
    #[serde(rename = "gitee_id", default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Organization the contact belongs to
    #[serde(default)]
    pub organization: String,

    /// Email address
    #[serde(default)]
    pub email: String,
}

impl Contact {
    /// Create a contact that only carries a handle
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A set of contacts deduplicated and ordered by handle
///
/// Inserting a contact whose handle is already present keeps the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSet {
    by_id: BTreeMap<String, Contact>,
}

impl ContactSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            by_id: BTreeMap::new(),
        }
    }

    /// Insert a contact, returns false if the handle was already present
    pub fn insert(&mut self, contact: Contact) -> bool {
        if self.by_id.contains_key(&contact.id) {
            return false;
        }
        self.by_id.insert(contact.id.clone(), contact);
        true
    }

    /// Check whether a handle is in the set
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of distinct contacts
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Handles in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.by_id.keys().map(String::as_str)
    }

    /// Contacts in handle order
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.by_id.values()
    }

    /// Copy of this set without the handles present in `other`
    #[must_use]
    pub fn without(&self, other: &Self) -> Self {
        self.iter().filter(|c| !other.contains(&c.id)).cloned().collect()
    }
}

impl Extend<Contact> for ContactSet {
    fn extend<T: IntoIterator<Item = Contact>>(&mut self, iter: T) {
        for contact in iter {
            self.insert(contact);
        }
    }
}

impl FromIterator<Contact> for ContactSet {
    fn from_iter<T: IntoIterator<Item = Contact>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a ContactSet {
    type Item = &'a Contact;
    type IntoIter = std::collections::btree_map::Values<'a, String, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_id.values()
    }
}
