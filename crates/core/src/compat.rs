//! Shelf compatibility rules.
//!
//! A shelf starts open. Its first placement locks it to the set of categories
//! the rules allow next to that item's category; the lock is permanent.

use std::collections::{BTreeSet, HashMap};

/// Mapping from a category to the categories allowed to share its shelf.
///
/// The mapping is not required to be symmetric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityRules {
    rules: HashMap<String, BTreeSet<String>>,
}

impl CompatibilityRules {
    /// Creates an empty rule table: every category locks to itself only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rule for `category`.
    pub fn with_rule<I, S>(mut self, category: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules
            .insert(category.into(), allowed.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the explicit rule for `category`, if any.
    pub fn get(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.rules.get(category)
    }

    /// Set a shelf is locked to when its first item has `category`.
    pub fn lock_for(&self, category: &str) -> BTreeSet<String> {
        self.rules
            .get(category)
            .cloned()
            .unwrap_or_else(|| BTreeSet::from([category.to_string()]))
    }

    /// Number of explicit rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if there are no explicit rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K, I, S> FromIterator<(K, I)> for CompatibilityRules
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |rules, (category, allowed)| {
                rules.with_rule(category, allowed)
            })
    }
}

/// Compatibility state of a single shelf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ShelfCompatibility {
    /// No placement yet; any category is accepted.
    #[default]
    Open,
    /// Locked to a fixed set of categories.
    Locked(BTreeSet<String>),
}

impl ShelfCompatibility {
    /// Builds a state from a persisted set; an empty set means open.
    pub fn from_set(set: BTreeSet<String>) -> Self {
        if set.is_empty() {
            Self::Open
        } else {
            Self::Locked(set)
        }
    }

    /// True if the shelf has not been locked yet.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// True if an item of `category` may be placed on the shelf.
    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::Open => true,
            Self::Locked(allowed) => allowed.contains(category),
        }
    }

    /// Locks an open shelf for a first item of `category`. Locked shelves are
    /// left untouched.
    ///
    /// An empty rule leaves the shelf open, so the next placement locks it
    /// again.
    pub fn lock(&mut self, rules: &CompatibilityRules, category: &str) {
        if self.is_open() {
            *self = Self::from_set(rules.lock_for(category));
        }
    }

    /// The locked set, if any.
    pub fn locked_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Open => None,
            Self::Locked(allowed) => Some(allowed),
        }
    }
}
