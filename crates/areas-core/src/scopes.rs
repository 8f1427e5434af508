//! Per-scope tracking of slugs already handed out.
//!
//! Districts share a single flat scope that starts out holding every reserved
//! slug. Each district owns a separate scope for its sub-districts, created
//! empty on first use.

use std::collections::{BTreeMap, BTreeSet};

/// Namespace in which slug uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScopeKey {
    /// The flat namespace shared by every district.
    Districts,
    /// Sub-districts of the district with this code.
    District(String),
}

/// Outcome of claiming a slug in a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugClaim {
    /// The base slug was free.
    Fresh(String),
    /// The base slug was taken; the suffixed form was free.
    Disambiguated { base: String, slug: String },
    /// Both the base slug and the suffixed form were taken. The suffixed form
    /// is still handed out; there is no further fallback.
    Collided { base: String, slug: String },
}

impl SlugClaim {
    pub fn slug(&self) -> &str {
        match self {
            SlugClaim::Fresh(slug)
            | SlugClaim::Disambiguated { slug, .. }
            | SlugClaim::Collided { slug, .. } => slug,
        }
    }

    pub fn into_slug(self) -> String {
        match self {
            SlugClaim::Fresh(slug)
            | SlugClaim::Disambiguated { slug, .. }
            | SlugClaim::Collided { slug, .. } => slug,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlugScopes {
    scopes: BTreeMap<ScopeKey, BTreeSet<String>>,
}

impl SlugScopes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark slugs as used in `key` without claiming them through a record.
    pub fn seed<I, S>(&mut self, key: ScopeKey, slugs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes
            .entry(key)
            .or_default()
            .extend(slugs.into_iter().map(Into::into));
    }

    pub fn contains(&self, key: &ScopeKey, slug: &str) -> bool {
        self.scopes
            .get(key)
            .is_some_and(|used| used.contains(slug))
    }

    pub fn len(&self, key: &ScopeKey) -> usize {
        self.scopes.get(key).map_or(0, BTreeSet::len)
    }

    /// Claim `base` in `key`, falling back to `base-suffix` when `base` is
    /// already used. The returned slug is recorded as used either way.
    pub fn claim(&mut self, key: ScopeKey, base: String, suffix: &str) -> SlugClaim {
        let used = self.scopes.entry(key).or_default();
        let claim = if !used.contains(&base) {
            SlugClaim::Fresh(base)
        } else {
            let slug = format!("{base}-{suffix}");
            if used.contains(&slug) {
                SlugClaim::Collided { base, slug }
            } else {
                SlugClaim::Disambiguated { base, slug }
            }
        };
        used.insert(claim.slug().to_string());
        claim
    }
}
