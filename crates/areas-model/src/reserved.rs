use std::collections::BTreeSet;

/// Slugs already published elsewhere that newly generated district slugs must
/// avoid.
///
/// An empty set means nothing has been reserved yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedSlugs {
    slugs: BTreeSet<String>,
}

impl ReservedSlugs {
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slugs: slugs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedSlugs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
