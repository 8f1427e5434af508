use areas_model::Tier;

/// Row counts for one tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierStats {
    pub seen: usize,
    pub accepted: usize,
    pub filtered: usize,
}

/// A record whose base slug was already in use in its scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
    pub tier: Tier,
    pub code: String,
    pub base: String,
    pub slug: String,
}

/// What happened during a build, beyond the dataset itself.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub states: TierStats,
    pub districts: TierStats,
    pub subdistricts: TierStats,
    pub reserved: usize,
    /// Collisions resolved by the parent-slug suffix.
    pub disambiguated: Vec<SlugCollision>,
    /// Collisions where the suffixed slug was also taken.
    pub unresolved: Vec<SlugCollision>,
}

impl BuildReport {
    pub fn tier(&self, tier: Tier) -> &TierStats {
        match tier {
            Tier::State => &self.states,
            Tier::District => &self.districts,
            Tier::Subdistrict => &self.subdistricts,
        }
    }

    pub fn has_unresolved(&self) -> bool {
        !self.unresolved.is_empty()
    }
}
