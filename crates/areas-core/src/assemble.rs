use areas_model::{Dataset, District, State, Subdistrict};

/// Fold the three accepted collections into the output artifact.
///
/// Collections keep the order in which their rows were accepted.
pub fn assemble(
    states: Vec<State>,
    districts: Vec<District>,
    subdistricts: Vec<Subdistrict>,
) -> Dataset {
    Dataset {
        states,
        districts,
        subdistricts,
    }
}
