//! The fixed set of states a dataset is built for.
//!
//! Source labels are matched after trimming and uppercasing; the display name
//! is the curated spelling used for both the state's `name` and its slug.

/// Uppercase source label paired with its display name.
pub const RECOGNIZED_STATES: [(&str, &str); 5] = [
    ("TAMIL NADU", "Tamil Nadu"),
    ("KERALA", "Kerala"),
    ("KARNATAKA", "Karnataka"),
    ("ANDHRA PRADESH", "Andhra Pradesh"),
    ("TELANGANA", "Telangana"),
];

/// Resolve a raw source label to its curated display name.
///
/// Returns `None` for any state outside [`RECOGNIZED_STATES`].
pub fn recognize_state(label: &str) -> Option<&'static str> {
    let key = label.trim().to_uppercase();
    RECOGNIZED_STATES
        .iter()
        .find(|(source, _)| *source == key)
        .map(|(_, display)| *display)
}
