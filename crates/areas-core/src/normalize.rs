//! Text normalization for region names and slugs.
//!
//! Both functions are total: any input, including empty or purely
//! punctuation text, produces a value. An empty slug is still a slug and
//! takes part in collision checks like any other.

/// Convert a raw region name to its display form.
///
/// The text is trimmed and lowercased, split on runs of whitespace, and each
/// token gets an uppercase first letter. Tokens are rejoined with single
/// spaces, so collapsed delimiters never leave extra spacing behind.
///
/// # Example
/// ```
/// use areas_core::normalize::canonicalize_name;
///
/// assert_eq!(canonicalize_name("  NORTH   CHENNAI "), "North Chennai");
/// assert_eq!(canonicalize_name("t. nagar"), "T. Nagar");
/// assert_eq!(canonicalize_name("   "), "");
/// ```
pub fn canonicalize_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut name = String::with_capacity(lowered.len());
    for (idx, token) in lowered.split_whitespace().enumerate() {
        if idx > 0 {
            name.push(' ');
        }
        capitalize_into(token, &mut name);
    }
    name
}

fn capitalize_into(token: &str, out: &mut String) {
    let mut chars = token.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

/// Convert text to a URL-safe slug over `[a-z0-9-]`.
///
/// Steps, in order:
/// 1. trim and ASCII-lowercase
/// 2. `&` becomes `and`
/// 3. parentheses and apostrophes are removed without a replacement
/// 4. every run of other characters outside `[a-z0-9]` becomes one `-`
/// 5. no leading, trailing or doubled hyphens remain
///
/// # Example
/// ```
/// use areas_core::normalize::slugify;
///
/// assert_eq!(slugify("T. Nagar"), "t-nagar");
/// assert_eq!(slugify("Jammu & Kashmir"), "jammu-and-kashmir");
/// assert_eq!(slugify("Ranga Reddy (Urban)"), "ranga-reddy-urban");
/// assert_eq!(slugify("---"), "");
/// ```
pub fn slugify(raw: &str) -> String {
    let lowered = raw.trim().to_ascii_lowercase().replace('&', "and");
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for ch in lowered.chars() {
        match ch {
            '(' | ')' | '\'' => {}
            'a'..='z' | '0'..='9' => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            }
            _ => pending_hyphen = true,
        }
    }
    slug
}

/// Slug candidate for a district or sub-district name.
///
/// The name is canonicalized first so that slugs follow the same token
/// boundaries as the display name stored next to them.
pub fn name_slug(raw: &str) -> String {
    slugify(&canonicalize_name(raw))
}
