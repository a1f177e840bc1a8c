//! Slug generation for listing URLs.

/// Generate a URL slug from a listing name.
///
/// Lowercases, maps runs of non-alphanumeric characters to single hyphens,
/// and trims leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use vitrina_core::naming::listing_slug;
///
/// assert_eq!(listing_slug("Acme Corp"), "acme-corp");
/// assert_eq!(listing_slug("  Joe's Pizza & Grill  "), "joe-s-pizza-grill");
/// assert_eq!(listing_slug("---"), "");
/// ```
pub fn listing_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
