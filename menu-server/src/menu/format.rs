//! Category name formatting

/// Convert a category slug into its display name.
///
/// Hyphens become spaces and each token is capitalized on its first
/// character: `"fried-chicken"` → `"Fried Chicken"`. Empty tokens from
/// consecutive hyphens are skipped so the output never carries extra or
/// trailing spaces.
pub fn format_category_name(slug: &str) -> String {
    slug.split('-')
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
