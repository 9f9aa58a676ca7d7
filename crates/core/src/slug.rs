//! URL slugs for service pages.

use crate::error::CoreError;

/// Maximum slug length in characters.
pub const MAX_SLUG_LENGTH: usize = 120;

/// Generate a URL-safe slug from a title.
///
/// Lowercases, turns every non-alphanumeric run into a single hyphen and
/// trims hyphens from both ends. `"Web & Mobile Apps"` becomes
/// `"web-mobile-apps"`.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut prev_hyphen = true;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    let mut slug = slug.trim_end_matches('-').to_string();
    slug.truncate(MAX_SLUG_LENGTH);
    slug.trim_end_matches('-').to_string()
}

/// Validate a slug: non-empty, lowercase alphanumerics and hyphens only.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LENGTH} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(generate_slug("Web & Mobile Apps"), "web-mobile-apps");
        assert_eq!(generate_slug("  Cloud--Migration!! "), "cloud-migration");
    }

    #[test]
    fn slug_of_symbols_is_empty() {
        assert_eq!(generate_slug("***"), "");
        assert!(validate_slug(&generate_slug("***")).is_err());
    }

    #[test]
    fn slug_is_truncated() {
        let slug = generate_slug(&"a ".repeat(200));
        assert!(slug.len() <= MAX_SLUG_LENGTH);
        assert!(!slug.ends_with('-'));
        assert!(validate_slug(&slug).is_ok());
    }

    #[test]
    fn validate_rejects_uppercase() {
        assert!(validate_slug("Web-Design").is_err());
        assert!(validate_slug("web-design-2").is_ok());
    }
}
