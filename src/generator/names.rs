//! Pure string transforms used by schema loading and exposed to templates.

/// Convert a snake_case string to PascalCase
///
/// Only the first letter of each segment is touched; the rest is kept as is.
/// Empty segments (leading, trailing or doubled underscores) disappear.
///
/// # Example
///
/// ```rust
/// use provider_gen::generator::to_pascal_case;
/// assert_eq!(to_pascal_case("ssid_details"), "SsidDetails");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// PascalCase from human text separated by spaces, dashes or underscores.
pub fn to_pascal_name(s: &str) -> String {
    to_pascal_case(&s.replace([' ', '-'], "_"))
}

/// snake_case from human text separated by spaces or dashes.
pub fn to_snake_name(s: &str) -> String {
    s.to_lowercase().replace([' ', '-'], "_")
}

/// Derive an external name from a declared field name.
///
/// Every uppercase letter after the first character starts a new segment;
/// segments are lowercased and joined with underscores. This is a plain
/// letter-boundary split, so acronyms fall apart letter by letter:
/// `HTTPPort` becomes `h_t_t_p_port`.
pub fn derive_tf_name(model_name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, c) in model_name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            words.push(current.to_lowercase());
            current.clear();
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current.to_lowercase());
    }
    words.join("_")
}

/// Dotted path from segments, e.g. `["response", "id"]` -> `response.id`.
pub fn build_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}

/// `an` when the first letter is a vowel (case-insensitive), else `a`.
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
