//! Naming rules for Figma node names.
//!
//! Designers name component sets and variants freely (`"button / primary"`,
//! `"Has Icon=True"`). These helpers turn such names into identifiers used
//! for output file names, prop names, and duplicate detection.
//!
//! Only ASCII letters and digits are word characters; everything else is a
//! separator. Casing is ASCII-only and never locale-sensitive.
//!
//! # Examples
//!
//! ```
//! use figma_components_core::naming::{to_camel_case, to_pascal_case};
//!
//! assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
//! assert_eq!(to_camel_case("Hello World"), "helloWorld");
//! ```

/// Converts a free-form name to `PascalCase`.
///
/// The input is split on every non-alphanumeric character, empty segments
/// are dropped, and each segment is rewritten with an uppercase first letter
/// followed by lowercase letters.
///
/// # Examples
///
/// ```
/// use figma_components_core::to_pascal_case;
///
/// assert_eq!(to_pascal_case("icon button / LARGE"), "IconButtonLarge");
/// assert_eq!(to_pascal_case("--"), "");
/// ```
#[must_use]
pub fn to_pascal_case(raw: &str) -> String {
    raw.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (first, rest) = segment.split_at(1);
            let mut word = first.to_ascii_uppercase();
            word.push_str(&rest.to_ascii_lowercase());
            word
        })
        .collect()
}

/// Converts a free-form name to `camelCase`.
///
/// # Examples
///
/// ```
/// use figma_components_core::to_camel_case;
///
/// assert_eq!(to_camel_case("Has Icon"), "hasIcon");
/// assert_eq!(to_camel_case(""), "");
/// ```
#[must_use]
pub fn to_camel_case(raw: &str) -> String {
    let mut pascal = to_pascal_case(raw);
    if let Some(first) = pascal.get_mut(..1) {
        first.make_ascii_lowercase();
    }
    pascal
}

/// Normalizes a name for comparison.
///
/// Two names that differ only in separators or casing normalize to the same
/// string.
///
/// # Examples
///
/// ```
/// use figma_components_core::normalize_name;
///
/// assert_eq!(normalize_name("Button"), normalize_name("button"));
/// assert_ne!(normalize_name("Button Group"), normalize_name("button"));
/// ```
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    to_pascal_case(raw).to_ascii_lowercase()
}

/// Returns `true` if two raw names designate the same component.
///
/// # Examples
///
/// ```
/// use figma_components_core::are_same_component;
///
/// assert!(are_same_component("Text Field", "text-field"));
/// assert!(!are_same_component("Text Field", "Text"));
/// ```
#[must_use]
pub fn are_same_component(first: &str, second: &str) -> bool {
    normalize_name(first) == normalize_name(second)
}

/// Converts a `camelCase` or `PascalCase` identifier to a dashed slug.
///
/// A dash is inserted at every lowercase-to-uppercase boundary and the
/// result is lowercased.
///
/// # Examples
///
/// ```
/// use figma_components_core::naming::camel_case_to_dash;
///
/// assert_eq!(camel_case_to_dash("IconArrowLeft"), "icon-arrow-left");
/// ```
#[must_use]
pub fn camel_case_to_dash(identifier: &str) -> String {
    let mut slug = String::with_capacity(identifier.len() + 4);
    let mut previous: Option<char> = None;

    for c in identifier.chars() {
        if c.is_ascii_uppercase() && previous.is_some_and(|p| p.is_ascii_lowercase()) {
            slug.push('-');
        }
        slug.push(c);
        previous = Some(c);
    }

    slug.to_lowercase()
}
