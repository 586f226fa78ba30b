//! Naming helpers shared by the parser and the code generator.

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Pluralizes an English identifier segment.
///
/// Handles the `y` → `ies` and sibilant → `es` endings; everything else
/// takes a plain `s`. Pluralization is applied to the final word only, so
/// `OrderNumber` becomes `OrderNumbers` and `order_number` becomes
/// `order_numbers`.
#[must_use]
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    if let Some(stem) = s.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
            return format!("{stem}ies");
        }
    }
    if s.ends_with('s') {
        // Already plural or uncountable ("News"); collection_name falls
        // back to the List suffix for these.
        return s.to_string();
    }
    if s.ends_with('x') || s.ends_with("ch") || s.ends_with("sh") {
        return format!("{s}es");
    }
    format!("{s}s")
}

/// Derives the generated collection type name for an entity.
///
/// The default is the pluralized entity name (`Tag` → `Tags`,
/// `Category` → `Categories`). When the caller forces the list suffix, or
/// when pluralization is a no-op (uncountable names like `News`), the name
/// falls back to `<Entity>List`.
#[must_use]
pub fn collection_name(entity: &str, use_list_suffix: bool) -> String {
    let plural = pluralize(entity);
    if use_list_suffix || plural == entity {
        return format!("{entity}List");
    }
    plural
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("OrderNumber"), "order_number");
        assert_eq!(to_snake_case("id"), "id");
        assert_eq!(to_snake_case("NewsList"), "news_list");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("order_number"), "OrderNumber");
        assert_eq!(to_pascal_case("tag"), "Tag");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("Tag"), "Tags");
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize("News"), "News");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn test_collection_name() {
        assert_eq!(collection_name("Tag", false), "Tags");
        assert_eq!(collection_name("Category", false), "Categories");
        assert_eq!(collection_name("Tag", true), "TagList");
        assert_eq!(collection_name("News", false), "NewsList");
    }
}
