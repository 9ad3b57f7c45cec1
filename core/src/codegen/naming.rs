#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Turns wire names into target identifiers.
//!
//! - `sanitize`: `user_id` / `user-id` / `user.id` -> `userId`
//! - `disambiguate`: reserved words get a type-category suffix (`class` -> `classBoolean`)
//! - `NameTable`: keeps identifiers unique within one scope (`id`, `id2`, ...)
//! - `singularize`: best-effort plural stripping for promoted type names
//!
//! Reserved words come from the syntax strategy; plural rules are static data.

use crate::codegen::models::TypeCategory;
use indexmap::IndexSet;

/// Characters that start a new word in a wire name.
const SEPARATORS: &[char] = &['_', '-', '.'];

/// Plural suffix -> singular replacement, checked in order.
///
/// Heuristic only: irregular plurals (`people`, `statuses`) come out wrong.
const PLURAL_RULES: &[(&str, &str)] = &[("ies", "y"), ("es", ""), ("s", "")];

/// Collapses separators followed by a letter into the upper-cased letter.
///
/// Every other character, including a separator not followed by a letter, is kept.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if SEPARATORS.contains(&c) {
            if let Some(next) = chars.peek().copied().filter(|n| n.is_alphabetic()) {
                out.extend(next.to_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Upper-cases the first character only.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strips a plural suffix: `categories` -> `category`, `addresses` -> `address`,
/// `cars` -> `car`. Names without a known suffix come back unchanged.
pub fn singularize(plural: &str) -> String {
    for (suffix, replacement) in PLURAL_RULES {
        if let Some(stem) = plural.strip_suffix(suffix) {
            return format!("{}{}", stem, replacement);
        }
    }
    plural.to_string()
}

/// Appends the category suffix when `identifier` is a reserved word.
pub fn disambiguate(identifier: &str, reserved: &[&str], category: TypeCategory) -> String {
    if reserved.contains(&identifier) {
        format!("{}{}", identifier, category.suffix())
    } else {
        identifier.to_string()
    }
}

/// Identifiers already handed out within one scope.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    taken: IndexSet<String>,
}

impl NameTable {
    /// A table with some names already reserved.
    pub fn with_taken<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Claims `candidate`, appending `2`, `3`, ... until it is free.
    pub fn claim(&mut self, candidate: &str) -> String {
        let mut name = candidate.to_string();
        let mut counter = 2;
        while self.taken.contains(&name) {
            name = format!("{}{}", candidate, counter);
            counter += 1;
        }
        self.taken.insert(name.clone());
        name
    }
}

/// Result of naming a wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Final identifier, unique in its scope.
    pub name: String,
    /// Original wire name, present only when it differs from `name`.
    pub alias: Option<String>,
}

/// Applies sanitization, reserved-word handling and uniqueness in one step.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierNamer<'a> {
    reserved: &'a [&'a str],
}

impl<'a> IdentifierNamer<'a> {
    /// Creates a namer for the given reserved-word set.
    pub fn new(reserved: &'a [&'a str]) -> Self {
        Self { reserved }
    }

    /// Names a wire name within `scope`.
    pub fn name(&self, wire_name: &str, category: TypeCategory, scope: &mut NameTable) -> Identifier {
        let sanitized = sanitize(wire_name);
        let candidate = disambiguate(&sanitized, self.reserved, category);
        let name = scope.claim(&candidate);
        let alias = (name != wire_name).then(|| wire_name.to_string());
        Identifier { name, alias }
    }

    /// Name for a type promoted from an anonymous object under `property`.
    pub fn promoted_type_name(&self, property: &str, scope: &mut NameTable) -> String {
        let base = capitalize(&singularize(&sanitize(property)));
        let base = if base.is_empty() { "Nested".to_string() } else { base };
        scope.claim(&base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVED: &[&str] = &["class", "default", "new"];

    #[test]
    fn test_sanitize_separators() {
        assert_eq!(sanitize("user_id"), "userId");
        assert_eq!(sanitize("content-type"), "contentType");
        assert_eq!(sanitize("meta.created_at"), "metaCreatedAt");
        assert_eq!(sanitize("plain"), "plain");
    }

    #[test]
    fn test_sanitize_keeps_non_letter_followers() {
        assert_eq!(sanitize("line_1"), "line_1");
        assert_eq!(sanitize("trailing_"), "trailing_");
        assert_eq!(sanitize("a__b"), "a_B");
        assert_eq!(sanitize("$weird name"), "$weird name");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("cars"), "car");
        assert_eq!(singularize("data"), "data");
        // Known heuristic miss.
        assert_eq!(singularize("shoes"), "sho");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("category"), "Category");
        assert_eq!(capitalize("userID"), "UserID");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_disambiguate_reserved() {
        assert_eq!(
            disambiguate("class", RESERVED, TypeCategory::Boolean),
            "classBoolean"
        );
        assert_eq!(
            disambiguate("new", RESERVED, TypeCategory::Array),
            "newArray"
        );
        assert_eq!(disambiguate("name", RESERVED, TypeCategory::String), "name");
    }

    #[test]
    fn test_name_tracks_alias() {
        let namer = IdentifierNamer::new(RESERVED);
        let mut scope = NameTable::default();

        let plain = namer.name("name", TypeCategory::String, &mut scope);
        assert_eq!(plain.name, "name");
        assert_eq!(plain.alias, None);

        let renamed = namer.name("first_name", TypeCategory::String, &mut scope);
        assert_eq!(renamed.name, "firstName");
        assert_eq!(renamed.alias.as_deref(), Some("first_name"));

        let reserved = namer.name("default", TypeCategory::Int, &mut scope);
        assert_eq!(reserved.name, "defaultInt");
        assert_eq!(reserved.alias.as_deref(), Some("default"));
    }

    #[test]
    fn test_name_is_unique_within_scope() {
        let namer = IdentifierNamer::new(RESERVED);
        let mut scope = NameTable::default();
        let first = namer.name("fooBar", TypeCategory::String, &mut scope);
        let second = namer.name("foo_bar", TypeCategory::String, &mut scope);
        assert_eq!(first.name, "fooBar");
        assert_eq!(second.name, "fooBar2");
        assert_eq!(second.alias.as_deref(), Some("foo_bar"));

        // A reserved-word rename must not clash with a real property either.
        let existing = namer.name("classString", TypeCategory::String, &mut scope);
        let renamed = namer.name("class", TypeCategory::String, &mut scope);
        assert_eq!(existing.name, "classString");
        assert_eq!(renamed.name, "classString2");
    }

    #[test]
    fn test_promoted_type_names() {
        let namer = IdentifierNamer::new(RESERVED);
        let mut scope = NameTable::with_taken(["Order"]);
        assert_eq!(namer.promoted_type_name("categories", &mut scope), "Category");
        assert_eq!(namer.promoted_type_name("category", &mut scope), "Category2");
        assert_eq!(
            namer.promoted_type_name("shipping_addresses", &mut scope),
            "ShippingAddress"
        );
        assert_eq!(namer.promoted_type_name("orders", &mut scope), "Order2");
        assert_eq!(namer.promoted_type_name("", &mut scope), "Nested");
    }
}
