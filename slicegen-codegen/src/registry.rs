//! Rule registry: the fixed mapping from rule name to generation strategy.
//!
//! The catalog is closed and explicit. Adding a rule is one entry in
//! [`HANDLERS`]; an unrecognized name is a generation error, never a
//! fallback.

use crate::error::CodegenError;
use crate::rust::{accessors, constructors};
use proc_macro2::TokenStream;
use quote::format_ident;
use slicegen_schema::{CustomRule, FieldInfo, to_snake_case};

/// Entity metadata handed to every rule handler.
#[derive(Debug)]
pub struct EntityContext<'a> {
    /// Entity type identifier.
    pub entity: proc_macro2::Ident,
    /// Generated collection type identifier.
    pub collection: proc_macro2::Ident,
    /// Introspected fields of the entity, in declaration order.
    pub fields: &'a [FieldInfo],
}

impl<'a> EntityContext<'a> {
    /// Creates a context for one entity.
    #[must_use]
    pub fn new(entity: &str, collection: &str, fields: &'a [FieldInfo]) -> Self {
        Self {
            entity: format_ident!("{}", entity),
            collection: format_ident!("{}", collection),
            fields,
        }
    }

    /// Resolves a DSL field token against the introspected fields.
    ///
    /// DSL tokens keep the original PascalCase spelling, so resolution tries
    /// the exact name first and the snake_case conversion second.
    pub fn resolve_field(&self, dsl_name: &str) -> Result<&'a FieldInfo, CodegenError> {
        let snake = to_snake_case(dsl_name);
        self.fields
            .iter()
            .find(|f| f.name == dsl_name || f.name == snake)
            .ok_or_else(|| CodegenError::MissingField {
                entity: self.entity.to_string(),
                field: dsl_name.to_string(),
            })
    }
}

/// Output of one rule handler: emitted items plus the imports they need.
#[derive(Debug)]
pub struct Emitted {
    /// Emitted item tokens, appended to the entity's block verbatim.
    pub tokens: TokenStream,
    /// Import paths the emitted code relies on.
    pub imports: Vec<&'static str>,
}

impl Emitted {
    /// Emitted items needing no imports.
    #[must_use]
    pub fn new(tokens: TokenStream) -> Self {
        Self {
            tokens,
            imports: Vec::new(),
        }
    }

    /// Emitted items needing one import.
    #[must_use]
    pub fn with_import(tokens: TokenStream, import: &'static str) -> Self {
        Self {
            tokens,
            imports: vec![import],
        }
    }
}

/// A generation strategy bound to one rule name.
pub type Handler = fn(&EntityContext<'_>, &CustomRule) -> Result<Emitted, CodegenError>;

/// The rule catalog. The empty name is the implicit bare-field projection.
pub const HANDLERS: &[(&str, Handler)] = &[
    ("", accessors::field_projection),
    ("Index", accessors::index_by_field),
    ("Unique", accessors::unique_projection),
    ("MapP", constructors::map_from_alias),
];

/// Looks up the handler registered for `name`.
#[must_use]
pub fn lookup(name: &str) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, handler)| *handler)
}

/// Primitive types accepted as map keys by the index rules.
const MAP_KEY_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    "bool", "char", "String",
];

/// Whether `ty` is directly usable as a `HashMap` key or `HashSet` element.
#[must_use]
pub(crate) fn is_map_key(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() {
        return false;
    }
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    segment.arguments.is_none() && MAP_KEY_TYPES.contains(&segment.ident.to_string().as_str())
}

/// Renders a field type for error messages.
pub(crate) fn type_name(ty: &syn::Type) -> String {
    quote::quote!(#ty).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_type(src: &str) -> syn::Type {
        syn::parse_str(src).expect("parse type")
    }

    #[test]
    fn test_lookup_known_rules() {
        for name in ["", "Index", "Unique", "MapP"] {
            assert!(lookup(name).is_some(), "missing handler for '{name}'");
        }
    }

    #[test]
    fn test_lookup_unknown_rule() {
        assert!(lookup("Nope").is_none());
    }

    #[test]
    fn test_is_map_key() {
        assert!(is_map_key(&parse_type("i64")));
        assert!(is_map_key(&parse_type("String")));
        assert!(is_map_key(&parse_type("std::string::String")));
        assert!(!is_map_key(&parse_type("Vec<String>")));
        assert!(!is_map_key(&parse_type("f64")));
        assert!(!is_map_key(&parse_type("&str")));
    }

    #[test]
    fn test_resolve_field_snake_case_fallback() {
        let fields = vec![
            FieldInfo {
                name: "id".to_string(),
                ty: parse_type("i32"),
            },
            FieldInfo {
                name: "order_number".to_string(),
                ty: parse_type("i64"),
            },
        ];
        let ctx = EntityContext::new("Tag", "Tags", &fields);

        assert_eq!(ctx.resolve_field("OrderNumber").unwrap().name, "order_number");
        assert_eq!(ctx.resolve_field("order_number").unwrap().name, "order_number");

        let err = ctx.resolve_field("Missing").unwrap_err();
        assert!(matches!(err, CodegenError::MissingField { .. }));
        assert!(err.to_string().contains("Tag"));
    }
}
