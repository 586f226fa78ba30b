//! Constructor emitters.

use crate::error::CodegenError;
use crate::registry::{Emitted, EntityContext};
use quote::{format_ident, quote};
use slicegen_schema::{CustomRule, to_snake_case};

/// Emits the `MapP` rule: a free function converting a slice of an
/// externally-typed element into the collection type.
///
/// The rule argument is the import alias qualifying the source element type
/// (`MapP(db)` on `News` consumes `Vec<db::News>`). Conversion delegates to
/// the conventional per-entity function `new_<entity>`, which is assumed to
/// already exist in the host package.
pub fn map_from_alias(ctx: &EntityContext<'_>, rule: &CustomRule) -> Result<Emitted, CodegenError> {
    let alias: syn::Path =
        syn::parse_str(&rule.arg).map_err(|_| CodegenError::InvalidArgument {
            entity: ctx.entity.to_string(),
            rule: rule.name.clone(),
            arg: rule.arg.clone(),
        })?;

    let entity = &ctx.entity;
    let collection = &ctx.collection;
    let constructor = format_ident!("new_{}", to_snake_case(&collection.to_string()));
    let convert = format_ident!("new_{}", to_snake_case(&entity.to_string()));

    Ok(Emitted::new(quote! {
        pub fn #constructor(input: Vec<#alias::#entity>) -> #collection {
            #collection(input.into_iter().map(#convert).collect())
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicegen_schema::FieldInfo;

    #[test]
    fn test_map_from_alias() {
        let fields = vec![FieldInfo {
            name: "id".to_string(),
            ty: syn::parse_str("i32").expect("parse type"),
        }];
        let ctx = EntityContext::new("News", "NewsList", &fields);
        let rule = CustomRule::with_arg("MapP", "db");

        let emitted = map_from_alias(&ctx, &rule).expect("constructor failed");
        let code = emitted.tokens.to_string();
        assert!(code.contains("fn new_news_list"));
        assert!(code.contains("new_news"));
        assert!(emitted.imports.is_empty());
    }

    #[test]
    fn test_map_from_alias_rejects_bad_alias() {
        let fields = Vec::new();
        let ctx = EntityContext::new("News", "NewsList", &fields);
        let rule = CustomRule::with_arg("MapP", "not a path");

        let err = map_from_alias(&ctx, &rule).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidArgument { .. }));
    }
}
