//! Mandatory per-entity output: the collection newtype, `ids()` and
//! `index()`.

use crate::error::CodegenError;
use crate::registry::{Emitted, EntityContext, is_map_key, type_name};
use quote::quote;

/// Field every entity must carry for base generation.
const ID_FIELD: &str = "id";

/// Emits the collection type declaration plus its `ids()` and `index()`
/// accessors.
///
/// The generated `index()` clones entities into the map, so host structs
/// are expected to derive `Clone`.
///
/// # Errors
/// Returns a field-contract error if the entity has no `id` field or its
/// `id` type cannot key a map.
pub fn collection_block(ctx: &EntityContext<'_>) -> Result<Emitted, CodegenError> {
    let id = ctx.resolve_field(ID_FIELD)?;
    if !is_map_key(&id.ty) {
        return Err(CodegenError::NotComparable {
            entity: ctx.entity.to_string(),
            field: ID_FIELD.to_string(),
            type_name: type_name(&id.ty),
        });
    }

    let entity = &ctx.entity;
    let collection = &ctx.collection;
    let id_ty = &id.ty;

    let tokens = quote! {
        #[derive(Debug, Clone, Default)]
        pub struct #collection(pub Vec<#entity>);

        impl #collection {
            pub fn ids(&self) -> Vec<#id_ty> {
                self.0.iter().map(|e| e.id.clone()).collect()
            }

            pub fn index(&self) -> HashMap<#id_ty, #entity> {
                self.0.iter().map(|e| (e.id.clone(), e.clone())).collect()
            }
        }
    };
    Ok(Emitted::with_import(tokens, "std::collections::HashMap"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicegen_schema::FieldInfo;

    fn field(name: &str, ty: &str) -> FieldInfo {
        FieldInfo {
            name: name.to_string(),
            ty: syn::parse_str(ty).expect("parse type"),
        }
    }

    #[test]
    fn test_collection_block() {
        let fields = vec![field("id", "i32"), field("title", "String")];
        let ctx = EntityContext::new("News", "NewsList", &fields);

        let emitted = collection_block(&ctx).expect("base generation failed");
        let code = emitted.tokens.to_string();
        assert!(code.contains("struct NewsList"));
        assert!(code.contains("fn ids"));
        assert!(code.contains("fn index"));
        assert_eq!(emitted.imports, ["std::collections::HashMap"]);
    }

    #[test]
    fn test_collection_block_requires_id_field() {
        let fields = vec![field("title", "String")];
        let ctx = EntityContext::new("News", "NewsList", &fields);

        let err = collection_block(&ctx).unwrap_err();
        assert!(matches!(err, CodegenError::MissingField { .. }));
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_collection_block_requires_comparable_id() {
        let fields = vec![field("id", "Vec<u8>")];
        let ctx = EntityContext::new("News", "NewsList", &fields);

        let err = collection_block(&ctx).unwrap_err();
        assert!(matches!(err, CodegenError::NotComparable { .. }));
    }
}
