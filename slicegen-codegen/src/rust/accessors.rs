//! Field-scoped accessor emitters: projections, indexes and deduplicated
//! projections.
//!
//! Each emitter returns a standalone `impl` block so the assembler can
//! append custom-rule output strictly in input order.

use crate::error::CodegenError;
use crate::registry::{Emitted, EntityContext, is_map_key, type_name};
use quote::{format_ident, quote};
use slicegen_schema::{CustomRule, pluralize, to_snake_case};

/// Emits the implicit bare-field rule: a `Vec` projection of one field
/// across all elements.
pub fn field_projection(
    ctx: &EntityContext<'_>,
    rule: &CustomRule,
) -> Result<Emitted, CodegenError> {
    let field = ctx.resolve_field(&rule.field)?;
    let collection = &ctx.collection;
    let name = format_ident!("{}", field.name);
    let method = format_ident!("{}", pluralize(&to_snake_case(&field.name)));
    let ty = &field.ty;

    Ok(Emitted::new(quote! {
        impl #collection {
            pub fn #method(&self) -> Vec<#ty> {
                self.0.iter().map(|e| e.#name.clone()).collect()
            }
        }
    }))
}

/// Emits the `Index` rule: a map from one field's value to the owning
/// entity. The field type must be usable as a map key.
pub fn index_by_field(ctx: &EntityContext<'_>, rule: &CustomRule) -> Result<Emitted, CodegenError> {
    let field = ctx.resolve_field(&rule.field)?;
    if !is_map_key(&field.ty) {
        return Err(CodegenError::NotComparable {
            entity: ctx.entity.to_string(),
            field: field.name.clone(),
            type_name: type_name(&field.ty),
        });
    }

    let entity = &ctx.entity;
    let collection = &ctx.collection;
    let name = format_ident!("{}", field.name);
    let method = format_ident!("index_by_{}", to_snake_case(&field.name));
    let ty = &field.ty;

    let tokens = quote! {
        impl #collection {
            pub fn #method(&self) -> HashMap<#ty, #entity> {
                self.0.iter().map(|e| (e.#name.clone(), e.clone())).collect()
            }
        }
    };
    Ok(Emitted::with_import(tokens, "std::collections::HashMap"))
}

/// Emits the `Unique` rule: a projection of one field with duplicates
/// removed. The output keeps first-seen order; the contract is value-set
/// equality with the distinct field values.
pub fn unique_projection(
    ctx: &EntityContext<'_>,
    rule: &CustomRule,
) -> Result<Emitted, CodegenError> {
    let field = ctx.resolve_field(&rule.field)?;
    if !is_map_key(&field.ty) {
        return Err(CodegenError::NotComparable {
            entity: ctx.entity.to_string(),
            field: field.name.clone(),
            type_name: type_name(&field.ty),
        });
    }

    let collection = &ctx.collection;
    let name = format_ident!("{}", field.name);
    let method = format_ident!("unique_{}", pluralize(&to_snake_case(&field.name)));
    let ty = &field.ty;

    let tokens = quote! {
        impl #collection {
            pub fn #method(&self) -> Vec<#ty> {
                let mut seen = HashSet::new();
                self.0
                    .iter()
                    .map(|e| e.#name.clone())
                    .filter(|v| seen.insert(v.clone()))
                    .collect()
            }
        }
    };
    Ok(Emitted::with_import(tokens, "std::collections::HashSet"))
}
