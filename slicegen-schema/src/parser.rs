//! Rule DSL parser.
//!
//! The DSL is line oriented. A line without a `:` separator is a
//! comma-separated list of bare entity names, each requesting base
//! generation only. A line of the form `Entity:token,token,...` attaches
//! custom rules to `Entity`, where each token is one of:
//!
//! - `Name(arg)` for entity-scoped rules taking a free argument,
//! - `Name(Field)` for field-scoped rules,
//! - `UniqueField` for the deduplicated projection of `Field`,
//! - a bare `Field` for the implicit projection rule.

use crate::error::ParseError;
use crate::rules::{CustomRule, Rule};
use std::collections::BTreeMap;

/// Rule names whose parenthesized text is a free argument rather than a
/// field name. Token dispatch is per-name: the same text means an import
/// alias for a constructor rule and a field name for an index rule.
const ARG_SCOPED_RULES: &[&str] = &["MapP"];

/// Prefix marking the deduplicated-projection token form.
const UNIQUE_PREFIX: &str = "Unique";

/// Parses DSL lines into a validated, entity-sorted rule list.
///
/// Parsing is all-or-nothing: the first malformed line or token aborts with
/// an error and no partial rule list. Blank lines are skipped. A later line
/// naming an already-seen entity augments that entity's rule instead of
/// duplicating it.
///
/// # Errors
/// Returns `ParseError` for an empty entity name or a malformed token.
pub fn parse_rules<'a, I>(lines: I, use_list_suffix: bool) -> Result<Vec<Rule>, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut by_entity: BTreeMap<String, Rule> = BTreeMap::new();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(':') {
            Some((entity, tokens)) => {
                let entity = entity.trim();
                if entity.is_empty() {
                    return Err(ParseError::EmptyEntity {
                        line: line.to_string(),
                    });
                }
                let rule = by_entity
                    .entry(entity.to_string())
                    .or_insert_with(|| Rule::base(entity, use_list_suffix));
                for token in tokens.split(',') {
                    rule.custom_rules.push(parse_token(entity, token.trim())?);
                }
            }
            None => {
                for entity in line.split(',') {
                    let entity = entity.trim();
                    if entity.is_empty() {
                        return Err(ParseError::EmptyEntity {
                            line: line.to_string(),
                        });
                    }
                    by_entity
                        .entry(entity.to_string())
                        .or_insert_with(|| Rule::base(entity, use_list_suffix));
                }
            }
        }
    }

    // BTreeMap iteration already yields entity-name order.
    Ok(by_entity.into_values().collect())
}

/// Parses one custom-rule token attached to `entity`.
fn parse_token(entity: &str, token: &str) -> Result<CustomRule, ParseError> {
    if token.is_empty() {
        return Err(ParseError::EmptyToken {
            entity: entity.to_string(),
        });
    }

    if let Some(open) = token.find('(') {
        let name = &token[..open];
        let Some(inner) = token[open + 1..].strip_suffix(')') else {
            return Err(ParseError::unbalanced(entity, token));
        };
        if name.is_empty() || inner.is_empty() || inner.contains(['(', ')']) {
            return Err(ParseError::unbalanced(entity, token));
        }
        if ARG_SCOPED_RULES.contains(&name) {
            return Ok(CustomRule::with_arg(name, inner));
        }
        return Ok(CustomRule::for_field(name, inner));
    }

    if token.contains(')') {
        return Err(ParseError::unbalanced(entity, token));
    }

    if let Some(field) = token.strip_prefix(UNIQUE_PREFIX)
        && !field.is_empty()
    {
        return Ok(CustomRule::for_field(UNIQUE_PREFIX, field));
    }

    // Bare field token: the implicit projection rule.
    Ok(CustomRule::for_field("", token))
}
