//! Rule types produced by the DSL parser.

/// One entity's full generation directive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rule {
    /// Struct name in the host package this rule targets.
    pub entity_name: String,
    /// Whether the mandatory collection type plus `ids()`/`index()` is
    /// emitted. Set as soon as any line names the entity.
    pub base_gen: bool,
    /// Forces the `List` suffix for the generated collection type name.
    pub use_list_suffix: bool,
    /// Extra accessor/constructor directives, in input order.
    pub custom_rules: Vec<CustomRule>,
}

impl Rule {
    /// Creates a base-generation rule for `entity_name` with no custom rules.
    #[must_use]
    pub fn base(entity_name: impl Into<String>, use_list_suffix: bool) -> Self {
        Self {
            entity_name: entity_name.into(),
            base_gen: true,
            use_list_suffix,
            custom_rules: Vec::new(),
        }
    }
}

/// A single extra-accessor or constructor directive attached to a [`Rule`].
///
/// An empty `name` denotes the implicit bare-field projection rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomRule {
    /// Registry key; empty for the implicit field rule.
    pub name: String,
    /// Struct field the rule operates on; empty for entity-scoped rules.
    pub field: String,
    /// Free-form argument for rules that are not field-scoped, such as the
    /// import alias of a constructor source type.
    pub arg: String,
}

impl CustomRule {
    /// Creates a field-scoped rule.
    #[must_use]
    pub fn for_field(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            arg: String::new(),
        }
    }

    /// Creates an entity-scoped rule carrying a free argument.
    #[must_use]
    pub fn with_arg(name: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: String::new(),
            arg: arg.into(),
        }
    }
}
