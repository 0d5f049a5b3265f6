//! Variant-driven style resolution
//!
//! A [`VariantSpec`] describes a component's styling as a base class string
//! plus named axes. Each axis enumerates its allowed values, the class
//! fragment each value contributes, and a default. Resolving a spec against a
//! caller's (possibly partial) [`Selection`] yields a [`ResolvedClassName`]:
//!
//! ```text
//! base | axis 1 fragment | axis 2 fragment | ... | caller override
//! ```
//!
//! Axes missing from the selection, or set to a value the axis does not
//! declare, resolve to the axis default. Nothing here fails at render time.

use std::fmt;

use crate::error::VariantError;
use crate::merge::merge_classes;

/// A typed value for one variant axis.
///
/// Implemented by the enums UI primitives expose (`ButtonIntent`,
/// `CardTheme` ...) so callers never spell axis names by hand.
pub trait VariantValue: Copy {
    /// Name of the axis this value belongs to
    const AXIS: &'static str;

    /// Key of this value within the axis
    fn key(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Axis {
    name: String,
    default: String,
    values: Vec<(String, String)>,
}

impl Axis {
    fn fragment(&self, value: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == value)
            .map(|(_, fragment)| fragment.as_str())
    }

    fn default_fragment(&self) -> &str {
        // Validated at build time
        self.fragment(&self.default).unwrap_or_default()
    }
}

/// Base classes plus ordered variant axes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    base: String,
    axes: Vec<Axis>,
}

impl VariantSpec {
    /// Start a spec with the given base fragment.
    pub fn builder(base: impl Into<String>) -> VariantSpecBuilder {
        VariantSpecBuilder {
            base: base.into(),
            axes: Vec::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Axis names in declaration order
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|axis| axis.name.as_str())
    }

    /// Declared values of an axis, in declaration order
    pub fn values(&self, axis: &str) -> Vec<&str> {
        self.axis(axis)
            .map(|axis| axis.values.iter().map(|(key, _)| key.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn default_value(&self, axis: &str) -> Option<&str> {
        self.axis(axis).map(|axis| axis.default.as_str())
    }

    /// Fragment an axis value contributes, if the value is declared
    pub fn fragment(&self, axis: &str, value: &str) -> Option<&str> {
        self.axis(axis)?.fragment(value)
    }

    /// Resolve a selection and optional override into ordered fragments.
    pub fn resolve<'a>(
        &'a self,
        selection: &Selection<'_>,
        extra: Option<&'a str>,
    ) -> ResolvedClassName<'a> {
        for (name, _) in &selection.values {
            if self.axis(name).is_none() {
                tracing::debug!(axis = %name, "Ignoring selection for undeclared axis");
            }
        }

        let mut fragments = Vec::with_capacity(self.axes.len() + 2);
        fragments.push(self.base.as_str());

        for axis in &self.axes {
            let fragment = match selection.get(&axis.name) {
                Some(value) => axis.fragment(value).unwrap_or_else(|| {
                    tracing::debug!(
                        axis = %axis.name,
                        value = %value,
                        default = %axis.default,
                        "Unknown variant value, using default"
                    );
                    axis.default_fragment()
                }),
                None => axis.default_fragment(),
            };
            fragments.push(fragment);
        }

        if let Some(extra) = extra {
            fragments.push(extra);
        }

        ResolvedClassName { fragments }
    }

    /// Shorthand for `resolve(..).merged()`
    pub fn class(&self, selection: &Selection<'_>, extra: Option<&str>) -> String {
        self.resolve(selection, extra).merged()
    }

    fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.name == name)
    }
}

/// Builder returned by [`VariantSpec::builder`]
#[derive(Debug, Clone)]
pub struct VariantSpecBuilder {
    base: String,
    axes: Vec<Axis>,
}

impl VariantSpecBuilder {
    /// Declare an axis with its default value and `(value, fragment)` pairs.
    pub fn axis<I, V, F>(
        mut self,
        name: impl Into<String>,
        default: impl Into<String>,
        values: I,
    ) -> Self
    where
        I: IntoIterator<Item = (V, F)>,
        V: Into<String>,
        F: Into<String>,
    {
        self.axes.push(Axis {
            name: name.into(),
            default: default.into(),
            values: values
                .into_iter()
                .map(|(value, fragment)| (value.into(), fragment.into()))
                .collect(),
        });
        self
    }

    /// Validate and finish the spec.
    ///
    /// Every axis needs at least one value, unique value keys, and a default
    /// that is one of its values. Axis names must be unique.
    pub fn build(self) -> Result<VariantSpec, VariantError> {
        for (idx, axis) in self.axes.iter().enumerate() {
            if self.axes[..idx].iter().any(|prev| prev.name == axis.name) {
                return Err(VariantError::DuplicateAxis(axis.name.clone()));
            }
            if axis.values.is_empty() {
                return Err(VariantError::EmptyAxis(axis.name.clone()));
            }
            for (value_idx, (value, _)) in axis.values.iter().enumerate() {
                if axis.values[..value_idx].iter().any(|(prev, _)| prev == value) {
                    return Err(VariantError::DuplicateValue {
                        axis: axis.name.clone(),
                        value: value.clone(),
                    });
                }
            }
            if axis.fragment(&axis.default).is_none() {
                return Err(VariantError::UnknownDefault {
                    axis: axis.name.clone(),
                    default: axis.default.clone(),
                });
            }
        }

        Ok(VariantSpec {
            base: self.base,
            axes: self.axes,
        })
    }
}

/// A caller's choice of axis values. Later settings of the same axis win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    values: Vec<(&'a str, &'a str)>,
}

impl<'a> Selection<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, axis: &'a str, value: &'a str) -> Self {
        self.values.push((axis, value));
        self
    }

    /// Set an axis only when a value is given; `None` leaves it at default.
    pub fn set_opt(self, axis: &'a str, value: Option<&'a str>) -> Self {
        match value {
            Some(value) => self.set(axis, value),
            None => self,
        }
    }

    /// Set an axis from a typed value.
    pub fn with<V: VariantValue>(self, value: Option<V>) -> Self {
        self.set_opt(V::AXIS, value.map(|v| v.key()))
    }

    pub fn get(&self, axis: &str) -> Option<&'a str> {
        self.values
            .iter()
            .rev()
            .find(|(name, _)| *name == axis)
            .map(|(_, value)| *value)
    }
}

/// Ordered fragments produced by [`VariantSpec::resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClassName<'a> {
    fragments: Vec<&'a str>,
}

impl<'a> ResolvedClassName<'a> {
    /// Base, one fragment per axis, then the override (if any)
    pub fn fragments(&self) -> &[&'a str] {
        &self.fragments
    }

    /// The final class string, conflicts resolved last-wins.
    pub fn merged(&self) -> String {
        merge_classes(self.fragments.iter().copied())
    }
}

impl fmt::Display for ResolvedClassName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.merged())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_spec() -> VariantSpec {
        VariantSpec::builder("X")
            .axis("intent", "primary", [("primary", "A"), ("gray", "B")])
            .build()
            .unwrap()
    }

    #[derive(Clone, Copy)]
    enum Tone {
        Gray,
    }

    impl VariantValue for Tone {
        const AXIS: &'static str = "intent";

        fn key(&self) -> &'static str {
            match self {
                Tone::Gray => "gray",
            }
        }
    }

    #[test]
    fn selected_value_then_override() {
        let spec = intent_spec();
        let resolved = spec.resolve(&Selection::new().set("intent", "gray"), Some("Z"));
        assert_eq!(resolved.fragments(), ["X", "B", "Z"]);
        assert_eq!(resolved.to_string(), "X B Z");
    }

    #[test]
    fn missing_axis_uses_default() {
        let spec = intent_spec();
        let resolved = spec.resolve(&Selection::new(), None);
        assert_eq!(resolved.fragments(), ["X", "A"]);
    }

    #[test]
    fn unknown_value_uses_default() {
        let spec = intent_spec();
        let resolved = spec.resolve(&Selection::new().set("intent", "neon"), None);
        assert_eq!(resolved.fragments(), ["X", "A"]);
    }

    #[test]
    fn undeclared_axis_is_ignored() {
        let spec = intent_spec();
        let resolved = spec.resolve(&Selection::new().set("size", "large"), None);
        assert_eq!(resolved.fragments(), ["X", "A"]);
    }

    #[test]
    fn typed_values_select_by_key() {
        let spec = intent_spec();
        let resolved = spec.resolve(&Selection::new().with(Some(Tone::Gray)), None);
        assert_eq!(resolved.fragments(), ["X", "B"]);

        let resolved = spec.resolve(&Selection::new().with(None::<Tone>), None);
        assert_eq!(resolved.fragments(), ["X", "A"]);
    }

    #[test]
    fn last_setting_of_an_axis_wins() {
        let selection = Selection::new().set("intent", "gray").set("intent", "primary");
        assert_eq!(selection.get("intent"), Some("primary"));
    }

    #[test]
    fn axes_resolve_in_declared_order() {
        let spec = VariantSpec::builder("base")
            .axis("size", "md", [("md", "h-9")])
            .axis("intent", "primary", [("primary", "bg-primary")])
            .build()
            .unwrap();
        let resolved = spec.resolve(&Selection::new().set("intent", "primary"), None);
        assert_eq!(resolved.fragments(), ["base", "h-9", "bg-primary"]);
        assert_eq!(spec.axis_names().collect::<Vec<_>>(), ["size", "intent"]);
    }

    #[test]
    fn override_wins_over_axis_fragment() {
        let spec = VariantSpec::builder("p-5 rounded-lg")
            .axis("theme", "light", [("light", "bg-foreground"), ("dark", "bg-dark-gray")])
            .build()
            .unwrap();
        let class = spec.class(&Selection::new().set("theme", "dark"), Some("bg-black p-2"));
        assert_eq!(class, "rounded-lg bg-black p-2");
    }

    #[test]
    fn build_rejects_unknown_default() {
        let err = VariantSpec::builder("x")
            .axis("intent", "missing", [("primary", "a")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            VariantError::UnknownDefault {
                axis: "intent".into(),
                default: "missing".into()
            }
        );
    }

    #[test]
    fn build_rejects_empty_and_duplicate_axes() {
        let empty: [(&str, &str); 0] = [];
        let err = VariantSpec::builder("x")
            .axis("intent", "primary", empty)
            .build()
            .unwrap_err();
        assert_eq!(err, VariantError::EmptyAxis("intent".into()));

        let err = VariantSpec::builder("x")
            .axis("intent", "a", [("a", "1")])
            .axis("intent", "a", [("a", "1")])
            .build()
            .unwrap_err();
        assert_eq!(err, VariantError::DuplicateAxis("intent".into()));

        let err = VariantSpec::builder("x")
            .axis("intent", "a", [("a", "1"), ("a", "2")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            VariantError::DuplicateValue {
                axis: "intent".into(),
                value: "a".into()
            }
        );
    }

    #[test]
    fn introspection() {
        let spec = intent_spec();
        assert_eq!(spec.base(), "X");
        assert_eq!(spec.values("intent"), ["primary", "gray"]);
        assert_eq!(spec.default_value("intent"), Some("primary"));
        assert_eq!(spec.fragment("intent", "gray"), Some("B"));
        assert_eq!(spec.fragment("intent", "neon"), None);
        assert!(spec.values("shape").is_empty());
    }
}
