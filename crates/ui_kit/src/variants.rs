//! Declarative variant tables resolved into utility class strings.
//!
//! A [`Recipe`] is a base class list plus a set of [`VariantAxis`] tables. Each
//! axis maps an enumerated key (`"sm"`, `"ghost"`, ...) to the classes that key
//! contributes. Resolution is a pure lookup: every axis contributes exactly one
//! class list, falling back to the axis default for omitted or unknown keys.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown `{axis}` variant `{key}`")]
/// Raised by [`VariantKey::try_parse`] for keys outside an axis' enumerated set.
pub struct UnknownVariant {
    /// Axis that was being parsed.
    pub axis: &'static str,
    /// Rejected key.
    pub key: String,
}

/// Typed variant enums backing a single recipe axis.
pub trait VariantKey: Copy + Default + PartialEq + 'static {
    /// Axis name inside the owning recipe.
    const AXIS: &'static str;
    /// Every declared key, in declaration order.
    const ALL: &'static [Self];

    /// Stable key used by recipes and the `data-ui-*` DOM contract.
    fn token(self) -> &'static str;

    /// Strict parse used by fixtures and configuration.
    fn try_parse(raw: &str) -> Result<Self, UnknownVariant> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.token() == raw)
            .ok_or_else(|| UnknownVariant {
                axis: Self::AXIS,
                key: raw.to_string(),
            })
    }

    /// Lenient parse used on render paths: unknown keys become the default.
    fn parse_or_default(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One styling dimension of a [`Recipe`] (size, shape, tone, ...).
pub struct VariantAxis {
    /// Axis name used in selections.
    pub name: &'static str,
    /// Key applied when a selection omits this axis or names an unknown key.
    pub default: &'static str,
    /// `(key, classes)` table.
    pub options: &'static [(&'static str, &'static str)],
}

impl VariantAxis {
    /// Returns the canonical key after default fallback.
    pub fn resolve_key(&self, key: Option<&str>) -> &'static str {
        key.and_then(|key| self.option(key))
            .map(|(key, _)| key)
            .unwrap_or(self.default)
    }

    /// Returns the classes contributed by `key`, or by the default key.
    pub fn classes_for(&self, key: Option<&str>) -> &'static str {
        let key = self.resolve_key(key);
        self.option(key).map(|(_, classes)| classes).unwrap_or("")
    }

    /// Declared keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|(key, _)| *key)
    }

    fn option(&self, key: &str) -> Option<(&'static str, &'static str)> {
        self.options
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Class-variance table: base classes plus one class list per selected axis key.
pub struct Recipe {
    /// Classes applied regardless of selection.
    pub base: &'static str,
    /// Variant axes in resolution order.
    pub axes: &'static [VariantAxis],
}

impl Recipe {
    /// Resolves a `(axis, key)` selection plus an optional caller override.
    ///
    /// Later entries for the same axis win. Selections naming axes the recipe
    /// does not declare are ignored. The override is appended last.
    pub fn resolve(&self, selection: &[(&str, &str)], class: Option<&str>) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.axes.len() + 2);
        parts.push(self.base);
        for axis in self.axes {
            let key = selection
                .iter()
                .rev()
                .find(|(name, _)| *name == axis.name)
                .map(|(_, key)| *key);
            parts.push(axis.classes_for(key));
        }
        parts.extend(class);
        class_names(parts)
    }

    /// Looks up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Every combination of axis keys, in table order (cartesian product).
    pub fn combinations(&self) -> Vec<Vec<(&'static str, &'static str)>> {
        self.axes.iter().fold(vec![Vec::new()], |acc, axis| {
            acc.into_iter()
                .flat_map(|prefix| {
                    axis.keys().map(move |key| {
                        let mut next = prefix.clone();
                        next.push((axis.name, key));
                        next
                    })
                })
                .collect()
        })
    }
}

/// Joins class fragments, dropping empty fragments and repeated class tokens.
pub fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for token in parts.into_iter().flat_map(str::split_whitespace) {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen.join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: Recipe = Recipe {
        base: "inline-flex",
        axes: &[
            VariantAxis {
                name: "size",
                default: "md",
                options: &[("sm", "h-8"), ("md", "h-10"), ("lg", "h-12")],
            },
            VariantAxis {
                name: "tone",
                default: "plain",
                options: &[("plain", "bg-card"), ("loud", "bg-primary")],
            },
        ],
    };

    #[test]
    fn omitted_axes_use_their_defaults() {
        assert_eq!(SAMPLE.resolve(&[], None), "inline-flex h-10 bg-card");
    }

    #[test]
    fn unknown_keys_fall_back_to_defaults() {
        assert_eq!(
            SAMPLE.resolve(&[("size", "huge"), ("tone", "loud")], None),
            "inline-flex h-10 bg-primary"
        );
    }

    #[test]
    fn last_selection_for_an_axis_wins_and_override_is_appended() {
        assert_eq!(
            SAMPLE.resolve(&[("size", "sm"), ("size", "lg")], Some("mt-2  shadow")),
            "inline-flex h-12 bg-card mt-2 shadow"
        );
    }

    #[test]
    fn undeclared_axes_are_ignored() {
        assert_eq!(
            SAMPLE.resolve(&[("shape", "round")], None),
            SAMPLE.resolve(&[], None)
        );
    }

    #[test]
    fn combinations_cover_the_cartesian_product() {
        let combos = SAMPLE.combinations();
        assert_eq!(combos.len(), 6);
        assert_eq!(combos[0], vec![("size", "sm"), ("tone", "plain")]);
        assert_eq!(combos[5], vec![("size", "lg"), ("tone", "loud")]);
    }

    #[test]
    fn class_names_skips_blanks_and_duplicates() {
        assert_eq!(
            class_names(["a b", "", "  ", "b c", "a"]),
            "a b c".to_string()
        );
    }

    #[test]
    fn resolve_key_reports_canonical_fallback() {
        let size = SAMPLE.axis("size").expect("size axis");
        assert_eq!(size.resolve_key(Some("lg")), "lg");
        assert_eq!(size.resolve_key(Some("xl")), "md");
        assert_eq!(size.resolve_key(None), "md");
    }
}
