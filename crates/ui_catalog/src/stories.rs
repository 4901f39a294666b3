//! Declarative story fixtures: one [`Story`] per component, one
//! [`StoryVariant`] per prop combination worth reviewing.

use serde::{Deserialize, Serialize};
use ui_kit::{recipes, Recipe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Catalog grouping.
pub enum StoryCategory {
    /// Single-element variant-styled primitives.
    Primitives,
    /// Layouts assembled from primitives.
    Composites,
    /// Stateful inputs.
    Inputs,
}

impl StoryCategory {
    /// Every category in display order.
    pub const ALL: [Self; 3] = [Self::Primitives, Self::Composites, Self::Inputs];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Primitives => "Primitives",
            Self::Composites => "Composites",
            Self::Inputs => "Inputs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One prop combination of a story.
pub struct StoryVariant {
    /// Caption shown above the rendered variant.
    pub name: String,
    /// `(prop, value)` pairs consumed by the story renderer.
    pub props: Vec<(&'static str, &'static str)>,
}

impl StoryVariant {
    /// Builds a hand-written variant.
    pub fn new(name: impl Into<String>, props: &[(&'static str, &'static str)]) -> Self {
        Self {
            name: name.into(),
            props: props.to_vec(),
        }
    }

    /// Value of `prop`, or `""` when the fixture leaves it to the default.
    pub fn prop(&self, prop: &str) -> &'static str {
        self.props
            .iter()
            .rev()
            .find(|(name, _)| *name == prop)
            .map(|(_, value)| *value)
            .unwrap_or("")
    }

    /// Boolean prop (`"true"`); anything else is `false`.
    pub fn flag(&self, prop: &str) -> bool {
        self.prop(prop) == "true"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A component and the variants the catalog renders for it.
pub struct Story {
    /// Stable identifier, also the renderer key.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Grouping.
    pub category: StoryCategory,
    /// Variants in display order.
    pub variants: Vec<StoryVariant>,
}

impl Story {
    /// Case-insensitive match against id, title, category, and variant names.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [self.id, self.title, self.category.label()]
            .into_iter()
            .map(str::to_lowercase)
            .chain(self.variants.iter().map(|variant| variant.name.to_lowercase()))
            .any(|haystack| haystack.contains(&query))
    }
}

/// One variant per combination of the recipe's axis keys.
pub fn recipe_variants(recipe: &Recipe) -> Vec<StoryVariant> {
    recipe
        .combinations()
        .into_iter()
        .map(|props| StoryVariant {
            name: props
                .iter()
                .map(|(_, key)| *key)
                .collect::<Vec<_>>()
                .join(" / "),
            props,
        })
        .collect()
}

/// The full catalog in display order.
pub fn catalog() -> Vec<Story> {
    vec![
        Story {
            id: "text",
            title: "Text",
            category: StoryCategory::Primitives,
            variants: recipe_variants(&recipes::TEXT),
        },
        Story {
            id: "title",
            title: "Title",
            category: StoryCategory::Primitives,
            variants: recipe_variants(&recipes::TITLE),
        },
        Story {
            id: "separator",
            title: "Separator",
            category: StoryCategory::Primitives,
            variants: vec![
                StoryVariant::new("horizontal", &[("orientation", "horizontal")]),
                StoryVariant::new(
                    "vertical (semantic)",
                    &[("orientation", "vertical"), ("decorative", "false")],
                ),
            ],
        },
        Story {
            id: "switch",
            title: "Switch",
            category: StoryCategory::Primitives,
            variants: vec![
                StoryVariant::new("default", &[]),
                StoryVariant::new("small", &[("size", "sm")]),
                StoryVariant::new("with label", &[("label", "Email notifications")]),
                StoryVariant::new("disabled", &[("disabled", "true"), ("checked", "true")]),
            ],
        },
        Story {
            id: "toggle",
            title: "Toggle",
            category: StoryCategory::Primitives,
            variants: recipe_variants(&recipes::TOGGLE),
        },
        Story {
            id: "tag",
            title: "Tag",
            category: StoryCategory::Primitives,
            variants: recipe_variants(&recipes::TAG),
        },
        Story {
            id: "badge",
            title: "Badge",
            category: StoryCategory::Primitives,
            variants: recipe_variants(&recipes::BADGE),
        },
        Story {
            id: "tooltip",
            title: "Tooltip",
            category: StoryCategory::Primitives,
            variants: recipe_variants(&recipes::TOOLTIP),
        },
        Story {
            id: "avatar-list-item",
            title: "Avatar List Item",
            category: StoryCategory::Composites,
            variants: vec![
                StoryVariant::new("initials", &[("title", "Ada Lovelace")]),
                StoryVariant::new(
                    "with subtitle",
                    &[("title", "Grace Hopper"), ("subtitle", "Rear admiral")],
                ),
                StoryVariant::new("node title", &[("node", "true")]),
            ],
        },
        Story {
            id: "confirmation-dialog",
            title: "Confirmation Dialog",
            category: StoryCategory::Composites,
            variants: vec![
                StoryVariant::new("default", &[]),
                StoryVariant::new("destructive", &[("destructive", "true")]),
            ],
        },
        Story {
            id: "number-display-card",
            title: "Number Display Card",
            category: StoryCategory::Composites,
            variants: vec![
                StoryVariant::new("static", &[("count", "150")]),
                StoryVariant::new(
                    "clickable with subtitle",
                    &[
                        ("count", "12840"),
                        ("subtitle", "+12% this week"),
                        ("clickable", "true"),
                    ],
                ),
            ],
        },
        Story {
            id: "wrapper-card",
            title: "Wrapper Card",
            category: StoryCategory::Composites,
            variants: vec![
                StoryVariant::new("bare", &[]),
                StoryVariant::new(
                    "with header",
                    &[
                        ("title", "Billing"),
                        ("description", "Manage invoices and payment methods."),
                    ],
                ),
            ],
        },
        Story {
            id: "gradient-container",
            title: "Gradient Container",
            category: StoryCategory::Composites,
            variants: recipe_variants(&recipes::GRADIENT),
        },
        Story {
            id: "search-input",
            title: "Search Input",
            category: StoryCategory::Inputs,
            variants: vec![
                StoryVariant::new("query parameter", &[("param", "story-search")]),
                StoryVariant::new(
                    "local echo, slow",
                    &[("add_to_param", "false"), ("delay", "1500")],
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn story_ids_are_unique() {
        let stories = catalog();
        let ids: HashSet<_> = stories.iter().map(|story| story.id).collect();
        assert_eq!(ids.len(), stories.len());
    }

    #[test]
    fn every_story_has_variants() {
        for story in catalog() {
            assert!(!story.variants.is_empty(), "story `{}`", story.id);
        }
    }

    #[test]
    fn toggle_story_enumerates_every_combination() {
        let toggle = catalog()
            .into_iter()
            .find(|story| story.id == "toggle")
            .expect("toggle story");
        assert_eq!(toggle.variants.len(), 18);
        assert_eq!(toggle.variants[0].name, "rectangle / ghost / sm");
        assert_eq!(toggle.variants[0].prop("variant"), "ghost");
    }

    #[test]
    fn missing_props_read_as_empty() {
        let variant = StoryVariant::new("default", &[("checked", "true")]);
        assert_eq!(variant.prop("size"), "");
        assert!(variant.flag("checked"));
        assert!(!variant.flag("disabled"));
    }

    #[test]
    fn queries_match_titles_categories_and_variants() {
        let stories = catalog();
        let matching = |query: &str| {
            stories
                .iter()
                .filter(|story| story.matches(query))
                .map(|story| story.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(matching("").len(), stories.len());
        assert_eq!(matching("  DIALOG "), vec!["confirmation-dialog"]);
        assert_eq!(matching("inputs"), vec!["search-input"]);
        assert!(matching("destructive").contains(&"tag"));
        assert!(matching("zzz").is_empty());
    }
}
