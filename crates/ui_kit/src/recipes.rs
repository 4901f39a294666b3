//! Class tables for every variant-styled primitive.
//!
//! Axis keys match the `token()` of the corresponding typed enum in
//! [`crate::primitives`]; the tests below keep the two in lockstep.

use crate::variants::{Recipe, VariantAxis};

/// [`crate::Text`] classes.
pub const TEXT: Recipe = Recipe {
    base: "font-sans leading-normal",
    axes: &[
        VariantAxis {
            name: "size",
            default: "md",
            options: &[
                ("xs", "text-xs"),
                ("sm", "text-sm"),
                ("md", "text-base"),
                ("lg", "text-lg"),
            ],
        },
        VariantAxis {
            name: "tone",
            default: "default",
            options: &[
                ("default", "text-foreground"),
                ("muted", "text-muted-foreground"),
            ],
        },
    ],
};

/// [`crate::Title`] classes.
pub const TITLE: Recipe = Recipe {
    base: "scroll-m-20 font-semibold tracking-tight text-foreground",
    axes: &[VariantAxis {
        name: "level",
        default: "h2",
        options: &[
            ("h1", "text-4xl font-extrabold lg:text-5xl"),
            ("h2", "text-3xl"),
            ("h3", "text-2xl"),
            ("h4", "text-xl"),
        ],
    }],
};

/// [`crate::Separator`] classes.
pub const SEPARATOR: Recipe = Recipe {
    base: "shrink-0 bg-border",
    axes: &[VariantAxis {
        name: "orientation",
        default: "horizontal",
        options: &[("horizontal", "h-px w-full"), ("vertical", "h-full w-px")],
    }],
};

/// [`crate::Switch`] track classes.
pub const SWITCH: Recipe = Recipe {
    base: "peer inline-flex shrink-0 cursor-pointer items-center rounded-full border-2 border-transparent transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50 data-[state=checked]:bg-primary data-[state=unchecked]:bg-input",
    axes: &[VariantAxis {
        name: "size",
        default: "md",
        options: &[("sm", "h-5 w-9"), ("md", "h-6 w-11")],
    }],
};

/// [`crate::Switch`] thumb classes.
pub const SWITCH_THUMB: Recipe = Recipe {
    base: "pointer-events-none block rounded-full bg-background shadow-lg ring-0 transition-transform data-[state=unchecked]:translate-x-0",
    axes: &[VariantAxis {
        name: "size",
        default: "md",
        options: &[
            ("sm", "h-4 w-4 data-[state=checked]:translate-x-4"),
            ("md", "h-5 w-5 data-[state=checked]:translate-x-5"),
        ],
    }],
};

/// [`crate::Toggle`] classes.
pub const TOGGLE: Recipe = Recipe {
    base: "inline-flex items-center justify-center gap-2 text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50",
    axes: &[
        VariantAxis {
            name: "shape",
            default: "rectangle",
            options: &[("rectangle", "rounded-md"), ("rounded", "rounded-full")],
        },
        VariantAxis {
            name: "variant",
            default: "ghost",
            options: &[
                (
                    "ghost",
                    "bg-transparent hover:bg-muted hover:text-muted-foreground data-[state=on]:bg-accent data-[state=on]:text-accent-foreground",
                ),
                (
                    "outline",
                    "border border-input bg-transparent shadow-sm hover:bg-accent hover:text-accent-foreground data-[state=on]:bg-accent",
                ),
                (
                    "soft",
                    "bg-muted text-muted-foreground hover:bg-muted/80 data-[state=on]:bg-primary/15 data-[state=on]:text-primary",
                ),
            ],
        },
        VariantAxis {
            name: "size",
            default: "md",
            options: &[
                ("sm", "h-8 min-w-8 px-2"),
                ("md", "h-10 min-w-10 px-3"),
                ("lg", "h-11 min-w-11 px-5"),
            ],
        },
    ],
};

/// [`crate::Tag`] classes.
pub const TAG: Recipe = Recipe {
    base: "inline-flex items-center gap-1 rounded-md px-2 py-0.5 text-xs font-medium",
    axes: &[VariantAxis {
        name: "variant",
        default: "primary",
        options: &[
            ("primary", "bg-primary/10 text-primary"),
            ("secondary", "bg-secondary text-secondary-foreground"),
            ("destructive", "bg-destructive/10 text-destructive"),
        ],
    }],
};

/// [`crate::Badge`] classes.
pub const BADGE: Recipe = Recipe {
    base: "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2",
    axes: &[VariantAxis {
        name: "variant",
        default: "default",
        options: &[
            (
                "default",
                "border-transparent bg-primary text-primary-foreground hover:bg-primary/80",
            ),
            (
                "secondary",
                "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80",
            ),
            ("outline", "text-foreground"),
            (
                "destructive",
                "border-transparent bg-destructive text-destructive-foreground hover:bg-destructive/80",
            ),
        ],
    }],
};

/// [`crate::Tooltip`] content classes.
pub const TOOLTIP: Recipe = Recipe {
    base: "absolute z-50 w-max max-w-xs overflow-hidden rounded-md border bg-popover px-3 py-1.5 text-sm text-popover-foreground shadow-md",
    axes: &[VariantAxis {
        name: "side",
        default: "top",
        options: &[
            ("top", "bottom-full left-1/2 mb-2 -translate-x-1/2"),
            ("right", "left-full top-1/2 ml-2 -translate-y-1/2"),
            ("bottom", "top-full left-1/2 mt-2 -translate-x-1/2"),
            ("left", "right-full top-1/2 mr-2 -translate-y-1/2"),
        ],
    }],
};

/// [`crate::GradientContainer`] classes.
pub const GRADIENT: Recipe = Recipe {
    base: "relative overflow-hidden rounded-xl p-6",
    axes: &[
        VariantAxis {
            name: "tone",
            default: "primary",
            options: &[
                ("primary", "from-primary/20 to-primary/5 text-foreground"),
                ("sunset", "from-orange-400 to-rose-500 text-white"),
                ("ocean", "from-sky-400 to-indigo-600 text-white"),
            ],
        },
        VariantAxis {
            name: "direction",
            default: "to-right",
            options: &[
                ("to-right", "bg-gradient-to-r"),
                ("to-bottom", "bg-gradient-to-b"),
            ],
        },
    ],
};

/// Dialog action button classes.
pub const ACTION: Recipe = Recipe {
    base: "inline-flex h-10 items-center justify-center whitespace-nowrap rounded-md px-4 py-2 text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50",
    axes: &[VariantAxis {
        name: "intent",
        default: "primary",
        options: &[
            ("primary", "bg-primary text-primary-foreground hover:bg-primary/90"),
            (
                "destructive",
                "bg-destructive text-destructive-foreground hover:bg-destructive/90",
            ),
            (
                "cancel",
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground",
            ),
        ],
    }],
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::primitives::{
        ActionIntent, BadgeVariant, GradientDirection, GradientTone, SeparatorOrientation,
        SwitchSize, TagVariant, TextSize, TextTone, TitleLevel, ToggleShape, ToggleSize,
        ToggleVariant, TooltipSide,
    };
    use crate::variants::VariantKey;

    fn assert_axis_matches<V: VariantKey>(recipe: &Recipe) {
        let axis = recipe.axis(V::AXIS).expect("axis declared");
        let keys: Vec<&str> = axis.keys().collect();
        let tokens: Vec<&str> = V::ALL.iter().map(|variant| variant.token()).collect();
        assert_eq!(keys, tokens, "axis `{}`", V::AXIS);
        assert_eq!(axis.default, V::default().token(), "default of `{}`", V::AXIS);
    }

    #[test]
    fn typed_enums_cover_every_axis_key() {
        assert_axis_matches::<TextSize>(&TEXT);
        assert_axis_matches::<TextTone>(&TEXT);
        assert_axis_matches::<TitleLevel>(&TITLE);
        assert_axis_matches::<SeparatorOrientation>(&SEPARATOR);
        assert_axis_matches::<SwitchSize>(&SWITCH);
        assert_axis_matches::<SwitchSize>(&SWITCH_THUMB);
        assert_axis_matches::<ToggleShape>(&TOGGLE);
        assert_axis_matches::<ToggleVariant>(&TOGGLE);
        assert_axis_matches::<ToggleSize>(&TOGGLE);
        assert_axis_matches::<TagVariant>(&TAG);
        assert_axis_matches::<BadgeVariant>(&BADGE);
        assert_axis_matches::<TooltipSide>(&TOOLTIP);
        assert_axis_matches::<GradientTone>(&GRADIENT);
        assert_axis_matches::<GradientDirection>(&GRADIENT);
        assert_axis_matches::<ActionIntent>(&ACTION);
    }

    #[test]
    fn every_tag_key_yields_its_declared_classes() {
        let axis = TAG.axis("variant").expect("variant axis");
        for &(key, classes) in axis.options {
            assert_eq!(
                TAG.resolve(&[("variant", key)], None),
                format!("{} {}", TAG.base, classes)
            );
        }
        assert_eq!(
            TAG.resolve(&[("variant", "neon")], None),
            TAG.resolve(&[("variant", "primary")], None)
        );
    }

    #[test]
    fn toggle_resolves_each_axis_independently() {
        assert_eq!(
            TOGGLE.resolve(
                &[("shape", "rounded"), ("variant", "soft"), ("size", "sm")],
                Some("w-full")
            ),
            crate::variants::class_names([
                TOGGLE.base,
                "rounded-full",
                "bg-muted text-muted-foreground hover:bg-muted/80 data-[state=on]:bg-primary/15 data-[state=on]:text-primary",
                "h-8 min-w-8 px-2",
                "w-full",
            ])
        );
    }

    #[test]
    fn omitted_toggle_selection_uses_rectangle_ghost_md() {
        assert_eq!(
            TOGGLE.resolve(&[], None),
            TOGGLE.resolve(
                &[("shape", "rectangle"), ("variant", "ghost"), ("size", "md")],
                None
            )
        );
        assert_eq!(TOGGLE.combinations().len(), 18);
    }

    #[test]
    fn badge_unknown_variant_falls_back_to_default() {
        assert_eq!(
            BADGE.resolve(&[("variant", "")], None),
            BADGE.resolve(&[("variant", "default")], None)
        );
    }
}
