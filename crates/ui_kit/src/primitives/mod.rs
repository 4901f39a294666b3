//! Typography, control, label, overlay, and card primitives.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::recipes;
use crate::slot::Slot;
use crate::variants::VariantKey;

mod cards;
mod controls;
mod labels;
mod overlays;
mod search;
mod typography;

pub use cards::{
    avatar_initials, AvatarListItem, GradientContainer, NumberDisplayCard, WrapperCard,
};
pub use controls::{switch_label_id, Switch, Toggle};
pub use labels::{Badge, Tag};
pub use overlays::{tooltip_content_id, ConfirmationDialog, Tooltip};
pub use search::SearchInput;
pub use typography::{Separator, Text, Title};
use typography::{render_slot, typography_view, SlotTypography};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Body text size scale.
pub enum TextSize {
    /// Extra small caption text.
    Xs,
    /// Small supporting text.
    Sm,
    /// Default body text.
    #[default]
    Md,
    /// Large lead text.
    Lg,
}

impl VariantKey for TextSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Xs, Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text color tone.
pub enum TextTone {
    /// Foreground text.
    #[default]
    Default,
    /// De-emphasized text.
    Muted,
}

impl VariantKey for TextTone {
    const AXIS: &'static str = "tone";
    const ALL: &'static [Self] = &[Self::Default, Self::Muted];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Muted => "muted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Heading level rendered by [`Title`].
pub enum TitleLevel {
    /// `<h1>`.
    H1,
    /// `<h2>`.
    #[default]
    H2,
    /// `<h3>`.
    H3,
    /// `<h4>`.
    H4,
}

impl VariantKey for TitleLevel {
    const AXIS: &'static str = "level";
    const ALL: &'static [Self] = &[Self::H1, Self::H2, Self::H3, Self::H4];

    fn token(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Separator axis.
pub enum SeparatorOrientation {
    /// Full-width rule.
    #[default]
    Horizontal,
    /// Full-height rule.
    Vertical,
}

impl VariantKey for SeparatorOrientation {
    const AXIS: &'static str = "orientation";
    const ALL: &'static [Self] = &[Self::Horizontal, Self::Vertical];

    fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Switch track size.
pub enum SwitchSize {
    /// Compact switch.
    Sm,
    /// Default switch.
    #[default]
    Md,
}

impl VariantKey for SwitchSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Toggle corner treatment.
pub enum ToggleShape {
    /// Slightly rounded rectangle.
    #[default]
    Rectangle,
    /// Pill.
    Rounded,
}

impl VariantKey for ToggleShape {
    const AXIS: &'static str = "shape";
    const ALL: &'static [Self] = &[Self::Rectangle, Self::Rounded];

    fn token(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Rounded => "rounded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Toggle fill style.
pub enum ToggleVariant {
    /// Transparent until pressed.
    #[default]
    Ghost,
    /// Bordered.
    Outline,
    /// Muted fill.
    Soft,
}

impl VariantKey for ToggleVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[Self::Ghost, Self::Outline, Self::Soft];

    fn token(self) -> &'static str {
        match self {
            Self::Ghost => "ghost",
            Self::Outline => "outline",
            Self::Soft => "soft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Toggle sizing tokens.
pub enum ToggleSize {
    /// Dense toggle.
    Sm,
    /// Default toggle.
    #[default]
    Md,
    /// Large toggle.
    Lg,
}

impl VariantKey for ToggleSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Tag tone.
pub enum TagVariant {
    /// Brand tint.
    #[default]
    Primary,
    /// Neutral tint.
    Secondary,
    /// Error tint.
    Destructive,
}

impl VariantKey for TagVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[Self::Primary, Self::Secondary, Self::Destructive];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Badge tone.
pub enum BadgeVariant {
    /// Solid brand badge.
    #[default]
    Default,
    /// Solid neutral badge.
    Secondary,
    /// Bordered badge.
    Outline,
    /// Solid error badge.
    Destructive,
}

impl VariantKey for BadgeVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Secondary,
        Self::Outline,
        Self::Destructive,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Side of the trigger a tooltip is placed on.
pub enum TooltipSide {
    /// Above the trigger.
    #[default]
    Top,
    /// Right of the trigger.
    Right,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
}

impl VariantKey for TooltipSide {
    const AXIS: &'static str = "side";
    const ALL: &'static [Self] = &[Self::Top, Self::Right, Self::Bottom, Self::Left];

    fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Gradient palette for [`GradientContainer`].
pub enum GradientTone {
    /// Brand tint fading out.
    #[default]
    Primary,
    /// Orange to rose.
    Sunset,
    /// Sky to indigo.
    Ocean,
}

impl VariantKey for GradientTone {
    const AXIS: &'static str = "tone";
    const ALL: &'static [Self] = &[Self::Primary, Self::Sunset, Self::Ocean];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Sunset => "sunset",
            Self::Ocean => "ocean",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Gradient direction for [`GradientContainer`].
pub enum GradientDirection {
    /// Left to right.
    #[default]
    ToRight,
    /// Top to bottom.
    ToBottom,
}

impl VariantKey for GradientDirection {
    const AXIS: &'static str = "direction";
    const ALL: &'static [Self] = &[Self::ToRight, Self::ToBottom];

    fn token(self) -> &'static str {
        match self {
            Self::ToRight => "to-right",
            Self::ToBottom => "to-bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Intent of a dialog action button.
pub enum ActionIntent {
    /// Primary confirm.
    #[default]
    Primary,
    /// Destructive confirm.
    Destructive,
    /// Dismiss/cancel.
    Cancel,
}

impl VariantKey for ActionIntent {
    const AXIS: &'static str = "intent";
    const ALL: &'static [Self] = &[Self::Primary, Self::Destructive, Self::Cancel];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Destructive => "destructive",
            Self::Cancel => "cancel",
        }
    }
}

/// Whether `name` belongs to a primitive's own styling or `data-ui-*` contract.
fn is_reserved_attr(name: &str) -> bool {
    matches!(name, "class" | "data-state") || name.starts_with("data-ui-")
}

/// Caller attributes forwarded onto a primitive's root element.
///
/// Names the primitive owns are dropped so its contract stays intact.
pub(crate) fn passthrough_attrs(
    kind: &'static str,
    attrs: Vec<(&'static str, Attribute)>,
) -> Vec<(&'static str, Attribute)> {
    attrs
        .into_iter()
        .filter(|(name, _)| {
            let reserved = is_reserved_attr(name);
            if reserved {
                logging::warn!("{kind}: ignoring pass-through `{name}`, use the component prop");
            }
            !reserved
        })
        .collect()
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn on_off_token(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn attr(name: &'static str, value: &'static str) -> (&'static str, Attribute) {
        (name, Attribute::String(value.into()))
    }

    #[test]
    fn passthrough_keeps_caller_attributes() {
        let kept = passthrough_attrs(
            "badge",
            vec![
                attr("id", "release-badge"),
                attr("aria-describedby", "release-notes"),
                attr("data-testid", "badge"),
            ],
        );
        let names: Vec<_> = kept.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["id", "aria-describedby", "data-testid"]);
    }

    #[test]
    fn passthrough_cannot_override_the_primitive_contract() {
        let kept = passthrough_attrs(
            "tag",
            vec![
                attr("class", "text-red-500"),
                attr("data-ui-kind", "button"),
                attr("data-state", "on"),
                attr("title", "design"),
            ],
        );
        let names: Vec<_> = kept.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["title"]);
    }
}
