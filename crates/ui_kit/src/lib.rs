//! Presentational Leptos component library.
//!
//! Every primitive maps a small typed prop set through a declarative variant
//! [`Recipe`] to a utility class string and renders one element carrying the
//! stable `data-ui-*` contract. Composite widgets arrange primitives around
//! [`Slot`] content. [`SearchInput`] is the one stateful widget: a trailing-edge
//! debounce ([`DebouncedSearch`]) committing into a URL query parameter.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod count_up;
pub mod debounce;
mod primitives;
pub mod query;
pub mod recipes;
pub mod slot;
pub mod variants;

pub use config::{SearchConfig, DEFAULT_DEBOUNCE_MS, DEFAULT_PARAM_KEY};
pub use count_up::{format_count, CountUp, CountUpTimeline, DEFAULT_COUNT_UP_DURATION};
pub use debounce::{
    BrowserTimers, DebouncePhase, DebouncedSearch, ManualTimers, PendingTimer, SearchState,
    TimerDriver, TimerError,
};
pub use primitives::{
    avatar_initials, switch_label_id, tooltip_content_id, ActionIntent, AvatarListItem, Badge,
    BadgeVariant, ConfirmationDialog, GradientContainer, GradientDirection, GradientTone,
    NumberDisplayCard, SearchInput, Separator, SeparatorOrientation, Switch, SwitchSize, Tag,
    TagVariant, Text, TextSize, TextTone, Title, TitleLevel, Toggle, ToggleShape, ToggleSize,
    ToggleVariant, Tooltip, TooltipSide, WrapperCard,
};
pub use query::{
    use_query_param_store, MemoryQueryParams, QueryParamError, QueryParamStore,
    RouterQueryParams,
};
pub use slot::Slot;
pub use variants::{class_names, Recipe, UnknownVariant, VariantAxis, VariantKey};

/// Convenience imports for crates composing the component set.
pub mod prelude {
    pub use crate::{
        AvatarListItem, Badge, BadgeVariant, ConfirmationDialog, CountUp, GradientContainer,
        GradientDirection, GradientTone, NumberDisplayCard, SearchInput, Separator,
        SeparatorOrientation, Slot, Switch, SwitchSize, Tag, TagVariant, Text, TextSize,
        TextTone, Title, TitleLevel, Toggle, ToggleShape, ToggleSize, ToggleVariant, Tooltip,
        TooltipSide, VariantKey, WrapperCard,
    };
}
