use std::time::Duration;

use super::*;
use crate::count_up::{CountUp, CountUpTimeline, DEFAULT_COUNT_UP_DURATION};
use crate::variants::class_names;

const CARD_CLASS: &str = "rounded-xl border bg-card text-card-foreground shadow-sm";

const WRAPPER_TITLE: SlotTypography = SlotTypography::Title(TitleLevel::H3);
const WRAPPER_DESCRIPTION: SlotTypography = SlotTypography::text(TextSize::Sm, TextTone::Muted);
const METRIC_TITLE: SlotTypography = SlotTypography::text(TextSize::Sm, TextTone::Muted);
const METRIC_SUBTITLE: SlotTypography = SlotTypography::text(TextSize::Xs, TextTone::Muted);
const METRIC_ICON: SlotTypography = SlotTypography::text(TextSize::Lg, TextTone::Default);
const AVATAR_TITLE: SlotTypography = SlotTypography::Text {
    size: TextSize::Sm,
    tone: TextTone::Default,
    class: "font-medium leading-none",
};
const AVATAR_SUBTITLE: SlotTypography = SlotTypography::text(TextSize::Sm, TextTone::Muted);

/// Counter animation shown by a metric card for `count`.
fn metric_timeline(count: i64, duration: Duration) -> CountUpTimeline {
    CountUpTimeline::new(0, count, duration)
}

/// Up to two uppercase initials from a display name.
pub fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
/// Card frame with optional heading copy around arbitrary content.
pub fn WrapperCard(
    #[prop(optional, into)] title: Option<Slot>,
    #[prop(optional, into)] description: Option<Slot>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || description.is_some();
    let title = title.map(|title| render_slot(title, WRAPPER_TITLE, typography_view));
    let description = description
        .map(|description| render_slot(description, WRAPPER_DESCRIPTION, typography_view));

    view! {
        <section
            class=class_names([CARD_CLASS, class.as_deref().unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="wrapper-card"
            data-ui-slot=ui_slot
        >
            {has_header.then(|| view! {
                <header class="flex flex-col space-y-1.5 p-6" data-ui-slot="header">
                    {title}
                    {description}
                </header>
            })}
            <div class="p-6 pt-0" data-ui-slot="content">{children()}</div>
        </section>
    }
}

#[component]
/// Metric card whose count animates from zero to `count`.
pub fn NumberDisplayCard(
    #[prop(into)] title: Slot,
    count: i64,
    #[prop(optional, into)] subtitle: Option<Slot>,
    #[prop(optional, into)] icon: Option<Slot>,
    #[prop(default = DEFAULT_COUNT_UP_DURATION)] duration: Duration,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let title = render_slot(title, METRIC_TITLE, typography_view);
    let subtitle = subtitle.map(|subtitle| render_slot(subtitle, METRIC_SUBTITLE, typography_view));
    let icon = icon.map(|icon| render_slot(icon, METRIC_ICON, typography_view));
    let timeline = metric_timeline(count, duration);
    let counter = view! {
        <CountUp
            start=timeline.start()
            end=timeline.end()
            duration=timeline.duration()
            class="text-3xl font-bold tabular-nums"
        />
    };
    let count_region = match on_click {
        Some(on_click) => view! {
            <button
                type="button"
                class="text-left focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring"
                data-ui-slot="count"
                on:click=move |ev| on_click.call(ev)
            >
                {counter}
            </button>
        }
        .into_view(),
        None => view! { <div data-ui-slot="count">{counter}</div> }.into_view(),
    };

    view! {
        <article
            class=class_names([CARD_CLASS, "p-6", class.as_deref().unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="number-display-card"
            data-ui-value=count
        >
            <div class="flex items-center justify-between gap-4" data-ui-slot="header">
                <div data-ui-slot="title">{title}</div>
                {icon.map(|icon| view! {
                    <div class="text-muted-foreground" aria-hidden="true" data-ui-slot="icon">{icon}</div>
                })}
            </div>
            {count_region}
            {subtitle.map(|subtitle| view! { <div data-ui-slot="subtitle">{subtitle}</div> })}
        </article>
    }
}

#[component]
/// Gradient-filled surface.
pub fn GradientContainer(
    #[prop(optional)] tone: GradientTone,
    #[prop(optional)] direction: GradientDirection,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = recipes::GRADIENT.resolve(
        &[("tone", tone.token()), ("direction", direction.token())],
        class.as_deref(),
    );
    view! {
        <div
            class=class
            data-ui-primitive="true"
            data-ui-kind="gradient-container"
            data-ui-slot=ui_slot
            data-ui-tone=tone.token()
            data-ui-direction=direction.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// List row with an avatar, a title, an optional subtitle, and trailing content.
///
/// Without `avatar_src` the avatar shows initials derived from a text title.
pub fn AvatarListItem(
    #[prop(into)] title: Slot,
    #[prop(optional, into)] subtitle: Option<Slot>,
    #[prop(optional, into)] avatar_src: Option<String>,
    #[prop(optional, into)] avatar_alt: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let initials = title.as_text().map(avatar_initials).unwrap_or_default();
    let avatar_alt = avatar_alt.or_else(|| title.as_text().map(str::to_string));
    let avatar = match avatar_src {
        Some(src) => view! {
            <img class="aspect-square h-full w-full object-cover" src=src alt=avatar_alt />
        }
        .into_view(),
        None => view! {
            <span
                class="flex h-full w-full items-center justify-center rounded-full bg-muted text-sm font-medium"
                aria-hidden="true"
            >
                {initials}
            </span>
        }
        .into_view(),
    };
    let title = render_slot(title, AVATAR_TITLE, typography_view);
    let subtitle = subtitle.map(|subtitle| render_slot(subtitle, AVATAR_SUBTITLE, typography_view));

    view! {
        <div
            class=class_names(["flex items-center gap-4 py-2", class.as_deref().unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="avatar-list-item"
        >
            <span
                class="relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full"
                data-ui-slot="avatar"
            >
                {avatar}
            </span>
            <div class="grid flex-1 gap-1" data-ui-slot="copy">
                {title}
                {subtitle}
            </div>
            {children.map(|children| view! {
                <div class="ml-auto" data-ui-slot="trailing">{children()}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, PartialEq)]
    enum Node {
        Wrapped(SlotTypography, String),
        Prebuilt,
    }

    fn wrapped(slot: &str, typography: SlotTypography) -> Node {
        render_slot(Slot::from(slot), typography, Node::Wrapped)
    }

    #[test]
    fn card_headings_wrap_text_in_their_typography() {
        assert_eq!(
            wrapped("Billing", WRAPPER_TITLE),
            Node::Wrapped(SlotTypography::Title(TitleLevel::H3), "Billing".to_string())
        );
        assert_eq!(
            wrapped("Manage invoices", WRAPPER_DESCRIPTION),
            Node::Wrapped(
                SlotTypography::text(TextSize::Sm, TextTone::Muted),
                "Manage invoices".to_string()
            )
        );
        assert_eq!(
            wrapped("+12% this week", METRIC_SUBTITLE),
            Node::Wrapped(
                SlotTypography::text(TextSize::Xs, TextTone::Muted),
                "+12% this week".to_string()
            )
        );
        assert!(matches!(
            wrapped("Ada Lovelace", AVATAR_TITLE),
            Node::Wrapped(SlotTypography::Text { class: "font-medium leading-none", .. }, _)
        ));
    }

    #[test]
    fn card_content_slots_pass_through() {
        for typography in [METRIC_TITLE, METRIC_ICON, AVATAR_SUBTITLE] {
            let rendered = render_slot(Slot::Content(Node::Prebuilt), typography, |_, _| {
                panic!("content slots are never wrapped")
            });
            assert_eq!(rendered, Node::Prebuilt);
        }
    }

    #[test]
    fn metric_card_counts_from_zero_to_its_count() {
        let timeline = metric_timeline(150, DEFAULT_COUNT_UP_DURATION);
        assert_eq!(timeline.start(), 0);
        assert_eq!(timeline.end(), 150);
        assert_eq!(timeline.value_at(Duration::ZERO), 0);
        assert_eq!(timeline.value_at(DEFAULT_COUNT_UP_DURATION), 150);
    }

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(avatar_initials("ada lovelace"), "AL");
        assert_eq!(avatar_initials("  Grace  Brewster Hopper "), "GB");
        assert_eq!(avatar_initials("Plato"), "P");
        assert_eq!(avatar_initials(""), "");
    }
}
