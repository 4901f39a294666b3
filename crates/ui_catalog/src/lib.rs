//! Story catalog for visual review of the `ui_kit` component set.
//!
//! Every story renders through the public prop contract of one component,
//! once per fixture variant. The catalog filter is itself a [`SearchInput`]
//! bound to the `q` query parameter, so filtered views are shareable links.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod stories;

use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ui_kit::prelude::*;
use ui_kit::use_query_param_store;

pub use stories::{catalog, recipe_variants, Story, StoryCategory, StoryVariant};

/// Query parameter holding the catalog filter.
pub const FILTER_PARAM: &str = "q";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Interactive demo state shared by the catalog's live stories.
pub struct CatalogState {
    /// Restricts the listing to one category.
    pub category: Option<StoryCategory>,
    /// Live switch demo.
    pub switch_checked: bool,
    /// Live toggle demo.
    pub toggle_pressed: bool,
    /// Whether the dialog story is open.
    pub dialog_open: bool,
    /// Outcome of the last dialog interaction.
    pub last_dialog_result: Option<String>,
    /// Count clicks on the number card story.
    pub card_clicks: u32,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            category: None,
            switch_checked: true,
            toggle_pressed: false,
            dialog_open: false,
            last_dialog_result: None,
            card_clicks: 0,
        }
    }
}

/// Stories visible under a category restriction and filter text.
pub fn visible_stories(
    stories: &[Story],
    category: Option<StoryCategory>,
    filter: &str,
) -> Vec<Story> {
    stories
        .iter()
        .filter(|story| category.map_or(true, |category| story.category == category))
        .filter(|story| story.matches(filter))
        .cloned()
        .collect()
}

#[component]
/// Catalog page listing every story.
pub fn CatalogApp(
    /// Previously saved demo state.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives the demo state whenever it changes.
    #[prop(optional)]
    on_state_change: Option<Callback<Value>>,
) -> impl IntoView {
    let state = create_rw_signal(CatalogState::default());
    let last_saved = create_rw_signal::<Option<String>>(None);

    if let Some(restored_state) = restored_state {
        match serde_json::from_value::<CatalogState>(restored_state) {
            Ok(restored) => {
                last_saved.set(serde_json::to_string(&restored).ok());
                state.set(restored);
            }
            Err(err) => logging::warn!("catalog state restore failed: {err}"),
        }
    }

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("catalog state serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_state_change) = on_state_change.as_ref() {
            if let Ok(value) = serde_json::to_value(&snapshot) {
                on_state_change.call(value);
            }
        }
    });

    let initial_filter = use_query_param_store()
        .get_param(FILTER_PARAM)
        .unwrap_or_default();
    let filter = create_rw_signal(initial_filter);
    let stories = store_value(catalog());
    let visible = create_memo(move |_| {
        stories.with_value(|stories| {
            visible_stories(stories, state.with(|state| state.category), &filter.get())
        })
    });

    view! {
        <main class="mx-auto flex max-w-6xl flex-col gap-8 p-8" data-ui-kind="catalog">
            <header class="flex flex-col gap-4">
                <Title level=TitleLevel::H1>"Component Catalog"</Title>
                <Text tone=TextTone::Muted>
                    "Every primitive and composite, rendered once per fixture variant."
                </Text>
                <SearchInput
                    param_key=FILTER_PARAM
                    placeholder="Filter stories"
                    aria_label="Filter stories"
                    on_commit=Callback::new(move |value: String| filter.set(value))
                />
                <div class="flex flex-wrap gap-2" role="group" aria-label="Category">
                    <Toggle
                        shape=ToggleShape::Rounded
                        variant=ToggleVariant::Outline
                        size=ToggleSize::Sm
                        pressed=Signal::derive(move || state.with(|state| state.category.is_none()))
                        on_pressed_change=Callback::new(move |_| {
                            state.update(|state| state.category = None);
                        })
                    >
                        "All"
                    </Toggle>
                    {StoryCategory::ALL
                        .into_iter()
                        .map(|category| view! {
                            <Toggle
                                shape=ToggleShape::Rounded
                                variant=ToggleVariant::Outline
                                size=ToggleSize::Sm
                                pressed=Signal::derive(move || {
                                    state.with(|state| state.category == Some(category))
                                })
                                on_pressed_change=Callback::new(move |_| {
                                    state.update(|state| state.category = Some(category));
                                })
                            >
                                {category.label()}
                            </Toggle>
                        })
                        .collect_view()}
                </div>
            </header>

            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=move || view! {
                    <Text tone=TextTone::Muted>
                        {move || format!("No stories match \u{201c}{}\u{201d}.", filter.get())}
                    </Text>
                }
            >
                <For
                    each=move || visible.get()
                    key=|story| story.id
                    children=move |story| view! { <StorySection story=story state=state /> }
                />
            </Show>

            <footer class="flex flex-wrap gap-2">
                <Tag variant=TagVariant::Secondary attr:aria-live="polite">
                    {move || format!("{} stories", visible.with(Vec::len))}
                </Tag>
                <Tag variant=TagVariant::Secondary>
                    {move || format!("Switch: {}", if state.get().switch_checked { "On" } else { "Off" })}
                </Tag>
                <Tag variant=TagVariant::Secondary>
                    {move || format!("Card clicks: {}", state.get().card_clicks)}
                </Tag>
            </footer>
        </main>
    }
}

#[component]
fn StorySection(story: Story, state: RwSignal<CatalogState>) -> impl IntoView {
    let story_id = story.id;
    view! {
        <section class="flex flex-col gap-4" id=format!("story-{story_id}") data-story=story_id>
            <div class="flex items-center gap-3">
                <Title level=TitleLevel::H3>{story.title}</Title>
                <Badge variant=BadgeVariant::Outline>{story.category.label()}</Badge>
            </div>
            <Separator />
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {story
                    .variants
                    .into_iter()
                    .enumerate()
                    .map(|(index, variant)| {
                        let rendered = render_variant(story_id, index, &variant, state);
                        let caption = variant.name.clone();
                        view! {
                            <figure class="flex flex-col gap-2" data-story-variant=variant.name>
                                <figcaption>
                                    <Text size=TextSize::Xs tone=TextTone::Muted>{caption}</Text>
                                </figcaption>
                                <div class="flex min-h-16 items-center">{rendered}</div>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn render_variant(
    story_id: &'static str,
    index: usize,
    variant: &StoryVariant,
    state: RwSignal<CatalogState>,
) -> View {
    match story_id {
        "text" => view! {
            <Text
                size=TextSize::parse_or_default(variant.prop("size"))
                tone=TextTone::parse_or_default(variant.prop("tone"))
            >
                "The quick brown fox jumps over the lazy dog."
            </Text>
        }
        .into_view(),
        "title" => view! {
            <Title level=TitleLevel::parse_or_default(variant.prop("level"))>"Quarterly report"</Title>
        }
        .into_view(),
        "separator" => {
            let orientation = SeparatorOrientation::parse_or_default(variant.prop("orientation"));
            let decorative = variant.prop("decorative") != "false";
            view! {
                <div class="flex h-10 w-full items-center gap-4">
                    <Text size=TextSize::Sm>"Left"</Text>
                    <Separator orientation=orientation decorative=decorative />
                    <Text size=TextSize::Sm>"Right"</Text>
                </div>
            }
            .into_view()
        }
        "switch" => {
            let disabled = variant.flag("disabled");
            let fixed = variant.flag("checked");
            let checked = Signal::derive(move || {
                if disabled {
                    fixed
                } else {
                    state.with(|state| state.switch_checked)
                }
            });
            let size = SwitchSize::parse_or_default(variant.prop("size"));
            let on_checked_change = Callback::new(move |next| {
                state.update(|state| state.switch_checked = next);
            });
            match variant.prop("label") {
                "" => view! {
                    <Switch
                        id=format!("story-switch-{index}")
                        size=size
                        aria_label="Demo switch"
                        attr:data-story-sample="switch"
                        checked=checked
                        disabled=disabled
                        on_checked_change=on_checked_change
                    />
                }
                .into_view(),
                label => view! {
                    <Switch
                        size=size
                        label=label
                        checked=checked
                        disabled=disabled
                        on_checked_change=on_checked_change
                    />
                }
                .into_view(),
            }
        }
        "toggle" => view! {
            <Toggle
                shape=ToggleShape::parse_or_default(variant.prop("shape"))
                variant=ToggleVariant::parse_or_default(variant.prop("variant"))
                size=ToggleSize::parse_or_default(variant.prop("size"))
                aria_label="Toggle bold"
                attr:aria-keyshortcuts="Control+B"
                pressed=Signal::derive(move || state.with(|state| state.toggle_pressed))
                on_pressed_change=Callback::new(move |next| {
                    state.update(|state| state.toggle_pressed = next);
                })
            >
                <strong>"B"</strong>
            </Toggle>
        }
        .into_view(),
        "tag" => view! {
            <Tag
                variant=TagVariant::parse_or_default(variant.prop("variant"))
                attr:id=format!("story-tag-{index}")
                attr:data-story-sample="tag"
            >
                "design"
            </Tag>
        }
        .into_view(),
        "badge" => view! {
            <Badge
                variant=BadgeVariant::parse_or_default(variant.prop("variant"))
                attr:id=format!("story-badge-{index}")
                attr:data-story-sample="badge"
            >
                "New"
            </Badge>
        }
        .into_view(),
        "tooltip" => view! {
            <Tooltip
                id=format!("story-tooltip-{index}")
                side=TooltipSide::parse_or_default(variant.prop("side"))
                content="Copied to clipboard"
            >
                <Toggle variant=ToggleVariant::Outline>"Hover me"</Toggle>
            </Tooltip>
        }
        .into_view(),
        "avatar-list-item" => {
            if variant.flag("node") {
                view! {
                    <AvatarListItem
                        title=view! { <a class="font-medium underline" href="#">"Linus Torvalds"</a> }.into_view()
                        subtitle="Maintainer"
                    >
                        <Tag variant=TagVariant::Secondary>"owner"</Tag>
                    </AvatarListItem>
                }
                .into_view()
            } else {
                let title = variant.prop("title");
                match variant.prop("subtitle") {
                    "" => view! { <AvatarListItem title=title /> }.into_view(),
                    subtitle => view! { <AvatarListItem title=title subtitle=subtitle /> }.into_view(),
                }
            }
        }
        "confirmation-dialog" => {
            let destructive = variant.flag("destructive");
            let open = Signal::derive(move || state.with(|state| state.dialog_open));
            let close = move |result: &str| {
                let result = result.to_string();
                state.update(|state| {
                    state.dialog_open = false;
                    state.last_dialog_result = Some(result);
                });
            };
            view! {
                <div class="flex flex-col gap-2">
                    <Toggle
                        variant=ToggleVariant::Outline
                        on_pressed_change=Callback::new(move |_| {
                            state.update(|state| state.dialog_open = true);
                        })
                    >
                        {if destructive { "Delete project" } else { "Publish" }}
                    </Toggle>
                    <Text size=TextSize::Xs tone=TextTone::Muted>
                        {move || state.with(|state| state.last_dialog_result.clone()).unwrap_or_default()}
                    </Text>
                    <ConfirmationDialog
                        id=format!("story-dialog-{index}")
                        open=open
                        destructive=destructive
                        title=if destructive { "Delete this project?" } else { "Publish changes?" }
                        description="This action is applied immediately."
                        confirm_label=if destructive { "Delete" } else { "Publish" }
                        on_confirm=Callback::new(move |_| close("confirmed"))
                        on_cancel=Callback::new(move |_| close("cancelled"))
                    />
                </div>
            }
            .into_view()
        }
        "number-display-card" => {
            let count = variant.prop("count").parse::<i64>().unwrap_or_default();
            if variant.flag("clickable") {
                view! {
                    <NumberDisplayCard
                        title="Active users"
                        count=count
                        subtitle=variant.prop("subtitle")
                        icon="👥"
                        on_click=Callback::new(move |_| {
                            state.update(|state| state.card_clicks += 1);
                        })
                    />
                }
                .into_view()
            } else {
                view! { <NumberDisplayCard title="Active users" count=count icon="👥" /> }.into_view()
            }
        }
        "wrapper-card" => {
            let body = || view! { <Text size=TextSize::Sm>"Card body content."</Text> };
            match variant.prop("title") {
                "" => view! { <WrapperCard class="w-full">{body()}</WrapperCard> }.into_view(),
                title => view! {
                    <WrapperCard
                        title=title
                        description=variant.prop("description")
                        class="w-full"
                    >
                        {body()}
                    </WrapperCard>
                }
                .into_view(),
            }
        }
        "gradient-container" => view! {
            <GradientContainer
                tone=GradientTone::parse_or_default(variant.prop("tone"))
                direction=GradientDirection::parse_or_default(variant.prop("direction"))
                class="w-full"
            >
                <Text size=TextSize::Sm class="text-inherit">"Upgrade to Pro"</Text>
            </GradientContainer>
        }
        .into_view(),
        "search-input" => {
            let add_to_param = variant.prop("add_to_param") != "false";
            let delay = variant
                .prop("delay")
                .parse::<u64>()
                .unwrap_or(ui_kit::DEFAULT_DEBOUNCE_MS);
            let param = match variant.prop("param") {
                "" => ui_kit::DEFAULT_PARAM_KEY,
                param => param,
            };
            let committed = create_rw_signal(String::new());
            view! {
                <div class="flex w-full flex-col gap-2">
                    <SearchInput
                        param_key=param
                        add_to_param=add_to_param
                        debounce_delay_ms=delay
                        placeholder="Type to search"
                        on_commit=Callback::new(move |value: String| committed.set(value))
                    />
                    <Text size=TextSize::Xs tone=TextTone::Muted>
                        {move || format!("Committed: \u{201c}{}\u{201d}", committed.get())}
                    </Text>
                </div>
            }
            .into_view()
        }
        other => {
            logging::warn!("no renderer for story `{other}`");
            ().into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn category_and_filter_compose() {
        let stories = catalog();
        let ids = |category, filter| {
            visible_stories(&stories, category, filter)
                .into_iter()
                .map(|story| story.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(ids(Some(StoryCategory::Inputs), ""), vec!["search-input"]);
        assert_eq!(
            ids(Some(StoryCategory::Composites), "card"),
            vec!["number-display-card", "wrapper-card"]
        );
        assert!(ids(Some(StoryCategory::Primitives), "card").is_empty());
        assert_eq!(ids(None, "").len(), stories.len());
    }

    #[test]
    fn partial_state_restores_with_defaults() {
        let state: CatalogState =
            serde_json::from_value(serde_json::json!({ "category": "composites" }))
                .expect("restore state");
        assert_eq!(
            state,
            CatalogState {
                category: Some(StoryCategory::Composites),
                ..CatalogState::default()
            }
        );
    }
}
