use std::rc::Rc;

use super::*;
use crate::config::{SearchConfig, DEFAULT_DEBOUNCE_MS, DEFAULT_PARAM_KEY};
use crate::debounce::{BrowserTimers, DebouncePhase, DebouncedSearch, TimerDriver};
use crate::query::{use_query_param_store, QueryParamStore};
use crate::variants::class_names;

const FIELD_CLASS: &str = "flex h-10 w-full rounded-md border border-input bg-background py-2 pl-9 pr-9 text-sm ring-offset-background placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50";

#[component]
/// Search field whose value settles into a URL query parameter.
///
/// Keystrokes echo into the field immediately. After `debounce_delay_ms` of
/// quiet the value is committed to `param_key` (when `add_to_param`) or only
/// to the field's local committed value. Changing either setting while a
/// commit is pending cancels it and restarts the window; unmounting cancels
/// it outright.
pub fn SearchInput(
    #[prop(default = DEFAULT_PARAM_KEY.to_string(), into)] param_key: String,
    #[prop(default = MaybeSignal::Static(DEFAULT_DEBOUNCE_MS), into)]
    debounce_delay_ms: MaybeSignal<u64>,
    #[prop(default = MaybeSignal::Static(true), into)] add_to_param: MaybeSignal<bool>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Store receiving committed values; defaults to the enclosing router.
    #[prop(optional)]
    store: Option<Rc<dyn QueryParamStore>>,
    /// Timer source; defaults to browser timeouts.
    #[prop(optional)]
    timers: Option<Rc<dyn TimerDriver>>,
    #[prop(optional)] on_commit: Option<Callback<String>>,
) -> impl IntoView {
    let store = store.unwrap_or_else(use_query_param_store);
    let timers = timers.unwrap_or_else(|| Rc::new(BrowserTimers) as Rc<dyn TimerDriver>);
    let base_config = SearchConfig {
        param_key,
        debounce_delay_ms: debounce_delay_ms.get_untracked(),
        add_to_param: add_to_param.get_untracked(),
    };
    let search = DebouncedSearch::new(timers, store, base_config.clone());

    let initial = search.state();
    let raw_input = create_rw_signal(initial.raw_input);
    let committed = create_rw_signal(initial.committed_value);
    let pending = create_rw_signal(false);

    search.on_commit(move |value| {
        committed.set(Some(value.to_string()));
        pending.set(false);
        if let Some(on_commit) = on_commit.as_ref() {
            on_commit.call(value.to_string());
        }
    });

    let reconfigure = search.clone();
    create_effect(move |_| {
        let config = SearchConfig {
            debounce_delay_ms: debounce_delay_ms.get(),
            add_to_param: add_to_param.get(),
            ..base_config.clone()
        };
        reconfigure.reconfigure(config);
        pending.set(reconfigure.phase() == DebouncePhase::Pending);
    });

    let teardown = search.clone();
    on_cleanup(move || teardown.dispose());

    let typing = search.clone();
    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        raw_input.set(value.clone());
        typing.input(value);
        pending.set(typing.phase() == DebouncePhase::Pending);
    };

    let clearing = search;
    let on_clear = move |_: MouseEvent| {
        raw_input.set(String::new());
        clearing.input(String::new());
        pending.set(clearing.phase() == DebouncePhase::Pending);
    };

    view! {
        <div
            class=class_names(["relative flex w-full items-center", class.as_deref().unwrap_or_default()])
            role="search"
            data-ui-primitive="true"
            data-ui-kind="search-input"
            data-ui-state=move || if pending.get() { "pending" } else { "idle" }
            data-ui-committed=move || committed.get().unwrap_or_default()
        >
            <svg
                class="pointer-events-none absolute left-3 h-4 w-4 text-muted-foreground"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                aria-hidden="true"
            >
                <circle cx="11" cy="11" r="8"></circle>
                <path d="m21 21-4.3-4.3"></path>
            </svg>
            <input
                type="search"
                class=FIELD_CLASS
                id=id
                placeholder=placeholder
                aria-label=aria_label
                autocomplete="off"
                spellcheck="false"
                prop:value=move || raw_input.get()
                disabled=move || disabled.get()
                data-ui-slot="field"
                on:input=on_input
            />
            <Show when=move || !raw_input.get().is_empty() fallback=|| ()>
                <button
                    type="button"
                    class="absolute right-2 rounded-sm p-1 text-muted-foreground hover:text-foreground"
                    aria-label="Clear search"
                    data-ui-slot="clear"
                    on:click=on_clear.clone()
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
