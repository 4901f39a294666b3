use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static NEXT_SWITCH_ID: AtomicUsize = AtomicUsize::new(0);

/// Control `id` for a switch: the caller's, or a generated one when a label
/// has to point at the control.
fn switch_control_id(id: Option<String>, labelled: bool) -> Option<String> {
    id.or_else(|| {
        labelled.then(|| format!("ui-switch-{}", NEXT_SWITCH_ID.fetch_add(1, Ordering::Relaxed)))
    })
}

/// `id` of the `<label>` paired with a switch.
pub fn switch_label_id(switch_id: &str) -> String {
    format!("{switch_id}-label")
}

fn checked_state(checked: bool) -> &'static str {
    if checked {
        "checked"
    } else {
        "unchecked"
    }
}

#[component]
/// Binary switch with `role="switch"` semantics and an optional paired label.
///
/// The switch never flips itself: activation forwards the next state through
/// `on_checked_change` and the caller feeds it back through `checked`.
pub fn Switch(
    #[prop(optional)] size: SwitchSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_checked_change: Option<Callback<bool>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let attrs = passthrough_attrs("switch", attrs);
    let id = switch_control_id(id, label.is_some());
    let track_class = recipes::SWITCH.resolve(&[("size", size.token())], class.as_deref());
    let thumb_class = recipes::SWITCH_THUMB.resolve(&[("size", size.token())], None);
    let label_id = id.as_deref().map(switch_label_id);
    let labelled_by = label.as_ref().and(label_id.clone());

    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_checked_change) = on_checked_change.as_ref() {
            on_checked_change.call(!checked.get_untracked());
        }
    };

    let control = view! {
        <button
            type="button"
            class=track_class
            id=id.clone()
            role="switch"
            aria-label=aria_label
            aria-labelledby=labelled_by
            aria-checked=move || checked.get().to_string()
            disabled=move || disabled.get()
            data-state=move || checked_state(checked.get())
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-slot=ui_slot
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| handle_toggle()
            on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                " " | "Enter" => {
                    ev.prevent_default();
                    handle_toggle();
                }
                _ => {}
            }
            {..attrs}
        >
            <span class=thumb_class data-state=move || checked_state(checked.get())></span>
        </button>
    };

    match label {
        Some(label) => view! {
            <div class="inline-flex items-center gap-2" data-ui-slot="switch-field">
                {control}
                <label
                    id=label_id
                    for=id
                    class="text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70"
                >
                    {label}
                </label>
            </div>
        }
        .into_view(),
        None => control.into_view(),
    }
}

#[component]
/// Two-state button (`aria-pressed`) styled through the toggle recipe.
pub fn Toggle(
    #[prop(optional)] shape: ToggleShape,
    #[prop(optional)] variant: ToggleVariant,
    #[prop(optional)] size: ToggleSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_pressed_change: Option<Callback<bool>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = passthrough_attrs("toggle", attrs);
    let class = recipes::TOGGLE.resolve(
        &[
            ("shape", shape.token()),
            ("variant", variant.token()),
            ("size", size.token()),
        ],
        class.as_deref(),
    );

    view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            title=title
            aria-pressed=move || pressed.get().to_string()
            disabled=move || disabled.get()
            data-state=move || on_off_token(pressed.get())
            data-ui-primitive="true"
            data-ui-kind="toggle"
            data-ui-slot=ui_slot
            data-ui-shape=shape.token()
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_: MouseEvent| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_pressed_change) = on_pressed_change.as_ref() {
                    on_pressed_change.call(!pressed.get_untracked());
                }
            }
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn labelled_switch_without_id_gets_a_generated_one() {
        assert_eq!(
            switch_control_id(Some("notifications".to_string()), true),
            Some("notifications".to_string())
        );
        assert_eq!(switch_control_id(None, false), None);

        let first = switch_control_id(None, true).expect("generated id");
        let second = switch_control_id(None, true).expect("generated id");
        assert!(first.starts_with("ui-switch-"));
        assert_ne!(first, second);
        assert_eq!(switch_label_id(&first), format!("{first}-label"));
    }

    #[test]
    fn label_id_derives_from_switch_id() {
        assert_eq!(switch_label_id("notifications"), "notifications-label");
    }

    #[test]
    fn checked_state_matches_data_state_selectors() {
        assert_eq!(checked_state(true), "checked");
        assert_eq!(checked_state(false), "unchecked");
        assert_eq!(on_off_token(true), "on");
    }
}
