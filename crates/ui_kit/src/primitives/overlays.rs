use super::*;

const TOOLTIP_CONTENT: SlotTypography = SlotTypography::text(TextSize::Xs, TextTone::Default);
const DIALOG_TITLE: SlotTypography = SlotTypography::Title(TitleLevel::H4);
const DIALOG_DESCRIPTION: SlotTypography = SlotTypography::text(TextSize::Sm, TextTone::Muted);

/// `id` of the tooltip bubble described by a trigger.
pub fn tooltip_content_id(trigger_id: &str) -> String {
    format!("{trigger_id}-tooltip")
}

#[component]
/// Hover/focus tooltip anchored to its trigger children.
pub fn Tooltip(
    #[prop(into)] id: String,
    #[prop(into)] content: Slot,
    #[prop(optional)] side: TooltipSide,
    #[prop(optional)] default_open: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let open = create_rw_signal(default_open);
    let content_id = tooltip_content_id(&id);
    let class = recipes::TOOLTIP.resolve(&[("side", side.token())], class.as_deref());
    let content = render_slot(content, TOOLTIP_CONTENT, typography_view);

    view! {
        <span
            class="relative inline-flex"
            id=id
            aria-describedby=content_id.clone()
            data-ui-primitive="true"
            data-ui-kind="tooltip"
            data-state=move || if open.get() { "open" } else { "closed" }
            on:mouseenter=move |_| open.set(true)
            on:mouseleave=move |_| open.set(false)
            on:focusin=move |_: FocusEvent| open.set(true)
            on:focusout=move |_: FocusEvent| open.set(false)
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    open.set(false);
                }
            }
        >
            {children()}
            <span
                id=content_id
                role="tooltip"
                class=class
                hidden=move || !open.get()
                data-ui-slot="tooltip-content"
                data-side=side.token()
            >
                {content}
            </span>
        </span>
    }
}

/// Whether an `open` transition should move focus into the dialog panel.
fn focus_on_open(was_open: Option<bool>, open: bool) -> bool {
    open && was_open != Some(true)
}

#[component]
/// Modal confirm/cancel prompt rendered as an `alertdialog`.
///
/// Visibility is owned by the caller: the dialog calls `on_confirm` or
/// `on_cancel` (Escape and backdrop clicks cancel) and the caller closes it.
pub fn ConfirmationDialog(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(into)] title: Slot,
    #[prop(optional, into)] description: Option<Slot>,
    #[prop(default = "Confirm".to_string(), into)] confirm_label: String,
    #[prop(default = "Cancel".to_string(), into)] cancel_label: String,
    #[prop(optional)] destructive: bool,
    #[prop(default = "confirmation-dialog".to_string(), into)] id: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_confirm: Option<Callback<()>>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let title_id = format!("{id}-title");
    let description_id = description.as_ref().map(|_| format!("{id}-description"));
    let confirm_intent = if destructive {
        ActionIntent::Destructive
    } else {
        ActionIntent::Primary
    };
    let confirm_class = recipes::ACTION.resolve(&[("intent", confirm_intent.token())], None);
    let cancel_class = recipes::ACTION.resolve(&[("intent", ActionIntent::Cancel.token())], None);
    let panel_class = crate::variants::class_names([
        "fixed left-1/2 top-1/2 z-50 grid w-full max-w-lg -translate-x-1/2 -translate-y-1/2 gap-4 border bg-background p-6 shadow-lg sm:rounded-lg",
        class.as_deref().unwrap_or_default(),
    ]);

    let panel_ref = create_node_ref::<html::Div>();
    create_effect(move |was_open: Option<bool>| {
        let is_open = open.get();
        if focus_on_open(was_open, is_open) {
            request_animation_frame(move || {
                if let Some(panel) = panel_ref.get_untracked() {
                    let _ = panel.focus();
                }
            });
        }
        is_open
    });

    let cancel = move || {
        if let Some(on_cancel) = on_cancel.as_ref() {
            on_cancel.call(());
        }
    };

    let title = render_slot(title, DIALOG_TITLE, typography_view);
    let description = description
        .map(|description| render_slot(description, DIALOG_DESCRIPTION, typography_view));

    view! {
        <div
            data-ui-primitive="true"
            data-ui-kind="confirmation-dialog"
            data-state=move || if open.get() { "open" } else { "closed" }
            hidden=move || !open.get()
        >
            <div
                class="fixed inset-0 z-50 bg-black/80"
                data-ui-slot="overlay"
                aria-hidden="true"
                on:click=move |_: MouseEvent| cancel()
            ></div>
            <div
                _ref=panel_ref
                id=id
                class=panel_class
                role="alertdialog"
                aria-modal="true"
                aria-labelledby=title_id.clone()
                aria-describedby=description_id.clone()
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        cancel();
                    }
                }
            >
                <div class="flex flex-col space-y-2 text-center sm:text-left" data-ui-slot="header">
                    <div id=title_id data-ui-slot="title">{title}</div>
                    {description.map(|description| view! {
                        <div id=description_id data-ui-slot="description">{description}</div>
                    })}
                </div>
                <div
                    class="flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2"
                    data-ui-slot="footer"
                >
                    <button
                        type="button"
                        class=cancel_class
                        data-ui-slot="cancel"
                        on:click=move |_: MouseEvent| cancel()
                    >
                        {cancel_label}
                    </button>
                    <button
                        type="button"
                        class=confirm_class
                        data-ui-slot="confirm"
                        data-ui-variant=confirm_intent.token()
                        on:click=move |_: MouseEvent| {
                            if let Some(on_confirm) = on_confirm.as_ref() {
                                on_confirm.call(());
                            }
                        }
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn opening_the_dialog_moves_focus_into_the_panel() {
        assert!(focus_on_open(None, true));
        assert!(focus_on_open(Some(false), true));
        assert!(!focus_on_open(Some(true), true));
        assert!(!focus_on_open(Some(true), false));
        assert!(!focus_on_open(None, false));
    }

    #[test]
    fn dialog_text_slots_use_heading_and_muted_copy() {
        let wrap = |slot: &str, typography| {
            render_slot(Slot::from(slot), typography, |typography, text| (typography, text))
        };
        assert_eq!(
            wrap("Delete this project?", DIALOG_TITLE),
            (SlotTypography::Title(TitleLevel::H4), "Delete this project?".to_string())
        );
        assert_eq!(
            wrap("Applied immediately.", DIALOG_DESCRIPTION).0,
            SlotTypography::text(TextSize::Sm, TextTone::Muted)
        );
        assert_eq!(
            wrap("Copied", TOOLTIP_CONTENT).0,
            SlotTypography::text(TextSize::Xs, TextTone::Default)
        );
    }

    #[test]
    fn tooltip_id_derives_from_trigger() {
        assert_eq!(tooltip_content_id("copy-link"), "copy-link-tooltip");
    }
}
