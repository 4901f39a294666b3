use super::*;

#[component]
/// Compact categorization label.
pub fn Tag(
    #[prop(optional)] variant: TagVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = passthrough_attrs("tag", attrs);
    let class = recipes::TAG.resolve(&[("variant", variant.token())], class.as_deref());
    view! {
        <span
            class=class
            title=title
            data-ui-primitive="true"
            data-ui-kind="tag"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            {..attrs}
        >
            {children()}
        </span>
    }
}

#[component]
/// Pill-shaped status badge.
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = passthrough_attrs("badge", attrs);
    let class = recipes::BADGE.resolve(&[("variant", variant.token())], class.as_deref());
    view! {
        <div
            class=class
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            {..attrs}
        >
            {children()}
        </div>
    }
}
