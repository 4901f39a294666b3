use super::*;

#[component]
/// Body text primitive; the default typography for text slots.
pub fn Text(
    #[prop(optional)] size: TextSize,
    #[prop(optional)] tone: TextTone,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = recipes::TEXT.resolve(
        &[("size", size.token()), ("tone", tone.token())],
        class.as_deref(),
    );
    view! {
        <p
            class=class
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-size=size.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </p>
    }
}

#[component]
/// Heading primitive rendering `<h1>`–`<h4>`.
pub fn Title(
    #[prop(optional)] level: TitleLevel,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = recipes::TITLE.resolve(&[("level", level.token())], class.as_deref());
    let token = level.token();
    match level {
        TitleLevel::H1 => view! {
            <h1 class=class id=id data-ui-primitive="true" data-ui-kind="title" data-ui-slot=ui_slot data-ui-level=token>
                {children()}
            </h1>
        }
        .into_view(),
        TitleLevel::H2 => view! {
            <h2 class=class id=id data-ui-primitive="true" data-ui-kind="title" data-ui-slot=ui_slot data-ui-level=token>
                {children()}
            </h2>
        }
        .into_view(),
        TitleLevel::H3 => view! {
            <h3 class=class id=id data-ui-primitive="true" data-ui-kind="title" data-ui-slot=ui_slot data-ui-level=token>
                {children()}
            </h3>
        }
        .into_view(),
        TitleLevel::H4 => view! {
            <h4 class=class id=id data-ui-primitive="true" data-ui-kind="title" data-ui-slot=ui_slot data-ui-level=token>
                {children()}
            </h4>
        }
        .into_view(),
    }
}

#[component]
/// Visual rule between content groups.
///
/// Decorative separators are hidden from assistive technology; semantic ones
/// expose `role="separator"` with their orientation.
pub fn Separator(
    #[prop(optional)] orientation: SeparatorOrientation,
    #[prop(default = true)] decorative: bool,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = recipes::SEPARATOR.resolve(
        &[("orientation", orientation.token())],
        class.as_deref(),
    );
    view! {
        <div
            class=class
            role=if decorative { "none" } else { "separator" }
            aria-orientation=(!decorative).then(|| orientation.token())
            data-ui-primitive="true"
            data-ui-kind="separator"
            data-orientation=orientation.token()
        ></div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Typography a widget wraps around text slot content.
pub(crate) enum SlotTypography {
    Text {
        size: TextSize,
        tone: TextTone,
        class: &'static str,
    },
    Title(TitleLevel),
}

impl SlotTypography {
    pub(crate) const fn text(size: TextSize, tone: TextTone) -> Self {
        Self::Text {
            size,
            tone,
            class: "",
        }
    }
}

/// Renders `slot`, handing text to `wrap` together with the widget's typography.
pub(crate) fn render_slot<N>(
    slot: Slot<N>,
    typography: SlotTypography,
    wrap: impl FnOnce(SlotTypography, String) -> N,
) -> N {
    slot.render_with(|text| wrap(typography, text))
}

pub(crate) fn typography_view(typography: SlotTypography, text: String) -> View {
    match typography {
        SlotTypography::Text { size, tone, class } => view! {
            <Text size=size tone=tone class=class>{text}</Text>
        }
        .into_view(),
        SlotTypography::Title(level) => view! { <Title level=level>{text}</Title> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, PartialEq)]
    enum Node {
        Wrapped(SlotTypography, String),
        Prebuilt(&'static str),
    }

    #[test]
    fn text_slots_receive_the_widget_typography() {
        let typography = SlotTypography::text(TextSize::Sm, TextTone::Muted);
        let rendered = render_slot(Slot::from("Revenue"), typography, Node::Wrapped);
        assert_eq!(rendered, Node::Wrapped(typography, "Revenue".to_string()));
    }

    #[test]
    fn content_slots_skip_the_typography() {
        let rendered = render_slot(
            Slot::Content(Node::Prebuilt("<b>Revenue</b>")),
            SlotTypography::Title(TitleLevel::H3),
            |_, _| panic!("content slots are never wrapped"),
        );
        assert_eq!(rendered, Node::Prebuilt("<b>Revenue</b>"));
    }
}
