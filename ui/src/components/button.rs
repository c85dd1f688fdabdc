use dioxus::prelude::*;

const COMPONENTS_CSS: Asset = asset!("/assets/components.css");

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Destructive,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Outline => "btn btn--outline",
            ButtonVariant::Destructive => "btn btn--destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: COMPONENTS_CSS }
        button {
            class: variant.class(),
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes_are_stable() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn--primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn--outline");
        assert_eq!(ButtonVariant::Destructive.class(), "btn btn--destructive");
    }
}
