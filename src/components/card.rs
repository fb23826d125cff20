//! Card container

use leptos::prelude::*;

const CARD_CLASS: &str = "w-96 bg-card text-card-foreground shadow-lg border-0 rounded-md";

/// Merge the card's base classes with caller overrides
pub fn card_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        CARD_CLASS.to_string()
    } else {
        format!("{} {}", CARD_CLASS, extra)
    }
}

/// Bordered, padded, shadowed container used to frame forms
#[component]
pub fn FormCard(
    children: Children,
    /// Extra classes appended to the base card style
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <div class=card_class(&class)>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class_without_override() {
        assert_eq!(card_class(""), CARD_CLASS);
        assert_eq!(card_class("   "), CARD_CLASS);
    }

    #[test]
    fn test_card_class_appends_override() {
        assert_eq!(
            card_class("mt-4"),
            "w-96 bg-card text-card-foreground shadow-lg border-0 rounded-md mt-4"
        );
    }
}
