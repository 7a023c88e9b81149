// File: src/components/empty_state.rs
use dioxus::prelude::*;

/// A centered placeholder used for loading, error and "nothing found" states.
#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    primary_action: Option<Element>,
    #[props(default = false)]
    busy: bool,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",
            "aria-busy": if props.busy { "true" } else { "false" },

            h2 {
                "{props.title}"
            }

            if let Some(desc) = props.description {
                p {
                    "{desc}"
                }
            }

            if props.busy {
                progress {}
            }

            if let Some(action) = props.primary_action {
                div {
                    {action}
                }
            }
        }
    }
}
