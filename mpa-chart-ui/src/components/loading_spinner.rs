//! Loading indicator shown while an analysis is in flight.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = String::from("Analyzing fishing activity data..."))]
    pub message: String,
}

/// Loading indicator with a hint that long ranges take longer.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; justify-content: center; align-items: center; padding: 40px; color: #666;",
            div {
                style: "font-size: 15px;",
                "\u{23f3} {props.message}"
            }
            div {
                style: "font-size: 12px; color: #999; margin-top: 6px;",
                "This may take a moment for large areas or long date ranges"
            }
        }
    }
}
