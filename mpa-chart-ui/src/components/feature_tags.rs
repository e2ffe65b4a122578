//! Protected feature tag list.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FeatureTagsProps {
    pub features: Vec<String>,
}

/// Designated features of the site as small tags. Renders nothing when the
/// backend listed none.
#[component]
pub fn FeatureTags(props: FeatureTagsProps) -> Element {
    if props.features.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            style: "margin: 8px 0;",
            span {
                style: "font-weight: bold; font-size: 13px; margin-right: 8px;",
                "Protected features:"
            }
            for feature in props.features.iter() {
                span {
                    style: "display: inline-block; background: #e7f1ff; color: #0a58ca; border-radius: 12px; padding: 2px 10px; font-size: 12px; margin: 2px 4px 2px 0;",
                    "{feature}"
                }
            }
        }
    }
}
