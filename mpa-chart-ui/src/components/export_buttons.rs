//! Report download buttons (CSV and PDF).

use crate::export::download_report;
use crate::state::AppState;
use dioxus::prelude::*;
use mpa_core::export::ExportKind;

/// Buttons that resend the cached analysis payload to the export endpoints
/// and save the generated file. One export runs at a time.
#[component]
pub fn ExportButtons() -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 10px; margin: 16px 0;",
            ExportButton { kind: ExportKind::Csv }
            ExportButton { kind: ExportKind::Pdf }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ExportButtonProps {
    kind: ExportKind,
}

#[component]
fn ExportButton(props: ExportButtonProps) -> Element {
    let mut state = use_context::<AppState>();
    let kind = props.kind;
    let busy = (state.export_busy)();
    let this_busy = busy == Some(kind);

    let on_click = move |_| {
        if (state.export_busy)().is_some() {
            return;
        }
        let payload = match (state.raw_report)() {
            Some(payload) => payload,
            None => {
                state
                    .error_msg
                    .set(Some("No analysis data available to download".to_string()));
                return;
            }
        };
        let mpa_name = state
            .report
            .read()
            .as_ref()
            .map(|r| r.mpa_name.clone())
            .unwrap_or_default();
        state.export_busy.set(Some(kind));
        spawn(async move {
            if let Err(msg) = download_report(kind, &mpa_name, &payload).await {
                log::warn!("{} export failed: {msg}", kind.label());
                state
                    .error_msg
                    .set(Some(format!("Error downloading {} file", kind.label())));
            }
            state.export_busy.set(None);
        });
    };

    let label = if this_busy {
        format!("Generating {}...", kind.label())
    } else {
        format!("\u{2b07} Download {}", kind.label())
    };

    rsx! {
        button {
            style: "padding: 8px 14px; border: 1px solid #0066cc; background: #0066cc; color: #fff; border-radius: 4px; cursor: pointer; font-size: 13px;",
            disabled: busy.is_some(),
            onclick: on_click,
            "{label}"
        }
    }
}
