//! Code content pane.
//!
//! Shows the selected file with line numbers, a language badge derived from
//! the filename, and a cached marker. Syntax highlighting itself is left to
//! an external collaborator; the pane renders plain text.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::viewer::{FileContent, LOAD_FAILURE_PLACEHOLDER, ViewerState};
use crate::utils::format::language_from_extension;

stylance::import_crate_style!(css, "src/components/viewer/code_pane.module.css");

/// Content pane for the repository viewer.
#[component]
pub fn CodePane(viewer: RwSignal<ViewerState>) -> impl IntoView {
    view! {
        <div class=css::pane>
            {move || {
                let state = viewer.get();
                match state.selected() {
                    None => empty_state(),
                    Some(path) => {
                        let path = path.to_string();
                        let cached = state.cache().contains(&path);
                        let body = if state.is_loading() {
                            loading_state()
                        } else {
                            match state.selected_content() {
                                Some(FileContent::Text(text)) => render_code(text),
                                Some(FileContent::Failed(reason)) => render_failure(reason),
                                None => loading_state(),
                            }
                        };
                        view! {
                            <div class=css::fileHeader>
                                <Icon icon=ic::FILE_TEXT />
                                <h2 class=css::fileName>{path.clone()}</h2>
                                <Show when=move || cached>
                                    <span class=css::cachedBadge>"Cached"</span>
                                </Show>
                                <span class=css::languageBadge>
                                    {language_from_extension(&path)}
                                </span>
                            </div>
                            <div class=css::body>{body}</div>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}

fn empty_state() -> AnyView {
    view! {
        <div class=css::placeholder>
            <span class=css::placeholderIcon><Icon icon=ic::FILE /></span>
            <p class=css::placeholderTitle>"Select a file"</p>
            <p class=css::placeholderHint>
                "Click any file in the explorer to preview it."
            </p>
            <p class=css::placeholderNote>
                "Files are cached for this session."
            </p>
        </div>
    }
    .into_any()
}

fn loading_state() -> AnyView {
    view! {
        <div class=css::loading>
            <span class=css::spinner><Icon icon=ic::LOADER /></span>
            <span>"Loading file..."</span>
        </div>
    }
    .into_any()
}

fn render_failure(reason: &str) -> AnyView {
    view! {
        <div class=css::failure>
            <span class=css::failureIcon><Icon icon=ic::WARNING /></span>
            <p class=css::failureTitle>{LOAD_FAILURE_PLACEHOLDER}</p>
            <p class=css::failureReason>{reason.to_string()}</p>
        </div>
    }
    .into_any()
}

fn render_code(text: &str) -> AnyView {
    let lines: Vec<String> = if text.is_empty() {
        vec![String::new()]
    } else {
        text.lines().map(String::from).collect()
    };

    view! {
        <div class=css::code>
            {lines
                .into_iter()
                .enumerate()
                .map(|(i, line)| {
                    view! {
                        <div class=css::line>
                            <span class=css::lineNumber>{i + 1}</span>
                            <span class=css::lineText>{line}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
