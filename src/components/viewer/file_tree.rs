//! File tree panel.
//!
//! Renders the repository forest with expand/collapse folders, per-file
//! cached indicators, and the active selection highlighted. Clicking a
//! folder toggles it; clicking a file asks the page to open it.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::tree::{FileTree, TreeNode};
use crate::core::viewer::ViewerState;
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/viewer/file_tree.module.css");

/// Pixels of indentation per tree level.
const INDENT_PX: usize = 16;

/// Icon for a row, by kind and extension.
fn row_icon(node: &TreeNode, expanded: bool) -> icondata::Icon {
    if node.is_dir() {
        return if expanded { ic::FOLDER_OPEN } else { ic::FOLDER };
    }
    let ext = node
        .name
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "js" | "jsx" | "ts" | "tsx" | "py" | "java" | "cpp" | "c" | "rs" | "go" => ic::CODE,
        "json" | "xml" | "yaml" | "yml" | "toml" => ic::FILE_CONFIG,
        "png" | "jpg" | "jpeg" | "gif" | "svg" | "ico" => ic::FILE_IMAGE,
        "sql" | "db" => ic::DATABASE,
        _ => ic::FILE_TEXT,
    }
}

/// File tree side panel.
#[component]
pub fn FileTreePanel(
    tree: Signal<FileTree>,
    viewer: RwSignal<ViewerState>,
    on_open: Callback<String>,
) -> impl IntoView {
    view! {
        <div class=css::panel>
            <div class=css::panelHeader>
                <h2 class=css::panelTitle>
                    <Icon icon=ic::FOLDER />
                    "Files"
                </h2>
                <div class=css::cacheInfo>
                    <span>
                        {move || format!("Cached files: {}", viewer.with(|v| v.cache().len()))}
                    </span>
                    <Show when=move || viewer.with(|v| !v.cache().is_empty())>
                        <span class=css::cacheDot></span>
                    </Show>
                </div>
            </div>

            <div class=css::treeScroll role="tree" aria-label="Repository files">
                {move || {
                    let state = viewer.get();
                    tree.with(|tree| {
                        if tree.is_empty() {
                            view! { <p class=css::empty>"This repository has no files to preview."</p> }
                                .into_any()
                        } else {
                            render_level(tree.roots(), 0, &state, viewer, on_open)
                        }
                    })
                }}
            </div>
        </div>
    }
}

fn render_level(
    nodes: &[TreeNode],
    depth: usize,
    state: &ViewerState,
    viewer: RwSignal<ViewerState>,
    on_open: Callback<String>,
) -> AnyView {
    nodes
        .iter()
        .map(|node| render_node(node, depth, state, viewer, on_open))
        .collect_view()
        .into_any()
}

fn render_node(
    node: &TreeNode,
    depth: usize,
    state: &ViewerState,
    viewer: RwSignal<ViewerState>,
    on_open: Callback<String>,
) -> AnyView {
    let path = node.full_path.clone();
    let is_dir = node.is_dir();
    let has_children = !node.children().is_empty();
    let expanded = state.is_expanded(&path);
    let selected = state.selected() == Some(path.as_str());
    let cached = !is_dir && state.cache().contains(&path);
    let icon = row_icon(node, expanded);
    let indent = format!("padding-left: {}px", depth * INDENT_PX + 8);

    let row_class = if selected {
        format!("{} {}", css::row, css::selected)
    } else {
        css::row.to_string()
    };
    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };
    let chevron_class = if expanded {
        format!("{} {}", css::chevron, css::chevronOpen)
    } else {
        css::chevron.to_string()
    };

    let click_path = path.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        if is_dir {
            viewer.update(|v| v.toggle_dir(&click_path));
        } else {
            on_open.run(click_path.clone());
        }
    };

    let size = (!is_dir && node.size.is_some()).then(|| format_size(node.size));
    let children = (is_dir && expanded && has_children)
        .then(|| render_level(node.children(), depth + 1, state, viewer, on_open));

    view! {
        <div
            class=row_class
            style=indent
            on:click=handle_click
            role="treeitem"
            aria-expanded=is_dir.then_some(expanded)
            aria-selected=selected
        >
            <span class=chevron_class aria-hidden="true">
                {(is_dir && has_children).then(|| view! { <Icon icon=ic::CHEVRON_RIGHT /> })}
            </span>
            <span class=css::icon aria-hidden="true">
                <Icon icon=icon />
            </span>
            <span class=name_class>{node.name.clone()}</span>
            {size.map(|size| view! { <span class=css::size>{size}</span> })}
            {cached.then(|| view! { <span class=css::cachedDot title="File cached"></span> })}
        </div>
        {children}
    }
    .into_any()
}
