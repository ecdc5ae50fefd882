use folder_todo_core::{actions, render_folders, FolderEntry};
use leptos::prelude::*;

use crate::dialogs::BrowserDialogs;
use crate::store::{run_action, use_app_store};

/// Folder list with add, select and delete
#[component]
pub fn FolderSidebar() -> impl IntoView {
    let store = use_app_store();

    let add_folder = move |_| {
        run_action(store, |state| actions::add_folder(state, &BrowserDialogs));
    };

    view! {
        <aside class="folder-sidebar">
            <div class="sidebar-header">
                <h3>"Folders"</h3>
                <button id="add-folder-btn" class="add-folder-btn" on:click=add_folder>
                    "Add Folder"
                </button>
            </div>

            <ul id="folder-list" class="folder-list">
                {move || {
                    store
                        .with(|state| render_folders(state))
                        .into_iter()
                        .map(|entry| view! { <FolderRow entry=entry /> })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}

#[component]
fn FolderRow(entry: FolderEntry) -> impl IntoView {
    let store = use_app_store();
    let name = entry.name.clone();
    let select_name = entry.name.clone();

    let select = move |_| {
        run_action(store, |state| actions::select_folder(state, &select_name));
    };

    let delete = move |e: web_sys::MouseEvent| {
        e.stop_propagation();
        run_action(store, |state| actions::delete_folder(state, &BrowserDialogs, &name));
    };

    view! {
        <li
            class=if entry.active { "folder-item active" } else { "folder-item" }
            on:click=select
        >
            <span class="folder-name">{entry.name}</span>
            <button class="delete-folder-btn" on:click=delete>"Delete"</button>
        </li>
    }
}
