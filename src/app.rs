//! Folder Todo Frontend App
//!
//! Main application component with two-column layout.

use leptos::prelude::*;

use crate::components::{FolderSidebar, TodoPanel};
use crate::store::create_app_store;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children
    provide_context(create_app_store());

    view! {
        <div class="app-layout">
            // Left: folders
            <FolderSidebar />

            // Right: todos in the current folder
            <TodoPanel />
        </div>
    }
}
