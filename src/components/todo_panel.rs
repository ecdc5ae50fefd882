//! Todo Panel Component
//!
//! Current folder title, the add button and the folder's todos.

use folder_todo_core::{actions, render_todos, TodoEntry};
use leptos::prelude::*;

use crate::dialogs::BrowserDialogs;
use crate::store::{run_action, use_app_store};

#[component]
pub fn TodoPanel() -> impl IntoView {
    let store = use_app_store();
    let todo_view = Memo::new(move |_| store.with(|state| render_todos(state)));

    let add_todo = move |_| {
        run_action(store, |state| actions::add_todo(state, &BrowserDialogs));
    };

    view! {
        <main class="main-content">
            <div class="todo-header">
                <h1 id="current-folder-title">{move || todo_view.with(|list| list.title.clone())}</h1>
                <button id="add-todo-btn" class="add-todo-btn" on:click=add_todo>
                    "Add Todo"
                </button>
            </div>

            <ul id="todo-list" class="todo-list">
                {move || {
                    todo_view
                        .get()
                        .entries
                        .into_iter()
                        .map(|entry| view! { <TodoRow entry=entry /> })
                        .collect_view()
                }}
            </ul>

            <p class="item-count">{move || format!("{} todos", todo_view.with(|list| list.entries.len()))}</p>
        </main>
    }
}

#[component]
fn TodoRow(entry: TodoEntry) -> impl IntoView {
    let store = use_app_store();
    let class = entry.class();
    let label = entry.label.clone();
    let title = entry.title.clone();

    let show = move |_| actions::show_todo(&BrowserDialogs, &entry);

    let delete = move |e: web_sys::MouseEvent| {
        e.stop_propagation();
        run_action(store, |state| actions::delete_todo(state, &BrowserDialogs, &title));
    };

    view! {
        <li class=class on:click=show>
            <span class="todo-label">{label}</span>
            <button class="delete-todo-btn" on:click=delete>"×"</button>
        </li>
    }
}
