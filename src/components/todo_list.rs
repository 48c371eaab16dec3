//! Todo List Component
//!
//! Renders one row per todo from the latest server snapshot.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::models::Todo;

/// List of todos in server order, one checkbox-and-label row each
#[component]
pub fn TodoList(todos: ReadSignal<Vec<Todo>>) -> impl IntoView {
    view! {
        <ul id="todos" class="todo-list">
            <For
                each=move || todos.get()
                // Key on every field so a fresh snapshot rebuilds changed rows
                key=|todo| (todo.id, todo.completed, todo.title.clone())
                children=move |todo| {
                    let id = todo.id;

                    // The checkbox flips before this handler runs; its
                    // post-click state is what gets sent. No refresh follows,
                    // so on failure the checkbox keeps the unconfirmed value
                    // until the next full reload.
                    let toggle_todo = move |ev: web_sys::Event| {
                        let target = ev.target().unwrap();
                        let checkbox = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        let completed = checkbox.checked();
                        spawn_local(async move {
                            if let Err(err) = api::toggle_todo(id, completed).await {
                                web_sys::console::error_1(
                                    &format!("[APP] Toggle failed for todo {}: {}", id, err).into(),
                                );
                            }
                        });
                    };

                    view! {
                        <li class="todo-row">
                            <input
                                type="checkbox"
                                prop:checked=todo.completed
                                on:change=toggle_todo
                            />
                            {todo.title}
                        </li>
                    }
                }
            />
        </ul>
    }
}
