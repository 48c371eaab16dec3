//! Todo Frontend App
//!
//! Root component: fetches the todo list and renders it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::models::Todo;

#[component]
pub fn App() -> impl IntoView {
    // The visible list is always the latest successful server snapshot;
    // every reload replaces it wholesale.
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Fetch the full list on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_todos().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} todos, trigger={}", loaded.len(), trigger).into(),
                    );
                    set_todos.set(loaded);
                }
                Err(err) => {
                    // No retry; the previous snapshot stays on screen
                    web_sys::console::error_1(&format!("[APP] List fetch failed: {}", err).into());
                }
            }
        });
    });

    view! {
        <div class="todo-app">
            <h1>"Todos"</h1>

            <NewTodoForm />

            <TodoList todos=todos />

            <p class="todo-count">{move || format!("{} todos", todos.get().len())}</p>
        </div>
    }
}
