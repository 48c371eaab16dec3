//! New Todo Form Component
//!
//! Input and "Add" trigger for creating todos.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;

/// Create precondition: only the empty string is rejected.
/// Whitespace-only titles are sent as-is.
fn title_accepted(title: &str) -> bool {
    !title.is_empty()
}

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_title, set_new_title) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if !title_accepted(&title) {
            return;
        }

        spawn_local(async move {
            match api::create_todo(&title).await {
                Ok(()) => {
                    set_new_title.set(String::new());
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Create failed: {}", err).into());
                }
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                id="todo-input"
                placeholder="Add new todo..."
                prop:value=move || new_title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_title.set(input.value());
                }
            />
            <button type="submit" id="add-button">"Add"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_accepted() {
        assert!(!title_accepted(""));
        assert!(title_accepted("Wash car"));
        // Original behavior: whitespace is not rejected
        assert!(title_accepted("   "));
    }
}
