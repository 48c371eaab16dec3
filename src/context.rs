//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Signals every component can reach through Leptos context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Counter the renderer effect watches; bumping it forces a refetch
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a fresh fetch-and-render of the todo list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
