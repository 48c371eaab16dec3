//! Bootstrap
//!
//! Polls the host document until the mount node exists, then mounts
//! the app into it.

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use wasm_bindgen::JsCast;

use crate::app::App;

/// Id of the host element the app mounts into
const MOUNT_ID: &str = "todo-app";

/// Delay between readiness checks
const POLL_INTERVAL_MS: u32 = 300;

/// Readiness of the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Polling,
    Ready,
}

impl BootState {
    /// One readiness check. `Ready` is terminal.
    fn step(self, mount_point_found: bool) -> BootState {
        match (self, mount_point_found) {
            (BootState::Polling, false) => BootState::Polling,
            _ => BootState::Ready,
        }
    }
}

/// Wait for the mount node, then mount the app exactly once.
///
/// Mounting wires the form handler and triggers the initial render.
/// No handler is wired and no request is issued while polling, and
/// polling has no retry cap: a host page that never injects the node
/// keeps the controller waiting.
pub async fn run() {
    let mut state = BootState::Polling;
    while state == BootState::Polling {
        match mount_point() {
            Some(root) => {
                state = state.step(true);
                web_sys::console::log_1(&"[BOOT] Mount node found, starting app".into());
                mount_to(root, App).forget();
            }
            None => {
                state = state.step(false);
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
            }
        }
    }
}

fn mount_point() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(MOUNT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polls_while_absent() {
        let mut state = BootState::Polling;
        for _ in 0..5 {
            state = state.step(false);
            assert_eq!(state, BootState::Polling);
        }
    }

    #[test]
    fn test_ready_once_present() {
        let state = BootState::Polling.step(true);
        assert_eq!(state, BootState::Ready);
    }

    #[test]
    fn test_ready_is_terminal() {
        assert_eq!(BootState::Ready.step(false), BootState::Ready);
        assert_eq!(BootState::Ready.step(true), BootState::Ready);
    }
}
