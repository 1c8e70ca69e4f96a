use bank_shared::History;
use gloo::utils::window;
use log::error;
use wasm_bindgen::JsValue;

/// The browser's session history. Pushing does not fire `popstate`, so the
/// shell resolves the new route itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        window()
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn push(&mut self, path: &str) {
        let result = window()
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if let Err(e) = result {
            error!("Failed to push '{}' to history: {:?}", path, e);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_push_updates_current_path() {
        let mut history = BrowserHistory;
        history.push("/dashboard");
        assert_eq!(history.current_path(), "/dashboard");
        history.push("/login");
        assert_eq!(history.current_path(), "/login");
    }
}
