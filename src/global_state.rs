use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive signals shared across components
pub struct Globals {
    pub is_loading: RwSignal<bool>,
    pub error_message: RwSignal<Option<String>>,
    pub current_symbol: RwSignal<String>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        is_loading: create_rw_signal(false),
        error_message: create_rw_signal(None),
        current_symbol: create_rw_signal(String::new()),
    })
}
