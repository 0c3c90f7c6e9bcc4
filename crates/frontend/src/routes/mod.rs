pub mod routes;

use leptos::prelude::*;

/// Screens reachable after sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    PreAcceptance,
    GoodsReceipt,
    SuccessReport,
}

/// Hook to access the current screen signal.
pub fn use_screen() -> RwSignal<Screen> {
    use_context::<RwSignal<Screen>>().expect("Screen context not found in component tree")
}
