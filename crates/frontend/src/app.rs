use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::routes::Screen;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Current screen is app-wide state so any page can navigate.
    provide_context(RwSignal::new(Screen::Home));

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
