use leptos::prelude::*;

use crate::routes::{use_screen, Screen};

/// Returns the staff to the home screen.
#[component]
pub fn BackButton() -> impl IntoView {
    let screen = use_screen();

    view! {
        <button
            on:click=move |_| screen.set(Screen::Home)
            style="padding: 6px 14px; background: #fff; color: #333; border: 1px solid #ccc; border-radius: 4px; cursor: pointer; margin-bottom: 12px;"
        >
            "← Geri"
        </button>
    }
}
