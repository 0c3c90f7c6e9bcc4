use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{use_screen, Screen};
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};

const NAV_BUTTON: &str = "display: block; width: 240px; margin: 0 auto 12px; padding: 14px; \
                          background: #1976d2; color: white; border: none; border-radius: 6px; \
                          font-size: 16px; cursor: pointer;";

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let screen = use_screen();
    let (error, set_error) = signal(Option::<String>::None);

    let welcome = move || {
        auth_state
            .get()
            .user_info
            .map(|u| format!("Hoş Geldiniz, {}", u.name))
            .unwrap_or_default()
    };
    let store_line = move || {
        auth_state
            .get()
            .user_info
            .map(|u| format!("Mağaza: {} (Lokasyon: {})", u.store_name, u.location_id))
            .unwrap_or_default()
    };

    let handle_sign_out = move |_| {
        spawn_local(async move {
            if let Some(token) = auth_state.get_untracked().access_token {
                if let Err(e) = api::logout(&token).await {
                    log!("Çıkış hatası: {}", e);
                    set_error.set(Some("Çıkış işlemi sırasında bir hata oluştu.".to_string()));
                    return;
                }
            }
            storage::clear_token();
            set_auth_state.set(AuthState::default());
        });
    };

    view! {
        <div style="padding: 2rem; text-align: center;">
            <h1>{welcome}</h1>
            <p>{store_line}</p>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <p style="color: #c62828;">{err}</p>
                        }
                    })
            }}

            <div style="margin-top: 24px;">
                <button style=NAV_BUTTON on:click=move |_| screen.set(Screen::PreAcceptance)>
                    "Ön Kabul"
                </button>
                <button style=NAV_BUTTON on:click=move |_| screen.set(Screen::GoodsReceipt)>
                    "Mal Kabul"
                </button>
                <button
                    style="display: block; width: 240px; margin: 24px auto 0; padding: 12px; background: #fff; color: #c62828; border: 1px solid #c62828; border-radius: 6px; font-size: 15px; cursor: pointer;"
                    on:click=handle_sign_out
                >
                    "Çıkış Yap"
                </button>
            </div>
        </div>
    }
}
