use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_auth, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    storage::save_token(&response.access_token);

                    set_auth_state.set(crate::system::auth::context::AuthState {
                        access_token: Some(response.access_token),
                        user_info: Some(response.user),
                    });

                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Giriş başarısız: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container" style="max-width: 360px; margin: 80px auto; padding: 24px; border: 1px solid #ddd; border-radius: 8px;">
            <h1 style="margin-top: 0;">"Sevkiyat Kabul"</h1>
            <h2 style="font-size: 16px; color: #666;">"Mağaza Girişi"</h2>

            <Show when=move || error_message.get().is_some()>
                <div style="padding: 10px; background: #ffebee; border: 1px solid #ffcdd2; border-radius: 4px; color: #c62828; margin-bottom: 12px;">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <form on:submit=on_submit>
                <div style="margin-bottom: 12px;">
                    <label for="username" style="display: block; font-size: 13px; margin-bottom: 4px;">"Kullanıcı Adı"</label>
                    <input
                        type="text"
                        id="username"
                        style="width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px;"
                        value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        required
                        disabled=move || is_loading.get()
                    />
                </div>

                <div style="margin-bottom: 16px;">
                    <label for="password" style="display: block; font-size: 13px; margin-bottom: 4px;">"Şifre"</label>
                    <input
                        type="password"
                        id="password"
                        style="width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px;"
                        value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                        disabled=move || is_loading.get()
                    />
                </div>

                <button
                    type="submit"
                    style="width: 100%; padding: 10px; background: #1976d2; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Giriş yapılıyor..." } else { "Giriş Yap" }}
                </button>
            </form>
        </div>
    }
}
