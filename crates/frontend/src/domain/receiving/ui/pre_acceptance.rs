use contracts::domain::shipment::{
    group_by_box, pending_first, resolve_box, BoxSummary, FieldSelection, GroupingPolicy,
    PreAcceptStatus, QuantityMode, ShipmentStore,
};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::receiving::api::GatewayStore;
use crate::routes::{use_screen, Screen};
use crate::shared::components::back_button::BackButton;
use crate::shared::date_utils::format_datetime;
use crate::system::auth::context::use_auth;

/// Pre-acceptance list policy: boxes still waiting at the door, with real
/// product counts and no shipment header columns.
fn list_policy() -> GroupingPolicy {
    GroupingPolicy {
        status_filter: |status| !matches!(status, Some(PreAcceptStatus::Approved)),
        quantity_mode: QuantityMode::Sum,
        fields: FieldSelection::NONE,
    }
}

#[component]
pub fn PreAcceptancePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let screen = use_screen();

    let (summaries, set_summaries) = signal::<Vec<BoxSummary>>(Vec::new());
    let (network_count, set_network_count) = signal(0usize);
    let (box_input, set_box_input) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (refreshing, set_refreshing) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let load_shipments = move || {
        let Some(user) = auth_state.get_untracked().user_info else {
            return;
        };
        set_refreshing.set(true);
        set_error.set(None);
        spawn_local(async move {
            let store = GatewayStore;
            match store.fetch_by_owner_location(&user.location_id).await {
                Ok(mut records) => {
                    pending_first(&mut records);
                    set_summaries.set(group_by_box(&records, &list_policy()));
                }
                Err(e) => {
                    log!("Veri çekme hatası: {}", e);
                    set_error.set(Some("Veriler alınırken bir hata oluştu.".to_string()));
                }
            }
            match store.fetch_all().await {
                Ok(all_records) => set_network_count.set(all_records.len()),
                Err(e) => {
                    log!("Veri çekme hatası: {}", e);
                    set_error.set(Some("Veriler alınırken bir hata oluştu.".to_string()));
                }
            }
            set_refreshing.set(false);
            set_loading.set(false);
        });
    };

    // Initial fetch when the screen opens
    load_shipments();

    let handle_box_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = box_input.get().trim().to_string();
        if input.is_empty() {
            return;
        }
        let Some(user) = auth_state.get_untracked().user_info else {
            return;
        };
        let current = summaries.get_untracked();

        spawn_local(async move {
            let store = GatewayStore;
            match resolve_box(&store, &input, &current, &user.name).await {
                Ok(resolution) => {
                    if resolution.refreshes_list() {
                        load_shipments();
                    }
                    set_notice.set(Some(resolution.user_message()));
                    set_box_input.set(String::new());
                }
                Err(e) => {
                    // Scanned number stays in the field so the staff can retry.
                    log!("Ön kabul güncelleme hatası: {}", e);
                    set_notice.set(Some(
                        "Ön kabul işlemi sırasında bir hata oluştu.".to_string(),
                    ));
                }
            }
        });
    };

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

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div style="padding: 2rem; text-align: center;">
                        <p>"Yükleniyor..."</p>
                    </div>
                }
            }
        >
            <div style="padding: 1.5rem;">
                <BackButton />
                <h1 style="margin: 0 0 4px;">{welcome}</h1>
                <p style="margin: 0 0 16px; color: #666;">{store_line}</p>

                <button
                    on:click=move |_| screen.set(Screen::SuccessReport)
                    style="padding: 8px 16px; background: #388e3c; color: white; border: none; border-radius: 4px; cursor: pointer; margin-right: 8px;"
                >
                    "Başarılı Koliler"
                </button>

                <button
                    on:click=move |_| load_shipments()
                    style="padding: 8px 16px; background: #1976d2; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    prop:disabled=move || refreshing.get()
                >
                    {move || if refreshing.get() { "Yükleniyor..." } else { "Yenile" }}
                </button>

                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <p style="padding: 10px; background: #ffebee; border: 1px solid #ffcdd2; border-radius: 4px; color: #c62828;">
                                    {err}
                                </p>
                            }
                        })
                }}

                {move || {
                    notice
                        .get()
                        .map(|msg| {
                            view! {
                                <p style="padding: 10px; background: #e3f2fd; border: 1px solid #bbdefb; border-radius: 4px; color: #1565c0;">
                                    {msg}
                                </p>
                            }
                        })
                }}

                <form on:submit=handle_box_submit style="margin: 16px 0;">
                    <input
                        type="text"
                        placeholder="Koli numarası giriniz"
                        prop:value=move || box_input.get()
                        on:input=move |ev| set_box_input.set(event_target_value(&ev))
                        required
                        style="padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; width: 240px; margin-right: 8px;"
                    />
                    <button
                        type="submit"
                        style="padding: 8px 16px; background: #1976d2; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    >
                        "Onayla"
                    </button>
                </form>

                <p>"Toplam Koli Adedi: " {move || summaries.get().len()}</p>
                <p style="color: #666; font-size: 13px;">
                    "Ağdaki toplam sevkiyat kaydı: " {move || network_count.get()}
                </p>

                <table style="width: 100%; border-collapse: collapse; font-size: 13px;">
                    <thead>
                        <tr style="background: #f5f5f5;">
                            <th style="border: 1px solid #ddd; padding: 10px;">"Sıra No"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Koli Numarası"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Ürün Adedi"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Ön Kabul Durumu"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Ön Kabul Yapan Kişi"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Ön Kabul Saati"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            summaries
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, summary)| {
                                    let status = summary
                                        .pre_accept_status
                                        .map(|s| s.label().to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    let actor = summary
                                        .pre_accept_actor
                                        .unwrap_or_else(|| "-".to_string());
                                    let scanned_at = format_datetime(summary.pre_accept_at.as_ref());
                                    view! {
                                        <tr>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{index + 1}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{summary.box_no}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px; text-align: right;">{summary.quantity.to_string()}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{status}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{actor}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{scanned_at}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
