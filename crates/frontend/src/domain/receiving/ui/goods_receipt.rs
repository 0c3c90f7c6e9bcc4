use contracts::domain::shipment::{
    group_by_box, merge_unique, update_batch, BatchUpdate, BoxSummary, FieldSelection,
    GroupingPolicy, QuantityMode, ShipmentRecord, ShipmentStore,
};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::receiving::api::GatewayStore;
use crate::shared::components::back_button::BackButton;
use crate::shared::date_utils::format_date;
use crate::system::auth::context::use_auth;

/// Goods-receipt list policy: boxes that passed pre-acceptance, with the
/// scanned/total counters and the shipment header columns.
fn list_policy() -> GroupingPolicy {
    GroupingPolicy {
        status_filter: |status| status.is_some(),
        quantity_mode: QuantityMode::DualCount,
        fields: FieldSelection {
            shipment_no: true,
            shipment_date: true,
            from_location: true,
            to_location: false,
        },
    }
}

#[component]
pub fn GoodsReceiptPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (summaries, set_summaries) = signal::<Vec<BoxSummary>>(Vec::new());
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
            let owned = store.fetch_by_owner_location(&user.location_id).await;
            let routed = store.fetch_by_routing_key(&user.warehouse_id).await;
            match (owned, routed) {
                (Ok(owned), Ok(routed)) => {
                    // The same box can come back from both queries; the first
                    // occurrence wins.
                    let records =
                        merge_unique(|r: &ShipmentRecord| r.box_no.clone(), owned, routed);
                    set_summaries.set(group_by_box(&records, &list_policy()));
                }
                (Err(e), _) | (_, Err(e)) => {
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
            let Some(summary) = current.iter().find(|s| s.box_no == input) else {
                set_notice.set(Some(
                    "Bu koli mal kabul listenizde bulunamadı.".to_string(),
                ));
                set_box_input.set(String::new());
                return;
            };
            if summary.is_fully_scanned() {
                set_notice.set(Some(
                    "Bu kolinin tüm ürünleri daha önce okutulmuştur.".to_string(),
                ));
                set_box_input.set(String::new());
                return;
            }

            let store = GatewayStore;
            let outcomes = update_batch(
                &store,
                BatchUpdate::Receipt,
                &summary.shipment_ids,
                &user.name,
            )
            .await;
            let failures: Vec<&String> = outcomes.iter().filter_map(|o| o.as_ref().err()).collect();
            if failures.is_empty() {
                load_shipments();
                set_notice.set(Some("Koli başarıyla okutuldu!".to_string()));
                set_box_input.set(String::new());
            } else {
                // Scanned number stays in the field so the staff can retry.
                for failure in failures {
                    log!("Mal kabul güncelleme hatası: {}", failure);
                }
                set_notice.set(Some(
                    "Mal kabul işlemi sırasında bir hata oluştu.".to_string(),
                ));
            }
        });
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
                <h1 style="margin: 0 0 4px;">"Mal Kabul"</h1>
                <p style="margin: 0 0 16px; color: #666;">{store_line}</p>

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
                        "Okut"
                    </button>
                </form>

                <p>"Toplam Koli Adedi: " {move || summaries.get().len()}</p>

                <table style="width: 100%; border-collapse: collapse; font-size: 13px;">
                    <thead>
                        <tr style="background: #f5f5f5;">
                            <th style="border: 1px solid #ddd; padding: 10px;">"Sıra No"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Sevk Numarası"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Sevk Tarihi"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Koli Numarası"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Gönderici Lokasyon"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Okutulan / Toplam"</th>
                            <th style="border: 1px solid #ddd; padding: 10px;">"Ön Kabul Yapan Kişi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            summaries
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, summary)| {
                                    let shipment_no = summary
                                        .shipment_no
                                        .unwrap_or_else(|| "-".to_string());
                                    let shipment_date = format_date(summary.shipment_date.as_ref());
                                    let from_location = summary
                                        .from_location
                                        .unwrap_or_else(|| "-".to_string());
                                    let actor = summary
                                        .pre_accept_actor
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <tr>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{index + 1}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{shipment_no}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{shipment_date}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{summary.box_no}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{from_location}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px; text-align: center;">{summary.quantity.to_string()}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{actor}</td>
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
