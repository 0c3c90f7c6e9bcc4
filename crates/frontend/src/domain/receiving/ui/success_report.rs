use std::cmp::Ordering;

use contracts::domain::shipment::{
    group_by_box, BoxSummary, FieldSelection, GroupingPolicy, QuantityMode, ShipmentStore,
};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::receiving::api::GatewayStore;
use crate::shared::components::back_button::BackButton;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::list_utils::{get_sort_indicator, sort_list, Sortable};
use crate::system::auth::context::use_auth;

/// Report policy: only boxes already scanned, with every shipment header
/// column and the product count masked.
fn list_policy() -> GroupingPolicy {
    GroupingPolicy {
        status_filter: |status| status.is_some(),
        quantity_mode: QuantityMode::Mask,
        fields: FieldSelection::ALL,
    }
}

impl Sortable for BoxSummary {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "shipment_no" => self
                .shipment_no
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.shipment_no.as_deref().unwrap_or("").to_lowercase()),
            "shipment_date" => self.shipment_date.cmp(&other.shipment_date),
            "from_location" => self
                .from_location
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.from_location.as_deref().unwrap_or("").to_lowercase()),
            "to_location" => self
                .to_location
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.to_location.as_deref().unwrap_or("").to_lowercase()),
            "pre_accept_at" => self.pre_accept_at.cmp(&other.pre_accept_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn SuccessReportPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (boxes, set_boxes) = signal::<Vec<BoxSummary>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (refreshing, set_refreshing) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let (sort_field, set_sort_field) = signal::<String>("pre_accept_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let load_boxes = move || {
        let Some(user) = auth_state.get_untracked().user_info else {
            return;
        };
        set_refreshing.set(true);
        set_error.set(None);
        spawn_local(async move {
            let store = GatewayStore;
            match store.fetch_by_owner_location(&user.location_id).await {
                Ok(mut records) => {
                    // The query is already keyed by location; the re-check
                    // guards against records with a stale owner field.
                    records.retain(|r| {
                        r.owner_location_id.as_deref() == Some(user.location_id.as_str())
                    });
                    set_boxes.set(group_by_box(&records, &list_policy()));
                }
                Err(e) => {
                    log!("Başarılı koliler veri çekme hatası: {}", e);
                    set_error.set(Some(
                        "Başarılı koliler alınırken bir hata oluştu.".to_string(),
                    ));
                }
            }
            set_refreshing.set(false);
            set_loading.set(false);
        });
    };

    // Initial fetch when the screen opens
    load_boxes();

    let sorted_boxes = move || {
        let mut rows = boxes.get();
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
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
                <h1 style="margin: 0 0 4px;">"Başarılı Koliler"</h1>
                <p style="margin: 0 0 16px; color: #666;">{store_line}</p>

                <button
                    on:click=move |_| load_boxes()
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

                <p>"Toplam Koli Adedi: " {move || boxes.get().len()}</p>

                <div style="overflow-x: auto;">
                    <table style="width: 100%; border-collapse: collapse; font-size: 13px;">
                        <thead>
                            <tr style="background: #f5f5f5;">
                                <th style="border: 1px solid #ddd; padding: 10px;">"Sıra No"</th>
                                <th
                                    style="border: 1px solid #ddd; padding: 10px; cursor: pointer; user-select: none;"
                                    on:click=toggle_sort("shipment_no")
                                >
                                    {move || format!("Sevk Numarası{}", get_sort_indicator(&sort_field.get(), "shipment_no", sort_ascending.get()))}
                                </th>
                                <th
                                    style="border: 1px solid #ddd; padding: 10px; cursor: pointer; user-select: none;"
                                    on:click=toggle_sort("shipment_date")
                                >
                                    {move || format!("Sevk Tarihi{}", get_sort_indicator(&sort_field.get(), "shipment_date", sort_ascending.get()))}
                                </th>
                                <th style="border: 1px solid #ddd; padding: 10px;">"Koli Numarası"</th>
                                <th style="border: 1px solid #ddd; padding: 10px;">"Ürün Adedi"</th>
                                <th
                                    style="border: 1px solid #ddd; padding: 10px; cursor: pointer; user-select: none;"
                                    on:click=toggle_sort("from_location")
                                >
                                    {move || format!("Gönderici Lokasyon{}", get_sort_indicator(&sort_field.get(), "from_location", sort_ascending.get()))}
                                </th>
                                <th
                                    style="border: 1px solid #ddd; padding: 10px; cursor: pointer; user-select: none;"
                                    on:click=toggle_sort("to_location")
                                >
                                    {move || format!("Alıcı Lokasyon{}", get_sort_indicator(&sort_field.get(), "to_location", sort_ascending.get()))}
                                </th>
                                <th style="border: 1px solid #ddd; padding: 10px;">"Ön Kabul Durumu"</th>
                                <th style="border: 1px solid #ddd; padding: 10px;">"Ön Kabul Yapan Kişi"</th>
                                <th
                                    style="border: 1px solid #ddd; padding: 10px; cursor: pointer; user-select: none;"
                                    on:click=toggle_sort("pre_accept_at")
                                >
                                    {move || format!("Ön Kabul Saati{}", get_sort_indicator(&sort_field.get(), "pre_accept_at", sort_ascending.get()))}
                                </th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                sorted_boxes()
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
                                        let to_location = summary
                                            .to_location
                                            .unwrap_or_else(|| "-".to_string());
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
                                                <td style="border: 1px solid #ddd; padding: 8px;">{shipment_no}</td>
                                                <td style="border: 1px solid #ddd; padding: 8px;">{shipment_date}</td>
                                                // Box number and count stay hidden on this screen
                                                <td style="border: 1px solid #ddd; padding: 8px;">"****"</td>
                                                <td style="border: 1px solid #ddd; padding: 8px;">{summary.quantity.to_string()}</td>
                                                <td style="border: 1px solid #ddd; padding: 8px;">{from_location}</td>
                                                <td style="border: 1px solid #ddd; padding: 8px;">{to_location}</td>
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
            </div>
        </Show>
    }
}
