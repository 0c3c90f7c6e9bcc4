use async_trait::async_trait;
use contracts::domain::shipment::{ActorStamp, ShipmentRecord, ShipmentStore};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// HTTP client of the shipment document gateway.
#[derive(Clone, Copy, Default)]
pub struct GatewayStore;

fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

async fn fetch_records(path: &str) -> Result<Vec<ShipmentRecord>, String> {
    let auth_header = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url(path))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch shipments: {}", response.status()));
    }

    response
        .json::<Vec<ShipmentRecord>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn post_update(path: &str, actor: &str) -> Result<(), String> {
    let auth_header = auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url(path))
        .header("Authorization", &auth_header)
        .json(&ActorStamp {
            actor: actor.to_string(),
        })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Update rejected: {}", response.status()));
    }

    Ok(())
}

#[async_trait(?Send)]
impl ShipmentStore for GatewayStore {
    async fn fetch_by_owner_location(
        &self,
        location_id: &str,
    ) -> Result<Vec<ShipmentRecord>, String> {
        fetch_records(&format!(
            "/api/receiving/shipments?owner_location={}",
            urlencoding::encode(location_id)
        ))
        .await
    }

    async fn fetch_by_routing_key(
        &self,
        warehouse_id: &str,
    ) -> Result<Vec<ShipmentRecord>, String> {
        fetch_records(&format!(
            "/api/receiving/shipments?routing_warehouse={}",
            urlencoding::encode(warehouse_id)
        ))
        .await
    }

    async fn fetch_by_box(&self, box_no: &str) -> Result<Vec<ShipmentRecord>, String> {
        fetch_records(&format!(
            "/api/receiving/shipments?box={}",
            urlencoding::encode(box_no)
        ))
        .await
    }

    async fn fetch_all(&self) -> Result<Vec<ShipmentRecord>, String> {
        fetch_records("/api/receiving/shipments").await
    }

    async fn update_approval(&self, record_id: &str, actor: &str) -> Result<(), String> {
        post_update(
            &format!(
                "/api/receiving/shipments/{}/approval",
                urlencoding::encode(record_id)
            ),
            actor,
        )
        .await
    }

    async fn update_receipt(&self, record_id: &str, actor: &str) -> Result<(), String> {
        post_update(
            &format!(
                "/api/receiving/shipments/{}/receipt",
                urlencoding::encode(record_id)
            ),
            actor,
        )
        .await
    }

    async fn mark_misrouted(&self, record_id: &str, actor: &str) -> Result<(), String> {
        post_update(
            &format!(
                "/api/receiving/shipments/{}/misroute",
                urlencoding::encode(record_id)
            ),
            actor,
        )
        .await
    }
}
