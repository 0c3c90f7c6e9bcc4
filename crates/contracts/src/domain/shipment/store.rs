use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

use super::record::ShipmentRecord;

/// Body of a status-update call: who performed the scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorStamp {
    pub actor: String,
}

/// Client interface of the remote shipment document store.
///
/// The production implementation talks HTTP from the browser, so the futures
/// are not `Send`; tests drive the flows with an in-memory implementation.
#[async_trait(?Send)]
pub trait ShipmentStore {
    /// Records destined for one location (primary query key).
    async fn fetch_by_owner_location(
        &self,
        location_id: &str,
    ) -> Result<Vec<ShipmentRecord>, String>;

    /// Records routed through one warehouse (alternate query key).
    async fn fetch_by_routing_key(
        &self,
        warehouse_id: &str,
    ) -> Result<Vec<ShipmentRecord>, String>;

    /// Every record of one box, regardless of destination.
    async fn fetch_by_box(&self, box_no: &str) -> Result<Vec<ShipmentRecord>, String>;

    /// The whole shipment collection.
    async fn fetch_all(&self) -> Result<Vec<ShipmentRecord>, String>;

    /// Writes the pre-acceptance marker, actor and timestamp on one record.
    async fn update_approval(&self, record_id: &str, actor: &str) -> Result<(), String>;

    /// Writes the goods-receipt marker, actor and timestamp on one record.
    async fn update_receipt(&self, record_id: &str, actor: &str) -> Result<(), String>;

    /// Flags one record as a misrouted delivery observed by `actor`.
    async fn mark_misrouted(&self, record_id: &str, actor: &str) -> Result<(), String>;
}

/// Which mutation [`update_batch`] fans out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchUpdate {
    Approval,
    Receipt,
    Misroute,
}

/// Issues one update per record id concurrently and waits for every call to
/// settle before returning the individual outcomes. Updates that succeeded
/// are not rolled back when a sibling fails.
pub async fn update_batch<S>(
    store: &S,
    update: BatchUpdate,
    ids: &[String],
    actor: &str,
) -> Vec<Result<(), String>>
where
    S: ShipmentStore + ?Sized,
{
    join_all(ids.iter().map(|id| async move {
        match update {
            BatchUpdate::Approval => store.update_approval(id, actor).await,
            BatchUpdate::Receipt => store.update_receipt(id, actor).await,
            BatchUpdate::Misroute => store.mark_misrouted(id, actor).await,
        }
    }))
    .await
}
