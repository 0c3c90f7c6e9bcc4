use super::store::{update_batch, BatchUpdate, ShipmentStore};
use super::summary::BoxSummary;

/// Shown when a misrouted box's destination store is not recorded.
const UNKNOWN_LOCATION: &str = "bilinmeyen";

/// Terminal classification of one scanned box number. Exactly one variant is
/// produced per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxResolution {
    /// The box belongs here and every line was marked pre-accepted.
    Approved { box_no: String, updated: usize },
    /// The box was already scanned earlier; nothing was touched.
    AlreadyProcessed { box_no: String },
    /// The box belongs to another location; every found record was flagged.
    Misrouted {
        box_no: String,
        origin: String,
        marked: usize,
    },
    /// The box appears in no shipment list anywhere.
    Unknown { box_no: String },
}

impl BoxResolution {
    /// Notice shown to the store staff after the scan.
    pub fn user_message(&self) -> String {
        match self {
            BoxResolution::Approved { .. } => "Koli numarası başarıyla okutuldu!".to_string(),
            BoxResolution::AlreadyProcessed { .. } => {
                "Bu koli daha önce okutulmuştur.".to_string()
            }
            BoxResolution::Misrouted { origin, .. } => format!(
                "Okuttuğunuz koli {} mağazasına gönderilmiştir ve hatalı bir şekilde size \
                 teslim edilmiştir. Lütfen Satış Operasyon ile iletişime geçin.",
                origin
            ),
            BoxResolution::Unknown { .. } => {
                "Böyle bir koli sevkiyat listelerinde bulunamadı. Lütfen Satış Operasyon ile \
                 iletişime geçin."
                    .to_string()
            }
        }
    }

    /// True when the caller should re-fetch and re-group its list.
    pub fn refreshes_list(&self) -> bool {
        matches!(self, BoxResolution::Approved { .. })
    }
}

/// Classifies a scanned box number against the grouped summaries of the
/// current location and performs the matching store mutation.
///
/// Fan-out updates are awaited jointly; when any of them fails the whole call
/// reports a single error after every update has settled, and the updates
/// that did succeed stay applied.
pub async fn resolve_box<S>(
    store: &S,
    box_no: &str,
    summaries: &[BoxSummary],
    actor: &str,
) -> Result<BoxResolution, String>
where
    S: ShipmentStore + ?Sized,
{
    if let Some(summary) = summaries.iter().find(|s| s.box_no == box_no) {
        if summary.is_approved() {
            return Ok(BoxResolution::AlreadyProcessed {
                box_no: box_no.to_string(),
            });
        }

        let outcomes = update_batch(store, BatchUpdate::Approval, &summary.shipment_ids, actor).await;
        collect_failures(outcomes)?;
        return Ok(BoxResolution::Approved {
            box_no: box_no.to_string(),
            updated: summary.shipment_ids.len(),
        });
    }

    // Not ours; check whether another location is waiting for it.
    let elsewhere = store.fetch_by_box(box_no).await?;
    if !elsewhere.is_empty() {
        let origin = elsewhere[0]
            .to_location
            .clone()
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
        let ids: Vec<String> = elsewhere.iter().map(|r| r.id.clone()).collect();
        let marked = ids.len();

        let outcomes = update_batch(store, BatchUpdate::Misroute, &ids, actor).await;
        collect_failures(outcomes)?;
        return Ok(BoxResolution::Misrouted {
            box_no: box_no.to_string(),
            origin,
            marked,
        });
    }

    // TODO: give unrecognized prefixes their own notice once sales operations
    // supplies the wording; both branches read the same today.
    if !box_no.starts_with("TR") && !box_no.starts_with("BX") {
        return Ok(BoxResolution::Unknown {
            box_no: box_no.to_string(),
        });
    }

    Ok(BoxResolution::Unknown {
        box_no: box_no.to_string(),
    })
}

fn collect_failures(outcomes: Vec<Result<(), String>>) -> Result<(), String> {
    let failures: Vec<String> = outcomes.into_iter().filter_map(Result::err).collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::shipment::record::{PreAcceptStatus, ShipmentRecord};
    use crate::domain::shipment::summary::BoxQuantity;

    /// In-memory store that records every mutation it is asked to perform.
    #[derive(Default)]
    struct MockStore {
        by_box: Vec<ShipmentRecord>,
        approvals: RefCell<Vec<(String, String)>>,
        receipts: RefCell<Vec<(String, String)>>,
        misroutes: RefCell<Vec<(String, String)>>,
        /// Record ids whose updates should fail.
        failing_ids: Vec<String>,
    }

    impl MockStore {
        fn outcome(&self, record_id: &str) -> Result<(), String> {
            if self.failing_ids.iter().any(|id| id == record_id) {
                Err(format!("update rejected for {}", record_id))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl ShipmentStore for MockStore {
        async fn fetch_by_owner_location(
            &self,
            _location_id: &str,
        ) -> Result<Vec<ShipmentRecord>, String> {
            Ok(Vec::new())
        }

        async fn fetch_by_routing_key(
            &self,
            _warehouse_id: &str,
        ) -> Result<Vec<ShipmentRecord>, String> {
            Ok(Vec::new())
        }

        async fn fetch_by_box(&self, box_no: &str) -> Result<Vec<ShipmentRecord>, String> {
            Ok(self
                .by_box
                .iter()
                .filter(|r| r.box_no == box_no)
                .cloned()
                .collect())
        }

        async fn fetch_all(&self) -> Result<Vec<ShipmentRecord>, String> {
            Ok(self.by_box.clone())
        }

        async fn update_approval(&self, record_id: &str, actor: &str) -> Result<(), String> {
            self.approvals
                .borrow_mut()
                .push((record_id.to_string(), actor.to_string()));
            self.outcome(record_id)
        }

        async fn update_receipt(&self, record_id: &str, actor: &str) -> Result<(), String> {
            self.receipts
                .borrow_mut()
                .push((record_id.to_string(), actor.to_string()));
            self.outcome(record_id)
        }

        async fn mark_misrouted(&self, record_id: &str, actor: &str) -> Result<(), String> {
            self.misroutes
                .borrow_mut()
                .push((record_id.to_string(), actor.to_string()));
            self.outcome(record_id)
        }
    }

    fn summary(box_no: &str, status: Option<PreAcceptStatus>, ids: &[&str]) -> BoxSummary {
        BoxSummary {
            box_no: box_no.to_string(),
            shipment_no: None,
            shipment_date: None,
            from_location: None,
            to_location: None,
            quantity: BoxQuantity::Sum(1),
            pre_accept_status: status,
            pre_accept_actor: None,
            pre_accept_at: None,
            shipment_ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    fn remote_record(id: &str, box_no: &str, to_location: Option<&str>) -> ShipmentRecord {
        ShipmentRecord {
            id: id.to_string(),
            box_no: box_no.to_string(),
            shipment_no: None,
            shipment_date: None,
            from_location: None,
            to_location: to_location.map(str::to_string),
            quantity_of_product: 1,
            pre_accept_status: None,
            pre_accept_actor: None,
            pre_accept_at: None,
            receipt_status: None,
            owner_location_id: Some("L200".to_string()),
            pre_accept_warehouse_id: None,
        }
    }

    #[tokio::test]
    async fn approves_every_line_of_a_local_box() {
        let store = MockStore::default();
        let summaries = vec![summary("BX1", None, &["id1", "id2", "id3"])];

        let resolution = resolve_box(&store, "BX1", &summaries, "Ayşe").await.unwrap();

        assert_eq!(
            resolution,
            BoxResolution::Approved {
                box_no: "BX1".to_string(),
                updated: 3
            }
        );
        assert!(resolution.refreshes_list());
        let approvals = store.approvals.borrow();
        assert_eq!(approvals.len(), 3);
        assert!(approvals.iter().all(|(_, actor)| actor == "Ayşe"));
    }

    #[tokio::test]
    async fn already_scanned_box_issues_no_mutation() {
        let store = MockStore::default();
        let summaries = vec![summary("BX1", Some(PreAcceptStatus::Approved), &["id1"])];

        let resolution = resolve_box(&store, "BX1", &summaries, "Ayşe").await.unwrap();

        assert_eq!(
            resolution,
            BoxResolution::AlreadyProcessed {
                box_no: "BX1".to_string()
            }
        );
        assert!(!resolution.refreshes_list());
        assert!(store.approvals.borrow().is_empty());
        assert!(store.misroutes.borrow().is_empty());
    }

    #[tokio::test]
    async fn foreign_box_is_flagged_with_its_destination() {
        let store = MockStore {
            by_box: vec![
                remote_record("r1", "BX9", Some("Beşiktaş")),
                remote_record("r2", "BX9", Some("Beşiktaş")),
            ],
            ..MockStore::default()
        };

        let resolution = resolve_box(&store, "BX9", &[], "Ayşe").await.unwrap();

        assert_eq!(
            resolution,
            BoxResolution::Misrouted {
                box_no: "BX9".to_string(),
                origin: "Beşiktaş".to_string(),
                marked: 2
            }
        );
        assert!(resolution.user_message().contains("Beşiktaş"));
        assert_eq!(store.misroutes.borrow().len(), 2);
        assert!(store.approvals.borrow().is_empty());
    }

    #[tokio::test]
    async fn missing_destination_falls_back_to_unknown_name() {
        let store = MockStore {
            by_box: vec![remote_record("r1", "BX9", None)],
            ..MockStore::default()
        };

        let resolution = resolve_box(&store, "BX9", &[], "Ayşe").await.unwrap();

        match resolution {
            BoxResolution::Misrouted { ref origin, .. } => assert_eq!(origin, "bilinmeyen"),
            other => panic!("expected Misrouted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_box_yields_same_notice_for_both_prefix_families() {
        let store = MockStore::default();

        let recognized = resolve_box(&store, "TR404", &[], "Ayşe").await.unwrap();
        let unrecognized = resolve_box(&store, "ZZ404", &[], "Ayşe").await.unwrap();

        assert!(matches!(recognized, BoxResolution::Unknown { .. }));
        assert!(matches!(unrecognized, BoxResolution::Unknown { .. }));
        assert_eq!(recognized.user_message(), unrecognized.user_message());
        assert!(store.approvals.borrow().is_empty());
        assert!(store.misroutes.borrow().is_empty());
    }

    #[tokio::test]
    async fn partial_fan_out_failure_reports_one_error_after_all_settle() {
        let store = MockStore {
            failing_ids: vec!["id2".to_string()],
            ..MockStore::default()
        };
        let summaries = vec![summary("BX1", None, &["id1", "id2", "id3"])];

        let result = resolve_box(&store, "BX1", &summaries, "Ayşe").await;

        assert!(result.is_err());
        // Every update was still attempted; the successes are not rolled back.
        assert_eq!(store.approvals.borrow().len(), 3);
    }

    #[tokio::test]
    async fn batch_update_returns_one_outcome_per_id() {
        let store = MockStore {
            failing_ids: vec!["id2".to_string()],
            ..MockStore::default()
        };
        let ids = vec!["id1".to_string(), "id2".to_string()];

        let outcomes = update_batch(&store, BatchUpdate::Receipt, &ids, "Mehmet").await;

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_ok());
        assert!(outcomes[1].is_err());
        assert_eq!(store.receipts.borrow().len(), 2);
    }
}
