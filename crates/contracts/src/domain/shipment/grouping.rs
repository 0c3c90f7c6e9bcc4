use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::record::{PreAcceptStatus, ShipmentRecord};
use super::summary::{BoxQuantity, BoxSummary};

/// How the quantity column of a box row is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityMode {
    /// Accumulate `quantity_of_product` across the box's lines.
    Sum,
    /// Render the fixed placeholder; real counts stay hidden.
    Mask,
    /// Count lines folded in and lines already carrying the scanned marker.
    DualCount,
}

/// Descriptive scalars copied into a summary from the first record of a box.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldSelection {
    pub shipment_no: bool,
    pub shipment_date: bool,
    pub from_location: bool,
    pub to_location: bool,
}

impl FieldSelection {
    pub const NONE: Self = Self {
        shipment_no: false,
        shipment_date: false,
        from_location: false,
        to_location: false,
    };

    pub const ALL: Self = Self {
        shipment_no: true,
        shipment_date: true,
        from_location: true,
        to_location: true,
    };
}

/// Screen policy for [`group_by_box`].
#[derive(Debug, Clone, Copy)]
pub struct GroupingPolicy {
    /// Keeps a record in the grouped view based on its pre-acceptance status.
    pub status_filter: fn(Option<PreAcceptStatus>) -> bool,
    pub quantity_mode: QuantityMode,
    pub fields: FieldSelection,
}

/// Folds records into one summary per distinct box.
///
/// Single pass over the filtered input; output order is the order in which
/// boxes first appear. A record of an already-seen box only bumps the
/// counters and extends `shipment_ids`; the seeded fields stay untouched.
pub fn group_by_box(records: &[ShipmentRecord], policy: &GroupingPolicy) -> Vec<BoxSummary> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut summaries: Vec<BoxSummary> = Vec::new();

    for record in records
        .iter()
        .filter(|r| (policy.status_filter)(r.pre_accept_status))
    {
        match index.get(&record.box_no) {
            Some(&at) => {
                let summary = &mut summaries[at];
                match &mut summary.quantity {
                    BoxQuantity::Sum(total) => *total += record.quantity_of_product,
                    BoxQuantity::Masked => {}
                    BoxQuantity::Scanned { total, scanned } => {
                        *total += 1;
                        if record.is_scanned() {
                            *scanned += 1;
                        }
                    }
                }
                summary.shipment_ids.push(record.id.clone());
            }
            None => {
                index.insert(record.box_no.clone(), summaries.len());
                summaries.push(seed_summary(record, policy));
            }
        }
    }

    summaries
}

fn seed_summary(record: &ShipmentRecord, policy: &GroupingPolicy) -> BoxSummary {
    let fields = policy.fields;
    BoxSummary {
        box_no: record.box_no.clone(),
        shipment_no: fields
            .shipment_no
            .then(|| record.shipment_no.clone())
            .flatten(),
        shipment_date: fields.shipment_date.then_some(record.shipment_date).flatten(),
        from_location: fields
            .from_location
            .then(|| record.from_location.clone())
            .flatten(),
        to_location: fields
            .to_location
            .then(|| record.to_location.clone())
            .flatten(),
        quantity: match policy.quantity_mode {
            QuantityMode::Sum => BoxQuantity::Sum(record.quantity_of_product),
            QuantityMode::Mask => BoxQuantity::Masked,
            QuantityMode::DualCount => BoxQuantity::Scanned {
                total: 1,
                scanned: if record.is_scanned() { 1 } else { 0 },
            },
        },
        pre_accept_status: record.pre_accept_status,
        pre_accept_actor: record.pre_accept_actor.clone(),
        pre_accept_at: record.pre_accept_at,
        shipment_ids: vec![record.id.clone()],
    }
}

/// Concatenates two query results, keeping only the first occurrence of each
/// key. Running it again over its own output yields the same sequence.
pub fn merge_unique<T, K, F>(key_fn: F, first: Vec<T>, second: Vec<T>) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = HashSet::new();
    let mut merged = Vec::with_capacity(first.len() + second.len());
    for item in first.into_iter().chain(second) {
        if seen.insert(key_fn(&item)) {
            merged.push(item);
        }
    }
    merged
}

/// Orders records still waiting for pre-acceptance before processed ones,
/// keeping the incoming order within each group.
pub fn pending_first(records: &mut [ShipmentRecord]) {
    records.sort_by_key(|r| r.is_pre_accepted());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, box_no: &str, status: Option<PreAcceptStatus>, qty: u32) -> ShipmentRecord {
        ShipmentRecord {
            id: id.to_string(),
            box_no: box_no.to_string(),
            shipment_no: Some(format!("SVK-{}", id)),
            shipment_date: None,
            from_location: Some("Merkez Depo".to_string()),
            to_location: Some("Kadıköy".to_string()),
            quantity_of_product: qty,
            pre_accept_status: status,
            pre_accept_actor: None,
            pre_accept_at: None,
            receipt_status: None,
            owner_location_id: Some("L100".to_string()),
            pre_accept_warehouse_id: None,
        }
    }

    fn sum_policy() -> GroupingPolicy {
        GroupingPolicy {
            status_filter: |status| status.is_some(),
            quantity_mode: QuantityMode::Sum,
            fields: FieldSelection::NONE,
        }
    }

    #[test]
    fn sums_quantities_and_collects_ids_per_box() {
        let records = vec![
            record("id1", "B1", Some(PreAcceptStatus::Approved), 2),
            record("id2", "B1", Some(PreAcceptStatus::Approved), 3),
            record("id3", "B2", None, 5),
        ];

        let summaries = group_by_box(&records, &sum_policy());

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].box_no, "B1");
        assert_eq!(summaries[0].quantity, BoxQuantity::Sum(5));
        assert_eq!(summaries[0].shipment_ids, vec!["id1", "id2"]);
    }

    #[test]
    fn one_summary_per_distinct_box_in_first_seen_order() {
        let records = vec![
            record("a", "B2", None, 1),
            record("b", "B1", None, 1),
            record("c", "B2", None, 1),
            record("d", "B3", None, 1),
        ];
        let policy = GroupingPolicy {
            status_filter: |_| true,
            quantity_mode: QuantityMode::Sum,
            fields: FieldSelection::NONE,
        };

        let summaries = group_by_box(&records, &policy);

        let boxes: Vec<&str> = summaries.iter().map(|s| s.box_no.as_str()).collect();
        assert_eq!(boxes, vec!["B2", "B1", "B3"]);
        assert_eq!(summaries[0].shipment_ids.len(), 2);
    }

    #[test]
    fn first_record_fields_are_never_overwritten() {
        let mut second = record("id2", "B1", Some(PreAcceptStatus::Confirmed), 1);
        second.shipment_no = Some("SVK-other".to_string());
        second.from_location = Some("Başka Depo".to_string());
        let records = vec![record("id1", "B1", None, 1), second];
        let policy = GroupingPolicy {
            status_filter: |_| true,
            quantity_mode: QuantityMode::Sum,
            fields: FieldSelection::ALL,
        };

        let summaries = group_by_box(&records, &policy);

        assert_eq!(summaries[0].shipment_no.as_deref(), Some("SVK-id1"));
        assert_eq!(summaries[0].from_location.as_deref(), Some("Merkez Depo"));
        assert_eq!(summaries[0].pre_accept_status, None);
    }

    #[test]
    fn unselected_fields_stay_empty() {
        let records = vec![record("id1", "B1", None, 1)];
        let policy = GroupingPolicy {
            status_filter: |_| true,
            quantity_mode: QuantityMode::Mask,
            fields: FieldSelection::NONE,
        };

        let summaries = group_by_box(&records, &policy);

        assert_eq!(summaries[0].shipment_no, None);
        assert_eq!(summaries[0].quantity, BoxQuantity::Masked);
    }

    #[test]
    fn dual_count_tracks_scanned_lines() {
        let mut scanned = record("id1", "B1", Some(PreAcceptStatus::Approved), 1);
        scanned.receipt_status = Some(crate::domain::shipment::ReceiptStatus::Scanned);
        let records = vec![
            scanned,
            record("id2", "B1", Some(PreAcceptStatus::Approved), 1),
            record("id3", "B1", Some(PreAcceptStatus::Confirmed), 1),
        ];
        let policy = GroupingPolicy {
            status_filter: |status| status.is_some(),
            quantity_mode: QuantityMode::DualCount,
            fields: FieldSelection::NONE,
        };

        let summaries = group_by_box(&records, &policy);

        assert_eq!(
            summaries[0].quantity,
            BoxQuantity::Scanned { total: 3, scanned: 1 }
        );
    }

    #[test]
    fn merge_unique_keeps_first_occurrence() {
        let first = vec![
            record("a1", "B1", None, 1),
            record("a2", "B2", None, 1),
        ];
        let second = vec![
            record("b1", "B2", None, 1),
            record("b2", "B3", None, 1),
        ];

        let merged = merge_unique(|r: &ShipmentRecord| r.box_no.clone(), first, second);

        let ids: Vec<&str> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "b2"]);
    }

    #[test]
    fn merge_unique_is_idempotent() {
        let first = vec![
            record("a1", "B1", None, 1),
            record("a2", "B1", None, 1),
            record("a3", "B2", None, 1),
        ];

        let once = merge_unique(|r: &ShipmentRecord| r.box_no.clone(), first, Vec::new());
        let twice = merge_unique(|r: &ShipmentRecord| r.box_no.clone(), once.clone(), Vec::new());

        let once_ids: Vec<&str> = once.iter().map(|r| r.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn pending_records_sort_before_processed_ones() {
        let mut records = vec![
            record("a", "B1", Some(PreAcceptStatus::Confirmed), 1),
            record("b", "B2", None, 1),
            record("c", "B3", Some(PreAcceptStatus::Approved), 1),
            record("d", "B4", None, 1),
        ];

        pending_first(&mut records);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }
}
