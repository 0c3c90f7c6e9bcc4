use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pre-acceptance markers as the document store writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreAcceptStatus {
    /// Box scanned successfully at the door ("1").
    #[serde(rename = "1")]
    Approved,
    /// Alternate accepted state written by back-office corrections ("2").
    #[serde(rename = "2")]
    Confirmed,
}

impl PreAcceptStatus {
    /// Label shown in the status column.
    pub fn label(&self) -> &'static str {
        match self {
            PreAcceptStatus::Approved => "Okutma Başarılı",
            PreAcceptStatus::Confirmed => "Onaylandı",
        }
    }
}

/// Goods-receipt marker as the document store writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptStatus {
    /// Contents scanned during goods receipt ("1").
    #[serde(rename = "1")]
    Scanned,
}

/// One item line within a physical box, as returned by the shipment gateway.
///
/// Every optional field may be absent on legacy documents; absence renders as
/// "-" and never fails deserialization of the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// Store-assigned document id.
    pub id: String,
    /// Box identifier shared by all lines of one physical box.
    pub box_no: String,
    #[serde(default)]
    pub shipment_no: Option<String>,
    #[serde(default)]
    pub shipment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub from_location: Option<String>,
    #[serde(default)]
    pub to_location: Option<String>,
    #[serde(default)]
    pub quantity_of_product: u32,
    #[serde(default)]
    pub pre_accept_status: Option<PreAcceptStatus>,
    #[serde(default)]
    pub pre_accept_actor: Option<String>,
    #[serde(default)]
    pub pre_accept_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub receipt_status: Option<ReceiptStatus>,
    /// Location the line is destined for (primary query key).
    #[serde(default)]
    pub owner_location_id: Option<String>,
    /// Warehouse the line is routed through (alternate query key).
    #[serde(default)]
    pub pre_accept_warehouse_id: Option<String>,
}

impl ShipmentRecord {
    /// True when any pre-acceptance marker has been written.
    pub fn is_pre_accepted(&self) -> bool {
        self.pre_accept_status.is_some()
    }

    /// True when the line carries the scan-success marker.
    pub fn is_approved(&self) -> bool {
        matches!(self.pre_accept_status, Some(PreAcceptStatus::Approved))
    }

    /// True when the line was scanned during goods receipt.
    pub fn is_scanned(&self) -> bool {
        matches!(self.receipt_status, Some(ReceiptStatus::Scanned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_document() {
        let record: ShipmentRecord = serde_json::from_str(
            r#"{
                "id": "doc-1",
                "box_no": "BX0001",
                "shipment_no": "SVK-42",
                "shipment_date": "2025-03-15T09:30:00Z",
                "from_location": "Merkez Depo",
                "to_location": "Kadıköy",
                "quantity_of_product": 4,
                "pre_accept_status": "1",
                "pre_accept_actor": "Ayşe",
                "pre_accept_at": "2025-03-16T08:00:00Z",
                "receipt_status": "1",
                "owner_location_id": "L100",
                "pre_accept_warehouse_id": "W7"
            }"#,
        )
        .expect("full document should parse");

        assert_eq!(record.pre_accept_status, Some(PreAcceptStatus::Approved));
        assert!(record.is_approved());
        assert!(record.is_scanned());
        assert_eq!(record.quantity_of_product, 4);
    }

    #[test]
    fn missing_optionals_default_to_none() {
        let record: ShipmentRecord =
            serde_json::from_str(r#"{"id": "doc-2", "box_no": "TR0002"}"#)
                .expect("minimal document should parse");

        assert_eq!(record.shipment_no, None);
        assert_eq!(record.pre_accept_status, None);
        assert_eq!(record.quantity_of_product, 0);
        assert!(!record.is_pre_accepted());
        assert!(!record.is_scanned());
    }

    #[test]
    fn status_markers_round_trip_as_store_strings() {
        assert_eq!(
            serde_json::to_string(&PreAcceptStatus::Confirmed).unwrap(),
            "\"2\""
        );
        assert_eq!(
            serde_json::from_str::<ReceiptStatus>("\"1\"").unwrap(),
            ReceiptStatus::Scanned
        );
    }
}
