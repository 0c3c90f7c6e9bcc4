use chrono::{DateTime, Utc};
use std::fmt;

use super::record::PreAcceptStatus;

/// Quantity cell of a box row; the representation depends on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxQuantity {
    /// Product count accumulated across the box's lines.
    Sum(u32),
    /// Fixed placeholder for screens that must not reveal counts.
    Masked,
    /// Goods-receipt counters: lines scanned vs. lines in the box.
    Scanned { total: usize, scanned: usize },
}

impl fmt::Display for BoxQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxQuantity::Sum(total) => write!(f, "{}", total),
            BoxQuantity::Masked => write!(f, "****"),
            BoxQuantity::Scanned { total, scanned } => write!(f, "{} / {}", scanned, total),
        }
    }
}

/// One table row per physical box, rebuilt from scratch on every fetch cycle.
///
/// Descriptive fields and the status triple come from the first record seen
/// for the box; later records only bump counters and extend `shipment_ids`.
#[derive(Debug, Clone)]
pub struct BoxSummary {
    pub box_no: String,
    pub shipment_no: Option<String>,
    pub shipment_date: Option<DateTime<Utc>>,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub quantity: BoxQuantity,
    pub pre_accept_status: Option<PreAcceptStatus>,
    pub pre_accept_actor: Option<String>,
    pub pre_accept_at: Option<DateTime<Utc>>,
    /// Id of every record folded into this box, used to fan out updates.
    pub shipment_ids: Vec<String>,
}

impl BoxSummary {
    /// True when the box already carries the scan-success marker.
    pub fn is_approved(&self) -> bool {
        matches!(self.pre_accept_status, Some(PreAcceptStatus::Approved))
    }

    /// True when every line of the box carries the goods-receipt marker.
    pub fn is_fully_scanned(&self) -> bool {
        matches!(
            self.quantity,
            BoxQuantity::Scanned { total, scanned } if total > 0 && scanned == total
        )
    }
}
