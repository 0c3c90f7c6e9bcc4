pub mod grouping;
pub mod record;
pub mod resolution;
pub mod store;
pub mod summary;

pub use grouping::{group_by_box, merge_unique, pending_first, FieldSelection, GroupingPolicy, QuantityMode};
pub use record::{PreAcceptStatus, ReceiptStatus, ShipmentRecord};
pub use resolution::{resolve_box, BoxResolution};
pub use store::{update_batch, ActorStamp, BatchUpdate, ShipmentStore};
pub use summary::{BoxQuantity, BoxSummary};
