pub mod goods_receipt;
pub mod pre_acceptance;
pub mod success_report;
