pub mod analysis;
pub mod catalog;
pub mod date_range;
pub mod error;
pub mod export;
pub mod gear;
pub mod projection;
pub mod site;
pub mod vessels;
