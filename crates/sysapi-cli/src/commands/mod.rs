pub mod categories;
pub mod check;
pub mod dispatch;
pub mod export;
pub mod get;
pub mod list;
