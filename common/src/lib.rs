//! Photo Status Common Library
//!
//! CLIと他のフロントエンドで共有される型と整合・集計ロジック

pub mod catalog;
pub mod error;
pub mod reconcile;
pub mod summary;
pub mod types;

pub use catalog::{CatalogEntry, StatusCatalog};
pub use error::{Error, Result};
pub use reconcile::{effective_status, reconcile};
pub use summary::{summarize, StatusGroup, Summary};
pub use types::{StatusRecord, Vocabulary};
