//! sika-catalog: transaction catalog providers (CSV, JSON, built-in demo data).

pub mod catalog;
pub mod demo;
pub mod loaders;

pub use catalog::Catalog;
pub use demo::demo_catalog;
pub use loaders::{load_csv, load_json};
