//! Product record query handlers.

mod export_products;

pub use export_products::{ExportProductsHandler, ExportProductsQuery, ProductExport};
