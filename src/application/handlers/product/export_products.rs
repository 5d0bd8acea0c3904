//! ExportProductsHandler - renders a user's product records to a workbook.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::identity::IdentityKey;
use crate::ports::{ProductRepository, SpreadsheetExporter, UserRepository};

/// Query for a user's product workbook.
#[derive(Debug, Clone)]
pub struct ExportProductsQuery {
    pub user_email: String,
}

/// A rendered workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductExport {
    pub bytes: Vec<u8>,
    /// Records fetched before tariff-code deduplication.
    pub record_count: usize,
}

/// Handler for the spreadsheet export.
pub struct ExportProductsHandler {
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
    exporter: Arc<dyn SpreadsheetExporter>,
}

impl ExportProductsHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        exporter: Arc<dyn SpreadsheetExporter>,
    ) -> Self {
        Self {
            users,
            products,
            exporter,
        }
    }

    pub async fn handle(&self, query: ExportProductsQuery) -> Result<ProductExport, DomainError> {
        let user = self
            .users
            .find_by_key(&IdentityKey::Email(query.user_email))
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))?;

        let records = self.products.list_for_user(&user.id).await?;
        if records.is_empty() {
            return Err(DomainError::new(
                ErrorCode::RecordsNotFound,
                "No data found for this user",
            ));
        }

        let bytes = self
            .exporter
            .render(&records)
            .map_err(|e| DomainError::new(ErrorCode::ExportError, e.to_string()))?;

        tracing::info!(user_id = %user.id, records = records.len(), "Product workbook rendered");

        Ok(ProductExport {
            bytes,
            record_count: records.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::XlsxExporter;
    use crate::adapters::memory::{InMemoryProductRepository, InMemoryUserRepository};
    use crate::domain::assistant::CofeprisStatus;
    use crate::domain::foundation::UserId;
    use crate::domain::product::{parse_mapping, ProductRecord};
    use crate::ports::ExportError;

    struct FailingExporter;

    impl SpreadsheetExporter for FailingExporter {
        fn render(&self, _records: &[ProductRecord]) -> Result<Vec<u8>, ExportError> {
            Err(ExportError::Render("disk full".to_string()))
        }
    }

    fn record(user_id: UserId, hs_code: &str) -> ProductRecord {
        let fields = parse_mapping(&format!(
            "{{'Nombre del Producto': 'Laptops', 'HS Code': '{hs_code}', \
             'Origen del País': 'China', 'Impuestos IGI (Tasa Máxima)': '0%', \
             'Impuestos IGI (Reducciones aplicables)': 'T-MEC', 'IVA (%)': '16%', \
             'DTA (%)': '0.8%'}}"
        ))
        .unwrap();
        ProductRecord::from_fields(user_id, &fields, vec![], CofeprisStatus::DoesNotApply).unwrap()
    }

    fn query(email: &str) -> ExportProductsQuery {
        ExportProductsQuery {
            user_email: email.to_string(),
        }
    }

    async fn setup() -> (Arc<InMemoryUserRepository>, Arc<InMemoryProductRepository>, UserId) {
        let users = Arc::new(InMemoryUserRepository::new());
        let user = users
            .ensure(&IdentityKey::Email("a@example.com".into()))
            .await
            .unwrap()
            .user;
        (users, Arc::new(InMemoryProductRepository::new()), user.id)
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = ExportProductsHandler::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(XlsxExporter::new()),
        );

        let err = handler.handle(query("ghost@example.com")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::UserNotFound);
        assert_eq!(err.message, "User not found");
    }

    #[tokio::test]
    async fn user_without_records_is_not_found() {
        let (users, products, _) = setup().await;
        let handler = ExportProductsHandler::new(users, products, Arc::new(XlsxExporter::new()));

        let err = handler.handle(query("a@example.com")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::RecordsNotFound);
        assert_eq!(err.message, "No data found for this user");
    }

    #[tokio::test]
    async fn renders_workbook_for_user_records() {
        let (users, products, user_id) = setup().await;
        products.save(&record(user_id, "8471.30.01")).await.unwrap();
        products.save(&record(user_id, "8471.30.01")).await.unwrap();
        products.save(&record(UserId::new(), "9999.99.99")).await.unwrap();
        let handler = ExportProductsHandler::new(users, products, Arc::new(XlsxExporter::new()));

        let export = handler.handle(query("a@example.com")).await.unwrap();

        assert_eq!(export.record_count, 2);
        assert_eq!(&export.bytes[..2], b"PK");
    }

    #[tokio::test]
    async fn render_failure_is_export_error() {
        let (users, products, user_id) = setup().await;
        products.save(&record(user_id, "8471.30.01")).await.unwrap();
        let handler = ExportProductsHandler::new(users, products, Arc::new(FailingExporter));

        let err = handler.handle(query("a@example.com")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ExportError);
    }
}
