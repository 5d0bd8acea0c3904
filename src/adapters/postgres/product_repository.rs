//! PostgreSQL implementation of ProductRepository over `excel_information`.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::assistant::CofeprisStatus;
use crate::domain::foundation::{DomainError, ProductRecordId, Timestamp, UserId};
use crate::domain::product::ProductRecord;
use crate::ports::ProductRepository;

/// PostgreSQL implementation of ProductRepository.
#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a new PostgresProductRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn save(&self, record: &ProductRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO excel_information (
                id, user_id, product_name, hs_code, from_country, igi_max,
                igi_reductions, iva, dta, noms, cofepris, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.user_id.as_uuid())
        .bind(&record.product_name)
        .bind(&record.hs_code)
        .bind(&record.origin_country)
        .bind(&record.igi_max)
        .bind(&record.igi_reductions)
        .bind(&record.iva)
        .bind(&record.dta)
        .bind(&record.noms)
        .bind(record.cofepris.as_str())
        .bind(record.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert product record: {}", e)))?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ProductRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, product_name, hs_code, from_country, igi_max,
                   igi_reductions, iva, dta, noms, cofepris, created_at
            FROM excel_information
            WHERE user_id = $1
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch product records: {}", e)))?;

        rows.into_iter().map(row_to_record).collect()
    }
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

fn row_to_record(row: PgRow) -> Result<ProductRecord, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let user_id: uuid::Uuid = column(&row, "user_id")?;
    let cofepris: String = column(&row, "cofepris")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    let cofepris = CofeprisStatus::parse(&cofepris).ok_or_else(|| {
        DomainError::database(format!("Unknown COFEPRIS value '{}'", cofepris))
    })?;

    Ok(ProductRecord {
        id: ProductRecordId::from_uuid(id),
        user_id: UserId::from_uuid(user_id),
        product_name: column(&row, "product_name")?,
        hs_code: column(&row, "hs_code")?,
        origin_country: column(&row, "from_country")?,
        igi_max: column(&row, "igi_max")?,
        igi_reductions: column(&row, "igi_reductions")?,
        iva: column(&row, "iva")?,
        dta: column(&row, "dta")?,
        noms: column(&row, "noms")?,
        cofepris,
        created_at: Timestamp::from_datetime(created_at),
    })
}
