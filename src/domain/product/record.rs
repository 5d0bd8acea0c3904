//! Extracted product records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::assistant::CofeprisStatus;
use crate::domain::foundation::{ProductRecordId, Timestamp, UserId};

use super::literal::LiteralMap;

/// Keys the extraction oracle is asked to fill.
pub mod field {
    pub const PRODUCT_NAME: &str = "Nombre del Producto";
    pub const HS_CODE: &str = "HS Code";
    pub const ORIGIN_COUNTRY: &str = "Origen del País";
    pub const IGI_MAX: &str = "Impuestos IGI (Tasa Máxima)";
    pub const IGI_REDUCTIONS: &str = "Impuestos IGI (Reducciones aplicables)";
    pub const IVA: &str = "IVA (%)";
    pub const DTA: &str = "DTA (%)";

    pub const REQUIRED: [&str; 7] = [
        PRODUCT_NAME,
        HS_CODE,
        ORIGIN_COUNTRY,
        IGI_MAX,
        IGI_REDUCTIONS,
        IVA,
        DTA,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing key in extracted record: '{0}'")]
    MissingKey(String),
}

/// Tax and regulatory facts for one product query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductRecordId,
    pub user_id: UserId,
    pub product_name: String,
    pub hs_code: String,
    pub origin_country: String,
    pub igi_max: String,
    pub igi_reductions: String,
    pub iva: String,
    pub dta: String,
    pub noms: Vec<String>,
    pub cofepris: CofeprisStatus,
    pub created_at: Timestamp,
}

impl ProductRecord {
    /// Builds a record from parsed extraction fields plus the analyzer's
    /// regulation citations and compliance flag.
    pub fn from_fields(
        user_id: UserId,
        fields: &LiteralMap,
        noms: Vec<String>,
        cofepris: CofeprisStatus,
    ) -> Result<Self, RecordError> {
        let get = |key: &str| {
            fields
                .get(key)
                .map(|v| v.to_text())
                .ok_or_else(|| RecordError::MissingKey(key.to_string()))
        };

        Ok(Self {
            id: ProductRecordId::new(),
            user_id,
            product_name: get(field::PRODUCT_NAME)?,
            hs_code: get(field::HS_CODE)?,
            origin_country: get(field::ORIGIN_COUNTRY)?,
            igi_max: get(field::IGI_MAX)?,
            igi_reductions: get(field::IGI_REDUCTIONS)?,
            iva: get(field::IVA)?,
            dta: get(field::DTA)?,
            noms,
            cofepris,
            created_at: Timestamp::now(),
        })
    }

    /// Tariff code with braces and double quotes removed; the dedup key
    /// for exports.
    pub fn normalized_hs_code(&self) -> String {
        self.hs_code.replace(['{', '}', '"'], "")
    }

    /// Regulation citations as one cell of text.
    pub fn noms_text(&self) -> String {
        self.noms.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::literal::parse_mapping;

    fn full_reply() -> &'static str {
        "{'Nombre del Producto': 'Laptop', 'HS Code': '8471.30.01', \
         'Origen del País': 'China', 'Impuestos IGI (Tasa Máxima)': '0%', \
         'Impuestos IGI (Reducciones aplicables)': 'N/A', 'IVA (%)': '16', 'DTA (%)': '0.8'}"
    }

    #[test]
    fn builds_record_from_complete_fields() {
        let fields = parse_mapping(full_reply()).unwrap();
        let record = ProductRecord::from_fields(
            UserId::new(),
            &fields,
            vec!["NOM-003-SCFI-2014 (Electrical equipment)".into()],
            CofeprisStatus::DoesNotApply,
        )
        .unwrap();

        assert_eq!(record.product_name, "Laptop");
        assert_eq!(record.hs_code, "8471.30.01");
        assert_eq!(record.origin_country, "China");
        assert_eq!(record.iva, "16");
        assert_eq!(record.noms_text(), "NOM-003-SCFI-2014 (Electrical equipment)");
        assert_eq!(record.cofepris.as_str(), "No Aplica");
    }

    #[test]
    fn missing_key_is_reported() {
        let fields = parse_mapping("{'Nombre del Producto': 'Laptop'}").unwrap();
        let err = ProductRecord::from_fields(
            UserId::new(),
            &fields,
            vec![],
            CofeprisStatus::Applies,
        )
        .unwrap_err();
        assert_eq!(err, RecordError::MissingKey("HS Code".to_string()));
    }

    #[test]
    fn normalized_hs_code_strips_braces_and_quotes() {
        let fields = parse_mapping(full_reply()).unwrap();
        let mut record =
            ProductRecord::from_fields(UserId::new(), &fields, vec![], CofeprisStatus::Applies)
                .unwrap();
        record.hs_code = r#"{"8471.30.01"}"#.to_string();
        assert_eq!(record.normalized_hs_code(), "8471.30.01");
    }

    #[test]
    fn required_keys_cover_the_prompt() {
        assert_eq!(field::REQUIRED.len(), 7);
        assert!(field::REQUIRED.contains(&"Origen del País"));
    }
}
