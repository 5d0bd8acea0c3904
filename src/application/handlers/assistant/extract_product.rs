//! ProductExtractor - turns a formatted answer into a product record.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::assistant::FormattedAnswer;
use crate::domain::foundation::{SessionToken, UserId};
use crate::domain::product::{parse_mapping, LiteralError, ProductRecord, RecordError};
use crate::ports::{AIError, AIProvider, CompletionRequest, Message, MessageRole, RequestMetadata};

use super::completion::trace_response;
use super::settings::UtilitySettings;

const EXTRACTION_INSTRUCTION: &str = "You will give me a dict with the following keys: \
Nombre del Producto, HS Code, Origen del País, Impuestos IGI (Tasa Máxima), \
Impuestos IGI (Reducciones aplicables), IVA (%), DTA (%) and the values you will find in the \
search text. Please write the dict in the following format: {'Nombre del Producto': 'value', \
'HS Code': 'value', 'Origen del País': 'value', 'Impuestos IGI (Tasa Máxima)': 'value', \
'Impuestos IGI (Reducciones aplicables)': 'value', 'IVA (%)': 'value', 'DTA (%)': 'value'} \
and write the values in the search_text language if it is in English, write the values in \
English if it is in Spanish write the values in Spanish.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Oracle(#[from] AIError),

    #[error("malformed extraction reply: {0}")]
    Literal(#[from] LiteralError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Issues the extraction call and builds the record.
pub struct ProductExtractor {
    ai: Arc<dyn AIProvider>,
    settings: UtilitySettings,
}

impl ProductExtractor {
    pub fn new(ai: Arc<dyn AIProvider>, settings: UtilitySettings) -> Self {
        Self { ai, settings }
    }

    /// Extracts the seven product fields from `reply` and merges in the
    /// analyzer's SCFI citations and compliance flag.
    pub async fn extract(
        &self,
        user_id: UserId,
        reply: &str,
        answer: &FormattedAnswer,
        token: &SessionToken,
    ) -> Result<ProductRecord, ExtractError> {
        let request = CompletionRequest::new(RequestMetadata::new(token.as_str(), "extract_product"))
            .with_message(Message::with_parts(
                MessageRole::User,
                [EXTRACTION_INSTRUCTION, reply],
            ))
            .with_model(&self.settings.model)
            .with_max_tokens(self.settings.max_tokens)
            .with_timeout(Some(self.settings.timeout));

        let response = self.ai.complete(request).await?;
        trace_response("extract_product", token, &response);
        let fields = parse_mapping(&response.content)?;

        Ok(ProductRecord::from_fields(
            user_id,
            &fields,
            answer.scfi_citations.clone(),
            answer.cofepris,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::domain::assistant::CofeprisStatus;

    const DICT: &str = "```python\n{'Nombre del Producto': 'Laptops', 'HS Code': '8471.30.01', \
        'Origen del País': 'China', 'Impuestos IGI (Tasa Máxima)': '0%', \
        'Impuestos IGI (Reducciones aplicables)': 'T-MEC', 'IVA (%)': '16%', 'DTA (%)': '0.8%'}\n```";

    fn answer() -> FormattedAnswer {
        FormattedAnswer {
            scfi_citations: vec!["NOM-003-SCFI-2014 (Electrical equipment)".to_string()],
            cofepris: CofeprisStatus::DoesNotApply,
        }
    }

    #[tokio::test]
    async fn builds_record_from_dict_reply() {
        let mock = Arc::new(MockAIProvider::new().with_response(DICT));
        let extractor = ProductExtractor::new(mock.clone(), UtilitySettings::extraction_default());
        let user = UserId::new();

        let record = extractor
            .extract(user, "Import information for laptops", &answer(), &SessionToken::generate())
            .await
            .unwrap();

        assert_eq!(record.user_id, user);
        assert_eq!(record.product_name, "Laptops");
        assert_eq!(record.hs_code, "8471.30.01");
        assert_eq!(record.noms, vec!["NOM-003-SCFI-2014 (Electrical equipment)"]);
        assert_eq!(record.cofepris, CofeprisStatus::DoesNotApply);

        let request = &mock.get_calls()[0];
        assert_eq!(request.messages[0].parts[0], EXTRACTION_INSTRUCTION);
        assert_eq!(request.messages[0].parts[1], "Import information for laptops");
        assert_eq!(request.timeout, Some(std::time::Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn json_reply_with_escaped_accents_is_accepted() {
        let reply = r#"{"Nombre del Producto": "Lap" "tops", "HS Code": "8471.30.01", "Origen del Pa\u00eds": "China", "Impuestos IGI (Tasa M\u00e1xima)": "0%", "Impuestos IGI (Reducciones aplicables)": "T-MEC", "IVA (%)": "16%", "DTA (%)": "0.8%"}"#;
        let mock = Arc::new(MockAIProvider::new().with_response(reply));
        let extractor = ProductExtractor::new(mock, UtilitySettings::extraction_default());

        let record = extractor
            .extract(UserId::new(), "reply", &answer(), &SessionToken::generate())
            .await
            .unwrap();

        assert_eq!(record.product_name, "Laptops");
        assert_eq!(record.origin_country, "China");
        assert_eq!(record.igi_max, "0%");
    }

    #[tokio::test]
    async fn prose_reply_is_malformed() {
        let mock = Arc::new(MockAIProvider::new().with_response("I could not find the data."));
        let extractor = ProductExtractor::new(mock, UtilitySettings::extraction_default());

        let err = extractor
            .extract(UserId::new(), "reply", &answer(), &SessionToken::generate())
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractError::Literal(_)));
    }

    #[tokio::test]
    async fn truncated_dict_is_malformed() {
        let mock = Arc::new(
            MockAIProvider::new().with_truncated_response("{'Nombre del Producto': 'Laptops', 'HS Co"),
        );
        let extractor = ProductExtractor::new(mock, UtilitySettings::extraction_default());

        let err = extractor
            .extract(UserId::new(), "reply", &answer(), &SessionToken::generate())
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractError::Literal(_)));
    }

    #[tokio::test]
    async fn missing_key_is_reported() {
        let mock = Arc::new(MockAIProvider::new().with_response("{'Nombre del Producto': 'x'}"));
        let extractor = ProductExtractor::new(mock, UtilitySettings::extraction_default());

        let err = extractor
            .extract(UserId::new(), "reply", &answer(), &SessionToken::generate())
            .await
            .unwrap_err();

        assert_eq!(err, ExtractError::Record(RecordError::MissingKey("HS Code".into())));
    }

    #[test]
    fn instruction_lists_every_required_key() {
        for key in crate::domain::product::field::REQUIRED {
            assert!(EXTRACTION_INSTRUCTION.contains(key), "{key} missing");
        }
    }
}
