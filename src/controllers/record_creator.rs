//! Add-Model / Add-Field Controller

use std::rc::Rc;

use crate::api::{Api, HttpClient};
use crate::error::{ActionError, ApiResult};
use crate::forms::{validate_field_name, validate_new_model, SubseriesChoice};
use crate::models::DropdownOptions;
use crate::table::resolve_columns;

/// Add-model form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelDraft {
    pub model_name: String,
    pub series: String,
    pub subseries: String,
}

impl ModelDraft {
    /// Picking a series clears any subseries chosen for the previous one
    pub fn select_series(&mut self, series: impl Into<String>) {
        let series = series.into();
        if series != self.series {
            self.subseries.clear();
        }
        self.series = series;
    }

    pub fn subseries_choice(&self, options: &DropdownOptions) -> SubseriesChoice {
        SubseriesChoice::for_series(&self.series, options.subseries_of(&self.series))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone)]
pub struct RecordCreator {
    api: Api,
}

impl RecordCreator {
    pub fn new(client: Rc<dyn HttpClient>) -> Self {
        Self { api: Api::new(client) }
    }

    pub async fn load_options(&self) -> ApiResult<DropdownOptions> {
        let options = self.api.dropdown_options().await?;
        log::info!("[RecordCreator] Loaded {} series", options.series.len());
        Ok(options)
    }

    /// Validate and submit; the draft is only reset by the caller on success
    pub async fn add_model(&self, draft: &ModelDraft) -> Result<String, ActionError> {
        let model = validate_new_model(&draft.model_name, &draft.series, &draft.subseries)?;
        log::info!("[RecordCreator] Adding model {:?}", model.model_name);
        let ack = self.api.add_model(&model).await?;
        Ok(ack.message_or("Model added successfully!"))
    }

    pub async fn add_field(&self, raw_name: &str) -> Result<String, ActionError> {
        let name = validate_field_name(raw_name)?;
        log::info!("[RecordCreator] Adding field {:?}", name);
        let ack = self.api.add_field(&name).await?;
        Ok(ack.message_or("Field added successfully!"))
    }

    /// Column names currently declared by the backend
    pub async fn current_fields(&self) -> ApiResult<Vec<String>> {
        let dataset = self.api.list_records().await?;
        Ok(resolve_columns(&dataset.data, &dataset.columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockClient;
    use crate::controllers::fixtures::{failed, ok};
    use crate::error::ValidationError;
    use serde_json::json;

    fn options() -> DropdownOptions {
        let map = json!({"Mainline": ["Tooned", "HW Exotics"], "Premium": ["Car Culture"]});
        DropdownOptions::from_map(map.as_object().unwrap())
    }

    #[tokio::test]
    async fn test_load_options() {
        let client = MockClient::new();
        client.reply("/api/dropdown-options", ok(json!({"series": {"Mainline": ["Tooned"]}})));
        let creator = RecordCreator::new(client.clone());

        let options = creator.load_options().await.unwrap();
        assert_eq!(options.series_names(), vec!["Mainline"]);
        assert_eq!(options.subseries_of("Mainline"), vec!["Tooned"]);
    }

    #[test]
    fn test_draft_cascade_and_reset() {
        let options = options();
        let mut draft = ModelDraft::default();
        assert!(!draft.subseries_choice(&options).enabled);

        draft.select_series("Mainline");
        draft.subseries = "Tooned".into();
        let choice = draft.subseries_choice(&options);
        assert!(choice.enabled);
        assert_eq!(choice.options, vec!["Tooned", "HW Exotics"]);

        draft.select_series("Premium");
        assert_eq!(draft.subseries, "");

        draft.model_name = "Civic".into();
        draft.reset();
        assert_eq!(draft, ModelDraft::default());
        assert!(!draft.subseries_choice(&options).enabled);
    }

    #[tokio::test]
    async fn test_add_model_validates_before_sending() {
        let client = MockClient::new();
        let creator = RecordCreator::new(client.clone());
        let draft = ModelDraft { model_name: "Civic".into(), series: "Mainline".into(), ..Default::default() };

        let result = creator.add_model(&draft).await;
        assert!(matches!(result, Err(ActionError::Invalid(ValidationError::MissingRequired(_)))));
        assert!(client.sent().is_empty());
    }

    #[tokio::test]
    async fn test_add_model_posts_trimmed_name() {
        let client = MockClient::new();
        client.reply("/api/add-model", ok(json!({"message": "Model 'Civic' added"})));
        let creator = RecordCreator::new(client.clone());
        let draft = ModelDraft {
            model_name: "  Civic ".into(),
            series: "Mainline".into(),
            subseries: "Tooned".into(),
        };

        assert_eq!(creator.add_model(&draft).await.unwrap(), "Model 'Civic' added");
        assert_eq!(
            client.sent()[0].body,
            Some(json!({"model_name": "Civic", "series": "Mainline", "subseries": "Tooned"}))
        );
    }

    #[tokio::test]
    async fn test_add_field_rejects_without_request() {
        let client = MockClient::new();
        let creator = RecordCreator::new(client.clone());

        let result = creator.add_field("a/b").await;
        assert_eq!(result, Err(ActionError::Invalid(ValidationError::InvalidFieldChars)));
        let result = creator.add_field(&"x".repeat(51)).await;
        assert_eq!(result, Err(ActionError::Invalid(ValidationError::FieldNameTooLong { max: 50 })));
        assert!(client.sent().is_empty());
    }

    #[tokio::test]
    async fn test_add_field_reports_server_error() {
        let client = MockClient::new();
        client.reply("/api/add-field", failed("Field already exists"));
        let creator = RecordCreator::new(client.clone());

        let err = creator.add_field("Hot Wheels 2024").await.unwrap_err();
        assert_eq!(err.to_string(), "Field already exists");
        assert_eq!(client.sent()[0].body, Some(json!({"field_name": "Hot Wheels 2024"})));
    }

    #[tokio::test]
    async fn test_current_fields() {
        let client = MockClient::new();
        client.reply("/api/data", ok(json!({"data": [], "columns": ["S.No", "Model Name"]})));
        let creator = RecordCreator::new(client.clone());
        assert_eq!(creator.current_fields().await.unwrap(), vec!["S.No", "Model Name"]);
    }
}
