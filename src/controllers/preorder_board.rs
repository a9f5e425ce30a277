//! Preorder Board Controller
//!
//! List and statistics load in parallel; a failed statistics call never
//! blanks the list.

use std::rc::Rc;

use crate::api::{Api, HttpClient};
use crate::error::{ActionError, ApiResult, ValidationError};
use crate::forms::{check_delete_confirmation, PreorderForm};
use crate::models::{DeliveryStatus, Preorder, Statistics};

/// Result of one board load
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub preorders: ApiResult<Vec<Preorder>>,
    pub statistics: Statistics,
}

/// Answer to the two delete prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConsent<'a> {
    /// First prompt cancelled
    Declined,
    /// Typed confirmation, `None` when the second prompt was cancelled
    Typed(Option<&'a str>),
}

/// Inline status selector: shown value, last saved value, in-flight flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusControl {
    pub shown: DeliveryStatus,
    pub committed: DeliveryStatus,
    pub busy: bool,
}

impl StatusControl {
    pub fn new(status: DeliveryStatus) -> Self {
        Self { shown: status, committed: status, busy: false }
    }

    /// Show `next` and lock the control; false when nothing should be sent
    pub fn begin(&mut self, next: DeliveryStatus) -> bool {
        if self.busy || next == self.committed {
            return false;
        }
        self.shown = next;
        self.busy = true;
        true
    }

    /// Unlock; a failed update reverts to the last saved value
    pub fn settle(&mut self, saved: bool) {
        self.busy = false;
        if saved {
            self.committed = self.shown;
        } else {
            self.shown = self.committed;
        }
    }
}

#[derive(Clone)]
pub struct PreorderBoard {
    api: Api,
}

impl PreorderBoard {
    pub fn new(client: Rc<dyn HttpClient>) -> Self {
        Self { api: Api::new(client) }
    }

    pub async fn load(&self) -> BoardSnapshot {
        let (preorders, statistics) =
            futures::join!(self.api.list_preorders(), self.api.preorder_statistics());

        match &preorders {
            Ok(list) => log::info!("[PreorderBoard] Loaded {} preorders", list.len()),
            Err(e) => log::error!("[PreorderBoard] Failed to load preorders: {}", e),
        }
        let statistics = statistics.unwrap_or_else(|e| {
            log::warn!("[PreorderBoard] Statistics unavailable, showing zeros: {}", e);
            Statistics::zeroed()
        });
        BoardSnapshot { preorders, statistics }
    }

    /// Create when the form has no serial, update otherwise
    pub async fn save(&self, form: &PreorderForm) -> Result<String, ActionError> {
        let payload = form.to_payload()?;
        let ack = match form.serial {
            Some(serial) => {
                log::info!("[PreorderBoard] Updating preorder {}", serial);
                self.api.update_preorder(serial, &payload).await?
            }
            None => {
                log::info!("[PreorderBoard] Creating preorder for {:?}", payload.seller);
                self.api.create_preorder(&payload).await?
            }
        };
        Ok(ack.message_or("Preorder saved successfully"))
    }

    /// Rewrite `preorder` with `status`
    pub async fn change_status(&self, preorder: &Preorder, status: DeliveryStatus) -> Result<String, ActionError> {
        let serial = preorder.serial.ok_or(ValidationError::MissingSerial)?;
        log::info!("[PreorderBoard] Preorder {} -> {}", serial, status);
        let payload = preorder.with_status(status);
        let ack = self.api.update_preorder(serial, &payload).await?;
        Ok(ack.message_or("Status updated successfully"))
    }

    /// Prompt text for the first delete confirmation
    pub fn delete_question(preorder: &Preorder) -> String {
        format!(
            "Delete preorder #{} ({}) from {}?",
            preorder.serial_label(),
            preorder.models.as_deref().unwrap_or("Unknown"),
            preorder.seller.as_deref().unwrap_or("Unknown"),
        )
    }

    /// Ok(None) when the user backed out; the request only fires on `DELETE`
    pub async fn delete(&self, serial: i64, consent: DeleteConsent<'_>) -> Result<Option<String>, ActionError> {
        let typed = match consent {
            DeleteConsent::Declined | DeleteConsent::Typed(None) => return Ok(None),
            DeleteConsent::Typed(Some(typed)) => typed,
        };
        check_delete_confirmation(typed)?;
        log::info!("[PreorderBoard] Deleting preorder {}", serial);
        let ack = self.api.delete_preorder(serial).await?;
        Ok(Some(ack.message_or("Preorder deleted successfully")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockClient;
    use crate::api::Method;
    use crate::controllers::fixtures::{failed, ok};
    use crate::error::ApiError;
    use serde_json::json;

    fn preorder_rows() -> serde_json::Value {
        ok(json!({"data": [
            {"S.No": 1, "Seller": "Toy Hub", "Models": "GT-R", "ETA": "2025-03",
             "Total Price": 1500, "PO Amount": 500, "On Arrival Amount": 1000,
             "Delivery Status": "Pending"},
            {"S.No": 2, "Seller": "Karz", "Models": "Supra", "Delivery Status": "Shipped"}
        ]}))
    }

    /// Same begin/send/settle sequence the status selector runs
    async fn apply_status(
        board: &PreorderBoard,
        control: &mut StatusControl,
        preorder: &Preorder,
        next: DeliveryStatus,
    ) -> Option<Result<String, ActionError>> {
        if !control.begin(next) {
            return None;
        }
        let result = board.change_status(preorder, next).await;
        control.settle(result.is_ok());
        Some(result)
    }

    fn sample() -> Preorder {
        serde_json::from_value(json!({
            "S.No": 1, "Seller": "Toy Hub", "Models": "GT-R", "ETA": "2025-03",
            "Total Price": 1500, "PO Amount": 500, "On Arrival Amount": 1000,
            "Delivery Status": "Pending"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_load_list_and_statistics() {
        let client = MockClient::new();
        client.reply("/api/preorders", preorder_rows());
        client.reply(
            "/api/preorders/statistics",
            ok(json!({"statistics": {"total_preorders": 2, "total_value": 1500, "payment_done": 500}})),
        );
        let board = PreorderBoard::new(client.clone());

        let snapshot = board.load().await;
        assert_eq!(snapshot.preorders.unwrap().len(), 2);
        assert_eq!(snapshot.statistics.total_preorders, 2);
        assert_eq!(snapshot.statistics.payment_done, 500.0);
    }

    #[tokio::test]
    async fn test_statistics_failure_keeps_list_and_zeroes_panel() {
        let client = MockClient::new();
        client.reply("/api/preorders", preorder_rows());
        client.fail("/api/preorders/statistics", ApiError::Transport("timeout".into()));
        let board = PreorderBoard::new(client.clone());

        let snapshot = board.load().await;
        assert_eq!(snapshot.preorders.unwrap().len(), 2);
        let stats = snapshot.statistics;
        assert_eq!(stats.total_preorders, 0);
        assert_eq!(stats.total_value, 0.0);
        assert_eq!(stats.total_po_amount, 0.0);
        assert_eq!(stats.total_on_arrival, 0.0);
        assert_eq!(stats.payment_done, 0.0);
        assert_eq!(stats.payment_remaining, 0.0);
    }

    #[tokio::test]
    async fn test_row_without_serial_keeps_the_list() {
        let client = MockClient::new();
        client.reply(
            "/api/preorders",
            ok(json!({"data": [
                {"S.No": 1, "Seller": "Toy Hub", "Models": "GT-R", "Delivery Status": "Pending"},
                {"S.No": "", "Seller": "Karz", "Models": "Supra", "Delivery Status": "Shipped"}
            ]})),
        );
        client.reply("/api/preorders/statistics", ok(json!({"statistics": {}})));
        let board = PreorderBoard::new(client.clone());

        let list = board.load().await.preorders.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].serial, Some(1));
        assert_eq!(list[1].serial, None);
        assert_eq!(list[1].serial_label(), "N/A");
        assert_eq!(list[1].seller.as_deref(), Some("Karz"));

        let result = board.change_status(&list[1], DeliveryStatus::Delivered).await;
        assert_eq!(result, Err(ActionError::Invalid(ValidationError::MissingSerial)));
        assert_eq!(client.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_list_failure_is_reported() {
        let client = MockClient::new();
        client.reply("/api/preorders", failed("Preorders sheet missing"));
        client.reply("/api/preorders/statistics", ok(json!({"statistics": {}})));
        let board = PreorderBoard::new(client.clone());

        let snapshot = board.load().await;
        assert_eq!(snapshot.preorders, Err(ApiError::Api("Preorders sheet missing".into())));
    }

    #[tokio::test]
    async fn test_save_creates_without_serial() {
        let client = MockClient::new();
        client.reply("/api/preorders", ok(json!({"message": "Preorder added"})));
        let board = PreorderBoard::new(client.clone());
        let form = PreorderForm { seller: "Karz".into(), models: "Supra".into(), ..PreorderForm::create() };

        assert_eq!(board.save(&form).await.unwrap(), "Preorder added");
        let sent = client.sent();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(
            sent[0].body,
            Some(json!({
                "seller": "Karz", "models": "Supra", "eta": null, "total_price": null,
                "po_amount": null, "on_arrival_amount": null, "delivery_status": "Pending"
            }))
        );
    }

    #[tokio::test]
    async fn test_save_updates_with_serial() {
        let client = MockClient::new();
        client.reply("/api/preorders/1", ok(json!({})));
        let board = PreorderBoard::new(client.clone());
        let form = PreorderForm::edit(&sample()).unwrap();

        assert_eq!(board.save(&form).await.unwrap(), "Preorder saved successfully");
        let sent = client.sent();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].path, "/api/preorders/1");
    }

    #[tokio::test]
    async fn test_save_validation_sends_nothing() {
        let client = MockClient::new();
        let board = PreorderBoard::new(client.clone());
        let form = PreorderForm { seller: "Karz".into(), ..PreorderForm::create() };

        assert!(board.save(&form).await.is_err());
        assert!(client.sent().is_empty());
    }

    #[tokio::test]
    async fn test_status_change_resends_full_payload() {
        let client = MockClient::new();
        client.reply("/api/preorders/1", ok(json!({"message": "Updated"})));
        let board = PreorderBoard::new(client.clone());
        let mut control = StatusControl::new(DeliveryStatus::Pending);

        let result = apply_status(&board, &mut control, &sample(), DeliveryStatus::Shipped).await;
        assert_eq!(result, Some(Ok("Updated".to_string())));
        assert_eq!(control, StatusControl::new(DeliveryStatus::Shipped));

        let body = client.sent()[0].body.clone().unwrap();
        assert_eq!(body["delivery_status"], json!("Shipped"));
        assert_eq!(body["seller"], json!("Toy Hub"));
        assert_eq!(body["total_price"], json!(1500.0));
    }

    #[tokio::test]
    async fn test_status_reverts_on_failure() {
        let client = MockClient::new();
        client.fail("/api/preorders/1", ApiError::Transport("offline".into()));
        let board = PreorderBoard::new(client.clone());
        let mut control = StatusControl::new(DeliveryStatus::Pending);
        let before = control.shown;

        let result = apply_status(&board, &mut control, &sample(), DeliveryStatus::Delivered).await;
        assert!(matches!(result, Some(Err(_))));
        assert_eq!(control.shown, before);
        assert!(!control.busy);
    }

    #[test]
    fn test_status_control_ignores_busy_and_unchanged() {
        let mut control = StatusControl::new(DeliveryStatus::Pending);
        assert!(!control.begin(DeliveryStatus::Pending));
        assert!(control.begin(DeliveryStatus::Shipped));
        assert!(control.busy);
        assert_eq!(control.shown, DeliveryStatus::Shipped);
        assert!(!control.begin(DeliveryStatus::Delivered));
    }

    #[tokio::test]
    async fn test_delete_needs_both_confirmations() {
        let client = MockClient::new();
        let board = PreorderBoard::new(client.clone());

        assert_eq!(board.delete(1, DeleteConsent::Declined).await, Ok(None));
        assert_eq!(board.delete(1, DeleteConsent::Typed(None)).await, Ok(None));
        assert_eq!(
            board.delete(1, DeleteConsent::Typed(Some("delete"))).await,
            Err(ActionError::Invalid(ValidationError::ConfirmationMismatch))
        );
        assert!(client.sent().is_empty());

        client.reply("/api/preorders/1", ok(json!({"message": "Preorder deleted"})));
        let result = board.delete(1, DeleteConsent::Typed(Some("DELETE"))).await;
        assert_eq!(result, Ok(Some("Preorder deleted".to_string())));
        let sent = client.sent();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].body, None);
    }

    #[test]
    fn test_delete_question() {
        assert_eq!(PreorderBoard::delete_question(&sample()), "Delete preorder #1 (GT-R) from Toy Hub?");
    }
}
