//! # テスト用モック配信コラボレータ
//!
//! ユースケーステストで使用するインメモリの配信実装。
//! 送信されたメッセージを記録し、失敗の注入にも対応する。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! salamat-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use salamat_domain::channel::{DeliveryError, EmailMessage, TextMessage};

use crate::delivery::{EmailDelivery, MessageDelivery};

// ===== MockEmailDelivery =====

/// テスト用のモックメール配信
///
/// 送信されたメールを記録する。`fail_with` で失敗を注入すると、
/// 以降の送信はすべて `DeliveryError::SendFailed` を返す。
#[derive(Clone, Default)]
pub struct MockEmailDelivery {
    sent:      Arc<Mutex<Vec<EmailMessage>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockEmailDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降の送信を指定の理由で失敗させる
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(reason.into());
    }

    /// 記録された送信済みメールを返す
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailDelivery for MockEmailDelivery {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), DeliveryError> {
        if let Some(reason) = self.fail_with.lock().unwrap().clone() {
            return Err(DeliveryError::SendFailed(reason));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

// ===== MockMessageDelivery =====

/// テスト用のモック WhatsApp 配信
///
/// 送信されたメッセージを記録する。`fail_with` で失敗を注入すると、
/// 以降の送信はすべて `DeliveryError::SendFailed` を返す。
#[derive(Clone, Default)]
pub struct MockMessageDelivery {
    sent:      Arc<Mutex<Vec<TextMessage>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockMessageDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降の送信を指定の理由で失敗させる
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(reason.into());
    }

    /// 記録された送信済みメッセージを返す
    pub fn sent_messages(&self) -> Vec<TextMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageDelivery for MockMessageDelivery {
    async fn send_message(&self, message: &TextMessage) -> Result<(), DeliveryError> {
        if let Some(reason) = self.fail_with.lock().unwrap().clone() {
            return Err(DeliveryError::SendFailed(reason));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
