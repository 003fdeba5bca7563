//! Noop 配信実装
//!
//! メール・WhatsApp とも実際には送信せず、ログ出力のみ行う。
//! テスト環境や配信無効化時に使用する。

use async_trait::async_trait;
use salamat_domain::channel::{DeliveryError, EmailMessage, TextMessage};

use super::{EmailDelivery, MessageDelivery};

/// Noop メール配信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopEmailDelivery;

#[async_trait]
impl EmailDelivery for NoopEmailDelivery {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), DeliveryError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}

/// Noop WhatsApp 配信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopMessageDelivery;

#[async_trait]
impl MessageDelivery for NoopMessageDelivery {
    async fn send_message(&self, message: &TextMessage) -> Result<(), DeliveryError> {
        tracing::info!(
            to = %message.to,
            body_len = message.body.len(),
            "Noop: WhatsApp 送信をスキップ"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use salamat_domain::phone::PhoneNumber;

    use super::*;

    #[tokio::test]
    async fn send_emailがエラーを返さない() {
        let delivery = NoopEmailDelivery;
        let email = EmailMessage {
            to:        "test@example.com".to_string(),
            subject:   "テスト件名".to_string(),
            text_body: "テスト".to_string(),
            html_body: "<p>テスト</p>".to_string(),
        };

        let result = delivery.send_email(&email).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn send_messageがエラーを返さない() {
        let delivery = NoopMessageDelivery;
        let message = TextMessage {
            to:   PhoneNumber::new("+971501234567").unwrap(),
            body: "テスト本文".to_string(),
        };

        let result = delivery.send_message(&message).await;
        assert!(result.is_ok());
    }
}
