//! # 配信コラボレータ
//!
//! メール・WhatsApp 各チャネルの送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `EmailDelivery` / `MessageDelivery` trait で
//!   各チャネルの送信を抽象化
//! - **バックエンド切替**: SMTP / Twilio（実送信）と Noop（ログ出力のみ）を
//!   環境変数でランタイム選択
//! - **チャネル独立**: 各コラボレータは互いを知らない。失敗は
//!   `DeliveryError` として返し、集約は Coordinator 側で行う

mod noop;
mod smtp;
mod twilio;

use async_trait::async_trait;
pub use noop::{NoopEmailDelivery, NoopMessageDelivery};
use salamat_domain::channel::{DeliveryError, EmailMessage, TextMessage};
pub use smtp::SmtpEmailDelivery;
pub use twilio::TwilioMessageDelivery;

/// メール配信トレイト
///
/// メールチャネルの送信を抽象化する。SMTP / Noop の 2 実装を
/// 環境変数で切り替える。
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), DeliveryError>;
}

/// WhatsApp 配信トレイト
///
/// メッセージチャネルの送信を抽象化する。Twilio / Noop の 2 実装を
/// 環境変数で切り替える。
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    /// テキストメッセージを送信する
    async fn send_message(&self, message: &TextMessage) -> Result<(), DeliveryError>;
}
