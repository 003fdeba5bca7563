//! # Salamat インフラ層
//!
//! 外部の配信サービスとの通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートは配信コラボレータ（メール送信・WhatsApp 送信）の具体的な
//! 実装を提供する。外部サービスの詳細をカプセル化し、ドメイン層を
//! インフラの変更から保護する。
//!
//! ## 責務
//!
//! - **メール配信**: SMTP 経由でのメール送信
//! - **WhatsApp 配信**: Twilio Messages API 経由でのメッセージ送信
//! - **テスト支援**: 送信内容を記録するモック実装
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`delivery`] - 配信コラボレータのトレイトと実装

pub mod delivery;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use delivery::{
    EmailDelivery,
    MessageDelivery,
    NoopEmailDelivery,
    NoopMessageDelivery,
    SmtpEmailDelivery,
    TwilioMessageDelivery,
};
