//! # Salamat ドメイン層
//!
//! 保健教育資料の配信に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! このクレートは DDD（ドメイン駆動設計）の原則に従い、以下を提供する:
//!
//! - **値オブジェクト**: 不変オブジェクト（例: PhoneNumber, ResourceType）
//! - **カタログ**: 起動時に一度だけ構築される読み取り専用の資料一覧
//! - **配信ロジック**: 送信リクエストのバリデーションと結果集約の規則
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（SMTP、外部 API）には一切依存しない。
//! これにより、配信規則の純粋性が保たれる。
//!
//! ## モジュール構成
//!
//! - [`resource`] - 資料レコードと読み取り専用カタログ
//! - [`selection`] - ユーザーの資料選択状態
//! - [`phone`] - WhatsApp 宛先電話番号の値オブジェクト
//! - [`channel`] - チャネル別メッセージ型と配信エラー
//! - [`dispatch`] - 送信リクエストのバリデーションと配信結果
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use salamat_domain::{DomainError, resource::ResourceCatalog};
//!
//! // 組み込みカタログの構築
//! let catalog = ResourceCatalog::builtin();
//! assert!(!catalog.is_empty());
//!
//! // ドメインエラーの生成
//! let error = DomainError::NotFound {
//!     entity_type: "Resource",
//!     id:          "unknown-resource".to_string(),
//! };
//! ```

pub mod channel;
pub mod dispatch;
pub mod error;
pub mod phone;
pub mod resource;
pub mod selection;

pub use error::DomainError;
