//! # 電話番号
//!
//! WhatsApp 宛先電話番号の値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: 正規化済みの番号だけが `PhoneNumber` として存在できる
//! - **生成時バリデーション**: 空白・括弧・ハイフンを除去した上で国番号
//!   プレフィックスを検証する
//! - **正規化済みで保持**: 以降の層（配信コラボレータ）は正規化を前提にできる

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// WhatsApp 宛先として要求される国番号プレフィックス
pub const REQUIRED_PREFIX: &str = "+971";

/// WhatsApp 宛先電話番号（値オブジェクト）
///
/// 生成時に正規化とバリデーションを実行し、不正な値の作成を防ぐ。
/// 保持する値は常に `+971...` 形式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// 電話番号を作成する
    ///
    /// # 正規化
    ///
    /// 空白・括弧・ハイフンを除去する（`+971 (50) 123-4567` →
    /// `+971501234567`）。先頭の `+` は付与しない。
    ///
    /// # バリデーション
    ///
    /// - 正規化後の値が [`REQUIRED_PREFIX`] で始まる
    /// - `+` 以降がすべて数字である
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let normalized: String = value
            .into()
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-'))
            .collect();

        if !normalized.starts_with(REQUIRED_PREFIX) {
            return Err(DomainError::Validation(format!(
                "WhatsApp 番号は {REQUIRED_PREFIX} で始まる必要があります"
            )));
        }

        if !normalized[1..].chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::Validation(
                "WhatsApp 番号の形式が不正です".to_string(),
            ));
        }

        Ok(Self(normalized))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
