//! # 配信チャネル
//!
//! メール・WhatsApp 各チャネルへ渡すメッセージ型と配信エラーを定義する。
//!
//! ## 設計方針
//!
//! - **チャネル別メッセージ型**: 本文の組み立て（Composer）と送信（配信
//!   コラボレータ）の境界をこの型で固定する
//! - **エラーはチャネル境界で捕捉**: `DeliveryError` は配信コラボレータから
//!   返され、Coordinator 側で真偽値の結果へ変換される

use thiserror::Error;

use crate::phone::PhoneNumber;

/// 配信エラー
///
/// 配信コラボレータの呼び出しが失敗したことを表す。
/// Coordinator はこのエラーをチャネル単位の失敗として記録するのみで、
/// もう一方のチャネルの送信には影響させない。
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// 配信リクエストが不正
    ///
    /// 必須フィールドの欠落など、送信を試みる前に拒否されるケース。
    #[error("配信リクエストが不正です: {0}")]
    InvalidRequest(String),

    /// 送信に失敗
    ///
    /// 外部サービスの呼び出しが失敗した、または非成功の結果を返した。
    #[error("送信に失敗しました: {0}")]
    SendFailed(String),
}

/// メールメッセージ
///
/// Composer の出力。メール配信コラボレータに渡される。
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// プレーンテキスト本文
    pub text_body: String,
    /// HTML 本文
    pub html_body: String,
}

/// テキストメッセージ
///
/// Composer の出力。WhatsApp 配信コラボレータに渡される。
#[derive(Debug, Clone)]
pub struct TextMessage {
    /// 送信先電話番号（正規化済み）
    pub to:   PhoneNumber,
    /// 本文（資料リンクを含む単一ブロック）
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_errorのdisplayが日本語メッセージを出力する() {
        let error = DeliveryError::InvalidRequest("宛先が未指定です".to_string());
        assert_eq!(
            error.to_string(),
            "配信リクエストが不正です: 宛先が未指定です"
        );

        let error = DeliveryError::SendFailed("SMTP 接続失敗".to_string());
        assert_eq!(error.to_string(), "送信に失敗しました: SMTP 接続失敗");
    }
}
