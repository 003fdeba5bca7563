//! Twilio WhatsApp 配信実装
//!
//! Twilio Messages API を使用して WhatsApp メッセージを送信する。
//! 宛先・送信元とも `whatsapp:` プレフィックスを付与して呼び出す。

use async_trait::async_trait;
use salamat_domain::channel::{DeliveryError, TextMessage};
use serde::Deserialize;

use super::MessageDelivery;

/// Twilio WhatsApp 配信
///
/// `reqwest::Client` をラップし、Messages API へフォーム POST する。
/// 資料リンクを含む本文を 1 通のメッセージとして送信する。
pub struct TwilioMessageDelivery {
    client:      reqwest::Client,
    api_base:    String,
    account_sid: String,
    auth_token:  String,
    from_number: String,
}

/// Twilio API のエラーレスポンス
///
/// 失敗時の `message` フィールドだけを取り出す。
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    message: Option<String>,
}

impl TwilioMessageDelivery {
    /// 新しい Twilio 配信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `api_base`: Twilio API のベース URL（例: `https://api.twilio.com`）
    /// - `account_sid`: Twilio アカウント SID
    /// - `auth_token`: Twilio 認証トークン
    /// - `from_number`: 送信元 WhatsApp 番号（`+` 始まり、プレフィックスなし）
    pub fn new(
        api_base: &str,
        account_sid: String,
        auth_token: String,
        from_number: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            account_sid,
            auth_token,
            from_number,
        }
    }

    /// Messages API のエンドポイント URL を構築する
    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        )
    }
}

#[async_trait]
impl MessageDelivery for TwilioMessageDelivery {
    async fn send_message(&self, message: &TextMessage) -> Result<(), DeliveryError> {
        let params = [
            ("From", format!("whatsapp:{}", self.from_number)),
            ("To", format!("whatsapp:{}", message.to.as_str())),
            ("Body", message.body.clone()),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| DeliveryError::SendFailed(format!("Twilio API 呼び出し失敗: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // エラー詳細はレスポンス本文の message に入る
            let detail = response
                .json::<TwilioErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| status.to_string());
            return Err(DeliveryError::SendFailed(format!(
                "Twilio API エラー: {detail}"
            )));
        }

        Ok(())
    }
}
