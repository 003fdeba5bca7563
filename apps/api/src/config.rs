//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host:      String,
   /// ポート番号
   pub port:      u16,
   /// メール配信設定
   pub email:     EmailConfig,
   /// WhatsApp 配信設定
   pub messaging: MessagingConfig,
}

/// メール配信の設定
///
/// `EMAIL_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `smtp`: Mailpit（開発）/ SMTP サーバー経由で送信
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct EmailConfig {
   /// 送信バックエンド（"smtp" | "noop"）
   pub backend:      String,
   /// SMTP ホスト（backend=smtp の場合に使用）
   pub smtp_host:    String,
   /// SMTP ポート（backend=smtp の場合に使用）
   pub smtp_port:    u16,
   /// 送信元メールアドレス
   pub from_address: String,
}

/// WhatsApp 配信の設定
///
/// `MESSAGING_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `twilio`: Twilio Messages API 経由で送信
/// - `noop`: 送信しない（ログ出力のみ）
///
/// backend=twilio の場合、`TWILIO_ACCOUNT_SID` / `TWILIO_AUTH_TOKEN` /
/// `TWILIO_WHATSAPP_NUMBER` の設定が必要。
#[derive(Debug, Clone)]
pub struct MessagingConfig {
   /// 送信バックエンド（"twilio" | "noop"）
   pub backend:     String,
   /// Twilio API のベース URL
   pub api_base:    String,
   /// Twilio アカウント SID
   pub account_sid: String,
   /// Twilio 認証トークン
   pub auth_token:  String,
   /// 送信元 WhatsApp 番号（`+` 始まり）
   pub from_number: String,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host:      env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port:      env::var("API_PORT")
            .expect("API_PORT が設定されていません")
            .parse()
            .expect("API_PORT は有効なポート番号である必要があります"),
         email:     EmailConfig::from_env(),
         messaging: MessagingConfig::from_env(),
      })
   }
}

impl EmailConfig {
   /// 環境変数からメール配信設定を読み込む
   fn from_env() -> Self {
      Self {
         backend:      env::var("EMAIL_BACKEND").unwrap_or_else(|_| "noop".to_string()),
         smtp_host:    env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
         smtp_port:    env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("SMTP_PORT は有効なポート番号である必要があります"),
         from_address: env::var("EMAIL_FROM_ADDRESS")
            .unwrap_or_else(|_| "noreply@salamat.example.com".to_string()),
      }
   }
}

impl MessagingConfig {
   /// 環境変数から WhatsApp 配信設定を読み込む
   fn from_env() -> Self {
      Self {
         backend:     env::var("MESSAGING_BACKEND").unwrap_or_else(|_| "noop".to_string()),
         api_base:    env::var("TWILIO_API_BASE")
            .unwrap_or_else(|_| "https://api.twilio.com".to_string()),
         account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
         auth_token:  env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
         from_number: env::var("TWILIO_WHATSAPP_NUMBER").unwrap_or_default(),
      }
   }
}
