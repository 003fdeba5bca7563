//! # メッセージ Composer
//!
//! 利用者のメッセージと資料リストから、チャネル別の送信ペイロードを
//! 決定的に構築する。
//!
//! ## 設計方針
//!
//! - **純粋関数**: 同じ入力からは常にバイト単位で同一の出力を生成する
//! - **リテラル補間のみ**: テンプレートエンジンは使わず、`format!` による
//!   文字列構築に限定する
//! - **資料順の保持**: 出力中の資料は入力リストの順序をそのまま保つ
//!
//! 空の資料リストの防止は呼び出し側（Coordinator のバリデーション）の責務。

use salamat_domain::resource::Resource;

/// メール件名（固定リテラル）
pub const EMAIL_SUBJECT: &str = "🏥 Salamat - Health Resources";

/// メッセージ未入力時のメール既定文
const EMAIL_DEFAULT_MESSAGE: &str = "Here are your health resources.";

/// メッセージ未入力時の WhatsApp 既定文
const WHATSAPP_DEFAULT_MESSAGE: &str = "Here are the resources you selected:";

/// WhatsApp 本文のヘッダ
const WHATSAPP_HEADER: &str = "🏥 *Salamat – Health Resources*";

/// WhatsApp 本文のフッタ
const WHATSAPP_FOOTER: &str = "_Sent via Salamat Healthcare Platform_";

/// WhatsApp 本文の区切り線
const WHATSAPP_DIVIDER: &str = "━━━━━━━━━━━━━━━━━━";

/// メールペイロード
///
/// 件名・プレーンテキスト・HTML の 3 形式。宛先はコーディネータ側で付与する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
   /// 件名（固定リテラル）
   pub subject: String,
   /// プレーンテキスト本文
   pub text:    String,
   /// HTML 本文
   pub html:    String,
}

/// 利用者メッセージを正規化する
///
/// 未入力・空白のみの場合は既定文に置き換える。
fn message_or_default<'a>(message: Option<&'a str>, default: &'a str) -> &'a str {
   match message.map(str::trim) {
      Some(trimmed) if !trimmed.is_empty() => trimmed,
      _ => default,
   }
}

/// メールペイロードを構築する
///
/// - `text`: 挨拶、メッセージ（または既定文）、資料ごとのアイコン + タイトル +
///   URL を空行区切りで並べ、フッタで締める
/// - `html`: 資料ごとに 1 つのスタイル付きブロックを、入力順を保って並べる
pub fn compose_email(message: Option<&str>, resources: &[Resource]) -> EmailContent {
   let message = message_or_default(message, EMAIL_DEFAULT_MESSAGE);

   let resources_text = resources
      .iter()
      .map(|r| {
         format!(
            "{} {}\nDownload: {}",
            r.resource_type.icon(),
            r.title,
            r.file_url
         )
      })
      .collect::<Vec<_>>()
      .join("\n\n");

   let text = format!("Hello!\n\n{message}\n\n{resources_text}\n\n— Salamat Healthcare\n");

   let resources_html = resources
      .iter()
      .map(|r| {
         format!(
            r#"<div style="border:1px solid #e0e0e0;padding:15px;border-radius:8px;margin-bottom:15px;">
  <h3 style="margin:0 0 8px;">{icon} {title}</h3>
  <p style="margin:0 0 10px;color:#555;">Type: {resource_type}</p>
  <a href="{file_url}" style="display:inline-block;padding:8px 14px;background:#43A047;color:white;border-radius:6px;text-decoration:none">📥 Download File</a>
</div>"#,
            icon = r.resource_type.icon(),
            title = r.title,
            resource_type = r.resource_type,
            file_url = r.file_url,
         )
      })
      .collect::<Vec<_>>()
      .join("\n");

   let html = format!(
      r#"<!DOCTYPE html>
<html>
<body style="font-family:Arial,sans-serif;background:#f5f5f5;padding:20px;">
<div style="max-width:600px;margin:auto;background:white;padding:25px;border-radius:10px;">
<h2 style="color:#2E7D32;">🏥 Salamat Healthcare</h2>
<p>{message}</p>
<h3 style="margin-top:25px;">📚 Your Resources</h3>
{resources_html}
<p style="font-size:12px;color:#777;margin-top:30px;">Sent via Salamat Healthcare Platform</p>
</div>
</body>
</html>
"#
   );

   EmailContent {
      subject: EMAIL_SUBJECT.to_string(),
      text,
      html,
   }
}

/// WhatsApp ペイロードを構築する
///
/// 固定ヘッダ、メッセージ（または既定文）、資料ごとの番号付きエントリ
/// `{index}. {title} ({type})` + リンク行、固定フッタからなる単一ブロック。
pub fn compose_whatsapp(message: Option<&str>, resources: &[Resource]) -> String {
   let message = message_or_default(message, WHATSAPP_DEFAULT_MESSAGE);

   let entries = resources
      .iter()
      .enumerate()
      .map(|(i, r)| {
         format!(
            "{}. {} ({})\n🔗 {}",
            i + 1,
            r.title,
            r.resource_type,
            r.file_url
         )
      })
      .collect::<Vec<_>>()
      .join("\n\n");

   format!(
      "{WHATSAPP_HEADER}\n\n{message}\n\n{WHATSAPP_DIVIDER}\n📚 *Your Resources*\n{WHATSAPP_DIVIDER}\n\n{entries}\n\n{WHATSAPP_DIVIDER}\n{WHATSAPP_FOOTER}"
   )
}
