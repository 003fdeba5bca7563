//! # 配信
//!
//! 送信リクエスト（Submission）のバリデーション規則と、チャネル横断の
//! 配信結果の集約規則を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Submission`] | 送信リクエスト | 1 回の送信操作ごとに新規生成される一時的な値 |
//! | [`DispatchPlan`] | 配信プラン | バリデーション通過後の、チャネルごとの宛先 |
//! | [`DispatchResult`] | 配信結果 | チャネルごとの成否フラグ |
//!
//! ## 設計方針
//!
//! - **fail-fast バリデーション**: 規則は順序付きで、最初に違反した規則の
//!   エラーだけが報告される
//! - **チャネル独立**: 片方のチャネルの失敗はもう一方を中断・変更しない。
//!   集約は「有効なチャネルのうち 1 つでも成功すれば成功」
//! - **永続化しない**: Submission も DispatchResult も利用者への表示後に破棄される

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{DomainError, phone::PhoneNumber, resource::Resource};

/// 送信リクエスト
///
/// 利用者の 1 回の送信操作を表す一時的な値オブジェクト。
/// 宛先・メッセージは未検証の生文字列として保持し、検証は
/// [`validate`](Submission::validate) で行う。
#[derive(Debug, Clone)]
pub struct Submission {
    /// メール宛先（`send_email` が真の場合に使用）
    pub recipient_email: Option<String>,
    /// WhatsApp 宛先（`send_whatsapp` が真の場合に使用、未正規化）
    pub recipient_phone: Option<String>,
    /// 利用者の添付メッセージ
    pub message:         Option<String>,
    /// メールで送信するか
    pub send_email:      bool,
    /// WhatsApp で送信するか
    pub send_whatsapp:   bool,
    /// 配信対象の資料（カタログ順）
    pub resources:       Vec<Resource>,
}

/// 配信プラン
///
/// バリデーション通過後の、有効なチャネルごとの宛先。
/// `send_email` / `send_whatsapp` が偽のチャネルは `None` になる。
#[derive(Debug, Clone)]
pub struct DispatchPlan {
    /// メール宛先（メールチャネルが有効な場合のみ）
    pub email_to:    Option<String>,
    /// WhatsApp 宛先（WhatsApp チャネルが有効な場合のみ、正規化済み）
    pub whatsapp_to: Option<PhoneNumber>,
}

impl Submission {
    /// 送信リクエストを検証し、配信プランを構築する
    ///
    /// 規則は以下の順で評価され、最初に違反した規則のエラーだけが報告される
    /// （fail-fast、部分的な検証状態は保持しない）:
    ///
    /// 1. 資料が 1 つ以上選択されている
    /// 2. 送信方法が 1 つ以上選択されている
    /// 3. WhatsApp 送信時、宛先番号が正規化後に `+971` で始まる
    ///
    /// バリデーションエラーの場合、配信コラボレータへの呼び出しは一切
    /// 行われない。
    pub fn validate(&self) -> Result<DispatchPlan, DomainError> {
        if self.resources.is_empty() {
            return Err(DomainError::Validation(
                "資料を 1 つ以上選択してください".to_string(),
            ));
        }

        if !self.send_email && !self.send_whatsapp {
            return Err(DomainError::Validation(
                "送信方法を選択してください".to_string(),
            ));
        }

        let whatsapp_to = if self.send_whatsapp {
            Some(PhoneNumber::new(
                self.recipient_phone.as_deref().unwrap_or(""),
            )?)
        } else {
            None
        };

        let email_to = if self.send_email {
            Some(self.recipient_email.clone().unwrap_or_default())
        } else {
            None
        };

        Ok(DispatchPlan {
            email_to,
            whatsapp_to,
        })
    }
}

/// 配信経路
///
/// 集約成功時に、どのチャネルで届いたかを利用者へ伝えるための区分。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SentVia {
    /// メールのみ成功
    Email,
    /// WhatsApp のみ成功
    Whatsapp,
    /// 両方成功
    Both,
}

/// 配信結果
///
/// チャネルごとの成否フラグ。無効だったチャネルは偽のまま残る。
/// 利用者への表示後に破棄され、永続化されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DispatchResult {
    /// メールチャネルの成否
    pub email:    bool,
    /// WhatsApp チャネルの成否
    pub whatsapp: bool,
}

impl DispatchResult {
    /// 集約結果が成功かどうかを返す
    ///
    /// 有効なチャネルのうち 1 つでも成功していれば成功。
    pub fn is_success(&self) -> bool {
        self.email || self.whatsapp
    }

    /// 成功した配信経路を返す
    ///
    /// 全チャネル失敗の場合は `None`。
    pub fn sent_via(&self) -> Option<SentVia> {
        match (self.email, self.whatsapp) {
            (true, true) => Some(SentVia::Both),
            (true, false) => Some(SentVia::Email),
            (false, true) => Some(SentVia::Whatsapp),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::resource::ResourceCatalog;

    fn make_submission(resources: Vec<Resource>) -> Submission {
        Submission {
            recipient_email: Some("patient@example.com".to_string()),
            recipient_phone: Some("+971501234567".to_string()),
            message:         Some("お大事に".to_string()),
            send_email:      true,
            send_whatsapp:   true,
            resources,
        }
    }

    fn builtin_resources() -> Vec<Resource> {
        ResourceCatalog::builtin().iter().cloned().collect()
    }

    // ===== バリデーション規則の順序 =====

    #[test]
    fn 資料が空なら最初の規則で拒否される() {
        // 送信方法も未選択だが、報告されるのは資料の規則
        let submission = Submission {
            send_email: false,
            send_whatsapp: false,
            ..make_submission(Vec::new())
        };

        let error = submission.validate().unwrap_err();

        assert_eq!(
            error.to_string(),
            "バリデーションエラー: 資料を 1 つ以上選択してください"
        );
    }

    #[test]
    fn 送信方法が未選択なら2番目の規則で拒否される() {
        let submission = Submission {
            send_email: false,
            send_whatsapp: false,
            ..make_submission(builtin_resources())
        };

        let error = submission.validate().unwrap_err();

        assert_eq!(
            error.to_string(),
            "バリデーションエラー: 送信方法を選択してください"
        );
    }

    #[rstest]
    #[case(Some("971501234567".to_string()))]
    #[case(Some("0501234567".to_string()))]
    #[case(None)]
    fn whatsapp有効時に不正な番号は拒否される(#[case] phone: Option<String>) {
        let submission = Submission {
            recipient_phone: phone,
            send_email: false,
            ..make_submission(builtin_resources())
        };

        let error = submission.validate().unwrap_err();

        assert!(matches!(error, DomainError::Validation(_)));
    }

    #[test]
    fn whatsapp無効時は番号が検証されない() {
        let submission = Submission {
            recipient_phone: Some("invalid".to_string()),
            send_whatsapp: false,
            ..make_submission(builtin_resources())
        };

        let plan = submission.validate().unwrap();

        assert!(plan.whatsapp_to.is_none());
        assert_eq!(plan.email_to.as_deref(), Some("patient@example.com"));
    }

    #[test]
    fn 正常なリクエストは両チャネルのプランを返す() {
        let submission = make_submission(builtin_resources());

        let plan = submission.validate().unwrap();

        assert_eq!(plan.email_to.as_deref(), Some("patient@example.com"));
        assert_eq!(
            plan.whatsapp_to.as_ref().map(|p| p.as_str()),
            Some("+971501234567")
        );
    }

    #[test]
    fn 番号は正規化された上でプランに入る() {
        let submission = Submission {
            recipient_phone: Some("+971 (50) 123-4567".to_string()),
            send_email: false,
            ..make_submission(builtin_resources())
        };

        let plan = submission.validate().unwrap();

        assert_eq!(
            plan.whatsapp_to.as_ref().map(|p| p.as_str()),
            Some("+971501234567")
        );
    }

    // ===== 配信結果の集約 =====

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, true)]
    #[case(false, true, true)]
    #[case(false, false, false)]
    fn is_successは1つでも成功なら真(
        #[case] email: bool,
        #[case] whatsapp: bool,
        #[case] expected: bool,
    ) {
        let result = DispatchResult { email, whatsapp };
        assert_eq!(result.is_success(), expected);
    }

    #[test]
    fn sent_viaが成功チャネルを区別する() {
        assert_eq!(
            DispatchResult {
                email:    true,
                whatsapp: true,
            }
            .sent_via(),
            Some(SentVia::Both)
        );
        assert_eq!(
            DispatchResult {
                email:    true,
                whatsapp: false,
            }
            .sent_via(),
            Some(SentVia::Email)
        );
        assert_eq!(
            DispatchResult {
                email:    false,
                whatsapp: true,
            }
            .sent_via(),
            Some(SentVia::Whatsapp)
        );
        assert_eq!(
            DispatchResult {
                email:    false,
                whatsapp: false,
            }
            .sent_via(),
            None
        );
    }

    #[test]
    fn sent_viaの文字列変換が正しい() {
        assert_eq!(SentVia::Email.to_string(), "email");
        assert_eq!(SentVia::Whatsapp.to_string(), "whatsapp");
        assert_eq!(SentVia::Both.to_string(), "both");
    }

    #[test]
    fn sent_viaのserializeがsnake_caseになる() {
        assert_eq!(
            serde_json::to_value(SentVia::Both).unwrap(),
            serde_json::json!("both")
        );
    }
}
