//! # 資料
//!
//! 配信対象となる保健教育資料と、その読み取り専用カタログを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Resource`] | 資料 | タイトル・種別・URL を持つ静的なリンク可能コンテンツ |
//! | [`ResourceType`] | 資料種別 | 3 種類: PDF、Video、Infographic |
//! | [`ResourceCatalog`] | 資料カタログ | 起動時に一度だけ構築される読み取り専用の一覧 |
//!
//! ## 設計方針
//!
//! - **不変レコード**: 資料は実行時に生成・変更されない
//! - **注入されるカタログ**: プロセス全体の可変状態ではなく、起動時に構築して
//!   必要なコンポーネントへ渡す
//! - **カタログ順の保証**: 一覧・解決はカタログの定義順を保持する

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::DomainError;

/// 資料 ID（一意識別子）
///
/// カタログ内で資料を一意に識別するスラッグ（例: `health-guide`）。
/// Newtype パターンで型安全性を確保。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{_0}")]
pub struct ResourceId(String);

impl ResourceId {
    /// 既存のスラッグから資料 ID を作成する
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 資料種別
///
/// メール・WhatsApp 本文中の表示名（`PDF` / `Video` / `Infographic`）として
/// そのままシリアライズされる。
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
pub enum ResourceType {
    /// PDF ドキュメント
    #[serde(rename = "PDF")]
    #[strum(serialize = "PDF")]
    Pdf,
    /// 動画
    Video,
    /// インフォグラフィック
    Infographic,
}

impl ResourceType {
    /// 種別ごとのアイコングリフを返す
    ///
    /// メール・WhatsApp 本文の資料行の先頭に付与される。
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pdf => "📄",
            Self::Video => "🎥",
            Self::Infographic => "🖼️",
        }
    }
}

/// 資料レコード
///
/// カタログに定義された静的なリンク可能コンテンツ。実行時に生成・変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// 資料 ID
    pub id:            ResourceId,
    /// タイトル
    pub title:         String,
    /// 資料種別
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// 説明文
    pub description:   String,
    /// ファイル URL
    pub file_url:      String,
}

impl Resource {
    /// プレビュー URL を導出する
    ///
    /// 現在の仕様ではファイル URL と同一。導出規則が変わっても呼び出し側に
    /// 影響しないよう、純粋な導出関数として提供する。
    pub fn preview_url(&self) -> &str {
        &self.file_url
    }
}

/// 資料カタログ
///
/// 資料 ID → 資料レコードの読み取り専用マッピング。起動時に一度だけ構築し、
/// 必要なコンポーネントへ注入する。定義順を保持する。
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    resources: Vec<Resource>,
}

impl ResourceCatalog {
    /// 資料一覧からカタログを構築する
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// 組み込みカタログを構築する
    ///
    /// Salamat プラットフォームが配信する 3 つの資料を定義する。
    pub fn builtin() -> Self {
        Self::new(vec![
            Resource {
                id:            ResourceId::new("health-guide"),
                title:         "Patient Health Guide".to_string(),
                resource_type: ResourceType::Pdf,
                description:   "Complete health guide for patients".to_string(),
                file_url:      "https://res.cloudinary.com/dwrsruuty/raw/upload/v1234567890/health-guide.pdf".to_string(),
            },
            Resource {
                id:            ResourceId::new("exercise-video"),
                title:         "Exercise Tutorial".to_string(),
                resource_type: ResourceType::Video,
                description:   "Simple exercises for better health".to_string(),
                file_url:      "https://res.cloudinary.com/dwrsruuty/video/upload/v1766348856/The_PERFECT_Mobility_Routine_to_FIX_YOUR_SIT_3_MinDay__1080p_ptyy30.mp4".to_string(),
            },
            Resource {
                id:            ResourceId::new("medical-guidelines"),
                title:         "Medical Guidelines for Healthy Living".to_string(),
                resource_type: ResourceType::Infographic,
                description:   "Essential medical guidelines and tips".to_string(),
                file_url:      "https://res.cloudinary.com/dwrsruuty/image/upload/v1766410062/WhatsApp_Image_2025-12-22_at_11.16.30_AM_aayp9j.jpg".to_string(),
            },
        ])
    }

    /// ID で資料を検索する
    pub fn get(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| &r.id == id)
    }

    /// ID のリストを資料レコードへ解決する
    ///
    /// 返り値はカタログの定義順（重複 ID は 1 件に集約）。
    /// 存在しない ID が含まれる場合は `DomainError::NotFound` を返す。
    pub fn resolve(&self, ids: &[ResourceId]) -> Result<Vec<Resource>, DomainError> {
        for id in ids {
            if self.get(id).is_none() {
                return Err(DomainError::NotFound {
                    entity_type: "Resource",
                    id:          id.to_string(),
                });
            }
        }

        Ok(self
            .resources
            .iter()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect())
    }

    /// カタログの定義順で資料を走査する
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// カタログ内の資料数を返す
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// カタログが空かどうかを返す
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resource_typeの文字列変換が正しい() {
        // Display
        assert_eq!(ResourceType::Pdf.to_string(), "PDF");
        assert_eq!(ResourceType::Video.to_string(), "Video");
        assert_eq!(ResourceType::Infographic.to_string(), "Infographic");

        // FromStr
        assert_eq!(ResourceType::from_str("PDF").unwrap(), ResourceType::Pdf);
        assert_eq!(ResourceType::from_str("Video").unwrap(), ResourceType::Video);
        assert_eq!(
            ResourceType::from_str("Infographic").unwrap(),
            ResourceType::Infographic
        );
    }

    #[test]
    fn resource_typeのserializeが表示名と一致する() {
        assert_eq!(
            serde_json::to_value(ResourceType::Pdf).unwrap(),
            serde_json::json!("PDF")
        );
        assert_eq!(
            serde_json::to_value(ResourceType::Video).unwrap(),
            serde_json::json!("Video")
        );
    }

    #[test]
    fn resource_typeごとのアイコンが定義されている() {
        assert_eq!(ResourceType::Pdf.icon(), "📄");
        assert_eq!(ResourceType::Video.icon(), "🎥");
        assert_eq!(ResourceType::Infographic.icon(), "🖼️");
    }

    #[test]
    fn preview_urlがfile_urlを返す() {
        let catalog = ResourceCatalog::builtin();
        let resource = catalog.get(&ResourceId::new("health-guide")).unwrap();

        assert_eq!(resource.preview_url(), resource.file_url);
    }

    #[test]
    fn 組み込みカタログは3件を定義順で保持する() {
        let catalog = ResourceCatalog::builtin();

        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["health-guide", "exercise-video", "medical-guidelines"]
        );
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn getは存在しないidにnoneを返す() {
        let catalog = ResourceCatalog::builtin();

        assert!(catalog.get(&ResourceId::new("unknown")).is_none());
    }

    #[test]
    fn resolveは入力順に関わらずカタログ順で返す() {
        let catalog = ResourceCatalog::builtin();

        let resolved = catalog
            .resolve(&[
                ResourceId::new("medical-guidelines"),
                ResourceId::new("health-guide"),
            ])
            .unwrap();

        let ids: Vec<&str> = resolved.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["health-guide", "medical-guidelines"]);
    }

    #[test]
    fn resolveは重複idを1件に集約する() {
        let catalog = ResourceCatalog::builtin();

        let resolved = catalog
            .resolve(&[
                ResourceId::new("health-guide"),
                ResourceId::new("health-guide"),
            ])
            .unwrap();

        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn resolveは存在しないidでnot_foundを返す() {
        let catalog = ResourceCatalog::builtin();

        let error = catalog
            .resolve(&[ResourceId::new("health-guide"), ResourceId::new("unknown")])
            .unwrap_err();

        assert!(matches!(
            error,
            DomainError::NotFound { entity_type: "Resource", ref id } if id == "unknown"
        ));
    }

    #[test]
    fn resolveは空のidリストに空を返す() {
        let catalog = ResourceCatalog::builtin();

        assert!(catalog.resolve(&[]).unwrap().is_empty());
    }
}
