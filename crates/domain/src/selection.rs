//! # 資料選択
//!
//! ユーザーが現在選択している資料 ID の集合を管理する。
//!
//! ## 設計方針
//!
//! - **集合セマンティクス**: 同じ ID を重ねて選択しても 1 件として扱う
//! - **カタログ順の出力**: `current()` はカタログの定義順で資料を返す
//! - **単一ライター**: 呼び出し側は単一スレッドからのみ変更する前提であり、
//!   ロックは持たない

use crate::resource::{Resource, ResourceCatalog, ResourceId};

/// 資料選択状態
///
/// チェックボックスの ON/OFF に相当するインメモリの選択集合。
/// エラー条件はなく、存在しない ID の選択解除は何もしない。
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Vec<ResourceId>,
}

impl Selection {
    /// 空の選択状態を作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 資料を選択する
    ///
    /// すでに選択済みの場合は何もしない。
    pub fn select(&mut self, id: ResourceId) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    /// 資料の選択を解除する
    pub fn deselect(&mut self, id: &ResourceId) {
        self.selected.retain(|s| s != id);
    }

    /// 選択中の資料をカタログ順で返す
    pub fn current<'a>(&self, catalog: &'a ResourceCatalog) -> Vec<&'a Resource> {
        catalog
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .collect()
    }

    /// 選択が空かどうかを返す
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
