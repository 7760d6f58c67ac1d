//! 料理・セッションの型定義
//!
//! CLI各コマンドで共有される型:
//! - Dish: メニュー解析で得られる1品（originalNameが識別子）
//! - RestaurantInfo: 店舗情報（メニュー再スキャンとは独立に編集可能）
//! - PersistedSnapshot: セッションファイルに保存する形
//! - ParsedMenu / DishInfo / Recommendation: AIレスポンスの形

use serde::{Deserialize, Serialize};

/// 認識するタグ（AIにもこのリストから選ばせる）
pub const TAG_VEGETARIAN: &str = "Vegetarian";
pub const TAG_VEGAN: &str = "Vegan";
pub const TAG_SPICY: &str = "Spicy";
pub const TAG_CONTAINS_NUTS: &str = "Contains Nuts";
pub const TAG_CONTAINS_PORK: &str = "Contains Pork";
pub const TAG_CONTAINS_SEAFOOD: &str = "Contains Seafood";

pub const RECOGNIZED_TAGS: &[&str] = &[
    TAG_VEGETARIAN,
    TAG_VEGAN,
    TAG_SPICY,
    TAG_CONTAINS_NUTS,
    TAG_CONTAINS_PORK,
    TAG_CONTAINS_SEAFOOD,
];

/// カテゴリ未設定の料理の表示先
pub const DEFAULT_CATEGORY: &str = "Other";

/// メニュー1品
///
/// `original_name` が識別子（カタログ内で一意、大文字小文字を区別）。
/// 解析成功時に生成され、セッション中は不変。編集はサポートせず、
/// 再スキャンでカタログごと置き換える。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Dish {
    pub original_name: String,
    pub translated_name: String,
    pub description: String,
    pub translated_description: String,

    /// 価格（"€12.50" のような自由形式の文字列）
    pub price: Option<String>,

    /// カテゴリ（未設定は "Other" 扱い）
    pub category: Option<String>,

    /// タグ（RECOGNIZED_TAGS参照。自由テキストも許容）
    pub tags: Vec<String>,
}

impl Dish {
    /// 表示用カテゴリ（未設定は DEFAULT_CATEGORY）
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// タグを持っているか（完全一致）
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// 店舗情報
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantInfo {
    pub name: String,
    pub location: String,
}

impl Default for RestaurantInfo {
    fn default() -> Self {
        Self {
            name: "Unknown Restaurant".to_string(),
            location: String::new(),
        }
    }
}

/// セッションファイルに保存する形
///
/// `menu_items` と `order` は必須フィールド。欠けているファイルは
/// 破損として扱う（session.rs参照）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    pub menu_items: Vec<Dish>,

    #[serde(default)]
    pub restaurant_name: String,

    #[serde(default)]
    pub restaurant_location: String,

    /// (識別子, 数量) のペア列。台帳の挿入順を保持する
    pub order: Vec<(String, u32)>,
}

/// メニュー解析レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedMenu {
    pub restaurant_name: String,
    pub items: Vec<Dish>,
}

/// 料理情報の出典
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceRef {
    pub title: String,
    pub uri: String,
}

/// 料理情報の検索結果
///
/// 部分的な失敗でも使えるよう全フィールドがデフォルト可
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DishInfo {
    pub summary: String,
    pub sources: Vec<SourceRef>,
    pub image_url: Option<String>,
}

/// おすすめ1件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    pub dish_name: String,
    pub reason: String,
}
