//! プロンプト生成モジュール
//!
//! AI CLIに渡すプロンプトの生成ロジック:
//! - build_menu_prompt: メニュー写真の読み取り・翻訳用
//! - build_dish_info_prompt / build_dish_image_prompt: 料理情報検索用
//! - build_recommend_prompt: おすすめ提案用
//! - build_waiter_prompt: ウェイターチャット用

use crate::catalog::MenuCatalog;
use crate::types::{RestaurantInfo, RECOGNIZED_TAGS};

/// メニュー解析プロンプト生成
///
/// # Arguments
/// * `target_language` - 翻訳先の言語（例: "日本語"）
pub fn build_menu_prompt(target_language: &str) -> String {
    let tags = RECOGNIZED_TAGS.join(", ");

    format!(
        r#"あなたはレストランメニューの翻訳者です。写真からメニューを読み取り、各料理を{target_language}に翻訳してください。

## タグ
該当するものだけを以下から選択（自由記述は不可）:
{tags}

## 出力形式（厳密にこのJSON形式で出力）
{{
  "restaurantName": "店名（読み取れた場合のみ）",
  "items": [
    {{
      "originalName": "原語の料理名（識別子になるため原文のまま）",
      "translatedName": "{target_language}の料理名",
      "description": "原語の説明（あれば）",
      "translatedDescription": "{target_language}の説明",
      "price": "価格表記そのまま（通貨記号含む。無ければnull）",
      "category": "メニュー上の分類（前菜・主菜など。無ければnull）",
      "tags": ["該当タグ"]
    }}
  ]
}}

読み取れない料理は含めないこと。価格や説明を創作しないこと。"#
    )
}

/// 料理情報（テキスト検索）プロンプト生成
pub fn build_dish_info_prompt(
    dish_name: &str,
    restaurant: &RestaurantInfo,
) -> String {
    let place = if restaurant.location.trim().is_empty() {
        restaurant.name.clone()
    } else {
        format!("{}（{}）", restaurant.name, restaurant.location)
    };

    format!(
        r#"料理「{dish_name}」について調べてください。提供店舗: {place}

## 出力形式（厳密にこのJSON形式で出力）
{{
  "summary": "料理の由来・味・食べ方の簡潔な説明",
  "sources": [{{"title": "出典名", "uri": "URL"}}]
}}

確かな情報が無いフィールドは空にすること。"#
    )
}

/// 料理画像URL検索プロンプト生成
///
/// 情報検索とは独立に呼び、片方が失敗しても他方の結果は使う
pub fn build_dish_image_prompt(dish_name: &str) -> String {
    format!(
        r#"料理「{dish_name}」の代表的な実物写真のURLを1つ探してください。

## 出力形式（厳密にこのJSON形式で出力）
{{"imageUrl": "URL（見つからなければnull）"}}"#
    )
}

/// おすすめ提案プロンプト生成
///
/// # Arguments
/// * `preferences` - ユーザーの好み（自由記述、空可）
pub fn build_recommend_prompt(catalog: &MenuCatalog, preferences: &str) -> String {
    let menu_list = catalog
        .dishes()
        .iter()
        .map(|d| {
            let tags = if d.tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", d.tags.join(", "))
            };
            format!("- {} ({}){}", d.original_name, d.translated_name, tags)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let prefs = if preferences.trim().is_empty() {
        "特になし".to_string()
    } else {
        preferences.trim().to_string()
    };

    format!(
        r#"以下のメニューから、客の好みに合う料理をちょうど3つ選んでください。

## メニュー
{menu_list}

## 客の好み
{prefs}

## 出力形式（厳密にこのJSON配列形式で出力、dishNameはメニューのoriginalNameをそのまま使う）
[
  {{"dishName": "料理名", "reason": "すすめる理由（1文）"}}
]"#
    )
}

/// ウェイターチャットのシステムプロンプト生成
pub fn build_waiter_prompt(catalog: &MenuCatalog, restaurant: &RestaurantInfo) -> String {
    let menu_list = catalog
        .dishes()
        .iter()
        .map(|d| {
            let price = d.price.as_deref().unwrap_or("価格不明");
            format!("- {} ({}) {}", d.original_name, d.translated_name, price)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"あなたは「{name}」の給仕係です。以下のメニューの内容にのみ基づいて、料理に関する客の質問に簡潔かつ丁寧に答えてください。メニューに無い料理は「置いていない」と答えること。

## メニュー
{menu_list}"#,
        name = restaurant.name,
    )
}
