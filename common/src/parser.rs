//! AIレスポンスパーサー
//!
//! AI CLIのレスポンスからJSONを抽出し、メニュー解析・料理情報・
//! おすすめの各結果をパースする

use crate::error::{Error, Result};
use crate::types::{DishInfo, ParsedMenu, Recommendation};

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクトまたは [...] 配列（先に現れた方）
/// 3. エラー
///
/// # Examples
/// ```
/// use menu_ai_common::extract_json;
///
/// let response = "結果: {\"items\": []} 以上です。";
/// let json = extract_json(response).unwrap();
/// assert!(json.starts_with('{'));
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} / [...] のうち先に始まる方を探す
    let obj_start = response.find('{');
    let arr_start = response.find('[');

    let (start, close) = match (obj_start, arr_start) {
        (Some(o), Some(a)) if o < a => (o, '}'),
        (Some(o), None) => (o, '}'),
        (_, Some(a)) => (a, ']'),
        (None, None) => return Err(Error::Parse("JSONが見つかりません".into())),
    };

    if let Some(end) = response.rfind(close) {
        if end >= start {
            return Ok(&response[start..=end]);
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// メニュー解析レスポンスをパース
///
/// 使える料理（originalNameが空でないもの）が1つもない場合は
/// エラー。部分的なカタログをインストールさせないため、ここで
/// 弾いておく。
pub fn parse_menu_response(response: &str) -> Result<ParsedMenu> {
    let json_str = extract_json(response)?;
    let mut menu: ParsedMenu = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("メニューJSONパースエラー: {}", e)))?;

    menu.items.retain(|d| !d.original_name.trim().is_empty());

    if menu.items.is_empty() {
        return Err(Error::Parse("メニューから料理を読み取れませんでした".into()));
    }

    Ok(menu)
}

/// 料理情報レスポンスをパース
///
/// フィールド欠落は許容する（全フィールドdefault）。
pub fn parse_dish_info(response: &str) -> Result<DishInfo> {
    let json_str = extract_json(response)?;
    serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("料理情報JSONパースエラー: {}", e)))
}

/// おすすめレスポンスをパース
///
/// 料理名が空のエントリは捨てる。残りが空ならエラー。
pub fn parse_recommendations(response: &str) -> Result<Vec<Recommendation>> {
    let json_str = extract_json(response)?;
    let mut recs: Vec<Recommendation> = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("おすすめJSONパースエラー: {}", e)))?;

    recs.retain(|r| !r.dish_name.trim().is_empty());

    if recs.is_empty() {
        return Err(Error::Parse("おすすめが取得できませんでした".into()));
    }

    Ok(recs)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // extract_json テスト
    // =============================================

    #[test]
    fn test_extract_json_with_block() {
        let response = r#"Here is the menu:
```json
{"restaurantName": "店", "items": []}
```
Some additional text."#;

        let json = extract_json(response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("restaurantName"));
    }

    #[test]
    fn test_extract_json_raw_object() {
        let response = r#"{"restaurantName": "店", "items": []}"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, response);
    }

    #[test]
    fn test_extract_json_raw_array() {
        let response = r#"結果です: [{"dishName": "Pho", "reason": "人気"}] 以上。"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"[{"dishName": "Pho", "reason": "人気"}]"#);
    }

    #[test]
    fn test_extract_json_object_before_array() {
        // オブジェクトが先に始まる場合は {...} を採用（内部の配列は含まれる）
        let response = r#"{"items": [1, 2]}"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, response);
    }

    #[test]
    fn test_extract_json_error() {
        let result = extract_json("No JSON here, just plain text.");
        assert!(result.is_err());
        if let Err(Error::Parse(msg)) = result {
            assert!(msg.contains("JSONが見つかりません"));
        } else {
            panic!("Expected Parse error");
        }
    }

    #[test]
    fn test_extract_json_empty_response() {
        assert!(extract_json("").is_err());
    }

    // =============================================
    // parse_menu_response テスト
    // =============================================

    #[test]
    fn test_parse_menu_response() {
        let response = r#"```json
{
  "restaurantName": "金龍飯店",
  "items": [
    {
      "originalName": "麻婆豆腐",
      "translatedName": "Mapo Tofu",
      "description": "豆腐とひき肉の辛味炒め",
      "price": "¥880",
      "category": "主菜",
      "tags": ["Spicy", "Contains Pork"]
    }
  ]
}
```"#;

        let menu = parse_menu_response(response).unwrap();
        assert_eq!(menu.restaurant_name, "金龍飯店");
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].original_name, "麻婆豆腐");
        assert_eq!(menu.items[0].price.as_deref(), Some("¥880"));
        assert_eq!(menu.items[0].tags, vec!["Spicy", "Contains Pork"]);
    }

    #[test]
    fn test_parse_menu_response_without_restaurant_name() {
        let response = r#"{"items": [{"originalName": "Pho"}]}"#;

        let menu = parse_menu_response(response).unwrap();
        assert_eq!(menu.restaurant_name, ""); // デフォルト値
        assert_eq!(menu.items.len(), 1);
    }

    #[test]
    fn test_parse_menu_response_empty_items() {
        let response = r#"{"restaurantName": "店", "items": []}"#;
        assert!(parse_menu_response(response).is_err());
    }

    #[test]
    fn test_parse_menu_response_filters_unusable_items() {
        // originalNameが空の項目は使えないので除外
        let response = r#"{"items": [{"originalName": "  "}, {"originalName": "Pho"}]}"#;

        let menu = parse_menu_response(response).unwrap();
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].original_name, "Pho");
    }

    #[test]
    fn test_parse_menu_response_all_unusable() {
        let response = r#"{"items": [{"translatedName": "No name"}]}"#;
        assert!(parse_menu_response(response).is_err());
    }

    #[test]
    fn test_parse_menu_response_no_json() {
        assert!(parse_menu_response("すみません、読み取れませんでした。").is_err());
    }

    // =============================================
    // parse_dish_info テスト
    // =============================================

    #[test]
    fn test_parse_dish_info() {
        let response = r#"```json
{
  "summary": "四川料理の定番。",
  "sources": [{"title": "Wikipedia", "uri": "https://example.com/mapo"}],
  "imageUrl": "https://example.com/mapo.jpg"
}
```"#;

        let info = parse_dish_info(response).unwrap();
        assert_eq!(info.summary, "四川料理の定番。");
        assert_eq!(info.sources.len(), 1);
        assert_eq!(info.sources[0].title, "Wikipedia");
        assert_eq!(info.image_url.as_deref(), Some("https://example.com/mapo.jpg"));
    }

    #[test]
    fn test_parse_dish_info_partial() {
        // フィールド欠落は許容（部分的な失敗に備える）
        let response = r#"{"summary": "説明のみ"}"#;

        let info = parse_dish_info(response).unwrap();
        assert_eq!(info.summary, "説明のみ");
        assert!(info.sources.is_empty());
        assert_eq!(info.image_url, None);
    }

    // =============================================
    // parse_recommendations テスト
    // =============================================

    #[test]
    fn test_parse_recommendations() {
        let response = r#"```json
[
  {"dishName": "麻婆豆腐", "reason": "辛いもの好きに"},
  {"dishName": "小籠包", "reason": "この店の看板"},
  {"dishName": "青菜炒め", "reason": "さっぱり枠"}
]
```"#;

        let recs = parse_recommendations(response).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].dish_name, "麻婆豆腐");
        assert_eq!(recs[2].reason, "さっぱり枠");
    }

    #[test]
    fn test_parse_recommendations_empty() {
        assert!(parse_recommendations("[]").is_err());
    }

    #[test]
    fn test_parse_recommendations_drops_nameless() {
        let response = r#"[{"dishName": "", "reason": "x"}, {"dishName": "Pho", "reason": "y"}]"#;
        let recs = parse_recommendations(response).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].dish_name, "Pho");
    }
}
