//! 価格文字列の解析
//!
//! AIが返す価格は "¥880"、"€12.50"、"12,50 zł" のような自由形式の
//! 文字列。厳密なパースはせず、最初の数値らしき部分を取り出す
//! ベストエフォート方式（失敗時は0）。

use regex::Regex;

/// 価格文字列から金額を抽出
///
/// 最初に現れる「数字の連続＋小数点1つまで」を採用する。
/// 数値が見つからない場合は 0.0（ソフトフェイル）。
///
/// # Examples
/// ```
/// use menu_ai_common::price::extract_amount;
///
/// assert_eq!(extract_amount("¥880"), 880.0);
/// assert_eq!(extract_amount("€12.50"), 12.5);
/// assert_eq!(extract_amount("時価"), 0.0);
/// ```
pub fn extract_amount(price: &str) -> f64 {
    lazy_static::lazy_static! {
        // 数字列＋任意の小数部（"12.34.56" は "12.34" まで）
        static ref AMOUNT_RE: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
    }

    AMOUNT_RE
        .find(price)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// 価格文字列から通貨記号部分を抽出
///
/// 数字・ドット・空白を除いた残りを返す。"€12.50" → "€"。
/// カタログは単一通貨を仮定し、最初に価格を持つ料理の記号を
/// 全体に使う（混在通貨は既知の制限）。
pub fn currency_symbol(price: &str) -> String {
    price
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '.' && !c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_amount_plain() {
        assert_eq!(extract_amount("880"), 880.0);
        assert_eq!(extract_amount("¥880"), 880.0);
        assert_eq!(extract_amount("$9.99"), 9.99);
    }

    #[test]
    fn test_extract_amount_decimal() {
        assert_eq!(extract_amount("€12.50"), 12.5);
        assert_eq!(extract_amount("12.5 EUR"), 12.5);
    }

    #[test]
    fn test_extract_amount_first_run_only() {
        // 2つ目の小数点以降は無視
        assert_eq!(extract_amount("12.34.56"), 12.34);
        // 最初の数値連続のみ（カンマ区切りは分断される）
        assert_eq!(extract_amount("1,234.56"), 1.0);
    }

    #[test]
    fn test_extract_amount_embedded() {
        assert_eq!(extract_amount("お一人様 1500円"), 1500.0);
    }

    #[test]
    fn test_extract_amount_no_number() {
        assert_eq!(extract_amount("時価"), 0.0);
        assert_eq!(extract_amount(""), 0.0);
        assert_eq!(extract_amount("market price"), 0.0);
    }

    #[test]
    fn test_extract_amount_trailing_dot() {
        assert_eq!(extract_amount("12."), 12.0);
    }

    #[test]
    fn test_currency_symbol_prefix() {
        assert_eq!(currency_symbol("€12.50"), "€");
        assert_eq!(currency_symbol("¥880"), "¥");
        assert_eq!(currency_symbol("$ 9.99"), "$");
    }

    #[test]
    fn test_currency_symbol_suffix() {
        assert_eq!(currency_symbol("880円"), "円");
        assert_eq!(currency_symbol("12.5 EUR"), "EUR");
    }

    #[test]
    fn test_currency_symbol_none() {
        assert_eq!(currency_symbol("880"), "");
        assert_eq!(currency_symbol(""), "");
    }
}
