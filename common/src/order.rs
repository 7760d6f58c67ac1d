//! 注文台帳
//!
//! 識別子（originalName）→ 正の数量のマッピング。挿入順を保持する。
//! 数量0以下のエントリは保持せず削除する。カタログへの参照は
//! 識別子のみ（弱参照）: カタログ置き換え後に残った孤児エントリは
//! 表示・金額計算から除外するが、エラーにはしない。

use crate::catalog::MenuCatalog;
use crate::price;
use crate::types::Dish;

/// 注文台帳（挿入順を保持）
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    entries: Vec<(String, u32)>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存データから復元（孤児エントリもそのまま受け入れる）
    pub fn from_entries(entries: Vec<(String, u32)>) -> Self {
        // 数量0は保存形には現れないはずだが、念のため除去して不変条件を守る
        let entries = entries.into_iter().filter(|(_, q)| *q > 0).collect();
        Self { entries }
    }

    /// 数量を増減する
    ///
    /// 現在値（未登録は0）に delta を加え、0未満は0に切り上げる。
    /// 結果が0ならエントリを削除、正なら既存位置のまま更新する
    /// （新規は末尾に追加）。読み取り→加算→書き込みを1回の同期
    /// 遷移で行うため、途中にサスペンションポイントはない。
    pub fn adjust(&mut self, identity: &str, delta: i64) -> u32 {
        let pos = self.entries.iter().position(|(id, _)| id == identity);
        let current = pos.map(|i| self.entries[i].1).unwrap_or(0);
        let next = (current as i64 + delta).max(0) as u32;

        match (pos, next) {
            (Some(i), 0) => {
                self.entries.remove(i);
            }
            (Some(i), q) => self.entries[i].1 = q,
            (None, 0) => {}
            (None, q) => self.entries.push((identity.to_string(), q)),
        }

        next
    }

    /// 指定識別子の現在数量（未登録は0）
    pub fn quantity(&self, identity: &str) -> u32 {
        self.entries
            .iter()
            .find(|(id, _)| id == identity)
            .map(|(_, q)| *q)
            .unwrap_or(0)
    }

    /// 総数量（孤児エントリも含む）
    pub fn total_count(&self) -> u32 {
        self.entries.iter().map(|(_, q)| q).sum()
    }

    /// 概算合計金額
    ///
    /// 各エントリをカタログで解決し、料理が見つからない・価格が無い
    /// ものはスキップ。価格文字列の数値抽出はベストエフォート
    /// （price.rs参照、数値なしは0円扱い）。
    pub fn total_price(&self, catalog: &MenuCatalog) -> f64 {
        self.entries
            .iter()
            .filter_map(|(id, qty)| {
                let dish = catalog.get(id)?;
                let price = dish.price.as_deref()?;
                Some(price::extract_amount(price) * f64::from(*qty))
            })
            .sum()
    }

    /// 表示用の (料理, 数量) 列
    ///
    /// 台帳の挿入順。カタログで解決できない孤児は除外。
    /// キャッシュせず呼び出しごとに再計算する。
    pub fn display_list<'a>(
        &'a self,
        catalog: &'a MenuCatalog,
    ) -> impl Iterator<Item = (&'a Dish, u32)> + 'a {
        self.entries
            .iter()
            .filter_map(|(id, qty)| catalog.get(id).map(|dish| (dish, *qty)))
    }

    /// 台帳を空にする（カタログ置き換え時に呼ばれる）
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced_dish(name: &str, price: Option<&str>) -> Dish {
        Dish {
            original_name: name.to_string(),
            price: price.map(|p| p.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_adjust_add_and_remove() {
        let mut ledger = OrderLedger::new();

        assert_eq!(ledger.adjust("Ramen", 1), 1);
        assert_eq!(ledger.adjust("Ramen", 2), 3);
        assert_eq!(ledger.quantity("Ramen"), 3);

        assert_eq!(ledger.adjust("Ramen", -3), 0);
        // 数量0はエントリごと消える
        assert!(ledger.is_empty());
        assert_eq!(ledger.quantity("Ramen"), 0);
    }

    #[test]
    fn test_adjust_clamps_at_zero() {
        let mut ledger = OrderLedger::new();
        ledger.adjust("Gyoza", 2);

        // 大きな負のdeltaでも0で止まる
        assert_eq!(ledger.adjust("Gyoza", -100), 0);
        assert!(ledger.is_empty());

        // 未登録への負のdeltaは何も起きない
        assert_eq!(ledger.adjust("Gyoza", -1), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_adjust_delta_sum_property() {
        // 任意のdelta列で最終数量は max(0, 途中経過のクランプ付き合計) になる
        let mut ledger = OrderLedger::new();
        let deltas: [i64; 6] = [3, -1, -5, 2, 4, -1];
        for d in deltas {
            ledger.adjust("X", d);
        }
        // 3 → 2 → 0 → 2 → 6 → 5
        assert_eq!(ledger.quantity("X"), 5);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut ledger = OrderLedger::new();
        ledger.adjust("B", 1);
        ledger.adjust("A", 1);
        ledger.adjust("C", 1);
        ledger.adjust("A", 1); // 既存位置のまま更新

        let ids: Vec<&str> = ledger.entries().iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_total_count() {
        let mut ledger = OrderLedger::new();
        assert_eq!(ledger.total_count(), 0);

        ledger.adjust("A", 2);
        ledger.adjust("B", 3);
        assert_eq!(ledger.total_count(), 5);

        // 全エントリの最後の1個を取り除くと0に戻る
        ledger.adjust("A", -2);
        ledger.adjust("B", -3);
        assert_eq!(ledger.total_count(), 0);
    }

    #[test]
    fn test_total_price() {
        let catalog = MenuCatalog::new(vec![
            priced_dish("A", Some("¥880")),
            priced_dish("B", Some("¥1200")),
            priced_dish("C", None),
        ]);

        let mut ledger = OrderLedger::new();
        ledger.adjust("A", 2);
        ledger.adjust("B", 1);
        ledger.adjust("C", 3); // 価格なし → スキップ

        assert_eq!(ledger.total_price(&catalog), 880.0 * 2.0 + 1200.0);
    }

    #[test]
    fn test_total_price_unparseable_price() {
        let catalog = MenuCatalog::new(vec![priced_dish("A", Some("時価"))]);
        let mut ledger = OrderLedger::new();
        ledger.adjust("A", 2);

        // 数値が取れない価格は0円として扱う
        assert_eq!(ledger.total_price(&catalog), 0.0);
    }

    #[test]
    fn test_orphan_excluded_from_price_and_display_but_counted() {
        let catalog = MenuCatalog::new(vec![priced_dish("A", Some("500"))]);
        let mut ledger = OrderLedger::new();
        ledger.adjust("A", 1);
        ledger.adjust("消えた料理", 2);

        // 孤児は表示から除外
        let shown: Vec<&str> = ledger
            .display_list(&catalog)
            .map(|(d, _)| d.original_name.as_str())
            .collect();
        assert_eq!(shown, vec!["A"]);

        // 金額計算からも除外
        assert_eq!(ledger.total_price(&catalog), 500.0);

        // ただし総数には数える
        assert_eq!(ledger.total_count(), 3);
    }

    #[test]
    fn test_display_list_reflects_current_state() {
        let catalog = MenuCatalog::new(vec![priced_dish("A", None)]);
        let mut ledger = OrderLedger::new();
        ledger.adjust("A", 1);
        assert_eq!(ledger.display_list(&catalog).count(), 1);

        ledger.adjust("A", -1);
        // キャッシュされないので常に現在の状態を反映
        assert_eq!(ledger.display_list(&catalog).count(), 0);
    }

    #[test]
    fn test_from_entries_drops_zero_quantities() {
        let ledger = OrderLedger::from_entries(vec![
            ("A".to_string(), 2),
            ("B".to_string(), 0),
        ]);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.quantity("A"), 2);
    }

    #[test]
    fn test_clear() {
        let mut ledger = OrderLedger::new();
        ledger.adjust("A", 5);
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_count(), 0);
    }
}
