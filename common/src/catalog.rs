//! メニューカタログとセッション状態
//!
//! カタログはセッション中は不変で、再スキャンでのみ丸ごと
//! 置き換わる。注文台帳はカタログを識別子（originalName）で
//! 弱参照するため、置き換え時は必ず台帳をリセットする。

use crate::order::OrderLedger;
use crate::price;
use crate::types::{Dish, PersistedSnapshot, RestaurantInfo};
use std::collections::HashMap;

/// 解析済みメニューのカタログ
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    dishes: Vec<Dish>,
}

impl MenuCatalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    /// 識別子（originalName、大文字小文字区別）で料理を引く
    pub fn get(&self, original_name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.original_name == original_name)
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// カテゴリ別にグループ化
    ///
    /// カテゴリは初出順、グループ内は元の並び順を保つ。
    /// カテゴリ未設定は "Other" にまとめる。
    pub fn group_by_category(&self) -> Vec<(String, Vec<&Dish>)> {
        let mut groups: Vec<(String, Vec<&Dish>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for dish in &self.dishes {
            let label = dish.category_label().to_string();
            match index.get(&label) {
                Some(&i) => groups[i].1.push(dish),
                None => {
                    index.insert(label.clone(), groups.len());
                    groups.push((label, vec![dish]));
                }
            }
        }

        groups
    }

    /// カタログの通貨記号（最初に価格を持つ料理から取得）
    ///
    /// 価格付きの料理が1つもない場合は空文字列
    pub fn currency_symbol(&self) -> String {
        self.dishes
            .iter()
            .filter_map(|d| d.price.as_deref())
            .map(price::currency_symbol)
            .find(|s| !s.is_empty())
            .unwrap_or_default()
    }
}

/// セッション全体の状態（カタログ＋店舗情報＋注文台帳）
#[derive(Debug, Clone, Default)]
pub struct DiningState {
    pub catalog: MenuCatalog,
    pub restaurant: RestaurantInfo,
    pub ledger: OrderLedger,
}

impl DiningState {
    /// メニューを丸ごと置き換える
    ///
    /// 新カタログに同じ識別子が含まれていても、台帳は必ず空に戻す。
    /// 店名は解析結果から取得（空ならデフォルトのまま）。編集済みの
    /// 場所情報は再スキャンをまたいで維持する。
    pub fn replace_menu(&mut self, dishes: Vec<Dish>, restaurant_name: &str) {
        self.catalog = MenuCatalog::new(dishes);
        self.ledger.clear();
        if !restaurant_name.trim().is_empty() {
            self.restaurant.name = restaurant_name.trim().to_string();
        } else {
            self.restaurant.name = RestaurantInfo::default().name;
        }
    }

    /// 保存用スナップショットへ変換（台帳の順序を保持）
    pub fn to_snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            menu_items: self.catalog.dishes.clone(),
            restaurant_name: self.restaurant.name.clone(),
            restaurant_location: self.restaurant.location.clone(),
            order: self.ledger.entries().to_vec(),
        }
    }

    /// スナップショットから復元
    ///
    /// 台帳の孤児エントリ（カタログに無い識別子）もそのまま
    /// 復元する。表示側で除外される（order.rs参照）。
    pub fn from_snapshot(snapshot: PersistedSnapshot) -> Self {
        Self {
            catalog: MenuCatalog::new(snapshot.menu_items),
            restaurant: RestaurantInfo {
                name: snapshot.restaurant_name,
                location: snapshot.restaurant_location,
            },
            ledger: OrderLedger::from_entries(snapshot.order),
        }
    }
}
