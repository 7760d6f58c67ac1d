//! 食事制限フィルタ
//!
//! 4つの独立したトグルと料理のタグ集合から、表示上の扱い
//! （減光・警告・ハイライト）を決める。データ自体は変更しない。

use crate::types::{
    Dish, TAG_CONTAINS_NUTS, TAG_CONTAINS_PORK, TAG_SPICY, TAG_VEGAN, TAG_VEGETARIAN,
};

/// フィルタトグル（UI状態、永続化しない）
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterState {
    pub vegetarian_only: bool,
    pub nut_allergy: bool,
    pub no_pork: bool,
    pub highlight_spicy: bool,
}

impl FilterState {
    pub fn any_active(&self) -> bool {
        self.vegetarian_only || self.nut_allergy || self.no_pork || self.highlight_spicy
    }
}

/// 警告の種類（両方該当する場合はナッツを優先して1つだけ表示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietWarning {
    Nuts,
    Pork,
}

/// 1品に対する表示判定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DishVerdict {
    /// ベジタリアンフィルタ有効時、非ベジ料理を減光
    pub dimmed: bool,
    /// アレルゲン等の警告（ナッツ優先）
    pub warning: Option<DietWarning>,
    /// 辛い料理のハイライト
    pub spicy_highlight: bool,
}

impl DishVerdict {
    pub fn is_unsafe(&self) -> bool {
        self.warning.is_some()
    }
}

/// 料理がベジタリアン扱いか（Vegetarian または Vegan タグ）
pub fn is_vegetarian(dish: &Dish) -> bool {
    dish.has_tag(TAG_VEGETARIAN) || dish.has_tag(TAG_VEGAN)
}

/// 料理とフィルタ状態から表示判定を計算
pub fn evaluate(dish: &Dish, state: &FilterState) -> DishVerdict {
    let dimmed = state.vegetarian_only && !is_vegetarian(dish);

    let nut_warning = state.nut_allergy && dish.has_tag(TAG_CONTAINS_NUTS);
    let pork_warning = state.no_pork && dish.has_tag(TAG_CONTAINS_PORK);
    let warning = if nut_warning {
        Some(DietWarning::Nuts)
    } else if pork_warning {
        Some(DietWarning::Pork)
    } else {
        None
    };

    let spicy_highlight = state.highlight_spicy && dish.has_tag(TAG_SPICY);

    DishVerdict {
        dimmed,
        warning,
        spicy_highlight,
    }
}
