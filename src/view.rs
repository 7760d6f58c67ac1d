//! テキスト表示の整形
//!
//! 金額の2桁丸めはここでのみ行う（計算側は丸めない）。

use menu_ai_common::{
    bill::BillBreakdown, evaluate, DietWarning, DiningState, DishInfo, FilterState, Recommendation,
};

/// フィルタ適用済みメニュー一覧を整形
pub fn render_menu(state: &DiningState, filters: &FilterState) -> String {
    let symbol = state.catalog.currency_symbol();
    let mut out = String::new();

    out.push_str(&format!(
        "🏮 {}{}\n",
        state.restaurant.name,
        if state.restaurant.location.is_empty() {
            String::new()
        } else {
            format!("（{}）", state.restaurant.location)
        }
    ));

    for (category, dishes) in state.catalog.group_by_category() {
        out.push_str(&format!("\n== {} ==\n", category));

        for dish in dishes {
            let verdict = evaluate(dish, filters);

            let marker = match verdict.warning {
                Some(DietWarning::Nuts) => "⚠ナッツ ",
                Some(DietWarning::Pork) => "⚠豚肉 ",
                None if verdict.spicy_highlight => "🌶 ",
                None => "",
            };

            let price = dish
                .price
                .as_deref()
                .map(|p| format!("  {}", p))
                .unwrap_or_default();

            let quantity = state.ledger.quantity(&dish.original_name);
            let ordered = if quantity > 0 {
                format!("  [注文 x{}]", quantity)
            } else {
                String::new()
            };

            let line = format!(
                "{}{} — {}{}{}",
                marker, dish.original_name, dish.translated_name, price, ordered
            );

            if verdict.dimmed {
                out.push_str(&format!("  · {}（対象外）\n", line));
            } else {
                out.push_str(&format!("  {}\n", line));
            }
        }
    }

    if !symbol.is_empty() && state.ledger.total_count() > 0 {
        out.push_str(&format!(
            "\n注文中: {}点  概算 {}{:.2}\n",
            state.ledger.total_count(),
            symbol,
            state.ledger.total_price(&state.catalog)
        ));
    }

    out
}

/// 注文サマリを整形
pub fn render_order(state: &DiningState) -> String {
    if state.ledger.is_empty() {
        return "注文はまだありません\n".to_string();
    }

    let symbol = state.catalog.currency_symbol();
    let mut out = String::new();

    out.push_str(&format!(
        "🧾 注文内容（{}）\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));

    for (dish, quantity) in state.ledger.display_list(&state.catalog) {
        let price = dish.price.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "  {} x{}  {}  ({})\n",
            dish.original_name, quantity, price, dish.translated_name
        ));
    }

    out.push_str(&format!(
        "---\n合計 {}点  概算 {}{:.2}\n",
        state.ledger.total_count(),
        symbol,
        state.ledger.total_price(&state.catalog)
    ));

    out
}

/// 割り勘の内訳を整形
pub fn render_bill(breakdown: &BillBreakdown, party_count: u32, symbol: &str) -> String {
    format!(
        "💴 割り勘（{}人）\n  チップ: {sym}{:.2}\n  総額: {sym}{:.2}\n  1人あたり: {sym}{:.2}（食事 {sym}{:.2} + チップ {sym}{:.2}）\n",
        party_count.max(1),
        breakdown.tip_amount,
        breakdown.grand_total,
        breakdown.per_person_total,
        breakdown.per_person_bill_share,
        breakdown.per_person_tip_share,
        sym = symbol,
    )
}

/// 料理情報を整形
pub fn render_dish_info(dish_name: &str, info: &DishInfo) -> String {
    let mut out = format!("🍜 {}\n", dish_name);

    if info.summary.is_empty() {
        out.push_str("  （説明は見つかりませんでした）\n");
    } else {
        out.push_str(&format!("  {}\n", info.summary));
    }

    if let Some(url) = &info.image_url {
        out.push_str(&format!("  写真: {}\n", url));
    }

    for source in &info.sources {
        out.push_str(&format!("  出典: {} {}\n", source.title, source.uri));
    }

    out
}

/// おすすめ一覧を整形
pub fn render_recommendations(recs: &[Recommendation]) -> String {
    let mut out = String::from("✨ おすすめ\n");
    for (i, rec) in recs.iter().enumerate() {
        out.push_str(&format!("  {}. {} — {}\n", i + 1, rec.dish_name, rec.reason));
    }
    out
}
