use clap::Parser;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use menu_ai_common::{BillSplit, DiningState, FilterState, TIP_PRESETS};
use menu_ai_rust::{ai, cli, config, error, session, view};

use cli::{Cli, Commands};
use config::Config;
use error::{MenuAiError, Result};
use session::SessionStore;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let store = SessionStore::new(Config::app_dir()?);

    match cli.command {
        Commands::Scan { image, lang } => {
            println!("📸 menu-ai - メニュー解析\n");

            let target_language = lang.unwrap_or_else(|| config.target_language.clone());

            // 1. AI解析（失敗時は既存セッションに触れない）
            println!("[1/2] メニューを読み取り中...（翻訳先: {}）", target_language);
            let spinner = start_spinner("AI解析中");
            let parsed = ai::parse_menu_image(
                cli.ai_provider,
                &image,
                &target_language,
                config.max_image_size,
                cli.verbose,
            )
            .await;
            spinner.finish_and_clear();

            let parsed = parsed?;
            println!("✔ {}品を検出\n", parsed.items.len());

            // 2. セッション置き換え（台帳は必ず空に戻る）
            println!("[2/2] セッションを保存中...");
            let mut state = match store.load() {
                Some(snapshot) => DiningState::from_snapshot(snapshot),
                None => DiningState::default(),
            };
            state.replace_menu(parsed.items, &parsed.restaurant_name);
            store.save(&state.to_snapshot())?;
            println!("✔ セッションを保存: {}\n", store.path().display());

            print!("{}", view::render_menu(&state, &FilterState::default()));
            println!("\n✅ 解析完了");
        }

        Commands::Menu {
            vegetarian,
            nut_allergy,
            no_pork,
            spicy,
        } => {
            let state = load_state(&store)?;
            let filters = FilterState {
                vegetarian_only: vegetarian,
                nut_allergy,
                no_pork,
                highlight_spicy: spicy,
            };
            print!("{}", view::render_menu(&state, &filters));
        }

        Commands::Add { dish, count } => {
            let mut state = load_state(&store)?;
            let identity = find_dish_identity(&state, &dish)?;

            let quantity = state.ledger.adjust(&identity, i64::from(count));
            store.save(&state.to_snapshot())?;
            println!("✔ {} x{}（計{}点）", identity, count, quantity);
        }

        Commands::Remove { dish, count } => {
            let mut state = load_state(&store)?;
            let identity = find_dish_identity(&state, &dish)?;

            let quantity = state.ledger.adjust(&identity, -i64::from(count));
            store.save(&state.to_snapshot())?;
            if quantity == 0 {
                println!("✔ {} を注文から外しました", identity);
            } else {
                println!("✔ {} 残り{}点", identity, quantity);
            }
        }

        Commands::Order => {
            let state = load_state(&store)?;
            print!("{}", view::render_order(&state));
        }

        Commands::Bill { amount, tip, party } => {
            let state = load_state(&store)?;

            // 基準金額は注文合計を初期値にするが、--amountで独立に上書き可能
            let bill_base = amount.unwrap_or_else(|| state.ledger.total_price(&state.catalog));
            let tip_percent = tip.unwrap_or(config.default_tip_percent);
            if cli.verbose && !TIP_PRESETS.contains(&tip_percent) {
                println!("  チップ率 {}%（プリセット外）", tip_percent);
            }

            let split = BillSplit::new(bill_base, tip_percent, party);
            let breakdown = split.breakdown();
            let symbol = state.catalog.currency_symbol();
            print!("{}", view::render_bill(&breakdown, split.party_count, &symbol));
        }

        Commands::Info { dish } => {
            let state = load_state(&store)?;
            let identity = find_dish_identity(&state, &dish)?;

            println!("🔍 「{}」を調べています...", identity);
            let spinner = start_spinner("情報検索中");
            let info =
                ai::search_dish_info(cli.ai_provider, &identity, &state.restaurant, cli.verbose)
                    .await;
            spinner.finish_and_clear();

            // 失敗してもカタログ・台帳には影響しない
            let info = info?;
            print!("{}", view::render_dish_info(&identity, &info));
        }

        Commands::Recommend { preferences } => {
            let state = load_state(&store)?;
            let preferences = preferences.unwrap_or_default();

            println!("✨ おすすめを考えています...");
            let spinner = start_spinner("AI提案中");
            let recs = ai::get_recommendations(
                cli.ai_provider,
                &state.catalog,
                &preferences,
                cli.verbose,
            )
            .await;
            spinner.finish_and_clear();

            let recs = recs?;
            print!("{}", view::render_recommendations(&recs));
        }

        Commands::Chat => {
            let state = load_state(&store)?;
            let mut chat = ai::WaiterChat::new(
                cli.ai_provider,
                &state.catalog,
                &state.restaurant,
                cli.verbose,
            );

            println!("💬 AIウェイターとチャット（空行またはqで終了）\n");

            loop {
                let text: String = Input::new()
                    .with_prompt("客")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| MenuAiError::Config(format!("入力エラー: {}", e)))?;

                let text = text.trim().to_string();
                if text.is_empty() || text == "q" || text == "quit" || text == "exit" {
                    break;
                }

                let spinner = start_spinner("考え中");
                let reply = chat.turn(&text).await;
                spinner.finish_and_clear();

                match reply {
                    Ok(reply) => println!("給仕: {}\n", reply),
                    // 失敗したターンは表示だけして会話は継続
                    Err(e) => println!("⚠ 応答を取得できませんでした（{}）。もう一度どうぞ。\n", e),
                }
            }

            println!("👋 ごゆっくりどうぞ（{}ターン）", chat.turn_count());
        }

        Commands::Restaurant { name, location } => {
            let mut state = load_state(&store)?;

            if let Some(name) = name {
                state.restaurant.name = name;
            }
            if let Some(location) = location {
                state.restaurant.location = location;
            }

            store.save(&state.to_snapshot())?;
            println!(
                "✔ 店舗情報: {}{}",
                state.restaurant.name,
                if state.restaurant.location.is_empty() {
                    String::new()
                } else {
                    format!("（{}）", state.restaurant.location)
                }
            );
        }

        Commands::Reset => {
            if store.clear()? {
                println!("✔ セッションを破棄しました。新しいメニューをスキャンしてください");
            } else {
                println!("セッションはありません");
            }
        }

        Commands::Config { set_language, show } => {
            let mut config = config;

            if let Some(language) = set_language {
                config.set_target_language(language)?;
                println!("✔ 翻訳先言語を設定しました");
            }

            if show {
                println!("設定:");
                println!("  翻訳先言語: {}", config.target_language);
                println!("  最大画像サイズ: {}px", config.max_image_size);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  チップ率デフォルト: {}%", config.default_tip_percent);
            }
        }
    }

    Ok(())
}

/// セッションを読み込む（無ければエラー）
fn load_state(store: &SessionStore) -> Result<DiningState> {
    store
        .load()
        .map(DiningState::from_snapshot)
        .ok_or(MenuAiError::NoSession)
}

/// 料理名から識別子を引く
///
/// 原語名の完全一致を優先し、次に翻訳名の完全一致。見つからなければ
/// エラー（状態は変更しない）。
fn find_dish_identity(state: &DiningState, name: &str) -> Result<String> {
    if let Some(dish) = state.catalog.get(name) {
        return Ok(dish.original_name.clone());
    }

    state
        .catalog
        .dishes()
        .iter()
        .find(|d| d.translated_name == name)
        .map(|d| d.original_name.clone())
        .ok_or_else(|| MenuAiError::DishNotFound(name.to_string()))
}

fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
