//! AI CLI連携モジュール
//!
//! メニュー解析・料理情報検索・おすすめ提案をAI CLI
//! （claude/codex/gemini）のサブプロセス呼び出しで行う。
//! プロンプト生成とレスポンスのパースは menu_ai_common を使用

use crate::ai_provider::AiProvider;
use crate::error::{MenuAiError, Result};
use menu_ai_common::{
    parse_dish_info, parse_menu_response, parse_recommendations, prompts, DishInfo, MenuCatalog,
    ParsedMenu, Recommendation, RestaurantInfo,
};
use std::path::{Path, PathBuf};
use std::process::Command;

/// メニュー写真を解析
///
/// 画像を検証・縮小してからAIに渡す。使える料理が1つも取れなければ
/// エラー（部分的なカタログはインストールしない）。
pub async fn parse_menu_image(
    provider: AiProvider,
    image: &Path,
    target_language: &str,
    max_image_size: u32,
    verbose: bool,
) -> Result<ParsedMenu> {
    let local_path = prepare_image(image, max_image_size)?;

    let menu_prompt = prompts::build_menu_prompt(target_language);
    let raw_prompt = format!(
        "Read the following image file and analyze it: {}\n\n{}",
        local_path.display().to_string().replace('\\', "/"),
        menu_prompt
    );
    let full_prompt = flatten_prompt(&raw_prompt);

    if verbose {
        println!("  [scan] プロンプト長: {} chars", full_prompt.len());
    }

    let response = run_ai_cli(provider, &full_prompt, verbose)?;

    if verbose {
        println!("  [scan] レスポンス長: {} chars", response.len());
    }

    parse_menu_response(&response).map_err(|e| MenuAiError::MenuParse(e.to_string()))
}

/// 料理情報を検索
///
/// テキスト検索と画像検索を独立に呼び、片方が失敗しても他方の
/// 結果で補う。両方失敗した場合のみエラー。カタログ・台帳には
/// 一切触れない。
pub async fn search_dish_info(
    provider: AiProvider,
    dish_name: &str,
    restaurant: &RestaurantInfo,
    verbose: bool,
) -> Result<DishInfo> {
    let info_prompt = flatten_prompt(&prompts::build_dish_info_prompt(dish_name, restaurant));
    let image_prompt = flatten_prompt(&prompts::build_dish_image_prompt(dish_name));

    let summary_result = run_ai_cli(provider, &info_prompt, verbose)
        .and_then(|r| parse_dish_info(&r).map_err(|e| MenuAiError::ApiParse(e.to_string())));

    let image_result = run_ai_cli(provider, &image_prompt, verbose)
        .and_then(|r| parse_dish_info(&r).map_err(|e| MenuAiError::ApiParse(e.to_string())));

    match (summary_result, image_result) {
        (Err(summary_err), Err(image_err)) => {
            if verbose {
                println!("  [info] 画像検索も失敗: {}", image_err);
            }
            Err(summary_err)
        }
        (summary, image) => {
            // 取れた方だけで組み立てる
            let mut info = summary.unwrap_or_default();
            if info.image_url.is_none() {
                info.image_url = image.ok().and_then(|i| i.image_url);
            }
            Ok(info)
        }
    }
}

/// おすすめ料理を取得
pub async fn get_recommendations(
    provider: AiProvider,
    catalog: &MenuCatalog,
    preferences: &str,
    verbose: bool,
) -> Result<Vec<Recommendation>> {
    let prompt = flatten_prompt(&prompts::build_recommend_prompt(catalog, preferences));

    if verbose {
        println!("  [recommend] プロンプト長: {} chars", prompt.len());
    }

    let response = run_ai_cli(provider, &prompt, verbose)?;

    parse_recommendations(&response).map_err(|e| MenuAiError::ApiParse(e.to_string()))
}

/// 画像を検証し、必要なら縮小してtempにコピー
///
/// 長辺が max_size を超える場合のみ縮小版を作る
fn prepare_image(path: &Path, max_size: u32) -> Result<PathBuf> {
    if !path.exists() {
        return Err(MenuAiError::FileNotFound(path.display().to_string()));
    }

    let img = image::open(path)
        .map_err(|e| MenuAiError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    if img.width() <= max_size && img.height() <= max_size {
        let abs = std::fs::canonicalize(path)?;
        return Ok(abs);
    }

    let temp_dir = std::env::temp_dir().join("menu-ai");
    std::fs::create_dir_all(&temp_dir)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "menu.jpg".to_string());
    let dest = temp_dir.join(file_name);

    let resized = img.thumbnail(max_size, max_size);
    resized
        .save(&dest)
        .map_err(|e| MenuAiError::ImageLoad(format!("縮小画像の保存失敗: {}", e)))?;

    Ok(std::fs::canonicalize(dest)?)
}

/// プロンプトをCLI引数用に整形（改行をスペースに置換）
fn flatten_prompt(raw: &str) -> String {
    raw.replace('\n', " ").replace('"', "\\\"")
}

pub(super) fn run_ai_cli(provider: AiProvider, prompt: &str, verbose: bool) -> Result<String> {
    let command = provider.command_name();

    // AI CLI呼び出し（Windowsではcmd /c経由）
    #[cfg(windows)]
    let output = Command::new("cmd")
        .args(["/c", command, "-p", prompt, "--output-format", "text"])
        .output()
        .map_err(|e| MenuAiError::ApiCall(format!("{} CLI実行エラー: {}", command, e)))?;

    #[cfg(not(windows))]
    let output = Command::new(command)
        .args(["-p", prompt, "--output-format", "text"])
        .output()
        .map_err(|e| MenuAiError::ApiCall(format!("{} CLI実行エラー: {}", command, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MenuAiError::ApiCall(format!(
            "{} CLI failed (code {:?}): {}",
            command,
            output.status.code(),
            stderr
        )));
    }

    let response = String::from_utf8_lossy(&output.stdout).to_string();

    if verbose {
        let preview: String = response.chars().take(500).collect();
        println!("  レスポンス: {}", preview);
    }

    Ok(response)
}
