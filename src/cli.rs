use crate::ai_provider::AiProvider;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menu-ai")]
#[command(about = "メニュー写真AI翻訳・注文アシスタント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AIプロバイダ (claude/codex/gemini)
    #[arg(long, default_value = "claude", global = true)]
    pub ai_provider: AiProvider,
}

#[derive(Subcommand)]
pub enum Commands {
    /// メニュー写真を解析してセッションを開始
    Scan {
        /// メニュー写真のパス
        #[arg(required = true)]
        image: PathBuf,

        /// 翻訳先の言語（デフォルト: 設定ファイルの値）
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// メニューを表示（フィルタ付き）
    Menu {
        /// ベジタリアン料理以外を減光表示
        #[arg(long)]
        vegetarian: bool,

        /// ナッツを含む料理に警告
        #[arg(long)]
        nut_allergy: bool,

        /// 豚肉を含む料理に警告
        #[arg(long)]
        no_pork: bool,

        /// 辛い料理をハイライト
        #[arg(long)]
        spicy: bool,
    },

    /// 料理を注文に追加
    Add {
        /// 料理名（原語名または翻訳名）
        #[arg(required = true)]
        dish: String,

        /// 個数
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,
    },

    /// 注文から料理を減らす
    Remove {
        /// 料理名（原語名または翻訳名）
        #[arg(required = true)]
        dish: String,

        /// 個数
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,
    },

    /// 注文内容と概算合計を表示
    Order,

    /// 割り勘計算
    Bill {
        /// 基準金額（デフォルト: 注文の概算合計）
        #[arg(short, long)]
        amount: Option<f64>,

        /// チップ率（%。プリセット: 0/15/18/20、自由入力可）
        #[arg(short, long)]
        tip: Option<f64>,

        /// 人数（1未満は1に切り上げ）
        #[arg(short, long, default_value = "1")]
        party: u32,
    },

    /// 料理の詳細情報をAIに問い合わせ
    Info {
        /// 料理名（原語名または翻訳名）
        #[arg(required = true)]
        dish: String,
    },

    /// おすすめ料理を3つ提案
    Recommend {
        /// 好みの自由記述（例: "辛いものが好き"）
        #[arg(short, long)]
        preferences: Option<String>,
    },

    /// AIウェイターとチャット
    Chat,

    /// 店舗情報を編集
    Restaurant {
        /// 店名
        #[arg(long)]
        name: Option<String>,

        /// 場所
        #[arg(long)]
        location: Option<String>,
    },

    /// セッションを破棄して新規スキャンに備える
    Reset,

    /// 設定の表示・変更
    Config {
        /// 翻訳先言語を設定
        #[arg(long)]
        set_language: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
