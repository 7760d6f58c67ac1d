use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("AI呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("AIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("メニューから料理を読み取れませんでした: {0}")]
    MenuParse(String),

    #[error("料理が見つかりません: {0}")]
    DishNotFound(String),

    #[error("セッションがありません。先に `menu-ai scan <画像>` を実行してください")]
    NoSession,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] menu_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, MenuAiError>;
