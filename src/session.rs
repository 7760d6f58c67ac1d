//! セッション永続化モジュール
//!
//! カタログ・店舗情報・注文台帳を固定名のスロット（session.json）に
//! 保存する。読み込み時に構造が壊れていたら黙ってスロットを消して
//! 「セッションなし」として扱う。破損はユーザーにエラーとして
//! 見せない。

use crate::error::Result;
use menu_ai_common::PersistedSnapshot;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const SESSION_FILE_NAME: &str = "session.json";

/// セッションスロットの読み書き
///
/// 書き込むのはこの型だけ（単一ライター）。ディレクトリは
/// テストから注入できるようにしてある。
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE_NAME)
    }

    /// セッションを読み込み
    ///
    /// - ファイルなし → None
    /// - JSON不正・必須フィールド欠落・menuItemsが空 → スロットを
    ///   削除して None（破損したスロットを残さない）
    pub fn load(&self) -> Option<PersistedSnapshot> {
        let path = self.path();
        if !path.exists() {
            return None;
        }

        let file = match File::open(&path) {
            Ok(f) => f,
            Err(_) => return None,
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, PersistedSnapshot>(reader) {
            Ok(snapshot) if !snapshot.menu_items.is_empty() => Some(snapshot),
            // saveは空カタログを書かないため、空のスロットは破損扱い
            _ => {
                self.discard_corrupt(&path);
                None
            }
        }
    }

    /// セッションを保存
    ///
    /// 空カタログは保存しない（遷移中に有効な前回セッションを
    /// 空で上書きしないため）。
    pub fn save(&self, snapshot: &PersistedSnapshot) -> Result<()> {
        if snapshot.menu_items.is_empty() {
            return Ok(());
        }

        std::fs::create_dir_all(&self.dir)?;
        let file = File::create(self.path())?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, snapshot)?;
        Ok(())
    }

    /// セッションを無条件に削除
    ///
    /// # Returns
    /// * `Ok(true)` - スロットが存在し削除した
    /// * `Ok(false)` - スロットが存在しなかった
    pub fn clear(&self) -> Result<bool> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn discard_corrupt(&self, path: &Path) {
        if std::fs::remove_file(path).is_err() {
            eprintln!("破損したセッションファイルを削除できません: {}", path.display());
        }
    }
}
