//! AIウェイターチャット
//!
//! カタログを踏まえたシステムプロンプトと会話履歴を保持する
//! ステートフルなセッション。失敗したターンは履歴に残さず、
//! セッション自体は継続する。

use super::cli_client::run_ai_cli;
use crate::ai_provider::AiProvider;
use crate::error::Result;
use menu_ai_common::{prompts, MenuCatalog, RestaurantInfo};

/// 会話の1ターン
#[derive(Debug, Clone)]
struct ChatTurn {
    user: String,
    assistant: String,
}

pub struct WaiterChat {
    provider: AiProvider,
    system_prompt: String,
    transcript: Vec<ChatTurn>,
    verbose: bool,
}

impl WaiterChat {
    pub fn new(
        provider: AiProvider,
        catalog: &MenuCatalog,
        restaurant: &RestaurantInfo,
        verbose: bool,
    ) -> Self {
        Self {
            provider,
            system_prompt: prompts::build_waiter_prompt(catalog, restaurant),
            transcript: Vec::new(),
            verbose,
        }
    }

    /// 1ターン送信
    ///
    /// 成功時のみ履歴に追加する。失敗は呼び出し元がメッセージとして
    /// 表示し、次のターンは普通に続けられる。
    pub async fn turn(&mut self, text: &str) -> Result<String> {
        let prompt = self.build_prompt(text);

        if self.verbose {
            println!("  [chat] プロンプト長: {} chars", prompt.len());
        }

        let reply = run_ai_cli(self.provider, &prompt, self.verbose)?;
        let reply = reply.trim().to_string();

        self.transcript.push(ChatTurn {
            user: text.to_string(),
            assistant: reply.clone(),
        });

        Ok(reply)
    }

    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    fn build_prompt(&self, text: &str) -> String {
        let mut sections = vec![self.system_prompt.clone()];

        if !self.transcript.is_empty() {
            let history = self
                .transcript
                .iter()
                .map(|t| format!("客: {}\n給仕: {}", t.user, t.assistant))
                .collect::<Vec<_>>()
                .join("\n");
            sections.push(format!("## これまでの会話\n{}", history));
        }

        sections.push(format!("客: {}\n給仕:", text));

        let raw = sections.join("\n\n");
        raw.replace('\n', " ").replace('"', "\\\"")
    }
}
