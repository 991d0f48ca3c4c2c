//! 印刷面
//!
//! 生成したレターを印刷ダイアログ（またはその代替）に渡す。

pub mod html;

use crate::error::Result;
use room_notice_common::LetterRecord;
use std::path::{Path, PathBuf};

pub use html::HtmlPrintSurface;

/// レターの印刷先
pub trait PrintSurface {
    /// 生成済みレターを順番どおりに印刷する
    fn print(&mut self, letters: &[LetterRecord]) -> Result<()>;
}

/// レターをJSONとして書き出す（他ホスト連携用）
#[derive(Debug, Clone)]
pub struct JsonPrintSurface {
    output: PathBuf,
}

impl JsonPrintSurface {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self { output: output.into() }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl PrintSurface for JsonPrintSurface {
    fn print(&mut self, letters: &[LetterRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(letters)?;
        std::fs::write(&self.output, json)?;
        tracing::info!(letters = letters.len(), path = %self.output.display(), "letters written as JSON");
        Ok(())
    }
}

/// 印刷したレターを保持するだけの印刷面
#[derive(Debug, Default)]
pub struct MemoryPrintSurface {
    /// `print` の呼び出しごとのレター
    pub jobs: Vec<Vec<LetterRecord>>,
}

impl PrintSurface for MemoryPrintSurface {
    fn print(&mut self, letters: &[LetterRecord]) -> Result<()> {
        self.jobs.push(letters.to_vec());
        Ok(())
    }
}
