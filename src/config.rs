use crate::error::{NoticeError, Result};
use room_notice_common::{
    ContentCatalog, LetterRenderer, RenderOptions, StaffTranslationTable, DEFAULT_ENCODING,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 名簿CSVの文字コード
    pub encoding: String,
    pub render: RenderOptions,
    /// 担当者名の追加・上書き（JSON配列）
    pub staff_file: Option<PathBuf>,
    /// 本文・ラベルの差し替え（JSON）
    pub content_file: Option<PathBuf>,
    /// レター上部に印刷するロゴ画像
    pub logo_path: Option<PathBuf>,
    /// 印刷用HTMLの出力先
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| NoticeError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("room-notice").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.into(),
            render: RenderOptions::default(),
            staff_file: None,
            content_file: None,
            logo_path: None,
            output: PathBuf::from("letters.html"),
        }
    }

    /// 組み込みの担当者表に `staff_file` の内容を重ねる
    pub fn staff_table(&self) -> Result<StaffTranslationTable> {
        let mut table = StaffTranslationTable::builtin();
        if let Some(path) = &self.staff_file {
            if !path.exists() {
                return Err(NoticeError::FileNotFound(path.display().to_string()));
            }
            let extra = StaffTranslationTable::from_file(path)?;
            table.extend(extra.entries().iter().cloned());
        }
        Ok(table)
    }

    pub fn catalog(&self) -> Result<ContentCatalog> {
        match &self.content_file {
            Some(path) if !path.exists() => {
                Err(NoticeError::FileNotFound(path.display().to_string()))
            }
            Some(path) => Ok(ContentCatalog::from_file(path)?),
            None => Ok(ContentCatalog::default()),
        }
    }

    pub fn renderer(&self) -> Result<LetterRenderer> {
        Ok(LetterRenderer::new(self.staff_table()?, self.catalog()?, self.render))
    }
}
