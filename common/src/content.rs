//! レター本文・ラベルの多言語テーブル

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// レターの言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ja,
}

impl Language {
    /// 言語タグ
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// ロケール形式の日付（en: M/D/YYYY, ja: YYYY/M/D）
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self {
            Language::En => date.format("%-m/%-d/%Y").to_string(),
            Language::Ja => date.format("%Y/%-m/%-d").to_string(),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ja" | "japanese" | "日本語" => Ok(Language::Ja),
            other => Err(Error::Config(format!("Unknown language: {}. Use en or ja", other))),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// タイトルと本文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterContent {
    pub title: String,
    /// 本文の段落（プレーンテキスト）
    pub paragraphs: Vec<String>,
}

/// 定型ラベル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterLabels {
    pub room_no: String,
    pub guest_name: String,
    pub clerk: String,
    pub date: String,
    pub front_desk_copy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_copy: Option<String>,
}

/// 1言語分のテキスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub content: LetterContent,
    pub labels: LetterLabels,
}

/// 言語別テキストの一覧
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    pub en: LocalizedText,
    pub ja: LocalizedText,
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::room_cleaning()
    }
}

impl ContentCatalog {
    /// 客室清掃のお知らせ（組み込み）
    pub fn room_cleaning() -> Self {
        Self {
            en: LocalizedText {
                content: LetterContent {
                    title: "Room Cleaning Notification".into(),
                    paragraphs: vec![
                        "Thank you for staying with us.".into(),
                        "In accordance with hotel policy, we clean rooms that have not been serviced for two consecutive days. Therefore, our staff will be entering your room for scheduled cleaning tomorrow between 10:00 AM and 2:00 PM.".into(),
                        "Please place the \u{201c}Clean Up\u{201d} tag on your door. If you have any questions, please feel free to contact us.".into(),
                        "We appreciate your understanding and cooperation.".into(),
                    ],
                },
                labels: LetterLabels {
                    room_no: "Room No:".into(),
                    guest_name: "Guest Name:".into(),
                    clerk: "Clerk".into(),
                    date: "Date:".into(),
                    front_desk_copy: "[ FRONT DESK COPY ]".into(),
                    guest_copy: Some("[ GUEST COPY ]".into()),
                },
            },
            ja: LocalizedText {
                content: LetterContent {
                    title: "客室清掃のお知らせ".into(),
                    paragraphs: vec![
                        "ご宿泊いただき、誠にありがとうございます。".into(),
                        "当ホテルのポリシーに基づき、2日間清掃が行われなかったお部屋は、翌日に清掃を実施しております。つきましては、明日の午前10時から午後2時の間に、スタッフがお部屋の清掃に入室いたします。".into(),
                        "お部屋のドアに「清掃してください」の札をお出しください。ご不明な点がございましたら、お気軽にお問い合わせください。".into(),
                        "何卒、ご理解ご協力のほど、よろしくお願い申し上げます。".into(),
                    ],
                },
                labels: LetterLabels {
                    room_no: "部屋番号:".into(),
                    guest_name: "お客様名:".into(),
                    clerk: "担当者".into(),
                    date: "日付:".into(),
                    front_desk_copy: "[ フロント控え ]".into(),
                    guest_copy: Some("[ お客様控え ]".into()),
                },
            },
        }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn text(&self, language: Language) -> &LocalizedText {
        match language {
            Language::En => &self.en,
            Language::Ja => &self.ja,
        }
    }

    pub fn content(&self, language: Language) -> &LetterContent {
        &self.text(language).content
    }

    pub fn labels(&self, language: Language) -> &LetterLabels {
        &self.text(language).labels
    }
}
