//! 客室清掃レターの生成
//!
//! 部屋ごとに言語を判定し、担当者名を変換してレター1通分の値を組み立てる。
//! 表示形式（敬称・控えラベル・変換方向・1部屋の氏名数）は版ごとに
//! 異なっていたため、すべて `RenderOptions` で切り替える。

use crate::content::{ContentCatalog, Language, LetterLabels};
use crate::directory::GuestDirectory;
use crate::error::{Error, Result};
use crate::script::contains_kana;
use crate::staff::StaffTranslationTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 宿泊者名の表示形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameStyle {
    /// 氏名をそのまま表示
    #[default]
    Plain,
    /// ja: 「○○ 様」、en: 「Mr./Ms. ○○」
    Honorific,
}

/// 控えラベルの種類
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyMode {
    /// フロント控えのみ
    #[default]
    FrontDeskOnly,
    /// フロント控え + お客様控え
    FrontDeskAndGuest,
}

/// 担当者名の変換方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationMode {
    /// ja レターはローマ字→日本語、en レターは日本語→ローマ字
    #[default]
    Bidirectional,
    /// ja レターのみローマ字→日本語に変換
    ToLocalizedOnly,
}

/// 1部屋に複数名いる場合の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamesPerRoom {
    /// 全員を ", " で連結
    #[default]
    All,
    /// 先頭の1名のみ
    First,
}

macro_rules! option_enum_str {
    ($ty:ty, $($variant:path => [$($name:literal),+]),+ $(,)?) => {
        impl std::str::FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_lowercase().as_str() {
                    $($($name)|+ => Ok($variant),)+
                    other => Err(Error::Config(format!(
                        "Unknown {}: {}", stringify!($ty), other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($variant => f.write_str([$($name),+][0]),)+
                }
            }
        }
    };
}

option_enum_str!(NameStyle,
    NameStyle::Plain => ["plain"],
    NameStyle::Honorific => ["honorific", "敬称"],
);
option_enum_str!(CopyMode,
    CopyMode::FrontDeskOnly => ["front-desk-only", "front-desk"],
    CopyMode::FrontDeskAndGuest => ["front-desk-and-guest", "both"],
);
option_enum_str!(TranslationMode,
    TranslationMode::Bidirectional => ["bidirectional", "both"],
    TranslationMode::ToLocalizedOnly => ["to-localized-only", "one-way"],
);
option_enum_str!(NamesPerRoom,
    NamesPerRoom::All => ["all"],
    NamesPerRoom::First => ["first"],
);

/// レター生成オプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub name_style: NameStyle,
    pub copies: CopyMode,
    pub translation: TranslationMode,
    pub names_per_room: NamesPerRoom,
}

/// 控えの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyKind {
    FrontDesk,
    Guest,
}

/// 控え表示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyIndicator {
    pub kind: CopyKind,
    pub label: String,
}

/// レター1通分の値
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterRecord {
    pub room_id: String,
    /// 敬称等を適用した宿泊者名
    pub guest_name: String,
    pub language: Language,
    pub clerk_name: String,
    /// ロケール形式の日付
    pub date: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub labels: LetterLabels,
    pub copies: Vec<CopyIndicator>,
}

/// 表示名に片仮名が1文字でもあれば ja、なければ en
pub fn classify_language(display_name: &str) -> Language {
    if contains_kana(display_name) {
        Language::Ja
    } else {
        Language::En
    }
}

/// レターの言語に合わせて担当者名を変換
///
/// 対応がなければ入力値をそのまま使う。
pub fn resolve_clerk_name(
    identity: &str,
    language: Language,
    staff: &StaffTranslationTable,
    mode: TranslationMode,
) -> String {
    let identity = identity.trim();
    let translated = match (language, mode) {
        (Language::Ja, _) => staff.to_localized(identity),
        (Language::En, TranslationMode::Bidirectional) => staff.to_romanized(identity),
        (Language::En, TranslationMode::ToLocalizedOnly) => None,
    };
    translated.unwrap_or(identity).to_string()
}

/// 表示形式に従って宿泊者名を整形
pub fn compose_guest_name(display_name: &str, language: Language, style: NameStyle) -> String {
    match (style, language) {
        (NameStyle::Plain, _) => display_name.to_string(),
        (NameStyle::Honorific, Language::Ja) => format!("{} 様", display_name),
        (NameStyle::Honorific, Language::En) => format!("Mr./Ms. {}", display_name),
    }
}

/// レター生成器
#[derive(Debug, Clone, Default)]
pub struct LetterRenderer {
    staff: StaffTranslationTable,
    catalog: ContentCatalog,
    options: RenderOptions,
}

impl LetterRenderer {
    pub fn new(staff: StaffTranslationTable, catalog: ContentCatalog, options: RenderOptions) -> Self {
        Self { staff, catalog, options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn staff(&self) -> &StaffTranslationTable {
        &self.staff
    }

    /// 1部屋分のレターを生成（該当者がいなければ `None`）
    pub fn render_room(
        &self,
        room: &str,
        directory: &GuestDirectory,
        clerk: &str,
        date: NaiveDate,
    ) -> Option<LetterRecord> {
        let room = room.trim();
        let guests = directory.lookup(room).filter(|g| !g.is_empty())?;

        let display_name = match self.options.names_per_room {
            NamesPerRoom::All => guests.join(", "),
            NamesPerRoom::First => guests[0].clone(),
        };
        let language = classify_language(&display_name);
        let clerk_name = resolve_clerk_name(clerk, language, &self.staff, self.options.translation);
        let text = self.catalog.text(language);

        let mut copies = vec![CopyIndicator {
            kind: CopyKind::FrontDesk,
            label: text.labels.front_desk_copy.clone(),
        }];
        if self.options.copies == CopyMode::FrontDeskAndGuest {
            match &text.labels.guest_copy {
                Some(label) => copies.push(CopyIndicator {
                    kind: CopyKind::Guest,
                    label: label.clone(),
                }),
                None => tracing::warn!(language = language.tag(), "guest copy label missing"),
            }
        }

        tracing::debug!(room, language = language.tag(), clerk = %clerk_name, "letter rendered");

        Some(LetterRecord {
            room_id: room.to_string(),
            guest_name: compose_guest_name(&display_name, language, self.options.name_style),
            language,
            clerk_name,
            date: language.format_date(date),
            title: text.content.title.clone(),
            paragraphs: text.content.paragraphs.clone(),
            labels: text.labels.clone(),
            copies,
        })
    }

    /// 入力された部屋すべてのレターを入力順に生成
    ///
    /// 担当者名が空なら部屋を見る前に `Error::MissingClerk`、
    /// 1通も生成できなければ `Error::NoMatchedRooms`。
    pub fn render_all<S: AsRef<str>>(
        &self,
        rooms: &[S],
        directory: &GuestDirectory,
        clerk: &str,
        date: NaiveDate,
    ) -> Result<Vec<LetterRecord>> {
        if clerk.trim().is_empty() {
            return Err(Error::MissingClerk);
        }

        let letters: Vec<LetterRecord> = rooms
            .iter()
            .filter_map(|room| self.render_room(room.as_ref(), directory, clerk, date))
            .collect();

        if letters.is_empty() {
            return Err(Error::NoMatchedRooms);
        }
        Ok(letters)
    }
}
