//! 宿泊者ディレクトリ（部屋番号 → 宿泊者名）
//!
//! PMS名簿CSVの2列目を部屋番号、4列目を氏名として読み込む。
//!
//! - 引用符は各フィールドの先頭と末尾の `"` を1つずつ外すだけで、
//!   引用符内のカンマは復元しない（CSVエスケープ非対応）
//! - 1行目の部屋番号が整数として読めなければヘッダ行として捨てる
//! - 氏名に英字・片仮名を含まない行は採用しない

use crate::error::{Error, Result};
use crate::script::{has_name_letters, parses_as_integer};
use serde::Serialize;
use std::collections::HashMap;

/// 部屋番号の列位置（0始まり）
const ROOM_COLUMN: usize = 1;
/// 氏名の列位置（0始まり）
const NAME_COLUMN: usize = 3;
/// 1行に必要な最小フィールド数
const MIN_FIELDS: usize = 4;

/// 1部屋分のエントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub room_id: String,
    /// 出現順の宿泊者名（1件以上）
    pub guests: Vec<String>,
}

/// 名簿読み込みの集計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    /// 読み込んだ行数（空行を含む。末尾改行の後ろは数えない）
    pub lines: usize,
    pub blank_lines: usize,
    /// フィールド数が足りない行
    pub short_lines: usize,
    pub header_skipped: bool,
    /// 部屋番号または氏名が不正で採用しなかった行
    pub rejected: usize,
    pub accepted: usize,
    /// デコード時に置き換えられた文字（U+FFFD）の数
    pub replaced_chars: usize,
}

/// 部屋番号 → 宿泊者名のディレクトリ
///
/// キーの順序は名簿での初出順。
#[derive(Debug, Clone, Default)]
pub struct GuestDirectory {
    entries: Vec<DirectoryEntry>,
    index: HashMap<String, usize>,
}

impl GuestDirectory {
    /// 名簿テキストからディレクトリを構築
    ///
    /// 採用行が1件もなければ `Error::NoValidData`。
    ///
    /// # Examples
    /// ```
    /// use room_notice_common::GuestDirectory;
    ///
    /// let (dir, _) = GuestDirectory::from_roster_text(",101,,Smith\n,101,,Jones").unwrap();
    /// assert_eq!(dir.lookup("101").unwrap(), ["Smith", "Jones"]);
    /// ```
    pub fn from_roster_text(text: &str) -> Result<(Self, RosterStats)> {
        let mut directory = Self::default();
        let mut stats = RosterStats::default();

        stats.replaced_chars = text.chars().filter(|&c| c == '\u{FFFD}').count();

        for (line_no, raw_line) in text.lines().enumerate() {
            stats.lines += 1;
            let line = raw_line.trim();
            if line.is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < MIN_FIELDS {
                stats.short_lines += 1;
                continue;
            }

            let room = unquote(fields[ROOM_COLUMN].trim());
            let name = unquote(fields[NAME_COLUMN].trim());

            if line_no == 0 && !parses_as_integer(room) {
                tracing::debug!(line = line_no + 1, room, "header row skipped");
                stats.header_skipped = true;
                continue;
            }

            if room.is_empty() || name.is_empty() || !has_name_letters(name) {
                tracing::debug!(line = line_no + 1, room, name, "row rejected");
                stats.rejected += 1;
                continue;
            }

            directory.push_guest(room, name);
            stats.accepted += 1;
        }

        if directory.is_empty() {
            return Err(Error::NoValidData);
        }
        Ok((directory, stats))
    }

    fn push_guest(&mut self, room: &str, name: &str) {
        match self.index.get(room) {
            Some(&pos) => self.entries[pos].guests.push(name.to_string()),
            None => {
                self.index.insert(room.to_string(), self.entries.len());
                self.entries.push(DirectoryEntry {
                    room_id: room.to_string(),
                    guests: vec![name.to_string()],
                });
            }
        }
    }

    /// 部屋番号で宿泊者名を検索（入力値の前後空白は無視）
    pub fn lookup(&self, room: &str) -> Option<&[String]> {
        self.index
            .get(room.trim())
            .map(|&pos| self.entries[pos].guests.as_slice())
    }

    /// 宿泊者名を ", " で連結した表示名
    pub fn display_name(&self, room: &str) -> Option<String> {
        self.lookup(room).map(|guests| guests.join(", "))
    }

    pub fn contains(&self, room: &str) -> bool {
        self.index.contains_key(room.trim())
    }

    /// 部屋番号一覧（初出順）
    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.room_id.as_str())
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DirectoryEntry> {
        self.entries.iter()
    }

    /// 部屋数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 宿泊者の延べ人数
    pub fn guest_count(&self) -> usize {
        self.entries.iter().map(|e| e.guests.len()).sum()
    }
}

/// 先頭と末尾の `"` を1つずつ外す
fn unquote(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}
