//! フロント担当者名の表記変換テーブル
//!
//! ローマ字表記 ⇔ 日本語表記の対応。
//! ローマ字 → 日本語は大文字小文字を区別せず、日本語 → ローマ字は完全一致。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 担当者1名分の対応
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffEntry {
    /// ローマ字表記（大文字）
    pub romanized: String,
    /// 日本語表記
    pub localized: String,
}

impl StaffEntry {
    pub fn new(romanized: impl Into<String>, localized: impl Into<String>) -> Self {
        Self {
            romanized: romanized.into().to_uppercase(),
            localized: localized.into(),
        }
    }
}

/// 組み込みの担当者一覧
const BUILTIN_STAFF: &[(&str, &str)] = &[
    ("NAKAYAMA", "中山"),
    ("TAKAMI", "髙見"),
    ("KANEKO A.", "金子 愛"),
    ("KANEKO T.", "金子 智"),
    ("KIYONAGA", "清永"),
    ("IWAI", "岩井"),
    ("MURABAYASHI", "村林"),
    ("ZHANG", "張"),
    ("YEN", "グエン"),
    ("BIJAYA", "ビザヤ"),
    ("MARK NOLAN", "マークノラン"),
    ("UTSUGI", "宇津木"),
    ("MIYAKAWA", "宮川"),
    ("KOKUBU", "国分"),
    ("SAKAMOTO", "坂本"),
    ("OGAWA", "小川"),
    ("GUSHIKEN", "具志堅"),
];

/// 担当者名変換テーブル
///
/// ローマ字キーは常に大文字で保持する。読み込みは `from_json` を通すこと。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StaffTranslationTable {
    entries: Vec<StaffEntry>,
}

impl Default for StaffTranslationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StaffTranslationTable {
    /// 組み込みテーブル
    pub fn builtin() -> Self {
        Self::with_entries(
            BUILTIN_STAFF
                .iter()
                .map(|(romanized, localized)| StaffEntry::new(*romanized, *localized)),
        )
    }

    /// 空のテーブル
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn with_entries(entries: impl IntoIterator<Item = StaffEntry>) -> Self {
        let mut table = Self::empty();
        table.extend(entries);
        table
    }

    /// エントリを追加（同じローマ字表記は後勝ちで置き換え）
    pub fn extend(&mut self, entries: impl IntoIterator<Item = StaffEntry>) {
        for entry in entries {
            let entry = StaffEntry::new(entry.romanized, entry.localized);
            match self.entries.iter_mut().find(|e| e.romanized == entry.romanized) {
                Some(existing) => existing.localized = entry.localized,
                None => self.entries.push(entry),
            }
        }
    }

    /// JSON配列 `[{"romanized": "...", "localized": "..."}]` から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<StaffEntry> = serde_json::from_str(json)?;
        Ok(Self::with_entries(entries))
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// ローマ字 → 日本語（大文字小文字は区別しない）
    pub fn to_localized(&self, identity: &str) -> Option<&str> {
        let key = identity.trim().to_uppercase();
        self.entries
            .iter()
            .find(|e| e.romanized == key)
            .map(|e| e.localized.as_str())
    }

    /// 日本語 → ローマ字
    pub fn to_romanized(&self, identity: &str) -> Option<&str> {
        let key = identity.trim();
        self.entries
            .iter()
            .find(|e| e.localized == key)
            .map(|e| e.romanized.as_str())
    }

    pub fn entries(&self) -> &[StaffEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = StaffTranslationTable::builtin();
        assert_eq!(table.len(), 17);
        assert_eq!(table.to_localized("NAKAYAMA"), Some("中山"));
        assert_eq!(table.to_romanized("具志堅"), Some("GUSHIKEN"));
    }

    #[test]
    fn test_localized_lookup_is_case_insensitive() {
        let table = StaffTranslationTable::builtin();
        assert_eq!(table.to_localized("nakayama"), Some("中山"));
        assert_eq!(table.to_localized("Kaneko A."), Some("金子 愛"));
        assert_eq!(table.to_localized("Mark Nolan"), Some("マークノラン"));
    }

    #[test]
    fn test_unmapped_identity() {
        let table = StaffTranslationTable::builtin();
        assert_eq!(table.to_localized("SMITH"), None);
        assert_eq!(table.to_romanized("SMITH"), None);
        assert_eq!(table.to_romanized("中山さん"), None);
    }

    #[test]
    fn test_extend_overrides_existing() {
        let mut table = StaffTranslationTable::builtin();
        table.extend([StaffEntry::new("iwai", "岩井 花子"), StaffEntry::new("SATO", "佐藤")]);
        assert_eq!(table.len(), 18);
        assert_eq!(table.to_localized("IWAI"), Some("岩井 花子"));
        assert_eq!(table.to_romanized("佐藤"), Some("SATO"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"romanized": "suzuki", "localized": "鈴木"}]"#;
        let table = StaffTranslationTable::from_json(json).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.to_localized("Suzuki"), Some("鈴木"));
        assert_eq!(table.entries()[0].romanized, "SUZUKI");
    }

    #[test]
    fn test_from_json_merges_case_variants() {
        let json = r#"[
            {"romanized": "sato", "localized": "佐藤"},
            {"romanized": "SATO", "localized": "佐藤 一郎"}
        ]"#;
        let table = StaffTranslationTable::from_json(json).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.to_localized("sato"), Some("佐藤 一郎"));
        assert_eq!(table.to_romanized("佐藤 一郎"), Some("SATO"));

        // staff --json の出力はそのまま読み戻せる
        let dumped = serde_json::to_string(&table).unwrap();
        assert_eq!(StaffTranslationTable::from_json(&dumped).unwrap(), table);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(StaffTranslationTable::from_json("{").is_err());
    }
}
