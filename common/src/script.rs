//! 文字種の判定
//!
//! 名簿の氏名欄はローマ字または片仮名（全角・半角）で入力されている。
//! 漢字のみの氏名は名簿エクスポートには現れない前提。

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// 氏名として有効な文字（ラテン文字・片仮名・長音記号・半角カナ）
    static ref NAME_LETTER: Regex = Regex::new(r"[a-zA-Zァ-ヶーｦ-ﾟ]").unwrap();
    /// 日本語レター判定用の片仮名
    static ref KANA: Regex = Regex::new(r"[ァ-ヶーｦ-ﾟ]").unwrap();
}

/// 氏名文字を1文字以上含むか
pub fn has_name_letters(s: &str) -> bool {
    NAME_LETTER.is_match(s)
}

/// 片仮名を1文字以上含むか
pub fn contains_kana(s: &str) -> bool {
    KANA.is_match(s)
}

/// 先頭部分が整数として読めるか
///
/// 先頭の空白と符号を許容し、数字が1桁以上続けば真。
/// 数字の後ろの文字は無視する（"101A" は整数として読める）。
pub fn parses_as_integer(s: &str) -> bool {
    let rest = s.trim_start();
    let rest = rest
        .strip_prefix('+')
        .or_else(|| rest.strip_prefix('-'))
        .unwrap_or(rest);
    rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_letters() {
        assert!(has_name_letters("Smith"));
        assert!(has_name_letters("タナカ"));
        assert!(has_name_letters("ﾀﾅｶ"));
        assert!(has_name_letters("ー"));
        assert!(!has_name_letters("12345"));
        assert!(!has_name_letters(""));
        assert!(!has_name_letters("田中"));
    }

    #[test]
    fn test_kana_detection() {
        assert!(!contains_kana("Tanaka"));
        assert!(contains_kana("ア"));
        assert!(contains_kana("Smith ア"));
        assert!(contains_kana("ﾔﾏﾀﾞ"));
        // 平仮名は対象外
        assert!(!contains_kana("たなか"));
    }

    #[test]
    fn test_integer_prefix() {
        assert!(parses_as_integer("101"));
        assert!(parses_as_integer("101A"));
        assert!(parses_as_integer(" -5"));
        assert!(parses_as_integer("+7"));
        assert!(!parses_as_integer("Room"));
        assert!(!parses_as_integer(""));
        assert!(!parses_as_integer("-"));
        assert!(!parses_as_integer("部屋番号"));
    }
}
