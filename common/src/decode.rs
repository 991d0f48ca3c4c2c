//! 名簿ファイルのデコード
//!
//! PMS（宿泊管理システム）の名簿エクスポートはShift_JISで出力される。
//! ラベルはWHATWG Encoding Standardの名称で解決する。

use crate::error::{Error, Result};
use encoding_rs::Encoding;

/// 既定の文字コード
pub const DEFAULT_ENCODING: &str = "Shift_JIS";

/// エンコーディングラベルを解決
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    let label = label.trim();
    let label = if label.is_empty() { DEFAULT_ENCODING } else { label };
    Encoding::for_label(label.as_bytes()).ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// 名簿バイト列を文字列にデコード
///
/// 先頭にBOMがある場合はBOMの文字コードを優先する。
/// 不正なバイト列はU+FFFDに置き換えて読み込みを続ける（警告ログを出す）。
///
/// # Examples
/// ```
/// use room_notice_common::decode_roster;
///
/// let text = decode_roster(b",101,,Smith", "Shift_JIS").unwrap();
/// assert_eq!(text, ",101,,Smith");
/// ```
pub fn decode_roster(bytes: &[u8], label: &str) -> Result<String> {
    let encoding = resolve_encoding(label)?;
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = used.name(),
            "roster contains malformed byte sequences; replaced with U+FFFD"
        );
    }
    tracing::debug!(encoding = used.name(), bytes = bytes.len(), "roster decoded");
    Ok(text.into_owned())
}
