//! Room Notice Common Library
//!
//! 宿泊者名簿CSVの解析と客室清掃レター生成のコアロジック。
//! CLIホストとブラウザホストで共有される。

pub mod content;
pub mod decode;
pub mod directory;
pub mod error;
pub mod letter;
pub mod script;
pub mod staff;

pub use content::{ContentCatalog, Language, LetterContent, LetterLabels};
pub use decode::{decode_roster, DEFAULT_ENCODING};
pub use directory::{GuestDirectory, RosterStats};
pub use error::{Error, Result};
pub use letter::{
    CopyIndicator, CopyMode, LetterRecord, LetterRenderer, NameStyle, NamesPerRoom,
    RenderOptions, TranslationMode,
};
pub use staff::{StaffEntry, StaffTranslationTable};
