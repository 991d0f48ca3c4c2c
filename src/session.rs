//! 画面セッションの状態遷移
//!
//! `Empty → DirectoryLoaded → LettersRendered` の3状態。
//! イベントは1件ずつ最後まで処理し、失敗時は状態を変えない
//! （名簿が有効データなしの場合のみディレクトリを空に戻す）。

use crate::error::Result;
use crate::print::PrintSurface;
use chrono::NaiveDate;
use room_notice_common::{
    decode_roster, Error as CoreError, GuestDirectory, LetterRenderer, RosterStats,
};
use std::path::Path;

/// 表示用の「該当なし」
pub const GUEST_NOT_FOUND: &str = "Guest not found";

/// セッション状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    DirectoryLoaded,
    LettersRendered,
}

/// ホストから届くイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// ファイル読み込み完了（生バイト + 宣言された文字コード）
    FileRead { bytes: Vec<u8>, encoding: String },
    /// ファイル読み込み失敗
    FileReadFailed(String),
    /// 部屋番号入力行を追加
    AddRow,
    /// 入力行の部屋番号を更新
    SetRow { index: usize, room: String },
    DeleteRow(usize),
    /// レター生成
    Generate { clerk: String },
}

/// イベント処理結果（利用者に表示する内容）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded { rooms: usize, stats: RosterStats },
    NoValidData,
    Unreadable(String),
    RowAdded { index: usize },
    /// 入力行の宿泊者名表示（見つからなければ `None`）
    RowLookup { index: usize, guest: Option<String> },
    RowDeleted { index: usize },
    /// 該当する入力行がない
    NoSuchRow { index: usize },
    /// 名簿未読み込みのため操作できない
    NoDirectory,
    MissingClerk,
    NoMatchedRooms,
    Printed { letters: usize },
}

impl Outcome {
    /// 画面に出すメッセージ
    pub fn message(&self) -> String {
        match self {
            Outcome::Loaded { rooms, .. } => format!("✅ Success! {} rooms loaded.", rooms),
            Outcome::NoValidData => format!("❌ Error: {}", CoreError::NoValidData),
            Outcome::Unreadable(reason) => format!("❌ Error: {}", CoreError::Decode(reason.clone())),
            Outcome::RowAdded { index } => format!("row {} added", index + 1),
            Outcome::RowLookup { guest: Some(name), .. } => name.clone(),
            Outcome::RowLookup { guest: None, .. } => GUEST_NOT_FOUND.to_string(),
            Outcome::RowDeleted { index } => format!("row {} deleted", index + 1),
            Outcome::NoSuchRow { index } => format!("row {} does not exist", index + 1),
            Outcome::NoDirectory => "Please upload the guest list CSV first.".to_string(),
            Outcome::MissingClerk => CoreError::MissingClerk.to_string(),
            Outcome::NoMatchedRooms => CoreError::NoMatchedRooms.to_string(),
            Outcome::Printed { letters } => format!("✅ {} letters sent to print.", letters),
        }
    }

    /// 処理失敗として扱う結果か
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::NoValidData
                | Outcome::Unreadable(_)
                | Outcome::NoSuchRow { .. }
                | Outcome::NoDirectory
                | Outcome::MissingClerk
                | Outcome::NoMatchedRooms
        )
    }
}

/// 1画面分のセッション
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    directory: Option<GuestDirectory>,
    rows: Vec<String>,
    renderer: LetterRenderer,
    /// レター日付の固定値（未指定なら当日）
    date: Option<NaiveDate>,
}

impl Session {
    pub fn new(renderer: LetterRenderer) -> Self {
        Self {
            state: SessionState::Empty,
            directory: None,
            rows: Vec::new(),
            renderer,
            date: None,
        }
    }

    /// レター日付を固定する
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn directory(&self) -> Option<&GuestDirectory> {
        self.directory.as_ref()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// イベントを1件処理する
    ///
    /// 印刷面への出力に失敗した場合のみ `Err` を返す。
    pub fn handle(&mut self, event: Event, surface: &mut dyn PrintSurface) -> Result<Outcome> {
        let outcome = match event {
            Event::FileRead { bytes, encoding } => self.load(&bytes, &encoding),
            Event::FileReadFailed(reason) => {
                tracing::warn!(%reason, "file read failed");
                Outcome::Unreadable(reason)
            }
            Event::AddRow => self.add_row(),
            Event::SetRow { index, room } => self.set_row(index, room),
            Event::DeleteRow(index) => self.delete_row(index),
            Event::Generate { clerk } => self.generate(&clerk, surface)?,
        };
        Ok(outcome)
    }

    fn load(&mut self, bytes: &[u8], encoding: &str) -> Outcome {
        let text = match decode_roster(bytes, encoding) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "roster could not be decoded");
                return Outcome::Unreadable(e.to_string());
            }
        };

        match GuestDirectory::from_roster_text(&text) {
            Ok((directory, stats)) => {
                let rooms = directory.len();
                tracing::info!(
                    rooms,
                    guests = directory.guest_count(),
                    accepted = stats.accepted,
                    rejected = stats.rejected,
                    "guest directory loaded"
                );
                self.directory = Some(directory);
                self.rows = vec![String::new()];
                self.state = SessionState::DirectoryLoaded;
                Outcome::Loaded { rooms, stats }
            }
            Err(_) => {
                tracing::warn!("roster contained no valid rows");
                self.directory = None;
                self.rows.clear();
                self.state = SessionState::Empty;
                Outcome::NoValidData
            }
        }
    }

    fn add_row(&mut self) -> Outcome {
        if self.directory.is_none() {
            return Outcome::NoDirectory;
        }
        self.rows.push(String::new());
        Outcome::RowAdded { index: self.rows.len() - 1 }
    }

    fn set_row(&mut self, index: usize, room: String) -> Outcome {
        let Some(directory) = &self.directory else {
            return Outcome::NoDirectory;
        };
        let Some(row) = self.rows.get_mut(index) else {
            return Outcome::NoSuchRow { index };
        };
        let guest = directory.display_name(&room);
        *row = room;
        Outcome::RowLookup { index, guest }
    }

    fn delete_row(&mut self, index: usize) -> Outcome {
        if self.directory.is_none() {
            return Outcome::NoDirectory;
        }
        if index >= self.rows.len() {
            return Outcome::NoSuchRow { index };
        }
        self.rows.remove(index);
        Outcome::RowDeleted { index }
    }

    fn generate(&mut self, clerk: &str, surface: &mut dyn PrintSurface) -> Result<Outcome> {
        let Some(directory) = &self.directory else {
            return Ok(Outcome::NoDirectory);
        };
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let letters = match self.renderer.render_all(self.rows.as_slice(), directory, clerk, date) {
            Ok(letters) => letters,
            Err(CoreError::MissingClerk) => return Ok(Outcome::MissingClerk),
            Err(CoreError::NoMatchedRooms) => return Ok(Outcome::NoMatchedRooms),
            Err(e) => return Err(e.into()),
        };

        surface.print(&letters)?;
        self.state = SessionState::LettersRendered;
        Ok(Outcome::Printed { letters: letters.len() })
    }
}

/// ファイルを読み込んで読み込み完了/失敗イベントにする
pub fn read_file_event(path: &Path, encoding: &str) -> Event {
    match std::fs::read(path) {
        Ok(bytes) => Event::FileRead {
            bytes,
            encoding: encoding.to_string(),
        },
        Err(e) => Event::FileReadFailed(format!("{}: {}", path.display(), e)),
    }
}
