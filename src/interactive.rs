//! 対話式の部屋番号入力
//!
//! 画面の部屋番号入力行をターミナル上で再現する。
//! 入力した部屋番号ごとに宿泊者名を表示し、Enterで次の行へ進む。

use crate::error::{NoticeError, Result};
use crate::print::PrintSurface;
use crate::session::{read_file_event, Event, Outcome, Session};
use dialoguer::Input;
use std::path::PathBuf;

/// 対話コマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 現在の行に部屋番号を入力
    Room(String),
    /// 名簿を読み込み直す
    Load(PathBuf),
    /// 指定行を削除（1始まり）
    Delete(usize),
    /// 入力済みの行を表示
    List,
    /// レター生成
    Generate,
    /// 何もしない
    Skip,
    Quit,
}

/// 入力文字列をコマンドに変換
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    match trimmed {
        "" => Command::Skip,
        "q" | "Q" | "quit" => Command::Quit,
        "go" | "g" => Command::Generate,
        "list" | "ls" => Command::List,
        _ => {
            if let Some(path) = trimmed.strip_prefix("load ") {
                return Command::Load(PathBuf::from(path.trim()));
            }
            if let Some(n) = trimmed
                .strip_prefix("del ")
                .or_else(|| trimmed.strip_prefix('-'))
                .and_then(|n| n.trim().parse::<usize>().ok())
                .filter(|&n| n > 0)
            {
                return Command::Delete(n);
            }
            Command::Room(trimmed.to_string())
        }
    }
}

/// 対話ループ
pub fn run_interactive(
    session: &mut Session,
    surface: &mut dyn PrintSurface,
    encoding: &str,
    csv: Option<PathBuf>,
    clerk: Option<String>,
) -> Result<()> {
    println!("操作: 部屋番号を入力 [Enter]次の行 [del N]行削除 [list]一覧 [load PATH]名簿読込 [go]生成 [q]終了");
    println!("---\n");

    if let Some(path) = csv {
        dispatch(session, surface, read_file_event(&path, encoding))?;
    }

    let mut clerk = clerk.unwrap_or_default();

    loop {
        let prompt = format!("部屋番号 [{}]", session.rows().len().max(1));
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| NoticeError::Prompt(e.to_string()))?;

        match parse_command(&input) {
            Command::Quit => break,
            Command::Skip => {}
            Command::Load(path) => {
                dispatch(session, surface, read_file_event(&path, encoding))?;
            }
            Command::List => print_rows(session),
            Command::Delete(n) => {
                dispatch(session, surface, Event::DeleteRow(n - 1))?;
            }
            Command::Room(room) => {
                let outcome = enter_room(session, surface, room)?;
                show(&outcome);
            }
            Command::Generate => {
                clerk = Input::new()
                    .with_prompt("担当者名")
                    .with_initial_text(clerk.clone())
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| NoticeError::Prompt(e.to_string()))?;
                dispatch(session, surface, Event::Generate { clerk: clerk.clone() })?;
            }
        }
    }

    Ok(())
}

/// 部屋番号の入力先を決めるイベント列
///
/// 末尾に空の行があればそこへ書き込み、なければ行を追加してから書き込む。
pub fn room_entry_events(rows: &[String], room: String) -> Vec<Event> {
    match rows.last() {
        Some(last) if last.trim().is_empty() => vec![Event::SetRow {
            index: rows.len() - 1,
            room,
        }],
        _ => vec![Event::AddRow, Event::SetRow { index: rows.len(), room }],
    }
}

/// 部屋番号を入力し、照合できたら次の空行を用意する
pub fn enter_room(session: &mut Session, surface: &mut dyn PrintSurface, room: String) -> Result<Outcome> {
    let mut outcome = Outcome::NoDirectory;
    for event in room_entry_events(session.rows(), room) {
        outcome = session.handle(event, surface)?;
        if outcome.is_failure() {
            return Ok(outcome);
        }
    }
    if matches!(outcome, Outcome::RowLookup { .. }) {
        session.handle(Event::AddRow, surface)?;
    }
    Ok(outcome)
}

fn dispatch(session: &mut Session, surface: &mut dyn PrintSurface, event: Event) -> Result<Outcome> {
    let outcome = session.handle(event, surface)?;
    show(&outcome);
    Ok(outcome)
}

fn show(outcome: &Outcome) {
    match outcome {
        Outcome::RowLookup { .. } => println!("  → {}", outcome.message()),
        Outcome::RowAdded { .. } => {}
        _ if outcome.is_failure() => println!("{}", outcome.message()),
        _ => println!("✔ {}", outcome.message()),
    }
}

fn print_rows(session: &Session) {
    let Some(directory) = session.directory() else {
        println!("{}", Outcome::NoDirectory.message());
        return;
    };
    for (i, room) in session.rows().iter().enumerate().filter(|(_, r)| !r.trim().is_empty()) {
        let guest = directory
            .display_name(room)
            .unwrap_or_else(|| crate::session::GUEST_NOT_FOUND.to_string());
        println!("  [{}] {} : {}", i + 1, room, guest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print::MemoryPrintSurface;
    use room_notice_common::LetterRenderer;

    fn loaded_session(surface: &mut MemoryPrintSurface) -> Session {
        let mut session = Session::new(LetterRenderer::default());
        let bytes = ",101,,Smith\n,102,,Jones\n,103,,Kim\n".as_bytes().to_vec();
        session
            .handle(Event::FileRead { bytes, encoding: "utf-8".into() }, surface)
            .unwrap();
        session
    }

    #[test]
    fn test_room_entry_events() {
        let rows = vec!["101".to_string(), String::new()];
        assert_eq!(
            room_entry_events(&rows, "102".into()),
            vec![Event::SetRow { index: 1, room: "102".into() }]
        );

        let rows = vec!["101".to_string()];
        assert_eq!(
            room_entry_events(&rows, "102".into()),
            vec![Event::AddRow, Event::SetRow { index: 1, room: "102".into() }]
        );

        assert_eq!(
            room_entry_events(&[], "101".into()),
            vec![Event::AddRow, Event::SetRow { index: 0, room: "101".into() }]
        );
    }

    #[test]
    fn test_enter_room_after_deleting_trailing_row() {
        let mut surface = MemoryPrintSurface::default();
        let mut session = loaded_session(&mut surface);

        enter_room(&mut session, &mut surface, "101".into()).unwrap();
        assert_eq!(session.rows(), ["101", ""]);

        session.handle(Event::DeleteRow(1), &mut surface).unwrap();
        let outcome = enter_room(&mut session, &mut surface, "102".into()).unwrap();
        assert_eq!(outcome, Outcome::RowLookup { index: 1, guest: Some("Jones".into()) });
        assert_eq!(session.rows(), ["101", "102", ""]);
    }

    #[test]
    fn test_enter_room_after_deleting_every_row() {
        let mut surface = MemoryPrintSurface::default();
        let mut session = loaded_session(&mut surface);
        enter_room(&mut session, &mut surface, "101".into()).unwrap();
        session.handle(Event::DeleteRow(1), &mut surface).unwrap();
        session.handle(Event::DeleteRow(0), &mut surface).unwrap();
        assert!(session.rows().is_empty());

        let outcome = enter_room(&mut session, &mut surface, "103".into()).unwrap();
        assert_eq!(outcome, Outcome::RowLookup { index: 0, guest: Some("Kim".into()) });
        assert_eq!(session.rows(), ["103", ""]);
    }

    #[test]
    fn test_enter_unknown_room_still_opens_next_row() {
        let mut surface = MemoryPrintSurface::default();
        let mut session = loaded_session(&mut surface);

        let outcome = enter_room(&mut session, &mut surface, "999".into()).unwrap();
        assert_eq!(outcome, Outcome::RowLookup { index: 0, guest: None });
        assert_eq!(session.rows(), ["999", ""]);

        enter_room(&mut session, &mut surface, "101".into()).unwrap();
        assert_eq!(session.rows(), ["999", "101", ""]);
    }

    #[test]
    fn test_enter_room_without_directory() {
        let mut surface = MemoryPrintSurface::default();
        let mut session = Session::new(LetterRenderer::default());
        let outcome = enter_room(&mut session, &mut surface, "101".into()).unwrap();
        assert_eq!(outcome, Outcome::NoDirectory);
        assert!(session.rows().is_empty());
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(""), Command::Skip);
        assert_eq!(parse_command("  q "), Command::Quit);
        assert_eq!(parse_command("go"), Command::Generate);
        assert_eq!(parse_command("list"), Command::List);
        assert_eq!(parse_command("501"), Command::Room("501".into()));
        assert_eq!(parse_command("del 2"), Command::Delete(2));
        assert_eq!(parse_command("-3"), Command::Delete(3));
        assert_eq!(parse_command("load guests.csv"), Command::Load(PathBuf::from("guests.csv")));
    }

    #[test]
    fn test_invalid_delete_is_room() {
        assert_eq!(parse_command("-0"), Command::Room("-0".into()));
        assert_eq!(parse_command("del x"), Command::Room("del x".into()));
    }
}
