//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use room_notice::config::Config;
use room_notice::error::NoticeError;
use room_notice::print::{HtmlPrintSurface, PrintSurface};
use room_notice_common::Error as CoreError;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 存在しない担当者定義ファイル
#[test]
fn test_missing_staff_file() {
    let config = Config {
        staff_file: Some(PathBuf::from("/nonexistent/path/staff.json")),
        ..Config::default()
    };
    let err = config.renderer().unwrap_err();
    assert!(matches!(err, NoticeError::FileNotFound(_)));
}

/// 壊れた本文定義ファイル
#[test]
fn test_broken_content_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("content.json");
    std::fs::write(&path, "{ not json").unwrap();

    let config = Config { content_file: Some(path), ..Config::default() };
    let err = config.renderer().unwrap_err();
    assert!(matches!(err, NoticeError::Core(CoreError::Json(_))));
}

/// 存在しないロゴ
#[test]
fn test_missing_logo() {
    let result = HtmlPrintSurface::new("letters.html").with_logo(Path::new("/nonexistent/logo.png"));
    assert!(matches!(result, Err(NoticeError::FileNotFound(_))));
}

/// 書き込めない出力先
#[test]
fn test_unwritable_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    // 既存ファイルの下にディレクトリは作れない
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let mut surface = HtmlPrintSurface::new(blocker.join("letters.html"));
    let result = surface.print(&[]);
    assert!(matches!(result, Err(NoticeError::Io(_))));
}

/// NoticeErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        NoticeError::Config("テスト設定エラー".to_string()),
        NoticeError::FileNotFound("guests.csv".to_string()),
        NoticeError::Print("印刷失敗".to_string()),
        NoticeError::Prompt("入力中断".to_string()),
        NoticeError::Core(CoreError::NoValidData),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空");
    }

    let err: NoticeError = CoreError::MissingClerk.into();
    assert_eq!(err.to_string(), CoreError::MissingClerk.to_string());
}
