//! 印刷面の統合テスト
//!
//! 名簿ファイルから印刷用HTML/JSONを書き出すまでを検証

use chrono::NaiveDate;
use room_notice::config::Config;
use room_notice::print::{HtmlPrintSurface, JsonPrintSurface, PrintSurface};
use room_notice::session::{read_file_event, Event, Outcome, Session};
use room_notice_common::{CopyMode, NameStyle, RenderOptions};
use tempfile::tempdir;

const ROSTER: &str = "No,Room,Kana,Name\r\n1,501,,Smith\r\n2,502,,スズキ イチロウ\r\n";

fn write_roster(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("guests.csv");
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(ROSTER);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn run(session: &mut Session, surface: &mut dyn PrintSurface, csv: &std::path::Path, clerk: &str) -> Outcome {
    session.handle(read_file_event(csv, "Shift_JIS"), surface).unwrap();
    session.handle(Event::SetRow { index: 0, room: "501".into() }, surface).unwrap();
    session.handle(Event::AddRow, surface).unwrap();
    session.handle(Event::SetRow { index: 1, room: "502".into() }, surface).unwrap();
    session.handle(Event::Generate { clerk: clerk.into() }, surface).unwrap()
}

#[test]
fn test_html_print_document() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = write_roster(dir.path());
    let output = dir.path().join("out").join("letters.html");

    let config = Config {
        render: RenderOptions {
            name_style: NameStyle::Honorific,
            copies: CopyMode::FrontDeskAndGuest,
            ..Default::default()
        },
        ..Config::default()
    };
    let mut surface = HtmlPrintSurface::new(&output);
    let mut session = Session::new(config.renderer().unwrap())
        .with_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());

    let outcome = run(&mut session, &mut surface, &csv, "Kokubu");
    assert_eq!(outcome, Outcome::Printed { letters: 2 });
    assert!(output.exists(), "HTMLファイルが作成されていない");

    let html = std::fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("<section class=\"letter").count(), 2);
    assert!(html.contains("<span class=\"data-guest-name\">Mr./Ms. Smith</span>"));
    assert!(html.contains("<span class=\"data-guest-name\">スズキ イチロウ 様</span>"));
    assert!(html.contains("<span class=\"data-clerk-name\">国分</span>"));
    assert!(html.contains("<span class=\"data-clerk-name\">Kokubu</span>"));
    assert!(html.contains("<span class=\"data-date\">1/5/2026</span>"));
    assert!(html.contains("<span class=\"data-date\">2026/1/5</span>"));
    assert!(html.contains("class=\"copy guest-copy\""));
    assert!(html.contains("[ GUEST COPY ]"));
    assert!(html.contains("window.print()"));
}

#[test]
fn test_html_with_logo() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = write_roster(dir.path());
    let logo = dir.path().join("logo.jpg");
    std::fs::write(&logo, [0xFF, 0xD8, 0xFF]).unwrap();
    let output = dir.path().join("letters.html");

    let mut surface = HtmlPrintSurface::new(&output)
        .with_logo(&logo)
        .unwrap()
        .auto_print(false);
    let mut session = Session::new(Config::default().renderer().unwrap());
    run(&mut session, &mut surface, &csv, "IWAI");

    let html = std::fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("src=\"data:image/jpeg;base64,").count(), 2);
    assert!(!html.contains("window.print()"));
}

#[test]
fn test_json_print_surface() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = write_roster(dir.path());
    let output = dir.path().join("letters.json");

    let mut surface = JsonPrintSurface::new(&output);
    let mut session = Session::new(Config::default().renderer().unwrap())
        .with_date(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    run(&mut session, &mut surface, &csv, "中山");

    let content = std::fs::read_to_string(&output).unwrap();
    let letters: serde_json::Value = serde_json::from_str(&content).unwrap();
    let letters = letters.as_array().unwrap();
    assert_eq!(letters.len(), 2);
    assert_eq!(letters[0]["roomId"], "501");
    assert_eq!(letters[0]["language"], "en");
    assert_eq!(letters[0]["clerkName"], "NAKAYAMA");
    assert_eq!(letters[1]["language"], "ja");
    assert_eq!(letters[1]["clerkName"], "中山");
    assert_eq!(letters[1]["copies"][0]["kind"], "front-desk");
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut surface = JsonPrintSurface::new(dir.path().join("x.json"));
    let mut session = Session::new(Config::default().renderer().unwrap());

    let event = read_file_event(&dir.path().join("missing.csv"), "Shift_JIS");
    assert!(matches!(event, Event::FileReadFailed(_)));
    let outcome = session.handle(event, &mut surface).unwrap();
    assert!(matches!(outcome, Outcome::Unreadable(_)));
    assert!(!dir.path().join("x.json").exists());
}
