//! 印刷用HTMLの生成
//!
//! レター1通ごとにテンプレート断片を複製し、各スロットに値を流し込む。
//! 出力したHTMLは読み込み時に `window.print()` を呼ぶ。

use super::PrintSurface;
use crate::error::{NoticeError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use room_notice_common::letter::CopyKind;
use room_notice_common::LetterRecord;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const STYLE: &str = "\
body{font-family:'Hiragino Mincho ProN','Yu Mincho',serif;margin:0}\
.letter{box-sizing:border-box;width:210mm;min-height:297mm;padding:20mm;page-break-after:always}\
.letter:last-child{page-break-after:auto}\
.logo{display:block;max-height:24mm;margin:0 auto 8mm}\
.title{text-align:center;font-size:20pt;margin:0 0 10mm}\
.letter-meta p,.copy p{margin:2mm 0}\
.letter-body p{line-height:1.8;margin:0 0 4mm}\
.letter-footer{text-align:right;margin-top:10mm}\
.copy{border-top:1px dashed #000;margin-top:12mm;padding-top:6mm}\
.copy-indicator{font-weight:bold;text-align:center}\
@media screen{body{background:#ddd}.letter{background:#fff;margin:10mm auto}}";

/// HTMLテキスト用エスケープ
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 印刷用HTMLドキュメントの組み立て
pub struct HtmlBuilder<'a> {
    logo: Option<&'a str>,
    buf: String,
}

impl<'a> HtmlBuilder<'a> {
    pub fn new(logo: Option<&'a str>) -> Self {
        Self {
            logo,
            buf: String::with_capacity(16 * 1024),
        }
    }

    pub fn start(&mut self, title: &str, auto_print: bool) {
        let _ = write!(
            self.buf,
            "<!doctype html><html><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body",
            esc(title),
            STYLE
        );
        if auto_print {
            self.buf.push_str(" onload=\"setTimeout(function(){window.print();},100)\"");
        }
        self.buf.push_str("><main id=\"print-area\">");
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("</main></body></html>");
        self.buf
    }

    /// レター1通分の断片
    pub fn letter(&mut self, letter: &LetterRecord) {
        let lang = letter.language.tag();
        let labels = &letter.labels;
        let _ = write!(self.buf, "<section class=\"letter lang-{0}\" lang=\"{0}\">", lang);
        if let Some(logo) = self.logo {
            let _ = write!(self.buf, "<img class=\"logo\" src=\"{}\" alt=\"\">", esc(logo));
        }
        let _ = write!(self.buf, "<h1 class=\"title\">{}</h1>", esc(&letter.title));
        self.meta_rows(letter);

        self.buf.push_str("<div class=\"letter-body\">");
        for paragraph in &letter.paragraphs {
            let _ = write!(self.buf, "<p>{}</p>", esc(paragraph));
        }
        self.buf.push_str("</div>");

        let _ = write!(
            self.buf,
            "<div class=\"letter-footer\">\
             <p><span class=\"label-date\">{}</span> <span class=\"data-date\">{}</span></p>\
             <p><span class=\"label-clerk\">{}</span>: <span class=\"data-clerk-name\">{}</span></p>\
             </div>",
            esc(&labels.date),
            esc(&letter.date),
            esc(&labels.clerk),
            esc(&letter.clerk_name)
        );

        for copy in &letter.copies {
            let class = match copy.kind {
                CopyKind::FrontDesk => "front-desk-copy",
                CopyKind::Guest => "guest-copy",
            };
            let _ = write!(
                self.buf,
                "<div class=\"copy {}\"><p class=\"copy-indicator\">{}</p>",
                class,
                esc(&copy.label)
            );
            self.meta_rows(letter);
            let _ = write!(
                self.buf,
                "<p><span class=\"label-date\">{}</span> <span class=\"data-date\">{}</span> \
                 <span class=\"label-clerk\">{}</span>: <span class=\"data-clerk-name\">{}</span></p></div>",
                esc(&labels.date),
                esc(&letter.date),
                esc(&labels.clerk),
                esc(&letter.clerk_name)
            );
        }

        self.buf.push_str("</section>");
    }

    fn meta_rows(&mut self, letter: &LetterRecord) {
        let _ = write!(
            self.buf,
            "<div class=\"letter-meta\">\
             <p><span class=\"label-room-no\">{}</span> <span class=\"data-room-number\">{}</span></p>\
             <p><span class=\"label-guest-name\">{}</span> <span class=\"data-guest-name\">{}</span></p>\
             </div>",
            esc(&letter.labels.room_no),
            esc(&letter.room_id),
            esc(&letter.labels.guest_name),
            esc(&letter.guest_name)
        );
    }
}

/// レター一覧を印刷用HTMLに変換
pub fn render_document(letters: &[LetterRecord], logo: Option<&str>, auto_print: bool) -> String {
    let title = letters.first().map(|l| l.title.as_str()).unwrap_or("");
    let mut builder = HtmlBuilder::new(logo);
    builder.start(title, auto_print);
    for letter in letters {
        builder.letter(letter);
    }
    builder.finish()
}

/// 画像ファイルを `data:` URLに変換
pub fn logo_data_url(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(NoticeError::FileNotFound(path.display().to_string()));
    }
    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        other => {
            return Err(NoticeError::Print(format!(
                "対応していないロゴ形式です: {}",
                other.unwrap_or("(拡張子なし)")
            )))
        }
    };
    let bytes = std::fs::read(path)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// 印刷用HTMLファイルに書き出す印刷面
#[derive(Debug, Clone)]
pub struct HtmlPrintSurface {
    output: PathBuf,
    logo: Option<String>,
    auto_print: bool,
}

impl HtmlPrintSurface {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            logo: None,
            auto_print: true,
        }
    }

    /// ロゴ画像を埋め込む
    pub fn with_logo(mut self, path: &Path) -> Result<Self> {
        self.logo = Some(logo_data_url(path)?);
        Ok(self)
    }

    /// 読み込み時の印刷ダイアログ呼び出しを切り替える
    pub fn auto_print(mut self, enabled: bool) -> Self {
        self.auto_print = enabled;
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl PrintSurface for HtmlPrintSurface {
    fn print(&mut self, letters: &[LetterRecord]) -> Result<()> {
        let html = render_document(letters, self.logo.as_deref(), self.auto_print);
        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.output, html)?;
        tracing::info!(letters = letters.len(), path = %self.output.display(), "print document written");
        Ok(())
    }
}
