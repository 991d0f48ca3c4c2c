use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use room_notice_common::{CopyMode, NameStyle, NamesPerRoom, TranslationMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "room-notice")]
#[command(about = "宿泊者名簿CSVから客室清掃のお知らせを作成・印刷", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名簿を読み込み、指定した部屋のレターを一括生成
    Generate {
        /// 名簿CSVファイル
        #[arg(required = true)]
        csv: PathBuf,

        /// フロント担当者名
        #[arg(short, long)]
        clerk: String,

        /// 部屋番号（入力順にレターを並べる）
        #[arg(short, long = "room", required = true)]
        rooms: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        render: RenderFlags,
    },

    /// 対話的に部屋番号を入力してレターを生成
    Interactive {
        /// 名簿CSVファイル（省略時は `load <path>` で読み込み）
        csv: Option<PathBuf>,

        /// フロント担当者名（省略時は生成時に入力）
        #[arg(short, long)]
        clerk: Option<String>,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        render: RenderFlags,
    },

    /// 名簿の読み込み結果を表示
    Inspect {
        /// 名簿CSVファイル
        #[arg(required = true)]
        csv: PathBuf,

        /// 文字コード（既定: 設定値）
        #[arg(short, long)]
        encoding: Option<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 担当者名の変換表を表示
    Staff {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 設定を初期値に戻す
        #[arg(long)]
        reset: bool,

        /// 名簿の文字コード
        #[arg(long)]
        encoding: Option<String>,

        /// 宿泊者名の表示 (plain/honorific)
        #[arg(long)]
        name_style: Option<NameStyle>,

        /// 控えラベル (front-desk-only/front-desk-and-guest)
        #[arg(long)]
        copies: Option<CopyMode>,

        /// 担当者名の変換方向 (bidirectional/to-localized-only)
        #[arg(long)]
        translation: Option<TranslationMode>,

        /// 1部屋の氏名 (all/first)
        #[arg(long)]
        names_per_room: Option<NamesPerRoom>,

        /// 担当者名の追加定義（JSON）
        #[arg(long)]
        staff_file: Option<PathBuf>,

        /// 本文・ラベル定義（JSON）
        #[arg(long)]
        content_file: Option<PathBuf>,

        /// ロゴ画像
        #[arg(long)]
        logo: Option<PathBuf>,

        /// 印刷用HTMLの出力先
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// 出力関連オプション
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// 出力ファイル（既定: 設定値）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 出力形式 (html/json)
    #[arg(short, long, default_value = "html")]
    pub format: OutputFormat,

    /// 名簿の文字コード（既定: 設定値）
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// ロゴ画像（既定: 設定値）
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// HTMLを開いたときに印刷ダイアログを出さない
    #[arg(long)]
    pub no_auto_print: bool,
}

/// レター表示形式の上書き
#[derive(Args, Clone, Debug, Default)]
pub struct RenderFlags {
    /// 敬称を付ける（様 / Mr./Ms.）
    #[arg(long)]
    pub honorific: bool,

    /// お客様控えも付ける
    #[arg(long)]
    pub guest_copy: bool,

    /// 担当者名をローマ字→日本語の方向のみ変換
    #[arg(long)]
    pub one_way: bool,

    /// 1部屋に複数名いる場合も先頭の1名のみ表示
    #[arg(long)]
    pub first_name_only: bool,
}

impl RenderFlags {
    /// 指定されたフラグだけ設定値を上書き
    pub fn apply(&self, config: &mut Config) {
        if self.honorific {
            config.render.name_style = NameStyle::Honorific;
        }
        if self.guest_copy {
            config.render.copies = CopyMode::FrontDeskAndGuest;
        }
        if self.one_way {
            config.render.translation = TranslationMode::ToLocalizedOnly;
        }
        if self.first_name_only {
            config.render.names_per_room = NamesPerRoom::First;
        }
    }
}

impl OutputArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output = output.clone();
        } else if self.format == OutputFormat::Json
            && config.output.extension().is_some_and(|e| e == "html")
        {
            config.output.set_extension("json");
        }
        if let Some(encoding) = &self.encoding {
            config.encoding = encoding.clone();
        }
        if let Some(logo) = &self.logo {
            config.logo_path = Some(logo.clone());
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "print" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use html or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
