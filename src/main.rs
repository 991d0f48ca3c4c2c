use anyhow::Context;
use clap::Parser;
use room_notice::cli::{Cli, Commands, OutputArgs, OutputFormat};
use room_notice::config::Config;
use room_notice::print::{HtmlPrintSurface, JsonPrintSurface, PrintSurface};
use room_notice::session::{read_file_event, Event, Outcome, Session};
use room_notice::{error, interactive};
use room_notice_common::{decode_roster, GuestDirectory, StaffTranslationTable};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut config = Config::load()?;

    match cli.command {
        Commands::Generate { csv, clerk, rooms, output, render } => {
            println!("🏨 room-notice - レター生成\n");
            output.apply(&mut config);
            render.apply(&mut config);

            let mut surface = print_surface(&config, &output)?;
            let mut session = Session::new(config.renderer()?);

            // 1. 名簿読み込み
            println!("[1/3] 名簿を読み込み中... ({})", config.encoding);
            let outcome = session.handle(read_file_event(&csv, &config.encoding), surface.as_mut())?;
            report(&outcome)?;

            // 2. 部屋番号入力
            println!("[2/3] 部屋番号を照合中...");
            for (index, room) in rooms.into_iter().enumerate() {
                if index > 0 {
                    session.handle(Event::AddRow, surface.as_mut())?;
                }
                let outcome = session.handle(Event::SetRow { index, room: room.clone() }, surface.as_mut())?;
                println!("  {} : {}", room, outcome.message());
            }

            // 3. 生成・印刷
            println!("[3/3] レターを生成中...");
            let outcome = session.handle(Event::Generate { clerk }, surface.as_mut())?;
            report(&outcome)?;
            println!("✔ 印刷用ファイル: {}", config.output.display());

            println!("\n✅ 完了");
        }

        Commands::Interactive { csv, clerk, output, render } => {
            println!("🏨 room-notice - 対話モード\n");
            output.apply(&mut config);
            render.apply(&mut config);

            let mut surface = print_surface(&config, &output)?;
            let mut session = Session::new(config.renderer()?);
            interactive::run_interactive(&mut session, surface.as_mut(), &config.encoding, csv, clerk)?;
        }

        Commands::Inspect { csv, encoding, json } => {
            let encoding = encoding.unwrap_or_else(|| config.encoding.clone());
            let bytes = std::fs::read(&csv).with_context(|| format!("read {}", csv.display()))?;
            let text = decode_roster(&bytes, &encoding)?;
            let (directory, stats) = GuestDirectory::from_roster_text(&text)?;

            if json {
                println!("{}", serde_json::to_string_pretty(directory.entries())?);
            } else {
                println!("名簿: {}", csv.display());
                println!("  部屋数: {}", directory.len());
                println!("  宿泊者数: {}", directory.guest_count());
                println!(
                    "  行数: {} (空行 {}, 列不足 {}, 不採用 {}, ヘッダ {})",
                    stats.lines,
                    stats.blank_lines,
                    stats.short_lines,
                    stats.rejected,
                    if stats.header_skipped { "あり" } else { "なし" }
                );
                if stats.replaced_chars > 0 {
                    println!("  ⚠ 読み取れない文字 {} 個を置き換えました", stats.replaced_chars);
                }
                println!("---");
                for entry in directory.iter() {
                    println!("  {} : {}", entry.room_id, entry.guests.join(", "));
                }
            }
        }

        Commands::Staff { json } => {
            let table: StaffTranslationTable = config.staff_table()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!("担当者名変換表 ({}名):", table.len());
                for entry in table.entries() {
                    println!("  {:<14} ⇔ {}", entry.romanized, entry.localized);
                }
            }
        }

        Commands::Config {
            show,
            reset,
            encoding,
            name_style,
            copies,
            translation,
            names_per_room,
            staff_file,
            content_file,
            logo,
            output,
        } => {
            let mut changed = false;
            if reset {
                config = Config::default();
                changed = true;
            }
            if let Some(v) = encoding {
                room_notice_common::decode::resolve_encoding(&v)?;
                config.encoding = v;
                changed = true;
            }
            if let Some(v) = name_style {
                config.render.name_style = v;
                changed = true;
            }
            if let Some(v) = copies {
                config.render.copies = v;
                changed = true;
            }
            if let Some(v) = translation {
                config.render.translation = v;
                changed = true;
            }
            if let Some(v) = names_per_room {
                config.render.names_per_room = v;
                changed = true;
            }
            if let Some(v) = staff_file {
                config.staff_file = Some(v);
                changed = true;
            }
            if let Some(v) = content_file {
                config.content_file = Some(v);
                changed = true;
            }
            if let Some(v) = logo {
                config.logo_path = Some(v);
                changed = true;
            }
            if let Some(v) = output {
                config.output = v;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  文字コード: {}", config.encoding);
                println!("  宿泊者名: {}", config.render.name_style);
                println!("  控え: {}", config.render.copies);
                println!("  担当者名変換: {}", config.render.translation);
                println!("  1部屋の氏名: {}", config.render.names_per_room);
                println!("  担当者定義: {}", display_opt(&config.staff_file));
                println!("  本文定義: {}", display_opt(&config.content_file));
                println!("  ロゴ: {}", display_opt(&config.logo_path));
                println!("  出力先: {}", config.output.display());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_surface(config: &Config, output: &OutputArgs) -> error::Result<Box<dyn PrintSurface>> {
    match output.format {
        OutputFormat::Json => Ok(Box::new(JsonPrintSurface::new(&config.output))),
        OutputFormat::Html => {
            let mut surface =
                HtmlPrintSurface::new(&config.output).auto_print(!output.no_auto_print);
            if let Some(logo) = &config.logo_path {
                surface = surface.with_logo(logo)?;
            }
            Ok(Box::new(surface))
        }
    }
}

/// 失敗結果はメッセージ付きでエラー終了
fn report(outcome: &Outcome) -> anyhow::Result<()> {
    if outcome.is_failure() {
        anyhow::bail!("{}", outcome.message());
    }
    println!("✔ {}", outcome.message());
    Ok(())
}

fn display_opt(path: &Option<std::path::PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "未設定".to_string())
}
