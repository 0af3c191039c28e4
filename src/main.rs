use clap::Parser;
use resume_ai_rust::{cli, config, error, extractor, lexicon, matcher, scanner, store};

use cli::{Cli, Commands};
use config::Config;
use error::{ResumeAiError, Result};
use indicatif::ProgressBar;
use lexicon::Lexicon;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => {}
        // 入力不備・台帳ロックは警告扱い（セッションは正常終了）
        Err(e @ ResumeAiError::EmptyJobDescription) | Err(e @ ResumeAiError::StoreLocked(_)) => {
            println!("⚠ {}", e);
        }
        Err(e) => {
            eprintln!("❌ エラー: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            resume,
            jd,
            jd_file,
            store: store_path,
            output,
            no_save,
        } => {
            println!("📄 resume-ai-rust - 履歴書解析\n");

            // 求人票テキストの確保（未指定なら対話入力）
            let jd_text = resolve_job_description(jd, jd_file)?;
            if jd_text.trim().is_empty() {
                return Err(ResumeAiError::EmptyJobDescription);
            }

            // 1. PDFテキスト抽出
            println!("[1/3] PDFからテキストを抽出中...");
            let resume_text = extractor::extract_text(&resume)?;
            if cli.verbose {
                println!("  抽出文字数: {}", resume_text.chars().count());
            }
            println!("✔ 抽出完了\n");

            // 2. キーワード照合
            println!("[2/3] キーワードを照合中...");
            let lexicon = Lexicon::with_extra_stop_words(&config.extra_stop_words);
            let mut report = matcher::analyze(&lexicon, &jd_text, &resume_text);
            report.resume_file = resume
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            println!("✔ 照合完了\n");

            print_report(&report);

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&report)?;
                std::fs::write(&output, json)?;
                println!("✔ JSONを保存: {}", output.display());
            }

            if no_save {
                println!("\n✅ 解析完了（台帳への保存はスキップ）");
                return Ok(());
            }

            // 3. 台帳へ追記
            println!("[3/3] 結果を保存中...");
            let store_path = store_path.unwrap_or_else(|| config.store_path.clone());
            match store::append_row(&store_path, store::ResultRow::from_report(&report)) {
                Ok(()) => println!("✔ 結果を保存: {}", store_path.display()),
                // 表示済みの解析結果はそのまま生かし、警告だけ出す
                Err(ResumeAiError::StoreLocked(path)) => {
                    println!("⚠ {} を閉じてから再実行してください", path);
                }
                Err(e) => return Err(e),
            }

            println!("\n✅ 解析完了");
        }

        Commands::Batch {
            folder,
            jd_file,
            store: store_path,
        } => {
            println!("🚀 resume-ai-rust - 一括照合\n");

            if !jd_file.exists() {
                return Err(ResumeAiError::FileNotFound(jd_file.display().to_string()));
            }
            let jd_text = std::fs::read_to_string(&jd_file)?;
            if jd_text.trim().is_empty() {
                return Err(ResumeAiError::EmptyJobDescription);
            }

            // 1. PDFスキャン
            println!("[1/3] 履歴書PDFをスキャン中...");
            let resumes = scanner::scan_folder(&folder)?;
            println!("✔ {}件のPDFを検出\n", resumes.len());

            if resumes.is_empty() {
                return Err(ResumeAiError::NoResumesFound(folder.display().to_string()));
            }

            // 2. 照合
            println!("[2/3] キーワードを照合中...");
            let lexicon = Lexicon::with_extra_stop_words(&config.extra_stop_words);
            let pb = ProgressBar::new(resumes.len() as u64);
            let mut reports = Vec::new();

            for resume in &resumes {
                match extractor::extract_text(&resume.path) {
                    Ok(text) => {
                        let mut report = matcher::analyze(&lexicon, &jd_text, &text);
                        report.resume_file = resume.file_name.clone();
                        reports.push(report);
                    }
                    // 壊れたPDFは読み飛ばして続行
                    Err(e) => pb.println(format!("⚠ {}: {}", resume.file_name, e)),
                }
                pb.inc(1);
            }
            pb.finish_and_clear();
            println!("✔ {}件を照合\n", reports.len());

            for report in &reports {
                println!("  {} - {}", report.resume_file, report.score_label());
            }

            // 3. 台帳へ追記
            println!("\n[3/3] 結果を保存中...");
            let store_path = store_path.unwrap_or_else(|| config.store_path.clone());
            let rows = reports.iter().map(store::ResultRow::from_report).collect();
            store::append_rows(&store_path, rows)?;
            println!("✔ 結果を保存: {}", store_path.display());

            println!("\n✅ 一括照合完了");
        }

        Commands::History {
            store: store_path,
            limit,
        } => {
            let store_path = store_path.unwrap_or_else(|| config.store_path.clone());
            let rows = store::load_rows(&store_path)?;

            if rows.is_empty() {
                println!("解析履歴はありません: {}", store_path.display());
                return Ok(());
            }

            let limit = limit.unwrap_or(rows.len());
            println!("📊 解析履歴: 全{}件（新しい順）\n", rows.len());

            for row in rows.iter().rev().take(limit) {
                println!("  {} - {}", row.resume_file, row.match_score);
                if !row.missing_keywords.is_empty() {
                    println!("    不足: {}", row.missing_keywords);
                }
            }
        }

        Commands::Config { set_store, show } => {
            let mut config = config;

            if let Some(path) = set_store {
                config.set_store_path(path)?;
                println!("✔ 結果台帳のパスを設定しました: {}", config.store_path.display());
            }

            if show {
                println!("設定ファイル: {}", Config::config_path()?.display());
                println!("  store_path: {}", config.store_path.display());
                let extras = if config.extra_stop_words.is_empty() {
                    "（なし）".to_string()
                } else {
                    config.extra_stop_words.join(", ")
                };
                println!("  extra_stop_words: {}", extras);
            }
        }
    }

    Ok(())
}

/// 求人票テキストを --jd / --jd-file / 対話入力の順で解決する
fn resolve_job_description(jd: Option<String>, jd_file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = jd {
        return Ok(text);
    }

    if let Some(path) = jd_file {
        if !path.exists() {
            return Err(ResumeAiError::FileNotFound(path.display().to_string()));
        }
        return Ok(std::fs::read_to_string(&path)?);
    }

    // $EDITOR を開いて貼り付けてもらう
    let edited = dialoguer::Editor::new()
        .edit("")
        .map_err(|e| ResumeAiError::Prompt(e.to_string()))?;

    Ok(edited.unwrap_or_default())
}

fn print_report(report: &matcher::MatchReport) {
    println!("🎯 マッチスコア: {}", report.score_label());
    println!("\n検出キーワード:");
    println!("  {}", report.found_joined());
    println!("\n不足キーワード:");
    println!("  {}", report.missing_joined());
    println!();
}
