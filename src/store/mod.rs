//! 結果台帳モジュール
//!
//! 照合結果を results.xlsx に1行ずつ追記する。追記は
//! 全行読み込み → 行追加 → 全体書き直し（小規模な台帳前提）。

use crate::error::{ResumeAiError, Result};
use crate::matcher::MatchReport;
use calamine::{open_workbook, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// デフォルトの台帳ファイル名
pub const DEFAULT_STORE_FILE: &str = "results.xlsx";

/// 台帳のヘッダ行
pub const STORE_HEADERS: [&str; 4] = [
    "Resume File",
    "Match Score",
    "Found Keywords",
    "Missing Keywords",
];

/// 台帳の1行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRow {
    pub resume_file: String,
    pub match_score: String,
    pub found_keywords: String,
    pub missing_keywords: String,
}

impl ResultRow {
    pub fn from_report(report: &MatchReport) -> Self {
        Self {
            resume_file: report.resume_file.clone(),
            match_score: report.score_label(),
            found_keywords: report.found.join(", "),
            missing_keywords: report.missing.join(", "),
        }
    }
}

/// 台帳の既存行を全件読み込む（ファイルがなければ空）
pub fn load_rows(path: &Path) -> Result<Vec<ResultRow>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| ResumeAiError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(result) => {
            result.map_err(|e| ResumeAiError::ExcelRead(format!("{}: {}", path.display(), e)))?
        }
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::new();

    // 先頭行はヘッダ
    for row in range.rows().skip(1) {
        let cell = |i: usize| row.get(i).map(|c| c.to_string()).unwrap_or_default();

        rows.push(ResultRow {
            resume_file: cell(0),
            match_score: cell(1),
            found_keywords: cell(2),
            missing_keywords: cell(3),
        });
    }

    Ok(rows)
}

/// 1行追記する（ファイルがなければヘッダ付きで新規作成）
pub fn append_row(path: &Path, row: ResultRow) -> Result<()> {
    let mut rows = load_rows(path)?;
    rows.push(row);
    save_rows(path, &rows)
}

/// 複数行まとめて追記する（batchモード用）
pub fn append_rows(path: &Path, new_rows: Vec<ResultRow>) -> Result<()> {
    let mut rows = load_rows(path)?;
    rows.extend(new_rows);
    save_rows(path, &rows)
}

fn save_rows(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();

    for (col, header) in STORE_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| ResumeAiError::ExcelWrite(e.to_string()))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_string(r, 0, &row.resume_file)
            .and_then(|ws| ws.write_string(r, 1, &row.match_score))
            .and_then(|ws| ws.write_string(r, 2, &row.found_keywords))
            .and_then(|ws| ws.write_string(r, 3, &row.missing_keywords))
            .map_err(|e| ResumeAiError::ExcelWrite(e.to_string()))?;
    }

    worksheet
        .set_column_width(0, 28)
        .and_then(|ws| ws.set_column_width(1, 12))
        .and_then(|ws| ws.set_column_width(2, 48))
        .and_then(|ws| ws.set_column_width(3, 48))
        .map_err(|e| ResumeAiError::ExcelWrite(e.to_string()))?;

    // 一旦バッファに生成してから書く。ロック中のファイルを
    // 途中まで書いて壊すことがないようにする。
    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ResumeAiError::ExcelWrite(e.to_string()))?;

    std::fs::write(path, &buffer).map_err(|e| classify_write_error(path, e))?;

    Ok(())
}

fn classify_write_error(path: &Path, e: std::io::Error) -> ResumeAiError {
    // Excelで開いたままの台帳は PermissionDenied になる
    if e.kind() == std::io::ErrorKind::PermissionDenied {
        ResumeAiError::StoreLocked(path.display().to_string())
    } else {
        ResumeAiError::Io(e)
    }
}
