//! PDFテキスト抽出モジュール

use crate::error::{ResumeAiError, Result};
use lopdf::Document;
use std::path::Path;

/// PDFから全ページのテキストを抽出して連結する
///
/// テキスト層のないページ（スキャン画像など）は読み飛ばす。
/// 戻り値は小文字化済み。PDF自体が開けない場合はエラー。
pub fn extract_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ResumeAiError::FileNotFound(path.display().to_string()));
    }

    let doc = Document::load(path)
        .map_err(|e| ResumeAiError::PdfParse(format!("{}: {}", path.display(), e)))?;

    Ok(extract_document_text(&doc))
}

/// メモリ上のPDFバイト列からテキストを抽出する
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes).map_err(|e| ResumeAiError::PdfParse(e.to_string()))?;

    Ok(extract_document_text(&doc))
}

fn extract_document_text(doc: &Document) -> String {
    let mut text = String::new();

    for (page_num, _object_id) in doc.get_pages() {
        // ページ単位の抽出失敗は文書全体の失敗にしない
        if let Ok(page_text) = doc.extract_text(&[page_num]) {
            text.push_str(&page_text);
        }
    }

    text.to_lowercase()
}
