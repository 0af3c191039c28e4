//! resume-ai-rust
//!
//! 履歴書PDFと求人票テキストのキーワードマッチ解析ライブラリ:
//! - extractor: PDFテキスト抽出
//! - matcher: キーワード抽出と照合スコア算出
//! - store: 結果台帳（results.xlsx）への追記

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod lexicon;
pub mod matcher;
pub mod scanner;
pub mod store;

pub use error::{ResumeAiError, Result};
pub use lexicon::Lexicon;
pub use matcher::{analyze, MatchReport};
pub use store::ResultRow;
