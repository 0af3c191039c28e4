//! 語彙処理モジュール
//!
//! トークン化・ストップワード判定・語幹抽出をまとめた語彙モデル。
//! プロセス起動時に一度だけ構築し、読み取り専用の参照で各処理へ渡す。

use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

/// 英語ストップワード（機能語・高頻度語）
///
/// キーワード抽出側のみで適用する。履歴書側の語集合は絞らない。
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if",
    "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in",
    "out", "on", "off", "over", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "can", "cannot", "could", "may", "might", "must", "shall", "should",
    "will", "would", "just", "also", "etc", "via", "per", "within",
    "without", "across", "among", "upon", "toward", "towards", "onto",
];

lazy_static! {
    // アルファベット連続のみをトークンとして切り出す（数字・記号は境界）
    static ref TOKEN_RE: Regex = Regex::new(r"\p{Alphabetic}+").unwrap();
}

/// 語彙モデル
///
/// ストップワード集合とSnowball英語ステマーを保持する。
pub struct Lexicon {
    stop_words: HashSet<String>,
    stemmer: Stemmer,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::with_extra_stop_words(&[])
    }

    /// 設定の追加ストップワードを取り込んで構築
    pub fn with_extra_stop_words(extra: &[String]) -> Self {
        let mut stop_words: HashSet<String> = ENGLISH_STOP_WORDS
            .iter()
            .map(|w| w.to_string())
            .collect();
        for word in extra {
            stop_words.insert(word.to_lowercase());
        }

        Self {
            stop_words,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// テキストを小文字アルファベットのトークン列に分解
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        TOKEN_RE
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// 語幹を返す（"managed" → "manag" など）
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).to_string()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
