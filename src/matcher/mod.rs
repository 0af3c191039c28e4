//! キーワード照合モジュール
//!
//! 求人票からキーワード集合を、履歴書から語集合を抽出し、
//! 集合の重なりからマッチスコアを算出する。
//!
//! キーワードは語幹（Snowball英語ステマー）で同値類にまとめ、
//! 照合は表層形・語幹のどちらか一方の一致で成立させる。
//! "manages" と "manage" のような活用違いを同一キーワードとして扱う。

mod types;

pub use types::{Keyword, MatchReport};

use crate::lexicon::Lexicon;
use std::collections::HashSet;

/// 求人票テキストからキーワード集合を抽出
///
/// アルファベットのみ・非ストップワードのトークンを対象に、
/// 語幹単位で重複を除く。表層形は最初に出現した形を残す。
pub fn extract_keywords(lexicon: &Lexicon, text: &str) -> Vec<Keyword> {
    let mut seen_stems = HashSet::new();
    let mut keywords = Vec::new();

    for token in lexicon.tokenize(text) {
        if lexicon.is_stop_word(&token) {
            continue;
        }

        let stem = lexicon.stem(&token);
        if seen_stems.insert(stem.clone()) {
            keywords.push(Keyword {
                surface: token,
                stem,
            });
        }
    }

    keywords
}

/// 履歴書テキストから語集合を抽出
///
/// 求人票側と違い品詞・ストップワードで絞らず、全アルファベット
/// トークンの表層形と語幹を1つの集合に入れる（再現率優先）。
pub fn extract_word_set(lexicon: &Lexicon, text: &str) -> HashSet<String> {
    let mut words = HashSet::new();

    for token in lexicon.tokenize(text) {
        words.insert(lexicon.stem(&token));
        words.insert(token);
    }

    words
}

/// 求人票と履歴書を照合してスコアを算出
///
/// score = found / キーワード総数 * 100（小数2桁丸め）。
/// キーワードが1つもない場合は 0。
pub fn analyze(lexicon: &Lexicon, jd_text: &str, resume_text: &str) -> MatchReport {
    let keywords = extract_keywords(lexicon, jd_text);
    let resume_words = extract_word_set(lexicon, resume_text);

    let mut found = Vec::new();
    let mut missing = Vec::new();

    for keyword in &keywords {
        if resume_words.contains(&keyword.surface) || resume_words.contains(&keyword.stem) {
            found.push(keyword.surface.clone());
        } else {
            missing.push(keyword.surface.clone());
        }
    }

    let score = if keywords.is_empty() {
        0.0
    } else {
        round2(found.len() as f64 / keywords.len() as f64 * 100.0)
    };

    MatchReport {
        resume_file: String::new(),
        score,
        found,
        missing,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::new()
    }

    #[test]
    fn test_extract_keywords_filters_stop_words() {
        let lex = lexicon();
        let keywords = extract_keywords(&lex, "Manage the marketing team and manage budgets.");

        let surfaces: Vec<&str> = keywords.iter().map(|k| k.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["manage", "marketing", "team", "budgets"]);
    }

    #[test]
    fn test_extract_keywords_dedups_by_stem() {
        let lex = lexicon();
        // "manage" と "manages"、"budget" と "budgets" はそれぞれ1キーワード
        let keywords = extract_keywords(&lex, "manage manages budget budgets");
        assert_eq!(keywords.len(), 2);
    }

    #[test]
    fn test_extract_word_set_keeps_stop_words() {
        let lex = lexicon();
        let words = extract_word_set(&lex, "I managed a team");

        assert!(words.contains("i"));
        assert!(words.contains("a"));
        assert!(words.contains("managed"));
        // 語幹も入る
        assert!(words.contains(&lex.stem("managed")));
    }

    #[test]
    fn test_analyze_inflected_resume() {
        let lex = lexicon();
        let report = analyze(
            &lex,
            "Manage the marketing team and manage budgets.",
            "I managed a marketing team of five.",
        );

        assert_eq!(report.found.len(), 3);
        assert_eq!(report.missing, vec!["budgets"]);
        assert_eq!(report.score, 75.0);
    }

    #[test]
    fn test_analyze_partition_property() {
        let lex = lexicon();
        let jd = "Design and build distributed systems in Rust with Kafka.";
        let report = analyze(&lex, jd, "Built services in Rust.");

        let total = extract_keywords(&lex, jd).len();
        assert_eq!(report.found.len() + report.missing.len(), total);
        assert!(report.score >= 0.0 && report.score <= 100.0);
    }

    #[test]
    fn test_analyze_empty_keyword_set() {
        let lex = lexicon();
        let report = analyze(&lex, "the and of to in 2024 %", "anything at all");

        assert!(report.found.is_empty());
        assert!(report.missing.is_empty());
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn test_analyze_full_match() {
        let lex = lexicon();
        let report = analyze(&lex, "rust kafka sql", "Kafka pipelines and SQL in Rust");

        assert!(report.missing.is_empty());
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn test_analyze_no_match() {
        let lex = lexicon();
        let report = analyze(&lex, "kubernetes terraform", "watercolor painting portfolio");

        assert!(report.found.is_empty());
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn test_analyze_idempotent() {
        let lex = lexicon();
        let jd = "Lead backend development with Python and PostgreSQL";
        let resume = "Backend developer, Python, MySQL";

        let a = analyze(&lex, jd, resume);
        let b = analyze(&lex, jd, resume);

        let set = |v: &[String]| v.iter().cloned().collect::<HashSet<_>>();
        assert_eq!(set(&a.found), set(&b.found));
        assert_eq!(set(&a.missing), set(&b.missing));
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(100.0 / 3.0 * 1.0), 33.33);
        assert_eq!(round2(2.0 / 3.0 * 100.0), 66.67);
        assert_eq!(round2(75.0), 75.0);
    }
}
