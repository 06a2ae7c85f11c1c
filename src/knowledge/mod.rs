//! Knowledge 모듈 - FAQ 저장소 + 다단계 매칭
//!
//! - Store: 불변 FAQ 저장소 + 완전 일치 검색
//! - Similarity: token-sort ratio (Levenshtein)
//! - Fuzzy: 임계값 기반 최고 / 상위 K 검색
//! - Keyword: 키워드 부분 문자열 검색
//! - Intent: 인사 / 감사 / 작별 분류
//! - Resolver: 퍼지 → 키워드 → 인텐트 → 기본 응답

mod faqs;
mod store;
mod similarity;
mod fuzzy;
mod keyword;
mod intent;
mod resolver;

// Re-exports
pub use store::{
    FaqEntry, KnowledgeBase, KnowledgeStats, MatchResult, Strategy,
    normalize_question,
};
pub use similarity::{levenshtein, token_sort, token_sort_ratio, tokenize};
pub use fuzzy::{FuzzyMatcher, DEFAULT_THRESHOLD, DEFAULT_TOP_K};
pub use keyword::KeywordMatcher;
pub use intent::{Intent, IntentClassifier};
pub use resolver::{AnswerResult, FaqResolver, ResolverConfig, DEFAULT_REPLY, canned_reply};
