//! 퍼지 매처 - token-sort ratio 기반 질문 검색
//!
//! 모든 저장 질문과 쿼리의 유사도를 계산해 임계값 이상인 엔트리를 찾습니다.
//! 질문의 토큰 정렬 결과는 생성 시 한 번만 계산해 둡니다.
//!
//! 전수 비교(O(N·L²))이므로 FAQ가 크게 늘어나면 인덱스 기반 근사 검색으로
//! 교체해야 합니다.

use std::cmp::Ordering;
use std::sync::Arc;

use super::similarity::{normalized_ratio, token_sort, token_sort_ratio};
use super::store::{KnowledgeBase, MatchResult, Strategy};

/// 기본 유사도 임계값
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// 기본 top-K 개수
pub const DEFAULT_TOP_K: usize = 3;

// ============================================================================
// FuzzyMatcher
// ============================================================================

/// 퍼지 매처
pub struct FuzzyMatcher {
    kb: Arc<KnowledgeBase>,
    threshold: f64,
    /// 질문별 토큰 정렬 문자열 (엔트리 인덱스와 정렬됨)
    sorted_questions: Vec<String>,
}

impl FuzzyMatcher {
    /// 기본 임계값(50.0)으로 생성
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self::with_threshold(kb, DEFAULT_THRESHOLD)
    }

    /// 임계값을 지정하여 생성
    ///
    /// # Arguments
    /// * `kb` - 공유 지식 저장소
    /// * `threshold` - 최소 유사도 (0.0 ~ 100.0)
    pub fn with_threshold(kb: Arc<KnowledgeBase>, threshold: f64) -> Self {
        let sorted_questions = kb.questions().into_iter().map(token_sort).collect();
        Self {
            kb,
            threshold,
            sorted_questions,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// 최고 유사도 엔트리 검색
    ///
    /// 최댓값이 임계값 이상일 때만 반환합니다. 동점이면 저장 순서가 앞선
    /// 엔트리가 선택됩니다.
    pub fn find_best_match(&self, query: &str) -> Option<MatchResult<'_>> {
        let query_sorted = token_sort(query);

        let mut best: Option<(usize, f64)> = None;
        for (index, question) in self.sorted_questions.iter().enumerate() {
            let score = normalized_ratio(&query_sorted, question);
            // 엄격한 초과 비교로 먼저 나온 엔트리 유지
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, score) = best?;
        // NaN 임계값은 어떤 스코어도 통과하지 못함
        let accepted = score >= self.threshold;
        if !accepted {
            tracing::debug!(
                "Fuzzy best score {:.2} below threshold {:.2}",
                score,
                self.threshold
            );
            return None;
        }

        self.to_result(index, score)
    }

    /// 임계값 이상 상위 K개 검색
    ///
    /// 스코어 내림차순, 동점은 저장 순서 오름차순으로 정렬합니다.
    ///
    /// # Arguments
    /// * `query` - 사용자 질문
    /// * `k` - 최대 결과 수
    pub fn find_top_k(&self, query: &str, k: usize) -> Vec<MatchResult<'_>> {
        if k == 0 {
            return Vec::new();
        }

        let query_sorted = token_sort(query);

        let mut scored: Vec<(usize, f64)> = self
            .sorted_questions
            .iter()
            .enumerate()
            .map(|(index, question)| (index, normalized_ratio(&query_sorted, question)))
            .filter(|(_, score)| *score >= self.threshold)
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored.truncate(k);

        scored
            .into_iter()
            .filter_map(|(index, score)| self.to_result(index, score))
            .collect()
    }

    /// 두 문자열의 원시 유사도
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        token_sort_ratio(a, b)
    }

    fn to_result(&self, index: usize, score: f64) -> Option<MatchResult<'_>> {
        self.kb.get(index).map(|entry| MatchResult {
            entry,
            index,
            score,
            strategy: Strategy::Fuzzy,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::knowledge::store::FaqEntry;

    fn kb(questions: &[&str]) -> Arc<KnowledgeBase> {
        Arc::new(KnowledgeBase::from_entries(
            questions
                .iter()
                .enumerate()
                .map(|(i, q)| FaqEntry::new(*q, format!("answer {}", i), Vec::<String>::new()))
                .collect(),
        ))
    }

    #[test]
    fn test_exact_question_scores_100() {
        let matcher = FuzzyMatcher::new(Arc::new(KnowledgeBase::load()));
        let result = matcher.find_best_match("¿Qué es AdoptaFácil?").unwrap();
        assert_eq!(result.index, 0);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.strategy, Strategy::Fuzzy);
    }

    #[test]
    fn test_unaccented_query_matches() {
        let matcher = FuzzyMatcher::new(Arc::new(KnowledgeBase::load()));
        let result = matcher.find_best_match("que es adoptafacil").unwrap();
        assert_eq!(result.entry.question, "¿Qué es AdoptaFácil?");
        assert!(result.score >= 50.0);
    }

    #[test]
    fn test_below_threshold_returns_none() {
        let matcher = FuzzyMatcher::new(Arc::new(KnowledgeBase::load()));
        assert!(matcher.find_best_match("hola").is_none());
        assert!(matcher.find_best_match("xyzabc nonsense query").is_none());
    }

    #[test]
    fn test_tie_break_prefers_earlier_entry() {
        // 두 질문의 토큰 정렬 결과가 같으면 항상 동점
        let matcher = FuzzyMatcher::new(kb(&["gato perro", "perro gato", "otra cosa"]));
        let result = matcher.find_best_match("perro gato").unwrap();
        assert_eq!(result.index, 0);
        assert_eq!(result.entry.answer, "answer 0");
    }

    #[test]
    fn test_duplicate_question_first_wins() {
        let matcher = FuzzyMatcher::new(kb(&["uno", "dos", "uno"]));
        let result = matcher.find_best_match("uno").unwrap();
        assert_eq!(result.index, 0);
    }

    #[test]
    fn test_empty_knowledge_base() {
        let matcher = FuzzyMatcher::new(kb(&[]));
        assert!(matcher.find_best_match("hola").is_none());
        assert!(matcher.find_top_k("hola", 3).is_empty());
    }

    #[test]
    fn test_top_k_ordering() {
        let matcher =
            FuzzyMatcher::with_threshold(kb(&["abcd", "abcx", "abxx", "abcd", "zzzz"]), 40.0);
        let results = matcher.find_top_k("abcd", 10);

        let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        // 100, 100, 75, 50 (zzzz = 0 은 제외)
        assert_eq!(indices, vec![0, 3, 1, 2]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_top_k_limit() {
        let matcher = FuzzyMatcher::with_threshold(kb(&["abcd", "abcx", "abxx"]), 0.0);
        assert_eq!(matcher.find_top_k("abcd", 2).len(), 2);
        assert!(matcher.find_top_k("abcd", 0).is_empty());
    }

    #[test]
    fn test_threshold_monotonicity() {
        let base = Arc::new(KnowledgeBase::load());
        let query = "como adoptar una mascota";

        let mut previous: Option<HashSet<usize>> = None;
        for threshold in [0.0, 20.0, 40.0, 50.0, 60.0, 80.0, 100.0] {
            let matcher = FuzzyMatcher::with_threshold(base.clone(), threshold);
            let accepted: HashSet<usize> = matcher
                .find_top_k(query, base.len())
                .iter()
                .map(|r| r.index)
                .collect();
            if let Some(ref lower) = previous {
                assert!(accepted.is_subset(lower), "threshold {} widened the set", threshold);
            }
            previous = Some(accepted);
        }
    }

    #[test]
    fn test_nan_threshold_accepts_nothing() {
        let matcher = FuzzyMatcher::with_threshold(Arc::new(KnowledgeBase::load()), f64::NAN);
        for query in ["xyzabc nonsense query", "¿Qué es AdoptaFácil?"] {
            assert!(matcher.find_best_match(query).is_none());
            assert!(matcher.find_top_k(query, 1).is_empty());
        }
    }

    #[test]
    fn test_best_match_agrees_with_top_k() {
        let matcher = FuzzyMatcher::new(Arc::new(KnowledgeBase::load()));
        for query in ["requisitos para adoptar", "donar refugios", "contraseña recuperar"] {
            let best = matcher.find_best_match(query);
            let top = matcher.find_top_k(query, 1);
            assert_eq!(best.map(|r| r.index), top.first().map(|r| r.index));
        }
    }

    #[test]
    fn test_similarity_matches_free_function() {
        let matcher = FuzzyMatcher::new(kb(&[]));
        assert_eq!(
            matcher.similarity("b a", "a b"),
            token_sort_ratio("a b", "b a")
        );
    }
}
