//! 문자열 유사도 - token-sort ratio
//!
//! 두 문자열을 토큰 단위로 정렬한 뒤 Levenshtein 거리로 유사도를 계산합니다.
//! 단어 순서는 무시하고 철자 차이는 반영합니다.
//!
//! ratio = 100 * (1 - distance(a, b) / max(len(a), len(b)))

// ============================================================================
// Tokenization
// ============================================================================

/// 토큰 분리
///
/// 소문자 변환 후 영숫자가 아닌 모든 문자(공백, `¿`, `?` 등 구두점)에서 분리합니다.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// 토큰 정렬 문자열
///
/// 토큰을 사전순으로 정렬하고 공백 하나로 다시 연결합니다.
pub fn token_sort(text: &str) -> String {
    let mut tokens = tokenize(text);
    tokens.sort_unstable();
    tokens.join(" ")
}

// ============================================================================
// Distance / Ratio
// ============================================================================

/// Levenshtein 편집 거리 (유니코드 문자 단위)
///
/// 삽입, 삭제, 치환 비용은 모두 1입니다.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // 이전 행과 현재 행만 유지
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// 이미 정규화된 두 문자열의 ratio (0.0 ~ 100.0)
///
/// 둘 다 비어 있으면 100입니다.
pub fn normalized_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }

    let distance = levenshtein(a, b);
    100.0 * (1.0 - distance as f64 / max_len as f64)
}

/// Token-sort ratio
///
/// # Arguments
/// * `a` - 첫 번째 문자열
/// * `b` - 두 번째 문자열
///
/// # Returns
/// 유사도 스코어 (0.0 ~ 100.0)
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    normalized_ratio(&token_sort(a), &token_sort(b))
}

// ============================================================================
// Tests
// ============================================================================
