//! Describe 모듈 - 반려동물 입양 소개글 생성 클라이언트
//!
//! FAQ 파이프라인과 독립적인 외부 협력 서비스입니다.
//! OpenAI 호환 chat completions API(Groq, OpenAI, DeepSeek) 중 설정된
//! 프로바이더 하나를 골라 호출합니다. 재시도는 호출 측 책임입니다.
//!
//! ## 사용법
//! ```rust,ignore
//! let describer = PetDescriber::from_env()?;
//! let text = describer.describe(&profile).await?;
//! ```

mod prompt;
mod provider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use prompt::{build_prompt, clean_quotes, gender_hint, SYSTEM_PROMPT};
pub use provider::{
    available_providers, env_lookup, select_provider, ChatCompletionClient, DescribeConfig,
    ProviderKind, ProviderSettings,
};

// ============================================================================
// Errors
// ============================================================================

/// 소개글 생성 에러
#[derive(Debug, Error)]
pub enum DescribeError {
    /// 사용 가능한 API 키 없음 (재시도 불가)
    #[error("no description provider configured; set one of GROQ_API_KEY, OPENAI_API_KEY, DEEPSEEK_API_KEY")]
    ConfigurationMissing,

    /// 요청 검증 실패
    #[error("invalid pet profile: {0}")]
    InvalidRequest(String),

    /// 응답 시간 초과
    #[error("{provider} did not respond in time")]
    UpstreamTimeout { provider: String },

    /// 네트워크 연결 실패
    #[error("could not reach {provider}: {message}")]
    UpstreamConnection { provider: String, message: String },

    /// 2xx 외 응답
    #[error("{provider} returned status {status}: {message}")]
    UpstreamBadStatus {
        provider: String,
        status: u16,
        message: String,
    },

    /// 응답 구조 불일치
    #[error("unexpected response from {provider}: {message}")]
    UpstreamMalformedResponse { provider: String, message: String },
}

impl DescribeError {
    /// 에러 종류 식별자 (상태 신호)
    pub fn code(&self) -> &'static str {
        match self {
            DescribeError::ConfigurationMissing => "configuration_missing",
            DescribeError::InvalidRequest(_) => "invalid_request",
            DescribeError::UpstreamTimeout { .. } => "upstream_timeout",
            DescribeError::UpstreamConnection { .. } => "upstream_connection_error",
            DescribeError::UpstreamBadStatus { .. } => "upstream_bad_status",
            DescribeError::UpstreamMalformedResponse { .. } => "upstream_malformed_response",
        }
    }

    /// HTTP 상태 코드 매핑
    pub fn status_code(&self) -> u16 {
        match self {
            DescribeError::ConfigurationMissing => 500,
            DescribeError::InvalidRequest(_) => 422,
            DescribeError::UpstreamTimeout { .. } => 504,
            DescribeError::UpstreamConnection { .. } => 503,
            DescribeError::UpstreamBadStatus { .. } => 502,
            DescribeError::UpstreamMalformedResponse { .. } => 502,
        }
    }
}

// ============================================================================
// Request
// ============================================================================

const MAX_NAME_CHARS: usize = 255;
const MAX_SPECIES_CHARS: usize = 100;
const MAX_TEXT_CHARS: usize = 500;
const MAX_CURRENT_DESCRIPTION_CHARS: usize = 1000;
const ALLOWED_SEX: &[&str] = &["macho", "hembra", "m", "f"];

/// 반려동물 정보 (필드명은 기존 API와 호환)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especie")]
    pub species: String,
    #[serde(rename = "raza")]
    pub breed: String,
    /// Macho / Hembra / M / F
    #[serde(rename = "sexo")]
    pub sex: String,
    #[serde(rename = "personalidad")]
    pub personality: String,
    #[serde(rename = "salud")]
    pub health: String,
    #[serde(rename = "observaciones", default)]
    pub notes: String,
    /// 사용자가 이미 작성한 소개글 (있으면 개선 요청)
    #[serde(
        rename = "descripcion_actual",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub current_description: Option<String>,
}

impl PetProfile {
    /// 필수 값 / 길이 / 성별 검증
    pub fn validate(&self) -> Result<(), DescribeError> {
        let required = [
            ("nombre", &self.name, MAX_NAME_CHARS),
            ("especie", &self.species, MAX_SPECIES_CHARS),
            ("raza", &self.breed, MAX_SPECIES_CHARS),
            ("personalidad", &self.personality, MAX_TEXT_CHARS),
            ("salud", &self.health, MAX_TEXT_CHARS),
        ];

        for (field, value, max) in required {
            if value.trim().is_empty() {
                return Err(DescribeError::InvalidRequest(format!("{} is required", field)));
            }
            check_length(field, value, max)?;
        }

        check_length("observaciones", &self.notes, MAX_TEXT_CHARS)?;
        if let Some(ref current) = self.current_description {
            check_length("descripcion_actual", current, MAX_CURRENT_DESCRIPTION_CHARS)?;
        }

        let sex = self.sex.trim().to_lowercase();
        if !ALLOWED_SEX.contains(&sex.as_str()) {
            return Err(DescribeError::InvalidRequest(format!(
                "sexo must be one of Macho, Hembra, M, F (got '{}')",
                self.sex
            )));
        }

        Ok(())
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), DescribeError> {
    if value.chars().count() > max {
        return Err(DescribeError::InvalidRequest(format!(
            "{} exceeds {} characters",
            field, max
        )));
    }
    Ok(())
}

// ============================================================================
// DescriptionProvider Trait
// ============================================================================

/// 텍스트 생성 백엔드 트레이트
#[async_trait]
pub trait DescriptionProvider: Send + Sync {
    /// 시스템 메시지 + 프롬프트로 텍스트 1개 생성
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, DescribeError>;

    /// 프로바이더 이름
    fn name(&self) -> &str;
}

// ============================================================================
// PetDescriber
// ============================================================================

/// 입양 소개글 생성기
pub struct PetDescriber {
    provider: Box<dyn DescriptionProvider>,
}

impl PetDescriber {
    pub fn new(provider: Box<dyn DescriptionProvider>) -> Self {
        Self { provider }
    }

    /// 환경변수에서 프로바이더를 골라 생성
    pub fn from_env() -> Result<Self, DescribeError> {
        let settings = select_provider(&env_lookup)?;
        let config = DescribeConfig::from_lookup(&env_lookup);
        let client = ChatCompletionClient::new(settings, config)?;
        Ok(Self::new(Box::new(client)))
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// 소개글 생성
    ///
    /// 검증 → 프롬프트 구성 → 생성 → 따옴표 정리 순서입니다.
    pub async fn describe(&self, pet: &PetProfile) -> Result<String, DescribeError> {
        pet.validate()?;

        tracing::info!(
            "Generating description for '{}' using {}",
            pet.name,
            self.provider.name()
        );

        let prompt = build_prompt(pet);
        tracing::debug!("Prompt built: {} chars", prompt.chars().count());

        let raw = self.provider.generate(SYSTEM_PROMPT, &prompt).await?;
        let description = clean_quotes(&raw);

        if description.is_empty() {
            return Err(DescribeError::UpstreamMalformedResponse {
                provider: self.provider.name().to_string(),
                message: "empty description".to_string(),
            });
        }

        tracing::info!("Description generated ({} chars)", description.chars().count());
        Ok(description)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProvider(&'static str);

    #[async_trait]
    impl DescriptionProvider for StaticProvider {
        async fn generate(&self, _system: &str, prompt: &str) -> Result<String, DescribeError> {
            assert!(prompt.contains("DATOS DE LA MASCOTA"));
            Ok(self.0.to_string())
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    fn profile() -> PetProfile {
        PetProfile {
            name: "Toby".to_string(),
            species: "Perro".to_string(),
            breed: "Labrador".to_string(),
            sex: "Macho".to_string(),
            personality: "Enérgico".to_string(),
            health: "Sano".to_string(),
            notes: String::new(),
            current_description: None,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(profile().validate().is_ok());
        let mut p = profile();
        p.sex = " f ".to_string();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_required_and_sex() {
        let mut p = profile();
        p.name = "  ".to_string();
        assert_eq!(p.validate().unwrap_err().code(), "invalid_request");

        let mut p = profile();
        p.sex = "otro".to_string();
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("sexo"));
    }

    #[test]
    fn test_validate_lengths() {
        let mut p = profile();
        p.breed = "x".repeat(101);
        assert!(p.validate().is_err());

        let mut p = profile();
        p.current_description = Some("y".repeat(1001));
        assert!(p.validate().is_err());

        // 멀티바이트 문자는 글자 수로 계산
        let mut p = profile();
        p.species = "ñ".repeat(100);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_profile_wire_format() {
        let json = r#"{
            "nombre": "Mía", "especie": "Gato", "raza": "Siamés", "sexo": "Hembra",
            "personalidad": "Curiosa", "salud": "Vacunada", "observaciones": "Tímida"
        }"#;
        let p: PetProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Mía");
        assert_eq!(p.current_description, None);

        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["raza"], "Siamés");
        assert!(value.get("descripcion_actual").is_none());
    }

    #[test]
    fn test_error_codes_distinct() {
        let errors = [
            DescribeError::ConfigurationMissing,
            DescribeError::InvalidRequest("x".into()),
            DescribeError::UpstreamTimeout { provider: "groq".into() },
            DescribeError::UpstreamConnection { provider: "groq".into(), message: "x".into() },
            DescribeError::UpstreamBadStatus { provider: "groq".into(), status: 401, message: "x".into() },
            DescribeError::UpstreamMalformedResponse { provider: "groq".into(), message: "x".into() },
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert_eq!(errors[2].status_code(), 504);
        assert_eq!(errors[3].status_code(), 503);
    }

    #[tokio::test]
    async fn test_describe_cleans_output() {
        let describer = PetDescriber::new(Box::new(StaticProvider("  \"Soy Toby,   un perro feliz\"  ")));
        let text = describer.describe(&profile()).await.unwrap();
        assert_eq!(text, "Soy Toby, un perro feliz");
    }

    #[tokio::test]
    async fn test_describe_rejects_invalid_profile() {
        let describer = PetDescriber::new(Box::new(StaticProvider("unused")));
        let mut p = profile();
        p.health = String::new();
        let err = describer.describe(&p).await.unwrap_err();
        assert!(matches!(err, DescribeError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_describe_empty_output_is_malformed() {
        let describer = PetDescriber::new(Box::new(StaticProvider("\"\"")));
        let err = describer.describe(&profile()).await.unwrap_err();
        assert_eq!(err.code(), "upstream_malformed_response");
    }
}
