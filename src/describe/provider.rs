//! 프로바이더 선택 및 chat completions 클라이언트
//!
//! 세 프로바이더 모두 OpenAI 호환 `/chat/completions` 엔드포인트를 사용하며
//! URL, 모델, API 키 환경변수만 다릅니다.
//!
//! 선택 규칙:
//! 1. `API_PROVIDER`가 가리키는 프로바이더의 키가 있으면 사용
//! 2. 없으면 Groq → OpenAI → DeepSeek 순서로 키가 있는 첫 프로바이더
//! 3. 모두 없으면 `ConfigurationMissing`

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::{DescribeError, DescriptionProvider};

/// 기본 타임아웃 (초)
const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// 간결한 소개글용 최대 토큰
const DEFAULT_MAX_TOKENS: u32 = 200;
const DEFAULT_TEMPERATURE: f32 = 0.7;

// ============================================================================
// Environment
// ============================================================================

/// 비어 있지 않은 환경변수 값
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// ProviderKind
// ============================================================================

/// 지원 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Groq,
    OpenAi,
    DeepSeek,
}

impl ProviderKind {
    /// 폴백 우선순위
    pub const PRIORITY: [ProviderKind; 3] =
        [ProviderKind::Groq, ProviderKind::OpenAi, ProviderKind::DeepSeek];

    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "groq",
            ProviderKind::OpenAi => "openai",
            ProviderKind::DeepSeek => "deepseek",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "groq" => Some(ProviderKind::Groq),
            "openai" => Some(ProviderKind::OpenAi),
            "deepseek" => Some(ProviderKind::DeepSeek),
            _ => None,
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "https://api.groq.com/openai/v1/chat/completions",
            ProviderKind::OpenAi => "https://api.openai.com/v1/chat/completions",
            ProviderKind::DeepSeek => "https://api.deepseek.com/v1/chat/completions",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "llama3-8b-8192",
            ProviderKind::OpenAi => "gpt-3.5-turbo",
            ProviderKind::DeepSeek => "deepseek-chat",
        }
    }

    pub fn key_env(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "GROQ_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::DeepSeek => "DEEPSEEK_API_KEY",
        }
    }

    pub fn url_env(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "GROQ_API_URL",
            ProviderKind::OpenAi => "OPENAI_API_URL",
            ProviderKind::DeepSeek => "DEEPSEEK_API_URL",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Settings
// ============================================================================

/// 선택된 프로바이더 설정
#[derive(Clone)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    pub api_key: String,
    pub url: Url,
    pub model: String,
}

// API 키는 로그에 남기지 않음
impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("kind", &self.kind)
            .field("url", &self.url.as_str())
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl ProviderSettings {
    /// 키와 환경변수 URL 오버라이드로 생성
    fn resolve(
        kind: ProviderKind,
        api_key: String,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, DescribeError> {
        let raw_url = lookup(kind.url_env()).unwrap_or_else(|| kind.default_url().to_string());
        let url = Url::parse(&raw_url).map_err(|e| {
            tracing::error!("Invalid {} value '{}': {}", kind.url_env(), raw_url, e);
            DescribeError::ConfigurationMissing
        })?;

        Ok(Self {
            kind,
            api_key,
            url,
            model: kind.default_model().to_string(),
        })
    }
}

/// 키가 설정된 프로바이더 목록 (우선순위 순)
pub fn available_providers(lookup: &dyn Fn(&str) -> Option<String>) -> Vec<ProviderKind> {
    ProviderKind::PRIORITY
        .into_iter()
        .filter(|kind| lookup(kind.key_env()).is_some())
        .collect()
}

/// 프로바이더 선택
pub fn select_provider(
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<ProviderSettings, DescribeError> {
    let preferred = lookup("API_PROVIDER").and_then(|name| {
        let kind = ProviderKind::from_name(&name);
        if kind.is_none() {
            tracing::warn!("Unknown API_PROVIDER '{}', ignoring", name);
        }
        kind
    });

    if let Some(kind) = preferred {
        if let Some(key) = lookup(kind.key_env()) {
            tracing::info!("Using {} as description provider", kind);
            return ProviderSettings::resolve(kind, key, lookup);
        }
        tracing::warn!(
            "API key not configured for {}, checking other providers",
            kind
        );
    }

    for kind in ProviderKind::PRIORITY {
        if let Some(key) = lookup(kind.key_env()) {
            tracing::info!("Using {} as description provider", kind);
            return ProviderSettings::resolve(kind, key, lookup);
        }
    }

    tracing::error!("No description provider API key configured");
    Err(DescribeError::ConfigurationMissing)
}

// ============================================================================
// DescribeConfig
// ============================================================================

/// 생성 요청 파라미터
#[derive(Debug, Clone)]
pub struct DescribeConfig {
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl DescribeConfig {
    /// 환경변수 오버라이드 적용
    ///
    /// `DESCRIBE_TIMEOUT_SECS`, `DESCRIBE_MAX_TOKENS`, `DESCRIBE_TEMPERATURE`
    /// 값이 잘못되면 기본값을 유지합니다.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(secs) = parse_var::<u64>(lookup, "DESCRIBE_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(tokens) = parse_var::<u32>(lookup, "DESCRIBE_MAX_TOKENS") {
            config.max_tokens = tokens;
        }
        if let Some(temperature) = parse_var::<f32>(lookup, "DESCRIBE_TEMPERATURE") {
            if temperature.is_finite() {
                config.temperature = temperature.clamp(0.0, 2.0);
            } else {
                tracing::warn!("Ignoring non-finite DESCRIBE_TEMPERATURE: {}", temperature);
            }
        }

        config
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &dyn Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {} value: {}", key, raw);
            None
        }
    }
}

// ============================================================================
// ChatCompletionClient
// ============================================================================

/// Chat completions 요청 본문
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// OpenAI 호환 chat completions 클라이언트
pub struct ChatCompletionClient {
    settings: ProviderSettings,
    config: DescribeConfig,
    client: reqwest::Client,
}

impl ChatCompletionClient {
    /// # Arguments
    /// * `settings` - 선택된 프로바이더
    /// * `config` - 타임아웃 / 토큰 / temperature
    pub fn new(settings: ProviderSettings, config: DescribeConfig) -> Result<Self, DescribeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DescribeError::UpstreamConnection {
                provider: settings.kind.name().to_string(),
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            settings,
            config,
            client,
        })
    }

    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    fn provider(&self) -> String {
        self.settings.kind.name().to_string()
    }

    fn map_send_error(&self, e: reqwest::Error) -> DescribeError {
        if e.is_timeout() {
            tracing::error!("Timeout connecting to {} API", self.settings.kind);
            DescribeError::UpstreamTimeout {
                provider: self.provider(),
            }
        } else {
            tracing::error!("Connection error with {} API: {}", self.settings.kind, e);
            DescribeError::UpstreamConnection {
                provider: self.provider(),
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl DescriptionProvider for ChatCompletionClient {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, DescribeError> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(self.settings.url.clone())
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let message = extract_error_message(&body);
            tracing::error!(
                "{} API error: {} - {}",
                self.settings.kind,
                status.as_u16(),
                message
            );
            return Err(DescribeError::UpstreamBadStatus {
                provider: self.provider(),
                status: status.as_u16(),
                message,
            });
        }

        extract_content(&body).map_err(|message| {
            tracing::error!("Unexpected response shape from {}: {}", self.settings.kind, message);
            DescribeError::UpstreamMalformedResponse {
                provider: self.provider(),
                message,
            }
        })
    }

    fn name(&self) -> &str {
        self.settings.kind.name()
    }
}

/// `choices[0].message.content` 추출
fn extract_content(body: &str) -> Result<String, String> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| format!("invalid JSON: {}", e))?;

    value
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| "missing choices[0].message.content".to_string())
}

/// `{"error": {"message": ...}}` 형식이면 메시지, 아니면 본문 그대로
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

// ============================================================================
// Tests
// ============================================================================
