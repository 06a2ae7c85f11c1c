//! CLI 모듈
//!
//! adopta-faq CLI 명령어 정의 및 구현

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::describe::{available_providers, env_lookup, select_provider, PetDescriber, PetProfile};
use crate::knowledge::{AnswerResult, FaqResolver, KnowledgeBase, ResolverConfig};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "adopta-faq")]
#[command(version, about = "AdoptaFácil FAQ 응답 시스템", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 질문에 대한 응답 (퍼지 → 키워드 → 인텐트 → 기본 응답)
    Ask {
        /// 사용자 질문
        query: String,

        /// 퍼지 매칭 임계값 (0~100)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// JSON 출력
        #[arg(long)]
        json: bool,
    },

    /// 완전 일치 검색
    Exact {
        /// 사용자 질문
        query: String,
    },

    /// 유사 질문 상위 K개
    Top {
        /// 사용자 질문
        query: String,

        /// 결과 개수 제한
        #[arg(short, long, default_value = "3")]
        limit: usize,

        /// 퍼지 매칭 임계값 (0~100)
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// 여러 질문 일괄 처리 (한 줄에 한 질문)
    Batch {
        /// 입력 파일 (없으면 stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// 퍼지 매칭 임계값 (0~100)
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// FAQ 목록
    List {
        /// 결과 개수 제한
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// 입양 소개글 생성
    Describe {
        #[arg(long)]
        name: String,

        #[arg(long)]
        species: String,

        #[arg(long)]
        breed: String,

        /// Macho / Hembra / M / F
        #[arg(long)]
        sex: String,

        #[arg(long)]
        personality: String,

        #[arg(long)]
        health: String,

        #[arg(long, default_value = "")]
        notes: String,

        /// 개선할 기존 소개글
        #[arg(long)]
        current: Option<String>,
    },

    /// 상태 확인
    Status,
}

// ============================================================================
// CLI Runner
// ============================================================================

/// CLI 명령어 실행
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ask {
            query,
            threshold,
            json,
        } => cmd_ask(&query, threshold, json),
        Commands::Exact { query } => cmd_exact(&query),
        Commands::Top {
            query,
            limit,
            threshold,
        } => cmd_top(&query, limit, threshold),
        Commands::Batch { file, threshold } => cmd_batch(file, threshold).await,
        Commands::List { limit } => cmd_list(limit),
        Commands::Describe {
            name,
            species,
            breed,
            sex,
            personality,
            health,
            notes,
            current,
        } => {
            let profile = PetProfile {
                name,
                species,
                breed,
                sex,
                personality,
                health,
                notes,
                current_description: current,
            };
            cmd_describe(profile).await
        }
        Commands::Status => cmd_status(),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

/// 임계값 오버라이드를 반영한 resolver 생성
fn build_resolver(threshold: Option<f64>) -> Result<FaqResolver> {
    let mut config = ResolverConfig::default();
    if let Some(t) = threshold {
        if !(0.0..=100.0).contains(&t) {
            bail!("임계값은 0에서 100 사이여야 합니다: {}", t);
        }
        config.fuzzy_threshold = t;
    }

    let kb = Arc::new(KnowledgeBase::load());
    Ok(FaqResolver::with_config(kb, config))
}

/// 질문 명령어 (ask)
fn cmd_ask(query: &str, threshold: Option<f64>, json: bool) -> Result<()> {
    let resolver = build_resolver(threshold)?;
    let answer = resolver.resolve(query);

    if json {
        let out = serde_json::to_string_pretty(&answer).context("JSON 직렬화 실패")?;
        println!("{}", out);
        return Ok(());
    }

    print_answer(query, &answer);
    Ok(())
}

/// 완전 일치 명령어 (exact)
fn cmd_exact(query: &str) -> Result<()> {
    let resolver = build_resolver(None)?;

    match resolver.resolve_exact(query) {
        Some(m) => {
            println!("[OK] FAQ #{} 완전 일치", m.index);
            println!("   질문: {}", m.entry.question);
            println!("   답변: {}", m.entry.answer);
        }
        None => {
            println!("[!] 완전 일치하는 질문이 없습니다: \"{}\"", query);
        }
    }

    Ok(())
}

/// 유사 질문 명령어 (top)
fn cmd_top(query: &str, limit: usize, threshold: Option<f64>) -> Result<()> {
    let resolver = build_resolver(threshold)?;

    println!("[*] 유사 질문 검색 중: \"{}\"", query);

    let results = resolver.suggestions_with_limit(query, limit);
    if results.is_empty() {
        println!(
            "\n[!] 임계값 {:.0} 이상인 질문이 없습니다.",
            resolver.config().fuzzy_threshold
        );
        return Ok(());
    }

    println!("\n[OK] 유사 질문 ({} 건):\n", results.len());

    for (i, result) in results.iter().enumerate() {
        println!(
            "{}. [점수: {:.2}] FAQ #{}",
            i + 1,
            result.score,
            result.index
        );
        println!("   질문: {}", result.entry.question);
        println!("   답변: {}", truncate_text(&result.entry.answer, 120));
        println!();
    }

    Ok(())
}

/// 일괄 처리 명령어 (batch)
///
/// 질문마다 blocking 태스크를 띄워 동시에 처리하고, 입력 순서대로 출력합니다.
async fn cmd_batch(file: Option<PathBuf>, threshold: Option<f64>) -> Result<()> {
    let input = read_batch_input(file).await?;

    let queries = parse_batch_input(&input);
    if queries.is_empty() {
        println!("[!] 처리할 질문이 없습니다.");
        return Ok(());
    }

    let resolver = Arc::new(build_resolver(threshold)?);
    tracing::debug!("Resolving {} queries", queries.len());

    let handles: Vec<_> = queries
        .iter()
        .map(|q| {
            let resolver = Arc::clone(&resolver);
            let q = q.clone();
            tokio::task::spawn_blocking(move || resolver.resolve(&q))
        })
        .collect();

    let mut answers = Vec::with_capacity(handles.len());
    for handle in handles {
        answers.push(handle.await.context("질문 처리 태스크 실패")?);
    }

    for (query, answer) in queries.iter().zip(&answers) {
        print_answer(query, answer);
        println!();
    }

    println!("[OK] 완료: {} 건", answers.len());
    Ok(())
}

/// 목록 명령어 (list)
fn cmd_list(limit: usize) -> Result<()> {
    let kb = KnowledgeBase::load();

    if kb.is_empty() {
        println!("[!] 등록된 FAQ가 없습니다.");
        return Ok(());
    }

    println!("[OK] 등록된 FAQ ({} / {} 건):\n", limit.min(kb.len()), kb.len());

    for (i, entry) in kb.entries().iter().take(limit).enumerate() {
        println!("  #{:<4} {}", i, truncate_text(&entry.question, 60));
        if entry.keywords.is_empty() {
            println!("        키워드: -");
        } else {
            println!("        키워드: {}", entry.keywords.join(", "));
        }
    }

    Ok(())
}

/// 소개글 생성 명령어 (describe)
async fn cmd_describe(profile: PetProfile) -> Result<()> {
    let describer = PetDescriber::from_env().context(
        "소개글 생성기를 초기화할 수 없습니다.\n\
         설정: export GROQ_API_KEY=your-key (또는 OPENAI_API_KEY, DEEPSEEK_API_KEY)",
    )?;

    println!(
        "[*] {} 소개글 생성 중 ({})...",
        profile.name,
        describer.provider_name()
    );

    match describer.describe(&profile).await {
        Ok(text) => {
            println!("\n[OK] 생성된 소개글:\n");
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            bail!("소개글 생성 실패 [{} / {}]: {}", e.code(), e.status_code(), e)
        }
    }
}

/// 상태 명령어 (status)
fn cmd_status() -> Result<()> {
    println!("adopta-faq v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let stats = KnowledgeBase::load().stats();
    println!("[OK] 등록된 FAQ: {} 건", stats.entry_count);
    println!(
        "     키워드: {} 개 (키워드 없는 FAQ {} 건)",
        stats.keyword_count, stats.entries_without_keywords
    );
    println!("     총 답변 크기: {}", format_bytes(stats.total_answer_bytes));

    let config = ResolverConfig::default();
    println!(
        "[*] 퍼지 임계값: {:.0}, 추천 개수: {}",
        config.fuzzy_threshold, config.top_k
    );

    let providers = available_providers(&env_lookup);
    if providers.is_empty() {
        println!("[!] 소개글 API 키: 미설정");
        println!("    설정: export GROQ_API_KEY=your-key");
        return Ok(());
    }

    let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
    println!("[OK] 소개글 API 키: {}", names.join(", "));

    match select_provider(&env_lookup) {
        Ok(settings) => println!(
            "[OK] 선택된 프로바이더: {} ({})",
            settings.kind, settings.model
        ),
        Err(e) => println!("[!] 프로바이더 선택 실패: {}", e),
    }

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

fn print_answer(query: &str, answer: &AnswerResult) {
    match answer.score {
        Some(score) => println!("[{}] [점수: {:.2}] {}", answer.strategy, score, query),
        None => println!("[{}] {}", answer.strategy, query),
    }
    if let Some(ref question) = answer.matched_question {
        println!("   질문: {}", question);
    }
    println!("   답변: {}", answer.text);
}

/// 일괄 입력 읽기 (파일 또는 stdin, 워커 스레드를 막지 않음)
async fn read_batch_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("입력 파일 읽기 실패: {}", path.display())),
        None => tokio::task::spawn_blocking(read_stdin)
            .await
            .context("stdin 읽기 태스크 실패")?,
    }
}

/// stdin 전체 읽기 (blocking)
fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("stdin 읽기 실패")?;
    Ok(buf)
}

/// 빈 줄을 제외한 질문 목록
fn parse_batch_input(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// 텍스트 자르기 (UTF-8 안전)
fn truncate_text(text: &str, max_chars: usize) -> String {
    let cleaned = text.replace('\n', " ").replace('\r', "");
    let cleaned = cleaned.trim();

    if cleaned.chars().count() <= max_chars {
        cleaned.to_string()
    } else {
        let truncated: String = cleaned.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

/// 바이트 크기 포맷팅
fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;

    if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

// ============================================================================
// Tests
// ============================================================================
