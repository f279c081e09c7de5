//! Application state: the validated question bank, the vocabulary catalog,
//! and the optional account-gateway client.
//!
//! Everything here is built once at startup and immutable afterwards, so the
//! state is plain owned data behind an `Arc` with no locks: handlers only
//! read.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::bank::QuestionBank;
use crate::catalog::VocabularyCatalog;
use crate::config::{load_bank_config_from_env, BankConfig};
use crate::domain::{Question, VocabularyItem};
use crate::gateway::AccountGateway;
use crate::seeds::{seed_questions, seed_vocabulary};

pub struct AppState {
    pub bank: QuestionBank,
    pub catalog: VocabularyCatalog,
    pub gateway: Option<AccountGateway>,
}

impl AppState {
    /// Build state from env: load config, merge with seeds, validate the
    /// corpus, init the gateway client. A malformed corpus is a startup
    /// failure, not a runtime one.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let cfg = load_bank_config_from_env().unwrap_or_default();

        let bank = QuestionBank::new(merge_questions(&cfg))?;
        let catalog = VocabularyCatalog::new(merge_vocabulary(&cfg))?;
        info!(
            target: "kotoba_backend",
            questions = bank.len(),
            vocabulary = catalog.all().len(),
            "Content loaded"
        );

        let gateway = AccountGateway::from_env();
        if let Some(gw) = &gateway {
            info!(target: "kotoba_backend", base_url = %gw.base_url, "Account gateway enabled.");
        } else {
            info!(target: "kotoba_backend", "Account gateway disabled (no ACCOUNT_API_KEY). Role/billing endpoints will report unavailable.");
        }

        Ok(Self { bank, catalog, gateway })
    }
}

/// Config questions first, then built-in seeds. A seed whose id collides
/// with a config entry is dropped so operators can override single items.
fn merge_questions(cfg: &BankConfig) -> Vec<Question> {
    let mut out: Vec<Question> = cfg
        .questions
        .iter()
        .map(|qc| Question {
            id: qc.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
            prompt: qc.prompt.clone(),
            options: qc.options.clone(),
            answer: qc.answer.clone(),
            level: qc.level,
        })
        .collect();

    for q in seed_questions() {
        if out.iter().any(|existing| existing.id == q.id) {
            warn!(target: "placement", id = %q.id, "Seed question overridden by config entry");
            continue;
        }
        out.push(q);
    }
    out
}

fn merge_vocabulary(cfg: &BankConfig) -> Vec<VocabularyItem> {
    let mut out: Vec<VocabularyItem> = cfg
        .vocabulary
        .iter()
        .map(|vc| VocabularyItem {
            id: vc.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
            glyph: vc.glyph.clone(),
            romaji: vc.romaji.clone(),
            level: vc.level,
            category: vc.category,
            meaning: vc.meaning.clone(),
        })
        .collect();

    for item in seed_vocabulary() {
        if out.iter().any(|existing| existing.id == item.id) {
            warn!(target: "kotoba_backend", id = %item.id, "Seed vocabulary overridden by config entry");
            continue;
        }
        out.push(item);
    }
    out
}
