//! `jobport-wizard` -- drives one application wizard session against the
//! portal backend.
//!
//! Reads the applicant's answers from a JSON file, prefills from the
//! backend, submits every step in order and prints the review summary.
//!
//! # Environment variables
//!
//! | Variable                 | Required | Default        | Description                            |
//! |--------------------------|----------|----------------|----------------------------------------|
//! | `PORTAL_API_URL`         | yes      | --             | Backend base URL, e.g. `http://host:8000` |
//! | `PORTAL_TOKEN`           | yes      | --             | Credential from the auth store         |
//! | `PORTAL_ROLE`            | yes      | --             | `jobseeker`, `student`, `employer`, `academe` or `admin` |
//! | `PORTAL_ANSWERS_FILE`    | no       | `answers.json` | Answers keyed by api key               |
//! | `PORTAL_SUBMIT_DELAY_MS` | no       | `0`            | Pause after each successful submission |
//! | `REQUEST_TIMEOUT_SECS`   | no       | `30`           | HTTP request timeout                   |
//!
//! # Answers file
//!
//! ```json
//! {
//!   "steps": { "personal-info": { "first_name": "Ana" } },
//!   "skip": ["other-training", "professional-license"]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobport_client::{
    ClientConfig, ClientError, HttpBackend, NextOutcome, PortalBackend, SubmissionGateway,
    WizardRunner,
};
use jobport_core::endpoints::ApiKey;
use jobport_core::error::CoreError;
use jobport_core::review::ReviewSection;
use jobport_core::types::Payload;
use jobport_core::wizard::WizardSession;

#[derive(Debug, thiserror::Error)]
enum WizardError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Cannot read answers file {path}: {message}")]
    Answers { path: String, message: String },

    #[error("Step '{0}' is incomplete; fix the answers file and run again")]
    Incomplete(&'static str),
}

/// Applicant answers, keyed by api key.
#[derive(Debug, Default, Deserialize)]
struct Answers {
    #[serde(default)]
    steps: HashMap<String, Payload>,
    #[serde(default)]
    skip: Vec<String>,
}

impl Answers {
    async fn load(path: &Path) -> Result<Self, WizardError> {
        let answers_error = |message: String| WizardError::Answers {
            path: path.display().to_string(),
            message,
        };
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| answers_error(e.to_string()))?;
        let answers: Self = serde_json::from_str(&text).map_err(|e| answers_error(e.to_string()))?;

        for key in answers.steps.keys().chain(answers.skip.iter()) {
            ApiKey::parse(key).map_err(|e| answers_error(e.to_string()))?;
        }
        Ok(answers)
    }

    fn fields(&self, key: ApiKey) -> Option<&Payload> {
        self.steps.get(key.as_str())
    }

    fn skips(&self, key: ApiKey) -> bool {
        self.skip.iter().any(|k| k == key.as_str())
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobport_wizard=info,jobport_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    let session = WizardSession::from_role_name(&config.role);
    if session.is_dead_end() {
        tracing::warn!(
            role = %config.role,
            "No steps available for this account. Contact support or log out.",
        );
        return;
    }

    let answers = Answers::load(&config.answers_file).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load answers");
        std::process::exit(1);
    });

    let backend = HttpBackend::from_config(&config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build HTTP client");
        std::process::exit(1);
    });

    tracing::info!(
        session_id = %session.id(),
        role = %config.role,
        api_url = %backend.api_url(),
        steps = session.steps().len(),
        "Starting application wizard",
    );

    let gateway = SubmissionGateway::new(backend).with_submit_delay(config.submit_delay);
    let mut runner = WizardRunner::new(session, gateway);

    match run(&mut runner, &answers).await {
        Ok(summary) => print_summary(&summary),
        Err(e) => {
            tracing::error!(error = %e, "Wizard stopped");
            std::process::exit(1);
        }
    }
}

/// Fill, submit or skip every step, then load the review.
async fn run<B: PortalBackend>(
    runner: &mut WizardRunner<B>,
    answers: &Answers,
) -> Result<Vec<ReviewSection>, WizardError> {
    runner.prefill().await?;

    while let Some(step) = runner.session().active_step() {
        let Some(api_key) = step.api_key else {
            break;
        };

        if let Some(fields) = answers.fields(api_key) {
            runner.session_mut().set_fields(fields.clone())?;
        }

        if step.can_skip && answers.skips(api_key) {
            runner.skip()?;
            continue;
        }

        match runner.next().await? {
            NextOutcome::Advanced { .. } => {}
            NextOutcome::Blocked { violations } => {
                for violation in &violations {
                    tracing::warn!(
                        step = step.label,
                        field = %violation.field,
                        rule = %violation.rule_type,
                        "{}",
                        violation.message,
                    );
                }
                return Err(WizardError::Incomplete(step.label));
            }
            NextOutcome::Terminal => break,
        }
    }

    Ok(runner.summary().await?)
}

fn print_summary(sections: &[ReviewSection]) {
    for section in sections {
        println!("== {} ==", section.title);
        for (i, record) in section.records.iter().enumerate() {
            if section.records.len() > 1 {
                println!("-- #{} --", i + 1);
            }
            for entry in &record.entries {
                println!("{:<28} {}", entry.label, entry.value);
            }
        }
        println!();
    }
}
