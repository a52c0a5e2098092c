use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SyncConfig;
use crate::scoring::Candidate;

/// Flat per-candidate row understood by the spreadsheet endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRow {
    pub name: String,
    pub school: String,
    pub division: String,
    pub academic: String,
    pub individual: u32,
    pub group: u32,
    pub special: u32,
    pub pub_lead: u32,
    pub guild_lead: u32,
    pub innovation: u32,
    pub community: u32,
    pub published: u32,
    pub trainings: u32,
    pub interview_total: f64,
    pub grand_total: f64,
}

impl From<&Candidate> for SheetRow {
    fn from(candidate: &Candidate) -> Self {
        let breakdown = candidate.breakdown();
        Self {
            name: candidate.name.clone(),
            school: candidate.school.clone(),
            division: candidate.division.clone(),
            academic: candidate.academic_label().to_string(),
            individual: breakdown.individual,
            group: breakdown.group,
            special: breakdown.special,
            pub_lead: breakdown.pub_lead,
            guild_lead: breakdown.guild_lead,
            innovation: breakdown.innovation,
            community: breakdown.community,
            published: breakdown.published,
            trainings: breakdown.trainings,
            interview_total: breakdown.interview_total,
            grand_total: breakdown.grand_total,
        }
    }
}

/// One-way, single-attempt transmission of computed results.
///
/// `send` reports `false` for any transport failure and never retries. Send a
/// single candidate with `std::slice::from_ref`.
pub trait SyncGateway: Send + Sync {
    fn send(&self, candidates: &[Candidate]) -> impl Future<Output = bool> + Send;
}

/// Gateway posting [`SheetRow`] arrays to a spreadsheet web-app endpoint.
///
/// The shared secret, when configured, travels as the `token` query parameter.
/// Without an endpoint every send reports `false`.
pub struct SheetsSyncGateway {
    client: reqwest::Client,
    endpoint: Option<String>,
    token: Option<String>,
}

impl SheetsSyncGateway {
    pub fn new(config: SyncConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ospa-scorer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
            token: config.token,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    async fn post(&self, endpoint: &str, rows: &[SheetRow]) -> Result<(), reqwest::Error> {
        let mut request = self.client.post(endpoint).json(rows);
        if let Some(token) = &self.token {
            request = request.query(&[("token", token.as_str())]);
        }
        request.send().await?.error_for_status()?;
        Ok(())
    }
}

impl fmt::Debug for SheetsSyncGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsSyncGateway")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl SyncGateway for SheetsSyncGateway {
    async fn send(&self, candidates: &[Candidate]) -> bool {
        let Some(endpoint) = self.endpoint.as_deref() else {
            debug!("sync endpoint not configured, skipping");
            return false;
        };

        let rows: Vec<SheetRow> = candidates.iter().map(SheetRow::from).collect();
        match self.post(endpoint, &rows).await {
            Ok(()) => {
                info!(rows = rows.len(), "candidates synced to sheet");
                true
            }
            Err(err) => {
                warn!(error = %err, rows = rows.len(), "sheet sync failed");
                false
            }
        }
    }
}
