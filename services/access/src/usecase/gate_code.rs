use anyhow::anyhow;
use chrono::{NaiveDate, Utc};
use rand::RngExt;

use crate::domain::repository::GatePassRepository;
use crate::domain::types::{GATE_CODE_LEN, GatePass};
use crate::error::AccessServiceError;

/// Charset for daily gate codes (uppercase alphanumeric, 36 symbols —
/// better minimum entropy than 4 numeric digits at the same length).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..GATE_CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub struct RotateGateCodeUseCase<G>
where
    G: GatePassRepository,
{
    pub passes: G,
}

impl<G> RotateGateCodeUseCase<G>
where
    G: GatePassRepository,
{
    /// Return the gate code for `date`, generating and persisting one only
    /// if none exists yet. Idempotent: repeated or concurrent invocations
    /// for the same date converge on a single stored code.
    pub async fn execute(&self, date: NaiveDate) -> Result<GatePass, AccessServiceError> {
        if let Some(existing) = self.passes.find_by_date(date).await? {
            return Ok(existing);
        }

        let pass = GatePass {
            date,
            code: generate_code(),
            created_at: Utc::now(),
        };

        if self.passes.insert(&pass).await? {
            return Ok(pass);
        }

        // Lost the insert race — the date key is already taken, so the
        // winner's code is authoritative.
        self.passes
            .find_by_date(date)
            .await?
            .ok_or_else(|| anyhow!("gate pass for {date} vanished after insert conflict").into())
    }
}
