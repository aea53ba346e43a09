use chrono::{Duration, Utc};
use rand::RngExt;

use gatepass_auth_types::phone::PhoneNumber;

use crate::domain::repository::{OtpChallengeRepository, OtpSender, ResidentRepository};
use crate::domain::types::{OTP_LEN, OTP_TTL_SECS, OtpChallenge};
use crate::error::AccessServiceError;

fn generate_code() -> String {
    let mut rng = rand::rng();
    format!(
        "{:0width$}",
        rng.random_range(0..1_000_000u32),
        width = OTP_LEN
    )
}

// ── IssueOtp ─────────────────────────────────────────────────────────────────

pub struct IssueOtpInput {
    pub phone: String,
}

#[derive(Debug)]
pub struct IssueOtpOutput {
    pub phone: PhoneNumber,
}

pub struct IssueOtpUseCase<R, C, S>
where
    R: ResidentRepository,
    C: OtpChallengeRepository,
    S: OtpSender,
{
    pub residents: R,
    pub challenges: C,
    pub sender: S,
}

impl<R, C, S> IssueOtpUseCase<R, C, S>
where
    R: ResidentRepository,
    C: OtpChallengeRepository,
    S: OtpSender,
{
    pub async fn execute(
        &self,
        input: IssueOtpInput,
    ) -> Result<IssueOtpOutput, AccessServiceError> {
        // 1. Normalize → 400 on an unrecognized shape
        let phone = PhoneNumber::parse(&input.phone)?;

        // 2. Allow-list gate: only registered residents receive a code → 403
        self.residents
            .find_by_phone(phone.local())
            .await?
            .ok_or(AccessServiceError::PhoneNotRegistered)?;

        // 3. Generate the code
        let code = generate_code();

        // 4. Dispatch before persisting: a failed send leaves no pending
        //    challenge, so the user can simply retry.
        self.sender.send_code(&phone, &code).await?;

        // 5. Upsert the challenge — re-issuing invalidates any prior code
        //    for this phone.
        let now = Utc::now();
        let challenge = OtpChallenge {
            phone: phone.local().to_owned(),
            code,
            expires_at: now + Duration::seconds(OTP_TTL_SECS),
            attempts: 0,
            created_at: now,
        };
        self.challenges.upsert(&challenge).await?;

        // The code itself never travels back to the caller.
        Ok(IssueOtpOutput { phone })
    }
}

// ── VerifyOtp ────────────────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub phone: String,
    pub code: String,
}

#[derive(Debug)]
pub struct VerifyOtpOutput {
    pub phone: PhoneNumber,
}

pub struct VerifyOtpUseCase<C>
where
    C: OtpChallengeRepository,
{
    pub challenges: C,
    /// Wrong guesses allowed before the challenge is invalidated.
    pub max_attempts: u32,
}

impl<C> VerifyOtpUseCase<C>
where
    C: OtpChallengeRepository,
{
    pub async fn execute(
        &self,
        input: VerifyOtpInput,
    ) -> Result<VerifyOtpOutput, AccessServiceError> {
        let phone = PhoneNumber::parse(&input.phone)?;

        let challenge = self
            .challenges
            .find_by_phone(phone.local())
            .await?
            .ok_or(AccessServiceError::NoActiveChallenge)?;

        // Expiry is checked here, not enforced by storage; a stale row is
        // treated as absent and removed on the way out.
        if challenge.is_expired() {
            self.challenges.delete(phone.local()).await?;
            return Err(AccessServiceError::NoActiveChallenge);
        }

        if challenge.code != input.code {
            // Bounded guessing per challenge: past the limit the challenge
            // is consumed and the user must request a fresh code.
            if challenge.attempts + 1 >= self.max_attempts as i32 {
                self.challenges.delete(phone.local()).await?;
                return Err(AccessServiceError::TooManyAttempts);
            }
            self.challenges.record_failed_attempt(phone.local()).await?;
            return Err(AccessServiceError::InvalidCode);
        }

        // Exactly-once: consume the challenge so the same code cannot be
        // replayed after success.
        self.challenges.delete(phone.local()).await?;

        Ok(VerifyOtpOutput { phone })
    }
}
