use chrono::{Duration, Utc};

use gatepass_access::error::AccessServiceError;
use gatepass_access::usecase::otp::{VerifyOtpInput, VerifyOtpUseCase};

use crate::helpers::{MockOtpChallengeRepo, test_challenge};

fn verify_usecase(challenges: MockOtpChallengeRepo) -> VerifyOtpUseCase<MockOtpChallengeRepo> {
    VerifyOtpUseCase {
        challenges,
        max_attempts: 5,
    }
}

#[tokio::test]
async fn should_verify_correct_code_exactly_once() {
    let challenges = MockOtpChallengeRepo::new(vec![test_challenge("08012345678", "123456")]);
    let challenges_handle = challenges.challenges_handle();
    let uc = verify_usecase(challenges);

    let output = uc
        .execute(VerifyOtpInput {
            phone: "08012345678".to_owned(),
            code: "123456".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(output.phone.local(), "08012345678");
    assert!(
        challenges_handle.lock().unwrap().is_empty(),
        "challenge consumed on success"
    );

    // Replaying the same code must fail: the challenge is gone.
    let replay = uc
        .execute(VerifyOtpInput {
            phone: "08012345678".to_owned(),
            code: "123456".to_owned(),
        })
        .await;
    assert!(
        matches!(replay, Err(AccessServiceError::NoActiveChallenge)),
        "expected NoActiveChallenge on replay, got {replay:?}"
    );
}

#[tokio::test]
async fn should_verify_with_any_input_shape_of_the_same_number() {
    let uc = verify_usecase(MockOtpChallengeRepo::new(vec![test_challenge(
        "08012345678",
        "123456",
    )]));

    // Challenge was keyed by the local form; the caller verifies with the
    // international form.
    uc.execute(VerifyOtpInput {
        phone: "+2348012345678".to_owned(),
        code: "123456".to_owned(),
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn should_count_wrong_guesses() {
    let challenges = MockOtpChallengeRepo::new(vec![test_challenge("08012345678", "123456")]);
    let challenges_handle = challenges.challenges_handle();
    let uc = verify_usecase(challenges);

    let result = uc
        .execute(VerifyOtpInput {
            phone: "08012345678".to_owned(),
            code: "000000".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AccessServiceError::InvalidCode)),
        "expected InvalidCode, got {result:?}"
    );
    let challenges = challenges_handle.lock().unwrap();
    assert_eq!(challenges.len(), 1, "challenge survives an early wrong guess");
    assert_eq!(challenges[0].attempts, 1);
}

#[tokio::test]
async fn should_invalidate_challenge_at_attempt_limit() {
    let mut challenge = test_challenge("08012345678", "123456");
    challenge.attempts = 4; // one guess left out of 5
    let challenges = MockOtpChallengeRepo::new(vec![challenge]);
    let challenges_handle = challenges.challenges_handle();
    let uc = verify_usecase(challenges);

    let result = uc
        .execute(VerifyOtpInput {
            phone: "08012345678".to_owned(),
            code: "000000".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AccessServiceError::TooManyAttempts)),
        "expected TooManyAttempts, got {result:?}"
    );
    assert!(
        challenges_handle.lock().unwrap().is_empty(),
        "exhausted challenge is consumed"
    );

    // Even the correct code is now useless; a fresh one must be requested.
    let after = uc
        .execute(VerifyOtpInput {
            phone: "08012345678".to_owned(),
            code: "123456".to_owned(),
        })
        .await;
    assert!(matches!(after, Err(AccessServiceError::NoActiveChallenge)));
}

#[tokio::test]
async fn should_treat_expired_challenge_as_absent() {
    let mut challenge = test_challenge("08012345678", "123456");
    challenge.expires_at = Utc::now() - Duration::seconds(1);
    let challenges = MockOtpChallengeRepo::new(vec![challenge]);
    let challenges_handle = challenges.challenges_handle();
    let uc = verify_usecase(challenges);

    let result = uc
        .execute(VerifyOtpInput {
            phone: "08012345678".to_owned(),
            code: "123456".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AccessServiceError::NoActiveChallenge)),
        "expected NoActiveChallenge, got {result:?}"
    );
    assert!(
        challenges_handle.lock().unwrap().is_empty(),
        "stale row removed on the way out"
    );
}

#[tokio::test]
async fn should_error_when_no_challenge_pending() {
    let uc = verify_usecase(MockOtpChallengeRepo::empty());

    let result = uc
        .execute(VerifyOtpInput {
            phone: "08012345678".to_owned(),
            code: "123456".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AccessServiceError::NoActiveChallenge)),
        "expected NoActiveChallenge, got {result:?}"
    );
}
