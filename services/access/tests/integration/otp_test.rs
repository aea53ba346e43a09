use gatepass_access::error::AccessServiceError;
use gatepass_access::usecase::otp::{IssueOtpInput, IssueOtpUseCase};

use crate::helpers::{
    MockOtpChallengeRepo, MockOtpSender, MockResidentRepo, test_challenge, test_resident,
};

#[tokio::test]
async fn should_issue_code_to_registered_resident() {
    let challenges = MockOtpChallengeRepo::empty();
    let challenges_handle = challenges.challenges_handle();
    let sender = MockOtpSender::new();
    let sent_handle = sender.sent_handle();

    let uc = IssueOtpUseCase {
        residents: MockResidentRepo::new(vec![test_resident("08012345678", false)]),
        challenges,
        sender,
    };

    let output = uc
        .execute(IssueOtpInput {
            phone: "+2348012345678".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(output.phone.local(), "08012345678");

    let sent = sent_handle.lock().unwrap();
    assert_eq!(sent.len(), 1, "expected exactly one dispatch");
    let (to, code) = &sent[0];
    assert_eq!(to, "+2348012345678", "dispatch uses the international form");
    assert_eq!(code.len(), 6);
    assert!(code.bytes().all(|b| b.is_ascii_digit()));

    let challenges = challenges_handle.lock().unwrap();
    assert_eq!(challenges.len(), 1);
    let challenge = &challenges[0];
    assert_eq!(challenge.phone, "08012345678");
    assert_eq!(&challenge.code, code, "stored code matches the dispatched one");
    assert_eq!(challenge.attempts, 0);
    assert!(challenge.expires_at > chrono::Utc::now());
}

#[tokio::test]
async fn should_converge_all_input_shapes_to_one_challenge_key() {
    // Local, bare-international, and plus-international forms of the same
    // number must all land on the same resident and challenge row.
    for input in ["08012345678", "2348012345678", "+2348012345678"] {
        let challenges = MockOtpChallengeRepo::empty();
        let challenges_handle = challenges.challenges_handle();

        let uc = IssueOtpUseCase {
            residents: MockResidentRepo::new(vec![test_resident("08012345678", false)]),
            challenges,
            sender: MockOtpSender::new(),
        };

        let output = uc
            .execute(IssueOtpInput {
                phone: input.to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(output.phone.local(), "08012345678", "input {input}");
        assert_eq!(challenges_handle.lock().unwrap()[0].phone, "08012345678");
    }
}

#[tokio::test]
async fn should_reject_unregistered_phone_without_dispatching() {
    let sender = MockOtpSender::new();
    let sent_handle = sender.sent_handle();

    let uc = IssueOtpUseCase {
        residents: MockResidentRepo::empty(),
        challenges: MockOtpChallengeRepo::empty(),
        sender,
    };

    let result = uc
        .execute(IssueOtpInput {
            phone: "08012345678".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AccessServiceError::PhoneNotRegistered)),
        "expected PhoneNotRegistered, got {result:?}"
    );
    assert!(sent_handle.lock().unwrap().is_empty(), "nothing dispatched");
}

#[tokio::test]
async fn should_reject_malformed_phone() {
    let uc = IssueOtpUseCase {
        residents: MockResidentRepo::new(vec![test_resident("08012345678", false)]),
        challenges: MockOtpChallengeRepo::empty(),
        sender: MockOtpSender::new(),
    };

    for input in ["12345", "0801234567", "+23480123456789", "O8012345678", ""] {
        let result = uc
            .execute(IssueOtpInput {
                phone: input.to_owned(),
            })
            .await;
        assert!(
            matches!(result, Err(AccessServiceError::InvalidPhoneFormat)),
            "input {input:?}: expected InvalidPhoneFormat, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_not_persist_challenge_when_dispatch_fails() {
    let challenges = MockOtpChallengeRepo::empty();
    let challenges_handle = challenges.challenges_handle();

    let uc = IssueOtpUseCase {
        residents: MockResidentRepo::new(vec![test_resident("08012345678", false)]),
        challenges,
        sender: MockOtpSender::failing(),
    };

    let result = uc
        .execute(IssueOtpInput {
            phone: "08012345678".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AccessServiceError::DispatchFailed)),
        "expected DispatchFailed, got {result:?}"
    );
    // A failed send leaves no pending challenge behind.
    assert!(challenges_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_replace_prior_challenge_on_reissue() {
    let challenges =
        MockOtpChallengeRepo::new(vec![test_challenge("08012345678", "111111")]);
    let challenges_handle = challenges.challenges_handle();
    let sender = MockOtpSender::new();
    let sent_handle = sender.sent_handle();

    let uc = IssueOtpUseCase {
        residents: MockResidentRepo::new(vec![test_resident("08012345678", false)]),
        challenges,
        sender,
    };

    uc.execute(IssueOtpInput {
        phone: "08012345678".to_owned(),
    })
    .await
    .unwrap();

    let challenges = challenges_handle.lock().unwrap();
    assert_eq!(challenges.len(), 1, "at most one challenge per phone");
    let (_, new_code) = &sent_handle.lock().unwrap()[0];
    assert_eq!(
        &challenges[0].code, new_code,
        "the freshly dispatched code replaced the prior one"
    );
    assert_eq!(challenges[0].attempts, 0, "attempt counter resets on reissue");
}
