use chrono::{NaiveDate, Utc};

use gatepass_access::domain::types::GatePass;
use gatepass_access::usecase::gate_code::RotateGateCodeUseCase;

use crate::helpers::{MockGatePassRepo, RacingGatePassRepo};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
}

#[tokio::test]
async fn should_mint_code_on_first_fetch_of_a_day() {
    let passes = MockGatePassRepo::empty();
    let passes_handle = passes.passes_handle();
    let uc = RotateGateCodeUseCase { passes };

    let pass = uc.execute(day(23)).await.unwrap();

    assert_eq!(pass.date, day(23));
    assert_eq!(pass.code.len(), 4);
    assert!(
        pass.code
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    );
    assert_eq!(passes_handle.lock().unwrap().len(), 1, "pass persisted");
}

#[tokio::test]
async fn should_return_same_code_on_repeated_fetches() {
    let passes = MockGatePassRepo::empty();
    let passes_handle = passes.passes_handle();
    let uc = RotateGateCodeUseCase { passes };

    let first = uc.execute(day(23)).await.unwrap();
    let second = uc.execute(day(23)).await.unwrap();

    assert_eq!(first.code, second.code, "same day, same code");
    assert_eq!(passes_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_mint_separate_codes_for_separate_days() {
    let passes = MockGatePassRepo::empty();
    let passes_handle = passes.passes_handle();
    let uc = RotateGateCodeUseCase { passes };

    let monday = uc.execute(day(24)).await.unwrap();
    let tuesday = uc.execute(day(25)).await.unwrap();

    assert_eq!(monday.date, day(24));
    assert_eq!(tuesday.date, day(25));
    assert_eq!(passes_handle.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_return_winner_code_after_losing_insert_race() {
    let winner = GatePass {
        date: day(23),
        code: "WXYZ".to_owned(),
        created_at: Utc::now(),
    };
    let uc = RotateGateCodeUseCase {
        passes: RacingGatePassRepo::new(winner),
    };

    let pass = uc.execute(day(23)).await.unwrap();

    assert_eq!(pass.code, "WXYZ", "the winner's code is authoritative");
}
