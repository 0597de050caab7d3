use dice_engine::{DiceError, Engine, RollRequest, parse};

#[test]
fn parses_basic_forms() {
    assert_eq!(
        parse("3d6").unwrap(),
        RollRequest {
            count: 3,
            sides: 6,
            modifier: 0
        }
    );
    assert_eq!(
        parse("1d20+5").unwrap(),
        RollRequest {
            count: 1,
            sides: 20,
            modifier: 5
        }
    );
    assert_eq!(
        parse("2d8-1").unwrap(),
        RollRequest {
            count: 2,
            sides: 8,
            modifier: -1
        }
    );
}

#[test]
fn uppercase_separator_parses_identically() {
    assert_eq!(parse("1D6").unwrap(), parse("1d6").unwrap());
}

#[test]
fn invalid_notation_reports_the_input() {
    match parse("invalid") {
        Err(DiceError::InvalidNotation(text)) => assert_eq!(text, "invalid"),
        other => panic!("expected InvalidNotation, got {other:?}"),
    }
}

#[test]
fn zero_width_dice_are_notation_errors() {
    assert!(matches!(parse("0d6"), Err(DiceError::InvalidNotation(_))));
    assert!(matches!(parse("3d0"), Err(DiceError::InvalidNotation(_))));
}

#[test]
fn notation_roll_matches_individual_rolls_plus_modifier() {
    let mut a = Engine::from_seed(4242);
    let mut b = Engine::from_seed(4242);

    let total = a.roll_notation("3d6+2").unwrap();
    let detail = b.roll_individual(3, 6).unwrap();
    assert_eq!(total, detail.sum + 2);

    let total = a.roll_notation("2d8-1").unwrap();
    let detail = b.roll_individual(2, 8).unwrap();
    assert_eq!(total, detail.sum - 1);
}

#[test]
fn notation_roll_is_deterministic_per_seed() {
    let mut a = Engine::from_seed(6);
    let mut b = Engine::from_seed(6);
    let left: Vec<i32> = (0..20).map(|_| a.roll_notation("2d12-3").unwrap()).collect();
    let right: Vec<i32> = (0..20).map(|_| b.roll_notation("2d12-3").unwrap()).collect();
    assert_eq!(left, right);
}

#[test]
fn modifier_shifts_the_result_domain() {
    let mut engine = Engine::from_seed(31);
    for _ in 0..200 {
        let v = engine.roll_notation("1d6+0").unwrap();
        assert!((1..=6).contains(&v), "1d6+0 produced {v}");
    }
    for _ in 0..200 {
        let v = engine.roll_notation("1d6-1").unwrap();
        assert!((0..=5).contains(&v), "1d6-1 produced {v}");
    }
}

#[test]
fn notation_roll_rejects_malformed_text() {
    let mut engine = Engine::from_seed(1);
    for text in ["", "invalid", "d6", "3d", "1d6+1+1", "1d6+1d4"] {
        assert!(
            matches!(
                engine.roll_notation(text),
                Err(DiceError::InvalidNotation(_))
            ),
            "{text:?} should be rejected"
        );
    }
}
