use rosu_catch_diff::{CatchDifficulty, CatchGradualDifficulty};

mod common;

#[test]
fn iter_end_eq_regular() {
    let difficulty = CatchDifficulty::new().cs(4.5).clock_rate(0.75);
    let diff_objects = difficulty
        .create_difficulty_objects(&common::test_stream())
        .unwrap();

    let regular = difficulty.calculate(&diff_objects).unwrap();

    let iter_end = CatchGradualDifficulty::new(&difficulty, &diff_objects)
        .unwrap()
        .last()
        .expect("empty iter");

    assert_eq!(regular, iter_end);
}

#[test]
fn movement_never_decreases() {
    let difficulty = CatchDifficulty::new();
    let diff_objects = difficulty
        .create_difficulty_objects(&common::test_stream())
        .unwrap();

    let gradual = CatchGradualDifficulty::new(&difficulty, &diff_objects).unwrap();
    let values: Vec<_> = gradual.map(|attrs| attrs.movement).collect();

    assert_eq!(values.len(), diff_objects.len());
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}
