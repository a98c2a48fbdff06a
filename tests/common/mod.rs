use rosu_catch_diff::{CatchDifficultyObject, PalpableObject};

/// Normalized objects at the given positions, `strain_time` ms apart.
#[allow(unused)]
pub fn normalized(positions: &[f32], strain_time: f64) -> Vec<CatchDifficultyObject> {
    positions
        .iter()
        .enumerate()
        .map(|(idx, &normalized_pos)| CatchDifficultyObject {
            idx,
            start_time: idx as f64 * strain_time,
            delta_time: if idx == 0 { 0.0 } else { strain_time },
            normalized_pos,
            strain_time,
            dist_to_hyper_dash: f32::INFINITY,
            hyper_dash: false,
        })
        .collect()
}

/// A stream of jumps and streams with irregular timing.
pub fn test_stream() -> Vec<PalpableObject> {
    const PATTERN: [(f32, f64); 12] = [
        (256.0, 0.0),
        (40.0, 180.0),
        (480.0, 360.0),
        (470.0, 450.0),
        (455.0, 540.0),
        (120.0, 800.0),
        (300.0, 1100.0),
        (60.0, 1250.0),
        (60.0, 1400.0),
        (500.0, 1700.0),
        (20.0, 1850.0),
        (240.0, 2600.0),
    ];

    PATTERN
        .iter()
        .map(|&(x, time)| PalpableObject::new(x, time))
        .collect()
}

#[macro_export]
macro_rules! assert_bits_eq {
    ($kind:expr => $left:expr, $right:expr) => {
        let (left, right): (f64, f64) = ($left, $right);

        assert!(
            left.to_bits() == right.to_bits(),
            "\n{kind}:\n\
                Left: {left} | Right: {right}\n",
            kind = $kind,
            left = left,
            right = right,
        );
    };
}
