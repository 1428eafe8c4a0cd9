//! Algebraic properties of `Space`, `Rotator` and `Recorder` over random operands
//!
//! Operands are drawn uniformly from [-1000, 1000) the way the randomized
//! fixture of the library's original test suite drew them. The seed is fixed
//! so failures reproduce.

use approx::assert_abs_diff_eq;
use cartesian::{cross, deg2rad, dot, Recorder, Rotator, Space};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::{fixture, rstest};

const TRIALS: usize = 200;

struct Operands {
    p1: Space,
    p2: Space,
    c: f64,
}

#[fixture]
fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_0f5a_ce)
}

fn random_space(rng: &mut StdRng) -> Space {
    Space::new(
        rng.gen_range(-1e3..1e3),
        rng.gen_range(-1e3..1e3),
        rng.gen_range(-1e3..1e3),
    )
}

fn operands(rng: &mut StdRng) -> impl Iterator<Item = Operands> + '_ {
    (0..TRIALS).map(move |_| Operands {
        p1: random_space(rng),
        p2: random_space(rng),
        c: rng.gen_range(-1e3..1e3),
    })
}

#[rstest]
fn test_addition_and_subtraction(mut rng: StdRng) {
    for Operands { p1, p2, .. } in operands(&mut rng) {
        assert_eq!(p1 + p2, p2 + p1);
        assert_eq!(p1 - p2, -(p2 - p1));
        assert_eq!(
            p1 + p2,
            Space::new(p1.x + p2.x, p1.y + p2.y, p1.z + p2.z)
        );

        let mut a = p1;
        a += p2;
        assert_eq!(a, p1 + p2);

        let mut b = p1;
        b -= p2;
        assert_eq!(b, p1 - p2);
    }
}

#[rstest]
fn test_scaling(mut rng: StdRng) {
    for Operands { p1, c, .. } in operands(&mut rng) {
        let expected = Space::new(p1.x * c, p1.y * c, p1.z * c);
        assert_eq!(p1 * c, expected);
        assert_eq!(c * p1, expected);

        let mut a = p1;
        a *= c;
        assert_eq!(a, expected);

        let divided = Space::new(p1.x / c, p1.y / c, p1.z / c);
        assert_eq!((p1 / c).unwrap(), divided);

        let mut b = p1;
        b.try_div_assign(c).unwrap();
        assert_eq!(b, divided);
    }
}

#[rstest]
fn test_products(mut rng: StdRng) {
    for Operands { p1, p2, .. } in operands(&mut rng) {
        assert_eq!(dot(&p1, &p2), dot(&p2, &p1));
        assert_eq!(p1 * p2, dot(&p1, &p2));
        assert_eq!(cross(&p1, &p2), -cross(&p2, &p1));

        // The cross product is orthogonal to both operands
        let n = cross(&p1, &p2);
        let scale = p1.magnitude() * p2.magnitude() * n.magnitude();
        assert!(dot(&n, &p1).abs() <= 1e-12 * scale);
        assert!(dot(&n, &p2).abs() <= 1e-12 * scale);
    }
}

#[rstest]
fn test_magnitude_and_normalization(mut rng: StdRng) {
    for Operands { p1, .. } in operands(&mut rng) {
        assert!(p1.magnitude() >= 0.0);
        assert_eq!(p1.magnitude_squared(), dot(&p1, &p1));

        let unit = p1.normalized().unwrap();
        assert_abs_diff_eq!(unit.magnitude(), 1.0, epsilon = 1e-9);

        let mag = p1.magnitude();
        assert_eq!(unit, Space::new(p1.x / mag, p1.y / mag, p1.z / mag));
    }

    assert_eq!(Space::ZERO.magnitude(), 0.0);
    assert!(Space::ZERO.normalized().unwrap_err().is_divide_by_zero());
}

#[rstest]
fn test_divide_by_zero_for_any_vector(mut rng: StdRng) {
    for Operands { p1, .. } in operands(&mut rng) {
        assert!((p1 / 0.0).unwrap_err().is_divide_by_zero());

        let mut a = p1;
        assert!(a.try_div_assign(0.0).unwrap_err().is_divide_by_zero());
        assert_eq!(a, p1);
    }
}

#[rstest]
#[case(1.0)]
#[case(-2.5)]
#[case(1e6)]
fn test_scalar_over_unit_diagonal(#[case] a: f64) {
    let result = (a / Space::new(1.0, 1.0, 1.0)).unwrap();
    assert_eq!(result, Space::new(a, a, a));
    assert!((a / Space::ZERO).is_err());
}

#[test]
fn test_scale_round_trip() {
    let a = Space::new(3.0, -4.0, 5.0);
    assert_eq!(((a * 2.0) / 2.0).unwrap(), a);
}

#[rstest]
fn test_rotation_round_trip(mut rng: StdRng) {
    for Operands { p1, p2, c } in operands(&mut rng) {
        let mut rotator = Rotator::new(p1);
        let radians = deg2rad(c);

        let rotated = rotator.rotate(&p2, radians).unwrap();
        assert_abs_diff_eq!(rotated.magnitude(), p2.magnitude(), epsilon = 1e-9);

        let again = rotator.rotate(&p2, radians).unwrap();
        assert_eq!(rotated, again);

        let back = rotator.rotate(&rotated, -radians).unwrap();
        assert_abs_diff_eq!(back, p2, epsilon = 1e-9);
    }
}

#[test]
fn test_recorder_keeps_newest() {
    let mut recorder = Recorder::new(3);
    let samples: Vec<Space> = (1..=5)
        .map(|i| Space::new(i as f64, 2.0 * i as f64, -(i as f64)))
        .collect();

    for v in &samples {
        recorder.push(*v);
    }

    assert_eq!(recorder.len(), 3);
    let retained: Vec<Space> = recorder.iter().copied().collect();
    assert_eq!(retained, samples[2..].to_vec());
}

#[test]
fn test_recorder_export_hides_prefill() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file_path = temp_dir.path().join("partial.dat");

    let mut recorder = Recorder::new(10);
    recorder.push(Space::new(1.0, 1.0, 1.0));
    recorder.write(&file_path, true).unwrap();

    let contents = std::fs::read_to_string(&file_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["x y z", "9 1 1 1"]);
}
