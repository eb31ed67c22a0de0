use approx::assert_abs_diff_eq;
use fastCenter::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn cluster(p: [f64; 3], n: usize) -> Vec<[f64; 3]> {
    vec![p; n]
}

#[test]
fn test_zero_rounds_returns_unit_center() {
    let cloud = generate_uniform(500, 3);
    let center = find_center(&cloud, 0).unwrap();
    assert_eq!(center, Point::new(0.5, 0.5, 0.5));

    let cloud = cluster([0.01, 0.99, 0.42], 10);
    assert_eq!(find_center(&cloud, 0).unwrap(), Point::splat(0.5));
}

#[test]
fn test_concrete_cluster_scenario() {
    // 1,000 identical points, 5 rounds: within 1/2^6 per coordinate.
    let target = Point::new(0.3, 0.7, 0.1);
    let cloud = cluster(target.to_array(), 1_000);

    let center = find_center(&cloud, 5).unwrap();

    let tolerance = 1.0 / 64.0;
    assert_abs_diff_eq!(center.x, target.x, epsilon = tolerance);
    assert_abs_diff_eq!(center.y, target.y, epsilon = tolerance);
    assert_abs_diff_eq!(center.z, target.z, epsilon = tolerance);
}

#[test]
fn test_single_cluster_convergence_bound() {
    let target = Point::new(0.61, 0.13, 0.87);
    let cloud = cluster(target.to_array(), 200);

    for iterations in 0..=10 {
        let res = Center::new()
            .iterations(iterations)
            .build()
            .unwrap()
            .fit(&cloud)
            .unwrap();
        let error = res.center.max_axis_distance(&target);
        let bound = 0.5 / f64::powi(2.0, iterations as i32);
        assert!(
            error <= bound,
            "iterations {}: error {} exceeds bound {}",
            iterations,
            error,
            bound
        );
        assert_eq!(res.half_side, bound);
    }
}

#[test]
fn test_cluster_on_lattice_center() {
    // The lattice center sits on the cluster and sums to zero; the other
    // vertices of every sub-cube keep its aggregate cost positive.
    let cloud = cluster([0.5, 0.5, 0.5], 8);
    let res = Center::new()
        .iterations(1)
        .parallel(false)
        .build()
        .unwrap()
        .fit(&cloud)
        .unwrap();
    let round = &res.rounds[0];
    assert!(round.costs.iter().all(|c| *c > 0.0));
    // Each sub-cube has the center vertex as one corner; the cheapest cost is
    // 8 * (3 * 0.5 + 3 * sqrt(0.5) + sqrt(0.75)).
    let expected = 8.0 * (1.5 + 3.0 * 0.5_f64.sqrt() + 0.75_f64.sqrt());
    assert_abs_diff_eq!(round.winner_cost, expected, epsilon = 1e-9);
}

#[test]
fn test_deterministic_across_runs() {
    let cloud = generate_uniform(20_000, 11);

    let first = Center::new().iterations(8).build().unwrap().fit(&cloud).unwrap();
    let second = Center::new().iterations(8).build().unwrap().fit(&cloud).unwrap();

    assert_eq!(first.center, second.center);
    assert_eq!(first.rounds, second.rounds);
}

#[test]
fn test_monotonic_winner_cost() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let cloud: Vec<[f64; 3]> = (0..5_000)
        .map(|_| {
            [
                rng.gen_range(0.0..0.4),
                rng.gen_range(0.3..1.0),
                rng.gen_range(0.0..1.0),
            ]
        })
        .collect();

    let res = Center::new().iterations(12).build().unwrap().fit(&cloud).unwrap();

    for pair in res.rounds.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert!(
            next.winner_cost <= prev.winner_cost * (1.0 + 1e-9),
            "round {} cost {} rose above round {} cost {}",
            next.round,
            next.winner_cost,
            prev.round,
            prev.winner_cost
        );
    }
}

#[test]
fn test_search_stays_inside_previous_cube() {
    let cloud = generate_uniform(10_000, 5);
    let res = Center::new().iterations(6).build().unwrap().fit(&cloud).unwrap();

    for pair in res.rounds.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let side = 2.0 * prev.half_side;
        for axis in 0..3 {
            let lo = prev.lower_corner.axis(axis);
            let nlo = next.lower_corner.axis(axis);
            assert!(nlo >= lo && nlo + 2.0 * next.half_side <= lo + side);
        }
        assert_eq!(next.half_side, prev.half_side / 2.0);
    }
}

#[test]
fn test_uniform_cloud_center_near_middle() {
    let cloud = generate_uniform(50_000, 2024);
    let center = find_center(&cloud, DEFAULT_ITERATIONS).unwrap();
    for axis in 0..3 {
        assert_abs_diff_eq!(center.axis(axis), 0.5, epsilon = 0.05);
    }
}

#[test]
fn test_f32_clouds() {
    let cloud: Vec<f32> = [0.3_f32, 0.8, 0.45].repeat(100);
    let center = find_center(&cloud, 6).unwrap();
    assert_abs_diff_eq!(center.x, 0.3, epsilon = 1.0 / 128.0);
    assert_abs_diff_eq!(center.y, 0.8, epsilon = 1.0 / 128.0);
    assert_abs_diff_eq!(center.z, 0.45, epsilon = 1.0 / 128.0);
}

#[cfg(feature = "cpu")]
#[test]
fn test_ndarray_integration() {
    use ndarray::Array2;

    let flat = cluster([0.2, 0.4, 0.8], 50).concat();
    let cloud = Array2::from_shape_vec((50, 3), flat.clone()).unwrap();

    let from_array = find_center(&cloud, 7).unwrap();
    let from_slice = find_center(&flat, 7).unwrap();
    assert_eq!(from_array, from_slice);
}

#[test]
fn test_error_handling() {
    let empty: Vec<[f64; 3]> = Vec::new();
    assert!(matches!(find_center(&empty, 4), Err(CenterError::EmptyCloud)));

    let ragged = vec![0.1_f64, 0.2, 0.3, 0.4];
    assert!(matches!(
        find_center(&ragged, 4),
        Err(CenterError::InvalidInput(_))
    ));

    let poisoned = vec![[0.1_f64, f64::INFINITY, 0.3]];
    assert!(matches!(
        find_center(&poisoned, 4),
        Err(CenterError::InvalidInput(_))
    ));

    assert!(matches!(
        Center::new().max_workers(0).build(),
        Err(CenterError::InvalidInput(_))
    ));
}
