use fastCenter::algorithms::refinement::RefinementController;
use fastCenter::engine::executor::{worker_count, DistanceEvaluator, MAX_WORKERS};
use fastCenter::math::distance::distance_sum;
use fastCenter::prelude::*;
use fastCenter::primitives::cloud::PointCloud;
use fastCenter::primitives::vertex::CandidateVertex;

#[test]
fn test_result_independent_of_worker_count() {
    let cloud = generate_uniform(30_000, 17);

    let sequential = Center::new()
        .iterations(10)
        .parallel(false)
        .build()
        .unwrap()
        .fit(&cloud)
        .unwrap();

    for workers in [1, 2, 3, MAX_WORKERS] {
        let parallel = Center::new()
            .iterations(10)
            .max_workers(workers)
            .parallel(true)
            .build()
            .unwrap()
            .fit(&cloud)
            .unwrap();

        // Bit-identical, not merely close.
        assert_eq!(parallel.center, sequential.center, "workers = {}", workers);
        assert_eq!(parallel.rounds, sequential.rounds, "workers = {}", workers);
    }
}

#[test]
fn test_explicit_pool_sizes_agree() {
    let coords = generate_uniform(10_000, 23);
    let cloud = PointCloud::new(&coords).unwrap();

    let mut outcomes = Vec::new();
    for workers in [1, 4, 7] {
        let mut evaluator = DistanceEvaluator::with_workers(workers).unwrap();
        let outcome = RefinementController::new(&mut evaluator, 9)
            .run(&cloud)
            .unwrap();
        outcomes.push(outcome);
    }

    assert_eq!(outcomes[0], outcomes[1]);
    assert_eq!(outcomes[0], outcomes[2]);
}

#[test]
fn test_every_submitted_vertex_resolved_once() {
    let coords = generate_uniform(2_000, 31);
    let cloud = PointCloud::new(&coords).unwrap();

    let mut vertices: Vec<CandidateVertex<f64>> = (0..64)
        .map(|i| {
            let t = i as f64 / 63.0;
            CandidateVertex::at(Point::new(t, t * t, 1.0 - t))
        })
        .collect();
    let expected: Vec<f64> = vertices
        .iter()
        .map(|v| distance_sum(&v.coord, cloud.as_slice()))
        .collect();

    let mut evaluator = DistanceEvaluator::with_workers(4).unwrap();
    let mut batch = evaluator.batch();
    for v in vertices.iter_mut() {
        batch.submit(v);
    }
    assert_eq!(batch.len(), 64);
    assert_eq!(batch.evaluate(&cloud), 64);
    assert!(batch.is_empty());
    drop(batch);

    for (v, want) in vertices.iter().zip(&expected) {
        assert!(v.processed);
        assert_eq!(v.distance, *want);
    }
}

#[test]
fn test_worker_floor_and_cap() {
    assert_eq!(worker_count(0, MAX_WORKERS), 1);
    assert_eq!(worker_count(1, MAX_WORKERS), 1);
    assert_eq!(worker_count(128, MAX_WORKERS), MAX_WORKERS);

    let evaluator = DistanceEvaluator::new(MAX_WORKERS).unwrap();
    assert!(evaluator.workers() >= 1);
    assert!(evaluator.workers() <= MAX_WORKERS);
}
