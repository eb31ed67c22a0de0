use fastCenter::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_persisted_cloud_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cloud.bin");

    let cloud = generate_uniform(1_234, 9);
    save_cloud(&path, &cloud).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 1_234 * 24);
    let loaded = load_cloud(&path).unwrap();
    assert_eq!(loaded, cloud);
    assert!(validate_unit_bounds(&loaded).is_ok());
}

#[test]
fn test_cached_source_generates_then_reloads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("TestCloud.bin");
    let source = CachedCloudSource::new(&path, 500).seed(4);

    assert!(!path.exists());
    let created = source.points().unwrap();
    assert!(path.exists());
    assert_eq!(created.len(), 1_500);

    // A different seed must not matter once the cache exists.
    let reloaded = CachedCloudSource::new(&path, 500).seed(5).points().unwrap();
    assert_eq!(reloaded, created);
}

#[test]
fn test_cached_source_rejects_out_of_bounds_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.bin");
    save_cloud(&path, &[0.5, 0.5, 0.5, 0.2, 2.0, 0.1]).unwrap();

    let err = CachedCloudSource::new(&path, 2).points().unwrap_err();
    match err {
        CenterError::CorruptData { index, axis, value } => {
            assert_eq!((index, axis, value), (1, 1, 2.0));
        }
        other => panic!("expected CorruptData, got {other:?}"),
    }
}

#[test]
fn test_cached_source_rejects_nan() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nan.bin");
    save_cloud(&path, &[0.5, f64::NAN, 0.5]).unwrap();

    let err = CachedCloudSource::new(&path, 1).points().unwrap_err();
    assert!(err.is_corrupt());
}

#[test]
fn test_truncated_file_is_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.bin");
    fs::write(&path, [0_u8; 30]).unwrap();

    let err = load_cloud(&path).unwrap_err();
    assert!(matches!(
        err,
        CenterError::TruncatedCloud {
            len: 30,
            point_size: 24
        }
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_cloud(&dir.path().join("absent.bin")).unwrap_err();
    assert!(matches!(err, CenterError::Io(_)));
}

#[test]
fn test_source_feeds_search() {
    let source = InMemorySource::new([0.3, 0.7, 0.1].repeat(1_000));
    let cloud = source.points().unwrap();
    let center = find_center(&cloud, 5).unwrap();
    assert!(center.max_axis_distance(&Point::new(0.3, 0.7, 0.1)) <= 1.0 / 64.0);
}

#[test]
fn test_zero_point_cache_is_never_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("TestCloud.bin");

    let err = CachedCloudSource::new(&path, 0).points().unwrap_err();
    assert!(matches!(err, CenterError::InvalidInput(_)));
    assert!(!path.exists());

    // The next run with a real count still generates a usable cloud.
    let cloud = CachedCloudSource::new(&path, 1_000).points().unwrap();
    assert_eq!(cloud.len(), 3_000);
    assert!(find_center(&cloud, 4).is_ok());
}

#[test]
fn test_empty_cache_file_is_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("TestCloud.bin");
    fs::write(&path, []).unwrap();

    let err = CachedCloudSource::new(&path, 1_000).points().unwrap_err();
    assert!(matches!(
        err,
        CenterError::TruncatedCloud {
            len: 0,
            point_size: 24
        }
    ));
}
