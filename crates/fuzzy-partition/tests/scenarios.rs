//! Worked examples for the fuzzy partitioning model.
//!
//! Each case pins down every query on a small literal mapping:
//! - Mixed partitioned/discarded features
//! - Empty model
//! - Single discarded feature
//! - Ties between features

use std::collections::{BTreeMap, BTreeSet};

use approx::assert_relative_eq;
use fuzzy_partition::{ExtremumQuery, FeatureCount, FuzzyPartitioningModel, PartitionError};
use rstest::rstest;

fn model(entries: &[(usize, &[f64])]) -> FuzzyPartitioningModel {
    entries
        .iter()
        .map(|&(feature, cuts)| (feature, cuts.to_vec()))
        .collect()
}

const NO_MAX: PartitionError = PartitionError::EmptyCollection {
    query: ExtremumQuery::Max,
};
const NO_MIN: PartitionError = PartitionError::EmptyCollection {
    query: ExtremumQuery::Min,
};

#[rstest]
#[case::mixed(&[(0, &[1.5, 2.5][..]), (1, &[]), (2, &[3.0])], 3, &[1], Ok((0, 2)), Ok((2, 1)))]
#[case::empty(&[], 0, &[], Err(NO_MAX), Err(NO_MIN))]
#[case::single_discarded(&[(5, &[][..])], 0, &[5], Ok((5, 0)), Err(NO_MIN))]
#[case::tie(&[(0, &[1.0][..]), (1, &[1.0])], 2, &[], Ok((0, 1)), Ok((0, 1)))]
#[case::sparse_indices(&[(40, &[0.1, 0.2][..]), (7, &[0.5]), (12, &[])], 3, &[12], Ok((40, 2)), Ok((7, 1)))]
fn queries_on_literal_models(
    #[case] entries: &[(usize, &[f64])],
    #[case] total: usize,
    #[case] discarded: &[usize],
    #[case] max: Result<(usize, usize), PartitionError>,
    #[case] min: Result<(usize, usize), PartitionError>,
) {
    let model = model(entries);

    assert_eq!(model.total_fuzzy_sets(), total);
    assert_eq!(
        model.discarded_features(),
        discarded.iter().copied().collect::<BTreeSet<_>>()
    );
    assert_eq!(model.max_fuzzy_sets().map(<(usize, usize)>::from), max);
    assert_eq!(model.min_fuzzy_sets().map(<(usize, usize)>::from), min);
}

#[test]
fn average_of_mixed_model() {
    let model = model(&[(0, &[1.5, 2.5]), (1, &[]), (2, &[3.0])]);
    assert_relative_eq!(model.average_fuzzy_sets().unwrap(), 1.0);
}

#[test]
fn average_counts_discarded_features_in_divisor() {
    let model = model(&[(0, &[1.0, 2.0, 3.0, 4.0]), (1, &[]), (2, &[]), (3, &[])]);
    assert_relative_eq!(model.average_fuzzy_sets().unwrap(), 1.0);
    assert_relative_eq!(
        model.average_fuzzy_sets().unwrap() * model.n_features() as f64,
        model.total_fuzzy_sets() as f64
    );
}

#[test]
fn average_of_empty_model_is_undefined() {
    let model = FuzzyPartitioningModel::default();
    assert_eq!(model.average_fuzzy_sets(), Err(PartitionError::UndefinedAverage));
}

#[test]
fn average_of_all_discarded_model_is_zero() {
    let model = model(&[(5, &[])]);
    assert_relative_eq!(model.average_fuzzy_sets().unwrap(), 0.0);
}

#[test]
fn tie_break_is_stable_across_calls_and_clones() {
    let model = model(&[(1, &[1.0]), (0, &[1.0])]);
    let copy = model.clone();
    for _ in 0..10 {
        assert_eq!(model.max_fuzzy_sets(), Ok(FeatureCount::new(0, 1)));
        assert_eq!(copy.max_fuzzy_sets(), Ok(FeatureCount::new(0, 1)));
    }
}

#[test]
fn export_round_trips() {
    let source = BTreeMap::from([(0, vec![1.5, 2.5]), (1, vec![]), (2, vec![3.0])]);
    let model = FuzzyPartitioningModel::new(source.clone());
    assert_eq!(model.export(), source);
    assert_eq!(FuzzyPartitioningModel::new(model.export()), model);
}

#[test]
fn report_of_mixed_model() {
    let model = model(&[(2, &[3.0]), (0, &[1.5, 2.5]), (1, &[])]);
    let report = model.report();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Fuzzy partitioning: 3 features",
            "  partitioned: 2",
            "  discarded: 1",
            "0 -> [1.5, 2.5]",
            "1 -> []",
            "2 -> [3.0]",
        ]
    );
}

#[test]
fn shared_across_threads() {
    let model = std::sync::Arc::new(model(&[(0, &[1.0, 2.0]), (1, &[]), (2, &[4.0])]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = std::sync::Arc::clone(&model);
            std::thread::spawn(move || (model.total_fuzzy_sets(), model.max_fuzzy_sets()))
        })
        .collect();
    for handle in handles {
        let (total, max) = handle.join().unwrap();
        assert_eq!(total, 3);
        assert_eq!(max, Ok(FeatureCount::new(0, 2)));
    }
}
