//! End-to-end tests for feature preparation
//!
//! Tests complete workflows from a synthetic dataset to a feature frame.

use dataset_facade::{
    DataSource, SyntheticStudentSource, CATEGORICAL_COLUMNS, NUMERIC_COLUMNS,
};
use outlier_facade::{resolve_columns, treat_dataset, IqrCapper};
use pipeline_facade::{
    FeaturePreparer, NormalizeStep, Pipeline, PipelineStep, ScalerKind, StandardizeStep,
};

fn sample_data() -> Vec<f64> {
    (0..50).map(|i| 100.0 + i as f64 * 2.0 + (i as f64 * 0.5).sin() * 5.0).collect()
}

#[test]
fn e2e_normalization_pipeline() {
    let data = sample_data();

    let mut pipeline = Pipeline::new();
    pipeline.add_step(Box::new(NormalizeStep::new()));

    let transformed = pipeline.fit_transform(&data).unwrap();

    let min = transformed.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = transformed.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    assert!((min - 0.0).abs() < 0.001);
    assert!((max - 1.0).abs() < 0.001);

    // Inverse transform should recover original
    let recovered = pipeline.inverse_transform(&transformed).unwrap();

    for (orig, rec) in data.iter().zip(recovered.iter()) {
        assert!((orig - rec).abs() < 0.001, "Mismatch: {} vs {}", orig, rec);
    }
}

#[test]
fn e2e_chained_pipeline() {
    let data = sample_data();

    let mut pipeline = Pipeline::new();
    pipeline.add_step(Box::new(StandardizeStep::new()));
    pipeline.add_step(Box::new(NormalizeStep::new()));

    let transformed = pipeline.fit_transform(&data).unwrap();
    assert_eq!(pipeline.step_names(), vec!["standardize", "normalize"]);
    assert!(transformed.iter().all(|&x| (0.0..=1.0).contains(&x)));

    let recovered = pipeline.inverse_transform(&transformed).unwrap();
    for (orig, rec) in data.iter().zip(recovered.iter()) {
        assert!((orig - rec).abs() < 0.001);
    }
}

#[test]
fn e2e_prepare_synthetic_students() {
    let ds = SyntheticStudentSource::default().load().unwrap();
    let frame = FeaturePreparer::new(ScalerKind::Standard).prepare(&ds).unwrap();

    assert_eq!(frame.n_rows(), ds.n_rows());
    for name in NUMERIC_COLUMNS {
        let values = frame.column(name).unwrap();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let std = (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64).sqrt();
        assert!(mean.abs() < 1e-9, "{name} mean {mean}");
        assert!((std - 1.0).abs() < 1e-9, "{name} std {std}");
    }

    // every categorical column contributes indicators summing to one per row
    for column in CATEGORICAL_COLUMNS {
        let prefix = format!("{column}_");
        let indicators: Vec<&[f64]> = frame
            .names
            .iter()
            .filter(|n| n.starts_with(&prefix))
            .map(|n| frame.column(n).unwrap())
            .collect();
        assert!(!indicators.is_empty());
        for row in 0..frame.n_rows() {
            let total: f64 = indicators.iter().map(|c| c[row]).sum();
            assert_eq!(total, 1.0);
        }
    }
}

#[test]
fn e2e_prepare_treated_dataset_with_minmax() {
    let ds = SyntheticStudentSource::default().load().unwrap();
    let columns = resolve_columns(&ds, None).unwrap();
    let treated = treat_dataset(&ds, &columns, &IqrCapper::default()).unwrap();

    let frame = FeaturePreparer::new(ScalerKind::MinMax).prepare(&treated).unwrap();
    for name in NUMERIC_COLUMNS {
        let values = frame.column(name).unwrap();
        assert!(values.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }
}

#[test]
fn e2e_step_as_trait_object() {
    let mut step: Box<dyn PipelineStep> = ScalerKind::MinMax.step();
    step.fit(&[1.0, 3.0]).unwrap();
    assert_eq!(step.name(), "normalize");
    assert_eq!(step.transform(&[2.0]).unwrap(), vec![0.5]);
}
