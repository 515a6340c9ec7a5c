//! Seeded synthetic student dataset.

use dataset_api::SyntheticConfig;
use dataset_spi::{DataSource, Dataset, DatasetError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::student::{NumericField, StudentRecord};

const GENDERS: [&str; 3] = ["Male", "Female", "Non-binary"];
const MAJORS: [&str; 5] = ["Engineering", "Arts", "Business", "Science", "Medicine"];
const YEARS: [&str; 4] = ["Freshman", "Sophomore", "Junior", "Senior"];

/// Distribution of one numeric field: normal draw, clipped and rounded.
struct FieldProfile {
    field: NumericField,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
    decimals: i32,
}

static PROFILES: [FieldProfile; 7] = [
    FieldProfile { field: NumericField::Age, mean: 21.0, std_dev: 2.0, min: 17.0, max: 35.0, decimals: 0 },
    FieldProfile { field: NumericField::Gpa, mean: 3.0, std_dev: 0.4, min: 0.0, max: 4.0, decimals: 2 },
    FieldProfile { field: NumericField::SleepHoursDaily, mean: 7.0, std_dev: 1.2, min: 3.0, max: 12.0, decimals: 1 },
    FieldProfile { field: NumericField::StressLevelScore, mean: 5.5, std_dev: 1.8, min: 1.0, max: 10.0, decimals: 1 },
    FieldProfile { field: NumericField::AnxietyScore, mean: 10.0, std_dev: 4.0, min: 0.0, max: 21.0, decimals: 1 },
    FieldProfile { field: NumericField::SocialSupportScore, mean: 6.0, std_dev: 2.0, min: 0.0, max: 10.0, decimals: 1 },
    FieldProfile { field: NumericField::StudyHoursWeekly, mean: 15.0, std_dev: 5.0, min: 0.0, max: 60.0, decimals: 1 },
];

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Synthetic student wellbeing dataset with injected extreme values.
///
/// The same configuration (and in particular the same seed) always
/// produces the same dataset.
#[derive(Debug, Clone, Default)]
pub struct SyntheticStudentSource {
    config: SyntheticConfig,
}

impl SyntheticStudentSource {
    pub fn new(config: SyntheticConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    /// Generate the typed records backing the dataset.
    pub fn generate_records(&self) -> Result<Vec<StudentRecord>> {
        self.config.validate()?;
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let normals = PROFILES
            .iter()
            .map(|p| {
                Normal::new(p.mean, p.std_dev).map_err(|e| DatasetError::InvalidParameter {
                    name: p.field.name().to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut records: Vec<StudentRecord> = (0..self.config.rows)
            .map(|_| {
                let mut record = StudentRecord {
                    age: 0.0,
                    gpa: 0.0,
                    sleep_hours_daily: 0.0,
                    stress_level_score: 0.0,
                    anxiety_score: 0.0,
                    social_support_score: 0.0,
                    study_hours_weekly: 0.0,
                    gender: pick(&GENDERS, &mut rng),
                    major: pick(&MAJORS, &mut rng),
                    year_of_study: pick(&YEARS, &mut rng),
                };
                for (profile, normal) in PROFILES.iter().zip(&normals) {
                    let raw = normal.sample(&mut rng).clamp(profile.min, profile.max);
                    record.set(profile.field, round_to(raw, profile.decimals));
                }
                record
            })
            .collect();

        let injected = self.inject_outliers(&mut records, &mut rng);
        tracing::info!(
            rows = records.len(),
            injected,
            seed = self.config.seed,
            "generated synthetic student dataset"
        );
        Ok(records)
    }

    /// Push a random field of randomly chosen rows six to ten standard
    /// deviations away from its mean, ignoring the field's clip range.
    fn inject_outliers(&self, records: &mut [StudentRecord], rng: &mut StdRng) -> usize {
        let count = (records.len() as f64 * self.config.outlier_fraction).round() as usize;
        for _ in 0..count {
            let row = rng.gen_range(0..records.len());
            let profile = &PROFILES[rng.gen_range(0..PROFILES.len())];
            let distance = rng.gen_range(6.0..10.0) * profile.std_dev;
            let value = if rng.gen_bool(0.5) {
                profile.mean + distance
            } else {
                profile.mean - distance
            };
            records[row].set(profile.field, round_to(value, profile.decimals));
        }
        count
    }
}

fn pick(options: &[&str], rng: &mut StdRng) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

impl DataSource for SyntheticStudentSource {
    fn name(&self) -> &str {
        "synthetic-students"
    }

    fn load(&self) -> Result<Dataset> {
        let records = self.generate_records()?;
        StudentRecord::into_dataset(&records)
    }
}
