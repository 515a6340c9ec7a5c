//! Typed student wellbeing schema.

use dataset_spi::{Column, ColumnSpec, Dataset, Result, Schema};

/// Numeric columns of the student dataset, in schema order.
pub const NUMERIC_COLUMNS: [&str; 7] = [
    "Age",
    "GPA",
    "Sleep_Hours_Daily",
    "Stress_Level_Score",
    "Anxiety_Score",
    "Social_Support_Score",
    "Study_Hours_Weekly",
];

/// Categorical columns of the student dataset, in schema order.
pub const CATEGORICAL_COLUMNS: [&str; 3] = ["Gender", "Major", "Year_Of_Study"];

/// Numeric field of a [`StudentRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Age,
    Gpa,
    SleepHoursDaily,
    StressLevelScore,
    AnxietyScore,
    SocialSupportScore,
    StudyHoursWeekly,
}

impl NumericField {
    pub const ALL: [NumericField; 7] = [
        NumericField::Age,
        NumericField::Gpa,
        NumericField::SleepHoursDaily,
        NumericField::StressLevelScore,
        NumericField::AnxietyScore,
        NumericField::SocialSupportScore,
        NumericField::StudyHoursWeekly,
    ];

    /// Column name used in datasets and CSV headers.
    pub fn name(self) -> &'static str {
        match self {
            NumericField::Age => NUMERIC_COLUMNS[0],
            NumericField::Gpa => NUMERIC_COLUMNS[1],
            NumericField::SleepHoursDaily => NUMERIC_COLUMNS[2],
            NumericField::StressLevelScore => NUMERIC_COLUMNS[3],
            NumericField::AnxietyScore => NUMERIC_COLUMNS[4],
            NumericField::SocialSupportScore => NUMERIC_COLUMNS[5],
            NumericField::StudyHoursWeekly => NUMERIC_COLUMNS[6],
        }
    }

    /// Resolve a column name to its field.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// One student record.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub age: f64,
    pub gpa: f64,
    pub sleep_hours_daily: f64,
    pub stress_level_score: f64,
    pub anxiety_score: f64,
    pub social_support_score: f64,
    pub study_hours_weekly: f64,
    pub gender: String,
    pub major: String,
    pub year_of_study: String,
}

impl StudentRecord {
    pub fn get(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Age => self.age,
            NumericField::Gpa => self.gpa,
            NumericField::SleepHoursDaily => self.sleep_hours_daily,
            NumericField::StressLevelScore => self.stress_level_score,
            NumericField::AnxietyScore => self.anxiety_score,
            NumericField::SocialSupportScore => self.social_support_score,
            NumericField::StudyHoursWeekly => self.study_hours_weekly,
        }
    }

    pub fn set(&mut self, field: NumericField, value: f64) {
        let slot = match field {
            NumericField::Age => &mut self.age,
            NumericField::Gpa => &mut self.gpa,
            NumericField::SleepHoursDaily => &mut self.sleep_hours_daily,
            NumericField::StressLevelScore => &mut self.stress_level_score,
            NumericField::AnxietyScore => &mut self.anxiety_score,
            NumericField::SocialSupportScore => &mut self.social_support_score,
            NumericField::StudyHoursWeekly => &mut self.study_hours_weekly,
        };
        *slot = value;
    }

    /// Pivot records into a columnar dataset following [`student_schema`].
    pub fn into_dataset(records: &[StudentRecord]) -> Result<Dataset> {
        let mut columns: Vec<Column> = NumericField::ALL
            .iter()
            .map(|&field| Column::numeric(field.name(), records.iter().map(|r| r.get(field)).collect()))
            .collect();

        columns.push(Column::categorical(
            CATEGORICAL_COLUMNS[0],
            records.iter().map(|r| r.gender.clone()).collect(),
        ));
        columns.push(Column::categorical(
            CATEGORICAL_COLUMNS[1],
            records.iter().map(|r| r.major.clone()).collect(),
        ));
        columns.push(Column::categorical(
            CATEGORICAL_COLUMNS[2],
            records.iter().map(|r| r.year_of_study.clone()).collect(),
        ));

        Dataset::new(columns)
    }
}

/// Schema of the student dataset.
pub fn student_schema() -> Result<Schema> {
    let specs = NUMERIC_COLUMNS
        .iter()
        .map(|name| ColumnSpec::numeric(name))
        .chain(CATEGORICAL_COLUMNS.iter().map(|name| ColumnSpec::categorical(name)))
        .collect();
    Schema::new(specs)
}
