//! CSV loading and saving.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use dataset_spi::{Column, ColumnKind, DataSource, Dataset, DatasetError, Result, Schema};

/// Dataset source backed by a CSV file with a header row.
///
/// With a schema, every schema column must appear in the header and its
/// cells are parsed according to its kind. Header columns the schema does
/// not mention (or every column, without a schema) are numeric when most of
/// their non-empty cells parse as numbers, categorical otherwise. A numeric
/// column with any unparseable cell fails the load with `NonNumeric`.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    schema: Option<Schema>,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            schema: None,
        }
    }

    /// Require the file to match `schema`.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Header row of the file.
    pub fn headers(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| DatasetError::Io(e.to_string()))?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));
        let headers = reader
            .headers()
            .map_err(|e| DatasetError::Csv(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        Ok(headers)
    }

    /// Whether every column of `schema` appears in the header.
    pub fn matches(&self, schema: &Schema) -> Result<bool> {
        let headers = self.headers()?;
        Ok(schema.columns().iter().all(|spec| headers.contains(&spec.name)))
    }

    fn read_raw(&self) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let file = File::open(&self.path).map_err(|e| DatasetError::Io(e.to_string()))?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| DatasetError::Csv(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for result in reader.records() {
            let record = result.map_err(|e| DatasetError::Csv(e.to_string()))?;
            for (i, column) in cells.iter_mut().enumerate() {
                column.push(record.get(i).unwrap_or("").trim().to_string());
            }
        }
        Ok((headers, cells))
    }

    fn kind_of(&self, name: &str, cells: &[String]) -> ColumnKind {
        if let Some(spec) = self.schema.as_ref().and_then(|s| s.get(name)) {
            return spec.kind;
        }
        let non_empty: Vec<&String> = cells.iter().filter(|c| !c.is_empty()).collect();
        let parsed = non_empty.iter().filter(|c| c.parse::<f64>().is_ok()).count();
        if !non_empty.is_empty() && parsed * 2 > non_empty.len() {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        }
    }
}

fn parse_numeric(name: &str, cells: Vec<String>) -> Result<Vec<f64>> {
    cells
        .into_iter()
        .enumerate()
        .map(|(row, cell)| {
            if cell.is_empty() {
                return Err(DatasetError::MissingValue {
                    column: name.to_string(),
                    row,
                });
            }
            match cell.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(DatasetError::NonNumeric {
                    column: name.to_string(),
                    row,
                    value: cell,
                }),
            }
        })
        .collect()
}

impl DataSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<Dataset> {
        let (headers, cells) = self.read_raw()?;

        if let Some(schema) = &self.schema {
            if let Some(missing) = schema.columns().iter().find(|s| !headers.contains(&s.name)) {
                return Err(DatasetError::SchemaMismatch(format!(
                    "missing column '{}'",
                    missing.name
                )));
            }
        }
        if cells.first().map_or(true, Vec::is_empty) {
            return Err(DatasetError::Empty);
        }

        let columns = headers
            .iter()
            .zip(cells)
            .map(|(name, column_cells)| -> Result<Column> {
                match self.kind_of(name, &column_cells) {
                    ColumnKind::Numeric => Ok(Column::numeric(name, parse_numeric(name, column_cells)?)),
                    ColumnKind::Categorical => Ok(Column::categorical(name, column_cells)),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let dataset = Dataset::new(columns)?;
        tracing::info!(
            path = %self.path.display(),
            rows = dataset.n_rows(),
            columns = dataset.n_columns(),
            "loaded csv dataset"
        );
        Ok(dataset)
    }
}

/// Write a dataset as CSV with a header row.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| DatasetError::Csv(e.to_string()))?;

    let header: Vec<&str> = dataset.columns().iter().map(Column::name).collect();
    writer
        .write_record(&header)
        .map_err(|e| DatasetError::Csv(e.to_string()))?;

    for row in 0..dataset.n_rows() {
        let record: Vec<String> = dataset
            .columns()
            .iter()
            .map(|c| c.data().cell(row).unwrap_or_default())
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| DatasetError::Csv(e.to_string()))?;
    }

    writer.flush().map_err(|e| DatasetError::Io(e.to_string()))?;
    tracing::debug!(path = %path.display(), rows = dataset.n_rows(), "wrote csv dataset");
    Ok(())
}
