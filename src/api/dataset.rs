use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::scale::global_max_value;
use crate::core::{NonFiniteValuePolicy, RadarSeries};
use crate::error::{RadarError, RadarResult};

/// One host record keyed by field id, in host column order.
pub type HostRow = IndexMap<String, Value>;

/// Field metadata declared by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl FieldSpec {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Name shown for this field, falling back to its id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Axes plus aligned series, validated so every series has one value per axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadarDataset {
    axes: Vec<String>,
    series: Vec<RadarSeries>,
}

impl RadarDataset {
    pub fn new(axes: Vec<String>, series: Vec<RadarSeries>) -> RadarResult<Self> {
        for item in &series {
            item.ensure_axis_count(axes.len())?;
        }
        Ok(Self { axes, series })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Transposes host rows into radar series.
    ///
    /// Each row becomes one axis labelled by the `dimension` field; each metric
    /// field becomes one series holding that metric's value from every row.
    /// Missing or `null` metric values are handled by `policy`.
    pub fn from_rows(
        dimension: &FieldSpec,
        metrics: &[FieldSpec],
        rows: &[HostRow],
        policy: NonFiniteValuePolicy,
    ) -> RadarResult<Self> {
        let mut axes = Vec::with_capacity(rows.len());
        let mut columns: SmallVec<[Vec<f64>; 4]> = metrics
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for (row_index, row) in rows.iter().enumerate() {
            axes.push(dimension_label(row.get(&dimension.id), row_index, dimension)?);
            for (metric, column) in metrics.iter().zip(columns.iter_mut()) {
                column.push(metric_value(row.get(&metric.id), row_index, metric)?);
            }
        }

        let series = metrics
            .iter()
            .zip(columns)
            .map(|(metric, values)| {
                RadarSeries::new(metric.display_name(), values).sanitized(policy)
            })
            .collect::<RadarResult<Vec<_>>>()?;

        trace!(
            axes = axes.len(),
            series = series.len(),
            "built radar dataset from host rows"
        );
        Ok(Self { axes, series })
    }

    /// Applies `policy` to every series.
    pub fn sanitized(self, policy: NonFiniteValuePolicy) -> RadarResult<Self> {
        let series = self
            .series
            .into_iter()
            .map(|series| series.sanitized(policy))
            .collect::<RadarResult<Vec<_>>>()?;
        Ok(Self {
            axes: self.axes,
            series,
        })
    }

    #[must_use]
    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    #[must_use]
    pub fn series(&self) -> &[RadarSeries] {
        &self.series
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// True when there is no axis to lay out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Single maximum across every series and axis, ignoring non-finite values.
    #[must_use]
    pub fn global_max(&self) -> Option<f64> {
        global_max_value(&self.series, self.axes.len())
    }
}

fn dimension_label(
    value: Option<&Value>,
    row_index: usize,
    field: &FieldSpec,
) -> RadarResult<String> {
    match value {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Number(number)) => Ok(number_label(number)),
        Some(Value::Bool(flag)) => Ok(flag.to_string()),
        Some(Value::Array(items)) if items.len() == 1 => {
            dimension_label(items.first(), row_index, field)
        }
        Some(Value::Null) | None => Err(RadarError::InvalidData(format!(
            "row {row_index} has no value for dimension `{}`",
            field.id
        ))),
        Some(_) => Err(RadarError::InvalidData(format!(
            "row {row_index} has a non-scalar value for dimension `{}`",
            field.id
        ))),
    }
}

/// Integral floats print without a fractional part, so `1.0` labels as `1`.
fn number_label(number: &Number) -> String {
    match number.as_f64() {
        Some(value)
            if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 =>
        {
            (value as i64).to_string()
        }
        _ => number.to_string(),
    }
}

/// Missing values come back as `NaN` so the non-finite policy decides.
fn metric_value(
    value: Option<&Value>,
    row_index: usize,
    field: &FieldSpec,
) -> RadarResult<f64> {
    match value {
        Some(Value::Number(number)) => Ok(number.as_f64().unwrap_or(f64::NAN)),
        Some(Value::String(text)) => text.trim().parse::<f64>().map_err(|_| {
            RadarError::InvalidData(format!(
                "row {row_index} has a non-numeric value `{text}` for metric `{}`",
                field.id
            ))
        }),
        Some(Value::Array(items)) if items.len() == 1 => {
            metric_value(items.first(), row_index, field)
        }
        Some(Value::Null) | None => Ok(f64::NAN),
        Some(_) => Err(RadarError::InvalidData(format!(
            "row {row_index} has a non-scalar value for metric `{}`",
            field.id
        ))),
    }
}
