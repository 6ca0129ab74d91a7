//! The mutable observation store and its construction/mutation surface

use descriptive_core::{utils, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// An ordered, mutable sequence of real-valued observations.
///
/// Insertion order is preserved. Statistical queries live in the sibling
/// modules as further `impl Dataset` blocks and never mutate the store;
/// only [`append`](Dataset::append), [`clear`](Dataset::clear) and the
/// outlier filters do.
///
/// Undefined statistics are reported as `None` rather than as errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub(crate) values: Vec<f64>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dataset holding `initial`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descriptive_dataset::Dataset;
    ///
    /// let data = Dataset::from_values(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(data.values(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_values(initial: impl Into<Vec<f64>>) -> Self {
        Self {
            values: initial.into(),
        }
    }

    /// Create a dataset from a JSON value that must be an array of numbers
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `value` is not an array
    /// - [`Error::InvalidInput`] if any element is not a number
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descriptive_dataset::Dataset;
    /// use serde_json::json;
    ///
    /// let data = Dataset::from_json(&json!([1, 2.5, 3])).unwrap();
    /// assert_eq!(data.values(), &[1.0, 2.5, 3.0]);
    ///
    /// assert!(Dataset::from_json(&json!("not an array")).is_err());
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            values: parse_observations(value)?,
        })
    }

    /// Parse JSON text and build a dataset from it, see [`Dataset::from_json`]
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// Append observations, preserving their order
    pub fn append<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = f64>,
    {
        let before = self.values.len();
        self.values.extend(items);
        trace!(
            appended = self.values.len() - before,
            total = self.values.len(),
            "appended observations"
        );
    }

    /// Append observations from a JSON array
    ///
    /// The dataset is left untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Same contract as [`Dataset::from_json`].
    pub fn append_json(&mut self, value: &Value) -> Result<()> {
        let parsed = parse_observations(value)?;
        self.append(parsed);
        Ok(())
    }

    /// Remove every observation
    pub fn clear(&mut self) {
        trace!(dropped = self.values.len(), "cleared dataset");
        self.values.clear();
    }

    /// Ascending copy of the observations (NaN last); the dataset is not reordered
    pub fn sorted(&self) -> Vec<f64> {
        utils::sorted(&self.values)
    }

    /// Observations in insertion order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Consume the dataset, returning the underlying observations
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

fn parse_observations(value: &Value) -> Result<Vec<f64>> {
    let items = value.as_array().ok_or_else(Error::not_a_sequence)?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| item.as_f64().ok_or_else(|| Error::not_a_number(index, item)))
        .collect()
}

impl From<Vec<f64>> for Dataset {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl From<&[f64]> for Dataset {
    fn from(values: &[f64]) -> Self {
        Self::from_values(values)
    }
}

impl FromIterator<f64> for Dataset {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<f64> for Dataset {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
