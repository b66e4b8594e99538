use std::fmt::{self, Display};

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::{PerceptronErr, Result};

/// A binary class label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    Zero,
    One,
}

impl Label {
    /// Returns the label as a number, to be used in the update rule.
    pub fn as_f64(self) -> f64 {
        match self {
            Label::Zero => 0.,
            Label::One => 1.,
        }
    }
}

impl From<Label> for u8 {
    fn from(value: Label) -> Self {
        match value {
            Label::Zero => 0,
            Label::One => 1,
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = PerceptronErr;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Label::Zero),
            1 => Ok(Label::One),
            got => Err(PerceptronErr::InvalidLabel { got: got as f64 }),
        }
    }
}

impl TryFrom<f64> for Label {
    type Error = PerceptronErr;

    fn try_from(value: f64) -> Result<Self> {
        if value == 0. {
            Ok(Label::Zero)
        } else if value == 1. {
            Ok(Label::One)
        } else {
            Err(PerceptronErr::InvalidLabel { got: value })
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// A labeled input vector. By convention the first input is a constant `-1` bias feature.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    input: Array1<f64>,
    target: Label,
}

impl Sample {
    /// Creates a new `Sample`.
    ///
    /// # Arguments
    /// * `input` - The input vector, bias feature included.
    /// * `target` - The expected class for `input`.
    pub fn new(input: Vec<f64>, target: Label) -> Self {
        Self {
            input: Array1::from(input),
            target,
        }
    }

    pub fn input(&self) -> ArrayView1<'_, f64> {
        self.input.view()
    }

    pub fn target(&self) -> Label {
        self.target
    }
}

/// An ordered, immutable set of training samples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Creates a new `Dataset` keeping the order of the given samples.
    pub fn new<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// Creates a new `Dataset` from a flat row-major buffer.
    ///
    /// Every row holds `x_size` inputs followed by a single label.
    ///
    /// # Arguments
    /// * `data` - The raw rows.
    /// * `x_size` - The amount of inputs per row.
    ///
    /// # Returns
    /// An error if the buffer can't be split in rows or a label is neither 0 nor 1.
    pub fn from_flat(data: &[f64], x_size: usize) -> Result<Self> {
        if x_size == 0 {
            return Err(PerceptronErr::SizeMismatch {
                what: "inputs per row",
                got: 0,
                expected: 1,
            });
        }

        let row_size = x_size.checked_add(1).ok_or(PerceptronErr::SizeMismatch {
            what: "inputs per row",
            got: x_size,
            expected: usize::MAX - 1,
        })?;

        if data.len() % row_size != 0 {
            return Err(PerceptronErr::SizeMismatch {
                what: "dataset buffer",
                got: data.len(),
                expected: (data.len() / row_size + 1).saturating_mul(row_size),
            });
        }

        let rows = ArrayView2::from_shape((data.len() / row_size, row_size), data).map_err(
            |_| PerceptronErr::SizeMismatch {
                what: "dataset buffer",
                got: data.len(),
                expected: row_size,
            },
        )?;
        let (x, y) = rows.split_at(Axis(1), x_size);

        let samples = x
            .rows()
            .into_iter()
            .zip(y.iter())
            .map(|(input, &target)| -> Result<Sample> {
                Ok(Sample {
                    input: input.to_owned(),
                    target: Label::try_from(target)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { samples })
    }

    /// The 2-input logical OR gate, with a leading `-1` bias feature.
    pub fn or_gate() -> Self {
        Self::new([
            Sample::new(vec![-1., 0., 0.], Label::Zero),
            Sample::new(vec![-1., 0., 1.], Label::One),
            Sample::new(vec![-1., 1., 0.], Label::One),
            Sample::new(vec![-1., 1., 1.], Label::One),
        ])
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Iterates the samples in their original order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
