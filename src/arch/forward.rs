use ndarray::{Array1, ArrayView1};

use super::{activations::activation, linear::weighted_sum};
use crate::{
    Result,
    dataset::Label,
    optimization::{PerceptronRule, round3},
    trace::{TraceRecord, TraceSink},
};

/// Makes a forward pass of one sample through the perceptron, correcting `w` if the sample was
/// misclassified.
///
/// # Arguments
/// * `x` - The sample's input.
/// * `target` - The sample's expected label.
/// * `w` - The weight vector, **updated in place** on a misclassification.
/// * `learning_rate` - The step size of the correction.
/// * `sink` - Receives a `TraceRecord::Sample` with the weights used for the prediction.
///
/// # Returns
/// The predicted label, or `PerceptronErr::DimensionMismatch` if `w` and `x` differ in length.
/// Nothing is traced nor updated on error.
pub fn forward_pass<S>(
    x: ArrayView1<f64>,
    target: Label,
    w: &mut Array1<f64>,
    learning_rate: f64,
    sink: &mut S,
) -> Result<Label>
where
    S: TraceSink + ?Sized,
{
    let h = weighted_sum(w.view(), x)?;
    let predicted = activation(h);

    sink.record(TraceRecord::Sample {
        input: x.to_vec(),
        target,
        weights: w.to_vec(),
        weighted_sum: round3(h),
    });

    if predicted != target {
        PerceptronRule::new(learning_rate).update_params(w.view_mut(), x, predicted, target)?;
    }

    Ok(predicted)
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::{
        PerceptronErr,
        optimization::DEFAULT_LEARNING_RATE,
        trace::{MemorySink, NullSink},
    };

    #[test]
    fn misclassified_sample_updates_every_weight() {
        let mut w = array![-0.05, -0.02, 0.02];
        let x = array![-1., 0., 0.];

        let predicted =
            forward_pass(x.view(), Label::Zero, &mut w, DEFAULT_LEARNING_RATE, &mut NullSink)
                .unwrap();

        assert_eq!(predicted, Label::One);
        assert_eq!(w, array![0.2, -0.02, 0.02]);
    }

    #[test]
    fn correct_prediction_leaves_weights_untouched() {
        let before = array![-0.05, -0.02, 0.27];
        let mut w = before.clone();

        for (x, target) in [(array![-1., 1., 0.], Label::One), (array![-1., 1., 1.], Label::One)] {
            forward_pass(x.view(), target, &mut w, DEFAULT_LEARNING_RATE, &mut NullSink).unwrap();
            assert_eq!(w, before);
        }
    }

    #[test]
    fn traces_pre_update_weights_and_rounded_sum() {
        let mut w = array![0.2, -0.02, 0.02];
        let x = array![-1., 0., 1.];
        let mut sink = MemorySink::new();

        forward_pass(x.view(), Label::One, &mut w, DEFAULT_LEARNING_RATE, &mut sink).unwrap();

        assert_eq!(
            sink.records(),
            [TraceRecord::Sample {
                input: vec![-1., 0., 1.],
                target: Label::One,
                weights: vec![0.2, -0.02, 0.02],
                weighted_sum: -0.18,
            }]
        );
        assert_eq!(w, array![-0.05, -0.02, 0.27]);
    }

    #[test]
    fn dimension_mismatch_neither_traces_nor_updates() {
        let mut w = array![0.1, 0.2];
        let x = array![-1., 0., 1.];
        let mut sink = MemorySink::new();

        let res = forward_pass(x.view(), Label::One, &mut w, DEFAULT_LEARNING_RATE, &mut sink);

        assert!(matches!(res, Err(PerceptronErr::DimensionMismatch { got: 3, expected: 2 })));
        assert!(sink.records().is_empty());
        assert_eq!(w, array![0.1, 0.2]);
    }
}
