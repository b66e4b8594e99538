use crate::dataset::Label;

/// A hard threshold activation. Yields `Label::One` only when the pre-activation is strictly
/// above the threshold, so a value sitting exactly on it is classified as `Label::Zero`.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    tresh: f64,
}

impl Step {
    pub fn new(tresh: f64) -> Self {
        Self { tresh }
    }

    pub fn f(&self, z: f64) -> Label {
        if z > self.tresh {
            Label::One
        } else {
            Label::Zero
        }
    }
}

/// The perceptron's activation: a step at zero.
pub fn activation(h: f64) -> Label {
    Step::new(0.).f(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_above_the_threshold() {
        assert_eq!(activation(0.), Label::Zero);
        assert_eq!(activation(-0.), Label::Zero);
    }

    #[test]
    fn boundary_neighbours() {
        for eps in [f64::MIN_POSITIVE, 1e-9, 0.05, 3.] {
            assert_eq!(activation(eps), Label::One);
            assert_eq!(activation(-eps), Label::Zero);
        }
    }

    #[test]
    fn nan_is_classified_as_zero() {
        assert_eq!(activation(f64::NAN), Label::Zero);
    }

    #[test]
    fn custom_threshold() {
        let step = Step::new(0.5);
        assert_eq!(step.f(0.5), Label::Zero);
        assert_eq!(step.f(0.51), Label::One);
    }
}
