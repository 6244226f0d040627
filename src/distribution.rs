use crate::errors::GeometryError;
use crate::misc::{normalized, FloatingPoint};

/// The closed forms a [`Distribution`] can take.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionKind<T: FloatingPoint> {
    /// `f(u) = u`
    Linear,
    /// `f(u) = cos((1 - u) * pi) / 2 + 1/2`, dense at both ends.
    CosineBothEnds,
    /// `f(u) = cos((u - 1) * pi / 2)`, dense at `u = 0`.
    CosineEnd0,
    /// `f(u) = 1 - cos(u * pi / 2)`, dense at `u = 1`.
    CosineEnd1,
    /// `f(u) = (e^(r u) - 1) / (e^r - 1)` with a non-zero ratio `r`.
    Exponential { ratio: T },
    /// `f(u) = u^p` with a positive exponent `p`.
    Power { exponent: T },
}

impl<T: FloatingPoint> DistributionKind<T> {
    fn eval(&self, u: T) -> T {
        let one = T::one();
        let two = one + one;
        match self {
            Self::Linear => u,
            Self::CosineBothEnds => ((one - u) * T::pi()).cos() / two + one / two,
            Self::CosineEnd0 => ((u - one) * T::frac_pi_2()).cos(),
            Self::CosineEnd1 => one - (u * T::frac_pi_2()).cos(),
            Self::Exponential { ratio } => ((*ratio * u).exp() - one) / (ratio.exp() - one),
            Self::Power { exponent } => u.powf(*exponent),
        }
    }
}

/// A monotonic reparametrization of [0, 1] biasing mesh point spacing.
/// Satisfies `f(0) = 0` and `f(1) = 1`; the flipped form is `1 - f(1 - u)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution<T: FloatingPoint> {
    kind: DistributionKind<T>,
    flip: bool,
}

impl<T: FloatingPoint> Distribution<T> {
    pub fn linear() -> Self {
        Self {
            kind: DistributionKind::Linear,
            flip: false,
        }
    }

    pub fn cosine_both_ends() -> Self {
        Self {
            kind: DistributionKind::CosineBothEnds,
            flip: false,
        }
    }

    pub fn cosine_end0() -> Self {
        Self {
            kind: DistributionKind::CosineEnd0,
            flip: false,
        }
    }

    pub fn cosine_end1() -> Self {
        Self {
            kind: DistributionKind::CosineEnd1,
            flip: false,
        }
    }

    /// Exponential spacing with the given ratio.
    /// # Failures
    /// - if the ratio is zero (the closed form divides by `e^r - 1`)
    pub fn exponential(ratio: T) -> anyhow::Result<Self> {
        if ratio == T::zero() {
            return Err(
                GeometryError::InvalidDistribution("exponential ratio must be non-zero".into())
                    .into(),
            );
        }
        Ok(Self {
            kind: DistributionKind::Exponential { ratio },
            flip: false,
        })
    }

    /// Power-law spacing `u^p`.
    /// # Failures
    /// - if the exponent is not positive (monotonicity would be lost)
    pub fn power(exponent: T) -> anyhow::Result<Self> {
        if exponent <= T::zero() {
            return Err(
                GeometryError::InvalidDistribution("power exponent must be positive".into())
                    .into(),
            );
        }
        Ok(Self {
            kind: DistributionKind::Power { exponent },
            flip: false,
        })
    }

    pub fn kind(&self) -> DistributionKind<T> {
        self.kind
    }

    pub fn is_flipped(&self) -> bool {
        self.flip
    }

    /// Toggle the flip convention `f_flip(u) = 1 - f(1 - u)`.
    pub fn flipped(mut self) -> Self {
        self.flip = !self.flip;
        self
    }

    /// Evaluate the distribution at a normalized parameter.
    /// # Failures
    /// - if `u` is outside [0, 1]
    pub fn apply(&self, u: T) -> anyhow::Result<T> {
        let u = normalized(u)?;
        let one = T::one();
        Ok(if self.flip {
            one - self.kind.eval(one - u)
        } else {
            self.kind.eval(u)
        })
    }
}

impl<T: FloatingPoint> Default for Distribution<T> {
    fn default() -> Self {
        Self::linear()
    }
}
