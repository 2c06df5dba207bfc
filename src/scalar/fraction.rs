use crate::scalar::scalar::Scalar;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::str::FromStr;
use thiserror::Error;

/// Exact rational number, always stored in lowest terms with a positive
/// denominator.
///
/// Elimination over `Fraction` never rounds, so inverses come out exact.
#[derive(Debug, Clone)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFractionError {
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("Denominator cannot be zero")]
    ZeroDenominator,
}

impl Fraction {
    /// Panics if `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        assert!(!denom.is_zero(), "Denominator cannot be zero");

        let g = numer.gcd(&denom);
        let (numer, denom) = (numer / &g, denom / &g);
        if denom.is_negative() {
            Fraction {
                numer: -numer,
                denom: -denom,
            }
        } else {
            Fraction { numer, denom }
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Fraction {
        Fraction {
            numer: BigInt::from(value),
            denom: BigInt::one(),
        }
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    /// Parses `"7"`, `"-3/4"` or `"6 / 8"`.
    fn from_str(s: &str) -> Result<Fraction, ParseFractionError> {
        let parse = |part: &str| {
            part.trim()
                .parse::<BigInt>()
                .map_err(|_| ParseFractionError::InvalidNumber(part.to_string()))
        };

        let (numer, denom) = match s.split_once('/') {
            Some((numer, denom)) => (parse(numer)?, parse(denom)?),
            None => (parse(s)?, BigInt::one()),
        };
        if denom.is_zero() {
            return Err(ParseFractionError::ZeroDenominator);
        }
        Ok(Fraction::new(numer, denom))
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.denom == rhs.denom {
            return Fraction::new(self.numer + rhs.numer, self.denom);
        }
        Fraction::new(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            self.denom * rhs.denom,
        )
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + -rhs
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    /// Panics when dividing by zero.
    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.numer * rhs.denom, self.denom * rhs.numer)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(0)
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(1)
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.numer * &rhs.denom == &rhs.numer * &self.denom
    }
}

impl Eq for Fraction {}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.numer == &self.denom * *rhs
    }
}

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        (&self.numer * &rhs.denom).cmp(&(&rhs.numer * &self.denom))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            return write!(f, "{}", self.numer);
        }
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl Scalar for Fraction {
    fn approx_eq(&self, rhs: &Fraction) -> bool {
        self == rhs
    }

    fn negated(&self) -> Fraction {
        -self.clone()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_fraction_normalization() {
        let f = Fraction::new(BigInt::from(6), BigInt::from(-8));
        assert_eq!(f.numer(), &BigInt::from(-3));
        assert_eq!(f.denom(), &BigInt::from(4));
        assert_eq!(f.to_string(), "-3/4");
        assert_eq!(frac("10/5").to_string(), "2");
        assert!(frac("10/5").is_integer());
    }

    #[test]
    fn test_fraction_parse() {
        assert_eq!(frac("6 / 8"), frac("3/4"));
        assert_eq!(frac("-7"), -7);
        assert_eq!(
            "1/0".parse::<Fraction>(),
            Err(ParseFractionError::ZeroDenominator)
        );
        assert!(matches!(
            "x/2".parse::<Fraction>(),
            Err(ParseFractionError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_fraction_arithmetic() {
        assert_eq!(frac("1/2") + frac("1/3"), frac("5/6"));
        assert_eq!(frac("1/2") - frac("1/3"), frac("1/6"));
        assert_eq!(frac("2/3") * frac("9/4"), frac("3/2"));
        assert_eq!(frac("2/3") / frac("4/9"), frac("3/2"));
        assert_eq!(frac("2/7").reciprocal(), frac("7/2"));
        assert_eq!(frac("2/7").negated(), frac("-2/7"));
        assert_eq!(
            vec![frac("1/2"), frac("1/4"), frac("1/4")]
                .into_iter()
                .sum::<Fraction>(),
            1
        );
        assert!(frac("1/3") < frac("1/2"));
        assert!(frac("-1/2") < frac("1/3"));
    }

    #[test]
    fn test_fraction_is_exact() {
        let third = frac("1/3");
        assert!(!third.approx_eq(&frac("333333333333/1000000000000")));
        assert!((third.clone() + third.clone() + third).approx_eq(&Fraction::one()));
    }
}
