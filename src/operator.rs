use strum::{Display, VariantArray};

/// A left-associative binary operator combining the running value with the
/// next operand.
///
/// Every operator must be monotonically non-decreasing in its left operand
/// when both operands are non-negative. The equation search prunes any branch
/// whose running value exceeds the target and relies on this to stay sound,
/// so an operator like subtraction cannot be added here.
#[derive(Copy, Clone, Debug, Display, Eq, Hash, PartialEq, VariantArray)]
pub enum OperatorKind {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "*")]
    Multiply,
    #[strum(to_string = "||")]
    Concatenate,
}

impl OperatorKind {
    /// Applies the operator, or returns `None` if the result overflows `i64`.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Concatenate => {
                let digits = rhs.checked_ilog10().unwrap_or(0) + 1;
                lhs.checked_mul(10i64.checked_pow(digits)?)?.checked_add(rhs)
            }
        }
    }
}

/// The operators a solver may place between operands.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OperatorSet(&'static [OperatorKind]);

impl OperatorSet {
    pub fn variant_one() -> Self {
        Self(&[OperatorKind::Add, OperatorKind::Multiply])
    }

    pub fn variant_two() -> Self {
        Self(OperatorKind::VARIANTS)
    }

    pub fn for_part(part: u8) -> Option<Self> {
        match part {
            1 => Some(Self::variant_one()),
            2 => Some(Self::variant_two()),
            _ => None,
        }
    }

    pub fn operators(self) -> &'static [OperatorKind] {
        self.0
    }

    pub fn contains(self, kind: OperatorKind) -> bool {
        self.0.contains(&kind)
    }
}
