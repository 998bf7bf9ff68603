// Fri Oct 16 2026 - Alex

use super::category::{CategoryPositions, Classifier};
use crate::config::NamingPolicy;
use crate::deps::DependencyName;

/// Required relative order of category blocks:
/// predefine, early utility, parser, runtime io, runtime utility, late utility.
/// Each applies only when both of its blocks are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderConstraint {
    PredefineBeforeUtility,
    UtilityBeforeParser,
    ParserBeforeRuntimeIo,
    RuntimeIoBeforeRuntimeUtility,
    RuntimeUtilityBeforeLateUtility,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBreach {
    pub constraint: OrderConstraint,
    /// Index of the block that should come first.
    pub first: usize,
    /// Index of the block that should come second.
    pub second: usize,
}

impl OrderConstraint {
    pub const ALL: [OrderConstraint; 5] = [
        OrderConstraint::PredefineBeforeUtility,
        OrderConstraint::UtilityBeforeParser,
        OrderConstraint::ParserBeforeRuntimeIo,
        OrderConstraint::RuntimeIoBeforeRuntimeUtility,
        OrderConstraint::RuntimeUtilityBeforeLateUtility,
    ];

    /// The two indices this constraint compares, when both blocks exist.
    fn operands(&self, pos: &CategoryPositions) -> Option<(usize, usize)> {
        fn first(v: &[usize]) -> Option<usize> {
            v.first().copied()
        }
        match self {
            OrderConstraint::PredefineBeforeUtility => Some((first(&pos.predefine)?, first(&pos.early_utility)?)),
            OrderConstraint::UtilityBeforeParser => Some((pos.early_utility.last().copied()?, first(&pos.parser)?)),
            OrderConstraint::ParserBeforeRuntimeIo => Some((first(&pos.parser)?, first(&pos.runtime_io)?)),
            OrderConstraint::RuntimeIoBeforeRuntimeUtility => {
                Some((first(&pos.runtime_io)?, first(&pos.runtime_utility)?))
            }
            OrderConstraint::RuntimeUtilityBeforeLateUtility => {
                Some((first(&pos.runtime_utility)?, first(&pos.late_utility)?))
            }
        }
    }

    pub fn check(&self, pos: &CategoryPositions) -> Option<OrderBreach> {
        let (first, second) = self.operands(pos)?;
        if first > second {
            Some(OrderBreach {
                constraint: *self,
                first,
                second,
            })
        } else {
            None
        }
    }
}

impl OrderBreach {
    pub fn message(&self) -> String {
        let (first, second) = (self.first, self.second);
        match self.constraint {
            OrderConstraint::PredefineBeforeUtility => format!(
                "uwvm_predefine/* must appear before utils/* (found pre at {}, utils at {})",
                first, second
            ),
            OrderConstraint::UtilityBeforeParser => format!(
                "utils/* (early) must appear before parser/* (last early utils at {}, parser at {})",
                first, second
            ),
            OrderConstraint::ParserBeforeRuntimeIo => format!(
                "parser/* must appear before uwvm/io/* (parser at {}, uwvm/io at {})",
                first, second
            ),
            OrderConstraint::RuntimeIoBeforeRuntimeUtility => format!(
                "uwvm/io/* must appear before uwvm/utils/* (uwvm/io at {}, uwvm/utils at {})",
                first, second
            ),
            OrderConstraint::RuntimeUtilityBeforeLateUtility => format!(
                "uwvm/utils/* must appear before late utils/* (uwvm/utils at {}, late utils at {})",
                first, second
            ),
        }
    }
}

pub struct OrderChecker<'a> {
    classifier: Classifier<'a>,
}

impl<'a> OrderChecker<'a> {
    pub fn new(naming: &'a NamingPolicy) -> Self {
        Self {
            classifier: Classifier::new(naming),
        }
    }

    /// Every constraint the sequence breaks, in constraint order.
    pub fn check(&self, seq: &[DependencyName]) -> Vec<OrderBreach> {
        if seq.is_empty() {
            return Vec::new();
        }
        let positions = CategoryPositions::from_sequence(seq, &self.classifier);
        OrderConstraint::ALL.iter().filter_map(|c| c.check(&positions)).collect()
    }
}
