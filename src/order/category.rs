// Fri Oct 16 2026 - Alex

use crate::config::NamingPolicy;
use crate::deps::DependencyName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Predefine,
    Utility,
    Parser,
    RuntimeIo,
    RuntimeUtility,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Predefine => "uwvm_predefine/*",
            Category::Utility => "utils/*",
            Category::Parser => "parser/*",
            Category::RuntimeIo => "uwvm/io/*",
            Category::RuntimeUtility => "uwvm/utils/*",
        }
    }
}

fn is_or_under(name: &str, root: &str) -> bool {
    match name.strip_prefix(root) {
        Some(tail) => tail.is_empty() || tail.starts_with('.'),
        None => false,
    }
}

pub struct Classifier<'a> {
    naming: &'a NamingPolicy,
}

impl<'a> Classifier<'a> {
    pub fn new(naming: &'a NamingPolicy) -> Self {
        Self { naming }
    }

    fn strip<'n>(&self, name: &'n str) -> &'n str {
        name.strip_prefix(self.naming.dotted_prefix().as_str()).unwrap_or(name)
    }

    pub fn is_predefine(&self, name: &str) -> bool {
        self.strip(name).starts_with("uwvm_predefine.")
    }

    /// Helper utilities and the umbrella dependency. The predefine subtree has
    /// its own `utils` segment and is never counted here.
    pub fn is_utility(&self, name: &str) -> bool {
        if self.is_predefine(name) {
            return false;
        }
        is_or_under(name, &self.naming.umbrella) || self.strip(name).starts_with("utils.")
    }

    pub fn is_parser(&self, name: &str) -> bool {
        self.strip(name).starts_with("parser.")
    }

    pub fn is_runtime_io(&self, name: &str) -> bool {
        is_or_under(self.strip(name), "uwvm.io")
    }

    pub fn is_runtime_utility(&self, name: &str) -> bool {
        is_or_under(self.strip(name), "uwvm.utils")
    }

    /// Partition names are never classified.
    pub fn classify(&self, name: &DependencyName) -> Option<Category> {
        if name.is_partition() {
            return None;
        }
        let name = name.as_str();
        if self.is_predefine(name) {
            Some(Category::Predefine)
        } else if self.is_utility(name) {
            Some(Category::Utility)
        } else if self.is_parser(name) {
            Some(Category::Parser)
        } else if self.is_runtime_io(name) {
            Some(Category::RuntimeIo)
        } else if self.is_runtime_utility(name) {
            Some(Category::RuntimeUtility)
        } else {
            None
        }
    }
}

/// Indices of each category within one dependency sequence.
///
/// Utility indices are split around the first runtime-utility index: helpers
/// before it are "early", helpers after it are "late". Without any runtime
/// utility every helper is early.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPositions {
    pub predefine: Vec<usize>,
    pub early_utility: Vec<usize>,
    pub late_utility: Vec<usize>,
    pub parser: Vec<usize>,
    pub runtime_io: Vec<usize>,
    pub runtime_utility: Vec<usize>,
}

impl CategoryPositions {
    pub fn from_sequence(seq: &[DependencyName], classifier: &Classifier<'_>) -> Self {
        let mut positions = Self::default();
        let mut utility = Vec::new();

        for (i, name) in seq.iter().enumerate() {
            match classifier.classify(name) {
                Some(Category::Predefine) => positions.predefine.push(i),
                Some(Category::Utility) => utility.push(i),
                Some(Category::Parser) => positions.parser.push(i),
                Some(Category::RuntimeIo) => positions.runtime_io.push(i),
                Some(Category::RuntimeUtility) => positions.runtime_utility.push(i),
                None => {}
            }
        }

        match positions.runtime_utility.first().copied() {
            Some(pivot) => {
                positions.early_utility = utility.iter().copied().filter(|&i| i < pivot).collect();
                positions.late_utility = utility.into_iter().filter(|&i| i > pivot).collect();
            }
            None => positions.early_utility = utility,
        }

        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("uwvm2.uwvm_predefine.io", Some(Category::Predefine))]
    #[case("uwvm2.uwvm_predefine.utils.ansies", Some(Category::Predefine))]
    #[case("uwvm_predefine.io", Some(Category::Predefine))]
    #[case("fast_io", Some(Category::Utility))]
    #[case("fast_io.dsal", Some(Category::Utility))]
    #[case("fast_iox", None)]
    #[case("uwvm2.utils.container", Some(Category::Utility))]
    #[case("uwvm2.parser.wasm.base", Some(Category::Parser))]
    #[case("uwvm2.uwvm.io", Some(Category::RuntimeIo))]
    #[case("uwvm2.uwvm.io.output", Some(Category::RuntimeIo))]
    #[case("uwvm2.uwvm.iox", None)]
    #[case("uwvm2.uwvm.utils", Some(Category::RuntimeUtility))]
    #[case("uwvm2.uwvm.utils.memory", Some(Category::RuntimeUtility))]
    #[case("uwvm2.uwvm.wasm.storage", None)]
    #[case("uwvm2.object.memory", None)]
    #[case(":def", None)]
    #[case(":utils", None)]
    fn test_classify(#[case] name: &str, #[case] expected: Option<Category>) {
        let naming = NamingPolicy::default();
        let classifier = Classifier::new(&naming);
        assert_eq!(classifier.classify(&DependencyName::from(name)), expected);
    }

    #[test]
    fn test_utility_split_around_runtime_utility() {
        let naming = NamingPolicy::default();
        let classifier = Classifier::new(&naming);
        let seq: Vec<DependencyName> = [
            "fast_io",
            "uwvm2.utils.container",
            "uwvm2.uwvm.utils.memory",
            "uwvm2.utils.debug",
        ]
        .iter()
        .map(|s| DependencyName::from(*s))
        .collect();

        let positions = CategoryPositions::from_sequence(&seq, &classifier);
        assert_eq!(positions.early_utility, vec![0, 1]);
        assert_eq!(positions.late_utility, vec![3]);
        assert_eq!(positions.runtime_utility, vec![2]);
    }

    #[test]
    fn test_all_utilities_early_without_runtime_utility() {
        let naming = NamingPolicy::default();
        let classifier = Classifier::new(&naming);
        let seq = vec![DependencyName::from("uwvm2.parser.wasm"), DependencyName::from("fast_io")];

        let positions = CategoryPositions::from_sequence(&seq, &classifier);
        assert_eq!(positions.early_utility, vec![1]);
        assert!(positions.late_utility.is_empty());
    }
}
