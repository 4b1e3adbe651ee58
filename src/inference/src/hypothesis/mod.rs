use std::fmt;

use crate::GeneCount;

mod enumerator;
pub use enumerator::Hypotheses;
pub(crate) use enumerator::{GenePartitions, TraitEvidence};

/// The (gene count, trait value) pair hypothesized for a single individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub gene     : GeneCount,
    pub has_trait: bool,
}

/// One complete assignment of a gene count and a trait value to every
/// individual of a pedigree.
///
/// Assignments are index-aligned with the inference engine's roster, i.e.
/// the pedigree's individual names in name order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hypothesis {
    assignments: Vec<Assignment>,
}

impl Hypothesis {
    /// Assemble a hypothesis from a gene partition and a trait bitmask.
    /// Bit `i` of `trait_mask` marks individual `i` as exhibiting the trait.
    pub(crate) fn from_parts(genes: &[GeneCount], trait_mask: u64) -> Hypothesis {
        let assignments = genes.iter().enumerate()
            .map(|(i, &gene)| Assignment { gene, has_trait: trait_mask & (1 << i) != 0 })
            .collect();
        Hypothesis { assignments }
    }

    /// Number of individuals covered by this hypothesis.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Check whether this hypothesis covers no individual (empty pedigree).
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Return the assignment of the individual at the given roster index.
    ///
    /// # Panics
    /// - if `index` is out of bounds.
    #[inline]
    pub fn assignment(&self, index: usize) -> Assignment {
        self.assignments[index]
    }

    /// Iterate over per-individual assignments, in roster order.
    pub fn iter(&self) -> impl Iterator<Item = Assignment> + '_ {
        self.assignments.iter().copied()
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, a) in self.assignments.iter().enumerate() {
            let sep = if i == 0 { "" } else { " " };
            write!(f, "{sep}[{}:{}{}]", i, a.gene, if a.has_trait { "+" } else { "-" })?;
        }
        Ok(())
    }
}
