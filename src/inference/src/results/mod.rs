use std::fmt;

use crate::{GeneCount, Hypothesis};

mod error;
pub use error::{DegenerateDistributionError, DistributionField};

/// Decimal places used when rendering posterior probabilities as text.
const FLOAT_FORMAT_PRECISION: usize = 8;

/// Distribution over the three possible gene counts of one individual.
/// Holds raw accumulated mass until `normalize` rescales it to sum to 1.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeneDistribution {
    buckets: [f64; 3],
}

impl GeneDistribution {
    /// Probability (or unnormalized mass) of the given gene count.
    pub fn p(&self, count: GeneCount) -> f64 {
        self.buckets[count.index()]
    }

    /// Total mass currently held across all three buckets.
    pub fn total(&self) -> f64 {
        self.buckets.iter().sum()
    }

    fn add(&mut self, count: GeneCount, p: f64) {
        self.buckets[count.index()] += p;
    }

    fn merge(&mut self, other: &GeneDistribution) {
        for (bucket, value) in self.buckets.iter_mut().zip(other.buckets) {
            *bucket += value;
        }
    }

    /// Rescale buckets to sum to 1. Returns `false` on zero total mass.
    fn normalize(&mut self) -> bool {
        let total = self.total();
        if total == 0.0 {
            return false
        }
        for bucket in &mut self.buckets {
            *bucket /= total;
        }
        true
    }
}

/// Distribution over the two possible trait values of one individual.
/// Holds raw accumulated mass until `normalize` rescales it to sum to 1.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraitDistribution {
    buckets: [f64; 2], // indexed as [false, true]
}

impl TraitDistribution {
    /// Probability (or unnormalized mass) of the given trait value.
    pub fn p(&self, has_trait: bool) -> f64 {
        self.buckets[usize::from(has_trait)]
    }

    /// Total mass currently held across both buckets.
    pub fn total(&self) -> f64 {
        self.buckets.iter().sum()
    }

    fn add(&mut self, has_trait: bool, p: f64) {
        self.buckets[usize::from(has_trait)] += p;
    }

    fn merge(&mut self, other: &TraitDistribution) {
        for (bucket, value) in self.buckets.iter_mut().zip(other.buckets) {
            *bucket += value;
        }
    }

    fn normalize(&mut self) -> bool {
        let total = self.total();
        if total == 0.0 {
            return false
        }
        for bucket in &mut self.buckets {
            *bucket /= total;
        }
        true
    }
}

/// The pair of posterior distributions computed for one individual.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Posterior {
    pub gene       : GeneDistribution,
    pub trait_value: TraitDistribution,
}

/// Per-individual posterior table, index-aligned with a sorted name roster.
///
/// Lifecycle: created zeroed at the start of an inference run, mutated only
/// through `add` (and `merge`, for partitioned accumulation), consumed once
/// by `normalize`, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    names     : Vec<String>,
    posteriors: Vec<Posterior>,
}

impl ResultTable {
    /// Instantiate a zeroed accumulator table over a sorted name roster.
    pub fn new(names: Vec<String>) -> ResultTable {
        let posteriors = vec![Posterior::default(); names.len()];
        ResultTable { names, posteriors }
    }

    /// Number of individuals within this table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether this table covers no individual at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up the posterior pair of a named individual.
    pub fn get(&self, name: &str) -> Option<&Posterior> {
        let index = self.names.binary_search_by(|probe| probe.as_str().cmp(name)).ok()?;
        Some(&self.posteriors[index])
    }

    /// Iterate over (name, posterior) pairs, in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Posterior)> {
        self.names.iter().map(String::as_str).zip(self.posteriors.iter())
    }

    /// Fold one scored hypothesis into the accumulators: every individual's
    /// hypothesized gene-count and trait buckets each receive mass `p`.
    ///
    /// Commutative and associative over hypotheses: accumulation order is
    /// irrelevant, and disjoint hypothesis ranges may be accumulated into
    /// private tables then combined with `merge`.
    ///
    /// # Panics
    /// - if the hypothesis does not cover this table's roster.
    pub fn add(&mut self, hypothesis: &Hypothesis, p: f64) {
        assert_eq!(hypothesis.len(), self.names.len(), "hypothesis roster mismatch");
        for (assignment, posterior) in hypothesis.iter().zip(&mut self.posteriors) {
            posterior.gene.add(assignment.gene, p);
            posterior.trait_value.add(assignment.has_trait, p);
        }
    }

    /// Combine another accumulator into this one by elementwise addition.
    ///
    /// # Panics
    /// - if the two tables cover different rosters.
    pub fn merge(&mut self, other: &ResultTable) {
        assert_eq!(self.names, other.names, "cannot merge accumulators over different rosters");
        for (posterior, theirs) in self.posteriors.iter_mut().zip(&other.posteriors) {
            posterior.gene.merge(&theirs.gene);
            posterior.trait_value.merge(&theirs.trait_value);
        }
    }

    /// Rescale every distribution to sum to 1, consuming the accumulator.
    ///
    /// # Errors
    /// - `DegenerateDistributionError` if any distribution holds zero total
    ///   mass. Unreachable for a nonempty pedigree with well-formed evidence.
    pub fn normalize(mut self) -> Result<ResultTable, DegenerateDistributionError> {
        for (name, posterior) in self.names.iter().zip(&mut self.posteriors) {
            if !posterior.gene.normalize() {
                return Err(DegenerateDistributionError { name: name.clone(), field: DistributionField::Gene })
            }
            if !posterior.trait_value.normalize() {
                return Err(DegenerateDistributionError { name: name.clone(), field: DistributionField::Trait })
            }
        }
        Ok(self)
    }
}

impl fmt::Display for ResultTable {
    /// Historical console format: per individual, gene probabilities for
    /// counts 2, 1, 0, then trait probabilities for true, false, to 8 decimals.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, posterior) in self.iter() {
            writeln!(f, "{name}:")?;
            writeln!(f, "  Gene:")?;
            for count in [GeneCount::Two, GeneCount::One, GeneCount::Zero] {
                writeln!(f, "    {count}: {:.prec$}", posterior.gene.p(count), prec = FLOAT_FORMAT_PRECISION)?;
            }
            writeln!(f, "  Trait:")?;
            writeln!(f, "    True: {:.prec$}",  posterior.trait_value.p(true),  prec = FLOAT_FORMAT_PRECISION)?;
            writeln!(f, "    False: {:.prec$}", posterior.trait_value.p(false), prec = FLOAT_FORMAT_PRECISION)?;
        }
        Ok(())
    }
}
