use ahash::AHashMap;
use log::{debug, info};
use rayon::prelude::*;

use pedigree::Pedigree;

use crate::{
    hypothesis::{GenePartitions, Hypotheses, Hypothesis, TraitEvidence},
    model::InheritanceModel,
    results::ResultTable,
};

mod error;
pub use error::InferenceError;

/// Largest supported roster: trait subsets are enumerated as machine-word
/// bitmasks. Any realistic pedigree sits far below this bound, the hypothesis
/// space being exponential in the individual count.
const MAX_INDIVIDUALS: usize = 63;

/// Exact posterior-inference engine over a validated pedigree.
///
/// The engine resolves the pedigree into flat, index-aligned lookup tables
/// once, then scores hypotheses against them: names in roster (name) order,
/// per-individual parent indices, and per-individual trait evidence.
/// # Fields
/// - `model`   : immutable inheritance-model constants used for scoring.
/// - `names`   : individual names, in roster order. Hypothesis assignments
///               and accumulator buckets are index-aligned with this roster.
/// - `parents` : `[mother, father]` roster indices. `None` for founders.
/// - `evidence`: observed trait values, `None` where unobserved.
pub struct InferenceEngine {
    model   : InheritanceModel,
    names   : Vec<String>,
    parents : Vec<Option<[usize; 2]>>,
    evidence: Vec<Option<bool>>,
}

impl InferenceEngine {
    /// Resolve a pedigree and a model into an inference engine.
    ///
    /// # Errors
    /// - `InferenceError::PedigreeTooLarge` if the pedigree holds more than 63
    ///   individuals.
    pub fn new(pedigree: &Pedigree, model: InheritanceModel) -> Result<InferenceEngine, InferenceError> {
        if pedigree.len() > MAX_INDIVIDUALS {
            return Err(InferenceError::PedigreeTooLarge { count: pedigree.len() })
        }

        let names: Vec<String> = pedigree.names().map(str::to_string).collect();
        let index: AHashMap<&str, usize> = pedigree.names().enumerate().map(|(i, name)| (name, i)).collect();

        let mut parents  = Vec::with_capacity(names.len());
        let mut evidence = Vec::with_capacity(names.len());
        for individual in pedigree.iter() {
            evidence.push(individual.observed_trait());
            // Parent names are guaranteed to resolve: the pedigree was
            // validated at construction.
            parents.push(individual.parents().map(|p| [index[p.mother()], index[p.father()]]));
        }

        Ok(InferenceEngine { model, names, parents, evidence })
    }

    /// Lazily enumerate every hypothesis consistent with the pedigree's
    /// observed trait evidence.
    pub fn hypotheses(&self) -> Hypotheses {
        Hypotheses::new(&self.evidence)
    }

    /// Compute the joint probability mass of one hypothesis.
    ///
    /// Probabilities multiply independently across individuals: each trait
    /// value depends only on its own gene count, and each gene count depends
    /// only on the individual's parents, whose hypothesized gene counts are
    /// read from the same, already-complete hypothesis. Processing order is
    /// therefore irrelevant. The result may legitimately be 0.
    pub fn joint_probability(&self, hypothesis: &Hypothesis) -> f64 {
        let mut joint = 1.0;
        for (i, assignment) in hypothesis.iter().enumerate() {
            let gene_probability = match self.parents[i] {
                None => self.model.gene_prior(assignment.gene),
                Some([mother, father]) => {
                    let mother_gene = hypothesis.assignment(mother).gene;
                    let father_gene = hypothesis.assignment(father).gene;
                    self.model.child_gene_distribution(father_gene, mother_gene)[assignment.gene.index()]
                }
            };
            joint *= gene_probability * self.model.penetrance(assignment.gene, assignment.has_trait);
        }
        joint
    }

    /// Single-threaded exact inference pass:
    /// enumerate -> score -> accumulate -> normalize.
    ///
    /// # Errors
    /// - `InferenceError::DegenerateDistribution` if a posterior sums to zero
    ///   mass (unreachable for a nonempty pedigree).
    pub fn run(&self) -> Result<ResultTable, InferenceError> {
        info!("Enumerating hypotheses over {} individual(s)...", self.names.len());
        let mut table = ResultTable::new(self.names.clone());
        let mut scored = 0u64;
        for hypothesis in self.hypotheses() {
            table.add(&hypothesis, self.joint_probability(&hypothesis));
            scored += 1;
        }
        debug!("Scored {scored} hypothesis(es). Normalizing...");
        Ok(table.normalize()?)
    }

    /// Partitioned exact inference pass: the trait-subset range is split
    /// across rayon workers, each folding scored hypotheses into a private
    /// accumulator; partial tables are merged by elementwise addition before
    /// a single normalization. Semantically identical to `run`, the
    /// accumulation being a commutative monoid.
    ///
    /// # Errors
    /// - `InferenceError::DegenerateDistribution` if a posterior sums to zero
    ///   mass (unreachable for a nonempty pedigree).
    pub fn run_parallel(&self) -> Result<ResultTable, InferenceError> {
        let n = self.names.len();
        let evidence = TraitEvidence::from_observed(&self.evidence);
        info!("Enumerating hypotheses over {n} individual(s) across workers...");

        let table = (0..(1u64 << n))
            .into_par_iter()
            .filter(|&mask| evidence.admits(mask))
            .fold(
                || ResultTable::new(self.names.clone()),
                |mut local, mask| {
                    for genes in GenePartitions::new(n) {
                        let hypothesis = Hypothesis::from_parts(&genes, mask);
                        local.add(&hypothesis, self.joint_probability(&hypothesis));
                    }
                    local
                },
            )
            .reduce(
                || ResultTable::new(self.names.clone()),
                |mut merged, partial| { merged.merge(&partial); merged },
            );

        debug!("All workers merged. Normalizing...");
        Ok(table.normalize()?)
    }
}
