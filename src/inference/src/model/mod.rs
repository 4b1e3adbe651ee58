use crate::GeneCount;

/// Default unconditional probability for a founder individual to carry
/// zero, one, or two copies of the variant allele.
const DEFAULT_GENE_PRIOR: [f64; 3] = [0.96, 0.03, 0.01];

/// Default probability of exhibiting the observable trait, given a gene count.
/// Rows index the gene count; columns index the trait value as [false, true].
const DEFAULT_PENETRANCE: [[f64; 2]; 3] = [
    [0.99, 0.01], // zero copies
    [0.44, 0.56], // one copy
    [0.35, 0.65], // two copies
];

/// Default probability that a transmitted gene copy flips state in transit.
const DEFAULT_MUTATION_RATE: f64 = 0.01;

/// Per-parent transmission probabilities for a single gamete.
/// # Fields
/// - `variant`    : probability the parent passes the variant allele on.
/// - `non_variant`: probability the parent passes the non-variant allele on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transmission {
    pub variant    : f64,
    pub non_variant: f64,
}

/// Fixed constants of the genetic inheritance model.
///
/// An immutable configuration value, passed explicitly wherever transmission
/// or emission probabilities are needed. Alternate constants may be injected
/// for testing; `Default` supplies the reference values.
/// # Fields
/// - `gene_prior`   : founder probability of carrying 0, 1 or 2 copies.
/// - `penetrance`   : `penetrance[g][t]` = probability of trait value `t`
///                    (indexed as [false, true]) given gene count `g`.
/// - `mutation_rate`: probability a transmitted copy flips state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InheritanceModel {
    pub gene_prior   : [f64; 3],
    pub penetrance   : [[f64; 2]; 3],
    pub mutation_rate: f64,
}

impl Default for InheritanceModel {
    fn default() -> Self {
        Self {
            gene_prior   : DEFAULT_GENE_PRIOR,
            penetrance   : DEFAULT_PENETRANCE,
            mutation_rate: DEFAULT_MUTATION_RATE,
        }
    }
}

impl InheritanceModel {
    /// Build a model from the probability of exhibiting the trait at each gene
    /// count. The complementary no-trait column is filled in automatically.
    /// # Arguments
    /// - `gene_prior`      : founder gene-count prior, for 0, 1 and 2 copies.
    /// - `trait_given_gene`: `trait_given_gene[g]` = P(trait | g copies).
    /// - `mutation_rate`   : per-copy transmission flip probability.
    pub fn new(gene_prior: [f64; 3], trait_given_gene: [f64; 3], mutation_rate: f64) -> Self {
        let penetrance = trait_given_gene.map(|p| [1.0 - p, p]);
        Self { gene_prior, penetrance, mutation_rate }
    }

    /// Unconditional probability for a founder to carry the given gene count.
    #[inline]
    pub fn gene_prior(&self, count: GeneCount) -> f64 {
        self.gene_prior[count.index()]
    }

    /// Probability of the given trait value, conditioned on a gene count.
    #[inline]
    pub fn penetrance(&self, count: GeneCount, has_trait: bool) -> f64 {
        self.penetrance[count.index()][usize::from(has_trait)]
    }

    /// Per-gamete transmission probabilities for a parent carrying `parent`
    /// copies of the variant allele:
    /// - two copies: the variant is passed on, barring a mutation.
    /// - one copy  : either allele is passed on with equal probability.
    /// - no copy   : only a mutation can pass the variant on.
    pub fn transmission(&self, parent: GeneCount) -> Transmission {
        match parent {
            GeneCount::Two  => Transmission { variant: 1.0 - self.mutation_rate, non_variant: self.mutation_rate       },
            GeneCount::One  => Transmission { variant: 0.5,                      non_variant: 0.5                      },
            GeneCount::Zero => Transmission { variant: self.mutation_rate,       non_variant: 1.0 - self.mutation_rate },
        }
    }

    /// Distribution over a child's gene count, given both parents' gene counts.
    /// Each parent transmits one copy independently; the returned buckets are
    /// indexed by the child's gene count and sum to 1 for any input pair.
    pub fn child_gene_distribution(&self, father: GeneCount, mother: GeneCount) -> [f64; 3] {
        let father = self.transmission(father);
        let mother = self.transmission(mother);
        [
            father.non_variant * mother.non_variant,
            father.variant * mother.non_variant + father.non_variant * mother.variant,
            father.variant * mother.variant,
        ]
    }
}
