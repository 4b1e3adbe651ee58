use crate::GeneCount;

use super::Hypothesis;

/// Lazily yields every subset of an `n`-element roster as a bitmask,
/// 2^n masks in ascending order. Restartable: a fresh `Subsets` starts back
/// at the empty subset.
#[derive(Debug, Clone)]
pub(crate) struct Subsets {
    next: u64,
    end : u64,
}

impl Subsets {
    /// # Panics
    /// - if `n` exceeds 63 (masks are machine words; callers bound the roster).
    pub fn new(n: usize) -> Subsets {
        assert!(n <= 63, "subset masks are limited to 63 elements (got {n})");
        Subsets { next: 0, end: 1 << n }
    }
}

impl Iterator for Subsets {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next == self.end {
            return None
        }
        let mask = self.next;
        self.next += 1;
        Some(mask)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Subsets {}

/// Lazily yields every assignment of a gene count to each of `n` individuals,
/// 3^n assignments total, through a base-3 odometer over `GeneCount::ALL`.
/// Restartable: a fresh `GenePartitions` starts back at the all-zero partition.
#[derive(Debug, Clone)]
pub(crate) struct GenePartitions {
    state  : Vec<GeneCount>,
    started: bool,
    done   : bool,
}

impl GenePartitions {
    pub fn new(n: usize) -> GenePartitions {
        GenePartitions { state: vec![GeneCount::Zero; n], started: false, done: false }
    }
}

impl Iterator for GenePartitions {
    type Item = Vec<GeneCount>;

    fn next(&mut self) -> Option<Vec<GeneCount>> {
        if self.done {
            return None
        }
        if !self.started {
            self.started = true;
            return Some(self.state.clone())
        }
        // ---- Increment the least-significant slot, carrying Two -> Zero.
        for i in 0..self.state.len() {
            match self.state[i] {
                GeneCount::Zero => { self.state[i] = GeneCount::One; return Some(self.state.clone()) }
                GeneCount::One  => { self.state[i] = GeneCount::Two; return Some(self.state.clone()) }
                GeneCount::Two  => { self.state[i] = GeneCount::Zero }
            }
        }
        self.done = true; // every slot carried over: the odometer wrapped around.
        None
    }
}

/// Bitmask form of the observed trait evidence.
/// A trait subset is admissible iff it contains every individual observed with
/// the trait, and none observed without it. Unobserved individuals are
/// unconstrained.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TraitEvidence {
    required : u64,
    forbidden: u64,
}

impl TraitEvidence {
    pub fn from_observed(evidence: &[Option<bool>]) -> TraitEvidence {
        let (mut required, mut forbidden) = (0u64, 0u64);
        for (i, observed) in evidence.iter().enumerate() {
            match observed {
                Some(true)  => required  |= 1 << i,
                Some(false) => forbidden |= 1 << i,
                None        => (),
            }
        }
        TraitEvidence { required, forbidden }
    }

    /// Check whether a trait subset contradicts the evidence.
    #[inline]
    pub fn admits(&self, mask: u64) -> bool {
        mask & self.required == self.required && mask & self.forbidden == 0
    }
}

/// Lazily enumerates every `Hypothesis` consistent with the observed trait
/// evidence.
///
/// Trait subsets are enumerated in the outer loop; any subset contradicting
/// the evidence is discarded before gene enumeration, so the unconstrained
/// product space is never materialized. Each surviving subset is combined
/// with all 3^n gene partitions: the gene dimension is deliberately left
/// unpruned, every gene count having nonzero probability under the model.
///
/// At least one hypothesis always survives well-formed evidence, since the
/// evidence itself describes an admissible trait subset.
#[derive(Debug, Clone)]
pub struct Hypotheses {
    n           : usize,
    evidence    : TraitEvidence,
    trait_masks : Subsets,
    current_mask: Option<u64>,
    partitions  : GenePartitions,
}

impl Hypotheses {
    /// Build an enumerator from per-individual observed trait values, given in
    /// roster order.
    ///
    /// # Panics
    /// - if the roster holds more than 63 individuals.
    pub fn new(evidence: &[Option<bool>]) -> Hypotheses {
        Hypotheses {
            n           : evidence.len(),
            evidence    : TraitEvidence::from_observed(evidence),
            trait_masks : Subsets::new(evidence.len()),
            current_mask: None,
            partitions  : GenePartitions::new(evidence.len()),
        }
    }

    /// Advance the outer loop to the next evidence-admissible trait subset.
    fn next_admissible_mask(&mut self) -> Option<u64> {
        let evidence = self.evidence;
        self.trait_masks.by_ref().find(|&mask| evidence.admits(mask))
    }
}

impl Iterator for Hypotheses {
    type Item = Hypothesis;

    fn next(&mut self) -> Option<Hypothesis> {
        loop {
            match self.current_mask {
                None => {
                    let mask = self.next_admissible_mask()?;
                    self.partitions = GenePartitions::new(self.n);
                    self.current_mask = Some(mask);
                }
                Some(mask) => match self.partitions.next() {
                    Some(genes) => return Some(Hypothesis::from_parts(&genes, mask)),
                    None        => self.current_mask = None,
                },
            }
        }
    }
}
