use std::collections::{BTreeMap, HashMap};

use log::trace;

use crate::{Individual, IndividualRecord};

mod error;
pub use error::StructureError;

/// Three-state DFS mark used while checking the parent graph for cycles.
enum Mark { InProgress, Done }

/// A validated, immutable family pedigree.
/// # Fields
/// - `individuals`: BTreeMap containing all members of the pedigree (founders and offspring)
///                  - Key  : (String)     - name of the individual
///                  - Value: (Individual) - the validated individual.
///
/// Individuals reference their parents by name. Every such back-reference is
/// guaranteed to resolve within `self.individuals`, and the parent graph is
/// guaranteed to be an acyclic forest. Both invariants are checked once, during
/// `from_records`, and never re-checked during traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Pedigree {
    individuals: BTreeMap<String, Individual>,
}

impl Pedigree {
    /// Build and validate a pedigree from a collection of raw records.
    ///
    /// # Errors
    /// - `StructureError::DuplicateIndividual`  if two records share a name.
    /// - `StructureError::HalfSpecifiedParents` if exactly one parent is recorded.
    /// - `StructureError::UnknownParent`        if a parent name does not resolve.
    /// - `StructureError::ParentCycle`          if any individual is their own ancestor.
    pub fn from_records<I>(records: I) -> Result<Pedigree, StructureError>
    where
        I: IntoIterator<Item = IndividualRecord>,
    {
        let mut individuals = BTreeMap::new();
        for record in records {
            let parents = match (record.mother.as_deref(), record.father.as_deref()) {
                (None, None)             => None,
                (Some(mother), Some(father)) => Some((mother, father)),
                _ => return Err(StructureError::HalfSpecifiedParents { name: record.name }),
            };
            let individual = Individual::new(&record.name, parents, record.observed_trait);
            trace!("Registering individual: {individual}");
            if individuals.insert(record.name.clone(), individual).is_some() {
                return Err(StructureError::DuplicateIndividual { name: record.name });
            }
        }

        let pedigree = Pedigree { individuals };
        pedigree.check_parent_references()?;
        pedigree.check_acyclic()?;
        Ok(pedigree)
    }

    /// Return the number of individuals within this pedigree.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check whether this pedigree contains no individual at all.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Look up an individual by name.
    pub fn get(&self, name: &str) -> Option<&Individual> {
        self.individuals.get(name)
    }

    /// Iterate over all individuals, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }

    /// Iterate over all individual names, in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.individuals.keys().map(String::as_str)
    }

    /// Iterate over the founder individuals of this pedigree, in name order.
    pub fn founders(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values().filter(|ind| ind.is_founder())
    }

    /// Resolve the mother of a named individual. Returns `None` if the
    /// individual is unknown, or a founder.
    pub fn mother_of(&self, name: &str) -> Option<&Individual> {
        self.get(name)?.mother().and_then(|mother| self.get(mother))
    }

    /// Resolve the father of a named individual. Returns `None` if the
    /// individual is unknown, or a founder.
    pub fn father_of(&self, name: &str) -> Option<&Individual> {
        self.get(name)?.father().and_then(|father| self.get(father))
    }

    /// Return the observed trait value of a named individual, if any.
    pub fn observed_trait(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Individual::observed_trait)
    }

    /// Ensure every recorded parent name resolves within `self.individuals`.
    fn check_parent_references(&self) -> Result<(), StructureError> {
        for individual in self.individuals.values() {
            let Some(parents) = individual.parents() else { continue };
            for parent in parents.iter() {
                if !self.individuals.contains_key(parent) {
                    return Err(StructureError::UnknownParent {
                        name  : individual.name().to_string(),
                        parent: parent.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Ensure no individual is their own ancestor, through a depth-first
    /// traversal of the parent graph. Must run after `check_parent_references`:
    /// every parent name is assumed to resolve.
    fn check_acyclic(&self) -> Result<(), StructureError> {
        let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(self.individuals.len());
        for name in self.individuals.keys() {
            self.visit(name, &mut marks)?;
        }
        Ok(())
    }

    /// DFS step for `check_acyclic`. An individual encountered while still
    /// `InProgress` closes a parent cycle.
    fn visit<'p>(&'p self, name: &'p str, marks: &mut HashMap<&'p str, Mark>) -> Result<(), StructureError> {
        match marks.get(name) {
            Some(Mark::Done)       => return Ok(()),
            Some(Mark::InProgress) => return Err(StructureError::ParentCycle { name: name.to_string() }),
            None                   => (),
        }
        marks.insert(name, Mark::InProgress);
        if let Some(parents) = self.individuals[name].parents() {
            for parent in parents.iter() {
                self.visit(parent, marks)?;
            }
        }
        marks.insert(name, Mark::Done);
        Ok(())
    }
}
