use std::{
    cmp::{Ord, Ordering, PartialOrd},
    hash::{Hash, Hasher},
};

mod parents;
pub use parents::Parents;

/// Space padding lengths used for `std::fmt::Display` of Individual
const NAME_DISPLAY_LEN   : usize = 10; // Space padding of `self.name`
const PARENTS_DISPLAY_LEN: usize = 25; // Space padding of `self.parents`

/// A validated pedigree member.
/// # Fields:
/// - `name`          : Unique name of the individual (e.g. 'Harry', 'Lily')
/// - `parents`       : Optional pair of parent names.
///                       - `None`           if the individual is a founder.
///                       - `Some(Parents)`  if both parents are recorded.
/// - `observed_trait`: Externally observed trait value.
///                       - `Some(bool)` when evidence is available for this individual.
///                       - `None`       when the individual is unobserved.
#[derive(Debug, Clone)]
pub struct Individual {
    name          : String,
    parents       : Option<Parents>,
    observed_trait: Option<bool>,
}

impl Individual {
    /// Instantiate a new individual.
    /// # Arguments
    /// - `name`          : unique name of the individual.
    /// - `parents`       : optional (mother, father) name pair. `None` for founders.
    /// - `observed_trait`: optional observed trait value.
    pub fn new(name: &str, parents: Option<(&str, &str)>, observed_trait: Option<bool>) -> Individual {
        let parents = parents.map(|(mother, father)| Parents::new(mother, father));
        Individual { name: name.to_string(), parents, observed_trait }
    }

    /// Return the name of this individual.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the name pair of this individual's parents, if both are recorded.
    pub fn parents(&self) -> Option<&Parents> {
        self.parents.as_ref()
    }

    /// Return the name of this individual's mother, if recorded.
    pub fn mother(&self) -> Option<&str> {
        self.parents.as_ref().map(Parents::mother)
    }

    /// Return the name of this individual's father, if recorded.
    pub fn father(&self) -> Option<&str> {
        self.parents.as_ref().map(Parents::father)
    }

    /// Return the observed trait value of this individual, if any.
    pub fn observed_trait(&self) -> Option<bool> {
        self.observed_trait
    }

    /// Check whether or not this individual is a founder. Returns `true` if `self.parents == None`
    #[inline(always)]
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parents = match &self.parents {
            None          => "None".to_string(),
            Some(parents) => format!("{parents}"),
        };
        let observed = match self.observed_trait {
            Some(value) => value.to_string(),
            None        => "unknown".to_owned(),
        };
        write!(f, "name: {: <NAME_DISPLAY_LEN$} parents: {: <PARENTS_DISPLAY_LEN$} - trait: {observed}", self.name, parents)
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Individual) -> bool {
        self.name == other.name
    }
}

impl Eq for Individual {}

impl Hash for Individual {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::borrow::Borrow<str> for Individual {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl Ord for Individual {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn founder_is_founder() {
        let ind = Individual::new("Lily", None, None);
        assert!(ind.is_founder());
        assert_eq!(ind.mother(), None);
        assert_eq!(ind.father(), None);
    }

    #[test]
    fn offspring_is_not_founder() {
        let ind = Individual::new("Harry", Some(("Lily", "James")), None);
        assert!(!ind.is_founder());
        assert_eq!(ind.mother(), Some("Lily"));
        assert_eq!(ind.father(), Some("James"));
    }

    #[test]
    fn observed_trait_passthrough() {
        for evidence in [Some(true), Some(false), None] {
            let ind = Individual::new("Harry", None, evidence);
            assert_eq!(ind.observed_trait(), evidence);
        }
    }

    #[test]
    fn ind_equality() {
        let ind1 = Individual::new("James", None, None);
        let ind2 = Individual::new("James", Some(("a", "b")), Some(true));
        assert_eq!(ind1, ind2); // identity is the name, nothing else.
    }

    #[test]
    fn ind_inequality() {
        let ind1 = Individual::new("ind1", None, None);
        let ind2 = Individual::new("ind2", None, None);
        assert_ne!(ind1, ind2);
    }

    #[test]
    fn ordering() {
        let ind_a = Individual::new("A", None, None);
        let ind_b = Individual::new("B", None, None);
        assert!(ind_a <  ind_b);
        assert!(ind_b >= ind_a);
    }

    #[test]
    fn hashable() {
        let mut ind_set = std::collections::HashSet::new();
        for name in ["A", "B", "C"] {
            let new_ind = Individual::new(name, None, None);
            assert!(ind_set.insert(new_ind.clone()));
            assert!(ind_set.contains(&new_ind));
        }
    }

    #[test]
    fn display() {
        let ind = Individual::new("Harry", Some(("Lily", "James")), Some(true));
        let display = format!("{ind}");
        assert!(display.contains("Harry"));
        assert!(display.contains("Lily"));
        assert!(display.contains("James"));
        assert!(display.contains("true"));
    }
}
