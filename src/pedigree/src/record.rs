/// Raw description of a single pedigree member, as supplied by an input
/// collaborator (e.g. `mendel-io`'s CSV reader).
///
/// A record carries no structural guarantee whatsoever: parent names may be
/// dangling, half-specified, or cyclic. All validation is deferred to
/// `Pedigree::from_records`.
/// # Fields
/// - `name`          : unique name of the individual.
/// - `mother`        : name of the individual's mother. `None` for founders.
/// - `father`        : name of the individual's father. `None` for founders.
/// - `observed_trait`: externally observed trait value.
///                       - `Some(bool)` if the trait status of the individual is known.
///                       - `None`       if unobserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualRecord {
    pub name          : String,
    pub mother        : Option<String>,
    pub father        : Option<String>,
    pub observed_trait: Option<bool>,
}

impl IndividualRecord {
    /// Instantiate a new record.
    pub fn new(name: &str, mother: Option<&str>, father: Option<&str>, observed_trait: Option<bool>) -> Self {
        Self {
            name  : name.to_string(),
            mother: mother.map(str::to_string),
            father: father.map(str::to_string),
            observed_trait,
        }
    }

    /// Shorthand constructor for an individual carrying no recorded parents.
    pub fn founder(name: &str, observed_trait: Option<bool>) -> Self {
        Self::new(name, None, None, observed_trait)
    }
}
