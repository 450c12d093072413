//! The modification database used to resolve named and accession based modifications

use std::{
    collections::HashMap,
    fmt::Display,
    sync::{Arc, LazyLock},
};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{chemistry::MolecularFormula, ontology::unimod::UNIMOD_ENTRIES};

/// A single shared static access to the built in modifications, for cases where no custom
/// modifications are needed (like tests).
pub static STATIC_DATABASE: LazyLock<ModificationDatabase> =
    LazyLock::new(ModificationDatabase::init_static);

/// A modification with a name, as defined in Unimod or in a custom database
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ModificationDefinition {
    /// The Unimod accession, only present for Unimod modifications
    pub unimod_id: Option<usize>,
    /// The canonical name
    pub name: Box<str>,
    /// Alternative names that resolve to this modification
    pub synonyms: Vec<Box<str>>,
    /// The elemental difference, can only be missing for custom modifications
    pub formula: Option<MolecularFormula>,
    /// The monoisotopic mass difference, derived from the formula if that is known
    pub mass: OrderedFloat<f64>,
}

impl ModificationDefinition {
    /// Create a definition for which the mass is derived from the formula
    pub fn with_formula(
        unimod_id: Option<usize>,
        name: impl Into<Box<str>>,
        synonyms: Vec<Box<str>>,
        formula: MolecularFormula,
    ) -> Self {
        Self {
            unimod_id,
            name: name.into(),
            synonyms,
            mass: OrderedFloat(formula.monoisotopic_mass()),
            formula: Some(formula),
        }
    }

    /// All names this definition can be found with, the canonical name first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(&*self.name).chain(self.synonyms.iter().map(|s| &**s))
    }
}

impl Display for ModificationDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(id) = self.unimod_id {
            write!(f, "{} (UNIMOD:{id})", self.name)
        } else {
            write!(f, "{} (custom)", self.name)
        }
    }
}

/// All modifications that can be resolved by name or by Unimod accession.
///
/// Get a copy via [`Self::init_static`] (or [`STATIC_DATABASE`]), or start from
/// [`Self::empty`], then extend with custom definitions using [`Self::with_custom`].
///
/// ```rust
/// use pepmz::{molecular_formula, ontology::STATIC_DATABASE};
/// let oxidation = STATIC_DATABASE.get_by_name("oxidation").unwrap();
/// assert_eq!(oxidation.formula, Some(molecular_formula!(O 1)));
/// assert_eq!(STATIC_DATABASE.get_by_id(35), Some(oxidation));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ModificationDatabase {
    definitions: Vec<Arc<ModificationDefinition>>,
    by_id: HashMap<usize, usize>,
    by_name: HashMap<String, usize>,
}

impl ModificationDatabase {
    /// A database without any modifications
    pub fn empty() -> Self {
        Self::default()
    }

    /// The database with all built in Unimod modifications
    pub fn init_static() -> Self {
        let mut database = Self::empty();
        for (id, name, synonyms, formula) in UNIMOD_ENTRIES {
            database.insert(ModificationDefinition::with_formula(
                Some(*id),
                *name,
                synonyms.iter().map(|s| Box::from(*s)).collect(),
                MolecularFormula::new(formula),
            ));
        }
        log::debug!(
            "Initialised the static modification database with {} modifications",
            database.len()
        );
        database
    }

    /// Add custom modifications, these take precedence over earlier modifications with the same (case insensitive) name or synonym
    #[must_use]
    pub fn with_custom(mut self, custom: impl IntoIterator<Item = ModificationDefinition>) -> Self {
        for definition in custom {
            self.insert(definition);
        }
        self
    }

    /// Add a single modification. Names of custom modifications (without accession) take over
    /// existing names, while names of Unimod modifications never replace an existing name.
    pub fn insert(&mut self, definition: ModificationDefinition) {
        let index = self.definitions.len();
        let custom = definition.unimod_id.is_none();
        if let Some(id) = definition.unimod_id
            && self.by_id.insert(id, index).is_some()
        {
            log::warn!("Unimod accession {id} is defined twice, the last definition is used");
        }
        for name in definition.names() {
            let key = name.to_ascii_lowercase();
            match self.by_name.get(&key) {
                Some(existing) if custom => {
                    log::warn!(
                        "Custom modification '{name}' shadows {}",
                        self.definitions[*existing]
                    );
                    self.by_name.insert(key, index);
                }
                Some(_) => (),
                None => {
                    self.by_name.insert(key, index);
                }
            }
        }
        self.definitions.push(Arc::new(definition));
    }

    /// Get a modification by its Unimod accession
    pub fn get_by_id(&self, id: usize) -> Option<&Arc<ModificationDefinition>> {
        self.by_id.get(&id).map(|index| &self.definitions[*index])
    }

    /// Get a modification by name or synonym, ignoring casing
    pub fn get_by_name(&self, name: &str) -> Option<&Arc<ModificationDefinition>> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|index| &self.definitions[*index])
    }

    /// All names (including synonyms) that resolve to a modification, sorted alphabetically ignoring casing
    pub fn names(&self) -> Vec<String> {
        self.definitions
            .iter()
            .enumerate()
            .flat_map(|(index, definition)| {
                definition.names().filter_map(move |name| {
                    (self.by_name.get(&name.to_ascii_lowercase()) == Some(&index))
                        .then(|| name.to_string())
                })
            })
            .sorted_by(|a, b| {
                a.to_ascii_lowercase()
                    .cmp(&b.to_ascii_lowercase())
                    .then_with(|| a.cmp(b))
            })
            .dedup()
            .collect()
    }

    /// All definitions in insertion order, including shadowed definitions
    pub fn definitions(&self) -> impl Iterator<Item = &Arc<ModificationDefinition>> {
        self.definitions.iter()
    }

    /// The number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if there are no definitions
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
