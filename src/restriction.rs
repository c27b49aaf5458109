//! Selectional and syntactic restrictions.
//!
//! A restriction tree combines atomic `(include, label)` predicates with AND/OR
//! logic and may nest further trees. Resolution flattens a tree into an ordered
//! disjunction of [`Restrictions`], each one a conjunction of labels that must be
//! present (`include`) and labels that must be absent (`exclude`):
//!
//! * OR keeps every atom as its own alternative and appends the alternatives of
//!   each nested tree.
//! * AND merges its atoms into one alternative and distributes it over the
//!   alternatives of each nested tree (cross product, earlier alternatives outer).
//!
//! A label may end up both included and excluded; such an alternative is kept and
//! simply never admits anything.

use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;
use std::fmt;

// ------------- Logic -------------
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Logic {
    #[default]
    And,
    Or,
}
impl From<String> for Logic {
    // anything but "or" combines with AND, an absent logic attribute included
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("or") {
            Logic::Or
        } else {
            Logic::And
        }
    }
}
impl From<Logic> for String {
    fn from(logic: Logic) -> String {
        match logic {
            Logic::And => String::from("and"),
            Logic::Or => String::from("or"),
        }
    }
}

// ------------- Restriction -------------
/// An atomic predicate: the argument must (`include`) or must not belong to `label`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Restriction {
    pub include: bool,
    #[serde(alias = "type")]
    pub label: String,
}
impl Restriction {
    pub fn including(label: &str) -> Self {
        Self {
            include: true,
            label: label.to_owned(),
        }
    }
    pub fn excluding(label: &str) -> Self {
        Self {
            include: false,
            label: label.to_owned(),
        }
    }
}

// ------------- Restrictions -------------
/// One conjunctive alternative of a resolved restriction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Restrictions {
    include: BTreeSet<String>,
    exclude: BTreeSet<String>,
}
impl Restrictions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn including(labels: &[&str]) -> Self {
        Self {
            include: labels.iter().map(|l| l.to_string()).collect(),
            exclude: BTreeSet::new(),
        }
    }
    pub fn excluding(labels: &[&str]) -> Self {
        Self {
            include: BTreeSet::new(),
            exclude: labels.iter().map(|l| l.to_string()).collect(),
        }
    }
    fn single(atom: &Restriction) -> Self {
        let mut restrictions = Self::new();
        restrictions.add(atom);
        restrictions
    }
    fn merged(atoms: &[Restriction]) -> Self {
        let mut restrictions = Self::new();
        for atom in atoms {
            restrictions.add(atom);
        }
        restrictions
    }
    fn add(&mut self, atom: &Restriction) {
        if atom.include {
            self.include.insert(atom.label.clone());
        } else {
            self.exclude.insert(atom.label.clone());
        }
    }
    fn union(&self, other: &Restrictions) -> Self {
        Self {
            include: self.include.union(&other.include).cloned().collect(),
            exclude: self.exclude.union(&other.exclude).cloned().collect(),
        }
    }
    pub fn include(&self) -> &BTreeSet<String> {
        &self.include
    }
    pub fn exclude(&self) -> &BTreeSet<String> {
        &self.exclude
    }
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
    /// True when every included label is among `categories` and no excluded one is.
    pub fn admits<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        let has = |label: &String| categories.iter().any(|c| c.as_ref() == label);
        self.include.iter().all(has) && !self.exclude.iter().any(has)
    }
}
impl fmt::Display for Restrictions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = String::new();
        for label in &self.include {
            s += &format!("+{} ", label);
        }
        for label in &self.exclude {
            s += &format!("-{} ", label);
        }
        s.pop();
        write!(f, "[{}]", s)
    }
}

// ------------- ResolvedRestrictions -------------
/// Disjunction of [`Restrictions`]; admits an argument when any alternative does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResolvedRestrictions(Vec<Restrictions>);

impl ResolvedRestrictions {
    pub fn alternatives(&self) -> &[Restrictions] {
        &self.0
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Restrictions> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn admits<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        self.0.iter().any(|r| r.admits(categories))
    }
}
impl std::ops::Index<usize> for ResolvedRestrictions {
    type Output = Restrictions;
    fn index(&self, i: usize) -> &Restrictions {
        &self.0[i]
    }
}
impl<'a> IntoIterator for &'a ResolvedRestrictions {
    type Item = &'a Restrictions;
    type IntoIter = std::slice::Iter<'a, Restrictions>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
impl fmt::Display for ResolvedRestrictions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let alternatives: Vec<String> = self.0.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", alternatives.join(" | "))
    }
}

// ------------- RestrictionTree -------------
/// Selectional restrictions as written in the resource, before resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionTree {
    #[serde(default)]
    pub logic: Logic,
    #[serde(default)]
    pub atoms: Vec<Restriction>,
    #[serde(default)]
    pub hierarchies: Vec<RestrictionTree>,
}
impl RestrictionTree {
    pub fn new(logic: Logic, atoms: Vec<Restriction>, hierarchies: Vec<RestrictionTree>) -> Self {
        Self {
            logic,
            atoms,
            hierarchies,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty() && self.hierarchies.is_empty()
    }
    pub fn resolve(&self) -> ResolvedRestrictions {
        resolve(self)
    }
}

pub fn resolve(tree: &RestrictionTree) -> ResolvedRestrictions {
    ResolvedRestrictions(expand(tree))
}

fn expand(tree: &RestrictionTree) -> Vec<Restrictions> {
    // nothing to satisfy, whatever the logic
    if tree.is_empty() {
        return vec![Restrictions::new()];
    }
    match tree.logic {
        Logic::Or => {
            let mut alternatives: Vec<Restrictions> =
                tree.atoms.iter().map(Restrictions::single).collect();
            for hierarchy in &tree.hierarchies {
                alternatives.extend(expand(hierarchy));
            }
            alternatives
        }
        Logic::And => {
            let mut paths = vec![Restrictions::merged(&tree.atoms)];
            for hierarchy in &tree.hierarchies {
                let alternatives = expand(hierarchy);
                let mut combined = Vec::with_capacity(paths.len() * alternatives.len());
                for path in &paths {
                    for alternative in &alternatives {
                        combined.push(path.union(alternative));
                    }
                }
                paths = combined;
            }
            paths
        }
    }
}

// ------------- SyntacticRestrictions -------------
/// Flat restrictions over syntactic features of a phrase; no nested trees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntacticRestrictions {
    #[serde(default)]
    pub logic: Logic,
    #[serde(default)]
    pub atoms: Vec<Restriction>,
}
impl SyntacticRestrictions {
    pub fn new(logic: Logic, atoms: Vec<Restriction>) -> Self {
        Self { logic, atoms }
    }
    pub fn resolve(&self) -> ResolvedRestrictions {
        if self.atoms.is_empty() {
            return ResolvedRestrictions(vec![Restrictions::new()]);
        }
        match self.logic {
            Logic::Or => ResolvedRestrictions(self.atoms.iter().map(Restrictions::single).collect()),
            Logic::And => ResolvedRestrictions(vec![Restrictions::merged(&self.atoms)]),
        }
    }
}
