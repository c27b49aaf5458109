//! Multi-key lookups over a wired [`Forest`].
//!
//! The index is built in one pass over the forest and only stores arena
//! references, so every class or member it hands out can be traversed further
//! through [`Index::forest`]. There is no incremental update; a changed resource
//! means building a new index (see [`crate::interface::SharedIndex`]).

use std::collections::HashMap;

use tracing::{info, warn};

use crate::construct::{ClassNode, ClassRef, Forest, Lookup, Member, MemberRef, OtherHasher};
use crate::error::{Result, VerbcladError};
use crate::identifier::{ClassId, SenseKey};
use crate::parsed::ParsedClass;

#[derive(Debug)]
pub struct Index {
    forest: Forest,
    // normalized path as well as the "lemma-path" surface form
    by_id: HashMap<String, ClassRef, OtherHasher>,
    by_base_id_and_lemma: Lookup<(String, String), ClassRef, OtherHasher>,
    by_lemma: Lookup<String, ClassRef, OtherHasher>,
    members_by_lemma: Lookup<String, MemberRef, OtherHasher>,
    members_by_sense_key: Lookup<SenseKey, MemberRef, OtherHasher>,
    sense_keys_by_lemma: Lookup<String, SenseKey, OtherHasher>,
}

impl Index {
    pub fn build(roots: Vec<ParsedClass>) -> Result<Self> {
        Ok(Self::from_forest(Forest::new(roots)?))
    }
    pub fn from_forest(forest: Forest) -> Self {
        let mut by_id: HashMap<String, ClassRef, OtherHasher> = HashMap::default();
        let mut by_base_id_and_lemma = Lookup::new();
        let mut by_lemma = Lookup::new();
        let mut members_by_lemma = Lookup::new();
        let mut members_by_sense_key = Lookup::new();
        let mut sense_keys_by_lemma = Lookup::new();
        let mut member_count = 0usize;
        for node in forest.iter() {
            let id = node.id();
            // the surface form only ever points at the class owning the path
            match by_id.get(id.class_id()) {
                Some(kept) => {
                    warn!(id = %id, kept = %forest.get(*kept), "duplicate class id, keeping the first class");
                }
                None => {
                    by_id.insert(id.class_id().to_owned(), node.class());
                    by_id.insert(id.to_string(), node.class());
                }
            }
            for member in node.members() {
                member_count += 1;
                let lemma = member.name().to_owned();
                by_base_id_and_lemma.insert((id.base_id().to_owned(), lemma.clone()), node.class());
                by_lemma.insert(lemma.clone(), node.class());
                members_by_lemma.insert(lemma.clone(), member.member());
                for sense_key in member.sense_keys() {
                    members_by_sense_key.insert(sense_key.clone(), member.member());
                    sense_keys_by_lemma.insert(lemma.clone(), sense_key.clone());
                }
            }
        }
        info!(
            classes = forest.len(),
            roots = forest.roots().len(),
            members = member_count,
            lemmas = by_lemma.len(),
            sense_keys = members_by_sense_key.len(),
            "index built"
        );
        Self {
            forest,
            by_id,
            by_base_id_and_lemma,
            by_lemma,
            members_by_lemma,
            members_by_sense_key,
            sense_keys_by_lemma,
        }
    }
    pub fn forest(&self) -> &Forest {
        &self.forest
    }
    pub fn roots(&self) -> Vec<&ClassNode> {
        self.forest.roots()
    }
    /// Class for an id such as "begin-55.1-1" or "55.1-1".
    pub fn get_by_id(&self, id: &str) -> Result<&ClassNode> {
        if let Some(class) = self.by_id.get(id.trim()) {
            return Ok(self.forest.get(*class));
        }
        let parsed = ClassId::parse(id)?;
        self.by_id
            .get(parsed.class_id())
            .map(|class| self.forest.get(*class))
            .ok_or_else(|| VerbcladError::NotFound(format!("class {}", id)))
    }
    /// Classes under a base id, e.g. "45.6.1", that have `lemma` as a member.
    pub fn get_by_base_id_and_lemma(&self, base_id: &str, lemma: &str) -> Vec<&ClassNode> {
        let base_id = match ClassId::parse(base_id) {
            Ok(id) => id.base_id().to_owned(),
            Err(_) => base_id.trim().to_owned(),
        };
        let key = (base_id, lemma.to_owned());
        self.classes(self.by_base_id_and_lemma.lookup(&key))
    }
    pub fn get_by_lemma(&self, lemma: &str) -> Vec<&ClassNode> {
        self.classes(self.by_lemma.lookup(lemma))
    }
    pub fn get_members_by_lemma(&self, lemma: &str) -> Vec<&Member> {
        self.members(self.members_by_lemma.lookup(lemma))
    }
    pub fn get_members_by_word_net_key(&self, key: &SenseKey) -> Vec<&Member> {
        self.members(self.members_by_sense_key.lookup(key))
    }
    pub fn get_word_net_keys_by_lemma(&self, lemma: &str) -> Vec<&SenseKey> {
        let mut keys: Vec<&SenseKey> = self
            .sense_keys_by_lemma
            .lookup(lemma)
            .map(|set| set.iter().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
    // results come back in forest order so that repeated queries agree
    fn classes<'i, I>(&'i self, found: Option<I>) -> Vec<&'i ClassNode>
    where
        I: IntoIterator<Item = &'i ClassRef>,
    {
        let mut classes: Vec<ClassRef> = found
            .map(|set| set.into_iter().copied().collect())
            .unwrap_or_default();
        classes.sort();
        classes.into_iter().map(|c| self.forest.get(c)).collect()
    }
    fn members<'i, I>(&'i self, found: Option<I>) -> Vec<&'i Member>
    where
        I: IntoIterator<Item = &'i MemberRef>,
    {
        let mut members: Vec<MemberRef> = found
            .map(|set| set.into_iter().copied().collect())
            .unwrap_or_default();
        members.sort();
        members.into_iter().map(|m| self.forest.member(m)).collect()
    }
}
