// lookups use HashSet or HashMap with a configurable hasher
use core::hash::{BuildHasher, BuildHasherDefault};
use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;
use seahash::SeaHasher;

use serde::{Deserialize, Serialize};
use tracing::debug;

// used to print out readable forms of a construct
use std::fmt;

// our own stuff that we need
use crate::error::{Result, VerbcladError};
use crate::frame::Frame;
use crate::identifier::{ClassId, SenseKey};
use crate::parsed::{ParsedClass, ParsedMember};
use crate::restriction::{ResolvedRestrictions, RestrictionTree};

pub type OtherHasher = BuildHasherDefault<SeaHasher>;

// ------------- ClassRef -------------
/// Position of a class in its [`Forest`]; stable for the lifetime of the forest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassRef(u32);

impl ClassRef {
    pub fn position(&self) -> usize {
        self.0 as usize
    }
}
impl TryFrom<usize> for ClassRef {
    type Error = VerbcladError;
    fn try_from(position: usize) -> Result<Self> {
        Ok(Self(narrow(position, "classes")?))
    }
}

// arena positions are stored as u32, which bounds classes per forest and members per class
fn narrow(position: usize, what: &'static str) -> Result<u32> {
    u32::try_from(position)
        .map_err(|_| VerbcladError::Capacity(format!("more than {} {}", u32::MAX, what)))
}

// ------------- MemberRef -------------
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberRef {
    class: ClassRef,
    position: u32,
}

impl MemberRef {
    pub fn class(&self) -> ClassRef {
        self.class
    }
    pub fn position(&self) -> usize {
        self.position as usize
    }
}

// ------------- ThematicRole -------------
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThematicRole {
    #[serde(rename = "type")]
    role_type: String,
    #[serde(default)]
    restrictions: RestrictionTree,
}

impl ThematicRole {
    pub fn new(role_type: &str, restrictions: RestrictionTree) -> Self {
        Self {
            role_type: role_type.to_owned(),
            restrictions,
        }
    }
    /// Role label, e.g. "Agent" or "Patient".
    pub fn role_type(&self) -> &str {
        &self.role_type
    }
    pub fn restriction_tree(&self) -> &RestrictionTree {
        &self.restrictions
    }
    /// Selectional restrictions of the role, resolved on every call.
    pub fn restrictions(&self) -> ResolvedRestrictions {
        self.restrictions.resolve()
    }
}

// ------------- Member -------------
#[derive(Debug)]
pub struct Member {
    name: String,
    sense_keys: Vec<SenseKey>,
    groupings: Vec<String>,
    features: BTreeSet<String>,
    verbnet_key: String,
    member: MemberRef,
}

impl Member {
    fn new(parsed: ParsedMember, verbnet_key: String, member: MemberRef) -> Self {
        let mut sense_keys = Vec::new();
        for key in &parsed.wn {
            match SenseKey::parse(key) {
                Some(sense_key) => sense_keys.push(sense_key),
                None => debug!(member = %parsed.name, key = %key, "dropping malformed sense key"),
            }
        }
        Self {
            name: parsed.name,
            sense_keys,
            groupings: parsed.groupings,
            features: parsed.features.into_iter().collect(),
            verbnet_key,
            member,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn sense_keys(&self) -> &[SenseKey] {
        &self.sense_keys
    }
    pub fn groupings(&self) -> &[String] {
        &self.groupings
    }
    pub fn features(&self) -> &BTreeSet<String> {
        &self.features
    }
    /// Disambiguates members sharing a name within one class, e.g. "build#3".
    pub fn verbnet_key(&self) -> &str {
        &self.verbnet_key
    }
    pub fn member(&self) -> MemberRef {
        self.member
    }
    /// The class that declared this member.
    pub fn class(&self) -> ClassRef {
        self.member.class
    }
}
impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.member == other.member
    }
}
impl Eq for Member {}
impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.verbnet_key)
    }
}

// ------------- ClassNode -------------
#[derive(Debug)]
pub struct ClassNode {
    id: ClassId,
    members: Vec<Member>,
    roles: Vec<ThematicRole>,
    frames: Vec<Frame>,
    children: Vec<ClassRef>,
    parent: Option<ClassRef>,
    class: ClassRef,
}

impl ClassNode {
    // It's intentional to encapsulate the contents in the struct
    // and only expose them using "getters", because this yields
    // true immutability for classes after the forest is wired.
    pub fn id(&self) -> &ClassId {
        &self.id
    }
    pub fn members(&self) -> &[Member] {
        &self.members
    }
    pub fn roles(&self) -> &[ThematicRole] {
        &self.roles
    }
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
    pub fn children(&self) -> &[ClassRef] {
        &self.children
    }
    pub fn parent(&self) -> Option<ClassRef> {
        self.parent
    }
    pub fn class(&self) -> ClassRef {
        self.class
    }
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
impl PartialEq for ClassNode {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class
    }
}
impl Eq for ClassNode {}
impl fmt::Display for ClassNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

// ------------- Forest -------------
/// Arena holding every class of the resource, laid out in pre-order over the roots.
///
/// Classes refer to their children and parent by [`ClassRef`], so upward
/// traversal needs no owning back-references. The forest is assumed to be
/// acyclic, which is guaranteed by how it is planted from nested parsed classes.
#[derive(Debug, Default)]
pub struct Forest {
    nodes: Vec<ClassNode>,
    roots: Vec<ClassRef>,
}

impl Forest {
    pub fn new(roots: Vec<ParsedClass>) -> Result<Self> {
        let mut forest = Self::default();
        for root in roots {
            let class = forest.plant(root)?;
            forest.roots.push(class);
        }
        forest.wire();
        Ok(forest)
    }
    fn plant(&mut self, parsed: ParsedClass) -> Result<ClassRef> {
        let class = ClassRef::try_from(self.nodes.len())?;
        let mut occurrences: HashMap<String, usize, OtherHasher> = HashMap::default();
        let mut members = Vec::with_capacity(parsed.members.len());
        for (position, member) in parsed.members.into_iter().enumerate() {
            let occurrence = occurrences.entry(member.name.clone()).or_insert(0);
            *occurrence += 1;
            let verbnet_key = member
                .verbnet_key
                .clone()
                .unwrap_or_else(|| format!("{}#{}", member.name, occurrence));
            let member_ref = MemberRef {
                class,
                position: narrow(position, "members")?,
            };
            members.push(Member::new(member, verbnet_key, member_ref));
        }
        let mut frames = parsed.frames;
        for frame in frames.iter_mut() {
            frame.set_class(class);
        }
        self.nodes.push(ClassNode {
            id: parsed.id,
            members,
            roles: parsed.roles,
            frames,
            children: Vec::new(),
            parent: None,
            class,
        });
        let children = parsed
            .subclasses
            .into_iter()
            .map(|subclass| self.plant(subclass))
            .collect::<Result<Vec<ClassRef>>>()?;
        self.nodes[class.position()].children = children;
        Ok(class)
    }
    /// Assigns parent links and the position of every syntax element within its frame.
    /// Running it again recomputes the same values.
    pub fn wire(&mut self) {
        let mut links = Vec::new();
        for node in &self.nodes {
            for child in &node.children {
                links.push((*child, node.class));
            }
        }
        for node in self.nodes.iter_mut() {
            node.parent = None;
            for frame in node.frames.iter_mut() {
                frame.number_syntax();
            }
        }
        for (child, parent) in links {
            self.nodes[child.position()].parent = Some(parent);
        }
    }
    pub fn get(&self, class: ClassRef) -> &ClassNode {
        &self.nodes[class.position()]
    }
    pub fn member(&self, member: MemberRef) -> &Member {
        &self.get(member.class).members[member.position()]
    }
    pub fn class_of(&self, member: &Member) -> &ClassNode {
        self.get(member.class())
    }
    /// The class that declared `frame`; `None` for a frame that was never planted.
    pub fn class_of_frame(&self, frame: &Frame) -> Option<&ClassNode> {
        frame.class().map(|class| self.get(class))
    }
    pub fn roots(&self) -> Vec<&ClassNode> {
        self.roots.iter().map(|r| self.get(*r)).collect()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, ClassNode> {
        self.nodes.iter()
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn parent(&self, node: &ClassNode) -> Option<&ClassNode> {
        node.parent.map(|p| self.get(p))
    }
    /// Direct children only.
    pub fn subclasses(&self, node: &ClassNode) -> Vec<&ClassNode> {
        node.children.iter().map(|c| self.get(*c)).collect()
    }
    /// Parent, parent of parent and so on up to the root.
    pub fn ancestors(&self, node: &ClassNode) -> Vec<&ClassNode> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(node);
        while let Some(ancestor) = current {
            ancestors.push(ancestor);
            current = self.parent(ancestor);
        }
        ancestors
    }
    /// Every class below `node` in pre-order, `node` excluded.
    pub fn descendants(&self, node: &ClassNode) -> Vec<&ClassNode> {
        let mut descendants = Vec::new();
        self.collect_descendants(node, &mut descendants);
        descendants
    }
    fn collect_descendants<'f>(&'f self, node: &ClassNode, descendants: &mut Vec<&'f ClassNode>) {
        for child in &node.children {
            let child = self.get(*child);
            descendants.push(child);
            self.collect_descendants(child, descendants);
        }
    }
    /// The class itself, then its ancestors, then its descendants.
    pub fn related<'f>(&'f self, node: &'f ClassNode) -> Vec<&'f ClassNode> {
        let mut related = vec![node];
        related.extend(self.ancestors(node));
        related.extend(self.descendants(node));
        related
    }
    /// Own members followed by those of each ancestor, nearest first.
    pub fn members_include_inherited<'f>(&'f self, node: &'f ClassNode) -> Vec<&'f Member> {
        let mut members: Vec<&Member> = node.members.iter().collect();
        for ancestor in self.ancestors(node) {
            members.extend(ancestor.members.iter());
        }
        members
    }
    /// Own frames followed by those of each ancestor, nearest first.
    pub fn frames_include_inherited<'f>(&'f self, node: &'f ClassNode) -> Vec<&'f Frame> {
        let mut frames: Vec<&Frame> = node.frames.iter().collect();
        for ancestor in self.ancestors(node) {
            frames.extend(ancestor.frames.iter());
        }
        frames
    }
    /// Own roles followed by those of each ancestor, nearest first.
    pub fn roles_include_inherited<'f>(&'f self, node: &'f ClassNode) -> Vec<&'f ThematicRole> {
        let mut roles: Vec<&ThematicRole> = node.roles.iter().collect();
        for ancestor in self.ancestors(node) {
            roles.extend(ancestor.roles.iter());
        }
        roles
    }
}

// ------------- Lookups -------------
#[derive(Debug)]
pub struct Lookup<K, V, H = RandomState> {
    index: HashMap<K, HashSet<V, H>, H>,
}
impl<K: Eq + Hash, V: Eq + Hash, H: BuildHasher + Default> Lookup<K, V, H> {
    pub fn new() -> Self {
        Self {
            index: HashMap::<K, HashSet<V, H>, H>::default(),
        }
    }
    pub fn insert(&mut self, key: K, value: V) {
        let set = self.index.entry(key).or_insert_with(HashSet::<V, H>::default);
        set.insert(value);
    }
    pub fn lookup<Q>(&self, key: &Q) -> Option<&HashSet<V, H>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key)
    }
    pub fn len(&self) -> usize {
        self.index.len()
    }
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
impl<K: Eq + Hash, V: Eq + Hash, H: BuildHasher + Default> Default for Lookup<K, V, H> {
    fn default() -> Self {
        Self::new()
    }
}
