// used to compile the identifier grammars once
use lazy_static::lazy_static;
use regex::Regex;

// identifiers travel through serde in their textual form
use serde::{Deserialize, Serialize};

// used to print out readable forms of an identifier
use std::fmt;
// used to indicate which parts of an identifier take part in equality
use std::hash::{Hash, Hasher};
// custom made ordering for class ids
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::{Result, VerbcladError};

lazy_static! {
    // "<lemma>-<number>[-<subclass>...]" or "<number>[-<subclass>...]", the lemma never starts with a digit
    static ref CLASS_ID: Regex = Regex::new(
        r"^(?:(?P<lemma>[^\d\s][^\s]*?)-)?(?P<number>\d+(?:\.\d+)*)(?P<subclass>(?:-\d+)*)$"
    ).unwrap();
    // "<lemma>%<ss_type>:<lex_filenum>:<lex_id>[:<head_word>:<head_id>]"
    static ref SENSE_KEY: Regex = Regex::new(
        r"^(?P<lemma>[^%\s]+)%(?P<ss_type>\d):(?P<lex_filenum>\d+):(?P<lex_id>\d+)(?P<head>(?::[^:\s]*)*)$"
    ).unwrap();
}

// ------------- ClassId -------------
/// Identifier of a verb class, e.g. `begin-55.1` or `45.6.1-1`.
///
/// Only the numeric path takes part in equality, hashing and ordering; the
/// leading lemma is carried along for display. The normalized path and the
/// base id are computed once when the id is parsed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassId {
    top_lemma: Option<String>,
    number: Vec<u32>,
    subclass: Vec<u32>,
    class_id: String,
    base_id: String,
}

impl ClassId {
    pub fn parse(text: &str) -> Result<Self> {
        let malformed = || VerbcladError::MalformedIdentifier {
            kind: "class id",
            text: text.to_owned(),
        };
        let captures = CLASS_ID.captures(text.trim()).ok_or_else(malformed)?;
        let top_lemma = captures.name("lemma").map(|m| m.as_str().to_owned());
        let number = captures
            .name("number")
            .map(|m| m.as_str())
            .unwrap_or_default()
            .split('.')
            .map(|segment| segment.parse::<u32>().map_err(|_| malformed()))
            .collect::<Result<Vec<u32>>>()?;
        let subclass = captures
            .name("subclass")
            .map(|m| m.as_str())
            .unwrap_or_default()
            .split('-')
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.parse::<u32>().map_err(|_| malformed()))
            .collect::<Result<Vec<u32>>>()?;
        Ok(Self::assemble(top_lemma, number, subclass))
    }
    /// Builds an id from its parts, failing unless its textual form parses back to the same parts.
    pub fn from_parts(top_lemma: Option<String>, number: Vec<u32>, subclass: Vec<u32>) -> Result<Self> {
        let id = Self::assemble(top_lemma, number, subclass);
        let text = id.to_string();
        match Self::parse(&text) {
            Ok(parsed) if parsed == id && parsed.top_lemma == id.top_lemma => Ok(id),
            _ => Err(VerbcladError::MalformedIdentifier {
                kind: "class id",
                text,
            }),
        }
    }
    fn assemble(top_lemma: Option<String>, number: Vec<u32>, subclass: Vec<u32>) -> Self {
        let base_id = number
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".");
        let mut class_id = base_id.clone();
        for s in &subclass {
            class_id += &format!("-{}", s);
        }
        Self {
            top_lemma,
            number,
            subclass,
            class_id,
            base_id,
        }
    }
    pub fn top_lemma(&self) -> Option<&str> {
        self.top_lemma.as_deref()
    }
    /// Normalized path, e.g. `45.6.1-1`.
    pub fn class_id(&self) -> &str {
        &self.class_id
    }
    /// Path without subclass suffixes, e.g. `45.6.1`.
    pub fn base_id(&self) -> &str {
        &self.base_id
    }
    pub fn number(&self) -> &[u32] {
        &self.number
    }
    pub fn subclass(&self) -> &[u32] {
        &self.subclass
    }
}
impl PartialEq for ClassId {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.subclass == other.subclass
    }
}
impl Eq for ClassId {}
impl Hash for ClassId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
        self.subclass.hash(state);
    }
}
impl Ord for ClassId {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.number, &self.subclass).cmp(&(&other.number, &other.subclass))
    }
}
impl PartialOrd for ClassId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.top_lemma {
            Some(lemma) => write!(f, "{}-{}", lemma, self.class_id),
            None => write!(f, "{}", self.class_id),
        }
    }
}
impl FromStr for ClassId {
    type Err = VerbcladError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
impl TryFrom<String> for ClassId {
    type Error = VerbcladError;
    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}
impl From<ClassId> for String {
    fn from(id: ClassId) -> String {
        id.to_string()
    }
}

// ------------- SenseKey -------------
/// External sense identifier linking a member to a word sense, e.g. `climb%2:38:01`.
///
/// The textual fields are kept as written so that a parsed key prints back to
/// the exact string it was read from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SenseKey {
    lemma: String,
    ss_type: String,
    lex_filenum: String,
    lex_id: String,
    head: Vec<String>,
}

impl SenseKey {
    /// Parses a sense key, yielding `None` when the text does not follow the grammar.
    /// A leading `?` marks an uncertain mapping in the resource and is dropped.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = text.strip_prefix('?').unwrap_or(text);
        let captures = SENSE_KEY.captures(text)?;
        let field = |name: &str| captures.name(name).map(|m| m.as_str().to_owned());
        let head = match captures.name("head") {
            Some(m) if !m.as_str().is_empty() => m.as_str()[1..]
                .split(':')
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        };
        Some(Self {
            lemma: field("lemma")?,
            ss_type: field("ss_type")?,
            lex_filenum: field("lex_filenum")?,
            lex_id: field("lex_id")?,
            head,
        })
    }
    pub fn lemma(&self) -> &str {
        &self.lemma
    }
    pub fn ss_type(&self) -> &str {
        &self.ss_type
    }
    pub fn lex_filenum(&self) -> &str {
        &self.lex_filenum
    }
    pub fn lex_id(&self) -> &str {
        &self.lex_id
    }
    pub fn head(&self) -> &[String] {
        &self.head
    }
    /// Part of speech letter for the synset type (`n`, `v`, `a`, `r` or `s`).
    pub fn part_of_speech(&self) -> Option<char> {
        match self.ss_type.as_str() {
            "1" => Some('n'),
            "2" => Some('v'),
            "3" => Some('a'),
            "4" => Some('r'),
            "5" => Some('s'),
            _ => None,
        }
    }
}
impl fmt::Display for SenseKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}%{}:{}:{}", self.lemma, self.ss_type, self.lex_filenum, self.lex_id)?;
        for h in &self.head {
            write!(f, ":{}", h)?;
        }
        Ok(())
    }
}
impl TryFrom<String> for SenseKey {
    type Error = VerbcladError;
    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s).ok_or(VerbcladError::MalformedIdentifier {
            kind: "sense key",
            text: s,
        })
    }
}
impl From<SenseKey> for String {
    fn from(key: SenseKey) -> String {
        key.to_string()
    }
}
