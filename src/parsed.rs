//! The forest as handed over by an upstream parser.
//!
//! Attributes and children are already materialized; parent links are not
//! represented at all. Everything derives `Deserialize`, so a parser written in
//! any language can pass the forest along as JSON.

use serde::{Deserialize, Serialize};

use crate::construct::ThematicRole;
use crate::frame::Frame;
use crate::identifier::ClassId;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParsedMember {
    pub name: String,
    /// Sense keys as written; malformed ones are dropped when the forest is wired.
    #[serde(default)]
    pub wn: Vec<String>,
    #[serde(default, alias = "grouping")]
    pub groupings: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub verbnet_key: Option<String>,
}
impl ParsedMember {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            wn: Vec::new(),
            groupings: Vec::new(),
            features: Vec::new(),
            verbnet_key: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParsedClass {
    pub id: ClassId,
    #[serde(default)]
    pub members: Vec<ParsedMember>,
    #[serde(default)]
    pub roles: Vec<ThematicRole>,
    #[serde(default)]
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub subclasses: Vec<ParsedClass>,
}
impl ParsedClass {
    pub fn new(id: ClassId) -> Self {
        Self {
            id,
            members: Vec::new(),
            roles: Vec::new(),
            frames: Vec::new(),
            subclasses: Vec::new(),
        }
    }
}
