//! Frames: one syntax/semantics pairing describing a usage pattern of a class.
//!
//! Syntax elements are tagged by their phrase kind (`NP`, `VERB`, `PREP`, `ADJ`,
//! `ADV`, `LEX`); only the kinds that carry a thematic role, a value or
//! restrictions have fields. The position of an element within its frame is
//! assigned when the forest is wired.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::construct::ClassRef;
use crate::restriction::{ResolvedRestrictions, RestrictionTree, SyntacticRestrictions};

// ------------- Description -------------
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
    #[serde(default, alias = "descriptionNumber")]
    pub description_number: String,
    #[serde(default)]
    pub xtag: String,
}

// ------------- Syntax -------------
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxType {
    NP,
    VERB,
    PREP,
    ADJ,
    ADV,
    LEX,
}
impl fmt::Display for SyntaxType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SyntaxType::NP => "NP",
            SyntaxType::VERB => "VERB",
            SyntaxType::PREP => "PREP",
            SyntaxType::ADJ => "ADJ",
            SyntaxType::ADV => "ADV",
            SyntaxType::LEX => "LEX",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Phrase {
    #[serde(rename = "NP")]
    NounPhrase {
        #[serde(default, alias = "value")]
        thematic_role: String,
        #[serde(default)]
        syntactic_restrictions: SyntacticRestrictions,
        #[serde(default)]
        selectional_restrictions: RestrictionTree,
    },
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "PREP")]
    Preposition {
        #[serde(default)]
        value: String,
        #[serde(default)]
        selectional_restrictions: RestrictionTree,
    },
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "LEX")]
    Lexical {
        #[serde(default)]
        value: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxElement {
    #[serde(skip)]
    index: usize,
    #[serde(flatten)]
    phrase: Phrase,
}
impl SyntaxElement {
    pub fn new(phrase: Phrase) -> Self {
        Self { index: 0, phrase }
    }
    /// Position of this element within its frame, from 0.
    pub fn index(&self) -> usize {
        self.index
    }
    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }
    pub fn syntax_type(&self) -> SyntaxType {
        match self.phrase {
            Phrase::NounPhrase { .. } => SyntaxType::NP,
            Phrase::Verb => SyntaxType::VERB,
            Phrase::Preposition { .. } => SyntaxType::PREP,
            Phrase::Adjective => SyntaxType::ADJ,
            Phrase::Adverb => SyntaxType::ADV,
            Phrase::Lexical { .. } => SyntaxType::LEX,
        }
    }
    pub fn thematic_role(&self) -> Option<&str> {
        match &self.phrase {
            Phrase::NounPhrase { thematic_role, .. } => Some(thematic_role),
            _ => None,
        }
    }
    pub fn value(&self) -> Option<&str> {
        match &self.phrase {
            Phrase::Preposition { value, .. } | Phrase::Lexical { value } => Some(value),
            _ => None,
        }
    }
    pub fn syntactic_restrictions(&self) -> Option<ResolvedRestrictions> {
        match &self.phrase {
            Phrase::NounPhrase { syntactic_restrictions, .. } => Some(syntactic_restrictions.resolve()),
            _ => None,
        }
    }
    /// Restrictions on this element beyond those of its thematic role.
    pub fn selectional_restrictions(&self) -> Option<ResolvedRestrictions> {
        match &self.phrase {
            Phrase::NounPhrase { selectional_restrictions, .. }
            | Phrase::Preposition { selectional_restrictions, .. } => Some(selectional_restrictions.resolve()),
            _ => None,
        }
    }
}
impl fmt::Display for SyntaxElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.phrase {
            Phrase::NounPhrase { thematic_role, .. } => write!(f, "NP.{}", thematic_role),
            Phrase::Preposition { value, .. } | Phrase::Lexical { value } if !value.is_empty() => {
                write!(f, "{}[{}]", self.syntax_type(), value)
            }
            _ => write!(f, "{}", self.syntax_type()),
        }
    }
}

// ------------- Semantics -------------
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Polarity {
    #[default]
    True,
    Neg,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticArgument {
    #[serde(rename = "type")]
    pub arg_type: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticPredicate {
    #[serde(default)]
    pub polarity: Polarity,
    #[serde(rename = "type")]
    pub predicate_type: String,
    #[serde(default)]
    pub arguments: Vec<SemanticArgument>,
}
impl fmt::Display for SemanticPredicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let arguments: Vec<&str> = self.arguments.iter().map(|a| a.value.as_str()).collect();
        let negation = if self.polarity == Polarity::Neg { "!" } else { "" };
        write!(f, "{}{}({})", negation, self.predicate_type, arguments.join(", "))
    }
}

// ------------- Frame -------------
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub syntax: Vec<SyntaxElement>,
    #[serde(default)]
    pub predicates: Vec<SemanticPredicate>,
    #[serde(skip)]
    class: Option<ClassRef>,
}
impl Frame {
    /// The class that declared this frame, known once the frame is planted in a forest.
    pub fn class(&self) -> Option<ClassRef> {
        self.class
    }
    pub(crate) fn set_class(&mut self, class: ClassRef) {
        self.class = Some(class);
    }
    // positions are local to the frame
    pub(crate) fn number_syntax(&mut self) {
        for (index, element) in self.syntax.iter_mut().enumerate() {
            element.set_index(index);
        }
    }
}
