//! Verbclad – a read-only model of a hierarchical verb class resource.
//!
//! The resource is a forest of verb classes. Each class carries:
//! * members ([`construct::Member`]), i.e. lemmas with links to external word senses,
//! * thematic roles ([`construct::ThematicRole`]) with selectional restrictions,
//! * frames ([`frame::Frame`]) pairing syntax with semantic predicates,
//! * subclasses, which inherit members and frames from their ancestors.
//!
//! An upstream parser produces the forest as nested [`parsed::ParsedClass`]
//! values. [`index::Index::build`] plants them into an arena
//! ([`construct::Forest`]), wires parent links and syntax positions, and fills
//! the lookup maps once. Everything is immutable afterwards and may be read from
//! any number of threads.
//!
//! ## Modules
//! * [`identifier`] – class ids (`begin-55.1-1`) and sense keys (`climb%2:38:01`).
//! * [`restriction`] – restriction trees and their resolution into alternatives.
//! * [`construct`] – the class forest, inheritance queries and the generic lookup.
//! * [`frame`] – frames, syntax elements and semantic predicates.
//! * [`index`] – lookups by id, lemma, base id and sense key.
//! * [`interface`] – publishing rebuilt indexes to concurrent readers.
//! * [`settings`] – configuration for the command line front end.
//!
//! ## Quick Start
//! ```
//! use verbclad::identifier::ClassId;
//! use verbclad::index::Index;
//! use verbclad::parsed::{ParsedClass, ParsedMember};
//! let mut begin = ParsedClass::new(ClassId::parse("begin-55.1").unwrap());
//! begin.members.push(ParsedMember::new("start"));
//! let mut subclass = ParsedClass::new(ClassId::parse("begin-55.1-1").unwrap());
//! subclass.members.push(ParsedMember::new("commence"));
//! begin.subclasses.push(subclass);
//! let index = Index::build(vec![begin]).unwrap();
//! let class = index.get_by_id("55.1-1").unwrap();
//! let members = index.forest().members_include_inherited(class);
//! assert_eq!(members.len(), 2);
//! assert_eq!(members[1].verbnet_key(), "start#1");
//! ```

pub mod construct;
pub mod error;
pub mod frame;
pub mod identifier;
pub mod index;
pub mod interface;
pub mod parsed;
pub mod restriction;
pub mod settings;

pub use error::{Result, VerbcladError};
