#![allow(dead_code)]

use verbclad::identifier::ClassId;
use verbclad::index::Index;
use verbclad::parsed::{ParsedClass, ParsedMember};

pub const TEST_VERBNET: &str = include_str!("../data/test-verbnet.json");

pub fn parsed_forest() -> Vec<ParsedClass> {
    serde_json::from_str(TEST_VERBNET).expect("fixture deserializes")
}

pub fn setup() -> Index {
    Index::build(parsed_forest()).expect("index builds")
}

pub fn class(id: &str, members: &[&str]) -> ParsedClass {
    let mut class = ParsedClass::new(ClassId::parse(id).expect("valid class id"));
    for name in members {
        class.members.push(ParsedMember::new(name));
    }
    class
}
