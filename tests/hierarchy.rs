mod common;

use common::{class, setup};
use verbclad::VerbcladError;
use verbclad::construct::{ClassRef, Forest};
use verbclad::index::Index;
use verbclad::parsed::ParsedMember;

fn ids(classes: &[&verbclad::construct::ClassNode]) -> Vec<String> {
    classes.iter().map(|c| c.id().class_id().to_owned()).collect()
}

#[test]
fn parents_are_wired() {
    let index = setup();
    let forest = index.forest();
    let leaf = index.get_by_id("45.6.1-1-1").expect("class exists");
    let middle = forest.parent(leaf).expect("has a parent");
    assert_eq!(middle.id().class_id(), "45.6.1-1");
    let root = forest.parent(middle).expect("has a parent");
    assert_eq!(root.id().class_id(), "45.6.1");
    assert!(root.is_root());
    assert!(forest.parent(root).is_none());
    for node in forest.iter() {
        for child in forest.subclasses(node) {
            assert_eq!(child.parent(), Some(node.class()));
        }
    }
}

#[test]
fn ancestors_and_descendants() {
    let index = setup();
    let forest = index.forest();
    let root = index.get_by_id("45.6.1").expect("class exists");
    let leaf = index.get_by_id("45.6.1-1-1").expect("class exists");
    assert_eq!(ids(&forest.ancestors(leaf)), vec!["45.6.1-1", "45.6.1"]);
    assert!(forest.ancestors(root).is_empty());
    assert_eq!(ids(&forest.descendants(root)), vec!["45.6.1-1", "45.6.1-1-1"]);
    assert!(forest.descendants(leaf).is_empty());
    assert_eq!(ids(&forest.subclasses(root)), vec!["45.6.1-1"]);
}

#[test]
fn related_has_no_duplicates() {
    let index = setup();
    let forest = index.forest();
    let middle = index.get_by_id("45.6.1-1").expect("class exists");
    let related = ids(&forest.related(middle));
    assert_eq!(related, vec!["45.6.1-1", "45.6.1", "45.6.1-1-1"]);
    let mut deduplicated = related.clone();
    deduplicated.sort();
    deduplicated.dedup();
    assert_eq!(deduplicated.len(), related.len());
    // other trees of the forest are not related
    assert!(!related.contains(&"55.1".to_string()));
}

#[test]
fn inherited_members_nearest_first() {
    let index = setup();
    let forest = index.forest();
    let leaf = index.get_by_id("45.6.1-1-1").expect("class exists");
    let members: Vec<&str> = forest
        .members_include_inherited(leaf)
        .iter()
        .map(|m| m.name())
        .collect();
    assert_eq!(members, vec!["rise", "appreciate", "climb", "build", "die"]);
    let root = index.get_by_id("45.6.1").expect("class exists");
    assert_eq!(forest.members_include_inherited(root).len(), root.members().len());
}

#[test]
fn inherited_frames_and_roles() {
    let index = setup();
    let forest = index.forest();
    let middle = index.get_by_id("45.6.1-1").expect("class exists");
    let frames = forest.frames_include_inherited(middle);
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0].description.primary, "NP V ADV");
    assert_eq!(frames[1].description.primary, "NP.attribute V");
    let roles: Vec<&str> = forest
        .roles_include_inherited(middle)
        .iter()
        .map(|r| r.role_type())
        .collect();
    assert_eq!(roles, vec!["Patient", "Attribute", "Extent"]);
}

#[test]
fn syntax_positions_are_local_to_the_frame() {
    let index = setup();
    let root = index.get_by_id("45.6.1").expect("class exists");
    for frame in root.frames() {
        for (position, element) in frame.syntax.iter().enumerate() {
            assert_eq!(element.index(), position);
        }
    }
}

#[test]
fn wiring_twice_changes_nothing() {
    let mut forest = Forest::new(common::parsed_forest()).expect("forest plants");
    let before: Vec<_> = forest.iter().map(|c| (c.class(), c.parent())).collect();
    forest.wire();
    let after: Vec<_> = forest.iter().map(|c| (c.class(), c.parent())).collect();
    assert_eq!(before, after);
    let roots = forest.roots();
    assert_eq!(roots[0].frames()[0].syntax[2].index(), 2);
}

#[test]
fn verbnet_keys_count_repeated_names() {
    let mut root = class("begin-55.1", &["start", "begin", "start"]);
    let mut explicit = ParsedMember::new("start");
    explicit.verbnet_key = Some(String::from("start#7"));
    root.members.push(explicit);
    root.subclasses.push(class("begin-55.1-1", &["start"]));
    let index = Index::build(vec![root]).expect("index builds");
    let keys: Vec<&str> = index
        .get_members_by_lemma("start")
        .iter()
        .map(|m| m.verbnet_key())
        .collect();
    // the counter restarts in every class
    assert_eq!(keys, vec!["start#1", "start#2", "start#7", "start#1"]);
}

#[test]
fn duplicate_ids_keep_the_first_class() {
    let first = class("begin-55.1", &["begin"]);
    let second = class("start-55.1", &["start"]);
    let index = Index::build(vec![first, second]).expect("index builds");
    assert_eq!(index.roots().len(), 2);
    let found = index.get_by_id("55.1").expect("class exists");
    assert_eq!(found.members()[0].name(), "begin");
    // the lemma prefix does not pick a different class
    let by_second_surface = index.get_by_id("start-55.1").expect("class exists");
    assert_eq!(by_second_surface, found);
    let by_first_surface = index.get_by_id("begin-55.1").expect("class exists");
    assert_eq!(by_first_surface, found);
    // the second class is still reachable by lemma
    assert_eq!(index.get_by_lemma("start").len(), 1);
}

#[test]
fn empty_forest() {
    let index = Index::build(Vec::new()).expect("index builds");
    assert!(index.roots().is_empty());
    assert!(index.forest().is_empty());
    assert!(index.get_by_lemma("begin").is_empty());
    assert!(index.get_by_id("55.1").is_err());
}

#[test]
fn every_descendant_sees_its_ancestor() {
    let index = setup();
    let forest = index.forest();
    for node in forest.iter() {
        for descendant in forest.descendants(node) {
            assert!(forest.ancestors(descendant).contains(&node));
        }
        let related = forest.related(node);
        assert!(related.contains(&node));
    }
}

#[test]
fn inherited_frames_know_their_class() {
    let index = setup();
    let forest = index.forest();
    let root = index.get_by_id("45.6.1").expect("class exists");
    let middle = index.get_by_id("45.6.1-1").expect("class exists");
    let frames = forest.frames_include_inherited(middle);
    assert_eq!(frames[0].class(), Some(middle.class()));
    for frame in &frames[1..] {
        assert_eq!(frame.class(), Some(root.class()));
        let declaring = forest.class_of_frame(frame).expect("frame is planted");
        assert_eq!(declaring.id().class_id(), "45.6.1");
    }
    let unplanted = verbclad::frame::Frame::default();
    assert!(forest.class_of_frame(&unplanted).is_none());
}

#[test]
fn class_positions_fit_in_u32() {
    let class = ClassRef::try_from(3usize).expect("small position");
    assert_eq!(class.position(), 3);
    let last = ClassRef::try_from(u32::MAX as usize).expect("largest position");
    assert_eq!(last.position(), u32::MAX as usize);
    match ClassRef::try_from(u32::MAX as usize + 1) {
        Err(VerbcladError::Capacity(_)) => (),
        other => panic!("expected a capacity error, got {:?}", other),
    }
}
