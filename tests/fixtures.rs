use assert_matches::assert_matches;
use constrained_tree_edit::{
    best_mapping, cheapest, diff, edit_distance, edit_distance_with, enumerate_mappings,
    enumerate_mappings_with, Breakdown, Config, ConstructionError, Deletion, Edit, NodeId, Target,
    Tree, INS_COST,
};

fn leaf(label: &'static str) -> Tree<&'static str> {
    let mut t = Tree::new();
    t.add_node(label, None).unwrap();
    t.compute_metadata();
    t
}

// A(B(D), C)
fn abdc() -> Tree<&'static str> {
    Tree::from_parents([("A", None), ("B", Some(0)), ("C", Some(0)), ("D", Some(1))]).unwrap()
}

// A(X(D), Y)
fn axyd() -> Tree<&'static str> {
    Tree::from_parents([("A", None), ("X", Some(0)), ("Y", Some(0)), ("D", Some(1))]).unwrap()
}

#[test]
fn test_building_tree() {
    let mut t = Tree::new();
    let a = t.add_node("A", None).unwrap();
    let b = t.add_node("B", Some(a)).unwrap();
    let c = t.add_node("C", Some(a)).unwrap();
    let d = t.add_node("D", Some(b)).unwrap();
    assert!(!t.has_fresh_metadata());

    t.compute_metadata();
    assert!(t.has_fresh_metadata());
    assert_eq!(t, abdc());

    // Topology
    assert_eq!(t.root(), Some(a));
    assert_eq!(t.children_of(a), &[b, c]);
    assert_eq!(t.parent_of(d), Some(b));
    assert!(t[a].is_root());
    assert!(t[c].is_leaf());

    // Metadata
    assert_eq!(t.preorder(), &[a, b, d, c]);
    assert_eq!(t.postorder(), vec![d, b, c, a]);
    assert_eq!((t[a].depth(), t[b].depth(), t[d].depth()), (0, 1, 2));
    assert_eq!((t[b].sibling(), t[c].sibling()), (0, 1));
    assert_eq!(t.height(), Some(2));
    assert_eq!(t.subtree_size(b), 2);
    assert_eq!(t.leaves(a), vec![d, c]);
}

#[test]
fn test_construction_errors() {
    let mut t = leaf("A");
    assert_eq!(
        t.add_node("B", Some(NodeId::from(7))),
        Err(ConstructionError::UnknownParent(NodeId::from(7)))
    );

    assert_eq!(
        t.add_node("B", None),
        Err(ConstructionError::MultipleRoots(NodeId::from(0)))
    );

    assert_eq!(t, leaf("A"));

    assert_matches!(
        Tree::from_parents([("A", None), ("B", Some(2)), ("C", Some(1))]),
        Err(ConstructionError::Unreachable(_))
    );

    assert_eq!(
        Tree::from_parents([("A", Some(1)), ("B", Some(0))]),
        Err(ConstructionError::MissingRoot)
    );
}

#[test]
fn test_relabeling_inner_nodes() {
    let (t1, t2) = (abdc(), axyd());

    let solutions = enumerate_mappings(&t1, &t2);
    let best = cheapest(&solutions).unwrap();

    assert_eq!(best.cost, 2);
    assert_eq!(best.cost, edit_distance(&t1, &t2));
    assert_eq!(best.mapping.to_string(), "{0 -> 0, 1 -> 1, 2 -> 2, 3 -> 3}");
    let bounded = best_mapping(&t1, &t2, &Config::default());
    assert_eq!(Some(best), bounded.as_ref());
}

#[test]
fn test_identical_single_nodes() {
    let (t1, t2) = (leaf("A"), leaf("A"));
    assert_eq!(edit_distance(&t1, &t2), 0);

    let solutions = enumerate_mappings(&t1, &t2);
    let best = cheapest(&solutions).unwrap();
    assert_eq!(best.cost, 0);
    assert_eq!(best.breakdown, Breakdown::default());
    assert_eq!(solutions.iter().filter(|s| s.cost == 0).count(), 1);
}

#[test]
fn test_distinct_single_nodes() {
    let (t1, t2) = (leaf("A"), leaf("B"));
    assert_eq!(edit_distance(&t1, &t2), 1);

    let solutions = enumerate_mappings(&t1, &t2);
    let best = cheapest(&solutions).unwrap();
    assert_eq!(best.cost, 1);
    assert_eq!(best.breakdown.relabelings, 1);
    assert_eq!(
        best.mapping.get(NodeId::from(0)),
        Some(Target::Node(NodeId::from(0)))
    );
    assert_eq!(solutions.iter().filter(|s| s.cost == 1).count(), 1);

    let (edits, cost) = diff(&t1, &t2, &Config::default());
    assert_eq!(cost, 1);
    assert_eq!(&*edits, &[Edit::Relabel(Box::default())]);
}

#[test]
fn test_empty_source() {
    let t2 = axyd();
    let solutions = enumerate_mappings(&Tree::new(), &t2);

    assert_matches!(&solutions[..], [only] => {
        assert!(only.mapping.is_empty());
        assert_eq!(only.breakdown.insertions, t2.len());
        assert_eq!(only.cost, t2.len() as u64 * INS_COST);
    });

    assert_eq!(edit_distance(&Tree::new(), &t2), t2.len() as u64 * INS_COST);
}

#[test]
fn test_enumeration_is_repeatable() {
    let (t1, t2) = (abdc(), axyd());
    let first = enumerate_mappings(&t1, &t2);
    let second = enumerate_mappings(&t1, &t2);
    assert_eq!(first, second);
}

#[test]
fn test_deleting_whole_subtrees_agrees_with_the_recursion() {
    // R(U(a), V(b)) against R(U(a, b))
    let t1 = Tree::from_parents([
        ("R", None),
        ("U", Some(0)),
        ("a", Some(1)),
        ("V", Some(0)),
        ("b", Some(3)),
    ])
    .unwrap();

    let t2 = Tree::from_parents([("R", None), ("U", Some(0)), ("a", Some(1)), ("b", Some(1))])
        .unwrap();

    let config = Config::default().with_deletion(Deletion::Subtree);
    let solutions = enumerate_mappings_with(&t1, &t2, &config);
    let best = cheapest(&solutions).unwrap();

    assert_eq!(best.cost, 3);
    assert_eq!(best.cost, edit_distance_with(&t1, &t2, &config));

    let free = cheapest(&enumerate_mappings(&t1, &t2)).map(|s| s.cost);
    assert_eq!(free, Some(1));
}

#[test]
fn test_stale_metadata_gives_results_without_panicking() {
    // Grown after its metadata was computed.
    let mut grown = abdc();
    let e = grown.add_node("E", Some(NodeId::from(2))).unwrap();
    grown.add_node("F", Some(e)).unwrap();
    assert!(!grown.has_fresh_metadata());

    // Never had its metadata computed.
    let mut raw = Tree::new();
    let a = raw.add_node("A", None).unwrap();
    let x = raw.add_node("X", Some(a)).unwrap();
    raw.add_node("D", Some(x)).unwrap();
    raw.add_node("Y", Some(a)).unwrap();
    assert!(!raw.has_fresh_metadata());

    let config = Config::default();
    for (t1, t2) in [(&grown, &raw), (&raw, &grown), (&grown, &grown), (&raw, &raw)] {
        let solutions = enumerate_mappings(t1, t2);
        assert!(!solutions.is_empty());
        assert!(best_mapping(t1, t2, &config).is_some());

        let d = edit_distance(t1, t2);
        let (_, cost) = diff(t1, t2, &config);
        assert_eq!(cost, d);
    }
}
