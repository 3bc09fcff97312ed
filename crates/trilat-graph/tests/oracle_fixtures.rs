use proptest::prelude::*;
use trilat_core::{ConsistencyError, Distance, VertexId};
use trilat_test_utils::{bfs_distances, fixtures};

#[test]
fn star_answers_without_searching() {
    let g = fixtures::star(5);
    assert_eq!(g.shortest_path_to_root(VertexId::ROOT), Some(0));
    for leaf in 1..=5 {
        assert_eq!(g.shortest_path_to_root(VertexId(leaf)), Some(1));
    }
    assert_eq!(g.verify(), Ok(()));
}

#[test]
fn isolated_vertex_is_reported_unreachable() {
    let (g, lonely) = fixtures::with_isolated(fixtures::ring(4));
    assert_eq!(g.shortest_path_to_root(lonely), None);
    assert_eq!(
        g.verify_distances(),
        Err(ConsistencyError::Unreachable { vertex: lonely })
    );
}

#[test]
fn stale_label_is_reported_with_both_values() {
    let mut g = fixtures::star(3);
    let far = g.allocate(Distance::finite(1));
    g.connect(VertexId(1), far);
    assert_eq!(
        g.verify_distances(),
        Err(ConsistencyError::DistanceMismatch {
            vertex: far,
            label: Distance::finite(1),
            recomputed: 2,
        })
    );
}

#[test]
fn unknown_vertex_has_no_path() {
    let g = fixtures::ring(3);
    assert_eq!(g.shortest_path_to_root(VertexId(3)), None);
}

proptest! {
    #[test]
    fn oracle_matches_bfs_on_rings(len in 3usize..40) {
        let g = fixtures::ring(len);
        let reference = bfs_distances(&g);
        for v in g.iter() {
            prop_assert_eq!(g.shortest_path_to_root(v.id()), reference[v.id().index()]);
        }
        prop_assert_eq!(g.verify(), Ok(()));
        prop_assert_eq!(g.edge_count(), len);
        prop_assert_eq!(g.max_degree(), 2);
    }
}
