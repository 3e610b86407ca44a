use adjgraph::AdjList;
use petgraph::unionfind::UnionFind;
use proptest::prelude::*;

fn edges() -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0usize..30, 0usize..30), 0..80)
}

proptest! {
    #[test]
    fn components_match_union_find(edges in edges(), directed in any::<bool>()) {
        let graph = AdjList::from_edges(directed, edges.iter().copied());
        let comps = graph.components();
        let n = graph.slot_count();
        prop_assert_eq!(comps.len(), n);

        let mut uf = UnionFind::<usize>::new(n);
        for &(x, y) in &edges {
            uf.union(x, y);
        }

        for u in 0..n {
            for v in 0..n {
                prop_assert_eq!(comps.same_component(u, v), uf.equiv(u, v), "u={} v={}", u, v);
            }
        }
    }

    #[test]
    fn component_ids_follow_smallest_member(edges in edges()) {
        let graph = AdjList::from_edges(false, edges.iter().copied());
        let comps = graph.components();

        // Scanning ascending, each new id appears exactly one past the previous maximum.
        let mut next = 0;
        for &id in comps.as_slice() {
            prop_assert!(id <= next);
            if id == next {
                next += 1;
            }
        }
        prop_assert_eq!(next, comps.count());
    }

    #[test]
    fn components_are_an_equivalence(edges in edges()) {
        let graph = AdjList::from_edges(false, edges.iter().copied());
        let comps = graph.components();
        let n = comps.len();

        for u in 0..n {
            prop_assert!(comps.same_component(u, u));
            for v in 0..n {
                prop_assert_eq!(comps.same_component(u, v), comps.same_component(v, u));
                if !comps.same_component(u, v) {
                    continue;
                }
                for w in 0..n {
                    if comps.same_component(v, w) {
                        prop_assert!(comps.same_component(u, w));
                    }
                }
            }
        }
    }

    #[test]
    fn render_is_stable(edges in edges(), directed in any::<bool>()) {
        let graph = AdjList::from_edges(directed, edges.iter().copied());
        let first = graph.render();
        prop_assert_eq!(&first, &graph.render());
        let body = first.lines().count().saturating_sub(2);
        prop_assert_eq!(body, graph.edge_count());
    }
}
