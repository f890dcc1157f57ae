use std::collections::HashSet;

use closed_set_paths::{
    graphs::{graph_factory::RandomGraphFactory, matrix_graph::MatrixGraph, Distance},
    search::dijkstra::{shortest_path_tree, DijkstraEngine, Step},
};
use proptest::prelude::*;

fn random_graph() -> impl Strategy<Value = (MatrixGraph, u32)> {
    (1u32..=16, 0.0f64..=1.0, any::<u64>()).prop_flat_map(|(number_of_vertices, density, seed)| {
        let graph = RandomGraphFactory::with_seed(density, seed)
            .unwrap()
            .generate(number_of_vertices)
            .unwrap();
        (Just(graph), 0..number_of_vertices)
    })
}

/// All pairs shortest distances, `None` if unreachable.
fn floyd_warshall(graph: &MatrixGraph) -> Vec<Vec<Option<Distance>>> {
    let n = graph.number_of_vertices() as usize;
    let mut distances = vec![vec![None; n]; n];
    for tail in graph.vertices() {
        distances[tail as usize][tail as usize] = Some(0);
        for (head, weight) in graph.neighbours(tail) {
            distances[tail as usize][head as usize] = Some(weight);
        }
    }

    for via in 0..n {
        for tail in 0..n {
            for head in 0..n {
                if let (Some(first), Some(second)) = (distances[tail][via], distances[via][head]) {
                    let alternative = first + second;
                    if distances[tail][head].map_or(true, |current| alternative < current) {
                        distances[tail][head] = Some(alternative);
                    }
                }
            }
        }
    }

    distances
}

proptest! {
    #[test]
    fn generated_graphs_are_symmetric((graph, _) in random_graph()) {
        for tail in graph.vertices() {
            prop_assert_eq!(graph.cost(tail, tail), 0);
            for head in graph.vertices() {
                prop_assert_eq!(graph.cost(tail, head), graph.cost(head, tail));
            }
        }
    }

    #[test]
    fn closed_set_grows_without_duplicates((graph, start) in random_graph()) {
        let mut engine = DijkstraEngine::new(&graph, start).unwrap();
        let mut previous_count = engine.closed_set().count();

        for _ in 0..engine.max_iterations() {
            let step = engine.step().unwrap();
            let count = engine.closed_set().count();
            match step {
                Step::Finalized(_) => prop_assert_eq!(count, previous_count + 1),
                Step::Converged => {
                    prop_assert_eq!(count, previous_count);
                    break;
                }
            }
            previous_count = count;
        }

        let unique: HashSet<_> = engine.closed_set().iter().collect();
        prop_assert_eq!(unique.len(), engine.closed_set().count());
        prop_assert!(engine.closed_set().count() <= graph.number_of_vertices() as usize);
    }

    #[test]
    fn costs_never_increase((graph, start) in random_graph()) {
        let mut engine = DijkstraEngine::new(&graph, start).unwrap();
        let mut previous = engine.distances().costs().to_vec();

        for _ in 0..engine.max_iterations() {
            let step = engine.step().unwrap();
            let current = engine.distances().costs();
            prop_assert!(previous.iter().zip(current).all(|(before, after)| after <= before));
            previous = current.to_vec();
            if step == Step::Converged {
                break;
            }
        }
    }

    #[test]
    fn terminates_within_bound((graph, start) in random_graph()) {
        let result = shortest_path_tree(&graph, start).unwrap();
        prop_assert!(result.termination.iterations() <= graph.number_of_vertices().saturating_sub(1));
    }

    #[test]
    fn predecessor_iff_reachable((graph, start) in random_graph()) {
        let distances = shortest_path_tree(&graph, start).unwrap().distances;

        prop_assert_eq!(distances.cost(start), 0);
        prop_assert_eq!(distances.predecessor(start), None);
        for vertex in graph.vertices().filter(|&vertex| vertex != start) {
            prop_assert_eq!(
                distances.predecessor(vertex).is_some(),
                distances.cost(vertex) < graph.infinity()
            );
        }
    }

    #[test]
    fn matches_floyd_warshall((graph, start) in random_graph()) {
        let expected = floyd_warshall(&graph);
        let distances = shortest_path_tree(&graph, start).unwrap().distances;

        for vertex in graph.vertices() {
            let cost = distances.cost(vertex);
            let cost = (cost < graph.infinity()).then_some(cost);
            prop_assert_eq!(cost, expected[start as usize][vertex as usize]);
        }
    }

    #[test]
    fn paths_are_walkable((graph, start) in random_graph()) {
        let distances = shortest_path_tree(&graph, start).unwrap().distances;

        for vertex in graph.vertices() {
            if let Some(path) = distances.path_to(vertex) {
                prop_assert_eq!(path.vertices.first(), Some(&start));
                prop_assert_eq!(path.vertices.last(), Some(&vertex));
                let length: Distance = path
                    .vertices
                    .windows(2)
                    .map(|pair| graph.weight(pair[0], pair[1]).unwrap())
                    .sum();
                prop_assert_eq!(length, path.distance);
            }
        }
    }
}
