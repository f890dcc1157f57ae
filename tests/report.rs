use closed_set_paths::{
    graphs::{
        edge::UndirectedWeightedEdge, graph_factory::RandomGraphFactory,
        matrix_graph::MatrixGraph,
    },
    report::RunReport,
    search::dijkstra::shortest_path_tree,
};
use serde_json::{json, Value};

#[test]
fn json_document_of_disconnected_graph() {
    let edges = [UndirectedWeightedEdge::new(0, 1, 4).unwrap()];
    let graph = MatrixGraph::from_edges(3, &edges).unwrap();
    let result = shortest_path_tree(&graph, 0).unwrap();

    let document = serde_json::to_value(RunReport::new(42, &graph, &result)).unwrap();

    assert_eq!(
        document,
        json!({
            "seed": 42,
            "graph": {
                "number_of_vertices": 3,
                "infinity": 298,
                "costs": [0, 4, 298, 4, 0, 298, 298, 298, 0],
            },
            "start": 0,
            "termination": { "state": "converged", "iterations": 2 },
            "closed_set": [0, 1],
            "report": [
                { "status": "start" },
                { "status": "reachable", "cost": 4, "predecessor": 0 },
                { "status": "unreachable" },
            ],
        })
    );
}

#[test]
fn json_document_of_seeded_run() {
    let graph = RandomGraphFactory::with_seed(1.0, 7)
        .unwrap()
        .generate(5)
        .unwrap();
    let result = shortest_path_tree(&graph, 2).unwrap();

    let document = serde_json::to_value(RunReport::new(7, &graph, &result)).unwrap();

    assert_eq!(document["seed"], 7);
    assert_eq!(document["start"], 2);
    // a complete graph finalizes every vertex
    assert_eq!(
        document["termination"],
        json!({ "state": "exhausted", "iterations": 4 })
    );
    assert_eq!(document["closed_set"].as_array().unwrap().len(), 5);
    assert_eq!(document["closed_set"][0], 2);

    let report = document["report"].as_array().unwrap();
    assert_eq!(report.len(), 5);
    assert_eq!(report[2], json!({ "status": "start" }));
    assert!(report
        .iter()
        .enumerate()
        .filter(|&(vertex, _)| vertex != 2)
        .all(|(_, entry)| entry["status"] == Value::from("reachable")));
}
