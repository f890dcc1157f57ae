use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use closed_set_paths::{
    error::Error,
    graphs::{
        graph_factory::RandomGraphFactory, Vertex, DEFAULT_DENSITY, DEFAULT_NUMBER_OF_VERTICES,
    },
    prompt::read_start_vertex,
    report::RunReport,
    search::dijkstra::shortest_path_tree,
    utility::seed_from_clock,
};
use log::info;

/// Generates a random undirected graph and prints the shortest distances
/// from a start vertex, computed with Dijkstra's algorithm.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices
    #[arg(short, long, default_value_t = DEFAULT_NUMBER_OF_VERTICES)]
    vertices: u32,

    /// Probability that two vertices are connected
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// Seed of the graph generator, taken from the clock if missing
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start vertex, asked for on stdin if missing
    #[arg(long)]
    start: Option<Vertex>,

    /// Do not print the generated graph
    #[arg(long)]
    hide_graph: bool,

    /// Print the vertices in the order they were finalized
    #[arg(long)]
    closed_set: bool,

    /// Print the shortest path to every reachable vertex
    #[arg(long)]
    paths: bool,

    /// Print the result as json instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) if error.is_internal() => {
            println!("\nfatal error: something went wrong. terminating.\n");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let seed = args.seed.unwrap_or_else(seed_from_clock);
    info!("generating graph with seed {}", seed);

    let graph = RandomGraphFactory::with_seed(args.density, seed)?.generate(args.vertices)?;
    info!(
        "generated {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    if !args.json && !args.hide_graph {
        println!("\ngraph generated:");
        println!("{}", graph);
    }

    let start = match args.start {
        Some(start) => start,
        // keep stdout clean for the json document
        None if args.json => {
            read_start_vertex(io::stdin().lock(), io::stderr(), graph.number_of_vertices())?
        }
        None => read_start_vertex(io::stdin().lock(), io::stdout(), graph.number_of_vertices())?,
    };

    let result = shortest_path_tree(&graph, start)?;

    if args.json {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &RunReport::new(seed, &graph, &result))?;
        writeln!(stdout)?;
        return Ok(());
    }

    println!();
    println!("{}", result.distances);

    if args.closed_set {
        println!("{}\n", result.closed_set);
    }

    if args.paths {
        println!("shortest paths");
        for vertex in graph.vertices() {
            if let Some(path) = result.distances.path_to(vertex) {
                println!("node ({:02})  -->  {}", vertex, path);
            }
        }
        println!();
    }

    Ok(())
}
