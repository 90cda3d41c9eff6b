use omega::enumerate::MaximalCliques;
use omega::exact::BranchAndBound;
use omega::graph::{BaseGraph, HashMapGraph};
use omega::io::DimacsRead;
use omega::solver::{CliqueSolver, ComputationResult};
use omega::timeout::Interrupter;
use std::convert::TryFrom;
use std::fs::File;
use std::io;
use std::io::{stdin, BufReader};
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

#[cfg(all(feature = "jemallocator", not(target_env = "msvc")))]
use jemallocator::Jemalloc;

#[cfg(all(feature = "jemallocator", not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "omega-cli",
    about = "Computes a maximum clique of a given DIMACS input graph."
)]
struct Opt {
    /// Input file, DIMACS `.col` format. `stdin` if not specified.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Time limit in seconds. Unlimited if not specified.
    #[structopt(short, long)]
    time_limit: Option<u64>,

    /// Enumerate all maximal cliques instead of computing a maximum clique.
    #[structopt(short, long)]
    enumerate: bool,
}

fn print_clique(clique: &[usize]) {
    let labels: Vec<String> = clique.iter().map(|v| (v + 1).to_string()).collect();
    println!("{}", labels.join(" "));
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    #[cfg(feature = "handle-ctrlc")]
    omega::signals::initialize();

    #[cfg(feature = "env_logger")]
    omega::log::build_dimacs_logger();

    let graph: HashMapGraph = match &opt.input {
        Some(path) => {
            let file = File::open(path)?;
            let reader = DimacsRead(BufReader::new(file));
            HashMapGraph::try_from(reader)?
        }
        None => {
            let stdin = stdin();
            let reader = DimacsRead(stdin.lock());
            HashMapGraph::try_from(reader)?
        }
    };
    println!("c {} vertices, {} edges", graph.order(), graph.size());

    if opt.enumerate {
        println!("c Enumerating all maximal cliques.");
        for clique in MaximalCliques::with_graph(&graph) {
            print_clique(&clique);
        }
        return Ok(());
    }

    let bounds = omega::solver::bounds(&graph);
    println!(
        "c greedy bounds [{}, {}]",
        bounds.lowerbound, bounds.upperbound
    );

    let interrupter = match opt.time_limit {
        Some(seconds) => Interrupter::deadline(Duration::from_secs(seconds)),
        None => Interrupter::none(),
    };

    println!("c Running branch and bound.");
    let result = BranchAndBound::with_graph(&graph)
        .interrupter(interrupter)
        .compute();
    match result {
        ComputationResult::MaximumClique(clique) => {
            println!("c maximum clique size {}", clique.len());
            print_clique(&clique);
        }
        ComputationResult::Interrupted => {
            println!("c interrupted");
            std::process::exit(1);
        }
    }
    Ok(())
}
