use std::{error::Error, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info};
use route_graph::{builder::GraphBuilder, graph::adjacency::AdjacencyGraph, types::BoundKind};
use trains::{
    query::{QueryParams, RouteQueries},
    report::Report,
};

#[derive(Parser)]
#[command(version, about = "Distance and trip queries on a railway network")]
struct Cli {
    /// Network edges such as 'AB5, BC4, CD8'. May be split over several arguments.
    #[arg(short, long, required = true, num_args = 1.., value_name = "EDGES")]
    graph: Vec<String>,

    /// Read bound settings from a JSON file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Whether a stop limit includes the limit itself. Overrides the config file.
    #[arg(long, value_enum)]
    stop_bound: Option<BoundArg>,

    /// Whether a distance limit includes the limit itself. Overrides the config file.
    #[arg(long, value_enum)]
    weight_bound: Option<BoundArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Answer the ten standard questions (default).
    Report,

    /// Total distance of a route written as 'A-B-C'.
    Distance { route: String },

    /// Count trips between two stops.
    Trips {
        from: String,
        to: String,

        #[command(flatten)]
        limit: Limit,
    },

    /// Distance of the shortest route between two stops.
    Shortest { from: String, to: String },

    /// List the trips between two stops.
    Routes {
        from: String,
        to: String,

        #[command(flatten)]
        limit: Limit,

        /// Print routes as a JSON array.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Clone, Copy, Debug)]
#[group(required = true, multiple = false)]
struct Limit {
    /// At most <N> stops.
    #[arg(long, value_name = "N")]
    max_stops: Option<usize>,

    /// Exactly <N> stops.
    #[arg(long, value_name = "N")]
    exact_stops: Option<usize>,

    /// Total distance below (or up to, see --weight-bound) <W>.
    #[arg(long, value_name = "W")]
    max_distance: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BoundArg {
    Inclusive,
    Exclusive,
}

impl From<BoundArg> for BoundKind {
    fn from(value: BoundArg) -> Self {
        match value {
            BoundArg::Inclusive => BoundKind::Inclusive,
            BoundArg::Exclusive => BoundKind::Exclusive,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut params = match &cli.config {
        Some(path) => {
            info!("Loading query parameters from {:?}", path);
            QueryParams::read(path)?
        }
        None => QueryParams::default(),
    };
    if let Some(stop_bound) = cli.stop_bound {
        params.stop_bound = stop_bound.into();
    }
    if let Some(weight_bound) = cli.weight_bound {
        params.weight_bound = weight_bound.into();
    }
    debug!("Query parameters: {:?}", params);

    let graph: AdjacencyGraph<String, u32> = GraphBuilder::new().parts(&cli.graph)?.build();
    debug!("Graph:\n{}", graph);

    let queries = RouteQueries::with_params(&graph, params);

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => print!("{}", Report::new(&queries)),
        Commands::Distance { route } => println!("{}", queries.route_distance(&route)),
        Commands::Trips { from, to, limit } => {
            let trips = match limit {
                Limit {
                    max_stops: Some(n), ..
                } => queries.trips_with_max_stops(&from, &to, n),
                Limit {
                    exact_stops: Some(n),
                    ..
                } => queries.trips_with_exact_stops(&from, &to, n),
                Limit {
                    max_distance: Some(w),
                    ..
                } => queries.trips_with_max_weight(&from, &to, w),
                _ => unreachable!("clap requires one limit"),
            };
            println!("{}", trips);
        }
        Commands::Shortest { from, to } => println!("{}", queries.shortest_route(&from, &to)),
        Commands::Routes {
            from,
            to,
            limit,
            json,
        } => {
            let routes = match limit {
                Limit {
                    max_stops: Some(n), ..
                } => queries.routes_within(&from, &to, &queries.stop_budget(n)),
                Limit {
                    exact_stops: Some(n),
                    ..
                } => queries.routes_with_exact_stops(&from, &to, n),
                Limit {
                    max_distance: Some(w),
                    ..
                } => queries.routes_within(&from, &to, &queries.weight_budget(w)),
                _ => unreachable!("clap requires one limit"),
            };
            info!("Found {} routes", routes.len());

            if json {
                println!("{}", serde_json::to_string(&routes)?);
            } else {
                routes.iter().for_each(|route| println!("{}", route));
            }
        }
    }

    Ok(())
}
