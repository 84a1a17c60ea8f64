//! `mst`: reads a weighted graph and prints its minimum spanning forest.

#[macro_use]
extern crate log;

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use simplelog::{Config, LevelFilter, WriteLogger};

use spanning_forest::input;
use spanning_forest::layout::LayoutConfig;
use spanning_forest::render::{self, Format};
use spanning_forest::{kruskal, Graph};

const USAGE: &str = "\
usage: mst [options] [INPUT]

Reads `V E` followed by E triples `u v weight` from INPUT (or standard
input) and prints the minimum spanning forest.

options:
  -f, --format FORMAT   text, dot, or svg (default: text)
  -o, --output PATH     write to PATH instead of standard output
  -v, --verbose         log more; repeat (or write -vv, -vvv) for more
  -q, --quiet           log errors only
  -h, --help            print this message
";

#[derive(Debug, PartialEq)]
struct Options {
    format: Format,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    level: LevelFilter,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            format: Format::default(),
            input: None,
            output: None,
            level: LevelFilter::Warn,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, PartialEq)]
enum Command {
    Run(Options),
    Help,
}

fn more_verbose(level: LevelFilter) -> LevelFilter {
    match level {
        LevelFilter::Off | LevelFilter::Error | LevelFilter::Warn => LevelFilter::Info,
        LevelFilter::Info => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn is_verbose_cluster(flag: &str) -> bool {
    flag.len() > 1 && flag.starts_with('-') && flag[1..].chars().all(|c| c == 'v')
}

impl Options {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Command, String> {
        let mut options = Options::default();
        let mut input_seen = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "-f" | "--format" => {
                    let value = args.next().ok_or("--format needs a value")?;
                    options.format = value.parse()?;
                }
                "-o" | "--output" => {
                    let value = args.next().ok_or("--output needs a value")?;
                    options.output = Some(PathBuf::from(value));
                }
                "--verbose" => options.level = more_verbose(options.level),
                flag if is_verbose_cluster(flag) => {
                    for _ in 1 .. flag.len() {
                        options.level = more_verbose(options.level);
                    }
                }
                "-q" | "--quiet" => options.level = LevelFilter::Error,
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(format!("unknown option `{}`", flag));
                }
                path => {
                    if input_seen {
                        return Err(format!("unexpected argument `{}`", path));
                    }
                    input_seen = true;
                    if path != "-" {
                        options.input = Some(PathBuf::from(path));
                    }
                }
            }
        }

        Ok(Command::Run(options))
    }
}

fn run(options: &Options) -> spanning_forest::Result<()> {
    let graph: Graph<i64> = match options.input {
        Some(ref path) => input::from_file(path)?,
        None => input::from_reader(io::stdin())?,
    };
    info!("read {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let forest = kruskal(&graph);
    match forest.total_weight() {
        Ok(total) => info!("selected {} edges, total weight {}, {} component(s)",
                           forest.len(), total, forest.component_count()),
        Err(err) => warn!("selected {} edges, {} component(s): {}",
                          forest.len(), forest.component_count(), err),
    }

    let mut out: Box<dyn Write> = match options.output {
        Some(ref path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    render::render(options.format, &graph, &forest, &LayoutConfig::default(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print!("{}", USAGE);
            return;
        }
        Err(msg) => {
            eprintln!("mst: {}\n\n{}", msg, USAGE);
            process::exit(2);
        }
    };

    let _ = WriteLogger::init(options.level, Config::default(), io::stderr());
    debug!("options: {:?}", options);

    if let Err(err) = run(&options) {
        eprintln!("mst: {}", err);
        process::exit(1);
    }
}
