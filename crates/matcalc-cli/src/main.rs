use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::str::FromStr;

use matcalc_cli::calculate::{evaluate, user_message, Operation, Outcome};
use matcalc_cli::config::{resolve_config, CalculatorConfig};
use matcalc_cli::io::{read_matrix, write_matrix};
use matcalc_cli::render::{render_named, OutputFormat};
use matcalc_core::editing::{check_bounds, check_shape, random_fill, resize};
use matcalc_core::Matrix;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATCALC_LOG", "error,matcalc=info"))
        .init();

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("random", sub_m)) => handle_random(sub_m),
        Some(("resize", sub_m)) => handle_resize(sub_m),
        Some((name, sub_m)) => Operation::from_str(name)
            .map_err(anyhow::Error::msg)
            .and_then(|op| handle_operation(op, sub_m)),
        None => unreachable!("Subcommand is required by CLI configuration"),
    };

    if let Err(e) = result {
        log::debug!("[matcalc] {} failed: {:#}", name_of(&matches), e);
        eprintln!("[matcalc] {}", user_message(&e));
        std::process::exit(1)
    }
    Ok(())
}

fn name_of(matches: &ArgMatches) -> &str {
    matches.subcommand_name().unwrap_or("matcalc")
}

fn build_cli() -> Command {
    let mut cmd = Command::new("matcalc")
        .version(clap::crate_version!())
        .about("Exact matrix calculator: determinant, inverse, transpose, rotation, sum and product")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON calculator configuration file")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("How to print the result on stdout")
                .global(true)
                .value_parser(["text", "json", "csv"])
                .default_value("text"),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help("Also write the resulting matrix to this file (*.csv, *.tsv or *.json)")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        );

    for op in Operation::ALL {
        let mut sub = Command::new(op.name())
            .about(op.label())
            .arg(matrix_arg("a", "Path to matrix A (*.csv, *.tsv or *.json)"));
        if op.needs_second_matrix() {
            sub = sub.arg(matrix_arg("b", "Path to matrix B (*.csv, *.tsv or *.json)"));
        }
        cmd = cmd.subcommand(sub);
    }

    cmd.subcommand(
        Command::new("random")
            .about("Generate a matrix of random whole numbers")
            .arg(dimension_arg("rows", "Number of rows"))
            .arg(dimension_arg("cols", "Number of columns"))
            .arg(
                Arg::new("seed")
                    .long("seed")
                    .help("Seed for a reproducible matrix")
                    .value_parser(clap::value_parser!(u64)),
            ),
    )
    .subcommand(
        Command::new("resize")
            .about("Resize a matrix, keeping the top-left block and zero-filling the rest")
            .arg(matrix_arg("a", "Path to the matrix to resize"))
            .arg(dimension_arg("rows", "New number of rows"))
            .arg(dimension_arg("cols", "New number of columns")),
    )
}

fn matrix_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn dimension_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(usize))
}

fn handle_operation(op: Operation, matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let a_path: &PathBuf = matches.get_one("a").unwrap();
    log::info!("[matcalc] {} of {:?}", op.label(), a_path);

    let a = read_matrix(a_path)?;
    let b = if op.needs_second_matrix() {
        let b_path: &PathBuf = matches.get_one("b").unwrap();
        Some(read_matrix(b_path)?)
    } else {
        None
    };

    let outcome = evaluate(op, &a, b.as_ref(), &config)?;
    emit(op.name(), op.label(), &outcome, matches, &config)
}

fn handle_random(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let rows: usize = *matches.get_one("rows").unwrap();
    let cols: usize = *matches.get_one("cols").unwrap();
    check_shape(rows, cols, config.max_dimension)?;

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let m = random_fill(rows, cols, config.random_min, config.random_max, &mut rng)?;
    emit("random", "Random matrix", &Outcome::Matrix(m), matches, &config)
}

fn handle_resize(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let a_path: &PathBuf = matches.get_one("a").unwrap();
    let rows: usize = *matches.get_one("rows").unwrap();
    let cols: usize = *matches.get_one("cols").unwrap();

    check_shape(rows, cols, config.max_dimension)?;

    let a = read_matrix(a_path)?;
    check_bounds(&a, config.max_dimension)?;
    let m = resize(&a, rows, cols)?;
    emit("resize", "Resized matrix", &Outcome::Matrix(m), matches, &config)
}

fn load_config(matches: &ArgMatches) -> Result<CalculatorConfig> {
    resolve_config(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
}

fn emit(
    name: &str,
    label: &str,
    outcome: &Outcome,
    matches: &ArgMatches,
    config: &CalculatorConfig,
) -> Result<()> {
    let format = matches
        .get_one::<String>("format")
        .map(|s| OutputFormat::from_str(s))
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    if let Some(path) = matches.get_one::<PathBuf>("output_file") {
        let m = match outcome {
            Outcome::Matrix(m) => m.clone(),
            Outcome::Scalar(v) => Matrix::from_shape_vec((1, 1), vec![*v])?,
        };
        write_matrix(path, &m)?;
    }

    println!(
        "{}",
        render_named(name, label, outcome, format, config.precision)
    );
    Ok(())
}
