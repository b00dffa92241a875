use clap::{load_yaml, App, AppSettings, ArgMatches};
use isohash::{compare, compare::combined_hashes, matrix, matrix::AdjMatrix, Mode};
use log::info;
use rusqlite::{Connection, OpenFlags};
use std::error::Error;

fn load_matrix(path: &str, sqlite: bool) -> Result<AdjMatrix, Box<dyn Error>> {
    if sqlite {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(matrix::from_sqlite(&conn)?)
    } else {
        Ok(matrix::read_file(path)?)
    }
}

fn handle_compare(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let sqlite = matches.is_present("sqlite");
    let a = load_matrix(matches.value_of("MATRIX_A").unwrap(), sqlite)?;
    let b = load_matrix(matches.value_of("MATRIX_B").unwrap(), sqlite)?;
    let walks = matches.value_of("walks").unwrap().parse()?;
    for mode in parse_modes(matches.value_of("mode").unwrap()) {
        println!("{}", compare(&a, &b, walks, mode)?);
    }
    Ok(())
}

fn handle_fingerprint(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let m = load_matrix(
        matches.value_of("MATRIX").unwrap(),
        matches.is_present("sqlite"),
    )?;
    let walks = matches.value_of("walks").unwrap().parse()?;
    let mode = matches.value_of("mode").unwrap().parse::<Mode>()?;
    for hash in combined_hashes(&m, walks, mode)? {
        println!("{}", hash);
    }
    Ok(())
}

fn handle_relabel(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let m = load_matrix(
        matches.value_of("MATRIX").unwrap(),
        matches.is_present("sqlite"),
    )?;
    let perm = matches
        .value_of("PERMUTATION")
        .unwrap()
        .split(',')
        .map(|p| p.trim().parse())
        .collect::<Result<Vec<usize>, _>>()?;
    print!("{}", m.permute(&perm)?);
    Ok(())
}

fn parse_modes(mode: &str) -> Vec<Mode> {
    match mode {
        "node" => vec![Mode::Node],
        "edge" => vec![Mode::Edge],
        "both" => vec![Mode::Node, Mode::Edge],
        _ => panic!("Invalid mode"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .get_matches();
    if let Some(threads) = matches.value_of("threads") {
        let threads = threads.parse()?;
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        info!("using {} threads", threads);
    }
    if let Some(matches) = matches.subcommand_matches("compare") {
        handle_compare(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("fingerprint") {
        handle_fingerprint(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("relabel") {
        handle_relabel(matches)?;
    }
    Ok(())
}
