use cabinet_scraper::{CabinetScraper, QueryOptions};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;
use structopt::StructOpt;

lazy_static! {
    static ref QID_REGEX: Regex = Regex::new(r"^Q\d+$").unwrap();
}

#[derive(StructOpt, Debug)]
#[structopt(name = "scrape")]
struct Opt {
    /// Wikidata ids of the offices to scrape (e.g. Q654291). Can be repeated
    #[structopt(required = true)]
    positions: Vec<String>,

    /// Endpoint of the sparql query service
    #[structopt(short, long, default_value = "https://query.wikidata.org/sparql")]
    sparql: String,

    /// Path of the sqlite database to (re)create
    #[structopt(short, long, default_value = "data.sqlite", parse(from_os_str))]
    database: PathBuf,

    /// Drop memberships whose executive jurisdiction differs from the
    /// legislative jurisdiction of the queried office
    #[structopt(long)]
    strict_jurisdiction: bool,

    /// Also query the cabinet qualifier (P5054) of each membership
    #[structopt(long)]
    with_cabinet: bool,
}

fn main() {
    cabinet_scraper::log::init();

    let opt = Opt::from_args();
    for position in &opt.positions {
        if !QID_REGEX.is_match(position) {
            eprintln!(
                "\"{}\" does not look like a Wikidata id (e.g. Q654291)",
                position
            );
            std::process::exit(1);
        }
    }

    let options = QueryOptions {
        strict_jurisdiction: opt.strict_jurisdiction,
        include_cabinet: opt.with_cabinet,
    };
    let mut scraper =
        CabinetScraper::new(&opt.sparql, &opt.database).expect("impossible to open the scraper");
    let count = scraper
        .scrape(&opt.positions, &options)
        .expect("impossible to scrape the memberships");
    log::info!("saved {} memberships", count);
}
