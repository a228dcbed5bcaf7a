#[macro_use]
extern crate log;

use clap::{App, Arg};

use livenav::cli;
use livenav::links::StaticNavLink;

fn cli_opts<'a, 'b>() -> App<'a, 'b> {
    cli::base_opts()
        .about("Shows which nav link would be marked live for a given page.")
        .arg(
            Arg::with_name("path")
                .long("path")
                .takes_value(true)
                .required(true)
                .help("The page's location pathname"),
        )
        .arg(
            Arg::with_name("href")
                .multiple(true)
                .help("The nav bar's hrefs, in document order. Use - for an anchor without one"),
        )
}

fn main() {
    cli::run(|| {
        let matches = cli_opts().get_matches();
        let rules = cli::load_rules(&matches)?;
        let path = matches.value_of("path").unwrap_or("");

        let mut links: Vec<StaticNavLink> = matches
            .values_of("href")
            .map(|hrefs| {
                hrefs
                    .map(|href| match href {
                        "-" => StaticNavLink::without_href(),
                        href => StaticNavLink::new(href),
                    })
                    .collect()
            })
            .unwrap_or_default();

        match rules.apply(&mut links, path) {
            Some(idx) => info!("Marked link {} as {}", idx, rules.marker),
            None => info!("Nothing in the nav matches {}", path),
        }

        for link in links.iter() {
            let flag = if link.has_class(&rules.marker) { "*" } else { " " };
            println!("{} {}", flag, link.href().unwrap_or("-"));
        }

        Ok(())
    })
}
