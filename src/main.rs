#[macro_use]
extern crate clap;
extern crate etherscan_exporter_lib;

use clap::App;

fn main() {
    etherscan_exporter_lib::logger::init();

    let yaml = load_yaml!("cli.yml");
    let mut app = App::from_yaml(yaml);
    let matches = app.clone().get_matches();

    if let Some(_) = matches.subcommand_matches("config") {
        etherscan_exporter_lib::print_config();
    } else if let Some(_) = matches.subcommand_matches("server") {
        etherscan_exporter_lib::start_server();
    } else {
        let _ = app.print_help();
        println!("\n")
    }
}
