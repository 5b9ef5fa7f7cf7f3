mod input;
mod options;
mod output;
mod run;

use std::process::exit;

fn main() {
    let options = options::Options::parse();
    output::log::start_logging(options.verbose);
    if let Err(error) = run::run(&options) {
        output::print::error(&error);
        exit(1)
    }
}
