use tacc_lib as tacc;

fn main() {
    let options = tacc::options::get();
    tacc::logger::init(tacc::logger::level(options.verbose)).expect("Logger initialization failed");

    if let Err(err) = tacc::driver::drive(options) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
