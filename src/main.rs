use casement::App;

fn main() {
    env_logger::init();

    if let Err(e) = App::new().with_title("Demo Window").run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
