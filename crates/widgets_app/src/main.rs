mod platform;

fn main() {
    if let Err(err) = platform::run_app() {
        eprintln!("widgets_app: {err:#}");
        std::process::exit(1);
    }
}
