use flight_visualizer::Config;

fn main() {
    if let Err(e) = flight_visualizer::run(Config::default()) {
        eprintln!("Failed to open the visualizer: {}", e);
        std::process::exit(1);
    }
}
