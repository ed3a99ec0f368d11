mod cli;

fn main() {
    match cli::run() {
        Ok(cli::Exit::Played | cli::Exit::ArgumentError) => {}
        Ok(cli::Exit::Help) => {
            #[allow(clippy::exit)]
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            #[allow(clippy::exit)]
            std::process::exit(1);
        }
    }
}
