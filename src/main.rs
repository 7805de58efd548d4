fn main() {
    use include_graph_explorer::cli::parse;
    let cli = parse();
    let code = include_graph_explorer::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
