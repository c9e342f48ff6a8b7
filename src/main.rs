use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = confess_build::cli::Cli::parse();

    if let Err(err) = confess_build::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}
