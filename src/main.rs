use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match media_browser::cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
