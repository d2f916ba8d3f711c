use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match upfolio::cli::execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<upfolio::Error>() {
                Some(e) if e.is_user_error() => eprintln!("{e}"),
                _ => eprintln!("Error: {err:?}"),
            }
            ExitCode::FAILURE
        }
    }
}
