use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::{Config, DEFAULT_OUTPUT, DEFAULT_STATE};
use crate::endpoints::{
    oauth::{build_authorize_url, exchange_code},
    profiles::tenant_id,
    projects::portfolio_raw,
    setup::httpclient,
};
use crate::error::Error;
use crate::normalize::normalize;
use crate::output::{summary_lines, write_portfolio};

/// Fetch the Upwork portfolio and save it as JSON for the website
///
/// Requires UPWORK_CLIENT_ID, UPWORK_CLIENT_SECRET and UPWORK_REDIRECT_URI
/// in the environment or in a `.env` file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Output JSON path, relative to the current directory
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// OAuth code (skip interactive prompt)
    #[arg(short = 'c', long)]
    pub code: Option<String>,
    /// Anti-forgery state sent with the authorize URL
    #[arg(short = 's', long, default_value = DEFAULT_STATE)]
    pub state: String,
    /// Print the authorize URL and exit
    #[arg(long, default_value_t = false)]
    pub print_url: bool,
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

/// Ask for the code on stdin after showing where to get it.
fn prompt_for_code(config: &Config, state: &str) -> anyhow::Result<String> {
    let url = build_authorize_url(config, state)?;
    println!("1) Open this URL in your browser and authorize (use the profile owner account):");
    println!("{url}");
    println!("\n2) After redirect, paste the `code` query parameter here:");
    print!("code = ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read code from stdin")?;
    Ok(line)
}

/// Resolve a usable code from the flag or the prompt; blank is an error.
///
/// The prompt only runs when no flag was given.
pub fn resolve_code(
    code: Option<String>,
    prompt: impl FnOnce() -> anyhow::Result<String>,
) -> anyhow::Result<String> {
    let code = match code {
        Some(code) => code,
        None => prompt()?,
    };
    let code = code.trim();
    if code.is_empty() {
        return Err(Error::EmptyCode.into());
    }
    Ok(code.to_string())
}

pub async fn execute() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = Config::from_env()?;
    run(cli, config).await
}

/// Run the whole pipeline for parsed arguments and a ready config.
///
/// The output file is only touched after every remote call has succeeded.
pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    if cli.print_url {
        println!("{}", build_authorize_url(&config, &cli.state)?);
        return Ok(());
    }

    let code = resolve_code(cli.code, || prompt_for_code(&config, &cli.state))?;

    let client = httpclient()?;
    let tokens = exchange_code(&client, &config, &code)
        .await
        .context("Failed to exchange authorization code")?;
    let access_token = tokens.access_token()?;

    let tenant = tenant_id(&client, &config, access_token)
        .await
        .context("Failed to resolve tenant id")?;
    let raw = portfolio_raw(&client, &config, access_token, tenant.as_deref())
        .await
        .context("Failed to fetch portfolio")?;
    let portfolio = normalize(&raw);

    write_portfolio(&cli.output, &portfolio)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    for line in summary_lines(&portfolio, &cli.output) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["upfolio"]).unwrap();
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.state, DEFAULT_STATE);
        assert!(cli.code.is_none());
        assert!(!cli.print_url);
    }

    #[test]
    fn short_flags() {
        let cli =
            Cli::try_parse_from(["upfolio", "-o", "public/data/p.json", "-c", "abc"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("public/data/p.json"));
        assert_eq!(cli.code.as_deref(), Some("abc"));
    }

    #[test]
    fn flag_code_skips_prompt() {
        let code = resolve_code(Some(" abc \n".to_string()), || panic!("prompted")).unwrap();
        assert_eq!(code, "abc");
    }

    #[test]
    fn prompt_used_without_flag() {
        let code = resolve_code(None, || Ok("from-stdin\n".to_string())).unwrap();
        assert_eq!(code, "from-stdin");
    }

    #[test]
    fn blank_flag_code_fails_without_prompting() {
        let err = resolve_code(Some("   ".to_string()), || panic!("prompted")).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::EmptyCode)));
    }

    #[test]
    fn empty_code_is_user_error() {
        let err = resolve_code(None, || Ok("   \n".to_string())).unwrap_err();
        let err = err.downcast_ref::<Error>().unwrap();
        assert!(matches!(err, Error::EmptyCode));
        assert!(err.is_user_error());
    }
}
