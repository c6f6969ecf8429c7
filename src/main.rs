use clap::Parser;
use contract_analyzer::{cli, config, error, export, picker, terminal, transport};
use contract_analyzer_common::{dispatch, EventTarget, StateHost, WidgetEvent};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` は通知済みの失敗
async fn run(cli: Cli) -> Result<bool> {
    let mut config = Config::load()?;
    config.apply_env()?;

    match cli.command {
        Commands::Analyze { file, export: save_json, output, host, port, policy, raw } => {
            if let Some(host) = host {
                config.client.host = host;
            }
            if let Some(port) = port {
                config.client.port = port;
            }
            if let Some(policy) = policy {
                config.client.policy = policy;
            }
            config.client.validate()?;
            info!(endpoint = %config.client.analyze_url(), "analyze");

            // 1. ファイル選択
            let path = match file {
                Some(path) => path,
                None => picker::pick_file(&std::env::current_dir()?)?,
            };
            let selected = picker::load_file(&path)?;
            debug!(file = %path.display(), mime_type = %selected.mime_type, "selected");

            // 2. 送信・表示
            let host = terminal::TerminalHost::new(config.client.policy, std::io::stderr().is_terminal() && !raw);
            let transport = transport::ReqwestTransport::new(&config)?;
            let outcome = dispatch(
                &host,
                &transport,
                &terminal::TerminalNotifier,
                &config.client,
                EventTarget::DropZone,
                WidgetEvent::FileSelected(vec![selected]),
            )
            .await;

            if !terminal::completed(&outcome)? {
                debug!(?outcome, "not displayed");
                return Ok(false);
            }

            println!("{}", export::format_results(&host.view(), raw));

            // 3. 保存
            if save_json {
                let Some(artifact) = host.with(|state| state.result.as_ref().map(|r| r.export())) else {
                    return Ok(true);
                };
                let dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
                let saved = export::write_artifact(&artifact, &dir)?;
                eprintln!("✔ 結果を保存: {}", saved.display());
            }
        }

        Commands::Config { set_host, set_port, set_timeout, show } => {
            // 保存時は環境変数の上書きを含めない
            let mut stored = Config::load()?;
            let mut changed = false;

            if let Some(host) = set_host {
                stored.client.host = host;
                changed = true;
            }
            if let Some(port) = set_port {
                stored.client.port = port;
                changed = true;
            }
            if let Some(timeout) = set_timeout {
                stored.timeout_seconds = if timeout == 0 { None } else { Some(timeout) };
                changed = true;
            }
            if changed {
                stored.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
                config = stored;
                config.apply_env()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.client.analyze_url());
                println!("  送信ポリシー: {:?}", config.client.policy);
                match config.timeout_seconds {
                    Some(s) => println!("  タイムアウト: {}秒", s),
                    None => println!("  タイムアウト: なし"),
                }
            }
        }
    }

    Ok(true)
}
