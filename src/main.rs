use goget::app;
use goget::config::help_text;
use goget::utils::logger;
use goget::{CliConfig, CommandFetcher, ListManager};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse_args();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    // 不需要設定檔即可顯示說明
    if config.wants_help() {
        println!("{}", help_text());
        return;
    }
    tracing::debug!("CLI config: {:?}", config);

    let list_config = match config.resolve_list_config() {
        Ok(list_config) => list_config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let fetcher = CommandFetcher::from_config(&list_config);
    let manager = ListManager::new(list_config, fetcher);

    let mut stdout = std::io::stdout();
    if let Err(e) = app::run(&config, &manager, &mut stdout).await {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
