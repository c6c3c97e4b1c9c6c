//! rsplink 命令行：读取链接设置文件，输出阻塞SQL

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rsplink::{
    BlockingOptions, BlockingRuleSpec, ConfigManager, SettingsLoader, SqlDialect,
    block_using_rules_sql,
};

#[derive(Debug, Parser)]
#[command(name = "rsplink", version, about = "Compile blocking rules into candidate-pair SQL")]
struct Cli {
    /// 链接设置JSON文件
    #[arg(short, long)]
    settings: PathBuf,

    /// SQL方言（generic/duckdb/spark/athena/sqlite/postgres）
    #[arg(short, long, default_value = "generic")]
    dialect: SqlDialect,

    /// 加盐分区列
    #[arg(long, default_value = rsplink::config::DEFAULT_SALT_COLUMN)]
    salt_column: String,

    /// 训练阶段：使用设置中的 blocking_rule_for_training，不输出 match_key
    #[arg(long)]
    training: bool,

    /// 覆盖设置中的训练阻塞规则（隐含 --training）
    #[arg(long)]
    training_rule: Option<String>,

    #[arg(long)]
    two_dataset_link_only: bool,

    #[arg(long)]
    self_link: bool,

    /// 输出debug日志
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = SettingsLoader::from_file(&cli.settings)
        .await
        .with_context(|| format!("failed to load settings from {}", cli.settings.display()))?;
    let training = cli.training || cli.training_rule.is_some();
    if let Some(rule) = cli.training_rule {
        settings.blocking_rule_for_training = Some(BlockingRuleSpec::new(rule));
    }
    settings
        .select_phase(training)
        .context("failed to select blocking phase")?;

    let config = ConfigManager::custom()
        .dialect(cli.dialect)
        .salt_column(cli.salt_column)
        .verbose(cli.verbose)
        .build();
    let options = BlockingOptions {
        two_dataset_link_only: cli.two_dataset_link_only,
        self_link: cli.self_link,
    };

    let sql = block_using_rules_sql(&settings, &config, options)
        .context("failed to compile blocking sql")?;
    println!("{}", sql);
    Ok(())
}
