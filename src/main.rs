use anyhow::Context;
use clap::Parser;
use photo_status::{cli, config, notify, preview, report, scanner, session, store};
use photo_status_common::summarize;
use cli::{Cli, Commands};
use config::Config;
use notify::ConsoleNotifier;
use session::{DialoguerPrompter, SessionOutcome, SessionRunner};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "photo_status=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Review { target, statuses, on_display_error } => {
            println!("🖼  photo-status - ステータス入力\n");

            let folder = target.resolve(&config.root_dir)?;
            if !folder.is_dir() {
                println!("選択した日付の画像はありません: {}", folder.display());
                return Ok(());
            }

            let vocabulary = if statuses.is_empty() {
                session::select_vocabulary(&config.catalog)?
            } else {
                config.catalog.vocabulary_from_labels(&statuses)?
            };

            let notifier = ConsoleNotifier;
            let images = scanner::list_images(&folder)?;
            let prior = store::load(&folder, &vocabulary, &notifier);

            print!("{}", report::render_summary(&summarize(&prior, &vocabulary), &config.catalog, true));
            println!("---");

            if images.is_empty() {
                println!("画像がありません: {}", folder.display());
            }

            let policy = on_display_error.unwrap_or(config.on_display_error);
            let previewer = preview::DecodePreviewer;
            let runner = SessionRunner::new(&vocabulary, &previewer, &notifier).with_policy(policy);
            let mut prompter = DialoguerPrompter::new(&config.catalog);

            match runner.run(&images, &prior, &mut prompter)? {
                SessionOutcome::Completed(record) => {
                    if store::save(&record, &folder, &notifier).is_ok() {
                        println!();
                        print!("{}", report::render_summary(&summarize(&record, &vocabulary), &config.catalog, false));
                        println!("\n✅ 完了: {}", store::status_path(&folder).display());
                    }
                }
                SessionOutcome::Abandoned { reviewed } => {
                    println!("\n中断しました（{}枚処理済み、保存していません）", reviewed);
                }
            }
        }

        Commands::Summary { target, statuses, list } => {
            let folder = target.resolve(&config.root_dir)?;
            if !folder.is_dir() {
                println!("選択した日付の画像はありません: {}", folder.display());
                return Ok(());
            }

            let vocabulary = if statuses.is_empty() {
                config.catalog.vocabulary()?
            } else {
                config.catalog.vocabulary_from_labels(&statuses)?
            };

            let record = store::load(&folder, &vocabulary, &ConsoleNotifier);
            println!("📊 {}\n", folder.display());
            print!("{}", report::render_summary(&summarize(&record, &vocabulary), &config.catalog, list));
        }

        Commands::List { target } => {
            let folder = target.resolve(&config.root_dir)?;
            if !folder.is_dir() {
                println!("選択した日付の画像はありません: {}", folder.display());
                return Ok(());
            }

            let images = scanner::list_images(&folder)?;
            println!("✔ {}枚の画像を検出: {}\n", images.len(), folder.display());
            for image in &images {
                match &image.date {
                    Some(date) => println!("  {} ({})", image.file_name, date),
                    None => println!("  {}", image.file_name),
                }
            }
        }

        Commands::Config { show, set_root, set_on_display_error } => {
            let mut config = config;
            let mut changed = false;

            if let Some(root) = set_root {
                config.root_dir = root;
                changed = true;
            }

            if let Some(policy) = set_on_display_error {
                config.on_display_error = policy;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  ルートディレクトリ: {}", config.root_dir.display());
                println!("  表示失敗時: {}", config.on_display_error);
                println!("  ステータス:");
                for entry in config.catalog.entries() {
                    println!("    - {} ({})", entry.display, entry.stored);
                }
            }
        }
    }

    Ok(())
}
