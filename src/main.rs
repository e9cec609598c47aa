use chrono::{Datelike, Local};
use clap::Parser;
use dialoguer::Select;
use indicatif::ProgressBar;
use shift_board::{cli, config, display, error, fetcher, importer, storage};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, ShiftBoardError};
use fetcher::FileSheetSource;
use importer::ImportOptions;
use shift_board_common::selection::employee_options;
use shift_board_common::{resolve_selection, select, ScheduleStore, Weekday, PLACEHOLDER_TITLE};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use storage::FileStorage;

type Store = ScheduleStore<FileStorage>;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let verbose = cli.verbose;

    match cli.command {
        Commands::Import { link, file, range } => {
            println!("📅 shift-board - Импорт таблицы\n");

            let options = ImportOptions::from_config(&config, range.as_deref(), verbose)?;
            let mut store = open_store(&config, cli.storage)?;

            let report = match file {
                Some(path) => {
                    let source = FileSheetSource::new(path);
                    with_spinner(importer::run_import(&source, &mut store, &options)).await?
                }
                None => {
                    let link = link.unwrap_or_default();
                    with_spinner(importer::import_link(&link, &config, &mut store, &options)).await?
                }
            };

            let days: Vec<&str> = report.days.iter().map(|d| d.label()).collect();
            println!("✔ Загружено сотрудников: {}", report.employees);
            println!("  Листы: {}", days.join(", "));
            println!("  Источник: {}\n", report.origin);

            show_schedule(&store, None, None, false)?;
        }

        Commands::Show { employee, day, all } => {
            let store = open_store(&config, cli.storage)?;
            show_schedule(&store, employee.as_deref(), day, all)?;
        }

        Commands::Employees => {
            let store = open_store(&config, cli.storage)?;
            let Some(map) = store.load_map()? else {
                print_not_loaded();
                return Ok(());
            };
            let remembered = store.remembered_employee()?;
            print!("{}", display::render_employees(&map, remembered.as_deref()));
        }

        Commands::Select { employee, clear } => {
            let mut store = open_store(&config, cli.storage)?;

            if clear {
                store.remember_employee(None)?;
                println!("✔ Выбор сотрудника сброшен");
                return Ok(());
            }

            let Some(map) = store.load_map()? else {
                print_not_loaded();
                return Ok(());
            };

            match employee {
                Some(name) => {
                    let name = name.trim();
                    if !map.contains_employee(name) {
                        return Err(ShiftBoardError::UnknownEmployee(name.to_string()));
                    }
                    store.remember_employee(Some(name))?;
                }
                None => {
                    let names = employee_options(&map);
                    let remembered = store.remembered_employee()?;

                    let mut items = vec!["Выберите сотрудника"];
                    items.extend(names.iter().copied());
                    let current = remembered
                        .as_deref()
                        .and_then(|r| names.iter().position(|n| *n == r))
                        .map(|i| i + 1)
                        .unwrap_or(0);

                    let choice = Select::new()
                        .with_prompt("Сотрудник")
                        .items(&items)
                        .default(current)
                        .interact_opt()
                        .map_err(|e| ShiftBoardError::Interactive(e.to_string()))?;

                    match choice {
                        Some(0) => store.remember_employee(None)?,
                        Some(i) => store.remember_employee(Some(names[i - 1]))?,
                        None => return Ok(()),
                    }
                }
            }

            println!();
            show_schedule(&store, None, None, false)?;
        }

        Commands::Forget { link, employee } => {
            let mut store = open_store(&config, cli.storage)?;
            let both = !link && !employee;

            if link || both {
                store.clear_source_link()?;
                println!("✔ Ссылка на таблицу удалена");
            }
            if employee || both {
                store.remember_employee(None)?;
                println!("✔ Выбор сотрудника сброшен");
            }
        }

        Commands::Status => {
            let store = open_store(&config, cli.storage)?;

            println!("Состояние:");
            println!("  Файл: {}", store.storage().path().display());
            println!(
                "  Заголовок: {}",
                store.title()?.unwrap_or_else(|| PLACEHOLDER_TITLE.to_string())
            );
            println!("  Ссылка: {}", store.source_link()?.unwrap_or_else(|| "—".into()));
            match store.load_map() {
                Ok(Some(map)) => println!("  Сотрудников: {}", map.len()),
                Ok(None) => println!("  Сотрудников: данные не загружены"),
                Err(e) => println!("  Сотрудников: {}", e),
            }
            println!(
                "  Выбран: {}",
                store.remembered_employee()?.unwrap_or_else(|| "—".into())
            );
            println!(
                "  Снег: {}",
                if store.snowflakes_enabled()? { "вкл" } else { "выкл" }
            );
        }

        Commands::Snow { toggle } => {
            let mut store = open_store(&config, cli.storage)?;
            let enabled = if toggle {
                store.toggle_snowflakes()?
            } else {
                store.snowflakes_enabled()?
            };
            println!("{}", if enabled { "❄️  Снег включён" } else { "Снег выключен" });
        }

        Commands::Config { set_range, set_url_template, show } => {
            let mut config = config;

            if let Some(range) = set_range {
                range.parse::<shift_board::grid::CellRange>()?;
                config.cell_range = range;
                config.save()?;
                println!("✔ セル範囲を設定しました");
            }

            if let Some(template) = set_url_template {
                if !template.contains("{id}") {
                    return Err(ShiftBoardError::Config(
                        "URLテンプレートに {id} が含まれていません".into(),
                    ));
                }
                config.export_url_template = template;
                config.save()?;
                println!("✔ URLテンプレートを設定しました");
            }

            if show {
                println!("設定:");
                println!("  URLテンプレート: {}", config.export_url_template);
                println!("  セル範囲: {}", config.cell_range);
                println!("  タイトルセル: {}", config.title_cell);
                println!("  保存先: {}", config.storage_path(cli.storage)?.display());
            }
        }
    }

    Ok(())
}

fn open_store(config: &Config, overridden: Option<PathBuf>) -> Result<Store> {
    let path = config.storage_path(overridden)?;
    Ok(ScheduleStore::new(FileStorage::open(path)?))
}

/// 読み込み中はスピナーを表示
async fn with_spinner<T>(task: impl Future<Output = Result<T>>) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Загрузка...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = task.await;
    spinner.finish_and_clear();
    result
}

fn print_not_loaded() {
    println!("Данные не загружены. Выполните `shift-board import <ссылка>`.");
}

/// 保存済みデータを読み込み、選択に応じて表示
fn show_schedule(store: &Store, employee: Option<&str>, day: Option<Weekday>, all: bool) -> Result<()> {
    let Some(map) = store.load_map()? else {
        print_not_loaded();
        return Ok(());
    };

    let today = Local::now().date_naive();
    let title = store.title()?.unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());
    print!("{}", display::render_header(today, &title, store.snowflakes_enabled()?));
    println!();

    if all {
        print!("{}", display::render_all(&map));
        return Ok(());
    }

    let remembered = store.remembered_employee()?;
    let selection = resolve_selection(
        &map,
        employee,
        remembered.as_deref(),
        day,
        today.weekday().num_days_from_sunday(),
    );

    let outcome = select(&map, selection.employee.as_deref(), Some(selection.day));
    let compare_link = store.source_link()?;
    print!(
        "{}",
        display::render_outcome(
            &outcome,
            selection.employee.as_deref(),
            selection.day,
            compare_link.as_deref(),
        )
    );

    Ok(())
}
