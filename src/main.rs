// ==========================================
// Cross Check - CLI entry point
// ==========================================
// Thin wrapper around the import pipeline and the statistics
// queries. All business behavior lives in the library.
// ==========================================

use anyhow::{bail, Context};
use cross_check::importer::ImportObserver;
use cross_check::{
    AppConfig, BatchImporter, BatchImporterImpl, ImportReport, SqliteImportRepository,
    StatsRepository,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Echoes pipeline progress to the terminal.
struct CliObserver;

impl ImportObserver for CliObserver {
    fn on_log(&self, message: &str) {
        println!("  {}", message);
    }
}

fn usage() -> &'static str {
    "Cross Check - customer/order/loan reconciliation\n\
     \n\
     USAGE:\n\
     \x20 cross-check [--config <file>] [--db <file>] <command>\n\
     \n\
     COMMANDS:\n\
     \x20 import [--json]              full rebuild import of the three sources\n\
     \x20 stats                        counts, sums and the top-10 ranking\n\
     \x20 search <term>                find customers by name, mobile or national id\n\
     \x20 show <customers|orders|financials>\n\
     \x20                              list the first rows of one table"
}

#[tokio::main]
async fn main() {
    cross_check::logging::init();

    if let Err(e) = run().await {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = AppConfig::load_or_default();

    // global flags come before the command
    while let Some(flag) = args.first().filter(|a| a.starts_with("--")).cloned() {
        match flag.as_str() {
            "--config" => {
                args.remove(0);
                if args.is_empty() {
                    bail!("--config needs a file path\n\n{}", usage());
                }
                let path = PathBuf::from(args.remove(0));
                config = AppConfig::load(&path)
                    .with_context(|| format!("cannot load config {}", path.display()))?;
            }
            "--db" => {
                args.remove(0);
                if args.is_empty() {
                    bail!("--db needs a file path\n\n{}", usage());
                }
                config.db_path = args.remove(0);
            }
            _ => bail!("unknown flag {}\n\n{}", flag, usage()),
        }
    }

    let command = match args.first() {
        Some(c) => c.clone(),
        None => bail!("{}", usage()),
    };

    match command.as_str() {
        "import" => {
            let as_json = args.iter().any(|a| a == "--json");
            let repo = SqliteImportRepository::new(&config.db_path)?;
            let importer = BatchImporterImpl::new(repo).with_observer(Arc::new(CliObserver));

            let report = importer
                .run_full_import(
                    &config.customers_file,
                    &config.orders_file,
                    &config.financials_file,
                )
                .await?;

            if as_json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        "stats" => {
            let repo = StatsRepository::new(&config.db_path)?;
            let stats = repo.statistics()?;

            println!("Record counts:");
            println!("  customers:          {:>10}", stats.counts.customers);
            println!("  orders:             {:>10}", stats.counts.orders);
            println!("  financial records:  {:>10}", stats.counts.financials);
            println!();
            println!("Totals:");
            println!("  order value:        {:>15.0}", stats.total_order_value);
            println!("  financial amount:   {:>15.0}", stats.total_financial_amount);

            let top = repo.top_customers_by_order_value(10)?;
            if !top.is_empty() {
                println!();
                println!("Top customers by order value:");
                for (rank, entry) in top.iter().enumerate() {
                    println!(
                        "  {:>2}. {:<12} {:<30} {:>15.0}",
                        rank + 1,
                        entry.subscription_code,
                        full_name(entry.name.as_deref(), entry.surname.as_deref()),
                        entry.total_value
                    );
                }
            }
        }
        "search" => {
            let term = args
                .get(1)
                .context("search needs a term, e.g. cross-check search Ali")?;
            let repo = StatsRepository::new(&config.db_path)?;
            let customers = repo.search_customers(term, 50)?;

            if customers.is_empty() {
                println!("no customers match '{}'", term);
            } else {
                for customer in &customers {
                    println!(
                        "{:<12} {:<30} mobile={:<15} national_id={}",
                        customer.subscription_code,
                        full_name(customer.name.as_deref(), customer.surname.as_deref()),
                        customer.mobile.as_deref().unwrap_or("-"),
                        customer.national_id.as_deref().unwrap_or("-"),
                    );
                }
            }
        }
        "show" => {
            let table = args
                .get(1)
                .context("show needs a table: customers, orders or financials")?;
            let repo = StatsRepository::new(&config.db_path)?;

            match table.as_str() {
                "customers" => {
                    for customer in repo.list_customers(20)? {
                        println!(
                            "{:<12} {:<30} {}",
                            customer.subscription_code,
                            full_name(customer.name.as_deref(), customer.surname.as_deref()),
                            customer.city.as_deref().unwrap_or("-"),
                        );
                    }
                }
                "orders" => {
                    for order in repo.list_orders(20)? {
                        println!(
                            "{:<6} {:<12} invoice={:<12} qty={:<6} total={:>14.0}",
                            order.id.unwrap_or(0),
                            order.subscription_code,
                            order.invoice_id.as_deref().unwrap_or("-"),
                            order.quantity,
                            order.total_value,
                        );
                    }
                }
                "financials" => {
                    for record in repo.list_financials(20)? {
                        println!(
                            "{:<6} {:<12} loan={:<10} amount={:>14.0}",
                            record.id.unwrap_or(0),
                            record.subscription_code,
                            record.loan_code.as_deref().unwrap_or("-"),
                            record.amount,
                        );
                    }
                }
                other => bail!("unknown table {}\n\n{}", other, usage()),
            }
        }
        other => bail!("unknown command {}\n\n{}", other, usage()),
    }

    Ok(())
}

fn print_report(report: &ImportReport) {
    println!();
    println!("Import summary:");
    println!("  customers imported:  {}", report.customers_imported);
    println!("  orders imported:     {}", report.orders_imported);
    println!("  financials imported: {}", report.financials_imported);
    println!("  errors:              {}", report.errors.len());
    if let Some(elapsed) = report.elapsed_ms {
        println!("  elapsed:             {} ms", elapsed);
    }

    if !report.errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &report.errors {
            println!("  - {}", error);
        }
    }
}

fn full_name(name: Option<&str>, surname: Option<&str>) -> String {
    let mut full = String::new();
    if let Some(name) = name {
        full.push_str(name);
    }
    if let Some(surname) = surname {
        if !full.is_empty() {
            full.push(' ');
        }
        full.push_str(surname);
    }
    if full.is_empty() {
        full.push('-');
    }
    full
}
