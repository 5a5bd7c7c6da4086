//! End-to-end runs of the console against the built-in demo data.

use clap::Parser;

use wings_console::cli::Cli;
use wings_console::error::ConsoleError;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("wings").chain(args.iter().copied())).unwrap()
}

#[tokio::test]
async fn dashboard_runs_offline() {
    wings_console::run(parse(&["--demo", "dashboard"])).await.unwrap();
}

#[tokio::test]
async fn report_runs_offline() {
    wings_console::run(parse(&["--demo", "report"])).await.unwrap();
}

#[tokio::test]
async fn valid_sale_succeeds() {
    wings_console::run(parse(&[
        "--demo", "sales", "record", "--product", "2", "--quantity", "3",
    ]))
    .await
    .unwrap();
}

#[tokio::test]
async fn overselling_exits_with_screen_error() {
    let err = wings_console::run(parse(&[
        "--demo", "sales", "record", "--product", "4", "--quantity", "99",
    ]))
    .await
    .unwrap_err();

    match err {
        ConsoleError::Screen(message) => assert_eq!(message, "Failed to record sale"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unknown_customer_is_reported() {
    let err = wings_console::run(parse(&[
        "--demo", "customers", "update", "99", "--name", "Nobody",
    ]))
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Customer not found: 99");
}

#[tokio::test]
async fn missing_config_file_is_an_error() {
    let err = wings_console::run(parse(&[
        "--demo",
        "--config",
        "/nonexistent/wings.toml",
        "dashboard",
    ]))
    .await
    .unwrap_err();
    assert!(matches!(err, ConsoleError::Config(_)));
}
