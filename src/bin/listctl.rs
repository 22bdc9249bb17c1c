use anyhow::{Context, Result, anyhow};
use arraylist_demo::cli::Cli;
use arraylist_demo::runtime::{Report, Session};
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    if cli.demo {
        println!("Running demo scenarios...");
        run_all_demos().context("Demo scenarios failed")?;
        println!("All scenarios passed!");
    } else if let Some(file_path) = &cli.file {
        run_file(file_path, &cli)
            .with_context(|| format!("Failed to run script: {:?}", file_path))?;
    } else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
    }

    Ok(())
}

fn run_file(path: &Path, cli: &Cli) -> Result<()> {
    // 1. Verify file existence and extension
    if !path.exists() {
        return Err(anyhow!("File not found: {:?}", path));
    }
    if path.extension().and_then(|s| s.to_str()) != Some("lst") {
        return Err(anyhow!("File must have .lst extension: {:?}", path));
    }

    // 2. Read source
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;

    // 3. Build the session
    let session = match cli.capacity {
        Some(capacity) => Session::with_capacity(capacity).context("Invalid --capacity")?,
        None => Session::new(),
    };
    let mut session = session.verbose(cli.verbose);

    // 4. Run and print outputs
    let report = session.run_script(&source, cli.keep_going)?;
    print_report(&report);

    if report.is_success() {
        Ok(())
    } else {
        Err(anyhow!("{} command(s) failed", report.failures.len()))
    }
}

fn print_report(report: &Report) {
    for output in &report.outputs {
        println!("{}", output);
    }
    for failure in &report.failures {
        eprintln!("error: {}", failure);
    }
}

fn run_all_demos() -> Result<()> {
    println!("--- Running Basic Demo ---");
    expect_outputs(BASIC_CODE, &["0 1 2", "3", "2 0 1 2"])?;

    println!("--- Running Remove Demo ---");
    expect_outputs(REMOVE_CODE, &["4", "9", "5", "true", "false", "false", "1"])?;

    println!("--- Running Growth Demo ---");
    expect_outputs(GROWTH_CODE, &["15", "22", "0 1 2 3 4 5 6 7 8 9 10 11 12 13 14"])?;

    println!("--- Running Sort Demo ---");
    expect_outputs(SORT_CODE, &["-6 -2 5 10", "a b c d"])?;

    println!("--- Running Not Comparable Demo ---");
    run_not_comparable()?;

    Ok(())
}

fn expect_outputs(code: &str, expected: &[&str]) -> Result<()> {
    let report = Session::new().run_script(code, false)?;
    println!("Outputs: {:?}", report.outputs);
    if report.outputs == expected {
        Ok(())
    } else {
        Err(anyhow!("expected {:?}, got {:?}", expected, report.outputs))
    }
}

fn run_not_comparable() -> Result<()> {
    let mut session = Session::new();
    match session.run_script(NOT_COMPARABLE_CODE, false) {
        Err(e) => println!("Sort rejected as expected: {}", e),
        Ok(_) => return Err(anyhow!("sorting records should fail")),
    }

    let report = Session::new().run_script(SINGLE_RECORD_CODE, false)?;
    println!("Single record sorted: {:?}", report.outputs);
    Ok(())
}

const BASIC_CODE: &str = r#"
add 0
add 1
add 2
print
size
insert 0 2
print
"#;

const REMOVE_CODE: &str = r#"
add 0
add 1
add 2
add 3
add 4
add 5
add 6
add 7
add 8
add 9
remove 4
size
get 4
new
add 20
add 10
remove_value 20
remove_value 20
remove_value null
size
"#;

const GROWTH_CODE: &str = r#"
add 0
add 1
add 2
add 3
add 4
add 5
add 6
add 7
add 8
add 9
capacity
add 10
add 11
add 12
add 13
add 14
capacity
print
"#;

const SORT_CODE: &str = r#"
add -6
add 10
add -2
add 5
sort
print
new
add "b"
add "a"
add "d"
add "c"
sort
print
"#;

const NOT_COMPARABLE_CODE: &str = r#"
add @Leha
add @Vasya
add @Bob
sort
"#;

const SINGLE_RECORD_CODE: &str = r#"
add @Leha
sort
print
"#;
