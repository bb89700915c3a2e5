use std::process::Command;
use std::path::Path;
use std::collections::HashMap;
use anyhow::{anyhow, Result};

const FIXED_INVESTOR: &str = "Stelck Boeger 1998 Revocable Trust (i2)";

fn run_cli(dataset: &str, mode: &str) -> Result<String> {
    let binary_path = env!("CARGO_BIN_EXE_quarterly-returns");
    let dataset_path = Path::new("samples").join(dataset);

    let output = Command::new(binary_path)
        .arg(dataset_path)
        .arg(mode)
        .output()?;

    assert!(output.status.success());

    Ok(String::from_utf8(output.stdout)?)
}

#[test]
fn test_cli_correctly_processes_sample() -> Result<()> {
    let stdout = run_cli("sample.json", "rows")?;
    let mut lines = stdout.lines();

    let header = lines.next().ok_or_else(|| anyhow!("header missing from output"))?;
    assert!(header.starts_with("investor,period,label,beginning_gaap,beginning_nav"));

    let mut investors = Vec::new();

    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), 25);

        if investors.last() != Some(&fields[0]) {
            investors.push(fields[0]);
        }

        let _: u32 = fields[1].parse()?;
        let _: f64 = fields[3].parse()?;
        let _: f64 = fields[15].parse()?;
        let _: f64 = fields[17].parse()?;
        let _: usize = fields[24].parse()?;
        assert!(fields[21] == "Reinvested" || fields[21] == "Distributed");
    }

    assert_eq!(investors, vec!["Brian Schmidt", FIXED_INVESTOR]);

    Ok(())
}

#[test]
fn test_cli_outputs_correct_quarterly_rows() -> Result<()> {
    let stdout = run_cli("fixed.json", "rows")?;
    let mut results = HashMap::new();

    for line in stdout.lines().skip(1) {
        let fields: Vec<String> = line.split(',').map(str::to_string).collect();
        results.insert(fields[2].clone(), fields);
    }

    assert_eq!(results.len(), 4);

    let q2 = results.get("2015 Q2").ok_or_else(|| anyhow!("2015 Q2 missing from output"))?;

    assert_eq!(q2[0], FIXED_INVESTOR);
    assert_eq!(q2[1], "1");
    assert_eq!(q2[14], "3616.44");
    assert_eq!(q2[15], "500000.00");
    assert_eq!(q2[17], "0");

    let q3 = results.get("2015 Q3").ok_or_else(|| anyhow!("2015 Q3 missing from output"))?;

    assert_eq!(q3[15], "510000.00");
    assert_eq!(q3[16], "515000.00");
    assert_eq!(q3[17], "0.02");
    assert_eq!(q3[18], "0.03");
    assert_eq!(q3[19], "0.08");
    assert_eq!(q3[21], "Reinvested");

    let q4 = results.get("2015 Q4").ok_or_else(|| anyhow!("2015 Q4 missing from output"))?;

    assert_eq!(q4[8], "12300.00");
    assert_eq!(q4[17], "0.024118");
    assert_eq!(q4[21], "Distributed");

    let q1 = results.get("2016 Q1").ok_or_else(|| anyhow!("2016 Q1 missing from output"))?;

    assert_eq!(q1[3], "510000.00");
    assert_eq!(q1[4], "515000.00");
    assert_eq!(q1[15], "610000.00");
    assert_eq!(q1[16], "615000.00");
    assert_eq!(q1[24], "1");

    Ok(())
}

#[test]
fn test_cli_outputs_investor_summary() -> Result<()> {
    let stdout = run_cli("fixed.json", "summary")?;
    let mut results = HashMap::new();

    for line in stdout.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], FIXED_INVESTOR);

        results.insert(fields[1].to_string(), fields[3].to_string());
    }

    let lookup = |label: &str| results.get(label).cloned().ok_or_else(|| anyhow!("{label} missing from output"));

    assert_eq!(lookup("greeting")?, "Boeger");
    assert_eq!(lookup("current_quarter")?, "2016 Q1");
    assert_eq!(lookup("Current GAAP Balance")?, "610000.00");
    assert_eq!(lookup("Ending NAV Balance")?, "615000.00");
    assert_eq!(lookup("Lifetime Realized Return")?, "28468.15");
    assert_eq!(lookup("Lifetime Total Return")?, "33468.15");

    Ok(())
}
