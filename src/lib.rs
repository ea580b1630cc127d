use crate::app_config::AppConfig;
use crate::commands::cli::{run_commands, run_lines};
use crate::commands::common::ParkingLotExecutor;
use crate::core::billing::Tariff;
use crate::core::file_system::{FileSystem, Script};
use crate::core::parking_lot::ParkingLot;
use dotenvy::dotenv;
use log::info;
use std::error::Error;
use std::io::Write;
use std::path::Path;

pub mod core;
pub mod commands;
pub mod app_config;

pub fn initialize_environment() {
    // A missing .env is fine; variables may come from the shell.
    dotenv().ok();
    pretty_env_logger::init();
}

pub fn initialize_system(config: &AppConfig) -> ParkingLotExecutor {
    let parking_lot = ParkingLot::new(Tariff::from_config(config));
    ParkingLotExecutor::new(parking_lot, config.currency_symbol.clone())
}

/// Opens the command file at `path` and runs it against a fresh lot.
///
/// Failing to open or decode the file is an error; everything after that is
/// reported on `output`.
pub fn run_script_file<W: Write>(
    path: &Path,
    config: &AppConfig,
    output: &mut W
) -> Result<ParkingLotExecutor, Box<dyn Error>> {
    let script = FileSystem::load_script(path)?;
    info!("Running commands from {}", path.display());
    run_script(script, config, output)
}

/// Runs an already opened script. Only write failures on `output` are errors.
pub fn run_script<W: Write>(
    script: Script,
    config: &AppConfig,
    output: &mut W
) -> Result<ParkingLotExecutor, Box<dyn Error>> {
    let mut executor = initialize_system(config);

    match script {
        Script::Lines(reader) => run_lines(&mut executor, reader, output)?,
        Script::Json(script_commands) => run_commands(&mut executor, script_commands, output)?,
    }
    output.flush()?;

    Ok(executor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(path: &Path, config: &AppConfig) -> String {
        let mut output = Vec::new();
        run_script_file(path, config, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_run_line_script_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "create_parking_lot 2\npark KA-01\npark KA-02\npark KA-03\nleave KA-01 4\nstatus\n").unwrap();

        let output = run(&path, &AppConfig::default());
        assert_eq!(
            output,
            "Created a parking lot with 2 slots\n\
             Allocated slot number: 1\n\
             Allocated slot number: 2\n\
             Sorry, parking lot is full\n\
             Registration number KA-01 with Slot Number 1 is free with Charge $30\n\
             Slot No. Registration No.\n\
             2 KA-02\n"
        );
    }

    #[test]
    fn test_run_json_script_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.json");
        let json = r#"[
            {"type": "CreateParkingLot", "params": {"capacity": 1}},
            {"type": "Park", "params": {"registration_number": "KA-01"}},
            {"type": "Leave", "params": {"registration_number": "KA-01", "hours": 5}},
            {"type": "Status"}
        ]"#;
        fs::write(&path, json).unwrap();

        let output = run(&path, &AppConfig::default());
        assert_eq!(
            output,
            "Created a parking lot with 1 slots\n\
             Allocated slot number: 1\n\
             Registration number KA-01 with Slot Number 1 is free with Charge $40\n\
             Parking lot is empty.\n"
        );
    }

    #[test]
    fn test_run_uses_configured_tariff() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "create_parking_lot 1\npark KA-01\nleave KA-01 3\n").unwrap();

        let config = AppConfig {
            flat_rate_hours: 1,
            flat_charge: 20,
            hourly_charge: 5,
            currency_symbol: "Rs.".to_string(),
        };
        let output = run(&path, &config);
        assert!(output.ends_with("Registration number KA-01 with Slot Number 1 is free with Charge Rs.30\n"));
    }

    // Rejects every write.
    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "output closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_script_reports_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "create_parking_lot 1\n").unwrap();

        let script = FileSystem::load_script(&path).unwrap();
        let result = run_script(script, &AppConfig::default(), &mut ClosedOutput);
        assert_eq!(result.err().unwrap().to_string(), "output closed");
    }

    #[test]
    fn test_malformed_json_fails_before_running() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.json");
        fs::write(&path, "[{\"type\": \"Park\"").unwrap();

        let mut output = Vec::new();
        assert!(run_script_file(&path, &AppConfig::default(), &mut output).is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut output = Vec::new();
        let result = run_script_file(&temp_dir.path().join("nope.txt"), &AppConfig::default(), &mut output);
        assert!(result.is_err());
        assert!(output.is_empty());
    }
}
