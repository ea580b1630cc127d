// src/core/file_system.rs
use crate::commands::common::Command;

use std::error::Error;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use log::debug;

pub enum Script {
    Lines(BufReader<File>),
    Json(Vec<Command>),
}

pub struct FileSystem;

impl FileSystem {
    pub fn is_json_script(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
    }

    pub fn open_script(path: &Path) -> Result<BufReader<File>, std::io::Error> {
        let file = File::open(path)?;
        Ok(BufReader::new(file))
    }

    pub fn load_json_script(path: &Path) -> Result<Vec<Command>, Box<dyn Error>> {
        let script_content = fs::read_to_string(path)?;
        let script: Vec<Command> = serde_json::from_str(&script_content)?;
        debug!("Loaded {} commands from {}", script.len(), path.display());
        Ok(script)
    }

    /// Opens `path` as a JSON command list or a line-oriented command file.
    pub fn load_script(path: &Path) -> Result<Script, Box<dyn Error>> {
        if Self::is_json_script(path) {
            Ok(Script::Json(Self::load_json_script(path)?))
        } else {
            Ok(Script::Lines(Self::open_script(path)?))
        }
    }
}
