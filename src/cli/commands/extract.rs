//! Extract command implementation
//!
//! Runs the identifier extractor over text from an argument, a file or
//! stdin and prints the identifiers one per line, ready for piping back
//! into `partex export`.

use crate::core::extract::IdentifierExtractor;
use crate::domain::InputError;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text to scan; read from stdin when omitted
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl ExtractArgs {
    /// Execute the extract command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let text = match self.gather_text() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let ids = IdentifierExtractor::new().extract(&text);
        if ids.is_empty() {
            eprintln!("No component identifiers found.");
            return Ok(0);
        }

        for id in &ids {
            println!("{id}");
        }
        tracing::debug!(count = ids.len(), "Extraction finished");
        Ok(0)
    }

    fn gather_text(&self) -> Result<String, InputError> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .map_err(|e| InputError::ClipboardUnavailable(e.to_string()));
        }
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| InputError::ClipboardUnavailable(e.to_string()))?;
        Ok(text)
    }
}
