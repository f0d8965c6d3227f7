//! Results output module

use crate::analysis::MetricsResult;
use crate::error::Result;
use std::fs::File;
use std::io::{self, Write};

/// Serialize a metrics result as JSON
pub fn to_json(result: &MetricsResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    
    Ok(json)
}

/// Save a metrics result to `output`, or to stdout when `output` is `-`
pub fn save_results(result: &MetricsResult, output: &str, pretty: bool) -> Result<()> {
    let json = to_json(result, pretty)?;
    
    if output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", json)?;
        handle.flush()?;
    } else {
        log::info!("Saving metrics to {}", output);
        let mut file = File::create(output)?;
        writeln!(file, "{}", json)?;
    }
    
    Ok(())
}
