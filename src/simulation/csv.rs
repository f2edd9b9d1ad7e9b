// src/simulation/csv.rs

use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::simulation::search_cycle::{EpisodeOutcome, EpisodeResult};

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output(path: impl AsRef<Path>) -> Result<Box<dyn Write>, Box<dyn Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(Box::new(writer))
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(
        b"episode,direction_x,direction_y,direction_z,result,target_id,x,y,z,steps,max_steps\n",
    )
}

/// CSV行の作成
pub fn create_csv_row(outcome: &EpisodeOutcome) -> String {
    let target_id = match &outcome.result {
        EpisodeResult::Hit { target_id, .. } => target_id.as_str(),
        _ => "",
    };
    let position = outcome.result.position();

    format!(
        "{},{},{},{},{},{},{},{},{},{},{}\n",
        outcome.episode,
        outcome.direction.x,
        outcome.direction.y,
        outcome.direction.z,
        outcome.result.label(),
        target_id,
        position.x,
        position.y,
        position.z,
        outcome.steps,
        outcome.max_steps
    )
}
