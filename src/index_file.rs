use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;

use crate::generator::data::IndexData;

/// Writes the whole index, replacing whatever was at `index_file_path`.
pub(crate) fn save_index(index_file_path: &Path, index: &IndexData) -> anyhow::Result<()> {
    if let Some(parent) = index_file_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let fd = File::create(index_file_path)
        .with_context(|| format!("while opening {index_file_path:?}"))?;
    let mut writer = BufWriter::new(fd);
    serde_json::to_writer_pretty(&mut writer, index)?;
    writer.flush()?;

    Ok(())
}
