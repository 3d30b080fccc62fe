//! File dialogs: picking a drawing to parse and saving delivered output.
//!
//! Dialogs run on the async executor so the UI thread never blocks. A
//! dismissed dialog is a normal outcome, not an error, and each pick is
//! consumed whole so the same file can be selected again on a later attempt.

use rfd::AsyncFileDialog;

use steeldraw_core::delivery::DeliveredFile;

/// A drawing the user selected for parsing.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Let the user choose a `.dxf` drawing. `None` when the dialog is dismissed.
pub async fn pick_drawing() -> Option<PickedFile> {
    let handle = AsyncFileDialog::new()
        .set_title("Select a DXF drawing")
        .add_filter("DXF drawing", &["dxf"])
        .pick_file()
        .await?;
    let name = handle.file_name();
    let bytes = handle.read().await;
    Some(PickedFile { name, bytes })
}

/// Prompt for a destination and write the delivered bytes.
///
/// Returns `Ok(None)` when the user dismisses the dialog.
pub async fn save(file: DeliveredFile) -> Result<Option<String>, String> {
    let ext = file.extension();
    let label = if ext == "zip" {
        "ZIP archive"
    } else {
        "DXF drawing"
    };

    let picked = AsyncFileDialog::new()
        .set_title("Save generated drawing")
        .set_file_name(&file.file_name)
        .add_filter(label, &[ext])
        .save_file()
        .await;
    let Some(handle) = picked else {
        return Ok(None);
    };

    let mut path = handle.path().to_path_buf();
    if path.extension().and_then(|s| s.to_str()) != Some(ext) {
        path.set_extension(ext);
    }

    std::fs::write(&path, &file.bytes).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(Some(path.display().to_string()))
}
