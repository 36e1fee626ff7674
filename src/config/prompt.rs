use crate::utils::error::Result;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Prints a label and reads one trimmed line from stdin.
pub async fn prompt(label: &str) -> Result<String> {
    let mut stdout = io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(io::stdin()).read_line(&mut line).await?;
    Ok(line.trim().to_string())
}

/// Uses the CLI-supplied value when present, otherwise prompts.
pub async fn prompt_or(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v.trim().to_string()),
        None => prompt(label).await,
    }
}

/// Like [`prompt_or`], falling back to a default when the answer is blank.
pub async fn prompt_or_default(
    value: Option<String>,
    label: &str,
    default: &str,
) -> Result<String> {
    let answer = match value {
        Some(v) => v.trim().to_string(),
        None => prompt(&format!("{} [{}]: ", label, default)).await?,
    };

    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}
