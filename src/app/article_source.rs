use std::fs;
use std::path::Path;

use super::error::{AppError, Result};

/// Built-in article shown when no file is given on the command line.
const SAMPLE_ARTICLE: &str = include_str!("../../assets/sample_article.txt");

/// Load the article text to display. An explicit path must exist and be
/// non-empty; without one the embedded sample is used. The params panel
/// itself never touches this, it only styles whatever text is loaded.
pub fn load_article(path: Option<&str>) -> Result<String> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(Path::new(p))?;
            if text.trim().is_empty() {
                return Err(AppError::Article(format!("{p} is empty")));
            }
            Ok(text)
        }
        None => Ok(SAMPLE_ARTICLE.to_string()),
    }
}
