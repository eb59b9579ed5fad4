use dialoguer::{Input, theme::ColorfulTheme};

use qrgen::core::url::DEFAULT_URL;

use super::errors::AppError;

/// Ask for a URL on the terminal, offering the fixed default.
///
/// Accepting the default (empty input) returns [`DEFAULT_URL`]; anything
/// typed is returned raw for the caller to normalize.
pub fn prompt_for_url() -> Result<String, AppError> {
    let theme = ColorfulTheme::default();

    let input: String = Input::with_theme(&theme)
        .with_prompt("URL to encode")
        .default(DEFAULT_URL.to_string())
        .interact_text()?;

    Ok(input)
}
