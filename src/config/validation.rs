//! Configuration validation logic.

use chrono::format::{Item, StrftimeItems};

use crate::config::loader::{Config, ThemeConfig};
use crate::error::{Error, Result};
use crate::render::{Rgb, Style};

/// Smallest usable level width: one tag character plus brackets.
const MIN_LEVEL_WIDTH: usize = 3;

/// Largest accepted level width.
const MAX_LEVEL_WIDTH: usize = 64;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_time_format(&config.output.time_format)?;
    validate_time_color(&config.output.time_color)?;
    validate_level_width(config.output.level_width)?;
    validate_binary(&config.engine.binary.to_string_lossy())?;
    validate_theme(&config.theme)?;

    Ok(())
}

/// Validate the strftime pattern of the time column.
pub fn validate_time_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::ConfigValidation {
            field: "output.time_format".to_string(),
            message: format!("'{}' is not a valid strftime pattern", format),
        });
    }

    Ok(())
}

/// Validate the "r;g;b" time color.
pub fn validate_time_color(color: &str) -> Result<()> {
    color
        .parse::<Rgb>()
        .map(|_| ())
        .map_err(|message| Error::ConfigValidation {
            field: "output.time_color".to_string(),
            message,
        })
}

/// Validate the tag column width.
pub fn validate_level_width(width: usize) -> Result<()> {
    if !(MIN_LEVEL_WIDTH..=MAX_LEVEL_WIDTH).contains(&width) {
        return Err(Error::ConfigValidation {
            field: "output.level_width".to_string(),
            message: format!(
                "Level width must be between {} and {} (got {})",
                MIN_LEVEL_WIDTH, MAX_LEVEL_WIDTH, width
            ),
        });
    }

    Ok(())
}

/// Validate the engine executable name.
pub fn validate_binary(binary: &str) -> Result<()> {
    if binary.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "engine.binary".to_string(),
            message: "Engine executable must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate every style string in the theme.
pub fn validate_theme(theme: &ThemeConfig) -> Result<()> {
    validate_style("theme.extractor", &theme.extractor)?;
    validate_style("theme.highlight", &theme.highlight)?;

    for (tag, style) in &theme.tags {
        if tag.is_empty() || !tag.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(Error::ConfigValidation {
                field: "theme.tags".to_string(),
                message: format!("'{}' can never appear as a tag", tag),
            });
        }
        validate_style(&format!("theme.tags.{}", tag), style)?;
    }

    Ok(())
}

fn validate_style(field: &str, value: &str) -> Result<()> {
    value
        .parse::<Style>()
        .map(|_| ())
        .map_err(|message| Error::ConfigValidation {
            field: field.to_string(),
            message,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_time_format() {
        assert!(validate_time_format("%X").is_ok());
        assert!(validate_time_format("[%H:%M:%S]").is_ok());
        assert!(validate_time_format("%Q").is_err());
    }

    #[test]
    fn test_time_color() {
        assert!(validate_time_color("0;0;0").is_ok());
        assert!(validate_time_color("blue").is_err());
    }

    #[test]
    fn test_level_width_bounds() {
        assert!(validate_level_width(3).is_ok());
        assert!(validate_level_width(11).is_ok());
        assert!(validate_level_width(2).is_err());
        assert!(validate_level_width(65).is_err());
    }

    #[test]
    fn test_empty_binary() {
        assert!(validate_binary("").is_err());
        assert!(validate_binary("yt-dlp").is_ok());
    }

    #[test]
    fn test_theme_styles() {
        let mut theme = ThemeConfig::default();
        theme.tags.insert("Merger".to_string(), "bold color(201)".to_string());
        assert!(validate_theme(&theme).is_ok());

        theme.tags.insert("info".to_string(), "glowing".to_string());
        let err = validate_theme(&theme).unwrap_err();
        assert!(err.to_string().contains("theme.tags.info"));
    }

    #[test]
    fn test_theme_rejects_impossible_tags() {
        let mut theme = ThemeConfig::default();
        theme.tags.insert("youtube:tab".to_string(), "red".to_string());
        assert!(validate_theme(&theme).is_err());
    }
}
