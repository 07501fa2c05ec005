//! Tag styles and the extractor-name fallback.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::ThemeConfig;
use crate::error::{Error, Result};
use crate::render::classify::Classification;
use crate::render::style::{Color, Style};

/// Tag under which the deletion style is stored.
pub const DELETE_TAG: &str = "delete";

/// Tag shown for deletion notices.
pub const DELETING_LABEL: &str = "deleting";

/// Tag used for warnings.
pub const WARNING_TAG: &str = "WARNING";

/// Tag used for engine errors.
pub const ERROR_TAG: &str = "ERROR";

/// Built-in tag styles.
pub fn default_tag_styles() -> HashMap<String, Style> {
    [
        ("download", Style::color(Color::Standard(2))),
        ("youtube", Style::color(Color::Fixed(160))),
        ("info", Style::color(Color::Standard(6))),
        ("Merger", Style::color(Color::Standard(5))),
        (WARNING_TAG, Style::color(Color::Bright(1)).bold()),
        (ERROR_TAG, Style::color(Color::Standard(1)).bold()),
        (DELETE_TAG, Style::color(Color::Standard(3))),
        ("ExtractAudio", Style::color(Color::Fixed(129))),
    ]
    .into_iter()
    .map(|(tag, style)| (tag.to_string(), style))
    .collect()
}

/// Extractor identifiers known to the engine.
#[derive(Debug, Clone, Default)]
pub struct ExtractorNames {
    names: HashSet<String>,
}

impl ExtractorNames {
    /// Parse the output of `--list-extractors`: one name per line, possibly
    /// followed by an annotation such as `(CURRENTLY BROKEN)`.
    pub fn from_listing(listing: &str) -> Self {
        let names = listing
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExtractorNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Styles used by the renderer, built once at startup.
#[derive(Debug, Clone)]
pub struct Theme {
    tags: HashMap<String, Style>,
    extractor: Style,
    highlight: Style,
    extractors: ExtractorNames,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ExtractorNames::default())
    }
}

impl Theme {
    /// Default styles with the given extractor names.
    pub fn new(extractors: ExtractorNames) -> Self {
        Self {
            tags: default_tag_styles(),
            extractor: Style::plain().underline(),
            highlight: Style::color(Color::Standard(4)).bold(),
            extractors,
        }
    }

    /// Build a theme from config, layering its tag styles over the defaults.
    pub fn from_config(config: &ThemeConfig, extractors: ExtractorNames) -> Result<Self> {
        let mut theme = Self::new(extractors);
        theme.extractor = parse_style("theme.extractor", &config.extractor)?;
        theme.highlight = parse_style("theme.highlight", &config.highlight)?;
        theme.tags.extend(parse_tag_styles(&config.tags)?);
        Ok(theme)
    }

    pub fn highlight(&self) -> Style {
        self.highlight
    }

    /// Style for a tag: table entry, then extractor fallback, then plain.
    pub fn tag_style(&self, tag: &str) -> Style {
        if let Some(style) = self.tags.get(tag) {
            *style
        } else if self.extractors.contains(tag) {
            self.extractor
        } else {
            Style::plain()
        }
    }

    /// Resolve the style of a classified line's tag.
    pub fn resolve(&self, line: &Classification<'_>) -> Style {
        match line {
            Classification::Bracketed { tag, .. } => self.tag_style(tag),
            Classification::DeletionNotice { .. } => self
                .tags
                .get(DELETE_TAG)
                .copied()
                .unwrap_or(Style::color(Color::Standard(3))),
            Classification::Plain { .. } => Style::plain(),
        }
    }
}

fn parse_style(field: &str, value: &str) -> Result<Style> {
    value.parse::<Style>().map_err(|message| Error::ConfigValidation {
        field: field.to_string(),
        message,
    })
}

fn parse_tag_styles(tags: &BTreeMap<String, String>) -> Result<HashMap<String, Style>> {
    tags.iter()
        .map(|(tag, value)| Ok((tag.clone(), parse_style(&format!("theme.tags.{}", tag), value)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::new(["youtube", "vimeo", "generic"].into_iter().collect())
    }

    #[test]
    fn test_table_styles() {
        let theme = theme();
        assert_eq!(theme.tag_style("download"), Style::color(Color::Standard(2)));
        assert_eq!(
            theme.tag_style("WARNING"),
            Style::color(Color::Bright(1)).bold()
        );
        assert_eq!(theme.tag_style("ExtractAudio"), Style::color(Color::Fixed(129)));
    }

    #[test]
    fn test_table_wins_over_extractor() {
        // "youtube" is both in the table and a known extractor
        assert_eq!(theme().tag_style("youtube"), Style::color(Color::Fixed(160)));
    }

    #[test]
    fn test_extractor_fallback() {
        assert_eq!(theme().tag_style("vimeo"), Style::plain().underline());
    }

    #[test]
    fn test_unknown_tag_is_plain() {
        assert!(theme().tag_style("somethingelse").is_plain());
        // Lookup is case-sensitive
        assert!(theme().tag_style("Vimeo").is_plain());
        assert!(theme().tag_style("warning").is_plain());
    }

    #[test]
    fn test_resolve_by_category() {
        let theme = theme();
        assert_eq!(
            theme.resolve(&Classification::DeletionNotice { message: "Deleting x" }),
            Style::color(Color::Standard(3))
        );
        assert!(theme
            .resolve(&Classification::Plain { message: "[info] x" })
            .is_plain());
    }

    #[test]
    fn test_extractor_listing() {
        let names = ExtractorNames::from_listing("youtube\nvimeo\nSomeSite (CURRENTLY BROKEN)\n\n");
        assert_eq!(names.len(), 3);
        assert!(names.contains("SomeSite"));
        assert!(!names.contains("(CURRENTLY"));
    }

    #[test]
    fn test_from_config_overrides() {
        let mut config = ThemeConfig::default();
        config.tags.insert("info".to_string(), "bold magenta".to_string());
        config.tags.insert("Fixup".to_string(), "blue".to_string());
        config.extractor = "italic".to_string();
        assert!(Theme::from_config(&config, ExtractorNames::default()).is_err());

        config.extractor = "underline cyan".to_string();
        let theme = Theme::from_config(&config, ExtractorNames::default()).unwrap();
        assert_eq!(theme.tag_style("info"), Style::color(Color::Standard(5)).bold());
        assert_eq!(theme.tag_style("Fixup"), Style::color(Color::Standard(4)));
        assert_eq!(theme.tag_style("download"), Style::color(Color::Standard(2)));
    }
}
