//! Report assembly.

use crate::table::Table;
use std::fmt;
use std::str::FromStr;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Fixed-width text for terminals.
    #[default]
    Text,

    /// Markdown document.
    Markdown,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// Body of a report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Free text, rendered as is.
    Text(String),
    /// One item per line; bullets in Markdown.
    Lines(Vec<String>),
    /// Tabular data.
    Table(Table),
}

/// A titled block of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading.
    pub title: String,
    /// Content.
    pub body: SectionBody,
}

impl Section {
    /// Section holding free text.
    pub fn text(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Text(body.into()),
        }
    }

    /// Section holding one item per line.
    pub fn lines(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Lines(lines),
        }
    }

    /// Section holding a table.
    pub fn table(title: impl Into<String>, table: Table) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Table(table),
        }
    }

    /// Render heading and body.
    pub fn render(&self, format: ReportFormat) -> String {
        let mut output = String::new();

        match format {
            ReportFormat::Text => {
                output.push_str(&format!("\n{}:\n", self.title));
                output.push_str(&"-".repeat(self.title.chars().count() + 1));
                output.push('\n');
            }
            ReportFormat::Markdown => {
                output.push_str(&format!("\n## {}\n\n", self.title));
            }
        }

        match (&self.body, format) {
            (SectionBody::Text(text), _) => {
                output.push_str(text.trim_end());
                output.push('\n');
            }
            (SectionBody::Lines(lines), ReportFormat::Text) => {
                for line in lines {
                    output.push_str(line);
                    output.push('\n');
                }
            }
            (SectionBody::Lines(lines), ReportFormat::Markdown) => {
                for line in lines {
                    output.push_str(&format!("- {line}\n"));
                }
            }
            (SectionBody::Table(table), format) => output.push_str(&table.render(format)),
        }

        output
    }
}

/// Render a titled sequence of sections.
pub fn render_report(title: &str, sections: &[Section], format: ReportFormat) -> String {
    let mut output = match format {
        ReportFormat::Text => format!("{title}\n{}\n", "=".repeat(title.chars().count())),
        ReportFormat::Markdown => format!("# {title}\n"),
    };

    for section in sections {
        output.push_str(&section.render(format));
    }

    output
}
