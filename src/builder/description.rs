/// One piece of a description: a single line, or a block of lines that is
/// flattened by joining with `\n`.
///
/// [`EmbedBuilder::set_description`](crate::EmbedBuilder::set_description)
/// accepts any mixture of pieces and joins them in argument order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionPart {
    Line(String),
    Lines(Vec<String>),
}

impl DescriptionPart {
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Line(line) => line,
            Self::Lines(lines) => lines.join("\n"),
        }
    }
}

impl From<&str> for DescriptionPart {
    fn from(line: &str) -> Self {
        Self::Line(line.to_owned())
    }
}

impl From<String> for DescriptionPart {
    fn from(line: String) -> Self {
        Self::Line(line)
    }
}

impl From<Vec<String>> for DescriptionPart {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<Vec<&str>> for DescriptionPart {
    fn from(lines: Vec<&str>) -> Self {
        Self::Lines(lines.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for DescriptionPart {
    fn from(lines: &[&str]) -> Self {
        Self::Lines(lines.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for DescriptionPart {
    fn from(lines: [&str; N]) -> Self {
        Self::Lines(lines.iter().map(|s| (*s).to_owned()).collect())
    }
}
