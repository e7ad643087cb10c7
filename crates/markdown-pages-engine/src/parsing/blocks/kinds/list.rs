/// `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::MARKER))
    }

    /// Item texts with the marker removed, in source order.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .lines()
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
            .collect()
    }
}

/// `1. item` lists. Numbers must run 1, 2, 3, ... without gaps.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Length of the `{number}. ` marker at the start of `line`.
    fn marker_len(line: &str, number: usize) -> Option<usize> {
        let marker = format!("{number}{}", Self::SEPARATOR);
        line.starts_with(&marker).then_some(marker.len())
    }

    pub fn matches(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| Self::marker_len(line, i + 1).is_some())
    }

    /// Item texts with exactly the detected marker removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .lines()
            .enumerate()
            .map(|(i, line)| match Self::marker_len(line, i + 1) {
                Some(len) => &line[len..],
                None => line,
            })
            .collect()
    }
}
