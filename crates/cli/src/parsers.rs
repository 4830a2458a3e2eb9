use concentric_engine::document::LineSpan;
use std::str::FromStr;

/// A 1-based inclusive line range such as `3:12`, `3-12` or `7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRangeArg {
    pub start: usize,
    pub end: usize,
}

impl LineRangeArg {
    /// Zero-based span for the engine.
    #[must_use]
    pub fn to_span(self) -> LineSpan {
        LineSpan::new(self.start - 1, self.end - 1)
    }
}

impl FromStr for LineRangeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (start, end) = s
            .split_once(':')
            .or_else(|| s.split_once('-'))
            .unwrap_or((s, s));
        let start = parse_line_number(start)?;
        let end = parse_line_number(end)?;
        if start > end {
            return Err(format!("range start {start} is after end {end}"));
        }
        Ok(Self { start, end })
    }
}

fn parse_line_number(s: &str) -> Result<usize, String> {
    let value = s
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid line number '{s}': {err}"))?;
    if value < 1 {
        return Err("line numbers start at 1".to_string());
    }
    Ok(value)
}
