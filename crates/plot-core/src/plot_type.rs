//! Plot style (line / candlestick / OHLC).

/// Chart style requested from the plotting backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlotType {
    #[default]
    Line,
    Candlestick,
    Ohlc,
}

impl PlotType {
    /// Wire representation, exactly as the backend expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            PlotType::Line => "line",
            PlotType::Candlestick => "candlestick",
            PlotType::Ohlc => "ohlc",
        }
    }

    /// Try to parse from the wire representation (case-sensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "line" => Some(PlotType::Line),
            "candlestick" => Some(PlotType::Candlestick),
            "ohlc" => Some(PlotType::Ohlc),
            _ => None,
        }
    }
}
