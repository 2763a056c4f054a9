use serde::{Deserialize, Serialize};

/// The holder's self-assessed understanding of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeStatus {
    /// Clear thesis, regularly monitored
    Strong,
    /// Held without a well-understood thesis
    Weak,
    /// Position being moved or restructured (e.g. staked wrapper → base asset)
    Transitioning,
}

impl KnowledgeStatus {
    /// Heading shown in front of the holding's thesis.
    pub fn thesis_label(&self) -> &'static str {
        match self {
            KnowledgeStatus::Strong => "Your Thesis:",
            _ => "Knowledge Gap:",
        }
    }

    /// The two review notes attached to a holding card.
    pub fn review_notes(&self) -> [&'static str; 2] {
        match self {
            KnowledgeStatus::Strong => [
                "Strong conviction maintained",
                "Regular monitoring in place",
            ],
            _ => [
                "Need to research fundamentals",
                "Understand value proposition",
            ],
        }
    }
}

impl std::fmt::Display for KnowledgeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KnowledgeStatus::Strong => write!(f, "strong"),
            KnowledgeStatus::Weak => write!(f, "weak"),
            KnowledgeStatus::Transitioning => write!(f, "transitioning"),
        }
    }
}

/// A single asset position in the portfolio.
///
/// Holdings are fixture data and never change after load. Only `value()` is
/// computed; P&L and allocation are authored figures and are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker as displayed (e.g. "BTC", "cbETH"), case preserved
    pub symbol: String,

    /// Human-readable name (e.g. "Coinbase ETH (Staked)")
    pub name: String,

    /// Quantity held
    pub amount: f64,

    /// Current unit price in USD
    pub price: f64,

    /// Unrealized profit/loss in USD
    pub pnl: f64,

    /// Unrealized profit/loss in percent
    pub pnl_percent: f64,

    pub knowledge: KnowledgeStatus,

    /// Share of the total portfolio in percent, as authored
    pub allocation: f64,

    /// Why the position is held
    pub thesis: String,

    /// Display color, hex (e.g. "#f7931a")
    pub color: String,
}

impl Holding {
    /// Current value in USD: `amount × price`.
    pub fn value(&self) -> f64 {
        self.amount * self.price
    }

    /// Value at cost, i.e. current value minus the unrealized P&L.
    pub fn cost_basis(&self) -> f64 {
        self.value() - self.pnl
    }

    pub fn is_profitable(&self) -> bool {
        self.pnl > 0.0
    }

    /// First character of the symbol, used as the avatar glyph.
    pub fn initial(&self) -> char {
        self.symbol.chars().next().unwrap_or('?')
    }
}
