//! Built-in portfolio data. Everything here is authored, not fetched.

use crate::models::checklist::{ChecklistItem, ChecklistSection};
use crate::models::holding::{Holding, KnowledgeStatus};
use crate::models::series::SectorShare;

/// Shown when the forecast series is empty.
pub const DEFAULT_LATEST_FORECAST: f64 = 2456.78;

/// Confidence figure shown next to the latest forecast, percent.
pub const MODEL_CONFIDENCE: f64 = 87.3;

#[allow(clippy::too_many_arguments)]
fn holding(
    symbol: &str,
    name: &str,
    amount: f64,
    price: f64,
    pnl: f64,
    pnl_percent: f64,
    knowledge: KnowledgeStatus,
    allocation: f64,
    thesis: &str,
    color: &str,
) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        name: name.to_string(),
        amount,
        price,
        pnl,
        pnl_percent,
        knowledge,
        allocation,
        thesis: thesis.to_string(),
        color: color.to_string(),
    }
}

/// The four positions of the learning portfolio.
pub fn holdings() -> Vec<Holding> {
    vec![
        holding(
            "BTC",
            "Bitcoin",
            0.004_999_25,
            118_638.31,
            483.04,
            439.15,
            KnowledgeStatus::Strong,
            58.8,
            "Digital Gold / Store of Value",
            "#f7931a",
        ),
        holding(
            "ETH",
            "Ethereum",
            0.041_247_51,
            3_771.18,
            18.18,
            13.24,
            KnowledgeStatus::Weak,
            15.5,
            "Smart Contract Platform",
            "#627eea",
        ),
        holding(
            "cbETH",
            "Coinbase ETH (Staked)",
            0.031_936_51,
            4_160.90,
            -5.01,
            -3.63,
            KnowledgeStatus::Transitioning,
            13.2,
            "Staking Rewards",
            "#1652f0",
        ),
        holding(
            "XRP",
            "XRP",
            35.858_222,
            3.52,
            29.88,
            31.01,
            KnowledgeStatus::Weak,
            12.5,
            "Cross-border Payments",
            "#23292f",
        ),
    ]
}

/// Sector breakdown for the bar chart. Fixed, never randomized.
pub fn sector_shares() -> Vec<SectorShare> {
    vec![
        SectorShare::new("DeFi", 35.0, "#00d4ff"),
        SectorShare::new("NFTs", 25.0, "#ff6b6b"),
        SectorShare::new("Gaming", 15.0, "#4ecdc4"),
        SectorShare::new("DEX", 20.0, "#45b7d1"),
        SectorShare::new("Other", 5.0, "#96ceb4"),
    ]
}

fn section(
    horizon: Option<&str>,
    title: &str,
    prompt: Option<&str>,
    items: &[(&str, &str)],
) -> ChecklistSection {
    ChecklistSection {
        horizon: horizon.map(str::to_string),
        title: title.to_string(),
        prompt: prompt.map(str::to_string),
        items: items
            .iter()
            .map(|(id, text)| ChecklistItem {
                id: (*id).to_string(),
                text: (*text).to_string(),
            })
            .collect(),
    }
}

/// The learning plan shown on the Learning tab.
pub fn learning_plan() -> Vec<ChecklistSection> {
    vec![
        section(
            Some("IMMEDIATE (2 weeks)"),
            "Operational Actions",
            None,
            &[
                ("cbeth-convert", "Execute cbETH → ETH conversion when optimal"),
                ("price-alerts", "Set up price alerts for major moves (±15%)"),
                ("threshold", "Determine your \"meaningful money\" threshold"),
                ("news-sources", "Bookmark key news sources for crypto"),
            ],
        ),
        section(
            Some("MEDIUM-TERM (2 months)"),
            "Knowledge Building",
            None,
            &[
                ("eth-basics", "Learn Ethereum basics: What problem does it solve?"),
                ("xrp-partnerships", "Understand XRP's banking partnerships model"),
                ("protocol-upgrades", "Research major protocol upgrade impacts"),
                ("market-cycles", "Study crypto market cycles and patterns"),
                ("staking-tradeoffs", "Learn about staking vs holding trade-offs"),
            ],
        ),
        section(
            Some("ONGOING"),
            "Monitoring System",
            None,
            &[
                ("weekly-review", "Weekly 10-minute portfolio review"),
                ("monthly-thesis", "Monthly reassessment of thesis for each holding"),
                ("news-tracking", "Track major news that could affect investments"),
                ("regulatory", "Review regulatory developments"),
                ("macro-factors", "Monitor macro factors (interest rates, inflation)"),
            ],
        ),
        section(
            None,
            "Knowledge Validation",
            Some("Can you answer these about each holding?"),
            &[
                ("eth-explain", "ETH: Explain in 2 sentences why you own it"),
                ("xrp-partnerships-know", "XRP: Name 3 major partnerships or use cases"),
                ("sell-triggers", "All holdings: What news would make you sell immediately?"),
                ("technical-levels", "All holdings: What technical levels matter?"),
            ],
        ),
    ]
}
