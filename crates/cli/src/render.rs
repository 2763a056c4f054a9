//! Plain-text rendition of the dashboard. Layout only; every number comes
//! from the core.

use std::fmt::Write;

use eth_dashboard_core::models::settings::DashboardVariant;
use eth_dashboard_core::models::state::Tab;
use eth_dashboard_core::Dashboard;

fn money(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${:.2}", value.abs())
}

fn signed_money(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", money(value))
    } else {
        money(value)
    }
}

pub fn clock_line(dashboard: &Dashboard) -> String {
    format!(
        "● Last updated at {}",
        dashboard.current_time().format("%H:%M:%S")
    )
}

fn header(out: &mut String, dashboard: &Dashboard) {
    let summary = dashboard.summary();
    let fund = dashboard.emergency_fund();
    let _ = writeln!(out, "{}", money(summary.total_value));
    let _ = writeln!(out, "🎓 Learning Portfolio Mode");
    let _ = writeln!(
        out,
        "{} Total Return ({:.1}%)",
        signed_money(summary.total_pnl),
        summary.total_return_pct
    );
    let _ = writeln!(
        out,
        "Emergency Fund Threshold: {}",
        money(fund.threshold)
    );
    let _ = writeln!(
        out,
        "Current: {} of threshold | Status: {}",
        fund.display, fund.status
    );
}

fn tabs(out: &mut String, dashboard: &Dashboard) {
    let line: Vec<String> = dashboard
        .config()
        .tabs
        .iter()
        .map(|tab| {
            if *tab == dashboard.active_tab() {
                format!("[{}]", tab.title())
            } else {
                tab.title().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", line.join(" | "));
}

fn forecasting(out: &mut String, dashboard: &Dashboard) {
    let _ = writeln!(out, "Real-Time ETH Price (USD)");
    for point in dashboard.price_history() {
        let _ = writeln!(out, "  {}  {:>9.2}  vol {:>10.0}", point.label, point.price, point.volume);
    }
    let _ = writeln!(out, "ETH Gas Fees (Gwei)");
    for point in dashboard.gas_history() {
        let _ = writeln!(out, "  {}  {:>6.2}", point.label, point.gas_price);
    }
    let _ = writeln!(out, "ETH Market Share by Sector");
    for share in dashboard.sector_shares() {
        let _ = writeln!(out, "  {:<8} {:>3.0}", share.name, share.value);
    }
    let _ = writeln!(out, "Predicted vs Actual ETH Prices");
    for point in dashboard.forecast() {
        let actual = point
            .actual
            .map(|a| format!("{a:>9.2}"))
            .unwrap_or_else(|| format!("{:>9}", "-"));
        let _ = writeln!(out, "  {}  actual {}  predicted {:>9.2}", point.label, actual, point.predicted);
    }
    let forecast = dashboard.forecast_summary();
    let _ = writeln!(
        out,
        "Latest Forecast: {} ({}, model confidence {:.1}%)",
        money(forecast.latest),
        forecast.caption(),
        forecast.confidence
    );
}

fn holdings(out: &mut String, dashboard: &Dashboard) {
    for holding in dashboard.holdings() {
        let _ = writeln!(
            out,
            "{} ({}) [{}]",
            holding.name,
            holding.symbol,
            holding.knowledge.to_string().to_uppercase()
        );
        let _ = writeln!(
            out,
            "  {:.6} {} = {} @ {}  P&L {} ({:.2}%)  alloc {:.1}%",
            holding.amount,
            holding.symbol,
            money(holding.value()),
            money(holding.price),
            signed_money(holding.pnl),
            holding.pnl_percent,
            holding.allocation
        );
        let _ = writeln!(out, "  {} {}", holding.knowledge.thesis_label(), holding.thesis);
        for note in holding.knowledge.review_notes() {
            let _ = writeln!(out, "    - {note}");
        }
    }
}

fn learning(out: &mut String, dashboard: &Dashboard) {
    let progress = dashboard.checklist_progress();
    for (section, progress) in dashboard.learning_plan().iter().zip(progress) {
        if let Some(horizon) = &section.horizon {
            let _ = writeln!(out, "{horizon}");
        }
        let _ = writeln!(out, "{} ({}/{})", section.title, progress.completed, progress.total);
        if let Some(prompt) = &section.prompt {
            let _ = writeln!(out, "  {prompt}");
        }
        for item in &section.items {
            let mark = if dashboard.is_checked(&item.id) { "x" } else { " " };
            let _ = writeln!(out, "  [{mark}] {}", item.text);
        }
    }
    let overall = dashboard.overall_progress();
    let _ = writeln!(out, "Overall: {:.0}% complete", overall.percent());
}

/// The full screen for the current state.
pub fn frame(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    header(&mut out, dashboard);

    if dashboard.config().variant == DashboardVariant::Full {
        let _ = writeln!(out, "{}", clock_line(dashboard));
        tabs(&mut out, dashboard);
        match dashboard.active_tab() {
            Tab::Forecasting => forecasting(&mut out, dashboard),
            Tab::Holdings => holdings(&mut out, dashboard),
            Tab::Learning => learning(&mut out, dashboard),
            Tab::Monitoring | Tab::Decisions => {
                let _ = writeln!(out, "{}", dashboard.active_tab().title());
            }
        }
    }
    out
}

pub fn footer(dashboard: &Dashboard) -> String {
    match dashboard.config().variant {
        DashboardVariant::Simple => format!("Updated today • {}\n", dashboard.config().title),
        DashboardVariant::Full => format!(
            "{} • {} ticks\n",
            dashboard.config().title,
            dashboard.tick_count()
        ),
    }
}
