// ═══════════════════════════════════════════════════════════════════
// Integration Tests — Dashboard facade, events, snapshots, live session
// ═══════════════════════════════════════════════════════════════════

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use eth_dashboard_core::errors::CoreError;
use eth_dashboard_core::models::analytics::FundStatus;
use eth_dashboard_core::models::event::{DashboardEvent, EventOutcome};
use eth_dashboard_core::models::settings::DashboardConfig;
use eth_dashboard_core::models::state::{ForecastInterval, Tab};
use eth_dashboard_core::providers::mock::MockSeriesSource;
use eth_dashboard_core::providers::registry::SeriesSourceRegistry;
use eth_dashboard_core::services::clock::FixedClock;
use eth_dashboard_core::services::series_service::SeriesService;
use eth_dashboard_core::session::timer::TickTimer;
use eth_dashboard_core::session::DashboardSession;
use eth_dashboard_core::Dashboard;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 20, 15, 0, 0).unwrap()
}

async fn mount_with_clock(config: DashboardConfig, clock: Arc<FixedClock>) -> Dashboard {
    let mut registry = SeriesSourceRegistry::new();
    registry.register(Box::new(MockSeriesSource::with_seed(42)));
    let service = SeriesService::new(registry);
    Dashboard::mount_with(config, &service, clock).await.unwrap()
}

async fn mount(config: DashboardConfig) -> Dashboard {
    mount_with_clock(config, Arc::new(FixedClock::new(t0()))).await
}

// ═══════════════════════════════════════════════════════════════════
// Mount
// ═══════════════════════════════════════════════════════════════════

mod mount {
    use super::*;

    #[tokio::test]
    async fn starts_from_config_defaults() {
        let d = mount(DashboardConfig::full()).await;
        assert_eq!(d.active_tab(), Tab::Forecasting);
        assert_eq!(d.threshold(), 5000.0);
        assert_eq!(d.forecast_interval(), ForecastInterval::OneHour);
        assert!(d.checked_items().is_empty());
        assert_eq!(d.current_time(), t0());
        assert_eq!(d.tick_count(), 0);
    }

    #[tokio::test]
    async fn generates_every_series_once() {
        let d = mount(DashboardConfig::full()).await;
        assert_eq!(d.price_history().len(), 24);
        assert_eq!(d.gas_history().len(), 12);
        assert_eq!(d.forecast().len(), 12);
        assert_eq!(d.sector_shares().len(), 5);
        assert_eq!(d.series().generated_at, t0());
        assert_eq!(d.holdings().len(), 4);
        assert_eq!(d.learning_plan().len(), 4);
    }

    #[tokio::test]
    async fn seeded_config_reproduces_series() {
        let config = DashboardConfig {
            seed: Some(1234),
            ..DashboardConfig::full()
        };
        let a = Dashboard::mount(config.clone()).await.unwrap();
        let b = Dashboard::mount(config).await.unwrap();
        let prices = |d: &Dashboard| d.price_history().iter().map(|p| p.price).collect::<Vec<_>>();
        assert_eq!(prices(&a), prices(&b));
        let predicted = |d: &Dashboard| d.forecast().iter().map(|p| p.predicted).collect::<Vec<_>>();
        assert_eq!(predicted(&a), predicted(&b));
    }

    #[tokio::test]
    async fn invalid_config_is_rejected() {
        let config = DashboardConfig {
            default_threshold: f64::NAN,
            ..DashboardConfig::full()
        };
        let service = SeriesService::new(SeriesSourceRegistry::new_with_defaults(Some(1), 2400.0));
        let result = Dashboard::mount_with(config, &service, Arc::new(FixedClock::new(t0()))).await;
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn empty_source_list_fails_to_mount() {
        let service = SeriesService::new(SeriesSourceRegistry::new());
        let result =
            Dashboard::mount_with(DashboardConfig::full(), &service, Arc::new(FixedClock::new(t0())))
                .await;
        assert!(matches!(result, Err(CoreError::NoDataSource)));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Interaction
// ═══════════════════════════════════════════════════════════════════

mod interaction {
    use super::*;

    #[tokio::test]
    async fn tab_switches_do_not_touch_holdings() {
        let mut d = mount(DashboardConfig::full()).await;
        d.select_tab(Tab::Holdings).unwrap();
        let before = d.holdings().to_vec();
        d.select_tab(Tab::Forecasting).unwrap();
        d.select_tab(Tab::Holdings).unwrap();
        assert_eq!(d.active_tab(), Tab::Holdings);
        assert_eq!(d.holdings(), before.as_slice());
    }

    #[tokio::test]
    async fn tab_switches_do_not_resample_series() {
        let mut d = mount(DashboardConfig::full()).await;
        let series = d.series().clone();
        for tab in Tab::ALL {
            d.select_tab(tab).unwrap();
        }
        assert_eq!(d.series(), &series);
    }

    #[tokio::test]
    async fn disabled_tab_is_rejected() {
        let config = DashboardConfig {
            tabs: vec![Tab::Forecasting, Tab::Holdings],
            ..DashboardConfig::full()
        };
        let mut d = mount(config).await;
        let err = d.select_tab(Tab::Learning).unwrap_err();
        assert!(matches!(err, CoreError::TabUnavailable(_)));
        assert_eq!(d.active_tab(), Tab::Forecasting);
    }

    #[tokio::test]
    async fn simple_card_has_no_tabs() {
        let mut d = mount(DashboardConfig::simple()).await;
        assert!(d.select_tab(Tab::Holdings).is_err());
    }

    #[tokio::test]
    async fn toggling_twice_restores_the_set() {
        let mut d = mount(DashboardConfig::full()).await;
        d.toggle_checklist_item("weekly-review");
        let before = d.checked_items().clone();

        assert!(d.toggle_checklist_item("eth-basics"));
        assert!(d.is_checked("eth-basics"));
        assert!(!d.toggle_checklist_item("eth-basics"));
        assert_eq!(d.checked_items(), &before);
    }

    #[tokio::test]
    async fn unknown_checklist_ids_are_tracked_too() {
        let mut d = mount(DashboardConfig::full()).await;
        assert!(d.toggle_checklist_item("custom-note"));
        assert!(d.is_checked("custom-note"));
        assert_eq!(d.overall_progress().completed, 0);
    }

    #[tokio::test]
    async fn progress_follows_checked_items() {
        let mut d = mount(DashboardConfig::full()).await;
        d.toggle_checklist_item("eth-explain");
        d.toggle_checklist_item("sell-triggers");
        let progress = d.checklist_progress();
        assert_eq!(progress[3].completed, 2);
        assert_eq!(d.overall_progress().completed, 2);
    }

    #[tokio::test]
    async fn threshold_accepts_valid_numbers() {
        let mut d = mount(DashboardConfig::full()).await;
        d.set_threshold(2500.0).unwrap();
        assert_eq!(d.threshold(), 2500.0);
        d.set_threshold_input(" 10000 ").unwrap();
        assert_eq!(d.threshold(), 10_000.0);
        d.set_threshold(0.0).unwrap();
        assert_eq!(d.threshold(), 0.0);
    }

    #[tokio::test]
    async fn invalid_threshold_keeps_prior_value() {
        let mut d = mount(DashboardConfig::full()).await;
        for text in ["abc", "", "-5", "NaN", "inf"] {
            let err = d.set_threshold_input(text).unwrap_err();
            assert!(matches!(err, CoreError::InvalidThreshold(_)), "{text}");
            assert_eq!(d.threshold(), 5000.0);
        }
        assert!(d.set_threshold(f64::INFINITY).is_err());
        assert!(d.set_threshold(-0.01).is_err());
        assert_eq!(d.threshold(), 5000.0);
    }

    #[tokio::test]
    async fn emergency_fund_tracks_threshold() {
        let mut d = mount(DashboardConfig::full()).await;
        let value = d.portfolio_value();
        let expected = value / 5000.0 * 100.0;
        assert!((d.emergency_fund_ratio().unwrap() - expected).abs() < 1e-9);
        assert_eq!(d.emergency_fund().display, "20%");
        assert_eq!(d.emergency_fund().status, FundStatus::PlayMoney);

        d.set_threshold(0.0).unwrap();
        assert!(matches!(d.emergency_fund_ratio(), Err(CoreError::DivisionByZero)));
        assert_eq!(d.emergency_fund().display, "—");

        d.set_threshold(1000.0).unwrap();
        assert_eq!(d.emergency_fund().status, FundStatus::MeaningfulMoney);
    }

    #[tokio::test]
    async fn interval_is_a_label_only() {
        let mut d = mount(DashboardConfig::full()).await;
        let forecast = d.forecast().to_vec();
        let latest = d.forecast_summary().latest;
        d.set_forecast_interval(ForecastInterval::OneDay);
        assert_eq!(d.forecast_interval(), ForecastInterval::OneDay);
        assert_eq!(d.forecast(), forecast.as_slice());
        assert_eq!(d.forecast_summary().latest, latest);
        assert_eq!(d.forecast_summary().caption(), "Next 1d prediction");
    }

    #[tokio::test]
    async fn forecast_summary_is_last_predicted() {
        let d = mount(DashboardConfig::full()).await;
        assert_eq!(d.forecast_summary().latest, d.forecast()[11].predicted);
    }

    #[tokio::test]
    async fn forecast_update_request_changes_nothing_but_the_counter() {
        let mut d = mount(DashboardConfig::full()).await;
        let series = d.series().clone();
        d.request_forecast_update();
        d.request_forecast_update();
        assert_eq!(d.state().forecast_requests, 2);
        assert_eq!(d.series(), &series);
    }

    #[tokio::test]
    async fn tick_sets_clock_and_counts() {
        let clock = Arc::new(FixedClock::new(t0()));
        let mut d = mount_with_clock(DashboardConfig::full(), Arc::clone(&clock)).await;
        let later = t0() + chrono::Duration::seconds(1);
        d.tick(later);
        assert_eq!(d.current_time(), later);

        clock.advance(chrono::Duration::seconds(5));
        d.tick_now();
        assert_eq!(d.current_time(), t0() + chrono::Duration::seconds(5));
        assert_eq!(d.tick_count(), 2);
    }

    #[tokio::test]
    async fn knowledge_color_uses_theme() {
        let d = mount(DashboardConfig::full()).await;
        assert_eq!(d.knowledge_color(&d.holdings()[0]), "#00ff88");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Events
// ═══════════════════════════════════════════════════════════════════

mod events {
    use super::*;

    #[tokio::test]
    async fn apply_dispatches_each_event() {
        let mut d = mount(DashboardConfig::full()).await;

        assert_eq!(d.apply(DashboardEvent::SelectTab(Tab::Learning)), EventOutcome::Applied);
        assert_eq!(d.active_tab(), Tab::Learning);

        assert_eq!(
            d.apply(DashboardEvent::SetThreshold("2000".into())),
            EventOutcome::Applied
        );
        assert_eq!(d.threshold(), 2000.0);

        d.apply(DashboardEvent::SetForecastInterval(ForecastInterval::SixHours));
        assert_eq!(d.forecast_interval(), ForecastInterval::SixHours);

        assert_eq!(
            d.apply(DashboardEvent::ToggleChecklistItem("regulatory".into())),
            EventOutcome::Toggled(true)
        );

        d.apply(DashboardEvent::RequestForecastUpdate);
        assert_eq!(d.state().forecast_requests, 1);

        let at = t0() + chrono::Duration::seconds(9);
        d.apply(DashboardEvent::Tick(at));
        assert_eq!(d.current_time(), at);
    }

    #[tokio::test]
    async fn rejected_event_leaves_state_unchanged() {
        let mut d = mount(DashboardConfig::full()).await;
        let before = d.state().clone();
        let outcome = d.apply(DashboardEvent::SetThreshold("lots".into()));
        assert!(matches!(outcome, EventOutcome::Rejected(_)));
        assert_eq!(d.state(), &before);
    }

    #[test]
    fn display_and_tick_detection() {
        assert!(DashboardEvent::Tick(t0()).is_tick());
        assert!(!DashboardEvent::RequestForecastUpdate.is_tick());
        assert_eq!(
            DashboardEvent::SelectTab(Tab::Holdings).to_string(),
            "SelectTab(holdings)"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// Snapshot boundary
// ═══════════════════════════════════════════════════════════════════

mod snapshot {
    use super::*;

    #[tokio::test]
    async fn round_trip_restores_interaction_state() {
        let mut a = mount(DashboardConfig::full()).await;
        a.select_tab(Tab::Learning).unwrap();
        a.set_threshold(1234.5).unwrap();
        a.set_forecast_interval(ForecastInterval::SixHours);
        a.toggle_checklist_item("eth-basics");
        let json = a.snapshot_json().unwrap();

        let mut b = mount(DashboardConfig::full()).await;
        b.restore_json(&json).unwrap();
        assert_eq!(b.state(), a.state());
    }

    #[tokio::test]
    async fn unsupported_version_is_rejected() {
        let mut d = mount(DashboardConfig::full()).await;
        let mut value: serde_json::Value = serde_json::from_str(&d.snapshot_json().unwrap()).unwrap();
        value["version"] = serde_json::json!(2);
        let err = d.restore_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedVersion(2)));
    }

    #[tokio::test]
    async fn wrong_tag_is_rejected() {
        let mut d = mount(DashboardConfig::full()).await;
        let mut value: serde_json::Value = serde_json::from_str(&d.snapshot_json().unwrap()).unwrap();
        value["magic"] = serde_json::json!("SVTK");
        assert!(matches!(
            d.restore_json(&value.to_string()),
            Err(CoreError::Deserialization(_))
        ));
    }

    #[tokio::test]
    async fn negative_threshold_in_snapshot_is_rejected() {
        let mut d = mount(DashboardConfig::full()).await;
        let before = d.state().clone();
        let mut value: serde_json::Value = serde_json::from_str(&d.snapshot_json().unwrap()).unwrap();
        value["state"]["threshold"] = serde_json::json!(-10.0);
        let err = d.restore_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidThreshold(_)));
        assert_eq!(d.state(), &before);
    }

    #[tokio::test]
    async fn snapshot_tab_must_be_enabled() {
        let mut full = mount(DashboardConfig::full()).await;
        full.select_tab(Tab::Decisions).unwrap();
        let json = full.snapshot_json().unwrap();

        let config = DashboardConfig {
            tabs: vec![Tab::Forecasting],
            ..DashboardConfig::full()
        };
        let mut narrow = mount(config).await;
        assert!(matches!(
            narrow.restore_json(&json),
            Err(CoreError::TabUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn garbage_is_a_deserialization_error() {
        let mut d = mount(DashboardConfig::full()).await;
        assert!(matches!(
            d.restore_json("not json"),
            Err(CoreError::Deserialization(_))
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Session & timer
// ═══════════════════════════════════════════════════════════════════

mod session {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn unmount_after_n_ticks_counts_exactly_n() {
        let d = mount(DashboardConfig::full()).await;
        let mut session = DashboardSession::mount(d);
        assert!(session.is_live());

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(session.process_pending(), 3);

        let sender = session.sender();
        let d = session.unmount();
        assert_eq!(d.tick_count(), 3);
        assert!(!sender.send(DashboardEvent::Tick(t0())));
        assert_eq!(d.tick_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_applies_ticks_already_fired() {
        let d = mount(DashboardConfig::full()).await;
        let session = DashboardSession::mount(d);

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        let d = session.unmount();
        assert_eq!(d.tick_count(), 3);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(d.tick_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_applies_accepted_user_events() {
        let d = mount(DashboardConfig::full()).await;
        let session = DashboardSession::mount(d);
        let sender = session.sender();

        assert!(sender.send(DashboardEvent::ToggleChecklistItem("eth-basics".into())));
        assert!(sender.send(DashboardEvent::SelectTab(Tab::Learning)));
        let d = session.unmount();

        assert!(d.is_checked("eth-basics"));
        assert_eq!(d.active_tab(), Tab::Learning);
        assert_eq!(d.tick_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_timer_delivers_nothing_more() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let clock = Arc::new(FixedClock::new(t0()));
        let timer = TickTimer::start(Duration::from_secs(1), clock, tx);
        assert_eq!(timer.period(), Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        drop(timer);
        tokio::time::sleep(Duration::from_secs(10)).await;

        let mut ticks = 0;
        while let Ok(event) = rx.try_recv() {
            assert!(event.is_tick());
            ticks += 1;
        }
        assert_eq!(ticks, 2);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn tick_carries_the_clock_time() {
        let clock = Arc::new(FixedClock::new(t0()));
        let d = mount_with_clock(DashboardConfig::full(), Arc::clone(&clock)).await;
        let mut session = DashboardSession::mount(d);

        clock.advance(chrono::Duration::seconds(42));
        let outcome = session.next_event().await;
        assert_eq!(outcome, Some(EventOutcome::Applied));
        assert_eq!(session.dashboard().current_time(), t0() + chrono::Duration::seconds(42));
        assert_eq!(session.dashboard().tick_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn user_events_are_applied_in_order() {
        let d = mount(DashboardConfig::full()).await;
        let mut session = DashboardSession::mount(d);
        let sender = session.sender();

        assert!(sender.send(DashboardEvent::SelectTab(Tab::Holdings)));
        assert!(sender.send(DashboardEvent::ToggleChecklistItem("regulatory".into())));
        assert!(sender.send(DashboardEvent::ToggleChecklistItem("regulatory".into())));
        assert!(sender.send(DashboardEvent::SetThreshold("-1".into())));
        assert_eq!(session.process_pending(), 4);

        let d = session.dashboard();
        assert_eq!(d.active_tab(), Tab::Holdings);
        assert!(!d.is_checked("regulatory"));
        assert_eq!(d.threshold(), 5000.0);
        assert_eq!(d.tick_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_bypasses_the_queue() {
        let d = mount(DashboardConfig::full()).await;
        let mut session = DashboardSession::mount(d);
        let outcome = session.dispatch(DashboardEvent::ToggleChecklistItem("eth-basics".into()));
        assert_eq!(outcome, EventOutcome::Toggled(true));
        assert!(session.dashboard().is_checked("eth-basics"));
    }

    #[tokio::test(start_paused = true)]
    async fn simple_card_has_no_timer() {
        let d = mount(DashboardConfig::simple()).await;
        let mut session = DashboardSession::mount(d);
        assert!(!session.is_live());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(session.process_pending(), 0);
        assert_eq!(session.unmount().tick_count(), 0);
    }
}
