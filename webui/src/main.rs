//! Console store demo.
//!
//! Runs the session lookup, a devices fetch, a stale-request race and a
//! logout against mock collaborators, logging every step, then prints the
//! Prometheus metrics recorded on the way.
//!
//! ```sh
//! CONSOLE_MODE=public RUST_LOG=debug cargo run -p console-webui
//! ```

use chrono::Utc;
use console_store_core::resource::Page;
use console_store_runtime::metrics::MetricsRecorder;
use console_webui::mocks::{MockAccountApi, MockConsole};
use console_webui::state::{Device, DeviceQuery, ListQuery, User};
use console_webui::{console_store, AppAction, ConsoleConfig, SessionAction};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn device(device_id: &str) -> Device {
    Device {
        application_id: "weather-stations".to_string(),
        device_id: device_id.to_string(),
        name: None,
        dev_eui: None,
        created_at: Utc::now(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "console_webui=debug,console_store_runtime=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut metrics = MetricsRecorder::new();
    metrics.start()?;

    let config = ConsoleConfig::from_env()?;
    tracing::info!(mode = %config.mode, page_size = config.page_size, "Starting console store demo");

    let admin = User::new("admin").with_name("Administrator");
    let mocks = MockConsole {
        console_account: MockAccountApi::authenticated(admin.clone()),
        oauth_account: MockAccountApi::authenticated(admin),
        ..MockConsole::new()
    };
    // First request answers late, second one early
    mocks
        .devices
        .respond_after(Page::new(vec![device("stale")], 1), Duration::from_millis(200))
        .respond(Page::new(vec![device("station-1"), device("station-2")], 2));

    let store = console_store(mocks.environment(config));

    let outcome = store
        .send_and_wait_for(
            AppAction::get_session(),
            |a| matches!(a, AppAction::Session(SessionAction::GetSessionSuccess(_) | SessionAction::GetSessionFailure)),
            Duration::from_secs(5),
        )
        .await?;
    tracing::info!(kind = %console_store_core::action::Action::kind(&outcome), "Session resolved");

    let query = DeviceQuery::new("weather-stations", ListQuery::page(1, config.page_size));
    let mut slow = store.send(AppAction::list_devices(query.clone())).await?;
    let mut fast = store.send(AppAction::list_devices(query)).await?;
    fast.wait().await;
    slow.wait().await;

    let devices = store
        .state(|s| s.devices.items.iter().map(|d| d.device_id.clone()).collect::<Vec<_>>())
        .await;
    tracing::info!(?devices, "Devices after both answers arrived");

    let before_logout = store.snapshot().await;
    let mut handle = store.send(AppAction::logout()).await?;
    handle.wait().await;
    let after_logout = store.snapshot().await;

    tracing::info!(
        authenticated = after_logout.user.is_authenticated(),
        credentials_cleared = mocks.credentials.clears(),
        changed = ?after_logout.changed_since(&before_logout),
        "Logged out"
    );

    store.shutdown(Duration::from_secs(5)).await?;

    if let Some(rendered) = metrics.render() {
        println!("{rendered}");
    }
    Ok(())
}
