use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct TodayResponse {
    date: String,
    mood: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimelineRow {
    date: String,
    display_date: String,
    mood: String,
}

#[derive(Debug, Deserialize)]
struct TimelineResponse {
    rows: Vec<TimelineRow>,
}

#[derive(Debug, Deserialize)]
struct CalendarDay {
    day: u32,
    mood: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CalendarResponse {
    year: i32,
    month: u32,
    title: String,
    leading_blanks: u32,
    days: Vec<CalendarDay>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("mood_tracker_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_mood_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn post_mood(client: &Client, base_url: &str, mood: &str) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/mood"))
        .json(&serde_json::json!({ "mood": mood }))
        .send()
        .await
        .unwrap()
}

async fn get_today(client: &Client, base_url: &str) -> TodayResponse {
    client
        .get(format!("{base_url}/api/today"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_log_mood_sets_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = post_mood(&client, &server.base_url, "happy").await;
    assert!(response.status().is_success());

    let logged: TodayResponse = response.json().await.unwrap();
    let today = get_today(&client, &server.base_url).await;
    assert_eq!(today.date, logged.date);
    assert_eq!(today.mood.as_deref(), Some("happy"));
}

#[tokio::test]
async fn http_same_day_relog_overwrites() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    assert!(post_mood(&client, &server.base_url, "happy").await.status().is_success());
    assert!(post_mood(&client, &server.base_url, "sad").await.status().is_success());

    let today = get_today(&client, &server.base_url).await;
    assert_eq!(today.mood.as_deref(), Some("sad"));

    let timeline: TimelineResponse = client
        .get(format!("{}/api/timeline", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows_for_today: Vec<_> = timeline
        .rows
        .iter()
        .filter(|row| row.date == today.date)
        .collect();
    assert_eq!(rows_for_today.len(), 1);
    assert_eq!(rows_for_today[0].mood, "sad");
}

#[tokio::test]
async fn http_timeline_is_reverse_chronological() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    assert!(post_mood(&client, &server.base_url, "calm").await.status().is_success());

    let timeline: TimelineResponse = client
        .get(format!("{}/api/timeline", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!timeline.rows.is_empty());
    assert!(timeline.rows.windows(2).all(|pair| pair[0].date >= pair[1].date));
    assert!(timeline.rows.iter().all(|row| !row.display_date.is_empty()));
}

#[tokio::test]
async fn http_calendar_shape_for_fixed_months() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let february: CalendarResponse = client
        .get(format!("{}/api/calendar?year=2024&month=2", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(february.year, 2024);
    assert_eq!(february.month, 2);
    assert_eq!(february.title, "February 2024");
    assert_eq!(february.days.len(), 29);
    // 2024-02-01 fell on a Thursday; the server defaults to Sunday-first weeks.
    assert_eq!(february.leading_blanks, 4);

    let january: CalendarResponse = client
        .get(format!("{}/api/calendar?year=2024&month=1", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(january.days.len(), 31);
    assert_eq!(january.leading_blanks, 1);

    let bad = client
        .get(format!("{}/api/calendar?year=2024&month=13", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_current_month_calendar_tags_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    assert!(post_mood(&client, &server.base_url, "meh").await.status().is_success());

    let today = get_today(&client, &server.base_url).await;
    let day: u32 = today.date[8..10].parse().unwrap();

    let calendar: CalendarResponse = client
        .get(format!("{}/api/calendar", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let cell = calendar
        .days
        .iter()
        .find(|cell| cell.day == day)
        .expect("today's cell missing from current month grid");
    assert_eq!(cell.mood.as_deref(), Some("meh"));
}

#[tokio::test]
async fn http_blank_mood_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_today(&client, &server.base_url).await;

    let response = post_mood(&client, &server.base_url, "   ").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let after = get_today(&client, &server.base_url).await;
    assert_eq!(after.mood, before.mood);
}

#[tokio::test]
async fn http_form_post_records_and_redirects_home() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/mood/happy", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert!(response.url().path().ends_with('/'));

    let today = get_today(&client, &server.base_url).await;
    assert_eq!(today.mood.as_deref(), Some("happy"));
}
