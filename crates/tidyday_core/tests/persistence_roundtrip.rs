use tidyday_core::persistence::{decode_tasks, encode_tasks};
use tidyday_core::{
    Cookie, CookieJar, CookieTaskPersistence, CoreConfig, MemoryCookieJar, RepoError,
    RepoResult, TaskPersistence, TaskRecord, TaskStore,
};

fn task(text: &str, done: bool) -> TaskRecord {
    TaskRecord {
        text: text.to_string(),
        done,
    }
}

struct BrokenJar;

impl CookieJar for BrokenJar {
    fn get(&self, _name: &str, _path: &str) -> RepoResult<Option<String>> {
        Err(RepoError::Unavailable("storage disabled".to_string()))
    }

    fn set(&self, _cookie: &Cookie) -> RepoResult<()> {
        Err(RepoError::Unavailable("storage disabled".to_string()))
    }
}

#[test]
fn reserved_characters_and_emoji_round_trip() {
    let tasks = vec![
        task("a=b; c=d", false),
        task("café \u{1F4DA} \u{1F680}", true),
        task("100% \"quoted\" & <tagged>", false),
        task("", true),
        task("line one\nline two", false),
    ];
    let persistence = CookieTaskPersistence::new(MemoryCookieJar::new());

    persistence.save(&tasks);

    assert_eq!(persistence.load(), tasks);
}

#[test]
fn saved_value_uses_default_cookie_and_is_json() {
    let persistence = CookieTaskPersistence::new(MemoryCookieJar::new());
    persistence.save(&[task("x y", true)]);

    let raw = persistence.jar().raw_value("todos", "/").unwrap();
    let json = urlencoding::decode(&raw).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!([{ "text": "x y", "done": true }]));
}

#[test]
fn configured_cookie_name_is_used() {
    let config = CoreConfig::from_json_str(r#"{"cookie_name":"day_tasks"}"#).unwrap();
    let persistence = CookieTaskPersistence::with_config(MemoryCookieJar::new(), &config);

    persistence.save(&[task("x", false)]);

    assert!(persistence.jar().raw_value("day_tasks", "/").is_some());
    assert!(persistence.jar().raw_value("todos", "/").is_none());
}

#[test]
fn absent_cookie_loads_empty() {
    let persistence = CookieTaskPersistence::new(MemoryCookieJar::new());
    assert!(persistence.load().is_empty());
}

#[test]
fn corrupt_cookie_loads_empty() {
    for raw in ["not json", "%7B%22text%22%3A1%7D", "%E0%A4%A", "%FF"] {
        let persistence = CookieTaskPersistence::new(MemoryCookieJar::with_value("todos", "/", raw));
        assert!(persistence.load().is_empty(), "value `{raw}` should fall back");
    }
}

#[test]
fn missing_field_is_treated_as_corrupt() {
    let raw = urlencoding::encode(r#"[{"text":"no flag"}]"#).into_owned();
    let persistence = CookieTaskPersistence::new(MemoryCookieJar::with_value("todos", "/", raw));

    assert!(persistence.load().is_empty());
}

#[test]
fn unreadable_jar_opens_empty_store_and_write_failures_are_swallowed() {
    let mut store = TaskStore::open(CookieTaskPersistence::new(BrokenJar));
    assert!(store.is_empty());

    store.add("still works");
    store.toggle_done(0).unwrap();

    assert_eq!(store.tasks(), &[task("still works", true)]);
}

#[test]
fn codec_preserves_order() {
    let tasks: Vec<TaskRecord> = (0..20).map(|i| task(&format!("task {i}"), i % 3 == 0)).collect();

    let decoded = decode_tasks(&encode_tasks(&tasks).unwrap()).unwrap();

    assert_eq!(decoded, tasks);
}
