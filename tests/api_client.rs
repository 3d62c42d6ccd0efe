use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskboard::api::ApiClient;
use taskboard::config::Config;
use taskboard::error::ErrorCode;
use taskboard::models::{
    parse_datetime, Priority, TaskFilter, TaskInput, TaskStatus, TaskUpdate, WeatherQuery,
};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&Config {
        api_url: server.uri(),
        timeout_secs: 5,
    })
    .expect("client")
}

fn task_json(id: i64, status: &str, priority: &str, due: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Task {id}"),
        "description": null,
        "priority": priority,
        "status": status,
        "due_date": due,
        "created_at": "2024-01-01T08:00:00",
        "updated_at": "2024-01-01T08:00:00"
    })
}

#[tokio::test]
async fn list_tasks_sends_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("status", "todo"))
        .and(query_param("priority", "high"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            task_json(2, "todo", "high", Some("2024-01-12T00:00:00")),
            task_json(1, "todo", "high", None)
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = TaskFilter {
        status: Some(TaskStatus::Todo),
        priority: Some(Priority::High),
    };
    let tasks = client_for(&server).list_tasks(&filter).await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, 2);
    assert_eq!(tasks[0].due_date, parse_datetime("2024-01-12"));
    assert_eq!(tasks[1].due_date, None);
}

#[tokio::test]
async fn get_task_not_found_maps_to_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Task not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).get_task(99).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::TaskNotFound);
    assert_eq!(err.message, "Task not found: 99");
}

#[tokio::test]
async fn create_task_posts_trimmed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_json(json!({
            "title": "Plan sprint",
            "priority": "high",
            "status": "todo",
            "due_date": "2024-01-12T00:00:00Z"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(
            5,
            "todo",
            "high",
            Some("2024-01-12T00:00:00"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let mut input = TaskInput::new("  Plan sprint ");
    input.priority = Priority::High;
    input.description = Some("  ".into());
    input.due_date = parse_datetime("2024-01-12");
    let task = client_for(&server).create_task(input).await.unwrap();
    assert_eq!(task.id, 5);
    assert_eq!(task.priority, Priority::High);
}

#[tokio::test]
async fn create_task_with_blank_title_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_task(TaskInput::new("   "))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
}

#[tokio::test]
async fn update_task_sends_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/tasks/3"))
        .and(body_json(json!({"status": "completed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(3, "completed", "low", None)))
        .expect(1)
        .mount(&server)
        .await;

    let task = client_for(&server)
        .update_task(3, TaskUpdate::status(TaskStatus::Completed))
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn delete_task() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Task deleted successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_task(3).await.unwrap();
}

#[tokio::test]
async fn stats_summary_accepts_integer_rate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/stats/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0, "completed": 0, "in_progress": 0, "todo": 0, "completion_rate": 0
        })))
        .mount(&server)
        .await;

    let stats = client_for(&server).stats_summary().await.unwrap();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.completion_rate, 0.0);
}

#[tokio::test]
async fn server_error_carries_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "Invalid date format. Use ISO format."})),
        )
        .mount(&server)
        .await;

    let query = WeatherQuery {
        latitude: None,
        longitude: None,
        date: None,
    };
    let err = client_for(&server).weather(&query).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ApiError);
    assert!(err.message.contains("400"));
    assert!(err.message.contains("Invalid date format"));
}

#[tokio::test]
async fn weather_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("latitude", "48.85"))
        .and(query_param("longitude", "2.35"))
        .and(query_param("date", "2024-01-12T00:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "available": true,
            "temperature": 7.5,
            "description": "light rain",
            "location": "Paris",
            "humidity": 80,
            "wind_speed": 3.1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = WeatherQuery {
        latitude: Some(48.85),
        longitude: Some(2.35),
        date: parse_datetime("2024-01-12"),
    };
    let report = client_for(&server).weather(&query).await.unwrap();
    assert!(report.available);
    assert_eq!(report.location.as_deref(), Some("Paris"));
    assert_eq!(report.humidity, Some(80.0));
}

#[tokio::test]
async fn task_weather() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/4/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "task_id": 4,
            "due_date": "2024-01-12T00:00:00",
            "status": "📅 Due in 2 days",
            "description": "Task: Task 4"
        })))
        .mount(&server)
        .await;

    let weather = client_for(&server).task_weather(4).await.unwrap();
    assert_eq!(weather.task_id, 4);
    assert_eq!(weather.status, "📅 Due in 2 days");
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_task(1).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidResponse);
}

#[tokio::test]
async fn unreachable_service_is_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = ApiClient::new(&Config {
        api_url: format!("http://127.0.0.1:{port}"),
        timeout_secs: 2,
    })
    .unwrap();
    let err = client.list_tasks(&TaskFilter::default()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::HttpError);
}
