//! Common test utilities for integration tests

use life_mcp::LifeServerHandler;
use tempfile::NamedTempFile;

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (LifeServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = LifeServerHandler::new(temp_file.path().to_str().unwrap());
    (handler, temp_file)
}

/// Extract an ID from a creation response message
///
/// Response format: "List created with ID: <id> (path: ...)" or
/// "Task created with ID: <id> (list: ...)"
#[allow(dead_code)]
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    // Fallback: try to get last whitespace-separated token without parentheses
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}

/// Extract the spawned-instance ID from a toggle response
///
/// Response format: "...\nNext occurrence created: <id> (due <date>)"
#[allow(dead_code)]
pub fn extract_spawned_id(response: &str) -> Option<String> {
    let line = response
        .lines()
        .find(|l| l.starts_with("Next occurrence created: "))?;
    let rest = line.trim_start_matches("Next occurrence created: ");
    Some(match rest.find(" (") {
        Some(end) => rest[..end].to_string(),
        None => rest.to_string(),
    })
}

/// Create a list through the handler and return its ID
#[allow(dead_code)]
pub async fn add_list(handler: &LifeServerHandler, parent_id: Option<&str>, name: &str) -> String {
    let response = handler
        .handle_add_list(parent_id.map(String::from), name.to_string())
        .await
        .unwrap();
    extract_id_from_response(&response)
}

/// Create a task through the handler and return its ID
#[allow(dead_code)]
pub async fn add_task(handler: &LifeServerHandler, list_id: &str, title: &str) -> String {
    let response = handler
        .handle_add_task(list_id.to_string(), title.to_string())
        .await
        .unwrap();
    extract_id_from_response(&response)
}

/// Set a task's deadline and recurrence through the handler
#[allow(dead_code)]
pub async fn schedule_task(
    handler: &LifeServerHandler,
    task_id: &str,
    deadline: &str,
    recurrence: Option<&str>,
) {
    handler
        .handle_update_task(
            task_id.to_string(),
            None,
            Some(deadline.to_string()),
            recurrence.map(String::from),
            None,
        )
        .await
        .unwrap();
}
