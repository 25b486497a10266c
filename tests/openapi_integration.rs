use project_board::presentation::http::openapi::write_openapi_snapshot;
use serde_json::Value;

#[test]
fn snapshot_is_written_as_pretty_json() {
    let dir = std::env::temp_dir().join(format!("board-openapi-{}", std::process::id()));
    let path = dir.join("nested").join("openapi.json");

    write_openapi_snapshot(path.to_str().unwrap()).expect("write snapshot");

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains('\n'), "expected pretty-printed output");
    let doc: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["info"]["title"], "Project Board API");
    assert!(doc["paths"]["/api/v1/articles/{id}/comments"].is_object());

    std::fs::remove_dir_all(dir).ok();
}
