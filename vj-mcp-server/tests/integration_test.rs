//! Integration tests for the Video Jungle MCP server.
//!
//! These tests run the tool dispatcher and catalogs end-to-end against a
//! mocked Video Jungle API, so they need no credentials and make no real
//! network calls.
//!
//! Run with: `cargo test --package vj-mcp-server --test integration_test`

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vj_mcp_common::config::Config;
use vj_mcp_common::error::Error;
use vj_mcp_server::handler::{
    AddVideoParams, EditorHandler, GenerateEditParams, SearchVideosParams, SingleVideoEditParams,
};
use vj_mcp_server::edit::{ClipCut, SourceCut};
use vj_mcp_server::prompts::{Note, NoteStore, render_prompt};
use vj_mcp_server::resources;

const TEST_KEY: &str = "integration-test-key";

fn handler_for(server: &MockServer) -> EditorHandler {
    EditorHandler::new(Config::new(TEST_KEY, server.uri()))
}

#[tokio::test]
async fn upload_then_search_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/video-file"))
        .and(header("X-API-KEY", TEST_KEY))
        .and(body_json(json!({
            "name": "beach day",
            "filename": "https://cdn.example/beach.mp4",
            "upload_method": "url"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "v-beach", "name": "beach day", "description": ""}
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/video-file/search"))
        .and(body_json(json!({"query": "beach"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "video": {"name": "beach day", "url": "https://vj/watch/v-beach"},
                "video_id": "v-beach",
                "scene_changes": [0.0, 12.5],
                "script": "waves rolling in"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server);

    let added = handler
        .add_video(AddVideoParams {
            name: "beach day".to_string(),
            url: "https://cdn.example/beach.mp4".to_string(),
        })
        .await
        .unwrap();
    assert!(added.contains("Added video 'beach day'"));

    let found = handler
        .search_videos(SearchVideosParams {
            query: "beach".to_string(),
        })
        .await
        .unwrap();
    assert!(found.contains("beach day at vj://video-file/v-beach"));
    assert!(found.contains("waves rolling in"));
}

#[tokio::test]
async fn multi_video_edit_against_existing_project() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "p1", "name": "p1", "description": "existing"}
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects/p1/render-edit"))
        .and(body_json(json!({
            "video_edit_version": "1.0",
            "video_output_format": "mp4",
            "video_output_resolution": "1080x1920",
            "video_output_fps": 30.0,
            "video_output_filename": "output_video.mp4",
            "audio_overlay": [],
            "video_series_sequential": [{
                "video_id": "v1",
                "video_start_time": 0,
                "video_end_time": 5,
                "type": "videofile",
                "audio_levels": [{
                    "audio_level": "0.5",
                    "start_time": 0,
                    "end_time": 5,
                }],
            }],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "edit-9"})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = handler_for(&server)
        .generate_edit_from_videos(GenerateEditParams {
            edit: vec![SourceCut {
                video_id: "v1".to_string(),
                video_start_time: json!(0),
                video_end_time: json!(5),
            }],
            project_id: "p1".to_string(),
            resolution: None,
        })
        .await
        .unwrap();

    assert!(!outcome.created_project);
    let message = outcome.into_message();
    assert!(message.contains("edit-9"));
    assert!(!message.contains("Created new project"));
    assert!(message.contains("\"audio_levels\""));
}

#[tokio::test]
async fn single_video_edit_creates_missing_project() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/story"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_json(json!({
            "name": "story",
            "description": "Claude generated project"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "p-story", "name": "story", "description": "Claude generated project"}
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects/p-story/render-edit"))
        .and(body_json(json!({
            "video_edit_version": "1.0",
            "video_output_format": "mp4",
            "video_output_resolution": "640x480",
            "video_output_fps": 30.0,
            "video_output_filename": "output_video.mp4",
            "audio_overlay": [],
            "video_series_sequential": [{
                "video_id": "v-77",
                "video_start_time": "00:00:02",
                "video_end_time": "00:00:06",
                "type": "videofile",
                "audio_levels": [{
                    "audio_level": "0.5",
                    "start_time": "00:00:02",
                    "end_time": "00:00:06",
                }],
            }],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "edit-10"})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = handler_for(&server)
        .generate_edit_from_single_video(SingleVideoEditParams {
            edit: vec![ClipCut {
                start_time: json!("00:00:02"),
                end_time: json!("00:00:06"),
            }],
            project_id: "story".to_string(),
            video_id: "v-77".to_string(),
            resolution: Some("640x480".to_string()),
        })
        .await
        .unwrap();

    assert!(outcome.created_project);
    let message = outcome.into_message();
    assert!(message.contains("Created new project story"));
    assert!(message.contains("edit-10"));
}

#[tokio::test]
async fn remote_failure_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/video-file/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let err = handler_for(&server)
        .search_videos(SearchVideosParams {
            query: "anything".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status_code,
            message,
            ..
        } => {
            assert_eq!(status_code, 503);
            assert!(message.contains("maintenance"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn resource_listing_and_read_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/video-file"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "v1", "name": "clip one", "description": "first"},
            {"id": "v2", "name": "clip two", "description": "second"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/video-file/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "v2", "name": "clip two", "description": "second"}
        )))
        .mount(&server)
        .await;

    let handler = handler_for(&server);

    let videos = handler.client().list_video_files().await.unwrap();
    let uris: Vec<String> = videos.iter().map(|v| resources::video_uri(&v.id)).collect();
    assert_eq!(uris, vec!["vj://video-file/v1", "vj://video-file/v2"]);

    let id = resources::parse_video_uri(&uris[1]).unwrap();
    let video = handler.client().get_video_file(&id).await.unwrap();
    assert_eq!(video.name, "clip two");
}

#[test]
fn prompt_catalog_renders_from_explicit_notes() {
    let notes = NoteStore::new(vec![
        Note::new("shoot", "beach footage uploaded"),
        Note::new("edit", "rough cut pending"),
    ]);

    let brief = render_prompt("summarize-notes", None, &notes).unwrap();
    assert!(brief.text.contains("- shoot: beach footage uploaded"));
    assert!(brief.text.contains("- edit: rough cut pending"));

    let detailed = render_prompt("summarize-notes", Some("detailed"), &notes).unwrap();
    assert!(detailed.text.contains("Give extensive details."));

    let err = render_prompt("other", None, &notes).unwrap_err();
    assert!(matches!(err, Error::UnknownPrompt(_)));
}
