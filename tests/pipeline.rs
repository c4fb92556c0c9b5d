//! Integration tests driving the full request pipeline against an
//! in-process TCP fixture that speaks just enough HTTP/1.1 to answer one
//! canned response and capture the raw request for inspection.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use voxbox::{Client, Error, UserKey};

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Serves exactly one request with the given JSON body and hands back the
/// raw request bytes (lowercased, since reqwest emits lowercase header
/// names over HTTP/1.1).
async fn serve_once(body: &'static str) -> (SocketAddr, tokio::sync::oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut data = Vec::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
            if let Some(pos) = find_subsequence(&data, b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&data[..pos]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= pos + 4 + content_length {
                    break;
                }
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();
        let _ = tx.send(String::from_utf8_lossy(&data).to_lowercase());
    });
    (addr, rx)
}

fn client_for(addr: SocketAddr) -> Client {
    Client::new(&UserKey::from("test-key"))
        .with_server_addr(&addr.to_string())
}

#[tokio::test]
async fn success_envelope_resolves_to_data() {
    let (addr, request) = serve_once(
        r#"{"success":true,"data":[{"name":"aria","locale":"en-US","gender":"female","shortName":"aria"}],"message":""}"#,
    )
    .await;
    let client = client_for(addr);

    let voices = voxbox::tts::voices(&client).await.unwrap();
    assert_eq!(voices.len(), 1);
    assert_eq!(voices[0].name, "aria");

    let request = request.await.unwrap();
    assert!(request.starts_with("get /api/tts/voices http"), "{request}");
    assert!(request.contains("x-user-key: test-key"), "{request}");
}

#[tokio::test]
async fn query_parameters_are_encoded_into_the_path() {
    let (addr, request) = serve_once(
        r#"{"success":true,"data":{"id":1,"orderNo":"X123","planType":"MONTHLY","amount":9.9,"status":"PENDING"},"message":""}"#,
    )
    .await;
    let client = client_for(addr);

    let order = voxbox::vip::order_status(&client, "X123").await.unwrap();
    assert_eq!(order.order_no, "X123");

    let request = request.await.unwrap();
    assert!(request.starts_with("get /api/vip/order-status?orderno=x123 http"), "{request}");
}

#[tokio::test]
async fn post_body_uses_camel_case_wire_names() {
    let (addr, request) = serve_once(
        r#"{"success":true,"data":{"audioId":5,"r2Url":"https://cdn/a.mp3","duration":3},"message":""}"#,
    )
    .await;
    let client = client_for(addr);

    let generated = client.generate("hello", "aria").await.unwrap();
    assert_eq!(generated.audio_id, Some(5));
    assert_eq!(generated.r2_url.as_deref(), Some("https://cdn/a.mp3"));

    let request = request.await.unwrap();
    assert!(request.starts_with("post /api/tts/generate http"), "{request}");
    assert!(request.contains(r#""rawtext":"hello""#), "{request}");
    assert!(request.contains(r#""voicename":"aria""#), "{request}");
}

#[tokio::test]
async fn path_parameters_are_interpolated() {
    let (addr, request) = serve_once(r#"{"success":true,"data":null,"message":""}"#).await;
    let client = client_for(addr);

    voxbox::audio::delete(&client, 42).await.unwrap();

    let request = request.await.unwrap();
    assert!(request.starts_with("delete /api/audio/42 http"), "{request}");
}

#[tokio::test]
async fn failure_envelope_becomes_api_error() {
    let (addr, _request) =
        serve_once(r#"{"success":false,"data":null,"message":"quota exceeded"}"#).await;
    let client = client_for(addr);

    let err = voxbox::tts::voices(&client).await.unwrap_err();
    assert!(matches!(err, Error::Api { .. }), "{err:?}");
    assert_eq!(err.to_string(), "quota exceeded");
}

#[tokio::test]
async fn failure_envelope_without_message_uses_generic_text() {
    let (addr, _request) = serve_once(r#"{"success":false,"data":null}"#).await;
    let client = client_for(addr);

    let err = voxbox::user::profile(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "request failed");
}

#[tokio::test]
async fn connection_refused_becomes_transport_error() {
    // Bind and drop so the port is known-dead.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let err = voxbox::tts::voices(&client).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err:?}");
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn non_envelope_body_becomes_decode_error() {
    let (addr, _request) = serve_once("<html>gateway error</html>").await;
    let client = client_for(addr);

    let err = voxbox::tts::voices(&client).await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn upload_sends_multipart_with_identity_header() {
    let (addr, request) = serve_once(
        r#"{"success":true,"data":{"url":"https://cdn/s.wav","duration":2,"fileName":"s.wav"},"message":""}"#,
    )
    .await;
    let client = client_for(addr);

    let uploaded = voxbox::upload::audio(&client, "s.wav", b"RIFFdata".to_vec()).await.unwrap();
    assert_eq!(uploaded.url, "https://cdn/s.wav");

    let request = request.await.unwrap();
    assert!(request.starts_with("post /api/upload/audio http"), "{request}");
    assert!(request.contains("x-user-key: test-key"), "{request}");
    assert!(request.contains("content-type: multipart/form-data"), "{request}");
    assert!(request.contains(r#"filename="s.wav""#), "{request}");
}

#[tokio::test]
async fn identity_header_tracks_persisted_key() {
    let dir = std::env::temp_dir().join(format!("voxbox-it-{}", std::process::id()));
    let path = dir.join("user-key");
    std::fs::remove_file(&path).ok();
    let key = UserKey::load_or_create(&path).unwrap();
    let reloaded = UserKey::load_or_create(&path).unwrap();
    assert_eq!(key, reloaded);

    let (addr, request) = serve_once(r#"{"success":true,"data":null,"message":""}"#).await;
    let client = Client::new(&key).with_server_addr(&addr.to_string());
    voxbox::audio::delete(&client, 1).await.unwrap();

    let request = request.await.unwrap();
    assert!(
        request.contains(&format!("x-user-key: {}", key.as_str().to_lowercase())),
        "{request}"
    );
    std::fs::remove_file(&path).ok();
}
