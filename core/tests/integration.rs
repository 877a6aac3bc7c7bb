//! Likes lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every likes
//! method over real HTTP through a ureq-backed `Transport`. Validates that
//! request encoding, envelope classification and decoding agree with an
//! actual server.

use likes_core::{
    AddResponse, ApiClient, ApiError, BoolInt, ClientConfig, HttpResponse, LikeType, Transport,
    TransportError,
};

/// Blocking transport over ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data and the core classifies them.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn post(
        &self,
        url: &str,
        body: &str,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self.agent.post(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let mut response = request
            .send(body.as_bytes())
            .map_err(|e| TransportError::with_source("POST failed", e))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::with_source("reading body failed", e))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client_as(addr: std::net::SocketAddr, user: i64) -> ApiClient<UreqTransport> {
    let config =
        ClientConfig::new(&format!("http://{addr}")).with_header(mock_server::USER_HEADER, user.to_string());
    ApiClient::new(UreqTransport::new(), config)
}

#[test]
fn likes_lifecycle() {
    // Step 1: start mock server on a random port.
    let addr = start_server();
    let alice = client_as(addr, 2435);
    let bob = client_as(addr, 3578);

    // Step 2: nobody has liked the post yet.
    let list = alice.likes().get_list(LikeType::Post).owner_id(12345).execute().unwrap();
    assert_eq!(list.count, 0);
    assert!(list.items.is_empty());

    // Step 3: both users like it.
    let added = alice.likes().add(LikeType::Post, 7).owner_id(12345).execute().unwrap();
    assert_eq!(added.likes, 1);
    let added = bob.likes().add(LikeType::Post, 7).owner_id(12345).execute().unwrap();
    assert_eq!(added.likes, 2);

    // Step 4: list keeps like order.
    let list = alice.likes().get_list(LikeType::Post).owner_id(12345).execute().unwrap();
    assert_eq!(list.count, 2);
    assert_eq!(list.items, vec![2435, 3578]);

    // Step 5: isLiked for another user.
    let state = alice
        .likes()
        .is_liked(LikeType::Post, 7)
        .owner_id(12345)
        .user_id(3578)
        .execute()
        .unwrap();
    assert_eq!(state.liked, BoolInt::Yes);
    assert_eq!(state.copied, BoolInt::No);

    // Step 6: alice takes her like back.
    let deleted = alice.likes().delete(LikeType::Post, 7).owner_id(12345).execute().unwrap();
    assert_eq!(deleted.likes, 1);

    // Step 7: deleting again is refused with 403.
    let err = alice
        .likes()
        .delete(LikeType::Post, 7)
        .owner_id(12345)
        .execute()
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(
        err.to_string(),
        r#"Internal API server error. Wrong status code: 403. Content: {"error":{"error_code":15,"error_msg":"Access denied"}}"#
    );

    // Step 8: alice no longer likes it.
    let state = alice.likes().is_liked(LikeType::Post, 7).owner_id(12345).execute().unwrap();
    assert_eq!(state.liked, BoolInt::No);
}

#[test]
fn missing_parameter_is_client_error() {
    let addr = start_server();
    let client = client_as(addr, 1);

    let err = client
        .call::<AddResponse>("likes.add", vec![("type".to_string(), "post".to_string())])
        .execute()
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert!(err.to_string().contains("item_id is undefined"));
}

#[test]
fn unknown_method_is_client_error() {
    let addr = start_server();
    let client = client_as(addr, 1);

    let err = client
        .call::<AddResponse>("likes.copy", Vec::new())
        .execute()
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
}

#[test]
fn closed_port_is_transport_fault() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_as(addr, 1);

    let err = client.likes().add(LikeType::Post, 1).execute().unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}
