use mailroom_client::Client;
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .base_url(server.uri())
        .expect("mock server url")
        .api_key("key-test-0000".to_string())
        .build()
        .expect("client")
}
