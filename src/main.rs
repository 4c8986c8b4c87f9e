#[tokio::main]
async fn main() {
    newsroom::start_server().await;
}
