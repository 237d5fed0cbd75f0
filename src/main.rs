#[tokio::main]
async fn main() {
    fair_backend::run().await;
}
