use mongodb::Client;

/// Check MongoDB health with a lightweight command
///
/// # Arguments
/// * `client` - MongoDB client
///
/// # Example
/// ```ignore
/// use database::mongodb::{connect, check_health};
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let healthy = check_health(&client).await;
/// ```
pub async fn check_health(client: &Client) -> bool {
    // Run a lightweight command to check connectivity
    client.list_database_names().await.is_ok()
}
