use anyhow::Result;
use tempfile::tempdir;

use evento_storefront::apis::ApiClient;
use evento_storefront::config::Config;

#[tokio::test]
async fn test_unreadable_file_yields_failure_outcome() -> Result<()> {
    let temp_dir = tempdir()?;
    let missing = temp_dir.path().join("no-such-image.png");

    let config = Config::with_base_url("http://localhost:10000");
    let api = ApiClient::new(&config)?;

    // The file read fails before any request is made
    let outcome = api.upload_image("salon", 7, &missing).await;
    assert!(!outcome.success);
    assert!(outcome.image_url.is_none());
    assert!(!outcome.message.is_empty());
    Ok(())
}
