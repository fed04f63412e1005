//! course-search - HTTP search service for teacher/course review listings

use course_search::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    course_search::start_server(config).await?;

    Ok(())
}
