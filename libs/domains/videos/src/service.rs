//! Video Service - in-memory store

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::instrument;
use validator::{Validate, ValidationErrors};

use crate::models::Video;

/// Video service backed by process memory
///
/// Clones share the store; a restart empties it. The single write lock is
/// fine at this resource's traffic, which is a trickle next to the user API.
#[derive(Clone, Default)]
pub struct VideoService {
    videos: Arc<RwLock<Vec<Video>>>,
}

impl VideoService {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored videos, in insertion order
    pub async fn find_all(&self) -> Vec<Video> {
        self.videos.read().await.clone()
    }

    /// Validate and append a video
    #[instrument(skip(self, video), fields(title = %video.title))]
    pub async fn save(&self, video: Video) -> Result<(), ValidationErrors> {
        video.validate()?;
        self.videos.write().await.push(video);
        Ok(())
    }
}
