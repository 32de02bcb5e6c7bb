//! Composite user report.

use tracing::{debug, error};

use crate::client::JsonPlaceholder;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::UserReport;

impl<T: Transport> JsonPlaceholder<T> {
    /// Join the user owning `email` with their posts, albums and photos.
    ///
    /// Calls run strictly in sequence. The first failing call aborts the
    /// whole report; its cause is logged and returned.
    pub fn build_user_report(&self, email: &str) -> Result<UserReport, ApiError> {
        self.assemble_report(email).inspect_err(|e| {
            error!(email, error = %e, "user report failed");
        })
    }

    fn assemble_report(&self, email: &str) -> Result<UserReport, ApiError> {
        let user_info = self.get_user_by_email(email)?.body;
        let user_id = user_info.id().to_string();

        let user_posts = self.get_posts_by_user_id(&user_id)?.body;
        let user_albums = self.get_albums_by_user_id(&user_id)?.body;

        let mut photos = Vec::new();
        for album in &user_albums {
            photos.extend(self.get_photos_by_album_id(&album.id().to_string())?.body);
        }

        debug!(
            user_id = %user_info.id(),
            posts = user_posts.len(),
            albums = user_albums.len(),
            photos = photos.len(),
            "user report assembled"
        );
        Ok(UserReport {
            user_info,
            user_posts,
            user_albums,
            photos,
        })
    }
}
