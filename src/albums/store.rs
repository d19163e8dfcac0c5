use super::types::{Album, AlbumPayload};

use tokio::sync::RwLock;

/// The in-memory album collection.
///
/// Records are kept in insertion order inside a `Vec` guarded by one `RwLock`.
/// Each method holds the lock for its whole body, which makes every operation
/// atomic with respect to the others (reads share the lock, writes are exclusive).
#[derive(Debug, Default)]
pub struct AlbumStore {
    albums: RwLock<Vec<Album>>,
}

impl AlbumStore {
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Creates the store with the three albums the service starts with.
    pub fn seeded() -> Self {
        Self::new(seed_albums())
    }

    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }

    /// Returns a snapshot of every album in storage order.
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// Returns the first album whose id equals `id`.
    pub async fn get(&self, id: &str) -> Option<Album> {
        self.albums
            .read()
            .await
            .iter()
            .find(|album| album.id == id)
            .cloned()
    }

    /// Appends a new album. Its id is the collection length before the insert,
    /// i.e. the index it lands on; any id carried by the payload is discarded.
    pub async fn create(&self, payload: AlbumPayload) -> Album {
        let mut albums = self.albums.write().await;
        let album = payload.into_album(albums.len().to_string());
        albums.push(album.clone());
        tracing::debug!("Created album {} ({})", album.id, album.title);
        album
    }

    /// Overwrites title, artist and price of the first album matching `id`.
    ///
    /// Returns the whole collection after the change, or `None` when no album
    /// matched (the collection is left untouched).
    pub async fn update(&self, id: &str, payload: AlbumPayload) -> Option<Vec<Album>> {
        let mut albums = self.albums.write().await;
        let album = albums.iter_mut().find(|album| album.id == id)?;

        album.title = payload.title;
        album.artist = payload.artist;
        album.price = payload.price;
        tracing::debug!("Updated album {}", id);

        Some(albums.clone())
    }

    /// Removes every album matching `id` and renumbers the survivors.
    ///
    /// The collection is rebuilt from scratch: each remaining album gets the
    /// decimal form of its new index as id. Returns the rebuilt collection, or
    /// `None` when nothing matched, in which case the original is kept as is.
    pub async fn delete(&self, id: &str) -> Option<Vec<Album>> {
        let mut albums = self.albums.write().await;
        let mut found = false;
        let mut remaining: Vec<Album> = Vec::with_capacity(albums.len());

        for album in albums.iter() {
            if album.id == id {
                found = true;
                continue;
            }
            let mut album = album.clone();
            album.id = remaining.len().to_string();
            remaining.push(album);
        }

        if !found {
            return None;
        }

        tracing::debug!(
            "Deleted album {}, {} albums renumbered",
            id,
            remaining.len()
        );
        *albums = remaining;
        Some(albums.clone())
    }
}

fn seed_albums() -> Vec<Album> {
    vec![
        Album {
            id: "0".to_string(),
            title: "Blue Train".to_string(),
            artist: "John Coltrane".to_string(),
            price: 56.99,
        },
        Album {
            id: "1".to_string(),
            title: "Jeru".to_string(),
            artist: "Gerry Mulligan".to_string(),
            price: 17.99,
        },
        Album {
            id: "2".to_string(),
            title: "Sarah Vaughan and Clifford Brown".to_string(),
            artist: "Sarah Vaughan".to_string(),
            price: 39.99,
        },
    ]
}
