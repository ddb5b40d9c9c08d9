//! Song library: the owned collection of songs and their artwork.
//!
//! Songs are addressed by a stable [`SongId`] that survives removals of other
//! songs. Capacity is a configured limit checked on insertion rather than a
//! fixed-size array.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::artwork::ArtworkExtractor;
use crate::config::LibraryConfig;
use crate::decode::NormalizedImage;
use crate::error::LibraryError;

/// File extension accepted for ingestion.
const SONG_EXTENSION: &str = "mp3";

/// Opaque handle to a song in a [`SongLibrary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SongId(u64);

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered song.
#[derive(Debug, Clone)]
pub struct Song {
    pub id: SongId,
    pub path: PathBuf,
    /// File name without its directory, for display.
    pub display_name: String,
    pub artwork: NormalizedImage,
}

/// Ordered songs plus a playlist cursor.
#[derive(Debug)]
pub struct SongLibrary {
    config: LibraryConfig,
    extractor: ArtworkExtractor,
    songs: Vec<Song>,
    next_id: u64,
    current: Option<usize>,
}

impl SongLibrary {
    pub fn new(config: LibraryConfig, extractor: ArtworkExtractor) -> Self {
        Self {
            config,
            extractor,
            songs: Vec::new(),
            next_id: 0,
            current: None,
        }
    }

    /// Whether `path` looks like a song this library ingests (`.mp3`, any case).
    pub fn is_supported(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SONG_EXTENSION))
    }

    /// Register a song and extract its artwork.
    ///
    /// Artwork problems never fail the insertion; the song gets the
    /// placeholder instead. The first song added becomes current.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::CapacityExceeded` if the library is full.
    pub fn add(&mut self, path: impl Into<PathBuf>) -> Result<SongId, LibraryError> {
        if let Some(capacity) = self.config.capacity {
            if self.songs.len() >= capacity {
                return Err(LibraryError::CapacityExceeded { capacity });
            }
        }

        let path = path.into();
        let id = SongId(self.next_id);
        self.next_id += 1;

        let artwork = self.extractor.extract(&path);
        let display_name = display_name(&path);
        debug!(%id, name = %display_name, placeholder = artwork.is_placeholder(), "added song");

        self.songs.push(Song {
            id,
            path,
            display_name,
            artwork,
        });
        if self.current.is_none() {
            self.current = Some(0);
        }
        Ok(id)
    }

    /// Evict a song, returning it with its artwork.
    ///
    /// If the current song is removed, the song that takes its position
    /// becomes current (or the new last song when it was last).
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::UnknownSong` if `id` is not registered.
    pub fn remove(&mut self, id: SongId) -> Result<Song, LibraryError> {
        let index = self.index_of(id).ok_or(LibraryError::UnknownSong(id))?;
        let song = self.songs.remove(index);

        self.current = match self.current {
            _ if self.songs.is_empty() => None,
            Some(current) if current > index => Some(current - 1),
            Some(current) => Some(current.min(self.songs.len() - 1)),
            None => None,
        };
        Ok(song)
    }

    pub fn get(&self, id: SongId) -> Option<&Song> {
        self.index_of(id).map(|index| &self.songs[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn current(&self) -> Option<&Song> {
        self.current.and_then(|index| self.songs.get(index))
    }

    /// Advance to the next song, wrapping from the last to the first.
    pub fn next_song(&mut self) -> Option<&Song> {
        let len = self.songs.len();
        self.current = self.current.map(|index| (index + 1) % len);
        self.current()
    }

    /// Step back one song. There is nothing before the first song: the
    /// cursor stays put and `None` is returned.
    pub fn previous_song(&mut self) -> Option<&Song> {
        match self.current {
            Some(index) if index > 0 => {
                self.current = Some(index - 1);
                self.current()
            }
            _ => None,
        }
    }

    /// Make `id` the current song.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::UnknownSong` if `id` is not registered.
    pub fn select(&mut self, id: SongId) -> Result<&Song, LibraryError> {
        let index = self.index_of(id).ok_or(LibraryError::UnknownSong(id))?;
        self.current = Some(index);
        Ok(&self.songs[index])
    }

    fn index_of(&self, id: SongId) -> Option<usize> {
        self.songs.iter().position(|song| song.id == id)
    }
}

impl Default for SongLibrary {
    fn default() -> Self {
        Self::new(LibraryConfig::default(), ArtworkExtractor::default())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library_with(names: &[&str]) -> (SongLibrary, Vec<SongId>) {
        let mut library = SongLibrary::default();
        let ids = names
            .iter()
            .map(|name| library.add(format!("/music/{name}")).unwrap())
            .collect();
        (library, ids)
    }

    #[test]
    fn test_is_supported() {
        assert!(SongLibrary::is_supported(Path::new("a/Ashes.mp3")));
        assert!(SongLibrary::is_supported(Path::new("LOUD.MP3")));
        assert!(!SongLibrary::is_supported(Path::new("cover.jpg")));
        assert!(!SongLibrary::is_supported(Path::new("mp3")));
    }

    #[test]
    fn test_add_assigns_artwork_and_name() {
        let (library, ids) = library_with(&["Ashes.mp3"]);
        let song = library.get(ids[0]).unwrap();

        assert_eq!(song.display_name, "Ashes.mp3");
        // The file does not exist, so the song falls back to the placeholder
        assert!(song.artwork.is_placeholder());
        assert_eq!(library.current().unwrap().id, ids[0]);
    }

    #[test]
    fn test_capacity_enforced() {
        let mut library = SongLibrary::new(
            LibraryConfig { capacity: Some(2) },
            ArtworkExtractor::default(),
        );
        library.add("a.mp3").unwrap();
        library.add("b.mp3").unwrap();

        assert_eq!(
            library.add("c.mp3"),
            Err(LibraryError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_unbounded_capacity() {
        let mut library = SongLibrary::new(
            LibraryConfig { capacity: None },
            ArtworkExtractor::default(),
        );
        for i in 0..150 {
            library.add(format!("{i}.mp3")).unwrap();
        }
        assert_eq!(library.len(), 150);
    }

    #[test]
    fn test_ids_stable_across_removal() {
        let (mut library, ids) = library_with(&["a.mp3", "b.mp3", "c.mp3"]);
        let removed = library.remove(ids[0]).unwrap();

        assert_eq!(removed.display_name, "a.mp3");
        assert_eq!(library.get(ids[2]).unwrap().display_name, "c.mp3");
        assert!(library.get(ids[0]).is_none());
        assert!(matches!(
            library.remove(ids[0]),
            Err(LibraryError::UnknownSong(id)) if id == ids[0]
        ));
    }

    #[test]
    fn test_next_wraps() {
        let (mut library, ids) = library_with(&["a.mp3", "b.mp3"]);

        assert_eq!(library.next_song().unwrap().id, ids[1]);
        assert_eq!(library.next_song().unwrap().id, ids[0]);
    }

    #[test]
    fn test_previous_stops_at_first() {
        let (mut library, ids) = library_with(&["a.mp3", "b.mp3"]);

        assert!(library.previous_song().is_none());
        assert_eq!(library.current().unwrap().id, ids[0]);

        library.select(ids[1]).unwrap();
        assert_eq!(library.previous_song().unwrap().id, ids[0]);
    }

    #[test]
    fn test_remove_current_moves_cursor() {
        let (mut library, ids) = library_with(&["a.mp3", "b.mp3", "c.mp3"]);

        library.select(ids[1]).unwrap();
        library.remove(ids[1]).unwrap();
        assert_eq!(library.current().unwrap().id, ids[2]);

        library.remove(ids[2]).unwrap();
        assert_eq!(library.current().unwrap().id, ids[0]);

        library.remove(ids[0]).unwrap();
        assert!(library.current().is_none());
        assert!(library.is_empty());
        assert!(library.next_song().is_none());
    }

    #[test]
    fn test_remove_before_current_keeps_song() {
        let (mut library, ids) = library_with(&["a.mp3", "b.mp3", "c.mp3"]);

        library.select(ids[2]).unwrap();
        library.remove(ids[0]).unwrap();
        assert_eq!(library.current().unwrap().id, ids[2]);
    }

    #[test]
    fn test_select_unknown() {
        let (mut library, _) = library_with(&["a.mp3"]);
        assert!(matches!(
            library.select(SongId(99)),
            Err(LibraryError::UnknownSong(SongId(99)))
        ));
    }
}
