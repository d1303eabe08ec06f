//! SQLite-backed page cache
//!
//! Fetched bodies are stored keyed by a hash of their URL, so repeat runs
//! against an unchanged registry skip the network entirely.

use crate::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Cache of fetched page bodies, one row per URL.
pub struct PageCache {
    conn: Connection,
}

impl PageCache {
    /// Opens (or creates) the cache database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
        ",
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS pages (
                key        TEXT PRIMARY KEY,
                url        TEXT NOT NULL,
                body       TEXT NOT NULL,
                fetched_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self { conn })
    }

    /// Creates an in-memory cache (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS pages (
                key        TEXT PRIMARY KEY,
                url        TEXT NOT NULL,
                body       TEXT NOT NULL,
                fetched_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    fn cache_key(url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Returns the cached body for a URL, if any.
    pub fn get(&self, url: &str) -> Result<Option<String>> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM pages WHERE key = ?1",
                params![Self::cache_key(url)],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(body)
    }

    /// Stores (or replaces) the body for a URL.
    pub fn put(&self, url: &str, body: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT OR REPLACE INTO pages (key, url, body, fetched_at) VALUES (?1, ?2, ?3, ?4)",
            params![Self::cache_key(url), url, body, now],
        )?;
        Ok(())
    }

    /// Drops every cached page, returning how many were removed.
    pub fn clear(&self) -> Result<u64> {
        let removed = self.conn.execute("DELETE FROM pages", [])?;
        Ok(removed as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_on_empty_cache() {
        let cache = PageCache::open_in_memory().unwrap();
        assert_eq!(cache.get("https://example.com/").unwrap(), None);
    }

    #[test]
    fn test_put_then_get() {
        let cache = PageCache::open_in_memory().unwrap();
        cache.put("https://example.com/", "<html></html>").unwrap();

        let body = cache.get("https://example.com/").unwrap();
        assert_eq!(body.as_deref(), Some("<html></html>"));
    }

    #[test]
    fn test_put_replaces_existing_body() {
        let cache = PageCache::open_in_memory().unwrap();
        cache.put("https://example.com/", "old").unwrap();
        cache.put("https://example.com/", "new").unwrap();

        assert_eq!(cache.get("https://example.com/").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_urls_do_not_collide() {
        let cache = PageCache::open_in_memory().unwrap();
        cache.put("https://example.com/a", "body a").unwrap();
        cache.put("https://example.com/b", "body b").unwrap();

        assert_eq!(
            cache.get("https://example.com/a").unwrap().as_deref(),
            Some("body a")
        );
        assert_eq!(
            cache.get("https://example.com/b").unwrap().as_deref(),
            Some("body b")
        );
    }

    #[test]
    fn test_clear_removes_everything() {
        let cache = PageCache::open_in_memory().unwrap();
        cache.put("https://example.com/a", "body a").unwrap();
        cache.put("https://example.com/b", "body b").unwrap();

        let removed = cache.clear().unwrap();
        assert_eq!(removed, 2);
        assert_eq!(cache.get("https://example.com/a").unwrap(), None);
    }

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.db");

        let cache = PageCache::open(&path).unwrap();
        cache.put("https://example.com/", "persisted").unwrap();
        drop(cache);

        let reopened = PageCache::open(&path).unwrap();
        assert_eq!(
            reopened.get("https://example.com/").unwrap().as_deref(),
            Some("persisted")
        );
    }
}
