//! DEM tile store reader with lazy loading and a bounded cache.

use crate::{DemError, DemTile, ElevationSource, Result};
use geoterra_coords::{CoordError, TileIndex, MAX_ZOOM};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Default maximum number of decoded tiles to keep in memory.
const DEFAULT_MAX_CACHE_SIZE: usize = 32;

/// Reader for an on-disk `root/{zoom}/{x}/{y}.png` elevation tile store.
///
/// Tiles are decoded lazily on first query and kept in a bounded LRU cache.
/// The reader is thread-safe and is shared read-only across the sampler's
/// worker threads; a missing tile file yields a data hole (`Ok(None)`),
/// never an error.
#[derive(Debug)]
pub struct DemReader {
    root: PathBuf,
    zoom: u8,
    cache: RwLock<TileCache>,
    max_cache_size: usize,
}

/// LRU cache for decoded tiles.
#[derive(Debug)]
struct TileCache {
    /// Decoded tiles indexed by tile coordinate.
    tiles: HashMap<TileIndex, Arc<DemTile>>,
    /// Access order for LRU eviction (most recently used at the back).
    access_order: Vec<TileIndex>,
}

impl TileCache {
    fn new() -> Self {
        Self {
            tiles: HashMap::new(),
            access_order: Vec::new(),
        }
    }

    fn get(&self, index: &TileIndex) -> Option<Arc<DemTile>> {
        self.tiles.get(index).cloned()
    }

    fn insert(&mut self, index: TileIndex, tile: Arc<DemTile>, max_size: usize) {
        // If already present, just update access order
        if self.tiles.contains_key(&index) {
            if let Some(pos) = self.access_order.iter().position(|k| k == &index) {
                self.access_order.remove(pos);
                self.access_order.push(index);
            }
            return;
        }

        // Evict oldest tiles if at capacity
        while self.tiles.len() >= max_size && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.tiles.remove(&oldest);
        }

        self.tiles.insert(index, tile);
        self.access_order.push(index);
    }

    fn len(&self) -> usize {
        self.tiles.len()
    }
}

impl DemReader {
    /// Create a reader over a tile store with the default cache size.
    pub fn new<P: AsRef<Path>>(root: P, zoom: u8) -> Result<Self> {
        Self::with_cache_size(root, zoom, DEFAULT_MAX_CACHE_SIZE)
    }

    /// Create a reader with a specific in-memory tile budget.
    pub fn with_cache_size<P: AsRef<Path>>(root: P, zoom: u8, max_cache_size: usize) -> Result<Self> {
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom).into());
        }

        Ok(Self {
            root: root.as_ref().to_path_buf(),
            zoom,
            cache: RwLock::new(TileCache::new()),
            max_cache_size,
        })
    }

    /// Zoom level of the backing store.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Root directory of the backing store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk path of a tile in the store.
    pub fn tile_path(&self, index: TileIndex) -> PathBuf {
        self.root
            .join(index.zoom.to_string())
            .join(index.x.to_string())
            .join(format!("{}.png", index.y))
    }

    /// Check if the store has a tile covering the coordinate.
    pub fn has_tile(&self, lat: f64, lon: f64) -> Result<bool> {
        let index = TileIndex::from_lat_lon(lat, lon, self.zoom)?;
        Ok(self.tile_path(index).exists())
    }

    /// Number of tiles currently decoded in memory.
    pub fn loaded_tile_count(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Fetch the tile covering a coordinate, or `None` when the store has
    /// no file for it.
    fn tile_for(&self, lat: f64, lon: f64) -> Result<Option<Arc<DemTile>>> {
        let index = TileIndex::from_lat_lon(lat, lon, self.zoom)?;

        // Fast path: already decoded
        {
            let cache = self.cache.read().map_err(|_| DemError::CacheLockPoisoned)?;
            if let Some(tile) = cache.get(&index) {
                return Ok(Some(tile));
            }
        }

        let path = self.tile_path(index);
        if !path.exists() {
            debug!(zoom = index.zoom, x = index.x, y = index.y, "DEM tile not in store");
            return Ok(None);
        }

        let tile = Arc::new(DemTile::from_file(&path, index)?);

        let mut cache = self.cache.write().map_err(|_| DemError::CacheLockPoisoned)?;
        cache.insert(index, Arc::clone(&tile), self.max_cache_size);

        Ok(Some(tile))
    }
}

impl ElevationSource for DemReader {
    fn elevation_at(&self, lat: f64, lon: f64) -> Result<Option<f64>> {
        Ok(self
            .tile_for(lat, lon)?
            .map(|tile| tile.elevation_at(lat, lon)))
    }
}
