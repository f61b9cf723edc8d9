//! User-selected report files.
//!
//! `ReportFile` is the handle the upload flow and the preview engine work
//! against; `PickedFile` adapts the file engine Dioxus attaches to drop and
//! `<input type=file>` events.

use std::sync::Arc;

use async_trait::async_trait;
use dioxus::html::FileEngine;

#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    #[error("file `{0}` could not be read")]
    Unavailable(String),
}

#[async_trait(?Send)]
pub trait ReportFile {
    fn name(&self) -> &str;

    /// Size in bytes as reported at selection time.
    fn size(&self) -> u64;

    /// At most `limit` bytes from the start of the file.
    async fn read_prefix(&self, limit: usize) -> Result<Vec<u8>, FileReadError>;

    async fn read_all(&self) -> Result<Vec<u8>, FileReadError>;
}

/// First file of a drop or picker event.
pub struct PickedFile {
    engine: Arc<dyn FileEngine>,
    name: String,
    size: u64,
}

impl PickedFile {
    /// `None` when the event carried no files (e.g. a dropped text snippet).
    pub async fn first_from(engine: Arc<dyn FileEngine>) -> Option<Self> {
        let name = engine.files().into_iter().next()?;
        let size = engine.file_size(&name).await.unwrap_or(0);
        Some(Self { engine, name, size })
    }

    fn unavailable(&self) -> FileReadError {
        FileReadError::Unavailable(self.name.clone())
    }

    /// Browser: only the requested slice of the blob is materialized.
    #[cfg(target_arch = "wasm32")]
    async fn read_native_prefix(&self, limit: usize) -> Result<Vec<u8>, FileReadError> {
        use wasm_bindgen_futures::JsFuture;

        let native = self
            .engine
            .get_native_file(&self.name)
            .await
            .ok_or_else(|| self.unavailable())?;
        let file = native
            .downcast::<web_sys::File>()
            .map_err(|_| self.unavailable())?;
        let end = i32::try_from(limit).unwrap_or(i32::MAX);
        let blob = file
            .slice_with_i32_and_i32(0, end)
            .map_err(|_| self.unavailable())?;
        let buffer = JsFuture::from(blob.array_buffer())
            .await
            .map_err(|_| self.unavailable())?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }

    /// Native: the engine hands out an open `std::fs::File` (file names are
    /// paths there); at most `limit` bytes are read from it.
    #[cfg(not(target_arch = "wasm32"))]
    async fn read_native_prefix(&self, limit: usize) -> Result<Vec<u8>, FileReadError> {
        use std::io::Read;

        let file = match self.engine.get_native_file(&self.name).await {
            Some(native) => match native.downcast::<std::fs::File>() {
                Ok(file) => *file,
                Err(_) => self.open_by_path()?,
            },
            None => self.open_by_path()?,
        };

        let mut bytes = Vec::with_capacity(limit.min(self.size as usize));
        file.take(limit as u64)
            .read_to_end(&mut bytes)
            .map_err(|err| {
                tracing::debug!(%err, file = %self.name, "bounded read failed");
                self.unavailable()
            })?;
        Ok(bytes)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_by_path(&self) -> Result<std::fs::File, FileReadError> {
        std::fs::File::open(&self.name).map_err(|_| self.unavailable())
    }
}

#[async_trait(?Send)]
impl ReportFile for PickedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    /// Never falls back to reading the whole file.
    async fn read_prefix(&self, limit: usize) -> Result<Vec<u8>, FileReadError> {
        self.read_native_prefix(limit).await
    }

    async fn read_all(&self) -> Result<Vec<u8>, FileReadError> {
        self.engine
            .read_file(&self.name)
            .await
            .ok_or_else(|| self.unavailable())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// In-memory file that records the read limits it was asked for.
    pub struct MemoryFile {
        name: String,
        bytes: Vec<u8>,
        readable: bool,
        pub prefix_limits: RefCell<Vec<usize>>,
    }

    impl MemoryFile {
        pub fn new(name: &str, contents: impl Into<Vec<u8>>) -> Self {
            Self {
                name: name.to_string(),
                bytes: contents.into(),
                readable: true,
                prefix_limits: RefCell::new(Vec::new()),
            }
        }

        pub fn unreadable(name: &str) -> Self {
            Self {
                readable: false,
                ..Self::new(name, Vec::new())
            }
        }
    }

    #[async_trait(?Send)]
    impl ReportFile for MemoryFile {
        fn name(&self) -> &str {
            &self.name
        }

        fn size(&self) -> u64 {
            self.bytes.len() as u64
        }

        async fn read_prefix(&self, limit: usize) -> Result<Vec<u8>, FileReadError> {
            self.prefix_limits.borrow_mut().push(limit);
            let mut bytes = self.read_all().await?;
            bytes.truncate(limit);
            Ok(bytes)
        }

        async fn read_all(&self) -> Result<Vec<u8>, FileReadError> {
            if self.readable {
                Ok(self.bytes.clone())
            } else {
                Err(FileReadError::Unavailable(self.name.clone()))
            }
        }
    }
}
