use crate::core::{Operation, ResultDisplay};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Prints replies on stdout, one JSON document per line or container write.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDisplay;

impl ResultDisplay for ConsoleDisplay {
    fn log(&self, operation: Operation, response: &serde_json::Value) {
        tracing::info!("📨 {}: {}", operation, response);
        println!("{}", response);
    }

    fn render(&self, container: &str, content: &str) -> Result<()> {
        tracing::debug!("🖥️ Rendering {} ({} bytes)", container, content.len());
        println!("{}", content);
        Ok(())
    }
}

/// Writes each container to `<base_path>/<container>.txt`, replacing what was there.
#[derive(Debug, Clone)]
pub struct FileDisplay {
    base_path: String,
}

impl FileDisplay {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn container_path(&self, container: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.txt", container))
    }
}

impl ResultDisplay for FileDisplay {
    fn log(&self, operation: Operation, response: &serde_json::Value) {
        tracing::info!("📨 {}: {}", operation, response);
    }

    fn render(&self, container: &str, content: &str) -> Result<()> {
        let full_path = self.container_path(container);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, content)?;
        tracing::info!("📁 {} written to {}", container, full_path.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Captured {
    logged: Vec<(Operation, serde_json::Value)>,
    containers: HashMap<String, String>,
}

/// Keeps everything in memory. Clones share the same buffers.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    captured: Arc<Mutex<Captured>>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_captured<T>(&self, f: impl FnOnce(&mut Captured) -> T) -> T {
        let mut captured = self.captured.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut captured)
    }

    pub fn logged(&self) -> Vec<(Operation, serde_json::Value)> {
        self.with_captured(|c| c.logged.clone())
    }

    pub fn container(&self, container: &str) -> Option<String> {
        self.with_captured(|c| c.containers.get(container).cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.with_captured(|c| c.logged.is_empty() && c.containers.is_empty())
    }
}

impl ResultDisplay for MemoryDisplay {
    fn log(&self, operation: Operation, response: &serde_json::Value) {
        self.with_captured(|c| c.logged.push((operation, response.clone())));
    }

    fn render(&self, container: &str, content: &str) -> Result<()> {
        self.with_captured(|c| {
            c.containers
                .insert(container.to_string(), content.to_string())
        });
        Ok(())
    }
}
