use notify::{Event, EventKind};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Watches the config file for changes and sends a notification on every write.
///
/// The parent directory is watched rather than the file itself, so a config
/// created after launch (or replaced by an editor's atomic rename) is still
/// picked up.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// use swatch_config::ConfigWatcher;
///
/// let (_watcher, mut rx) = ConfigWatcher::spawn(swatch_config::default_path());
/// while rx.recv().await.is_some() {
///     println!("config changed — reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.  Must be called inside a Tokio runtime.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    // A first run may have no config directory yet; create it so a config
    // written later is still seen.
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("Cannot create '{}': {e}; live reload disabled", dir.display());
        return;
    }

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Cannot watch '{}': {e}; live reload disabled", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) if is_config_change(&e, &path) => {
                // A full channel means a reload is already pending.
                if let Err(mpsc::error::TrySendError::Closed(())) = tx.try_send(()) {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

/// `true` when `event` writes, creates or renames onto `path`.
fn is_config_change(event: &Event, path: &Path) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event.paths.iter().any(|p| p.file_name() == path.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    fn event(kind: EventKind, file: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from("/cfg").join(file))
    }

    #[test]
    fn writes_to_the_config_file_count() {
        let path = Path::new("/cfg/swatch.toml");
        assert!(is_config_change(&event(EventKind::Modify(ModifyKind::Any), "swatch.toml"), path));
        assert!(is_config_change(&event(EventKind::Create(CreateKind::File), "swatch.toml"), path));
    }

    #[test]
    fn other_files_and_removals_are_ignored() {
        let path = Path::new("/cfg/swatch.toml");
        assert!(!is_config_change(&event(EventKind::Modify(ModifyKind::Any), "other.toml"), path));
        assert!(!is_config_change(&event(EventKind::Remove(RemoveKind::File), "swatch.toml"), path));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn config_created_in_missing_directory_is_reported() {
        use std::time::Duration;
        use tokio::time::{sleep, timeout};

        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("swatch");
        let path = dir.join("swatch.toml");

        let (_watcher, mut rx) = ConfigWatcher::spawn(&path);

        // The watcher creates the directory before it starts watching.
        for _ in 0..50 {
            if dir.is_dir() {
                break;
            }
            sleep(Duration::from_millis(20)).await;
        }
        assert!(dir.is_dir());

        let mut seen = false;
        for attempt in 0..10 {
            std::fs::write(&path, format!("# write {attempt}\n")).unwrap();
            match timeout(Duration::from_millis(500), rx.recv()).await {
                Ok(Some(())) => {
                    seen = true;
                    break;
                }
                Ok(None) => panic!("watcher stopped"),
                Err(_) => {}
            }
        }
        assert!(seen);
    }
}
