//! Shared test fixtures: temp dirs, a recording `SystemOps` fake, and a tiny
//! HTTP server for asset downloads.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::error::SystemError;
use crate::system::SystemOps;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "waaaybar-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Snapshot a directory tree as `relative path -> bytes` for equality checks.
pub fn read_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    fn walk(base: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
        for entry in fs::read_dir(dir).expect("read_dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                let rel = path
                    .strip_prefix(base)
                    .expect("child of base")
                    .to_string_lossy()
                    .into_owned();
                out.insert(rel, fs::read(&path).expect("read file"));
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

// ---------------------------------------------------------------------------
// FakeSystem
// ---------------------------------------------------------------------------

/// One recorded [`SystemOps`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemCall {
    Privileged(String, Vec<String>),
    Terminate(String),
    Spawn(String),
    Sleep(Duration),
}

/// Recording [`SystemOps`] double; never spawns a process.
#[derive(Debug, Default)]
pub struct FakeSystem {
    executables: RefCell<BTreeSet<String>>,
    calls: RefCell<Vec<SystemCall>>,
    /// Exit code returned by `run_privileged`; `None` means success.
    privileged_exit: Option<i32>,
    /// When set, a successful privileged install makes this binary visible.
    install_provides: Option<String>,
}

impl FakeSystem {
    pub fn with_executables(names: &[&str]) -> Self {
        Self {
            executables: RefCell::new(names.iter().map(|name| name.to_string()).collect()),
            ..Self::default()
        }
    }

    /// Make `run_privileged` fail with `code`.
    pub fn failing_install(mut self, code: i32) -> Self {
        self.privileged_exit = Some(code);
        self
    }

    /// Make a successful privileged install put `binary` on PATH.
    pub fn installing(mut self, binary: &str) -> Self {
        self.install_provides = Some(binary.to_string());
        self
    }

    pub fn calls(&self) -> Vec<SystemCall> {
        self.calls.borrow().clone()
    }
}

impl SystemOps for FakeSystem {
    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        self.executables
            .borrow()
            .contains(name)
            .then(|| PathBuf::from("/usr/bin").join(name))
    }

    fn run_privileged(&self, program: &str, args: &[String]) -> Result<(), SystemError> {
        self.calls
            .borrow_mut()
            .push(SystemCall::Privileged(program.to_string(), args.to_vec()));
        if let Some(code) = self.privileged_exit {
            return Err(SystemError::Exit {
                program: program.to_string(),
                code: Some(code),
            });
        }
        if let Some(binary) = &self.install_provides {
            self.executables.borrow_mut().insert(binary.clone());
        }
        Ok(())
    }

    fn terminate_by_name(&self, name: &str) -> Result<(), SystemError> {
        self.calls
            .borrow_mut()
            .push(SystemCall::Terminate(name.to_string()));
        Ok(())
    }

    fn spawn_detached(&self, program: &str) -> Result<(), SystemError> {
        self.calls
            .borrow_mut()
            .push(SystemCall::Spawn(program.to_string()));
        Ok(())
    }

    fn sleep(&self, duration: Duration) {
        self.calls.borrow_mut().push(SystemCall::Sleep(duration));
    }
}

// ---------------------------------------------------------------------------
// Asset server
// ---------------------------------------------------------------------------

/// Canned response for one request path.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub body: &'static str,
}

/// Serve `routes` on a loopback port for `connections` requests.
///
/// Unknown paths answer 404. Returns the base URL and the server task.
pub async fn serve_routes(routes: Vec<Route>, connections: usize) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        for _ in 0..connections {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut buf = [0u8; 4096];
            let read = stream.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..read]);
            let path = request
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or("/")
                .to_string();
            let (status, body) = routes
                .iter()
                .find(|route| route.path == path)
                .map(|route| (route.status, route.body))
                .unwrap_or((404, "not found"));
            let response = format!(
                "HTTP/1.1 {status} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    (format!("http://{addr}"), handle)
}
