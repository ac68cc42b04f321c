//! Fixtures shared by the integration suites.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use waaaybar::error::SystemError;
use waaaybar::system::SystemOps;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique scratch directory removed on drop.
pub struct Scratch {
    path: PathBuf,
}

impl Scratch {
    pub fn new(prefix: &str) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let path = std::env::temp_dir().join(format!(
            "waaaybar-it-{prefix}-{}-{millis}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Host double: a fixed set of binaries on PATH plus a log of actions.
#[derive(Default)]
pub struct ScriptedHost {
    on_path: RefCell<BTreeSet<String>>,
    log: RefCell<Vec<String>>,
}

impl ScriptedHost {
    pub fn with_path(names: &[&str]) -> Self {
        Self {
            on_path: RefCell::new(names.iter().map(|name| name.to_string()).collect()),
            log: RefCell::new(Vec::new()),
        }
    }

    pub fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl SystemOps for ScriptedHost {
    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        self.on_path
            .borrow()
            .contains(name)
            .then(|| PathBuf::from("/usr/bin").join(name))
    }

    fn run_privileged(&self, program: &str, args: &[String]) -> Result<(), SystemError> {
        self.log
            .borrow_mut()
            .push(format!("sudo {program} {}", args.join(" ")));
        if let Some(package) = args.last() {
            self.on_path.borrow_mut().insert(package.clone());
        }
        Ok(())
    }

    fn terminate_by_name(&self, name: &str) -> Result<(), SystemError> {
        self.log.borrow_mut().push(format!("pkill {name}"));
        Ok(())
    }

    fn spawn_detached(&self, program: &str) -> Result<(), SystemError> {
        self.log.borrow_mut().push(format!("spawn {program}"));
        Ok(())
    }

    fn sleep(&self, duration: Duration) {
        self.log
            .borrow_mut()
            .push(format!("sleep {}ms", duration.as_millis()));
    }
}

/// Serve `(path, status, body)` triples for `connections` requests; other
/// paths answer 404.
pub async fn serve(
    routes: Vec<(&'static str, u16, &'static str)>,
    connections: usize,
) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let base = format!("http://{}", listener.local_addr().expect("addr"));
    let handle = tokio::spawn(async move {
        for _ in 0..connections {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut buf = [0u8; 4096];
            let n = stream.read(&mut buf).await.unwrap_or(0);
            let head = String::from_utf8_lossy(&buf[..n]);
            let path = head
                .split_whitespace()
                .nth(1)
                .unwrap_or("/")
                .to_string();
            let (status, body) = routes
                .iter()
                .find(|(p, _, _)| *p == path)
                .map(|(_, status, body)| (*status, *body))
                .unwrap_or((404, "missing"));
            let response = format!(
                "HTTP/1.1 {status} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    (base, handle)
}
